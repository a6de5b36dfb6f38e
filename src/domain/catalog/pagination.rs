/// Page navigation state. `current_page` is 1-based.
///
/// Invariant: after every transition `1 <= current_page <= max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    items_per_page: u32,
    total_items: u32,
}

impl PageState {
    pub fn new(items_per_page: u32) -> Self {
        assert!(items_per_page > 0, "items_per_page must be positive");
        Self { current_page: 1, items_per_page, total_items: 0 }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Offset of the first row of the current page.
    pub fn skip(&self) -> u32 {
        (self.current_page - 1) * self.items_per_page
    }

    /// Move to `page` iff it is inside `[1, total_pages]`, otherwise a silent
    /// no-op. Returns whether the page actually changed; an accepted change
    /// is the sole trigger for a re-fetch.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total_pages() && page != self.current_page {
            self.current_page = page;
            return true;
        }
        false
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        // current_page is at least 1, so this cannot underflow; page 0 is rejected
        self.go_to_page(self.current_page - 1)
    }

    /// Back to page 1 unconditionally, used when the search term changes.
    pub fn reset_to_first(&mut self) {
        self.current_page = 1;
    }

    /// Update the server-side match count and re-derive `total_pages`.
    ///
    /// When the count shrinks below the current position, `current_page` is
    /// clamped down to the last page (or 1 when there are no pages at all).
    pub fn set_total_items(&mut self, total: u32) {
        self.total_items = total;
        let pages = self.total_pages();
        if self.current_page > pages {
            self.current_page = pages.max(1);
        }
    }
}
