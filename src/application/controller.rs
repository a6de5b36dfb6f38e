use crate::domain::catalog::{
    CatalogGateway, CatalogPage, PageState, Product, ProductId, SearchTerm, SelectionSet,
};
use crate::domain::chart::{ChartSeries, project_prices};
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};

/// Fixed page size of the catalog search endpoint.
pub const ITEMS_PER_PAGE: u32 = 10;

/// Number of rows auto-selected after every successful fetch.
pub const AUTO_PREVIEW_COUNT: usize = 5;

/// One issued fetch, tagged with a monotonically increasing sequence number
/// so that a completion arriving after a newer request has been issued can be
/// recognised as stale and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub term: SearchTerm,
    pub skip: u32,
    pub limit: u32,
}

/// Stateful controller behind the product table and its chart.
///
/// Owns the search term, page state, fetched rows, selection and loading
/// flag. It performs no I/O itself: accepted term/page changes hand out a
/// [`FetchRequest`] ticket, and the caller folds the eventual outcome back in
/// through [`apply_success`](Self::apply_success) /
/// [`apply_failure`](Self::apply_failure). Only the outcome matching the most
/// recently issued ticket may mutate state.
#[derive(Debug, Clone)]
pub struct CatalogController {
    search_term: SearchTerm,
    page: PageState,
    rows: Vec<Product>,
    selection: SelectionSet,
    loading: bool,
    latest_seq: u64,
    last_error: Option<String>,
}

impl CatalogController {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            search_term: SearchTerm::default(),
            page: PageState::new(items_per_page),
            rows: Vec::new(),
            selection: SelectionSet::new(),
            loading: false,
            latest_seq: 0,
            last_error: None,
        }
    }

    /// Ticket for the very first fetch: the empty match-all query, page 1.
    pub fn initial_request(&mut self) -> FetchRequest {
        self.issue_request()
    }

    /// Change the search term. A changed term resets navigation to page 1
    /// and issues a fetch; re-submitting the current term issues nothing.
    pub fn set_search_term(&mut self, term: SearchTerm) -> Option<FetchRequest> {
        if term == self.search_term {
            return None;
        }
        self.search_term = term;
        self.page.reset_to_first();
        Some(self.issue_request())
    }

    /// Navigate to `page`; out-of-range targets are silently ignored.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchRequest> {
        self.page.go_to_page(page).then(|| self.issue_request())
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.page.next().then(|| self.issue_request())
    }

    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        self.page.previous().then(|| self.issue_request())
    }

    fn issue_request(&mut self) -> FetchRequest {
        self.latest_seq += 1;
        self.loading = true;
        get_logger().debug(
            LogComponent::Application("Controller"),
            &format!(
                "Issuing fetch #{} (term: {:?}, skip: {})",
                self.latest_seq,
                self.search_term.value(),
                self.page.skip()
            ),
        );
        FetchRequest {
            seq: self.latest_seq,
            term: self.search_term.clone(),
            skip: self.page.skip(),
            limit: self.page.items_per_page(),
        }
    }

    /// Reconcile a successful fetch. Stale completions (a newer ticket has
    /// been issued since) are discarded without touching any state.
    ///
    /// The fetched rows replace the previous page wholesale, the server-side
    /// total re-derives the page count, and the selection is reseeded with
    /// the first [`AUTO_PREVIEW_COUNT`] rows (fewer when the page is short).
    pub fn apply_success(&mut self, seq: u64, page: CatalogPage) {
        if seq != self.latest_seq {
            get_logger().debug(
                LogComponent::Application("Controller"),
                &format!("Discarding stale response #{} (latest is #{})", seq, self.latest_seq),
            );
            return;
        }
        self.page.set_total_items(page.total);
        let preview: Vec<Product> =
            page.products.iter().take(AUTO_PREVIEW_COUNT).cloned().collect();
        self.selection.seed(&preview);
        self.rows = page.products;
        self.loading = false;
        self.last_error = None;
        get_logger().info(
            LogComponent::Application("Controller"),
            &format!(
                "Fetch #{} reconciled: {} rows, {} total, {} preselected",
                seq,
                self.rows.len(),
                self.page.total_items(),
                self.selection.len()
            ),
        );
    }

    /// Record a failed fetch. The previous rows and selection stay visible;
    /// only the loading flag clears and a user-facing message is kept.
    pub fn apply_failure(&mut self, seq: u64, error: AppError) {
        if seq != self.latest_seq {
            return;
        }
        self.loading = false;
        self.last_error = Some(error.to_string());
        get_logger().error(
            LogComponent::Application("Controller"),
            &format!("Fetch #{} failed: {}", seq, error),
        );
    }

    pub fn toggle_selection(&mut self, product: &Product) {
        self.selection.toggle(product);
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selection.contains(id)
    }

    /// Series for the bar chart, in selection order.
    pub fn chart_series(&self) -> ChartSeries {
        project_prices(self.selection.iter())
    }

    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search_term
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> u32 {
        self.page.current_page()
    }

    pub fn items_per_page(&self) -> u32 {
        self.page.items_per_page()
    }

    pub fn total_items(&self) -> u32 {
        self.page.total_items()
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

/// Run one issued ticket against the gateway. The caller folds the outcome
/// back into the controller, which decides whether it is still current.
pub async fn dispatch_fetch<G: CatalogGateway + ?Sized>(
    gateway: &G,
    request: &FetchRequest,
) -> NetworkResult<CatalogPage> {
    gateway.search(&request.term, request.skip, request.limit).await
}
