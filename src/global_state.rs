use crate::application::CatalogController;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub controller: RwSignal<CatalogController>,
    pub search_input: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        controller: create_rw_signal(CatalogController::default()),
        search_input: create_rw_signal(String::new()),
    })
}

crate::global_signals! {
    pub controller => controller: CatalogController,
    pub search_input => search_input: String,
}
