use catalog_table_wasm::application::CatalogController;
use catalog_table_wasm::domain::catalog::{CatalogPage, Product, ProductId};
use catalog_table_wasm::domain::errors::AppError;

fn make_products(count: u32) -> Vec<Product> {
    (1..=count)
        .map(|id| Product::new(ProductId::from(id), format!("Item {id}"), "Acme", id as f64, 4.0))
        .collect()
}

#[test]
fn failure_keeps_previous_rows_and_selection_visible() {
    let mut controller = CatalogController::new(10);
    let request = controller.initial_request();
    let rows = make_products(10);
    controller.apply_success(request.seq, CatalogPage { products: rows.clone(), total: 47 });
    let selection_before = controller.selection().clone();

    let request = controller.go_to_page(2).expect("page 2 is in range");
    controller.apply_failure(request.seq, AppError::NetworkError("HTTP error: 502".into()));

    // no empty-table flash: last good page stays on screen
    assert_eq!(controller.rows(), &rows[..]);
    assert_eq!(controller.selection(), &selection_before);
    assert!(!controller.loading());
    assert_eq!(controller.last_error(), Some("Network Error: HTTP error: 502"));
}

#[test]
fn next_success_clears_the_error_message() {
    let mut controller = CatalogController::new(10);
    let request = controller.initial_request();
    controller.apply_failure(request.seq, AppError::NetworkError("timed out".into()));
    assert!(controller.last_error().is_some());

    let request = controller.set_search_term("phone".into()).unwrap();
    controller.apply_success(request.seq, CatalogPage { products: make_products(8), total: 8 });
    assert!(controller.last_error().is_none());
}

#[test]
fn failure_on_first_fetch_leaves_an_empty_table() {
    let mut controller = CatalogController::new(10);
    let request = controller.initial_request();
    controller.apply_failure(request.seq, AppError::NetworkError("offline".into()));

    assert!(controller.rows().is_empty());
    assert!(controller.selection().is_empty());
    assert!(!controller.loading());
}
