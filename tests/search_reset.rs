use catalog_table_wasm::application::CatalogController;
use catalog_table_wasm::domain::catalog::{CatalogPage, Product, ProductId, SearchTerm};

fn make_products(count: u32) -> Vec<Product> {
    (1..=count)
        .map(|id| Product::new(ProductId::from(id), format!("Item {id}"), "Acme", id as f64, 4.0))
        .collect()
}

#[test]
fn new_term_restarts_from_page_one() {
    let mut controller = CatalogController::new(10);
    let request = controller.initial_request();
    controller.apply_success(request.seq, CatalogPage { products: make_products(10), total: 47 });

    let request = controller.go_to_page(3).expect("page 3 is in range");
    controller.apply_success(request.seq, CatalogPage { products: make_products(10), total: 47 });
    assert_eq!(controller.current_page(), 3);

    let request = controller.set_search_term(SearchTerm::from("phone")).unwrap();
    assert_eq!(controller.current_page(), 1);
    assert_eq!(request.skip, 0);
    assert_eq!(request.term, SearchTerm::from("phone"));
}

#[test]
fn clearing_the_term_is_a_regular_search() {
    let mut controller = CatalogController::new(10);
    let request = controller.initial_request();
    controller.apply_success(request.seq, CatalogPage { products: make_products(10), total: 47 });

    let request = controller.set_search_term(SearchTerm::from("phone")).unwrap();
    controller.apply_success(request.seq, CatalogPage { products: make_products(8), total: 8 });

    let request = controller.set_search_term(SearchTerm::default()).expect("term changed");
    assert!(request.term.is_empty());
    assert_eq!(request.skip, 0);
    assert!(controller.loading());
}
