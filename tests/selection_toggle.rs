use catalog_table_wasm::domain::catalog::{Product, ProductId, SelectionSet};

fn make_product(id: u32) -> Product {
    Product::new(ProductId::from(id), format!("Item {id}"), "Acme", id as f64 * 10.0, 4.0)
}

#[test]
fn toggle_adds_then_removes() {
    let mut selection = SelectionSet::new();
    let product = make_product(7);

    selection.toggle(&product);
    assert!(selection.contains(product.id));
    assert_eq!(selection.len(), 1);

    selection.toggle(&product);
    assert!(!selection.contains(product.id));
    assert!(selection.is_empty());
}

#[test]
fn double_toggle_restores_original_membership() {
    let mut selection = SelectionSet::new();
    let seeded: Vec<Product> = (1..=3).map(make_product).collect();
    selection.seed(&seeded);
    let before = selection.clone();

    let inside = make_product(2);
    let outside = make_product(9);
    selection.toggle(&inside);
    selection.toggle(&inside);
    selection.toggle(&outside);
    selection.toggle(&outside);

    assert_eq!(selection, before);
}

#[test]
fn seed_replaces_the_whole_set() {
    let mut selection = SelectionSet::new();
    selection.toggle(&make_product(42));

    let fresh: Vec<Product> = (1..=5).map(make_product).collect();
    selection.seed(&fresh);

    assert_eq!(selection.len(), 5);
    assert!(!selection.contains(ProductId::from(42)));
    for product in &fresh {
        assert!(selection.contains(product.id));
    }
}

#[test]
fn selection_is_independent_of_displayed_rows() {
    // a product from a page that is no longer displayed can still be toggled
    let mut selection = SelectionSet::new();
    selection.seed(&(1..=5).map(make_product).collect::<Vec<_>>());

    let off_page = make_product(100);
    selection.toggle(&off_page);
    assert!(selection.contains(off_page.id));
    assert_eq!(selection.len(), 6);
}

#[test]
fn insertion_order_is_preserved() {
    let mut selection = SelectionSet::new();
    for id in [3, 1, 2] {
        selection.toggle(&make_product(id));
    }
    let order: Vec<u32> = selection.iter().map(|p| p.id.value()).collect();
    assert_eq!(order, vec![3, 1, 2]);
}
