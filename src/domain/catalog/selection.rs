use super::entities::Product;
use super::value_objects::ProductId;

/// Persistent set of selected products, keyed by id and kept in insertion
/// order (the order feeds the chart series).
///
/// Selection is independent of the displayed page: a product stays selected
/// after the table has paged away from it, and nothing here ever looks at
/// which page a product came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    products: Vec<Product>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the product when present, insert it otherwise.
    /// Two toggles of the same product restore the original membership.
    pub fn toggle(&mut self, product: &Product) {
        match self.products.iter().position(|p| p.id == product.id) {
            Some(index) => {
                self.products.remove(index);
            }
            None => self.products.push(product.clone()),
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// Replace the whole set. Only the controller's auto-preview policy
    /// calls this, right after a successful fetch.
    pub fn seed(&mut self, products: &[Product]) {
        self.products = products.to_vec();
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
