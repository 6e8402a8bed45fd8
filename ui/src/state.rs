use payloads::{Product, ProductId};
use yewdux::prelude::*;

/// Global application state: the shared product collection.
///
/// The collection is the single source of truth for every view. Pages
/// keep local editable copies of individual records and re-derive them
/// from here whenever the collection changes.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub products: Vec<Product>,
    /// True once the collection has been seeded from storage.
    pub loaded: bool,
}

impl State {
    /// Resolve a product by id. First exact match wins; duplicate ids
    /// are not guarded against.
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.loaded = true;
    }

    /// Replace the stored record carrying the same id. Returns false
    /// when no record matches.
    pub fn update_product(&mut self, updated: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::new(),
            image: None,
            name: name.to_string(),
            description: None,
            value: None,
            height: None,
            width: None,
            length: None,
            weight: None,
            code: None,
            acquisition: None,
            category: Vec::new(),
        }
    }

    #[test]
    fn test_get_product() {
        let mut state = State::default();
        let a = product("a");
        let b = product("b");
        let b_id = b.id;
        state.set_products(vec![a, b]);

        assert_eq!(state.get_product(b_id).unwrap().name, "b");
        assert!(state.get_product(ProductId::new()).is_none());
    }

    #[test]
    fn test_update_product_replaces_matching_record() {
        let mut state = State::default();
        let a = product("a");
        let b = product("b");
        let a_id = a.id;
        state.set_products(vec![a, b]);

        let mut updated = product("renamed");
        updated.id = a_id;
        assert!(state.update_product(updated));

        assert_eq!(state.products.len(), 2);
        assert_eq!(state.get_product(a_id).unwrap().name, "renamed");
        assert_eq!(state.products[1].name, "b");
    }

    #[test]
    fn test_update_product_with_unknown_id_is_dropped() {
        let mut state = State::default();
        state.set_products(vec![product("a")]);

        assert!(!state.update_product(product("stranger")));
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].name, "a");
    }

    #[test]
    fn test_add_product_appends() {
        let mut state = State::default();
        state.set_products(Vec::new());
        state.add_product(product("first"));
        state.add_product(product("second"));
        assert_eq!(state.products[1].name, "second");
    }
}
