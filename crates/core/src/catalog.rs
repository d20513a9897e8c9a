use crate::domain::product::{Product, ProductId};

/// Read-only product source the scorers iterate. The storefront's data
/// layer implements this; the engine never fetches or paginates.
pub trait CatalogProvider: Send + Sync {
    fn products(&self) -> &[Product];

    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|product| &product.id == id)
    }
}

/// Catalog backed by a plain vector, loaded once by the caller.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{PreferenceFlags, Product, ProductId};

    use super::{CatalogProvider, InMemoryCatalog};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: format!("{id} product"),
            brand: "Dewlab".to_string(),
            category: "serum".to_string(),
            description: String::new(),
            price: Decimal::from(20),
            rating: 4.0,
            review_count: 10,
            size: None,
            size_unit: None,
            concerns: Vec::new(),
            key_ingredients: Vec::new(),
            active_ingredients: Vec::new(),
            skin_types: Vec::new(),
            preferences: PreferenceFlags::default(),
            in_stock: true,
        }
    }

    #[test]
    fn looks_up_products_by_id() {
        let catalog = InMemoryCatalog::new(vec![product("a"), product("b")]);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.product(&ProductId("b".to_string())).is_some());
        assert!(catalog.product(&ProductId("missing".to_string())).is_none());
    }
}
