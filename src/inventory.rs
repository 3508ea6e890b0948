use tracing::debug;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::ProductId;
use crate::{CommerceError, Result};

/// In-memory product catalog.
///
/// Append-only. Ids are not checked for uniqueness; lookups return the first
/// product added with a given id.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = product.id(), name = product.name(), stock = product.stock(), "product added");
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One line per product, in insertion order.
    pub fn list_products(&self) -> String {
        self.products.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }

    pub fn find_product_by_id(&self, product_id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id() == product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))
    }

    pub fn find_product_by_id_mut(&mut self, product_id: ProductId) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Money;
    use rust_decimal::Decimal;

    fn catalog() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_product(Product::new(1, "Laptop", Money::new(Decimal::new(1200, 0)), 10));
        inventory.add_product(Product::new(2, "Smartphone", Money::new(Decimal::new(800, 0)), 15));
        inventory
    }

    #[test]
    fn test_find_product() {
        let inventory = catalog();
        assert_eq!(inventory.find_product_by_id(2).unwrap().name(), "Smartphone");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_missing_product() {
        let err = catalog().find_product_by_id(99).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(99)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_ids_accepted_first_wins() {
        let mut inventory = catalog();
        inventory.add_product(Product::new(1, "Laptop Pro", Money::new(Decimal::new(2000, 0)), 1));
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.find_product_by_id(1).unwrap().name(), "Laptop");
    }

    #[test]
    fn test_stock_change_through_mut_lookup() {
        let mut inventory = catalog();
        inventory.find_product_by_id_mut(1).unwrap().update_stock(4).unwrap();
        assert_eq!(inventory.find_product_by_id(1).unwrap().stock(), 6);
    }

    #[test]
    fn test_list_products() {
        assert_eq!(
            catalog().list_products(),
            "Laptop ($1200.00) - Stock: 10\nSmartphone ($800.00) - Stock: 15"
        );
        assert_eq!(Inventory::new().list_products(), "");
    }
}
