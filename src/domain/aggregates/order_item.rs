//! Order line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use crate::domain::aggregates::Product;
use crate::domain::value_objects::{Money, ProductId};
use crate::{CommerceError, Result};

/// One product line in an order.
///
/// Holds the product's id, name and unit price as they were when the item was
/// created; these never change on a [`Product`], so the snapshot stays in sync.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    quantity: u32,
    subtotal: Money,
}

impl OrderItem {
    /// Validates `quantity` against the product's current stock and prices the line.
    pub fn new(product: &Product, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > product.stock() {
            warn!(product_id = product.id(), requested = quantity, available = product.stock(), "not enough stock for item");
            return Err(CommerceError::InsufficientStock {
                product: product.name().to_string(),
                requested: quantity,
                available: product.stock(),
            });
        }
        let subtotal = product.price().multiply(quantity);
        debug!(product_id = product.id(), quantity, %subtotal, "order item created");
        Ok(Self {
            product_id: product.id(),
            product_name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            subtotal,
        })
    }

    pub fn product_id(&self) -> ProductId { self.product_id }
    pub fn product_name(&self) -> &str { &self.product_name }
    pub fn unit_price(&self) -> Money { self.unit_price }
    pub fn quantity(&self) -> u32 { self.quantity }
    pub fn subtotal(&self) -> Money { self.subtotal }

    /// Reduces the subtotal by `percent`. Only `0 < percent < 100` has any
    /// effect; anything else is ignored without error.
    pub fn apply_discount(&mut self, percent: Decimal) {
        if percent <= Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
            warn!(product_id = self.product_id, %percent, "discount outside (0, 100) ignored");
            return;
        }
        self.subtotal = self.subtotal - self.subtotal.percent_of(percent);
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {}", self.product_name, self.quantity, self.subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(stock: u32) -> Product { Product::new(1, "Laptop", Money::new(Decimal::new(1200, 0)), stock) }

    #[test]
    fn test_item_subtotal() {
        let item = OrderItem::new(&laptop(10), 2).unwrap();
        assert_eq!(item.subtotal().amount(), Decimal::new(2400, 0));
        assert_eq!(item.unit_price().amount(), Decimal::new(1200, 0));
        assert_eq!(item.product_id(), 1);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = OrderItem::new(&laptop(10), 0).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidQuantity(0)));
    }

    #[test]
    fn test_quantity_above_stock_rejected() {
        let err = OrderItem::new(&laptop(3), 4).unwrap_err();
        assert!(matches!(err, CommerceError::InsufficientStock { requested: 4, available: 3, .. }));
        // Exactly the stock on hand is fine.
        assert!(OrderItem::new(&laptop(3), 3).is_ok());
    }

    #[test]
    fn test_construction_does_not_touch_stock() {
        let product = laptop(5);
        OrderItem::new(&product, 5).unwrap();
        assert_eq!(product.stock(), 5);
    }

    #[test]
    fn test_discount_halves() {
        let mut item = OrderItem::new(&laptop(10), 1).unwrap();
        item.apply_discount(Decimal::new(50, 0));
        assert_eq!(item.subtotal().amount(), Decimal::new(600, 0));
    }

    #[test]
    fn test_discount_boundaries_ignored() {
        let mut item = OrderItem::new(&laptop(10), 1).unwrap();
        for percent in [Decimal::ZERO, Decimal::ONE_HUNDRED, Decimal::new(-5, 0), Decimal::new(150, 0)] {
            item.apply_discount(percent);
            assert_eq!(item.subtotal().amount(), Decimal::new(1200, 0));
        }
    }

    #[test]
    fn test_discounts_compound_and_never_go_negative() {
        let mut item = OrderItem::new(&laptop(10), 1).unwrap();
        let full = item.unit_price().multiply(item.quantity());
        for _ in 0..5 {
            item.apply_discount(Decimal::new(999, 1));
            assert!(item.subtotal() >= Money::ZERO);
            assert!(item.subtotal() <= full);
        }
    }

    #[test]
    fn test_display() {
        let mut item = OrderItem::new(&laptop(10), 1).unwrap();
        item.apply_discount(Decimal::TEN);
        assert_eq!(item.to_string(), "Laptop x 1 = $1080.00");
    }
}
