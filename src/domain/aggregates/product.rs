//! Product Aggregate

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use crate::domain::value_objects::{Money, ProductId, Quantity};
use crate::{CommerceError, Result};

/// A catalog entry. Only the stock level changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: Quantity,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self { id, name: name.into(), price, stock: Quantity::new(stock) }
    }

    pub fn id(&self) -> ProductId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> Money { self.price }
    pub fn stock(&self) -> u32 { self.stock.value() }
    pub fn is_in_stock(&self) -> bool { !self.stock.is_zero() }

    /// Decrements stock by `quantity`, refusing to go below zero.
    pub fn update_stock(&mut self, quantity: u32) -> Result<()> {
        self.stock = self.stock.subtract(quantity).ok_or_else(|| {
            warn!(product_id = self.id, requested = quantity, available = self.stock.value(), "stock decrement refused");
            CommerceError::InsufficientStock { product: self.name.clone(), requested: quantity, available: self.stock.value() }
        })?;
        info!(product_id = self.id, quantity, remaining = self.stock.value(), "stock decremented");
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - Stock: {}", self.name, self.price, self.stock)
    }
}
