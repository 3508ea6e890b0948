//! OpenSASE Storefront
//!
//! In-memory bookkeeping for a small shop.
//!
//! ## Features
//! - Product catalog with stock tracking
//! - Customer registry
//! - Orders with line items, discounts and 10% tax
//! - Sequential order numbering
//!
//! Everything is synchronous and single-owner. Hosts that share an
//! [`ECommerceSystem`] between threads must serialise access themselves.

pub mod config;
pub mod domain;
pub mod inventory;
pub mod system;

use thiserror::Error;

pub use domain::aggregates::{Customer, Order, OrderItem, OrderStatus, OrderSummary, Product};
pub use domain::value_objects::{CustomerId, Money, OrderId, ProductId, Quantity};
pub use inventory::Inventory;
pub use system::ECommerceSystem;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    #[error("Invalid quantity: {0}, must be positive")]
    InvalidQuantity(u32),

    #[error("Not enough stock for {product}: requested {requested}, available {available}")]
    InsufficientStock { product: String, requested: u32, available: u32 },

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),
}

impl CommerceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound(_) | Self::CustomerNotFound(_) | Self::OrderNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CommerceError>;
