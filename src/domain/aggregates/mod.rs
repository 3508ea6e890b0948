//! Aggregates module
pub mod product;
pub mod customer;
pub mod order_item;
pub mod order;

pub use product::Product;
pub use customer::Customer;
pub use order_item::OrderItem;
pub use order::{Order, OrderStatus, OrderSummary};
