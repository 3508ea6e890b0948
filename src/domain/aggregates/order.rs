//! Order Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use crate::domain::aggregates::{Customer, OrderItem, Product};
use crate::domain::value_objects::{Money, OrderId};
use crate::Result;

/// Payment state of an order. `Paid` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Self::Pending => write!(f, "Pending"), Self::Paid => write!(f, "Paid") }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    items: Vec<OrderItem>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

/// Flattened, serializable view of an order and its derived totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub customer: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Order {
    /// 10%
    pub const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

    pub fn new(id: OrderId, customer: Customer) -> Self {
        Self { id, customer, items: vec![], status: OrderStatus::Pending, created_at: Utc::now() }
    }

    pub fn id(&self) -> OrderId { self.id }
    pub fn customer(&self) -> &Customer { &self.customer }
    pub fn items(&self) -> &[OrderItem] { &self.items }
    pub fn status(&self) -> OrderStatus { self.status }
    pub fn is_paid(&self) -> bool { self.status == OrderStatus::Paid }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    /// Builds the line against current stock, then takes the quantity out of stock.
    ///
    /// Both steps check stock; nothing is appended if either fails.
    pub fn add_item(&mut self, product: &mut Product, quantity: u32) -> Result<()> {
        let item = OrderItem::new(product, quantity)?;
        product.update_stock(quantity)?;
        info!(order_id = self.id, product_id = product.id(), quantity, "item added to order");
        self.items.push(item);
        Ok(())
    }

    pub fn calculate_subtotal(&self) -> Money { self.items.iter().map(OrderItem::subtotal).sum() }
    pub fn calculate_tax(&self) -> Money { self.calculate_subtotal().scale(Self::TAX_RATE) }
    pub fn calculate_total(&self) -> Money { self.calculate_subtotal() + self.calculate_tax() }

    /// Applies `percent` to every line independently, with the same
    /// out-of-range rule as [`OrderItem::apply_discount`].
    pub fn apply_order_discount(&mut self, percent: Decimal) {
        for item in &mut self.items { item.apply_discount(percent); }
        info!(order_id = self.id, %percent, subtotal = %self.calculate_subtotal(), "order discount applied");
    }

    pub fn mark_as_paid(&mut self) {
        if self.status != OrderStatus::Paid {
            self.status = OrderStatus::Paid;
            info!(order_id = self.id, "order marked as paid");
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            customer: self.customer.name().to_string(),
            status: self.status,
            items: self.items.clone(),
            subtotal: self.calculate_subtotal(),
            tax: self.calculate_tax(),
            total: self.calculate_total(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order #{} for {} [{}]", self.id, self.customer.name(), self.status)?;
        let lines: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        writeln!(f, "{}", lines.join("\n"))?;
        writeln!(f, "Subtotal: {}", self.calculate_subtotal())?;
        writeln!(f, "Tax: {}", self.calculate_tax())?;
        write!(f, "Total: {}", self.calculate_total())
    }
}
