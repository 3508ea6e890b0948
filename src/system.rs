use std::fmt;
use tracing::{debug, info};
use crate::domain::aggregates::{Customer, Order};
use crate::domain::value_objects::{CustomerId, OrderId, ProductId};
use crate::inventory::Inventory;
use crate::{CommerceError, Result};

/// Top-level facade: owns the catalog, the customers and the orders, and hands
/// out order numbers.
///
/// Not synchronised. Stock is checked and then decremented in two steps, so a
/// multi-threaded host must put the whole system behind one lock.
#[derive(Debug)]
pub struct ECommerceSystem {
    inventory: Inventory,
    customers: Vec<Customer>,
    orders: Vec<Order>,
    next_order_id: OrderId,
}

impl ECommerceSystem {
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            customers: Vec::new(),
            orders: Vec::new(),
            next_order_id: 1,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Ids are not checked for uniqueness; the first match wins on lookup.
    pub fn add_customer(&mut self, customer: Customer) {
        debug!(customer_id = customer.id(), "customer added");
        self.customers.push(customer);
    }

    pub fn find_customer_by_id(&self, customer_id: CustomerId) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id() == customer_id)
            .ok_or(CommerceError::CustomerNotFound(customer_id))
    }

    /// Opens a new pending order for an existing customer.
    ///
    /// The order number is only consumed when the customer exists.
    pub fn create_order(&mut self, customer_id: CustomerId) -> Result<&mut Order> {
        let customer = self.find_customer_by_id(customer_id)?.clone();
        let order_id = self.next_order_id;
        self.next_order_id += 1;
        info!(order_id, customer_id, "order created");
        self.orders.push(Order::new(order_id, customer));
        let order = self.orders.last_mut().ok_or(CommerceError::OrderNotFound(order_id))?;
        Ok(order)
    }

    pub fn find_order_by_id(&self, order_id: OrderId) -> Result<&Order> {
        self.orders
            .iter()
            .find(|o| o.id() == order_id)
            .ok_or(CommerceError::OrderNotFound(order_id))
    }

    pub fn find_order_by_id_mut(&mut self, order_id: OrderId) -> Result<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id() == order_id)
            .ok_or(CommerceError::OrderNotFound(order_id))
    }

    /// Looks up both sides and runs [`Order::add_item`].
    pub fn add_item_to_order(&mut self, order_id: OrderId, product_id: ProductId, quantity: u32) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id() == order_id)
            .ok_or(CommerceError::OrderNotFound(order_id))?;
        let product = self.inventory.find_product_by_id_mut(product_id)?;
        order.add_item(product, quantity)
    }

    pub fn get_order_summary(&self, order_id: OrderId) -> Result<String> {
        self.find_order_by_id(order_id).map(ToString::to_string)
    }
}

impl Default for ECommerceSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ECommerceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ECommerce System with {} customers, {} products, and {} orders.",
            self.customers.len(),
            self.inventory.len(),
            self.orders.len()
        )
    }
}
