//! Customer Aggregate

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::value_objects::CustomerId;

/// Identity record for a buyer. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id, name: name.into(), email: email.into() }
    }

    pub fn id(&self) -> CustomerId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_display() {
        let c = Customer::new(1, "Alice", "alice@example.com");
        assert_eq!(c.id(), 1);
        assert_eq!(c.email(), "alice@example.com");
        assert_eq!(c.to_string(), "Alice (alice@example.com)");
    }
}
