//! OpenSASE Storefront - walkthrough of a single order

use anyhow::Result;
use opensase_storefront::config::{DemoConfig, SummaryFormat};
use opensase_storefront::{Customer, ECommerceSystem, Money, Product};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = DemoConfig::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut system = ECommerceSystem::new();
    system.inventory_mut().add_product(Product::new(1, "Laptop", Money::new(Decimal::new(120000, 2)), 10));
    system.inventory_mut().add_product(Product::new(2, "Smartphone", Money::new(Decimal::new(80000, 2)), 15));
    system.add_customer(Customer::new(1, "Alice", "alice@example.com"));

    let order_id = system.create_order(1)?.id();
    system.add_item_to_order(order_id, 1, 1)?;
    system.add_item_to_order(order_id, 2, 2)?;

    let order = system.find_order_by_id_mut(order_id)?;
    order.apply_order_discount(Decimal::TEN);
    order.mark_as_paid();

    tracing::info!(%system, "demo complete");
    match config.summary_format {
        SummaryFormat::Text => println!("{}", system.get_order_summary(order_id)?),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&system.find_order_by_id(order_id)?.summary())?),
    }
    Ok(())
}
