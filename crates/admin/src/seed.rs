//! Default collections written on first load and after a reset.
//!
//! The timestamp is fixed so reloading the seeds yields identical records.

use chrono::{DateTime, Utc};
use pugil_core::{Order, OrderId, OrderStatus, PLACEHOLDER_IMAGE, Product, ProductId};
use rust_decimal::Decimal;

/// Creation time stamped on every seed record (2025-01-01T00:00:00Z).
#[must_use]
pub fn seed_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default()
}

fn seed_product(id: &str, name: &str, description: &str, price: Decimal, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        original_price: None,
        category: category.to_owned(),
        image_url: PLACEHOLDER_IMAGE.to_owned(),
        colors: std::collections::BTreeSet::new(),
        sizes: std::collections::BTreeSet::new(),
        created_at: seed_timestamp(),
    }
}

#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        seed_product(
            "prod_1",
            "Sapatos de Corrida",
            "Sapatos leves e confortáveis para corrida",
            Decimal::new(8999, 2),
            "calçados",
        ),
        seed_product(
            "prod_2",
            "Camiseta Sports",
            "Camiseta respirável para prática esportiva",
            Decimal::new(2999, 2),
            "roupas",
        ),
    ]
}

#[must_use]
pub fn seed_orders() -> Vec<Order> {
    vec![Order {
        id: OrderId::new("ord_1"),
        status: OrderStatus::Completed,
        total_amount: Decimal::new(11998, 2),
        created_at: seed_timestamp(),
        payment_method: "card".to_owned(),
        shipping_method: "Entrega Padrão".to_owned(),
        shipping_days: "3-5 dias úteis".to_owned(),
        user_id: None,
        delivery_code: None,
        personal_info: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_are_deterministic() {
        assert_eq!(seed_products(), seed_products());
        assert_eq!(seed_orders(), seed_orders());
        assert_eq!(seed_timestamp().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_seed_contents() {
        let products = seed_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].display_price(), "€89.99");
        assert_eq!(products[1].category, "roupas");

        let orders = seed_orders();
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[0].display_total(), "€119.98");
        assert!(orders[0].delivery_code.is_none());
    }
}
