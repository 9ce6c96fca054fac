//! Orders placed through checkout and managed from the admin panel.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus, Price, UserId};

/// Shown in order tables when the buyer left no personal details.
pub const ANONYMOUS_CUSTOMER: &str = "Customer";

/// Buyer contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl PersonalInfo {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// Code the courier collects from the buyer to prove hand-off.
///
/// `Debug` is redacted so the code never lands in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryCode(String);

impl DeliveryCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Whether `input` matches this code, ignoring surrounding whitespace on
    /// both sides. A blank stored code matches nothing.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let stored = self.0.trim();
        !stored.is_empty() && stored == input.trim()
    }

    /// The code itself, for showing to the buyer.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for DeliveryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DeliveryCode([REDACTED])")
    }
}

/// An order as stored under `admin_orders` (and `latestOrder`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub payment_method: String,
    pub shipping_method: String,
    pub shipping_days: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_code: Option<DeliveryCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
}

impl Order {
    /// First eight characters of the id, as shown in order tables.
    #[must_use]
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        id.char_indices()
            .nth(8)
            .and_then(|(end, _)| id.get(..end))
            .unwrap_or(id)
    }

    /// Buyer's full name, or a generic label for anonymous orders.
    #[must_use]
    pub fn customer_name(&self) -> String {
        self.personal_info
            .as_ref()
            .map(PersonalInfo::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ANONYMOUS_CUSTOMER.to_owned())
    }

    #[must_use]
    pub fn display_total(&self) -> String {
        Price::eur(self.total_amount).display()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Order {
        serde_json::from_str(
            r#"{
                "id": "9b2f4c1e-7a3d-4e55-9a51-0c6f7e2d8b11",
                "status": "pending",
                "total_amount": 119.98,
                "created_at": "2025-03-02T10:15:00Z",
                "payment_method": "card",
                "shipping_method": "Entrega Padrão",
                "shipping_days": "3-5 dias úteis",
                "delivery_code": " 123456 ",
                "personal_info": {"firstName": "Ana", "lastName": "Silva", "phone": "912345678"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_display_helpers() {
        let order = sample();
        assert_eq!(order.short_id(), "9b2f4c1e");
        assert_eq!(order.customer_name(), "Ana Silva");
        assert_eq!(order.display_total(), "€119.98");
        assert!(order.user_id.is_none());
    }

    #[test]
    fn test_short_id_of_short_key() {
        let mut order = sample();
        order.id = OrderId::new("ord_1");
        order.personal_info = None;
        assert_eq!(order.short_id(), "ord_1");
        assert_eq!(order.customer_name(), ANONYMOUS_CUSTOMER);
    }

    #[test]
    fn test_delivery_code_matching_trims_both_sides() {
        let code = sample().delivery_code.unwrap();
        assert!(code.matches("123456"));
        assert!(code.matches("  123456\t"));
        assert!(!code.matches("12345"));
        assert!(!DeliveryCode::new("   ").matches(""));
    }

    #[test]
    fn test_delivery_code_debug_is_redacted() {
        let order = sample();
        assert!(!format!("{order:?}").contains("123456"));
    }

    #[test]
    fn test_personal_info_wire_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["personal_info"]["firstName"], "Ana");
        assert!(value.get("user_id").is_none());
    }
}
