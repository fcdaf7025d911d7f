use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::person_label;

// ============================================================================
// Customer
// ============================================================================

/// Store customer as returned by `/admin/customers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub has_account: bool,
    pub created_at: DateTime<Utc>,

    /// Present only when the request asked for `expand=orders`.
    #[serde(default)]
    pub orders: Vec<CustomerOrder>,

    /// Lifetime revenue in minor currency units (cents).
    #[serde(default)]
    pub revenue: Option<i64>,

    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Customer {
    /// "First Last", falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        person_label(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            &self.email,
        )
    }

    /// Most recently created order, if any were expanded.
    pub fn last_order(&self) -> Option<&CustomerOrder> {
        self.orders.iter().max_by_key(|order| order.created_at)
    }
}

/// Order summary embedded in a customer when orders are expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerOrder {
    pub id: String,
    #[serde(default)]
    pub display_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub total: Option<i64>,
}

// ============================================================================
// Address
// ============================================================================

/// Shipping address payload attached to a freshly created customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub postal_code: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn customer(first: Option<&str>, last: Option<&str>) -> Customer {
        Customer {
            id: "cus_01".to_string(),
            email: "jan@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            phone: None,
            has_account: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            orders: Vec::new(),
            revenue: None,
            metadata: None,
        }
    }

    fn order(id: &str, day: u32) -> CustomerOrder {
        CustomerOrder {
            id: id.to_string(),
            display_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            total: None,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(customer(Some("Jan"), Some("Jansen")).display_name(), "Jan Jansen");
        assert_eq!(customer(Some("Jan"), None).display_name(), "Jan");
        assert_eq!(customer(Some(" "), Some("")).display_name(), "jan@example.com");
        assert_eq!(customer(None, None).display_name(), "jan@example.com");
    }

    #[test]
    fn test_last_order_is_latest_created() {
        let mut c = customer(None, None);
        assert!(c.last_order().is_none());

        c.orders = vec![order("a", 3), order("b", 17), order("c", 9)];
        assert_eq!(c.last_order().map(|o| o.id.as_str()), Some("b"));
    }

    #[test]
    fn test_customer_without_expanded_orders_deserializes() {
        let json = r#"{
            "id": "cus_01",
            "email": "jan@example.com",
            "first_name": null,
            "last_name": null,
            "phone": null,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert!(c.orders.is_empty());
        assert!(!c.has_account);
        assert_eq!(c.revenue, None);
    }

    #[test]
    fn test_address_omits_empty_optionals() {
        let address = Address {
            address_1: "Dorpsstraat 1".to_string(),
            city: "Utrecht".to_string(),
            postal_code: "3511 AA".to_string(),
            country_code: "nl".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&address).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("company"));
        assert!(!obj.contains_key("phone"));
        assert_eq!(obj["country_code"], "nl");
    }
}
