//! Filters of the product revenue table.

use contracts::system::users::User;
use serde::{Deserialize, Serialize};

/// Stands in for "no customers" so a dealer without customers matches
/// nothing instead of everything.
pub const NO_CUSTOMERS: &str = "_";

/// Query of `GET /admin/revenue`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueFilters {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RevenueFilters {
    pub fn with_customers(&self, customer_ids: Vec<String>) -> Self {
        Self {
            customer_ids,
            ..self.clone()
        }
    }

    /// Category search is case-insensitive; an empty term clears it.
    pub fn with_category(&self, term: &str) -> Self {
        let term = term.trim();
        Self {
            category: (!term.is_empty()).then(|| term.to_lowercase()),
            ..self.clone()
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|e| {
            log::warn!("Failed to encode revenue filters: {}", e);
            String::new()
        })
    }
}

/// Customer ids of the selected dealer.
///
/// No selection (or an unknown dealer) yields an empty list; a dealer
/// without customers yields [`NO_CUSTOMERS`].
pub fn customer_ids_of_dealer(dealers: &[User], dealer_id: Option<&str>) -> Vec<String> {
    let Some(dealer) = dealer_id.and_then(|id| dealers.iter().find(|d| d.id == id)) else {
        return Vec::new();
    };

    if dealer.customers.is_empty() {
        return vec![NO_CUSTOMERS.to_string()];
    }
    dealer.customers.iter().map(|c| c.id.clone()).collect()
}
