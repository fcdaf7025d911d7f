use serde::{Deserialize, Serialize};

use super::aggregate::Address;

/// Body of `POST /admin/customers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCustomerDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Body of `POST /admin/customers/{id}/addresses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddCustomerAddressDto {
    pub shipping_address: Address,
}
