use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a001_customer::request::{AddCustomerAddressDto, CreateCustomerDto};
use contracts::domain::a001_customer::response::{CustomerListResponse, CustomerResponse};

use crate::shared::api_utils::{get_json, post_empty, post_json};

use super::ui::list::filters::FilterQuery;

/// Fetch one page of customers for the given filter projection
pub async fn fetch_customers(query: &FilterQuery) -> Result<CustomerListResponse, String> {
    get_json(&format!("/admin/customers?{}", query.to_query_string())).await
}

/// Fetch a single customer with its orders
pub async fn fetch_customer(id: &str) -> Result<Customer, String> {
    let response: CustomerResponse = get_json(&format!(
        "/admin/customers/{}?expand=orders",
        urlencoding::encode(id)
    ))
    .await?;
    Ok(response.customer)
}

/// Create a customer
pub async fn create_customer(dto: &CreateCustomerDto) -> Result<Customer, String> {
    let response: CustomerResponse = post_json("/admin/customers", dto).await?;
    Ok(response.customer)
}

/// Attach a shipping address to an existing customer
pub async fn add_customer_address(id: &str, dto: &AddCustomerAddressDto) -> Result<(), String> {
    post_empty(
        &format!("/admin/customers/{}/addresses", urlencoding::encode(id)),
        Some(dto),
    )
    .await
}

/// Send the account invitation email to a customer
pub async fn create_customer_invite(id: &str) -> Result<(), String> {
    post_empty::<()>(
        &format!("/admin/customers/{}/invite", urlencoding::encode(id)),
        None,
    )
    .await
}
