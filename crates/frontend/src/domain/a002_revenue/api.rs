use contracts::domain::a002_revenue::RevenueResponse;

use crate::shared::api_utils::get_json;

use super::ui::table::filters::RevenueFilters;

/// Revenue per product category for the selected customers
pub async fn fetch_revenue(filters: &RevenueFilters) -> Result<RevenueResponse, String> {
    let query = filters.to_query_string();
    let path = if query.is_empty() {
        "/admin/revenue".to_string()
    } else {
        format!("/admin/revenue?{}", query)
    };
    get_json(&path).await
}
