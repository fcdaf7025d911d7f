use contracts::domain::a001_customer::aggregate::{Customer, CustomerOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::domain::a002_revenue::ui::table::filters::RevenueFilters;
use crate::domain::a002_revenue::ui::table::RevenueTable;
use crate::shared::components::table::number_format::format_amount_with_symbol;
use crate::shared::date_utils::{format_date, format_order_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::request_seq::RequestSeq;

fn order_label(order: &CustomerOrder) -> String {
    match order.display_id {
        Some(display_id) => format!("#{}", display_id),
        None => order.id.clone(),
    }
}

/// Customer card at `/a/customers/:id`, loaded with its orders expanded.
#[component]
pub fn CustomerDetails() -> impl IntoView {
    let params = use_params_map();
    let customer = RwSignal::new(None::<Customer>);
    let (error, set_error) = signal::<Option<String>>(None);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            set_error.set(Some("Missing customer id".to_string()));
            return;
        };
        let seq = request_seq.next();
        spawn_local(async move {
            let result = api::fetch_customer(&id).await;
            // the route moved on to another customer
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(c) => {
                    set_error.set(None);
                    customer.set(Some(c));
                }
                Err(e) => {
                    log::error!("Failed to load customer {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <PageFrame page_id="a001_customer--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <a class="button button--icon" href="/a/customers" title="Back to customers">
                        {icon("chevron-left")}
                    </a>
                    <h1 class="page__title">
                        {move || customer.with(|c| c.as_ref().map(|c| c.display_name()).unwrap_or_default())}
                    </h1>
                </div>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            {move || customer.get().map(|c| {
                let orders = c.orders.clone();
                let revenue = format_amount_with_symbol(c.revenue.unwrap_or(0), "EUR", 2);
                view! {
                    <div class="details-form">
                        <div class="form-group">
                            <label>"Email"</label>
                            <span>{c.email.clone()}</span>
                        </div>
                        <div class="form-group">
                            <label>"Phone"</label>
                            <span>{c.phone.clone().unwrap_or_else(|| "-".to_string())}</span>
                        </div>
                        <div class="form-group">
                            <label>"Account"</label>
                            <span>{if c.has_account { "Registered" } else { "Guest" }}</span>
                        </div>
                        <div class="form-group">
                            <label>"Customer since"</label>
                            <span>{format_date(&c.created_at)}</span>
                        </div>
                        <div class="form-group">
                            <label>"Omzet"</label>
                            <span>{revenue}</span>
                        </div>
                    </div>

                    <h2 class="page__subtitle">{format!("Orders ({})", orders.len())}</h2>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {orders
                                .into_iter()
                                .map(|order| {
                                    let total = order
                                        .total
                                        .map(|t| format_amount_with_symbol(t, "EUR", 2))
                                        .unwrap_or_else(|| "-".to_string());
                                    let label = order_label(&order);
                                    let created = format_order_date(&order.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>{label}</TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>{total}</TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>

                    <h2 class="page__subtitle">"Productafzet"</h2>
                    <RevenueTable
                        defaults=RevenueFilters::default().with_customers(vec![c.id.clone()])
                        is_admin=false
                        location_manager_id={None::<String>}
                    />
                }
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(display_id: Option<i64>) -> CustomerOrder {
        CustomerOrder {
            id: "order_01".to_string(),
            display_id,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            total: None,
        }
    }

    #[test]
    fn test_order_label_prefers_display_id() {
        assert_eq!(order_label(&order(Some(1042))), "#1042");
        assert_eq!(order_label(&order(None)), "order_01");
    }
}
