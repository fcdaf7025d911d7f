pub mod customer_select;
pub mod filters;

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_revenue::RevenueRow;
use contracts::system::users::{User, UserRole};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::customer_select::CustomerSelect;
use self::filters::{customer_ids_of_dealer, RevenueFilters};
use crate::domain::a001_customer::api as customer_api;
use crate::domain::a001_customer::ui::list::dealer_select::DealerSelect;
use crate::domain::a001_customer::ui::list::filters::FilterState;
use crate::domain::a002_revenue::api;
use crate::shared::components::table::number_format::format_amount_with_symbol;
use crate::shared::request_seq::RequestSeq;
use crate::system::users::api as users_api;

const CATEGORY_DEBOUNCE_MS: u32 = 500;
/// Page size of the dealer's own customer list in the customer picker.
const CUSTOMER_OPTIONS_LIMIT: u32 = 50;
const REVENUE_CURRENCY: &str = "EUR";

/// Units sold and revenue per product category.
///
/// With `filterable` set, admins scope the table by dealer (expanded to the
/// dealer's customers) and location managers by one of their customers.
#[component]
pub fn RevenueTable(
    /// Initial filters, e.g. a single customer on the details page
    #[prop(optional)]
    defaults: RevenueFilters,
    #[prop(optional)] filterable: bool,
    #[prop(into)] is_admin: Signal<bool>,
    /// Id of the signed-in user when they are a location manager
    #[prop(into)]
    location_manager_id: Signal<Option<String>>,
) -> impl IntoView {
    let filters = RwSignal::new(defaults);
    let rows = RwSignal::new(Vec::<RevenueRow>::new());
    let (is_loaded, set_is_loaded) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let query = filters.get();

        let seq = request_seq.next();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_revenue(&query).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(response) => {
                    rows.set(response.data);
                    set_is_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load revenue: {}", e);
                    set_error.set(Some(format!("Failed to load revenue: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    let dealers = RwSignal::new(Vec::<User>::new());
    let (loading_dealers, set_loading_dealers) = signal(false);
    Effect::new(move |_| {
        if !filterable || !is_admin.get() {
            return;
        }
        set_loading_dealers.set(true);
        spawn_local(async move {
            match users_api::fetch_users(Some(UserRole::LocationManager)).await {
                Ok(users) => dealers.set(users),
                Err(e) => log::warn!("Failed to load dealers: {}", e),
            }
            set_loading_dealers.set(false);
        });
    });

    let customers = RwSignal::new(Vec::<Customer>::new());
    let (loading_customers, set_loading_customers) = signal(false);
    Effect::new(move |_| {
        let Some(user_id) = location_manager_id.get().filter(|_| filterable) else {
            return;
        };
        let query = FilterState {
            user_id: Some(user_id),
            limit: CUSTOMER_OPTIONS_LIMIT,
            ..FilterState::default()
        }
        .query_object();

        set_loading_customers.set(true);
        spawn_local(async move {
            match customer_api::fetch_customers(&query).await {
                Ok(page) => customers.set(page.customers),
                Err(e) => log::warn!("Failed to load dealer customers: {}", e),
            }
            set_loading_customers.set(false);
        });
    });

    let selected_dealer = RwSignal::new(None::<String>);
    let on_dealer_change = Callback::new(move |dealer_id: Option<String>| {
        let ids = dealers.with_untracked(|d| customer_ids_of_dealer(d, dealer_id.as_deref()));
        selected_dealer.set(dealer_id);
        filters.update(|f| *f = f.with_customers(ids));
    });
    let on_customer_change = Callback::new(move |customer_id: Option<String>| {
        filters.update(|f| *f = f.with_customers(customer_id.into_iter().collect()));
    });

    let category_input = RwSignal::new(String::new());
    let debounce_seq = RequestSeq::new();
    Effect::new(move |prev: Option<()>| {
        let term = category_input.get();
        if prev.is_none() {
            return;
        }

        let seq = debounce_seq.next();
        spawn_local(async move {
            TimeoutFuture::new(CATEGORY_DEBOUNCE_MS).await;
            if !debounce_seq.is_current(seq) {
                return;
            }
            filters.update(|f| *f = f.with_category(&term));
        });
    });

    view! {
        <Show when=move || filterable>
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        <Input value=category_input placeholder="Search category..." />
                        <div style="min-width: 280px;">
                            {move || {
                                if is_admin.get() {
                                    view! {
                                        <DealerSelect
                                            dealers=dealers
                                            loading=loading_dealers
                                            selected=selected_dealer
                                            on_dealer_change=on_dealer_change
                                        />
                                    }
                                    .into_any()
                                } else if location_manager_id.get().is_some() {
                                    view! {
                                        <CustomerSelect
                                            customers=customers
                                            loading=loading_customers
                                            on_customer_change=on_customer_change
                                        />
                                    }
                                    .into_any()
                                } else {
                                    ().into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>

        {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

        <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product categorie"</TableHeaderCell>
                        <TableHeaderCell>"Afzet"</TableHeaderCell>
                        <TableHeaderCell>"Omzet"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.category.clone(), row.sales, row.revenue)
                        children=move |row: RevenueRow| {
                            let revenue = format_amount_with_symbol(row.revenue, REVENUE_CURRENCY, 2);
                            view! {
                                <TableRow>
                                    <TableCell>{row.category}</TableCell>
                                    <TableCell>{row.sales}</TableCell>
                                    <TableCell>{revenue}</TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || is_loaded.get() && rows.with(|r| r.is_empty())>
                <div class="table__empty">"No revenue in this selection"</div>
            </Show>
        </div>
    }
}
