pub mod dealer_select;
pub mod filters;
pub mod state;

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::system::users::{User, UserRole};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::dealer_select::DealerSelect;
use self::filters::{AdditionalFilters, CustomerFilters, PageDirection};
use self::state::create_state;
use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::create::CreateCustomerModal;
use crate::domain::a002_revenue::ui::table::RevenueTable;
use crate::shared::components::pagination_controls::{PageInfo, PaginationControls};
use crate::shared::components::table::number_format::format_amount_with_symbol;
use crate::shared::request_seq::RequestSeq;
use crate::shared::date_utils::format_order_date;
use crate::shared::history::{current_search, replace_query_string};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use crate::system::users::api as users_api;

const SEARCH_DEBOUNCE_MS: u32 = 400;
const TABLE_ID: &str = "a001-customer-table";
const REVENUE_CURRENCY: &str = "EUR";

/// Constant filters of every customer list request.
pub fn default_query_props() -> AdditionalFilters {
    AdditionalFilters::from([("expand".to_string(), "orders".to_string())])
}

fn last_order_label(customer: &Customer) -> String {
    customer
        .last_order()
        .map(|order| format_order_date(&order.created_at))
        .unwrap_or_else(|| "-".to_string())
}

/// Customers page: header actions, the customer table, the product revenue
/// table and the create modal.
#[component]
pub fn CustomerListPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = Signal::derive(move || auth_state.get().is_admin());
    let location_manager_id = Signal::derive(move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .filter(|u| u.is_location_manager())
                .map(|u| u.id.clone())
        })
    });
    let (show_create_modal, set_show_create_modal) = signal(false);
    let reload = RwSignal::new(0u32);

    let on_modal_close = Callback::new(move |created: bool| {
        set_show_create_modal.set(false);
        if created {
            reload.update(|n| *n += 1);
        }
    });

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">"Customers"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create_modal.set(true)
                    >
                        {icon("plus")}
                        "New customer"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <CustomerTable
                    initial_search=current_search().unwrap_or_default()
                    is_admin=is_admin
                    reload=reload
                />
            </div>

            <div class="page__content">
                <h2 class="page__subtitle">"Productafzet"</h2>
                <RevenueTable
                    filterable=true
                    is_admin=is_admin
                    location_manager_id=location_manager_id
                />
            </div>

            <Show when=move || show_create_modal.get()>
                <CreateCustomerModal on_close=on_modal_close />
            </Show>
        </PageFrame>
    }
}

/// Paginated customer table with debounced search and dealer scoping.
///
/// The filter state is seeded from `initial_search` and written back to
/// the address bar with `replaceState` on every change.
#[component]
pub fn CustomerTable(
    /// `location.search` at mount time
    #[prop(into)]
    initial_search: String,
    /// Whether the session user may scope the table by dealer
    #[prop(into)]
    is_admin: Signal<bool>,
    /// Bumped by the parent to refetch the current page
    #[prop(into)]
    reload: Signal<u32>,
) -> impl IntoView {
    let filters = CustomerFilters::new(Some(&initial_search), default_query_props());
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let query = filters.query_object.get();
        reload.track();

        let seq = request_seq.next();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_customers(&query).await;
            // superseded by a newer request; its response wins
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    log::debug!("Loaded {} of {} customers", page.customers.len(), page.count);
                    state.update(|s| {
                        s.items = page.customers;
                        s.total_count = page.count;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    set_error.set(Some(format!("Failed to load customers: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let representation = filters.representation_string.get();
        replace_query_string(&representation);
    });

    let dealers = RwSignal::new(Vec::<User>::new());
    let (loading_dealers, set_loading_dealers) = signal(false);
    Effect::new(move |_| {
        if !is_admin.get() {
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

    let search_input = RwSignal::new(
        filters
            .state()
            .with_untracked(|s| s.query.clone())
            .unwrap_or_default(),
    );
    let debounce_seq = RequestSeq::new();
    Effect::new(move |prev: Option<()>| {
        let value = search_input.get();
        // the first run only mirrors the URL, not user input
        if prev.is_none() {
            return;
        }

        let seq = debounce_seq.next();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !debounce_seq.is_current(seq) {
                return;
            }
            if value.is_empty() {
                filters.reset();
            } else {
                filters.set_query(Some(value));
            }
        });
    });

    let page_info = Signal::derive(move || {
        let (offset, limit) = filters.state().with(|f| (f.offset, f.limit));
        state.with(|s| PageInfo::new(offset as usize, limit as usize, s.items.len(), s.total_count))
    });
    let selected_dealer = Signal::derive(move || filters.state().with(|f| f.user_id.clone()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <Input value=search_input placeholder="Search customers..." />
                    <Show when=move || is_admin.get()>
                        <div style="width: 280px;">
                            <DealerSelect
                                dealers=dealers
                                loading=loading_dealers
                                selected=selected_dealer
                                on_dealer_change=Callback::new(move |id| filters.set_user(id))
                            />
                        </div>
                    </Show>
                </div>

                <div class="filter-panel-header__center">
                    <PaginationControls
                        info=page_info
                        title="customers"
                        on_prev=Callback::new(move |_| filters.paginate(PageDirection::Previous))
                        on_next=Callback::new(move |_| filters.paginate(PageDirection::Next))
                    />
                </div>
            </div>
        </div>

        {move || {
            error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })
        }}

        <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
            <Table attr:id=TABLE_ID attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Orders"</TableHeaderCell>
                        <TableHeaderCell>"Omzet"</TableHeaderCell>
                        <TableHeaderCell>
                            <div style="text-align: right;">"Laatste Orderdatum"</div>
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.get().items
                        key=|customer| customer.id.clone()
                        children=move |customer: Customer| {
                            let href = format!("/a/customers/{}", customer.id);
                            let revenue = format_amount_with_symbol(
                                customer.revenue.unwrap_or(0),
                                REVENUE_CURRENCY,
                                2,
                            );
                            let last_order = last_order_label(&customer);
                            let display_name = customer.display_name();
                            let email = customer.email.clone();
                            let order_count = customer.orders.len();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <a class="table__link" href=href>{display_name}</a>
                                    </TableCell>
                                    <TableCell>{email}</TableCell>
                                    <TableCell>{order_count}</TableCell>
                                    <TableCell>{revenue}</TableCell>
                                    <TableCell>
                                        <div style="text-align: right;">{last_order}</div>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                <div class="table__empty">"No customers found"</div>
            </Show>
        </div>
    }
}
