use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

/// Single-customer picker for dealers; the empty option clears the choice.
#[component]
pub fn CustomerSelect(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    #[prop(into)] loading: Signal<bool>,
    on_customer_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="customer-select"
            disabled=move || loading.get()
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_customer_change.run((!value.is_empty()).then_some(value));
            }
        >
            <option value="">
                {move || if loading.get() { "Loading..." } else { "Kies klant" }}
            </option>
            {move || {
                customers
                    .get()
                    .into_iter()
                    .map(|customer| view! {
                        <option value=customer.id.clone()>{customer.display_name()}</option>
                    })
                    .collect_view()
            }}
        </select>
    }
}
