use contracts::system::users::User;
use leptos::prelude::*;

/// Dealer scoping filter; the empty option clears the scope.
#[component]
pub fn DealerSelect(
    #[prop(into)] dealers: Signal<Vec<User>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_dealer_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <select
            class="dealer-select"
            disabled=move || loading.get()
            on:change=move |ev| {
                let value = event_target_value(&ev);
                on_dealer_change.run((!value.is_empty()).then_some(value));
            }
            prop:value=move || selected.get().unwrap_or_default()
        >
            <option value="">
                {move || if loading.get() { "Loading..." } else { "Kies dealer" }}
            </option>
            {move || {
                dealers
                    .get()
                    .into_iter()
                    .map(|dealer| {
                        let id = dealer.id.clone();
                        let is_selected = move || selected.get().as_deref() == Some(id.as_str());
                        view! {
                            <option value=dealer.id.clone() selected=is_selected>
                                {dealer.display_label()}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
