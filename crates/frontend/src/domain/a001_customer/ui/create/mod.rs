pub mod form;

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use self::form::{CustomerForm, MetadataEntry, SubmitProgress, SubmitStep};
use crate::domain::a001_customer::api;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Run the steps not yet done by an earlier attempt, recording each success
/// in `progress`.
async fn submit(form: CustomerForm, progress: RwSignal<SubmitProgress>) -> Result<(), String> {
    let (dto, address) = form.to_requests()?;
    let steps = progress.with_untracked(|p| p.remaining_steps(address.is_some()));
    let mut customer_id = progress.with_untracked(|p| p.customer_id.clone());

    for step in steps {
        match step {
            SubmitStep::Create => {
                let customer = api::create_customer(&dto)
                    .await
                    .map_err(|e| format!("Failed to create customer: {}", e))?;
                log::info!("Created customer {}", customer.id);
                progress.update(|p| p.customer_id = Some(customer.id.clone()));
                customer_id = Some(customer.id);
            }
            SubmitStep::AddAddress => {
                let (Some(id), Some(address)) = (customer_id.as_deref(), address.as_ref()) else {
                    continue;
                };
                api::add_customer_address(id, address)
                    .await
                    .map_err(|e| format!("Customer created, but saving the address failed: {}", e))?;
                progress.update(|p| p.address_saved = true);
            }
            SubmitStep::Invite => {
                let id = customer_id
                    .as_deref()
                    .ok_or_else(|| "Customer was not created".to_string())?;
                api::create_customer_invite(id)
                    .await
                    .map_err(|e| format!("Customer created, but sending the invite failed: {}", e))?;
            }
        }
    }

    Ok(())
}

/// Free-form key/value rows sent as customer metadata.
#[component]
fn MetadataEditor(form: RwSignal<CustomerForm>) -> impl IntoView {
    // re-render rows only when one is added or removed, not on every keystroke
    let row_count = Memo::new(move |_| form.with(|f| f.metadata.len()));

    let row = move |index: usize| {
        view! {
            <div class="metadata-editor__row">
                <input
                    type="text"
                    placeholder="Key"
                    prop:value=move || form.with(|f| f.metadata.get(index).map(|e| e.key.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| {
                            if let Some(entry) = f.metadata.get_mut(index) {
                                entry.key = value;
                            }
                        });
                    }
                />
                <input
                    type="text"
                    placeholder="Value"
                    prop:value=move || form.with(|f| f.metadata.get(index).map(|e| e.value.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| {
                            if let Some(entry) = f.metadata.get_mut(index) {
                                entry.value = value;
                            }
                        });
                    }
                />
                <button
                    class="button button--icon"
                    title="Remove"
                    on:click=move |_| form.update(|f| {
                        if index < f.metadata.len() {
                            f.metadata.remove(index);
                        }
                    })
                >
                    {icon("x")}
                </button>
            </div>
        }
    };

    view! {
        <div class="metadata-editor">
            {move || (0..row_count.get()).map(row).collect_view()}
            <button
                class="button button--secondary"
                on:click=move |_| form.update(|f| f.metadata.push(MetadataEntry::default()))
            >
                {icon("plus")}
                "Add metadata"
            </button>
        </div>
    }
}

#[component]
fn FormField(
    form: RwSignal<CustomerForm>,
    #[prop(into)] label: String,
    get: fn(&CustomerForm) -> &String,
    set: fn(&mut CustomerForm, String),
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
                placeholder=placeholder.unwrap_or_default()
            />
        </div>
    }
}

/// "New customer" dialog.
///
/// `on_close` receives `true` when a customer was created, including when a
/// later step failed and the dialog was dismissed.
#[component]
pub fn CreateCustomerModal(on_close: Callback<bool>) -> impl IntoView {
    let form = RwSignal::new(CustomerForm::default());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let progress = RwSignal::new(SubmitProgress::default());

    let on_submit = move || {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let snapshot = form.get_untracked();
        spawn_local(async move {
            match submit(snapshot, progress).await {
                Ok(()) => on_close.run(true),
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    let submit_disabled = Signal::derive(move || submitting.get() || form.with(|f| f.is_pristine()));

    let dismiss = move || on_close.run(progress.with_untracked(|p| p.is_started()));

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button on_click=move |_| dismiss()>"Cancel"</Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=submit_disabled
                on_click=move |_| on_submit()
            >
                {move || {
                    if submitting.get() {
                        "Creating..."
                    } else if progress.with(|p| p.is_started()) {
                        "Retry"
                    } else {
                        "Create"
                    }
                }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title="New customer"
            on_close=Callback::new(move |_| dismiss())
            footer=footer
        >
            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <div class="details-form">
                <h3>"General"</h3>
                <FormField form=form label="Email" input_type="email"
                    get={|f| &f.email} set={|f, v| f.email = v} />
                <FormField form=form label="Phone"
                    get={|f| &f.phone} set={|f, v| f.phone = v} />
                <FormField form=form label="First name"
                    get={|f| &f.first_name} set={|f, v| f.first_name = v} />
                <FormField form=form label="Last name"
                    get={|f| &f.last_name} set={|f, v| f.last_name = v} />

                <h3>"Metadata"</h3>
                <MetadataEditor form=form />

                <h3>"Shipping address"</h3>
                <FormField form=form label="First name"
                    get={|f| &f.address_first_name} set={|f, v| f.address_first_name = v} />
                <FormField form=form label="Last name"
                    get={|f| &f.address_last_name} set={|f, v| f.address_last_name = v} />
                <FormField form=form label="Company"
                    get={|f| &f.company} set={|f, v| f.company = v} />
                <FormField form=form label="Address"
                    get={|f| &f.address_1} set={|f, v| f.address_1 = v} />
                <FormField form=form label="Apartment, suite, etc."
                    get={|f| &f.address_2} set={|f, v| f.address_2 = v} />
                <FormField form=form label="City"
                    get={|f| &f.city} set={|f, v| f.city = v} />
                <FormField form=form label="Province"
                    get={|f| &f.province} set={|f, v| f.province = v} />
                <FormField form=form label="Postal code"
                    get={|f| &f.postal_code} set={|f, v| f.postal_code = v} />
                <FormField form=form label="Country" placeholder="nl"
                    get={|f| &f.country_code} set={|f, v| f.country_code = v} />
                <FormField form=form label="Phone"
                    get={|f| &f.address_phone} set={|f, v| f.address_phone = v} />
            </div>
        </Modal>
    }
}
