//! TopHeader component - application top navigation bar.
//!
//! Contains the brand, the customers link and the signed-in user with logout.

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Admin"</span>
                <a class="top-header__link" href="/a/customers">
                    {icon("customers")}
                    "Customers"
                </a>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || auth_state.get().user_info
                            .map(|u| u.display_label())
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
