use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::domain::a001_customer::ui::list::CustomerListPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

const HOME_PATH: &str = "/a/customers";

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route path=path!("/a/customers") view=CustomerListPage />
                <Route path=path!("/a/customers/:id") view=CustomerDetails />
            </Routes>
        </Shell>
    }
}

/// Auth gate: waits for session restore, then shows the login page or the app.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().restored
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <Show
                when=move || auth_state.get().is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
