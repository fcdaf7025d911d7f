//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id = "{entity}--{category}"` and `data-page-category` on the root
//! element so a page found in the DOM inspector maps straight back to its
//! `domain/{entity}/ui/{category}` directory.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_customer--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
