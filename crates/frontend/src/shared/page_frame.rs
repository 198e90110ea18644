//! PageFrame — standard root wrapper for every routed page.
//!
//! Usage:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a025_smart_inventory--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::page_class;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class=page_class(category)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
