use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::{browser_language, I18n};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // Breadcrumb state shared by the header and the detail pages.
    provide_context(AppGlobalContext::new());

    provide_context(Arc::new(I18n::new(browser_language().as_deref())));

    view! {
        <AppRoutes />
    }
}
