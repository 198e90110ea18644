//! Terminal error states of the detail page.

use super::load_state::ErrorInfo;
use super::routing::INVENTORIES_LIST_PATH;
use crate::layout::global_context::use_i18n;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Message keys and links shown for a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title_key: &'static str,
    pub detail: Option<String>,
    /// `(message key, link key, href)` offered as a way out.
    pub recovery: Option<(&'static str, &'static str, &'static str)>,
}

impl ErrorNotice {
    pub fn for_error(error: &ErrorInfo) -> Self {
        match error {
            ErrorInfo::NotFound => Self {
                title_key: "error-title",
                detail: None,
                recovery: Some(("inventory-not-found", "view-all-inventories", INVENTORIES_LIST_PATH)),
            },
            ErrorInfo::Other { message } => Self {
                title_key: "error-title",
                detail: Some(message.clone()),
                recovery: None,
            },
        }
    }
}

#[component]
pub fn ErrorPresenter(error: ErrorInfo) -> impl IntoView {
    let i18n = use_i18n();
    let notice = ErrorNotice::for_error(&error);

    view! {
        <div class="content-error">
            <Card>
                <h3 class="content-error__title">{i18n.tr(notice.title_key)}</h3>
                <div class="content-error__message">{i18n.tr("error-detail")}</div>
                {notice.detail.map(|detail| view! {
                    <pre class="content-error__detail">{detail}</pre>
                })}
                {notice.recovery.map(|(message_key, link_key, href)| view! {
                    <span class="content-error__recovery">
                        {i18n.tr(message_key)}
                        " "
                        <A href=href>{i18n.tr(link_key)}</A>
                    </span>
                })}
            </Card>
        </div>
    }
}

/// Fallback for a sub-route the page does not know.
#[component]
pub fn RouteNotFound(details_link: Option<String>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="content-error">
            <Card>
                <h3 class="content-error__title">{i18n.tr("route-not-found")}</h3>
                {details_link.map(|href| view! {
                    <A href=href>{i18n.tr("view-inventory-details")}</A>
                })}
            </Card>
        </div>
    }
}
