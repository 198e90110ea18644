use crate::domain::a025_smart_inventory::ui::details::routing::INVENTORIES_LIST_PATH;
use crate::layout::global_context::{use_global_context, use_i18n};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{i18n.tr("app-title")}</span>
            </div>
            <nav class="breadcrumb" aria-label="breadcrumb">
                <A href=INVENTORIES_LIST_PATH>{i18n.tr("breadcrumb-inventories")}</A>
                {move || ctx.breadcrumb.get().map(|crumb| view! {
                    <span class="breadcrumb__separator">"/"</span>
                    <A href=crumb.link>{crumb.title}</A>
                })}
            </nav>
        </header>
    }
}
