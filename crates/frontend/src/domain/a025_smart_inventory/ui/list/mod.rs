//! Smart inventory listing, the target of "back to list" links

use crate::domain::a025_smart_inventory::ui::details::model::fetch_smart_inventories;
use crate::domain::a025_smart_inventory::ui::details::routing::details_path;
use crate::layout::global_context::use_i18n;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a025_smart_inventory::{ListPage, SmartInventory};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SmartInventoryList() -> impl IntoView {
    let i18n = use_i18n();
    let items = RwSignal::new(None::<Result<ListPage<SmartInventory>, String>>);

    spawn_local(async move {
        let result = fetch_smart_inventories().await.map_err(|e| {
            log::error!("a025: failed to load smart inventories: {}", e);
            e.to_string()
        });
        items.set(Some(result));
    });

    view! {
        <PageFrame page_id="a025_smart_inventory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>{i18n.tr("list-title")}</h2>
            </div>
            <div class="page__content">
                {move || match items.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(Err(message)) => view! { <div class="error">{message}</div> }.into_any(),
                    Some(Ok(page)) if page.results.is_empty() => {
                        view! { <div class="empty">{i18n.tr("list-empty")}</div> }.into_any()
                    }
                    Some(Ok(page)) => view! {
                        <ul class="list">
                            {page
                                .results
                                .into_iter()
                                .map(|inventory| view! {
                                    <li>
                                        <A href=details_path(&inventory.id.to_string())>{inventory.name}</A>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
