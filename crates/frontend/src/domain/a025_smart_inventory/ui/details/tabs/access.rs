//! Access tab - users with a role on the inventory

use super::{load_list, ListState};
use crate::domain::a025_smart_inventory::ui::details::model::fetch_related;
use crate::layout::global_context::use_i18n;
use contracts::domain::a025_smart_inventory::{AccessRecord, SmartInventory};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccessTab(inventory: SmartInventory) -> impl IntoView {
    let i18n = use_i18n();
    let id = inventory.id.to_string();
    let users = load_list(async move { fetch_related::<AccessRecord>(&id, "access_list").await });

    view! {
        <Card>
            <h4 class="details-section__title">{i18n.tr("access-title")}</h4>
            {move || match users.get() {
                ListState::Loading => view! { <Spinner /> }.into_any(),
                ListState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                ListState::Ready(page) if page.results.is_empty() => {
                    view! { <div class="empty">{i18n.tr("access-empty")}</div> }.into_any()
                }
                ListState::Ready(page) => view! {
                    <ul class="access-list">
                        {page
                            .results
                            .iter()
                            .map(|user| view! { <li>{user.display_name()}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </Card>
    }
}
