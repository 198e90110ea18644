//! Hosts tab - hosts matched by the smart host filter

use super::{load_list, ListState};
use crate::domain::a025_smart_inventory::ui::details::model::fetch_related;
use crate::layout::global_context::use_i18n;
use contracts::domain::a025_smart_inventory::{HostSummary, SmartInventory};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HostsTab(inventory: SmartInventory) -> impl IntoView {
    let i18n = use_i18n();
    let id = inventory.id.to_string();
    let hosts = load_list(async move { fetch_related::<HostSummary>(&id, "hosts").await });

    view! {
        <Card>
            <h4 class="details-section__title">{i18n.tr("hosts-title")}</h4>
            {move || match hosts.get() {
                ListState::Loading => view! { <Spinner /> }.into_any(),
                ListState::Failed(message) => view! { <div class="error">{message}</div> }.into_any(),
                ListState::Ready(page) if page.results.is_empty() => {
                    view! { <div class="empty">{i18n.tr("hosts-empty")}</div> }.into_any()
                }
                ListState::Ready(page) => view! {
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th>{i18n.tr("field-name")}</th>
                                <th>{i18n.tr("field-description")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page
                                .results
                                .into_iter()
                                .map(|host| view! {
                                    <tr class={if host.enabled { "table__row" } else { "table__row table__row--disabled" }}>
                                        <td>{host.name}</td>
                                        <td>{host.description}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </Card>
    }
}
