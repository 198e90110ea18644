//! Details tab - read-only fields of the inventory

use crate::layout::global_context::use_i18n;
use crate::shared::date_utils::format_optional_datetime;
use contracts::domain::a025_smart_inventory::SmartInventory;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DetailsTab(inventory: SmartInventory) -> impl IntoView {
    let i18n = use_i18n();

    let kind = if inventory.is_smart() {
        i18n.tr("field-kind-smart")
    } else {
        inventory.kind.clone()
    };
    let rows = vec![
        (i18n.tr("field-id"), inventory.id.to_string()),
        (i18n.tr("field-name"), inventory.name.clone()),
        (i18n.tr("field-description"), inventory.description.clone()),
        (i18n.tr("field-kind"), kind),
        (
            i18n.tr("field-host-filter"),
            inventory.host_filter.clone().unwrap_or_default(),
        ),
        (
            i18n.tr("field-organization"),
            inventory.organization.map(|id| id.to_string()).unwrap_or_default(),
        ),
        (i18n.tr("field-created"), format_optional_datetime(inventory.created.as_deref())),
        (i18n.tr("field-modified"), format_optional_datetime(inventory.modified.as_deref())),
    ];

    view! {
        <Card>
            <dl class="details-section">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="details-section__label">{label}</dt>
                        <dd class="details-section__value">{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </Card>
    }
}
