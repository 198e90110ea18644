//! Edit tab - name, description and host filter
//!
//! Saving navigates back to the details tab, which reloads the inventory.

use crate::domain::a025_smart_inventory::ui::details::model::update_inventory;
use crate::domain::a025_smart_inventory::ui::details::routing::details_path;
use crate::layout::global_context::use_i18n;
use crate::shared::i18n::I18n;
use contracts::domain::a025_smart_inventory::{SmartInventory, SmartInventoryPatch};
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NameRequired,
}

/// Patch to send, or why the form cannot be saved. Blank host filters are
/// sent as `null`.
pub fn build_patch(form: &SmartInventoryPatch) -> Result<SmartInventoryPatch, FormError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(FormError::NameRequired);
    }
    let host_filter = form
        .host_filter
        .as_deref()
        .map(str::trim)
        .filter(|filter| !filter.is_empty())
        .map(str::to_string);
    Ok(SmartInventoryPatch {
        name: name.to_string(),
        description: form.description.trim().to_string(),
        host_filter,
    })
}

/// Save and cancel button labels.
fn action_labels(i18n: &I18n) -> (String, String) {
    (i18n.tr("action-save"), i18n.tr("action-cancel"))
}

#[component]
pub fn EditTab(inventory: SmartInventory) -> impl IntoView {
    let i18n = use_i18n();
    let id = inventory.id.to_string();
    let back = details_path(&id);
    let redirect_to = back.clone();
    let (save_label, cancel_label) = action_labels(&i18n);

    let form = RwSignal::new(SmartInventoryPatch::from(&inventory));
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_save = {
        let name_required = format!("{}: {}", i18n.tr("save-failed"), i18n.tr("field-name"));
        let failed = i18n.tr("save-failed");
        move |_| {
            let patch = match build_patch(&form.get_untracked()) {
                Ok(patch) => patch,
                Err(FormError::NameRequired) => {
                    error.set(Some(name_required.clone()));
                    return;
                }
            };
            let id = id.clone();
            let failed = failed.clone();
            saving.set(true);
            error.set(None);
            spawn_local(async move {
                match update_inventory(&id, &patch).await {
                    Ok(_) => saved.set(true),
                    Err(e) => {
                        log::error!("a025: failed to save inventory {}: {}", id, e);
                        error.set(Some(format!("{} {}", failed, e)));
                    }
                }
                saving.set(false);
            });
        }
    };

    view! {
        <Card>
            <h4 class="details-section__title">{i18n.tr("edit-title")}</h4>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || saved.get().then(|| view! { <Redirect path=redirect_to.clone() /> })}
            <div class="details-form">
                <div class="form-group">
                    <label for="name">{i18n.tr("field-name")}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="description">{i18n.tr("field-description")}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="host_filter">{i18n.tr("field-host-filter")}</label>
                    <textarea
                        id="host_filter"
                        rows="3"
                        prop:value=move || form.get().host_filter.unwrap_or_default()
                        on:input=move |ev| form.update(|f| f.host_filter = Some(event_target_value(&ev)))
                    />
                </div>
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {save_label}
                </Button>
                <A href=back attr:class="button button--secondary">
                    {cancel_label}
                </A>
            </div>
        </Card>
    }
}
