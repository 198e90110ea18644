//! ViewModel for the smart inventory detail page

use super::load_state::LoadState;
use super::loader::{LoadRequest, NavigationSnapshot, ResourceLoader, Settled};
use super::model::fetch_by_id;
use super::routing::details_path;
use crate::layout::global_context::{AppGlobalContext, Breadcrumb};
use contracts::domain::a025_smart_inventory::SmartInventory;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct SmartInventoryDetailsVm {
    loader: RwSignal<ResourceLoader>,
    pub state: Memo<LoadState>,
}

impl SmartInventoryDetailsVm {
    pub fn new() -> Self {
        let loader = RwSignal::new(ResourceLoader::new());
        let state = Memo::new(move |_| loader.with(|loader| loader.state().clone()));
        Self { loader, state }
    }

    /// Feeds one navigation into the loader and starts the fetch it asks for.
    pub fn navigate(&self, snapshot: NavigationSnapshot, ctx: AppGlobalContext) {
        let request = self
            .loader
            .try_update(|loader| loader.navigate(snapshot))
            .flatten();
        if let Some(request) = request {
            log::debug!("a025: loading inventory {} ({:?})", request.id, request.reason);
            self.fetch(request, ctx);
        } else if self.loader.try_with_untracked(ResourceLoader::is_pending).unwrap_or_default() {
            log::debug!("a025: navigation while inventory fetch is in flight");
        }
    }

    fn fetch(&self, request: LoadRequest, ctx: AppGlobalContext) {
        let loader = self.loader;

        spawn_local(async move {
            let outcome = fetch_by_id(&request.id).await;
            match loader.try_update(|loader| loader.settle(request.ticket, outcome)) {
                Some(Settled::Loaded(inventory)) => {
                    log::debug!("a025: inventory {} loaded", request.id);
                    ctx.set_breadcrumb(breadcrumb_for(&request.id, &inventory));
                }
                Some(Settled::Failed(info)) if info.is_not_found() => {
                    log::warn!("a025: inventory {} not found", request.id);
                }
                Some(Settled::Failed(info)) => {
                    log::error!("a025: failed to load inventory {}: {:?}", request.id, info);
                }
                Some(Settled::Stale) => {
                    log::warn!("a025: dropped stale response for inventory {}", request.id);
                }
                None => {
                    log::debug!("a025: page closed before inventory {} loaded", request.id);
                }
            }
        });
    }
}

impl Default for SmartInventoryDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Header crumb for a loaded inventory; links to its details tab.
pub fn breadcrumb_for(id: &str, inventory: &SmartInventory) -> Breadcrumb {
    Breadcrumb {
        title: inventory.name.clone(),
        link: details_path(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_smart_inventory::ui::details::model::FetchError;

    fn inventory(name: &str) -> SmartInventory {
        SmartInventory {
            id: 7,
            name: name.to_string(),
            description: String::new(),
            kind: "smart".into(),
            host_filter: None,
            organization: None,
            created: None,
            modified: None,
        }
    }

    #[test]
    fn test_breadcrumb_names_inventory_and_links_details() {
        let crumb = breadcrumb_for("7", &inventory("Web servers"));
        assert_eq!(crumb.title, "Web servers");
        assert_eq!(crumb.link, "/inventories/smart_inventory/7/details");
    }

    #[test]
    fn test_loaded_settle_yields_breadcrumb() {
        let mut loader = ResourceLoader::new();
        let request = loader
            .navigate(NavigationSnapshot::new("7", "/inventories/smart_inventory/7/hosts"))
            .unwrap();

        let crumb = match loader.settle(request.ticket, Ok(inventory("Edge"))) {
            Settled::Loaded(inventory) => Some(breadcrumb_for(&request.id, &inventory)),
            _ => None,
        };
        assert_eq!(
            crumb,
            Some(Breadcrumb {
                title: "Edge".into(),
                link: "/inventories/smart_inventory/7/details".into(),
            })
        );

        let failed = loader.navigate(NavigationSnapshot::new("8", "/inventories/smart_inventory/8/details")).unwrap();
        let settled = loader.settle(failed.ticket, Err(FetchError::Network("offline".into())));
        assert!(!matches!(settled, Settled::Loaded(_)));
    }
}
