//! Fetch lifecycle of the detail page.
//!
//! [`ResourceLoader`] decides when a navigation requires a (re)load and owns
//! the single [`LoadState`] slot. Every load takes a ticket; only the most
//! recently issued ticket may settle the slot, so a slow response can never
//! overwrite the result of a newer request.

use super::load_state::{ErrorInfo, LoadState};
use super::model::FetchError;
use super::routing::{details_path, resource_root, RouteContext, SmartInventoryRoute};
use contracts::domain::a025_smart_inventory::SmartInventory;

/// Location fields that identify a navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

/// Inputs of the load effect: the route identifier plus the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub id: String,
    pub location: LocationSnapshot,
}

impl NavigationSnapshot {
    pub fn new(id: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: LocationSnapshot {
                pathname: pathname.into(),
                ..LocationSnapshot::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReason {
    /// First navigation seen by the page.
    Mount,
    /// The route now names a different inventory.
    IdentityChanged,
    /// Came back to the details tab from another page of the same inventory.
    ReturnedToDetails,
}

/// Whether moving from `previous` to `current` requires loading the inventory.
///
/// Tab switches do not refetch. Landing on the details tab from a path nested
/// under the resource root does, which refreshes the record after an edit.
/// The bare root, with or without a trailing slash, is not nested, so its
/// redirect to the details tab does not count.
pub fn load_reason(previous: Option<&NavigationSnapshot>, current: &NavigationSnapshot) -> Option<LoadReason> {
    let Some(previous) = previous else {
        return Some(LoadReason::Mount);
    };
    if previous.id != current.id {
        return Some(LoadReason::IdentityChanged);
    }

    let nested_prefix = format!("{}/", resource_root(&current.id));
    let was_nested = previous.location.pathname.starts_with(&nested_prefix)
        && RouteContext::parse(&previous.location.pathname).route != SmartInventoryRoute::Root;
    let changed = previous.location != current.location;
    let on_details = current.location.pathname == details_path(&current.id);

    (was_nested && changed && on_details).then_some(LoadReason::ReturnedToDetails)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A fetch the caller has to perform and hand back through [`ResourceLoader::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: String,
    pub reason: LoadReason,
    pub ticket: LoadTicket,
}

/// Outcome of [`ResourceLoader::settle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    /// Slot now holds the inventory; the breadcrumb should show it.
    Loaded(SmartInventory),
    Failed(ErrorInfo),
    /// A newer load was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceLoader {
    state: LoadState,
    previous: Option<NavigationSnapshot>,
    issued: u64,
    pending: Option<LoadTicket>,
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Records the navigation and returns the load it requires, if any.
    pub fn navigate(&mut self, current: NavigationSnapshot) -> Option<LoadRequest> {
        let reason = load_reason(self.previous.as_ref(), &current);
        let id = current.id.clone();
        self.previous = Some(current);
        reason.map(|reason| LoadRequest {
            ticket: self.begin(),
            id,
            reason,
        })
    }

    /// Enters `Loading` and issues a ticket that supersedes any pending one.
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        self.pending = Some(ticket);
        self.state = LoadState::Loading;
        ticket
    }

    pub fn settle(&mut self, ticket: LoadTicket, outcome: Result<SmartInventory, FetchError>) -> Settled {
        if self.pending != Some(ticket) {
            return Settled::Stale;
        }
        self.pending = None;

        match outcome {
            Ok(inventory) => {
                self.state = LoadState::Loaded(inventory.clone());
                Settled::Loaded(inventory)
            }
            Err(err) => {
                let info = ErrorInfo::classify(&err);
                self.state = LoadState::Errored(info.clone());
                Settled::Failed(info)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/inventories/smart_inventory/1";

    fn nav(suffix: &str) -> NavigationSnapshot {
        NavigationSnapshot::new("1", format!("{}{}", ROOT, suffix))
    }

    fn inventory(name: &str) -> SmartInventory {
        SmartInventory {
            id: 1,
            name: name.to_string(),
            description: String::new(),
            kind: "smart".into(),
            host_filter: None,
            organization: None,
            created: None,
            modified: None,
        }
    }

    fn not_found() -> FetchError {
        FetchError::Status {
            status: 404,
            message: "Not found.".into(),
        }
    }

    /// Replays a navigation sequence and counts the loads it issues.
    fn loads_for(paths: &[&str]) -> Vec<LoadReason> {
        let mut loader = ResourceLoader::new();
        paths
            .iter()
            .filter_map(|suffix| loader.navigate(nav(suffix)))
            .map(|request| request.reason)
            .collect()
    }

    #[test]
    fn test_mount_loads_once() {
        let mut loader = ResourceLoader::new();
        assert_eq!(loader.state(), &LoadState::Loading);

        let request = loader.navigate(nav("/hosts")).unwrap();
        assert_eq!(request.reason, LoadReason::Mount);
        assert_eq!(request.id, "1");
        assert!(loader.is_pending());
        assert!(loader.navigate(nav("/hosts")).is_none());
    }

    #[test]
    fn test_returning_to_details_reloads() {
        assert_eq!(
            loads_for(&["/access", "/details"]),
            vec![LoadReason::Mount, LoadReason::ReturnedToDetails]
        );
        assert_eq!(
            loads_for(&["/edit", "/details"]),
            vec![LoadReason::Mount, LoadReason::ReturnedToDetails]
        );
    }

    #[test]
    fn test_tab_switch_does_not_reload() {
        assert_eq!(loads_for(&["/details", "/hosts"]), vec![LoadReason::Mount]);
        assert_eq!(
            loads_for(&["/details", "/access", "/completed_jobs"]),
            vec![LoadReason::Mount]
        );
    }

    #[test]
    fn test_root_redirect_does_not_reload() {
        assert_eq!(loads_for(&["", "/details"]), vec![LoadReason::Mount]);
        assert_eq!(loads_for(&["/", "/details"]), vec![LoadReason::Mount]);
        assert_eq!(
            loads_for(&["/details", "/", "/details"]),
            vec![LoadReason::Mount]
        );
    }

    #[test]
    fn test_same_location_does_not_reload() {
        assert_eq!(loads_for(&["/details", "/details"]), vec![LoadReason::Mount]);
    }

    #[test]
    fn test_query_change_on_details_reloads() {
        let mut loader = ResourceLoader::new();
        loader.navigate(nav("/details"));
        let mut with_query = nav("/details");
        with_query.location.search = "?page=2".into();
        let request = loader.navigate(with_query).unwrap();
        assert_eq!(request.reason, LoadReason::ReturnedToDetails);
    }

    #[test]
    fn test_identity_change_reloads() {
        let mut loader = ResourceLoader::new();
        loader.navigate(nav("/hosts"));
        let request = loader
            .navigate(NavigationSnapshot::new("2", "/inventories/smart_inventory/2/hosts"))
            .unwrap();
        assert_eq!(request.reason, LoadReason::IdentityChanged);
        assert_eq!(request.id, "2");
    }

    #[test]
    fn test_success_publishes_resource() {
        let mut loader = ResourceLoader::new();
        let request = loader.navigate(nav("/details")).unwrap();

        let settled = loader.settle(request.ticket, Ok(inventory("Web servers")));
        assert_eq!(settled, Settled::Loaded(inventory("Web servers")));
        assert_eq!(loader.state(), &LoadState::Loaded(inventory("Web servers")));
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_failures_are_classified() {
        let mut loader = ResourceLoader::new();
        let request = loader.navigate(nav("/details")).unwrap();
        assert_eq!(
            loader.settle(request.ticket, Err(not_found())),
            Settled::Failed(ErrorInfo::NotFound)
        );
        assert_eq!(loader.state(), &LoadState::Errored(ErrorInfo::NotFound));

        let ticket = loader.begin();
        let settled = loader.settle(ticket, Err(FetchError::Network("offline".into())));
        assert!(matches!(settled, Settled::Failed(ErrorInfo::Other { .. })));
    }

    #[test]
    fn test_reload_reenters_loading() {
        let mut loader = ResourceLoader::new();
        let first = loader.navigate(nav("/access")).unwrap();
        loader.settle(first.ticket, Ok(inventory("Before")));

        let second = loader.navigate(nav("/details")).unwrap();
        assert_eq!(loader.state(), &LoadState::Loading);
        loader.settle(second.ticket, Ok(inventory("After")));
        assert_eq!(loader.state(), &LoadState::Loaded(inventory("After")));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut loader = ResourceLoader::new();
        let first = loader.navigate(nav("/access")).unwrap();
        let second = loader.navigate(nav("/details")).unwrap();

        assert_eq!(loader.settle(second.ticket, Ok(inventory("Fresh"))), Settled::Loaded(inventory("Fresh")));
        assert_eq!(loader.settle(first.ticket, Err(not_found())), Settled::Stale);
        assert_eq!(loader.state(), &LoadState::Loaded(inventory("Fresh")));
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut loader = ResourceLoader::new();
        let ticket = loader.begin();
        loader.settle(ticket, Ok(inventory("Once")));
        assert_eq!(loader.settle(ticket, Err(not_found())), Settled::Stale);
        assert_eq!(loader.state(), &LoadState::Loaded(inventory("Once")));
    }
}
