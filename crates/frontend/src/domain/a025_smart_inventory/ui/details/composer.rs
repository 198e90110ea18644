//! Render decision of the detail page.
//!
//! [`compose`] is the whole routing table: given the load state and the
//! resolved route it picks the single body to render and whether the tab
//! chrome is visible.

use super::load_state::{ErrorInfo, LoadState};
use super::routing::{RouteContext, SmartInventoryRoute};
use contracts::domain::a025_smart_inventory::{JobSourceFilter, SmartInventory};

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    /// Replace the current history entry with `to`.
    Redirect { to: String },
    Loading,
    Error(ErrorInfo),
    Details(SmartInventory),
    Edit(SmartInventory),
    Access(SmartInventory),
    Hosts(SmartInventory),
    CompletedJobs {
        inventory: SmartInventory,
        filter: JobSourceFilter,
    },
    /// Unknown sub-route; links to the details tab when the id is known.
    NotFound { details_link: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub show_chrome: bool,
    pub body: PageBody,
}

pub fn compose(state: &LoadState, route: &RouteContext) -> RenderPlan {
    if route.route == SmartInventoryRoute::Root {
        let body = match route.details_path() {
            Some(to) => PageBody::Redirect { to },
            None => PageBody::NotFound { details_link: None },
        };
        return RenderPlan {
            show_chrome: false,
            body,
        };
    }

    let inventory = match state {
        LoadState::Errored(info) => {
            return RenderPlan {
                show_chrome: false,
                body: PageBody::Error(info.clone()),
            }
        }
        LoadState::Loading => {
            return RenderPlan {
                show_chrome: false,
                body: PageBody::Loading,
            }
        }
        LoadState::Loaded(inventory) => inventory.clone(),
    };

    let body = match route.route {
        SmartInventoryRoute::Details => PageBody::Details(inventory),
        SmartInventoryRoute::Edit => PageBody::Edit(inventory),
        SmartInventoryRoute::Access => PageBody::Access(inventory),
        SmartInventoryRoute::Hosts => PageBody::Hosts(inventory),
        SmartInventoryRoute::CompletedJobs => PageBody::CompletedJobs {
            filter: JobSourceFilter::for_inventory(inventory.id),
            inventory,
        },
        SmartInventoryRoute::Unmatched | SmartInventoryRoute::Root => PageBody::NotFound {
            details_link: route.details_path(),
        },
    };

    RenderPlan {
        show_chrome: !route.is_edit_path(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> SmartInventory {
        SmartInventory {
            id: 4,
            name: "Databases".into(),
            description: String::new(),
            kind: "smart".into(),
            host_filter: Some("groups__name=db".into()),
            organization: Some(1),
            created: None,
            modified: None,
        }
    }

    fn at(suffix: &str) -> RouteContext {
        RouteContext::parse(&format!("/inventories/smart_inventory/4{}", suffix))
    }

    fn loaded() -> LoadState {
        LoadState::Loaded(inventory())
    }

    #[test]
    fn test_root_redirects_in_every_state() {
        let expected = PageBody::Redirect {
            to: "/inventories/smart_inventory/4/details".into(),
        };
        for state in [LoadState::Loading, loaded(), LoadState::Errored(ErrorInfo::NotFound)] {
            assert_eq!(compose(&state, &at("")).body, expected);
            assert_eq!(compose(&state, &at("/")).body, expected);
        }
    }

    #[test]
    fn test_loading_hides_everything() {
        for suffix in ["/details", "/edit", "/hosts", "/unknown"] {
            let plan = compose(&LoadState::Loading, &at(suffix));
            assert!(!plan.show_chrome, "{}", suffix);
            assert_eq!(plan.body, PageBody::Loading);
        }
    }

    #[test]
    fn test_error_wins_over_any_route() {
        let state = LoadState::Errored(ErrorInfo::Other {
            message: "Server error 500: boom".into(),
        });
        for suffix in ["/details", "/edit", "/access", "/nope"] {
            let plan = compose(&state, &at(suffix));
            assert!(!plan.show_chrome);
            assert!(matches!(plan.body, PageBody::Error(ErrorInfo::Other { .. })));
        }
    }

    #[test]
    fn test_loaded_routes_to_sub_views() {
        assert_eq!(compose(&loaded(), &at("/details")).body, PageBody::Details(inventory()));
        assert_eq!(compose(&loaded(), &at("/access")).body, PageBody::Access(inventory()));
        assert_eq!(compose(&loaded(), &at("/hosts")).body, PageBody::Hosts(inventory()));
        assert!(compose(&loaded(), &at("/hosts")).show_chrome);
    }

    #[test]
    fn test_edit_hides_chrome_but_renders() {
        let plan = compose(&loaded(), &at("/edit"));
        assert!(!plan.show_chrome);
        assert_eq!(plan.body, PageBody::Edit(inventory()));
    }

    #[test]
    fn test_jobs_get_inventory_filter() {
        let plan = compose(&loaded(), &at("/completed_jobs"));
        assert_eq!(
            plan.body,
            PageBody::CompletedJobs {
                inventory: inventory(),
                filter: JobSourceFilter::for_inventory(4),
            }
        );
    }

    #[test]
    fn test_unknown_suffix_links_to_details() {
        let plan = compose(&loaded(), &at("/schedules"));
        assert!(plan.show_chrome);
        assert_eq!(
            plan.body,
            PageBody::NotFound {
                details_link: Some("/inventories/smart_inventory/4/details".into())
            }
        );
    }

    #[test]
    fn test_path_outside_root_has_no_link() {
        let plan = compose(&loaded(), &RouteContext::parse("/somewhere/else"));
        assert_eq!(plan.body, PageBody::NotFound { details_link: None });
    }
}
