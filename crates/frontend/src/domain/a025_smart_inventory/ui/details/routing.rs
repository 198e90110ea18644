//! Route tags for the smart inventory detail page.
//!
//! The pathname is resolved once per navigation into a [`RouteContext`];
//! everything downstream matches on [`SmartInventoryRoute`] instead of
//! testing string suffixes.

/// Listing page the error states link back to.
pub const INVENTORIES_LIST_PATH: &str = "/inventories";

/// Prefix shared by every smart inventory page: `/inventories/smart_inventory/:id/...`.
pub const SMART_INVENTORY_ROOT: &str = "/inventories/smart_inventory";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmartInventoryRoute {
    /// Bare resource root, redirected to [`SmartInventoryRoute::Details`].
    Root,
    Details,
    Edit,
    Access,
    Hosts,
    CompletedJobs,
    Unmatched,
}

impl SmartInventoryRoute {
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Details => Some("details"),
            Self::Edit => Some("edit"),
            Self::Access => Some("access"),
            Self::Hosts => Some("hosts"),
            Self::CompletedJobs => Some("completed_jobs"),
            Self::Root | Self::Unmatched => None,
        }
    }

    fn from_segment(segment: &str) -> Self {
        match segment {
            "details" => Self::Details,
            "edit" => Self::Edit,
            "access" => Self::Access,
            "hosts" => Self::Hosts,
            "completed_jobs" => Self::CompletedJobs,
            _ => Self::Unmatched,
        }
    }
}

/// `/inventories/smart_inventory/<id>`, no trailing slash.
pub fn resource_root(id: &str) -> String {
    format!("{}/{}", SMART_INVENTORY_ROOT, id)
}

/// Link target of a sub-view; `None` for routes that have no page of their own.
pub fn route_path(id: &str, route: SmartInventoryRoute) -> Option<String> {
    route
        .suffix()
        .map(|suffix| format!("{}/{}", resource_root(id), suffix))
}

pub fn details_path(id: &str) -> String {
    format!("{}/details", resource_root(id))
}

/// Current location as seen by the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    pub pathname: String,
    /// Identifier segment, `None` when the path is not under the smart
    /// inventory root or the segment is empty.
    pub id: Option<String>,
    pub route: SmartInventoryRoute,
}

impl RouteContext {
    pub fn parse(pathname: &str) -> Self {
        let unmatched = || Self {
            pathname: pathname.to_string(),
            id: None,
            route: SmartInventoryRoute::Unmatched,
        };

        let Some(rest) = pathname
            .strip_prefix(SMART_INVENTORY_ROOT)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return unmatched();
        };

        let (id, tail) = rest.split_once('/').unwrap_or((rest, ""));
        if id.is_empty() {
            return unmatched();
        }

        // Sub-routes match on their first segment, so `/details/extra` still
        // lands on the details tab.
        let route = match tail.split('/').next().unwrap_or_default() {
            "" => SmartInventoryRoute::Root,
            segment => SmartInventoryRoute::from_segment(segment),
        };

        Self {
            pathname: pathname.to_string(),
            id: Some(id.to_string()),
            route,
        }
    }

    /// Tab chrome is hidden on any path ending in `edit`.
    pub fn is_edit_path(&self) -> bool {
        self.pathname.ends_with("edit")
    }

    pub fn details_path(&self) -> Option<String> {
        self.id.as_deref().map(details_path)
    }
}
