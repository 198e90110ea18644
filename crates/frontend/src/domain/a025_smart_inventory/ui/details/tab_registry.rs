//! Tabs shown in the detail page header.

use super::routing::{route_path, SmartInventoryRoute};
use crate::shared::i18n::I18n;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    pub path: String,
    pub order: u8,
    pub route: SmartInventoryRoute,
}

/// Left-to-right tab order with the message key of each label.
const TABS: [(SmartInventoryRoute, &str); 4] = [
    (SmartInventoryRoute::Details, "tab-details"),
    (SmartInventoryRoute::Access, "tab-access"),
    (SmartInventoryRoute::Hosts, "tab-hosts"),
    (SmartInventoryRoute::CompletedJobs, "tab-completed-jobs"),
];

/// Tabs for inventory `id`; depends only on the identifier and the locale.
pub fn tabs_for(id: &str, i18n: &I18n) -> Vec<Tab> {
    TABS.iter()
        .zip(0u8..)
        .filter_map(|(&(route, label_key), order)| {
            route_path(id, route).map(|path| Tab {
                label: i18n.tr(label_key),
                path,
                order,
                route,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_display_order() {
        let tabs = tabs_for("8", &I18n::new(Some("en-US")));
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Details", "Access", "Hosts", "Completed Jobs"]);
        let orders: Vec<u8> = tabs.iter().map(|t| t.order).collect();
        assert_eq!(orders, [0, 1, 2, 3]);
    }

    #[test]
    fn test_tab_paths_under_resource_root() {
        let paths: Vec<String> = tabs_for("8", &I18n::default())
            .into_iter()
            .map(|t| t.path)
            .collect();
        assert_eq!(
            paths,
            [
                "/inventories/smart_inventory/8/details",
                "/inventories/smart_inventory/8/access",
                "/inventories/smart_inventory/8/hosts",
                "/inventories/smart_inventory/8/completed_jobs",
            ]
        );
    }

    #[test]
    fn test_labels_follow_locale() {
        let tabs = tabs_for("8", &I18n::new(Some("ru-RU")));
        assert_eq!(tabs[0].label, "Подробности");
        assert_eq!(tabs[3].label, "Завершённые задания");
        assert_eq!(tabs[3].path, "/inventories/smart_inventory/8/completed_jobs");
    }

    #[test]
    fn test_edit_is_not_a_tab() {
        let tabs = tabs_for("8", &I18n::default());
        assert!(tabs.iter().all(|t| t.route != SmartInventoryRoute::Edit));
    }
}
