use serde::{Deserialize, Serialize};

/// Numeric identifier of a smart inventory as issued by the API.
pub type SmartInventoryId = i64;

/// Smart inventory as returned by `GET /api/v2/inventories/{id}/`.
///
/// Host membership is computed from `host_filter` on the server, so the
/// record itself carries no host list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartInventory {
    pub id: SmartInventoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `"smart"` for smart inventories, empty for regular ones
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub host_filter: Option<String>,
    #[serde(default)]
    pub organization: Option<i64>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
}

impl SmartInventory {
    pub fn is_smart(&self) -> bool {
        self.kind == "smart"
    }
}

/// Body of `PATCH /api/v2/inventories/{id}/` sent by the edit view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartInventoryPatch {
    pub name: String,
    pub description: String,
    pub host_filter: Option<String>,
}

impl From<&SmartInventory> for SmartInventoryPatch {
    fn from(inventory: &SmartInventory) -> Self {
        Self {
            name: inventory.name.clone(),
            description: inventory.description.clone(),
            host_filter: inventory.host_filter.clone(),
        }
    }
}

/// Default parameters for the unified jobs list of one inventory.
///
/// The four fields are OR-ed by the API, so the list contains playbook runs,
/// ad hoc commands, inventory source updates and workflow jobs that target
/// the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSourceFilter {
    #[serde(rename = "or__job__inventory")]
    pub job_inventory: SmartInventoryId,
    #[serde(rename = "or__adhoccommand__inventory")]
    pub adhoc_command_inventory: SmartInventoryId,
    #[serde(rename = "or__inventoryupdate__inventory_source__inventory")]
    pub inventory_update_source_inventory: SmartInventoryId,
    #[serde(rename = "or__workflowjob__inventory")]
    pub workflow_job_inventory: SmartInventoryId,
}

impl JobSourceFilter {
    pub fn for_inventory(id: SmartInventoryId) -> Self {
        Self {
            job_inventory: id,
            adhoc_command_inventory: id,
            inventory_update_source_inventory: id,
            workflow_job_inventory: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_payload() {
        let inventory: SmartInventory =
            serde_json::from_str(r#"{"id": 7, "name": "Edge routers"}"#).unwrap();
        assert_eq!(inventory.id, 7);
        assert_eq!(inventory.name, "Edge routers");
        assert!(inventory.host_filter.is_none());
        assert!(!inventory.is_smart());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{
            "id": 2,
            "name": "Smart",
            "kind": "smart",
            "host_filter": "name__icontains=web",
            "organization": 1,
            "summary_fields": {"organization": {"id": 1, "name": "Default"}}
        }"#;
        let inventory: SmartInventory = serde_json::from_str(json).unwrap();
        assert!(inventory.is_smart());
        assert_eq!(inventory.host_filter.as_deref(), Some("name__icontains=web"));
        assert_eq!(inventory.organization, Some(1));
    }

    #[test]
    fn test_job_filter_uses_api_field_names() {
        let value = serde_json::to_value(JobSourceFilter::for_inventory(42)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in [
            "or__job__inventory",
            "or__adhoccommand__inventory",
            "or__inventoryupdate__inventory_source__inventory",
            "or__workflowjob__inventory",
        ] {
            assert_eq!(object[key], 42);
        }
    }
}
