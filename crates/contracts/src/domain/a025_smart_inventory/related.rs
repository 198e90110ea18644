//! Records listed by the smart inventory sub-views.

use serde::{Deserialize, Serialize};

/// One page of a paginated API list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedJobSummary {
    pub id: i64,
    pub name: String,
    pub status: String,
    #[serde(default, rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub finished: Option<String>,
}

/// User entry of `/api/v2/inventories/{id}/access_list/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl AccessRecord {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            format!("{} ({})", full, self.username)
        }
    }
}
