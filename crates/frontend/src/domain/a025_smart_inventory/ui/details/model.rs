//! API layer for the smart inventory detail page

use crate::shared::api_utils::{api_url, inventory_api_path};
use contracts::domain::a025_smart_inventory::{JobSourceFilter, ListPage, SmartInventory, SmartInventoryPatch};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

pub const NOT_FOUND_STATUS: u16 = 404;

/// Transport-level failure of an API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch: {0}")]
    Network(String),
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

pub async fn fetch_by_id(id: &str) -> Result<SmartInventory, FetchError> {
    let url = api_url(&inventory_api_path(id));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn update_inventory(id: &str, patch: &SmartInventoryPatch) -> Result<SmartInventory, FetchError> {
    let url = api_url(&inventory_api_path(id));
    let response = Request::patch(&url)
        .json(patch)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(response).await
}

/// First page of a related list, e.g. `hosts/` or `access_list/` of an inventory.
pub async fn fetch_related<T: DeserializeOwned>(id: &str, relation: &str) -> Result<ListPage<T>, FetchError> {
    let url = api_url(&format!("{}{}/", inventory_api_path(id), relation));
    fetch_list(&url).await
}

/// Completed unified jobs that ran against the inventory, newest first.
pub async fn fetch_completed_jobs<T: DeserializeOwned>(filter: &JobSourceFilter) -> Result<ListPage<T>, FetchError> {
    let url = api_url(&format!("/api/v2/unified_jobs/?{}", completed_jobs_query(filter)));
    fetch_list(&url).await
}

/// Smart inventories for the listing page.
pub async fn fetch_smart_inventories() -> Result<ListPage<SmartInventory>, FetchError> {
    fetch_list(&api_url("/api/v2/inventories/?kind=smart&order_by=name")).await
}

/// Query string for the jobs list: the four inventory filters plus the
/// finished-only and ordering defaults of the jobs view.
pub fn completed_jobs_query(filter: &JobSourceFilter) -> String {
    let filters = serde_qs::to_string(filter).unwrap_or_default();
    format!("{}&not__launch_type=sync&finished__isnull=false&order_by=-finished", filters)
}

async fn fetch_list<T: DeserializeOwned>(url: &str) -> Result<ListPage<T>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => response.status_text(),
        };
        return Err(FetchError::Status { status, message });
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}
