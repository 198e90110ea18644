//! API URL helpers.
//!
//! The API server listens on port 3000 of the host that served the page.

/// Base URL for API requests, e.g. `"https://controller.example:3000"`.
///
/// Empty when no window is available, which turns every request path into a
/// relative URL.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL for an API path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// API path of one inventory record. The id is percent-encoded since it comes
/// straight from the address bar.
pub fn inventory_api_path(id: &str) -> String {
    format!("/api/v2/inventories/{}/", urlencoding::encode(id))
}
