//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and fetching JSON.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::view_state::QueryMap;

/// Port of the REST backend (Django dev server).
pub const API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a list endpoint URL: `{base}/api/{resource}/?{params}`
pub fn api_list_url(base: &str, resource: &str, params: &QueryMap) -> String {
    format!("{}/api/{}/{}", base, resource, params.to_search_string())
}

/// GET a JSON array from a list endpoint
pub async fn fetch_list<T: DeserializeOwned>(resource: &str, params: &QueryMap) -> Result<Vec<T>, String> {
    let url = api_list_url(&api_base(), resource, params);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: HTTP {}", resource, response.status()));
    }

    response
        .json::<Vec<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_list_url() {
        let params = QueryMap::parse("status=low&search=silk PLA");
        assert_eq!(
            api_list_url("http://localhost:8000", "filament-spools", &params),
            "http://localhost:8000/api/filament-spools/?status=low&search=silk%20PLA"
        );
        assert_eq!(
            api_list_url("", "brands", &QueryMap::new()),
            "/api/brands/"
        );
    }
}
