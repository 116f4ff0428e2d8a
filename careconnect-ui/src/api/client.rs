//! HTTP API Client
//!
//! gloo-net implementation of the appointments backend, plus the base URL
//! setting kept in local storage.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use careconnect::client::{collection_url, item_url};
use careconnect::{
    Appointment, AppointmentBackend, AppointmentError, AppointmentId, AppointmentRequest,
    AppointmentResult, DEFAULT_API_BASE,
};

const API_URL_KEY: &str = "careconnect_api_url";

/// Trim whitespace and trailing slashes; empty input means the default
pub fn normalize_api_base(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        url.to_string()
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_api_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_api_base(url));
        }
    }
}

fn network(err: gloo_net::Error) -> AppointmentError {
    AppointmentError::Network(err.to_string())
}

async fn check(response: Response) -> AppointmentResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(AppointmentError::Network(if text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {}", text.trim())
    }))
}

/// Appointments backend reached through the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_api_base(base_url),
        }
    }
}

#[async_trait(?Send)]
impl AppointmentBackend for GlooBackend {
    async fn list(&self) -> AppointmentResult<Vec<Appointment>> {
        let response = Request::get(&collection_url(&self.base_url))
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json().await.map_err(network)
    }

    async fn create(&self, request: &AppointmentRequest) -> AppointmentResult<Appointment> {
        let response = Request::post(&collection_url(&self.base_url))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json().await.map_err(network)
    }

    async fn update(
        &self,
        id: AppointmentId,
        request: &AppointmentRequest,
    ) -> AppointmentResult<Appointment> {
        let response = Request::put(&item_url(&self.base_url, id))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        check(response).await?.json().await.map_err(network)
    }

    async fn delete(&self, id: AppointmentId) -> AppointmentResult<()> {
        let response = Request::delete(&item_url(&self.base_url, id))
            .send()
            .await
            .map_err(network)?;

        check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(normalize_api_base("http://127.0.0.1:5555/"), "http://127.0.0.1:5555");
        assert_eq!(normalize_api_base("  "), DEFAULT_API_BASE);
        assert_eq!(normalize_api_base(" http://clinic.local "), "http://clinic.local");
    }
}
