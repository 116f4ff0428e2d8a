//! reqwest-backed appointment backend

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{collection_url, item_url, AppointmentBackend, DEFAULT_API_BASE};
use crate::appointments::{
    Appointment, AppointmentError, AppointmentId, AppointmentRequest, AppointmentResult,
};

/// HTTP client for the appointments REST API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::with_client(Client::new(), DEFAULT_API_BASE)
    }
}

impl HttpBackend {
    /// Create a backend for `base_url`, optionally bounding each request
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppointmentResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppointmentError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turn a non-2xx response into a network error carrying status and body
async fn check(response: Response) -> AppointmentResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(AppointmentError::Network(if text.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {}", status.as_u16(), text.trim())
    }))
}

#[async_trait(?Send)]
impl AppointmentBackend for HttpBackend {
    async fn list(&self) -> AppointmentResult<Vec<Appointment>> {
        let url = collection_url(&self.base_url);
        tracing::debug!(%url, "GET");

        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, request: &AppointmentRequest) -> AppointmentResult<Appointment> {
        let url = collection_url(&self.base_url);
        tracing::debug!(%url, "POST");

        let response = check(self.client.post(&url).json(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(
        &self,
        id: AppointmentId,
        request: &AppointmentRequest,
    ) -> AppointmentResult<Appointment> {
        let url = item_url(&self.base_url, id);
        tracing::debug!(%url, "PUT");

        let response = check(self.client.put(&url).json(request).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: AppointmentId) -> AppointmentResult<()> {
        let url = item_url(&self.base_url, id);
        tracing::debug!(%url, "DELETE");

        check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend() {
        let backend = HttpBackend::default();
        assert_eq!(backend.base_url(), "http://127.0.0.1:5555");
    }

    #[test]
    fn test_base_url_normalized() {
        let backend = HttpBackend::new("http://localhost:9000/", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:9000");
    }
}
