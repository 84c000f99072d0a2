//! Yandex Practicum homework status API client

use std::sync::Arc;

use serde_json::Value;

use crate::io::HttpClient;

/// Client for the homework status endpoint
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", endpoint);

        Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            http,
        }
    }

    /// Fetch homework status updates since the given unix timestamp.
    ///
    /// Returns the parsed JSON body opaquely; shape enforcement happens
    /// downstream in [`crate::response::extract_homeworks`].
    pub async fn fetch_updates(&self, since: u64) -> crate::Result<Value> {
        let auth = format!("OAuth {}", self.token);
        let since_str = since.to_string();
        let headers = [("Authorization", auth.as_str())];
        let query = [("from_date", since_str.as_str())];

        tracing::debug!("Fetching homework statuses from_date={}", since);

        let response = match self.http.get(&self.endpoint, &headers, &query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Failed to fetch homework statuses: {}", e);
                return Err(crate::HomeworkBotError::ApiUnavailable(
                    "status endpoint request failed".to_string(),
                ));
            }
        };

        if response.status != 200 {
            tracing::error!(
                "Homework status endpoint returned status {}",
                response.status
            );
            return Err(crate::HomeworkBotError::ApiUnavailable(format!(
                "status endpoint returned {}",
                response.status
            )));
        }

        let value = serde_json::from_str(&response.body)?;
        Ok(value)
    }
}
