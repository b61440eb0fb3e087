use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;

use crate::error::SyncError;
use crate::utils::inputs::require_input;

/// HTTP client bound to the pack backend: base URL plus bearer credential,
/// both taken from the pipeline inputs. One instance serves every category
/// sync; there is no retry and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct WebClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl WebClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        WebClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Builds the client from the `api` and `web_token` inputs. A missing
    /// token is a configuration error and is raised here, before any
    /// network call.
    pub fn from_inputs() -> Result<Self, SyncError> {
        let base_url = require_input("api")?;
        let token = require_input("web_token")?;
        Ok(WebClient::new(base_url, token))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get(&self, path: &str) -> Result<Value, SyncError> {
        let request = self.client.get(self.url(path)).bearer_auth(&self.token);
        Self::handle_response(path, request.send().await?).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, SyncError> {
        let request = self
            .client
            .put(self.url(path))
            .bearer_auth(&self.token)
            .json(body);
        Self::handle_response(path, request.send().await?).await
    }

    /// Same verb, multipart body; reqwest swaps the content type for the
    /// form's boundary headers.
    pub async fn put_multipart(&self, path: &str, form: Form) -> Result<Value, SyncError> {
        let request = self
            .client
            .put(self.url(path))
            .bearer_auth(&self.token)
            .multipart(form);
        Self::handle_response(path, request.send().await?).await
    }

    async fn handle_response(path: &str, response: reqwest::Response) -> Result<Value, SyncError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Api {
                path: path.to_string(),
                status,
                body,
            });
        }

        // Backends answer some PUTs with an empty body; treat that as null
        // rather than a parse failure.
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}
