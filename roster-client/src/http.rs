//! HTTP transport for the employee API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP transport trait
///
/// Reads decode JSON; mutations return the raw text body, which is how the
/// backend acknowledges them.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_text<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn put_text<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String>;
    async fn delete_text(&self, path: &str) -> ClientResult<String>;
}

/// Network HTTP client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send and turn any non-2xx status into a [`ClientError::Status`]
    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // The body is only a hint; a failure to read it must not mask the status
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_status(status, &body))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.client.get(self.url(path))).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn post_text<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        Ok(response.text().await?)
    }

    async fn put_text<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<String> {
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        Ok(response.text().await?)
    }

    async fn delete_text(&self, path: &str) -> ClientResult<String> {
        let response = self.send(self.client.delete(self.url(path))).await?;
        Ok(response.text().await?)
    }
}
