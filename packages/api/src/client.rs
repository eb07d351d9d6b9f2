//! HTTP client for the Nellis Auto REST API

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::AdminConfig;

use crate::envelope::{DataEnvelope, ErrorBody};
use crate::error::{ApiError, Result};
use crate::payload::Payload;
use crate::resource::{Resource, ResourceClient};

/// API client shared by every admin screen.
///
/// Built once at startup from [`AdminConfig`] and handed out through context.
/// Resource paths are joined onto the base URL, which always ends in `/`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Typed CRUD handle for one resource.
    pub fn resource<R: Resource>(&self) -> ResourceClient<R> {
        ResourceClient::new(self.clone())
    }

    /// GET `path` and decode the whole body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success, or
    /// the body cannot be decoded as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `path` and unwrap its `{ data }` envelope.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let envelope: DataEnvelope<T> = self.get(path, &[]).await?;
        Ok(envelope.data)
    }

    /// Send a create/update body and unwrap the `{ data }` envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if a file part has an invalid MIME type, the request
    /// fails, the status is not a success, or the body cannot be decoded.
    pub async fn send<T: DeserializeOwned>(&self, method: Method, path: &str, payload: Payload) -> Result<T> {
        let request = self.http.request(method, self.url(path));
        let request = match payload {
            Payload::Json(value) => request.json(&value),
            Payload::Multipart(body) => request.multipart(body.into_form()?),
        };
        let body = self.execute(request).await?;
        let envelope: DataEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    /// Send a small JSON body whose response content is not needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    pub async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        let request = self.http.request(method, self.url(path)).json(body);
        self.execute(request).await?;
        Ok(())
    }

    /// DELETE `path`. Any success body is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not a success.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }
        let message = error_message(status, &body);
        tracing::warn!(status = status.as_u16(), "API request failed: {message}");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// `message`, else `error`, else the canonical reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
