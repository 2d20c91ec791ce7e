//! The axios-analog: one thin wrapper every service call goes through.
//!
//! DESIGN
//! ======
//! `ApiClient` owns a `reqwest::Client`, the backend base URL, and a
//! [`SessionStore`]. The bearer token is read from the store on every
//! request rather than captured at construction, so a login performed
//! mid-session is picked up by the next call with no rebuild.
//!
//! Every 2xx body is an [`ApiEnvelope`] and is unwrapped here; services
//! deal only in domain types. Every non-2xx is classified and logged once
//! here (the interceptor), then returned as [`ApiError::Status`] — no
//! retry, no redirect, no token clearing.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use models::ApiEnvelope;

use super::error::{ApiError, StatusClass, extract_message};
use crate::session::store::SessionStore;

/// Whether a request carries the bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Attach `Authorization: Bearer <token>`; fail fast if none is stored.
    Bearer,
    /// Send without credentials (login, register).
    Public,
}

/// Thin HTTP client for the backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

/// Join a base URL and an absolute path without doubling slashes.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// One interceptor-style log line per failing response, routed by class.
fn log_failure(code: u16, class: StatusClass, message: &str) {
    match class {
        StatusClass::Unauthorized => {
            // Auto-redirect on 401 is deliberately disabled; log and move on.
            tracing::warn!(code, message, "unauthorized response; session left intact");
        }
        StatusClass::Forbidden | StatusClass::NotFound | StatusClass::Validation => {
            tracing::warn!(code, class = %class, message, "backend rejected request");
        }
        StatusClass::Server | StatusClass::Other => {
            tracing::error!(code, class = %class, message, "backend call failed");
        }
    }
}

impl ApiClient {
    /// Build a client against `base_url` using `session` for credentials.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), session }
    }

    /// The session store this client reads its token from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// GET an enveloped payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; all request helpers share the same failure modes.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, Auth::Bearer).await
    }

    /// POST a JSON body and decode the enveloped payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body), Auth::Bearer).await
    }

    /// POST without credentials, for login and registration.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body), Auth::Public).await
    }

    /// PUT a JSON body and decode the enveloped payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, Some(body), Auth::Bearer).await
    }

    /// POST expecting an acknowledgement envelope with no payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_ack(&self, path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        let body = serde_json::to_value(body)?;
        let response = self
            .send(Method::POST, path, Some(body), Auth::Bearer)
            .await?;
        Self::handle_ack(response).await
    }

    /// DELETE expecting an acknowledgement envelope.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None, Auth::Bearer).await?;
        Self::handle_ack(response).await
    }

    /// POST a multipart form (proof-image uploads) and decode the payload.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let token = self.bearer_token()?;
        let response = self
            .http
            .post(join_url(&self.base_url, path))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .multipart(form)
            .send()
            .await?;
        Self::handle(response).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body, auth).await?;
        Self::handle(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(method, join_url(&self.base_url, path));
        if auth == Auth::Bearer {
            let token = self.bearer_token()?;
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(json) = body {
            request = request.json(&json);
        }
        Ok(request.send().await?)
    }

    fn bearer_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = Self::check(response).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_value(body)?;
        Ok(envelope.into_result()?)
    }

    async fn handle_ack(response: reqwest::Response) -> Result<(), ApiError> {
        let body = Self::check(response).await?;
        // Some delete endpoints answer 204 with no body at all.
        if body.is_null() {
            return Ok(());
        }
        let envelope: ApiEnvelope<Value> = serde_json::from_value(body)?;
        Ok(envelope.ack()?)
    }

    /// Classify and log non-2xx responses; hand back the raw body otherwise.
    async fn check(response: reqwest::Response) -> Result<Value, ApiError> {
        let code = response.status().as_u16();
        let success = response.status().is_success();
        let body = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::Null);

        if success {
            return Ok(body);
        }
        let class = StatusClass::of(code);
        let message = extract_message(code, &body);
        log_failure(code, class, &message);
        Err(ApiError::Status { code, class, message })
    }
}
