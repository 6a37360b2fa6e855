//! HTTP client for the external CRM backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns every business rule; this host only calls its anonymous
//! account endpoints (sign-in, registration) and pings it for readiness.
//! Bearer-authenticated data calls are made by the browser, not here.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never produced an HTTP response.
    #[error("backend request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("backend response decode failed: {0}")]
    Decode(String),
}

/// Successful sign-in payload from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    /// Bearer token for subsequent API calls.
    pub token: String,
    /// Role string; parsed by the caller against the access policy.
    pub role: String,
    /// Display name of the account.
    pub name: String,
}

/// Registration payload forwarded verbatim to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Thin reqwest wrapper around the backend's account endpoints.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /accounts/login/` — exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// [`BackendError::Status`] on non-2xx, [`BackendError::Request`] on
    /// transport failure, [`BackendError::Decode`] on an unexpected body.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, BackendError> {
        let resp = self
            .http
            .post(self.endpoint("/accounts/login/"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status().as_u16()));
        }

        resp.json::<SignInResponse>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// `POST /accounts/register/` — create a pending staff account.
    ///
    /// # Errors
    ///
    /// Same mapping as [`Self::sign_in`]; the success body is ignored.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), BackendError> {
        let resp = self
            .http
            .post(self.endpoint("/accounts/register/"))
            .json(payload)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status().as_u16()));
        }
        Ok(())
    }

    /// Readiness ping against the backend root.
    ///
    /// # Errors
    ///
    /// [`BackendError::Status`] when the backend answers non-2xx,
    /// [`BackendError::Request`] when it does not answer at all.
    pub async fn health(&self) -> Result<(), BackendError> {
        let resp = self
            .http
            .get(self.endpoint("/"))
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}
