//! Authenticated request client and typed endpoint helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view talks to the API through [`ApiClient`]. It resolves relative
//! paths against [`ApiConfig`], optionally attaches `Authorization: Bearer`
//! with the token read fresh from [`TokenStore`], and turns non-2xx answers
//! into [`ApiError::Status`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here retries, times out, or notifies the user. Each call resolves
//! or fails exactly once and the calling view decides how to surface it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{FetchTransport, HttpRequest, HttpResponse, Method, Transport};
use super::types::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    SearchResponse, WeatherResponse,
};
use crate::config::ApiConfig;
use crate::storage::TokenStore;

/// Issues GET/POST/PUT/DELETE calls against the configured API origin.
#[derive(Clone)]
pub struct ApiClient<T: Transport = FetchTransport> {
    config: ApiConfig,
    tokens: TokenStore,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, tokens: TokenStore, transport: T) -> Self {
        Self { config, tokens, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Token store consulted for authenticated calls.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// `GET path`, decoding the JSON body as `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str, require_auth: bool) -> Result<R, ApiError> {
        self.call(Method::Get, path, None, require_auth).await
    }

    /// `POST path` with a JSON body. A `201`/`204` with an empty body decodes
    /// as `{}`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B, R>(&self, path: &str, body: &B, require_auth: bool) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.call(Method::Post, path, Some(body), require_auth).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B, R>(&self, path: &str, body: &B, require_auth: bool) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.call(Method::Put, path, Some(body), require_auth).await
    }

    /// `DELETE path`, decoding the JSON body as `R`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str, require_auth: bool) -> Result<R, ApiError> {
        self.call(Method::Delete, path, None, require_auth).await
    }

    /// Fire-and-forget call: fails on a non-2xx status but never looks at
    /// the response body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; never [`ApiError::Decode`].
    pub async fn send_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        require_auth: bool,
    ) -> Result<(), ApiError> {
        let body = body
            .map(|b| serde_json::to_string(b).map_err(ApiError::Encode))
            .transpose()?;
        let request = self.build_request(method, path, body, require_auth)?;
        self.round_trip(request).await.map(|_| ())
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        require_auth: bool,
    ) -> Result<R, ApiError> {
        let request = self.build_request(method, path, body, require_auth)?;
        let response = self.round_trip(request).await?;
        decode_body(method, &response)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        require_auth: bool,
    ) -> Result<HttpRequest, ApiError> {
        if !path.starts_with('/') {
            return Err(ApiError::InvalidPath(path.to_owned()));
        }
        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if require_auth {
            headers.push(("Authorization".to_owned(), bearer(&self.tokens.token())));
        }
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body,
        })
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("{} {url} failed: {e}", method.as_str());
        })?;
        log::debug!("{} {url} -> {}", method.as_str(), response.status);
        if !response.is_success() {
            return Err(ApiError::status(response.status, &response.status_text));
        }
        Ok(response)
    }
}

/// `Bearer <token>`; an empty token still yields the header.
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn decode_body<R: DeserializeOwned>(method: Method, response: &HttpResponse) -> Result<R, ApiError> {
    let empty = response.body.trim().is_empty();
    if method == Method::Post && empty && matches!(response.status, 201 | 204) {
        return serde_json::from_str("{}").map_err(ApiError::Decode);
    }
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

fn search_path(query: &str, language: Option<&str>) -> String {
    let mut path = format!("/search?q={}", urlencoding::encode(query));
    if let Some(language) = language.filter(|l| !l.is_empty()) {
        path.push_str("&language=");
        path.push_str(&urlencoding::encode(language));
    }
    path
}

/// `POST /login`.
///
/// # Errors
///
/// Fails with the server's status text on bad credentials.
pub async fn login<T: Transport>(api: &ApiClient<T>, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    api.post("/login", request, false).await
}

/// `POST /register`. The success body is not read; the server answers with
/// plain text or nothing.
///
/// # Errors
///
/// Fails with the server's status text when the account is rejected.
pub async fn register<T: Transport>(api: &ApiClient<T>, request: &RegisterRequest) -> Result<(), ApiError> {
    let body = serde_json::to_value(request).map_err(ApiError::Encode)?;
    api.send_empty(Method::Post, "/register", Some(&body), false).await
}

/// `GET /logout` with the current bearer token.
///
/// # Errors
///
/// Fails on a non-2xx status; the body is never parsed.
pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), ApiError> {
    api.send_empty(Method::Get, "/logout", None, true).await
}

/// `GET /search?q=...[&language=...]`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn search<T: Transport>(
    api: &ApiClient<T>,
    query: &str,
    language: Option<&str>,
) -> Result<SearchResponse, ApiError> {
    api.get(&search_path(query, language), false).await
}

/// `GET /weather`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn weather<T: Transport>(api: &ApiClient<T>) -> Result<WeatherResponse, ApiError> {
    api.get("/weather", false).await
}

/// `POST /change-password`. Like [`register`], the success body is ignored.
///
/// # Errors
///
/// Fails with the server's status text when the old password is wrong.
pub async fn change_password<T: Transport>(
    api: &ApiClient<T>,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    let body = serde_json::to_value(request).map_err(ApiError::Encode)?;
    api.send_empty(Method::Post, "/change-password", Some(&body), false)
        .await
}
