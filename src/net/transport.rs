//! HTTP transport seam under the request client.
//!
//! DESIGN
//! ======
//! [`ApiClient`](super::api::ApiClient) builds a fully-formed [`HttpRequest`]
//! and hands it to a [`Transport`]. The browser build sends it with
//! `gloo-net`; tests substitute a scripted transport. A transport only moves
//! bytes: status checks and JSON decoding stay in the client.

use std::future::Future;

use super::error::ApiError;

/// HTTP methods the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Outgoing request, already resolved against the base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as received from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and resolves exactly once.
pub trait Transport: Clone + 'static {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Browser `fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        async move {
            #[cfg(feature = "csr")]
            {
                use gloo_net::http::Request;

                let mut builder = match request.method {
                    Method::Get => Request::get(&request.url),
                    Method::Post => Request::post(&request.url),
                    Method::Put => Request::put(&request.url),
                    Method::Delete => Request::delete(&request.url),
                };
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                let outgoing = match request.body {
                    Some(body) => builder.body(body),
                    None => builder.build(),
                }
                .map_err(|e| ApiError::Network(e.to_string()))?;

                let resp = outgoing
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
                Ok(HttpResponse {
                    status: resp.status(),
                    status_text: resp.status_text(),
                    body,
                })
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = request;
                Err(ApiError::Unavailable)
            }
        }
    }
}
