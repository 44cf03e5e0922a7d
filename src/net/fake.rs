//! Scripted [`Transport`] for unit tests.
//!
//! Responses are queued up front and handed out in order; every request the
//! client sends is recorded so tests can assert on URLs and headers.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, status_text: &str, body: &str) -> &Self {
        self.push(Ok(HttpResponse {
            status,
            status_text: status_text.to_owned(),
            body: body.to_owned(),
        }))
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, message: &str) -> &Self {
        self.push(Err(ApiError::Network(message.to_owned())))
    }

    fn push(&self, response: Result<HttpResponse, ApiError>) -> &Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())));
        std::future::ready(next)
    }
}
