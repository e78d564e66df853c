//! Shared test doubles.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use trendswell_protocols::error::TransportError;
use trendswell_protocols::transport::{HttpRequest, HttpResponse, HttpTransport};

enum Scripted {
    Response { status: u16, body: Value },
    NetworkError(String),
}

/// Transport that replays scripted responses and records every request.
///
/// When the script runs dry it answers 200 with a null body.
pub struct FakeTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(self, status: u16, body: Value) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Response { status, body });
        self
    }

    pub fn fail_with(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::NetworkError(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Response { status, body }) => Ok(HttpResponse::new(status, body)),
            Some(Scripted::NetworkError(message)) => Err(TransportError::Network(message)),
            None => Ok(HttpResponse::new(200, Value::Null)),
        }
    }
}
