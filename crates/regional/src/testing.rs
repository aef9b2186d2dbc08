// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! In-process HTTP transport for exercising SDK clients without a network.

use std::collections::VecDeque;
use std::sync::Arc;

use aws_smithy_runtime_api::client::http::{
    HttpClient, HttpConnector, HttpConnectorFuture, HttpConnectorSettings, SharedHttpClient, SharedHttpConnector,
};
use aws_smithy_runtime_api::client::orchestrator::HttpRequest;
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_runtime_api::http::{Response, StatusCode};
use aws_smithy_types::body::SdkBody;
use parking_lot::Mutex;

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// A request observed by [`CannedHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full request URI.
    pub uri: String,
    /// The `x-amz-target` header, which names the operation for JSON protocols.
    pub target: Option<String>,
    /// The request body, if it was buffered.
    pub body: Option<String>,
}

#[derive(Debug)]
struct CannedResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<CannedResponse>,
    requests: Vec<RecordedRequest>,
}

/// An HTTP transport that answers from a queue of canned responses and records every request.
///
/// When the queue is empty the transport answers `200` with an empty JSON object. Clones share
/// the same queue and request log.
#[derive(Debug, Clone, Default)]
pub struct CannedHttpClient {
    state: Arc<Mutex<State>>,
}

impl CannedHttpClient {
    /// Creates a transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and JSON body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.respond_with_headers(status, &[], body)
    }

    /// Queues a response that also carries `headers`, such as `x-amzn-query-error` on SQS errors.
    pub fn respond_with_headers(&self, status: u16, headers: &[(&str, &str)], body: impl Into<String>) -> &Self {
        self.state.lock().responses.push_back(CannedResponse {
            status,
            headers: headers
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            body: body.into(),
        });
        self
    }

    /// Returns the requests seen so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    /// Wraps a clone of this transport for handing to SDK configuration.
    #[must_use]
    pub fn shared(&self) -> SharedHttpClient {
        SharedHttpClient::new(self.clone())
    }
}

impl HttpConnector for CannedHttpClient {
    #[expect(clippy::panic, reason = "canned statuses are written by tests")]
    fn call(&self, request: HttpRequest) -> HttpConnectorFuture {
        let canned = {
            let mut state = self.state.lock();
            state.requests.push(RecordedRequest {
                uri: request.uri().to_string(),
                target: request.headers().get("x-amz-target").map(str::to_string),
                body: request
                    .body()
                    .bytes()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
            });
            state.responses.pop_front().unwrap_or_else(|| CannedResponse {
                status: 200,
                headers: Vec::new(),
                body: "{}".to_string(),
            })
        };

        let status = StatusCode::try_from(canned.status)
            .unwrap_or_else(|_| panic!("canned status {} is not a valid HTTP status", canned.status));
        let mut response = Response::new(status, SdkBody::from(canned.body));
        response.headers_mut().insert("content-type", JSON_CONTENT_TYPE);
        for (name, value) in canned.headers {
            response.headers_mut().insert(name, value);
        }

        HttpConnectorFuture::ready(Ok(response))
    }
}

impl HttpClient for CannedHttpClient {
    fn http_connector(&self, _settings: &HttpConnectorSettings, _components: &RuntimeComponents) -> SharedHttpConnector {
        SharedHttpConnector::new(self.clone())
    }
}
