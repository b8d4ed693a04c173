// src/domain/request.rs

//! Outbound request shape and per-request options.
//!
//! The mapping layer sees requests as plain `http::Request` values. Callers
//! that need to steer a single request (reply expectations, timeouts, extra
//! message headers) attach a [`RequestOptions`] to the request's extensions;
//! mappers read it back with [`request_options`].

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

/// An outbound request as handed to a mapper.
///
/// Method, URI, headers and body are opaque to the base mapper; derived
/// mappers inspect whichever parts they route on.
pub type OutboundRequest = http::Request<Bytes>;

/// Message headers attached to a publish, keyed by header name.
///
/// Only meaningful for headers-exchange topologies.
pub type MessageHeaders = HashMap<String, serde_json::Value>;

/// Options a caller attaches to a single outbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Per-request reply timeout; `None` uses the client default.
    pub timeout: Option<Duration>,

    /// Overrides the configured reply expectation for this request.
    pub expects_reply: Option<bool>,

    /// Extra message headers for headers-exchange dispatch.
    pub headers: MessageHeaders,
}

impl RequestOptions {
    /// Set the reply timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether a reply is expected.
    pub fn with_expects_reply(mut self, expects_reply: bool) -> Self {
        self.expects_reply = Some(expects_reply);
        self
    }

    /// Add one message header.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Returns the options attached to `request`, if any.
pub fn request_options(request: &OutboundRequest) -> Option<&RequestOptions> {
    request.extensions().get::<RequestOptions>()
}

/// Attaches `options` to `request`, returning any options previously attached.
pub fn set_request_options(
    request: &mut OutboundRequest,
    options: RequestOptions,
) -> Option<RequestOptions> {
    request.extensions_mut().insert(options)
}
