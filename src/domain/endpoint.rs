// src/domain/endpoint.rs

//! Broker endpoints and the connection directory.
//!
//! A [`ConnectionDirectory`] is built once from the configured broker URIs and
//! never changes afterwards. Each entry keeps the full URI for the connection
//! layer alongside a sanitized friendly name for logs and diagnostics.

use std::fmt;

use crate::{log_error, strip_user_info_and_query, Error, Result};

/// A single broker node a mapper publishes to or consumes from.
///
/// `uri` is the full connection string, credentials and query included.
/// `friendly_name` is the same URI with userinfo and query removed; it is
/// the only form that may be displayed or logged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BrokerEndpoint {
    uri: String,
    friendly_name: String,
}

impl BrokerEndpoint {
    /// Builds an endpoint from a connection URI.
    ///
    /// Fails with [`Error::InvalidArgument`] when `uri` is blank and with
    /// [`Error::InvalidFormat`] when the scheme is not `amqp://` or `amqps://`.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        // ---
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(Error::InvalidArgument("amqp_host_uri".into()));
        }

        let friendly_name = strip_user_info_and_query(uri.as_str())?;
        Ok(Self { uri, friendly_name })
    }

    /// Full connection URI, including any credentials.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Credential-free form of [`uri`](Self::uri), safe to log.
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }
}

// Debug must not leak the raw URI.
impl fmt::Debug for BrokerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerEndpoint")
            .field("friendly_name", &self.friendly_name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for BrokerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly_name)
    }
}

/// Ordered, immutable list of broker endpoints.
///
/// Always holds at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionDirectory {
    endpoints: Box<[BrokerEndpoint]>,
}

impl ConnectionDirectory {
    /// Builds a directory from one or more broker URIs, preserving order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `uris` is empty or any entry is blank
    /// - [`Error::InvalidFormat`] if any entry has an unrecognized scheme
    pub fn new<I, S>(uris: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // ---
        let endpoints = uris
            .into_iter()
            .enumerate()
            .map(|(index, uri)| {
                BrokerEndpoint::new(uri).inspect_err(|e| {
                    log_error!("broker endpoint #{} rejected: {}", index, e);
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if endpoints.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one broker endpoint URI is required".into(),
            ));
        }

        Ok(Self {
            endpoints: endpoints.into_boxed_slice(),
        })
    }

    /// Directory holding exactly one endpoint.
    pub fn single(uri: impl Into<String>) -> Result<Self> {
        // ---
        Ok(Self {
            endpoints: Box::new([BrokerEndpoint::new(uri)?]),
        })
    }

    /// Read-only view of the endpoints, in configuration order.
    pub fn endpoints(&self) -> &[BrokerEndpoint] {
        &self.endpoints
    }

    /// Friendly names joined for log output.
    pub fn friendly_names(&self) -> String {
        // ---
        self.endpoints
            .iter()
            .map(BrokerEndpoint::friendly_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
