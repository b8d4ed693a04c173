//! Headers-exchange decorator.
//!
//! Wraps another mapper and produces message headers for headers-exchange
//! dispatch. Headers come from three places, later ones winning on name
//! clashes: the inner mapper, the request's [`RequestOptions`], and the
//! decorator's own closure.
//!
//! [`RequestOptions`]: crate::RequestOptions

use std::fmt;
use std::sync::Arc;

use crate::{
    //
    request_options,
    BrokerEndpoint,
    ExchangeKind,
    MapperBase,
    MessageHeaders,
    MessagingConfiguration,
    OutboundRequest,
    RequestMapper,
    Result,
};

/// Adds headers-exchange support to an inner mapper.
///
/// The wrapped mapper's exchange kinds are extended with `HEADERS`. When the
/// merged header set is empty, [`headers`](RequestMapper::headers) returns
/// `None`.
pub struct HeadersMapper<M, F> {
    inner: M,
    extract: F,
}

impl<M, F> HeadersMapper<M, F>
where
    M: RequestMapper,
    F: Fn(&OutboundRequest) -> MessageHeaders + Send + Sync,
{
    /// Wrap `inner`, adding the headers produced by `extract`.
    pub fn new(inner: M, extract: F) -> Self {
        Self { inner, extract }
    }

    /// The wrapped mapper.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M, F> RequestMapper for HeadersMapper<M, F>
where
    M: RequestMapper,
    F: Fn(&OutboundRequest) -> MessageHeaders + Send + Sync,
{
    fn base(&self) -> &MapperBase {
        self.inner.base()
    }

    fn service_name(&self, request: &OutboundRequest) -> Result<Arc<str>> {
        self.inner.service_name(request)
    }

    fn routing_key(
        &self,
        request: &OutboundRequest,
        exchange_kind: ExchangeKind,
    ) -> Option<String> {
        self.inner.routing_key(request, exchange_kind)
    }

    fn headers(&self, request: &OutboundRequest) -> Option<MessageHeaders> {
        // ---
        let mut headers = self.inner.headers(request).unwrap_or_default();

        if let Some(options) = request_options(request) {
            headers.extend(
                options
                    .headers
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone())),
            );
        }

        headers.extend((self.extract)(request));

        (!headers.is_empty()).then_some(headers)
    }

    fn server_endpoints(&self) -> &[BrokerEndpoint] {
        self.inner.server_endpoints()
    }

    fn supported_exchange_kinds(&self) -> ExchangeKind {
        self.inner.supported_exchange_kinds() | ExchangeKind::HEADERS
    }

    fn messaging_config(&self) -> MessagingConfiguration {
        self.inner.messaging_config()
    }
}

impl<M: fmt::Debug, F> fmt::Debug for HeadersMapper<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadersMapper")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
