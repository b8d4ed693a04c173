//! Routing-key decorator.
//!
//! Wraps another mapper and derives a routing key per request for direct
//! and topic exchanges. All other decisions are delegated.

use std::fmt;
use std::sync::Arc;

use crate::{
    //
    BrokerEndpoint,
    ExchangeKind,
    MapperBase,
    MessageHeaders,
    MessagingConfiguration,
    OutboundRequest,
    RequestMapper,
    Result,
};

/// Signature of the default key derivation, see [`method_and_path_key`].
pub type RouteFn = fn(&OutboundRequest, ExchangeKind) -> Option<String>;

/// Adds per-request routing keys to an inner mapper.
///
/// The wrapped mapper's exchange kinds are extended with `TOPIC`. The route
/// closure is consulted only for `DIRECT` and `TOPIC` requests; any other
/// kind falls through to the inner mapper.
///
/// # Example
///
/// ```
/// use mom_mapper::{BasicMessageMapper, ExchangeKind, RequestMapper, RoutingKeyMapper};
///
/// let basic = BasicMessageMapper::new("amqp://h", "orders")?;
/// let mapper = RoutingKeyMapper::by_method_and_path(basic);
/// let request = http::Request::post("/v1/orders/42").body(bytes::Bytes::new()).unwrap();
///
/// assert_eq!(
///     mapper.routing_key(&request, ExchangeKind::TOPIC).as_deref(),
///     Some("post.v1.orders.42")
/// );
/// # Ok::<(), mom_mapper::Error>(())
/// ```
pub struct RoutingKeyMapper<M, F = RouteFn> {
    inner: M,
    route: F,
}

impl<M, F> RoutingKeyMapper<M, F>
where
    M: RequestMapper,
    F: Fn(&OutboundRequest, ExchangeKind) -> Option<String> + Send + Sync,
{
    /// Wrap `inner`, deriving routing keys with `route`.
    pub fn new(inner: M, route: F) -> Self {
        Self { inner, route }
    }

    /// The wrapped mapper.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: RequestMapper> RoutingKeyMapper<M> {
    /// Wrap `inner`, deriving keys with [`method_and_path_key`].
    pub fn by_method_and_path(inner: M) -> Self {
        Self::new(inner, method_and_path_key)
    }
}

impl<M, F> RequestMapper for RoutingKeyMapper<M, F>
where
    M: RequestMapper,
    F: Fn(&OutboundRequest, ExchangeKind) -> Option<String> + Send + Sync,
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
        // ---
        if exchange_kind.intersects(ExchangeKind::DIRECT | ExchangeKind::TOPIC) {
            (self.route)(request, exchange_kind)
        } else {
            self.inner.routing_key(request, exchange_kind)
        }
    }

    fn headers(&self, request: &OutboundRequest) -> Option<MessageHeaders> {
        self.inner.headers(request)
    }

    fn server_endpoints(&self) -> &[BrokerEndpoint] {
        self.inner.server_endpoints()
    }

    fn supported_exchange_kinds(&self) -> ExchangeKind {
        self.inner.supported_exchange_kinds() | ExchangeKind::TOPIC
    }

    fn messaging_config(&self) -> MessagingConfiguration {
        self.inner.messaging_config()
    }
}

impl<M: fmt::Debug, F> fmt::Debug for RoutingKeyMapper<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingKeyMapper")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Routing key made of the lowercase method and the path segments.
///
/// `POST /v1/orders/42` becomes `post.v1.orders.42`. Empty segments are
/// skipped and dots inside a segment become `_` so the topic word structure
/// stays intact. The query string is ignored.
pub fn method_and_path_key(
    request: &OutboundRequest,
    _exchange_kind: ExchangeKind,
) -> Option<String> {
    // ---
    let words = std::iter::once(request.method().as_str().to_ascii_lowercase()).chain(
        request
            .uri()
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.replace('.', "_")),
    );

    Some(words.collect::<Vec<_>>().join("."))
}
