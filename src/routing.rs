//! Per-request routing decisions.
//!
//! The publish pipeline asks a mapper several questions for each outbound
//! request. [`RoutingDecision::resolve`] asks them in one place, checks the
//! answers and hands back a single value ready to drive a broker publish.

use std::sync::Arc;

use crate::{
    //
    ensure_service_name,
    log_debug,
    log_warn,
    Error,
    ExchangeKind,
    MessageHeaders,
    OutboundRequest,
    RequestMapper,
    Result,
};

/// Addressing metadata for one outbound request.
///
/// Lives for the dispatch of a single request and is never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingDecision {
    /// Destination queue/exchange identity.
    pub service_name: Arc<str>,

    /// Exchange kind the decision was resolved for.
    pub exchange_kind: ExchangeKind,

    /// Routing key, when the mapper supplies one.
    pub routing_key: Option<String>,

    /// Message headers, when the mapper supplies them.
    pub headers: Option<MessageHeaders>,
}

impl RoutingDecision {
    /// Resolve the addressing metadata for `request` on an exchange of kind
    /// `exchange_kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if:
    /// - `exchange_kind` is not exactly one kind
    /// - the mapper does not support `exchange_kind`
    /// - the mapper resolves a blank service name, or fails resolving it
    ///
    /// # Example
    ///
    /// ```
    /// use mom_mapper::{BasicMessageMapper, ExchangeKind, RoutingDecision};
    ///
    /// let mapper = BasicMessageMapper::new("amqp://localhost", "orders")?;
    /// let request = http::Request::get("/orders/7").body(bytes::Bytes::new()).unwrap();
    ///
    /// let decision = RoutingDecision::resolve(&mapper, &request, ExchangeKind::DIRECT)?;
    /// assert_eq!(&*decision.service_name, "orders");
    /// assert_eq!(decision.routing_key, None);
    /// # Ok::<(), mom_mapper::Error>(())
    /// ```
    pub fn resolve<M>(
        mapper: &M,
        request: &OutboundRequest,
        exchange_kind: ExchangeKind,
    ) -> Result<Self>
    where
        M: RequestMapper + ?Sized,
    {
        // ---
        if !exchange_kind.is_single() {
            return Err(Error::InvalidConfiguration(format!(
                "routing must target exactly one exchange kind, got {exchange_kind:?}"
            )));
        }

        let supported = mapper.supported_exchange_kinds();
        if !supported.contains(exchange_kind) {
            log_warn!(
                "exchange kind {:?} requested, mapper supports {:?}",
                exchange_kind,
                supported
            );
            return Err(Error::InvalidConfiguration(format!(
                "exchange kind {exchange_kind:?} is not supported (supported: {supported:?})"
            )));
        }

        let service_name = mapper.service_name(request)?;
        ensure_service_name(&service_name)?;

        let routing_key = mapper.routing_key(request, exchange_kind);
        let headers = mapper.headers(request);

        log_debug!(
            "{} {} -> service '{}' via {:?} (routing key: {:?}, {} header(s))",
            request.method(),
            request.uri().path(),
            service_name,
            exchange_kind,
            routing_key,
            headers.as_ref().map_or(0, |h| h.len())
        );

        Ok(Self {
            service_name,
            exchange_kind,
            routing_key,
            headers,
        })
    }
}
