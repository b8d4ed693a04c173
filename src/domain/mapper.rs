// src/domain/mapper.rs

//! Request mapper abstraction.
//!
//! A `RequestMapper` decides where an outbound request lands on the broker:
//! the service name (queue/exchange identity), an optional routing key and
//! optional message headers. It also advertises the broker endpoints it
//! targets and the exchange topologies it can address.
//!
//! Mappers never perform I/O. Every method is a bounded, in-memory
//! computation over state fixed at construction, so a mapper can be shared
//! across threads behind a [`MapperPtr`] without locking.
//!
//! Concrete mappers live under `src/mapper/`.

use std::sync::Arc;

use crate::{
    //
    BrokerEndpoint,
    ConnectionDirectory,
    Error,
    ExchangeKind,
    MessageHeaders,
    MessagingConfiguration,
    OutboundRequest,
    Result,
};

/// Shared base state for mapper implementations.
///
/// Holds the validated service name, the endpoint directory and the static
/// capability metadata so that default `RequestMapper` methods can delegate
/// here instead of repeating bookkeeping in every mapper.
///
/// # Usage
///
/// ```ignore
/// struct TenantMapper {
///     base: MapperBase,
///     // ... deployment specific fields
/// }
///
/// impl RequestMapper for TenantMapper {
///     fn base(&self) -> &MapperBase { &self.base }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct MapperBase {
    service_name: Arc<str>,
    directory: ConnectionDirectory,
    exchange_kinds: ExchangeKind,
    messaging: MessagingConfiguration,
}

impl MapperBase {
    /// Create a new MapperBase.
    ///
    /// Fails with [`Error::InvalidArgument`] if `service_name` is blank or
    /// `exchange_kinds` is empty.
    pub fn new(
        service_name: &str,
        directory: ConnectionDirectory,
        exchange_kinds: ExchangeKind,
        messaging: MessagingConfiguration,
    ) -> Result<Self> {
        // ---
        if service_name.trim().is_empty() {
            return Err(Error::InvalidArgument("service_name".into()));
        }
        if exchange_kinds.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one exchange kind must be supported".into(),
            ));
        }

        Ok(Self {
            service_name: Arc::from(service_name),
            directory,
            exchange_kinds,
            messaging,
        })
    }

    /// The validated service name.
    pub fn service_name(&self) -> &Arc<str> {
        &self.service_name
    }

    /// Endpoint directory fixed at construction.
    pub fn directory(&self) -> &ConnectionDirectory {
        &self.directory
    }

    /// Exchange kinds fixed at construction.
    pub fn exchange_kinds(&self) -> ExchangeKind {
        self.exchange_kinds
    }

    /// Messaging configuration template.
    pub fn messaging(&self) -> &MessagingConfiguration {
        &self.messaging
    }
}

/// Maps outbound requests onto broker addressing metadata.
///
/// Every method except [`base`](Self::base) has a default that reproduces
/// the minimal behavior: fixed service name, no routing key, no headers,
/// the base's endpoints and exchange kinds. Deployment-specific mappers
/// override only the decisions that differ, typically by wrapping another
/// mapper (see `RoutingKeyMapper` and `HeadersMapper`).
pub trait RequestMapper: Send + Sync {
    // ---
    /// Returns a reference to the shared base state.
    ///
    /// Required method - each concrete mapper returns its own base or the
    /// base of the mapper it wraps.
    fn base(&self) -> &MapperBase;

    /// Logical destination for `request`.
    ///
    /// Default returns the service name validated at construction.
    /// Overrides that derive the name per request should report an unusable
    /// result with [`Error::InvalidConfiguration`].
    fn service_name(&self, _request: &OutboundRequest) -> Result<Arc<str>> {
        Ok(Arc::clone(self.base().service_name()))
    }

    /// Routing key for `request` on an exchange of kind `exchange_kind`.
    ///
    /// `None` means "not applicable" and is not an error.
    fn routing_key(
        &self,
        _request: &OutboundRequest,
        _exchange_kind: ExchangeKind,
    ) -> Option<String> {
        None
    }

    /// Message headers for `request`.
    ///
    /// Only useful for the headers exchange kind. `None` is not an error.
    fn headers(&self, _request: &OutboundRequest) -> Option<MessageHeaders> {
        None
    }

    /// Broker endpoints this mapper targets, never empty.
    fn server_endpoints(&self) -> &[BrokerEndpoint] {
        self.base().directory().endpoints()
    }

    /// Exchange kinds this mapper can address.
    fn supported_exchange_kinds(&self) -> ExchangeKind {
        self.base().exchange_kinds()
    }

    /// Messaging options, a fresh value on every call.
    fn messaging_config(&self) -> MessagingConfiguration {
        self.base().messaging().clone()
    }
}

impl<M: RequestMapper + ?Sized> RequestMapper for Arc<M> {
    fn base(&self) -> &MapperBase {
        (**self).base()
    }

    fn service_name(&self, request: &OutboundRequest) -> Result<Arc<str>> {
        (**self).service_name(request)
    }

    fn routing_key(
        &self,
        request: &OutboundRequest,
        exchange_kind: ExchangeKind,
    ) -> Option<String> {
        (**self).routing_key(request, exchange_kind)
    }

    fn headers(&self, request: &OutboundRequest) -> Option<MessageHeaders> {
        (**self).headers(request)
    }

    fn server_endpoints(&self) -> &[BrokerEndpoint] {
        (**self).server_endpoints()
    }

    fn supported_exchange_kinds(&self) -> ExchangeKind {
        (**self).supported_exchange_kinds()
    }

    fn messaging_config(&self) -> MessagingConfiguration {
        (**self).messaging_config()
    }
}

/// Shared mapper pointer.
///
/// Mappers are immutable after construction, so one instance can serve any
/// number of concurrent publishers.
pub type MapperPtr = Arc<dyn RequestMapper>;

/// Checks a resolved service name before it is used as a destination.
///
/// Fails with [`Error::InvalidConfiguration`] if `name` is blank.
pub fn ensure_service_name(name: &str) -> Result<&str> {
    // ---
    if name.trim().is_empty() {
        return Err(Error::InvalidConfiguration(
            "mapper resolved a blank service name".into(),
        ));
    }
    Ok(name)
}
