//! Domain layer public interface.
//!
//! This module defines the mapping abstractions shared by every concrete
//! mapper: broker endpoints, exchange kinds, the outbound request shape and
//! the `RequestMapper` capability itself. Nothing here performs I/O.
//!
//! All domain consumers must import symbols via this module, not by
//! referencing individual files directly.

mod endpoint;
mod exchange;
mod mapper;
mod request;

// --- Domain re-exports ---

pub use endpoint::{
    //
    BrokerEndpoint,
    ConnectionDirectory,
};

pub use exchange::ExchangeKind;

pub use mapper::{
    //
    ensure_service_name,
    MapperBase,
    MapperPtr,
    RequestMapper,
};

pub use request::{
    //
    request_options,
    set_request_options,
    MessageHeaders,
    OutboundRequest,
    RequestOptions,
};
