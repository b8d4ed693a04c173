//! Broker addressing for outbound requests.
//!
//! This library decides where an HTTP-style request goes when it is carried
//! over an AMQP broker: which broker endpoints to use, which exchange kinds
//! can be addressed, the destination service name, and optional routing key
//! and message headers. It also sanitizes broker URIs so they can be logged
//! without leaking credentials.
//!
//! Nothing here opens connections, serializes messages or retries; those
//! belong to the surrounding messaging client.
//!

// Import all sub modules once...
mod domain;
mod mapper;

mod mapper_builder;
mod messaging_config;
mod routing;
mod sanitize;

mod error;
mod macros;

pub(crate) use macros::{log_debug, log_error, log_info, log_warn};

// Re-export main types
pub use mapper::{
    //
    method_and_path_key,
    BasicMessageMapper,
    HeadersMapper,
    RouteFn,
    RoutingKeyMapper,
};
pub use mapper_builder::MapperBuilder;

pub use messaging_config::MessagingConfiguration;
pub use routing::RoutingDecision;
pub use sanitize::strip_user_info_and_query;

pub use error::{Error, Result};

// --- public re-exports
pub use domain::{
    //
    ensure_service_name,
    request_options,
    set_request_options,
    BrokerEndpoint,
    ConnectionDirectory,
    ExchangeKind,
    MapperBase,
    MapperPtr,
    MessageHeaders,
    OutboundRequest,
    RequestMapper,
    RequestOptions,
};
