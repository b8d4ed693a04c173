//! Mapper implementations.
//!
//! `BasicMessageMapper` is the minimal mapper every deployment starts from.
//! The decorators wrap any other mapper and override a single decision,
//! so deployment-specific behavior is built by composition.

mod basic;
mod headers;
mod routing_key;

pub use basic::BasicMessageMapper;
pub use headers::HeadersMapper;
pub use routing_key::{method_and_path_key, RouteFn, RoutingKeyMapper};
