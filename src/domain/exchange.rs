// src/domain/exchange.rs

//! Exchange topologies a mapper can address.

bitflags::bitflags! {
    /// Set of exchange topologies.
    ///
    /// A mapper advertises the kinds it is able to address through
    /// [`RequestMapper::supported_exchange_kinds`](crate::RequestMapper::supported_exchange_kinds);
    /// the publish pipeline asks for routing metadata one kind at a time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExchangeKind: u8 {
        /// Exact routing-key match.
        const DIRECT = 1 << 0;
        /// Pattern match on dotted routing keys.
        const TOPIC = 1 << 1;
        /// Match on message header values; routing key ignored.
        const HEADERS = 1 << 2;
        /// Broadcast to every bound queue.
        const FANOUT = 1 << 3;
    }
}

impl ExchangeKind {
    /// AMQP exchange type name for a single kind.
    ///
    /// Returns `None` for the empty set and for combinations.
    pub fn exchange_type(self) -> Option<&'static str> {
        // ---
        if self == Self::DIRECT {
            Some("direct")
        } else if self == Self::TOPIC {
            Some("topic")
        } else if self == Self::HEADERS {
            Some("headers")
        } else if self == Self::FANOUT {
            Some("fanout")
        } else {
            None
        }
    }

    /// True when exactly one kind is set.
    pub fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }
}

impl Default for ExchangeKind {
    fn default() -> Self {
        Self::DIRECT
    }
}
