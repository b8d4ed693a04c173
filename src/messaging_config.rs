//! Public, transport-agnostic messaging options.
//!
//! A mapper hands these options to the surrounding messaging client, which
//! interprets them when declaring queues and exchanges and when publishing.
//! This type contains no broker-client specifics.

use serde::{Deserialize, Serialize};

/// Messaging options a mapper reports for its destination.
///
/// Deserializes with per-field defaults, so a deployment's config file only
/// needs to name the options it changes.
///
/// # Example
///
/// ```
/// use mom_mapper::MessagingConfiguration;
///
/// let config: MessagingConfiguration =
///     serde_json::from_str(r#"{ "persistent_messages": false }"#).unwrap();
///
/// assert!(!config.persistent_messages);
/// assert!(config.message_expects_reply);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfiguration {
    /// Declare work queues and exchanges as durable.
    pub persistent_work_queues_and_exchanges: bool,

    /// Publish messages with persistent delivery mode.
    pub persistent_messages: bool,

    /// Whether requests wait for a reply by default.
    ///
    /// A request can override this through
    /// [`RequestOptions::expects_reply`](crate::RequestOptions::expects_reply).
    pub message_expects_reply: bool,
}

impl Default for MessagingConfiguration {
    /// Durable topology, persistent messages, replies expected.
    fn default() -> Self {
        Self {
            persistent_work_queues_and_exchanges: true,
            persistent_messages: true,
            message_expects_reply: true,
        }
    }
}

impl MessagingConfiguration {
    /// Set whether work queues and exchanges are durable.
    pub fn with_persistent_work_queues_and_exchanges(mut self, persistent: bool) -> Self {
        self.persistent_work_queues_and_exchanges = persistent;
        self
    }

    /// Set whether messages are published persistently.
    pub fn with_persistent_messages(mut self, persistent: bool) -> Self {
        self.persistent_messages = persistent;
        self
    }

    /// Set whether requests expect a reply by default.
    pub fn with_message_expects_reply(mut self, expects_reply: bool) -> Self {
        self.message_expects_reply = expects_reply;
        self
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        // ---
        let config: MessagingConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MessagingConfiguration::default());
    }

    #[test]
    fn setters_chain() {
        // ---
        let config = MessagingConfiguration::default()
            .with_persistent_work_queues_and_exchanges(false)
            .with_persistent_messages(false)
            .with_message_expects_reply(false);

        assert!(!config.persistent_work_queues_and_exchanges);
        assert!(!config.persistent_messages);
        assert!(!config.message_expects_reply);
    }

    #[test]
    fn serializes_field_names() {
        // ---
        let value = serde_json::to_value(MessagingConfiguration::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "persistent_work_queues_and_exchanges": true,
                "persistent_messages": true,
                "message_expects_reply": true,
            })
        );
    }
}
