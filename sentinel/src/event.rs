//! Decoded event model
//!
//! Kernel-sourced and userspace-synthesized events share this shape, so a
//! consumer cannot tell them apart.

use sentinel_common::EventId;
use serde::Serialize;

use crate::codec::{decode_args, ArgValue};
use crate::domain::DecodeError;
use crate::registry::EventRegistry;

/// One argument with its schema metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub c_type: &'static str,
    pub value: ArgValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Nanoseconds since the Unix epoch
    pub timestamp: u64,
    pub process_name: String,
    pub event_id: EventId,
    pub event_name: String,
    pub args_num: usize,
    pub args: Vec<Argument>,
}

impl Event {
    /// Decode an argument payload for event `id`
    ///
    /// # Errors
    /// Returns [`DecodeError::Registry`] if `id` is not registered or has no
    /// schema, or any payload error from [`decode_args`]
    pub fn decode(
        registry: &EventRegistry,
        id: EventId,
        timestamp: u64,
        process_name: impl Into<String>,
        payload: &[u8],
    ) -> Result<Self, DecodeError> {
        let descriptor = registry.event(id)?;
        let schema = registry.params(id)?;
        let values = decode_args(schema, payload)?;

        let args: Vec<Argument> = schema
            .iter()
            .zip(values)
            .map(|(meta, value)| Argument { name: meta.name, c_type: meta.c_type, value })
            .collect();

        Ok(Self {
            timestamp,
            process_name: process_name.into(),
            event_id: id,
            event_name: descriptor.name.to_string(),
            args_num: args.len(),
            args,
        })
    }

    /// Value of the argument called `name`
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.iter().find(|a| a.name == name).map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ArgEncoder;
    use sentinel_common::events::{GETPID, OPENAT};

    #[test]
    fn test_decode_openat() {
        let payload = ArgEncoder::new().int(-100).str("/etc/hosts").int(0).uint(0).finish();
        let event =
            Event::decode(EventRegistry::global(), OPENAT, 42, "cat", &payload).unwrap();

        assert_eq!(event.event_name, "openat");
        assert_eq!(event.args_num, 4);
        assert_eq!(event.arg("pathname"), Some(&ArgValue::Str("/etc/hosts".to_string())));
        assert_eq!(event.args[0].c_type, "int");
    }

    #[test]
    fn test_decode_argless_event() {
        let event = Event::decode(EventRegistry::global(), GETPID, 1, "sh", &[]).unwrap();
        assert_eq!(event.args_num, 0);
        assert!(event.args.is_empty());
    }

    #[test]
    fn test_decode_unknown_id() {
        let err = Event::decode(EventRegistry::global(), EventId(5555), 0, "x", &[]).unwrap_err();
        assert!(matches!(err, DecodeError::Registry(_)));
    }

    #[test]
    fn test_serialized_field_names() {
        let event = Event::decode(EventRegistry::global(), GETPID, 7, "sh", &[]).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventId"], 39);
        assert_eq!(json["eventName"], "getpid");
        assert_eq!(json["processName"], "sh");
        assert_eq!(json["argsNum"], 0);
    }
}
