//! Structured error types for sentinel
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Registry errors are schema defects: they surface to the immediate caller
//! and are never defaulted away.

use sentinel_common::EventId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown event id {0}")]
    UnknownEventId(EventId),

    #[error("Unknown event name '{0}'")]
    UnknownEventName(String),

    #[error("Unknown event set '{0}'")]
    UnknownSet(String),

    #[error("Event id {0} is defined more than once")]
    DuplicateEventId(EventId),

    #[error("Event name '{0}' is used by more than one event")]
    DuplicateEventName(String),

    #[error("Event {0} has no argument schema entry")]
    MissingSchema(EventId),

    #[error("Argument schema for unregistered event id {0}")]
    OrphanSchema(EventId),

    #[error("Essential event {0} has no probes to attach")]
    EssentialWithoutProbes(EventId),

    #[error("Event {id} declares argument '{name}' more than once")]
    DuplicateArgument { id: EventId, name: String },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Argument '{arg}' needs {needed} bytes, {remaining} remaining")]
    UnexpectedEof { arg: String, needed: usize, remaining: usize },

    #[error("Argument '{arg}' is not valid UTF-8")]
    InvalidUtf8 { arg: String },

    #[error("Argument '{arg}' has unsupported address family {family}")]
    UnsupportedFamily { arg: String, family: u16 },

    #[error("{0} bytes left over after the last argument")]
    TrailingBytes(usize),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to write config slot {slot}")]
    WriteFailed {
        slot: u32,
        #[source]
        source: aya::maps::MapError,
    },

    #[error("Config map '{0}' not found")]
    MapNotFound(String),

    #[error(transparent)]
    Map(#[from] aya::maps::MapError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::UnknownEventId(EventId(4242));
        assert_eq!(err.to_string(), "Unknown event id 4242");
    }

    #[test]
    fn test_duplicate_argument_display() {
        let err = RegistryError::DuplicateArgument { id: EventId(0), name: "fd".to_string() };
        assert!(err.to_string().contains("'fd'"));
        assert!(err.to_string().contains("Event 0"));
    }

    #[test]
    fn test_decode_error_from_registry() {
        let err: DecodeError = RegistryError::UnknownEventName("nope".to_string()).into();
        assert_eq!(err.to_string(), "Unknown event name 'nope'");
    }
}
