//! Domain model for sentinel
//!
//! Core types and errors shared by the registry, the codec and the
//! namespace synthesizer:
//! - Compile-time safety via newtype pattern
//! - Structured error handling

pub mod errors;
pub mod types;

pub use sentinel_common::{EventId, IdBand};
pub use types::Pid;

pub use errors::{ConfigError, DecodeError, RegistryError};
