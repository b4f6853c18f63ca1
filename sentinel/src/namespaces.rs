//! # Namespace Bootstrap
//!
//! Synthesizes the `init_namespaces` event from user space. Kernel events
//! only describe namespaces of processes that happen to be traced, so the
//! init process's namespace ids are collected once at startup and emitted
//! as an ordinary event.
//!
//! Each entry of `/proc/1/ns` is a symlink whose target reads
//! `<kind>:[<inode>]`, e.g. `net:[4026531840]`. An entry that cannot be read
//! or parsed yields 0, and a schema argument with no matching entry is also
//! 0. Only an unreadable directory is worth a warning; the event is still
//! produced, with every argument 0.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use sentinel_common::events::INIT_NAMESPACES;

use crate::codec::ArgEncoder;
use crate::domain::{DecodeError, Pid};
use crate::event::Event;
use crate::registry::EventRegistry;

/// Namespace directory of the init process
pub const INIT_PROC_NS_DIR: &str = "/proc/1/ns";

/// Process name stamped on events originated by this tool
pub const SELF_PROCESS_NAME: &str = env!("CARGO_PKG_NAME");

/// Namespace inode numbers keyed by entry name
///
/// Never fails: unreadable entries map to 0 and an unreadable directory
/// yields an empty map.
pub fn fetch_namespaces(dir: &Path) -> BTreeMap<String, u32> {
    let mut namespaces = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read namespace directory {}: {e}", dir.display());
            return namespaces;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let inode = match fs::read_link(entry.path()) {
            Ok(target) => parse_ns_link(&target.to_string_lossy()).unwrap_or_else(|| {
                debug!("Unparseable namespace link {name} -> {}", target.display());
                0
            }),
            Err(e) => {
                debug!("Cannot read namespace link {name}: {e}");
                0
            }
        };
        namespaces.insert(name, inode);
    }

    namespaces
}

/// Extract the inode from a `<kind>:[<inode>]` link target
///
/// The inode must fit in 32 bits.
#[must_use]
pub fn parse_ns_link(target: &str) -> Option<u32> {
    let (_, rest) = target.split_once(':')?;
    let digits = rest.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The `init_namespaces` event for the running host
///
/// # Errors
/// Returns [`DecodeError`] only if the registry's schema for the event is
/// broken; filesystem problems are absorbed as zeroes
pub fn init_namespaces_event(registry: &EventRegistry) -> Result<Event, DecodeError> {
    debug!("Collecting namespaces of {}", Pid::INIT);
    init_namespaces_event_from(registry, Path::new(INIT_PROC_NS_DIR))
}

/// The `init_namespaces` event built from an arbitrary namespace directory
///
/// Arguments follow the registry schema order, one per namespace kind.
///
/// # Errors
/// See [`init_namespaces_event`]
pub fn init_namespaces_event_from(
    registry: &EventRegistry,
    dir: &Path,
) -> Result<Event, DecodeError> {
    let namespaces = fetch_namespaces(dir);
    let schema = registry.params(INIT_NAMESPACES)?;

    // Go through the payload codec so the event is decoded exactly like a
    // kernel-sourced one
    let mut payload = ArgEncoder::new();
    for arg in schema {
        payload.uint(namespaces.get(arg.name).copied().unwrap_or(0));
    }

    Event::decode(registry, INIT_NAMESPACES, now_ns(), SELF_PROCESS_NAME, &payload.finish())
}

fn now_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ns_link() {
        assert_eq!(parse_ns_link("net:[4026531840]"), Some(4_026_531_840));
        assert_eq!(parse_ns_link("pid_for_children:[12]"), Some(12));
    }

    #[test]
    fn test_parse_ns_link_rejects_malformed() {
        assert_eq!(parse_ns_link("net"), None);
        assert_eq!(parse_ns_link("net:[]"), None);
        assert_eq!(parse_ns_link("net:[abc]"), None);
        assert_eq!(parse_ns_link("net:[-1]"), None);
        assert_eq!(parse_ns_link("net:[+5]"), None);
        // Wider than 32 bits
        assert_eq!(parse_ns_link("net:[4294967296]"), None);
    }

    #[test]
    fn test_missing_directory_gives_empty_map() {
        let map = fetch_namespaces(Path::new("/nonexistent/sentinel/ns"));
        assert!(map.is_empty());
    }
}
