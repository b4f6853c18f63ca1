//! i386 → x86_64 syscall translation
//!
//! A 32-bit task entering the kernel reports its own syscall number. The
//! instrumentation rewrites it to the 64-bit id through a lookup map that
//! user space fills from this table.

use std::collections::BTreeMap;

use sentinel_common::EventId;

use crate::registry::EventRegistry;

/// Compat number → primary id, for every event that has a compat number
#[must_use]
pub fn sys32_to_sys64(registry: &EventRegistry) -> BTreeMap<i32, EventId> {
    registry.iter().filter(|e| e.has_compat()).map(|e| (e.id32, e.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_common::events::{ACCEPT, EXECVE, READ, SOCKET};
    use sentinel_common::sys32;

    #[test]
    fn test_known_translations() {
        let table = sys32_to_sys64(EventRegistry::global());
        assert_eq!(table[&sys32::READ], READ);
        assert_eq!(table[&sys32::EXECVE], EXECVE);
        assert_eq!(table[&sys32::SOCKET], SOCKET);
    }

    #[test]
    fn test_undefined_is_skipped() {
        let table = sys32_to_sys64(EventRegistry::global());
        assert!(!table.contains_key(&sys32::UNDEFINED));
        assert!(!table.values().any(|&id| id == ACCEPT));
    }

    #[test]
    fn test_translation_is_injective() {
        let registry = EventRegistry::global();
        let with_compat = registry.iter().filter(|e| e.has_compat()).count();
        assert_eq!(sys32_to_sys64(registry).len(), with_compat);
    }
}
