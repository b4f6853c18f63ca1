//! Resolve user-facing set and event names to the ids a session traces

use std::collections::BTreeSet;

use sentinel_common::EventId;

use crate::domain::RegistryError;
use crate::registry::{EventRegistry, EventSet};

/// Ids selected by `sets` and `names`, plus every essential event
///
/// With neither sets nor names, the `default` set is selected.
///
/// # Errors
/// Returns [`RegistryError::UnknownSet`] or [`RegistryError::UnknownEventName`]
/// for the first name that does not resolve
pub fn select_events<S, N>(
    registry: &EventRegistry,
    sets: &[S],
    names: &[N],
) -> Result<BTreeSet<EventId>, RegistryError>
where
    S: AsRef<str>,
    N: AsRef<str>,
{
    let mut wanted: Vec<EventSet> =
        sets.iter().map(|s| s.as_ref().parse()).collect::<Result<_, _>>()?;
    if wanted.is_empty() && names.is_empty() {
        wanted.push(EventSet::Default);
    }

    let mut selected: BTreeSet<EventId> =
        names.iter().map(|n| registry.id_of(n.as_ref())).collect::<Result<_, _>>()?;

    for set in wanted {
        selected.extend(registry.events_in_set(set).map(|e| e.id));
    }
    selected.extend(registry.essential_events().map(|e| e.id));

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_common::events::{CLONE, EXECVE, OPENAT, SYS_ENTER, VFS_WRITE};

    const NONE: &[&str] = &[];

    #[test]
    fn test_empty_request_selects_default() {
        let registry = EventRegistry::global();
        let selected = select_events(registry, NONE, NONE).unwrap();
        assert!(selected.contains(&EXECVE));
        assert!(selected.contains(&SYS_ENTER));
        assert!(!selected.contains(&VFS_WRITE));
    }

    #[test]
    fn test_named_events_skip_default() {
        let registry = EventRegistry::global();
        let selected = select_events(registry, NONE, &["openat"]).unwrap();
        assert!(selected.contains(&OPENAT));
        assert!(!selected.contains(&EXECVE));
        assert_eq!(selected.len(), 1 + registry.essential_events().count());
    }

    #[test]
    fn test_set_selection() {
        let registry = EventRegistry::global();
        let selected = select_events(registry, &["proc_life"], NONE).unwrap();
        assert!(selected.contains(&CLONE));
        assert!(selected.contains(&EXECVE));
        assert!(!selected.contains(&OPENAT));
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let registry = EventRegistry::global();
        assert_eq!(
            select_events(registry, &["bogus"], NONE).unwrap_err(),
            RegistryError::UnknownSet("bogus".to_string())
        );
        assert_eq!(
            select_events(registry, NONE, &["bogus"]).unwrap_err(),
            RegistryError::UnknownEventName("bogus".to_string())
        );
    }
}
