//! # Event Registry
//!
//! The authoritative description of every traceable event: which probes
//! feed it, which sets it belongs to, and the positional argument layout the
//! decoder applies to its payload.
//!
//! ## Structure
//!
//! - `events` - Descriptor table (id, compat id, name, probes, sets)
//! - `params` - Argument schema table (ordered name/type pairs per id)
//! - [`sets`] - Named event sets
//!
//! The registry is built once from the compiled-in tables and only read
//! afterwards, so [`EventRegistry::global`] hands out a shared reference that
//! any number of threads may use without locking.
//!
//! ## Consistency
//!
//! Duplicate ids or names, schema entries without an event and essential
//! events without probes are programming defects. [`EventRegistry::defects`]
//! reports them; the conformance tests assert the built-in tables have none.

mod events;
mod params;
pub mod sets;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use sentinel_common::{sys32, ArgType, EventId, ProbeType};
use serde::Serialize;

use crate::domain::RegistryError;

pub use sets::EventSet;

/// One kernel attachment point feeding an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeDescriptor {
    pub attach: ProbeType,
    /// Syscall, kernel symbol or `category:name` tracepoint
    pub event: &'static str,
    /// Name of the handler program in the instrumentation object
    pub handler: &'static str,
}

/// The registry record for one event
#[derive(Debug, Clone, Serialize)]
pub struct EventDescriptor {
    pub id: EventId,
    /// i386 syscall number, or [`sys32::UNDEFINED`]
    pub id32: i32,
    pub name: &'static str,
    /// May be empty for events populated by another handler or by userspace
    pub probes: Vec<ProbeDescriptor>,
    /// Failing to attach this event's probes aborts the whole session
    pub essential: bool,
    pub sets: &'static [EventSet],
}

impl EventDescriptor {
    /// A descriptor with no compat id, no probes and no sets
    #[must_use]
    pub fn new(id: EventId, name: &'static str) -> Self {
        Self { id, id32: sys32::UNDEFINED, name, probes: Vec::new(), essential: false, sets: &[] }
    }

    #[must_use]
    pub fn compat(mut self, id32: i32) -> Self {
        self.id32 = id32;
        self
    }

    #[must_use]
    pub fn probe(mut self, attach: ProbeType, event: &'static str, handler: &'static str) -> Self {
        self.probes.push(ProbeDescriptor { attach, event, handler });
        self
    }

    #[must_use]
    pub fn essential(mut self) -> Self {
        self.essential = true;
        self
    }

    #[must_use]
    pub fn sets(mut self, sets: &'static [EventSet]) -> Self {
        self.sets = sets;
        self
    }

    #[must_use]
    pub fn in_set(&self, set: EventSet) -> bool {
        self.sets.contains(&set)
    }

    /// Whether a 32-bit task can raise this event through its own syscall table
    #[must_use]
    pub fn has_compat(&self) -> bool {
        self.id32 != sys32::UNDEFINED
    }
}

/// Name and producer-side C type of one positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub c_type: &'static str,
}

impl ArgMeta {
    #[must_use]
    pub const fn new(name: &'static str, c_type: &'static str) -> Self {
        Self { name, c_type }
    }

    /// Wire tag the producer uses for this argument
    ///
    /// Types without a dedicated encoding are sent as raw pointers.
    #[must_use]
    pub fn arg_type(&self) -> ArgType {
        match self.c_type {
            "int" | "pid_t" | "uid_t" | "gid_t" | "mqd_t" | "clockid_t" | "const clockid_t"
            | "key_t" | "key_serial_t" | "timer_t" => ArgType::Int,
            "unsigned int" | "u32" => ArgType::Uint,
            "long" => ArgType::Long,
            "unsigned long" | "u64" => ArgType::Ulong,
            "off_t" => ArgType::Off,
            "mode_t" => ArgType::Mode,
            "dev_t" => ArgType::Dev,
            "size_t" => ArgType::Size,
            "void*" | "const void*" => ArgType::Pointer,
            "char*" | "const char*" => ArgType::Str,
            "const char*const*" | "const char**" | "char**" => ArgType::StrArr,
            "const struct sockaddr*" | "struct sockaddr*" => ArgType::SockAddr,
            "bytes" => ArgType::Bytes,
            "int[2]" => ArgType::IntArr2,
            "slim_cred_t" => ArgType::Cred,
            "umode_t" => ArgType::U16,
            _ => ArgType::Pointer,
        }
    }
}

/// Read-only index over the descriptor and schema tables
#[derive(Debug)]
pub struct EventRegistry {
    events: HashMap<EventId, EventDescriptor>,
    /// Declaration order, for stable listing
    order: Vec<EventId>,
    schemas: HashMap<EventId, Vec<ArgMeta>>,
    names: HashMap<&'static str, EventId>,
    /// Collisions found while indexing; first definition wins
    collisions: Vec<RegistryError>,
}

static REGISTRY: OnceLock<EventRegistry> = OnceLock::new();

impl EventRegistry {
    /// The process-wide registry built from the compiled-in tables
    pub fn global() -> &'static EventRegistry {
        REGISTRY.get_or_init(EventRegistry::builtin)
    }

    /// Build a fresh registry from the compiled-in tables
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_tables(events::descriptors(), params::schemas())
    }

    /// Index arbitrary tables
    ///
    /// Never fails: collisions are recorded and reported by [`Self::defects`].
    #[must_use]
    pub fn from_tables(
        descriptors: Vec<EventDescriptor>,
        schemas: Vec<(EventId, Vec<ArgMeta>)>,
    ) -> Self {
        let mut registry = Self {
            events: HashMap::with_capacity(descriptors.len()),
            order: Vec::with_capacity(descriptors.len()),
            schemas: HashMap::with_capacity(schemas.len()),
            names: HashMap::with_capacity(descriptors.len()),
            collisions: Vec::new(),
        };

        for descriptor in descriptors {
            let id = descriptor.id;
            if registry.events.contains_key(&id) {
                registry.collisions.push(RegistryError::DuplicateEventId(id));
                continue;
            }
            if registry.names.contains_key(descriptor.name) {
                registry.collisions.push(RegistryError::DuplicateEventName(descriptor.name.into()));
                continue;
            }
            registry.names.insert(descriptor.name, id);
            registry.order.push(id);
            registry.events.insert(id, descriptor);
        }

        for (id, args) in schemas {
            if registry.schemas.contains_key(&id) {
                registry.collisions.push(RegistryError::DuplicateEventId(id));
                continue;
            }
            registry.schemas.insert(id, args);
        }

        registry
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Descriptor for `id`
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownEventId`] if `id` is not registered
    pub fn event(&self, id: EventId) -> Result<&EventDescriptor, RegistryError> {
        self.events.get(&id).ok_or(RegistryError::UnknownEventId(id))
    }

    /// Ordered argument schema for `id`
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownEventId`] if `id` is not registered, or
    /// [`RegistryError::MissingSchema`] if it has no schema entry
    pub fn params(&self, id: EventId) -> Result<&[ArgMeta], RegistryError> {
        if !self.events.contains_key(&id) {
            return Err(RegistryError::UnknownEventId(id));
        }
        self.schemas.get(&id).map(Vec::as_slice).ok_or(RegistryError::MissingSchema(id))
    }

    /// Resolve a display name to its id
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownEventName`] if no event has that name
    pub fn id_of(&self, name: &str) -> Result<EventId, RegistryError> {
        self.names.get(name).copied().ok_or_else(|| RegistryError::UnknownEventName(name.into()))
    }

    /// Descriptor for a display name
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownEventName`] if no event has that name
    pub fn by_name(&self, name: &str) -> Result<&EventDescriptor, RegistryError> {
        self.id_of(name).and_then(|id| self.event(id))
    }

    /// Whether event `id` belongs to `set`
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownEventId`] if `id` is not registered
    pub fn is_in_set(&self, id: EventId, set: EventSet) -> Result<bool, RegistryError> {
        self.event(id).map(|event| event.in_set(set))
    }

    /// All descriptors, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &EventDescriptor> {
        self.order.iter().filter_map(|id| self.events.get(id))
    }

    /// Members of `set`, in declaration order
    pub fn events_in_set(&self, set: EventSet) -> impl Iterator<Item = &EventDescriptor> {
        self.iter().filter(move |event| event.in_set(set))
    }

    /// Events whose attach failure is fatal to the session
    pub fn essential_events(&self) -> impl Iterator<Item = &EventDescriptor> {
        self.iter().filter(|event| event.essential)
    }

    /// Every consistency defect in the indexed tables
    ///
    /// An empty result means: ids and names are unique, every event has a
    /// schema entry (possibly empty), every schema entry belongs to an event,
    /// essential events have at least one probe, and argument names are
    /// unique within each schema.
    #[must_use]
    pub fn defects(&self) -> Vec<RegistryError> {
        let mut defects = self.collisions.clone();

        for event in self.iter() {
            if !self.schemas.contains_key(&event.id) {
                defects.push(RegistryError::MissingSchema(event.id));
            }
            if event.essential && event.probes.is_empty() {
                defects.push(RegistryError::EssentialWithoutProbes(event.id));
            }
        }

        let mut schema_ids: Vec<_> = self.schemas.keys().copied().collect();
        schema_ids.sort_unstable();
        for id in schema_ids {
            if !self.events.contains_key(&id) {
                defects.push(RegistryError::OrphanSchema(id));
            }
            let mut seen = HashSet::new();
            for arg in &self.schemas[&id] {
                if !seen.insert(arg.name) {
                    defects
                        .push(RegistryError::DuplicateArgument { id, name: arg.name.to_string() });
                }
            }
        }

        defects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_common::events::{EXECVE, INIT_NAMESPACES, READ, SYS_ENTER};

    #[test]
    fn test_lookup_by_id_and_name() {
        let registry = EventRegistry::global();
        let read = registry.event(READ).unwrap();
        assert_eq!(read.name, "read");
        assert_eq!(registry.id_of("read").unwrap(), READ);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let registry = EventRegistry::global();
        assert_eq!(
            registry.event(EventId(999)).unwrap_err(),
            RegistryError::UnknownEventId(EventId(999))
        );
        assert!(registry.params(EventId(999)).is_err());
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let registry = EventRegistry::global();
        assert_eq!(
            registry.id_of("not_an_event").unwrap_err(),
            RegistryError::UnknownEventName("not_an_event".to_string())
        );
    }

    #[test]
    fn test_set_membership() {
        let registry = EventRegistry::global();
        assert!(registry.is_in_set(EXECVE, EventSet::Default).unwrap());
        assert!(registry.is_in_set(EXECVE, EventSet::ProcLife).unwrap());
        assert!(!registry.is_in_set(READ, EventSet::Default).unwrap());
        assert!(!registry.is_in_set(SYS_ENTER, EventSet::Syscalls).unwrap());
    }

    #[test]
    fn test_arg_type_mapping() {
        assert_eq!(ArgMeta::new("fd", "int").arg_type(), ArgType::Int);
        assert_eq!(ArgMeta::new("buf", "void*").arg_type(), ArgType::Pointer);
        assert_eq!(ArgMeta::new("count", "size_t").arg_type(), ArgType::Size);
        assert_eq!(ArgMeta::new("argv", "const char*const*").arg_type(), ArgType::StrArr);
        assert_eq!(ArgMeta::new("mode", "umode_t").arg_type(), ArgType::U16);
        assert_eq!(ArgMeta::new("cred", "slim_cred_t").arg_type(), ArgType::Cred);
        assert_eq!(ArgMeta::new("ns", "u32").arg_type(), ArgType::Uint);
        // No dedicated encoding: sent as an address
        assert_eq!(ArgMeta::new("statbuf", "struct stat*").arg_type(), ArgType::Pointer);
    }

    #[test]
    fn test_collisions_keep_first_definition() {
        let registry = EventRegistry::from_tables(
            vec![
                EventDescriptor::new(EventId(1), "first"),
                EventDescriptor::new(EventId(1), "second"),
                EventDescriptor::new(EventId(2), "first"),
            ],
            vec![(EventId(1), vec![])],
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.event(EventId(1)).unwrap().name, "first");
        let defects = registry.defects();
        assert!(defects.contains(&RegistryError::DuplicateEventId(EventId(1))));
        assert!(defects.contains(&RegistryError::DuplicateEventName("first".to_string())));
    }

    #[test]
    fn test_defects_in_fabricated_tables() {
        let registry = EventRegistry::from_tables(
            vec![
                EventDescriptor::new(EventId(1000), "hook").essential(),
                EventDescriptor::new(EventId(2), "no_schema"),
            ],
            vec![
                (EventId(1000), vec![ArgMeta::new("fd", "int"), ArgMeta::new("fd", "int")]),
                (EventId(7), vec![]),
            ],
        );
        let defects = registry.defects();
        assert!(defects.contains(&RegistryError::EssentialWithoutProbes(EventId(1000))));
        assert!(defects.contains(&RegistryError::MissingSchema(EventId(2))));
        assert!(defects.contains(&RegistryError::OrphanSchema(EventId(7))));
        assert!(defects.contains(&RegistryError::DuplicateArgument {
            id: EventId(1000),
            name: "fd".to_string()
        }));
    }

    #[test]
    fn test_user_event_has_no_probes() {
        let event = EventRegistry::global().event(INIT_NAMESPACES).unwrap();
        assert!(event.probes.is_empty());
        assert!(!event.essential);
        assert!(event.sets.is_empty());
    }
}
