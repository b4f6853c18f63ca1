use std::collections::HashSet;

use sentinel::domain::{EventId, IdBand};
use sentinel::registry::{EventRegistry, EventSet};
use sentinel_common::events::{
    CGROUP_MKDIR, INIT_NAMESPACES, KERNEL_EVENT_BASE, MAGIC_WRITE, MAX_KERNEL_EVENT,
    MEM_PROT_ALERT, SOCKET_DUP, STAT, SYS_ENTER, UNSUPPORTED, VFS_WRITE,
};
use sentinel_common::{sys32, ArgType, ProbeType};

fn registry() -> &'static EventRegistry {
    EventRegistry::global()
}

#[test]
fn test_builtin_tables_have_no_defects() {
    let defects = registry().defects();
    assert!(defects.is_empty(), "Registry defects: {defects:?}");
}

#[test]
fn test_event_counts_per_band() {
    let mut syscalls = 0;
    let mut kernel = 0;
    let mut user = 0;
    for event in registry().iter() {
        match event.id.band() {
            IdBand::Syscall => syscalls += 1,
            IdBand::Kernel => kernel += 1,
            IdBand::User => user += 1,
            band => panic!("{} registered in band {band:?}", event.name),
        }
    }
    assert_eq!(syscalls, 353);
    assert_eq!(kernel, 32);
    assert_eq!(user, 1);
    assert_eq!(registry().len(), 386);
}

#[test]
fn test_kernel_band_is_dense() {
    for raw in KERNEL_EVENT_BASE..MAX_KERNEL_EVENT.0 {
        assert!(registry().event(EventId(raw)).is_ok(), "Kernel id {raw} missing");
    }
    assert!(registry().event(MAX_KERNEL_EVENT).is_err());
    assert!(registry().event(UNSUPPORTED).is_err());
}

#[test]
fn test_every_event_has_a_schema() {
    for event in registry().iter() {
        assert!(registry().params(event.id).is_ok(), "{} has no schema", event.name);
    }
}

#[test]
fn test_names_resolve_back_to_ids() {
    let mut names = HashSet::new();
    for event in registry().iter() {
        assert!(names.insert(event.name), "Duplicate name {}", event.name);
        assert_eq!(registry().id_of(event.name).unwrap(), event.id);
    }
}

#[test]
fn test_essential_events() {
    let mut essential: Vec<&str> = registry().essential_events().map(|e| e.name).collect();
    essential.sort_unstable();
    assert_eq!(
        essential,
        vec![
            "cgroup_mkdir",
            "cgroup_rmdir",
            "sched_process_exec",
            "sched_process_exit",
            "sched_process_fork",
            "sys_enter",
            "sys_exit",
        ]
    );
    for event in registry().essential_events() {
        assert!(!event.probes.is_empty(), "{} has nothing to attach", event.name);
    }
}

#[test]
fn test_syscalls_attach_one_syscall_probe() {
    for event in registry().iter().filter(|e| e.id.is_syscall()) {
        assert_eq!(event.probes.len(), 1, "{}", event.name);
        assert_eq!(event.probes[0].attach, ProbeType::Syscall);
        assert!(event.in_set(EventSet::Syscalls), "{} not in syscalls", event.name);
    }
}

#[test]
fn test_kernel_entry_point_aliases() {
    let stat = registry().event(STAT).unwrap();
    assert_eq!(stat.name, "stat");
    assert_eq!(stat.probes[0].event, "newstat");
    assert_eq!(stat.probes[0].handler, "newstat");
}

#[test]
fn test_only_syscalls_carry_compat_ids() {
    for event in registry().iter().filter(|e| !e.id.is_syscall()) {
        assert_eq!(event.id32, sys32::UNDEFINED, "{}", event.name);
    }
    let accept = registry().by_name("accept").unwrap();
    assert!(!accept.has_compat());
    let read = registry().by_name("read").unwrap();
    assert_eq!(read.id32, sys32::READ);
}

#[test]
fn test_multi_probe_events() {
    let vfs_write = registry().event(VFS_WRITE).unwrap();
    let kinds: Vec<ProbeType> = vfs_write.probes.iter().map(|p| p.attach).collect();
    assert_eq!(kinds, vec![ProbeType::Kprobe, ProbeType::Kretprobe]);

    let alert = registry().event(MEM_PROT_ALERT).unwrap();
    assert_eq!(alert.probes.len(), 2);
}

#[test]
fn test_zero_probe_events_are_kept() {
    for id in [MAGIC_WRITE, SOCKET_DUP, INIT_NAMESPACES] {
        let event = registry().event(id).unwrap();
        assert!(event.probes.is_empty(), "{}", event.name);
        assert!(!event.essential);
    }
}

#[test]
fn test_raw_tracepoints() {
    let sys_enter = registry().event(SYS_ENTER).unwrap();
    assert_eq!(sys_enter.probes[0].attach, ProbeType::RawTracepoint);
    assert_eq!(sys_enter.probes[0].event, "raw_syscalls:sys_enter");

    let mkdir = registry().event(CGROUP_MKDIR).unwrap();
    assert!(mkdir.essential);
}

#[test]
fn test_default_set() {
    assert_eq!(registry().events_in_set(EventSet::Default).count(), 75);
    assert!(registry().by_name("execve").unwrap().in_set(EventSet::Default));
    assert!(!registry().by_name("read").unwrap().in_set(EventSet::Default));
}

#[test]
fn test_every_set_is_populated() {
    for set in EventSet::ALL {
        assert!(registry().events_in_set(set).next().is_some(), "Set {set} is empty");
    }
}

#[test]
fn test_init_namespaces_schema() {
    let params = registry().params(INIT_NAMESPACES).unwrap();
    let names: Vec<&str> = params.iter().map(|a| a.name).collect();
    assert_eq!(
        names,
        vec![
            "cgroup",
            "ipc",
            "mnt",
            "net",
            "pid",
            "pid_for_children",
            "time",
            "time_for_children",
            "user",
            "uts",
        ]
    );
    assert!(params.iter().all(|a| a.arg_type() == ArgType::Uint));
}

#[test]
fn test_schema_type_spellings() {
    let execve = registry().params(registry().id_of("execve").unwrap()).unwrap();
    let types: Vec<ArgType> = execve.iter().map(|a| a.arg_type()).collect();
    assert_eq!(types, vec![ArgType::Str, ArgType::StrArr, ArgType::StrArr]);

    let pipe = registry().params(registry().id_of("pipe").unwrap()).unwrap();
    assert_eq!(pipe[0].arg_type(), ArgType::IntArr2);

    let commit_creds = registry().params(registry().id_of("commit_creds").unwrap()).unwrap();
    assert_eq!(commit_creds[0].arg_type(), ArgType::Cred);
}
