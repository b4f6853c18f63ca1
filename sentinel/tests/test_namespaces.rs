use std::os::unix::fs::symlink;
use std::path::Path;

use sentinel::codec::ArgValue;
use sentinel::namespaces::{fetch_namespaces, init_namespaces_event_from, SELF_PROCESS_NAME};
use sentinel::preflight::run_preflight_checks;
use sentinel::registry::EventRegistry;
use sentinel_common::events::INIT_NAMESPACES;
use tempfile::TempDir;

/// A directory shaped like `/proc/<pid>/ns`
fn fake_ns_dir(links: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, target) in links {
        symlink(target, dir.path().join(name)).unwrap();
    }
    dir
}

fn uint(event: &sentinel::event::Event, name: &str) -> u32 {
    match event.arg(name) {
        Some(ArgValue::Uint(v)) => *v,
        other => panic!("{name}: unexpected {other:?}"),
    }
}

#[test]
fn test_fetch_parses_link_targets() {
    let dir = fake_ns_dir(&[("pid", "pid:[12]"), ("net", "net:[4026531840]")]);
    let namespaces = fetch_namespaces(dir.path());

    assert_eq!(namespaces.len(), 2);
    assert_eq!(namespaces["pid"], 12);
    assert_eq!(namespaces["net"], 4_026_531_840);
}

#[test]
fn test_malformed_targets_become_zero() {
    let dir = fake_ns_dir(&[
        ("mnt", "mnt:[abc]"),
        ("uts", "uts"),
        ("ipc", "ipc:[99999999999]"),
        ("user", "user:[4026531837]"),
    ]);
    let namespaces = fetch_namespaces(dir.path());

    assert_eq!(namespaces["mnt"], 0);
    assert_eq!(namespaces["uts"], 0);
    assert_eq!(namespaces["ipc"], 0);
    assert_eq!(namespaces["user"], 4_026_531_837);
}

#[test]
fn test_regular_file_entry_becomes_zero() {
    let dir = fake_ns_dir(&[("net", "net:[7]")]);
    std::fs::write(dir.path().join("cgroup"), "not a link").unwrap();

    let namespaces = fetch_namespaces(dir.path());
    assert_eq!(namespaces["cgroup"], 0);
    assert_eq!(namespaces["net"], 7);
}

#[test]
fn test_event_follows_schema_order() {
    let dir = fake_ns_dir(&[
        ("uts", "uts:[4026531838]"),
        ("pid", "pid:[4026531836]"),
        ("cgroup", "cgroup:[4026531835]"),
        ("not_in_schema", "not_in_schema:[1]"),
    ]);
    let registry = EventRegistry::global();
    let event = init_namespaces_event_from(registry, dir.path()).unwrap();

    assert_eq!(event.event_id, INIT_NAMESPACES);
    assert_eq!(event.event_name, "init_namespaces");
    assert_eq!(event.process_name, SELF_PROCESS_NAME);
    assert_eq!(event.args_num, 10);
    assert!(event.timestamp > 0);

    let schema = registry.params(INIT_NAMESPACES).unwrap();
    let names: Vec<&str> = event.args.iter().map(|a| a.name).collect();
    let schema_names: Vec<&str> = schema.iter().map(|a| a.name).collect();
    assert_eq!(names, schema_names);
    assert!(event.args.iter().all(|a| a.c_type == "u32"));

    assert_eq!(uint(&event, "cgroup"), 4_026_531_835);
    assert_eq!(uint(&event, "pid"), 4_026_531_836);
    assert_eq!(uint(&event, "uts"), 4_026_531_838);
    // Absent from the directory
    assert_eq!(uint(&event, "net"), 0);
    assert_eq!(uint(&event, "time_for_children"), 0);
    assert!(event.arg("not_in_schema").is_none());
}

#[test]
fn test_missing_directory_yields_all_zero_event() {
    let event =
        init_namespaces_event_from(EventRegistry::global(), Path::new("/nonexistent/ns")).unwrap();
    assert_eq!(event.args_num, 10);
    assert!(event.args.iter().all(|a| a.value == ArgValue::Uint(0)));
}

#[test]
fn test_repeated_calls_agree() {
    let dir = fake_ns_dir(&[("mnt", "mnt:[4026531841]"), ("time", "time:[4026531834]")]);
    let registry = EventRegistry::global();

    let first = init_namespaces_event_from(registry, dir.path()).unwrap();
    let second = init_namespaces_event_from(registry, dir.path()).unwrap();
    assert_eq!(first.args, second.args);
}

#[test]
fn test_event_json_shape() {
    let dir = fake_ns_dir(&[("net", "net:[4026531840]")]);
    let event = init_namespaces_event_from(EventRegistry::global(), dir.path()).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["eventId"], 2000);
    assert_eq!(json["argsNum"], 10);
    assert_eq!(json["args"][3]["name"], "net");
    assert_eq!(json["args"][3]["value"], 4_026_531_840_u64);
}

#[test]
fn test_preflight_on_missing_dir_still_yields_event() {
    let dir = Path::new("/nonexistent/ns");
    run_preflight_checks(dir, false);

    let event = init_namespaces_event_from(EventRegistry::global(), dir).unwrap();
    assert_eq!(event.args_num, 10);
    assert_eq!(event.args.len(), 10);
    assert!(event.args.iter().all(|a| a.value == ArgValue::Uint(0)));
}
