//! # sentinel - Main Entry Point
//!
//! Read-only tooling over the event registry:
//! - **Browse** (`list`, `show`, `sets`): what can be traced and how it decodes
//! - **Verify** (`check`): registry conformance, non-zero exit on any defect
//! - **Plan** (`select`, `config`, `compat`): what a loader would push to the kernel
//! - **Bootstrap** (`init-ns`): the user-space `init_namespaces` event

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use sentinel::cli::{Args, Command};
use sentinel::compat::sys32_to_sys64;
use sentinel::config::BpfConfig;
use sentinel::domain::{EventId, RegistryError};
use sentinel::namespaces::init_namespaces_event_from;
use sentinel::preflight::run_preflight_checks;
use sentinel::registry::{ArgMeta, EventDescriptor, EventRegistry, EventSet};
use sentinel::selection::select_events;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

/// Unresolvable user input is a usage error; everything else is a failure
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RegistryError>() {
        Some(
            RegistryError::UnknownEventId(_)
            | RegistryError::UnknownEventName(_)
            | RegistryError::UnknownSet(_),
        ) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let registry = EventRegistry::global();
    info!("Loaded {} events", registry.len());

    match args.command {
        Command::List { set } => {
            let events: Vec<&EventDescriptor> = match set {
                Some(name) => registry.events_in_set(name.parse::<EventSet>()?).collect(),
                None => registry.iter().collect(),
            };
            if args.json {
                return print_json(&events);
            }
            for event in events {
                println!("{:>5}  {:<32} {}", event.id.0, event.name, join_sets(event));
            }
        }
        Command::Show { event } => {
            let descriptor = match event.parse::<i32>() {
                Ok(id) => registry.event(EventId(id))?,
                Err(_) => registry.by_name(&event)?,
            };
            show_event(registry, descriptor, args.json)?;
        }
        Command::Sets => {
            let sets: Vec<(EventSet, usize)> = EventSet::ALL
                .iter()
                .map(|&set| (set, registry.events_in_set(set).count()))
                .collect();
            if args.json {
                return print_json(&sets);
            }
            for (set, count) in sets {
                println!("{:<16} {count:>4}", set.as_str());
            }
        }
        Command::Check => {
            let defects = registry.defects();
            for defect in &defects {
                eprintln!("defect: {defect}");
            }
            if !defects.is_empty() {
                bail!("Registry has {} consistency defects", defects.len());
            }
            if !args.quiet {
                println!("✓ {} events, no defects", registry.len());
            }
        }
        Command::InitNs { dir } => {
            run_preflight_checks(&dir, args.quiet);
            let event = init_namespaces_event_from(registry, &dir)
                .context("Failed to build init_namespaces event")?;
            print_json(&event)?;
        }
        Command::Select { sets, events } => {
            let ids = select_events(registry, &sets, &events)?;
            if args.json {
                return print_json(&ids);
            }
            for id in ids {
                println!("{:>5}  {}", id.0, registry.event(id)?.name);
            }
        }
        Command::Config => {
            let entries = BpfConfig::default().entries();
            if args.json {
                return print_json(&entries);
            }
            for (slot, value) in entries {
                println!("{:>2}  {:<20} {value}", slot.as_u32(), format!("{slot:?}"));
            }
        }
        Command::Compat => {
            let table = sys32_to_sys64(registry);
            if args.json {
                return print_json(&table);
            }
            for (id32, id) in table {
                println!("{id32:>4} -> {:>4}  {}", id.0, registry.event(id)?.name);
            }
        }
    }

    Ok(())
}

/// Descriptor and schema rendered as one JSON object
#[derive(Serialize)]
struct Shown<'a> {
    #[serde(flatten)]
    event: &'a EventDescriptor,
    params: &'a [ArgMeta],
}

fn show_event(registry: &EventRegistry, event: &EventDescriptor, json: bool) -> Result<()> {
    let params = registry.params(event.id)?;

    if json {
        return print_json(&Shown { event, params });
    }

    println!("{} ({}, {:?})", event.name, event.id, event.id.band());
    if event.has_compat() {
        println!("  compat id: {}", event.id32);
    }
    if event.essential {
        println!("  essential: attach failure aborts the session");
    }
    println!("  sets: {}", join_sets(event));
    for probe in &event.probes {
        println!("  probe: {} {} -> {}", probe.attach.as_str(), probe.event, probe.handler);
    }
    for (i, arg) in params.iter().enumerate() {
        println!("  arg {i}: {} {} [{}]", arg.c_type, arg.name, arg.arg_type().as_str());
    }
    Ok(())
}

fn join_sets(event: &EventDescriptor) -> String {
    event.sets.iter().map(|set| set.as_str()).collect::<Vec<_>>().join(",")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
