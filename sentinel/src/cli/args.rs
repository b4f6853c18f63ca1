//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::namespaces::INIT_PROC_NS_DIR;

#[derive(Parser)]
#[command(
    name = "sentinel",
    about = "Inspect the event registry of a syscall and kernel-event tracer",
    after_help = "\
EXAMPLES:
    sentinel list --set net                  Events in the net set
    sentinel show execve                     Probes and argument schema of execve
    sentinel select --set fs --event execve  Ids a session with these filters traces
    sudo sentinel init-ns                    Namespaces of the init process as JSON"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered events
    List {
        /// Only events in this set
        #[arg(long)]
        set: Option<String>,
    },

    /// Show one event by name or numeric id
    Show {
        #[arg(value_name = "EVENT")]
        event: String,
    },

    /// List event sets with their sizes
    Sets,

    /// Check the registry tables for consistency defects
    Check,

    /// Print the init_namespaces event for this host
    InitNs {
        /// Directory of namespace links
        #[arg(long, default_value = INIT_PROC_NS_DIR)]
        dir: PathBuf,
    },

    /// Resolve set and event names to the ids a session would trace
    Select {
        /// Event sets (comma-separated or repeated)
        #[arg(long = "set", value_delimiter = ',')]
        sets: Vec<String>,

        /// Event names (comma-separated or repeated)
        #[arg(long = "event", value_delimiter = ',')]
        events: Vec<String>,
    },

    /// Print the default scalar config slots
    Config,

    /// Print the i386 to x86_64 syscall translation table
    Compat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_accepts_lists() {
        let args = Args::parse_from([
            "sentinel", "select", "--set", "fs,net", "--event", "execve", "--event", "openat",
        ]);
        let Command::Select { sets, events } = args.command else {
            panic!("expected select");
        };
        assert_eq!(sets, vec!["fs", "net"]);
        assert_eq!(events, vec!["execve", "openat"]);
    }

    #[test]
    fn test_init_ns_default_dir() {
        let args = Args::parse_from(["sentinel", "init-ns"]);
        let Command::InitNs { dir } = args.command else {
            panic!("expected init-ns");
        };
        assert_eq!(dir, PathBuf::from("/proc/1/ns"));
    }

    #[test]
    fn test_global_json_flag() {
        let args = Args::parse_from(["sentinel", "sets", "--json"]);
        assert!(args.json);
        assert!(matches!(args.command, Command::Sets));
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        assert!(Args::try_parse_from(["sentinel"]).is_err());
    }
}
