//! Named event sets
//!
//! A set is a many-to-many tag on event descriptors, used for bulk
//! enable/disable and filter-by-category. Top-level domains (`fs`, `proc`,
//! `ipc`, `net`, `time`, `system`) are refined by `<domain>_<topic>` sets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSet {
    /// Commonly useful events, enabled when nothing else is requested
    Default,
    /// Every syscall-band event
    Syscalls,
    Fs,
    FsReadWrite,
    FsFileOps,
    FsFileAttr,
    FsDirOps,
    FsLinkOps,
    FsFdOps,
    FsMuxIo,
    FsSync,
    FsInfo,
    FsAsyncIo,
    FsMonitor,
    Proc,
    ProcLife,
    ProcMem,
    ProcSched,
    ProcIds,
    Ipc,
    IpcPipe,
    IpcShm,
    IpcSem,
    IpcMsgq,
    IpcFutex,
    Net,
    NetSock,
    NetSndRcv,
    Signals,
    Time,
    TimeTimer,
    TimeTod,
    TimeClock,
    System,
    SystemModule,
    SystemNuma,
    SystemKeys,
    /// Linux Security Module hook instrumentation
    LsmHooks,
}

impl EventSet {
    pub const ALL: [EventSet; 38] = [
        EventSet::Default,
        EventSet::Syscalls,
        EventSet::Fs,
        EventSet::FsReadWrite,
        EventSet::FsFileOps,
        EventSet::FsFileAttr,
        EventSet::FsDirOps,
        EventSet::FsLinkOps,
        EventSet::FsFdOps,
        EventSet::FsMuxIo,
        EventSet::FsSync,
        EventSet::FsInfo,
        EventSet::FsAsyncIo,
        EventSet::FsMonitor,
        EventSet::Proc,
        EventSet::ProcLife,
        EventSet::ProcMem,
        EventSet::ProcSched,
        EventSet::ProcIds,
        EventSet::Ipc,
        EventSet::IpcPipe,
        EventSet::IpcShm,
        EventSet::IpcSem,
        EventSet::IpcMsgq,
        EventSet::IpcFutex,
        EventSet::Net,
        EventSet::NetSock,
        EventSet::NetSndRcv,
        EventSet::Signals,
        EventSet::Time,
        EventSet::TimeTimer,
        EventSet::TimeTod,
        EventSet::TimeClock,
        EventSet::System,
        EventSet::SystemModule,
        EventSet::SystemNuma,
        EventSet::SystemKeys,
        EventSet::LsmHooks,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventSet::Default => "default",
            EventSet::Syscalls => "syscalls",
            EventSet::Fs => "fs",
            EventSet::FsReadWrite => "fs_read_write",
            EventSet::FsFileOps => "fs_file_ops",
            EventSet::FsFileAttr => "fs_file_attr",
            EventSet::FsDirOps => "fs_dir_ops",
            EventSet::FsLinkOps => "fs_link_ops",
            EventSet::FsFdOps => "fs_fd_ops",
            EventSet::FsMuxIo => "fs_mux_io",
            EventSet::FsSync => "fs_sync",
            EventSet::FsInfo => "fs_info",
            EventSet::FsAsyncIo => "fs_async_io",
            EventSet::FsMonitor => "fs_monitor",
            EventSet::Proc => "proc",
            EventSet::ProcLife => "proc_life",
            EventSet::ProcMem => "proc_mem",
            EventSet::ProcSched => "proc_sched",
            EventSet::ProcIds => "proc_ids",
            EventSet::Ipc => "ipc",
            EventSet::IpcPipe => "ipc_pipe",
            EventSet::IpcShm => "ipc_shm",
            EventSet::IpcSem => "ipc_sem",
            EventSet::IpcMsgq => "ipc_msgq",
            EventSet::IpcFutex => "ipc_futex",
            EventSet::Net => "net",
            EventSet::NetSock => "net_sock",
            EventSet::NetSndRcv => "net_snd_rcv",
            EventSet::Signals => "signals",
            EventSet::Time => "time",
            EventSet::TimeTimer => "time_timer",
            EventSet::TimeTod => "time_tod",
            EventSet::TimeClock => "time_clock",
            EventSet::System => "system",
            EventSet::SystemModule => "system_module",
            EventSet::SystemNuma => "system_numa",
            EventSet::SystemKeys => "system_keys",
            EventSet::LsmHooks => "lsm_hooks",
        }
    }
}

impl fmt::Display for EventSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSet {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventSet::ALL
            .iter()
            .copied()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownSet(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for set in EventSet::ALL {
            assert_eq!(set.as_str().parse::<EventSet>(), Ok(set));
        }
    }

    #[test]
    fn test_unknown_set() {
        assert_eq!(
            "filesystem".parse::<EventSet>(),
            Err(RegistryError::UnknownSet("filesystem".to_string()))
        );
    }

    #[test]
    fn test_serialized_name_matches_display() {
        let json = serde_json::to_string(&EventSet::FsReadWrite).unwrap();
        assert_eq!(json, "\"fs_read_write\"");
    }
}
