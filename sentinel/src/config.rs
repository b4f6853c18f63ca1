//! # Scalar Config
//!
//! Session-wide toggles the instrumentation reads from its config map, one
//! `u32` per [`ConfigSlot`]. Every slot is written on each push so a stale
//! value from an earlier session can never survive.
//!
//! Filter slots hold `0` when the filter is disabled, otherwise the filter
//! direction ([`FILTER_IN`] or [`FILTER_OUT`]).

use std::borrow::BorrowMut;
use std::collections::BTreeMap;

use aya::maps::{HashMap, MapData};
use aya::Ebpf;
use log::{debug, info};
use sentinel_common::{ConfigSlot, FILTER_IN, FILTER_OUT};
use serde::Serialize;

use crate::domain::{ConfigError, Pid};

/// Name of the config map in the instrumentation object
pub const CONFIG_MAP: &str = "config_map";

/// Direction of a kernel-side filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Off,
    /// Keep only matching events
    In,
    /// Drop matching events
    Out,
}

impl FilterMode {
    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            FilterMode::Off => 0,
            FilterMode::In => u32::from(FILTER_IN),
            FilterMode::Out => u32::from(FILTER_OUT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct BpfConfig {
    /// Report the syscall that led to a kernel event
    pub detect_orig_syscall: bool,
    /// Capture the environment of executed programs
    pub exec_env: bool,
    pub capture_files: bool,
    pub extract_dyn_code: bool,
    /// Our own pid, so the instrumentation can ignore us
    pub tracer_pid: Pid,
    pub stack_addresses: bool,
    pub uid_filter: FilterMode,
    pub mnt_ns_filter: FilterMode,
    pub pid_ns_filter: FilterMode,
    pub uts_ns_filter: FilterMode,
    pub comm_filter: FilterMode,
    pub pid_filter: FilterMode,
    pub cont_filter: FilterMode,
    /// Also trace descendants of matching processes
    pub follow_filter: bool,
    pub new_pid_filter: FilterMode,
    pub new_cont_filter: FilterMode,
    pub debug_net: bool,
    pub proc_tree_filter: FilterMode,
    pub capture_modules: bool,
    /// The host mounts the legacy cgroup hierarchy
    pub cgroup_v1: bool,
}

impl Default for BpfConfig {
    fn default() -> Self {
        Self::for_pid(current_pid())
    }
}

impl BpfConfig {
    /// Everything off, owned by `tracer_pid`
    #[must_use]
    pub fn for_pid(tracer_pid: Pid) -> Self {
        Self {
            detect_orig_syscall: false,
            exec_env: false,
            capture_files: false,
            extract_dyn_code: false,
            tracer_pid,
            stack_addresses: false,
            uid_filter: FilterMode::Off,
            mnt_ns_filter: FilterMode::Off,
            pid_ns_filter: FilterMode::Off,
            uts_ns_filter: FilterMode::Off,
            comm_filter: FilterMode::Off,
            pid_filter: FilterMode::Off,
            cont_filter: FilterMode::Off,
            follow_filter: false,
            new_pid_filter: FilterMode::Off,
            new_cont_filter: FilterMode::Off,
            debug_net: false,
            proc_tree_filter: FilterMode::Off,
            capture_modules: false,
            cgroup_v1: false,
        }
    }

    /// Value stored in `slot`
    #[must_use]
    pub fn value(&self, slot: ConfigSlot) -> u32 {
        match slot {
            ConfigSlot::DetectOrigSyscall => self.detect_orig_syscall.into(),
            ConfigSlot::ExecEnv => self.exec_env.into(),
            ConfigSlot::CaptureFiles => self.capture_files.into(),
            ConfigSlot::ExtractDynCode => self.extract_dyn_code.into(),
            ConfigSlot::TracerPid => u32::try_from(self.tracer_pid.0).unwrap_or(0),
            ConfigSlot::StackAddresses => self.stack_addresses.into(),
            ConfigSlot::UidFilter => self.uid_filter.as_u32(),
            ConfigSlot::MntNsFilter => self.mnt_ns_filter.as_u32(),
            ConfigSlot::PidNsFilter => self.pid_ns_filter.as_u32(),
            ConfigSlot::UtsNsFilter => self.uts_ns_filter.as_u32(),
            ConfigSlot::CommFilter => self.comm_filter.as_u32(),
            ConfigSlot::PidFilter => self.pid_filter.as_u32(),
            ConfigSlot::ContFilter => self.cont_filter.as_u32(),
            ConfigSlot::FollowFilter => self.follow_filter.into(),
            ConfigSlot::NewPidFilter => self.new_pid_filter.as_u32(),
            ConfigSlot::NewContFilter => self.new_cont_filter.as_u32(),
            ConfigSlot::DebugNet => self.debug_net.into(),
            ConfigSlot::ProcTreeFilter => self.proc_tree_filter.as_u32(),
            ConfigSlot::CaptureModules => self.capture_modules.into(),
            ConfigSlot::CgroupV1 => self.cgroup_v1.into(),
        }
    }

    /// Every slot with its value, in slot order
    #[must_use]
    pub fn entries(&self) -> Vec<(ConfigSlot, u32)> {
        ConfigSlot::ALL.iter().map(|&slot| (slot, self.value(slot))).collect()
    }

    /// Write every slot into `sink`
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] the sink reports
    pub fn apply(&self, sink: &mut impl ConfigSink) -> Result<usize, ConfigError> {
        let entries = self.entries();
        for &(slot, value) in &entries {
            debug!("config slot {slot:?} = {value}");
            sink.write_slot(slot, value)?;
        }
        info!("✓ Wrote {} config slots (tracer pid {})", entries.len(), self.tracer_pid);
        Ok(entries.len())
    }

    /// Write every slot into the loaded object's config map
    ///
    /// # Errors
    /// Returns [`ConfigError::MapNotFound`] if the object has no config map,
    /// or the error of the first failed write
    pub fn write_to(&self, bpf: &mut Ebpf) -> Result<usize, ConfigError> {
        let map = bpf.map_mut(CONFIG_MAP).ok_or_else(|| ConfigError::MapNotFound(CONFIG_MAP.into()))?;
        let mut config_map: HashMap<_, u32, u32> = HashMap::try_from(map)?;
        self.apply(&mut config_map)
    }
}

fn current_pid() -> Pid {
    Pid(i32::try_from(std::process::id()).unwrap_or(0))
}

/// Destination for config slot writes
pub trait ConfigSink {
    /// Store `value` under `slot`
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the write is rejected
    fn write_slot(&mut self, slot: ConfigSlot, value: u32) -> Result<(), ConfigError>;
}

impl<T: BorrowMut<MapData>> ConfigSink for HashMap<T, u32, u32> {
    fn write_slot(&mut self, slot: ConfigSlot, value: u32) -> Result<(), ConfigError> {
        self.insert(slot.as_u32(), value, 0)
            .map_err(|source| ConfigError::WriteFailed { slot: slot.as_u32(), source })
    }
}

impl ConfigSink for BTreeMap<u32, u32> {
    fn write_slot(&mut self, slot: ConfigSlot, value: u32) -> Result<(), ConfigError> {
        self.insert(slot.as_u32(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_slot_in_order() {
        let config = BpfConfig::for_pid(Pid(4242));
        let entries = config.entries();
        assert_eq!(entries.len(), ConfigSlot::ALL.len());
        assert!(entries.windows(2).all(|w| w[0].0.as_u32() < w[1].0.as_u32()));
        assert_eq!(entries[0], (ConfigSlot::DetectOrigSyscall, 0));
    }

    #[test]
    fn test_values() {
        let config = BpfConfig {
            exec_env: true,
            uid_filter: FilterMode::In,
            comm_filter: FilterMode::Out,
            cgroup_v1: true,
            ..BpfConfig::for_pid(Pid(77))
        };
        assert_eq!(config.value(ConfigSlot::ExecEnv), 1);
        assert_eq!(config.value(ConfigSlot::TracerPid), 77);
        assert_eq!(config.value(ConfigSlot::UidFilter), 1);
        assert_eq!(config.value(ConfigSlot::CommFilter), 2);
        assert_eq!(config.value(ConfigSlot::PidFilter), 0);
        assert_eq!(config.value(ConfigSlot::CgroupV1), 1);
    }

    #[test]
    fn test_apply_to_btree_sink() {
        let mut sink = BTreeMap::new();
        let written = BpfConfig { debug_net: true, ..BpfConfig::for_pid(Pid(9)) }
            .apply(&mut sink)
            .unwrap();

        assert_eq!(written, 20);
        assert_eq!(sink.len(), 20);
        assert_eq!(sink[&ConfigSlot::DebugNet.as_u32()], 1);
        assert_eq!(sink[&ConfigSlot::TracerPid.as_u32()], 9);
        assert_eq!(sink.keys().next(), Some(&1));
    }

    #[test]
    fn test_default_records_own_pid() {
        let config = BpfConfig::default();
        assert_eq!(config.tracer_pid.0, i32::try_from(std::process::id()).unwrap());
    }
}
