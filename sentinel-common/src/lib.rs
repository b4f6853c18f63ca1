//! # Shared Schema Values (eBPF ↔ Userspace)
//!
//! Every numeric value that the kernel-resident instrumentation and the
//! userspace decoder must agree on lives in this crate. Nothing here is
//! self-describing on the wire: an event buffer carries only an event id and
//! positional argument bytes, so a value that drifts on one side of the
//! boundary turns into silent data corruption on the other.
//!
//! ## Contents
//!
//! - [`events`] - Event identifiers and their partitioning into bands
//! - [`sys32`] - i386 syscall numbers used as compatibility ids
//! - [`ArgType`] - Wire type of one positional argument
//! - [`ProbeType`] - Kernel attachment mechanism of a probe
//! - [`ConfigSlot`] - Scalar configuration channels (user → kernel)
//! - [`TailCall`] - Tail-call program indexes
//! - [`BinType`] - Classification of out-of-band binary payloads
//! - [`DebugNetEvent`] - Sub-events of the network debugging channel
//!
//! ## Ordering
//!
//! All enumerations are dense and explicitly numbered. Append new members at
//! the end only; permuting an existing member changes the contract with the
//! instrumentation.

#![cfg_attr(not(test), no_std)]

pub mod events;
pub mod sys32;

pub use events::{EventId, IdBand};

/// Maximum depth of a captured user stack trace
///
/// Matches `MAX_STACK_DEPTH` in the instrumentation.
pub const MAX_STACK_DEPTH: usize = 20;

// ============================================================================
// Argument Type Tags
// ============================================================================

/// Wire type of a single event argument
///
/// The decoder consumes exactly the encoding implied by the tag. Fixed-width
/// scalars report their width through [`ArgType::fixed_size`]; strings, string
/// arrays, byte blobs and socket addresses carry their own inner length.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ArgType {
    None = 0,
    Int = 1,
    Uint = 2,
    Long = 3,
    Ulong = 4,
    Off = 5,
    Mode = 6,
    Dev = 7,
    Size = 8,
    Pointer = 9,
    Str = 10,
    StrArr = 11,
    SockAddr = 12,
    Bytes = 13,
    U16 = 14,
    Cred = 15,
    IntArr2 = 16,
    ArgsArr = 17,
}

impl ArgType {
    /// Every tag, in wire order
    pub const ALL: [ArgType; 18] = [
        ArgType::None,
        ArgType::Int,
        ArgType::Uint,
        ArgType::Long,
        ArgType::Ulong,
        ArgType::Off,
        ArgType::Mode,
        ArgType::Dev,
        ArgType::Size,
        ArgType::Pointer,
        ArgType::Str,
        ArgType::StrArr,
        ArgType::SockAddr,
        ArgType::Bytes,
        ArgType::U16,
        ArgType::Cred,
        ArgType::IntArr2,
        ArgType::ArgsArr,
    ];

    /// Size in bytes of the kernel `slim_cred_t` record
    ///
    /// uid, gid, suid, sgid, euid, egid, fsuid, fsgid, `user_ns`, securebits
    /// (all u32) followed by five u64 capability sets.
    pub const CRED_SIZE: usize = 10 * 4 + 5 * 8;

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Encoded size for fixed-width tags, `None` for variable-length ones
    #[must_use]
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            ArgType::None => Some(0),
            ArgType::Int | ArgType::Uint | ArgType::Mode | ArgType::Dev => Some(4),
            ArgType::Long | ArgType::Ulong | ArgType::Off | ArgType::Size | ArgType::Pointer => {
                Some(8)
            }
            ArgType::U16 => Some(2),
            ArgType::IntArr2 => Some(8),
            ArgType::Cred => Some(Self::CRED_SIZE),
            ArgType::Str
            | ArgType::StrArr
            | ArgType::SockAddr
            | ArgType::Bytes
            | ArgType::ArgsArr => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ArgType::None => "none",
            ArgType::Int => "int",
            ArgType::Uint => "uint",
            ArgType::Long => "long",
            ArgType::Ulong => "ulong",
            ArgType::Off => "off",
            ArgType::Mode => "mode",
            ArgType::Dev => "dev",
            ArgType::Size => "size",
            ArgType::Pointer => "pointer",
            ArgType::Str => "str",
            ArgType::StrArr => "str_arr",
            ArgType::SockAddr => "sockaddr",
            ArgType::Bytes => "bytes",
            ArgType::U16 => "u16",
            ArgType::Cred => "cred",
            ArgType::IntArr2 => "int_arr2",
            ArgType::ArgsArr => "args_arr",
        }
    }
}

// ============================================================================
// Probe Attachment
// ============================================================================

/// Mechanism used to attach a handler to the kernel
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ProbeType {
    /// Direct syscall interception (`sys_enter`/`sys_exit` dispatch)
    Syscall = 0,
    /// Function entry probe
    Kprobe = 1,
    /// Function return probe
    Kretprobe = 2,
    /// Static tracepoint
    Tracepoint = 3,
    /// Raw tracepoint (no argument marshalling by the kernel)
    RawTracepoint = 4,
}

impl ProbeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProbeType::Syscall => "syscall",
            ProbeType::Kprobe => "kprobe",
            ProbeType::Kretprobe => "kretprobe",
            ProbeType::Tracepoint => "tracepoint",
            ProbeType::RawTracepoint => "raw_tracepoint",
        }
    }
}

// ============================================================================
// Scalar Configuration
// ============================================================================

/// Key of one scalar configuration entry pushed from userspace
///
/// Numbering starts at 1 so that 0 can stand for "no config" in transport.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ConfigSlot {
    DetectOrigSyscall = 1,
    ExecEnv = 2,
    CaptureFiles = 3,
    ExtractDynCode = 4,
    TracerPid = 5,
    StackAddresses = 6,
    UidFilter = 7,
    MntNsFilter = 8,
    PidNsFilter = 9,
    UtsNsFilter = 10,
    CommFilter = 11,
    PidFilter = 12,
    ContFilter = 13,
    FollowFilter = 14,
    NewPidFilter = 15,
    NewContFilter = 16,
    DebugNet = 17,
    ProcTreeFilter = 18,
    CaptureModules = 19,
    CgroupV1 = 20,
}

impl ConfigSlot {
    /// Every slot, in numeric order
    pub const ALL: [ConfigSlot; 20] = [
        ConfigSlot::DetectOrigSyscall,
        ConfigSlot::ExecEnv,
        ConfigSlot::CaptureFiles,
        ConfigSlot::ExtractDynCode,
        ConfigSlot::TracerPid,
        ConfigSlot::StackAddresses,
        ConfigSlot::UidFilter,
        ConfigSlot::MntNsFilter,
        ConfigSlot::PidNsFilter,
        ConfigSlot::UtsNsFilter,
        ConfigSlot::CommFilter,
        ConfigSlot::PidFilter,
        ConfigSlot::ContFilter,
        ConfigSlot::FollowFilter,
        ConfigSlot::NewPidFilter,
        ConfigSlot::NewContFilter,
        ConfigSlot::DebugNet,
        ConfigSlot::ProcTreeFilter,
        ConfigSlot::CaptureModules,
        ConfigSlot::CgroupV1,
    ];

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value >= 1 && (value as usize) <= Self::ALL.len() {
            Some(Self::ALL[value as usize - 1])
        } else {
            None
        }
    }
}

/// First id available for custom kernel config options
///
/// Ids below this belong to the options the kconfig helper knows natively.
pub const CUSTOM_KCONFIG_OPTION_START: u32 = 1000;

/// Custom kernel config options probed on behalf of the instrumentation
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelConfigOption {
    ArchHasSyscallWrapper = CUSTOM_KCONFIG_OPTION_START,
}

impl KernelConfigOption {
    #[must_use]
    pub const fn kconfig_name(self) -> &'static str {
        match self {
            KernelConfigOption::ArchHasSyscallWrapper => "CONFIG_ARCH_HAS_SYSCALL_WRAPPER",
        }
    }
}

// ============================================================================
// Filter Constants
// ============================================================================

/// Equality filter map value: the key must not match
pub const FILTER_NOT_EQUAL: u32 = 0;
/// Equality filter map value: the key must match
pub const FILTER_EQUAL: u32 = 1;

/// Filter direction: keep matching events
pub const FILTER_IN: u8 = 1;
/// Filter direction: drop matching events
pub const FILTER_OUT: u8 = 2;

/// Keys of the inequality bounds map
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InequalityKey {
    UidLess = 0,
    UidGreater = 1,
    PidLess = 2,
    PidGreater = 3,
    MntNsLess = 4,
    MntNsGreater = 5,
    PidNsLess = 6,
    PidNsGreater = 7,
}

// Bound values meaning "not set". A user bound outside these would select an
// empty set, so they are never valid user input.
pub const LESS_NOT_SET_UINT: u64 = 0;
pub const GREATER_NOT_SET_UINT: u64 = u64::MAX;
pub const LESS_NOT_SET_INT: i64 = i64::MIN;
pub const GREATER_NOT_SET_INT: i64 = i64::MAX;

// ============================================================================
// Tail Calls
// ============================================================================

/// Index of a program in the tail-call program array
///
/// Handlers use these to hand the remainder of an event to another program.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum TailCall {
    /// Continue processing a `vfs_write`
    VfsWrite = 0,
    /// Continue processing a `vfs_writev`
    VfsWritev = 1,
    /// Continue streaming a binary payload (kprobe context)
    SendBin = 2,
    /// Continue streaming a binary payload (tracepoint context)
    SendBinTp = 3,
}

impl TailCall {
    pub const ALL: [TailCall; 4] =
        [TailCall::VfsWrite, TailCall::VfsWritev, TailCall::SendBin, TailCall::SendBinTp];

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

// ============================================================================
// Binary Payloads
// ============================================================================

/// Kind of binary payload sent through the file capture channel
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum BinType {
    VfsWrite = 1,
    Mprotect = 2,
    KernelModule = 3,
}

impl BinType {
    pub const ALL: [BinType; 3] = [BinType::VfsWrite, BinType::Mprotect, BinType::KernelModule];

    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(BinType::VfsWrite),
            2 => Some(BinType::Mprotect),
            3 => Some(BinType::KernelModule),
            _ => None,
        }
    }
}

// ============================================================================
// Network Debugging
// ============================================================================

/// Sub-event id carried by the network debugging channel
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum DebugNetEvent {
    NetPacket = 0,
    SecurityBind = 1,
    UdpSendmsg = 2,
    UdpDisconnect = 3,
    UdpDestroySock = 4,
    Udpv6DestroySock = 5,
    InetSockSetState = 6,
    TcpConnect = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_type_wire_values_follow_declaration_order() {
        for (i, tag) in ArgType::ALL.iter().enumerate() {
            assert_eq!(*tag as usize, i);
            assert_eq!(ArgType::from_u8(*tag as u8), Some(*tag));
        }
        assert_eq!(ArgType::from_u8(18), None);
    }

    #[test]
    fn test_config_slot_round_trip() {
        assert_eq!(ConfigSlot::from_u32(0), None);
        assert_eq!(ConfigSlot::from_u32(1), Some(ConfigSlot::DetectOrigSyscall));
        assert_eq!(ConfigSlot::from_u32(20), Some(ConfigSlot::CgroupV1));
        assert_eq!(ConfigSlot::from_u32(21), None);
    }

    #[test]
    fn test_tail_call_slots_start_at_zero_and_are_dense() {
        assert_eq!(TailCall::ALL[0].as_u32(), 0);
        for (i, slot) in TailCall::ALL.iter().enumerate() {
            assert_eq!(slot.as_u32() as usize, i);
        }
    }

    #[test]
    fn test_bin_type_round_trip() {
        assert_eq!(BinType::from_u8(0), None);
        for bin in BinType::ALL {
            assert_eq!(BinType::from_u8(bin as u8), Some(bin));
        }
        assert_eq!(BinType::from_u8(4), None);
    }

    #[test]
    fn test_debug_net_events_are_dense() {
        let events = [
            DebugNetEvent::NetPacket,
            DebugNetEvent::SecurityBind,
            DebugNetEvent::UdpSendmsg,
            DebugNetEvent::UdpDisconnect,
            DebugNetEvent::UdpDestroySock,
            DebugNetEvent::Udpv6DestroySock,
            DebugNetEvent::InetSockSetState,
            DebugNetEvent::TcpConnect,
        ];
        for (i, event) in events.iter().enumerate() {
            assert_eq!(*event as usize, i);
        }
    }

    #[test]
    fn test_cred_size() {
        assert_eq!(ArgType::Cred.fixed_size(), Some(80));
    }
}
