//! Event identifiers
//!
//! A signed 32-bit space partitioned into disjoint bands:
//!
//! | Band    | Range         | Source                                          |
//! |---------|---------------|-------------------------------------------------|
//! | Syscall | `0..1000`     | x86_64 syscall number of the traced syscall     |
//! | Kernel  | `1000..2000`  | tracepoints, kprobes, LSM hooks, synthetic       |
//! | User    | `2000..3000`  | computed entirely in userspace                  |
//!
//! The instrumentation tags every buffer it writes with one of these ids.

use core::fmt;

/// Numeric key of one traceable event
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(transparent))]
pub struct EventId(pub i32);

/// First id of the kernel-internal band
pub const KERNEL_EVENT_BASE: i32 = 1000;

/// First id of the userspace-originated band
pub const USER_EVENT_BASE: i32 = 2000;

/// One past the last id of the userspace-originated band
pub const USER_EVENT_END: i32 = 3000;

/// Band an [`EventId`] falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "user", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum IdBand {
    Syscall,
    Kernel,
    User,
    /// The "unsupported on this architecture" sentinel
    Unsupported,
    Invalid,
}

impl EventId {
    #[must_use]
    pub const fn band(self) -> IdBand {
        let id = self.0;
        if id == UNSUPPORTED.0 {
            IdBand::Unsupported
        } else if id < 0 {
            IdBand::Invalid
        } else if id < KERNEL_EVENT_BASE {
            IdBand::Syscall
        } else if id < USER_EVENT_BASE {
            IdBand::Kernel
        } else if id < USER_EVENT_END {
            IdBand::User
        } else {
            IdBand::Invalid
        }
    }

    #[must_use]
    pub const fn is_syscall(self) -> bool {
        matches!(self.band(), IdBand::Syscall)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EventId> for i32 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// Placeholder for a syscall the running architecture does not provide
pub const UNSUPPORTED: EventId = EventId(10000);

// ============================================================================
// Syscall band (x86_64 syscall numbers)
// ============================================================================

pub const READ: EventId = EventId(0);
pub const WRITE: EventId = EventId(1);
pub const OPEN: EventId = EventId(2);
pub const CLOSE: EventId = EventId(3);
pub const STAT: EventId = EventId(4);
pub const FSTAT: EventId = EventId(5);
pub const LSTAT: EventId = EventId(6);
pub const POLL: EventId = EventId(7);
pub const LSEEK: EventId = EventId(8);
pub const MMAP: EventId = EventId(9);
pub const MPROTECT: EventId = EventId(10);
pub const MUNMAP: EventId = EventId(11);
pub const BRK: EventId = EventId(12);
pub const RT_SIGACTION: EventId = EventId(13);
pub const RT_SIGPROCMASK: EventId = EventId(14);
pub const RT_SIGRETURN: EventId = EventId(15);
pub const IOCTL: EventId = EventId(16);
pub const PREAD64: EventId = EventId(17);
pub const PWRITE64: EventId = EventId(18);
pub const READV: EventId = EventId(19);
pub const WRITEV: EventId = EventId(20);
pub const ACCESS: EventId = EventId(21);
pub const PIPE: EventId = EventId(22);
pub const SELECT: EventId = EventId(23);
pub const SCHED_YIELD: EventId = EventId(24);
pub const MREMAP: EventId = EventId(25);
pub const MSYNC: EventId = EventId(26);
pub const MINCORE: EventId = EventId(27);
pub const MADVISE: EventId = EventId(28);
pub const SHMGET: EventId = EventId(29);
pub const SHMAT: EventId = EventId(30);
pub const SHMCTL: EventId = EventId(31);
pub const DUP: EventId = EventId(32);
pub const DUP2: EventId = EventId(33);
pub const PAUSE: EventId = EventId(34);
pub const NANOSLEEP: EventId = EventId(35);
pub const GETITIMER: EventId = EventId(36);
pub const ALARM: EventId = EventId(37);
pub const SETITIMER: EventId = EventId(38);
pub const GETPID: EventId = EventId(39);
pub const SENDFILE: EventId = EventId(40);
pub const SOCKET: EventId = EventId(41);
pub const CONNECT: EventId = EventId(42);
pub const ACCEPT: EventId = EventId(43);
pub const SENDTO: EventId = EventId(44);
pub const RECVFROM: EventId = EventId(45);
pub const SENDMSG: EventId = EventId(46);
pub const RECVMSG: EventId = EventId(47);
pub const SHUTDOWN: EventId = EventId(48);
pub const BIND: EventId = EventId(49);
pub const LISTEN: EventId = EventId(50);
pub const GETSOCKNAME: EventId = EventId(51);
pub const GETPEERNAME: EventId = EventId(52);
pub const SOCKETPAIR: EventId = EventId(53);
pub const SETSOCKOPT: EventId = EventId(54);
pub const GETSOCKOPT: EventId = EventId(55);
pub const CLONE: EventId = EventId(56);
pub const FORK: EventId = EventId(57);
pub const VFORK: EventId = EventId(58);
pub const EXECVE: EventId = EventId(59);
pub const EXIT: EventId = EventId(60);
pub const WAIT4: EventId = EventId(61);
pub const KILL: EventId = EventId(62);
pub const UNAME: EventId = EventId(63);
pub const SEMGET: EventId = EventId(64);
pub const SEMOP: EventId = EventId(65);
pub const SEMCTL: EventId = EventId(66);
pub const SHMDT: EventId = EventId(67);
pub const MSGGET: EventId = EventId(68);
pub const MSGSND: EventId = EventId(69);
pub const MSGRCV: EventId = EventId(70);
pub const MSGCTL: EventId = EventId(71);
pub const FCNTL: EventId = EventId(72);
pub const FLOCK: EventId = EventId(73);
pub const FSYNC: EventId = EventId(74);
pub const FDATASYNC: EventId = EventId(75);
pub const TRUNCATE: EventId = EventId(76);
pub const FTRUNCATE: EventId = EventId(77);
pub const GETDENTS: EventId = EventId(78);
pub const GETCWD: EventId = EventId(79);
pub const CHDIR: EventId = EventId(80);
pub const FCHDIR: EventId = EventId(81);
pub const RENAME: EventId = EventId(82);
pub const MKDIR: EventId = EventId(83);
pub const RMDIR: EventId = EventId(84);
pub const CREAT: EventId = EventId(85);
pub const LINK: EventId = EventId(86);
pub const UNLINK: EventId = EventId(87);
pub const SYMLINK: EventId = EventId(88);
pub const READLINK: EventId = EventId(89);
pub const CHMOD: EventId = EventId(90);
pub const FCHMOD: EventId = EventId(91);
pub const CHOWN: EventId = EventId(92);
pub const FCHOWN: EventId = EventId(93);
pub const LCHOWN: EventId = EventId(94);
pub const UMASK: EventId = EventId(95);
pub const GETTIMEOFDAY: EventId = EventId(96);
pub const GETRLIMIT: EventId = EventId(97);
pub const GETRUSAGE: EventId = EventId(98);
pub const SYSINFO: EventId = EventId(99);
pub const TIMES: EventId = EventId(100);
pub const PTRACE: EventId = EventId(101);
pub const GETUID: EventId = EventId(102);
pub const SYSLOG: EventId = EventId(103);
pub const GETGID: EventId = EventId(104);
pub const SETUID: EventId = EventId(105);
pub const SETGID: EventId = EventId(106);
pub const GETEUID: EventId = EventId(107);
pub const GETEGID: EventId = EventId(108);
pub const SETPGID: EventId = EventId(109);
pub const GETPPID: EventId = EventId(110);
pub const GETPGRP: EventId = EventId(111);
pub const SETSID: EventId = EventId(112);
pub const SETREUID: EventId = EventId(113);
pub const SETREGID: EventId = EventId(114);
pub const GETGROUPS: EventId = EventId(115);
pub const SETGROUPS: EventId = EventId(116);
pub const SETRESUID: EventId = EventId(117);
pub const GETRESUID: EventId = EventId(118);
pub const SETRESGID: EventId = EventId(119);
pub const GETRESGID: EventId = EventId(120);
pub const GETPGID: EventId = EventId(121);
pub const SETFSUID: EventId = EventId(122);
pub const SETFSGID: EventId = EventId(123);
pub const GETSID: EventId = EventId(124);
pub const CAPGET: EventId = EventId(125);
pub const CAPSET: EventId = EventId(126);
pub const RT_SIGPENDING: EventId = EventId(127);
pub const RT_SIGTIMEDWAIT: EventId = EventId(128);
pub const RT_SIGQUEUEINFO: EventId = EventId(129);
pub const RT_SIGSUSPEND: EventId = EventId(130);
pub const SIGALTSTACK: EventId = EventId(131);
pub const UTIME: EventId = EventId(132);
pub const MKNOD: EventId = EventId(133);
pub const USELIB: EventId = EventId(134);
pub const PERSONALITY: EventId = EventId(135);
pub const USTAT: EventId = EventId(136);
pub const STATFS: EventId = EventId(137);
pub const FSTATFS: EventId = EventId(138);
pub const SYSFS: EventId = EventId(139);
pub const GETPRIORITY: EventId = EventId(140);
pub const SETPRIORITY: EventId = EventId(141);
pub const SCHED_SETPARAM: EventId = EventId(142);
pub const SCHED_GETPARAM: EventId = EventId(143);
pub const SCHED_SETSCHEDULER: EventId = EventId(144);
pub const SCHED_GETSCHEDULER: EventId = EventId(145);
pub const SCHED_GET_PRIORITY_MAX: EventId = EventId(146);
pub const SCHED_GET_PRIORITY_MIN: EventId = EventId(147);
pub const SCHED_RR_GET_INTERVAL: EventId = EventId(148);
pub const MLOCK: EventId = EventId(149);
pub const MUNLOCK: EventId = EventId(150);
pub const MLOCKALL: EventId = EventId(151);
pub const MUNLOCKALL: EventId = EventId(152);
pub const VHANGUP: EventId = EventId(153);
pub const MODIFY_LDT: EventId = EventId(154);
pub const PIVOT_ROOT: EventId = EventId(155);
pub const SYSCTL: EventId = EventId(156);
pub const PRCTL: EventId = EventId(157);
pub const ARCH_PRCTL: EventId = EventId(158);
pub const ADJTIMEX: EventId = EventId(159);
pub const SETRLIMIT: EventId = EventId(160);
pub const CHROOT: EventId = EventId(161);
pub const SYNC: EventId = EventId(162);
pub const ACCT: EventId = EventId(163);
pub const SETTIMEOFDAY: EventId = EventId(164);
pub const MOUNT: EventId = EventId(165);
pub const UMOUNT: EventId = EventId(166);
pub const SWAPON: EventId = EventId(167);
pub const SWAPOFF: EventId = EventId(168);
pub const REBOOT: EventId = EventId(169);
pub const SETHOSTNAME: EventId = EventId(170);
pub const SETDOMAINNAME: EventId = EventId(171);
pub const IOPL: EventId = EventId(172);
pub const IOPERM: EventId = EventId(173);
pub const CREATE_MODULE: EventId = EventId(174);
pub const INIT_MODULE: EventId = EventId(175);
pub const DELETE_MODULE: EventId = EventId(176);
pub const GET_KERNEL_SYMS: EventId = EventId(177);
pub const QUERY_MODULE: EventId = EventId(178);
pub const QUOTACTL: EventId = EventId(179);
pub const NFSSERVCTL: EventId = EventId(180);
pub const GETPMSG: EventId = EventId(181);
pub const PUTPMSG: EventId = EventId(182);
pub const AFS: EventId = EventId(183);
pub const TUXCALL: EventId = EventId(184);
pub const SECURITY: EventId = EventId(185);
pub const GETTID: EventId = EventId(186);
pub const READAHEAD: EventId = EventId(187);
pub const SETXATTR: EventId = EventId(188);
pub const LSETXATTR: EventId = EventId(189);
pub const FSETXATTR: EventId = EventId(190);
pub const GETXATTR: EventId = EventId(191);
pub const LGETXATTR: EventId = EventId(192);
pub const FGETXATTR: EventId = EventId(193);
pub const LISTXATTR: EventId = EventId(194);
pub const LLISTXATTR: EventId = EventId(195);
pub const FLISTXATTR: EventId = EventId(196);
pub const REMOVEXATTR: EventId = EventId(197);
pub const LREMOVEXATTR: EventId = EventId(198);
pub const FREMOVEXATTR: EventId = EventId(199);
pub const TKILL: EventId = EventId(200);
pub const TIME: EventId = EventId(201);
pub const FUTEX: EventId = EventId(202);
pub const SCHED_SETAFFINITY: EventId = EventId(203);
pub const SCHED_GETAFFINITY: EventId = EventId(204);
pub const SET_THREAD_AREA: EventId = EventId(205);
pub const IO_SETUP: EventId = EventId(206);
pub const IO_DESTROY: EventId = EventId(207);
pub const IO_GETEVENTS: EventId = EventId(208);
pub const IO_SUBMIT: EventId = EventId(209);
pub const IO_CANCEL: EventId = EventId(210);
pub const GET_THREAD_AREA: EventId = EventId(211);
pub const LOOKUP_DCOOKIE: EventId = EventId(212);
pub const EPOLL_CREATE: EventId = EventId(213);
pub const EPOLL_CTL_OLD: EventId = EventId(214);
pub const EPOLL_WAIT_OLD: EventId = EventId(215);
pub const REMAP_FILE_PAGES: EventId = EventId(216);
pub const GETDENTS64: EventId = EventId(217);
pub const SET_TID_ADDRESS: EventId = EventId(218);
pub const RESTART_SYSCALL: EventId = EventId(219);
pub const SEMTIMEDOP: EventId = EventId(220);
pub const FADVISE64: EventId = EventId(221);
pub const TIMER_CREATE: EventId = EventId(222);
pub const TIMER_SETTIME: EventId = EventId(223);
pub const TIMER_GETTIME: EventId = EventId(224);
pub const TIMER_GETOVERRUN: EventId = EventId(225);
pub const TIMER_DELETE: EventId = EventId(226);
pub const CLOCK_SETTIME: EventId = EventId(227);
pub const CLOCK_GETTIME: EventId = EventId(228);
pub const CLOCK_GETRES: EventId = EventId(229);
pub const CLOCK_NANOSLEEP: EventId = EventId(230);
pub const EXIT_GROUP: EventId = EventId(231);
pub const EPOLL_WAIT: EventId = EventId(232);
pub const EPOLL_CTL: EventId = EventId(233);
pub const TGKILL: EventId = EventId(234);
pub const UTIMES: EventId = EventId(235);
pub const VSERVER: EventId = EventId(236);
pub const MBIND: EventId = EventId(237);
pub const SET_MEMPOLICY: EventId = EventId(238);
pub const GET_MEMPOLICY: EventId = EventId(239);
pub const MQ_OPEN: EventId = EventId(240);
pub const MQ_UNLINK: EventId = EventId(241);
pub const MQ_TIMEDSEND: EventId = EventId(242);
pub const MQ_TIMEDRECEIVE: EventId = EventId(243);
pub const MQ_NOTIFY: EventId = EventId(244);
pub const MQ_GETSETATTR: EventId = EventId(245);
pub const KEXEC_LOAD: EventId = EventId(246);
pub const WAITID: EventId = EventId(247);
pub const ADD_KEY: EventId = EventId(248);
pub const REQUEST_KEY: EventId = EventId(249);
pub const KEYCTL: EventId = EventId(250);
pub const IOPRIO_SET: EventId = EventId(251);
pub const IOPRIO_GET: EventId = EventId(252);
pub const INOTIFY_INIT: EventId = EventId(253);
pub const INOTIFY_ADD_WATCH: EventId = EventId(254);
pub const INOTIFY_RM_WATCH: EventId = EventId(255);
pub const MIGRATE_PAGES: EventId = EventId(256);
pub const OPENAT: EventId = EventId(257);
pub const MKDIRAT: EventId = EventId(258);
pub const MKNODAT: EventId = EventId(259);
pub const FCHOWNAT: EventId = EventId(260);
pub const FUTIMESAT: EventId = EventId(261);
pub const NEWFSTATAT: EventId = EventId(262);
pub const UNLINKAT: EventId = EventId(263);
pub const RENAMEAT: EventId = EventId(264);
pub const LINKAT: EventId = EventId(265);
pub const SYMLINKAT: EventId = EventId(266);
pub const READLINKAT: EventId = EventId(267);
pub const FCHMODAT: EventId = EventId(268);
pub const FACCESSAT: EventId = EventId(269);
pub const PSELECT6: EventId = EventId(270);
pub const PPOLL: EventId = EventId(271);
pub const UNSHARE: EventId = EventId(272);
pub const SET_ROBUST_LIST: EventId = EventId(273);
pub const GET_ROBUST_LIST: EventId = EventId(274);
pub const SPLICE: EventId = EventId(275);
pub const TEE: EventId = EventId(276);
pub const SYNC_FILE_RANGE: EventId = EventId(277);
pub const VMSPLICE: EventId = EventId(278);
pub const MOVE_PAGES: EventId = EventId(279);
pub const UTIMENSAT: EventId = EventId(280);
pub const EPOLL_PWAIT: EventId = EventId(281);
pub const SIGNALFD: EventId = EventId(282);
pub const TIMERFD_CREATE: EventId = EventId(283);
pub const EVENTFD: EventId = EventId(284);
pub const FALLOCATE: EventId = EventId(285);
pub const TIMERFD_SETTIME: EventId = EventId(286);
pub const TIMERFD_GETTIME: EventId = EventId(287);
pub const ACCEPT4: EventId = EventId(288);
pub const SIGNALFD4: EventId = EventId(289);
pub const EVENTFD2: EventId = EventId(290);
pub const EPOLL_CREATE1: EventId = EventId(291);
pub const DUP3: EventId = EventId(292);
pub const PIPE2: EventId = EventId(293);
pub const INOTIFY_INIT1: EventId = EventId(294);
pub const PREADV: EventId = EventId(295);
pub const PWRITEV: EventId = EventId(296);
pub const RT_TGSIGQUEUEINFO: EventId = EventId(297);
pub const PERF_EVENT_OPEN: EventId = EventId(298);
pub const RECVMMSG: EventId = EventId(299);
pub const FANOTIFY_INIT: EventId = EventId(300);
pub const FANOTIFY_MARK: EventId = EventId(301);
pub const PRLIMIT64: EventId = EventId(302);
pub const NAME_TO_HANDLE_AT: EventId = EventId(303);
pub const OPEN_BY_HANDLE_AT: EventId = EventId(304);
pub const CLOCK_ADJTIME: EventId = EventId(305);
pub const SYNCFS: EventId = EventId(306);
pub const SENDMMSG: EventId = EventId(307);
pub const SETNS: EventId = EventId(308);
pub const GETCPU: EventId = EventId(309);
pub const PROCESS_VM_READV: EventId = EventId(310);
pub const PROCESS_VM_WRITEV: EventId = EventId(311);
pub const KCMP: EventId = EventId(312);
pub const FINIT_MODULE: EventId = EventId(313);
pub const SCHED_SETATTR: EventId = EventId(314);
pub const SCHED_GETATTR: EventId = EventId(315);
pub const RENAMEAT2: EventId = EventId(316);
pub const SECCOMP: EventId = EventId(317);
pub const GETRANDOM: EventId = EventId(318);
pub const MEMFD_CREATE: EventId = EventId(319);
pub const KEXEC_FILE_LOAD: EventId = EventId(320);
pub const BPF: EventId = EventId(321);
pub const EXECVEAT: EventId = EventId(322);
pub const USERFAULTFD: EventId = EventId(323);
pub const MEMBARRIER: EventId = EventId(324);
pub const MLOCK2: EventId = EventId(325);
pub const COPY_FILE_RANGE: EventId = EventId(326);
pub const PREADV2: EventId = EventId(327);
pub const PWRITEV2: EventId = EventId(328);
pub const PKEY_MPROTECT: EventId = EventId(329);
pub const PKEY_ALLOC: EventId = EventId(330);
pub const PKEY_FREE: EventId = EventId(331);
pub const STATX: EventId = EventId(332);
pub const IO_PGETEVENTS: EventId = EventId(333);
pub const RSEQ: EventId = EventId(334);
pub const PIDFD_SEND_SIGNAL: EventId = EventId(424);
pub const IO_URING_SETUP: EventId = EventId(425);
pub const IO_URING_ENTER: EventId = EventId(426);
pub const IO_URING_REGISTER: EventId = EventId(427);
pub const OPEN_TREE: EventId = EventId(428);
pub const MOVE_MOUNT: EventId = EventId(429);
pub const FSOPEN: EventId = EventId(430);
pub const FSCONFIG: EventId = EventId(431);
pub const FSMOUNT: EventId = EventId(432);
pub const FSPICK: EventId = EventId(433);
pub const PIDFD_OPEN: EventId = EventId(434);
pub const CLONE3: EventId = EventId(435);
pub const CLOSE_RANGE: EventId = EventId(436);
pub const OPENAT2: EventId = EventId(437);
pub const PIDFD_GETFD: EventId = EventId(438);
pub const FACCESSAT2: EventId = EventId(439);
pub const PROCESS_MADVISE: EventId = EventId(440);
pub const EPOLL_PWAIT2: EventId = EventId(441);

// ============================================================================
// Kernel band (non-syscall instrumentation)
// ============================================================================

pub const SYS_ENTER: EventId = EventId(KERNEL_EVENT_BASE);
pub const SYS_EXIT: EventId = EventId(KERNEL_EVENT_BASE + 1);
pub const SCHED_PROCESS_FORK: EventId = EventId(KERNEL_EVENT_BASE + 2);
pub const SCHED_PROCESS_EXEC: EventId = EventId(KERNEL_EVENT_BASE + 3);
pub const SCHED_PROCESS_EXIT: EventId = EventId(KERNEL_EVENT_BASE + 4);
pub const SCHED_SWITCH: EventId = EventId(KERNEL_EVENT_BASE + 5);
pub const DO_EXIT: EventId = EventId(KERNEL_EVENT_BASE + 6);
pub const CAP_CAPABLE: EventId = EventId(KERNEL_EVENT_BASE + 7);
pub const VFS_WRITE: EventId = EventId(KERNEL_EVENT_BASE + 8);
pub const VFS_WRITEV: EventId = EventId(KERNEL_EVENT_BASE + 9);
pub const MEM_PROT_ALERT: EventId = EventId(KERNEL_EVENT_BASE + 10);
pub const COMMIT_CREDS: EventId = EventId(KERNEL_EVENT_BASE + 11);
pub const SWITCH_TASK_NS: EventId = EventId(KERNEL_EVENT_BASE + 12);
pub const MAGIC_WRITE: EventId = EventId(KERNEL_EVENT_BASE + 13);
pub const CGROUP_ATTACH_TASK: EventId = EventId(KERNEL_EVENT_BASE + 14);
pub const CGROUP_MKDIR: EventId = EventId(KERNEL_EVENT_BASE + 15);
pub const CGROUP_RMDIR: EventId = EventId(KERNEL_EVENT_BASE + 16);
pub const SECURITY_BPRM_CHECK: EventId = EventId(KERNEL_EVENT_BASE + 17);
pub const SECURITY_FILE_OPEN: EventId = EventId(KERNEL_EVENT_BASE + 18);
pub const SECURITY_INODE_UNLINK: EventId = EventId(KERNEL_EVENT_BASE + 19);
pub const SECURITY_SOCKET_CREATE: EventId = EventId(KERNEL_EVENT_BASE + 20);
pub const SECURITY_SOCKET_LISTEN: EventId = EventId(KERNEL_EVENT_BASE + 21);
pub const SECURITY_SOCKET_CONNECT: EventId = EventId(KERNEL_EVENT_BASE + 22);
pub const SECURITY_SOCKET_ACCEPT: EventId = EventId(KERNEL_EVENT_BASE + 23);
pub const SECURITY_SOCKET_BIND: EventId = EventId(KERNEL_EVENT_BASE + 24);
pub const SECURITY_SB_MOUNT: EventId = EventId(KERNEL_EVENT_BASE + 25);
pub const SECURITY_BPF: EventId = EventId(KERNEL_EVENT_BASE + 26);
pub const SECURITY_BPF_MAP: EventId = EventId(KERNEL_EVENT_BASE + 27);
pub const SECURITY_KERNEL_READ_FILE: EventId = EventId(KERNEL_EVENT_BASE + 28);
pub const SECURITY_INODE_MKNOD: EventId = EventId(KERNEL_EVENT_BASE + 29);
pub const SECURITY_KERNEL_POST_READ_FILE: EventId = EventId(KERNEL_EVENT_BASE + 30);
pub const SOCKET_DUP: EventId = EventId(KERNEL_EVENT_BASE + 31);
pub const MAX_KERNEL_EVENT: EventId = EventId(KERNEL_EVENT_BASE + 32);

// ============================================================================
// User band
// ============================================================================

pub const INIT_NAMESPACES: EventId = EventId(USER_EVENT_BASE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(READ.band(), IdBand::Syscall);
        assert_eq!(SYS_ENTER.band(), IdBand::Kernel);
        assert_eq!(SOCKET_DUP.band(), IdBand::Kernel);
        assert_eq!(INIT_NAMESPACES.band(), IdBand::User);
        assert_eq!(UNSUPPORTED.band(), IdBand::Unsupported);
        assert_eq!(EventId(-1).band(), IdBand::Invalid);
    }

    #[test]
    fn test_kernel_band_is_dense() {
        assert_eq!(SYS_ENTER.0, 1000);
        assert_eq!(SECURITY_KERNEL_POST_READ_FILE.0, 1030);
        assert_eq!(SOCKET_DUP.0, 1031);
        assert_eq!(MAX_KERNEL_EVENT.0, 1032);
    }
}
