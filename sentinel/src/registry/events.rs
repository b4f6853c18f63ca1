//! Event descriptor table
//!
//! Syscall rows come first, ordered by their x86_64 number. Each syscall
//! attaches one [`ProbeType::Syscall`] probe whose target and handler share
//! the kernel entry point's name. Kernel events follow, then the
//! userspace-synthesized events.

use sentinel_common::events::*;
use sentinel_common::{sys32, EventId, ProbeType};

use super::sets::{EventSet, EventSet as S};
use super::EventDescriptor;

fn syscall(id: EventId, id32: i32, name: &'static str, sets: &'static [EventSet]) -> EventDescriptor {
    syscall_via(id, id32, name, name, sets)
}

/// A syscall whose kernel entry point is named differently from the event
fn syscall_via(
    id: EventId,
    id32: i32,
    name: &'static str,
    probe: &'static str,
    sets: &'static [EventSet],
) -> EventDescriptor {
    EventDescriptor::new(id, name)
        .compat(id32)
        .probe(ProbeType::Syscall, probe, probe)
        .sets(sets)
}

/// Every built-in event, in declaration order
#[rustfmt::skip]
#[allow(clippy::too_many_lines)]
pub(crate) fn descriptors() -> Vec<EventDescriptor> {
    vec![
        syscall(READ, sys32::READ, "read", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(WRITE, sys32::WRITE, "write", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(OPEN, sys32::OPEN, "open", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(CLOSE, sys32::CLOSE, "close", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall_via(STAT, sys32::STAT, "stat", "newstat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall_via(FSTAT, sys32::FSTAT, "fstat", "newfstat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall_via(LSTAT, sys32::LSTAT, "lstat", "newlstat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(POLL, sys32::POLL, "poll", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(LSEEK, sys32::LSEEK, "lseek", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(MMAP, sys32::MMAP, "mmap", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MPROTECT, sys32::MPROTECT, "mprotect", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MUNMAP, sys32::MUNMAP, "munmap", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(BRK, sys32::BRK, "brk", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(RT_SIGACTION, sys32::RT_SIGACTION, "rt_sigaction", &[S::Syscalls, S::Signals]),
        syscall(RT_SIGPROCMASK, sys32::RT_SIGPROCMASK, "rt_sigprocmask", &[S::Syscalls, S::Signals]),
        syscall(RT_SIGRETURN, sys32::RT_SIGRETURN, "rt_sigreturn", &[S::Syscalls, S::Signals]),
        syscall(IOCTL, sys32::IOCTL, "ioctl", &[S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(PREAD64, sys32::PREAD64, "pread64", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(PWRITE64, sys32::PWRITE64, "pwrite64", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(READV, sys32::READV, "readv", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(WRITEV, sys32::WRITEV, "writev", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(ACCESS, sys32::ACCESS, "access", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(PIPE, sys32::PIPE, "pipe", &[S::Syscalls, S::Ipc, S::IpcPipe]),
        syscall(SELECT, sys32::SELECT, "select", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(SCHED_YIELD, sys32::SCHED_YIELD, "sched_yield", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(MREMAP, sys32::MREMAP, "mremap", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MSYNC, sys32::MSYNC, "msync", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(MINCORE, sys32::MINCORE, "mincore", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MADVISE, sys32::MADVISE, "madvise", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(SHMGET, sys32::SHMGET, "shmget", &[S::Syscalls, S::Ipc, S::IpcShm]),
        syscall(SHMAT, sys32::SHMAT, "shmat", &[S::Syscalls, S::Ipc, S::IpcShm]),
        syscall(SHMCTL, sys32::SHMCTL, "shmctl", &[S::Syscalls, S::Ipc, S::IpcShm]),
        syscall(DUP, sys32::DUP, "dup", &[S::Default, S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(DUP2, sys32::DUP2, "dup2", &[S::Default, S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(PAUSE, sys32::PAUSE, "pause", &[S::Syscalls, S::Signals]),
        syscall(NANOSLEEP, sys32::NANOSLEEP, "nanosleep", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(GETITIMER, sys32::GETITIMER, "getitimer", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(ALARM, sys32::ALARM, "alarm", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(SETITIMER, sys32::SETITIMER, "setitimer", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(GETPID, sys32::GETPID, "getpid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SENDFILE, sys32::SENDFILE, "sendfile", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(SOCKET, sys32::SOCKET, "socket", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(CONNECT, sys32::CONNECT, "connect", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(ACCEPT, sys32::UNDEFINED, "accept", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(SENDTO, sys32::SENDTO, "sendto", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(RECVFROM, sys32::RECVFROM, "recvfrom", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(SENDMSG, sys32::SENDMSG, "sendmsg", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(RECVMSG, sys32::RECVMSG, "recvmsg", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(SHUTDOWN, sys32::SHUTDOWN, "shutdown", &[S::Syscalls, S::Net, S::NetSock]),
        syscall(BIND, sys32::BIND, "bind", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(LISTEN, sys32::LISTEN, "listen", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(GETSOCKNAME, sys32::GETSOCKNAME, "getsockname", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(GETPEERNAME, sys32::GETPEERNAME, "getpeername", &[S::Syscalls, S::Net, S::NetSock]),
        syscall(SOCKETPAIR, sys32::SOCKETPAIR, "socketpair", &[S::Syscalls, S::Net, S::NetSock]),
        syscall(SETSOCKOPT, sys32::SETSOCKOPT, "setsockopt", &[S::Syscalls, S::Net, S::NetSock]),
        syscall(GETSOCKOPT, sys32::GETSOCKOPT, "getsockopt", &[S::Syscalls, S::Net, S::NetSock]),
        syscall(CLONE, sys32::CLONE, "clone", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(FORK, sys32::FORK, "fork", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(VFORK, sys32::VFORK, "vfork", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(EXECVE, sys32::EXECVE, "execve", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(EXIT, sys32::EXIT, "exit", &[S::Syscalls, S::Proc, S::ProcLife]),
        syscall(WAIT4, sys32::WAIT4, "wait4", &[S::Syscalls, S::Proc, S::ProcLife]),
        syscall(KILL, sys32::KILL, "kill", &[S::Default, S::Syscalls, S::Signals]),
        syscall(UNAME, sys32::UNAME, "uname", &[S::Syscalls, S::System]),
        syscall(SEMGET, sys32::SEMGET, "semget", &[S::Syscalls, S::Ipc, S::IpcSem]),
        syscall(SEMOP, sys32::UNDEFINED, "semop", &[S::Syscalls, S::Ipc, S::IpcSem]),
        syscall(SEMCTL, sys32::SEMCTL, "semctl", &[S::Syscalls, S::Ipc, S::IpcSem]),
        syscall(SHMDT, sys32::SHMDT, "shmdt", &[S::Syscalls, S::Ipc, S::IpcShm]),
        syscall(MSGGET, sys32::MSGGET, "msgget", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MSGSND, sys32::MSGSND, "msgsnd", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MSGRCV, sys32::MSGRCV, "msgrcv", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MSGCTL, sys32::MSGCTL, "msgctl", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(FCNTL, sys32::FCNTL, "fcntl", &[S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(FLOCK, sys32::FLOCK, "flock", &[S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(FSYNC, sys32::FSYNC, "fsync", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(FDATASYNC, sys32::FDATASYNC, "fdatasync", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(TRUNCATE, sys32::TRUNCATE, "truncate", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(FTRUNCATE, sys32::FTRUNCATE, "ftruncate", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(GETDENTS, sys32::GETDENTS, "getdents", &[S::Default, S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(GETCWD, sys32::GETCWD, "getcwd", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(CHDIR, sys32::CHDIR, "chdir", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(FCHDIR, sys32::FCHDIR, "fchdir", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(RENAME, sys32::RENAME, "rename", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(MKDIR, sys32::MKDIR, "mkdir", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(RMDIR, sys32::RMDIR, "rmdir", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(CREAT, sys32::CREAT, "creat", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(LINK, sys32::LINK, "link", &[S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(UNLINK, sys32::UNLINK, "unlink", &[S::Default, S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(SYMLINK, sys32::SYMLINK, "symlink", &[S::Default, S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(READLINK, sys32::READLINK, "readlink", &[S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(CHMOD, sys32::CHMOD, "chmod", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FCHMOD, sys32::FCHMOD, "fchmod", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(CHOWN, sys32::CHOWN, "chown", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FCHOWN, sys32::FCHOWN, "fchown", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LCHOWN, sys32::LCHOWN, "lchown", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(UMASK, sys32::UMASK, "umask", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(GETTIMEOFDAY, sys32::GETTIMEOFDAY, "gettimeofday", &[S::Syscalls, S::Time, S::TimeTod]),
        syscall(GETRLIMIT, sys32::GETRLIMIT, "getrlimit", &[S::Syscalls, S::Proc]),
        syscall(GETRUSAGE, sys32::GETRUSAGE, "getrusage", &[S::Syscalls, S::Proc]),
        syscall(SYSINFO, sys32::SYSINFO, "sysinfo", &[S::Syscalls, S::System]),
        syscall(TIMES, sys32::TIMES, "times", &[S::Syscalls, S::Proc]),
        syscall(PTRACE, sys32::PTRACE, "ptrace", &[S::Default, S::Syscalls, S::Proc]),
        syscall(GETUID, sys32::GETUID, "getuid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SYSLOG, sys32::SYSLOG, "syslog", &[S::Syscalls, S::System]),
        syscall(GETGID, sys32::GETGID, "getgid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETUID, sys32::SETUID, "setuid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETGID, sys32::SETGID, "setgid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETEUID, sys32::GETEUID, "geteuid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETEGID, sys32::GETEGID, "getegid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETPGID, sys32::SETPGID, "setpgid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETPPID, sys32::GETPPID, "getppid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETPGRP, sys32::GETPGRP, "getpgrp", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETSID, sys32::SETSID, "setsid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETREUID, sys32::SETREUID, "setreuid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETREGID, sys32::SETREGID, "setregid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETGROUPS, sys32::GETGROUPS, "getgroups", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETGROUPS, sys32::SETGROUPS, "setgroups", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETRESUID, sys32::SETRESUID, "setresuid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETRESUID, sys32::GETRESUID, "getresuid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETRESGID, sys32::SETRESGID, "setresgid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETRESGID, sys32::GETRESGID, "getresgid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETPGID, sys32::GETPGID, "getpgid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETFSUID, sys32::SETFSUID, "setfsuid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(SETFSGID, sys32::SETFSGID, "setfsgid", &[S::Default, S::Syscalls, S::Proc, S::ProcIds]),
        syscall(GETSID, sys32::GETSID, "getsid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(CAPGET, sys32::CAPGET, "capget", &[S::Syscalls, S::Proc]),
        syscall(CAPSET, sys32::CAPSET, "capset", &[S::Syscalls, S::Proc]),
        syscall(RT_SIGPENDING, sys32::RT_SIGPENDING, "rt_sigpending", &[S::Syscalls, S::Signals]),
        syscall(RT_SIGTIMEDWAIT, sys32::RT_SIGTIMEDWAIT, "rt_sigtimedwait", &[S::Syscalls, S::Signals]),
        syscall(RT_SIGQUEUEINFO, sys32::RT_SIGQUEUEINFO, "rt_sigqueueinfo", &[S::Syscalls, S::Signals]),
        syscall(RT_SIGSUSPEND, sys32::RT_SIGSUSPEND, "rt_sigsuspend", &[S::Syscalls, S::Signals]),
        syscall(SIGALTSTACK, sys32::SIGALTSTACK, "sigaltstack", &[S::Syscalls, S::Signals]),
        syscall(UTIME, sys32::UTIME, "utime", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(MKNOD, sys32::MKNOD, "mknod", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(USELIB, sys32::USELIB, "uselib", &[S::Syscalls, S::Proc]),
        syscall(PERSONALITY, sys32::PERSONALITY, "personality", &[S::Syscalls, S::System]),
        syscall(USTAT, sys32::USTAT, "ustat", &[S::Syscalls, S::Fs, S::FsInfo]),
        syscall(STATFS, sys32::STATFS, "statfs", &[S::Syscalls, S::Fs, S::FsInfo]),
        syscall(FSTATFS, sys32::FSTATFS, "fstatfs", &[S::Syscalls, S::Fs, S::FsInfo]),
        syscall(SYSFS, sys32::SYSFS, "sysfs", &[S::Syscalls, S::Fs, S::FsInfo]),
        syscall(GETPRIORITY, sys32::GETPRIORITY, "getpriority", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SETPRIORITY, sys32::SETPRIORITY, "setpriority", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_SETPARAM, sys32::SCHED_SETPARAM, "sched_setparam", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GETPARAM, sys32::SCHED_GETPARAM, "sched_getparam", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_SETSCHEDULER, sys32::SCHED_SETSCHEDULER, "sched_setscheduler", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GETSCHEDULER, sys32::SCHED_GETSCHEDULER, "sched_getscheduler", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GET_PRIORITY_MAX, sys32::SCHED_GET_PRIORITY_MAX, "sched_get_priority_max", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GET_PRIORITY_MIN, sys32::SCHED_GET_PRIORITY_MIN, "sched_get_priority_min", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_RR_GET_INTERVAL, sys32::SCHED_RR_GET_INTERVAL, "sched_rr_get_interval", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(MLOCK, sys32::MLOCK, "mlock", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MUNLOCK, sys32::MUNLOCK, "munlock", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MLOCKALL, sys32::MLOCKALL, "mlockall", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MUNLOCKALL, sys32::MUNLOCKALL, "munlockall", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(VHANGUP, sys32::VHANGUP, "vhangup", &[S::Syscalls, S::System]),
        syscall(MODIFY_LDT, sys32::MODIFY_LDT, "modify_ldt", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(PIVOT_ROOT, sys32::PIVOT_ROOT, "pivot_root", &[S::Syscalls, S::Fs]),
        syscall(SYSCTL, sys32::UNDEFINED, "sysctl", &[S::Syscalls, S::System]),
        syscall(PRCTL, sys32::PRCTL, "prctl", &[S::Default, S::Syscalls, S::Proc]),
        syscall(ARCH_PRCTL, sys32::ARCH_PRCTL, "arch_prctl", &[S::Syscalls, S::Proc]),
        syscall(ADJTIMEX, sys32::ADJTIMEX, "adjtimex", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(SETRLIMIT, sys32::SETRLIMIT, "setrlimit", &[S::Syscalls, S::Proc]),
        syscall(CHROOT, sys32::CHROOT, "chroot", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(SYNC, sys32::SYNC, "sync", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(ACCT, sys32::ACCT, "acct", &[S::Syscalls, S::System]),
        syscall(SETTIMEOFDAY, sys32::SETTIMEOFDAY, "settimeofday", &[S::Syscalls, S::Time, S::TimeTod]),
        syscall(MOUNT, sys32::MOUNT, "mount", &[S::Default, S::Syscalls, S::Fs]),
        syscall(UMOUNT, sys32::UMOUNT, "umount", &[S::Default, S::Syscalls, S::Fs]),
        syscall(SWAPON, sys32::SWAPON, "swapon", &[S::Syscalls, S::Fs]),
        syscall(SWAPOFF, sys32::SWAPOFF, "swapoff", &[S::Syscalls, S::Fs]),
        syscall(REBOOT, sys32::REBOOT, "reboot", &[S::Syscalls, S::System]),
        syscall(SETHOSTNAME, sys32::SETHOSTNAME, "sethostname", &[S::Syscalls, S::Net]),
        syscall(SETDOMAINNAME, sys32::SETDOMAINNAME, "setdomainname", &[S::Syscalls, S::Net]),
        syscall(IOPL, sys32::IOPL, "iopl", &[S::Syscalls, S::System]),
        syscall(IOPERM, sys32::IOPERM, "ioperm", &[S::Syscalls, S::System]),
        syscall(CREATE_MODULE, sys32::CREATE_MODULE, "create_module", &[S::Syscalls, S::System, S::SystemModule]),
        syscall(INIT_MODULE, sys32::INIT_MODULE, "init_module", &[S::Default, S::Syscalls, S::System, S::SystemModule]),
        syscall(DELETE_MODULE, sys32::DELETE_MODULE, "delete_module", &[S::Default, S::Syscalls, S::System, S::SystemModule]),
        syscall(GET_KERNEL_SYMS, sys32::GET_KERNEL_SYMS, "get_kernel_syms", &[S::Syscalls, S::System, S::SystemModule]),
        syscall(QUERY_MODULE, sys32::QUERY_MODULE, "query_module", &[S::Syscalls, S::System, S::SystemModule]),
        syscall(QUOTACTL, sys32::QUOTACTL, "quotactl", &[S::Syscalls, S::System]),
        syscall(NFSSERVCTL, sys32::NFSSERVCTL, "nfsservctl", &[S::Syscalls, S::Fs]),
        syscall(GETPMSG, sys32::GETPMSG, "getpmsg", &[S::Syscalls]),
        syscall(PUTPMSG, sys32::PUTPMSG, "putpmsg", &[S::Syscalls]),
        syscall(AFS, sys32::UNDEFINED, "afs", &[S::Syscalls]),
        syscall(TUXCALL, sys32::UNDEFINED, "tuxcall", &[S::Syscalls]),
        syscall(SECURITY, sys32::UNDEFINED, "security", &[S::Syscalls]),
        syscall(GETTID, sys32::GETTID, "gettid", &[S::Syscalls, S::Proc, S::ProcIds]),
        syscall(READAHEAD, sys32::READAHEAD, "readahead", &[S::Syscalls, S::Fs]),
        syscall(SETXATTR, sys32::SETXATTR, "setxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LSETXATTR, sys32::LSETXATTR, "lsetxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FSETXATTR, sys32::FSETXATTR, "fsetxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(GETXATTR, sys32::GETXATTR, "getxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LGETXATTR, sys32::LGETXATTR, "lgetxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FGETXATTR, sys32::FGETXATTR, "fgetxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LISTXATTR, sys32::LISTXATTR, "listxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LLISTXATTR, sys32::LLISTXATTR, "llistxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FLISTXATTR, sys32::FLISTXATTR, "flistxattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(REMOVEXATTR, sys32::REMOVEXATTR, "removexattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(LREMOVEXATTR, sys32::LREMOVEXATTR, "lremovexattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FREMOVEXATTR, sys32::FREMOVEXATTR, "fremovexattr", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(TKILL, sys32::TKILL, "tkill", &[S::Syscalls, S::Signals]),
        syscall(TIME, sys32::TIME, "time", &[S::Syscalls, S::Time, S::TimeTod]),
        syscall(FUTEX, sys32::FUTEX, "futex", &[S::Syscalls, S::Ipc, S::IpcFutex]),
        syscall(SCHED_SETAFFINITY, sys32::SCHED_SETAFFINITY, "sched_setaffinity", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GETAFFINITY, sys32::SCHED_GETAFFINITY, "sched_getaffinity", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SET_THREAD_AREA, sys32::SET_THREAD_AREA, "set_thread_area", &[S::Syscalls, S::Proc]),
        syscall(IO_SETUP, sys32::IO_SETUP, "io_setup", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(IO_DESTROY, sys32::IO_DESTROY, "io_destroy", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(IO_GETEVENTS, sys32::IO_GETEVENTS, "io_getevents", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(IO_SUBMIT, sys32::IO_SUBMIT, "io_submit", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(IO_CANCEL, sys32::IO_CANCEL, "io_cancel", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(GET_THREAD_AREA, sys32::GET_THREAD_AREA, "get_thread_area", &[S::Syscalls, S::Proc]),
        syscall(LOOKUP_DCOOKIE, sys32::LOOKUP_DCOOKIE, "lookup_dcookie", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(EPOLL_CREATE, sys32::EPOLL_CREATE, "epoll_create", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(EPOLL_CTL_OLD, sys32::UNDEFINED, "epoll_ctl_old", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(EPOLL_WAIT_OLD, sys32::UNDEFINED, "epoll_wait_old", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(REMAP_FILE_PAGES, sys32::REMAP_FILE_PAGES, "remap_file_pages", &[S::Syscalls]),
        syscall(GETDENTS64, sys32::GETDENTS64, "getdents64", &[S::Default, S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(SET_TID_ADDRESS, sys32::SET_TID_ADDRESS, "set_tid_address", &[S::Syscalls, S::Proc]),
        syscall(RESTART_SYSCALL, sys32::RESTART_SYSCALL, "restart_syscall", &[S::Syscalls, S::Signals]),
        syscall(SEMTIMEDOP, sys32::SEMTIMEDOP_TIME64, "semtimedop", &[S::Syscalls, S::Ipc, S::IpcSem]),
        syscall(FADVISE64, sys32::FADVISE64, "fadvise64", &[S::Syscalls, S::Fs]),
        syscall(TIMER_CREATE, sys32::TIMER_CREATE, "timer_create", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(TIMER_SETTIME, sys32::TIMER_SETTIME, "timer_settime", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(TIMER_GETTIME, sys32::TIMER_GETTIME, "timer_gettime", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(TIMER_GETOVERRUN, sys32::TIMER_GETOVERRUN, "timer_getoverrun", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(TIMER_DELETE, sys32::TIMER_DELETE, "timer_delete", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(CLOCK_SETTIME, sys32::CLOCK_SETTIME, "clock_settime", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(CLOCK_GETTIME, sys32::CLOCK_GETTIME, "clock_gettime", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(CLOCK_GETRES, sys32::CLOCK_GETRES, "clock_getres", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(CLOCK_NANOSLEEP, sys32::CLOCK_NANOSLEEP, "clock_nanosleep", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(EXIT_GROUP, sys32::EXIT_GROUP, "exit_group", &[S::Syscalls, S::Proc, S::ProcLife]),
        syscall(EPOLL_WAIT, sys32::EPOLL_WAIT, "epoll_wait", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(EPOLL_CTL, sys32::EPOLL_CTL, "epoll_ctl", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(TGKILL, sys32::TGKILL, "tgkill", &[S::Syscalls, S::Signals]),
        syscall(UTIMES, sys32::UTIMES, "utimes", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(VSERVER, sys32::VSERVER, "vserver", &[S::Syscalls]),
        syscall(MBIND, sys32::MBIND, "mbind", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(SET_MEMPOLICY, sys32::SET_MEMPOLICY, "set_mempolicy", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(GET_MEMPOLICY, sys32::GET_MEMPOLICY, "get_mempolicy", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(MQ_OPEN, sys32::MQ_OPEN, "mq_open", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MQ_UNLINK, sys32::MQ_UNLINK, "mq_unlink", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MQ_TIMEDSEND, sys32::MQ_TIMEDSEND, "mq_timedsend", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MQ_TIMEDRECEIVE, sys32::MQ_TIMEDRECEIVE, "mq_timedreceive", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MQ_NOTIFY, sys32::MQ_NOTIFY, "mq_notify", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(MQ_GETSETATTR, sys32::MQ_GETSETATTR, "mq_getsetattr", &[S::Syscalls, S::Ipc, S::IpcMsgq]),
        syscall(KEXEC_LOAD, sys32::KEXEC_LOAD, "kexec_load", &[S::Syscalls, S::System]),
        syscall(WAITID, sys32::WAITID, "waitid", &[S::Syscalls, S::Proc, S::ProcLife]),
        syscall(ADD_KEY, sys32::ADD_KEY, "add_key", &[S::Syscalls, S::System, S::SystemKeys]),
        syscall(REQUEST_KEY, sys32::REQUEST_KEY, "request_key", &[S::Syscalls, S::System, S::SystemKeys]),
        syscall(KEYCTL, sys32::KEYCTL, "keyctl", &[S::Syscalls, S::System, S::SystemKeys]),
        syscall(IOPRIO_SET, sys32::IOPRIO_SET, "ioprio_set", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(IOPRIO_GET, sys32::IOPRIO_GET, "ioprio_get", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(INOTIFY_INIT, sys32::INOTIFY_INIT, "inotify_init", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(INOTIFY_ADD_WATCH, sys32::INOTIFY_ADD_WATCH, "inotify_add_watch", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(INOTIFY_RM_WATCH, sys32::INOTIFY_RM_WATCH, "inotify_rm_watch", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(MIGRATE_PAGES, sys32::MIGRATE_PAGES, "migrate_pages", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(OPENAT, sys32::OPENAT, "openat", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(MKDIRAT, sys32::MKDIRAT, "mkdirat", &[S::Syscalls, S::Fs, S::FsDirOps]),
        syscall(MKNODAT, sys32::MKNODAT, "mknodat", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(FCHOWNAT, sys32::FCHOWNAT, "fchownat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FUTIMESAT, sys32::FUTIMESAT, "futimesat", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(NEWFSTATAT, sys32::FSTATAT64, "newfstatat", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(UNLINKAT, sys32::UNLINKAT, "unlinkat", &[S::Default, S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(RENAMEAT, sys32::RENAMEAT, "renameat", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(LINKAT, sys32::LINKAT, "linkat", &[S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(SYMLINKAT, sys32::SYMLINKAT, "symlinkat", &[S::Default, S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(READLINKAT, sys32::READLINKAT, "readlinkat", &[S::Syscalls, S::Fs, S::FsLinkOps]),
        syscall(FCHMODAT, sys32::FCHMODAT, "fchmodat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(FACCESSAT, sys32::FACCESSAT, "faccessat", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(PSELECT6, sys32::PSELECT6, "pselect6", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(PPOLL, sys32::PPOLL, "ppoll", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(UNSHARE, sys32::UNSHARE, "unshare", &[S::Syscalls, S::Proc]),
        syscall(SET_ROBUST_LIST, sys32::SET_ROBUST_LIST, "set_robust_list", &[S::Syscalls, S::Ipc, S::IpcFutex]),
        syscall(GET_ROBUST_LIST, sys32::GET_ROBUST_LIST, "get_robust_list", &[S::Syscalls, S::Ipc, S::IpcFutex]),
        syscall(SPLICE, sys32::SPLICE, "splice", &[S::Syscalls, S::Ipc, S::IpcPipe]),
        syscall(TEE, sys32::TEE, "tee", &[S::Syscalls, S::Ipc, S::IpcPipe]),
        syscall(SYNC_FILE_RANGE, sys32::SYNC_FILE_RANGE, "sync_file_range", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(VMSPLICE, sys32::VMSPLICE, "vmsplice", &[S::Syscalls, S::Ipc, S::IpcPipe]),
        syscall(MOVE_PAGES, sys32::MOVE_PAGES, "move_pages", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(UTIMENSAT, sys32::UTIMENSAT, "utimensat", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(EPOLL_PWAIT, sys32::EPOLL_PWAIT, "epoll_pwait", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(SIGNALFD, sys32::SIGNALFD, "signalfd", &[S::Syscalls, S::Signals]),
        syscall(TIMERFD_CREATE, sys32::TIMERFD_CREATE, "timerfd_create", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(EVENTFD, sys32::EVENTFD, "eventfd", &[S::Syscalls, S::Signals]),
        syscall(FALLOCATE, sys32::FALLOCATE, "fallocate", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(TIMERFD_SETTIME, sys32::TIMERFD_SETTIME, "timerfd_settime", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(TIMERFD_GETTIME, sys32::TIMERFD_GETTIME, "timerfd_gettime", &[S::Syscalls, S::Time, S::TimeTimer]),
        syscall(ACCEPT4, sys32::ACCEPT4, "accept4", &[S::Default, S::Syscalls, S::Net, S::NetSock]),
        syscall(SIGNALFD4, sys32::SIGNALFD4, "signalfd4", &[S::Syscalls, S::Signals]),
        syscall(EVENTFD2, sys32::EVENTFD2, "eventfd2", &[S::Syscalls, S::Signals]),
        syscall(EPOLL_CREATE1, sys32::EPOLL_CREATE1, "epoll_create1", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        syscall(DUP3, sys32::DUP3, "dup3", &[S::Default, S::Syscalls, S::Fs, S::FsFdOps]),
        syscall(PIPE2, sys32::PIPE2, "pipe2", &[S::Syscalls, S::Ipc, S::IpcPipe]),
        syscall(INOTIFY_INIT1, sys32::INOTIFY_INIT1, "inotify_init1", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(PREADV, sys32::PREADV, "preadv", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(PWRITEV, sys32::PWRITEV, "pwritev", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(RT_TGSIGQUEUEINFO, sys32::RT_TGSIGQUEUEINFO, "rt_tgsigqueueinfo", &[S::Syscalls, S::Signals]),
        syscall(PERF_EVENT_OPEN, sys32::PERF_EVENT_OPEN, "perf_event_open", &[S::Syscalls, S::System]),
        syscall(RECVMMSG, sys32::RECVMMSG, "recvmmsg", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(FANOTIFY_INIT, sys32::FANOTIFY_INIT, "fanotify_init", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(FANOTIFY_MARK, sys32::FANOTIFY_MARK, "fanotify_mark", &[S::Syscalls, S::Fs, S::FsMonitor]),
        syscall(PRLIMIT64, sys32::PRLIMIT64, "prlimit64", &[S::Syscalls, S::Proc]),
        syscall(NAME_TO_HANDLE_AT, sys32::NAME_TO_HANDLE_AT, "name_to_handle_at", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(OPEN_BY_HANDLE_AT, sys32::OPEN_BY_HANDLE_AT, "open_by_handle_at", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(CLOCK_ADJTIME, sys32::CLOCK_ADJTIME, "clock_adjtime", &[S::Syscalls, S::Time, S::TimeClock]),
        syscall(SYNCFS, sys32::SYNCFS, "syncfs", &[S::Syscalls, S::Fs, S::FsSync]),
        syscall(SENDMMSG, sys32::SENDMMSG, "sendmmsg", &[S::Syscalls, S::Net, S::NetSndRcv]),
        syscall(SETNS, sys32::SETNS, "setns", &[S::Syscalls, S::Proc]),
        syscall(GETCPU, sys32::GETCPU, "getcpu", &[S::Syscalls, S::System, S::SystemNuma]),
        syscall(PROCESS_VM_READV, sys32::PROCESS_VM_READV, "process_vm_readv", &[S::Default, S::Syscalls, S::Proc]),
        syscall(PROCESS_VM_WRITEV, sys32::PROCESS_VM_WRITEV, "process_vm_writev", &[S::Default, S::Syscalls, S::Proc]),
        syscall(KCMP, sys32::KCMP, "kcmp", &[S::Syscalls, S::Proc]),
        syscall(FINIT_MODULE, sys32::FINIT_MODULE, "finit_module", &[S::Default, S::Syscalls, S::System, S::SystemModule]),
        syscall(SCHED_SETATTR, sys32::SCHED_SETATTR, "sched_setattr", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(SCHED_GETATTR, sys32::SCHED_GETATTR, "sched_getattr", &[S::Syscalls, S::Proc, S::ProcSched]),
        syscall(RENAMEAT2, sys32::RENAMEAT2, "renameat2", &[S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(SECCOMP, sys32::SECCOMP, "seccomp", &[S::Syscalls, S::Proc]),
        syscall(GETRANDOM, sys32::GETRANDOM, "getrandom", &[S::Syscalls, S::Fs]),
        syscall(MEMFD_CREATE, sys32::MEMFD_CREATE, "memfd_create", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(KEXEC_FILE_LOAD, sys32::UNDEFINED, "kexec_file_load", &[S::Syscalls, S::System]),
        syscall(BPF, sys32::BPF, "bpf", &[S::Default, S::Syscalls, S::System]),
        syscall(EXECVEAT, sys32::EXECVEAT, "execveat", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(USERFAULTFD, sys32::USERFAULTFD, "userfaultfd", &[S::Syscalls, S::System]),
        syscall(MEMBARRIER, sys32::MEMBARRIER, "membarrier", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(MLOCK2, sys32::MLOCK2, "mlock2", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(COPY_FILE_RANGE, sys32::COPY_FILE_RANGE, "copy_file_range", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(PREADV2, sys32::PREADV2, "preadv2", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(PWRITEV2, sys32::PWRITEV2, "pwritev2", &[S::Syscalls, S::Fs, S::FsReadWrite]),
        syscall(PKEY_MPROTECT, sys32::PKEY_MPROTECT, "pkey_mprotect", &[S::Default, S::Syscalls, S::Proc, S::ProcMem]),
        syscall(PKEY_ALLOC, sys32::PKEY_ALLOC, "pkey_alloc", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(PKEY_FREE, sys32::PKEY_FREE, "pkey_free", &[S::Syscalls, S::Proc, S::ProcMem]),
        syscall(STATX, sys32::STATX, "statx", &[S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(IO_PGETEVENTS, sys32::IO_PGETEVENTS, "io_pgetevents", &[S::Syscalls, S::Fs, S::FsAsyncIo]),
        syscall(RSEQ, sys32::RSEQ, "rseq", &[S::Syscalls]),
        syscall(PIDFD_SEND_SIGNAL, sys32::PIDFD_SEND_SIGNAL, "pidfd_send_signal", &[S::Syscalls, S::Signals]),
        syscall(IO_URING_SETUP, sys32::IO_URING_SETUP, "io_uring_setup", &[S::Syscalls]),
        syscall(IO_URING_ENTER, sys32::IO_URING_ENTER, "io_uring_enter", &[S::Syscalls]),
        syscall(IO_URING_REGISTER, sys32::IO_URING_REGISTER, "io_uring_register", &[S::Syscalls]),
        syscall(OPEN_TREE, sys32::OPEN_TREE, "open_tree", &[S::Syscalls]),
        syscall(MOVE_MOUNT, sys32::MOVE_MOUNT, "move_mount", &[S::Default, S::Syscalls, S::Fs]),
        syscall(FSOPEN, sys32::FSOPEN, "fsopen", &[S::Syscalls, S::Fs]),
        syscall(FSCONFIG, sys32::FSCONFIG, "fsconfig", &[S::Syscalls, S::Fs]),
        syscall(FSMOUNT, sys32::FSMOUNT, "fsmount", &[S::Syscalls, S::Fs]),
        syscall(FSPICK, sys32::FSPICK, "fspick", &[S::Syscalls, S::Fs]),
        syscall(PIDFD_OPEN, sys32::PIDFD_OPEN, "pidfd_open", &[S::Syscalls]),
        syscall(CLONE3, sys32::CLONE3, "clone3", &[S::Default, S::Syscalls, S::Proc, S::ProcLife]),
        syscall(CLOSE_RANGE, sys32::CLOSE_RANGE, "close_range", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(OPENAT2, sys32::OPENAT2, "openat2", &[S::Default, S::Syscalls, S::Fs, S::FsFileOps]),
        syscall(PIDFD_GETFD, sys32::PIDFD_GETFD, "pidfd_getfd", &[S::Syscalls]),
        syscall(FACCESSAT2, sys32::FACCESSAT2, "faccessat2", &[S::Default, S::Syscalls, S::Fs, S::FsFileAttr]),
        syscall(PROCESS_MADVISE, sys32::PROCESS_MADVISE, "process_madvise", &[S::Syscalls]),
        syscall(EPOLL_PWAIT2, sys32::EPOLL_PWAIT2, "epoll_pwait2", &[S::Syscalls, S::Fs, S::FsMuxIo]),
        // Kernel events
        EventDescriptor::new(SYS_ENTER, "sys_enter")
            .probe(ProbeType::RawTracepoint, "raw_syscalls:sys_enter", "tracepoint__raw_syscalls__sys_enter")
            .essential(),
        EventDescriptor::new(SYS_EXIT, "sys_exit")
            .probe(ProbeType::RawTracepoint, "raw_syscalls:sys_exit", "tracepoint__raw_syscalls__sys_exit")
            .essential(),
        EventDescriptor::new(SCHED_PROCESS_FORK, "sched_process_fork")
            .probe(ProbeType::RawTracepoint, "sched:sched_process_fork", "tracepoint__sched__sched_process_fork")
            .essential(),
        EventDescriptor::new(SCHED_PROCESS_EXEC, "sched_process_exec")
            .probe(ProbeType::RawTracepoint, "sched:sched_process_exec", "tracepoint__sched__sched_process_exec")
            .essential()
            .sets(&[S::Default, S::Proc]),
        EventDescriptor::new(SCHED_PROCESS_EXIT, "sched_process_exit")
            .probe(ProbeType::RawTracepoint, "sched:sched_process_exit", "tracepoint__sched__sched_process_exit")
            .essential()
            .sets(&[S::Default, S::Proc, S::ProcLife]),
        EventDescriptor::new(SCHED_SWITCH, "sched_switch")
            .probe(ProbeType::RawTracepoint, "sched:sched_switch", "tracepoint__sched__sched_switch"),
        EventDescriptor::new(DO_EXIT, "do_exit")
            .probe(ProbeType::Kprobe, "do_exit", "trace_do_exit")
            .sets(&[S::Proc, S::ProcLife]),
        EventDescriptor::new(CAP_CAPABLE, "cap_capable")
            .probe(ProbeType::Kprobe, "cap_capable", "trace_cap_capable")
            .sets(&[S::Default]),
        EventDescriptor::new(VFS_WRITE, "vfs_write")
            .probe(ProbeType::Kprobe, "vfs_write", "trace_vfs_write")
            .probe(ProbeType::Kretprobe, "vfs_write", "trace_ret_vfs_write"),
        EventDescriptor::new(VFS_WRITEV, "vfs_writev")
            .probe(ProbeType::Kprobe, "vfs_writev", "trace_vfs_writev")
            .probe(ProbeType::Kretprobe, "vfs_writev", "trace_ret_vfs_writev"),
        EventDescriptor::new(MEM_PROT_ALERT, "mem_prot_alert")
            .probe(ProbeType::Kprobe, "security_mmap_addr", "trace_mmap_alert")
            .probe(ProbeType::Kprobe, "security_file_mprotect", "trace_mprotect_alert"),
        EventDescriptor::new(COMMIT_CREDS, "commit_creds")
            .probe(ProbeType::Kprobe, "commit_creds", "trace_commit_creds"),
        EventDescriptor::new(SWITCH_TASK_NS, "switch_task_ns")
            .probe(ProbeType::Kprobe, "switch_task_namespaces", "trace_switch_task_namespaces"),
        EventDescriptor::new(MAGIC_WRITE, "magic_write"),
        EventDescriptor::new(CGROUP_ATTACH_TASK, "cgroup_attach_task")
            .probe(ProbeType::RawTracepoint, "cgroup:cgroup_attach_task", "tracepoint__cgroup__cgroup_attach_task"),
        EventDescriptor::new(CGROUP_MKDIR, "cgroup_mkdir")
            .probe(ProbeType::RawTracepoint, "cgroup:cgroup_mkdir", "tracepoint__cgroup__cgroup_mkdir")
            .essential(),
        EventDescriptor::new(CGROUP_RMDIR, "cgroup_rmdir")
            .probe(ProbeType::RawTracepoint, "cgroup:cgroup_rmdir", "tracepoint__cgroup__cgroup_rmdir")
            .essential(),
        EventDescriptor::new(SECURITY_BPRM_CHECK, "security_bprm_check")
            .probe(ProbeType::Kprobe, "security_bprm_check", "trace_security_bprm_check")
            .sets(&[S::Default, S::LsmHooks, S::Proc, S::ProcLife]),
        EventDescriptor::new(SECURITY_FILE_OPEN, "security_file_open")
            .probe(ProbeType::Kprobe, "security_file_open", "trace_security_file_open")
            .sets(&[S::Default, S::LsmHooks, S::Fs, S::FsFileOps]),
        EventDescriptor::new(SECURITY_INODE_UNLINK, "security_inode_unlink")
            .probe(ProbeType::Kprobe, "security_inode_unlink", "trace_security_inode_unlink")
            .sets(&[S::Default, S::LsmHooks, S::Fs, S::FsFileOps]),
        EventDescriptor::new(SECURITY_SOCKET_CREATE, "security_socket_create")
            .probe(ProbeType::Kprobe, "security_socket_create", "trace_security_socket_create")
            .sets(&[S::Default, S::LsmHooks, S::Net, S::NetSock]),
        EventDescriptor::new(SECURITY_SOCKET_LISTEN, "security_socket_listen")
            .probe(ProbeType::Kprobe, "security_socket_listen", "trace_security_socket_listen")
            .sets(&[S::Default, S::LsmHooks, S::Net, S::NetSock]),
        EventDescriptor::new(SECURITY_SOCKET_CONNECT, "security_socket_connect")
            .probe(ProbeType::Kprobe, "security_socket_connect", "trace_security_socket_connect")
            .sets(&[S::Default, S::LsmHooks, S::Net, S::NetSock]),
        EventDescriptor::new(SECURITY_SOCKET_ACCEPT, "security_socket_accept")
            .probe(ProbeType::Kprobe, "security_socket_accept", "trace_security_socket_accept")
            .sets(&[S::Default, S::LsmHooks, S::Net, S::NetSock]),
        EventDescriptor::new(SECURITY_SOCKET_BIND, "security_socket_bind")
            .probe(ProbeType::Kprobe, "security_socket_bind", "trace_security_socket_bind")
            .sets(&[S::Default, S::LsmHooks, S::Net, S::NetSock]),
        EventDescriptor::new(SECURITY_SB_MOUNT, "security_sb_mount")
            .probe(ProbeType::Kprobe, "security_sb_mount", "trace_security_sb_mount")
            .sets(&[S::Default, S::LsmHooks, S::Fs]),
        EventDescriptor::new(SECURITY_BPF, "security_bpf")
            .probe(ProbeType::Kprobe, "security_bpf", "trace_security_bpf")
            .sets(&[S::LsmHooks]),
        EventDescriptor::new(SECURITY_BPF_MAP, "security_bpf_map")
            .probe(ProbeType::Kprobe, "security_bpf_map", "trace_security_bpf_map")
            .sets(&[S::LsmHooks]),
        EventDescriptor::new(SECURITY_KERNEL_READ_FILE, "security_kernel_read_file")
            .probe(ProbeType::Kprobe, "security_kernel_read_file", "trace_security_kernel_read_file")
            .sets(&[S::LsmHooks]),
        EventDescriptor::new(SECURITY_INODE_MKNOD, "security_inode_mknod")
            .probe(ProbeType::Kprobe, "security_inode_mknod", "trace_security_inode_mknod")
            .sets(&[S::LsmHooks]),
        EventDescriptor::new(SECURITY_KERNEL_POST_READ_FILE, "security_kernel_post_read_file")
            .probe(ProbeType::Kprobe, "security_kernel_post_read_file", "trace_security_kernel_post_read_file")
            .sets(&[S::LsmHooks]),
        EventDescriptor::new(SOCKET_DUP, "socket_dup"),
        EventDescriptor::new(INIT_NAMESPACES, "init_namespaces"),
    ]
}
