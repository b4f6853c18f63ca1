//! Argument schema table
//!
//! One row per registered event, including events whose payload carries no
//! arguments. Argument order is the order the producer writes them.

use sentinel_common::events::*;
use sentinel_common::EventId;

use super::ArgMeta;

const fn arg(name: &'static str, c_type: &'static str) -> ArgMeta {
    ArgMeta::new(name, c_type)
}

#[rustfmt::skip]
#[allow(clippy::too_many_lines)]
pub(crate) fn schemas() -> Vec<(EventId, Vec<ArgMeta>)> {
    vec![
        (READ, vec![arg("fd", "int"), arg("buf", "void*"), arg("count", "size_t")]),
        (WRITE, vec![arg("fd", "int"), arg("buf", "void*"), arg("count", "size_t")]),
        (OPEN, vec![arg("pathname", "const char*"), arg("flags", "int"), arg("mode", "mode_t")]),
        (CLOSE, vec![arg("fd", "int")]),
        (STAT, vec![arg("pathname", "const char*"), arg("statbuf", "struct stat*")]),
        (FSTAT, vec![arg("fd", "int"), arg("statbuf", "struct stat*")]),
        (LSTAT, vec![arg("pathname", "const char*"), arg("statbuf", "struct stat*")]),
        (POLL, vec![arg("fds", "struct pollfd*"), arg("nfds", "unsigned int"), arg("timeout", "int")]),
        (LSEEK, vec![arg("fd", "int"), arg("offset", "off_t"), arg("whence", "unsigned int")]),
        (MMAP, vec![arg("addr", "void*"), arg("length", "size_t"), arg("prot", "int"), arg("flags", "int"), arg("fd", "int"), arg("off", "off_t")]),
        (MPROTECT, vec![arg("addr", "void*"), arg("len", "size_t"), arg("prot", "int")]),
        (MUNMAP, vec![arg("addr", "void*"), arg("length", "size_t")]),
        (BRK, vec![arg("addr", "void*")]),
        (RT_SIGACTION, vec![arg("signum", "int"), arg("act", "const struct sigaction*"), arg("oldact", "struct sigaction*"), arg("sigsetsize", "size_t")]),
        (RT_SIGPROCMASK, vec![arg("how", "int"), arg("set", "sigset_t*"), arg("oldset", "sigset_t*"), arg("sigsetsize", "size_t")]),
        (RT_SIGRETURN, vec![]),
        (IOCTL, vec![arg("fd", "int"), arg("request", "unsigned long"), arg("arg", "unsigned long")]),
        (PREAD64, vec![arg("fd", "int"), arg("buf", "void*"), arg("count", "size_t"), arg("offset", "off_t")]),
        (PWRITE64, vec![arg("fd", "int"), arg("buf", "const void*"), arg("count", "size_t"), arg("offset", "off_t")]),
        (READV, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "int")]),
        (WRITEV, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "int")]),
        (ACCESS, vec![arg("pathname", "const char*"), arg("mode", "int")]),
        (PIPE, vec![arg("pipefd", "int[2]")]),
        (SELECT, vec![arg("nfds", "int"), arg("readfds", "fd_set*"), arg("writefds", "fd_set*"), arg("exceptfds", "fd_set*"), arg("timeout", "struct timeval*")]),
        (SCHED_YIELD, vec![]),
        (MREMAP, vec![arg("old_address", "void*"), arg("old_size", "size_t"), arg("new_size", "size_t"), arg("flags", "int"), arg("new_address", "void*")]),
        (MSYNC, vec![arg("addr", "void*"), arg("length", "size_t"), arg("flags", "int")]),
        (MINCORE, vec![arg("addr", "void*"), arg("length", "size_t"), arg("vec", "unsigned char*")]),
        (MADVISE, vec![arg("addr", "void*"), arg("length", "size_t"), arg("advice", "int")]),
        (SHMGET, vec![arg("key", "key_t"), arg("size", "size_t"), arg("shmflg", "int")]),
        (SHMAT, vec![arg("shmid", "int"), arg("shmaddr", "const void*"), arg("shmflg", "int")]),
        (SHMCTL, vec![arg("shmid", "int"), arg("cmd", "int"), arg("buf", "struct shmid_ds*")]),
        (DUP, vec![arg("oldfd", "int")]),
        (DUP2, vec![arg("oldfd", "int"), arg("newfd", "int")]),
        (PAUSE, vec![]),
        (NANOSLEEP, vec![arg("req", "const struct timespec*"), arg("rem", "struct timespec*")]),
        (GETITIMER, vec![arg("which", "int"), arg("curr_value", "struct itimerval*")]),
        (ALARM, vec![arg("seconds", "unsigned int")]),
        (SETITIMER, vec![arg("which", "int"), arg("new_value", "struct itimerval*"), arg("old_value", "struct itimerval*")]),
        (GETPID, vec![]),
        (SENDFILE, vec![arg("out_fd", "int"), arg("in_fd", "int"), arg("offset", "off_t*"), arg("count", "size_t")]),
        (SOCKET, vec![arg("domain", "int"), arg("type", "int"), arg("protocol", "int")]),
        (CONNECT, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int")]),
        (ACCEPT, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int*")]),
        (SENDTO, vec![arg("sockfd", "int"), arg("buf", "void*"), arg("len", "size_t"), arg("flags", "int"), arg("dest_addr", "struct sockaddr*"), arg("addrlen", "int")]),
        (RECVFROM, vec![arg("sockfd", "int"), arg("buf", "void*"), arg("len", "size_t"), arg("flags", "int"), arg("src_addr", "struct sockaddr*"), arg("addrlen", "int*")]),
        (SENDMSG, vec![arg("sockfd", "int"), arg("msg", "struct msghdr*"), arg("flags", "int")]),
        (RECVMSG, vec![arg("sockfd", "int"), arg("msg", "struct msghdr*"), arg("flags", "int")]),
        (SHUTDOWN, vec![arg("sockfd", "int"), arg("how", "int")]),
        (BIND, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int")]),
        (LISTEN, vec![arg("sockfd", "int"), arg("backlog", "int")]),
        (GETSOCKNAME, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int*")]),
        (GETPEERNAME, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int*")]),
        (SOCKETPAIR, vec![arg("domain", "int"), arg("type", "int"), arg("protocol", "int"), arg("sv", "int[2]")]),
        (SETSOCKOPT, vec![arg("sockfd", "int"), arg("level", "int"), arg("optname", "int"), arg("optval", "const void*"), arg("optlen", "int")]),
        (GETSOCKOPT, vec![arg("sockfd", "int"), arg("level", "int"), arg("optname", "int"), arg("optval", "void*"), arg("optlen", "int*")]),
        (CLONE, vec![arg("flags", "unsigned long"), arg("stack", "void*"), arg("parent_tid", "int*"), arg("child_tid", "int*"), arg("tls", "unsigned long")]),
        (FORK, vec![]),
        (VFORK, vec![]),
        (EXECVE, vec![arg("pathname", "const char*"), arg("argv", "const char*const*"), arg("envp", "const char*const*")]),
        (EXIT, vec![arg("status", "int")]),
        (WAIT4, vec![arg("pid", "pid_t"), arg("wstatus", "int*"), arg("options", "int"), arg("rusage", "struct rusage*")]),
        (KILL, vec![arg("pid", "pid_t"), arg("sig", "int")]),
        (UNAME, vec![arg("buf", "struct utsname*")]),
        (SEMGET, vec![arg("key", "key_t"), arg("nsems", "int"), arg("semflg", "int")]),
        (SEMOP, vec![arg("semid", "int"), arg("sops", "struct sembuf*"), arg("nsops", "size_t")]),
        (SEMCTL, vec![arg("semid", "int"), arg("semnum", "int"), arg("cmd", "int"), arg("arg", "unsigned long")]),
        (SHMDT, vec![arg("shmaddr", "const void*")]),
        (MSGGET, vec![arg("key", "key_t"), arg("msgflg", "int")]),
        (MSGSND, vec![arg("msqid", "int"), arg("msgp", "struct msgbuf*"), arg("msgsz", "size_t"), arg("msgflg", "int")]),
        (MSGRCV, vec![arg("msqid", "int"), arg("msgp", "struct msgbuf*"), arg("msgsz", "size_t"), arg("msgtyp", "long"), arg("msgflg", "int")]),
        (MSGCTL, vec![arg("msqid", "int"), arg("cmd", "int"), arg("buf", "struct msqid_ds*")]),
        (FCNTL, vec![arg("fd", "int"), arg("cmd", "int"), arg("arg", "unsigned long")]),
        (FLOCK, vec![arg("fd", "int"), arg("operation", "int")]),
        (FSYNC, vec![arg("fd", "int")]),
        (FDATASYNC, vec![arg("fd", "int")]),
        (TRUNCATE, vec![arg("path", "const char*"), arg("length", "off_t")]),
        (FTRUNCATE, vec![arg("fd", "int"), arg("length", "off_t")]),
        (GETDENTS, vec![arg("fd", "int"), arg("dirp", "struct linux_dirent*"), arg("count", "unsigned int")]),
        (GETCWD, vec![arg("buf", "char*"), arg("size", "size_t")]),
        (CHDIR, vec![arg("path", "const char*")]),
        (FCHDIR, vec![arg("fd", "int")]),
        (RENAME, vec![arg("oldpath", "const char*"), arg("newpath", "const char*")]),
        (MKDIR, vec![arg("pathname", "const char*"), arg("mode", "mode_t")]),
        (RMDIR, vec![arg("pathname", "const char*")]),
        (CREAT, vec![arg("pathname", "const char*"), arg("mode", "mode_t")]),
        (LINK, vec![arg("oldpath", "const char*"), arg("newpath", "const char*")]),
        (UNLINK, vec![arg("pathname", "const char*")]),
        (SYMLINK, vec![arg("target", "const char*"), arg("linkpath", "const char*")]),
        (READLINK, vec![arg("pathname", "const char*"), arg("buf", "char*"), arg("bufsiz", "size_t")]),
        (CHMOD, vec![arg("pathname", "const char*"), arg("mode", "mode_t")]),
        (FCHMOD, vec![arg("fd", "int"), arg("mode", "mode_t")]),
        (CHOWN, vec![arg("pathname", "const char*"), arg("owner", "uid_t"), arg("group", "gid_t")]),
        (FCHOWN, vec![arg("fd", "int"), arg("owner", "uid_t"), arg("group", "gid_t")]),
        (LCHOWN, vec![arg("pathname", "const char*"), arg("owner", "uid_t"), arg("group", "gid_t")]),
        (UMASK, vec![arg("mask", "mode_t")]),
        (GETTIMEOFDAY, vec![arg("tv", "struct timeval*"), arg("tz", "struct timezone*")]),
        (GETRLIMIT, vec![arg("resource", "int"), arg("rlim", "struct rlimit*")]),
        (GETRUSAGE, vec![arg("who", "int"), arg("usage", "struct rusage*")]),
        (SYSINFO, vec![arg("info", "struct sysinfo*")]),
        (TIMES, vec![arg("buf", "struct tms*")]),
        (PTRACE, vec![arg("request", "long"), arg("pid", "pid_t"), arg("addr", "void*"), arg("data", "void*")]),
        (GETUID, vec![]),
        (SYSLOG, vec![arg("type", "int"), arg("bufp", "char*"), arg("len", "int")]),
        (GETGID, vec![]),
        (SETUID, vec![arg("uid", "uid_t")]),
        (SETGID, vec![arg("gid", "gid_t")]),
        (GETEUID, vec![]),
        (GETEGID, vec![]),
        (SETPGID, vec![arg("pid", "pid_t"), arg("pgid", "pid_t")]),
        (GETPPID, vec![]),
        (GETPGRP, vec![]),
        (SETSID, vec![]),
        (SETREUID, vec![arg("ruid", "uid_t"), arg("euid", "uid_t")]),
        (SETREGID, vec![arg("rgid", "gid_t"), arg("egid", "gid_t")]),
        (GETGROUPS, vec![arg("size", "int"), arg("list", "gid_t*")]),
        (SETGROUPS, vec![arg("size", "int"), arg("list", "gid_t*")]),
        (SETRESUID, vec![arg("ruid", "uid_t"), arg("euid", "uid_t"), arg("suid", "uid_t")]),
        (GETRESUID, vec![arg("ruid", "uid_t*"), arg("euid", "uid_t*"), arg("suid", "uid_t*")]),
        (SETRESGID, vec![arg("rgid", "gid_t"), arg("egid", "gid_t"), arg("sgid", "gid_t")]),
        (GETRESGID, vec![arg("rgid", "gid_t*"), arg("egid", "gid_t*"), arg("sgid", "gid_t*")]),
        (GETPGID, vec![arg("pid", "pid_t")]),
        (SETFSUID, vec![arg("fsuid", "uid_t")]),
        (SETFSGID, vec![arg("fsgid", "gid_t")]),
        (GETSID, vec![arg("pid", "pid_t")]),
        (CAPGET, vec![arg("hdrp", "cap_user_header_t"), arg("datap", "cap_user_data_t")]),
        (CAPSET, vec![arg("hdrp", "cap_user_header_t"), arg("datap", "const cap_user_data_t")]),
        (RT_SIGPENDING, vec![arg("set", "sigset_t*"), arg("sigsetsize", "size_t")]),
        (RT_SIGTIMEDWAIT, vec![arg("set", "const sigset_t*"), arg("info", "siginfo_t*"), arg("timeout", "const struct timespec*"), arg("sigsetsize", "size_t")]),
        (RT_SIGQUEUEINFO, vec![arg("tgid", "pid_t"), arg("sig", "int"), arg("info", "siginfo_t*")]),
        (RT_SIGSUSPEND, vec![arg("mask", "sigset_t*"), arg("sigsetsize", "size_t")]),
        (SIGALTSTACK, vec![arg("ss", "const stack_t*"), arg("old_ss", "stack_t*")]),
        (UTIME, vec![arg("filename", "const char*"), arg("times", "const struct utimbuf*")]),
        (MKNOD, vec![arg("pathname", "const char*"), arg("mode", "mode_t"), arg("dev", "dev_t")]),
        (USELIB, vec![arg("library", "const char*")]),
        (PERSONALITY, vec![arg("persona", "unsigned long")]),
        (USTAT, vec![arg("dev", "dev_t"), arg("ubuf", "struct ustat*")]),
        (STATFS, vec![arg("path", "const char*"), arg("buf", "struct statfs*")]),
        (FSTATFS, vec![arg("fd", "int"), arg("buf", "struct statfs*")]),
        (SYSFS, vec![arg("option", "int")]),
        (GETPRIORITY, vec![arg("which", "int"), arg("who", "int")]),
        (SETPRIORITY, vec![arg("which", "int"), arg("who", "int"), arg("prio", "int")]),
        (SCHED_SETPARAM, vec![arg("pid", "pid_t"), arg("param", "struct sched_param*")]),
        (SCHED_GETPARAM, vec![arg("pid", "pid_t"), arg("param", "struct sched_param*")]),
        (SCHED_SETSCHEDULER, vec![arg("pid", "pid_t"), arg("policy", "int"), arg("param", "struct sched_param*")]),
        (SCHED_GETSCHEDULER, vec![arg("pid", "pid_t")]),
        (SCHED_GET_PRIORITY_MAX, vec![arg("policy", "int")]),
        (SCHED_GET_PRIORITY_MIN, vec![arg("policy", "int")]),
        (SCHED_RR_GET_INTERVAL, vec![arg("pid", "pid_t"), arg("tp", "struct timespec*")]),
        (MLOCK, vec![arg("addr", "const void*"), arg("len", "size_t")]),
        (MUNLOCK, vec![arg("addr", "const void*"), arg("len", "size_t")]),
        (MLOCKALL, vec![arg("flags", "int")]),
        (MUNLOCKALL, vec![]),
        (VHANGUP, vec![]),
        (MODIFY_LDT, vec![arg("func", "int"), arg("ptr", "void*"), arg("bytecount", "unsigned long")]),
        (PIVOT_ROOT, vec![arg("new_root", "const char*"), arg("put_old", "const char*")]),
        (SYSCTL, vec![arg("args", "struct __sysctl_args*")]),
        (PRCTL, vec![arg("option", "int"), arg("arg2", "unsigned long"), arg("arg3", "unsigned long"), arg("arg4", "unsigned long"), arg("arg5", "unsigned long")]),
        (ARCH_PRCTL, vec![arg("option", "int"), arg("addr", "unsigned long")]),
        (ADJTIMEX, vec![arg("buf", "struct timex*")]),
        (SETRLIMIT, vec![arg("resource", "int"), arg("rlim", "const struct rlimit*")]),
        (CHROOT, vec![arg("path", "const char*")]),
        (SYNC, vec![]),
        (ACCT, vec![arg("filename", "const char*")]),
        (SETTIMEOFDAY, vec![arg("tv", "const struct timeval*"), arg("tz", "const struct timezone*")]),
        (MOUNT, vec![arg("source", "const char*"), arg("target", "const char*"), arg("filesystemtype", "const char*"), arg("mountflags", "unsigned long"), arg("data", "const void*")]),
        (UMOUNT, vec![arg("target", "const char*"), arg("flags", "int")]),
        (SWAPON, vec![arg("path", "const char*"), arg("swapflags", "int")]),
        (SWAPOFF, vec![arg("path", "const char*")]),
        (REBOOT, vec![arg("magic", "int"), arg("magic2", "int"), arg("cmd", "int"), arg("arg", "void*")]),
        (SETHOSTNAME, vec![arg("name", "const char*"), arg("len", "size_t")]),
        (SETDOMAINNAME, vec![arg("name", "const char*"), arg("len", "size_t")]),
        (IOPL, vec![arg("level", "int")]),
        (IOPERM, vec![arg("from", "unsigned long"), arg("num", "unsigned long"), arg("turn_on", "int")]),
        (CREATE_MODULE, vec![]),
        (INIT_MODULE, vec![arg("module_image", "void*"), arg("len", "unsigned long"), arg("param_values", "const char*")]),
        (DELETE_MODULE, vec![arg("name", "const char*"), arg("flags", "int")]),
        (GET_KERNEL_SYMS, vec![]),
        (QUERY_MODULE, vec![]),
        (QUOTACTL, vec![arg("cmd", "int"), arg("special", "const char*"), arg("id", "int"), arg("addr", "void*")]),
        (NFSSERVCTL, vec![]),
        (GETPMSG, vec![]),
        (PUTPMSG, vec![]),
        (AFS, vec![]),
        (TUXCALL, vec![]),
        (SECURITY, vec![]),
        (GETTID, vec![]),
        (READAHEAD, vec![arg("fd", "int"), arg("offset", "off_t"), arg("count", "size_t")]),
        (SETXATTR, vec![arg("path", "const char*"), arg("name", "const char*"), arg("value", "const void*"), arg("size", "size_t"), arg("flags", "int")]),
        (LSETXATTR, vec![arg("path", "const char*"), arg("name", "const char*"), arg("value", "const void*"), arg("size", "size_t"), arg("flags", "int")]),
        (FSETXATTR, vec![arg("fd", "int"), arg("name", "const char*"), arg("value", "const void*"), arg("size", "size_t"), arg("flags", "int")]),
        (GETXATTR, vec![arg("path", "const char*"), arg("name", "const char*"), arg("value", "void*"), arg("size", "size_t")]),
        (LGETXATTR, vec![arg("path", "const char*"), arg("name", "const char*"), arg("value", "void*"), arg("size", "size_t")]),
        (FGETXATTR, vec![arg("fd", "int"), arg("name", "const char*"), arg("value", "void*"), arg("size", "size_t")]),
        (LISTXATTR, vec![arg("path", "const char*"), arg("list", "char*"), arg("size", "size_t")]),
        (LLISTXATTR, vec![arg("path", "const char*"), arg("list", "char*"), arg("size", "size_t")]),
        (FLISTXATTR, vec![arg("fd", "int"), arg("list", "char*"), arg("size", "size_t")]),
        (REMOVEXATTR, vec![arg("path", "const char*"), arg("name", "const char*")]),
        (LREMOVEXATTR, vec![arg("path", "const char*"), arg("name", "const char*")]),
        (FREMOVEXATTR, vec![arg("fd", "int"), arg("name", "const char*")]),
        (TKILL, vec![arg("tid", "int"), arg("sig", "int")]),
        (TIME, vec![arg("tloc", "time_t*")]),
        (FUTEX, vec![arg("uaddr", "int*"), arg("futex_op", "int"), arg("val", "int"), arg("timeout", "const struct timespec*"), arg("uaddr2", "int*"), arg("val3", "int")]),
        (SCHED_SETAFFINITY, vec![arg("pid", "pid_t"), arg("cpusetsize", "size_t"), arg("mask", "unsigned long*")]),
        (SCHED_GETAFFINITY, vec![arg("pid", "pid_t"), arg("cpusetsize", "size_t"), arg("mask", "unsigned long*")]),
        (SET_THREAD_AREA, vec![arg("u_info", "struct user_desc*")]),
        (IO_SETUP, vec![arg("nr_events", "unsigned int"), arg("ctx_idp", "io_context_t*")]),
        (IO_DESTROY, vec![arg("ctx_id", "io_context_t")]),
        (IO_GETEVENTS, vec![arg("ctx_id", "io_context_t"), arg("min_nr", "long"), arg("nr", "long"), arg("events", "struct io_event*"), arg("timeout", "struct timespec*")]),
        (IO_SUBMIT, vec![arg("ctx_id", "io_context_t"), arg("nr", "long"), arg("iocbpp", "struct iocb**")]),
        (IO_CANCEL, vec![arg("ctx_id", "io_context_t"), arg("iocb", "struct iocb*"), arg("result", "struct io_event*")]),
        (GET_THREAD_AREA, vec![arg("u_info", "struct user_desc*")]),
        (LOOKUP_DCOOKIE, vec![arg("cookie", "u64"), arg("buffer", "char*"), arg("len", "size_t")]),
        (EPOLL_CREATE, vec![arg("size", "int")]),
        (EPOLL_CTL_OLD, vec![]),
        (EPOLL_WAIT_OLD, vec![]),
        (REMAP_FILE_PAGES, vec![arg("addr", "void*"), arg("size", "size_t"), arg("prot", "int"), arg("pgoff", "size_t"), arg("flags", "int")]),
        (GETDENTS64, vec![arg("fd", "unsigned int"), arg("dirp", "struct linux_dirent64*"), arg("count", "unsigned int")]),
        (SET_TID_ADDRESS, vec![arg("tidptr", "int*")]),
        (RESTART_SYSCALL, vec![]),
        (SEMTIMEDOP, vec![arg("semid", "int"), arg("sops", "struct sembuf*"), arg("nsops", "size_t"), arg("timeout", "const struct timespec*")]),
        (FADVISE64, vec![arg("fd", "int"), arg("offset", "off_t"), arg("len", "size_t"), arg("advice", "int")]),
        (TIMER_CREATE, vec![arg("clockid", "const clockid_t"), arg("sevp", "struct sigevent*"), arg("timer_id", "timer_t*")]),
        (TIMER_SETTIME, vec![arg("timer_id", "timer_t"), arg("flags", "int"), arg("new_value", "const struct itimerspec*"), arg("old_value", "struct itimerspec*")]),
        (TIMER_GETTIME, vec![arg("timer_id", "timer_t"), arg("curr_value", "struct itimerspec*")]),
        (TIMER_GETOVERRUN, vec![arg("timer_id", "timer_t")]),
        (TIMER_DELETE, vec![arg("timer_id", "timer_t")]),
        (CLOCK_SETTIME, vec![arg("clockid", "const clockid_t"), arg("tp", "const struct timespec*")]),
        (CLOCK_GETTIME, vec![arg("clockid", "const clockid_t"), arg("tp", "struct timespec*")]),
        (CLOCK_GETRES, vec![arg("clockid", "const clockid_t"), arg("res", "struct timespec*")]),
        (CLOCK_NANOSLEEP, vec![arg("clockid", "const clockid_t"), arg("flags", "int"), arg("request", "const struct timespec*"), arg("remain", "struct timespec*")]),
        (EXIT_GROUP, vec![arg("status", "int")]),
        (EPOLL_WAIT, vec![arg("epfd", "int"), arg("events", "struct epoll_event*"), arg("maxevents", "int"), arg("timeout", "int")]),
        (EPOLL_CTL, vec![arg("epfd", "int"), arg("op", "int"), arg("fd", "int"), arg("event", "struct epoll_event*")]),
        (TGKILL, vec![arg("tgid", "int"), arg("tid", "int"), arg("sig", "int")]),
        (UTIMES, vec![arg("filename", "char*"), arg("times", "struct timeval*")]),
        (VSERVER, vec![]),
        (MBIND, vec![arg("addr", "void*"), arg("len", "unsigned long"), arg("mode", "int"), arg("nodemask", "const unsigned long*"), arg("maxnode", "unsigned long"), arg("flags", "unsigned int")]),
        (SET_MEMPOLICY, vec![arg("mode", "int"), arg("nodemask", "const unsigned long*"), arg("maxnode", "unsigned long")]),
        (GET_MEMPOLICY, vec![arg("mode", "int*"), arg("nodemask", "unsigned long*"), arg("maxnode", "unsigned long"), arg("addr", "void*"), arg("flags", "unsigned long")]),
        (MQ_OPEN, vec![arg("name", "const char*"), arg("oflag", "int"), arg("mode", "mode_t"), arg("attr", "struct mq_attr*")]),
        (MQ_UNLINK, vec![arg("name", "const char*")]),
        (MQ_TIMEDSEND, vec![arg("mqdes", "mqd_t"), arg("msg_ptr", "const char*"), arg("msg_len", "size_t"), arg("msg_prio", "unsigned int"), arg("abs_timeout", "const struct timespec*")]),
        (MQ_TIMEDRECEIVE, vec![arg("mqdes", "mqd_t"), arg("msg_ptr", "char*"), arg("msg_len", "size_t"), arg("msg_prio", "unsigned int*"), arg("abs_timeout", "const struct timespec*")]),
        (MQ_NOTIFY, vec![arg("mqdes", "mqd_t"), arg("sevp", "const struct sigevent*")]),
        (MQ_GETSETATTR, vec![arg("mqdes", "mqd_t"), arg("newattr", "const struct mq_attr*"), arg("oldattr", "struct mq_attr*")]),
        (KEXEC_LOAD, vec![arg("entry", "unsigned long"), arg("nr_segments", "unsigned long"), arg("segments", "struct kexec_segment*"), arg("flags", "unsigned long")]),
        (WAITID, vec![arg("idtype", "int"), arg("id", "pid_t"), arg("infop", "struct siginfo*"), arg("options", "int"), arg("rusage", "struct rusage*")]),
        (ADD_KEY, vec![arg("type", "const char*"), arg("description", "const char*"), arg("payload", "const void*"), arg("plen", "size_t"), arg("keyring", "key_serial_t")]),
        (REQUEST_KEY, vec![arg("type", "const char*"), arg("description", "const char*"), arg("callout_info", "const char*"), arg("dest_keyring", "key_serial_t")]),
        (KEYCTL, vec![arg("operation", "int"), arg("arg2", "unsigned long"), arg("arg3", "unsigned long"), arg("arg4", "unsigned long"), arg("arg5", "unsigned long")]),
        (IOPRIO_SET, vec![arg("which", "int"), arg("who", "int"), arg("ioprio", "int")]),
        (IOPRIO_GET, vec![arg("which", "int"), arg("who", "int")]),
        (INOTIFY_INIT, vec![]),
        (INOTIFY_ADD_WATCH, vec![arg("fd", "int"), arg("pathname", "const char*"), arg("mask", "u32")]),
        (INOTIFY_RM_WATCH, vec![arg("fd", "int"), arg("wd", "int")]),
        (MIGRATE_PAGES, vec![arg("pid", "int"), arg("maxnode", "unsigned long"), arg("old_nodes", "const unsigned long*"), arg("new_nodes", "const unsigned long*")]),
        (OPENAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("flags", "int"), arg("mode", "mode_t")]),
        (MKDIRAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("mode", "mode_t")]),
        (MKNODAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("mode", "mode_t"), arg("dev", "dev_t")]),
        (FCHOWNAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("owner", "uid_t"), arg("group", "gid_t"), arg("flags", "int")]),
        (FUTIMESAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("times", "struct timeval*")]),
        (NEWFSTATAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("statbuf", "struct stat*"), arg("flags", "int")]),
        (UNLINKAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("flags", "int")]),
        (RENAMEAT, vec![arg("olddirfd", "int"), arg("oldpath", "const char*"), arg("newdirfd", "int"), arg("newpath", "const char*")]),
        (LINKAT, vec![arg("olddirfd", "int"), arg("oldpath", "const char*"), arg("newdirfd", "int"), arg("newpath", "const char*"), arg("flags", "unsigned int")]),
        (SYMLINKAT, vec![arg("target", "const char*"), arg("newdirfd", "int"), arg("linkpath", "const char*")]),
        (READLINKAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("buf", "char*"), arg("bufsiz", "int")]),
        (FCHMODAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("mode", "mode_t"), arg("flags", "int")]),
        (FACCESSAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("mode", "int"), arg("flags", "int")]),
        (PSELECT6, vec![arg("nfds", "int"), arg("readfds", "fd_set*"), arg("writefds", "fd_set*"), arg("exceptfds", "fd_set*"), arg("timeout", "struct timespec*"), arg("sigmask", "void*")]),
        (PPOLL, vec![arg("fds", "struct pollfd*"), arg("nfds", "unsigned int"), arg("tmo_p", "struct timespec*"), arg("sigmask", "const sigset_t*"), arg("sigsetsize", "size_t")]),
        (UNSHARE, vec![arg("flags", "int")]),
        (SET_ROBUST_LIST, vec![arg("head", "struct robust_list_head*"), arg("len", "size_t")]),
        (GET_ROBUST_LIST, vec![arg("pid", "int"), arg("head_ptr", "struct robust_list_head**"), arg("len_ptr", "size_t*")]),
        (SPLICE, vec![arg("fd_in", "int"), arg("off_in", "off_t*"), arg("fd_out", "int"), arg("off_out", "off_t*"), arg("len", "size_t"), arg("flags", "unsigned int")]),
        (TEE, vec![arg("fd_in", "int"), arg("fd_out", "int"), arg("len", "size_t"), arg("flags", "unsigned int")]),
        (SYNC_FILE_RANGE, vec![arg("fd", "int"), arg("offset", "off_t"), arg("nbytes", "off_t"), arg("flags", "unsigned int")]),
        (VMSPLICE, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("nr_segs", "unsigned long"), arg("flags", "unsigned int")]),
        (MOVE_PAGES, vec![arg("pid", "int"), arg("count", "unsigned long"), arg("pages", "const void**"), arg("nodes", "const int*"), arg("status", "int*"), arg("flags", "int")]),
        (UTIMENSAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("times", "struct timespec*"), arg("flags", "int")]),
        (EPOLL_PWAIT, vec![arg("epfd", "int"), arg("events", "struct epoll_event*"), arg("maxevents", "int"), arg("timeout", "int"), arg("sigmask", "const sigset_t*"), arg("sigsetsize", "size_t")]),
        (SIGNALFD, vec![arg("fd", "int"), arg("mask", "sigset_t*"), arg("flags", "int")]),
        (TIMERFD_CREATE, vec![arg("clockid", "int"), arg("flags", "int")]),
        (EVENTFD, vec![arg("initval", "unsigned int"), arg("flags", "int")]),
        (FALLOCATE, vec![arg("fd", "int"), arg("mode", "int"), arg("offset", "off_t"), arg("len", "off_t")]),
        (TIMERFD_SETTIME, vec![arg("fd", "int"), arg("flags", "int"), arg("new_value", "const struct itimerspec*"), arg("old_value", "struct itimerspec*")]),
        (TIMERFD_GETTIME, vec![arg("fd", "int"), arg("curr_value", "struct itimerspec*")]),
        (ACCEPT4, vec![arg("sockfd", "int"), arg("addr", "struct sockaddr*"), arg("addrlen", "int*"), arg("flags", "int")]),
        (SIGNALFD4, vec![arg("fd", "int"), arg("mask", "const sigset_t*"), arg("sizemask", "size_t"), arg("flags", "int")]),
        (EVENTFD2, vec![arg("initval", "unsigned int"), arg("flags", "int")]),
        (EPOLL_CREATE1, vec![arg("flags", "int")]),
        (DUP3, vec![arg("oldfd", "int"), arg("newfd", "int"), arg("flags", "int")]),
        (PIPE2, vec![arg("pipefd", "int[2]"), arg("flags", "int")]),
        (INOTIFY_INIT1, vec![arg("flags", "int")]),
        (PREADV, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "unsigned long"), arg("pos_l", "unsigned long"), arg("pos_h", "unsigned long")]),
        (PWRITEV, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "unsigned long"), arg("pos_l", "unsigned long"), arg("pos_h", "unsigned long")]),
        (RT_TGSIGQUEUEINFO, vec![arg("tgid", "pid_t"), arg("tid", "pid_t"), arg("sig", "int"), arg("info", "siginfo_t*")]),
        (PERF_EVENT_OPEN, vec![arg("attr", "struct perf_event_attr*"), arg("pid", "pid_t"), arg("cpu", "int"), arg("group_fd", "int"), arg("flags", "unsigned long")]),
        (RECVMMSG, vec![arg("sockfd", "int"), arg("msgvec", "struct mmsghdr*"), arg("vlen", "unsigned int"), arg("flags", "int"), arg("timeout", "struct timespec*")]),
        (FANOTIFY_INIT, vec![arg("flags", "unsigned int"), arg("event_f_flags", "unsigned int")]),
        (FANOTIFY_MARK, vec![arg("fanotify_fd", "int"), arg("flags", "unsigned int"), arg("mask", "u64"), arg("dirfd", "int"), arg("pathname", "const char*")]),
        (PRLIMIT64, vec![arg("pid", "pid_t"), arg("resource", "int"), arg("new_limit", "const struct rlimit64*"), arg("old_limit", "struct rlimit64*")]),
        (NAME_TO_HANDLE_AT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("handle", "struct file_handle*"), arg("mount_id", "int*"), arg("flags", "int")]),
        (OPEN_BY_HANDLE_AT, vec![arg("mount_fd", "int"), arg("handle", "struct file_handle*"), arg("flags", "int")]),
        (CLOCK_ADJTIME, vec![arg("clk_id", "const clockid_t"), arg("buf", "struct timex*")]),
        (SYNCFS, vec![arg("fd", "int")]),
        (SENDMMSG, vec![arg("sockfd", "int"), arg("msgvec", "struct mmsghdr*"), arg("vlen", "unsigned int"), arg("flags", "int")]),
        (SETNS, vec![arg("fd", "int"), arg("nstype", "int")]),
        (GETCPU, vec![arg("cpu", "unsigned int*"), arg("node", "unsigned int*"), arg("tcache", "struct getcpu_cache*")]),
        (PROCESS_VM_READV, vec![arg("pid", "pid_t"), arg("local_iov", "const struct iovec*"), arg("liovcnt", "unsigned long"), arg("remote_iov", "const struct iovec*"), arg("riovcnt", "unsigned long"), arg("flags", "unsigned long")]),
        (PROCESS_VM_WRITEV, vec![arg("pid", "pid_t"), arg("local_iov", "const struct iovec*"), arg("liovcnt", "unsigned long"), arg("remote_iov", "const struct iovec*"), arg("riovcnt", "unsigned long"), arg("flags", "unsigned long")]),
        (KCMP, vec![arg("pid1", "pid_t"), arg("pid2", "pid_t"), arg("type", "int"), arg("idx1", "unsigned long"), arg("idx2", "unsigned long")]),
        (FINIT_MODULE, vec![arg("fd", "int"), arg("param_values", "const char*"), arg("flags", "int")]),
        (SCHED_SETATTR, vec![arg("pid", "pid_t"), arg("attr", "struct sched_attr*"), arg("flags", "unsigned int")]),
        (SCHED_GETATTR, vec![arg("pid", "pid_t"), arg("attr", "struct sched_attr*"), arg("size", "unsigned int"), arg("flags", "unsigned int")]),
        (RENAMEAT2, vec![arg("olddirfd", "int"), arg("oldpath", "const char*"), arg("newdirfd", "int"), arg("newpath", "const char*"), arg("flags", "unsigned int")]),
        (SECCOMP, vec![arg("operation", "unsigned int"), arg("flags", "unsigned int"), arg("args", "const void*")]),
        (GETRANDOM, vec![arg("buf", "void*"), arg("buflen", "size_t"), arg("flags", "unsigned int")]),
        (MEMFD_CREATE, vec![arg("name", "const char*"), arg("flags", "unsigned int")]),
        (KEXEC_FILE_LOAD, vec![arg("kernel_fd", "int"), arg("initrd_fd", "int"), arg("cmdline_len", "unsigned long"), arg("cmdline", "const char*"), arg("flags", "unsigned long")]),
        (BPF, vec![arg("cmd", "int"), arg("attr", "union bpf_attr*"), arg("size", "unsigned int")]),
        (EXECVEAT, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("argv", "const char*const*"), arg("envp", "const char*const*"), arg("flags", "int")]),
        (USERFAULTFD, vec![arg("flags", "int")]),
        (MEMBARRIER, vec![arg("cmd", "int"), arg("flags", "int")]),
        (MLOCK2, vec![arg("addr", "const void*"), arg("len", "size_t"), arg("flags", "int")]),
        (COPY_FILE_RANGE, vec![arg("fd_in", "int"), arg("off_in", "off_t*"), arg("fd_out", "int"), arg("off_out", "off_t*"), arg("len", "size_t"), arg("flags", "unsigned int")]),
        (PREADV2, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "unsigned long"), arg("pos_l", "unsigned long"), arg("pos_h", "unsigned long"), arg("flags", "int")]),
        (PWRITEV2, vec![arg("fd", "int"), arg("iov", "const struct iovec*"), arg("iovcnt", "unsigned long"), arg("pos_l", "unsigned long"), arg("pos_h", "unsigned long"), arg("flags", "int")]),
        (PKEY_MPROTECT, vec![arg("addr", "void*"), arg("len", "size_t"), arg("prot", "int"), arg("pkey", "int")]),
        (PKEY_ALLOC, vec![arg("flags", "unsigned int"), arg("access_rights", "unsigned long")]),
        (PKEY_FREE, vec![arg("pkey", "int")]),
        (STATX, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("flags", "int"), arg("mask", "unsigned int"), arg("statxbuf", "struct statx*")]),
        (IO_PGETEVENTS, vec![arg("ctx_id", "aio_context_t"), arg("min_nr", "long"), arg("nr", "long"), arg("events", "struct io_event*"), arg("timeout", "struct timespec*"), arg("usig", "const struct __aio_sigset*")]),
        (RSEQ, vec![arg("rseq", "struct rseq*"), arg("rseq_len", "u32"), arg("flags", "int"), arg("sig", "u32")]),
        (PIDFD_SEND_SIGNAL, vec![arg("pidfd", "int"), arg("sig", "int"), arg("info", "siginfo_t*"), arg("flags", "unsigned int")]),
        (IO_URING_SETUP, vec![arg("entries", "unsigned int"), arg("p", "struct io_uring_params*")]),
        (IO_URING_ENTER, vec![arg("fd", "unsigned int"), arg("to_submit", "unsigned int"), arg("min_complete", "unsigned int"), arg("flags", "unsigned int"), arg("sig", "sigset_t*")]),
        (IO_URING_REGISTER, vec![arg("fd", "unsigned int"), arg("opcode", "unsigned int"), arg("arg", "void*"), arg("nr_args", "unsigned int")]),
        (OPEN_TREE, vec![arg("dfd", "int"), arg("filename", "const char*"), arg("flags", "unsigned int")]),
        (MOVE_MOUNT, vec![arg("from_dfd", "int"), arg("from_path", "const char*"), arg("to_dfd", "int"), arg("to_path", "const char*"), arg("flags", "unsigned int")]),
        (FSOPEN, vec![arg("fsname", "const char*"), arg("flags", "unsigned int")]),
        (FSCONFIG, vec![arg("fs_fd", "int*"), arg("cmd", "unsigned int"), arg("key", "const char*"), arg("value", "const void*"), arg("aux", "int")]),
        (FSMOUNT, vec![arg("fsfd", "int"), arg("flags", "unsigned int"), arg("ms_flags", "unsigned int")]),
        (FSPICK, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("flags", "unsigned int")]),
        (PIDFD_OPEN, vec![arg("pid", "pid_t"), arg("flags", "unsigned int")]),
        (CLONE3, vec![arg("cl_args", "struct clone_args*"), arg("size", "size_t")]),
        (CLOSE_RANGE, vec![arg("first", "unsigned int"), arg("last", "unsigned int")]),
        (OPENAT2, vec![arg("dirfd", "int"), arg("pathname", "const char*"), arg("how", "struct open_how*"), arg("size", "size_t")]),
        (PIDFD_GETFD, vec![arg("pidfd", "int"), arg("targetfd", "int"), arg("flags", "unsigned int")]),
        (FACCESSAT2, vec![arg("fd", "int"), arg("path", "const char*"), arg("mode", "int"), arg("flag", "int")]),
        (PROCESS_MADVISE, vec![arg("pidfd", "int"), arg("addr", "void*"), arg("length", "size_t"), arg("advice", "int"), arg("flags", "unsigned long")]),
        (EPOLL_PWAIT2, vec![arg("fd", "int"), arg("events", "struct epoll_event*"), arg("maxevents", "int"), arg("timeout", "const struct timespec*"), arg("sigset", "const sigset_t*")]),
        (SYS_ENTER, vec![arg("syscall", "int")]),
        (SYS_EXIT, vec![arg("syscall", "int")]),
        (SCHED_PROCESS_FORK, vec![arg("parent_tid", "int"), arg("parent_ns_tid", "int"), arg("child_tid", "int"), arg("child_ns_tid", "int")]),
        (SCHED_PROCESS_EXEC, vec![arg("cmdpath", "const char*"), arg("pathname", "const char*"), arg("argv", "const char**"), arg("env", "const char**"), arg("dev", "dev_t"), arg("inode", "unsigned long"), arg("invoked_from_kernel", "int"), arg("ctime", "unsigned long")]),
        (SCHED_PROCESS_EXIT, vec![arg("exit_code", "long")]),
        (SCHED_SWITCH, vec![arg("cpu", "int"), arg("prev_tid", "int"), arg("prev_comm", "const char*"), arg("next_tid", "int"), arg("next_comm", "const char*")]),
        (DO_EXIT, vec![]),
        (CAP_CAPABLE, vec![arg("cap", "int"), arg("syscall", "int")]),
        (VFS_WRITE, vec![arg("pathname", "const char*"), arg("dev", "dev_t"), arg("inode", "unsigned long"), arg("count", "size_t"), arg("pos", "off_t")]),
        (VFS_WRITEV, vec![arg("pathname", "const char*"), arg("dev", "dev_t"), arg("inode", "unsigned long"), arg("vlen", "unsigned long"), arg("pos", "off_t")]),
        (MEM_PROT_ALERT, vec![arg("alert", "u32")]),
        (COMMIT_CREDS, vec![arg("old_cred", "slim_cred_t"), arg("new_cred", "slim_cred_t"), arg("syscall", "int")]),
        (SWITCH_TASK_NS, vec![arg("pid", "pid_t"), arg("new_mnt", "u32"), arg("new_pid", "u32"), arg("new_uts", "u32"), arg("new_ipc", "u32"), arg("new_net", "u32"), arg("new_cgroup", "u32")]),
        (MAGIC_WRITE, vec![arg("pathname", "const char*"), arg("bytes", "bytes"), arg("dev", "dev_t"), arg("inode", "unsigned long")]),
        (CGROUP_ATTACH_TASK, vec![arg("cgroup_path", "const char*"), arg("comm", "const char*"), arg("pid", "pid_t")]),
        (CGROUP_MKDIR, vec![arg("cgroup_id", "u64"), arg("cgroup_path", "const char*")]),
        (CGROUP_RMDIR, vec![arg("cgroup_id", "u64"), arg("cgroup_path", "const char*")]),
        (SECURITY_BPRM_CHECK, vec![arg("pathname", "const char*"), arg("dev", "dev_t"), arg("inode", "unsigned long")]),
        (SECURITY_FILE_OPEN, vec![arg("pathname", "const char*"), arg("flags", "int"), arg("dev", "dev_t"), arg("inode", "unsigned long"), arg("syscall", "int")]),
        (SECURITY_INODE_UNLINK, vec![arg("pathname", "const char*")]),
        (SECURITY_SOCKET_CREATE, vec![arg("family", "int"), arg("type", "int"), arg("protocol", "int"), arg("kern", "int")]),
        (SECURITY_SOCKET_LISTEN, vec![arg("sockfd", "int"), arg("local_addr", "struct sockaddr*"), arg("backlog", "int")]),
        (SECURITY_SOCKET_CONNECT, vec![arg("sockfd", "int"), arg("remote_addr", "struct sockaddr*")]),
        (SECURITY_SOCKET_ACCEPT, vec![arg("sockfd", "int"), arg("local_addr", "struct sockaddr*")]),
        (SECURITY_SOCKET_BIND, vec![arg("sockfd", "int"), arg("local_addr", "struct sockaddr*")]),
        (SECURITY_SB_MOUNT, vec![arg("dev_name", "const char*"), arg("path", "const char*"), arg("type", "const char*"), arg("flags", "unsigned long")]),
        (SECURITY_BPF, vec![arg("cmd", "int")]),
        (SECURITY_BPF_MAP, vec![arg("map_id", "unsigned int"), arg("map_name", "const char*")]),
        (SECURITY_KERNEL_READ_FILE, vec![arg("pathname", "const char*"), arg("dev", "dev_t"), arg("inode", "unsigned long"), arg("type", "int")]),
        (SECURITY_INODE_MKNOD, vec![arg("file_name", "const char*"), arg("mode", "umode_t"), arg("dev", "dev_t")]),
        (SECURITY_KERNEL_POST_READ_FILE, vec![arg("pathname", "const char*"), arg("size", "long"), arg("type", "int")]),
        (SOCKET_DUP, vec![arg("oldfd", "int"), arg("newfd", "int"), arg("remote_addr", "struct sockaddr*")]),
        (INIT_NAMESPACES, vec![arg("cgroup", "u32"), arg("ipc", "u32"), arg("mnt", "u32"), arg("net", "u32"), arg("pid", "u32"), arg("pid_for_children", "u32"), arg("time", "u32"), arg("time_for_children", "u32"), arg("user", "u32"), arg("uts", "u32")]),
    ]
}
