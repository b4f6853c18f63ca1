//! i386 syscall numbers
//!
//! Compatibility ids: the number a 32-bit task uses for the same syscall.
//! A task running in compat mode reports these numbers at `sys_enter`, so
//! the instrumentation translates them back to the x86_64 event id before
//! tagging the buffer.

/// No i386 equivalent exists for the event
pub const UNDEFINED: i32 = 10000;

pub const RESTART_SYSCALL: i32 = 0;
pub const EXIT: i32 = 1;
pub const FORK: i32 = 2;
pub const READ: i32 = 3;
pub const WRITE: i32 = 4;
pub const OPEN: i32 = 5;
pub const CLOSE: i32 = 6;
pub const CREAT: i32 = 8;
pub const LINK: i32 = 9;
pub const UNLINK: i32 = 10;
pub const EXECVE: i32 = 11;
pub const CHDIR: i32 = 12;
pub const TIME: i32 = 13;
pub const MKNOD: i32 = 14;
pub const CHMOD: i32 = 15;
pub const LCHOWN: i32 = 16;
pub const LSEEK: i32 = 19;
pub const GETPID: i32 = 20;
pub const MOUNT: i32 = 21;
pub const UMOUNT: i32 = 22;
pub const SETUID: i32 = 23;
pub const GETUID: i32 = 24;
pub const PTRACE: i32 = 26;
pub const ALARM: i32 = 27;
pub const PAUSE: i32 = 29;
pub const UTIME: i32 = 30;
pub const ACCESS: i32 = 33;
pub const SYNC: i32 = 36;
pub const KILL: i32 = 37;
pub const RENAME: i32 = 38;
pub const MKDIR: i32 = 39;
pub const RMDIR: i32 = 40;
pub const DUP: i32 = 41;
pub const PIPE: i32 = 42;
pub const TIMES: i32 = 43;
pub const BRK: i32 = 45;
pub const SETGID: i32 = 46;
pub const GETGID: i32 = 47;
pub const GETEUID: i32 = 49;
pub const GETEGID: i32 = 50;
pub const ACCT: i32 = 51;
pub const IOCTL: i32 = 54;
pub const FCNTL: i32 = 55;
pub const SETPGID: i32 = 57;
pub const UMASK: i32 = 60;
pub const CHROOT: i32 = 61;
pub const USTAT: i32 = 62;
pub const DUP2: i32 = 63;
pub const GETPPID: i32 = 64;
pub const GETPGRP: i32 = 65;
pub const SETSID: i32 = 66;
pub const SETREUID: i32 = 70;
pub const SETREGID: i32 = 71;
pub const SETHOSTNAME: i32 = 74;
pub const SETRLIMIT: i32 = 75;
pub const GETRLIMIT: i32 = 76;
pub const GETRUSAGE: i32 = 77;
pub const GETTIMEOFDAY: i32 = 78;
pub const SETTIMEOFDAY: i32 = 79;
pub const GETGROUPS: i32 = 80;
pub const SETGROUPS: i32 = 81;
pub const SELECT: i32 = 82;
pub const SYMLINK: i32 = 83;
pub const READLINK: i32 = 85;
pub const USELIB: i32 = 86;
pub const SWAPON: i32 = 87;
pub const REBOOT: i32 = 88;
pub const MMAP: i32 = 90;
pub const MUNMAP: i32 = 91;
pub const TRUNCATE: i32 = 92;
pub const FTRUNCATE: i32 = 93;
pub const FCHMOD: i32 = 94;
pub const FCHOWN: i32 = 95;
pub const GETPRIORITY: i32 = 96;
pub const SETPRIORITY: i32 = 97;
pub const STATFS: i32 = 99;
pub const FSTATFS: i32 = 100;
pub const IOPERM: i32 = 101;
pub const SYSLOG: i32 = 103;
pub const SETITIMER: i32 = 104;
pub const GETITIMER: i32 = 105;
pub const STAT: i32 = 106;
pub const LSTAT: i32 = 107;
pub const FSTAT: i32 = 108;
pub const IOPL: i32 = 110;
pub const VHANGUP: i32 = 111;
pub const WAIT4: i32 = 114;
pub const SWAPOFF: i32 = 115;
pub const SYSINFO: i32 = 116;
pub const FSYNC: i32 = 118;
pub const CLONE: i32 = 120;
pub const SETDOMAINNAME: i32 = 121;
pub const UNAME: i32 = 122;
pub const MODIFY_LDT: i32 = 123;
pub const ADJTIMEX: i32 = 124;
pub const MPROTECT: i32 = 125;
pub const CREATE_MODULE: i32 = 127;
pub const INIT_MODULE: i32 = 128;
pub const DELETE_MODULE: i32 = 129;
pub const GET_KERNEL_SYMS: i32 = 130;
pub const QUOTACTL: i32 = 131;
pub const GETPGID: i32 = 132;
pub const FCHDIR: i32 = 133;
pub const SYSFS: i32 = 135;
pub const PERSONALITY: i32 = 136;
pub const SETFSUID: i32 = 138;
pub const SETFSGID: i32 = 139;
pub const GETDENTS: i32 = 141;
pub const FLOCK: i32 = 143;
pub const MSYNC: i32 = 144;
pub const READV: i32 = 145;
pub const WRITEV: i32 = 146;
pub const GETSID: i32 = 147;
pub const FDATASYNC: i32 = 148;
pub const MLOCK: i32 = 150;
pub const MUNLOCK: i32 = 151;
pub const MLOCKALL: i32 = 152;
pub const MUNLOCKALL: i32 = 153;
pub const SCHED_SETPARAM: i32 = 154;
pub const SCHED_GETPARAM: i32 = 155;
pub const SCHED_SETSCHEDULER: i32 = 156;
pub const SCHED_GETSCHEDULER: i32 = 157;
pub const SCHED_YIELD: i32 = 158;
pub const SCHED_GET_PRIORITY_MAX: i32 = 159;
pub const SCHED_GET_PRIORITY_MIN: i32 = 160;
pub const SCHED_RR_GET_INTERVAL: i32 = 161;
pub const NANOSLEEP: i32 = 162;
pub const MREMAP: i32 = 163;
pub const SETRESUID: i32 = 164;
pub const GETRESUID: i32 = 165;
pub const QUERY_MODULE: i32 = 167;
pub const POLL: i32 = 168;
pub const NFSSERVCTL: i32 = 169;
pub const SETRESGID: i32 = 170;
pub const GETRESGID: i32 = 171;
pub const PRCTL: i32 = 172;
pub const RT_SIGRETURN: i32 = 173;
pub const RT_SIGACTION: i32 = 174;
pub const RT_SIGPROCMASK: i32 = 175;
pub const RT_SIGPENDING: i32 = 176;
pub const RT_SIGTIMEDWAIT: i32 = 177;
pub const RT_SIGQUEUEINFO: i32 = 178;
pub const RT_SIGSUSPEND: i32 = 179;
pub const PREAD64: i32 = 180;
pub const PWRITE64: i32 = 181;
pub const CHOWN: i32 = 182;
pub const GETCWD: i32 = 183;
pub const CAPGET: i32 = 184;
pub const CAPSET: i32 = 185;
pub const SIGALTSTACK: i32 = 186;
pub const SENDFILE: i32 = 187;
pub const GETPMSG: i32 = 188;
pub const PUTPMSG: i32 = 189;
pub const VFORK: i32 = 190;
pub const PIVOT_ROOT: i32 = 217;
pub const MINCORE: i32 = 218;
pub const MADVISE: i32 = 219;
pub const GETDENTS64: i32 = 220;
pub const GETTID: i32 = 224;
pub const READAHEAD: i32 = 225;
pub const SETXATTR: i32 = 226;
pub const LSETXATTR: i32 = 227;
pub const FSETXATTR: i32 = 228;
pub const GETXATTR: i32 = 229;
pub const LGETXATTR: i32 = 230;
pub const FGETXATTR: i32 = 231;
pub const LISTXATTR: i32 = 232;
pub const LLISTXATTR: i32 = 233;
pub const FLISTXATTR: i32 = 234;
pub const REMOVEXATTR: i32 = 235;
pub const LREMOVEXATTR: i32 = 236;
pub const FREMOVEXATTR: i32 = 237;
pub const TKILL: i32 = 238;
pub const FUTEX: i32 = 240;
pub const SCHED_SETAFFINITY: i32 = 241;
pub const SCHED_GETAFFINITY: i32 = 242;
pub const SET_THREAD_AREA: i32 = 243;
pub const GET_THREAD_AREA: i32 = 244;
pub const IO_SETUP: i32 = 245;
pub const IO_DESTROY: i32 = 246;
pub const IO_GETEVENTS: i32 = 247;
pub const IO_SUBMIT: i32 = 248;
pub const IO_CANCEL: i32 = 249;
pub const FADVISE64: i32 = 250;
pub const EXIT_GROUP: i32 = 252;
pub const LOOKUP_DCOOKIE: i32 = 253;
pub const EPOLL_CREATE: i32 = 254;
pub const EPOLL_CTL: i32 = 255;
pub const EPOLL_WAIT: i32 = 256;
pub const REMAP_FILE_PAGES: i32 = 257;
pub const SET_TID_ADDRESS: i32 = 258;
pub const TIMER_CREATE: i32 = 259;
pub const TIMER_SETTIME: i32 = 260;
pub const TIMER_GETTIME: i32 = 261;
pub const TIMER_GETOVERRUN: i32 = 262;
pub const TIMER_DELETE: i32 = 263;
pub const CLOCK_SETTIME: i32 = 264;
pub const CLOCK_GETTIME: i32 = 265;
pub const CLOCK_GETRES: i32 = 266;
pub const CLOCK_NANOSLEEP: i32 = 267;
pub const TGKILL: i32 = 270;
pub const UTIMES: i32 = 271;
pub const VSERVER: i32 = 273;
pub const MBIND: i32 = 274;
pub const GET_MEMPOLICY: i32 = 275;
pub const SET_MEMPOLICY: i32 = 276;
pub const MQ_OPEN: i32 = 277;
pub const MQ_UNLINK: i32 = 278;
pub const MQ_TIMEDSEND: i32 = 279;
pub const MQ_TIMEDRECEIVE: i32 = 280;
pub const MQ_NOTIFY: i32 = 281;
pub const MQ_GETSETATTR: i32 = 282;
pub const KEXEC_LOAD: i32 = 283;
pub const WAITID: i32 = 284;
pub const ADD_KEY: i32 = 286;
pub const REQUEST_KEY: i32 = 287;
pub const KEYCTL: i32 = 288;
pub const IOPRIO_SET: i32 = 289;
pub const IOPRIO_GET: i32 = 290;
pub const INOTIFY_INIT: i32 = 291;
pub const INOTIFY_ADD_WATCH: i32 = 292;
pub const INOTIFY_RM_WATCH: i32 = 293;
pub const MIGRATE_PAGES: i32 = 294;
pub const OPENAT: i32 = 295;
pub const MKDIRAT: i32 = 296;
pub const MKNODAT: i32 = 297;
pub const FCHOWNAT: i32 = 298;
pub const FUTIMESAT: i32 = 299;
pub const FSTATAT64: i32 = 300;
pub const UNLINKAT: i32 = 301;
pub const RENAMEAT: i32 = 302;
pub const LINKAT: i32 = 303;
pub const SYMLINKAT: i32 = 304;
pub const READLINKAT: i32 = 305;
pub const FCHMODAT: i32 = 306;
pub const FACCESSAT: i32 = 307;
pub const PSELECT6: i32 = 308;
pub const PPOLL: i32 = 309;
pub const UNSHARE: i32 = 310;
pub const SET_ROBUST_LIST: i32 = 311;
pub const GET_ROBUST_LIST: i32 = 312;
pub const SPLICE: i32 = 313;
pub const SYNC_FILE_RANGE: i32 = 314;
pub const TEE: i32 = 315;
pub const VMSPLICE: i32 = 316;
pub const MOVE_PAGES: i32 = 317;
pub const GETCPU: i32 = 318;
pub const EPOLL_PWAIT: i32 = 319;
pub const UTIMENSAT: i32 = 320;
pub const SIGNALFD: i32 = 321;
pub const TIMERFD_CREATE: i32 = 322;
pub const EVENTFD: i32 = 323;
pub const FALLOCATE: i32 = 324;
pub const TIMERFD_SETTIME: i32 = 325;
pub const TIMERFD_GETTIME: i32 = 326;
pub const SIGNALFD4: i32 = 327;
pub const EVENTFD2: i32 = 328;
pub const EPOLL_CREATE1: i32 = 329;
pub const DUP3: i32 = 330;
pub const PIPE2: i32 = 331;
pub const INOTIFY_INIT1: i32 = 332;
pub const PREADV: i32 = 333;
pub const PWRITEV: i32 = 334;
pub const RT_TGSIGQUEUEINFO: i32 = 335;
pub const PERF_EVENT_OPEN: i32 = 336;
pub const RECVMMSG: i32 = 337;
pub const FANOTIFY_INIT: i32 = 338;
pub const FANOTIFY_MARK: i32 = 339;
pub const PRLIMIT64: i32 = 340;
pub const NAME_TO_HANDLE_AT: i32 = 341;
pub const OPEN_BY_HANDLE_AT: i32 = 342;
pub const CLOCK_ADJTIME: i32 = 343;
pub const SYNCFS: i32 = 344;
pub const SENDMMSG: i32 = 345;
pub const SETNS: i32 = 346;
pub const PROCESS_VM_READV: i32 = 347;
pub const PROCESS_VM_WRITEV: i32 = 348;
pub const KCMP: i32 = 349;
pub const FINIT_MODULE: i32 = 350;
pub const SCHED_SETATTR: i32 = 351;
pub const SCHED_GETATTR: i32 = 352;
pub const RENAMEAT2: i32 = 353;
pub const SECCOMP: i32 = 354;
pub const GETRANDOM: i32 = 355;
pub const MEMFD_CREATE: i32 = 356;
pub const BPF: i32 = 357;
pub const EXECVEAT: i32 = 358;
pub const SOCKET: i32 = 359;
pub const SOCKETPAIR: i32 = 360;
pub const BIND: i32 = 361;
pub const CONNECT: i32 = 362;
pub const LISTEN: i32 = 363;
pub const ACCEPT4: i32 = 364;
pub const GETSOCKOPT: i32 = 365;
pub const SETSOCKOPT: i32 = 366;
pub const GETSOCKNAME: i32 = 367;
pub const GETPEERNAME: i32 = 368;
pub const SENDTO: i32 = 369;
pub const SENDMSG: i32 = 370;
pub const RECVFROM: i32 = 371;
pub const RECVMSG: i32 = 372;
pub const SHUTDOWN: i32 = 373;
pub const USERFAULTFD: i32 = 374;
pub const MEMBARRIER: i32 = 375;
pub const MLOCK2: i32 = 376;
pub const COPY_FILE_RANGE: i32 = 377;
pub const PREADV2: i32 = 378;
pub const PWRITEV2: i32 = 379;
pub const PKEY_MPROTECT: i32 = 380;
pub const PKEY_ALLOC: i32 = 381;
pub const PKEY_FREE: i32 = 382;
pub const STATX: i32 = 383;
pub const ARCH_PRCTL: i32 = 384;
pub const IO_PGETEVENTS: i32 = 385;
pub const RSEQ: i32 = 386;
pub const SEMGET: i32 = 393;
pub const SEMCTL: i32 = 394;
pub const SHMGET: i32 = 395;
pub const SHMCTL: i32 = 396;
pub const SHMAT: i32 = 397;
pub const SHMDT: i32 = 398;
pub const MSGGET: i32 = 399;
pub const MSGSND: i32 = 400;
pub const MSGRCV: i32 = 401;
pub const MSGCTL: i32 = 402;
pub const SEMTIMEDOP_TIME64: i32 = 420;
pub const PIDFD_SEND_SIGNAL: i32 = 424;
pub const IO_URING_SETUP: i32 = 425;
pub const IO_URING_ENTER: i32 = 426;
pub const IO_URING_REGISTER: i32 = 427;
pub const OPEN_TREE: i32 = 428;
pub const MOVE_MOUNT: i32 = 429;
pub const FSOPEN: i32 = 430;
pub const FSCONFIG: i32 = 431;
pub const FSMOUNT: i32 = 432;
pub const FSPICK: i32 = 433;
pub const PIDFD_OPEN: i32 = 434;
pub const CLONE3: i32 = 435;
pub const CLOSE_RANGE: i32 = 436;
pub const OPENAT2: i32 = 437;
pub const PIDFD_GETFD: i32 = 438;
pub const FACCESSAT2: i32 = 439;
pub const PROCESS_MADVISE: i32 = 440;
pub const EPOLL_PWAIT2: i32 = 441;
