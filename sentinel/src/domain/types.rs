//! Newtype wrappers for process-level identifiers

use std::fmt;

use serde::Serialize;

/// Process ID (TGID in Linux terms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pid(pub i32);

impl Pid {
    /// The init process, whose namespaces describe the host
    pub const INIT: Pid = Pid(1);
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PID:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_display() {
        assert_eq!(Pid::INIT.to_string(), "PID:1");
    }
}
