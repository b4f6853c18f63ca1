//! Pre-flight checks for sentinel
//!
//! Namespace bootstrap never fails outright: unreadable entries become 0.
//! These checks catch the usual reasons for an all-zero event up front and
//! say how to fix them.

#![allow(unsafe_code)] // geteuid() requires unsafe

use anyhow::{bail, Result};
use log::warn;
use std::path::Path;

/// Run all pre-flight checks before collecting namespaces from `ns_dir`
///
/// Only warns: an unusable `ns_dir` still yields an all-zero event.
pub fn run_preflight_checks(ns_dir: &Path, quiet: bool) {
    if let Err(e) = check_ns_dir(ns_dir) {
        warn!("{e:#}");
        return;
    }
    if !quiet {
        check_privileges(ns_dir);
    }
}

/// Reading another process's namespace links needs root (or `CAP_SYS_PTRACE`)
fn check_privileges(ns_dir: &Path) {
    if !ns_dir.starts_with("/proc") {
        return;
    }
    if unsafe { libc::geteuid() } == 0 {
        return;
    }
    warn!(
        "Not running as root: namespace links under {} are usually unreadable \
         and will be reported as 0. Run with: sudo sentinel init-ns",
        ns_dir.display()
    );
}

fn check_ns_dir(ns_dir: &Path) -> Result<()> {
    if !ns_dir.exists() {
        bail!(
            "Namespace directory not found: {}\n\n\
             Is /proc mounted? Use --dir to point at another namespace directory.\n\
             Every namespace will be reported as 0.",
            ns_dir.display()
        );
    }
    if !ns_dir.is_dir() {
        bail!(
            "Not a directory: {}\n\n\
             --dir must point to a directory of namespace links such as /proc/1/ns.",
            ns_dir.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_warns_without_failing() {
        run_preflight_checks(Path::new("/nonexistent/ns"), true);
        let err = check_ns_dir(Path::new("/nonexistent/ns")).unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_file_is_not_a_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        run_preflight_checks(file.path(), true);
        let err = check_ns_dir(file.path()).unwrap_err().to_string();
        assert!(err.contains("Not a directory"));
    }

    #[test]
    fn test_scratch_dir_passes() {
        let dir = tempfile::tempdir().unwrap();
        run_preflight_checks(dir.path(), false);
        assert!(check_ns_dir(dir.path()).is_ok());
    }
}
