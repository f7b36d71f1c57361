//! Environment Detection.
//!
//! Answers questions about the host the process runs on: operating system
//! family, container, CI, interactive terminal, CPU count. Detections that
//! touch the filesystem or the OS are computed once and memoized in
//! thread-safe `once_cell` statics; the cheap environment-variable helpers
//! are evaluated on every call.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Operating system family of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    Bsd,
    Other,
}

impl OsFamily {
    /// Maps a `std::env::consts::OS` value to its family.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => OsFamily::Windows,
            "macos" | "ios" => OsFamily::MacOs,
            "linux" | "android" => OsFamily::Linux,
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" => OsFamily::Bsd,
            _ => OsFamily::Other,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "windows",
            OsFamily::MacOs => "macos",
            OsFamily::Linux => "linux",
            OsFamily::Bsd => "bsd",
            OsFamily::Other => "other",
        };
        write!(f, "{}", name)
    }
}

static OS_FAMILY: Lazy<OsFamily> = Lazy::new(|| OsFamily::from_os_name(std::env::consts::OS));

static IN_CONTAINER: Lazy<bool> = Lazy::new(|| {
    let detected = detect_container(Path::new("/"));
    debug!(detected, "Container detection");
    detected
});

static CPU_COUNT: Lazy<usize> = Lazy::new(|| {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
});

const CI_VARIABLES: [&str; 5] = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];
const CONTAINER_MARKERS: [&str; 4] = ["docker", "kubepods", "containerd", "lxc"];

/// Operating system family, detected once.
pub fn os_family() -> OsFamily {
    *OS_FAMILY
}

pub fn is_windows() -> bool {
    os_family() == OsFamily::Windows
}

pub fn is_mac() -> bool {
    os_family() == OsFamily::MacOs
}

pub fn is_linux() -> bool {
    os_family() == OsFamily::Linux
}

/// `true` on every Unix-like family (Linux, macOS, BSD).
pub fn is_unix() -> bool {
    cfg!(unix)
}

/// `true` when the process appears to run inside a container. Memoized.
pub fn is_container() -> bool {
    *IN_CONTAINER
}

/// Container detection against an arbitrary filesystem root.
///
/// Looks for `/.dockerenv`, `/run/.containerenv`, or a container runtime
/// name in `/proc/1/cgroup`.
pub fn detect_container(root: &Path) -> bool {
    if root.join(".dockerenv").exists() || root.join("run/.containerenv").exists() {
        return true;
    }
    std::fs::read_to_string(root.join("proc/1/cgroup"))
        .map(|cgroup| CONTAINER_MARKERS.iter().any(|marker| cgroup.contains(marker)))
        .unwrap_or(false)
}

/// `true` when a well-known continuous-integration variable is set to a truthy value.
pub fn is_ci() -> bool {
    CI_VARIABLES.iter().any(|name| match std::env::var(name) {
        Ok(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no" | "off"),
        Err(_) => false,
    })
}

/// `true` when stdout is attached to a terminal.
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Number of logical CPUs available to the process, at least 1. Memoized.
pub fn cpu_count() -> usize {
    *CPU_COUNT
}

/// Reads an environment variable, falling back to `default` when unset or not valid unicode.
pub fn env_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads a boolean environment variable.
///
/// `1`, `true`, `yes`, `on` and `0`, `false`, `no`, `off` are recognized
/// case-insensitively; any other value (or an unset variable) yields `default`.
pub fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|value| parse_bool(&value))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_os_family_matches_cfg() {
        assert_eq!(is_windows(), cfg!(windows));
        assert_eq!(is_linux(), cfg!(target_os = "linux") || cfg!(target_os = "android"));
        assert_eq!(is_mac(), cfg!(target_os = "macos") || cfg!(target_os = "ios"));
        assert_eq!(os_family(), os_family(), "memoized value is stable");
    }

    #[test]
    fn test_os_family_from_name() {
        assert_eq!(OsFamily::from_os_name("freebsd"), OsFamily::Bsd);
        assert_eq!(OsFamily::from_os_name("solaris"), OsFamily::Other);
        assert_eq!(OsFamily::MacOs.to_string(), "macos");
    }

    #[test]
    fn test_detect_container_markers() {
        let root = tempdir().unwrap();
        assert!(!detect_container(root.path()));

        std::fs::create_dir_all(root.path().join("proc/1")).unwrap();
        std::fs::write(root.path().join("proc/1/cgroup"), "0::/init.scope\n").unwrap();
        assert!(!detect_container(root.path()));

        std::fs::write(root.path().join("proc/1/cgroup"), "12:pids:/kubepods/besteffort/pod1\n").unwrap();
        assert!(detect_container(root.path()));
    }

    #[test]
    fn test_detect_container_dockerenv() {
        let root = tempdir().unwrap();
        std::fs::write(root.path().join(".dockerenv"), "").unwrap();
        assert!(detect_container(root.path()));
    }

    #[test]
    fn test_cpu_count_positive() {
        assert!(cpu_count() >= 1);
    }

    #[test]
    fn test_env_var_and_bool() {
        std::env::set_var("TOOLBELT_TEST_ENV_FLAG", " Yes ");
        std::env::set_var("TOOLBELT_TEST_ENV_JUNK", "maybe");
        assert!(env_bool("TOOLBELT_TEST_ENV_FLAG", false));
        assert!(env_bool("TOOLBELT_TEST_ENV_JUNK", true));
        assert!(!env_bool("TOOLBELT_TEST_ENV_UNSET_123", false));
        assert_eq!(env_var("TOOLBELT_TEST_ENV_UNSET_123", "fallback"), "fallback");
        assert_eq!(env_var("TOOLBELT_TEST_ENV_JUNK", "fallback"), "maybe");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("OFF"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(""), None);
    }
}
