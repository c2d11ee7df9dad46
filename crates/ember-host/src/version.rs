//! Tool version validation.
//!
//! The build scripts shell out to CMake and friends; building against
//! an outdated or unidentifiable tool produces errors far from their
//! cause, so versions are validated up front. An unparsable version
//! banner is itself a fatal configuration error.

use std::process::Command;

use regex::Regex;
use semver::Version;

use crate::error::{Result, VersionError};

/// Minimum CMake version the SDK build scripts support.
pub const CMAKE_REQUIRED_VERSION: &str = "3.0.0";

/// Extract and parse a `major.minor.patch` version from a tool's
/// version banner line.
pub fn parse_tool_version(tool: &str, banner: &str) -> Result<Version> {
    let pattern = Regex::new(r"(\d+\.\d+\.\d+)").unwrap();
    let unparsable = || VersionError::Unparsable {
        tool: tool.to_string(),
        banner: banner.to_string(),
    };
    let captured = pattern
        .captures(banner)
        .and_then(|caps| caps.get(1))
        .ok_or_else(unparsable)?;
    Version::parse(captured.as_str()).map_err(|_| unparsable())
}

/// Fail when `found` predates `required`.
pub fn check_min_version(tool: &str, found: &Version, required: &str, hint: &str) -> Result<()> {
    let required = Version::parse(required)?;
    if *found < required {
        return Err(VersionError::Outdated {
            tool: tool.to_string(),
            found: found.clone(),
            required,
            hint: hint.to_string(),
        });
    }
    Ok(())
}

/// Run `cmake --version` and parse the reported version.
pub fn cmake_version() -> Result<Version> {
    let output = Command::new("cmake")
        .arg("--version")
        .output()
        .map_err(|_| VersionError::NotInstalled {
            tool: "cmake".to_string(),
        })?;
    if !output.status.success() {
        return Err(VersionError::NotInstalled {
            tool: "cmake".to_string(),
        });
    }
    let banner = String::from_utf8_lossy(&output.stdout);
    let first_line = banner.lines().next().unwrap_or("");
    parse_tool_version("cmake", first_line)
}

/// Validate the host CMake against the required minimum, returning the
/// version that was found.
pub fn check_cmake() -> Result<Version> {
    let found = cmake_version()?;
    check_min_version(
        "cmake",
        &found,
        CMAKE_REQUIRED_VERSION,
        "Install a newer CMake from https://cmake.org/download/.",
    )?;
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cmake_banner() {
        let version = parse_tool_version("cmake", "cmake version 3.22.1").unwrap();
        assert_eq!(version, Version::new(3, 22, 1));
    }

    #[test]
    fn parse_banner_with_suffix() {
        let version = parse_tool_version("cmake", "cmake version 3.28.0-rc1").unwrap();
        assert_eq!(version, Version::new(3, 28, 0));
    }

    #[test]
    fn unparsable_banner_is_fatal() {
        let err = parse_tool_version("cmake", "cmake version unknown").unwrap_err();
        assert!(matches!(err, VersionError::Unparsable { ref tool, .. } if tool == "cmake"));
    }

    #[test]
    fn two_component_version_is_rejected() {
        assert!(parse_tool_version("node", "v20.11").is_err());
    }

    #[test]
    fn minimum_version_check() {
        let found = Version::new(3, 22, 1);
        check_min_version("cmake", &found, "3.0.0", "").unwrap();

        let err = check_min_version("cmake", &Version::new(2, 8, 12), "3.0.0", "upgrade")
            .unwrap_err();
        assert!(matches!(err, VersionError::Outdated { .. }));
        assert!(err.to_string().contains("upgrade"));
    }

    #[test]
    fn equal_version_passes() {
        check_min_version("cmake", &Version::new(3, 0, 0), "3.0.0", "").unwrap();
    }
}
