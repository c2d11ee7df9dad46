//! Host machine introspection and tool-version validation.
//!
//! Describes the machine running the build orchestration (core count,
//! OS family, tool lookup) and validates the versions of the external
//! tools the build shells out to.

pub mod error;
pub mod host;
pub mod version;

pub use error::VersionError;
pub use host::{Host, HostFamily};
pub use version::{
    check_cmake, check_min_version, cmake_version, parse_tool_version, CMAKE_REQUIRED_VERSION,
};
