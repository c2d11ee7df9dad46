//! Error types for target and flag resolution.

use thiserror::Error;

use crate::arch::Arch;

/// Errors raised while resolving build targets and flags.
///
/// Every variant is a fatal configuration error: flag computation aborts
/// rather than emit a partially-resolved command line.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Architecture identifier not present in the registry.
    #[error("unknown architecture: {name}")]
    UnknownArch {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// Architecture registered but not buildable with this toolchain.
    #[error("unsupported architecture for {toolchain}: {arch}")]
    UnsupportedArch {
        /// Toolchain that rejected the architecture.
        toolchain: String,
        /// The rejected architecture.
        arch: Arch,
    },

    /// Toolchain name outside the supported platform set.
    #[error("unsupported platform: {name}")]
    UnsupportedPlatform {
        /// The unrecognized toolchain name.
        name: String,
    },

    /// A required toolchain installation could not be located.
    #[error("missing or unsupported toolchain installation: {detail}")]
    MissingToolchain {
        /// What was looked for and how.
        detail: String,
    },

    /// Build type name outside the known set.
    #[error("unknown build type: {name}")]
    UnknownBuildType {
        /// The name that failed to parse.
        name: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
