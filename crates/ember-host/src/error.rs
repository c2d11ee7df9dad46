//! Tool validation errors.

use semver::Version;
use thiserror::Error;

/// Errors raised while validating host tool versions.
///
/// All of these are fatal configuration errors: the build cannot
/// proceed on a host that fails validation.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The tool did not run at all.
    #[error("{tool} is not installed or not on the lookup path")]
    NotInstalled {
        /// Name of the missing tool.
        tool: String,
    },

    /// The tool ran but its version banner had no parsable version.
    #[error("could not parse {tool} version from: {banner:?}")]
    Unparsable {
        /// Name of the tool.
        tool: String,
        /// The banner line that failed to parse.
        banner: String,
    },

    /// The tool is older than the build scripts support.
    #[error("{tool} {found} is older than the required {required}. {hint}")]
    Outdated {
        /// Name of the tool.
        tool: String,
        /// The version that was found.
        found: Version,
        /// The minimum supported version.
        required: Version,
        /// Where to get a newer one.
        hint: String,
    },

    /// A malformed required-version constant.
    #[error("invalid version requirement: {0}")]
    BadRequirement(#[from] semver::Error),
}

/// Result type for version validation.
pub type Result<T> = std::result::Result<T, VersionError>;
