//! Global build configuration.
//!
//! The configuration is an explicit value threaded into every flag
//! computation, never ambient process state. Switches render as `0`/`1`
//! in flag strings, matching what the CMake scripts expect.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ember_host::Host;

/// Feature switches shared by every target's flag computation.
///
/// Maps onto the `[build]` table of `ember.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build the player against the JIT-enabled runtime.
    pub use_jit: bool,
    /// Compile the runtime with garbage-collector profiling hooks.
    pub enable_gc_profile: bool,
    /// Include the embedded webview feature.
    pub build_webview: bool,
    /// Include the telemetry feature.
    pub build_telemetry: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            use_jit: true,
            enable_gc_profile: false,
            build_webview: true,
            build_telemetry: true,
        }
    }
}

/// The fixed, process-wide inputs of a build computation: where the SDK
/// checkout lives, the feature configuration, and the host description.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Root of the SDK source tree.
    pub sdk_root: PathBuf,
    /// Global feature switches.
    pub config: BuildConfig,
    /// The machine driving the build.
    pub host: Host,
}

impl BuildContext {
    pub fn new(sdk_root: impl Into<PathBuf>, config: BuildConfig, host: Host) -> Self {
        Self {
            sdk_root: sdk_root.into(),
            config,
            host,
        }
    }

    /// The directory all build output lands under.
    pub fn build_root(&self) -> PathBuf {
        self.sdk_root.join("build")
    }

    /// Path of a vendored dependency tree.
    pub fn vendor_path(&self, name: &str) -> PathBuf {
        self.sdk_root.join("vendor").join(name)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn default_switches() {
        let config = BuildConfig::default();
        assert!(config.use_jit);
        assert!(!config.enable_gc_profile);
        assert!(config.build_webview);
        assert!(config.build_telemetry);
    }

    #[test]
    fn context_paths() {
        let ctx = BuildContext::new("/sdk", BuildConfig::default(), Host::with_cores(4));
        assert_eq!(ctx.build_root(), Path::new("/sdk/build"));
        assert_eq!(ctx.vendor_path("luajit"), Path::new("/sdk/vendor/luajit"));
    }
}
