//! The Ember player target.
//!
//! The SDK's own native application. It links the bundled LuaJIT
//! runtime: the runtime's resolved artifact paths are injected into the
//! player's define string, while the runtime's own build arguments stay
//! the runtime's responsibility.

use std::path::PathBuf;

use crate::arch::Arch;
use crate::build_type::BuildType;
use crate::config::BuildContext;
use crate::error::{Result, TargetError};
use crate::runtime::LuaJitTarget;
use crate::target::Target;
use crate::toolchain::Toolchain;

/// The native player application shipped with the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerTarget {
    arch: Arch,
    build_type: BuildType,
    runtime: LuaJitTarget,
}

impl PlayerTarget {
    pub fn new(arch: Arch, build_type: BuildType, runtime: LuaJitTarget) -> Self {
        Self {
            arch,
            build_type,
            runtime,
        }
    }

    /// Path of the player executable.
    ///
    /// Only the osx bundle layout is specified so far; other platforms
    /// are rejected until their layouts land.
    pub fn bin_path(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<PathBuf> {
        Ok(self
            .app_path(toolchain, ctx)?
            .join("Contents")
            .join("MacOS")
            .join("EmberPlayer"))
    }

    /// Path of the application bundle.
    pub fn app_path(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<PathBuf> {
        match toolchain.name() {
            "osx" => Ok(self
                .build_path(toolchain, ctx)
                .join("application")
                .join(self.build_type.as_str())
                .join("EmberPlayer.app")),
            other => Err(TargetError::UnsupportedPlatform {
                name: other.to_string(),
            }),
        }
    }
}

impl Target for PlayerTarget {
    fn name(&self) -> &'static str {
        "ember"
    }

    fn arch(&self) -> Arch {
        self.arch
    }

    fn build_type(&self) -> BuildType {
        self.build_type
    }

    fn source_path(&self, ctx: &BuildContext) -> PathBuf {
        ctx.sdk_root.clone()
    }

    /// The full define string handed to the player's CMake invocation:
    /// global feature switches plus the resolved runtime artifact paths.
    fn flags(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<String> {
        let config = &ctx.config;
        let jit_lib = self.runtime.bin_path(toolchain, ctx)?;
        let jit_include = self.runtime.include_path(ctx);

        Ok(format!(
            "-DEMBER_BUILD_JIT={} \
             -DEMBER_BUILD_64BIT={} \
             -DLUA_GC_PROFILE_ENABLED={} \
             -DEMBER_BUILD_NUMCORES={} \
             -DEMBER_IS_DEBUG={} \
             -DEMBER_BUILD_WEBVIEW={} \
             -DEMBER_BUILD_TELEMETRY={} \
             -DLUAJIT_LIB=\"{}\" \
             -DLUAJIT_INCLUDE_DIR=\"{}\"",
            u8::from(config.use_jit),
            u8::from(self.is_64bit()),
            u8::from(config.enable_gc_profile),
            ctx.host.num_cores,
            u8::from(self.build_type.is_debug()),
            u8::from(config.build_webview),
            u8::from(config.build_telemetry),
            jit_lib.display(),
            jit_include.display(),
        ))
    }
}
