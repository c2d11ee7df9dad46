//! The target contract.

use std::path::PathBuf;

use crate::arch::Arch;
use crate::build_type::BuildType;
use crate::config::BuildContext;
use crate::error::Result;
use crate::toolchain::Toolchain;

/// A buildable unit: a fixed source location parameterized by
/// architecture and build type.
///
/// Every operation is a pure function of the target's fields and the
/// supplied toolchain. Targets hold no mutable state, so one instance
/// may serve concurrent flag computations.
pub trait Target {
    /// Unique name of this target kind.
    fn name(&self) -> &'static str;

    /// The architecture this target is built for.
    fn arch(&self) -> Arch;

    /// The requested build type.
    fn build_type(&self) -> BuildType;

    /// Location of the sources to build.
    fn source_path(&self, ctx: &BuildContext) -> PathBuf;

    /// Whether this is a 64-bit build. Derived from the architecture
    /// registry, never overridden per target.
    fn is_64bit(&self) -> bool {
        self.arch().is_64bit()
    }

    /// The `{name}-{toolchain}-{arch}` composition every build
    /// directory name starts from.
    fn base_build_name(&self, toolchain: &Toolchain) -> String {
        format!(
            "{}-{}-{}",
            self.name(),
            toolchain.name(),
            toolchain.arch_name(self.arch())
        )
    }

    /// Directory name of this build. Concrete targets may extend the
    /// base composition (the runtime appends a build-type subdirectory),
    /// but the result must stay unique per
    /// (target, toolchain, architecture, build type).
    fn build_name(&self, toolchain: &Toolchain) -> String {
        self.base_build_name(toolchain)
    }

    /// Root directory all builds land under.
    fn build_root(&self, ctx: &BuildContext) -> PathBuf {
        ctx.build_root()
    }

    /// Output directory of this build.
    fn build_path(&self, toolchain: &Toolchain, ctx: &BuildContext) -> PathBuf {
        self.build_root(ctx).join(self.build_name(toolchain))
    }

    /// Toolchain-specific build arguments. Targets with no extra
    /// arguments return an empty string.
    fn flags(&self, _toolchain: &Toolchain, _ctx: &BuildContext) -> Result<String> {
        Ok(String::new())
    }
}
