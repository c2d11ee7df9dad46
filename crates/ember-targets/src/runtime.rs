//! The bundled LuaJIT runtime target.
//!
//! LuaJIT is vendored with the SDK and built once per toolchain,
//! architecture, and build type. Make-style toolchains build it from a
//! plain command line; Windows drives msvcbuild through a batch script
//! with positional arguments; Android never compiles it at all and
//! instead copies a library out of the vendored prebuilt tree.

use std::path::{Path, PathBuf};

use crate::arch::Arch;
use crate::build_type::BuildType;
use crate::config::BuildContext;
use crate::error::{Result, TargetError};
use crate::target::Target;
use crate::toolchain::{BatchPlatform, Toolchain, ToolchainKind, WindowsSdk};

/// Build types with a vendored prebuilt library. Anything else falls
/// back to Release.
const PREBUILT_TYPES: &[BuildType] = &[BuildType::Release, BuildType::Debug];

/// The bundled LuaJIT runtime, built (or copied prebuilt) per toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuaJitTarget {
    arch: Arch,
    build_type: BuildType,
}

impl LuaJitTarget {
    pub fn new(arch: Arch, build_type: BuildType) -> Self {
        Self { arch, build_type }
    }

    /// Path of the built static library.
    pub fn bin_path(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<PathBuf> {
        self.bin_path_for(toolchain, ctx, self.build_type)
    }

    /// Header directory consumers compile against.
    pub fn include_path(&self, ctx: &BuildContext) -> PathBuf {
        self.source_path(ctx).join("src")
    }

    /// Static library filename per platform.
    fn lib_name(&self, toolchain: &Toolchain) -> Result<&'static str> {
        match toolchain.name() {
            "windows" => Ok("lua51.lib"),
            "osx" | "linux" | "android" => Ok("libluajit-5.1.a"),
            other => Err(TargetError::UnsupportedPlatform {
                name: other.to_string(),
            }),
        }
    }

    /// Library path relative to the build root, with the build type as
    /// an explicit parameter so the prebuilt fallback can resolve an
    /// alternate type without touching the target.
    fn relative_bin_path(&self, toolchain: &Toolchain, build_type: BuildType) -> Result<PathBuf> {
        let lib = self.lib_name(toolchain)?;
        Ok(PathBuf::from(self.build_name_for(toolchain, build_type))
            .join("lib")
            .join(lib))
    }

    fn bin_path_for(
        &self,
        toolchain: &Toolchain,
        ctx: &BuildContext,
        build_type: BuildType,
    ) -> Result<PathBuf> {
        Ok(self
            .build_root(ctx)
            .join(self.relative_bin_path(toolchain, build_type)?))
    }

    fn build_name_for(&self, toolchain: &Toolchain, build_type: BuildType) -> String {
        format!("{}/{}", self.base_build_name(toolchain), build_type)
    }

    fn make_flags(&self, ctx: &BuildContext) -> String {
        if ctx.config.enable_gc_profile {
            " -DLUA_GC_PROFILE_ENABLED".to_string()
        } else {
            String::new()
        }
    }

    /// Positional arguments for the Windows build script:
    /// %1 vcvarsall.bat path, %2 vcvarsall architecture, %3 msvcbuild
    /// extra arguments, %4 output lib directory, %5.. additional
    /// compiler defines.
    fn windows_flags(
        &self,
        sdk: &WindowsSdk,
        toolchain: &Toolchain,
        ctx: &BuildContext,
    ) -> Result<String> {
        let vcvarsall = sdk.vcvarsall().ok_or_else(|| TargetError::MissingToolchain {
            detail: "no Visual Studio installation found".to_string(),
        })?;

        let arch_token = match self.arch {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_amd64",
            other => {
                return Err(TargetError::UnsupportedArch {
                    toolchain: toolchain.name().to_string(),
                    arch: other,
                })
            }
        };

        let build_token = match self.build_type {
            BuildType::Debug => "debug",
            _ => "\"\"",
        };

        let bin = self.bin_path(toolchain, ctx)?;
        let out_dir = parent_dir(&bin);

        let mut args = format!(
            "\"{}\" {} {} \"{}\"",
            vcvarsall.display(),
            arch_token,
            build_token,
            out_dir.display()
        );
        if ctx.config.enable_gc_profile {
            args.push_str(" /DLUA_GC_PROFILE_ENABLED");
        }
        Ok(args)
    }

    /// Positional arguments for the Android copy script: %1 prebuilt
    /// source library, %2 destination lib directory.
    fn android_flags(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<String> {
        // Resolve the prebuilt library under a supported build type; the
        // requested type still names the destination.
        let prebuilt_type = if PREBUILT_TYPES.contains(&self.build_type) {
            self.build_type
        } else {
            BuildType::Release
        };

        let relative = self.relative_bin_path(toolchain, prebuilt_type)?;
        let prebuilt = ctx.vendor_path("luajit-prebuilt").join(relative);

        let bin = self.bin_path(toolchain, ctx)?;
        let dest_dir = parent_dir(&bin);

        let sep = toolchain.path_separator();
        Ok(format!(
            "\"{}\" \"{}\"",
            script_path(&prebuilt, sep),
            script_path(&dest_dir, sep)
        ))
    }
}

impl Target for LuaJitTarget {
    fn name(&self) -> &'static str {
        "luajit"
    }

    fn arch(&self) -> Arch {
        self.arch
    }

    fn build_type(&self) -> BuildType {
        self.build_type
    }

    fn source_path(&self, ctx: &BuildContext) -> PathBuf {
        ctx.vendor_path("luajit")
    }

    fn build_name(&self, toolchain: &Toolchain) -> String {
        self.build_name_for(toolchain, self.build_type)
    }

    fn flags(&self, toolchain: &Toolchain, ctx: &BuildContext) -> Result<String> {
        match toolchain.kind() {
            ToolchainKind::Make => Ok(self.make_flags(ctx)),
            ToolchainKind::Batch(BatchPlatform::Windows(sdk)) => {
                self.windows_flags(sdk, toolchain, ctx)
            }
            ToolchainKind::Batch(BatchPlatform::Android) => self.android_flags(toolchain, ctx),
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().unwrap_or_else(|| Path::new("")).to_path_buf()
}

/// Render a path with the toolchain's native separator. The batch
/// scripts choke on forward slashes.
fn script_path(path: &Path, sep: char) -> String {
    let rendered = path.display().to_string();
    if sep == '/' {
        rendered
    } else {
        rendered.replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use ember_host::Host;

    fn ctx() -> BuildContext {
        BuildContext::new("/sdk", BuildConfig::default(), Host::with_cores(4))
    }

    fn ctx_with_profiling() -> BuildContext {
        let config = BuildConfig {
            enable_gc_profile: true,
            ..BuildConfig::default()
        };
        BuildContext::new("/sdk", config, Host::with_cores(4))
    }

    fn windows_toolchain() -> Toolchain {
        Toolchain::windows(WindowsSdk::with_install_dir("C:/VS14"))
    }

    #[test]
    fn build_name_appends_build_type() {
        let jit = LuaJitTarget::new(Arch::X86_64, BuildType::Debug);
        let linux = Toolchain::make("linux");
        assert_eq!(jit.build_name(&linux), "luajit-linux-x86_64/Debug");
    }

    #[test]
    fn bin_path_per_platform() {
        let jit = LuaJitTarget::new(Arch::X86, BuildType::Release);
        let ctx = ctx();

        let windows = jit.bin_path(&windows_toolchain(), &ctx).unwrap();
        assert!(windows.ends_with("lib/lua51.lib"));

        let osx = jit.bin_path(&Toolchain::make("osx"), &ctx).unwrap();
        assert!(osx.ends_with("lib/libluajit-5.1.a"));
        assert!(osx.starts_with("/sdk/build"));
    }

    #[test]
    fn bin_path_rejects_unknown_platform() {
        let jit = LuaJitTarget::new(Arch::X86, BuildType::Release);
        let err = jit.bin_path(&Toolchain::make("haiku"), &ctx()).unwrap_err();
        assert!(matches!(err, TargetError::UnsupportedPlatform { ref name } if name == "haiku"));
    }

    #[test]
    fn include_path_is_fixed() {
        let jit = LuaJitTarget::new(Arch::Arm64, BuildType::Release);
        assert_eq!(
            jit.include_path(&ctx()),
            PathBuf::from("/sdk/vendor/luajit/src")
        );
    }

    #[test]
    fn make_flags_follow_profile_switch() {
        let jit = LuaJitTarget::new(Arch::X86_64, BuildType::Release);
        let linux = Toolchain::make("linux");

        assert_eq!(jit.flags(&linux, &ctx()).unwrap(), "");
        assert_eq!(
            jit.flags(&linux, &ctx_with_profiling()).unwrap(),
            " -DLUA_GC_PROFILE_ENABLED"
        );
    }

    #[test]
    fn windows_flags_positional_order() {
        let jit = LuaJitTarget::new(Arch::X86_64, BuildType::Debug);
        let toolchain = windows_toolchain();
        let flags = jit.flags(&toolchain, &ctx()).unwrap();

        let expected_out = parent_dir(&jit.bin_path(&toolchain, &ctx()).unwrap());
        assert_eq!(
            flags,
            format!(
                "\"C:/VS14/VC/vcvarsall.bat\" x86_amd64 debug \"{}\"",
                expected_out.display()
            )
        );
    }

    #[test]
    fn windows_flags_release_uses_empty_token() {
        let jit = LuaJitTarget::new(Arch::X86, BuildType::Release);
        let flags = jit.flags(&windows_toolchain(), &ctx()).unwrap();
        assert!(flags.contains(" x86 \"\" "));
        assert!(!flags.contains("debug"));
    }

    #[test]
    fn windows_flags_profiling_define() {
        let jit = LuaJitTarget::new(Arch::X86_64, BuildType::Release);
        let with = jit
            .flags(&windows_toolchain(), &ctx_with_profiling())
            .unwrap();
        assert!(with.ends_with(" /DLUA_GC_PROFILE_ENABLED"));

        let without = jit.flags(&windows_toolchain(), &ctx()).unwrap();
        assert!(!without.contains("LUA_GC_PROFILE_ENABLED"));
    }

    #[test]
    fn windows_flags_reject_arm() {
        let jit = LuaJitTarget::new(Arch::Armv7, BuildType::Release);
        let err = jit.flags(&windows_toolchain(), &ctx()).unwrap_err();
        assert!(matches!(err, TargetError::UnsupportedArch { arch, .. } if arch == Arch::Armv7));
    }

    #[test]
    fn windows_flags_require_installation() {
        let jit = LuaJitTarget::new(Arch::X86, BuildType::Release);
        let toolchain = Toolchain::windows(WindowsSdk::missing());
        let err = jit.flags(&toolchain, &ctx()).unwrap_err();
        assert!(matches!(err, TargetError::MissingToolchain { .. }));
    }

    #[test]
    fn android_flags_copy_prebuilt() {
        let jit = LuaJitTarget::new(Arch::Armv7, BuildType::Release);
        let flags = jit.flags(&Toolchain::android(), &ctx()).unwrap();
        assert_eq!(
            flags,
            "\"\\sdk\\vendor\\luajit-prebuilt\\luajit-android-armv7\\Release\\lib\\libluajit-5.1.a\" \
             \"\\sdk\\build\\luajit-android-armv7\\Release\\lib\""
        );
    }

    #[test]
    fn android_unsupported_type_falls_back_to_release() {
        let android = Toolchain::android();
        let ctx = ctx();

        let fallback = LuaJitTarget::new(Arch::Armv7, BuildType::RelWithDebInfo);
        let explicit = LuaJitTarget::new(Arch::Armv7, BuildType::Release);

        let fallback_flags = fallback.flags(&android, &ctx).unwrap();
        let explicit_flags = explicit.flags(&android, &ctx).unwrap();

        // Same prebuilt source library in slot %1.
        let source = |flags: &str| flags.split("\" \"").next().map(str::to_string);
        assert_eq!(source(&fallback_flags), source(&explicit_flags));

        // The destination still honors the requested build type, and the
        // target's declared build type is untouched.
        assert!(fallback_flags.contains("RelWithDebInfo\\lib\""));
        assert_eq!(fallback.build_type(), BuildType::RelWithDebInfo);
    }

    #[test]
    fn android_debug_prebuilt_is_used_directly() {
        let jit = LuaJitTarget::new(Arch::Arm64, BuildType::Debug);
        let flags = jit.flags(&Toolchain::android(), &ctx()).unwrap();
        assert!(flags.starts_with("\"\\sdk\\vendor\\luajit-prebuilt\\luajit-android-arm64\\Debug"));
    }

    #[test]
    fn build_paths_are_unique_per_combination() {
        use std::collections::HashSet;

        let toolchains = [
            Toolchain::make("osx"),
            Toolchain::make("linux"),
            windows_toolchain(),
            Toolchain::android(),
        ];
        let build_types = [
            BuildType::Debug,
            BuildType::Release,
            BuildType::RelWithDebInfo,
            BuildType::MinSizeRel,
        ];

        let ctx = ctx();
        let mut paths = HashSet::new();
        let mut combinations = 0;
        for toolchain in &toolchains {
            for arch in Arch::all() {
                for build_type in build_types {
                    let jit = LuaJitTarget::new(arch, build_type);
                    paths.insert(jit.build_path(toolchain, &ctx));
                    combinations += 1;
                }
            }
        }
        assert_eq!(paths.len(), combinations);

        // Other target kinds never collide with the runtime's builds.
        for toolchain in &toolchains {
            for arch in Arch::all() {
                let jit = LuaJitTarget::new(arch, BuildType::Release);
                let player = crate::player::PlayerTarget::new(arch, BuildType::Release, jit);
                assert!(!paths.contains(&player.build_path(toolchain, &ctx)));
            }
        }
    }
}
