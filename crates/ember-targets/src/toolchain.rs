//! Toolchain model.
//!
//! A toolchain names the platform it builds for and the dialect used to
//! drive the build: make-style command lines, or batch scripts with
//! positional arguments (Windows, and Android whose runtime copy step is
//! a batch script on a Windows host).

use std::env;
use std::path::PathBuf;

use crate::arch::Arch;

/// How a toolchain's build is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainKind {
    /// Unix-style make invocation.
    Make,
    /// Batch-script invocation with positional arguments.
    Batch(BatchPlatform),
}

/// Platform variants behind the batch dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchPlatform {
    /// MSVC build driven through vcvarsall.bat.
    Windows(WindowsSdk),
    /// Prebuilt-library copy driven through a batch script.
    Android,
}

/// A located (or absent) Visual Studio installation.
///
/// Flag computation fails when the installation is absent; carrying the
/// absence as data keeps discovery separate from the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsSdk {
    install_dir: Option<PathBuf>,
}

/// Environment variables announcing a Visual Studio install, newest
/// first. Each points at `<install>/Common7/Tools`.
const COMNTOOLS_VARS: &[&str] = &[
    "VS140COMNTOOLS",
    "VS120COMNTOOLS",
    "VS110COMNTOOLS",
    "VS100COMNTOOLS",
];

impl WindowsSdk {
    /// Wrap a known installation directory.
    pub fn with_install_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: Some(dir.into()),
        }
    }

    /// An installation that could not be found.
    pub fn missing() -> Self {
        Self { install_dir: None }
    }

    /// Scan the conventional `VS*COMNTOOLS` environment variables for an
    /// installation.
    pub fn locate() -> Self {
        for var in COMNTOOLS_VARS {
            let Ok(tools) = env::var(var) else { continue };
            if tools.is_empty() {
                continue;
            }
            // <install>/Common7/Tools -> <install>
            let mut dir = PathBuf::from(tools);
            dir.pop();
            dir.pop();
            if dir.as_os_str().is_empty() {
                continue;
            }
            return Self {
                install_dir: Some(dir),
            };
        }
        Self { install_dir: None }
    }

    /// Path to the build-environment script, if the install was found.
    pub fn vcvarsall(&self) -> Option<PathBuf> {
        self.install_dir
            .as_ref()
            .map(|dir| dir.join("VC").join("vcvarsall.bat"))
    }
}

/// A named toolchain: the platform it builds for plus its invocation
/// dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    name: String,
    kind: ToolchainKind,
}

impl Toolchain {
    /// A make-style toolchain (osx, linux).
    pub fn make(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ToolchainKind::Make,
        }
    }

    /// The Windows batch toolchain, driven through the given SDK.
    pub fn windows(sdk: WindowsSdk) -> Self {
        Self {
            name: "windows".to_string(),
            kind: ToolchainKind::Batch(BatchPlatform::Windows(sdk)),
        }
    }

    /// The Android batch toolchain.
    pub fn android() -> Self {
        Self {
            name: "android".to_string(),
            kind: ToolchainKind::Batch(BatchPlatform::Android),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ToolchainKind {
        &self.kind
    }

    /// The toolchain's own name for an architecture. Windows tooling
    /// calls the 64-bit x86 variant "x64"; everything else uses the
    /// registry identifier.
    pub fn arch_name(&self, arch: Arch) -> &'static str {
        match (&self.kind, arch) {
            (ToolchainKind::Batch(BatchPlatform::Windows(_)), Arch::X86_64) => "x64",
            _ => arch.id(),
        }
    }

    /// Native path separator of the scripts this toolchain drives.
    pub fn path_separator(&self) -> char {
        match self.kind {
            ToolchainKind::Make => '/',
            ToolchainKind::Batch(_) => '\\',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_naming() {
        let linux = Toolchain::make("linux");
        assert_eq!(linux.arch_name(Arch::X86_64), "x86_64");
        assert_eq!(linux.arch_name(Arch::Armv7), "armv7");

        let windows = Toolchain::windows(WindowsSdk::missing());
        assert_eq!(windows.arch_name(Arch::X86_64), "x64");
        assert_eq!(windows.arch_name(Arch::X86), "x86");
    }

    #[test]
    fn separators() {
        assert_eq!(Toolchain::make("osx").path_separator(), '/');
        assert_eq!(Toolchain::android().path_separator(), '\\');
        assert_eq!(
            Toolchain::windows(WindowsSdk::missing()).path_separator(),
            '\\'
        );
    }

    #[test]
    fn vcvarsall_path() {
        let sdk = WindowsSdk::with_install_dir("C:/VS14");
        let script = sdk.vcvarsall().unwrap();
        assert!(script.ends_with(PathBuf::from("VC").join("vcvarsall.bat")));

        assert!(WindowsSdk::missing().vcvarsall().is_none());
    }

    #[test]
    fn locate_without_env_is_missing() {
        // None of the VS*COMNTOOLS variables exist on the test machines
        // we run on; locating should degrade to an absent install.
        for var in COMNTOOLS_VARS {
            if env::var(var).is_ok() {
                return;
            }
        }
        assert!(WindowsSdk::locate().vcvarsall().is_none());
    }
}
