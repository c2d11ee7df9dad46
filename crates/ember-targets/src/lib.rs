//! Build-target and flag-resolution model for the Ember SDK.
//!
//! Given an architecture, a build type, and a toolchain, a target
//! deterministically produces its output paths and the exact build
//! arguments that combination needs — including platform quirks such as
//! prebuilt-library substitution on Android and positional batch-script
//! arguments on Windows. Nothing here runs a compiler; the driver
//! forwards the resolved strings to the external build invocation.

pub mod arch;
pub mod build_type;
pub mod config;
pub mod error;
pub mod player;
pub mod runtime;
pub mod target;
pub mod toolchain;

pub use arch::{Arch, ArchSpec, WordSize};
pub use build_type::BuildType;
pub use config::{BuildConfig, BuildContext};
pub use error::TargetError;
pub use player::PlayerTarget;
pub use runtime::LuaJitTarget;
pub use target::Target;
pub use toolchain::{BatchPlatform, Toolchain, ToolchainKind, WindowsSdk};
