//! `ember plan` — resolve build paths and flags for one combination.
//!
//! Prints what the external build invocation needs: the build
//! directory, the expected artifacts, and the flag strings, exactly as
//! they should be forwarded.

use std::path::Path;

use anyhow::{anyhow, Result};

use ember_host::Host;
use ember_targets::{
    Arch, BuildConfig, BuildContext, BuildType, LuaJitTarget, PlayerTarget, Target, Toolchain,
    WindowsSdk,
};

/// Resolve a toolchain by name.
pub fn resolve_toolchain(name: &str) -> Option<Toolchain> {
    match name {
        "osx" | "linux" => Some(Toolchain::make(name)),
        "windows" => Some(Toolchain::windows(WindowsSdk::locate())),
        "android" => Some(Toolchain::android()),
        _ => None,
    }
}

pub fn run(
    sdk_root: &Path,
    config: BuildConfig,
    toolchain: &str,
    arch: &str,
    build_type: &str,
) -> Result<()> {
    let toolchain = resolve_toolchain(toolchain).ok_or_else(|| {
        anyhow!("unknown toolchain: '{toolchain}'. Use 'ember target list' to see the known set.")
    })?;
    let arch: Arch = arch.parse()?;
    let build_type: BuildType = build_type.parse()?;

    let ctx = BuildContext::new(sdk_root, config, Host::detect());
    let runtime = LuaJitTarget::new(arch, build_type);
    let player = PlayerTarget::new(arch, build_type, runtime);

    println!(
        "Plan: {} / {} / {} ({}-bit)",
        toolchain.name(),
        arch,
        build_type,
        arch.spec().word_size.bits()
    );
    println!();

    println!("[{}]", runtime.name());
    println!("  build path: {}", runtime.build_path(&toolchain, &ctx).display());
    println!("  library:    {}", runtime.bin_path(&toolchain, &ctx)?.display());
    println!("  include:    {}", runtime.include_path(&ctx).display());
    let runtime_flags = runtime.flags(&toolchain, &ctx)?;
    if runtime_flags.is_empty() {
        println!("  flags:      (none)");
    } else {
        println!("  flags:     {runtime_flags}");
    }
    println!();

    println!("[{}]", player.name());
    println!("  build path: {}", player.build_path(&toolchain, &ctx).display());
    match player.app_path(&toolchain, &ctx) {
        Ok(app) => println!("  app:        {}", app.display()),
        // Player output layouts exist for osx only; the flag string is
        // still valid for the other platforms.
        Err(e) => println!("  app:        unavailable ({e})"),
    }
    println!("  flags:      {}", player.flags(&toolchain, &ctx)?);

    Ok(())
}
