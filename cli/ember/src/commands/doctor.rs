//! `ember doctor` — host and toolchain diagnostics.

use std::path::Path;

use anyhow::Result;

use ember_host::{check_cmake, Host, HostFamily, CMAKE_REQUIRED_VERSION};

use crate::manifest::EmberManifest;

/// Print host and toolchain diagnostic information.
pub fn run(start_dir: &Path) -> Result<()> {
    println!("=== Ember Doctor ===");
    println!();

    println!("Ember version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let host = Host::detect();
    println!("--- Host ---");
    println!("  cores:  {}", host.num_cores);
    println!(
        "  family: {}",
        match host.family {
            HostFamily::Windows => "windows",
            HostFamily::Unix => "unix",
        }
    );
    println!();

    println!("--- System Tools ---");
    match check_cmake() {
        Ok(version) => println!("  cmake: {version} (>= {CMAKE_REQUIRED_VERSION} required)"),
        Err(e) => println!("  cmake: {e}"),
    }
    for tool in ["make", "git"] {
        println!(
            "  {tool}: {}",
            if host.tool_installed(tool) {
                "found"
            } else {
                "not found"
            }
        );
    }
    println!();

    println!("--- Project Status ---");
    match EmberManifest::find_and_load(start_dir) {
        Ok(Some((manifest, dir))) => {
            println!("  ember.toml: found at {}", dir.display());
            println!("  Project:    {}", manifest.project.name);
            println!("  Version:    {}", manifest.project.version);
        }
        Ok(None) => {
            println!("  ember.toml: not found");
        }
        Err(e) => {
            println!("  ember.toml: error — {e}");
        }
    }

    Ok(())
}
