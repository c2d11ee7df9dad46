//! Ember CLI — build orchestration for the Ember SDK.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use manifest::EmberManifest;

#[derive(Parser)]
#[command(name = "ember", version, about = "Build orchestration for the Ember SDK")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve build paths and flags for a toolchain/architecture pair
    Plan {
        /// Toolchain name (osx, linux, windows, android)
        #[arg(long)]
        toolchain: String,
        /// Architecture (x86, x86_64, armv7, arm64)
        #[arg(long)]
        arch: String,
        /// Build type (Debug, Release, RelWithDebInfo, MinSizeRel)
        #[arg(long, default_value = "Release")]
        build_type: String,
    },
    /// Check host tools and project status
    Doctor,
    /// Remove the build tree
    Clean,
    /// Inspect registered architectures and toolchains
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List architectures and toolchains
    List,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Plan {
            toolchain,
            arch,
            build_type,
        } => {
            let (manifest, sdk_root) = load_manifest_optional(&cwd)?;
            let sdk_root = sdk_root.unwrap_or(cwd);
            let config = manifest.map(|m| m.build).unwrap_or_default();
            commands::plan::run(&sdk_root, config, &toolchain, &arch, &build_type)
        }

        Commands::Doctor => commands::doctor::run(&cwd),

        Commands::Clean => {
            let (_, sdk_root) = load_manifest_optional(&cwd)?;
            let sdk_root = sdk_root.unwrap_or(cwd);
            commands::clean::run(&sdk_root)
        }

        Commands::Target { action } => match action {
            TargetAction::List => commands::target::list(),
        },
    }
}

/// Try to load a manifest from the current directory upward. Returns
/// (None, None) when there is no checkout to anchor on.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<(Option<EmberManifest>, Option<PathBuf>)> {
    match EmberManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
