//! `ember target` — enumerate architectures and toolchains.

use anyhow::Result;

use ember_targets::Arch;

/// Known toolchain names with a short description of their dialect.
pub fn builtin_toolchains() -> Vec<(&'static str, &'static str)> {
    vec![
        ("osx", "make-style; builds the player bundle"),
        ("linux", "make-style"),
        ("windows", "batch scripts through vcvarsall.bat"),
        ("android", "batch scripts; prebuilt runtime library"),
    ]
}

/// List registered architectures and known toolchains.
pub fn list() -> Result<()> {
    println!("Architectures:");
    for arch in Arch::all() {
        let spec = arch.spec();
        println!("  {:8} {}-bit", spec.id, spec.word_size.bits());
    }
    println!();
    println!("Toolchains:");
    for (name, description) in builtin_toolchains() {
        println!("  {name:8} {description}");
    }
    Ok(())
}
