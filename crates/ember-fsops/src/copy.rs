//! Copy helpers tolerant of missing sources.
//!
//! Packaging copies optional artifacts (per-platform resources, icons)
//! that may legitimately be absent, so a missing source is a no-op, not
//! an error.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Recursively copy `src` into the directory `dst`, creating it first.
/// Does nothing when `src` does not exist.
pub fn copy_tree_if_exists(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        return Ok(());
    }
    fs::create_dir_all(dst)?;
    let target = match src.file_name() {
        Some(name) => dst.join(name),
        None => dst.to_path_buf(),
    };
    copy_tree(src, &target)
}

/// Copy a single file to the path `dst`, creating parent directories.
/// Does nothing when `src` does not exist.
pub fn copy_file_if_exists(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        return Ok(());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;
    Ok(())
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        fs::create_dir_all(dst)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_tree(&entry.path(), &dst.join(entry.file_name()))?;
        }
    } else {
        fs::copy(src, dst)?;
    }
    Ok(())
}
