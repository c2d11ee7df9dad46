//! Zip archive extraction.

use std::fs;
use std::io;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{FsError, Result};

/// Extract `archive` into `dest`, preserving entry-relative paths and
/// creating parent directories as needed. Entries that would resolve
/// outside `dest` are rejected.
pub fn unzip(archive: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(archive)?;
    let mut zip = ZipArchive::new(file)?;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(FsError::InvalidEntry {
                name: entry.name().to_string(),
            });
        };
        let out_path = dest.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}
