//! Persistent recursive delete.
//!
//! Windows hosts intermittently hold freshly-written files open
//! (indexers, antivirus), so a failing delete is retried up to a hard
//! ceiling before escalating. A file that is already gone counts as
//! deleted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{FsError, Result};

/// Retry schedule for deletes that hit transient errors.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total time allowed per stubborn file before escalating.
    pub time_limit: Duration,
    /// Pause between attempts.
    pub poll_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Delete a directory tree, retrying stubborn files per the default
/// schedule (one minute at one-second intervals).
pub fn rm_rf_persistent(path: &Path) -> Result<()> {
    rm_rf_persistent_with(path, RetryPolicy::default())
}

/// [`rm_rf_persistent`] with an explicit retry schedule.
pub fn rm_rf_persistent_with(path: &Path, policy: RetryPolicy) -> Result<()> {
    remove_files(path, policy, &mut |file| fs::remove_file(file))?;
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Delete every file under `root` through `remove`, retrying per
/// `policy`. Directories are left for the caller to sweep.
fn remove_files(
    root: &Path,
    policy: RetryPolicy,
    remove: &mut dyn FnMut(&Path) -> io::Result<()>,
) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    for file in collect_files(root)? {
        remove_with_retry(&file, policy, remove)?;
    }
    Ok(())
}

fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = vec![root.to_path_buf()];
    let mut files = Vec::new();
    while let Some(dir) = dirs.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            } else {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn remove_with_retry(
    file: &Path,
    policy: RetryPolicy,
    remove: &mut dyn FnMut(&Path) -> io::Result<()>,
) -> Result<()> {
    let mut started: Option<Instant> = None;
    loop {
        match remove(file) {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(_) => {
                let start = *started.get_or_insert_with(Instant::now);
                if start.elapsed() >= policy.time_limit {
                    return Err(FsError::Timeout {
                        path: file.to_path_buf(),
                    });
                }
                thread::sleep(policy.poll_interval);
            }
        }
    }
}
