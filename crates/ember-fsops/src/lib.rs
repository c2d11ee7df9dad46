//! Filesystem helpers for SDK packaging.
//!
//! Copy helpers tolerant of missing sources, a recursive delete that
//! outlasts transient file locks, and zip extraction preserving
//! relative paths.

pub mod copy;
pub mod error;
pub mod remove;
pub mod unzip;

pub use copy::{copy_file_if_exists, copy_tree_if_exists};
pub use error::FsError;
pub use remove::{rm_rf_persistent, rm_rf_persistent_with, RetryPolicy};
pub use unzip::unzip;
