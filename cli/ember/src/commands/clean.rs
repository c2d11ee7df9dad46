//! `ember clean` — remove the build tree.

use std::path::Path;

use anyhow::Result;

use ember_fsops::rm_rf_persistent;

/// Remove all build output under the SDK root. Deletes persist through
/// transient file locks.
pub fn run(sdk_root: &Path) -> Result<()> {
    let build_dir = sdk_root.join("build");
    if build_dir.exists() {
        rm_rf_persistent(&build_dir)?;
        println!("Removed {}", build_dir.display());
    } else {
        println!("Already clean: {} does not exist", build_dir.display());
    }
    Ok(())
}
