//! Bundled application names of an OTP installation
//!
//! An installation's `lib` directory holds one directory per bundled
//! application, named `<app>-<version>` (`stdlib-3.17`, `ssl-10.2`).
//! The resulting name set is passed into the linker as a plain parameter;
//! nothing here is read from ambient global state.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Collect application names bundled under the given library directories
///
/// Directories that cannot be read contribute nothing. Entries without a
/// `-<version>` suffix are ignored; so are plain files.
pub fn bundled_app_names(lib_dirs: &[PathBuf]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for dir in lib_dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            if let Some((app, version)) = dir_name.split_once('-') {
                if !app.is_empty() && !version.is_empty() {
                    names.insert(app.to_string());
                }
            }
        }
    }
    names
}
