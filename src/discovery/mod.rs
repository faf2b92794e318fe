//! OTP application discovery across a Rebar3 project tree
//!
//! Discovery starts at the project root, which must itself be an
//! application directory or a release aggregate; anything else yields an
//! empty set. The conventional subdirectories are then walked in a fixed
//! order — `examples` (opt-in), `_checkouts`, `apps`, `lib`,
//! `_build/default` — each to a bounded depth, and every directory holding
//! an application resource file (or aggregating applications) produces one
//! [`OtpApp`] tagged after the subdirectory it was found under.
//!
//! The walk is synchronous and single-owner: the [`DiscoverySet`] being
//! built is touched only by the in-flight run. Cancellation is cooperative
//! (one check per visited entry) and returns the partial set accumulated
//! so far, which is a prefix in traversal order of the uncancelled result.

pub mod app;
pub mod cancel;
pub mod options;

pub use app::{AppType, OtpApp};
pub use cancel::CancelToken;
pub use options::DiscoverOptions;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{RebarMapError, Result};
use crate::progress::ScanProgress;

/// Insertion-ordered, duplicate-free collection of discovered applications
///
/// Scoped to one discovery run. Iteration order is traversal order until
/// [`DiscoverySet::sort_for_display`] is called.
#[derive(Debug, Clone, Default)]
pub struct DiscoverySet {
    apps: Vec<OtpApp>,
}

impl DiscoverySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor unless an equal one (same name and root) is present
    pub fn insert(&mut self, app: OtpApp) -> bool {
        if self.apps.contains(&app) {
            return false;
        }
        self.apps.push(app);
        true
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn apps(&self) -> &[OtpApp] {
        &self.apps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OtpApp> {
        self.apps.iter()
    }

    /// Order case-insensitively by name, ties broken by root path
    pub fn sort_for_display(&mut self) {
        self.apps.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.root.cmp(&b.root))
        });
    }

    /// Select a subset of this set by application name
    ///
    /// An empty name list selects everything. Every requested name must
    /// be present in the set; all descriptors carrying a requested name
    /// are selected (conflicting roots included, so conflicts stay
    /// visible to the linker).
    ///
    /// # Errors
    ///
    /// Returns [`RebarMapError::AppNotFound`] for a name this set does
    /// not contain.
    pub fn select(&self, names: &[String]) -> Result<Vec<OtpApp>> {
        if names.is_empty() {
            return Ok(self.apps.clone());
        }
        for name in names {
            if !self.apps.iter().any(|app| &app.name == name) {
                return Err(RebarMapError::AppNotFound { name: name.clone() });
            }
        }
        Ok(self
            .apps
            .iter()
            .filter(|app| names.contains(&app.name))
            .cloned()
            .collect())
    }
}

impl IntoIterator for DiscoverySet {
    type Item = OtpApp;
    type IntoIter = std::vec::IntoIter<OtpApp>;

    fn into_iter(self) -> Self::IntoIter {
        self.apps.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiscoverySet {
    type Item = &'a OtpApp;
    type IntoIter = std::slice::Iter<'a, OtpApp>;

    fn into_iter(self) -> Self::IntoIter {
        self.apps.iter()
    }
}

/// Discover the OTP applications of a Rebar3 project
///
/// Returns an empty set when the root is not importable (neither an
/// application nor a release aggregate). The result is in traversal
/// order; call [`DiscoverySet::sort_for_display`] for presentation.
pub fn discover(
    project_root: &Path,
    options: &DiscoverOptions,
    cancel: &CancelToken,
    progress: Option<&ScanProgress>,
) -> DiscoverySet {
    let mut found = DiscoverySet::new();

    let Some(root_app) = classify_dir(project_root, AppType::Project) else {
        return found;
    };
    found.insert(root_app);

    let mut planned: Vec<(PathBuf, AppType)> = Vec::new();
    if options.include_examples {
        planned.push((project_root.join("examples"), AppType::Example));
    }
    planned.push((project_root.join("_checkouts"), AppType::Dependency));
    planned.push((project_root.join("apps"), AppType::Project));
    planned.push((project_root.join("lib"), AppType::Project));
    planned.push((project_root.join("_build").join("default"), AppType::Dependency));

    for (dir, app_type) in planned {
        if !scan_subdir(&mut found, &dir, app_type, options, cancel, progress) {
            break;
        }
    }

    found
}

/// Walk one conventional subdirectory, adding every qualifying directory
///
/// Returns `false` when the run was cancelled mid-walk.
fn scan_subdir(
    found: &mut DiscoverySet,
    dir: &Path,
    app_type: AppType,
    options: &DiscoverOptions,
    cancel: &CancelToken,
    progress: Option<&ScanProgress>,
) -> bool {
    if !dir.is_dir() {
        return true;
    }

    let walker = WalkDir::new(dir)
        .max_depth(options.max_depth)
        .follow_links(false)
        .sort_by(|a, b| {
            let a_name = a.file_name().to_string_lossy().to_lowercase();
            let b_name = b.file_name().to_string_lossy().to_lowercase();
            a_name.cmp(&b_name).then_with(|| a.path().cmp(b.path()))
        });

    let skip_dirs = &options.skip_dirs;
    for entry in walker
        .into_iter()
        .filter_entry(|e| !is_skipped(e, skip_dirs))
    {
        if cancel.is_cancelled() {
            return false;
        }
        let Ok(entry) = entry else {
            continue;
        };
        if let Some(progress) = progress {
            progress.visit(entry.path());
        }
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Some(app) = classify_dir(entry.path(), app_type) {
            found.insert(app);
        }
    }
    true
}

fn is_skipped(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.file_type().is_symlink()
        || skip_dirs.iter().any(|d| entry.file_name() == OsStr::new(d))
}

/// Classify a directory as an application, a release aggregate, or neither
///
/// A directory with a resource file becomes an application of the given
/// type. A directory aggregating applications (an `apps` child, or a
/// `_build` directory with a `lib` child) becomes a release root
/// regardless of the requested type. Everything else is skipped.
fn classify_dir(dir: &Path, app_type: AppType) -> Option<OtpApp> {
    if let Some(resource_file) = find_app_resource_file(dir) {
        return Some(OtpApp::from_resource_file(app_type, dir, &resource_file));
    }

    let aggregates = dir.join("apps").is_dir()
        || (dir.file_name() == Some(OsStr::new("_build")) && dir.join("lib").is_dir());
    aggregates.then(|| OtpApp::release_root(dir))
}

/// Find a directory's application resource file
///
/// `src/*.app.src` wins over `ebin/*.app`; within each directory the
/// first match in case-sensitive name order is taken, non-recursively.
/// A symlinked `src` directory disqualifies the whole lookup.
fn find_app_resource_file(dir: &Path) -> Option<PathBuf> {
    let src = dir.join("src");
    if src.is_symlink() {
        return None;
    }
    if src.is_dir() {
        if let Some(file) = find_file_by_suffix(&src, ".app.src") {
            return Some(file);
        }
    }

    let ebin = dir.join("ebin");
    if ebin.is_dir() {
        return find_file_by_suffix(&ebin, ".app");
    }
    None
}

fn find_file_by_suffix(dir: &Path, suffix: &str) -> Option<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .filter(|e| e.file_type().is_ok_and(|t| !t.is_dir()))
        .map(|e| e.path())
        .collect();
    files.sort();
    files.into_iter().find(|path| {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
    })
}
