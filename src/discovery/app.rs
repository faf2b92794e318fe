//! Discovered OTP application descriptors
//!
//! An [`OtpApp`] is one discovered application directory or release
//! aggregate: its name, root, classification, and the dependency, include
//! and plugin data merged from its resource file and `rebar.config`.
//! Two descriptors are equal when both name and root are equal; the root
//! disambiguates two directories that claim the same application name.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::app_resource::{self, AppResource};
use crate::config::rebar_config::{REBAR_CONFIG, RebarConfig};

/// How a discovered application relates to the project being imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppType {
    /// An application of the project itself (root, `apps/`, `lib/`)
    Project,
    /// A fetched or checked-out dependency (`_checkouts/`, `_build/`)
    Dependency,
    /// An application found under `examples/`
    Example,
    /// A release aggregate bundling applications rather than being one
    Release,
}

impl AppType {
    /// Short label for table output
    pub fn label(self) -> &'static str {
        match self {
            AppType::Project => "project",
            AppType::Dependency => "dependency",
            AppType::Example => "example",
            AppType::Release => "release",
        }
    }
}

/// One discovered OTP application or release aggregate
#[derive(Debug, Clone, Serialize)]
pub struct OtpApp {
    /// Application name (resource file base name, or `<dirname>-release`)
    pub name: String,

    /// Absolute path to the application directory
    pub root: PathBuf,

    /// Classification from the directory the app was discovered under
    pub app_type: AppType,

    /// Declared dependency names (runtime `applications` plus build `deps`)
    pub deps: BTreeSet<String>,

    /// Existing include directories, as absolute paths
    pub include_paths: BTreeSet<PathBuf>,

    /// Compiler plugins (parse transforms and `plugins` entries)
    pub build_plugins: BTreeSet<String>,
}

impl PartialEq for OtpApp {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.root == other.root
    }
}

impl Eq for OtpApp {}

impl std::hash::Hash for OtpApp {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.root.hash(state);
    }
}

impl std::fmt::Display for OtpApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.root.display())
    }
}

impl OtpApp {
    /// Build a descriptor for a directory holding an application resource file
    ///
    /// The name comes from the resource file's base name. Runtime
    /// dependencies come from the resource file, then `rebar.config` data
    /// is merged in, then the conventional `include` directory is added.
    /// A resource file or config that fails to read or parse contributes
    /// nothing.
    pub fn from_resource_file(app_type: AppType, root: &Path, resource_file: &Path) -> Self {
        let mut app = Self {
            name: app_resource::app_name_from_file(resource_file),
            root: root.to_path_buf(),
            app_type,
            deps: BTreeSet::new(),
            include_paths: BTreeSet::new(),
            build_plugins: BTreeSet::new(),
        };
        if let Ok(resource) = AppResource::load(resource_file) {
            app.deps.extend(resource.applications);
        }
        app.add_rebar_config_info();
        app.add_include_path("include");
        app
    }

    /// Build a descriptor for a release aggregate directory
    ///
    /// Release aggregates have no resource file; they are named after
    /// their directory and carry only `rebar.config`-declared data.
    pub fn release_root(root: &Path) -> Self {
        let dir_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        let mut app = Self {
            name: format!("{dir_name}-release"),
            root: root.to_path_buf(),
            app_type: AppType::Release,
            deps: BTreeSet::new(),
            include_paths: BTreeSet::new(),
            build_plugins: BTreeSet::new(),
        };
        app.add_rebar_config_info();
        app
    }

    fn add_rebar_config_info(&mut self) {
        let path = self.root.join(REBAR_CONFIG);
        if !path.is_file() {
            return;
        }
        let Ok(config) = RebarConfig::load(&path) else {
            return;
        };
        for dir in &config.include_dirs {
            self.add_include_path(dir);
        }
        self.build_plugins.extend(config.build_plugins());
        self.deps.extend(config.deps);
    }

    /// Record an include directory, resolved against the application root;
    /// paths that do not exist as directories are dropped
    fn add_include_path(&mut self, relative: &str) {
        let path = self.root.join(relative);
        if path.is_dir() {
            self.include_paths.insert(path);
        }
    }
}
