//! Dependency linking across a selection of discovered applications
//!
//! Given the applications a caller selected out of a discovery run, plus
//! the set of application names an OTP installation bundles, [`link`]
//! classifies every declared dependency as satisfied by another selected
//! application, satisfied by the installation, or unresolved. Unresolved
//! dependencies are warnings attached to the report, never a failure: a
//! partially-resolvable project is still importable.
//!
//! Name collisions among the selection are detected here as well (see
//! [`conflicts`]); the report carries the conflict groups and leaves
//! resolution to the caller.

pub mod conflicts;
pub mod sdk;

pub use conflicts::{auto_resolve, find_conflicts};
pub use sdk::bundled_app_names;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::discovery::OtpApp;

/// Where each of one application's dependencies resolved to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppLinks {
    /// Dependencies satisfied by another selected application
    pub project: BTreeSet<String>,

    /// Dependencies satisfied by the OTP installation
    pub sdk: BTreeSet<String>,

    /// Dependencies satisfied by neither
    pub unresolved: BTreeSet<String>,
}

impl AppLinks {
    /// All satisfied dependencies, regardless of provider
    pub fn resolved(&self) -> BTreeSet<String> {
        self.project.union(&self.sdk).cloned().collect()
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// One selected application with its link classification
#[derive(Debug, Clone, Serialize)]
pub struct LinkedApp {
    pub app: OtpApp,
    pub links: AppLinks,
}

/// Result of linking a selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkReport {
    /// Selected applications in selection order
    pub apps: Vec<LinkedApp>,

    /// Groups of selected applications sharing a name across distinct roots
    pub conflicts: Vec<Vec<OtpApp>>,
}

impl LinkReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Total number of unresolved dependency edges across the selection
    pub fn unresolved_count(&self) -> usize {
        self.apps.iter().map(|a| a.links.unresolved.len()).sum()
    }
}

/// Link a selection of applications against each other and an OTP installation
///
/// Every dependency name of every selected application lands in exactly
/// one bucket: `project` when another selected application carries that
/// name, `sdk` when `sdk_apps` contains it, `unresolved` otherwise.
pub fn link(selected: &[OtpApp], sdk_apps: &BTreeSet<String>) -> LinkReport {
    let selected_names: BTreeSet<&str> = selected.iter().map(|a| a.name.as_str()).collect();

    let apps = selected
        .iter()
        .map(|app| {
            let mut links = AppLinks::default();
            for dep in &app.deps {
                if selected_names.contains(dep.as_str()) {
                    links.project.insert(dep.clone());
                } else if sdk_apps.contains(dep) {
                    links.sdk.insert(dep.clone());
                } else {
                    links.unresolved.insert(dep.clone());
                }
            }
            LinkedApp {
                app: app.clone(),
                links,
            }
        })
        .collect();

    LinkReport {
        apps,
        conflicts: find_conflicts(selected),
    }
}
