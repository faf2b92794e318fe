//! `rebar.config` data structures
//!
//! The sections consumed here are the ones that shape an imported
//! application: `deps` for build dependencies, `erl_opts` for include
//! directories (`{i, Dir}`) and parse transforms
//! (`{parse_transform, Module}`), and `plugins` for compiler plugins
//! declared in dependency style. When a section occurs more than once the
//! first occurrence wins.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{RebarMapError, Result};
use crate::term::{self, Term};

/// File name of a Rebar3 build configuration
pub const REBAR_CONFIG: &str = "rebar.config";

/// Parsed `rebar.config` slice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebarConfig {
    /// Build dependency names from the `deps` section
    pub deps: BTreeSet<String>,

    /// Include directories from `{i, Dir}` entries of `erl_opts`,
    /// relative to the application root, in declaration order
    pub include_dirs: Vec<String>,

    /// Parse transform modules from `{parse_transform, Module}` entries
    /// of `erl_opts`
    pub parse_transforms: BTreeSet<String>,

    /// Plugin names from the `plugins` section
    pub plugins: BTreeSet<String>,
}

impl RebarConfig {
    /// Load a `rebar.config` from disk
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed. Discovery
    /// treats both cases as a config contributing no data.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RebarMapError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let forms = term::parse(&source).map_err(|e| RebarMapError::TermParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_forms(&forms))
    }

    /// Build a config view from already-parsed forms
    pub fn from_forms(forms: &[Term]) -> Self {
        let deps = term::section(forms, "deps")
            .map(term::dependency_names)
            .unwrap_or_default();
        let plugins = term::section(forms, "plugins")
            .map(term::dependency_names)
            .unwrap_or_default();

        let mut include_dirs = Vec::new();
        let mut parse_transforms = BTreeSet::new();
        if let Some(opts) = term::section(forms, "erl_opts").and_then(Term::list_elements) {
            for opt in opts {
                let Some([Term::Atom(key), value, ..]) = opt.tuple_elements().map(|e| &e[..])
                else {
                    continue;
                };
                match (key.as_str(), value) {
                    ("i", Term::Str(dir)) => {
                        if !include_dirs.contains(dir) {
                            include_dirs.push(dir.clone());
                        }
                    }
                    ("parse_transform", Term::Atom(module)) => {
                        parse_transforms.insert(module.clone());
                    }
                    _ => {}
                }
            }
        }

        Self {
            deps,
            include_dirs,
            parse_transforms,
            plugins,
        }
    }

    /// Compiler plugins applied during the build: parse transforms plus
    /// the names declared in the `plugins` section
    pub fn build_plugins(&self) -> BTreeSet<String> {
        self.parse_transforms
            .union(&self.plugins)
            .cloned()
            .collect()
    }
}
