//! Application resource file (`.app` / `.app.src`) data structures
//!
//! A resource file holds a single `{application, Name, Props}` form. The
//! application's name is taken from the file's base name with the `.src`
//! and `.app` suffixes stripped, matching how build tooling names the
//! compiled artifact; the atom inside the form is not consulted.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{RebarMapError, Result};
use crate::term::{self, Term};

/// Parsed application resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppResource {
    /// Application name derived from the resource file name
    pub name: String,

    /// Runtime dependency applications from the `applications` property
    pub applications: BTreeSet<String>,
}

impl AppResource {
    /// Load a resource file from disk
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed. Discovery
    /// treats both cases as an application with no declared runtime deps.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RebarMapError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let forms = term::parse(&source).map_err(|e| RebarMapError::TermParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_forms(app_name_from_file(path), &forms))
    }

    /// Build a resource view from already-parsed forms
    pub fn from_forms(name: String, forms: &[Term]) -> Self {
        let applications = application_properties(forms)
            .and_then(|props| term::proplist_value(props, "applications"))
            .map(term::dependency_names)
            .unwrap_or_default();
        Self { name, applications }
    }
}

/// Derive an application name from a resource file path
///
/// Strips `.src` and then `.app`, so both `myapp.app.src` and `myapp.app`
/// yield `myapp`.
pub fn app_name_from_file(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = file_name.strip_suffix(".src").unwrap_or(&file_name);
    let name = name.strip_suffix(".app").unwrap_or(name);
    name.to_string()
}

/// Find the property list of the first `{application, _, Props}` form
fn application_properties(forms: &[Term]) -> Option<&Term> {
    forms.iter().find_map(|form| {
        let elements = form.tuple_elements()?;
        if elements.first()?.as_atom()? != "application" {
            return None;
        }
        elements.iter().find(|e| e.list_elements().is_some())
    })
}
