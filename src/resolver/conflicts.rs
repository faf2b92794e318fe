//! Name conflict detection and the auto-resolution policy
//!
//! Two selected applications conflict when they share a name but live at
//! distinct roots. The core only detects and groups conflicts; resolution
//! is the caller's decision, except for the mechanical policy in
//! [`auto_resolve`]: keep the single project-typed member of a group and
//! drop the rest, failing when none or several members qualify.

use crate::discovery::{AppType, OtpApp};
use crate::error::{RebarMapError, Result};

/// Group selected applications by conflicting name
///
/// Returns one group per name claimed by more than one distinct root,
/// in selection order. Exact duplicates (same name and root) are not
/// conflicts.
pub fn find_conflicts(selected: &[OtpApp]) -> Vec<Vec<OtpApp>> {
    let mut groups: Vec<(String, Vec<OtpApp>)> = Vec::new();
    for app in selected {
        match groups.iter_mut().find(|(name, _)| name == &app.name) {
            Some((_, group)) => {
                if !group.contains(app) {
                    group.push(app.clone());
                }
            }
            None => groups.push((app.name.clone(), vec![app.clone()])),
        }
    }
    groups
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(_, group)| group)
        .collect()
}

/// Apply the mechanical conflict resolution policy
///
/// For each conflict group the single `Project`-typed member is kept and
/// the others are dropped from the selection. A group with no project
/// member, or with several, stays ambiguous and aborts the resolution.
///
/// # Errors
///
/// Returns [`RebarMapError::AmbiguousAppName`] for the first group the
/// policy cannot decide.
pub fn auto_resolve(selected: &[OtpApp]) -> Result<Vec<OtpApp>> {
    let conflicts = find_conflicts(selected);
    if conflicts.is_empty() {
        return Ok(selected.to_vec());
    }

    let mut dropped: Vec<OtpApp> = Vec::new();
    for group in &conflicts {
        let keepers: Vec<&OtpApp> = group
            .iter()
            .filter(|app| app.app_type == AppType::Project)
            .collect();
        if keepers.len() != 1 {
            return Err(RebarMapError::AmbiguousAppName {
                name: group[0].name.clone(),
                roots: group
                    .iter()
                    .map(|app| app.root.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        let keeper = keepers[0];
        dropped.extend(group.iter().filter(|app| *app != keeper).cloned());
    }

    Ok(selected
        .iter()
        .filter(|app| !dropped.contains(app))
        .cloned()
        .collect())
}
