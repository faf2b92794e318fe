//! Deps command implementation
//!
//! Discovers a project's applications, applies the selection, resolves
//! name conflicts, and reports where every declared dependency resolves
//! to. Unresolved dependencies are warnings; unresolved name conflicts
//! block the report, matching how an import would refuse to commit.

use console::Style;

use crate::cli::DepsArgs;
use crate::commands::helpers::{display_root, project_root};
use crate::discovery::{self, CancelToken, DiscoverOptions, OtpApp};
use crate::error::{RebarMapError, Result};
use crate::progress::ScanProgress;
use crate::resolver::{self, LinkReport};

/// Run deps command
pub fn run(args: DepsArgs, verbose: bool) -> Result<()> {
    let root = project_root(args.path.clone())?;
    for dir in &args.otp_lib {
        if !dir.is_dir() {
            return Err(RebarMapError::OtpLibNotFound {
                path: dir.display().to_string(),
            });
        }
    }

    let options = DiscoverOptions::with_examples(args.examples);
    let progress = ScanProgress::new();
    let mut found = discovery::discover(&root, &options, &CancelToken::new(), Some(&progress));
    progress.finish();

    if found.is_empty() {
        return Err(RebarMapError::NoImportableRoot {
            path: root.display().to_string(),
        });
    }
    found.sort_for_display();

    let mut selected = found.select(&args.only)?;
    let conflicts = resolver::find_conflicts(&selected);
    if !conflicts.is_empty() {
        selected = resolve_conflicts(selected, &conflicts, &args)?;
    }

    let sdk_apps = resolver::bundled_app_names(&args.otp_lib);
    let report = resolver::link(&selected, &sdk_apps);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, &root, verbose);
    Ok(())
}

/// Decide what to do about name conflicts before linking
///
/// `--auto-resolve` applies the keep-the-project-app policy. Otherwise an
/// attended terminal gets an interactive choice per conflict group, and a
/// non-interactive run fails: a selection with conflicting names must not
/// be committed silently.
fn resolve_conflicts(
    selected: Vec<OtpApp>,
    conflicts: &[Vec<OtpApp>],
    args: &DepsArgs,
) -> Result<Vec<OtpApp>> {
    if args.auto_resolve {
        return resolver::auto_resolve(&selected);
    }
    if console::user_attended() && !args.json {
        return choose_interactively(selected, conflicts);
    }
    let names: Vec<&str> = conflicts
        .iter()
        .map(|group| group[0].name.as_str())
        .collect();
    Err(RebarMapError::NameConflictsUnresolved {
        names: names.join(", "),
    })
}

/// Let the user pick which root keeps each conflicted name
fn choose_interactively(
    selected: Vec<OtpApp>,
    conflicts: &[Vec<OtpApp>],
) -> Result<Vec<OtpApp>> {
    let mut dropped: Vec<OtpApp> = Vec::new();
    for group in conflicts {
        let options: Vec<String> = group.iter().map(ToString::to_string).collect();
        let prompt = format!(
            "Multiple applications are named '{}'; keep which one?",
            group[0].name
        );
        let choice = inquire::Select::new(&prompt, options.clone()).prompt()?;
        let index = options.iter().position(|o| *o == choice).unwrap_or(0);
        let keeper = group[index].clone();
        dropped.extend(group.iter().filter(|app| **app != keeper).cloned());
    }
    Ok(selected
        .into_iter()
        .filter(|app| !dropped.contains(app))
        .collect())
}

fn print_report(report: &LinkReport, root: &std::path::Path, verbose: bool) {
    for linked in &report.apps {
        println!(
            "{} {}",
            Style::new().bold().yellow().apply_to(&linked.app.name),
            Style::new()
                .dim()
                .apply_to(format!("({})", display_root(&linked.app.root, root))),
        );
        if linked.app.deps.is_empty() {
            println!("  {}", Style::new().dim().apply_to("no dependencies"));
        }
        print_dep_line("project:", &linked.links.project, Style::new().cyan());
        print_dep_line("otp:", &linked.links.sdk, Style::new().green());
        print_dep_line("missing:", &linked.links.unresolved, Style::new().red());
        if verbose && !linked.app.build_plugins.is_empty() {
            let plugins: Vec<&str> = linked
                .app
                .build_plugins
                .iter()
                .map(String::as_str)
                .collect();
            println!(
                "  {} {}",
                Style::new().bold().apply_to("plugins:"),
                plugins.join(", ")
            );
        }
        println!();
    }

    let unresolved = report.unresolved_count();
    if unresolved > 0 {
        let label = if unresolved == 1 {
            "dependency"
        } else {
            "dependencies"
        };
        println!(
            "{}",
            Style::new().yellow().apply_to(format!(
                "warning: {} {} could not be resolved",
                unresolved, label
            ))
        );
    } else {
        println!("{}", Style::new().green().apply_to("All dependencies resolved"));
    }
}

fn print_dep_line(label: &str, deps: &std::collections::BTreeSet<String>, style: Style) {
    if deps.is_empty() {
        return;
    }
    let names: Vec<&str> = deps.iter().map(String::as_str).collect();
    println!(
        "  {} {}",
        Style::new().bold().apply_to(format!("{:<8}", label)),
        style.apply_to(names.join(", "))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_otp_app, create_temp_dir, fill_otp_app};

    fn deps_args(path: std::path::PathBuf) -> DepsArgs {
        DepsArgs {
            path: Some(path),
            examples: false,
            json: false,
            otp_lib: Vec::new(),
            only: Vec::new(),
            auto_resolve: false,
        }
    }

    #[test]
    fn test_run_reports_without_conflicts() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &["kernel"]);

        assert!(run(deps_args(temp.path().to_path_buf()), false).is_ok());
    }

    #[test]
    fn test_run_rejects_missing_otp_lib() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &[]);

        let mut args = deps_args(temp.path().to_path_buf());
        args.otp_lib = vec![temp.path().join("no-such-lib")];
        let err = run(args, false).expect_err("missing otp lib should fail");
        assert!(matches!(err, RebarMapError::OtpLibNotFound { .. }));
    }

    #[test]
    fn test_run_rejects_unknown_selection() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &[]);

        let mut args = deps_args(temp.path().to_path_buf());
        args.only = vec!["stranger".to_string()];
        let err = run(args, false).expect_err("unknown name should fail");
        assert!(matches!(err, RebarMapError::AppNotFound { .. }));
    }

    #[test]
    fn test_run_auto_resolves_conflicts() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "umbrella", &[]);
        create_otp_app(&temp.path().join("apps"), "shared", &[]);
        create_otp_app(
            &temp.path().join("_build").join("default").join("lib"),
            "shared",
            &[],
        );

        let mut args = deps_args(temp.path().to_path_buf());
        args.auto_resolve = true;
        assert!(run(args, false).is_ok());
    }
}
