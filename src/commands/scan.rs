//! Scan command implementation
//!
//! Discovers the OTP applications of a project and prints them sorted
//! case-insensitively by name, the way an import wizard would list them.

use console::Style;

use crate::cli::ScanArgs;
use crate::commands::helpers::{display_root, project_root};
use crate::discovery::{self, CancelToken, DiscoverOptions, DiscoverySet, OtpApp};
use crate::error::{RebarMapError, Result};
use crate::progress::ScanProgress;

/// Run scan command
pub fn run(args: ScanArgs, verbose: bool) -> Result<()> {
    let root = project_root(args.path)?;
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

    if args.json {
        println!("{}", serde_json::to_string_pretty(found.apps())?);
        return Ok(());
    }

    print_apps(&found, &root, verbose);
    report_embedded_rebar(&root);
    Ok(())
}

fn print_apps(found: &DiscoverySet, root: &std::path::Path, verbose: bool) {
    let count = found.len();
    let label = if count == 1 { "application" } else { "applications" };
    println!(
        "Found {} OTP {} in {}",
        count,
        label,
        Style::new().bold().apply_to(root.display())
    );
    println!();

    let name_width = found
        .iter()
        .map(|app| app.name.len())
        .max()
        .unwrap_or_default();
    for app in found {
        println!(
            "  {}  {}  {}",
            Style::new()
                .bold()
                .yellow()
                .apply_to(format!("{:<name_width$}", app.name)),
            Style::new()
                .cyan()
                .apply_to(format!("{:<10}", app.app_type.label())),
            Style::new().dim().apply_to(display_root(&app.root, root)),
        );
        if verbose {
            print_app_details(app);
        }
    }
}

fn print_app_details(app: &OtpApp) {
    if !app.deps.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("deps:"),
            app.deps.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }
    for include in &app.include_paths {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("include:"),
            include.display()
        );
    }
    if !app.build_plugins.is_empty() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("plugins:"),
            app.build_plugins
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// Point out a rebar3 escript shipped with the project
fn report_embedded_rebar(root: &std::path::Path) {
    let rebar = root.join("rebar3");
    if rebar.is_file() {
        println!();
        println!(
            "Embedded rebar3 escript: {}",
            Style::new().green().apply_to(rebar.display())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, fill_otp_app};

    #[test]
    fn test_run_on_project() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &["kernel"]);

        let args = ScanArgs {
            path: Some(temp.path().to_path_buf()),
            examples: false,
            json: false,
        };
        assert!(run(args, false).is_ok());
    }

    #[test]
    fn test_run_json_on_project() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &[]);

        let args = ScanArgs {
            path: Some(temp.path().to_path_buf()),
            examples: false,
            json: true,
        };
        assert!(run(args, true).is_ok());
    }

    #[test]
    fn test_run_on_empty_dir_is_an_error() {
        let temp = create_temp_dir();
        let args = ScanArgs {
            path: Some(temp.path().to_path_buf()),
            examples: false,
            json: false,
        };
        let err = run(args, false).expect_err("empty dir has nothing to import");
        assert!(matches!(err, RebarMapError::NoImportableRoot { .. }));
    }
}
