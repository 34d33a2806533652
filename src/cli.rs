//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::model::ScanReport;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::scanner::scan_tree;

/// privscan - flag C++ sources whose first line carries a `// PRIVATE` marker.
#[derive(Parser, Debug)]
#[command(name = "privscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"privscan walks ROOT recursively and checks every file whose name ends in
.cpp or .h. When the first line of such a file contains "// PRIVATE", a warning
is written to stderr:

    ./src/secret.cpp should not be here

Findings do not change the exit status unless --strict is given.

Examples:
    privscan
    privscan src
    privscan --format jsonl --quiet
    privscan --strict include
"#
)]
pub struct Cli {
    /// Directory to scan.
    #[arg(
        value_name = "ROOT",
        default_value = ".",
        long_help = "Directory to scan (defaults to the current directory).\n\n\
Reported paths start with ROOT exactly as given, so the default yields paths\n\
like ./src/a.cpp."
    )]
    pub root: PathBuf,

    /// Output format for stdout (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select what is printed on stdout.\n\n\
Supported values:\n\
- text (default): nothing on stdout, warnings on stderr only\n\
- jsonl: one JSON finding per line\n\
- json: the full scan report as one JSON document\n\n\
Warnings are still written to stderr unless --quiet is given."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Exit with status 1 when any file is flagged.
    #[arg(
        long,
        long_help = "Exit with status 1 when at least one file is flagged.\n\n\
By default findings are only warnings and the exit status is 0."
    )]
    pub strict: bool,

    /// Quiet mode (no warning lines on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (report skipped entries and a summary on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output (when applicable).
    #[arg(long)]
    pub no_color: bool,
}

/// Run the scan and report. Returns whether the process should exit non-zero.
pub fn run(cli: Cli) -> Result<bool> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let quiet = cli.quiet;
    let report = scan_tree(&cli.root, |finding| {
        if !quiet {
            eprintln!("{}", finding.warning());
        }
    })?;

    if let Some(output) = Renderer::with_config(render_config).render(&report) {
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    if cli.verbose {
        print_diagnostics(&report);
    }

    Ok(cli.strict && report.has_findings())
}

fn print_diagnostics(report: &ScanReport) {
    for entry in &report.skipped {
        eprintln!("privscan: skipped {}: {}", entry.path, entry.reason);
    }

    let flagged = format!("{} flagged", report.findings.len());
    let flagged = if report.has_findings() {
        flagged.yellow().bold()
    } else {
        flagged.green()
    };
    eprintln!(
        "privscan: {} entries visited, {} files checked, {}, {} skipped",
        report.entries_visited,
        report.files_checked,
        flagged,
        report.skipped.len()
    );
}
