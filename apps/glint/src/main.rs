//! glint command-line interface.
//!
//! Analyzes C source files for global variables whose entire usage sits in
//! one function. Each file is one translation unit and gets its own
//! analyzer run; nothing carries over between files.

mod output;

use clap::{Parser, ValueEnum};
use glint_analysis_common::AnalysisError;
use glint_analysis_globals::{emit, GlobalsAnalyzer, Report};
use glint_lang_c::CTranslationUnit;
use output::{ConsoleSink, FileReport};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Extensions analyzed when walking a directory. Headers are not
/// translation units; passing one explicitly still works and reports
/// nothing.
const SOURCE_EXTENSIONS: &[&str] = &["c"];

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "Finds global variables whose uses are confined to a single function")]
#[command(version)]
struct Cli {
    /// C source files or directories to analyze
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    // Logs go to stderr so stdout stays clean for reports.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let files = match discover_sources(&cli.paths) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("glint: {e}");
            process::exit(2);
        }
    };
    if files.is_empty() {
        eprintln!("glint: no C source files found");
        process::exit(2);
    }

    let mut file_reports = Vec::new();
    let mut failures = 0usize;

    for file in &files {
        match analyze_file(file) {
            Ok(report) => file_reports.push(FileReport {
                file: file.clone(),
                report,
            }),
            Err(e) => {
                error!(file = %file.display(), error = %e, "analysis failed");
                failures += 1;
            }
        }
    }

    let findings: usize = file_reports
        .iter()
        .map(|entry| entry.report.findings.len())
        .sum();

    match cli.format {
        Format::Text => {
            let mut sink = ConsoleSink;
            for entry in &file_reports {
                emit(&entry.report, &mut sink);
            }
            println!(
                "{} file(s) analyzed, {} warning(s)",
                file_reports.len(),
                findings
            );
        }
        Format::Json => match serde_json::to_string_pretty(&file_reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("glint: cannot serialize report: {e}");
                process::exit(2);
            }
        },
    }

    if failures > 0 {
        process::exit(2);
    }
    if findings > 0 {
        process::exit(1);
    }
}

/// Analyze one file as an independent translation unit.
fn analyze_file(path: &Path) -> Result<Report, AnalysisError> {
    debug!(file = %path.display(), "analyzing");
    let source = std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::FileSystem(format!("{}: {e}", path.display())))?;
    let unit = CTranslationUnit::parse(path, &source)?;
    GlobalsAnalyzer::analyze(&unit).map_err(|e| AnalysisError::Internal(e.to_string()))
}

/// Expand the given paths into a sorted list of source files. Explicit
/// file arguments are taken as-is; directories are walked recursively.
fn discover_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>, AnalysisError> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(AnalysisError::FileSystem(format!(
                "path does not exist: {}",
                path.display()
            )));
        }
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let is_source = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
            if is_source {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
