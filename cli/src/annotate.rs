#![deny(missing_docs)]

//! # Annotate Command
//!
//! The batch driver: walks the type-definition tree, runs the core
//! rewriting pipeline on every Rust source file, and writes back only the
//! files that actually gained an annotation.
//!
//! Per-file failures (unreadable files, invalid UTF-8) are reported and
//! counted but never abort the batch. The only fatal conditions are a
//! missing root directory and a walk that matches zero files.

use crate::error::{CliError, CliResult};
use annotate_core::{annotate_source, ExclusionSet};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the annotate run.
#[derive(clap::Args, Debug, Clone)]
pub struct AnnotateArgs {
    /// Root directory of the type definitions to annotate.
    #[clap(long, default_value = "src/types")]
    pub types_dir: PathBuf,

    /// Additional type names to exclude, on top of the built-in list.
    /// May be given multiple times.
    #[clap(long = "exclude", value_name = "TYPE_NAME")]
    pub exclude: Vec<String>,

    /// Print the summary as JSON instead of human-readable text.
    #[clap(long)]
    pub json: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Rust files visited (excluding `mod.rs`).
    pub files_scanned: usize,
    /// Files rewritten with at least one insertion.
    pub files_modified: usize,
    /// Total annotation lines added.
    pub annotations_inserted: usize,
    /// Files skipped because they could not be read.
    pub files_failed: usize,
}

/// Executes the annotate run and prints the summary.
pub fn execute(args: &AnnotateArgs) -> CliResult<RunSummary> {
    if !args.types_dir.is_dir() {
        return Err(CliError::General(format!(
            "Types directory not found: {:?}",
            args.types_dir
        )));
    }

    let exclusions = ExclusionSet::with_names(args.exclude.iter().cloned());
    let summary = annotate_directory(&args.types_dir, &exclusions)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e)))?;
        println!("{}", rendered);
    } else {
        println!("Summary:");
        println!("  Files scanned:        {}", summary.files_scanned);
        println!("  Files modified:       {}", summary.files_modified);
        println!("  Annotations inserted: {}", summary.annotations_inserted);
        println!("  Files failed:         {}", summary.files_failed);
    }

    Ok(summary)
}

/// Walks `root` and annotates every eligible `.rs` file.
///
/// `mod.rs` files are skipped: they hold re-exports, not type definitions,
/// and must stay byte-identical.
fn annotate_directory(root: &Path, exclusions: &ExclusionSet) -> CliResult<RunSummary> {
    let mut summary = RunSummary::default();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();

        if !path.extension().is_some_and(|ext| ext == "rs") {
            continue;
        }
        if path.file_name().is_some_and(|name| name == "mod.rs") {
            continue;
        }

        summary.files_scanned += 1;

        match annotate_file(path, exclusions) {
            Ok(0) => {}
            Ok(inserted) => {
                println!("Annotated {:?} (+{})", path, inserted);
                summary.files_modified += 1;
                summary.annotations_inserted += inserted;
            }
            Err(e) => {
                eprintln!("Warning: skipping {:?}: {}", path, e);
                summary.files_failed += 1;
            }
        }
    }

    if summary.files_scanned == 0 {
        return Err(CliError::General(format!(
            "No Rust source files found under {:?}",
            root
        )));
    }

    Ok(summary)
}

/// Rewrites one file in memory and writes it back only when something was
/// inserted, so untouched files keep their modification time and produce
/// no spurious diffs.
fn annotate_file(path: &Path, exclusions: &ExclusionSet) -> CliResult<usize> {
    let content = fs::read_to_string(path)?;

    let result = annotate_source(&content, exclusions);
    if result.inserted > 0 {
        fs::write(path, &result.text)?;
    }

    Ok(result.inserted)
}
