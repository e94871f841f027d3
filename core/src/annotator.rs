//! # Annotator
//!
//! Computes the exact line to inject for each eligible site and splices
//! all insertions into a new file text in a single forward pass.
//!
//! Insertions only ever add a line between two existing lines; no existing
//! line's content is touched. The injected attribute is always its own
//! line — the downstream formatter is configured to keep separate derive
//! lines separate, and no merging happens here.

use crate::decider::{decide, AnnotationDecision, ExclusionSet, SCHEMA_DERIVE};
use crate::locator::locate_definitions;
use crate::patterns::leading_indent;

/// A planned line insertion against the original file's line numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Zero-based original line index the new line is inserted before.
    pub line_index: usize,
    /// The full text of the new line, indentation included.
    pub text: String,
}

/// Result of rewriting a single file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSource {
    /// The new file text. Byte-identical to the input when `inserted == 0`.
    pub text: String,
    /// Number of annotation lines added.
    pub inserted: usize,
}

/// Builds the annotation line for a definition line, reusing its
/// indentation.
fn annotation_line_for(definition_line: &str) -> String {
    format!("{}#[derive({})]", leading_indent(definition_line), SCHEMA_DERIVE)
}

/// Runs the full per-file pipeline: locate, decide, annotate.
///
/// The insertion point for each eligible site is the definition line
/// itself, so the new attribute lands after any pre-existing attribute
/// block and directly above the definition. Zero eligible sites return
/// the input text unchanged.
pub fn annotate_source(source: &str, exclusions: &ExclusionSet) -> AnnotatedSource {
    let lines: Vec<&str> = source.split('\n').collect();

    let insertions: Vec<Insertion> = locate_definitions(source)
        .into_iter()
        .filter(|site| decide(site, exclusions) == AnnotationDecision::Insert)
        .map(|site| Insertion {
            line_index: site.definition_start_line,
            text: annotation_line_for(lines[site.definition_start_line]),
        })
        .collect();

    if insertions.is_empty() {
        return AnnotatedSource {
            text: source.to_string(),
            inserted: 0,
        };
    }

    AnnotatedSource {
        inserted: insertions.len(),
        text: splice(&lines, &insertions),
    }
}

/// Rebuilds the file as a fresh line sequence, emitting pending insertions
/// as their original line index is reached. Insertions arrive in file
/// order (the locator scans top to bottom), so one forward walk suffices
/// and no index arithmetic is needed.
fn splice(lines: &[&str], insertions: &[Insertion]) -> String {
    let mut pending = insertions.iter().peekable();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + insertions.len());

    for (idx, line) in lines.iter().enumerate() {
        while let Some(insertion) = pending.next_if(|i| i.line_index == idx) {
            out.push(insertion.text.as_str());
        }
        out.push(line);
    }

    out.join("\n")
}
