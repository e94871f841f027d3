//! # Definition Locator
//!
//! Scans a source file's text and yields every public struct/enum
//! definition site in file order, each with its attribute block and the
//! brace-delimited body text.
//!
//! This is a line-oriented scan, not a parse: sites are recognized by the
//! patterns in [`crate::patterns`], and the body is captured by brace
//! counting. Definitions produced by macros will simply not match.

use crate::patterns::{is_attribute_line, match_definition_line, DefinitionKind};

/// A located type definition within a single source file.
///
/// Line indices are zero-based and refer to the file as split on `'\n'`.
/// Sites are computed fresh per scan and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionSite {
    /// The declared type name.
    pub type_name: String,
    /// Struct or enum.
    pub kind: DefinitionKind,
    /// Index of the first line of the attribute block. Equals
    /// `definition_start_line` when the block is empty.
    pub attribute_block_start_line: usize,
    /// Index of the `pub struct`/`pub enum` line itself.
    pub definition_start_line: usize,
    /// The contiguous `#[...]` lines immediately preceding the definition.
    pub attributes: Vec<String>,
    /// The `{ ... }` text of the definition, braces included. Empty for
    /// unit/`;`-terminated definitions.
    pub body: String,
}

/// Locates all definition sites in `source`, top to bottom.
///
/// A site with no preceding attribute lines carries an empty block; that
/// is a normal result, not an error. Purely a read of the text.
pub fn locate_definitions(source: &str) -> Vec<DefinitionSite> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut sites = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(m) = match_definition_line(line) else {
            continue;
        };

        // Backward scan over contiguous attribute lines. Blank lines and
        // comments terminate the block.
        let mut block_start = idx;
        while block_start > 0 && is_attribute_line(lines[block_start - 1]) {
            block_start -= 1;
        }

        let attributes = lines[block_start..idx]
            .iter()
            .map(|l| l.to_string())
            .collect();

        sites.push(DefinitionSite {
            type_name: m.name,
            kind: m.kind,
            attribute_block_start_line: block_start,
            definition_start_line: idx,
            attributes,
            body: capture_body(&lines[idx..]),
        });
    }

    sites
}

/// Captures the brace-delimited body starting on the definition line.
///
/// Counts `{`/`}` until the opening brace is balanced again. A `;` seen
/// before any `{` marks a unit definition, which has no body. Braces
/// inside string literals are not special-cased; the matched source style
/// does not put unbalanced braces in type bodies.
fn capture_body(tail: &[&str]) -> String {
    let mut depth: i32 = 0;
    let mut started = false;
    let mut body = String::new();

    for line in tail {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    started = true;
                }
                '}' => depth -= 1,
                ';' if !started => return body,
                _ => {}
            }
            if started {
                body.push(ch);
            }
            if started && depth == 0 {
                return body;
            }
        }
        if started {
            body.push('\n');
        }
    }

    body
}
