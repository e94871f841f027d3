//! # Line Patterns
//!
//! Named textual matchers for the line shapes the locator cares about:
//! public struct/enum definition lines and outer attribute lines.
//!
//! Matching is purely syntactic. These are kept as isolated, individually
//! testable functions so they can be hardened without touching the
//! insertion logic.

use regex::Regex;
use std::sync::OnceLock;

/// Kind of type definition a line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// A `struct` definition.
    Struct,
    /// An `enum` definition.
    Enum,
}

/// A successful match of a definition line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMatch {
    /// Whether the line declares a struct or an enum.
    pub kind: DefinitionKind,
    /// The declared type name.
    pub name: String,
}

/// Matches a public struct/enum declaration line, e.g. `pub struct Foo {`
/// or `    pub(crate) enum Bar {`.
///
/// Private types are deliberately not matched: they are not part of the
/// API surface the schema derive is being added for.
pub fn match_definition_line(line: &str) -> Option<DefinitionMatch> {
    static DEF_RE: OnceLock<Regex> = OnceLock::new();
    let re = DEF_RE.get_or_init(|| {
        Regex::new(r"^\s*pub(?:\([^)]*\))?\s+(struct|enum)\s+([A-Za-z_][A-Za-z0-9_]*)")
            .expect("Invalid regex")
    });

    let caps = re.captures(line)?;
    let kind = match caps.get(1)?.as_str() {
        "struct" => DefinitionKind::Struct,
        _ => DefinitionKind::Enum,
    };
    Some(DefinitionMatch {
        kind,
        name: caps.get(2)?.as_str().to_string(),
    })
}

/// Matches an outer attribute line, e.g. `#[derive(Debug)]` or
/// `#[serde(rename_all = "snake_case")]`.
///
/// Inner attributes (`#![...]`), doc comments and blank lines do not
/// match, so they terminate an attribute block during the backward scan.
pub fn is_attribute_line(line: &str) -> bool {
    static ATTR_RE: OnceLock<Regex> = OnceLock::new();
    let re = ATTR_RE.get_or_init(|| Regex::new(r"^\s*#\[").expect("Invalid regex"));
    re.is_match(line)
}

/// Returns the leading whitespace of a line.
pub fn leading_indent(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_pub_struct() {
        let m = match_definition_line("pub struct CreateRequest {").unwrap();
        assert_eq!(m.kind, DefinitionKind::Struct);
        assert_eq!(m.name, "CreateRequest");
    }

    #[test]
    fn test_match_pub_enum_indented() {
        let m = match_definition_line("    pub enum Role {").unwrap();
        assert_eq!(m.kind, DefinitionKind::Enum);
        assert_eq!(m.name, "Role");
    }

    #[test]
    fn test_match_restricted_visibility() {
        let m = match_definition_line("pub(crate) struct Inner;").unwrap();
        assert_eq!(m.kind, DefinitionKind::Struct);
        assert_eq!(m.name, "Inner");
    }

    #[test]
    fn test_rejects_private_definition() {
        assert!(match_definition_line("struct Hidden {").is_none());
    }

    #[test]
    fn test_rejects_non_definition_lines() {
        assert!(match_definition_line("pub fn struct_like() {}").is_none());
        assert!(match_definition_line("// pub struct Commented {").is_none());
        assert!(match_definition_line("impl Display for Foo {").is_none());
    }

    #[test]
    fn test_attribute_line() {
        assert!(is_attribute_line("#[derive(Debug, Clone)]"));
        assert!(is_attribute_line("    #[serde(rename = \"x\")]"));
    }

    #[test]
    fn test_attribute_line_rejects_others() {
        assert!(!is_attribute_line("#![allow(missing_docs)]"));
        assert!(!is_attribute_line("/// doc comment"));
        assert!(!is_attribute_line(""));
        assert!(!is_attribute_line("pub struct Foo {"));
    }

    #[test]
    fn test_leading_indent() {
        assert_eq!(leading_indent("    pub struct A {"), "    ");
        assert_eq!(leading_indent("pub struct A {"), "");
        assert_eq!(leading_indent("\tenum B {"), "\t");
    }
}
