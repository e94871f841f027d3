#![deny(missing_docs)]

//! # Annotate Core
//!
//! Core library for the schema-annotation rewriter: locates struct/enum
//! definition sites in raw source text, decides eligibility against a
//! curated exclusion configuration, and computes minimal line insertions.
//!
//! Everything here is a pure function of text and configuration; no module
//! touches the filesystem.

/// Named line matchers (definition lines, attribute lines).
pub mod patterns;

/// Definition site scanning.
pub mod locator;

/// Eligibility decisions and exclusion configuration.
pub mod decider;

/// Insertion planning and text splicing.
pub mod annotator;

pub use annotator::{annotate_source, AnnotatedSource, Insertion};
pub use decider::{decide, AnnotationDecision, ExclusionSet, SCHEMA_DERIVE};
pub use locator::{locate_definitions, DefinitionSite};
pub use patterns::{is_attribute_line, match_definition_line, DefinitionKind, DefinitionMatch};
