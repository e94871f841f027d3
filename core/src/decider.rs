//! # Eligibility Decider
//!
//! Decides, per definition site, whether the schema derive should be
//! inserted. Pure function of the site and the exclusion configuration;
//! never mutates anything.

use crate::locator::DefinitionSite;
use std::collections::HashSet;

/// The capability marker being injected. Fully qualified so no import is
/// ever needed in the annotated files.
pub const SCHEMA_DERIVE: &str = "utoipa::ToSchema";

/// Type names known to be incompatible with the schema derive.
///
/// Curated by hand: when the downstream build fails on a freshly annotated
/// type, its name goes here and the tool is re-run.
const DEFAULT_EXCLUSIONS: &[&str] = &[
    "CreateSpeechResponse", // Contains Bytes
    "AssistantStreamEvent", // Contains ApiError
    "ImageResponse",        // Contains Arc<Image>
    "Image",                // Contains Arc<String>
];

/// Field-type fragments whose presence in a definition body marks the type
/// as ineligible. Matched as plain substrings of the body text.
const PROBLEMATIC_FIELD_TYPES: &[&str] = &[
    "Bytes",
    "ApiError",
    "Arc<",
    "PathBuf",
    "InputSource",
    "WebSearchPreview",
    "AudioInput",
    "FileInput",
    "HostedToolType",
    "ToolDefinition",
    "ImageInput",
    "ResponseMetadata",
];

/// Read-only set of type names that must never be annotated.
///
/// Presence in this set is authoritative and overrides all other
/// eligibility logic.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExclusionSet {
    /// Builds the set from the curated defaults plus `extra` names.
    pub fn with_names(extra: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::default();
        set.names.extend(extra);
        set
    }

    /// Whether `name` is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// The verdict for a single definition site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationDecision {
    /// The type name is in the exclusion set; never annotate.
    Excluded,
    /// The attribute block already carries the schema derive.
    AlreadyPresent,
    /// The body mentions a field type known not to implement the derive.
    IncompatibleFields,
    /// Eligible; insert the annotation.
    Insert,
}

/// Decides the verdict for one site.
///
/// Priority order: exclusion is a hard safety rule and wins over
/// everything, then idempotency (`AlreadyPresent`), then the field screen.
pub fn decide(site: &DefinitionSite, exclusions: &ExclusionSet) -> AnnotationDecision {
    if exclusions.contains(&site.type_name) {
        return AnnotationDecision::Excluded;
    }

    if site.attributes.iter().any(|line| has_schema_derive(line)) {
        return AnnotationDecision::AlreadyPresent;
    }

    if has_problematic_field(&site.body) {
        return AnnotationDecision::IncompatibleFields;
    }

    AnnotationDecision::Insert
}

/// Whether an attribute line textually contains the schema derive.
///
/// Whitespace is stripped first so `utoipa :: ToSchema` (as some
/// formatters render paths) is also recognized.
fn has_schema_derive(line: &str) -> bool {
    line.replace(' ', "").contains(SCHEMA_DERIVE)
}

fn has_problematic_field(body: &str) -> bool {
    PROBLEMATIC_FIELD_TYPES
        .iter()
        .any(|fragment| body.contains(fragment))
}
