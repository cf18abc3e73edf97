//! The capability interface a concrete target-language backend implements.

use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::{CaseStyle, GeneratedFile, Namespace, OutputMode};

/// Naming conventions a backend supplies: one case style per namer role, the
/// reserved-keyword list, and the shape of derived rename-table names.
///
/// The four namer roles (type names, properties, union members, enum cases)
/// share the legalization and keyword-avoidance machinery in
/// [`crate::styled_name`] and [`Namespace`]; this struct tells them how to
/// style each role and which words to avoid.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Style for type/declaration names.
    pub type_style: CaseStyle,
    /// Style for object property names.
    pub property_style: CaseStyle,
    /// Style for union member (arm) names.
    pub member_style: CaseStyle,
    /// Style for enum case names.
    pub case_style: CaseStyle,
    /// The target's reserved keywords, forbidden in every namespace.
    pub keywords: &'static [&'static str],
    /// Extra forbidden words for the global declaration namespace (primitive
    /// type names and other identifiers the target resolves specially).
    pub type_forbidden: &'static [&'static str],
    /// Style for derived names (rename key tables).
    pub derived_style: CaseStyle,
    /// Suffix words appended to a declaration's name for the
    /// deserialization-direction key table.
    pub parse_keys_suffix: &'static str,
    /// Suffix words appended for the serialization-direction key table.
    pub stringify_keys_suffix: &'static str,
}

impl NamingConvention {
    /// Check if a word is a reserved keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(&word)
    }

    /// Fresh namespace for top-level declaration names.
    pub fn declaration_namespace(&self) -> Namespace {
        Namespace::new(
            self.keywords
                .iter()
                .chain(self.type_forbidden.iter())
                .copied(),
        )
    }

    /// Fresh namespace for the per-aggregate roles (properties, union
    /// members, enum cases).
    pub fn item_namespace(&self) -> Namespace {
        Namespace::new(self.keywords.iter().copied())
    }
}

/// A concrete target-language backend.
///
/// A backend is a value implementing this trait, not a subclass overriding
/// hooks: it supplies its naming convention, its file extension, and the
/// rendering entry point that maps every graph node to output text.
pub trait LanguageBackend {
    /// Language identifier (e.g., "zig").
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "zig").
    fn file_extension(&self) -> &'static str;

    /// The backend's naming convention.
    fn convention(&self) -> &'static NamingConvention;

    /// Render every declaration of the graph into finished buffers.
    fn render(&self) -> Result<Vec<GeneratedFile>>;
}

/// Controls the single visibility modifier on emitted declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Options fixed once per render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub output: OutputMode,
    /// Leading comment emitted verbatim at the top of each buffer. When
    /// absent, a generated default header is emitted instead; the two are
    /// mutually exclusive.
    #[serde(default)]
    pub leading_comment: Option<String>,
}
