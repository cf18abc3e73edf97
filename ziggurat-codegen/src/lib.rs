//! Shared rendering machinery for the Ziggurat generator.
//!
//! This crate provides the language-agnostic half of the pipeline, used by
//! language backends such as `ziggurat-codegen-zig`:
//!
//! - [`naming`](styled_name) - word splitting, case styling, legalization,
//!   and collision-free assignment inside a [`Namespace`]
//! - [`resolve_names`] - two-phase name resolution over a type graph
//! - [`CodeBuilder`] / [`Indent`] - indented text construction
//! - [`FileSink`] - output buffering (single stream or per-declaration)
//! - [`LanguageBackend`] / [`NamingConvention`] - the capability interface a
//!   concrete backend implements
//! - [`validate`] - structural graph validation before rendering

mod code_builder;
mod indent;
mod language;
mod naming;
mod resolve;
mod sink;
mod validate;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use language::{LanguageBackend, NamingConvention, RenderOptions, Visibility};
pub use naming::{CaseStyle, Namespace, SENTINEL, styled_name};
pub use resolve::{KeyTableNames, ResolvedNames, resolve_names};
pub use sink::{FileSink, GeneratedFile, OutputMode};
pub use validate::{GraphError, validate};
