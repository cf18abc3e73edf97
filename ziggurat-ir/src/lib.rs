//! Intermediate representation for the Ziggurat code generator.
//!
//! This crate provides the type graph handed to the rendering pipeline: the
//! closed set of node kinds an upstream inference pass produces from JSON or
//! JSON Schema samples, plus the arena that holds them.
//!
//! # Architecture
//!
//! ```text
//! JSON samples → inference (external) → ziggurat-ir (type graph) → codegen
//! ```
//!
//! The IR is designed to be:
//! - Language-agnostic (no Zig-specific concerns)
//! - Self-contained (no external dependencies beyond serde)
//! - Immutable for the duration of a render

mod graph;
mod types;

pub use graph::{TopLevel, TypeGraph, TypeId};
pub use types::{ClassNode, EnumCase, EnumNode, Property, TypeNode, UnionNode};
