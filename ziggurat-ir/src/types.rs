//! Node definitions for the inferred type graph.

use serde::{Deserialize, Serialize};

use crate::TypeId;

/// A single node in the inferred type graph.
///
/// The variant set is closed on purpose: backends match on it exhaustively
/// with no fallthrough arm, so adding a node kind here is a compile-time
/// obligation for every renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeNode {
    /// A value whose samples never agreed on a shape.
    Any,
    /// A value that was always `null` in the samples.
    Null,
    Bool,
    Integer,
    Double,
    String,
    /// A homogeneous JSON array.
    Array(TypeId),
    /// A string-keyed JSON object with homogeneous values.
    Map(TypeId),
    /// A JSON object with a fixed property set.
    Class(ClassNode),
    /// A closed set of string values.
    Enum(EnumNode),
    /// A value that took several distinct shapes across samples.
    Union(UnionNode),
}

impl TypeNode {
    /// The naming hint carried by class, enum, and union nodes.
    pub fn name_hint(&self) -> Option<&str> {
        match self {
            TypeNode::Class(class) => Some(&class.name_hint),
            TypeNode::Enum(en) => Some(&en.name_hint),
            TypeNode::Union(union) => Some(&union.name_hint),
            _ => None,
        }
    }
}

/// An object type with a fixed, ordered set of properties.
///
/// Property order is insertion order and is semantically meaningful: it must
/// be preserved in the emitted declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNode {
    /// Naming hint from the source (a JSON key or schema title).
    pub name_hint: String,
    pub properties: Vec<Property>,
}

/// One property of a [`ClassNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The external key exactly as it appeared in the samples.
    pub key: String,
    pub ty: TypeId,
    /// Whether the key was absent in some samples.
    #[serde(default)]
    pub optional: bool,
    /// Description from a schema, if one was present.
    #[serde(default)]
    pub description: Option<String>,
}

impl Property {
    pub fn new(key: impl Into<String>, ty: TypeId) -> Self {
        Self {
            key: key.into(),
            ty,
            optional: false,
            description: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

/// A string enumeration. Case order is preserved in the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumNode {
    pub name_hint: String,
    pub cases: Vec<EnumCase>,
}

/// One case of an [`EnumNode`], holding the external string value verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumCase {
    pub value: String,
}

impl EnumCase {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A union of several member shapes. A member may be [`TypeNode::Null`]; a
/// union whose only non-null member is `T` renders as optional-of-`T` rather
/// than as a tagged declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionNode {
    pub name_hint: String,
    pub members: Vec<TypeId>,
}
