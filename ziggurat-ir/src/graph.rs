//! The arena holding the inferred type graph.

use serde::{Deserialize, Serialize};

use crate::{ClassNode, EnumNode, Property, TypeNode, UnionNode};

/// Index of a node inside a [`TypeGraph`].
///
/// Ids are only meaningful for the graph that produced them. Deserialized
/// graphs may carry arbitrary indices, so renderers validate the graph before
/// trusting lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(usize);

impl TypeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named entry point into the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLevel {
    pub name: String,
    pub root: TypeId,
}

/// The full inferred type graph: an id-indexed arena of nodes plus the
/// ordered list of named top-level entry points.
///
/// Nodes form a DAG at the structural level; recursion between named types
/// goes through name references during rendering, never inline expansion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeGraph {
    nodes: Vec<TypeNode>,
    top_levels: Vec<TopLevel>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn add(&mut self, node: TypeNode) -> TypeId {
        let id = TypeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Reserve an id for a node defined later via [`TypeGraph::define`].
    ///
    /// This is how recursive schemas are built: reserve the class id, use it
    /// inside its own property types, then define the class.
    pub fn reserve(&mut self) -> TypeId {
        self.add(TypeNode::Any)
    }

    /// Replace a previously reserved node.
    pub fn define(&mut self, id: TypeId, node: TypeNode) {
        self.nodes[id.0] = node;
    }

    /// Register a named entry point.
    pub fn add_top_level(&mut self, name: impl Into<String>, root: TypeId) {
        self.top_levels.push(TopLevel {
            name: name.into(),
            root,
        });
    }

    /// Shorthand for adding a class node.
    pub fn class(&mut self, name_hint: impl Into<String>, properties: Vec<Property>) -> TypeId {
        self.add(TypeNode::Class(ClassNode {
            name_hint: name_hint.into(),
            properties,
        }))
    }

    /// Shorthand for adding an enum node.
    pub fn enumeration(
        &mut self,
        name_hint: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> TypeId {
        let cases = values
            .into_iter()
            .map(|value| crate::EnumCase {
                value: value.into(),
            })
            .collect();
        self.add(TypeNode::Enum(EnumNode {
            name_hint: name_hint.into(),
            cases,
        }))
    }

    /// Shorthand for adding a union node.
    pub fn union_of(&mut self, name_hint: impl Into<String>, members: Vec<TypeId>) -> TypeId {
        self.add(TypeNode::Union(UnionNode {
            name_hint: name_hint.into(),
            members,
        }))
    }

    /// Shorthand for adding an array node.
    pub fn array(&mut self, items: TypeId) -> TypeId {
        self.add(TypeNode::Array(items))
    }

    /// Shorthand for adding a map node.
    pub fn map(&mut self, values: TypeId) -> TypeId {
        self.add(TypeNode::Map(values))
    }

    /// Look up a node. Panics on a dangling id; renderers validate first.
    pub fn node(&self, id: TypeId) -> &TypeNode {
        &self.nodes[id.0]
    }

    /// Fallible lookup, used during validation.
    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.0)
    }

    /// Iterate all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (TypeId, &TypeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (TypeId(i), n))
    }

    pub fn top_levels(&self) -> &[TopLevel] {
        &self.top_levels
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Split a union member list into (admits null, non-null members).
    pub fn split_null(&self, members: &[TypeId]) -> (bool, Vec<TypeId>) {
        let mut has_null = false;
        let mut rest = Vec::with_capacity(members.len());
        for &member in members {
            match self.get(member) {
                Some(TypeNode::Null) => has_null = true,
                _ => rest.push(member),
            }
        }
        (has_null, rest)
    }

    /// Whether a node is emitted as its own named declaration.
    ///
    /// Classes and enums always are; a union only when two or more non-null
    /// members remain after nullable flattening.
    pub fn is_declaration(&self, id: TypeId) -> bool {
        match self.node(id) {
            TypeNode::Class(_) | TypeNode::Enum(_) => true,
            TypeNode::Union(union) => {
                let (_, rest) = self.split_null(&union.members);
                rest.len() >= 2
            }
            _ => false,
        }
    }
}
