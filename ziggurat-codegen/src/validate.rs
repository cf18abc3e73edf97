//! Up-front structural validation of a type graph.
//!
//! Rendering a validated graph always terminates and never panics on a
//! lookup: every id is in bounds, every enum has at least one case, and any
//! cycle passes through a named declaration (which renders as a name
//! reference, not an inline expansion).

use thiserror::Error;
use ziggurat_ir::{TypeGraph, TypeId, TypeNode};

/// A structurally malformed graph, rejected before rendering begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("type id {id} is out of bounds (graph has {len} nodes)")]
    DanglingId { id: usize, len: usize },
    #[error("enum `{0}` has no cases")]
    EmptyEnum(String),
    #[error("graph has no top-level entry points")]
    NoTopLevels,
    #[error("cycle through unnamed container types at id {0}")]
    UnnamedCycle(usize),
}

/// Validate a graph before rendering.
pub fn validate(graph: &TypeGraph) -> Result<(), GraphError> {
    if graph.top_levels().is_empty() {
        return Err(GraphError::NoTopLevels);
    }
    for top in graph.top_levels() {
        check_id(graph, top.root)?;
    }
    for (_, node) in graph.nodes() {
        match node {
            TypeNode::Array(items) => check_id(graph, *items)?,
            TypeNode::Map(values) => check_id(graph, *values)?,
            TypeNode::Class(class) => {
                for property in &class.properties {
                    check_id(graph, property.ty)?;
                }
            }
            TypeNode::Enum(en) => {
                if en.cases.is_empty() {
                    return Err(GraphError::EmptyEnum(en.name_hint.clone()));
                }
            }
            TypeNode::Union(union) => {
                for member in &union.members {
                    check_id(graph, *member)?;
                }
            }
            TypeNode::Any
            | TypeNode::Null
            | TypeNode::Bool
            | TypeNode::Integer
            | TypeNode::Double
            | TypeNode::String => {}
        }
    }

    let mut state = vec![Mark::White; graph.len()];
    for (id, _) in graph.nodes() {
        visit(graph, id, &mut state)?;
    }
    Ok(())
}

fn check_id(graph: &TypeGraph, id: TypeId) -> Result<(), GraphError> {
    if graph.get(id).is_none() {
        return Err(GraphError::DanglingId {
            id: id.index(),
            len: graph.len(),
        });
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// Edges that render inline: array items, map values, and the members of a
/// flattened (nullable-only) union. Named declarations stop the walk.
fn inline_children(graph: &TypeGraph, id: TypeId) -> Vec<TypeId> {
    match graph.node(id) {
        TypeNode::Array(items) => vec![*items],
        TypeNode::Map(values) => vec![*values],
        TypeNode::Union(union) if !graph.is_declaration(id) => {
            let (_, rest) = graph.split_null(&union.members);
            rest
        }
        _ => Vec::new(),
    }
}

fn visit(graph: &TypeGraph, id: TypeId, state: &mut [Mark]) -> Result<(), GraphError> {
    match state[id.index()] {
        Mark::Gray => return Err(GraphError::UnnamedCycle(id.index())),
        Mark::Black => return Ok(()),
        Mark::White => {}
    }
    state[id.index()] = Mark::Gray;
    for child in inline_children(graph, id) {
        visit(graph, child, state)?;
    }
    state[id.index()] = Mark::Black;
    Ok(())
}
