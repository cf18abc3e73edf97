//! Zig type mapper: maps every type-graph node to a Zig type expression.

use ziggurat_codegen::ResolvedNames;
use ziggurat_ir::{Property, TypeGraph, TypeId, TypeNode, UnionNode};

/// A rendered Zig type expression.
///
/// `optional` is true when the expression is already `?`-wrapped, so callers
/// never stack a second `?` on top. `lossy` marks best-effort fragments
/// (`std.json.Value`) whose fidelity downstream tooling may warn about; it
/// propagates through containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedType {
    pub source: String,
    pub optional: bool,
    pub lossy: bool,
}

impl RenderedType {
    fn plain(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            optional: false,
            lossy: false,
        }
    }

    fn untyped(optional: bool) -> Self {
        Self {
            source: if optional {
                "?std.json.Value".to_string()
            } else {
                "std.json.Value".to_string()
            },
            optional,
            lossy: true,
        }
    }

    /// Wrap in `?` unless the expression already is optional.
    pub fn as_optional(self) -> Self {
        if self.optional {
            self
        } else {
            Self {
                source: format!("?{}", self.source),
                optional: true,
                lossy: self.lossy,
            }
        }
    }
}

/// Type-directed mapping from graph nodes to Zig type expressions.
///
/// Named declarations (classes, enums, non-flattened unions) render as a
/// reference to their resolved name; the declaration itself is emitted once
/// by the structure renderer.
pub struct ZigTypeMapper<'a> {
    graph: &'a TypeGraph,
    names: &'a ResolvedNames,
}

impl<'a> ZigTypeMapper<'a> {
    pub fn new(graph: &'a TypeGraph, names: &'a ResolvedNames) -> Self {
        Self { graph, names }
    }

    /// Render the type expression for a node. Total over every node kind.
    pub fn render_type(&self, id: TypeId) -> RenderedType {
        match self.graph.node(id) {
            TypeNode::Any => RenderedType::untyped(false),
            TypeNode::Null => RenderedType::untyped(true),
            TypeNode::Bool => RenderedType::plain("bool"),
            TypeNode::Integer => RenderedType::plain("i64"),
            TypeNode::Double => RenderedType::plain("f64"),
            TypeNode::String => RenderedType::plain("[]const u8"),
            TypeNode::Array(items) => {
                let inner = self.render_type(*items);
                RenderedType {
                    source: format!("[]{}", inner.source),
                    optional: false,
                    lossy: inner.lossy,
                }
            }
            TypeNode::Map(values) => {
                let value = self.render_type(*values);
                RenderedType {
                    source: format!("std.json.ArrayHashMap({})", value.source),
                    optional: false,
                    lossy: value.lossy,
                }
            }
            TypeNode::Class(_) | TypeNode::Enum(_) => {
                RenderedType::plain(self.names.type_name(id))
            }
            TypeNode::Union(union) => self.union_type(id, union),
        }
    }

    /// The type of one class property; optional properties wrap in `?`.
    pub fn property_type(&self, property: &Property) -> RenderedType {
        let rendered = self.render_type(property.ty);
        if property.optional {
            rendered.as_optional()
        } else {
            rendered
        }
    }

    /// Nullable flattening. `Null` is factored out first: one remaining
    /// member renders as optional-of-member, two or more as a reference to
    /// the union's own declaration. This also covers the map value position,
    /// where `Union{Null, Named}` must come out as `?Named` rather than a
    /// synthetic one-arm union.
    fn union_type(&self, id: TypeId, union: &UnionNode) -> RenderedType {
        let (has_null, rest) = self.graph.split_null(&union.members);
        match rest.as_slice() {
            [] => RenderedType::untyped(has_null),
            [only] => {
                let inner = self.render_type(*only);
                if has_null {
                    inner.as_optional()
                } else {
                    inner
                }
            }
            _ => {
                let reference = RenderedType::plain(self.names.type_name(id));
                if has_null {
                    reference.as_optional()
                } else {
                    reference
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ziggurat_codegen::resolve_names;

    use super::*;
    use crate::ZIG_NAMING;

    fn mapped(graph: &TypeGraph, id: TypeId) -> RenderedType {
        let names = resolve_names(graph, &ZIG_NAMING);
        ZigTypeMapper::new(graph, &names).render_type(id)
    }

    #[test]
    fn test_primitives() {
        let mut graph = TypeGraph::new();
        let bool_id = graph.add(TypeNode::Bool);
        let int_id = graph.add(TypeNode::Integer);
        let double_id = graph.add(TypeNode::Double);
        let string_id = graph.add(TypeNode::String);
        graph.add_top_level("Root", bool_id);

        assert_eq!(mapped(&graph, bool_id).source, "bool");
        assert_eq!(mapped(&graph, int_id).source, "i64");
        assert_eq!(mapped(&graph, double_id).source, "f64");
        assert_eq!(mapped(&graph, string_id).source, "[]const u8");
    }

    #[test]
    fn test_any_is_lossy() {
        let mut graph = TypeGraph::new();
        let any = graph.add(TypeNode::Any);
        graph.add_top_level("Root", any);

        let rendered = mapped(&graph, any);
        assert_eq!(rendered.source, "std.json.Value");
        assert!(rendered.lossy);
    }

    #[test]
    fn test_containers_propagate_lossiness() {
        let mut graph = TypeGraph::new();
        let any = graph.add(TypeNode::Any);
        let list = graph.array(any);
        graph.add_top_level("Root", list);

        let rendered = mapped(&graph, list);
        assert_eq!(rendered.source, "[]std.json.Value");
        assert!(rendered.lossy);
    }

    #[test]
    fn test_nullable_union_flattens_to_optional() {
        let mut graph = TypeGraph::new();
        let null = graph.add(TypeNode::Null);
        let int_id = graph.add(TypeNode::Integer);
        let nullable = graph.union_of("maybe_int", vec![null, int_id]);
        graph.add_top_level("Root", nullable);

        let rendered = mapped(&graph, nullable);
        assert_eq!(rendered.source, "?i64");
        assert!(rendered.optional);
        assert!(!rendered.lossy);
    }

    #[test]
    fn test_map_of_nullable_class_is_optional_value_type() {
        let mut graph = TypeGraph::new();
        let null = graph.add(TypeNode::Null);
        let class = graph.class("foo", Vec::new());
        let nullable = graph.union_of("maybe_foo", vec![null, class]);
        let map = graph.map(nullable);
        graph.add_top_level("Lookup", map);

        let rendered = mapped(&graph, map);
        assert_eq!(rendered.source, "std.json.ArrayHashMap(?Foo)");
    }

    #[test]
    fn test_tagged_union_renders_as_name_reference() {
        let mut graph = TypeGraph::new();
        let int_id = graph.add(TypeNode::Integer);
        let string_id = graph.add(TypeNode::String);
        let union = graph.union_of("id_or_label", vec![int_id, string_id]);
        graph.add_top_level("IdOrLabel", union);

        assert_eq!(mapped(&graph, union).source, "IdOrLabel");
    }

    #[test]
    fn test_nullable_tagged_union_is_optional_reference() {
        let mut graph = TypeGraph::new();
        let null = graph.add(TypeNode::Null);
        let int_id = graph.add(TypeNode::Integer);
        let string_id = graph.add(TypeNode::String);
        let union = graph.union_of("value", vec![null, int_id, string_id]);
        graph.add_top_level("Value", union);

        assert_eq!(mapped(&graph, union).source, "?Value");
    }

    #[test]
    fn test_optional_property_is_not_double_wrapped() {
        let mut graph = TypeGraph::new();
        let null = graph.add(TypeNode::Null);
        let int_id = graph.add(TypeNode::Integer);
        let nullable = graph.union_of("maybe_int", vec![null, int_id]);
        let property = Property::new("count", nullable).optional();
        let class = graph.class("holder", vec![property.clone()]);
        graph.add_top_level("Holder", class);

        let names = resolve_names(&graph, &ZIG_NAMING);
        let mapper = ZigTypeMapper::new(&graph, &names);
        assert_eq!(mapper.property_type(&property).source, "?i64");
    }
}
