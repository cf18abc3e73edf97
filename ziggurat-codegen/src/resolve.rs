//! Two-phase name resolution over a type graph.
//!
//! Phase 1 assigns every base name: top-level entry points first (in
//! declaration order), then the remaining named declarations in graph order,
//! then the per-aggregate roles (properties, union members, enum cases).
//! Phase 2 computes derived names - the rename key tables - as pure
//! functions of already-resolved base names. Rendering starts only after
//! both phases complete, so no declaration can reference a not-yet-stable
//! name.

use indexmap::IndexMap;
use ziggurat_ir::{TypeGraph, TypeId, TypeNode};

use crate::NamingConvention;

/// Names of the two symmetric rename key tables owned by one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTableNames {
    /// Deserialization direction.
    pub parse: String,
    /// Serialization direction.
    pub stringify: String,
}

/// Every name the renderer is allowed to emit, fully resolved up front.
///
/// Lookups panic on ids the resolution pass never saw; that indicates a bug
/// in the caller (an unvalidated graph or a foreign id), not bad input data.
#[derive(Debug, Clone, Default)]
pub struct ResolvedNames {
    types: IndexMap<TypeId, String>,
    properties: IndexMap<TypeId, Vec<String>>,
    members: IndexMap<TypeId, Vec<String>>,
    cases: IndexMap<TypeId, Vec<String>>,
    key_tables: IndexMap<TypeId, KeyTableNames>,
    aliases: Vec<(String, TypeId)>,
}

impl ResolvedNames {
    /// Resolved name of a named declaration.
    pub fn type_name(&self, id: TypeId) -> &str {
        self.types
            .get(&id)
            .map(String::as_str)
            .expect("BUG: type id has no resolved declaration name")
    }

    /// Resolved property names of a class, parallel to its property list.
    pub fn property_names(&self, id: TypeId) -> &[String] {
        self.properties
            .get(&id)
            .expect("BUG: type id has no resolved property names")
    }

    /// Resolved arm names of a named union, parallel to its non-null members.
    pub fn member_names(&self, id: TypeId) -> &[String] {
        self.members
            .get(&id)
            .expect("BUG: type id has no resolved member names")
    }

    /// Resolved case names of an enum, parallel to its case list.
    pub fn case_names(&self, id: TypeId) -> &[String] {
        self.cases
            .get(&id)
            .expect("BUG: type id has no resolved case names")
    }

    /// Derived key-table names, present only for declarations with at least
    /// one rename entry.
    pub fn key_tables(&self, id: TypeId) -> Option<&KeyTableNames> {
        self.key_tables.get(&id)
    }

    /// Top-level aliases (entry points not backed by their own declaration),
    /// in declaration order.
    pub fn aliases(&self) -> &[(String, TypeId)] {
        &self.aliases
    }
}

/// Resolve all names for a graph under a backend's naming convention.
pub fn resolve_names(graph: &TypeGraph, convention: &NamingConvention) -> ResolvedNames {
    let mut names = ResolvedNames::default();
    let mut global = convention.declaration_namespace();

    // Top levels claim their names first. An entry point whose root is a
    // named declaration names that declaration; anything else (a primitive
    // root, a container root, a second entry point for an already-named
    // declaration) becomes a pure alias.
    for top in graph.top_levels() {
        let name = global.assign(&top.name, convention.type_style);
        if graph.is_declaration(top.root) && !names.types.contains_key(&top.root) {
            names.types.insert(top.root, name);
        } else {
            names.aliases.push((name, top.root));
        }
    }

    for (id, node) in graph.nodes() {
        if graph.is_declaration(id) && !names.types.contains_key(&id) {
            let hint = node.name_hint().unwrap_or_default();
            names
                .types
                .insert(id, global.assign(hint, convention.type_style));
        }
    }

    // Per-aggregate namespaces. Union member hints need the full set of
    // declaration names, which the passes above have already fixed.
    for (id, node) in graph.nodes() {
        match node {
            TypeNode::Class(class) => {
                let mut ns = convention.item_namespace();
                let assigned = class
                    .properties
                    .iter()
                    .map(|p| ns.assign(&p.key, convention.property_style))
                    .collect();
                names.properties.insert(id, assigned);
            }
            TypeNode::Enum(en) => {
                let mut ns = convention.item_namespace();
                let assigned = en
                    .cases
                    .iter()
                    .map(|c| ns.assign(&c.value, convention.case_style))
                    .collect();
                names.cases.insert(id, assigned);
            }
            TypeNode::Union(union) if graph.is_declaration(id) => {
                let (_, rest) = graph.split_null(&union.members);
                let mut ns = convention.item_namespace();
                let assigned = rest
                    .iter()
                    .map(|&m| {
                        let hint = member_hint(graph, &names.types, m);
                        ns.assign(&hint, convention.member_style)
                    })
                    .collect();
                names.members.insert(id, assigned);
            }
            _ => {}
        }
    }

    // Phase 2: derived names, pure functions of resolved base names.
    for (id, node) in graph.nodes() {
        let has_renames = match node {
            TypeNode::Class(class) => class
                .properties
                .iter()
                .zip(names.properties[&id].iter())
                .any(|(p, assigned)| *assigned != p.key),
            TypeNode::Enum(en) => en
                .cases
                .iter()
                .zip(names.cases[&id].iter())
                .any(|(c, assigned)| *assigned != c.value),
            _ => false,
        };
        if has_renames {
            let base = names.types[&id].clone();
            let parse = global.assign(
                &format!("{} {}", base, convention.parse_keys_suffix),
                convention.derived_style,
            );
            let stringify = global.assign(
                &format!("{} {}", base, convention.stringify_keys_suffix),
                convention.derived_style,
            );
            names.key_tables.insert(id, KeyTableNames { parse, stringify });
        }
    }

    names
}

/// Naming hint for a union arm, derived from the member's shape: primitives
/// name themselves, containers append a suffix, and named types contribute
/// their resolved declaration name.
fn member_hint(graph: &TypeGraph, types: &IndexMap<TypeId, String>, id: TypeId) -> String {
    match graph.node(id) {
        TypeNode::Any => "any".to_string(),
        TypeNode::Null => "null".to_string(),
        TypeNode::Bool => "bool".to_string(),
        TypeNode::Integer => "integer".to_string(),
        TypeNode::Double => "double".to_string(),
        TypeNode::String => "string".to_string(),
        TypeNode::Array(items) => format!("{}_array", member_hint(graph, types, *items)),
        TypeNode::Map(values) => format!("{}_map", member_hint(graph, types, *values)),
        TypeNode::Class(_) | TypeNode::Enum(_) => types
            .get(&id)
            .expect("BUG: named member resolved before declaration names")
            .clone(),
        TypeNode::Union(union) => {
            if graph.is_declaration(id) {
                types
                    .get(&id)
                    .expect("BUG: named member resolved before declaration names")
                    .clone()
            } else {
                let (_, rest) = graph.split_null(&union.members);
                rest.first()
                    .map(|&m| member_hint(graph, types, m))
                    .unwrap_or_else(|| "any".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ziggurat_ir::Property;

    use super::*;
    use crate::CaseStyle;

    const CONVENTION: NamingConvention = NamingConvention {
        type_style: CaseStyle::Pascal,
        property_style: CaseStyle::Snake,
        member_style: CaseStyle::Snake,
        case_style: CaseStyle::Snake,
        keywords: &["error", "const", "type"],
        type_forbidden: &["std"],
        derived_style: CaseStyle::Snake,
        parse_keys_suffix: "parse keys",
        stringify_keys_suffix: "stringify keys",
    };

    #[test]
    fn test_top_level_name_overrides_hint() {
        let mut graph = TypeGraph::new();
        let string = graph.add(TypeNode::String);
        let class = graph.class("raw-hint", vec![Property::new("name", string)]);
        graph.add_top_level("user profile", class);

        let names = resolve_names(&graph, &CONVENTION);
        assert_eq!(names.type_name(class), "UserProfile");
    }

    #[test]
    fn test_primitive_top_level_becomes_alias() {
        let mut graph = TypeGraph::new();
        let string = graph.add(TypeNode::String);
        let list = graph.array(string);
        graph.add_top_level("names", list);

        let names = resolve_names(&graph, &CONVENTION);
        assert_eq!(names.aliases(), &[("Names".to_string(), list)]);
    }

    #[test]
    fn test_second_entry_point_for_same_declaration_is_an_alias() {
        let mut graph = TypeGraph::new();
        let class = graph.class("user", Vec::new());
        graph.add_top_level("User", class);
        graph.add_top_level("Owner", class);

        let names = resolve_names(&graph, &CONVENTION);
        assert_eq!(names.type_name(class), "User");
        assert_eq!(names.aliases(), &[("Owner".to_string(), class)]);
    }

    #[test]
    fn test_colliding_property_keys_stay_distinct() {
        let mut graph = TypeGraph::new();
        let integer = graph.add(TypeNode::Integer);
        let class = graph.class(
            "record",
            vec![Property::new("id", integer), Property::new("ID", integer)],
        );
        graph.add_top_level("Record", class);

        let names = resolve_names(&graph, &CONVENTION);
        assert_eq!(names.property_names(class), ["id", "id2"]);
    }

    #[test]
    fn test_union_member_hints() {
        let mut graph = TypeGraph::new();
        let null = graph.add(TypeNode::Null);
        let double = graph.add(TypeNode::Double);
        let string = graph.add(TypeNode::String);
        let strings = graph.array(string);
        let union = graph.union_of("value", vec![null, double, string, strings]);
        graph.add_top_level("Value", union);

        let names = resolve_names(&graph, &CONVENTION);
        assert_eq!(
            names.member_names(union),
            ["double", "string", "string_array"]
        );
    }

    #[test]
    fn test_key_tables_only_exist_when_renames_exist() {
        let mut graph = TypeGraph::new();
        let string = graph.add(TypeNode::String);
        let clean = graph.class("clean", vec![Property::new("name", string)]);
        let renamed = graph.class("renamed", vec![Property::new("user-name", string)]);
        graph.add_top_level("Clean", clean);
        graph.add_top_level("Renamed", renamed);

        let names = resolve_names(&graph, &CONVENTION);
        assert!(names.key_tables(clean).is_none());
        let tables = names.key_tables(renamed).expect("tables expected");
        assert_eq!(tables.parse, "renamed_parse_keys");
        assert_eq!(tables.stringify, "renamed_stringify_keys");
    }

    #[test]
    fn test_enum_case_renames_compare_against_raw_value() {
        let mut graph = TypeGraph::new();
        let shouting = graph.enumeration("status", ["ACTIVE", "RETIRED"]);
        let quiet = graph.enumeration("mode", ["on", "off"]);
        graph.add_top_level("Status", shouting);
        graph.add_top_level("Mode", quiet);

        let names = resolve_names(&graph, &CONVENTION);
        assert!(names.key_tables(shouting).is_some());
        assert!(names.key_tables(quiet).is_none());
    }
}
