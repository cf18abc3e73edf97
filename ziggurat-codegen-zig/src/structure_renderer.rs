//! Rendering of class, enum, union, and alias declarations to Zig.

use ziggurat_codegen::{CodeBuilder, ResolvedNames, Visibility};
use ziggurat_ir::{ClassNode, EnumNode, TypeGraph, TypeId, UnionNode};

use crate::renames::RenameTable;
use crate::type_mapper::ZigTypeMapper;

/// One fully rendered declaration unit: the declaration itself plus, for
/// classes and enums with renames, the trailing key-map blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDecl {
    pub source: String,
    pub lossy: bool,
}

/// Renders individual declarations; the generator decides their order and
/// which buffer they land in.
pub struct ZigStructureRenderer<'a> {
    graph: &'a TypeGraph,
    names: &'a ResolvedNames,
    visibility: Visibility,
}

impl<'a> ZigStructureRenderer<'a> {
    pub fn new(graph: &'a TypeGraph, names: &'a ResolvedNames, visibility: Visibility) -> Self {
        Self {
            graph,
            names,
            visibility,
        }
    }

    fn qualifier(&self) -> &'static str {
        match self.visibility {
            Visibility::Public => "pub const",
            Visibility::Private => "const",
        }
    }

    fn mapper(&self) -> ZigTypeMapper<'a> {
        ZigTypeMapper::new(self.graph, self.names)
    }

    /// Render a class: one field per property in original order, optional
    /// fields defaulted to `null`, rename tables after the body when any
    /// identifier differs from its external key.
    pub fn render_class(&self, id: TypeId, class: &ClassNode) -> RenderedDecl {
        let mapper = self.mapper();
        let name = self.names.type_name(id);
        let fields = self.names.property_names(id);
        let mut lossy = false;

        let mut source = if class.properties.is_empty() {
            format!("{} {} = struct {{}};\n", self.qualifier(), name)
        } else {
            let mut builder = CodeBuilder::zig()
                .line(&format!("{} {} = struct {{", self.qualifier(), name))
                .indent();
            for (property, field) in class.properties.iter().zip(fields) {
                if let Some(text) = &property.description {
                    builder = builder.doc_comment(text);
                }
                let ty = mapper.property_type(property);
                lossy |= ty.lossy;
                let default = if property.optional { " = null" } else { "" };
                builder = builder.line(&format!("{}: {}{},", field, ty.source, default));
            }
            builder.dedent().line("};").build()
        };

        if let Some(tables) = self.names.key_tables(id) {
            let table = RenameTable::collect(
                fields
                    .iter()
                    .map(String::as_str)
                    .zip(class.properties.iter().map(|p| p.key.as_str())),
            );
            source.push('\n');
            source.push_str(&table.render_blocks(self.qualifier(), tables));
        }

        RenderedDecl { source, lossy }
    }

    /// Render an enum: one case per external value in original order.
    pub fn render_enum(&self, id: TypeId, en: &EnumNode) -> RenderedDecl {
        let name = self.names.type_name(id);
        let cases = self.names.case_names(id);

        let mut source = CodeBuilder::zig()
            .block_with_close(
                &format!("{} {} = enum {{", self.qualifier(), name),
                "};",
                |b| b.each(cases, |b, case| b.line(&format!("{},", case))),
            )
            .build();

        if let Some(tables) = self.names.key_tables(id) {
            let table = RenameTable::collect(
                cases
                    .iter()
                    .map(String::as_str)
                    .zip(en.cases.iter().map(|c| c.value.as_str())),
            );
            source.push('\n');
            source.push_str(&table.render_blocks(self.qualifier(), tables));
        }

        RenderedDecl { source, lossy: false }
    }

    /// Render a tagged union: one arm per non-null member in original order,
    /// arm payloads rendered through the type mapper.
    pub fn render_union(&self, id: TypeId, union: &UnionNode) -> RenderedDecl {
        let mapper = self.mapper();
        let name = self.names.type_name(id);
        let arms = self.names.member_names(id);
        let (_, members) = self.graph.split_null(&union.members);
        let mut lossy = false;

        let source = CodeBuilder::zig()
            .block_with_close(
                &format!("{} {} = union(enum) {{", self.qualifier(), name),
                "};",
                |mut b| {
                    for (arm, member) in arms.iter().zip(members) {
                        let payload = mapper.render_type(member);
                        lossy |= payload.lossy;
                        b = b.line(&format!("{}: {},", arm, payload.source));
                    }
                    b
                },
            )
            .build();

        RenderedDecl { source, lossy }
    }

    /// Render a pure top-level alias.
    pub fn render_alias(&self, name: &str, root: TypeId) -> RenderedDecl {
        let ty = self.mapper().render_type(root);
        RenderedDecl {
            source: format!("{} {} = {};\n", self.qualifier(), name, ty.source),
            lossy: ty.lossy,
        }
    }
}
