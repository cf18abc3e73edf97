//! The Zig driver: fixed emission order, headers, and output partitioning.

use eyre::Result;
use ziggurat_codegen::{
    FileSink, GeneratedFile, LanguageBackend, NamingConvention, OutputMode, RenderOptions,
    ResolvedNames, resolve_names, validate,
};
use ziggurat_ir::{TypeGraph, TypeNode};

use crate::ZIG_NAMING;
use crate::structure_renderer::ZigStructureRenderer;
use crate::zig_file::ZigFile;

const PRELUDE: &str = "const std = @import(\"std\");";

/// One declaration ready for the sink: its resolved name (for the filename
/// in per-declaration mode) and its rendered source.
struct Unit {
    name: String,
    source: String,
    lossy: bool,
}

/// Zig code generator driving the full render of one type graph.
///
/// Emission order is a correctness contract, not a style choice: header,
/// prelude, pure aliases, classes, unions, enums, so that two renders of the
/// same graph are byte-identical.
pub struct Generator<'a> {
    graph: &'a TypeGraph,
    options: RenderOptions,
}

impl LanguageBackend for Generator<'_> {
    fn language(&self) -> &'static str {
        "zig"
    }

    fn file_extension(&self) -> &'static str {
        "zig"
    }

    fn convention(&self) -> &'static NamingConvention {
        &ZIG_NAMING
    }

    fn render(&self) -> Result<Vec<GeneratedFile>> {
        self.render_files()
    }
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(graph: &'a TypeGraph, options: RenderOptions) -> Self {
        Self { graph, options }
    }

    fn render_files(&self) -> Result<Vec<GeneratedFile>> {
        validate(self.graph)?;
        let names = resolve_names(self.graph, &ZIG_NAMING);
        let renderer =
            ZigStructureRenderer::new(self.graph, &names, self.options.visibility);

        let mut units = Vec::new();
        for (name, root) in names.aliases() {
            let rendered = renderer.render_alias(name, *root);
            units.push(Unit {
                name: name.clone(),
                source: rendered.source,
                lossy: rendered.lossy,
            });
        }
        for (id, node) in self.graph.nodes() {
            if let TypeNode::Class(class) = node {
                let rendered = renderer.render_class(id, class);
                units.push(Unit {
                    name: names.type_name(id).to_string(),
                    source: rendered.source,
                    lossy: rendered.lossy,
                });
            }
        }
        for (id, node) in self.graph.nodes() {
            if let TypeNode::Union(union) = node {
                if self.graph.is_declaration(id) {
                    let rendered = renderer.render_union(id, union);
                    units.push(Unit {
                        name: names.type_name(id).to_string(),
                        source: rendered.source,
                        lossy: rendered.lossy,
                    });
                }
            }
        }
        for (id, node) in self.graph.nodes() {
            if let TypeNode::Enum(en) = node {
                let rendered = renderer.render_enum(id, en);
                units.push(Unit {
                    name: names.type_name(id).to_string(),
                    source: rendered.source,
                    lossy: rendered.lossy,
                });
            }
        }

        let lossy = units.iter().any(|unit| unit.lossy);
        let header = self.header_text(&names, lossy);

        let mut sink = FileSink::new(self.options.output, self.file_extension());
        match self.options.output {
            OutputMode::Single => {
                let mut file = ZigFile::new().header_comment(&header).import(PRELUDE);
                for unit in &units {
                    file = file.add(unit.source.clone());
                }
                sink.with_buffer("", |buf| buf.push_str(&file.render()));
            }
            OutputMode::PerDeclaration => {
                for unit in &units {
                    let file = ZigFile::new()
                        .header_comment(&header)
                        .import(PRELUDE)
                        .add(unit.source.clone());
                    sink.with_buffer(&unit.name, |buf| buf.push_str(&file.render()));
                }
            }
        }
        Ok(sink.finish())
    }

    /// The leading comment block: the caller-supplied text verbatim, or the
    /// generated default; never both.
    fn header_text(&self, names: &ResolvedNames, lossy: bool) -> String {
        if let Some(comment) = &self.options.leading_comment {
            return comment.clone();
        }
        let mut lines = vec![
            "Generated by ziggurat from JSON samples. Do not edit by hand.".to_string(),
            String::new(),
            "To parse this data with std.json:".to_string(),
            String::new(),
            format!(
                "    const parsed = try std.json.parseFromSlice({}, allocator, source, .{{}});",
                self.example_name(names)
            ),
        ];
        if lossy {
            lines.push(String::new());
            lines.push(
                "Some values had no stable inferred shape; they are typed as std.json.Value."
                    .to_string(),
            );
        }
        lines.join("\n")
    }

    /// Name shown in the default header's usage example: the first top-level
    /// entry point.
    fn example_name(&self, names: &ResolvedNames) -> String {
        let Some(top) = self.graph.top_levels().first() else {
            return "Root".to_string();
        };
        if self.graph.is_declaration(top.root) {
            names.type_name(top.root).to_string()
        } else {
            names
                .aliases()
                .first()
                .map(|(name, _)| name.clone())
                .unwrap_or_else(|| "Root".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use ziggurat_ir::Property;

    use super::*;

    fn sample_graph() -> TypeGraph {
        let mut graph = TypeGraph::new();
        let string = graph.add(TypeNode::String);
        let integer = graph.add(TypeNode::Integer);
        let class = graph.class(
            "user",
            vec![
                Property::new("name", string),
                Property::new("age", integer).optional(),
            ],
        );
        let color = graph.enumeration("color", ["red", "green"]);
        let double = graph.add(TypeNode::Double);
        let union = graph.union_of("size", vec![double, string]);
        graph.add_top_level("User", class);
        graph.add_top_level("Color", color);
        graph.add_top_level("Size", union);
        graph
    }

    #[test]
    fn test_single_mode_emits_one_unnamed_buffer() {
        let graph = sample_graph();
        let files = Generator::new(&graph).render().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, None);
    }

    #[test]
    fn test_emission_order_is_classes_then_unions_then_enums() {
        let graph = sample_graph();
        let files = Generator::new(&graph).render().unwrap();
        let content = &files[0].content;

        let class_at = content.find("pub const User = struct").unwrap();
        let union_at = content.find("pub const Size = union(enum)").unwrap();
        let enum_at = content.find("pub const Color = enum").unwrap();
        assert!(class_at < union_at);
        assert!(union_at < enum_at);
    }

    #[test]
    fn test_prelude_follows_header() {
        let graph = sample_graph();
        let files = Generator::new(&graph).render().unwrap();
        let content = &files[0].content;
        assert!(content.starts_with("// Generated by ziggurat"));
        assert!(content.contains("\n\nconst std = @import(\"std\");\n\n"));
    }

    #[test]
    fn test_caller_comment_replaces_default_header() {
        let graph = sample_graph();
        let options = RenderOptions {
            leading_comment: Some("Custom banner.".to_string()),
            ..RenderOptions::default()
        };
        let files = Generator::with_options(&graph, options).render().unwrap();
        assert!(files[0].content.starts_with("// Custom banner.\n"));
        assert!(!files[0].content.contains("Generated by ziggurat"));
    }

    #[test]
    fn test_per_declaration_mode_splits_files() {
        let graph = sample_graph();
        let options = RenderOptions {
            output: OutputMode::PerDeclaration,
            ..RenderOptions::default()
        };
        let files = Generator::with_options(&graph, options).render().unwrap();

        let filenames: Vec<_> = files
            .iter()
            .map(|f| f.filename.as_deref().unwrap())
            .collect();
        assert_eq!(filenames, ["user.zig", "size.zig", "color.zig"]);
        for file in &files {
            assert!(file.content.contains(PRELUDE));
        }
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let graph = TypeGraph::new();
        assert!(Generator::new(&graph).render().is_err());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let graph = sample_graph();
        let first = Generator::new(&graph).render().unwrap();
        let second = Generator::new(&graph).render().unwrap();
        assert_eq!(first, second);
    }
}
