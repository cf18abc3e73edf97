//! ZigFile abstraction for structured Zig file generation.
//!
//! Provides a high-level API for assembling one output buffer: leading
//! comment lines, the import prelude, and body declarations separated by
//! blank lines.

/// A structured representation of a generated Zig file.
///
/// # Example
///
/// ```
/// use ziggurat_codegen_zig::ZigFile;
///
/// let file = ZigFile::new()
///     .header_comment("Generated file.")
///     .import("const std = @import(\"std\");")
///     .add("pub const Id = i64;\n");
/// assert!(file.render().starts_with("// Generated file.\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZigFile {
    header: Vec<String>,
    imports: Vec<String>,
    body: Vec<String>,
}

impl ZigFile {
    /// Create a new empty ZigFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add leading comment text; each line is emitted as a `//` comment.
    pub fn header_comment(mut self, text: &str) -> Self {
        self.header.extend(text.lines().map(str::to_string));
        self
    }

    /// Add an import line, emitted verbatim below the header.
    pub fn import(mut self, line: impl Into<String>) -> Self {
        self.imports.push(line.into());
        self
    }

    /// Add a body declaration unit.
    pub fn add(mut self, unit: impl Into<String>) -> Self {
        let mut unit = unit.into();
        if !unit.ends_with('\n') {
            unit.push('\n');
        }
        self.body.push(unit);
        self
    }

    /// Render the file: header, prelude, then body units, with blank-line
    /// interposition between sections and between units.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::new();
        if !self.header.is_empty() {
            let lines: Vec<String> = self
                .header
                .iter()
                .map(|line| {
                    if line.is_empty() {
                        "//".to_string()
                    } else {
                        format!("// {}", line)
                    }
                })
                .collect();
            sections.push(lines.join("\n") + "\n");
        }
        if !self.imports.is_empty() {
            sections.push(self.imports.join("\n") + "\n");
        }
        sections.extend(self.body.iter().cloned());
        sections.join("\n")
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}
