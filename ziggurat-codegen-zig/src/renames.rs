//! Rename key tables: resolved-identifier / external-key pairs and the two
//! symmetric comptime blocks that carry them to the runtime library.

use ziggurat_codegen::{CodeBuilder, KeyTableNames};

/// One recorded rename: the emitted identifier and the external JSON key it
/// stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub field: String,
    pub key: String,
}

/// Per-declaration accumulator for rename entries.
///
/// An entry is recorded only when the resolved identifier differs from the
/// external key, so declarations without renames carry no metadata at all.
#[derive(Debug, Clone, Default)]
pub struct RenameTable {
    entries: Vec<RenameEntry>,
}

impl RenameTable {
    /// Collect `(resolved identifier, external key)` pairs in declaration
    /// order, keeping only the ones that differ.
    pub fn collect<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .filter(|(field, key)| field != key)
            .map(|(field, key)| RenameEntry {
                field: field.to_string(),
                key: key.to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    /// Render the two structurally symmetric key-map constants, one per
    /// (de)serialization direction, each listing every entry as
    /// `.field = "externalKey"`.
    pub fn render_blocks(&self, qualifier: &str, tables: &KeyTableNames) -> String {
        let mut out = self.render_block(qualifier, &tables.parse);
        out.push('\n');
        out.push_str(&self.render_block(qualifier, &tables.stringify));
        out
    }

    fn render_block(&self, qualifier: &str, name: &str) -> String {
        CodeBuilder::zig()
            .block_with_close(&format!("{} {} = .{{", qualifier, name), "};", |b| {
                b.each(&self.entries, |b, entry| {
                    b.line(&format!(
                        ".{} = \"{}\",",
                        entry.field,
                        escape_string(&entry.key)
                    ))
                })
            })
            .build()
    }
}

/// Escape a string for use inside a Zig string literal.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
