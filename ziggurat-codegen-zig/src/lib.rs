//! Zig code generation backend for Ziggurat.
//!
//! Turns a fully inferred [`ziggurat_ir::TypeGraph`] into Zig declarations:
//! structs for classes, `enum`s for string enumerations, `union(enum)`s for
//! tagged unions, `?T` for nullable shapes, and key-map constants carrying
//! serialization renames for the runtime library.

mod generator;
mod naming;
mod renames;
mod structure_renderer;
mod type_mapper;
mod zig_file;

pub use generator::Generator;
pub use naming::{ZIG_KEYWORDS, ZIG_NAMING, ZIG_TYPE_FORBIDDEN};
pub use renames::{RenameEntry, RenameTable};
pub use structure_renderer::{RenderedDecl, ZigStructureRenderer};
pub use type_mapper::{RenderedType, ZigTypeMapper};
pub use zig_file::ZigFile;
// Shared surface a caller needs alongside the generator.
pub use ziggurat_codegen::{
    GeneratedFile, LanguageBackend, OutputMode, RenderOptions, Visibility,
};
