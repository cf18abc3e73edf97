//! Output buffering: one stream, or one named buffer per declaration.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// How finished output is partitioned, selected once per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// All declarations append to a single unnamed buffer.
    #[default]
    Single,
    /// One named buffer per top-level declaration.
    PerDeclaration,
}

/// A finished output buffer. `filename` is `None` in single-stream mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: Option<String>,
    pub content: String,
}

/// Sink for rendered declaration units.
///
/// A buffer is only reachable inside [`FileSink::with_buffer`], which
/// acquires it on entry and files it on every exit path, so two buffers can
/// never be open at the same time.
#[derive(Debug)]
pub struct FileSink {
    mode: OutputMode,
    extension: &'static str,
    stream: String,
    files: Vec<GeneratedFile>,
    used: IndexSet<String>,
}

impl FileSink {
    pub fn new(mode: OutputMode, extension: &'static str) -> Self {
        Self {
            mode,
            extension,
            stream: String::new(),
            files: Vec::new(),
            used: IndexSet::new(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write one unit of output.
    ///
    /// In single-stream mode the unit appends to the shared buffer and
    /// `name` is ignored; in per-declaration mode the unit becomes its own
    /// buffer whose filename is the lower-cased `name` plus the target
    /// extension.
    pub fn with_buffer<F>(&mut self, name: &str, write: F)
    where
        F: FnOnce(&mut String),
    {
        match self.mode {
            OutputMode::Single => write(&mut self.stream),
            OutputMode::PerDeclaration => {
                let mut buffer = String::new();
                write(&mut buffer);
                let filename = self.claim_filename(name);
                self.files.push(GeneratedFile {
                    filename: Some(filename),
                    content: buffer,
                });
            }
        }
    }

    /// Derive a unique filename from a declaration name.
    ///
    /// Distinct declaration names can collide after lower-casing
    /// (`FooBar` and `Foobar`), so a numeric suffix disambiguates.
    fn claim_filename(&mut self, name: &str) -> String {
        let base = name.to_ascii_lowercase();
        let mut candidate = format!("{}.{}", base, self.extension);
        let mut counter = 2usize;
        while self.used.contains(&candidate) {
            candidate = format!("{}{}.{}", base, counter, self.extension);
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }

    /// Consume the sink and return finished buffers in emission order.
    /// Single-stream mode always yields exactly one unnamed buffer.
    pub fn finish(self) -> Vec<GeneratedFile> {
        match self.mode {
            OutputMode::Single => vec![GeneratedFile {
                filename: None,
                content: self.stream,
            }],
            OutputMode::PerDeclaration => self.files,
        }
    }
}
