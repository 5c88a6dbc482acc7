//! Declaration and reference events delivered by a language front end.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unique identity of one declaration within a translation unit.
///
/// Display names conflate distinct declarations (two `static` helpers with
/// the same name, overload sets in C++), so every index and set in the
/// analysis is keyed by this id. The display name travels separately and is
/// only used when rendering messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclId(String);

impl DeclId {
    /// Build an id from a declaration's file, line and name.
    pub fn new(file: &Path, line: u32, name: &str) -> Self {
        Self(format!("{}::{}:{}", file.display(), line, name))
    }

    /// Wrap an already-formed id, e.g. one minted by a test fixture.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeclId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source position, 1-indexed line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// File path.
    pub file: PathBuf,

    /// Line number (1-indexed).
    pub line: u32,

    /// Column number (0-indexed).
    pub column: u32,
}

/// The inclusive line interval a definition occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

impl LineSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `line` falls inside this span (inclusive on both ends).
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line <= self.end
    }

    /// Number of lines covered. Used to rank overlapping spans.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Storage-duration classification supplied by the front end.
///
/// The analysis takes this classification as ground truth and never
/// re-derives it from syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageDuration {
    /// Lives for the whole program: file-scope variables and explicit
    /// `static` locals.
    Static,

    /// Function-local lifetime: ordinary locals and parameters.
    Automatic,
}

impl StorageDuration {
    pub fn is_static(self) -> bool {
        matches!(self, StorageDuration::Static)
    }
}

/// A function declaration seen during the declaration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Unique identity of this definition.
    pub id: DeclId,

    /// Display name, used in diagnostics only.
    pub name: String,

    /// The definition's line span, when both endpoints resolved to real
    /// source lines. `None` for synthesized/implicit code.
    pub span: Option<LineSpan>,

    /// Whether the declaration sits in a header-like file.
    pub in_header: bool,
}

/// A variable declaration seen during the declaration pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableDecl {
    /// Unique identity of this declaration.
    pub id: DeclId,

    /// Declared name.
    pub name: String,

    /// Declaration site.
    pub location: Location,

    /// Front-end storage classification.
    pub storage: StorageDuration,

    /// Whether the declaration sits in a header-like file.
    pub in_header: bool,
}

/// Everything the declaration pass produced for one translation unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Declarations {
    pub functions: Vec<FunctionDecl>,
    pub variables: Vec<VariableDecl>,
}

/// One identifier use that resolved to a declaration.
///
/// Transient: consumed by the reference pass and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceEvent {
    /// The declaration this use resolved to.
    pub target: DeclId,

    /// Line of the use site (1-indexed).
    pub line: u32,
}
