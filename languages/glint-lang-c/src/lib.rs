//! C language front end for glint
//!
//! Parses one C translation unit with tree-sitter and exposes the two-pass
//! `FrontEnd` contract: first every declaration with its span and storage
//! classification, then every identifier use resolved against the unit's
//! scopes. The tree is parsed once and both passes walk the same tree.

mod declarations;
mod references;

use glint_analysis_common::{AnalysisError, Declarations, FrontEnd, ReferenceEvent};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// File extensions classified as header-like. Declarations inside such
/// units are excluded from analysis.
const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hh", "hxx"];

/// One parsed C translation unit.
pub struct CTranslationUnit {
    path: PathBuf,
    source: String,
    tree: Tree,
    in_header: bool,
}

impl CTranslationUnit {
    /// Parse `source` as C. The path feeds declaration identities and
    /// header classification; no file IO happens here.
    pub fn parse(path: &Path, source: &str) -> Result<Self, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c::LANGUAGE.into())
            .map_err(|e| AnalysisError::Internal(format!("failed to load C grammar: {e}")))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Parse(format!("cannot parse {}", path.display())))?;
        debug!(file = %path.display(), "parsed C translation unit");

        Ok(Self {
            path: path.to_path_buf(),
            source: source.to_string(),
            tree,
            in_header: is_header_path(path),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrontEnd for CTranslationUnit {
    fn declarations(&self) -> Result<Declarations, AnalysisError> {
        Ok(declarations::collect(
            &self.tree,
            &self.source,
            &self.path,
            self.in_header,
        ))
    }

    fn references(&self) -> Result<Vec<ReferenceEvent>, AnalysisError> {
        Ok(references::collect(&self.tree, &self.source, &self.path))
    }
}

/// Whether a path names a header-like file.
fn is_header_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_paths_are_classified_by_extension() {
        assert!(is_header_path(Path::new("utils.h")));
        assert!(is_header_path(Path::new("include/widget.HPP")));
        assert!(!is_header_path(Path::new("main.c")));
        assert!(!is_header_path(Path::new("Makefile")));
    }

    #[test]
    fn parse_accepts_empty_source() {
        let unit = CTranslationUnit::parse(Path::new("empty.c"), "").unwrap();
        let decls = unit.declarations().unwrap();
        assert!(decls.functions.is_empty());
        assert!(decls.variables.is_empty());
    }
}
