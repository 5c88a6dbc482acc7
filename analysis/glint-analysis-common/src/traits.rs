// analysis/glint-analysis-common/src/traits.rs

use crate::error::AnalysisError;
use crate::events::{Declarations, ReferenceEvent};

/// Abstraction for the parsing front end (dependency inversion).
///
/// Implementations hold one parsed translation unit and expose two passes
/// over it. `declarations()` must be consumed before `references()` so that
/// every function span exists before any reference is resolved against it;
/// this is what makes the analysis independent of traversal order.
pub trait FrontEnd {
    /// First pass: every function and variable declaration in the unit.
    fn declarations(&self) -> Result<Declarations, AnalysisError>;

    /// Second pass: every identifier use that resolved to a declaration.
    /// Uses with no statically resolvable target are simply absent.
    fn references(&self) -> Result<Vec<ReferenceEvent>, AnalysisError>;
}
