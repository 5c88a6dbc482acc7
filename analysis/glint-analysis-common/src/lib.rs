// analysis/glint-analysis-common/src/lib.rs

pub mod diagnostics;
pub mod error;
pub mod events;
pub mod traits;

pub use diagnostics::{render_template, DiagnosticSink};
pub use error::AnalysisError;
pub use events::{
    DeclId, Declarations, FunctionDecl, LineSpan, Location, ReferenceEvent, StorageDuration,
    VariableDecl,
};
pub use traits::FrontEnd;
