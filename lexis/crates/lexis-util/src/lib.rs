//! lexis-util - foundation types shared by the lexis crates.
//!
//! - [`symbol`]: the process-wide string interner. Token identities are
//!   symbols, so comparing two of them is an integer compare.
//! - [`span`]: byte/line/column positions and the [`SourceMap`] that turns
//!   them into readable locations.
//! - [`diagnostic`]: structured reports, the [`Handler`] that collects them,
//!   and caret-underlined rendering.
//! - [`error`]: error enums for the above.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
