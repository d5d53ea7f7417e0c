//! Hierarchical file selection
//!
//! A flat list of relative paths is grouped into top-level directory rows
//! followed by root-level file rows, with a tri-state selection on top.
//!
//! ## Module structure
//!
//! - `rows`: Row sum type and the deterministic row builder
//! - `selection`: Selected path set and derived directory state
//! - `selector`: Cursor, scroll window and confirm/skip handling

mod rows;
mod selection;
mod selector;


pub use rows::{build_rows, Row};
pub use selection::{DirState, Selection};
pub use selector::{FileSelector, SelectorEvent, SelectorOutcome};
