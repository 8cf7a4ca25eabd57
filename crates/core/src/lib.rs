//! LSIF Inspector Core Library
//!
//! Indexes an LSIF dump (one JSON vertex or edge per line) for constant-time
//! lookup by id and by incident vertex, and keeps the indented text rendering
//! of the dump addressable by character offset so a viewer can map a caret
//! back to a graph element and its neighbors.

pub mod element;
pub mod error;
pub mod find;
pub mod graph;
pub mod graph_builder;
pub mod indent;
pub mod lines;
pub mod neighbors;
pub mod stats;

// Re-export main types
pub use element::{labels, ElementKind, GraphElement, Position};
pub use error::{InspectorError, Result};
pub use find::FindSession;
pub use graph::LsifGraph;
pub use graph_builder::{BuildOptions, GraphBuilder};
pub use indent::{indent_lines, EventNesting, IndentOptions, DEFAULT_INDENT_STEP};
pub use lines::{Line, LineTable, LineTerminator, Match};
pub use neighbors::{Neighbor, Relation};
pub use stats::{GraphStats, LabelCount};
