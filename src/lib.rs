//! Workspace facade over the LSIF inspector core.

pub use lsif_inspector_core::*;
