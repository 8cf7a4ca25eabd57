//! Build-time failures.
//!
//! Every variant names the zero-based line it was raised on so callers can
//! point a user at the offending record. Lookups that come up empty at query
//! time are `None`, not errors.

pub type Result<T> = std::result::Result<T, InspectorError>;

#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("line {line}: malformed LSIF record")]
    MalformedLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: duplicate vertex id {id} (first declared on line {first_line})")]
    DuplicateVertexId {
        id: i64,
        first_line: usize,
        line: usize,
    },

    #[error("line {line}: duplicate edge id {id} (first declared on line {first_line})")]
    DuplicateEdgeId {
        id: i64,
        first_line: usize,
        line: usize,
    },

    #[error("line {line}: `$event` end without matching begin (depth would become {depth})")]
    UnbalancedEvent { line: usize, depth: isize },
}

impl InspectorError {
    /// Line the failure was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. }
            | Self::DuplicateVertexId { line, .. }
            | Self::DuplicateEdgeId { line, .. }
            | Self::UnbalancedEvent { line, .. } => *line,
        }
    }
}
