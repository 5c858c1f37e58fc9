//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::outline::NodeId;

/// Failure reasons for structural edits.
///
/// Every mutating operation either returns a fully consistent new snapshot
/// or one of these; the input snapshot is never modified on failure, so
/// callers can skip history capture and UI feedback uniformly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("node not found in snapshot: {0:?}")]
    NotFound(NodeId),

    #[error("move would create a cycle: {node:?} under {target:?}")]
    WouldCycle { node: NodeId, target: NodeId },

    #[error("the forest root is not a valid operand")]
    SentinelRoot,

    #[error("edit has no effect")]
    NoEffect,
}

/// Result type for structural edits.
pub type EditResult<T> = Result<T, EditError>;
