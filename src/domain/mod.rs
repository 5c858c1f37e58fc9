//! Domain layer: the outline model and the pure edit engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading). Everything operates on immutable [`Outline`] snapshots.

pub mod drop;
pub mod error;
pub mod history;
pub mod ops;
pub mod outline;
pub mod text;

pub use drop::{
    approx_label_width, resolve_drop_target, DropTarget, InsertMode, NodeLayout, NodeRect,
    NODE_HEIGHT,
};
pub use error::{EditError, EditResult};
pub use history::History;
pub use outline::{Node, NodeId, Outline};
pub use text::{format, parse};
