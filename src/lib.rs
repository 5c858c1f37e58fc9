//! treeline: a hierarchical outline engine.
//!
//! An arena-backed forest of labeled nodes with snapshot-in/snapshot-out
//! structural edits, drag-gesture drop-target classification, bounded
//! undo/redo, and a line-oriented text notation. The same operation set
//! backs an editable text outline and a node-graph diagram over one shared
//! model; two views hold a reference to the same [`EditorSession`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, EditorSession};
pub use config::Settings;
pub use domain::{
    approx_label_width, format, parse, resolve_drop_target, DropTarget, EditError, EditResult,
    History, InsertMode, Node, NodeId, NodeLayout, NodeRect, Outline, NODE_HEIGHT,
};
pub use infrastructure::{FileStore, OutlineStore};
