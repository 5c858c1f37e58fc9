//! Persistence boundary trait
//!
//! The engine has no knowledge of the storage medium; callers hand it an
//! implementation of this trait. Mock implementations keep the session
//! layer testable without touching a filesystem.

use std::io;

use crate::domain::Outline;

/// Opaque save/load of the node collection.
pub trait OutlineStore: Send + Sync {
    /// Persist a snapshot.
    fn save(&self, outline: &Outline) -> io::Result<()>;

    /// Retrieve the stored snapshot, `None` when nothing was saved yet.
    fn load(&self) -> io::Result<Option<Outline>>;
}
