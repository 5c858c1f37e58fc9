//! File-backed outline store using the text notation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::instrument;

use crate::domain::{format, parse, Outline};
use crate::infrastructure::traits::OutlineStore;

/// Stores the outline as notation text at a fixed path. Writes go through
/// a temporary file in the target directory followed by a rename, so a
/// crashed write never leaves a truncated outline behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutlineStore for FileStore {
    #[instrument(level = "debug", skip(self, outline))]
    fn save(&self, outline: &Outline) -> io::Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(format(outline).as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&self) -> io::Result<Option<Outline>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(parse(&content))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
