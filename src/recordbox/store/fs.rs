use super::{encode, is_blank, RecordStore, Snapshot};
use crate::error::{RecordError, Result};
use crate::model::Record;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A store backed by a single JSON file.
///
/// The file is created on first use. Every `persist` truncates and rewrites
/// it whole.
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

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RecordError::Io)?;
            }
        }
        Ok(())
    }

    fn decode(&self, raw: &[u8]) -> Result<Vec<Record>> {
        if is_blank(raw) {
            return Ok(Vec::new());
        }
        // A literal `null` is what a nil list encodes to; read it as empty.
        serde_json::from_slice::<Option<Vec<Record>>>(raw)
            .map(Option::unwrap_or_default)
            .map_err(|e| RecordError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Snapshot> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)?;

        let records = self.decode(&raw)?;
        debug!(
            path = %self.path.display(),
            bytes = raw.len(),
            records = records.len(),
            "loaded store"
        );

        Ok(Snapshot { records, raw })
    }

    fn persist(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let encoded = encode(records)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&encoded)?;

        debug!(
            path = %self.path.display(),
            bytes = encoded.len(),
            records = records.len(),
            "persisted store"
        );
        Ok(())
    }
}
