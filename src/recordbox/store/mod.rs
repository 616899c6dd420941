//! # Storage Layer
//!
//! The [`RecordStore`] trait is the repository abstraction the rest of the
//! crate works against: load everything, mutate in memory, persist
//! everything. Call sites never touch files directly, so an embedded
//! database could replace the JSON file without changing them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array in one file
//! - [`memory::InMemoryStore`]: no persistence, for command-layer tests
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@b.com","age":30},{"id":"2","email":"c@d.org","age":41}]
//! ```
//!
//! Compact JSON, field order `id`, `email`, `age`, insertion order kept.
//! An empty file is a valid empty store. Anything else that fails to decode
//! is reported as corrupt rather than silently discarded.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Everything read from the backing store in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<Record>,
    /// The bytes the records were decoded from, untouched.
    pub raw: Vec<u8>,
}

/// Abstract interface for record storage.
pub trait RecordStore {
    /// Read and decode the whole store.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the whole store with `records`.
    fn persist(&mut self, records: &[Record]) -> Result<()>;

    /// First record whose id equals `id`. Linear scan over a fresh load.
    fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        Ok(self
            .load()?
            .records
            .into_iter()
            .find(|record| record.id == id))
    }
}

pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

/// True for content that should be read as "no records yet".
pub fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(u8::is_ascii_whitespace)
}
