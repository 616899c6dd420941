use super::{encode, RecordStore, Snapshot};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    persist_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `persist` has been called.
    pub fn persist_count(&self) -> usize {
        self.persist_count
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        let raw = if self.persist_count == 0 && self.records.is_empty() {
            // Mirrors a freshly created file.
            Vec::new()
        } else {
            encode(&self.records)?
        };
        Ok(Snapshot {
            records: self.records.clone(),
            raw,
        })
    }

    fn persist(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        self.persist_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds records directly, without counting as a persist.
        pub fn with_record(mut self, id: &str, contact: &str, age: i64) -> Self {
            self.store.records.push(Record::new(id, contact, age));
            self
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 1..=count {
                self.store.records.push(Record::new(
                    i.to_string(),
                    format!("user{}@example.com", i),
                    20 + i as i64,
                ));
            }
            self
        }
    }
}
