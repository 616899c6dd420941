//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! record operations. It dispatches to `commands/*.rs` and returns
//! structured results. It does no I/O of its own beyond what the store does,
//! and holds no business logic.
//!
//! `RecordApi<S: RecordStore>` is generic over the backend:
//! - Production: `RecordApi<FileStore>`
//! - Testing: `RecordApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub struct RecordApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn add(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn remove(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult};
