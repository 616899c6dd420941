//! # Dispatcher
//!
//! Turns a validated [`Invocation`] into an API call and writes the outcome
//! to an output stream. This is the only layer that decides what the user
//! sees on stdout:
//!
//! - `list` writes the store bytes verbatim
//! - `findById` writes the record as compact JSON, or nothing when absent
//! - `add` / `remove` write nothing on success and the warning text when the
//!   id is taken / missing
//!
//! Output is written without a trailing newline so it can be consumed
//! byte-for-byte by scripts.

use crate::api::RecordApi;
use crate::commands::CmdResult;
use crate::config::{Invocation, Operation};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

/// Runs `invocation` against its file.
pub fn run<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    debug!(
        operation = %invocation.operation,
        file = %invocation.file.display(),
        "dispatching"
    );
    let mut api = RecordApi::new(FileStore::new(invocation.file.clone()));
    perform(&mut api, &invocation.operation, out)
}

pub fn perform<S: RecordStore, W: Write>(
    api: &mut RecordApi<S>,
    operation: &Operation,
    out: &mut W,
) -> Result<()> {
    let result = match operation {
        Operation::List => api.list()?,
        Operation::FindById { id } => api.find_by_id(id)?,
        Operation::Add { item } => api.add(item.clone())?,
        Operation::Remove { id } => api.remove(id)?,
    };
    render(operation, &result, out)
}

fn render<W: Write>(operation: &Operation, result: &CmdResult, out: &mut W) -> Result<()> {
    match operation {
        Operation::List => {
            if let Some(raw) = &result.raw {
                out.write_all(raw)?;
            }
        }
        Operation::FindById { .. } => {
            if let Some(record) = result.listed.first() {
                out.write_all(&serde_json::to_vec(record)?)?;
            }
        }
        Operation::Add { .. } | Operation::Remove { .. } => {
            for message in &result.messages {
                out.write_all(message.content.as_bytes())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
