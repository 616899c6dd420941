use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::info;

/// Removes the first record with the given id.
///
/// Later records sharing the id are kept. A missing id leaves the store
/// untouched and is reported as a warning, not an error.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut records = store.load()?.records;

    let Some(position) = records.iter().position(|r| r.id == id) else {
        info!(id, "remove skipped, id not present");
        result.add_message(CmdMessage::warning(format!("Item with id {} not found", id)));
        return Ok(result);
    };

    let removed = records.remove(position);
    store.persist(&records)?;

    info!(id, remaining = records.len(), "item removed");
    Ok(result.with_affected(vec![removed]))
}
