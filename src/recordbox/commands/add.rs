use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use tracing::info;

/// Appends `record` unless its id is already taken.
///
/// A taken id is not an error: the store is left alone and the result
/// carries a warning.
pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(existing) = store.find_by_id(&record.id)? {
        info!(id = %existing.id, "add rejected, id already present");
        result.add_message(CmdMessage::warning(format!(
            "Item with id {} already exists",
            existing.id
        )));
        return Ok(result);
    }

    let mut records = store.load()?.records;
    records.push(record.clone());
    store.persist(&records)?;

    info!(id = %record.id, total = records.len(), "item added");
    Ok(result.with_affected(vec![record]))
}
