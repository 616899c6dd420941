use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{encode, is_blank, RecordStore};

/// Returns the store exactly as serialized on disk.
///
/// A store that has never been written reports the encoding of an empty
/// sequence instead of zero bytes.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let snapshot = store.load()?;
    let raw = if is_blank(&snapshot.raw) {
        encode(&[])?
    } else {
        snapshot.raw
    };

    Ok(CmdResult::default()
        .with_listed(snapshot.records)
        .with_raw(raw))
}
