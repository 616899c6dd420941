use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let found = store.find_by_id(id)?;
    Ok(CmdResult::default().with_listed(found.into_iter().collect()))
}
