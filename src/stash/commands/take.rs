use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Stash;
use crate::store::DataStore;

use super::helpers::checked_names;

/// Reads the stash at reverse position `number` (1 = newest) in full.
pub fn run<S: DataStore>(store: &S, number: i64) -> Result<CmdResult> {
    let (names, index) = checked_names(store, "stash number", number)?;
    let name = names[index.to_offset(names.len())].clone();
    let content = store.read(&name)?;

    tracing::debug!(stash = name.label(), index = %index, "took stash");
    Ok(CmdResult::default().with_affected_stashes(vec![Stash::new(name, content)]))
}
