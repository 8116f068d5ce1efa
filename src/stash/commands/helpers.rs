use crate::error::Result;
use crate::index::ReverseIndex;
use crate::model::StashName;
use crate::store::DataStore;

/// Lists the store and validates `value` against its size in one step, so the
/// bound reported in an error is the size that was actually listed.
pub fn checked_names<S: DataStore>(
    store: &S,
    what: &'static str,
    value: i64,
) -> Result<(Vec<StashName>, ReverseIndex)> {
    let names = store.list_names()?;
    let index = ReverseIndex::checked(what, value, names.len())?;
    Ok((names, index))
}
