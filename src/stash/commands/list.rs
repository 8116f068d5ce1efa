use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayStash;
use crate::store::DataStore;
use crate::teaser::teaser;

use super::helpers::checked_names;

/// Collects the `limit` most recent stashes, newest first, each with a teaser
/// of at most `teaser_lines` lines.
///
/// Display numbers count down from `limit` to 1 in output order.
pub fn run<S: DataStore>(store: &S, limit: i64, teaser_lines: usize) -> Result<CmdResult> {
    let (names, index) = checked_names(store, "limit", limit)?;
    let count = index.get();
    let recent = &names[index.to_offset(names.len())..];

    let mut listed = Vec::with_capacity(count);
    for (i, name) in recent.iter().rev().enumerate() {
        let content = store.read(name)?;
        listed.push(DisplayStash {
            index: count - i,
            name: name.clone(),
            teaser: teaser(&content, teaser_lines),
        });
    }

    tracing::debug!(shown = listed.len(), total = names.len(), "listed stashes");
    Ok(CmdResult::default().with_listed_stashes(listed))
}
