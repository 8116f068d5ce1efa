use crate::commands::CmdResult;
use crate::error::{Result, StashError};
use crate::model::{Stash, StashName};
use crate::store::DataStore;
use chrono::NaiveDateTime;

/// Stores `content` as a new stash named after `now`.
///
/// Empty content is rejected before anything touches the store. A stash that
/// already exists for the same second is replaced.
pub fn run<S: DataStore>(
    store: &mut S,
    content: Vec<u8>,
    now: NaiveDateTime,
) -> Result<CmdResult> {
    if content.is_empty() {
        return Err(StashError::EmptyContent);
    }

    let name = StashName::for_time(now);
    store.write(&name, &content)?;
    tracing::info!(stash = name.label(), bytes = content.len(), "stashed");

    let confirmation = format!("Stashed {}", name.label());
    Ok(CmdResult::default()
        .with_confirmation(confirmation)
        .with_affected_stashes(vec![Stash::new(name, content)]))
}
