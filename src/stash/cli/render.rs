//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` and takes `use_color` explicitly, so output can be asserted on in
//! tests without a terminal.

use super::styles::STASH_THEME;
use chrono::NaiveDateTime;
use console::Style;
use serde::Serialize;
use stash::error::Result;
use stash::index::DisplayStash;

fn paint(style: &Style, text: &str, use_color: bool) -> String {
    style
        .clone()
        .force_styling(use_color)
        .apply_to(text)
        .to_string()
}

/// Renders the list view: for each stash a highlighted `"<n>) <label>"`
/// header and its teaser, with a blank line between entries.
pub fn render_stash_list(stashes: &[DisplayStash], use_color: bool) -> String {
    let mut output = String::new();

    for (i, ds) in stashes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        let header = format!("{}) {}", ds.index, ds.name.label());
        output.push_str(&paint(&STASH_THEME.header, &header, use_color));
        output.push('\n');

        let body = String::from_utf8_lossy(&ds.teaser);
        output.push_str(body.strip_suffix('\n').unwrap_or(&*body));
        output.push('\n');
    }

    output
}

#[derive(Serialize)]
struct JsonStash {
    index: usize,
    label: String,
    created_at: Option<NaiveDateTime>,
    teaser: String,
}

/// Renders the list view as a JSON array, in the same order as the text view.
pub fn render_stash_list_json(stashes: &[DisplayStash]) -> Result<String> {
    let entries: Vec<JsonStash> = stashes
        .iter()
        .map(|ds| JsonStash {
            index: ds.index,
            label: ds.name.label().to_string(),
            created_at: ds.name.created_at(),
            teaser: String::from_utf8_lossy(&ds.teaser).into_owned(),
        })
        .collect();

    let mut output = serde_json::to_string_pretty(&entries)?;
    output.push('\n');
    Ok(output)
}

/// Renders a command's confirmation line, or nothing when it has none.
pub fn render_confirmation(confirmation: Option<&str>, use_color: bool) -> String {
    match confirmation {
        Some(text) => format!("{}\n", paint(&STASH_THEME.success, text, use_color)),
        None => String::new(),
    }
}
