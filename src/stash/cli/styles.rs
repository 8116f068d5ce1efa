use console::Style;
use once_cell::sync::Lazy;

/// Styles for every piece of styled output.
///
/// A style is applied per value (`style.apply_to(text)`), which yields a
/// self-contained string; no terminal state outlives the print.
pub struct Theme {
    pub header: Style,
    pub success: Style,
}

pub static STASH_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    header: Style::new().yellow(),
    success: Style::new().green(),
});
