//! Headless activation sequences (`--press`).

use thiserror::Error;

use crate::config::OverflowPolicy;
use crate::ui::app::App;
use crate::ui::counter::{DECREMENT_LABEL, INCREMENT_LABEL};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown activation '{ch}' at position {position} (expected '+' or '-')")]
    UnknownActivation { ch: char, position: usize },
}

/// Parse a sequence such as `"++-"` into button labels, in order.
///
/// Whitespace is ignored. Positions in errors are 1-based character offsets.
pub fn parse_presses(input: &str) -> Result<Vec<&'static str>, ScriptError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, ch)| match ch {
            '+' => Ok(INCREMENT_LABEL),
            '-' => Ok(DECREMENT_LABEL),
            other => Err(ScriptError::UnknownActivation {
                ch: other,
                position: idx + 1,
            }),
        })
        .collect()
}

/// Press each button in turn on a fresh counter and return the displayed text.
pub fn run_presses(overflow: OverflowPolicy, presses: &[&str]) -> String {
    let mut app = App::new(overflow);
    for label in presses {
        app.press(label);
    }
    tracing::debug!(presses = presses.len(), value = app.value(), "script finished");
    app.tree().text_content()
}
