pub mod add;
pub mod config;
pub mod edit;
pub mod list;
pub mod remove;
pub mod reset;

use crate::errors::AppResult;
use crate::ui::console::Console;

/// Read one answer; end of input counts as an empty answer.
pub(crate) fn ask<C: Console>(console: &mut C, prompt: &str) -> AppResult<String> {
    Ok(console.read_line(prompt)?.unwrap_or_default())
}

pub(crate) fn ask_secret<C: Console>(console: &mut C, prompt: &str) -> AppResult<String> {
    Ok(console.read_secret(prompt)?.unwrap_or_default())
}
