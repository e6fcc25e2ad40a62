//! Shared UI primitives for speeddial
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `search: `
//! - Feedback: single word when possible: `Saved.`

use anyhow::{anyhow, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use inquire::{ui::RenderConfig, Confirm, Select, Text};
use std::io::{self, IsTerminal};

pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Rows a select list may use: the terminal height less prompt and hint
fn page_size() -> usize {
    let rows = terminal::size().map(|(_, h)| h as usize).unwrap_or(24);
    rows.saturating_sub(4).max(5)
}

/// Prompts without the `?` prefix
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Fail early with a hint when a prompt would need a terminal
pub fn require_terminal(hint: &str) -> Result<()> {
    if io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(anyhow!("This needs a terminal. {}", hint))
    }
}

/// Display a selection menu and return the chosen index
pub fn select<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let result = Select::new(prompt, items.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(page_size())
        .with_vim_mode(true)
        .prompt_skippable()?;

    Ok(result.and_then(|selected| items.iter().position(|o| *o == selected)))
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

/// Prompt for text input, returning empty string on cancel
pub fn prompt_for_input(label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

/// Hold the current screen until enter
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}

/// Truncate to `max_chars`, ending with an ellipsis when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let cut: String = s.chars().take(max_chars - 1).collect();
    format!("{}…", cut.trim_end())
}
