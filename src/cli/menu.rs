//! Main menu for speeddial
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::Result;
use inquire::Select;

use crate::cli::ui::{clear_screen, minimal_render_config, prompt_for_input, require_terminal, wait_for_continue};
use crate::cli::{run_clear, run_contacts_list, run_grid, run_list, run_list_manage, run_pick, run_toggle};
use crate::db::Database;
use crate::photo::PhotoLoader;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    List,
    Manage,
    Grid,
    Assign,
    Contacts,
    RemoveAll,
    ToggleEnabled,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::List,
        MenuOption::Manage,
        MenuOption::Grid,
        MenuOption::Assign,
        MenuOption::Contacts,
        MenuOption::RemoveAll,
        MenuOption::ToggleEnabled,
        MenuOption::Quit,
    ];

    /// The enable/disable entry names the action it will take
    fn label(self, disabled: bool) -> &'static str {
        match self {
            MenuOption::List => "List",
            MenuOption::Manage => "Manage",
            MenuOption::Grid => "Grid",
            MenuOption::Assign => "Assign",
            MenuOption::Contacts => "Contacts",
            MenuOption::RemoveAll => "Remove all",
            MenuOption::ToggleEnabled if disabled => "Enable speed dial",
            MenuOption::ToggleEnabled => "Disable speed dial",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str, disabled: bool) -> Option<MenuOption> {
        MenuOption::ALL
            .iter()
            .find(|opt| opt.label(disabled) == s)
            .copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(db: &Database, photos: &mut dyn PhotoLoader) -> Result<()> {
    require_terminal(
        "Use subcommands for non-interactive use:\n  \
        speeddial list\n  \
        speeddial assign <key> <phone-id>\n  \
        Run 'speeddial --help' for all options.",
    )?;

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        // Re-read each time so the toggle label follows the preference
        let disabled = db.speed_dial_disabled_or_default();
        let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label(disabled)).collect();

        let selection = Select::new("speeddial", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let Ok(Some(choice_label)) = selection else {
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label, disabled) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Errors are shown and the menu continues
        if let Err(e) = execute_command(db, photos, choice) {
            eprintln!("\nError: {}", e);
        }
        wait_for_continue();
    }
}

fn execute_command(db: &Database, photos: &mut dyn PhotoLoader, choice: MenuOption) -> Result<()> {
    match choice {
        MenuOption::List => run_list(db, photos, false),
        MenuOption::Manage => run_list_manage(db, photos),
        MenuOption::Grid => run_grid(db, None),
        MenuOption::Assign => {
            let query = prompt_for_input("search: ")?;
            run_pick(db, photos, None, Some(&query))
        }
        MenuOption::Contacts => run_contacts_list(db),
        MenuOption::RemoveAll => run_clear(db, false),
        MenuOption::ToggleEnabled => run_toggle(db, false),
        MenuOption::Quit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_option_roundtrip() {
        for disabled in [false, true] {
            for opt in MenuOption::ALL {
                let label = opt.label(disabled);
                let recovered = MenuOption::from_label(label, disabled);
                assert_eq!(recovered, Some(*opt), "Failed roundtrip for {:?}", opt);
            }
        }
    }

    #[test]
    fn test_toggle_label_follows_preference() {
        assert_eq!(MenuOption::ToggleEnabled.label(false), "Disable speed dial");
        assert_eq!(MenuOption::ToggleEnabled.label(true), "Enable speed dial");
    }

    #[test]
    fn test_menu_option_from_invalid_label() {
        assert_eq!(MenuOption::from_label("Invalid", false), None);
        assert_eq!(MenuOption::from_label("", true), None);
    }
}
