use anyhow::Result;

use crate::cli::dial::dial_slot;
use crate::cli::display::{format_slot_row, list_title};
use crate::cli::manage::run_clear;
use crate::cli::pick::run_pick;
use crate::cli::show::print_contact;
use crate::cli::ui::{clear_screen, require_terminal, select, wait_for_continue};
use crate::db::Database;
use crate::models::SpeedDialSlot;
use crate::photo::PhotoLoader;
use crate::store::{load_bindings, SpeedDialStore};

/// Print the slot list, voicemail first
pub fn run_list(db: &Database, photos: &mut dyn PhotoLoader, json: bool) -> Result<()> {
    let slots = load_bindings(db);
    print_list(&slots, db.speed_dial_disabled_or_default(), photos, json)
}

/// Render already-loaded slots. Also used when no database could be opened.
pub fn print_list(
    slots: &[SpeedDialSlot],
    disabled: bool,
    photos: &mut dyn PhotoLoader,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }

    println!("{}\n", list_title(disabled));
    for line in render_rows(slots, photos) {
        println!("{}", line);
    }
    Ok(())
}

fn render_rows(slots: &[SpeedDialSlot], photos: &mut dyn PhotoLoader) -> Vec<String> {
    photos.resume();
    let rows = slots
        .iter()
        .map(|slot| format_slot_row(slot, &photos.load(slot.photo_id)))
        .collect();
    photos.stop();
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    ViewContact,
    Edit,
    Remove,
    Dial,
    Back,
}

impl RowAction {
    const BOUND: &'static [RowAction] = &[
        RowAction::ViewContact,
        RowAction::Edit,
        RowAction::Remove,
        RowAction::Dial,
        RowAction::Back,
    ];

    const VOICEMAIL: &'static [RowAction] = &[RowAction::Dial, RowAction::Back];

    fn for_slot(slot: &SpeedDialSlot) -> &'static [RowAction] {
        if slot.is_voicemail() {
            Self::VOICEMAIL
        } else {
            Self::BOUND
        }
    }

    fn label(self) -> &'static str {
        match self {
            RowAction::ViewContact => "View contact",
            RowAction::Edit => "Edit speed dial",
            RowAction::Remove => "Remove from speed dial",
            RowAction::Dial => "Dial",
            RowAction::Back => "Back",
        }
    }
}

const REMOVE_ALL: &str = "Remove all";
const DONE: &str = "Done";

/// Interactive slot list: choose a row, then act on it. The list is re-read
/// after every action.
pub fn run_list_manage(db: &Database, photos: &mut dyn PhotoLoader) -> Result<()> {
    require_terminal("Use `speeddial list` to print the list.")?;

    loop {
        let _ = clear_screen();
        let slots = load_bindings(db);
        let title = list_title(db.speed_dial_disabled_or_default());

        let mut options = render_rows(&slots, photos);
        options.push(REMOVE_ALL.to_string());
        options.push(DONE.to_string());

        let Some(idx) = select(title, &options)? else {
            return Ok(());
        };

        if idx == slots.len() {
            run_clear(db, false)?;
            continue;
        }
        if idx > slots.len() {
            return Ok(());
        }

        let slot = &slots[idx];
        run_row_actions(db, photos, slot)?;
    }
}

fn run_row_actions(db: &Database, photos: &mut dyn PhotoLoader, slot: &SpeedDialSlot) -> Result<()> {
    let actions = RowAction::for_slot(slot);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    let header = format!("{} {}", slot.key_id, slot.name());

    let Some(idx) = select(&header, &labels)? else {
        return Ok(());
    };

    match actions[idx] {
        RowAction::ViewContact => {
            if let Some(contact_id) = slot.contact_id {
                print_contact(db, contact_id)?;
                wait_for_continue();
            }
        }
        RowAction::Edit => {
            run_pick(db, photos, Some(slot.key_id), None)?;
        }
        RowAction::Remove => {
            db.unassign(slot.key_id)?;
            println!("Removed.");
        }
        RowAction::Dial => {
            dial_slot(slot, false)?;
            wait_for_continue();
        }
        RowAction::Back => {}
    }
    Ok(())
}
