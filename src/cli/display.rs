use crate::cli::ui::truncate;
use crate::models::{Contact, GridCell, Phone, SpeedDialSlot};
use crate::photo::Photo;

const NAME_WIDTH: usize = 24;
const CELL_WIDTH: usize = 30;

pub const EMPTY_CELL: &str = "Empty";

/// Title of the slot list, which reflects the enabled preference
pub fn list_title(disabled: bool) -> &'static str {
    if disabled {
        "Speed dial (disabled)"
    } else {
        "Speed dial"
    }
}

/// One slot list row: `3 * Ann Smith    Mobile  555-0100`
pub fn format_slot_row(slot: &SpeedDialSlot, photo: &Photo) -> String {
    let line = format!(
        "{} {} {:<width$} {:<7} {}",
        slot.key_id,
        photo.marker(),
        truncate(slot.name(), NAME_WIDTH),
        slot.type_label(),
        slot.phone_number.as_deref().unwrap_or(""),
        width = NAME_WIDTH,
    );
    line.trim_end().to_string()
}

/// One grid cell: `4  Ann Smith (Mobile)` or `4  Empty`
pub fn format_grid_cell(cell: &GridCell) -> String {
    match &cell.slot {
        Some(slot) => format!(
            "{}  {} ({})",
            cell.key_id,
            truncate(slot.name(), CELL_WIDTH - 14),
            slot.type_label()
        ),
        None => format!("{}  {}", cell.key_id, EMPTY_CELL),
    }
}

/// Lay the grid out two cells per row
pub fn format_grid(cells: &[GridCell]) -> Vec<String> {
    cells
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => format!(
                "{:<width$}{}",
                format_grid_cell(left),
                format_grid_cell(right),
                width = CELL_WIDTH
            ),
            [single] => format_grid_cell(single),
            _ => String::new(),
        })
        .collect()
}

/// A number on the contact detail screen with its markers
pub fn format_phone_row(phone: &Phone, on_speed_dial: bool) -> String {
    let mut line = format!("{:<12} {}", phone.kind().call_label(), phone.number);
    if phone.is_primary {
        line.push_str("  (primary)");
    }
    if on_speed_dial {
        line.push_str("  (speed dial)");
    }
    line
}

/// A contact row for the picker
pub fn format_contact_row(contact: &Contact, photo: &Photo) -> String {
    format!("{} {}", photo.marker(), contact.name())
}
