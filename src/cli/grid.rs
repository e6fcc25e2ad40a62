use anyhow::{anyhow, Result};

use crate::cli::display::{format_grid, format_grid_cell, list_title};
use crate::cli::manage::run_assign;
use crate::cli::ui::{require_terminal, select};
use crate::db::Database;
use crate::models::{grid_cells, SpeedDialSlot};
use crate::store::load_bindings;

/// Show the 2..=9 grid. With a phone id, choose a cell to bind it to.
pub fn run_grid(db: &Database, phone_id: Option<i64>) -> Result<()> {
    let Some(phone_id) = phone_id else {
        print_grid(&load_bindings(db), db.speed_dial_disabled_or_default());
        return Ok(());
    };

    let phone = db
        .get_phone(phone_id)?
        .ok_or_else(|| anyhow!("No phone with id {}", phone_id))?;

    require_terminal("Use `speeddial assign <key> <phone-id>` instead.")?;

    let cells = grid_cells(&load_bindings(db));
    let options: Vec<String> = cells.iter().map(format_grid_cell).collect();
    let prompt = format!("Slot for {}:", phone.number);
    let Some(idx) = select(&prompt, &options)? else {
        return Ok(());
    };

    // A bound cell asks before it is reassigned
    run_assign(db, cells[idx].key_id, phone.id, false)
}

/// Print the eight cells for `slots` under the list title
pub fn print_grid(slots: &[SpeedDialSlot], disabled: bool) {
    println!("{}\n", list_title(disabled));
    for row in format_grid(&grid_cells(slots)) {
        println!("{}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewContact, NewPhone, PhoneType};
    use crate::store::SpeedDialStore;

    #[test]
    fn test_print_grid() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Ann")).unwrap();
        let p = db
            .insert_phone(&NewPhone::new(c, "555-0100", PhoneType::Mobile))
            .unwrap();
        db.assign(9, p).unwrap();

        run_grid(&db, None).unwrap();
    }

    #[test]
    fn test_grid_survives_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        let db = Database::open_at(&path).unwrap();

        rusqlite::Connection::open(&path)
            .unwrap()
            .execute_batch("DROP TABLE app_settings; DROP TABLE speed_dials;")
            .unwrap();

        run_grid(&db, None).unwrap();
    }

    #[test]
    fn test_unknown_phone_is_an_error() {
        let db = Database::open_memory().unwrap();
        let err = run_grid(&db, Some(77)).unwrap_err();
        assert!(err.to_string().contains("No phone with id 77"));
    }
}
