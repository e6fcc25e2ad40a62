use anyhow::{anyhow, Result};

use crate::cli::display::format_phone_row;
use crate::cli::grid::run_grid;
use crate::cli::manage::run_assign;
use crate::cli::ui::{require_terminal, select};
use crate::db::Database;
use crate::error::StoreError;
use crate::models::{is_assignable, ContactDetail};

fn load_detail(db: &Database, contact_id: i64) -> Result<ContactDetail> {
    db.get_contact_detail(contact_id)?
        .ok_or_else(|| anyhow!("No contact found with ID: {}", contact_id))
}

/// Phone rows for the detail screen, marking numbers already on a slot
fn phone_rows(db: &Database, detail: &ContactDetail) -> Result<Vec<String>> {
    let bound = db.bound_phone_ids()?;
    Ok(detail
        .phones
        .iter()
        .map(|p| format_phone_row(p, bound.contains(&p.id)))
        .collect())
}

/// Print a contact and its numbers
pub fn print_contact(db: &Database, contact_id: i64) -> Result<()> {
    let detail = load_detail(db, contact_id)?;

    println!("{}\n", detail.contact.name());
    if detail.phones.is_empty() {
        println!("  No phone numbers.");
    }
    for (phone, row) in detail.phones.iter().zip(phone_rows(db, &detail)?) {
        println!("  #{:<5} {}", phone.id, row);
    }
    Ok(())
}

/// Contact detail with number picking.
///
/// With `key`, the chosen number goes straight onto that slot (editing an
/// existing entry). Without it, the grid opens so a slot can be chosen.
pub fn run_contact(db: &Database, contact_id: i64, key: Option<u8>, pick: bool) -> Result<()> {
    if let Some(k) = key {
        if !is_assignable(k) {
            return Err(StoreError::InvalidSlot(k).into());
        }
    }

    if !pick && key.is_none() {
        return print_contact(db, contact_id);
    }

    let detail = load_detail(db, contact_id)?;
    if detail.phones.is_empty() {
        println!("{} has no phone numbers.", detail.contact.name());
        return Ok(());
    }

    require_terminal("Use `speeddial assign <key> <phone-id>` instead.")?;

    let rows = phone_rows(db, &detail)?;
    let Some(idx) = select(detail.contact.name(), &rows)? else {
        return Ok(());
    };
    let phone_id = detail.phones[idx].id;

    match key {
        Some(key_id) => run_assign(db, key_id, phone_id, true),
        None => run_grid(db, Some(phone_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewContact, NewPhone, PhoneType};
    use crate::store::SpeedDialStore;

    #[test]
    fn test_phone_rows_mark_speed_dial() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Ann")).unwrap();
        let a = db
            .insert_phone(&NewPhone::new(c, "555-0001", PhoneType::Mobile))
            .unwrap();
        db.insert_phone(&NewPhone::new(c, "555-0002", PhoneType::Work))
            .unwrap();
        db.assign(2, a).unwrap();

        let detail = load_detail(&db, c).unwrap();
        let rows = phone_rows(&db, &detail).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Call mobile"));
        assert!(rows[0].contains("(primary)"));
        assert!(rows[0].contains("(speed dial)"));
        assert!(!rows[1].contains("(speed dial)"));
    }

    #[test]
    fn test_print_contact() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Bo")).unwrap();
        print_contact(&db, c).unwrap();
        run_contact(&db, c, None, false).unwrap();
    }

    #[test]
    fn test_missing_contact() {
        let db = Database::open_memory().unwrap();
        assert!(print_contact(&db, 404).is_err());
    }

    #[test]
    fn test_bad_key_rejected_before_picking() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Ann")).unwrap();
        db.insert_phone(&NewPhone::new(c, "555-0001", PhoneType::Mobile))
            .unwrap();

        for key in [1, 10] {
            let err = run_contact(&db, c, Some(key), false).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<StoreError>(),
                Some(StoreError::InvalidSlot(k)) if *k == key
            ));
        }
    }

    #[test]
    fn test_pick_without_numbers() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Quiet")).unwrap();
        run_contact(&db, c, Some(3), true).unwrap();
        assert!(db.binding_for_key(3).unwrap().is_none());
    }
}
