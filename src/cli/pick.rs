use anyhow::Result;

use crate::cli::display::format_contact_row;
use crate::cli::show::run_contact;
use crate::cli::ui::{confirm, require_terminal, select};
use crate::db::Database;
use crate::error::StoreError;
use crate::models::{is_assignable, Contact};
use crate::photo::PhotoLoader;

fn load_contacts(db: &Database, search: Option<&str>) -> Result<Vec<Contact>> {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(query) => db.search_contacts(query),
        None => db.list_contacts(),
    }
}

/// Contact picker. Choosing a contact opens its numbers; `key` carries the
/// slot being edited through to the number picker.
pub fn run_pick(
    db: &Database,
    photos: &mut dyn PhotoLoader,
    key: Option<u8>,
    search: Option<&str>,
) -> Result<()> {
    if let Some(k) = key {
        if !is_assignable(k) {
            return Err(StoreError::InvalidSlot(k).into());
        }
    }

    let contacts = load_contacts(db, search)?;
    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    require_terminal("Use `speeddial contacts list` and `speeddial assign`.")?;

    photos.resume();
    let rows: Vec<String> = contacts
        .iter()
        .map(|c| format_contact_row(c, &photos.load(c.photo_id)))
        .collect();
    photos.stop();

    let prompt = match key {
        Some(k) => format!("Contact for slot {}:", k),
        None => "Contact:".to_string(),
    };
    let Some(idx) = select(&prompt, &rows)? else {
        return Ok(());
    };
    let contact = &contacts[idx];

    if !confirm(&format!("Assign a speed dial number from {}?", contact.name()))? {
        return Ok(());
    }

    run_contact(db, contact.id, key, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContact;
    use crate::photo::FilePhotoLoader;

    #[test]
    fn test_load_contacts_filters() {
        let db = Database::open_memory().unwrap();
        db.insert_contact(&NewContact::named("Ann")).unwrap();
        db.insert_contact(&NewContact::named("Bob")).unwrap();

        assert_eq!(load_contacts(&db, None).unwrap().len(), 2);
        assert_eq!(load_contacts(&db, Some("  ")).unwrap().len(), 2);
        let found = load_contacts(&db, Some("bo")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Bob");
    }

    #[test]
    fn test_pick_rejects_voicemail_key() {
        let db = Database::open_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut photos = FilePhotoLoader::new(dir.path());
        assert!(run_pick(&db, &mut photos, Some(1), None).is_err());
    }

    #[test]
    fn test_pick_with_no_contacts() {
        let db = Database::open_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut photos = FilePhotoLoader::new(dir.path());
        run_pick(&db, &mut photos, Some(2), None).unwrap();
    }
}
