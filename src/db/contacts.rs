use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::models::*;

impl Database {
    // ==================== CONTACT CREATE ====================

    /// Insert a contact and return its new id
    pub fn insert_contact(&self, contact: &NewContact) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO contacts (display_name, photo_id) VALUES (?, ?)",
            params![contact.display_name, contact.photo_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    // ==================== CONTACT READ ====================

    pub fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contact = self
            .conn
            .query_row(
                "SELECT id, display_name, photo_id FROM contacts WHERE id = ?",
                [id],
                Self::row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    /// All contacts, alphabetical by display name
    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, display_name, photo_id FROM contacts
             ORDER BY display_name COLLATE NOCASE ASC, id ASC",
        )?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    pub fn count_contacts(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Case-insensitive substring match on display name
    pub fn search_contacts(&self, query: &str) -> Result<Vec<Contact>> {
        let pattern = format!("%{}%", Self::escape_like(&query.trim().to_lowercase()));
        let mut stmt = self.conn.prepare(
            r#"SELECT id, display_name, photo_id FROM contacts
               WHERE LOWER(display_name) LIKE ?1 ESCAPE '\'
               ORDER BY display_name COLLATE NOCASE ASC, id ASC"#,
        )?;

        let contacts = stmt
            .query_map([pattern], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(contacts)
    }

    /// Escape LIKE metacharacters (% _ \)
    fn escape_like(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '%' | '_' | '\\' => {
                    result.push('\\');
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
        result
    }

    // ==================== CONTACT DELETE ====================

    /// Hard delete a contact, its phones, and any speed dials on them (via CASCADE).
    pub fn delete_contact(&self, id: i64) -> Result<bool> {
        let rows = self.conn.execute("DELETE FROM contacts WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    // ==================== PHONE CRUD ====================

    /// Insert a phone. If this is the first phone for the contact, it becomes primary.
    pub fn insert_phone(&self, phone: &NewPhone) -> Result<i64> {
        let is_first = self.conn.query_row(
            "SELECT COUNT(*) FROM phones WHERE contact_id = ?",
            [phone.contact_id],
            |row| row.get::<_, i32>(0),
        )? == 0;

        let is_primary = phone.is_primary || is_first;

        self.conn.execute(
            "INSERT INTO phones (contact_id, number, phone_type, is_primary)
             VALUES (?, ?, ?, ?)",
            params![
                phone.contact_id,
                phone.number,
                phone.phone_type,
                is_primary as i32,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_phone(&self, id: i64) -> Result<Option<Phone>> {
        let phone = self
            .conn
            .query_row(
                "SELECT id, contact_id, number, phone_type, is_primary FROM phones WHERE id = ?",
                [id],
                Self::row_to_phone,
            )
            .optional()?;
        Ok(phone)
    }

    pub fn get_phones_for_contact(&self, contact_id: i64) -> Result<Vec<Phone>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, contact_id, number, phone_type, is_primary
             FROM phones WHERE contact_id = ? ORDER BY is_primary DESC, id ASC",
        )?;

        let phones = stmt
            .query_map([contact_id], Self::row_to_phone)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(phones)
    }

    /// Delete a phone. A speed dial bound to it goes with it (via CASCADE).
    pub fn delete_phone(&self, id: i64) -> Result<bool> {
        let rows = self.conn.execute("DELETE FROM phones WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    // ==================== CONTACT DETAIL ====================

    /// Contact plus all of its numbers
    pub fn get_contact_detail(&self, id: i64) -> Result<Option<ContactDetail>> {
        let contact = match self.get_contact(id)? {
            Some(c) => c,
            None => return Ok(None),
        };

        let phones = self.get_phones_for_contact(id)?;

        Ok(Some(ContactDetail { contact, phones }))
    }

    // ==================== ROW MAPPERS ====================

    fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get("id")?,
            display_name: row.get("display_name")?,
            photo_id: row.get("photo_id")?,
        })
    }

    fn row_to_phone(row: &Row) -> rusqlite::Result<Phone> {
        Ok(Phone {
            id: row.get("id")?,
            contact_id: row.get("contact_id")?,
            number: row.get("number")?,
            phone_type: row.get("phone_type")?,
            is_primary: row.get::<_, i32>("is_primary")? == 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_contact() {
        let db = Database::open_memory().unwrap();

        let id = db.insert_contact(&NewContact::named("Ada Lovelace")).unwrap();

        let retrieved = db.get_contact(id).unwrap().unwrap();
        assert_eq!(retrieved.display_name, Some("Ada Lovelace".to_string()));
        assert!(retrieved.photo_id.is_none());
        assert!(db.get_contact(id + 100).unwrap().is_none());
    }

    #[test]
    fn test_list_contacts_sorted() {
        let db = Database::open_memory().unwrap();

        for name in ["carol", "Alice", "bob"] {
            db.insert_contact(&NewContact::named(name)).unwrap();
        }

        let names: Vec<String> = db
            .list_contacts()
            .unwrap()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);
        assert_eq!(db.count_contacts().unwrap(), 3);
    }

    #[test]
    fn test_search_contacts() {
        let db = Database::open_memory().unwrap();
        db.insert_contact(&NewContact::named("John Smith")).unwrap();
        db.insert_contact(&NewContact::named("Jane Doe")).unwrap();
        db.insert_contact(&NewContact::named("100% Real")).unwrap();

        let results = db.search_contacts("SMITH").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "John Smith");

        // % is matched literally
        let results = db.search_contacts("%").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "100% Real");
    }

    #[test]
    fn test_phone_crud() {
        let db = Database::open_memory().unwrap();
        let contact_id = db.insert_contact(&NewContact::named("Test")).unwrap();

        let first = db
            .insert_phone(&NewPhone::new(contact_id, "555-1234", PhoneType::Mobile))
            .unwrap();
        let second = db
            .insert_phone(&NewPhone::new(contact_id, "555-9999", PhoneType::Work))
            .unwrap();

        let phones = db.get_phones_for_contact(contact_id).unwrap();
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[0].id, first);
        assert!(phones[0].is_primary);
        assert!(!phones[1].is_primary);
        assert_eq!(phones[1].kind(), PhoneType::Work);

        assert!(db.delete_phone(second).unwrap());
        assert!(!db.delete_phone(second).unwrap());
        assert!(db.get_phone(second).unwrap().is_none());
        assert_eq!(db.get_phone(first).unwrap().unwrap().number, "555-1234");
    }

    #[test]
    fn test_cascade_delete_contact() {
        let db = Database::open_memory().unwrap();
        let contact_id = db.insert_contact(&NewContact::named("Gone")).unwrap();
        db.insert_phone(&NewPhone::new(contact_id, "555-0000", PhoneType::Home))
            .unwrap();

        assert!(db.delete_contact(contact_id).unwrap());
        assert!(db.get_phones_for_contact(contact_id).unwrap().is_empty());
        assert!(db.get_contact_detail(contact_id).unwrap().is_none());
    }

    #[test]
    fn test_phone_requires_contact() {
        let db = Database::open_memory().unwrap();
        let result = db.insert_phone(&NewPhone::new(42, "555-0000", PhoneType::Home));
        assert!(result.is_err());
    }
}
