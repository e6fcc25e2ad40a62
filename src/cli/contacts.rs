use anyhow::{anyhow, Result};

use crate::db::Database;
use crate::models::{NewContact, NewPhone, PhoneType};

/// Split `work:555-0100` into a type and number. Without a known type
/// prefix the whole value is the number and the type is `default_type`.
pub fn parse_phone_arg(arg: &str, default_type: PhoneType) -> (PhoneType, String) {
    if let Some((prefix, rest)) = arg.split_once(':') {
        let prefix = prefix.trim().to_lowercase();
        if matches!(
            prefix.as_str(),
            "home" | "mobile" | "cell" | "cellular" | "work" | "office" | "other"
        ) {
            return (PhoneType::parse(&prefix), rest.trim().to_string());
        }
    }
    (default_type, arg.trim().to_string())
}

/// Execute the `contacts add` command
pub fn run_contacts_add(
    db: &Database,
    name: &str,
    phones: &[String],
    phone_type: Option<&str>,
    photo_id: Option<i64>,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Name cannot be empty."));
    }

    let default_type = phone_type.map(PhoneType::parse).unwrap_or(PhoneType::Mobile);
    let parsed: Vec<(PhoneType, String)> = phones
        .iter()
        .map(|p| parse_phone_arg(p, default_type))
        .filter(|(_, number)| !number.is_empty())
        .collect();

    let contact_id = db.insert_contact(&NewContact {
        display_name: Some(name.to_string()),
        photo_id,
    })?;

    println!("Created: {} (#{})", name, contact_id);
    for (kind, number) in parsed {
        let phone_id = db.insert_phone(&NewPhone::new(contact_id, number.clone(), kind))?;
        println!("  #{:<5} {:<7} {}", phone_id, kind.label(), number);
    }
    Ok(())
}

/// Execute the `contacts list` command: every contact with phone ids
pub fn run_contacts_list(db: &Database) -> Result<()> {
    let contacts = db.list_contacts()?;
    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(());
    }

    for contact in &contacts {
        println!("{} (#{})", contact.name(), contact.id);
        for phone in db.get_phones_for_contact(contact.id)? {
            println!("  #{:<5} {:<7} {}", phone.id, phone.kind().label(), phone.number);
        }
    }
    Ok(())
}
