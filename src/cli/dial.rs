use anyhow::Result;
use tracing::warn;

use crate::db::Database;
use crate::models::SpeedDialSlot;
use crate::store::SpeedDialStore;

/// URI handed to the system dialer, or `None` for a slot with no number
pub fn dial_uri(slot: &SpeedDialSlot) -> Option<String> {
    if slot.is_voicemail() {
        return Some("voicemail:".to_string());
    }
    let number = slot.phone_number.as_deref()?;
    let digits: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("tel:{}", digits))
    }
}

/// Dial a slot by key. Speed dial being disabled does not block this.
pub fn run_dial(db: &Database, key_id: u8, print_only: bool) -> Result<()> {
    let Some(slot) = db.binding_for_key(key_id)? else {
        println!("Slot {} is empty.", key_id);
        return Ok(());
    };
    dial_slot(&slot, print_only)
}

pub fn dial_slot(slot: &SpeedDialSlot, print_only: bool) -> Result<()> {
    let Some(uri) = dial_uri(slot) else {
        println!("Slot {} has no number.", slot.key_id);
        return Ok(());
    };

    if print_only {
        println!("{}", uri);
        return Ok(());
    }

    if let Err(e) = webbrowser::open(&uri) {
        warn!(error = %e, uri = %uri, "no handler for dial uri");
        println!("{}", uri);
    } else {
        println!("Dialing {}...", slot.name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewContact, NewPhone, PhoneType};

    fn slot_with(number: Option<&str>) -> SpeedDialSlot {
        SpeedDialSlot {
            key_id: 2,
            phone_id: Some(1),
            contact_id: Some(1),
            display_name: Some("Ann".to_string()),
            photo_id: None,
            phone_type: Some(PhoneType::Home),
            phone_number: number.map(str::to_string),
        }
    }

    #[test]
    fn test_voicemail_uri() {
        assert_eq!(
            dial_uri(&SpeedDialSlot::voicemail()),
            Some("voicemail:".to_string())
        );
    }

    #[test]
    fn test_tel_uri_strips_formatting() {
        assert_eq!(
            dial_uri(&slot_with(Some("+1 (555) 010-0199"))),
            Some("tel:+15550100199".to_string())
        );
        assert_eq!(dial_uri(&slot_with(Some("*86#"))), Some("tel:*86#".to_string()));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(dial_uri(&slot_with(None)), None);
        assert_eq!(dial_uri(&slot_with(Some("ext."))), None);
    }

    #[test]
    fn test_dial_print_only() {
        let db = Database::open_memory().unwrap();
        let c = db.insert_contact(&NewContact::named("Ann")).unwrap();
        let p = db
            .insert_phone(&NewPhone::new(c, "555-0100", PhoneType::Mobile))
            .unwrap();
        db.assign(2, p).unwrap();

        run_dial(&db, 2, true).unwrap();
        run_dial(&db, 1, true).unwrap();
        // Empty slot is reported, not an error
        run_dial(&db, 5, true).unwrap();
    }
}
