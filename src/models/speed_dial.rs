use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::PhoneType;

/// Slot 1 always dials voicemail and is never stored.
pub const VOICEMAIL_KEY: u8 = 1;
pub const FIRST_ASSIGNABLE_KEY: u8 = 2;
pub const LAST_ASSIGNABLE_KEY: u8 = 9;
/// Number of assignable slots (2 through 9)
pub const SPEED_DIAL_MAX_ENTRIES: usize = 8;

/// True for keys a phone can be bound to
pub fn is_assignable(key_id: u8) -> bool {
    assignable_keys().contains(&key_id)
}

pub fn assignable_keys() -> RangeInclusive<u8> {
    FIRST_ASSIGNABLE_KEY..=LAST_ASSIGNABLE_KEY
}

/// One speed-dial position with the display fields joined in at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedDialSlot {
    pub key_id: u8,
    pub phone_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub display_name: Option<String>,
    pub photo_id: Option<i64>,
    pub phone_type: Option<PhoneType>,
    pub phone_number: Option<String>,
}

impl SpeedDialSlot {
    /// The synthetic entry every reader puts at slot 1
    pub fn voicemail() -> Self {
        Self {
            key_id: VOICEMAIL_KEY,
            phone_id: None,
            contact_id: None,
            display_name: None,
            photo_id: None,
            phone_type: None,
            phone_number: None,
        }
    }

    pub fn is_voicemail(&self) -> bool {
        self.key_id == VOICEMAIL_KEY
    }

    pub fn name(&self) -> &str {
        if self.is_voicemail() {
            return "Voicemail";
        }
        match self.display_name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "(unnamed)",
        }
    }

    /// Phone type label, empty for voicemail
    pub fn type_label(&self) -> &'static str {
        self.phone_type.map(|t| t.label()).unwrap_or("")
    }
}

/// What `assign` did to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    Inserted,
    Replaced { previous_phone_id: i64 },
}

/// One cell of the 2..=9 grid. `slot` is `None` when the key is unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub key_id: u8,
    pub slot: Option<SpeedDialSlot>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Rebuild the fixed grid of assignable keys from a binding list.
/// Keys without a binding come back as empty cells; voicemail is skipped.
pub fn grid_cells(bindings: &[SpeedDialSlot]) -> Vec<GridCell> {
    assignable_keys()
        .map(|key_id| GridCell {
            key_id,
            slot: bindings.iter().find(|s| s.key_id == key_id).cloned(),
        })
        .collect()
}
