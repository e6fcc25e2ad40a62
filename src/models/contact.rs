use serde::{Deserialize, Serialize};

use super::Phone;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub display_name: Option<String>,
    pub photo_id: Option<i64>,
}

impl Contact {
    /// Display name with a fallback for contacts saved without one
    pub fn name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "(unnamed)",
        }
    }
}

/// A contact to be inserted; the database assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub display_name: Option<String>,
    pub photo_id: Option<i64>,
}

impl NewContact {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            photo_id: None,
        }
    }
}

/// A contact with all of its numbers, as shown by the detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub contact: Contact,
    pub phones: Vec<Phone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fallback() {
        let mut c = Contact {
            id: 1,
            display_name: None,
            photo_id: None,
        };
        assert_eq!(c.name(), "(unnamed)");

        c.display_name = Some("   ".to_string());
        assert_eq!(c.name(), "(unnamed)");

        c.display_name = Some("Ada Lovelace".to_string());
        assert_eq!(c.name(), "Ada Lovelace");
    }
}
