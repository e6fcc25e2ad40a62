use serde::{Deserialize, Serialize};

/// Provider code for a home number.
pub const TYPE_HOME: i64 = 1;
/// Provider code for a mobile number.
pub const TYPE_MOBILE: i64 = 2;
/// Provider code for a work number.
pub const TYPE_WORK: i64 = 3;
/// Provider code for any other number.
pub const TYPE_OTHER: i64 = 7;

/// Display category for a phone number.
///
/// The directory stores the raw provider code; every screen goes through
/// [`PhoneType::from_code`] so unknown codes classify the same way everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    #[default]
    Home,
    Mobile,
    Work,
    Other,
}

impl PhoneType {
    /// Classify a provider phone-type code. Total: unrecognized codes are `Home`.
    pub fn from_code(code: i64) -> Self {
        match code {
            TYPE_HOME => Self::Home,
            TYPE_MOBILE => Self::Mobile,
            TYPE_WORK => Self::Work,
            TYPE_OTHER => Self::Other,
            _ => Self::Home,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Home => TYPE_HOME,
            Self::Mobile => TYPE_MOBILE,
            Self::Work => TYPE_WORK,
            Self::Other => TYPE_OTHER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Mobile => "mobile",
            Self::Work => "work",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Mobile => "Mobile",
            Self::Work => "Work",
            Self::Other => "Other",
        }
    }

    /// Label used on the contact detail screen
    pub fn call_label(&self) -> &'static str {
        match self {
            Self::Home => "Call home",
            Self::Mobile => "Call mobile",
            Self::Work => "Call work",
            Self::Other => "Call other",
        }
    }

    /// Parse user input such as `mobile` or `cell`. Unknown words are `Home`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "cell" | "cellular" => Self::Mobile,
            "work" | "office" => Self::Work,
            "other" => Self::Other,
            _ => Self::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: i64,
    pub contact_id: i64,
    pub number: String,
    /// Raw provider code, see [`PhoneType::from_code`]
    pub phone_type: i64,
    pub is_primary: bool,
}

impl Phone {
    pub fn kind(&self) -> PhoneType {
        PhoneType::from_code(self.phone_type)
    }
}

/// A phone to be inserted; the database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhone {
    pub contact_id: i64,
    pub number: String,
    pub phone_type: i64,
    pub is_primary: bool,
}

impl NewPhone {
    pub fn new(contact_id: i64, number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            contact_id,
            number: number.into(),
            phone_type: phone_type.code(),
            is_primary: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(PhoneType::from_code(1), PhoneType::Home);
        assert_eq!(PhoneType::from_code(2), PhoneType::Mobile);
        assert_eq!(PhoneType::from_code(3), PhoneType::Work);
        assert_eq!(PhoneType::from_code(7), PhoneType::Other);
    }

    #[test]
    fn test_unknown_codes_are_home() {
        for code in [i64::MIN, -1, 0, 4, 5, 6, 8, 20, 1000, i64::MAX] {
            assert_eq!(PhoneType::from_code(code), PhoneType::Home, "code {}", code);
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for kind in [PhoneType::Home, PhoneType::Mobile, PhoneType::Work, PhoneType::Other] {
            assert_eq!(PhoneType::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(PhoneType::parse("Cell"), PhoneType::Mobile);
        assert_eq!(PhoneType::parse(" work "), PhoneType::Work);
        assert_eq!(PhoneType::parse("other"), PhoneType::Other);
        assert_eq!(PhoneType::parse("pager"), PhoneType::Home);
    }

    #[test]
    fn test_call_label() {
        assert_eq!(PhoneType::from_code(99).call_label(), "Call home");
        assert_eq!(PhoneType::Mobile.call_label(), "Call mobile");
    }
}
