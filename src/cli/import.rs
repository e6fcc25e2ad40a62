use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::db::Database;
use crate::models::{NewContact, NewPhone, PhoneType};

/// A row from a CSV import file. One row per phone number; rows sharing a
/// `name` become one contact.
///
/// Headers must match field names exactly. Empty strings are converted to
/// `None` for optional fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRow {
    /// Contact display name (required)
    pub name: String,

    /// Phone number
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,

    /// home, mobile, work, or other
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone_type: Option<String>,

    #[serde(default)]
    pub photo_id: Option<i64>,
}

impl ImportRow {
    /// Validate that required fields are present and non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("name is required and cannot be empty");
        }
        Ok(())
    }
}

/// Deserialize empty strings as None.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Import results summary.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub contacts: u32,
    pub phones: u32,
    pub errors: u32,
}

/// Execute the import command.
pub fn run_import(db: &Database, file: &str, dry_run: bool) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        bail!("File not found: {}", file);
    }

    let reader = File::open(path).context("Failed to open CSV file")?;
    let stats = import_from_reader(db, reader, dry_run)?;

    let verb = if dry_run { "Would import" } else { "Imported" };
    println!(
        "{} {} contacts, {} numbers ({} errors).",
        verb, stats.contacts, stats.phones, stats.errors
    );
    Ok(())
}

/// Import rows from any CSV reader. With `dry_run` nothing is written.
///
/// A row that fails to parse, validate or insert is counted in `errors` and
/// the import carries on with the next row.
pub fn import_from_reader<R: Read>(db: &Database, reader: R, dry_run: bool) -> Result<ImportStats> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stats = ImportStats::default();
    // Contacts created by this import, by name
    let mut seen: HashMap<String, Option<i64>> = HashMap::new();

    for (idx, result) in csv_reader.deserialize::<ImportRow>().enumerate() {
        // Header is line 1
        let line = idx + 2;

        let row = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(line, error = %e, "parse error, skipping import row");
                stats.errors += 1;
                continue;
            }
        };

        if let Err(e) = row.validate() {
            warn!(line, error = %e, "validation error, skipping import row");
            stats.errors += 1;
            continue;
        }

        let outcome = if dry_run {
            process_row(db, &row, true, &seen)
        } else {
            db.in_transaction(|db| process_row(db, &row, false, &seen))
        };

        match outcome {
            Ok(added) => {
                if added.new_contact {
                    stats.contacts += 1;
                    seen.insert(row.name.trim().to_string(), added.contact_id);
                }
                if added.phone {
                    stats.phones += 1;
                }
            }
            Err(e) => {
                warn!(line, error = %e, "could not import row");
                stats.errors += 1;
            }
        }
    }

    Ok(stats)
}

/// What a single row added
struct RowResult {
    contact_id: Option<i64>,
    new_contact: bool,
    phone: bool,
}

fn process_row(
    db: &Database,
    row: &ImportRow,
    dry_run: bool,
    seen: &HashMap<String, Option<i64>>,
) -> Result<RowResult> {
    let name = row.name.trim();
    let (contact_id, new_contact) = match seen.get(name) {
        Some(id) => (*id, false),
        None if dry_run => (None, true),
        None => {
            let id = db.insert_contact(&NewContact {
                display_name: Some(name.to_string()),
                photo_id: row.photo_id,
            })?;
            (Some(id), true)
        }
    };

    // A row without a number still creates the contact
    let Some(number) = row.phone.as_deref() else {
        return Ok(RowResult { contact_id, new_contact, phone: false });
    };

    let kind = row
        .phone_type
        .as_deref()
        .map(PhoneType::parse)
        .unwrap_or(PhoneType::Mobile);
    if let Some(contact_id) = contact_id {
        db.insert_phone(&NewPhone::new(contact_id, number.trim(), kind))
            .with_context(|| format!("Failed to add {} for {}", number.trim(), name))?;
    }

    Ok(RowResult { contact_id, new_contact, phone: true })
}
