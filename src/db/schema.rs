pub const SCHEMA_VERSION: i32 = 2;

pub const SCHEMA_V1: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL
);

-- Contacts directory
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    display_name TEXT,
    photo_id INTEGER
);

CREATE TABLE IF NOT EXISTS phones (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL,
    number TEXT NOT NULL,
    phone_type INTEGER NOT NULL DEFAULT 1,
    is_primary INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (contact_id) REFERENCES contacts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_phone_contact ON phones(contact_id);

-- One row per assignable key. Slot 1 (voicemail) is never stored.
CREATE TABLE IF NOT EXISTS speed_dials (
    key_id INTEGER PRIMARY KEY CHECK (key_id BETWEEN 2 AND 9),
    phone_id INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (phone_id) REFERENCES phones(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_speed_dial_phone ON speed_dials(phone_id);
"#;

/// V2 migration: Add app_settings table for the speed dial enabled flag
pub const MIGRATION_V2: &str = r#"
CREATE TABLE IF NOT EXISTS app_settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
