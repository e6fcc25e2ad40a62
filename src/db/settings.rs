use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use tracing::warn;

use super::Database;

/// Preference key for the "speed dial disabled" flag
pub const SPEED_DIAL_DISABLED_KEY: &str = "speed_dial.disabled";

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_settings WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO app_settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Defaults to enabled when the flag was never written
    pub fn is_speed_dial_disabled(&self) -> Result<bool> {
        Ok(self
            .get_setting(SPEED_DIAL_DISABLED_KEY)?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    /// Title lookup for screens: an unreadable preference reads as enabled
    pub fn speed_dial_disabled_or_default(&self) -> bool {
        self.is_speed_dial_disabled().unwrap_or_else(|e| {
            warn!(error = %e, "could not read speed dial preference, assuming enabled");
            false
        })
    }

    pub fn set_speed_dial_disabled(&self, disabled: bool) -> Result<()> {
        self.set_setting(SPEED_DIAL_DISABLED_KEY, if disabled { "true" } else { "false" })
    }

    /// Flip the flag and return the new "disabled" value
    pub fn toggle_speed_dial(&self) -> Result<bool> {
        let disabled = !self.is_speed_dial_disabled()?;
        self.set_speed_dial_disabled(disabled)?;
        Ok(disabled)
    }
}
