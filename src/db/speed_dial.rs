use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use std::collections::HashSet;
use tracing::{debug, info};

use super::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{is_assignable, AssignOutcome, PhoneType, SpeedDialSlot};
use crate::store::SpeedDialStore;

impl SpeedDialStore for Database {
    fn list_bindings(&self) -> StoreResult<Vec<SpeedDialSlot>> {
        // Inner joins: a binding whose phone or contact is gone is not shown
        let mut stmt = self.conn.prepare(
            r#"SELECT
                sd.key_id,
                sd.phone_id,
                p.contact_id,
                c.display_name,
                c.photo_id,
                p.phone_type,
                p.number
            FROM speed_dials sd
            JOIN phones p ON p.id = sd.phone_id
            JOIN contacts c ON c.id = p.contact_id
            ORDER BY sd.key_id ASC"#,
        )?;

        let mut slots = vec![SpeedDialSlot::voicemail()];
        let rows = stmt
            .query_map([], Self::row_to_slot)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        slots.extend(rows);

        debug!(count = slots.len() - 1, "loaded speed dial bindings");
        Ok(slots)
    }

    fn assign(&self, key_id: u8, phone_id: i64) -> StoreResult<AssignOutcome> {
        if !is_assignable(key_id) {
            return Err(StoreError::InvalidSlot(key_id));
        }

        // Rolls back on drop if we bail out early
        let tx = self.conn.unchecked_transaction()?;

        let phone_exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM phones WHERE id = ?)",
            [phone_id],
            |row| row.get(0),
        )?;
        if !phone_exists {
            return Err(StoreError::InvalidReference(phone_id));
        }

        let previous: Option<i64> = tx
            .query_row(
                "SELECT phone_id FROM speed_dials WHERE key_id = ?",
                [key_id],
                |row| row.get(0),
            )
            .optional()?;

        let now = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT INTO speed_dials (key_id, phone_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(key_id) DO UPDATE SET
                phone_id = excluded.phone_id,
                updated_at = excluded.updated_at",
            params![key_id, phone_id, now],
        )?;
        tx.commit()?;

        let outcome = match previous {
            Some(previous_phone_id) => AssignOutcome::Replaced { previous_phone_id },
            None => AssignOutcome::Inserted,
        };
        info!(key_id, phone_id, ?outcome, "assigned speed dial");
        Ok(outcome)
    }

    fn unassign(&self, key_id: u8) -> StoreResult<()> {
        let rows = self
            .conn
            .execute("DELETE FROM speed_dials WHERE key_id = ?", [key_id])?;
        info!(key_id, removed = rows > 0, "unassigned speed dial");
        Ok(())
    }

    fn clear_all(&self) -> StoreResult<usize> {
        let rows = self.conn.execute("DELETE FROM speed_dials", [])?;
        info!(removed = rows, "cleared speed dial list");
        Ok(rows)
    }

    fn is_phone_bound(&self, phone_id: i64) -> StoreResult<bool> {
        let bound = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM speed_dials WHERE phone_id = ?)",
            [phone_id],
            |row| row.get(0),
        )?;
        Ok(bound)
    }
}

impl Database {
    /// Phone ids that currently sit on some slot, for marking numbers on
    /// the contact detail screen in one query.
    pub fn bound_phone_ids(&self) -> StoreResult<HashSet<i64>> {
        let mut stmt = self.conn.prepare("SELECT phone_id FROM speed_dials")?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<HashSet<i64>>>()?;
        Ok(ids)
    }

    /// Delete bindings whose phone or contact no longer exists.
    ///
    /// The foreign key cascade keeps the table clean while foreign keys are
    /// on; this catches rows written by anything that had them off.
    pub fn prune_dangling(&self) -> StoreResult<usize> {
        let rows = self.conn.execute(
            r#"DELETE FROM speed_dials WHERE phone_id NOT IN (
                SELECT p.id FROM phones p JOIN contacts c ON c.id = p.contact_id
            )"#,
            [],
        )?;
        if rows > 0 {
            info!(removed = rows, "pruned dangling speed dials");
        }
        Ok(rows)
    }

    fn row_to_slot(row: &Row) -> rusqlite::Result<SpeedDialSlot> {
        let phone_type: i64 = row.get("phone_type")?;
        Ok(SpeedDialSlot {
            key_id: row.get("key_id")?,
            phone_id: Some(row.get("phone_id")?),
            contact_id: Some(row.get("contact_id")?),
            display_name: row.get("display_name")?,
            photo_id: row.get("photo_id")?,
            phone_type: Some(PhoneType::from_code(phone_type)),
            phone_number: row.get("number")?,
        })
    }
}
