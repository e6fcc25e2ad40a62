use anyhow::Result;

use crate::cli::display::list_title;
use crate::cli::ui::confirm;
use crate::db::Database;
use crate::error::StoreError;
use crate::models::{is_assignable, AssignOutcome};
use crate::store::SpeedDialStore;

/// Assign a phone to a slot. A bound slot asks before it is replaced
/// unless `force` is set.
pub fn run_assign(db: &Database, key_id: u8, phone_id: i64, force: bool) -> Result<()> {
    if !is_assignable(key_id) {
        return Err(StoreError::InvalidSlot(key_id).into());
    }

    if let Some(existing) = db.binding_for_key(key_id)? {
        if existing.phone_id == Some(phone_id) {
            println!("Slot {} already dials {}.", key_id, existing.name());
            return Ok(());
        }
        if !force
            && !confirm(&format!(
                "Slot {} is assigned to {}. Replace it?",
                key_id,
                existing.name()
            ))?
        {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match db.assign(key_id, phone_id)? {
        AssignOutcome::Inserted => println!("Assigned slot {}.", key_id),
        AssignOutcome::Replaced { .. } => println!("Reassigned slot {}.", key_id),
    }
    Ok(())
}

pub fn run_remove(db: &Database, key_id: u8) -> Result<()> {
    if !is_assignable(key_id) {
        return Err(StoreError::InvalidSlot(key_id).into());
    }
    db.unassign(key_id)?;
    println!("Removed.");
    Ok(())
}

/// Remove every binding. Asks first unless `force` is set.
pub fn run_clear(db: &Database, force: bool) -> Result<()> {
    if !force && !confirm("Remove all speed dial numbers?")? {
        println!("Cancelled.");
        return Ok(());
    }
    let removed = db.clear_all()?;
    println!("Removed {}.", removed);
    Ok(())
}

/// Write the enabled preference and report the resulting title
pub fn run_set_enabled(db: &Database, enabled: bool) -> Result<()> {
    db.set_speed_dial_disabled(!enabled)?;
    println!("{}", list_title(!enabled));
    Ok(())
}

/// Flip the preference, asking first unless `force` is set
pub fn run_toggle(db: &Database, force: bool) -> Result<()> {
    let disabled = db.is_speed_dial_disabled()?;
    let prompt = if disabled {
        "Enable speed dial?"
    } else {
        "Disable speed dial?"
    };
    if !force && !confirm(prompt)? {
        println!("Cancelled.");
        return Ok(());
    }
    let now_disabled = db.toggle_speed_dial()?;
    println!("{}", list_title(now_disabled));
    Ok(())
}

pub fn run_prune(db: &Database) -> Result<()> {
    let removed = db.prune_dangling()?;
    println!("Pruned {}.", removed);
    Ok(())
}
