use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::models::SpeedDialSlot;
use crate::photo::PhotoLoader;

pub mod contacts;
pub mod dial;
pub mod display;
pub mod grid;
pub mod import;
pub mod list;
pub mod manage;
pub mod menu;
pub mod pick;
pub mod show;
pub mod ui;

pub use contacts::{run_contacts_add, run_contacts_list};
pub use dial::run_dial;
pub use grid::run_grid;
pub use import::run_import;
pub use list::{run_list, run_list_manage};
pub use manage::{run_assign, run_clear, run_prune, run_remove, run_set_enabled, run_toggle};
pub use menu::run_menu;
pub use pick::run_pick;
pub use show::run_contact;

#[derive(Parser)]
#[command(name = "speeddial")]
#[command(about = "Speed-dial slots for your contacts")]
#[command(version)]
pub struct Cli {
    /// Path to the contacts database
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the speed-dial list
    List(ListArgs),
    /// Show the slot grid, or place a phone on it
    Grid(GridArgs),
    /// Pick a contact to put on speed dial
    Pick(PickArgs),
    /// Show a contact's numbers
    Contact(ContactArgs),
    /// Bind a phone to a slot
    Assign(AssignArgs),
    /// Remove the binding on a slot
    Remove(RemoveArgs),
    /// Remove every binding
    Clear(ClearArgs),
    /// Turn speed dial on
    Enable,
    /// Turn speed dial off
    Disable,
    /// Flip the speed dial on/off preference
    Toggle(ToggleArgs),
    /// Call the number on a slot
    Dial(DialArgs),
    /// Manage the contacts directory
    Contacts(ContactsArgs),
    /// Import contacts from CSV (name,phone,phone_type,photo_id)
    Import(ImportArgs),
    /// Delete bindings whose phone no longer exists
    Prune,
}

#[derive(Args)]
pub struct ListArgs {
    /// Print the list as JSON
    #[arg(long, conflicts_with = "manage")]
    pub json: bool,
    /// Pick rows to view, edit, remove or dial
    #[arg(short, long)]
    pub manage: bool,
}

#[derive(Args)]
pub struct GridArgs {
    /// Phone to place on the chosen slot
    #[arg(short, long)]
    pub phone: Option<i64>,
}

#[derive(Args)]
pub struct PickArgs {
    /// Slot being edited (2-9)
    #[arg(short, long)]
    pub key: Option<u8>,
    /// Only show contacts whose name matches
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ContactArgs {
    /// Contact id
    pub id: i64,
    /// Put the chosen number on this slot (2-9)
    #[arg(short, long)]
    pub key: Option<u8>,
    /// Choose a number to put on speed dial
    #[arg(short, long)]
    pub pick: bool,
}

#[derive(Args)]
pub struct AssignArgs {
    /// Slot (2-9)
    pub key: u8,
    /// Phone id
    pub phone_id: i64,
    /// Replace an existing binding without asking
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Slot (2-9)
    pub key: u8,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct DialArgs {
    /// Slot (1 is voicemail)
    pub key: u8,
    /// Print the URI instead of opening it
    #[arg(long)]
    pub print: bool,
}

#[derive(Args)]
pub struct ContactsArgs {
    #[command(subcommand)]
    pub command: ContactsCommands,
}

#[derive(Subcommand)]
pub enum ContactsCommands {
    /// Add a contact with one or more numbers
    Add(ContactsAddArgs),
    /// List contacts with their ids
    List,
}

#[derive(Args)]
pub struct ContactsAddArgs {
    /// Display name
    pub name: String,
    /// Phone number, optionally prefixed with a type (work:555-0100)
    #[arg(short, long = "phone")]
    pub phones: Vec<String>,
    /// Type for unprefixed numbers (home, mobile, work, other)
    #[arg(short = 't', long = "type")]
    pub phone_type: Option<String>,
    /// Photo id
    #[arg(long)]
    pub photo_id: Option<i64>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to CSV file
    pub file: String,
    /// Preview without writing to the database
    #[arg(long)]
    pub dry_run: bool,
}

/// Used when the database cannot be opened. `list` and `grid` still render,
/// showing only voicemail; every other command reports `err`.
pub fn run_without_store(
    command: Option<Commands>,
    photos: &mut dyn PhotoLoader,
    err: anyhow::Error,
) -> Result<()> {
    let voicemail_only = [SpeedDialSlot::voicemail()];
    match command {
        Some(Commands::List(args)) if !args.manage => {
            warn!(error = %err, "database unavailable, showing empty list");
            list::print_list(&voicemail_only, false, photos, args.json)
        }
        Some(Commands::Grid(GridArgs { phone: None })) => {
            warn!(error = %err, "database unavailable, showing empty grid");
            grid::print_grid(&voicemail_only, false);
            Ok(())
        }
        _ => Err(err),
    }
}
