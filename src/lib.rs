pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod photo;
pub mod store;

pub use db::Database;
pub use error::{StoreError, StoreResult};
pub use store::{load_bindings, SpeedDialStore};
