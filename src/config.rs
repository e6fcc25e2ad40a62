use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the database location
pub const DB_ENV_VAR: &str = "SPEEDDIAL_DB";

const APP_DIR: &str = "speeddial";

/// Where the database and contact photos live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub photo_dir: PathBuf,
}

impl Config {
    /// Resolve paths: `--db` flag, then `SPEEDDIAL_DB`, then the platform config dir.
    pub fn resolve(db_flag: Option<&Path>) -> Result<Self> {
        let env_value = std::env::var_os(DB_ENV_VAR).map(PathBuf::from);
        Self::resolve_from(db_flag, env_value)
    }

    fn resolve_from(db_flag: Option<&Path>, env_value: Option<PathBuf>) -> Result<Self> {
        let db_path = match (db_flag, env_value) {
            (Some(flag), _) => flag.to_path_buf(),
            (None, Some(env)) if !env.as_os_str().is_empty() => env,
            _ => Self::default_db_path()?,
        };

        // Photos sit next to an explicit database so test setups stay self-contained
        let photo_dir = match db_path.parent() {
            Some(parent) if db_flag.is_some() => parent.join("photos"),
            _ => Self::default_photo_dir().unwrap_or_else(|_| PathBuf::from("photos")),
        };

        Ok(Self { db_path, photo_dir })
    }

    fn default_db_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_DIR).join("contacts.db"))
    }

    fn default_photo_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_DIR).join("photos"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let cfg = Config::resolve_from(
            Some(Path::new("/tmp/a/contacts.db")),
            Some(PathBuf::from("/tmp/b.db")),
        )
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/a/contacts.db"));
        assert_eq!(cfg.photo_dir, PathBuf::from("/tmp/a/photos"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let cfg = Config::resolve_from(None, Some(PathBuf::from("/tmp/b.db"))).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/b.db"));
    }

    #[test]
    fn test_empty_env_falls_back_to_default() {
        if let Ok(cfg) = Config::resolve_from(None, Some(PathBuf::new())) {
            assert!(cfg.db_path.ends_with("speeddial/contacts.db"));
        }
    }
}
