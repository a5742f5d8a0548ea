//! File locations for the catalog and the session save.
//!
//! Resolution order per file: command line flag, environment variable,
//! relative default.

use std::env;
use std::path::PathBuf;

pub const CATALOG_PATH_ENV: &str = "MYSQUAD_CATALOG_PATH";
pub const SAVE_PATH_ENV: &str = "MYSQUAD_SAVE_PATH";
pub const LOG_ENV: &str = "MYSQUAD_LOG";

pub const DEFAULT_CATALOG_PATH: &str = "mysquad.json";
pub const DEFAULT_SAVE_PATH: &str = "mysquad.sqd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub catalog: PathBuf,
    pub save: PathBuf,
}

impl Paths {
    pub fn resolve(catalog_flag: Option<PathBuf>, save_flag: Option<PathBuf>) -> Self {
        Self {
            catalog: resolve_path(
                catalog_flag,
                env::var(CATALOG_PATH_ENV).ok(),
                DEFAULT_CATALOG_PATH,
            ),
            save: resolve_path(save_flag, env::var(SAVE_PATH_ENV).ok(), DEFAULT_SAVE_PATH),
        }
    }
}

fn resolve_path(flag: Option<PathBuf>, env_value: Option<String>, default: &str) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    PathBuf::from(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let path = resolve_path(Some("a.json".into()), Some("b.json".into()), "c.json");
        assert_eq!(path, PathBuf::from("a.json"));
    }

    #[test]
    fn test_env_then_default() {
        assert_eq!(resolve_path(None, Some(" b.json ".into()), "c.json"), PathBuf::from("b.json"));
        assert_eq!(resolve_path(None, Some("   ".into()), "c.json"), PathBuf::from("c.json"));
        assert_eq!(resolve_path(None, None, "c.json"), PathBuf::from("c.json"));
    }
}
