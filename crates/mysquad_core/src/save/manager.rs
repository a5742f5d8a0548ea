use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, SessionSave};
use crate::session::Session;

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Reads and writes the session snapshot at a single path.
#[derive(Debug, Clone)]
pub struct SaveManager {
    path: PathBuf,
}

impl SaveManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist a full snapshot of `session`, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), SaveError> {
        let save = SessionSave::new(session.clone());
        Self::save_to_path(&self.path, &save)?;

        log::info!("Session saved to {:?}", self.path);
        Ok(())
    }

    /// Load the stored session. A missing file yields an empty session.
    pub fn load(&self) -> Result<Session, SaveError> {
        Ok(self.load_save()?.map(|save| save.session).unwrap_or_default())
    }

    /// The raw snapshot with its metadata, or `None` when nothing is saved yet.
    pub fn load_save(&self) -> Result<Option<SessionSave>, SaveError> {
        if !self.path.exists() {
            log::debug!("No save at {:?}, starting empty", self.path);
            return Ok(None);
        }

        Self::load_from_path(&self.path).map(Some)
    }

    pub fn info(&self) -> Result<Option<SaveInfo>, SaveError> {
        Ok(self.load_save()?.map(|save| SaveInfo::from(&save)))
    }

    pub fn delete(&self) -> Result<(), SaveError> {
        if self.path.exists() {
            remove_file(&self.path)?;
            log::info!("Deleted save at {:?}", self.path);
        }

        Ok(())
    }

    fn save_to_path(path: &Path, save: &SessionSave) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = serialize_and_compress(save)?;

        // Write to a sibling temp file, then rename over the target
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<SessionSave, SaveError> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let save = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}

/// Summary of a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveInfo {
    pub timestamp: u64,
    pub version: u32,
    pub team: Option<String>,
    pub league: Option<String>,
    pub country: Option<String>,
}

impl From<&SessionSave> for SaveInfo {
    fn from(save: &SessionSave) -> Self {
        let session = &save.session;
        Self {
            timestamp: save.timestamp,
            version: save.version,
            team: session.current_team().map(|t| t.name.clone()),
            league: session.current_league().map(|l| l.name.clone()),
            country: session.current_country().map(str::to_string),
        }
    }
}

impl SaveInfo {
    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp =
            OffsetDateTime::from_unix_timestamp_nanos(self.timestamp as i128 * 1_000_000)
                .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn display_text(&self) -> String {
        match (&self.team, &self.league) {
            (Some(team), Some(league)) => {
                format!("{team} in {league} (saved {})", self.format_timestamp())
            }
            _ => format!("No game in progress (saved {})", self.format_timestamp()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LeagueCatalog;
    use crate::generator::SquadGenerator;
    use tempfile::TempDir;

    fn started_session() -> Session {
        let catalog = LeagueCatalog::from_json_str(
            r#"{ "italy": [ { "title": "Serie A", "teams": ["Inter", "Lazio", "Roma", "Torino"] } ] }"#,
        )
        .unwrap();
        let mut generator = SquadGenerator::with_seed(5);
        Session::new_game("Disk United", "italy", &catalog, &mut generator, &Default::default())
            .unwrap()
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path().join("session.sqd"));
        let session = started_session();

        manager.save(&session).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, session);
        assert_eq!(loaded.current_team().unwrap().name, "Disk United");
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = TempDir::new().unwrap();
        let save_path = temp_dir.path().join("nested").join("atomic.sqd");
        let manager = SaveManager::new(&save_path);

        manager.save(&started_session()).unwrap();

        assert!(save_path.exists());
        assert!(!save_path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file_loads_empty_session() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path().join("absent.sqd"));

        assert!(!manager.exists());
        assert_eq!(manager.load().unwrap(), Session::default());
        assert!(manager.info().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let save_path = temp_dir.path().join("garbage.sqd");
        std::fs::write(&save_path, b"definitely not a save file, just some text").unwrap();

        let result = SaveManager::new(&save_path).load();
        assert!(matches!(result, Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_overwrite_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path().join("session.sqd"));

        manager.save(&started_session()).unwrap();
        manager.save(&Session::default()).unwrap();
        assert!(!manager.load().unwrap().is_started());

        manager.delete().unwrap();
        assert!(!manager.exists());
        manager.delete().unwrap();
    }

    #[test]
    fn test_save_info() {
        let temp_dir = TempDir::new().unwrap();
        let manager = SaveManager::new(temp_dir.path().join("session.sqd"));
        manager.save(&started_session()).unwrap();

        let info = manager.info().unwrap().unwrap();
        assert_eq!(info.team.as_deref(), Some("Disk United"));
        assert_eq!(info.league.as_deref(), Some("Serie A"));
        assert_eq!(info.country.as_deref(), Some("italy"));
        assert!(info.display_text().starts_with("Disk United in Serie A"));
    }
}
