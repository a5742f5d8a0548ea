use super::error::SaveError;
use super::SAVE_VERSION;
use crate::session::Session;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

const CHECKSUM_LEN: usize = 32;

/// Full snapshot of a session on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSave {
    /// Save format version
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    pub session: Session,
}

impl SessionSave {
    pub fn new(session: Session) -> Self {
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), session }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        self.session.check_consistency().map_err(SaveError::Corrupted)
    }
}

/// Serialize and compress a session snapshot.
///
/// Layout: LZ4(size-prepended MessagePack) followed by a SHA-256 of those bytes.
pub fn serialize_and_compress(save: &SessionSave) -> Result<Vec<u8>, SaveError> {
    save.validate()?;

    let msgpack = to_vec_named(save)?;
    let compressed = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Verify, decompress and deserialize a session snapshot.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<SessionSave, SaveError> {
    // Size header + checksum
    if bytes.len() < 4 + CHECKSUM_LEN {
        return Err(SaveError::Corrupted(format!("save is only {} bytes", bytes.len())));
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - CHECKSUM_LEN);

    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    let save: SessionSave = from_slice(&msgpack)?;

    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    save.validate()?;
    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LeagueCatalog;
    use crate::generator::SquadGenerator;
    use crate::league::{Fixture, MatchResult, SideResult};

    fn started_session() -> Session {
        let catalog = LeagueCatalog::from_json_str(
            r#"{ "spain": [ { "title": "La Liga", "teams": ["Betis", "Celta", "Girona"] } ] }"#,
        )
        .unwrap();
        let mut generator = SquadGenerator::with_seed(77);
        Session::new_game("Save FC", "spain", &catalog, &mut generator, &Default::default())
            .unwrap()
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let mut session = started_session();
        let scorer = session.current_team().unwrap().squad.players()[0].id();
        let user = session.current_team_index().unwrap();
        let league = session.current_league_mut().unwrap();
        league.next_fixture();
        league
            .apply_result(&MatchResult::new(
                Fixture::new(user, 0),
                SideResult::new(1).with_scorers(vec![scorer]),
                SideResult::new(0),
            ))
            .unwrap();

        let save = SessionSave::new(session);
        let bytes = serialize_and_compress(&save).unwrap();
        let loaded = decompress_and_deserialize(&bytes).unwrap();

        assert_eq!(loaded, save);
        assert_eq!(loaded.session.current_league().unwrap().fixtures().position(), 1);
    }

    #[test]
    fn test_empty_session_roundtrip() {
        let save = SessionSave::new(Session::default());
        let bytes = serialize_and_compress(&save).unwrap();

        assert_eq!(decompress_and_deserialize(&bytes).unwrap().session, Session::default());
    }

    #[test]
    fn test_checksum_validation() {
        let save = SessionSave::new(started_session());
        let mut serialized = serialize_and_compress(&save).unwrap();

        if let Some(last) = serialized.last_mut() {
            *last = last.wrapping_add(1);
        }

        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(result, Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_truncated_data() {
        let result = decompress_and_deserialize(&[1, 2, 3]);
        assert!(matches!(result, Err(SaveError::Corrupted(_))));
    }

    #[test]
    fn test_version_mismatch() {
        let mut save = SessionSave::new(Session::default());
        save.version = SAVE_VERSION + 1;
        let bytes = serialize_and_compress(&save).unwrap();

        let result = decompress_and_deserialize(&bytes);
        assert!(matches!(result, Err(SaveError::VersionMismatch { .. })));
    }
}
