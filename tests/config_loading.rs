//! Integration tests for loading game configuration files.

use roomshift::{GameConfig, GameSession, RoomshiftError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_partial_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "seed": 42, "win_threshold": 4, "generation": {{ "max_room_radius": 2 }} }}"#
    )
    .unwrap();

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.win_threshold, 4);
    assert_eq!(config.generation.max_room_radius, 2);
    assert_eq!(config.room, GameConfig::default().room);

    let session = GameSession::new(config).unwrap();
    assert_eq!(session.seed(), 42);
    assert_eq!(session.rooms.win_threshold(), 4);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameConfig::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(RoomshiftError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let result = GameConfig::load(file.path());
    assert!(matches!(result, Err(RoomshiftError::Serde(_))));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "win_threshold": 0 }}"#).unwrap();

    let result = GameConfig::load(file.path());
    assert!(matches!(result, Err(RoomshiftError::InvalidConfig(_))));
}
