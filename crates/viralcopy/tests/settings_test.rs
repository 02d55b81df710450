//! Tests for settings file loading.

use std::io::Write;
use viralcopy::{DEFAULT_BASE_URL, DEFAULT_MODEL, ViralCopyErrorKind, ViralCopySettings};

fn write_settings(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_load_full_settings() {
    let file = write_settings(
        r#"
        [gemini]
        model = "gemini-2.5-pro"
        base_url = "http://localhost:8080/v1beta"
        timeout_secs = 30
        "#,
    );

    let settings = ViralCopySettings::from_file(file.path()).expect("valid settings");
    assert_eq!(settings.gemini.model, "gemini-2.5-pro");
    assert_eq!(settings.gemini.timeout_secs, Some(30));

    let config = settings
        .into_gemini_config(Some("key".to_string()))
        .expect("config builds");
    assert_eq!(config.model(), "gemini-2.5-pro");
    assert_eq!(config.base_url(), "http://localhost:8080/v1beta");
    assert_eq!(*config.timeout_secs(), Some(30));
    assert_eq!(config.credential(), Some("key"));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_settings("[gemini]\ntimeout_secs = 5\n");

    let settings = ViralCopySettings::from_file(file.path()).expect("valid settings");
    assert_eq!(settings.gemini.model, DEFAULT_MODEL);
    assert_eq!(settings.gemini.base_url, DEFAULT_BASE_URL);

    let empty = write_settings("");
    assert_eq!(
        ViralCopySettings::from_file(empty.path()).expect("empty is valid"),
        ViralCopySettings::default()
    );
}

#[test]
fn test_invalid_toml_is_config_error() {
    let file = write_settings("[gemini\nmodel = ");

    let err = ViralCopySettings::from_file(file.path()).expect_err("invalid toml");
    assert!(matches!(err.kind(), ViralCopyErrorKind::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ViralCopySettings::from_file(dir.path().join("absent.toml")).expect_err("no file");
    assert!(matches!(err.kind(), ViralCopyErrorKind::Io(_)));
}

#[test]
fn test_settings_never_supply_a_key() {
    let config = ViralCopySettings::default()
        .into_gemini_config(None)
        .expect("config builds");
    assert_eq!(config.credential(), None);
}
