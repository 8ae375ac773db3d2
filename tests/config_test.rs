//! Tests for configuration loading.

use std::io::Write;
use tictactoe_timeline::{AppConfig, ThemeColor};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.theme().x(), ThemeColor::Red);
    assert_eq!(*config.theme().o(), ThemeColor::Blue);
    assert_eq!(*config.theme().highlight(), ThemeColor::Yellow);
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[log]
file = "game.log"
filter = "debug"

[theme]
highlight = "magenta"
"#
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log().file().to_str(), Some("game.log"));
    assert_eq!(config.log().filter(), "debug");
    assert_eq!(*config.theme().highlight(), ThemeColor::Magenta);
    assert_eq!(*config.theme().x(), ThemeColor::Red);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nx = \"ultraviolet\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
