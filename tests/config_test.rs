// tests/config_test.rs
use semver_tool::config::{load_config, Config, LOCAL_CONFIG_FILE};
use semver_tool::parser::MetadataSplit;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.parser.metadata_split, MetadataSplit::First);
    assert!(!config.output.strict);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[parser]
metadata_split = "last"

[output]
strict = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.parser.metadata_split, MetadataSplit::Last);
    assert!(config.output.strict);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output]\nstrict = true\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.parser.metadata_split, MetadataSplit::First);
    assert!(config.output.strict);
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output\nstrict = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Config parse error"));
}

#[test]
#[serial]
fn test_local_file_is_picked_up_from_current_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[parser]\nmetadata_split = \"last\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(config.unwrap().parser.metadata_split, MetadataSplit::Last);
}
