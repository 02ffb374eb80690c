//! Config error-message, atomic-write-safety, and init integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vkxaml_core::{
    config::{self, Config, DEFAULT_BASE_URL},
    ConfigError, SchemeName,
};

fn write_raw(home: &TempDir, contents: &str) {
    let path = config::config_path_at(home.path());
    fs::create_dir_all(path.parent().unwrap()).expect("mkdir");
    fs::write(path, contents).expect("write");
}

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let home = TempDir::new().expect("tempdir");
    write_raw(&home, ": : corrupt : yaml : !!!\n  - broken: [unclosed");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("config.yaml"), "must contain file path, got: {err}");
}

#[test]
fn load_wrong_type_yaml_returns_parse_error() {
    let home = TempDir::new().expect("tempdir");
    write_raw(&home, "- this is a list, not a mapping\n");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[test]
fn partial_file_fills_in_defaults() {
    let home = TempDir::new().expect("tempdir");
    write_raw(
        &home,
        "output_dir: /srv/xaml\nselection:\n  display_name: Nightshade\n",
    );

    let cfg = config::load_at(home.path()).expect("load");
    assert_eq!(cfg.output_dir, Some(PathBuf::from("/srv/xaml")));
    assert_eq!(cfg.selection.display_name, "Nightshade");
    assert_eq!(cfg.selection.dark, SchemeName::from("space_gray"));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn empty_file_yields_defaults() {
    let home = TempDir::new().expect("tempdir");
    write_raw(&home, "");
    assert_eq!(config::load_at(home.path()).expect("load"), Config::default());
}

// ---------------------------------------------------------------------------
// 2. Save / init
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_roundtrip() {
    let home = TempDir::new().expect("tempdir");
    let mut cfg = Config::default();
    cfg.base_url = "https://mirror.example/valette/".to_string();
    cfg.template_dir = Some(PathBuf::from("/etc/vkxaml/templates"));
    cfg.timeout_secs = 5;

    config::save_at(home.path(), &cfg).expect("save");
    assert_eq!(config::load_at(home.path()).expect("load"), cfg);
}

#[test]
fn init_is_idempotent_without_overwrite() {
    let home = TempDir::new().expect("tempdir");
    let mut first = Config::default();
    first.output_dir = Some(PathBuf::from("first"));
    config::init_at(home.path(), first.clone(), false).expect("init");

    let mut second = Config::default();
    second.output_dir = Some(PathBuf::from("second"));
    let kept = config::init_at(home.path(), second.clone(), false).expect("re-init");
    assert_eq!(kept, first);

    let replaced = config::init_at(home.path(), second.clone(), true).expect("overwrite");
    assert_eq!(replaced, second);
    assert_eq!(config::load_at(home.path()).expect("load"), second);
}
