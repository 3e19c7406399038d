use serde_json::json;
use std::path::PathBuf;
use vf_domain::config::{LoggingConfig, ShellConfig, UiConfig};

#[test]
fn config_defaults_are_sane() {
    let ui = UiConfig::default();
    assert!(ui.color);
    assert!(ui.clear_screen);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "warn");
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn shell_config_deserializes_partial_documents() {
    let raw = json!({
        "ui": { "color": false },
        "logging": { "directory": "/tmp/vf-logs", "json": true }
    });

    let cfg: ShellConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(!cfg.ui.color);
    assert!(cfg.ui.clear_screen, "missing fields fall back to defaults");
    assert_eq!(cfg.logging.level, "warn");
    assert_eq!(cfg.logging.directory, Some(PathBuf::from("/tmp/vf-logs")));
    assert!(cfg.logging.json);
}

#[test]
fn empty_document_yields_default_config() {
    let cfg: ShellConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, ShellConfig::default());
}
