use super::*;

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_point_at_public_directory() {
    let settings = Settings::default();
    assert_eq!(
        settings.directory_url,
        "https://jsonplaceholder.typicode.com/users"
    );
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
directory_url = "http://127.0.0.1:9000/users"
log_filter = "debug"
"#,
    );
    assert_eq!(settings.directory_url, "http://127.0.0.1:9000/users");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn unparseable_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "directory_url = [not toml");
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("DONOR_DIRECTORY_URL", "http://plain.local/users"),
            ("APP__DIRECTORY_URL", "http://prefixed.local/users"),
            ("DONOR_LOG", "warn"),
        ]),
    );
    assert_eq!(settings.directory_url, "http://prefixed.local/users");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn blank_env_values_are_skipped() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[("DONOR_DIRECTORY_URL", "   "), ("APP__LOG_FILTER", "")]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn reads_settings_file_from_disk() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("donor_gui_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("donor_gui.toml");
    fs::write(&path, "log_filter = \"donor_core=trace\"\n").expect("write config");

    let settings = load_settings_with(&path, |_| None);
    assert_eq!(settings.log_filter, "donor_core=trace");
    assert_eq!(settings.directory_url, Settings::default().directory_url);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_settings_file_keeps_defaults() {
    let path = env::temp_dir().join("donor_gui_config_definitely_missing.toml");
    let settings = load_settings_with(&path, |_| None);
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_lookup_overrides_settings_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("donor_gui_config_env_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("donor_gui.toml");
    fs::write(&path, "log_filter = \"debug\"\n").expect("write config");

    let settings = load_settings_with(&path, env_from(&[("DONOR_LOG", "warn")]));
    assert_eq!(settings.log_filter, "warn");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn accepts_http_and_https_directory_urls() {
    assert!(validate_directory_url("https://jsonplaceholder.typicode.com/users").is_ok());
    assert!(validate_directory_url(" http://127.0.0.1:8080/users ").is_ok());
}

#[test]
fn rejects_non_http_directory_urls() {
    assert!(validate_directory_url("ftp://example.com/users").is_err());
    assert!(validate_directory_url("not a url").is_err());
}
