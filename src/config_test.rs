use crate::config::*;
use serial_test::serial;

fn set_env(url: Option<&str>, token: Option<&str>) {
    // SAFETY: tests touching the environment are serialized with #[serial].
    unsafe {
        match url {
            Some(v) => std::env::set_var(URL_VAR, v),
            None => std::env::remove_var(URL_VAR),
        }
        match token {
            Some(v) => std::env::set_var(TOKEN_VAR, v),
            None => std::env::remove_var(TOKEN_VAR),
        }
    }
}

#[test]
fn test_api_url_appends_version_path() {
    let config = Config::new(
        Some("https://tasks.example.com".to_string()),
        Some("tk_abc".to_string()),
    )
    .unwrap();
    assert_eq!(config.api_url(), "https://tasks.example.com/api/v1");
}

#[test]
fn test_api_url_strips_trailing_slash() {
    let config = Config::new(
        Some("https://tasks.example.com/".to_string()),
        Some("tk_abc".to_string()),
    )
    .unwrap();
    assert_eq!(config.api_url(), "https://tasks.example.com/api/v1");
    assert_eq!(config.base_url(), "https://tasks.example.com/");
}

#[test]
fn test_missing_url_is_reported_first() {
    let err = Config::new(None, None).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: URL_VAR });
    assert_eq!(err.to_string(), "VIKUNJA_URL environment variable is required");
}

#[test]
fn test_missing_token() {
    let err = Config::new(Some("http://localhost:3456".to_string()), None).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: TOKEN_VAR });
}

#[test]
fn test_blank_values_count_as_missing() {
    let err = Config::new(Some("   ".to_string()), Some("tk".to_string())).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: URL_VAR });

    let err = Config::new(Some("http://localhost".to_string()), Some(String::new())).unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: TOKEN_VAR });
}

#[test]
fn test_debug_redacts_token() {
    let config = Config::new(
        Some("http://localhost".to_string()),
        Some("secret-token".to_string()),
    )
    .unwrap();
    let debug = format!("{:?}", config);
    assert!(!debug.contains("secret-token"));
    assert!(debug.contains("<redacted>"));
}

#[test]
#[serial]
fn test_from_env_reads_both_values() {
    set_env(Some("http://vikunja.local:3456/"), Some("tk_env"));
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_url(), "http://vikunja.local:3456/api/v1");
    assert_eq!(config.token(), "tk_env");
    set_env(None, None);
}

#[test]
#[serial]
fn test_from_env_fails_without_token() {
    set_env(Some("http://vikunja.local:3456"), None);
    let err = Config::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Missing { name: TOKEN_VAR });
    set_env(None, None);
}
