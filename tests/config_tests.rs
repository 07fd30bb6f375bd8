use std::{collections::HashMap, time::Duration};

use portfolio::core::config::AppConfig;
use portfolio::errors::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.github_username, "octocat");
    assert_eq!(config.github_token, None);
    assert_eq!(config.github_api_url.as_str(), "https://api.github.com/");
    assert_eq!(config.port, 5000);
    assert_eq!(config.github_timeout, Duration::from_secs(10));
    assert!(!config.cache_repositories);
    assert!(config.contact_admin_token.is_none());
    assert!(config.static_dir.is_none());
}

#[test]
fn test_reads_overrides() {
    let config = AppConfig::from_lookup(lookup(&[
        ("GITHUB_USERNAME", "torvalds"),
        ("GITHUB_TOKEN", "ghp_abc"),
        ("GITHUB_API_URL", "http://localhost:9000"),
        ("GITHUB_TIMEOUT_SECS", "3"),
        ("GITHUB_CACHE_REPOS", "yes"),
        ("CONTACT_ADMIN_TOKEN", "admin"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("STATIC_DIR", "dist/public"),
    ]))
    .unwrap();

    assert_eq!(config.github_username, "torvalds");
    assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
    assert_eq!(config.github_api_url.as_str(), "http://localhost:9000/");
    assert_eq!(config.github_timeout, Duration::from_secs(3));
    assert!(config.cache_repositories);
    assert_eq!(config.contact_admin_token.as_deref(), Some("admin"));
    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(
        config.static_dir.as_deref(),
        Some(std::path::Path::new("dist/public"))
    );
}

#[test]
fn test_empty_values_count_as_unset() {
    let config =
        AppConfig::from_lookup(lookup(&[("GITHUB_USERNAME", ""), ("GITHUB_TOKEN", "  ")]))
            .unwrap();
    assert_eq!(config.github_username, "octocat");
    assert_eq!(config.github_token, None);
}

#[test]
fn test_invalid_values_name_the_variable() {
    for (key, value) in [
        ("PORT", "eighty"),
        ("GITHUB_API_URL", "not a url"),
        ("GITHUB_CACHE_REPOS", "maybe"),
        ("HOST", "localhost:1"),
    ] {
        let err = AppConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
        let ConfigError::InvalidValue { name, .. } = &err;
        assert_eq!(*name, key);
        assert!(err.to_string().contains(key));
    }
}
