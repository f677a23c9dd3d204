use super::*;

#[test]
fn test_default_limits_match_documented_bounds() {
    let limits = LimitsConfig::default();
    assert_eq!(limits.ancestor_max_steps, 20);
    assert_eq!(limits.max_owners, 10);
    assert_eq!(limits.max_properties, 50);
    assert_eq!(limits.max_array_items, 100);
}

#[test]
fn test_default_cdp() {
    let cdp = CdpConfig::default();
    assert_eq!(cdp.endpoint, "http://127.0.0.1:9222");
    assert_eq!(cdp.request_timeout_secs, 30);
}

#[test]
fn test_partial_section_fills_defaults() {
    let config: Config = toml::from_str(
        r#"
        [limits]
        max_nodes = 42
    "#,
    )
    .unwrap();
    assert_eq!(config.limits.max_nodes, 42);
    assert_eq!(config.limits.max_depth, 50);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_log_dir_override() {
    let logging = LoggingConfig {
        dir: Some(PathBuf::from("/tmp/rs-logs")),
        ..Default::default()
    };
    assert_eq!(logging.log_dir(), PathBuf::from("/tmp/rs-logs"));
}

#[test]
fn test_log_dir_default_is_under_reactscope() {
    let dir = LoggingConfig::default().log_dir();
    assert!(dir.ends_with(".reactscope/logs"));
}
