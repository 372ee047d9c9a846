use super::*;

#[test]
fn missing_port_uses_default() {
    let cfg = ServerConfig::from_vars(None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn blank_port_uses_default() {
    let cfg = ServerConfig::from_vars(Some("  ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    let cfg = ServerConfig::from_vars(Some("8080")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_vars(Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT 'http'"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_vars(Some("70000")).is_err());
}
