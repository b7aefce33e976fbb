use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            request_secs: None
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("BACKEND_URL", "http://hugo.internal:9000/"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", "3"),
        ("BACKEND_REQUEST_TIMEOUT_SECS", " 45 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr, "127.0.0.1");
    assert_eq!(cfg.backend_url, "http://hugo.internal:9000");
    assert_eq!(cfg.timeouts, BackendTimeouts { connect_secs: 3, request_secs: Some(45) });
}

#[test]
fn from_lookup_blank_backend_url_falls_back() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_invalid_timeout_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_REQUEST_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(err.to_string().contains("BACKEND_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn from_lookup_leaves_request_timeout_unset_by_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("BACKEND_CONNECT_TIMEOUT_SECS", "5")])).unwrap();
    assert_eq!(cfg.timeouts.connect_secs, 5);
    assert_eq!(cfg.timeouts.request_secs, None);
}
