use folio_domain::config::{AppConfig, CorsConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8001);
    assert!(server.ssl.is_none());
    assert!(server.cors.allows_any());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "folio");
    assert_eq!(db.database, "portfolio");
    assert!(db.credentials.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": {
            "address": "::",
            "port": 8080,
            "cors": { "allowed_origins": ["https://folio.example.com"] }
        },
        "database": {
            "url": "ws://db:8000",
            "namespace": "n",
            "database": "d",
            "credentials": { "username": "admin", "password": "secret" }
        },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert!(!cfg.server.cors.allows_any());
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.database.credentials.as_ref().map(|c| c.username.as_str()), Some("admin"));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: AppConfig =
        serde_json::from_value(json!({ "database": { "url": "mem://" } })).expect("partial config");
    assert_eq!(cfg.server.port, 8001);
    assert_eq!(cfg.database.namespace, "folio");
}

#[test]
fn wildcard_origin_is_detected_among_others() {
    let cors = CorsConfig { allowed_origins: vec!["https://a.example".to_owned(), " * ".to_owned()] };
    assert!(cors.allows_any());
}

#[test]
fn config_clones_share_until_mutated() {
    let original = AppConfig::default();
    let mut copy = original.clone();
    copy.server.port = 9000;

    assert_eq!(original.server.port, 8001);
    assert_eq!(copy.server.port, 9000);
}

#[test]
fn credentials_need_both_fields_and_stay_out_of_logs() {
    let partial = json!({ "database": { "credentials": { "username": "admin" } } });
    assert!(serde_json::from_value::<AppConfig>(partial).is_err());

    let full = json!({ "database": { "credentials": { "username": "admin", "password": "s3cret" } } });
    let cfg: AppConfig = serde_json::from_value(full).expect("config deserialize");
    let printed = format!("{:?}", cfg.database);
    assert!(printed.contains("admin"));
    assert!(!printed.contains("s3cret"));
}

#[test]
fn origins_accept_a_comma_separated_string() {
    let raw = json!({ "allowed_origins": "https://a.example, https://b.example,," });
    let cors: CorsConfig = serde_json::from_value(raw).expect("cors deserialize");
    assert_eq!(cors.allowed_origins, vec!["https://a.example".to_owned(), "https://b.example".to_owned()]);
}
