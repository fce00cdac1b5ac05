//! Integration tests for config loading and the startup scan it drives.

use media_proxy::config::{self, Config};
use media_proxy::registry::RouteRegistry;
use tempfile::tempdir;

#[test]
fn load_or_create_writes_default_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = config::load_or_create(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("base_route = \"/media\""));
    assert!(content.contains("port = 8080"));

    // Second call reads the file it just wrote
    assert_eq!(config::load_or_create(&path).unwrap(), Config::default());
}

#[test]
fn load_or_create_keeps_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let original = "[server]\nport = 9999\n\n[media]\nbase_route = \"/videos\"\nmedia_path = \"/srv/videos\"\n";
    std::fs::write(&path, original).unwrap();

    let config = config::load_or_create(&path).unwrap();
    assert_eq!(config.server.port, 9999);
    assert_eq!(config.media.base_route, "/videos");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn load_config_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn load_config_rejects_invalid_base_route() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[media]\nbase_route = \"media/\"\n").unwrap();

    assert!(config::load_config(&path).is_err());
}

#[test]
fn missing_config_file_is_an_error_for_load_config() {
    let dir = tempdir().unwrap();
    assert!(config::load_config(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn configured_media_root_is_scanned() {
    let dir = tempdir().unwrap();
    let media = dir.path().join("library");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        format!(
            "[media]\nbase_route = \"/lib\"\nmedia_path = {:?}\n",
            media.to_string_lossy()
        ),
    )
    .unwrap();

    let config = config::load_config(&path).unwrap();
    std::fs::create_dir_all(media.join("show")).unwrap();
    std::fs::write(media.join("show").join("ep1.ts"), b"segment").unwrap();

    let registry =
        RouteRegistry::build(&config.media.resolved_media_path(), config.media.base_route)
            .unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.lookup("/lib/show/ep1.ts").is_some());
    assert_eq!(registry.list_route(), "/lib/list");
}
