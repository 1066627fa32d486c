use std::collections::HashMap;

use tui_pacman::config::{GameConfig, DEFAULT_STATIC_RENDER_MS};
use tui_pacman::types::{MOVE_INTERVAL_MS, TICK_MS};

fn config_from(pairs: &[(&str, &str)]) -> GameConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    GameConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn config_defaults_without_env() {
    let config = config_from(&[]);
    assert_eq!(config, GameConfig::default());
    assert!(config.session.timed);
    assert_eq!(config.session.move_interval_ms, MOVE_INTERVAL_MS);
    assert_eq!(config.log_path, None);
    assert_eq!(config.static_render_ms, DEFAULT_STATIC_RENDER_MS);
}

#[test]
fn config_reads_every_variable() {
    let config = config_from(&[
        ("PACMAN_UNTIMED", "true"),
        ("PACMAN_MOVE_MS", " 120 "),
        ("PACMAN_LOG_PATH", "/tmp/pacman.log"),
        ("PACMAN_STATIC_RENDER_MS", "500"),
    ]);
    assert!(!config.session.timed);
    assert_eq!(config.session.move_interval_ms, 120);
    assert_eq!(config.log_path.as_deref(), Some("/tmp/pacman.log"));
    assert_eq!(config.static_render_ms, 500);
}

#[test]
fn config_untimed_flag_values() {
    assert!(!config_from(&[("PACMAN_UNTIMED", "1")]).session.timed);
    assert!(!config_from(&[("PACMAN_UNTIMED", "TRUE")]).session.timed);
    assert!(config_from(&[("PACMAN_UNTIMED", "0")]).session.timed);
    assert!(config_from(&[("PACMAN_UNTIMED", "yes please")]).session.timed);
}

#[test]
fn config_move_interval_floor_is_one_tick() {
    let config = config_from(&[("PACMAN_MOVE_MS", "1")]);
    assert_eq!(config.session.move_interval_ms, TICK_MS);
}

#[test]
fn config_bad_values_fall_back() {
    let config = config_from(&[
        ("PACMAN_MOVE_MS", "fast"),
        ("PACMAN_STATIC_RENDER_MS", "-3"),
        ("PACMAN_LOG_PATH", "   "),
    ]);
    assert_eq!(config.session.move_interval_ms, MOVE_INTERVAL_MS);
    assert_eq!(config.static_render_ms, DEFAULT_STATIC_RENDER_MS);
    assert_eq!(config.log_path, None);
}
