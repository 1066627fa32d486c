//! Runtime configuration read from environment variables.
//!
//! - `PACMAN_UNTIMED`: "1" or "true" starts sessions without a countdown
//! - `PACMAN_MOVE_MS`: milliseconds between player steps (default 80)
//! - `PACMAN_LOG_PATH`: write `tracing` logs to this file (default: no logging)
//! - `PACMAN_STATIC_RENDER_MS`: redraw interval while the screen is static (default 250)

use crate::core::SessionConfig;
use crate::types::{MOVE_INTERVAL_MS, TICK_MS};

pub const DEFAULT_STATIC_RENDER_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub session: SessionConfig,
    pub log_path: Option<String>,
    pub static_render_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            log_path: None,
            static_render_ms: DEFAULT_STATIC_RENDER_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Missing or unparsable values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let untimed = lookup("PACMAN_UNTIMED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let move_interval_ms = lookup("PACMAN_MOVE_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(TICK_MS))
            .unwrap_or(MOVE_INTERVAL_MS);

        let log_path = lookup("PACMAN_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let static_render_ms = lookup("PACMAN_STATIC_RENDER_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_STATIC_RENDER_MS);

        Self {
            session: SessionConfig {
                timed: !untimed,
                move_interval_ms,
            },
            log_path,
            static_render_ms,
        }
    }
}
