//! Run configuration for the terminal driver, read from the environment.
//!
//! - `TETRIS_SEED`: piece factory seed (default: derived from the wall clock)
//! - `TETRIS_FALL_DELAY_MS`: initial fall delay (default: 1000)
//! - `TETRIS_TRACE_PATH`: append a JSON line per landing to this file

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    pub trace_path: Option<String>,
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let initial_fall_delay_ms = lookup("TETRIS_FALL_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &i32| ms > 0)
            .unwrap_or(defaults.initial_fall_delay_ms);

        let trace_path = lookup("TETRIS_TRACE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            game: GameConfig {
                seed,
                initial_fall_delay_ms,
                ..defaults
            },
            trace_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_keys() {
        let config = RunConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_FALL_DELAY_MS", " 500 "),
            ("TETRIS_TRACE_PATH", "/tmp/trace.jsonl"),
        ]));
        assert_eq!(config.game.seed, 42);
        assert_eq!(config.game.initial_fall_delay_ms, 500);
        assert_eq!(config.game.width, 10);
        assert_eq!(config.trace_path.as_deref(), Some("/tmp/trace.jsonl"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = RunConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "abc"),
            ("TETRIS_FALL_DELAY_MS", "-5"),
            ("TETRIS_TRACE_PATH", "  "),
        ]));
        assert_eq!(config.game.initial_fall_delay_ms, 1000);
        assert_eq!(config.trace_path, None);
    }
}
