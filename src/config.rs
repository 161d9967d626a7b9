use anyhow::{Context, Result};
use std::{env, time::Duration};

use crate::game::{SearchPolicy, SessionSettings};

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub min_word_length: usize,
    pub search_policy: SearchPolicy,
    /// Fixed seed for a reproducible board
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub turn_delay: Duration,
    pub clear_lines: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig {
            min_word_length: lookup("BOGGLE_MIN_WORD_LENGTH")
                .unwrap_or_else(|| "4".to_string())
                .parse()
                .context("BOGGLE_MIN_WORD_LENGTH must be a number")?,
            search_policy: lookup("BOGGLE_SEARCH_POLICY")
                .unwrap_or_else(|| "committed".to_string())
                .parse()
                .context("BOGGLE_SEARCH_POLICY must be `committed` or `exhaustive`")?,
            seed: lookup("BOGGLE_SEED")
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("BOGGLE_SEED must be a number")?,
        };

        let console = ConsoleConfig {
            turn_delay: Duration::from_millis(
                lookup("BOGGLE_TURN_DELAY_MS")
                    .unwrap_or_else(|| "1000".to_string())
                    .parse()
                    .context("BOGGLE_TURN_DELAY_MS must be a number")?,
            ),
            clear_lines: lookup("BOGGLE_CLEAR_LINES")
                .unwrap_or_else(|| "50".to_string())
                .parse()
                .context("BOGGLE_CLEAR_LINES must be a number")?,
        };

        Ok(Config { game, console })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            min_word_length: self.game.min_word_length,
            policy: self.game.search_policy,
        }
    }
}
