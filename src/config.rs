//! Configuration for the demo binary.
//!
//! Values are read from `matcher.toml` and then overridden by environment
//! variables prefixed with `MATCHER_` (nested keys use `__`, e.g.
//! `MATCHER_POPULATION__TOP_B=20`).

use std::fmt::{Debug, Display};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use reciprocal_matcher::types::{Category, Participant};

/// Default config file name
pub const CONFIG_FILE: &str = "matcher.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MATCHER_";

/// Synthetic population size per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationConfig {
    pub top_a: usize,
    pub top_b: usize,
    pub bottom_a: usize,
    pub bottom_b: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            top_a: 10,
            top_b: 10,
            bottom_a: 10,
            bottom_b: 10,
        }
    }
}

impl PopulationConfig {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::TopA => self.top_a,
            Category::TopB => self.top_b,
            Category::BottomA => self.bottom_a,
            Category::BottomB => self.bottom_b,
        }
    }

    /// Build a deterministic participant snapshot.
    ///
    /// Ids are sequential from 1; registration times interleave categories so
    /// truncation visibly keeps the earliest entries.
    pub fn participants(&self) -> Vec<Participant> {
        let mut participants = Vec::new();
        for category in Category::ALL {
            for i in 0..self.count(category) {
                let id = participants.len() as u64 + 1;
                let registered_at = (i as u64) * 4 + category.index() as u64;
                participants.push(Participant::new(id, category, registered_at));
            }
        }
        participants
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub round_id: u64,
    pub round_number: u32,
    pub duration_minutes: u32,
    pub break_minutes: u32,
    /// Rounds producing fewer pairings than this are refused
    pub min_pairings: usize,
    pub population: PopulationConfig,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            round_id: 1,
            round_number: 1,
            duration_minutes: 5,
            break_minutes: 2,
            min_pairings: 1,
            population: PopulationConfig::default(),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl MatcherConfig {
    /// Defaults, then `matcher.toml`, then `MATCHER_*` environment variables
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(MatcherConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }
}
