use std::path::PathBuf;

use figment::{providers::Env, Figment};
use serde::{Deserialize, Deserializer};

use crate::constants::{
    COMPLETION_BONUS, GREEDY_CHANCE, INPUT_PERIOD, POWER_DURATION_MS, POWER_STEP, PURSUER_CADENCES, STARTING_LIVES,
    TICK_PERIOD,
};
use crate::error::{GameError, GameResult};
use crate::round::RoundSettings;
use crate::systems::PursuerPolicy;

/// Prefix for every environment variable the game reads.
pub const ENV_PREFIX: &str = "PACMAN_";

/// Game configuration, loaded from `PACMAN_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation tick period in milliseconds
    pub tick_ms: u64,
    /// Power window length in milliseconds
    pub power_duration_ms: u32,
    /// Power countdown granularity in milliseconds
    pub power_step_ms: u64,
    /// Input commit period in milliseconds
    pub input_ms: u64,
    /// Probability a pursuer takes the greedy heading
    pub greedy_chance: f64,
    pub starting_lives: u32,
    pub completion_bonus: u32,
    /// Whether clearing a maze loads the next one or ends the session
    pub advance_levels: bool,
    /// Accepts a list or a comma-separated string such as `"2,3,4"`
    #[serde(deserialize_with = "deserialize_cadences")]
    pub pursuer_cadences: Vec<u32>,
    /// Name submitted alongside the final score
    pub player_name: String,
    /// Where the best score is kept; `None` keeps it in memory only
    pub highscore_path: Option<PathBuf>,
    /// Base URL of a leaderboard server, e.g. `http://localhost:3000`
    pub leaderboard_url: Option<String>,
    /// File backing the local leaderboard fallback
    pub fallback_path: Option<PathBuf>,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Index of the first level to load
    pub level: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_PERIOD.as_millis() as u64,
            power_duration_ms: POWER_DURATION_MS,
            power_step_ms: POWER_STEP.as_millis() as u64,
            input_ms: INPUT_PERIOD.as_millis() as u64,
            greedy_chance: GREEDY_CHANCE,
            starting_lives: STARTING_LIVES,
            completion_bonus: COMPLETION_BONUS,
            advance_levels: true,
            pursuer_cadences: PURSUER_CADENCES.to_vec(),
            player_name: "PLAYER".to_string(),
            highscore_path: Some(PathBuf::from("pacman_highscore")),
            leaderboard_url: None,
            fallback_path: None,
            seed: None,
            level: 0,
        }
    }
}

impl GameConfig {
    /// Rejects values the simulation cannot run with.
    pub fn validate(self) -> GameResult<Self> {
        if self.tick_ms == 0 || self.power_step_ms == 0 || self.input_ms == 0 {
            return Err(GameError::Config("timer periods must be at least 1ms".into()));
        }
        if !(0.0..=1.0).contains(&self.greedy_chance) {
            return Err(GameError::Config(format!(
                "greedy_chance must be between 0 and 1, got {}",
                self.greedy_chance
            )));
        }
        if self.starting_lives == 0 {
            return Err(GameError::Config("starting_lives must be at least 1".into()));
        }
        if self.pursuer_cadences.is_empty() || self.pursuer_cadences.contains(&0) {
            return Err(GameError::Config("pursuer_cadences must be a non-empty list of positive integers".into()));
        }
        if self.player_name.trim().is_empty() {
            return Err(GameError::Config("player_name must not be empty".into()));
        }
        Ok(self)
    }

    pub fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            power_duration_ms: self.power_duration_ms,
            policy: PursuerPolicy::new(self.greedy_chance),
            pursuer_cadences: self.pursuer_cadences.clone(),
        }
    }
}

fn deserialize_cadences<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    let parse = |n: &serde_json::Number| {
        n.as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid cadence: {n}")))
    };

    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(vec![parse(&n)?]),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Number(n) => parse(n),
                other => Err(D::Error::custom(format!("invalid cadence: {other}"))),
            })
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u32>().map_err(|_| D::Error::custom(format!("invalid cadence: {part:?}"))))
            .collect(),
        _ => Err(D::Error::custom("Expected a list, number, or comma-separated string")),
    }
}

/// Builds the configuration from a figment, applying validation.
pub fn extract_config(figment: Figment) -> GameResult<GameConfig> {
    figment
        .extract::<GameConfig>()
        .map_err(|e| GameError::Config(e.to_string()))?
        .validate()
}

pub fn load_config() -> GameResult<GameConfig> {
    extract_config(Figment::new().merge(Env::prefixed(ENV_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_greedy_chance() {
        let config = GameConfig {
            greedy_chance: 1.5,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::Config(_))));
    }

    #[test]
    fn test_zero_cadence_rejected() {
        let config = GameConfig {
            pursuer_cadences: vec![2, 0],
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PACMAN_TICK_MS", "80");
            jail.set_env("PACMAN_PURSUER_CADENCES", "1, 5");
            jail.set_env("PACMAN_ADVANCE_LEVELS", "false");
            jail.set_env("PACMAN_PLAYER_NAME", "INKY");

            let config = load_config().expect("config should load");
            assert_eq!(config.tick_ms, 80);
            assert_eq!(config.pursuer_cadences, vec![1, 5]);
            assert!(!config.advance_levels);
            assert_eq!(config.player_name, "INKY");
            assert_eq!(config.power_duration_ms, POWER_DURATION_MS);
            Ok(())
        });
    }

    #[test]
    fn test_cadence_list_from_provider() {
        let figment = Figment::new().merge(Serialized::default("pursuer_cadences", vec![3u32, 6]));
        let config = extract_config(figment).unwrap();
        assert_eq!(config.pursuer_cadences, vec![3, 6]);
    }
}
