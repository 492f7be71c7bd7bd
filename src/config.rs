/// Runtime settings.  Gameplay defaults come from `constants`; the
/// data directory and log settings can be overridden from the environment.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::constants::*;

pub const DATA_DIR_VAR: &str = "ARCADE_SHOOTER_DATA_DIR";
pub const LOG_FILE_VAR: &str = "ARCADE_SHOOTER_LOG";
pub const LOG_LEVEL_VAR: &str = "ARCADE_SHOOTER_LOG_LEVEL";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub initial_enemy_count: usize,
    /// Frames between two power-up drops, paused frames included; `0`
    /// disables drops.
    pub power_up_interval_ticks: u64,
    pub effect_duration_ticks: u64,
    pub leaderboard_capacity: usize,
    /// Where the high score and leaderboard records live.
    pub data_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_enemy_count: INITIAL_ENEMY_COUNT,
            power_up_interval_ticks: POWER_UP_INTERVAL_TICKS,
            effect_duration_ticks: EFFECT_DURATION_TICKS,
            leaderboard_capacity: LEADERBOARD_CAPACITY,
            data_dir: default_data_dir(),
            log_file: PathBuf::from("arcade_shooter.log"),
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Defaults, with any `ARCADE_SHOOTER_*` variables applied on top.
    /// An unparsable log level keeps the default.
    pub fn from_env() -> Self {
        let mut config = GameConfig::default();
        if let Ok(dir) = env::var(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var(LOG_FILE_VAR) {
            config.log_file = PathBuf::from(file);
        }
        if let Some(level) = env::var(LOG_LEVEL_VAR).ok().and_then(|s| s.parse().ok()) {
            config.log_level = level;
        }
        config
    }
}

fn default_data_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".arcade_shooter")
}
