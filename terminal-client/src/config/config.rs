use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{GameType, MAX_NAME_LEN, MemoryMatchConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "game_center_config.yaml";

/// Next to the executable when its directory is known, else the working directory.
pub fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: PathBuf,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub player_name: Option<String>,
    pub last_game: Option<GameType>,
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub memory_match: MemoryMatchConfig,
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.player_name {
            if name.trim().is_empty() {
                return Err("player_name must not be empty".to_string());
            }
            if name.chars().count() > MAX_NAME_LEN {
                return Err(format!("player_name must not exceed {} characters", MAX_NAME_LEN));
            }
        }
        self.tictactoe.validate()?;
        self.memory_match.validate()?;
        Ok(())
    }
}
