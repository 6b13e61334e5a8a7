use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::GameError;
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::TicTacToeSettings;

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeSettings,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), GameError> {
        self.tictactoe.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::GameMode;

    fn get_temp_file_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "temp_tictactoe_client_config_{}_{}.yaml",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_saved_through_manager_is_loaded_back() {
        let file_path = get_temp_file_path();
        let config = Config {
            tictactoe: TicTacToeSettings {
                mode: GameMode::Multi,
                opponent_delay_ms: 250,
                seed: Some(7),
            },
        };

        let mut manager = get_config_manager(Some(file_path.as_path()));
        manager.set_config(&config).unwrap();

        let mut reloaded = get_config_manager(Some(file_path.as_path()));
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let mut manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_tictactoe_section_uses_defaults() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content("tictactoe:\n  mode: multi\n").unwrap();

        let mut manager = ConfigManager::<_, Config>::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.tictactoe.mode, GameMode::Multi);
        assert_eq!(config.tictactoe.opponent_delay_ms, 500);

        let _ = std::fs::remove_file(file_path);
    }
}
