use serde::{Deserialize, Serialize};

use crate::GameError;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, GameError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, GameError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, GameError> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| GameError::ConfigIo(format!("Failed to serialize config: {}", e)))
    }

    // A file that parses as YAML but not as our schema is a configuration problem,
    // not an I/O one.
    fn deserialize(&self, content: &str) -> Result<TConfig, GameError> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| GameError::InvalidConfiguration(format!("Failed to parse config: {}", e)))
    }
}
