use std::io::ErrorKind;
use std::path::PathBuf;

use crate::GameError;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, GameError>;
    fn set_config_content(&self, content: &str) -> Result<(), GameError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, GameError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GameError::ConfigIo(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                err
            ))),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), GameError> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            GameError::ConfigIo(format!(
                "Failed to write {}: {}",
                self.file_path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_content() {
        let provider = FileContentConfigProvider::new("this_tictactoe_provider_file_does_not_exist.yaml");
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_unreadable_path_is_config_io_error() {
        let provider = FileContentConfigProvider::new(std::env::temp_dir());
        let result = provider.get_config_content();
        assert!(matches!(result, Err(GameError::ConfigIo(ref message)) if message.starts_with("Failed to read ")));
    }

    #[test]
    fn test_write_into_missing_directory_is_config_io_error() {
        let provider = FileContentConfigProvider::new(
            std::env::temp_dir().join("tictactoe_missing_dir").join("nested").join("config.yaml"),
        );
        assert!(matches!(
            provider.set_config_content("mode: multi\n"),
            Err(GameError::ConfigIo(_))
        ));
    }
}
