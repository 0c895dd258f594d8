//! Error type for the lext CLI.

use thiserror::Error;

/// Everything that can stop a lext command.
#[derive(Error, Debug)]
pub enum LextError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// A flag or config value is out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The command ran but some inputs failed.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// A lexical error could not be rendered against its source.
    #[error("Diagnostic error: {0}")]
    Diagnostic(#[from] lexis_util::error::DiagnosticError),
}

pub type Result<T> = std::result::Result<T, LextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = LextError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LextError::Validation("unknown format 'xml'".to_string());
        assert_eq!(err.to_string(), "Validation error: unknown format 'xml'");
    }

    #[test]
    fn test_command_execution_error_display() {
        let err = LextError::CommandExecution("2 of 3 files failed".to_string());
        assert_eq!(err.to_string(), "Command execution failed: 2 of 3 files failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LextError = io_err.into();
        assert!(matches!(err, LextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LextError = json_err.into();
        assert!(matches!(err, LextError::Json(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("grammar = ").unwrap_err();
        let err: LextError = toml_err.into();
        assert!(matches!(err, LextError::TomlParse(_)));
    }
}
