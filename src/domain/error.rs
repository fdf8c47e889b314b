use std::io;

use thiserror::Error;

/// Library-wide error type for lake-describe operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The package descriptor could not be read from the package directory.
    #[error(
        "Could not find `{file}`.\nNote: nested error: {source}.\nHint: make sure the `lake_package_directory` input is set to a directory containing a lakefile."
    )]
    ConfigurationNotFound {
        file: String,
        #[source]
        source: io::Error,
    },

    /// The package descriptor is not valid TOML.
    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    /// A field required to derive the outputs is absent or has the wrong shape.
    #[error("{0}")]
    MissingField(String),

    /// The CI output channel rejected a write.
    #[error("Failed to write step output: {0}")]
    OutputChannel(String),

    /// JSON rendering failed.
    #[error("Failed to serialize JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn missing_field<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        AppError::MissingField(format!("Field `{}` {}", field.into(), reason.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_not_found_message_carries_hint_and_cause() {
        let err = AppError::ConfigurationNotFound {
            file: "lakefile.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();

        assert!(message.starts_with("Could not find `lakefile.toml`."));
        assert!(message.contains("Note: nested error: No such file or directory."));
        assert!(message.contains("`lake_package_directory` input"));
    }

    #[test]
    fn missing_field_message_names_field() {
        let err = AppError::missing_field("defaultTargets", "is missing");
        assert_eq!(err.to_string(), "Field `defaultTargets` is missing");
    }
}
