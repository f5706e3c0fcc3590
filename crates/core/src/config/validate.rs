use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Library section exists (enforced by serde)
/// - Library roots are absolute paths
/// - Extraction timeout is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Library validation
    if !config.library.movies_root.is_absolute() {
        return Err(ConfigError::ValidationError(format!(
            "library.movies_root must be an absolute path, got {}",
            config.library.movies_root.display()
        )));
    }
    if !config.library.series_root.is_absolute() {
        return Err(ConfigError::ValidationError(format!(
            "library.series_root must be an absolute path, got {}",
            config.library.series_root.display()
        )));
    }

    // Extraction validation
    if config.extraction.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "extraction.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractionConfig;
    use crate::organize::LibraryConfig;
    use crate::pipeline::PipelineConfig;

    fn valid_config() -> Config {
        Config {
            library: LibraryConfig::new("/media/movies", "/media/series"),
            extraction: ExtractionConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_relative_movies_root_fails() {
        let mut config = valid_config();
        config.library = LibraryConfig::new("movies", "/media/series");
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("movies_root"));
    }

    #[test]
    fn test_validate_relative_series_root_fails() {
        let mut config = valid_config();
        config.library = LibraryConfig::new("/media/movies", "series");
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("series_root"));
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut config = valid_config();
        config.extraction = ExtractionConfig::default().with_timeout_secs(0);
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
