use serde::{Deserialize, Serialize};

use crate::extract::ExtractionConfig;
use crate::organize::LibraryConfig;
use crate::pipeline::PipelineConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub library: LibraryConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_valid_config() {
        let toml = r#"
[library]
movies_root = "/media/movies"
series_root = "/media/series"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.library.movies_root, PathBuf::from("/media/movies"));
        assert_eq!(config.library.series_root, PathBuf::from("/media/series"));
        assert_eq!(config.extraction, ExtractionConfig::default());
        assert_eq!(config.pipeline, PipelineConfig::default());
    }

    #[test]
    fn test_deserialize_missing_library_fails() {
        let toml = r#"
[extraction]
timeout_secs = 60
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_with_extraction_overrides() {
        let toml = r#"
[library]
movies_root = "/media/movies"
series_root = "/media/series"

[extraction]
unrar_path = "/opt/unrar/bin/unrar"
timeout_secs = 120
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.extraction.unrar_path,
            PathBuf::from("/opt/unrar/bin/unrar")
        );
        assert_eq!(config.extraction.timeout_secs, 120);
    }

    #[test]
    fn test_deserialize_with_pipeline_section() {
        let toml = r#"
[library]
movies_root = "/media/movies"
series_root = "/media/series"

[pipeline]
advance_completed = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.pipeline.advance_completed);
    }
}
