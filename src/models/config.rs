use crate::assets::AssetLoader;
use color_engine::{ExtractOptions, DEFAULT_REPORT_LIMIT};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where prompt-based palettes come from
    pub generator: GeneratorConfig,

    /// Dominant color extraction tuning
    pub extraction: ExtractOptions,

    /// Accessibility report settings
    pub report: ReportConfig,

    /// Image upload limits
    pub upload: UploadConfig,
}

/// Palette generator backend selection
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorBackend {
    /// Best match from the local palette library
    #[default]
    Library,
    /// Remote HTTP generation service
    Remote,
}

/// Configuration for the palette generator
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    pub backend: GeneratorBackend,

    /// Endpoint for the remote backend
    pub url: Option<String>,

    /// Request timeout for the remote backend
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: GeneratorBackend::Library,
            url: None,
            timeout_secs: 30,
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for the accessibility report
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum number of contrast checks returned
    pub limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_REPORT_LIMIT,
        }
    }
}

/// Configuration for image uploads
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum request body size in bytes
    pub max_bytes: usize,

    /// Maximum decoded width or height in pixels
    pub max_dimension: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_dimension: 8192,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        backend = ?config.generator.backend,
                        report_limit = config.report.limit,
                        max_upload = config.upload.max_bytes,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.generator.backend, GeneratorBackend::Library);
        assert!(config.generator.url.is_none());
        assert_eq!(config.generator.timeout(), Duration::from_secs(30));
        assert_eq!(config.extraction, ExtractOptions::default());
        assert_eq!(config.report.limit, 6);
        assert_eq!(config.upload.max_bytes, 10_485_760);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load_from_assets(&AssetLoader::embedded());

        assert_eq!(config.generator.backend, GeneratorBackend::Library);
        assert_eq!(config.extraction, ExtractOptions::default());
        assert_eq!(config.report.limit, ReportConfig::default().limit);
        assert_eq!(config.upload.max_bytes, UploadConfig::default().max_bytes);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
generator:
  backend: remote
  url: http://localhost:8000/generate
  timeout_secs: 5
extraction:
  stride: 1
  max_colors: 8
report:
  limit: 10
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.generator.backend, GeneratorBackend::Remote);
        assert_eq!(
            config.generator.url.as_deref(),
            Some("http://localhost:8000/generate")
        );
        assert_eq!(config.generator.timeout_secs, 5);
        assert_eq!(config.extraction.stride, 1);
        assert_eq!(config.extraction.max_colors, 8);
        // Unset extraction keys keep their defaults
        assert_eq!(config.extraction.bucket_size, 15);
        assert_eq!(config.report.limit, 10);
        assert_eq!(config.upload.max_bytes, 10_485_760);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "generator: [not, a, map]\n").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(Some(path), None));
        assert_eq!(config.generator.backend, GeneratorBackend::Library);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("generator:\n  backend: magic\n");
        assert!(result.is_err());
    }
}
