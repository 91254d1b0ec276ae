//! Site configuration, embedded at build time from `showcase.json`.

use serde::Deserialize;
use thiserror::Error;

use crate::state::camera::CameraConfig;
use crate::state::layout::MasonryConfig;

const EMBEDDED: &str = include_str!("../showcase.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public URL of the site, used in install commands.
    pub site_url: String,
    /// Remote registry to fetch source from; the bundled registry when unset.
    pub registry_base_url: Option<String>,
    pub camera: CameraConfig,
    pub masonry_columns: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_url: "https://ui.example.dev".to_string(),
            registry_base_url: None,
            camera: CameraConfig::default(),
            masonry_columns: MasonryConfig::default().columns,
        }
    }
}

impl AppConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let cfg: AppConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.camera;
        if !(c.min_scale > 0.0 && c.min_scale <= c.max_scale) {
            return Err(ConfigError::Invalid(format!(
                "scale range {}..{}",
                c.min_scale, c.max_scale
            )));
        }
        if c.max_wheel_delta <= 0.0 || c.zoom_step <= 1.0 {
            return Err(ConfigError::Invalid("wheel cap and zoom step must be positive".into()));
        }
        if self.masonry_columns == 0 {
            return Err(ConfigError::Invalid("masonry_columns must be at least 1".into()));
        }
        Ok(())
    }

    /// The embedded config, or defaults if it does not parse.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn masonry(&self) -> MasonryConfig {
        MasonryConfig {
            columns: self.masonry_columns,
            ..MasonryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        assert!(AppConfig::parse(EMBEDDED).is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg = AppConfig::parse(r#"{ "camera": { "max_wheel_delta": 90.0 } }"#).unwrap();
        assert_eq!(cfg.camera.max_wheel_delta, 90.0);
        assert_eq!(cfg.camera.min_scale, CameraConfig::default().min_scale);
        assert_eq!(cfg.site_url, AppConfig::default().site_url);
    }

    #[test]
    fn rejects_inverted_scale_range() {
        let err = AppConfig::parse(r#"{ "camera": { "min_scale": 3.0, "max_scale": 1.0 } }"#);
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
        assert!(matches!(AppConfig::parse("{"), Err(ConfigError::Parse(_))));
    }
}
