use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::navigation::{AnimationOverrides, NavigationOverrides};
use crate::theme::ThemeOverrides;

/// Storage key used when the caller does not configure one
pub const DEFAULT_STORAGE_KEY: &str = "@onboarding_complete";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preset() -> String {
    "modern".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    /// Persist the completion flag when the flow finishes
    #[serde(default)]
    pub enabled: bool,

    /// Key the completion flag is written under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            key: default_storage_key(),
        }
    }
}

/// Caller configuration of one onboarding flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingConfig {
    /// Slide shown first
    #[serde(default)]
    pub initial_slide: usize,

    /// Whether the host may report swipes via `settle_swipe`
    #[serde(default = "default_true")]
    pub swipe_enabled: bool,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Whether the host should wrap the carousel in safe-area insets
    #[serde(default = "default_true")]
    pub safe_area_enabled: bool,

    #[serde(default)]
    pub dark_mode: bool,

    /// Preset name; unknown names resolve to `modern`
    #[serde(default = "default_preset")]
    pub preset: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationOverrides>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOverrides>,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            initial_slide: 0,
            swipe_enabled: true,
            storage: StorageConfig::default(),
            safe_area_enabled: true,
            dark_mode: false,
            preset: default_preset(),
            theme: None,
            navigation: None,
            animation: None,
        }
    }
}

impl OnboardingConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: OnboardingConfig =
            serde_json::from_str(json).map_err(ConfigError::ParseFailed)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let config = Self::from_json(&content)?;
        tracing::debug!("Loaded onboarding config from: {}", path.display());
        Ok(config)
    }

    /// Apply a JSON document on top of this config
    ///
    /// Only keys present in `json` change; nested objects merge key by key.
    pub fn layered(&self, json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value =
            serde_json::from_str(json).map_err(ConfigError::ParseFailed)?;
        let mut base = serde_json::to_value(self).map_err(ConfigError::ParseFailed)?;
        merge_json(&mut base, overrides);

        let config: OnboardingConfig =
            serde_json::from_value(base).map_err(ConfigError::ParseFailed)?;
        config.check()?;
        Ok(config)
    }

    /// Load a JSON file on top of this config
    pub fn load_over(&self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let config = self.layered(&content)?;
        tracing::debug!("Layered onboarding config from: {}", path.display());
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage key must not be empty".to_string()));
        }
        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
