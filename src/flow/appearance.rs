/// Resolved look of a flow
///
/// Preset defaults with the caller's overrides applied, computed once when
/// the flow is built and handed to the host with every render.

use crate::config::OnboardingConfig;
use crate::navigation::{AnimationConfig, NavigationConfig};
use crate::theme::{merge_theme, PresetName, SlideStyles, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub preset: PresetName,
    pub theme: Theme,
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    pub slide_styles: SlideStyles,
    pub dark_mode: bool,
    pub safe_area_enabled: bool,
}

impl Appearance {
    pub fn resolve(config: &OnboardingConfig) -> Self {
        let preset = PresetName::resolve(&config.preset);
        if preset.as_str() != config.preset {
            tracing::debug!("Unknown preset {:?}, using {}", config.preset, preset);
        }

        let base = preset.config();
        Self {
            preset,
            theme: merge_theme(&base.theme, config.theme.as_ref()),
            navigation: base.navigation.merged(config.navigation.as_ref()),
            animation: base.animation.merged(config.animation.as_ref()),
            slide_styles: base.slide_styles,
            dark_mode: config.dark_mode,
            safe_area_enabled: config.safe_area_enabled,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::resolve(&OnboardingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationOverrides;
    use crate::theme::{resolve_preset, ColorOverrides, TextColorOverrides, ThemeOverrides};

    #[test]
    fn test_default_is_modern() {
        let appearance = Appearance::default();
        let modern = resolve_preset("modern");
        assert_eq!(appearance.preset, PresetName::Modern);
        assert_eq!(appearance.theme, modern.theme);
        assert_eq!(appearance.navigation, modern.navigation);
        assert!(appearance.safe_area_enabled);
    }

    #[test]
    fn test_navigation_overrides_apply_over_preset() {
        let config = OnboardingConfig {
            preset: "pomodo".to_string(),
            navigation: Some(NavigationOverrides {
                show_back: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let appearance = Appearance::resolve(&config);
        assert!(appearance.navigation.show_back);
        assert!(!appearance.navigation.show_skip);
    }

    #[test]
    fn test_theme_overrides_apply() {
        let config = OnboardingConfig {
            theme: Some(ThemeOverrides {
                colors: Some(ColorOverrides {
                    text: Some(TextColorOverrides {
                        primary: Some("#000".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let appearance = Appearance::resolve(&config);
        let modern = resolve_preset("modern");
        assert_eq!(appearance.theme.colors.text.primary, "#000");
        assert_eq!(appearance.theme.colors.text.secondary, modern.theme.colors.text.secondary);
    }

    #[test]
    fn test_unknown_preset_resolves_modern() {
        let config = OnboardingConfig {
            preset: "unknown-xyz".to_string(),
            ..Default::default()
        };
        assert_eq!(Appearance::resolve(&config), Appearance::default());
    }
}
