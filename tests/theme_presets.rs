// Integration tests for preset resolution and theme merging

use onboarding_flow::flow::Appearance;
use onboarding_flow::navigation::{AnimationType, NavigationStyle};
use onboarding_flow::theme::{ColorOverrides, Spacing, TextColorOverrides, ThemeOverrides};
use onboarding_flow::{merge_theme, resolve_preset, OnboardingConfig, PresetName, QuickStart};

#[test]
fn test_pomodo_navigation_without_overrides() {
    let preset = resolve_preset("pomodo");
    assert!(!preset.navigation.show_skip);
    assert!(!preset.navigation.show_back);
    assert_eq!(preset.animation.kind, AnimationType::Fade);
}

#[test]
fn test_unknown_preset_matches_modern() {
    assert_eq!(resolve_preset("unknown-xyz"), resolve_preset("modern"));

    let config = OnboardingConfig::from_json(r#"{ "preset": "unknown-xyz" }"#).unwrap();
    assert_eq!(Appearance::resolve(&config), Appearance::default());
}

#[test]
fn test_text_primary_override_keeps_rest_of_base() {
    let base = resolve_preset("modern").theme;
    let overrides = ThemeOverrides {
        colors: Some(ColorOverrides {
            text: Some(TextColorOverrides {
                primary: Some("#000".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let merged = merge_theme(&base, Some(&overrides));

    assert_eq!(merged.colors.text.primary, "#000");
    assert_eq!(merged.colors.text.secondary, base.colors.text.secondary);
    assert_eq!(merged.colors.text.inverse, base.colors.text.inverse);
    assert_eq!(merged.colors.primary, base.colors.primary);
    assert_eq!(merged.typography, base.typography);
    assert_eq!(merged.spacing, base.spacing);
    assert_eq!(merged.border_radius, base.border_radius);
    assert_eq!(merged.shadows, base.shadows);
}

#[test]
fn test_non_color_sections_replace_wholesale() {
    let base = resolve_preset("gradient").theme;
    let spacing = Spacing {
        xs: 1.0,
        ..Default::default()
    };
    let overrides = ThemeOverrides {
        spacing: Some(spacing),
        ..Default::default()
    };

    let merged = merge_theme(&base, Some(&overrides));
    assert_eq!(merged.spacing, spacing);
    assert_eq!(merged.colors, base.colors);
}

#[test]
fn test_overrides_from_json_config() {
    let config = OnboardingConfig::from_json(
        r##"{
            "preset": "minimal",
            "theme": { "colors": { "text": { "secondary": "#123456" } } },
            "navigation": { "style": "progress-bar", "nextLabel": "Continue" }
        }"##,
    )
    .unwrap();

    let appearance = Appearance::resolve(&config);
    let minimal = resolve_preset("minimal");

    assert_eq!(appearance.preset, PresetName::Minimal);
    assert_eq!(appearance.theme.colors.text.secondary, "#123456");
    assert_eq!(appearance.theme.colors.text.primary, minimal.theme.colors.text.primary);
    assert_eq!(appearance.navigation.style, NavigationStyle::ProgressBar);
    assert_eq!(appearance.navigation.next_label, "Continue");
    assert_eq!(appearance.navigation.skip_label, minimal.navigation.skip_label);
    assert_eq!(appearance.animation, minimal.animation);
}

#[test]
fn test_quick_start_storage_keys() {
    let keys: Vec<(PresetName, String, bool)> = PresetName::all()
        .into_iter()
        .map(|name| {
            let config = QuickStart::for_preset(name).config;
            (name, config.storage.key, config.storage.enabled)
        })
        .collect();

    assert!(keys.contains(&(
        PresetName::Onepage,
        "@1page:onboarding_complete".to_string(),
        true
    )));
    assert!(keys.contains(&(
        PresetName::Pomodo,
        "@pomodo:onboarding_complete".to_string(),
        true
    )));
    assert!(keys.contains(&(
        PresetName::Modern,
        "@onboarding_complete".to_string(),
        false
    )));
}
