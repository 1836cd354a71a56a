/// Theme model and merging
///
/// A runtime [`Theme`] is a preset's theme with caller overrides laid on top
/// by [`merge_theme`].

pub mod presets;

pub use presets::{
    preset_slides, resolve_preset, BoxStyle, Length, PresetConfig, PresetName, QuickStart,
    SlideStyles,
};

use serde::{Deserialize, Serialize};

/// Text colour roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub inverse: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: TextColors,
    pub border: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font and layout hints for a block of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
}

impl TextStyle {
    pub fn sized(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub title: TextStyle,
    pub description: TextStyle,
    pub button: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<TextStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            xxl: 48.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderRadius {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub full: f32,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            sm: 4.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            full: 9999.0,
        }
    }
}

/// Drop shadow; hosts without shadow support use `elevation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

impl Shadow {
    fn black(offset_y: f32, opacity: f32, radius: f32, elevation: f32) -> Self {
        Self {
            color: "#000".to_string(),
            offset_x: 0.0,
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<Shadow>,
}

impl Shadows {
    pub fn standard() -> Self {
        Self {
            sm: Some(Shadow::black(1.0, 0.1, 2.0, 2.0)),
            md: Some(Shadow::black(2.0, 0.15, 4.0, 4.0)),
            lg: Some(Shadow::black(4.0, 0.2, 8.0, 8.0)),
        }
    }
}

/// Complete onboarding theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: Spacing,
    pub border_radius: BorderRadius,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<Shadows>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub inverse: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<TextColorOverrides>,
    pub border: Option<String>,
    pub overlay: Option<String>,
}

/// Caller overrides on top of a preset theme.
///
/// Every section except `colors` replaces the preset's section wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    pub colors: Option<ColorOverrides>,
    pub typography: Option<Typography>,
    pub spacing: Option<Spacing>,
    pub border_radius: Option<BorderRadius>,
    pub shadows: Option<Shadows>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn pick(base: &str, over: &Option<String>) -> String {
    over.clone().unwrap_or_else(|| base.to_string())
}

/// Lay `overrides` on top of `base`.
///
/// `colors.text` merges key by key, one level deeper than everything else.
/// Spacing, typography and border radius are replaced wholesale when present.
pub fn merge_theme(base: &Theme, overrides: Option<&ThemeOverrides>) -> Theme {
    let Some(overrides) = overrides else {
        return base.clone();
    };

    let colors = match &overrides.colors {
        None => base.colors.clone(),
        Some(c) => {
            let text = match &c.text {
                None => base.colors.text.clone(),
                Some(t) => TextColors {
                    primary: pick(&base.colors.text.primary, &t.primary),
                    secondary: pick(&base.colors.text.secondary, &t.secondary),
                    inverse: pick(&base.colors.text.inverse, &t.inverse),
                },
            };
            Colors {
                primary: pick(&base.colors.primary, &c.primary),
                secondary: pick(&base.colors.secondary, &c.secondary),
                background: pick(&base.colors.background, &c.background),
                surface: pick(&base.colors.surface, &c.surface),
                text,
                border: pick(&base.colors.border, &c.border),
                overlay: c.overlay.clone().or_else(|| base.colors.overlay.clone()),
            }
        }
    };

    Theme {
        colors,
        typography: overrides
            .typography
            .clone()
            .unwrap_or_else(|| base.typography.clone()),
        spacing: overrides.spacing.unwrap_or(base.spacing),
        border_radius: overrides.border_radius.unwrap_or(base.border_radius),
        shadows: overrides.shadows.clone().or_else(|| base.shadows.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Theme {
        resolve_preset("modern").theme
    }

    #[test]
    fn test_no_overrides_is_identity() {
        let base = base();
        assert_eq!(merge_theme(&base, None), base);
        assert_eq!(merge_theme(&base, Some(&ThemeOverrides::default())), base);
    }

    #[test]
    fn test_text_colors_merge_key_by_key() {
        let base = base();
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
    fn test_other_sections_replace_wholesale() {
        let base = base();
        let spacing = Spacing {
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 24.0,
        };
        let overrides = ThemeOverrides {
            spacing: Some(spacing),
            shadows: Some(Shadows::default()),
            ..Default::default()
        };

        let merged = merge_theme(&base, Some(&overrides));
        assert_eq!(merged.spacing, spacing);
        assert_eq!(merged.shadows, Some(Shadows::default()));
        assert_eq!(merged.colors, base.colors);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: ThemeOverrides = serde_json::from_str(
            r##"{ "colors": { "primary": "#FF0000", "text": { "inverse": "#111111" } },
                 "borderRadius": { "sm": 1, "md": 2, "lg": 3, "xl": 4, "full": 5 } }"##,
        )
        .unwrap();

        let merged = merge_theme(&base(), Some(&overrides));
        assert_eq!(merged.colors.primary, "#FF0000");
        assert_eq!(merged.colors.text.inverse, "#111111");
        assert_eq!(merged.colors.text.primary, "#111827");
        assert_eq!(merged.border_radius.full, 5.0);
        assert!(!overrides.is_empty());
    }
}
