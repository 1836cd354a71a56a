/// Navigation and animation configuration
///
/// Presets supply complete configs; callers override individual fields.

pub mod chrome;

pub use chrome::{ButtonModel, MarkerState, NavigationChrome, PaginationModel};

use serde::{Deserialize, Serialize};

/// Pagination indicator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationStyle {
    #[default]
    Dots,
    ProgressBar,
    Steps,
    Numbers,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPosition {
    Top,
    #[default]
    Bottom,
    Floating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    pub style: NavigationStyle,
    pub position: NavigationPosition,
    pub show_skip: bool,
    pub show_back: bool,
    pub skip_label: String,
    pub back_label: String,
    pub next_label: String,
    pub done_label: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            style: NavigationStyle::Dots,
            position: NavigationPosition::Bottom,
            show_skip: true,
            show_back: true,
            skip_label: "Skip".to_string(),
            back_label: "Back".to_string(),
            next_label: "Next".to_string(),
            done_label: "Get Started".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationOverrides {
    pub style: Option<NavigationStyle>,
    pub position: Option<NavigationPosition>,
    pub show_skip: Option<bool>,
    pub show_back: Option<bool>,
    pub skip_label: Option<String>,
    pub back_label: Option<String>,
    pub next_label: Option<String>,
    pub done_label: Option<String>,
}

impl NavigationConfig {
    /// Apply field-level overrides
    pub fn merged(&self, overrides: Option<&NavigationOverrides>) -> Self {
        let Some(o) = overrides else {
            return self.clone();
        };

        Self {
            style: o.style.unwrap_or(self.style),
            position: o.position.unwrap_or(self.position),
            show_skip: o.show_skip.unwrap_or(self.show_skip),
            show_back: o.show_back.unwrap_or(self.show_back),
            skip_label: o.skip_label.clone().unwrap_or_else(|| self.skip_label.clone()),
            back_label: o.back_label.clone().unwrap_or_else(|| self.back_label.clone()),
            next_label: o.next_label.clone().unwrap_or_else(|| self.next_label.clone()),
            done_label: o.done_label.clone().unwrap_or_else(|| self.done_label.clone()),
        }
    }
}

/// Slide transition style, interpreted by the host's animation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    #[default]
    Slide,
    Fade,
    Scale,
    Parallax,
    Cube,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(rename = "type")]
    pub kind: AnimationType,
    pub duration_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_factor: Option<f32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            kind: AnimationType::Slide,
            duration_ms: 300,
            parallax_factor: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationOverrides {
    #[serde(rename = "type")]
    pub kind: Option<AnimationType>,
    pub duration_ms: Option<u32>,
    pub parallax_factor: Option<f32>,
}

impl AnimationConfig {
    pub fn merged(&self, overrides: Option<&AnimationOverrides>) -> Self {
        let Some(o) = overrides else {
            return *self;
        };

        Self {
            kind: o.kind.unwrap_or(self.kind),
            duration_ms: o.duration_ms.unwrap_or(self.duration_ms),
            parallax_factor: o.parallax_factor.or(self.parallax_factor),
        }
    }
}
