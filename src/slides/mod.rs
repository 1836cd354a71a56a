/// Slide definitions
///
/// Slides are immutable data handed to the flow once at start. The host UI
/// renders whichever variant is active using only the data in its record.
///
/// ## Variants
///
/// 1. **Image** - full-bleed or framed picture, optional overlay icon
/// 2. **Icon** - large glyph on a coloured disc with optional subtitle
/// 3. **Form** - fields collected into the flow's form data
/// 4. **Video** - clip with playback flags
/// 5. **Custom** - host-provided renderer behind [`SlideRenderer`]

pub mod form;

pub use form::{
    FieldErrors, FieldOption, FieldType, FieldValidator, FormData, FormFieldConfig, FormValue,
    SubmitHandler, ValidationOutcome,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::theme::Theme;

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Bundled asset path, resolved by the host
    Asset(String),
    /// Remote image
    Uri(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    #[default]
    Cover,
    Contain,
    Stretch,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFamily {
    #[default]
    Ionicons,
    Material,
    MaterialCommunity,
    FontAwesome,
    Octicons,
    Feather,
}

/// Icon glyph and its disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    pub name: String,
    #[serde(default)]
    pub family: IconFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_size: Option<f32>,
}

impl IconSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            family: IconFamily::default(),
            size: None,
            color: None,
            background_color: None,
            background_size: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn disc(mut self, background_color: impl Into<String>, background_size: f32) -> Self {
        self.background_color = Some(background_color.into());
        self.background_size = Some(background_size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Asset(String),
    Uri(String),
}

/// Everything a custom renderer gets to see
pub struct CustomSlideProps<'a> {
    pub slide: &'a Slide,
    pub props: &'a serde_json::Value,
    pub theme: &'a Theme,
    pub dark_mode: bool,
}

/// Host-provided renderer for [`SlideKind::Custom`].
///
/// Returns a host-defined view description; the flow never inspects it.
pub trait SlideRenderer: Send + Sync {
    fn render(&self, props: &CustomSlideProps<'_>) -> serde_json::Value;
}

/// Type-specific payload of a slide
#[derive(Clone)]
pub enum SlideKind {
    Image {
        image: ImageSource,
        resize_mode: ResizeMode,
        overlay_icon: Option<IconSpec>,
    },
    Icon {
        icon: IconSpec,
        subtitle: Option<String>,
    },
    Form {
        fields: Vec<FormFieldConfig>,
        submit_label: Option<String>,
        on_submit: Option<Arc<dyn SubmitHandler>>,
    },
    Video {
        source: VideoSource,
        auto_play: bool,
        looping: bool,
        muted: bool,
        poster: Option<ImageSource>,
    },
    Custom {
        renderer: Arc<dyn SlideRenderer>,
        props: serde_json::Value,
    },
}

impl SlideKind {
    pub fn name(&self) -> &'static str {
        match self {
            SlideKind::Image { .. } => "image",
            SlideKind::Icon { .. } => "icon",
            SlideKind::Form { .. } => "form",
            SlideKind::Video { .. } => "video",
            SlideKind::Custom { .. } => "custom",
        }
    }
}

impl fmt::Debug for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideKind::Image {
                image,
                resize_mode,
                overlay_icon,
            } => f
                .debug_struct("Image")
                .field("image", image)
                .field("resize_mode", resize_mode)
                .field("overlay_icon", overlay_icon)
                .finish(),
            SlideKind::Icon { icon, subtitle } => f
                .debug_struct("Icon")
                .field("icon", icon)
                .field("subtitle", subtitle)
                .finish(),
            SlideKind::Form {
                fields,
                submit_label,
                on_submit,
            } => f
                .debug_struct("Form")
                .field("fields", fields)
                .field("submit_label", submit_label)
                .field("on_submit", &on_submit.is_some())
                .finish(),
            SlideKind::Video {
                source,
                auto_play,
                looping,
                muted,
                poster,
            } => f
                .debug_struct("Video")
                .field("source", source)
                .field("auto_play", auto_play)
                .field("looping", looping)
                .field("muted", muted)
                .field("poster", poster)
                .finish(),
            SlideKind::Custom { props, .. } => {
                f.debug_struct("Custom").field("props", props).finish()
            }
        }
    }
}

/// One page of the onboarding carousel
#[derive(Debug, Clone)]
pub struct Slide {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
    pub gradient_colors: Vec<String>,
    pub kind: SlideKind,
}

impl Slide {
    fn with_kind(id: impl Into<String>, kind: SlideKind) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            background_color: None,
            gradient_colors: Vec::new(),
            kind,
        }
    }

    pub fn image(id: impl Into<String>, image: ImageSource) -> Self {
        Self::with_kind(
            id,
            SlideKind::Image {
                image,
                resize_mode: ResizeMode::default(),
                overlay_icon: None,
            },
        )
    }

    pub fn icon(id: impl Into<String>, icon: IconSpec) -> Self {
        Self::with_kind(
            id,
            SlideKind::Icon {
                icon,
                subtitle: None,
            },
        )
    }

    pub fn form(id: impl Into<String>, fields: Vec<FormFieldConfig>) -> Self {
        Self::with_kind(
            id,
            SlideKind::Form {
                fields,
                submit_label: None,
                on_submit: None,
            },
        )
    }

    pub fn video(id: impl Into<String>, source: VideoSource) -> Self {
        Self::with_kind(
            id,
            SlideKind::Video {
                source,
                auto_play: true,
                looping: false,
                muted: false,
                poster: None,
            },
        )
    }

    pub fn custom(
        id: impl Into<String>,
        renderer: Arc<dyn SlideRenderer>,
        props: serde_json::Value,
    ) -> Self {
        Self::with_kind(id, SlideKind::Custom { renderer, props })
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn gradient<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gradient_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the subtitle of an icon slide; ignored for other kinds
    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        if let SlideKind::Icon { subtitle, .. } = &mut self.kind {
            *subtitle = Some(text.into());
        }
        self
    }

    /// Set the overlay icon of an image slide; ignored for other kinds
    pub fn overlay_icon(mut self, icon: IconSpec) -> Self {
        if let SlideKind::Image { overlay_icon, .. } = &mut self.kind {
            *overlay_icon = Some(icon);
        }
        self
    }

    /// Set the submit label of a form slide; ignored for other kinds
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        if let SlideKind::Form { submit_label, .. } = &mut self.kind {
            *submit_label = Some(label.into());
        }
        self
    }

    /// Attach a submit hook to a form slide; ignored for other kinds
    pub fn on_submit(mut self, handler: Arc<dyn SubmitHandler>) -> Self {
        if let SlideKind::Form { on_submit, .. } = &mut self.kind {
            *on_submit = Some(handler);
        }
        self
    }

    pub fn is_form(&self) -> bool {
        matches!(self.kind, SlideKind::Form { .. })
    }

    /// Fields of a form slide, empty for every other kind
    pub fn fields(&self) -> &[FormFieldConfig] {
        match &self.kind {
            SlideKind::Form { fields, .. } => fields,
            _ => &[],
        }
    }

    /// Render a custom slide through its renderer
    pub fn render_custom(&self, theme: &Theme, dark_mode: bool) -> Option<serde_json::Value> {
        match &self.kind {
            SlideKind::Custom { renderer, props } => Some(renderer.render(&CustomSlideProps {
                slide: self,
                props,
                theme,
                dark_mode,
            })),
            _ => None,
        }
    }
}
