/// Built-in presets
///
/// Each preset bundles a theme, navigation and animation defaults, per-slide
/// style hints and a sample slide deck. Lookup never fails: unknown names fall
/// back to [`PresetName::Modern`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{
    BorderRadius, Colors, Shadows, Spacing, TextAlign, TextColors, TextStyle, Theme, Typography,
};
use crate::config::{OnboardingConfig, StorageConfig};
use crate::navigation::{
    AnimationConfig, AnimationType, NavigationConfig, NavigationOverrides, NavigationPosition,
    NavigationStyle,
};
use crate::slides::{FieldOption, FormFieldConfig, IconSpec, ImageSource, Slide};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown preset: {0}")]
pub struct UnknownPreset(pub String);

/// Named preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    Onepage,
    Zaprecipe,
    Pomodo,
    #[default]
    Modern,
    Minimal,
    Gradient,
}

impl PresetName {
    pub fn all() -> [PresetName; 6] {
        [
            PresetName::Onepage,
            PresetName::Zaprecipe,
            PresetName::Pomodo,
            PresetName::Modern,
            PresetName::Minimal,
            PresetName::Gradient,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Onepage => "onepage",
            PresetName::Zaprecipe => "zaprecipe",
            PresetName::Pomodo => "pomodo",
            PresetName::Modern => "modern",
            PresetName::Minimal => "minimal",
            PresetName::Gradient => "gradient",
        }
    }

    /// Exact-match lookup with the `modern` fallback
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn config(&self) -> PresetConfig {
        match self {
            PresetName::Onepage => onepage(),
            PresetName::Zaprecipe => zaprecipe(),
            PresetName::Pomodo => pomodo(),
            PresetName::Modern => modern(),
            PresetName::Minimal => minimal(),
            PresetName::Gradient => gradient(),
        }
    }
}

impl FromStr for PresetName {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::all()
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Points(f32),
    Percent(f32),
}

/// Layout hints for the image or icon block of a slide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxStyle {
    pub width: Option<Length>,
    pub height: Option<f32>,
    pub border_radius: Option<f32>,
    pub margin_bottom: Option<f32>,
}

/// Default per-slide-type style hints of a preset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyles {
    pub image: Option<BoxStyle>,
    pub icon: Option<BoxStyle>,
    pub title: Option<TextStyle>,
    pub description: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetConfig {
    pub name: PresetName,
    pub theme: Theme,
    pub navigation: NavigationConfig,
    pub animation: AnimationConfig,
    pub slide_styles: SlideStyles,
}

/// Look up a preset by exact name, falling back to `modern`
pub fn resolve_preset(name: &str) -> PresetConfig {
    PresetName::resolve(name).config()
}

fn base_typography(title: (f32, &str), description: (f32, &str), button: (f32, &str)) -> Typography {
    Typography {
        title: TextStyle {
            font_weight: Some(700),
            letter_spacing: Some(-0.5),
            ..Default::default()
        }
        .sized(title.0)
        .colored(title.1),
        description: TextStyle {
            font_weight: Some(400),
            line_height: Some(24.0),
            ..Default::default()
        }
        .sized(description.0)
        .colored(description.1),
        button: TextStyle {
            font_weight: Some(600),
            letter_spacing: Some(0.5),
            ..Default::default()
        }
        .sized(button.0)
        .colored(button.1),
        label: None,
    }
}

fn label_style(size: f32, color: &str) -> TextStyle {
    TextStyle {
        font_weight: Some(500),
        ..Default::default()
    }
    .sized(size)
    .colored(color)
}

fn text_colors(primary: &str, secondary: &str) -> TextColors {
    TextColors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        inverse: "#FFFFFF".to_string(),
    }
}

fn theme(colors: Colors, typography: Typography) -> Theme {
    Theme {
        colors,
        typography,
        spacing: Spacing::default(),
        border_radius: BorderRadius::default(),
        shadows: Some(Shadows::standard()),
    }
}

fn nav(
    style: NavigationStyle,
    position: NavigationPosition,
    show_skip: bool,
    show_back: bool,
    next_label: &str,
    done_label: &str,
) -> NavigationConfig {
    NavigationConfig {
        style,
        position,
        show_skip,
        show_back,
        next_label: next_label.to_string(),
        done_label: done_label.to_string(),
        ..Default::default()
    }
}

fn heading(size: f32, margin_bottom: f32, align: Option<TextAlign>, weight: Option<u16>) -> TextStyle {
    TextStyle {
        font_size: Some(size),
        margin_bottom: Some(margin_bottom),
        text_align: align,
        font_weight: weight,
        ..Default::default()
    }
}

fn body(size: f32, line_height: f32, align: Option<TextAlign>, padding: Option<f32>) -> TextStyle {
    TextStyle {
        font_size: Some(size),
        line_height: Some(line_height),
        text_align: align,
        padding_horizontal: padding,
        ..Default::default()
    }
}

fn colors(
    primary: &str,
    secondary: &str,
    background: &str,
    surface: &str,
    text: TextColors,
    border: &str,
    overlay: Option<&str>,
) -> Colors {
    Colors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        background: background.to_string(),
        surface: surface.to_string(),
        text,
        border: border.to_string(),
        overlay: overlay.map(str::to_string),
    }
}

fn onepage() -> PresetConfig {
    let mut typography = base_typography((28.0, "#1E293B"), (15.0, "#64748B"), (16.0, "#FFFFFF"));
    typography.label = Some(label_style(14.0, "#475569"));

    PresetConfig {
        name: PresetName::Onepage,
        theme: theme(
            colors(
                "#667EEA",
                "#06D6A0",
                "#F8FAFC",
                "#FFFFFF",
                text_colors("#1E293B", "#64748B"),
                "#E2E8F0",
                Some("rgba(0, 0, 0, 0.1)"),
            ),
            typography,
        ),
        navigation: nav(
            NavigationStyle::Dots,
            NavigationPosition::Bottom,
            true,
            true,
            "Next",
            "Let's Get Started",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Slide,
            duration_ms: 300,
            parallax_factor: None,
        },
        slide_styles: SlideStyles {
            image: Some(BoxStyle {
                width: Some(Length::Percent(100.0)),
                height: Some(280.0),
                border_radius: Some(16.0),
                margin_bottom: Some(24.0),
            }),
            icon: None,
            title: Some(heading(24.0, 12.0, Some(TextAlign::Center), None)),
            description: Some(body(15.0, 22.0, Some(TextAlign::Center), Some(32.0))),
        },
    }
}

fn zaprecipe() -> PresetConfig {
    let mut typography = base_typography(
        (32.0, "#FFFFFF"),
        (16.0, "rgba(255, 255, 255, 0.9)"),
        (16.0, "#FFFFFF"),
    );
    typography.label = Some(label_style(14.0, "#FFFFFF"));

    PresetConfig {
        name: PresetName::Zaprecipe,
        theme: theme(
            colors(
                "#6B4EFF",
                "#FF8C42",
                "#FFFFFF",
                "#FFFFFF",
                text_colors("#1E293B", "#64748B"),
                "#E2E8F0",
                Some("rgba(255, 255, 255, 0.2)"),
            ),
            typography,
        ),
        navigation: nav(
            NavigationStyle::Dots,
            NavigationPosition::Floating,
            true,
            true,
            "Continue",
            "Let's Start Cooking!",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Fade,
            duration_ms: 250,
            parallax_factor: None,
        },
        slide_styles: SlideStyles {
            image: Some(BoxStyle {
                width: Some(Length::Percent(100.0)),
                height: Some(300.0),
                border_radius: Some(0.0),
                margin_bottom: Some(0.0),
            }),
            icon: None,
            title: Some(heading(28.0, 16.0, Some(TextAlign::Center), None)),
            description: Some(body(15.0, 22.0, Some(TextAlign::Center), Some(24.0))),
        },
    }
}

fn pomodo() -> PresetConfig {
    PresetConfig {
        name: PresetName::Pomodo,
        theme: theme(
            colors(
                "#FF6B6B",
                "#667EEA",
                "#F6F6F6",
                "#FFFFFF",
                text_colors("#1E293B", "#64748B"),
                "#E2E8F0",
                Some("rgba(0, 0, 0, 0.05)"),
            ),
            base_typography((24.0, "#1E293B"), (14.0, "#64748B"), (16.0, "#FFFFFF")),
        ),
        navigation: nav(
            NavigationStyle::Dots,
            NavigationPosition::Bottom,
            false,
            false,
            "Next",
            "Get Started",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Fade,
            duration_ms: 500,
            parallax_factor: None,
        },
        slide_styles: SlideStyles {
            image: None,
            icon: Some(BoxStyle {
                width: Some(Length::Points(160.0)),
                height: Some(160.0),
                border_radius: Some(80.0),
                margin_bottom: Some(24.0),
            }),
            title: Some(heading(22.0, 12.0, Some(TextAlign::Center), Some(600))),
            description: Some(body(14.0, 20.0, Some(TextAlign::Center), Some(32.0))),
        },
    }
}

fn modern() -> PresetConfig {
    PresetConfig {
        name: PresetName::Modern,
        theme: theme(
            colors(
                "#8B5CF6",
                "#EC4899",
                "#FFFFFF",
                "#F9FAFB",
                text_colors("#111827", "#6B7280"),
                "#E5E7EB",
                Some("rgba(0, 0, 0, 0.05)"),
            ),
            base_typography((30.0, "#111827"), (16.0, "#6B7280"), (16.0, "#FFFFFF")),
        ),
        navigation: nav(
            NavigationStyle::ProgressBar,
            NavigationPosition::Top,
            true,
            true,
            "Next",
            "Get Started",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Slide,
            duration_ms: 350,
            parallax_factor: None,
        },
        slide_styles: SlideStyles {
            title: Some(heading(28.0, 16.0, None, Some(700))),
            description: Some(body(16.0, 24.0, None, None)),
            ..Default::default()
        },
    }
}

fn minimal() -> PresetConfig {
    PresetConfig {
        name: PresetName::Minimal,
        theme: theme(
            colors(
                "#111827",
                "#6B7280",
                "#FFFFFF",
                "#FFFFFF",
                text_colors("#111827", "#6B7280"),
                "#E5E7EB",
                None,
            ),
            base_typography((24.0, "#111827"), (15.0, "#6B7280"), (15.0, "#FFFFFF")),
        ),
        navigation: nav(
            NavigationStyle::Steps,
            NavigationPosition::Bottom,
            true,
            false,
            "Next",
            "Start",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Fade,
            duration_ms: 200,
            parallax_factor: None,
        },
        slide_styles: SlideStyles {
            title: Some(heading(22.0, 8.0, None, Some(600))),
            description: Some(body(14.0, 20.0, None, None)),
            ..Default::default()
        },
    }
}

fn gradient() -> PresetConfig {
    PresetConfig {
        name: PresetName::Gradient,
        theme: theme(
            colors(
                "#667EEA",
                "#764BA2",
                "#667EEA",
                "rgba(255, 255, 255, 0.15)",
                TextColors {
                    primary: "#FFFFFF".to_string(),
                    secondary: "rgba(255, 255, 255, 0.8)".to_string(),
                    inverse: "#FFFFFF".to_string(),
                },
                "rgba(255, 255, 255, 0.2)",
                Some("rgba(255, 255, 255, 0.1)"),
            ),
            base_typography(
                (32.0, "#FFFFFF"),
                (16.0, "rgba(255, 255, 255, 0.9)"),
                (16.0, "#FFFFFF"),
            ),
        ),
        navigation: nav(
            NavigationStyle::Dots,
            NavigationPosition::Floating,
            true,
            true,
            "Next",
            "Get Started",
        ),
        animation: AnimationConfig {
            kind: AnimationType::Parallax,
            duration_ms: 400,
            parallax_factor: Some(0.3),
        },
        slide_styles: SlideStyles {
            title: Some(heading(28.0, 16.0, Some(TextAlign::Center), None)),
            description: Some(body(15.0, 22.0, Some(TextAlign::Center), Some(24.0))),
            ..Default::default()
        },
    }
}

fn asset(path: &str) -> ImageSource {
    ImageSource::Asset(format!("assets/images/onboarding/{}", path))
}

fn icon_disc(name: &str, size: f32, color: &str, disc: &str, disc_size: f32) -> IconSpec {
    IconSpec::new(name).size(size).color(color).disc(disc, disc_size)
}

/// Sample slide deck shipped with each preset
pub fn preset_slides(name: PresetName) -> Vec<Slide> {
    match name {
        PresetName::Onepage => vec![
            Slide::image("welcome", asset("welcome.png"))
                .title("Welcome to 1Page")
                .description("Your personal reading companion for tracking and discovering amazing books.")
                .gradient(["#667EEA", "#764BA2"]),
            Slide::image("library", asset("library.png"))
                .title("Smart Library")
                .description("Organize your books effortlessly and discover insights about your reading habits.")
                .gradient(["#667EEA", "#06D6A0"]),
            Slide::image("progress", asset("progress.png"))
                .title("Track Progress")
                .description("Monitor your reading journey with beautiful statistics and achievements.")
                .gradient(["#06D6A0", "#764BA2"]),
            Slide::form(
                "profile",
                vec![
                    FormFieldConfig::text("name", "What should we call you?")
                        .placeholder("Enter your name")
                        .required(),
                    FormFieldConfig::select(
                        "readerLevel",
                        "Reader Level",
                        vec![
                            FieldOption::new("novice", "Novice").with_icon("book-outline"),
                            FieldOption::new("reader", "Reader").with_icon("book"),
                            FieldOption::new("bookworm", "Bookworm").with_icon("library"),
                            FieldOption::new("scholar", "Scholar").with_icon("school"),
                            FieldOption::new("sage", "Sage").with_icon("sparkles"),
                            FieldOption::new("master", "Master").with_icon("trophy"),
                        ],
                    )
                    .placeholder("Select your level")
                    .required(),
                    FormFieldConfig::select(
                        "yearlyPages",
                        "Yearly Reading Goal",
                        vec![
                            FieldOption::new("0-500", "0-500 pages"),
                            FieldOption::new("500-1500", "500-1500 pages"),
                            FieldOption::new("1500-3000", "1500-3000 pages"),
                            FieldOption::new("3000-5000", "3000-5000 pages"),
                            FieldOption::new("5000+", "5000+ pages"),
                        ],
                    )
                    .placeholder("Select your goal")
                    .required(),
                ],
            )
            .title("Let's Get Started")
            .description("Tell us a bit about yourself to personalize your experience.")
            .submit_label("Start Reading")
            .gradient(["#667EEA", "#764BA2"]),
        ],
        PresetName::Zaprecipe => {
            let gradient = ["#667eea", "#764ba2", "#6B4EFF"];
            vec![
                Slide::image("discover", asset("recipes.jpg"))
                    .title("Find Perfect Recipes")
                    .description("Discover thousands of recipes tailored to your taste and dietary preferences.")
                    .overlay_icon(IconSpec::new("search").size(40.0))
                    .gradient(gradient),
                Slide::image("save", asset("favorites.jpg"))
                    .title("Save Your Favorites")
                    .description("Build your personal cookbook with recipes you love and want to try.")
                    .overlay_icon(IconSpec::new("heart").size(40.0))
                    .gradient(gradient),
                Slide::image("cook", asset("cooking.jpg"))
                    .title("Cook with Confidence")
                    .description("Step-by-step instructions make cooking easy and enjoyable for everyone.")
                    .overlay_icon(IconSpec::new("restaurant").size(40.0))
                    .gradient(gradient),
                Slide::form(
                    "profile",
                    vec![
                        FormFieldConfig::text("name", "Your Name")
                            .placeholder("Enter your name")
                            .required(),
                        FormFieldConfig::select(
                            "cookingLevel",
                            "Cooking Level",
                            vec![
                                FieldOption::new("beginner", "Beginner").with_icon("leaf"),
                                FieldOption::new("intermediate", "Intermediate").with_icon("flame"),
                                FieldOption::new("advanced", "Advanced").with_icon("star"),
                            ],
                        )
                        .placeholder("Select your level")
                        .required(),
                        FormFieldConfig::text(
                            "improveHabits",
                            "What cooking habits do you want to improve?",
                        )
                        .placeholder("e.g., Faster prep, Better seasoning"),
                        FormFieldConfig::text(
                            "masterSkill",
                            "What culinary skill do you want to master?",
                        )
                        .placeholder("e.g., Knife skills, Baking"),
                    ],
                )
                .title("Tell Us About Yourself")
                .description("Help us personalize your cooking experience.")
                .submit_label("Let's Start Cooking!")
                .gradient(gradient),
            ]
        }
        PresetName::Pomodo => vec![
            Slide::icon("focus", icon_disc("timer", 64.0, "#FFFFFF", "#FF6B6B", 160.0))
                .title("Stay Focused")
                .subtitle("Pomodoro Timer")
                .description("Boost your productivity with our customizable Pomodoro timer. Work in focused intervals and take meaningful breaks.")
                .background("#F6F6F6"),
            Slide::icon("tasks", icon_disc("checkmark-circle", 64.0, "#FFFFFF", "#667EEA", 160.0))
                .title("Organize Tasks")
                .subtitle("Task Management")
                .description("Keep track of all your tasks with priorities, tags, and subtasks. Never lose track of what needs to be done.")
                .background("#F6F6F6"),
            Slide::icon("stats", icon_disc("stats-chart", 64.0, "#FFFFFF", "#06D6A0", 160.0))
                .title("Track Progress")
                .subtitle("Insights & Analytics")
                .description("Monitor your productivity with detailed statistics. See your focus time, completed tasks, and patterns.")
                .background("#F6F6F6"),
        ],
        PresetName::Modern => vec![
            Slide::icon("welcome", icon_disc("rocket", 72.0, "#FFFFFF", "#8B5CF6", 180.0))
                .title("Welcome Aboard")
                .description("Get started with an amazing experience tailored just for you."),
            Slide::icon("features", icon_disc("apps", 72.0, "#FFFFFF", "#EC4899", 180.0))
                .title("Powerful Features")
                .description("Discover tools and features designed to help you achieve more."),
            Slide::icon("ready", icon_disc("checkmark-done", 72.0, "#FFFFFF", "#10B981", 180.0))
                .title("Ready to Go?")
                .description("Let's set up your account and get started on your journey."),
        ],
        PresetName::Minimal => vec![
            Slide::icon("one", icon_disc("remove", 48.0, "#111827", "#F3F4F6", 120.0))
                .title("Simple")
                .description("Clean and intuitive interface that's easy to use."),
            Slide::icon("two", icon_disc("flash", 48.0, "#111827", "#F3F4F6", 120.0))
                .title("Fast")
                .description("Lightning quick performance for a smooth experience."),
            Slide::icon("three", icon_disc("person", 48.0, "#111827", "#F3F4F6", 120.0))
                .title("Yours")
                .description("Personalized to fit your needs perfectly."),
        ],
        PresetName::Gradient => vec![
            Slide::image("discover", asset("gradient1.jpg"))
                .title("Discover")
                .description("Explore new possibilities and unlock your potential.")
                .gradient(["#667EEA", "#764BA2"]),
            Slide::image("create", asset("gradient2.jpg"))
                .title("Create")
                .description("Build something amazing with powerful tools at your fingertips.")
                .gradient(["#f093fb", "#f5576c"]),
            Slide::image("share", asset("gradient3.jpg"))
                .title("Share")
                .description("Connect with others and share your journey.")
                .gradient(["#4facfe", "#00f2fe"]),
        ],
    }
}

/// Ready-made deck plus config for a preset
#[derive(Debug, Clone)]
pub struct QuickStart {
    pub slides: Vec<Slide>,
    pub config: OnboardingConfig,
}

impl QuickStart {
    pub fn for_preset(name: PresetName) -> Self {
        let storage_key = match name {
            PresetName::Onepage => Some("@1page:onboarding_complete"),
            PresetName::Zaprecipe => Some("@zaprecipe:onboarding_complete"),
            PresetName::Pomodo => Some("@pomodo:onboarding_complete"),
            _ => None,
        };

        let mut config = OnboardingConfig {
            preset: name.as_str().to_string(),
            ..Default::default()
        };
        if let Some(key) = storage_key {
            config.storage = StorageConfig {
                enabled: true,
                key: key.to_string(),
            };
        }
        if name == PresetName::Pomodo {
            config.navigation = Some(NavigationOverrides {
                show_skip: Some(false),
                ..Default::default()
            });
        }

        Self {
            slides: preset_slides(name),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pomodo_hides_skip_and_back() {
        let preset = resolve_preset("pomodo");
        assert!(!preset.navigation.show_skip);
        assert!(!preset.navigation.show_back);
    }

    #[test]
    fn test_unknown_falls_back_to_modern() {
        assert_eq!(resolve_preset("unknown-xyz"), resolve_preset("modern"));
        assert_eq!(resolve_preset(""), resolve_preset("modern"));
        // Lookup is exact; no case folding
        assert_eq!(resolve_preset("Pomodo").name, PresetName::Modern);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("gradient".parse::<PresetName>(), Ok(PresetName::Gradient));
        assert_eq!(
            "neon".parse::<PresetName>(),
            Err(UnknownPreset("neon".to_string()))
        );
    }

    #[test]
    fn test_every_preset_resolves_to_itself() {
        for name in PresetName::all() {
            assert_eq!(resolve_preset(name.as_str()).name, name);
        }
    }

    #[test]
    fn test_preset_slide_ids_unique() {
        for name in PresetName::all() {
            let slides = preset_slides(name);
            assert!(!slides.is_empty());
            let ids: HashSet<&str> = slides.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), slides.len(), "duplicate ids in {}", name);
        }
    }

    #[test]
    fn test_quick_start_storage_keys() {
        let onepage = QuickStart::for_preset(PresetName::Onepage);
        assert!(onepage.config.storage.enabled);
        assert_eq!(onepage.config.storage.key, "@1page:onboarding_complete");

        let pomodo = QuickStart::for_preset(PresetName::Pomodo);
        assert_eq!(
            pomodo.config.navigation.as_ref().and_then(|n| n.show_skip),
            Some(false)
        );

        let minimal = QuickStart::for_preset(PresetName::Minimal);
        assert!(!minimal.config.storage.enabled);
        assert_eq!(minimal.slides.len(), 3);
    }

    #[test]
    fn test_gradient_parallax() {
        let preset = resolve_preset("gradient");
        assert_eq!(preset.animation.kind, AnimationType::Parallax);
        assert_eq!(preset.animation.parallax_factor, Some(0.3));
    }
}
