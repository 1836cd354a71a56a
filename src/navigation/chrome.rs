/// Navigation chrome
///
/// Works out which buttons and which pagination indicator the host should
/// draw for the current slide. Pure data; drawing stays with the host.

use super::{NavigationConfig, NavigationPosition, NavigationStyle};
use crate::slides::{Slide, SlideKind};

/// A navigation button the host should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    pub label: String,
    pub enabled: bool,
    pub loading: bool,
}

impl ButtonModel {
    fn idle(label: &str) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
            loading: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Current,
    Upcoming,
}

/// Pagination indicator for the current position
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationModel {
    pub style: NavigationStyle,
    pub position: NavigationPosition,
    pub markers: Vec<MarkerState>,
    /// Fraction of the flow reached, `(index + 1) / total`
    pub progress: f32,
    /// `"2 / 5"` style counter
    pub label: String,
}

/// Everything the host needs to draw navigation around the active slide
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationChrome {
    /// False on form slides, which draw their own submit control
    pub visible: bool,
    pub back: Option<ButtonModel>,
    pub skip: Option<ButtonModel>,
    pub next: ButtonModel,
    pub pagination: Option<PaginationModel>,
    pub is_last: bool,
}

impl NavigationChrome {
    pub fn derive(
        slides: &[Slide],
        index: usize,
        is_submitting: bool,
        config: &NavigationConfig,
    ) -> Self {
        let total = slides.len();
        let is_last = index + 1 >= total;
        let slide = slides.get(index);

        let back = (config.show_back && index > 0).then(|| ButtonModel::idle(&config.back_label));
        let skip = (config.show_skip && !is_last && !is_submitting)
            .then(|| ButtonModel::idle(&config.skip_label));

        let form_label = slide.and_then(|s| match &s.kind {
            SlideKind::Form { submit_label, .. } => submit_label.as_deref(),
            _ => None,
        });
        let label = match (is_last, form_label) {
            (_, Some(label)) => label,
            (true, None) => config.done_label.as_str(),
            (false, None) => config.next_label.as_str(),
        };
        let next = ButtonModel {
            label: label.to_string(),
            enabled: !is_submitting,
            loading: is_submitting,
        };

        let pagination = match config.style {
            NavigationStyle::None => None,
            style if total > 0 => Some(PaginationModel {
                style,
                position: config.position,
                markers: (0..total)
                    .map(|i| match i.cmp(&index) {
                        std::cmp::Ordering::Less => MarkerState::Completed,
                        std::cmp::Ordering::Equal => MarkerState::Current,
                        std::cmp::Ordering::Greater => MarkerState::Upcoming,
                    })
                    .collect(),
                progress: (index + 1) as f32 / total as f32,
                label: format!("{} / {}", index + 1, total),
            }),
            _ => None,
        };

        Self {
            visible: !slide.map(Slide::is_form).unwrap_or(false),
            back,
            skip,
            next,
            pagination,
            is_last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slides::{FormFieldConfig, IconSpec};

    fn deck() -> Vec<Slide> {
        vec![
            Slide::icon("one", IconSpec::new("remove")),
            Slide::icon("two", IconSpec::new("flash")),
            Slide::form("three", vec![FormFieldConfig::text("name", "Name").required()])
                .submit_label("Start Reading"),
        ]
    }

    #[test]
    fn test_first_slide_has_no_back() {
        let chrome = NavigationChrome::derive(&deck(), 0, false, &NavigationConfig::default());
        assert!(chrome.visible);
        assert!(chrome.back.is_none());
        assert_eq!(chrome.skip.as_ref().map(|b| b.label.as_str()), Some("Skip"));
        assert_eq!(chrome.next.label, "Next");
        assert!(!chrome.is_last);
    }

    #[test]
    fn test_last_form_slide() {
        let chrome = NavigationChrome::derive(&deck(), 2, false, &NavigationConfig::default());
        assert!(!chrome.visible);
        assert!(chrome.skip.is_none());
        assert!(chrome.back.is_some());
        assert_eq!(chrome.next.label, "Start Reading");
        assert!(chrome.is_last);
    }

    #[test]
    fn test_done_label_on_last_plain_slide() {
        let slides = vec![Slide::icon("a", IconSpec::new("a")), Slide::icon("b", IconSpec::new("b"))];
        let chrome = NavigationChrome::derive(&slides, 1, false, &NavigationConfig::default());
        assert_eq!(chrome.next.label, "Get Started");
    }

    #[test]
    fn test_submitting_disables_next_and_hides_skip() {
        let chrome = NavigationChrome::derive(&deck(), 1, true, &NavigationConfig::default());
        assert!(chrome.skip.is_none());
        assert!(!chrome.next.enabled);
        assert!(chrome.next.loading);
    }

    #[test]
    fn test_hidden_buttons_from_config() {
        let config = NavigationConfig {
            show_skip: false,
            show_back: false,
            ..Default::default()
        };
        let chrome = NavigationChrome::derive(&deck(), 1, false, &config);
        assert!(chrome.back.is_none());
        assert!(chrome.skip.is_none());
    }

    #[test]
    fn test_pagination_markers() {
        let chrome = NavigationChrome::derive(&deck(), 1, false, &NavigationConfig::default());
        let pagination = chrome.pagination.unwrap();
        assert_eq!(
            pagination.markers,
            vec![MarkerState::Completed, MarkerState::Current, MarkerState::Upcoming]
        );
        assert_eq!(pagination.label, "2 / 3");
        assert!((pagination.progress - 2.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_pagination_for_none_style() {
        let config = NavigationConfig {
            style: NavigationStyle::None,
            ..Default::default()
        };
        let chrome = NavigationChrome::derive(&deck(), 0, false, &config);
        assert!(chrome.pagination.is_none());
    }
}
