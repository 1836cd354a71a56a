/// Flow commands
///
/// Commands represent requests to perform actions (imperative). Hosts that
/// forward user input through a queue send these to
/// [`FlowController::execute`](crate::flow::FlowController::execute).

use std::fmt;

use crate::slides::FormValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowCommand {
    /// Next button pressed
    Advance,

    /// Back button pressed
    Retreat,

    /// Skip button pressed
    Skip,

    /// A swipe landed on a slide
    GoTo { index: usize },

    /// A swipe came to rest at a scroll offset
    SettleSwipe { offset: f64, page_width: f64 },

    /// A form field was edited
    UpdateField { key: String, value: FormValue },
}

impl FlowCommand {
    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            FlowCommand::Advance => "Advance".to_string(),
            FlowCommand::Retreat => "Retreat".to_string(),
            FlowCommand::Skip => "Skip".to_string(),
            FlowCommand::GoTo { index } => format!("Go to slide {}", index),
            FlowCommand::SettleSwipe { offset, page_width } => {
                format!("Swipe settled at {:.1} (page {:.1})", offset, page_width)
            }
            FlowCommand::UpdateField { key, .. } => format!("Update field {}", key),
        }
    }

    /// Whether the command needs to await a collaborator
    pub fn is_async(&self) -> bool {
        matches!(self, FlowCommand::Advance | FlowCommand::Skip)
    }
}

impl fmt::Display for FlowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_description() {
        assert_eq!(FlowCommand::GoTo { index: 2 }.description(), "Go to slide 2");

        let update = FlowCommand::UpdateField {
            key: "name".to_string(),
            value: FormValue::from("Ann"),
        };
        assert_eq!(update.to_string(), "Update field name");
    }

    #[test]
    fn test_async_commands() {
        assert!(FlowCommand::Advance.is_async());
        assert!(FlowCommand::Skip.is_async());
        assert!(!FlowCommand::Retreat.is_async());
        assert!(!FlowCommand::GoTo { index: 0 }.is_async());
    }
}
