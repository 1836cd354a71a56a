/// Messaging module for flow commands and events
///
/// - **Commands**: requests from the host UI (imperative, targeted at one flow)
/// - **Events**: notifications of what the flow did (past tense, broadcast)
///
/// ## Architecture
///
/// ```text
/// ┌─────────┐   FlowCommand   ┌────────────────┐   FlowEvent   ┌─────────────┐
/// │ Host UI │ ──────────────> │ FlowController │ ────────────> │  Event Bus  │
/// └─────────┘                 └────────────────┘               └─────────────┘
///                                                                     │
///                                                                     ▼
///                                                               Subscribers
///                                                            (analytics, logs)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let (rx, _id) = controller.events().subscribe();
///
/// controller.execute(FlowCommand::Advance).await?;
///
/// while let Ok(event) = rx.try_recv() {
///     match event {
///         FlowEvent::Completed { form_data } => { /* store answers */ }
///         _ => {}
///     }
/// }
/// ```

pub mod bus;
pub mod commands;
pub mod events;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use commands::FlowCommand;
pub use events::FlowEvent;
