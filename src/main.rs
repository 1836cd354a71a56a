use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tokio::io::{AsyncBufReadExt, BufReader};

use onboarding_flow::flow::{CompletionStatus, CompletionTracker, FlowBuilder, NavigationResult};
use onboarding_flow::slides::{FieldErrors, FieldType, FormValue, Slide};
use onboarding_flow::{
    AppResult, FileStorage, FlowCommand, FlowController,
    PresetName, Presentation, QuickStart, Storage,
};

const LOG_TARGET_STARTUP: &str = "onboarding_flow::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/onboarding-flow/logs/
/// - Windows: %APPDATA%/onboarding-flow/logs/
/// - Linux: ~/.config/onboarding-flow/logs/
///
/// Log rotation:
/// - Daily rotation (new file each day)
/// - Files named: onboarding-demo.YYYY-MM-DD.log
///
/// Debug builds also log to stderr, keeping stdout for the walkthrough.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("onboarding-flow").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "onboarding-demo.log");

    // Configure filter (info level by default)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

/// Walk an onboarding preset in the terminal
#[derive(Parser, Debug)]
#[command(name = "onboarding-demo")]
#[command(about = "Walk an onboarding preset in the terminal", long_about = None)]
struct Options {
    /// Preset deck to show (modern, minimal, gradient, onepage, zaprecipe, pomodo)
    #[arg(value_name = "PRESET")]
    preset: Option<String>,

    /// JSON config layered over the preset's quick-start config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Forget that onboarding was completed
    #[arg(long)]
    reset: bool,
}

/// Prints what a real carousel would animate
struct TerminalPresentation;

impl Presentation for TerminalPresentation {
    fn transition_to(&self, index: usize) {
        println!("  ~> sliding to page {}", index + 1);
    }

    fn show_errors(&self, errors: &FieldErrors) {
        for (key, message) in errors {
            println!("  ! {}: {}", key, message);
        }
    }

    fn submitting_changed(&self, submitting: bool) {
        if submitting {
            println!("  ... submitting");
        }
    }
}

fn print_slide(flow: &FlowController) {
    let slide = flow.current_slide();
    let chrome = flow.chrome();

    println!();
    if let Some(pagination) = &chrome.pagination {
        println!("[{}]", pagination.label);
    }
    println!(
        "{} ({})",
        slide.title.as_deref().unwrap_or(&slide.id),
        slide.kind.name()
    );
    if let Some(description) = &slide.description {
        println!("  {}", description);
    }

    let state = flow.snapshot();
    for field in slide.fields() {
        let value = state
            .form_data()
            .get(&field.key)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let marker = if field.required { "*" } else { " " };
        println!("  {}{} = {}", marker, field.key, value);
        if !field.options.is_empty() {
            let choices: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
            println!("      options: {}", choices.join(", "));
        }
    }

    if let Some(rendered) = flow.render_current() {
        println!("  {}", rendered);
    }

    let mut actions = vec![format!("[n]ext ({})", chrome.next.label)];
    if let Some(back) = &chrome.back {
        actions.push(format!("[b]ack ({})", back.label));
    }
    if let Some(skip) = &chrome.skip {
        actions.push(format!("[s]kip ({})", skip.label));
    }
    if !slide.fields().is_empty() {
        actions.push("set <key>=<value>".to_string());
    }
    actions.push("go <page>".to_string());
    println!("  {}", actions.join("  "));
}

/// Turn one input line into a command
fn parse_command(line: &str, slide: &Slide) -> Option<FlowCommand> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb {
        "n" | "next" | "" => Some(FlowCommand::Advance),
        "b" | "back" => Some(FlowCommand::Retreat),
        "s" | "skip" => Some(FlowCommand::Skip),
        "go" => {
            let page: usize = rest.trim().parse().ok()?;
            Some(FlowCommand::GoTo {
                index: page.checked_sub(1)?,
            })
        }
        "set" => {
            let (key, raw) = rest.split_once('=')?;
            let key = key.trim();
            let raw = raw.trim();

            let field_type = slide
                .fields()
                .iter()
                .find(|f| f.key == key)
                .map(|f| f.field_type)
                .unwrap_or_default();
            let value = match field_type {
                FieldType::MultiSelect => FormValue::List(
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                ),
                FieldType::Number => raw
                    .parse::<f64>()
                    .map(FormValue::Number)
                    .unwrap_or_else(|_| FormValue::from(raw)),
                _ => FormValue::from(raw),
            };

            Some(FlowCommand::UpdateField {
                key: key.to_string(),
                value,
            })
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    initialize_tracing();
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting onboarding demo v{} on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    let options = Options::parse();
    let preset = options
        .preset
        .as_deref()
        .map(PresetName::resolve)
        .unwrap_or_default();

    let mut quick_start = QuickStart::for_preset(preset);
    if let Some(path) = &options.config {
        quick_start.config = quick_start
            .config
            .load_over(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }
    // The demo always remembers completion
    quick_start.config.storage.enabled = true;

    let storage: Arc<dyn Storage> =
        Arc::new(FileStorage::in_config_dir().context("No config directory for demo storage")?);

    let tracker = CompletionTracker::new(Arc::clone(&storage), quick_start.config.storage.key.clone());
    if options.reset {
        tracker.reset().await;
        println!("Onboarding reset for {}", tracker.key());
    }
    if tracker.check_completion_status().await == CompletionStatus::Completed {
        println!(
            "Onboarding for {} already completed. Run with --reset to see it again.",
            preset
        );
        return Ok(());
    }

    let flow = FlowBuilder::from_quick_start(quick_start)
        .storage(storage)
        .presentation(Arc::new(TerminalPresentation))
        .on_slide_change(|index| tracing::debug!("Slide change callback: {}", index))
        .on_completion(|data| match data {
            Some(data) => println!("\nAll done! Collected {} answers.", data.len()),
            None => println!("\nSkipped. See you around."),
        })
        .on_persisted(|| tracing::info!("Completion flag saved"))
        .build()
        .context("Failed to build onboarding flow")?;

    // Log events from a background thread
    let (events, _subscription) = flow.events().subscribe();
    let event_logger = thread::spawn(move || {
        while let Ok(event) = events.recv() {
            tracing::info!("Event: {}", event.description());
            if event.is_terminal() {
                break;
            }
        }
    });

    println!("Onboarding preset: {}", flow.appearance().preset);
    print_slide(&flow);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !flow.is_finished() {
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            tracing::info!("Input closed before onboarding finished");
            break;
        };
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        let Some(command) = parse_command(&line, flow.current_slide()) else {
            println!("  ? unknown command: {}", line.trim());
            continue;
        };

        match flow.execute(command).await {
            Ok(NavigationResult::Blocked { reason }) => println!("  - {}", reason),
            Ok(result) if result.is_terminal() => {}
            Ok(_) => print_slide(&flow),
            Err(e) => println!("  ! {}", e),
        }
    }

    let state = flow.snapshot();
    if state.is_finished() {
        for (key, value) in state.form_data() {
            println!("  {} = {}", key, value);
        }
    }

    drop(flow);
    if event_logger.join().is_err() {
        tracing::warn!("Event logger thread panicked");
    }

    Ok(())
}
