use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use focus_core::model::ReactionSettings;
use services::{
    AssessmentService, TextGenerationConfig, TextGenerationError, TextGenerationService,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "FocusForward: Attention Span Assessment";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPollMs { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPollMs { raw } => write!(f, "invalid --poll-ms value: {raw}"),
            ArgsError::EmptyTitle => write!(f, "--title must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    assessment: Arc<AssessmentService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    poll_ms: u64,
    log_filter: String,
    title: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--poll-ms <ms>] [--log <filter>] [--title <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --poll-ms 50");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FOCUS_POLL_MS, FOCUS_LOG, FOCUS_TITLE");
    eprintln!("  FOCUS_AI_API_KEY (or OPENAI_API_KEY), FOCUS_AI_BASE_URL, FOCUS_AI_MODEL");
}

impl Args {
    /// Environment values seed the defaults; flags override them. Unparseable
    /// environment values are ignored, unparseable flags are errors.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let mut poll_ms = non_empty("FOCUS_POLL_MS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or_else(|| ReactionSettings::default().poll_interval_ms());
        let mut log_filter =
            non_empty("FOCUS_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let mut title = non_empty("FOCUS_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--poll-ms" => {
                    let value = require_value(args, "--poll-ms")?;
                    poll_ms = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidPollMs { raw: value.clone() })?;
                }
                "--log" => {
                    log_filter = require_value(args, "--log")?;
                }
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value.trim().to_string();
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            poll_ms,
            log_filter,
            title,
        })
    }
}

fn init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

/// Text generation is optional; a rejected config only disables it.
fn text_generation_service(
    config: Result<Option<TextGenerationConfig>, TextGenerationError>,
) -> TextGenerationService {
    match config {
        Ok(config) => TextGenerationService::new(config),
        Err(err) => {
            warn!(error = %err, "text generation config rejected");
            TextGenerationService::new(None)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(&parsed.log_filter)?;

    let settings = ReactionSettings::default().with_poll_interval_ms(parsed.poll_ms)?;

    let text_generation = text_generation_service(TextGenerationConfig::from_env());
    info!(
        poll_ms = settings.poll_interval_ms(),
        text_generation = text_generation.enabled(),
        "starting"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title.clone(),
        assessment: Arc::new(AssessmentService::new(settings)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
