use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CardService, CommunityService, DeckService, SessionContext};
use storage::{DEFAULT_API_URL, StorageConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_GROUP_LABEL: &str = "Federal University of São Paulo";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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
    group_label: String,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn default_group_label(&self) -> String {
        self.group_label.clone()
    }

    fn community_service(&self) -> Arc<CommunityService> {
        self.services.community_service()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        self.services.deck_service()
    }

    fn card_service(&self) -> Arc<CardService> {
        self.services.card_service()
    }

    fn session(&self) -> Arc<dyn SessionContext> {
        self.services.session()
    }
}

#[derive(Debug)]
struct Args {
    api: StorageConfig,
    group_label: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--group-label <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_API_URL}");
    eprintln!("  --group-label \"{DEFAULT_GROUP_LABEL}\"");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_API_URL, STUDY_GROUP_LABEL, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = StorageConfig::from_env().map_err(|_| ArgsError::InvalidApiUrl {
            raw: std::env::var("STUDY_API_URL").unwrap_or_default(),
        })?;
        let mut group_label = std::env::var("STUDY_GROUP_LABEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GROUP_LABEL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    api = StorageConfig::new(&value)
                        .map_err(|_| ArgsError::InvalidApiUrl { raw: value.clone() })?;
                }
                "--group-label" => {
                    group_label = require_value(args, "--group-label")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api, group_label })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // HTTP futures are polled from the desktop event loop and need a reactor.
    let runtime = tokio::runtime::Runtime::new()?;
    let _runtime_guard = runtime.enter();

    tracing::info!(api = %parsed.api.base_url, "starting study client");
    let services = AppServices::new_http(parsed.api)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        group_label: parsed.group_label,
        services,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Groups")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
