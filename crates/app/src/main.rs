use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use pathway_core::model::Catalog;
use pathway_core::timer::TimerDurations;
use services::{AppServices, Clock, ExplanationService, GeminiConfig, ProgressService};
use tracing::{info, warn};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://ot_pathway.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidMinutes { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidMinutes { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected whole minutes > 0)")
            }
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
    services: AppServices,
    timer_durations: TimerDurations,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn explanations(&self) -> Arc<ExplanationService> {
        self.services.explanations()
    }

    fn timer_durations(&self) -> TimerDurations {
        self.timer_durations
    }
}

struct Args {
    db_url: String,
    work_mins: u32,
    break_mins: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--work-mins <n>] [--break-mins <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --work-mins 25");
    eprintln!("  --break-mins 5");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PATHWAY_DB_URL, PATHWAY_WORK_MINS, PATHWAY_BREAK_MINS");
    eprintln!("  PATHWAY_AI_API_KEY (or API_KEY), PATHWAY_AI_BASE_URL,");
    eprintln!("  PATHWAY_AI_MODEL, PATHWAY_AI_FAST_MODEL, PATHWAY_AI_TIMEOUT_SECS");
    eprintln!("  RUST_LOG (default: info)");
}

fn parse_minutes(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|mins| *mins > 0)
        .ok_or_else(|| ArgsError::InvalidMinutes {
            flag,
            raw: raw.to_string(),
        })
}

fn minutes_from_env(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|mins| *mins > 0)
        .unwrap_or(default)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("PATHWAY_DB_URL")
            .ok()
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut work_mins = minutes_from_env("PATHWAY_WORK_MINS", 25);
        let mut break_mins = minutes_from_env("PATHWAY_BREAK_MINS", 5);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--work-mins" => {
                    let value = require_value(args, "--work-mins")?;
                    work_mins = parse_minutes("--work-mins", &value)?;
                }
                "--break-mins" => {
                    let value = require_value(args, "--break-mins")?;
                    break_mins = parse_minutes("--break-mins", &value)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            db_url,
            work_mins,
            break_mins,
        }))
    }

    fn timer_durations(&self) -> Result<TimerDurations, Box<dyn std::error::Error>> {
        Ok(TimerDurations::new(
            self.work_mins.saturating_mul(60),
            self.break_mins.saturating_mul(60),
        )?)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };
    let timer_durations = parsed.timer_durations()?;

    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), db = %parsed.db_url, "starting OT Pathway");
    if GeminiConfig::from_env().is_none() {
        warn!("no PATHWAY_AI_API_KEY set; mentor explanations will use fallback text");
    }

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, Clock::system()).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        timer_durations,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("OT Pathway")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
