use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use content::{BundledCatalog, CatalogSource, JsonFileCatalog};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quest_core::model::{LessonCatalog, ProgressionRules};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn parse_number(flag: &'static str, raw: &str) -> Result<u32, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- ui    [--catalog <path>] [--xp-per-correct <n>] [--xp-per-level <n>] [--log-level <filter>]"
    );
    eprintln!("  cargo run -p app -- check [--catalog <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  bundled C# catalog, 50 XP per correct answer, 100 XP per level, log level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUEST_CATALOG, QUEST_XP_PER_CORRECT, QUEST_XP_PER_LEVEL, QUEST_LOG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    catalog: Option<PathBuf>,
    xp_per_correct: u32,
    xp_per_level: u32,
    log_level: String,
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let defaults = ProgressionRules::default();
        let mut catalog = env("QUEST_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut xp_per_correct = env("QUEST_XP_PER_CORRECT")
            .map(|raw| parse_number("QUEST_XP_PER_CORRECT", &raw))
            .transpose()?
            .unwrap_or(defaults.xp_per_correct());
        let mut xp_per_level = env("QUEST_XP_PER_LEVEL")
            .map(|raw| parse_number("QUEST_XP_PER_LEVEL", &raw))
            .transpose()?
            .unwrap_or(defaults.xp_per_level());
        let mut log_level = env("QUEST_LOG").unwrap_or_else(|| "info".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--catalog" });
                    }
                    catalog = Some(PathBuf::from(value));
                }
                "--xp-per-correct" => {
                    let value = require_value(args, "--xp-per-correct")?;
                    xp_per_correct = parse_number("--xp-per-correct", &value)?;
                }
                "--xp-per-level" => {
                    let value = require_value(args, "--xp-per-level")?;
                    xp_per_level = parse_number("--xp-per-level", &value)?;
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            xp_per_correct,
            xp_per_level,
            log_level,
        })
    }

    fn source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog {
            Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
            None => Box::new(BundledCatalog),
        }
    }
}

struct DesktopApp {
    catalog: Arc<LessonCatalog>,
    rules: ProgressionRules,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    fn rules(&self) -> ProgressionRules {
        self.rules
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn print_summary(source: &str, catalog: &LessonCatalog) {
    println!("catalog: {source}");
    for phase in catalog.phases() {
        println!(
            "  phase {} {} {}: {} lessons",
            phase.id(),
            phase.icon(),
            phase.name(),
            catalog.lessons_in_phase(phase.id()).len()
        );
    }
    println!("total: {} lessons", catalog.total_lessons());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(&parsed.log_level);

    let source = parsed.source();
    let catalog = source.load()?;

    match cmd {
        Command::Check => {
            print_summary(&source.describe(), &catalog);
            Ok(())
        }
        Command::Ui => {
            let rules = ProgressionRules::new(parsed.xp_per_correct, parsed.xp_per_level)?;
            info!(
                catalog = %source.describe(),
                lessons = catalog.total_lessons(),
                xp_per_correct = rules.xp_per_correct(),
                xp_per_level = rules.xp_per_level(),
                "launching quest"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog: Arc::new(catalog),
                rules,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(context.title())
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
