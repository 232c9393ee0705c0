// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;
use std::time::Duration;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand, Args};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};

use babelbox::app_config::{self, Config};
use babelbox::app_controller::{Controller, MAX_INPUT_CHARS};
use babelbox::errors::TranslationError;
use babelbox::language_utils;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text (default command)
    Translate(TranslateArgs),

    /// List previous translations, newest first
    History {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a previous translation in full
    Show {
        /// Position in the history listing (0 = newest)
        index: usize,
    },

    /// List the known language codes
    Languages,

    /// Generate shell completions for babelbox
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
struct TranslateArgs {
    /// Text to translate; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Source language code (e.g., 'en', 'hi') or 'auto'
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'hi')
    #[arg(short, long)]
    target_language: Option<String>,
}

/// babelbox - translate text from the command line
///
/// Sends text to LibreTranslate, falls back to MyMemory when that fails,
/// and remembers the last 50 distinct translations.
#[derive(Parser, Debug)]
#[command(name = "babelbox")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Translate text with a fallback provider and local history")]
#[command(long_about = "babelbox translates text through LibreTranslate and falls back to MyMemory when the first service fails.

EXAMPLES:
    babelbox hello -s en -t hi          # Translate from English to Hindi
    echo 'thank you' | babelbox -t hi   # Translate text from stdin
    babelbox history                    # List previous translations
    babelbox show 0                     # Show the newest translation in full
    babelbox languages                  # List known language codes
    babelbox completions bash > babelbox.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BABELBOX_CONFIG", default_value = "conf.json")]
    config_path: PathBuf,

    /// History database path (overrides the config file)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and label for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, label) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, label, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is applied after the config loads
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "babelbox", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Languages) => {
            for (code, name) in language_utils::languages() {
                println!("{:<6} {}", code, name);
            }
            Ok(())
        }
        Some(Commands::History { limit }) => run_history(&config, limit),
        Some(Commands::Show { index }) => run_show(&config, index),
        Some(Commands::Translate(args)) => run_translate(config, args).await,
        Some(Commands::Completions { .. }) => Ok(()),
        None => run_translate(config, cli.translate).await,
    }
}

/// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    if let Some(database) = &cli.database {
        config.history.database_path = Some(database.clone());
    }

    Ok(config)
}

async fn run_translate(mut config: Config, args: TranslateArgs) -> Result<()> {
    if let Some(source) = args.source_language {
        config.source_language = source;
    }
    if let Some(target) = args.target_language {
        config.target_language = target;
    }

    config.validate()?;

    let text = if args.text.is_empty() {
        read_stdin()?
    } else {
        args.text.join(" ")
    };

    let mut controller = Controller::with_config(&config)?;
    controller.set_source_text(text);
    info!("{} characters ({})", controller.char_count(), language_pair(&config));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = controller.translate().await;
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => {
            if outcome.used_fallback {
                warn!("Primary service unavailable, translated by the fallback service");
            }
            println!("{}", controller.session().target_text);

            if let Some(alternatives) = &controller.session().alternatives {
                if alternatives.len() > 1 {
                    println!();
                    println!("Alternatives:");
                    for alternative in alternatives {
                        println!("  - {}", alternative);
                    }
                }
            }
            Ok(())
        }
        Err(TranslationError::EmptyInput) => Err(anyhow!("Please enter text to translate")),
        Err(e @ TranslationError::InputTooLong { .. }) => {
            Err(anyhow!("{} (limit is {} characters)", e, MAX_INPUT_CHARS))
        }
        Err(e) => {
            println!("{}", controller.session().target_text);
            Err(e.into())
        }
    }
}

fn run_history(config: &Config, limit: Option<usize>) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let history = controller.history();

    if history.is_empty() {
        info!("No translations yet");
        return Ok(());
    }

    let limit = limit.unwrap_or(history.len());
    for (index, record) in history.list().iter().take(limit).enumerate() {
        println!(
            "{:>2}. {}  [{}]  {}",
            index,
            record.source_summary(),
            record.language_pair_label(),
            record.translated_summary()
        );
    }

    Ok(())
}

fn run_show(config: &Config, index: usize) -> Result<()> {
    let mut controller = Controller::with_config(config)?;
    let total = controller.history().len();

    let session = controller
        .restore_from_history(index)
        .ok_or_else(|| anyhow!("No history entry at index {} ({} entries)", index, total))?;

    println!(
        "{} → {}",
        language_utils::display_name(&session.source_lang),
        language_utils::display_name(&session.target_lang)
    );
    println!();
    println!("{}", session.source_text);
    println!();
    println!("{}", session.target_text);

    Ok(())
}

fn language_pair(config: &Config) -> String {
    format!(
        "{} → {}",
        language_utils::display_name(&config.source_language),
        language_utils::display_name(&config.target_language)
    )
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}
