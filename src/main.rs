// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use mdsub::app_config::{self, CommentPolicy, Config};
use mdsub::app_controller::ConversionOutcome;
use mdsub::Controller;

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

/// CLI Wrapper for CommentPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCommentPolicy {
    Strip,
    Passthrough,
}

impl From<CliCommentPolicy> for CommentPolicy {
    fn from(cli_policy: CliCommentPolicy) -> Self {
        match cli_policy {
            CliCommentPolicy::Strip => CommentPolicy::Strip,
            CliCommentPolicy::Passthrough => CommentPolicy::Passthrough,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for mdsub
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mdsub - Markdown-annotated subtitles to ASS
///
/// Converts SRT-structured scripts with inline Markdown into styled
/// Advanced SubStation Alpha subtitles.
#[derive(Parser, Debug)]
#[command(name = "mdsub")]
#[command(version)]
#[command(about = "Convert Markdown-annotated SRT scripts to ASS subtitles")]
#[command(long_about = "mdsub converts SRT-structured scripts with inline Markdown into ASS subtitles.

EXAMPLES:
    mdsub talk.srt                         # Writes talk.ass next to the input
    mdsub -o out/ talk.srt                 # Write into another directory
    mdsub -f --comments passthrough talk.md
    mdsub --log-level debug scripts/      # Convert a whole directory
    mdsub completions bash > mdsub.bash   # Generate bash completions

MARKUP:
    **bold**  __bold**  *italic*  _italic_  ~~strike~~  `code`  {literal}
    Lines starting with // are comments.

CONFIGURATION:
    Configuration is stored in mdsub.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input script or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output directory (defaults to the input file's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Title used when the script has no heading
    #[arg(short, long)]
    title: Option<String>,

    /// What to do with `//` comment lines
    #[arg(long, value_enum)]
    comments: Option<CliCommentPolicy>,

    /// Configuration file path
    #[arg(short, long, default_value = "mdsub.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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
        // The logger itself accepts everything; log::max_level does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn colour_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::colour_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "mdsub", &mut std::io::stdout());
        return Ok(());
    }

    run_convert(cli)
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    // Apply a command line log level before the config is read
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.into());
    }

    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(title) = options.title {
        config.default_title = title;
    }
    if let Some(policy) = options.comments {
        config.comment_policy = policy.into();
    }
    match options.log_level {
        Some(log_level) => config.log_level = log_level.into(),
        None => log::set_max_level(config.log_level.into()),
    }

    let controller = Controller::with_config(config)?;

    if input_path.is_file() {
        let output_dir = options
            .output_dir
            .unwrap_or_else(|| input_path.parent().unwrap_or(Path::new(".")).to_path_buf());

        match controller
            .run(&input_path, &output_dir, options.force_overwrite)
            .with_context(|| format!("Failed to convert {:?}", input_path))?
        {
            ConversionOutcome::Converted { output, .. } => info!("Success: {:?}", output),
            ConversionOutcome::Skipped { .. } => {}
        }
    } else if input_path.is_dir() {
        if options.output_dir.is_some() {
            return Err(anyhow!("--output-dir cannot be used with a directory input"));
        }
        let summary = controller.run_folder(&input_path, options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) failed to convert", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}
