//! Processing logic shared between the lookup and sweep commands.

use super::config::Config;
use crate::Result;
use crate::facts::hosting::Client;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use clap::ValueEnum;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    /// Resolve the mode against a stream's terminal status.
    #[must_use]
    pub const fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    const fn filter(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some("error"),
            Self::Warn => Some("warn"),
            Self::Info => Some("info"),
            Self::Debug => Some("debug"),
            Self::Trace => Some("trace"),
        }
    }
}

/// Common arguments shared between the lookup and sweep commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `pkgstars.toml` in the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common {
    pub config: Config,
    pub client: Client,
    pub color: ColorMode,
}

impl Common {
    /// Set up logging, load the configuration, and create the API client
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
        let client = Client::new(args.github_token.as_deref(), config.api_url.as_str())?;

        if args.github_token.is_none() {
            log::info!("No GitHub token supplied; requests are unauthenticated");
        }

        Ok(Self {
            config,
            client,
            color: args.color,
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let Some(level) = log_level.filter() else {
            return;
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // A second command in the same process keeps the first logger.
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    /// Whether colors should be used on stdout
    #[must_use]
    pub fn use_colors_for_output(&self) -> bool {
        use std::io::{IsTerminal, stdout};
        self.color.use_colors(stdout().is_terminal())
    }

    /// Whether colors should be used on stderr
    #[must_use]
    pub fn use_colors_for_progress(&self) -> bool {
        use std::io::{IsTerminal, stderr};
        self.color.use_colors(stderr().is_terminal())
    }
}
