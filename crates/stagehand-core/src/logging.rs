//! Logging utilities shared by the stagehand command line.

use fern::{Dispatch, FormatCallback};
use log::{Level, LevelFilter, Record};
use std::fmt;
use std::io::stdout;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Provides helpful logging args for clap clis
#[derive(Debug, clap::Args)]
#[clap(next_help_heading = "LOGGING")]
pub struct LoggingArgs {
    /// Only display error level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["warn", "info", "debug", "trace"]))]
    #[clap(display_order = 1)]
    error: bool,

    /// Display warning and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "info", "debug", "trace"]))]
    #[clap(display_order = 2)]
    warn: bool,

    /// Display info and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "warn", "debug", "trace"]))]
    #[clap(display_order = 3)]
    info: bool,

    /// Display debug and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "trace"]))]
    #[clap(display_order = 4)]
    debug: bool,

    /// Display trace and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "debug"]))]
    #[clap(display_order = 5)]
    trace: bool,
}

/// How much context each log line carries.
enum OutputType {
    Basic,
    Timed,
}

impl LoggingArgs {
    fn config_from_settings(&self) -> (LevelFilter, OutputType) {
        if self.error {
            (LevelFilter::Error, OutputType::Basic)
        } else if self.warn {
            (LevelFilter::Warn, OutputType::Basic)
        } else if self.info {
            (LevelFilter::Info, OutputType::Timed)
        } else if self.debug {
            (LevelFilter::Debug, OutputType::Timed)
        } else if self.trace {
            (LevelFilter::Trace, OutputType::Timed)
        } else {
            (LevelFilter::Info, OutputType::Basic)
        }
    }

    /// The level filter these args request.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.config_from_settings().0
    }

    /// Install the root logger.
    pub fn init_logger(&self) {
        let (filter, output_mode) = self.config_from_settings();

        Dispatch::new()
            .format(Self::message_format(output_mode))
            .level(filter)
            .chain(stdout())
            .apply()
            .expect("couldn't set as global logger")
    }

    fn message_format(
        output_mode: OutputType,
    ) -> impl Fn(FormatCallback, &fmt::Arguments, &Record) + Sync + Send + 'static {
        move |out, message, record| {
            out.finish(format_args!(
                "{} {}",
                Self::format_prefix(&output_mode, record),
                message
            ))
        }
    }

    fn format_prefix(output_mode: &OutputType, record: &Record) -> String {
        use colored::Colorize;
        static DATE_TIME_FORMAT: &[FormatItem] =
            format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

        let level_string = record.level().to_string().to_lowercase();
        let level_string = match record.level() {
            Level::Error => level_string.red().to_string(),
            Level::Warn => level_string.yellow().to_string(),
            Level::Info => level_string.green().to_string(),
            Level::Debug => level_string.blue().to_string(),
            Level::Trace => level_string.bright_black().to_string(),
        };
        match output_mode {
            OutputType::Basic => {
                format!("{}:", level_string)
            }
            OutputType::Timed => {
                let time = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
                format!(
                    "[{}] {}:",
                    time.format(DATE_TIME_FORMAT)
                        .unwrap_or_else(|_| "??".to_string()),
                    level_string
                )
            }
        }
    }
}
