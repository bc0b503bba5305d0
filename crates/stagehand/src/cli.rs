//! Command line options for running stagehand tasks.

use clap::Parser;
use stagehand_core::logging::LoggingArgs;
use std::path::PathBuf;

/// Command line options for running stagehand.
///
/// Tasks are requested by name and run in the order given. With no task
/// requested, stagehand prints a usage hint and performs no work.
#[derive(Debug, Parser)]
#[clap(name = "stagehand")]
#[clap(version)]
#[clap(about = "Stages vendored front-end assets into the public asset tree")]
pub struct StagehandArgs {
    /// Tasks to be run
    #[clap(value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Use an alternative manifest file
    #[clap(long, short = 'm', value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Log level to run stagehand in.
    #[clap(flatten)]
    pub logging: LoggingArgs,
}

impl StagehandArgs {
    /// Simulate creating the args from the command line
    pub fn command_line<S: AsRef<str>>(cmd: S) -> Self {
        Self::try_command_line(cmd).expect("couldn't parse cmd line")
    }

    /// Simulate creating the args from the command line
    pub fn try_command_line<S: AsRef<str>>(cmd: S) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("stagehand").chain(cmd.as_ref().split_whitespace()))
    }

    /// Create args from the surrounding environment.
    pub fn from_env() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use log::LevelFilter;
    use std::path::Path;

    #[test]
    fn can_render_help() {
        let mut command = StagehandArgs::command();
        let str = command.render_help();
        println!("{}", str);
    }

    #[test]
    fn no_args_requests_no_tasks() {
        let args = StagehandArgs::command_line("");
        assert!(args.tasks.is_empty());
        assert!(args.manifest.is_none());
    }

    #[test]
    fn tasks_are_kept_in_order() {
        let args = StagehandArgs::command_line("stage tasks");
        assert_eq!(args.tasks, vec!["stage", "tasks"]);
    }

    #[test]
    fn manifest_flag_takes_a_path() {
        let args = StagehandArgs::command_line("-m custom.toml stage");
        assert_eq!(args.manifest.as_deref(), Some(Path::new("custom.toml")));
        assert_eq!(args.tasks, vec!["stage"]);
    }

    #[test]
    fn log_flags_flow_through() {
        let args = StagehandArgs::command_line("--debug stage");
        assert_eq!(args.logging.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn disallow_multiple_logging() {
        assert!(StagehandArgs::try_command_line("--trace --debug").is_err());
    }
}
