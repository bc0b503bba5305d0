//! The stagehand command line: a task runner that stages vendored front-end
//! assets into the public asset tree.

pub mod cli;
pub mod error;
pub mod tasks;
pub mod text;

pub use cli::StagehandArgs;
pub use error::{ExecError, ExecResult};

use log::error;
use tasks::{TaskContext, TaskRegistry};

/// The one-line hint printed when no task is requested.
pub const USAGE_HINT: &str = "Use the stage task to stage vendored assets";

/// Run stagehand with arguments taken from the environment.
pub fn execute() -> ExecResult {
    let args = StagehandArgs::from_env();
    args.logging.init_logger();
    execute_with(args).map_err(|e| {
        error!("{}", e);
        e
    })
}

/// Run stagehand with the given arguments.
///
/// With no task requested this prints a usage hint, touches nothing, and
/// succeeds. Requested tasks run in order; the first failing task aborts the
/// run.
pub fn execute_with(args: StagehandArgs) -> ExecResult {
    if args.tasks.is_empty() {
        println!("{}", USAGE_HINT);
        return Ok(());
    }

    let registry = TaskRegistry::with_default_tasks();
    let context = TaskContext {
        manifest: args.manifest,
    };
    for request in &args.tasks {
        let task = registry
            .find(request)
            .ok_or_else(|| ExecError::UnknownTask(request.clone()))?;
        task.run(&registry, &context)?;
    }
    Ok(())
}
