use std::io::{self, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{info, warn};

use crate::application::RuntimeConfig;
use crate::report::Reporter;
use crate::walker::{Summary, TreeWalker, WalkError};

pub struct Application;

impl Application {
    /// Compares the configured trees, writing the report to stdout.
    pub fn run(config: impl Into<RuntimeConfig>) -> Result<Summary, ApplicationError> {
        let config: RuntimeConfig = config.into();
        let reporter = Reporter::new(io::stdout().lock(), config.colorize);
        Self::run_with_reporter(&config, reporter)
    }

    pub fn run_with_reporter<W: Write>(
        config: &RuntimeConfig,
        reporter: Reporter<W>,
    ) -> Result<Summary, ApplicationError> {
        info!(
            "Comparing '{}' and '{}'.",
            config.old_root.display(),
            config.new_root.display()
        );
        if !config.delete {
            info!("Will not delete any files without the -d flag.");
        }

        let summary = TreeWalker::new(reporter, config.walk_options())
            .run(&config.old_root, &config.new_root)
            .context(WalkSnafu)?;

        info!("Finished: {summary}");
        if summary.failures() > 0 {
            warn!(
                "{} entries could not be compared, read or removed, see the report for details",
                summary.failures()
            );
        }

        Ok(summary)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while walking the old tree"))]
    WalkError { source: WalkError },
}
