use std::io::{self, BufWriter, Write};

use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Cli;
use crate::dumper::{DirectoryDumper, DumpError, DumpReport};
use crate::ext::BestEffortPathExt;

pub struct Application;

impl Application {
    pub async fn run(cli_args: Cli) -> Result<(), ApplicationError> {
        let app_config = RuntimeConfig::try_from(cli_args).context(CurrentDirSnafu)?;
        debug!("Resolved runtime config: {:?}", app_config);

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        Self::dump(&app_config, &mut out).await?;

        Ok(())
    }

    pub async fn dump(
        app_config: &RuntimeConfig,
        out: &mut impl Write,
    ) -> Result<DumpReport, ApplicationError> {
        info!(
            "Dumping text entries of {}",
            app_config.root.best_effort_path_display()
        );

        DirectoryDumper::new(&app_config.root)
            .run(out)
            .await
            .context(DumpFailedSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while resolving the working directory"))]
    CurrentDirError { source: io::Error },
    #[snafu(display("Critical failure encountered while dumping the working directory"))]
    DumpFailed { source: DumpError },
}
