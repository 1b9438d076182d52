use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::Result;
use crate::flatten::flatten_export;

mod logging;
mod settings;

/// Load settings, start logging and flatten the export named by `cli`.
///
/// Errors are handed back to `main`, which reports them once and exits.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = settings::load_settings();
    logging::init(&settings.log);

    info!(
        source = %cli.source.display(),
        dest = %cli.dest.display(),
        "flattening export"
    );

    match flatten_export(&cli.source, &cli.dest, &settings.layout) {
        Ok(summaries) => {
            info!(collections = summaries.len(), "export flattened");
            println!("Done.");
            Ok(())
        }
        Err(e) => {
            debug!(error = ?e, "flatten aborted");
            Err(e)
        }
    }
}
