//! # BioLine Main Entry Point
//!
//! Terminal front end for the biotech efficiency analysis API.

use anyhow::Result;
use bioline::cmd_args::CommandLineArgs;
use bioline::AppController;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Environment variable holding the log filter, e.g. `debug` or `bioline=trace`
const LOG_LEVEL_ENV_VAR: &str = "BIOLINE_LOG_LEVEL";

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose())?;

    let mut app = AppController::new(&cmd_args)?;

    println!("BioLine - Biotech Efficiency Analyzer");
    println!("Type 'help' for commands, 'quit' to exit.\n");

    app.run().await?;

    println!("Bye.");
    Ok(())
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    Ok(())
}
