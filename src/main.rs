//! toolbench binary entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use toolbench::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "toolbench=info",
        1 => "toolbench=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    toolbench::core::run(args).await?;
    Ok(())
}
