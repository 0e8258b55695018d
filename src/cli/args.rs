//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::errors::{Result, ToolbenchError};

/// A local developer toolbox served over a local HTTP API
#[derive(Parser, Debug, Clone)]
#[command(name = "toolbench", version, about)]
pub struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1", env = "TOOLBENCH_HOST")]
    pub host: String,

    /// Port to bind to (0 picks a free port)
    #[arg(short, long, default_value_t = 8000, env = "TOOLBENCH_PORT")]
    pub port: u16,

    /// Directory for persistent data (store file and vault key)
    #[arg(long, env = "TOOLBENCH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the bundled web UI assets
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Open the UI in the default browser after startup
    #[arg(long)]
    pub open: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolve the data directory, defaulting to a per-user location.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_local_dir()
            .map(|d| d.join("toolbench"))
            .ok_or_else(|| ToolbenchError::Config("cannot determine data directory".to_string()))
    }
}
