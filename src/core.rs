//! Main execution logic
//!
//! Wires the CLI arguments into application state and runs the server
//! until interrupted.

use std::sync::Arc;

use tracing::{info, warn};

use crate::cli::Args;
use crate::errors::Result;
use crate::server::{AppState, Server};
use crate::store::Store;
use crate::vault::Vault;

/// Build state from the arguments and serve until Ctrl+C.
pub async fn run(args: Args) -> Result<()> {
    let data_dir = args.resolve_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let store = Store::open(data_dir.join("toolbench.json"))?;
    let vault = Vault::open(data_dir.join("vault.key"))?;

    let state = Arc::new(AppState {
        store,
        vault,
        static_dir: args.static_dir.clone(),
    });

    let server = Server::bind(&args.host, args.port).await?;
    let addr = server.local_addr();
    info!("listening on http://{}", addr);

    if args.open {
        let url = format!("http://{}", addr);
        if let Err(e) = webbrowser::open(&url) {
            warn!("could not open browser: {}", e);
        }
    }

    tokio::select! {
        res = server.run(state) => res,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}
