//! TCP accept loop

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

use super::request::read_request;
use super::response::Response;
use super::routes::{route, AppState};
use crate::errors::Result;

/// The local HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Bind to the given host and port (port 0 picks a free one).
    pub async fn bind(host: &str, port: u16) -> Result<Self> {
        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until the task is cancelled.
    pub async fn run(&self, state: Arc<AppState>) -> Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let state = Arc::clone(&state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, &state).await {
                            debug!("connection error from {}: {}", peer, e);
                        }
                    });
                }
                Err(e) => error!("accept error: {}", e),
            }
        }
    }
}

async fn handle_connection(mut stream: TcpStream, state: &Arc<AppState>) -> Result<()> {
    let response = match read_request(&mut stream).await {
        Ok(req) => {
            info!("{} {}", req.method, req.path);
            route(state, &req).await
        }
        // Malformed requests get a 400, never a dropped connection.
        Err(e) => Response::bad_request(&e.to_string()),
    };

    stream.write_all(&response.to_bytes()).await?;
    stream.flush().await?;
    Ok(())
}
