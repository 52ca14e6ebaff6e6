use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::{Config, ThreadingMode};
use crate::files::StaticFiles;
use crate::http::connection::Connection;

/// Binds the configured address and serves forever.
///
/// Only a bind failure is returned; once listening, nothing stops the loop.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.server.listen_addr()).await?;
    info!(
        "HTTP Server started listening on port {} with server root path at {}",
        cfg.server.port, cfg.static_files.root
    );

    let files = Arc::new(StaticFiles::from_config(&cfg.static_files));
    serve(listener, files, cfg.threading).await
}

/// Accept loop over an already bound listener.
pub async fn serve(
    listener: TcpListener,
    files: Arc<StaticFiles>,
    mode: ThreadingMode,
) -> anyhow::Result<()> {
    info!(mode = ?mode, "Listening for connection requests");

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Connection accepted from {}", peer);

        let conn = Connection::new(socket, peer, files.clone());
        match mode {
            ThreadingMode::Single => {
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            }
            ThreadingMode::Multi => {
                tokio::spawn(async move {
                    if let Err(e) = conn.run().await {
                        error!("Connection error from {}: {}", peer, e);
                    }
                });
            }
        }
    }
}
