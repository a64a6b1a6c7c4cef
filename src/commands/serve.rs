//! The HTTP server command.

use crate::{
    api::{create_router, AppState},
    db::{db::Db, schema::ensure_schema},
    libs::{config::Config, logging, messages::Message},
    msg_error_anyhow, msg_info, msg_warning,
};
use anyhow::{Context, Result};
use clap::Args;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overrides PORT
    #[arg(short, long)]
    port: Option<u16>,
}

/// Ensures the schema, then serves requests until Ctrl+C or SIGTERM.
pub async fn cmd(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    logging::init(&config);
    msg_info!(Message::ServerStarting);
    msg_info!(Message::ProfileSelected(config.profile.to_string()));
    if config.uses_placeholder_secret() {
        msg_warning!(Message::DefaultSecretKeyInProduction);
    }

    // Only startup-time work: make sure the table exists.
    let db = Db::open(&config.database)?;
    ensure_schema(&db)?;
    db.close();

    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| msg_error_anyhow!(Message::InvalidServerAddress(config.host.clone(), config.port)))?;
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;
    msg_info!(Message::ServerListening(listener.local_addr()?.to_string()));

    let application = create_router(AppState::new(config));
    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            msg_warning!(Message::ShutdownSignalFailed(error.to_string()));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                msg_warning!(Message::ShutdownSignalFailed(error.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
