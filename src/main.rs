// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{net::SocketAddr, process, sync::Arc, time::Duration};

use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::signal;
use tracing::{error, info, warn};

use tetherflash_relay::{
    api::router,
    blockchain::{
        signing::{load_signer, signer_address},
        TronClient,
    },
    config::RelayConfig,
    gateway::GatewaySettings,
    logging::init_tracing,
    mail::SmtpMailer,
    state::AppState,
};

/// How long in-flight requests may drain after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(config).await {
        error!(error = %e, "Relay failed");
        process::exit(1);
    }
}

async fn run(config: RelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Install the ring crypto provider for rustls (must be done before any TLS operations)
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install rustls crypto provider")?;

    let signer = config.private_key.as_deref().map(load_signer).transpose()?;
    match &signer {
        Some(signer) => info!(address = %signer_address(signer), "Relay account loaded"),
        None => warn!("PRIVATE_KEY not set; transfers and default balance queries will fail"),
    }

    let ledger = TronClient::new(
        config.network.clone(),
        config.full_host.as_deref(),
        config.tron_api_key.clone(),
        signer,
    )?;

    let mailer = SmtpMailer::new(&config.mail)?;
    if !mailer.is_configured() {
        warn!("EMAIL_USER / EMAIL_PASS not set; notifications will fail");
    }

    let state = AppState::new(
        Arc::new(ledger),
        Arc::new(mailer),
        GatewaySettings::from_config(&config),
    );
    let app = router(state);

    let addr = config.bind_addr()?;
    let handle = Handle::<SocketAddr>::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    info!(
        %addr,
        network = config.network.display_name,
        token_contract = %config.token_contract,
        tls = config.tls.is_some(),
        "TetherFlash relay listening (docs at /docs)"
    );

    match &config.tls {
        Some(tls) => {
            let tls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, then drain connections.
async fn shutdown_signal(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(grace = ?SHUTDOWN_GRACE, "Shutdown signal received, draining connections");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn graceful_shutdown_on_idle_handle() {
        let handle = Handle::<SocketAddr>::new();
        handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        assert_eq!(handle.connection_count(), 0);
    }
}
