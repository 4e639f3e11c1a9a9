use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use tally_ledger::{InMemoryLedger, Ledger};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// Ledger HTTP server.
///
/// Owns the one ledger instance for the process and hands it to every
/// handler through [`AppState`].
pub struct LedgerServer {
    config: ServerConfig,
    ledger: Arc<dyn Ledger>,
}

impl LedgerServer {
    /// Build a server over a fresh in-memory ledger seeded from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let ledger = InMemoryLedger::with_accounts(config.seed.clone());
        Self::with_ledger(config, Arc::new(ledger))
    }

    /// Build a server over an existing ledger; `config.seed` is ignored.
    pub fn with_ledger(config: ServerConfig, ledger: Arc<dyn Ledger>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> Arc<dyn Ledger> {
        Arc::clone(&self.ledger)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.ledger()))
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        tracing::info!("ledger server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("ledger server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
