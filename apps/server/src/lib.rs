//! # Folio Server
//!
//! Portfolio backend built on `Axum` and `SurrealDB`: fixed profile content plus
//! contact message intake and retrieval.
//!
//! ## Example
//! ```no_run
//! use folio_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8001)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;
mod shutdown;

use anyhow::{Context, Result, bail};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use folio::domain::config::{AppConfig, SslConfig};
use folio::kernel::server::ApiState;
use folio_database::Database;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Configures and bootstraps a [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
}

impl ServerBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides the listening port only.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Opens the document store, migrates it and assembles the request state.
    ///
    /// # Errors
    /// * configured TLS files are missing
    /// * the store is unreachable or rejects the credentials
    /// * a migration fails or was edited after being applied
    pub async fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        let database = connect(&self.cfg).await?;
        let state = ApiState::builder()
            .register_slices(folio::init(&database))
            .config(self.cfg)
            .db(database)
            .build()
            .context("Assembling API state")?;

        info!(
            features = ?folio::features::ENABLED,
            slices = ?state.slice_names().collect::<Vec<_>>(),
            "Server ready"
        );
        Ok(Server { state })
    }
}

async fn connect(cfg: &AppConfig) -> Result<Database> {
    let store = &cfg.database;
    let builder = Database::builder()
        .url(&store.url)
        .session(&store.namespace, &store.database)
        .migrations(folio::migrations());

    let builder = match &store.credentials {
        Some(creds) => builder.auth(&creds.username, &creds.password),
        None => builder,
    };

    builder.init().await.with_context(|| format!("Connecting to document store at {}", store.url))
}

fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    for (kind, path) in [("certificate", &ssl.cert), ("private key", &ssl.key)] {
        if !path.is_file() {
            bail!("TLS {kind} not found at {}", path.display());
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(key = %ssl.key.display(), mode = %format!("{mode:o}"), "TLS private key is readable by others");
        }
    }

    Ok(())
}

/// A bootstrapped server; call [`Server::run`] to accept connections.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete HTTP application: API routes, docs, tracing and CORS.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }

    /// Serves HTTP, or HTTPS when TLS is configured, until SIGINT or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if binding fails or the TLS material cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let server_cfg = &self.state.config.server;
        let address = SocketAddr::new(server_cfg.address, server_cfg.port);
        let service = self.router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        shutdown::drain_on_signal(handle.clone());

        match &server_cfg.ssl {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Loading TLS certificate and key")?;
                info!("Listening on https://{address}, docs at {}", router::DOCS_PATH);
                axum_server::bind_rustls(address, tls)
                    .handle(handle)
                    .serve(service)
                    .await
                    .context("HTTPS listener failed")?;
            },
            None => {
                info!("Listening on http://{address}, docs at {}", router::DOCS_PATH);
                axum_server::bind(address)
                    .handle(handle)
                    .serve(service)
                    .await
                    .context("HTTP listener failed")?;
            },
        }

        info!("Server stopped");
        Ok(())
    }
}
