//! CLI command implementations
//!
//! `serve` owns the boot sequence: load config, init logging, connect the
//! store, build the repository, hand everything to the HTTP server.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::repo::BookRepository;
use crate::store::Store;

use super::errors::CliResult;

/// Run the HTTP server until the process is terminated.
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    init_tracing();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let store = Store::connect(&config.database_url).await?;
        let repo = BookRepository::new(store.pool().clone());

        let server = HttpServer::new(config, repo);
        server.start().await?;
        Ok(())
    })
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` controls verbosity; "info" when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
