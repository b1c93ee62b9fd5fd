//! IntegraUPT audit server - main entry point

use anyhow::Result;
use integra_common::logging::{init_logging, LogConfig};
use tracing::info;

use integra_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("integra-server")
        .filter_directives("integra_server=debug,tower_http=debug,sqlx=info")
        .build()
        .with_env_overrides()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting IntegraUPT audit server");

    let config = Config::load()?;
    info!(
        backend = ?config.audit.backend,
        "Configuration loaded - server will bind to {}:{}",
        config.server.host,
        config.server.port
    );

    api::serve(config).await
}
