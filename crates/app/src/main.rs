use std::path::PathBuf;

use ledger::{CsvTableStore, Ledger, MemoryTableStore};
use server::ServerConfig;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "kassenbuch={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    if settings.server.password.is_empty() {
        tracing::error!("no access password configured; refusing to start");
        return Err("no access password configured".into());
    }

    let ledger = {
        let builder = Ledger::builder();
        let builder = match &settings.store.csv_path {
            Some(path) => {
                tracing::info!("Using CSV sheet at {path}");
                builder.store(CsvTableStore::new(path))
            }
            None => {
                tracing::warn!("No CSV sheet configured, running in memory");
                builder.store(MemoryTableStore::default())
            }
        };
        builder.build()?
    };

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    let config = ServerConfig {
        ledger,
        secret: settings.server.password,
        template_path: PathBuf::from(settings.documents.template_path),
    };
    if let Err(err) = server::run_with_listener(config, listener).await {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
