//! Application settings, read from `settings.toml` with environment
//! (`KASSENBUCH_*`) and command-line overrides layered on top.

use clap::Parser;
use config::ConfigError;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    /// The club's shared access password.
    pub password: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Store {
    /// CSV sheet on disk; without it the ledger runs in memory.
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Documents {
    pub template_path: String,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            template_path: "vorlage_antrag.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub store: Store,
    pub documents: Documents,
}

#[derive(Debug, Parser)]
#[command(name = "kassenbuch", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override bind address (e.g. 0.0.0.0).
    #[arg(long)]
    bind: Option<String>,
    /// Override server port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the CSV sheet path.
    #[arg(long)]
    csv_path: Option<String>,
}

pub fn load() -> Result<Settings, ConfigError> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("KASSENBUCH"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(bind) = args.bind {
        settings.server.bind = Some(bind);
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(csv_path) = args.csv_path {
        settings.store.csv_path = Some(csv_path);
    }

    Ok(settings)
}
