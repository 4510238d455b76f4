//! `cfgmgr`: inspect an application's message-bus interface configuration.
//!
//! ```text
//! cfgmgr --document app.json publisher --name default
//! cfgmgr --settings cfgmgr.toml client --index 0
//! cfgmgr --document app.json topics --name default
//! cfgmgr --document app.json app-value encoding
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bus_config_manager::config::loader::load_settings;
use bus_config_manager::observability::init_logging;
use bus_config_manager::{CfgResult, ConfigManager, InterfaceCfg, ManagerSettings, Role};

#[derive(Parser)]
#[command(name = "cfgmgr")]
#[command(about = "Inspect message-bus interface configuration", long_about = None)]
struct Cli {
    /// Manager settings (TOML); environment overrides still apply.
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Application document (JSON); overrides `document_path` from settings.
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Force development mode (no key material).
    #[arg(long)]
    dev_mode: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selector {
    /// Select the entry by its `Name`.
    #[arg(long, conflicts_with = "index")]
    name: Option<String>,

    /// Select the entry by position.
    #[arg(long, default_value_t = 0)]
    index: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print interface counts and app settings
    Summary,
    /// Print the transport config of a publisher
    Publisher(Selector),
    /// Print the transport config of a subscriber
    Subscriber(Selector),
    /// Print the transport config of a server
    Server(Selector),
    /// Print the transport config of a client
    Client(Selector),
    /// Print the topics of a publisher
    Topics(Selector),
    /// Print a value of the app config document
    AppValue { key: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => {
            let mut settings = ManagerSettings::default();
            settings.apply_env();
            settings
        }
    };
    if let Some(document) = &cli.document {
        settings.document_path = Some(document.display().to_string());
    }
    if cli.dev_mode {
        settings.dev_mode = true;
    }

    init_logging(&settings.log_level);

    let manager = ConfigManager::load(settings)?;

    match cli.command {
        Commands::Summary => {
            let app = manager.get_app_config();
            let summary = serde_json::json!({
                "app_name": app.app_name(),
                "dev_mode": app.is_dev_mode(),
                "publishers": manager.get_num_publishers()?,
                "subscribers": manager.get_num_subscribers()?,
                "servers": manager.get_num_servers()?,
                "clients": manager.get_num_clients()?,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Publisher(sel) => print_config(&*select(&manager, Role::Publisher, &sel)?)?,
        Commands::Subscriber(sel) => print_config(&*select(&manager, Role::Subscriber, &sel)?)?,
        Commands::Server(sel) => print_config(&*select(&manager, Role::Server, &sel)?)?,
        Commands::Client(sel) => print_config(&*select(&manager, Role::Client, &sel)?)?,
        Commands::Topics(sel) => {
            let publisher = match &sel.name {
                Some(name) => manager.get_publisher_by_name(name)?,
                None => manager.get_publisher_by_index(sel.index)?,
            };
            for topic in publisher.get_topics()? {
                println!("{}", topic);
            }
        }
        Commands::AppValue { key } => {
            let value = manager.get_app_config_value(&key)?;
            println!("{}", serde_json::to_string_pretty(&value.to_json())?);
        }
    }

    Ok(())
}

fn select<'m>(manager: &'m ConfigManager, role: Role, sel: &Selector) -> CfgResult<Box<dyn InterfaceCfg + 'm>> {
    let view: Box<dyn InterfaceCfg + 'm> = match (role, &sel.name) {
        (Role::Publisher, Some(name)) => Box::new(manager.get_publisher_by_name(name)?),
        (Role::Publisher, None) => Box::new(manager.get_publisher_by_index(sel.index)?),
        (Role::Subscriber, Some(name)) => Box::new(manager.get_subscriber_by_name(name)?),
        (Role::Subscriber, None) => Box::new(manager.get_subscriber_by_index(sel.index)?),
        (Role::Server, Some(name)) => Box::new(manager.get_server_by_name(name)?),
        (Role::Server, None) => Box::new(manager.get_server_by_index(sel.index)?),
        (Role::Client, Some(name)) => Box::new(manager.get_client_by_name(name)?),
        (Role::Client, None) => Box::new(manager.get_client_by_index(sel.index)?),
    };
    Ok(view)
}

fn print_config(view: &dyn InterfaceCfg) -> Result<(), Box<dyn std::error::Error>> {
    let config = view.get_msgbus_config()?;
    tracing::info!(role = %view.role(), endpoint = %config.endpoint, "Msgbus config resolved");
    println!("{}", serde_json::to_string_pretty(&config.to_json())?);
    Ok(())
}
