use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use page_cache::cache::errors::CacheError;
use page_cache::cache::structs::cache::Cache;
use page_cache::config::structs::cache_config::CacheConfig;
use page_cache::config::structs::configuration::Configuration;
use page_cache::logging::setup_logging;
use page_cache::structs::{Cli, Command};
use tokio::runtime::Builder;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[CONFIG] {e}");
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let result = Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(Arc::new(config.cache), args.command));

    if let Err(e) = result {
        error!("{}", e);
        exit(1);
    }
    Ok(())
}

async fn run(config: Arc<CacheConfig>, command: Command) -> Result<(), CacheError> {
    let cache = Cache::new(config)?;
    match command {
        Command::Get { path, suffix } => {
            let entry = cache.get(&path, suffix.as_deref()).await?;
            println!("{}", entry.content);
        }
        Command::Set { path, content, suffix } => {
            let content: serde_json::Value = serde_json::from_str(&content)
                .map_err(|e| CacheError::SerializationError(e.to_string()))?;
            cache.set(&path, &content, suffix.as_deref()).await?;
            info!("Stored {}", path);
        }
        Command::Clear { path, suffix } => {
            cache.clear(&path, suffix.as_deref()).await?;
            info!("Cleared {}", path);
        }
        Command::Ping => {
            cache.ping().await?;
            println!("{} OK", cache.active_backend().name());
        }
    }
    Ok(())
}
