use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the cached content for a path.
    Get {
        #[arg(long)]
        path: String,
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Store JSON content for a path.
    Set {
        #[arg(long)]
        path: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Remove the cached content for a path.
    Clear {
        #[arg(long)]
        path: String,
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Check that the active backend answers.
    Ping,
}
