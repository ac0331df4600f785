// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Address for the API server
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub port: Option<u16>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
