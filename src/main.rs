use std::path::Path;

use clap::Parser;

use passmint::cli::{self, Args, CliCommand};
use passmint::core::config::Config;
use passmint::models::PasswordOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    if let Some(address) = args.address.clone() {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            special,
        }) => {
            let options = PasswordOptions {
                length: length.unwrap_or(config.default_password_length),
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_special: special,
            };
            cli::handlers::handle_generate(&options, args.json)
        }
        Some(CliCommand::Check { password }) => cli::handlers::handle_check(&password, args.json),
        Some(CliCommand::Serve) | None => {
            passmint::api::start_server(config).await?;
            Ok(())
        }
    }
}
