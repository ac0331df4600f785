// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,
    },

    /// Check the strength of a password
    Check {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Start the API server
    Serve,
}
