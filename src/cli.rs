use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tailsearch")]
#[command(about = "tailsearch - Top-10 prefix suggestions over compound names.")]
#[command(version = env!("VERSION"))]
pub struct Cli {
    /// Path to one or more config files (merged in order).
    #[arg(long, default_value = "config.toml", action = clap::ArgAction::Append)]
    pub config: Vec<PathBuf>,

    /// Path to the (name, score) CSV file. Overrides `data.path` in the config.
    #[arg(long)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a sample config file.
    NewConfig {
        /// Output path for config file.
        #[arg(short, long, default_value = "config.toml")]
        path: PathBuf,
    },

    /// Load the dataset, build the index and print its size.
    Check,

    /// Run a single query against the dataset and print the results as JSON.
    Query {
        /// Prefix to look up.
        prefix: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from([
            "tailsearch",
            "--config",
            "a.toml",
            "--config",
            "b.toml",
            "--data",
            "names.csv",
            "query",
            "wheel",
        ]);
        assert_eq!(
            cli.config,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
        assert_eq!(cli.data, Some(PathBuf::from("names.csv")));
        assert!(matches!(cli.command, Some(Commands::Query { ref prefix }) if prefix == "wheel"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tailsearch"]);
        assert_eq!(cli.config, vec![PathBuf::from("config.toml")]);
        assert!(cli.data.is_none());
        assert!(cli.command.is_none());
    }
}
