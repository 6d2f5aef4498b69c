pub mod rules;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::domain::model::RankingPolicy;
    use crate::utils::error::Result;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fair-turns")]
    #[command(about = "Fair rotating positions and standings for a list of names")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Directory holding the counters file (overrides store.path)
        #[arg(long)]
        pub store_path: Option<String>,

        /// Ranking policy (overrides ranking.policy)
        #[arg(long, value_enum)]
        pub policy: Option<RankingPolicy>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Assign positions to the names in the input (one per line)
        Assign {
            /// Read names from this file instead of stdin
            #[arg(short, long)]
            input: Option<PathBuf>,
        },
        /// Show cumulative standings
        Leaderboard,
        /// Delete all stored counters
        Reset {
            /// Confirm that the counters may be deleted
            #[arg(long)]
            yes: bool,
        },
    }

    impl CliConfig {
        /// The file configuration (or defaults) with command-line overrides applied.
        pub fn resolve(&self) -> Result<TomlConfig> {
            let mut config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            if let Some(store_path) = &self.store_path {
                tracing::debug!("Store path overridden to: {}", store_path);
                config.store.path = store_path.clone();
            }
            if let Some(policy) = self.policy {
                tracing::debug!("Ranking policy overridden to: {}", policy);
                config.ranking.policy = policy;
            }

            Ok(config)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::ports::ConfigProvider;

        #[test]
        fn test_parse_assign_with_overrides() {
            let cli = CliConfig::parse_from([
                "fair-turns",
                "--policy",
                "input-order-points",
                "--store-path",
                "/tmp/turns",
                "assign",
                "--input",
                "names.txt",
            ]);

            assert!(matches!(cli.command, Command::Assign { input: Some(_) }));
            let config = cli.resolve().unwrap();
            assert_eq!(config.ranking_policy(), RankingPolicy::InputOrderPoints);
            assert_eq!(config.store_path(), "/tmp/turns");
        }

        #[test]
        fn test_reset_requires_flag_to_confirm() {
            let cli = CliConfig::parse_from(["fair-turns", "reset"]);
            assert!(matches!(cli.command, Command::Reset { yes: false }));

            let cli = CliConfig::parse_from(["fair-turns", "reset", "--yes"]);
            assert!(matches!(cli.command, Command::Reset { yes: true }));
        }

        #[test]
        fn test_defaults_without_config_file() {
            let cli = CliConfig::parse_from(["fair-turns", "leaderboard"]);
            let config = cli.resolve().unwrap();
            assert_eq!(config.ranking_policy(), RankingPolicy::LeastUsedFirst);
        }
    }
}
