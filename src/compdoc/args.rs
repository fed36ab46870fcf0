use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds.
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("COMPDOC_GIT_HASH");
    const COMMIT_DATE: &str = env!("COMPDOC_COMMIT_DATE");
    const RELEASE: &str = env!("COMPDOC_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "compdoc", version = version())]
#[command(about = "Extract component documentation metadata from a design snapshot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract metadata for the snapshot's current selection
    #[command(alias = "x")]
    Extract {
        /// Path to the document snapshot (JSON)
        snapshot: PathBuf,

        /// Print the panel message as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON-lines session over stdin/stdout
    Serve {
        /// Path to the document snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Show the effective configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write the default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extract_with_json_flag() {
        let cli = Cli::try_parse_from(["compdoc", "extract", "doc.json", "--json"]).unwrap();
        match cli.command {
            Commands::Extract { snapshot, json } => {
                assert_eq!(snapshot, PathBuf::from("doc.json"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["compdoc", "serve", "doc.json", "-v", "--config-dir", "/tmp/c"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/c")));
    }

    #[test]
    fn config_action_is_optional() {
        let cli = Cli::try_parse_from(["compdoc", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));

        let cli = Cli::try_parse_from(["compdoc", "config", "init"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: Some(ConfigAction::Init)
            }
        ));
    }

    #[test]
    fn version_starts_with_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["compdoc"]).is_err());
    }
}
