use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// `0.3.0` on release builds, `0.3.0 (abc1234, 2026-01-15 14:30)` otherwise.
fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let pkg = env!("CARGO_PKG_VERSION");
        match (env!("IS_RELEASE"), env!("GIT_HASH")) {
            ("true", _) | (_, "") => pkg.to_string(),
            (_, hash) => format!("{} ({}, {})", pkg, hash, env!("GIT_COMMIT_DATE")),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pointcollector", version = version())]
#[command(about = "Keep score for a set of teams", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to save teams to and load them from
    #[arg(short, long, global = true, env = "POINTCOLLECTOR_FILE")]
    pub file: Option<PathBuf>,

    /// Draw charts without animation
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbose logging to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive command prompt (default)
    Prompt,

    /// Print the saved teams
    #[command(alias = "ls")]
    Show {
        /// Order by points, highest first
        #[arg(short, long)]
        sorted: bool,
    },

    /// Print the sum of all saved points
    Total,

    /// Draw a bar chart of the saved teams
    Chart,

    /// Print the effective configuration
    Config {
        /// Also write it to pointcollector.json in the current directory
        #[arg(long)]
        write: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_prompt() {
        let cli = Cli::try_parse_from(["pointcollector"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pointcollector", "show", "--sorted", "-f", "x.json", "-vv"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Show { sorted: true }));
        assert_eq!(cli.file, Some(PathBuf::from("x.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn ls_is_alias_for_show() {
        let cli = Cli::try_parse_from(["pointcollector", "ls"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Show { sorted: false }));
    }
}
