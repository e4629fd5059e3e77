use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};
use crate::compare::ComparisonMode;

/// Compare "old" and "new" directories. Delete files from "old" which are
/// identical in "new".
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory to prune; symlinked directories inside it are neither descended nor pruned
    pub old: PathBuf,
    /// Directory holding the copies to compare against; may not exist
    pub new: PathBuf,

    /// Delete matched files and the directories they leave empty
    #[clap(short = 'd', long = "delete")]
    pub delete: bool,

    #[clap(long, short, default_value = "info", value_enum)]
    pub log_level: LogLevel,

    /// How the contents of equally sized files are compared
    #[clap(long, short, default_value = "bytes", value_enum)]
    pub compare: ComparisonMode,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_a_dry_run() {
        let cli = Cli::try_parse_from(["treeprune", "old", "new"]).unwrap();

        assert_eq!(cli.old, PathBuf::from("old"));
        assert_eq!(cli.new, PathBuf::from("new"));
        assert!(!cli.delete);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.compare, ComparisonMode::Bytes);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "treeprune",
            "-d",
            "--compare",
            "checksum",
            "-l",
            "silent",
            "--color",
            "never",
            "old",
            "new",
        ])
        .unwrap();

        assert!(cli.delete);
        assert_eq!(cli.compare, ComparisonMode::Checksum);
        assert_eq!(cli.log_level, LogLevel::Silent);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn both_roots_are_required() {
        let result = Cli::try_parse_from(["treeprune", "old"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
