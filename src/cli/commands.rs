use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lintdoc")]
#[command(version)]
#[command(about = "Derive configuration schemas from lint rule documentation")]
#[command(
    long_about = "lintdoc - Read a lint rule's markdown documentation and derive a JSON schema\n\
    for its options together with the default options.\n\n\
    Examples:\n  \
    lintdoc parse no-debugger.md                         # Schema and defaults of one rule\n  \
    lintdoc describe no-debugger.md                      # The rule's short description\n  \
    lintdoc generate --rules rules.json --docs docs/rules -o oxlint-rules.json\n  \
    oxlint --rules -f json | lintdoc generate --rules - --docs docs/rules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file to use instead of the platform default
    ///
    /// Defaults to <config dir>/lintdoc/config.toml when it exists.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the schema and default options of one rule
    ///
    /// Reads a single documentation page and prints the extracted
    /// `{schema, defaultOptions}` structure.
    Parse {
        /// Markdown documentation page, or '-' for stdin
        file: PathBuf,

        /// Output format
        #[arg(short = 'o', long = "output", default_value = "pretty")]
        output: OutputFormat,
    },

    /// Print the description paragraph of one rule
    Describe {
        /// Markdown documentation page, or '-' for stdin
        file: PathBuf,
    },

    /// Build the rules file for a whole rule listing
    ///
    /// Reads the linter's JSON rule listing, parses every rule's page from
    /// <DOCS>/<scope>/<rule>.md and writes one record per rule.
    Generate {
        /// Rule listing as printed by `oxlint --rules -f json`, or '-' for stdin
        #[arg(long = "rules", value_name = "FILE")]
        rules: PathBuf,

        /// Root of the documentation tree (overrides catalog.docs_dir)
        #[arg(long = "docs", value_name = "DIR")]
        docs: Option<PathBuf>,

        /// Rules file to write (overrides catalog.output); stdout when unset
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip rules whose documentation page is missing
        #[arg(long = "skip-missing")]
        skip_missing: bool,
    },

    /// Write a configuration file with the default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
    /// Human-readable option list
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults_to_pretty() {
        let cli = Cli::try_parse_from(["lintdoc", "parse", "rule.md"]).unwrap();
        match cli.command {
            Command::Parse { file, output } => {
                assert_eq!(file, PathBuf::from("rule.md"));
                assert_eq!(output, OutputFormat::Pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "lintdoc",
            "-vv",
            "generate",
            "--rules",
            "-",
            "--docs",
            "docs",
            "--skip-missing",
            "--config",
            "lintdoc.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("lintdoc.toml")));
        match cli.command {
            Command::Generate {
                rules,
                docs,
                output,
                skip_missing,
            } => {
                assert_eq!(rules, PathBuf::from("-"));
                assert_eq!(docs, Some(PathBuf::from("docs")));
                assert_eq!(output, None);
                assert!(skip_missing);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_requires_rules() {
        assert!(Cli::try_parse_from(["lintdoc", "generate"]).is_err());
    }
}
