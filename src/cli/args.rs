//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Zoo management desk: register animals by kind and list their behaviors
#[derive(Parser, Debug)]
#[command(name = "zoodesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (repeat for more: -d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(
        short = 'c',
        long = "config",
        env = "ZOODESK_CONFIG",
        global = true,
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive registration session (default)
    Session,

    /// Register animals and print their behaviors
    Show {
        /// Animal as NAME:AGE:KIND (repeatable, registered in order)
        #[arg(short, long = "animal", value_name = "NAME:AGE:KIND", required = true)]
        animals: Vec<String>,
    },

    /// List animal kinds and their capabilities
    Kinds,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template
    Template,

    /// Show config paths
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_repeated_animal_flags_when_parsing_then_kept_in_order() {
        let cli = Cli::parse_from(["zoodesk", "show", "-a", "Leo:5:mammal", "-a", "Tweety:1:bird"]);
        match cli.command {
            Some(Commands::Show { animals }) => {
                assert_eq!(animals, ["Leo:5:mammal", "Tweety:1:bird"])
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_no_subcommand_when_parsing_then_command_is_none() {
        let cli = Cli::parse_from(["zoodesk", "-dd"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.debug, 2);
    }
}
