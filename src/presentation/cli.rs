//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --bin-dir, --inc-dir)
//!   are inherited by all subcommands
//! - Omitted `switch` arguments are asked for interactively
//! - Program names are taken as plain strings and parsed by the command, so
//!   an unknown name is reported like any other error (exit 1, JSON event)

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{Arg, Command, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::value_objects::Program;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tt - Tarantool binaries manager
#[derive(Parser, Debug)]
#[command(name = "tt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./tt.toml, then ~/.config/tt/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding installed program versions
    #[arg(long, global = true, value_name = "PATH")]
    pub bin_dir: Option<PathBuf>,

    /// Directory holding installed headers
    #[arg(long, global = true, value_name = "PATH")]
    pub inc_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage installed binaries
    #[command(subcommand)]
    Binaries(BinariesCommand),

    /// Remove installed versions of a program
    #[command(after_help = "Without VERSION every installed version is removed.")]
    Uninstall {
        /// Program to remove (tarantool, tarantool-ee, tt, tcm, tarantool-dev)
        #[arg(value_parser = ProgramName::all(), hide_possible_values = true)]
        program: String,

        /// Version to remove
        version: Option<String>,
    },

    /// Print a shell completion script to stdout
    #[command(after_help = "Example:\n  tt completions bash > ~/.local/share/bash-completion/completions/tt")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum BinariesCommand {
    /// Switch to an installed binary
    #[command(after_help = "Examples:\n  \
        tt binaries switch                     choose program and version interactively\n  \
        tt binaries switch tarantool           choose the version interactively\n  \
        tt binaries switch tarantool 2.10.4")]
    Switch {
        /// Program to switch (tarantool, tarantool-ee, tt, tcm)
        #[arg(value_parser = ProgramName::managed(), hide_possible_values = true)]
        program: Option<String>,

        /// Version to activate
        version: Option<String>,
    },

    /// Show a list of installed binaries and their versions
    List,
}

/// Value parser for program arguments.
///
/// Accepts any token and leaves validation to `Program::parse`; the known
/// names (with aliases) are exposed as possible values for shell completion.
#[derive(Debug, Clone, Copy)]
pub struct ProgramName {
    programs: &'static [Program],
}

impl ProgramName {
    /// Programs `binaries switch` works with
    pub fn managed() -> Self {
        Self {
            programs: &Program::MANAGED,
        }
    }

    /// Programs `uninstall` works with, including the development build
    pub fn all() -> Self {
        Self {
            programs: &Program::ALL,
        }
    }
}

impl TypedValueParser for ProgramName {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(self.programs.iter().map(|program| {
            PossibleValue::new(program.as_str())
                .help(program.description())
                .aliases(program.aliases().iter().copied())
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn switch_arguments_are_optional() {
        let cli = Cli::try_parse_from(["tt", "binaries", "switch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Binaries(BinariesCommand::Switch {
                program: None,
                version: None
            })
        ));
    }

    #[test]
    fn program_alias_is_accepted() {
        let cli =
            Cli::try_parse_from(["tt", "binaries", "switch", "tarantool-ce", "2.10.4"]).unwrap();
        match cli.command {
            Commands::Binaries(BinariesCommand::Switch { program, version }) => {
                assert_eq!(program.as_deref(), Some("tarantool-ce"));
                assert_eq!(version.as_deref(), Some("2.10.4"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn unknown_program_reaches_the_command() {
        let cli = Cli::try_parse_from(["tt", "uninstall", "redis"]).unwrap();
        match cli.command {
            Commands::Uninstall { program, version } => {
                assert_eq!(program, "redis");
                assert_eq!(version, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn program_names_are_offered_for_completion() {
        let names: Vec<String> = ProgramName::all()
            .possible_values()
            .unwrap()
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["tarantool", "tarantool-ee", "tt", "tcm", "tarantool-dev"]
        );

        let managed = ProgramName::managed().possible_values().unwrap().count();
        assert_eq!(managed, 4);
    }

    #[test]
    fn completion_script_lists_programs() {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        clap_complete::generate(Shell::Bash, &mut cmd, "tt", &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("binaries"));
        assert!(script.contains("tarantool-ee"));
        assert!(script.contains("tarantool-dev"));
    }

    #[test]
    fn completions_takes_a_shell() {
        let cli = Cli::try_parse_from(["tt", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Zsh }
        ));
        assert!(Cli::try_parse_from(["tt", "completions", "cmd"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "tt", "binaries", "list", "--json", "-vv", "--bin-dir", "/b", "--color", "never",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.bin_dir, Some(PathBuf::from("/b")));
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
