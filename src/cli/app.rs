//! Main CLI application

use crate::cli::commands;
use crate::config::{parse_config_auto, parse_config_file, Config};
use crate::error::Result;
use crate::store::StoreClient;
use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgMatches, Command};
use clap_complete::Shell;
use std::env;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed configuration
    config: Config,
}

impl App {
    /// Create a new app, discovering the configuration file automatically
    pub fn new() -> Result<Self> {
        let config = parse_config_auto()?;
        Ok(App {
            command: build_command(),
            config,
        })
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self> {
        let config = parse_config_file(&path)?;
        Ok(App {
            command: build_command(),
            config,
        })
    }

    /// Run the application with the given command line arguments
    pub fn run(self, args: Vec<String>) -> Result<()> {
        let mut command = self.command;

        let matches = match command.clone().try_get_matches_from(&args) {
            Ok(matches) => matches,
            // --help and --version surface as clap errors but are not failures
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                e.print()?;
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::DisplayVersion => {
                e.print()?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let config = self
            .config
            .with_overrides(env::var("QREM_STORE").ok(), env::var("QREM_LIST").ok());
        let client = StoreClient::new(&config.store, &config.list);

        match matches.subcommand() {
            Some(("list", _)) => commands::list(&client),
            Some(("add", sub)) => commands::add(&client, &config, &joined_text(sub, "text")),
            Some(("remove", sub)) => {
                commands::remove(&client, &config, &joined_text(sub, "target"))
            }
            Some(("completions", sub)) => commands::completions(&mut command, sub),
            // Unreachable: clap enforces subcommand_required
            _ => Ok(()),
        }
    }
}

/// Build the clap command tree
fn build_command() -> Command {
    Command::new("qrem")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Natural-language front-end for an external reminders CLI")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to qrem.yml config file")
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .visible_alias("l")
                .about("List all reminders"),
        )
        .subcommand(
            Command::new("add")
                .visible_alias("a")
                .about("Add a new reminder")
                .arg(
                    Arg::new("text")
                        .value_name("TEXT")
                        .help("Reminder text, with an optional date/time expression")
                        .num_args(1..)
                        .required(true),
                )
                .after_help("Example:\n  qrem add \"Buy groceries tomorrow at 5pm\""),
        )
        .subcommand(
            Command::new("remove")
                .visible_alias("r")
                .alias("del")
                .alias("d")
                .about("Remove a reminder by index or text")
                .arg(
                    Arg::new("target")
                        .value_name("INDEX|TEXT")
                        .help("Listing index, or text to match fuzzily")
                        .num_args(1..)
                        .required(true),
                )
                .after_help("Examples:\n  qrem remove \"groceries\"\n  qrem remove 0"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .hide(true)
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Join a trailing free-text argument back into one string
fn joined_text(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_many::<String>(name)
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run(args)
}

/// Extract the --file argument before clap parsing, so the config can shape
/// the app up front
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "--file" || args[i] == "-f") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_arg() {
        let args = vec![
            "qrem".to_string(),
            "--file".to_string(),
            "test.yml".to_string(),
        ];
        assert_eq!(extract_file_arg(&args), Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_extract_file_arg_short() {
        let args = vec!["qrem".to_string(), "-f".to_string(), "test.yml".to_string()];
        assert_eq!(extract_file_arg(&args), Some(PathBuf::from("test.yml")));
    }

    #[test]
    fn test_extract_file_arg_absent() {
        let args = vec!["qrem".to_string(), "list".to_string()];
        assert_eq!(extract_file_arg(&args), None);
    }

    #[test]
    fn test_command_accepts_aliases() {
        for args in [
            vec!["qrem", "l"],
            vec!["qrem", "a", "buy milk"],
            vec!["qrem", "r", "milk"],
            vec!["qrem", "del", "0"],
            vec!["qrem", "d", "0"],
        ] {
            let result = build_command().try_get_matches_from(args.clone());
            assert!(result.is_ok(), "args {:?} should parse", args);
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        let result = build_command().try_get_matches_from(vec!["qrem"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_requires_text() {
        let result = build_command().try_get_matches_from(vec!["qrem", "add"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_joined_text_joins_words() {
        let matches = build_command()
            .try_get_matches_from(vec!["qrem", "add", "buy", "milk"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(joined_text(sub, "text"), "buy milk");
    }
}
