use crate::config::{Database, PartialConfig};
use crate::constants::{exit_codes, verbosity, IN_PLACE_INDICATOR};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Database backend for the generated project.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum DbChoice {
    /// PostgreSQL through SQLAlchemy and asyncpg.
    Postgres,
    /// No database adapter.
    None,
}

impl From<DbChoice> for Database {
    fn from(choice: DbChoice) -> Self {
        match choice {
            DbChoice::Postgres => Database::Postgres,
            DbChoice::None => Database::None,
        }
    }
}

/// Scaffold Python services with a Hexagonal/DDD layout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project.
    New(NewArgs),
}

/// Arguments of the `new` command.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Project name, a valid Python identifier. `.` scaffolds into the output directory itself.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Project description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author name.
    #[arg(short, long)]
    pub author: Option<String>,

    /// Database backend.
    #[arg(long, value_enum)]
    pub db: Option<DbChoice>,

    /// Python version of the generated project.
    #[arg(long = "python", value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Include Docker and Compose files.
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,

    /// Skip Docker and Compose files.
    #[arg(long = "no-docker", overrides_with = "docker")]
    pub no_docker: bool,

    /// Include a GitHub Actions workflow.
    #[arg(long, overrides_with = "no_ci")]
    pub ci: bool,

    /// Skip the GitHub Actions workflow.
    #[arg(long = "no-ci", overrides_with = "ci")]
    pub no_ci: bool,

    /// Include a devcontainer and VS Code launch configuration.
    #[arg(long, overrides_with = "no_devcontainer")]
    pub devcontainer: bool,

    /// Skip the devcontainer and VS Code launch configuration.
    #[arg(long = "no-devcontainer", overrides_with = "devcontainer")]
    pub no_devcontainer: bool,

    /// Never prompt; use defaults for anything not supplied.
    #[arg(short = 'y', long = "no-interactive")]
    pub non_interactive: bool,

    /// Parent directory of the generated project.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into an existing destination directory.
    #[arg(short, long)]
    pub force: bool,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(long)]
    pub answers: Option<String>,

    /// Predefined answers from a JSON file.
    #[arg(long = "answers-file", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

fn toggle(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl NewArgs {
    /// `new .` scaffolds into the output directory instead of a new subdirectory.
    pub fn is_in_place(&self) -> bool {
        self.name.as_deref() == Some(IN_PLACE_INDICATOR)
    }

    /// Options supplied on the command line, everything else left unset.
    pub fn to_partial_config(&self) -> PartialConfig {
        PartialConfig {
            name: self.name.clone().filter(|_| !self.is_in_place()),
            description: self.description.clone(),
            author: self.author.clone(),
            db: self.db.map(|db| Database::from(db).to_string()),
            python_version: self.python_version.clone(),
            docker: toggle(self.docker, self.no_docker),
            ci: toggle(self.ci, self.no_ci),
            devcontainer: toggle(self.devcontainer, self.no_devcontainer),
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_args(args: &[&str]) -> NewArgs {
        let cli = Cli::parse_from(["blueprint"].iter().chain(args));
        let Commands::New(new) = cli.command;
        new
    }

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = new_args(&["new", "demo"]);
        assert_eq!(args.name.as_deref(), Some("demo"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.force && !args.non_interactive && !args.dry_run);
        assert_eq!(args.to_partial_config(), PartialConfig {
            name: Some("demo".into()),
            ..Default::default()
        });
    }

    #[test]
    fn db_choice_converts_to_database() {
        assert_eq!(Database::from(DbChoice::Postgres), Database::Postgres);
        assert_eq!(Database::from(DbChoice::None), Database::None);
    }

    #[test]
    fn parses_full_feature_flags() {
        let cli = Cli::parse_from([
            "blueprint",
            "-vv",
            "new",
            "demo",
            "-d",
            "Orders",
            "-a",
            "Jane",
            "--db",
            "postgres",
            "--python",
            "3.12",
            "--no-docker",
            "--ci",
            "--no-devcontainer",
            "-y",
            "-o",
            "out",
            "--force",
            "--answers",
            "{\"author\":\"John\"}",
            "--answers-file",
            "answers.json",
            "--dry-run",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::New(args) = cli.command;

        assert!(args.non_interactive && args.force && args.dry_run);
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.answers.as_deref(), Some("{\"author\":\"John\"}"));
        assert_eq!(args.answers_file, Some(PathBuf::from("answers.json")));

        let partial = args.to_partial_config();
        assert_eq!(partial.description.as_deref(), Some("Orders"));
        assert_eq!(partial.author.as_deref(), Some("Jane"));
        assert_eq!(partial.db.as_deref(), Some("postgres"));
        assert_eq!(partial.python_version.as_deref(), Some("3.12"));
        assert_eq!(partial.docker, Some(false));
        assert_eq!(partial.ci, Some(true));
        assert_eq!(partial.devcontainer, Some(false));
    }

    #[test]
    fn last_toggle_wins() {
        let args = new_args(&["new", "demo", "--docker", "--no-docker"]);
        assert_eq!(args.to_partial_config().docker, Some(false));

        let args = new_args(&["new", "demo", "--no-ci", "--ci"]);
        assert_eq!(args.to_partial_config().ci, Some(true));
    }

    #[test]
    fn verbose_is_accepted_after_the_subcommand() {
        let cli = Cli::parse_from(["blueprint", "new", "demo", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn dot_means_in_place() {
        let args = new_args(&["new", "."]);
        assert!(args.is_in_place());
        assert_eq!(args.to_partial_config().name, None);
    }

    #[test]
    fn rejects_unknown_database() {
        let result = Cli::try_parse_from(["blueprint", "new", "demo", "--db", "mysql"]);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidValue);
    }
}
