use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

use nextver::cli::{run_workflow, WorkflowArgs};
use nextver::config;
use nextver::domain::Bump;
use nextver::git::GitRepository;
use nextver::ui;

#[derive(clap::Parser)]
#[command(
    name = "nextver",
    about = "Print the next semantic version based on the repository's git tags"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Consider only prefixed tags (also used to print the result)"
    )]
    prefix: Option<String>,

    #[arg(short, long, help = "Print additional information to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the app version")]
    version: bool,

    #[arg(value_enum)]
    command: Option<Command>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    /// Print the next major version
    Major,
    /// Print the next minor version
    Minor,
    /// Print the next patch version
    Patch,
    /// Print the current version
    Current,
}

impl From<Command> for Bump {
    fn from(command: Command) -> Self {
        match command {
            Command::Major => Bump::Major,
            Command::Minor => Bump::Minor,
            Command::Patch => Bump::Patch,
            Command::Current => Bump::Current,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.version {
        ui::display_app_version();
        return ExitCode::SUCCESS;
    }

    let Some(command) = args.command else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "no command has been provided",
            )
            .exit();
    };

    match run(args.config.as_deref(), args.prefix, args.verbose, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(
    config_path: Option<&str>,
    prefix: Option<String>,
    verbose: bool,
    command: Command,
) -> Result<()> {
    let config = config::load_config(config_path)
        .context("loading configuration")?
        .merge_cli(prefix, verbose);

    let repo = GitRepository::open(".")?;

    let args = WorkflowArgs {
        prefix: config.prefix.clone(),
        bump: command.into(),
    };

    let result = run_workflow(&repo, &args, |warning| {
        ui::display_boundary_warning(config.verbose, warning)
    })?;

    ui::display_diagnostic(
        config.verbose,
        &format!(
            "the current version is {:?}",
            ui::format_version(&config.prefix, &result.current)
        ),
    );
    ui::display_version(&config.prefix, &result.next);

    Ok(())
}
