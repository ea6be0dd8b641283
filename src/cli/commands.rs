//! Command dispatch: maps parsed arguments onto services

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, ReleaseCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{NormalizedResponse, Payload, Release, Status};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, InfraResult};

/// Run the selected command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e))?;
        return Ok(exitcode::USAGE);
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
        Commands::Config { command } => config_command(cli, command),
        Commands::Docker { args } => {
            let container = build_container(cli)?;
            let response = container.docker.docker(&join_args(args))?;
            print_response(&response, output_format(cli, &container))
        }
        Commands::Compose { args } => {
            let container = build_container(cli)?;
            let response = container.docker.docker_compose(&join_args(args))?;
            print_response(&response, output_format(cli, &container))
        }
        Commands::Check => {
            let container = build_container(cli)?;
            check(&container)
        }
        Commands::Releases { command } => {
            let mut container = build_container(cli)?;
            releases_command(cli, &mut container, command)
        }
    }
}

fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings)?)
}

fn output_format(cli: &Cli, container: &ServiceContainer) -> OutputFormat {
    resolve_format(cli.output, container.settings.output)
}

/// `--output` wins over the configured format.
fn resolve_format(flag: Option<OutputFormat>, configured: OutputFormat) -> OutputFormat {
    flag.unwrap_or(configured)
}

/// Exit code after printing a response; Failure maps to UNAVAILABLE.
fn response_exit_code(status: Status) -> i32 {
    if status.is_success() {
        exitcode::OK
    } else {
        exitcode::UNAVAILABLE
    }
}

fn check_exit_code(docker: bool, compose: bool) -> i32 {
    if docker && compose {
        exitcode::OK
    } else {
        exitcode::UNAVAILABLE
    }
}

/// Join CLI arguments into one command fragment, single-quoting where the
/// shell would otherwise split or interpret an argument.
pub fn join_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| quote_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[instrument(level = "debug", skip(response))]
fn print_response(response: &NormalizedResponse, format: OutputFormat) -> CliResult<i32> {
    match format {
        OutputFormat::Json | OutputFormat::Pretty => write_json(response, format)?,
        OutputFormat::Text => {
            let line = format!("{} ({:?})", response.command, response.shape);
            if response.status.is_success() {
                output::success(&line);
            } else {
                output::failure(&line);
            }
            match &response.payload {
                Payload::Structured(records) => {
                    for record in records {
                        output::info(record);
                    }
                }
                Payload::Freeform(text) => output::info(text.trim_end()),
            }
        }
    }

    Ok(response_exit_code(response.status))
}

fn write_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> CliResult<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        _ => serde_json::to_string_pretty(value),
    }
    .map_err(|e| CliError::Usage(format!("cannot render output: {e}")))?;

    Ok(write_stdout(&rendered)?)
}

fn write_stdout(rendered: &str) -> InfraResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).map_err(|e| InfraError::io("write output", e))
}

fn check(container: &ServiceContainer) -> CliResult<i32> {
    let docker = container.docker.is_docker_set();
    let compose = container.docker.is_docker_compose_set();

    if docker {
        output::success("docker: installed");
    } else {
        output::failure("docker: not found");
    }
    if compose {
        output::success("docker-compose: installed");
    } else {
        output::warning("docker-compose not found");
    }

    Ok(check_exit_code(docker, compose))
}

fn releases_command(
    cli: &Cli,
    container: &mut ServiceContainer,
    command: &ReleaseCommands,
) -> CliResult<i32> {
    let format = output_format(cli, container);
    match command {
        ReleaseCommands::List => print_releases(container.catalog.list(), format)?,
        ReleaseCommands::Show { distro } => {
            output::info(&container.catalog.describe(distro)?);
        }
        ReleaseCommands::Add { json } => {
            let value: serde_json::Value = serde_json::from_str(json)
                .map_err(|e| CliError::InvalidArgs(format!("Request must be JSON: {e}")))?;
            container.catalog.add(value)?;
            print_releases(container.catalog.list(), format)?;
        }
    }
    Ok(exitcode::OK)
}

fn print_releases(releases: &[Release], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            output::header(&format!("{} releases", releases.len()));
            for release in releases {
                output::info(&release.summary());
            }
            Ok(())
        }
        _ => write_json(releases, format),
    }
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("cannot determine config directory".into())),
        },
    }
    Ok(exitcode::OK)
}
