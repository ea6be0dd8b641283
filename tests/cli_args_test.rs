//! Argument parsing tests

use clap::Parser;

use dockwrap::cli::args::{Commands, ReleaseCommands};
use dockwrap::cli::commands::join_args;
use dockwrap::cli::Cli;
use dockwrap::config::OutputFormat;

#[test]
fn given_docker_args_with_flags_when_parse_then_collected_verbatim() {
    let cli = Cli::try_parse_from(["dockwrap", "docker", "ps", "-a", "--no-trunc"]).unwrap();

    match cli.command {
        Some(Commands::Docker { args }) => {
            assert_eq!(args, vec!["ps", "-a", "--no-trunc"]);
            assert_eq!(join_args(&args), "ps -a --no-trunc");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_compose_up_when_parse_then_compose_command() {
    let cli = Cli::try_parse_from(["dockwrap", "compose", "up", "-d"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Compose { ref args }) if args == &["up", "-d"]
    ));
}

#[test]
fn given_docker_without_args_when_parse_then_error() {
    assert!(Cli::try_parse_from(["dockwrap", "docker"]).is_err());
}

#[test]
fn given_leading_flags_when_parse_then_verbosity_and_output_set() {
    let cli = Cli::try_parse_from(["dockwrap", "-vv", "--output", "text", "check"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.output, Some(OutputFormat::Text));
    assert!(matches!(cli.command, Some(Commands::Check)));
}

#[test]
fn given_compose_file_flag_when_parse_then_forwarded_to_compose() {
    // Act
    let cli =
        Cli::try_parse_from(["dockwrap", "compose", "-f", "prod.yml", "up", "-d"]).unwrap();

    // Assert
    assert_eq!(cli.output, None);
    match cli.command {
        Some(Commands::Compose { args }) => {
            assert_eq!(args, vec!["-f", "prod.yml", "up", "-d"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_compose_short_c_when_parse_then_not_taken_as_config() {
    let cli = Cli::try_parse_from(["dockwrap", "compose", "-c", "x", "up"]).unwrap();

    assert!(cli.config.is_none());
    assert!(matches!(
        cli.command,
        Some(Commands::Compose { ref args }) if args == &["-c", "x", "up"]
    ));
}

#[test]
fn given_docker_version_flag_when_parse_then_forwarded() {
    let cli = Cli::try_parse_from(["dockwrap", "docker", "-v"]).unwrap();

    assert_eq!(cli.verbose, 0);
    assert!(matches!(
        cli.command,
        Some(Commands::Docker { ref args }) if args == &["-v"]
    ));
}

#[test]
fn given_docker_format_flag_when_parse_then_forwarded() {
    let cli =
        Cli::try_parse_from(["dockwrap", "-o", "json", "docker", "ps", "--format", "{{.ID}}"])
            .unwrap();

    assert_eq!(cli.output, Some(OutputFormat::Json));
    assert!(matches!(
        cli.command,
        Some(Commands::Docker { ref args }) if args == &["ps", "--format", "{{.ID}}"]
    ));
}

#[test]
fn given_releases_show_when_parse_then_distro_captured() {
    let cli = Cli::try_parse_from(["dockwrap", "releases", "show", "ubuntu"]).unwrap();

    match cli.command {
        Some(Commands::Releases {
            command: ReleaseCommands::Show { distro },
        }) => assert_eq!(distro, "ubuntu"),
        other => panic!("unexpected command: {other:?}"),
    }
}
