//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::RegistrationService;
use crate::application::AnimalReport;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::session::{kind_summary, Session};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{capabilities_for, AnimalKind};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Session) => cmd_session(&mut load_container(cli)?),
        Some(Commands::Show { animals }) => {
            cmd_show(&mut load_container(cli)?.registration, animals)
        }
        Some(Commands::Kinds) => {
            cmd_kinds();
            Ok(())
        }
        Some(Commands::Config { command }) => {
            cmd_config(&load_container(cli)?.settings, command)
        }
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
    }
}

fn load_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(cli.config_file.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

fn cmd_session(container: &mut ServiceContainer) -> CliResult<()> {
    let ServiceContainer {
        settings,
        console,
        registration,
    } = container;
    Session::new(&**settings, registration, console.as_mut()).run()?;
    Ok(())
}

#[instrument(skip(service))]
fn cmd_show(service: &mut RegistrationService, animals: &[String]) -> CliResult<()> {
    for report in register_specs(service, animals)? {
        print!("{report}");
    }
    Ok(())
}

fn cmd_kinds() {
    for kind in AnimalKind::ALL {
        output::header(&kind_summary(kind));
        for cap in capabilities_for(kind) {
            output::detail(cap.phrase(kind));
        }
    }
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("no config directory on this platform".into())),
        },
    }
    Ok(())
}

/// Split `NAME:AGE:KIND` from the right, so names may contain colons.
pub fn parse_animal_spec(spec: &str) -> CliResult<(&str, &str, &str)> {
    let mut parts = spec.rsplitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(kind), Some(age), Some(name)) => Ok((name, age, kind)),
        _ => Err(CliError::InvalidArgs(format!(
            "expected NAME:AGE:KIND, got {spec:?}"
        ))),
    }
}

/// Register every spec in order and return the full report list.
///
/// Stops at the first rejected animal.
pub fn register_specs(
    service: &mut RegistrationService,
    specs: &[String],
) -> CliResult<Vec<AnimalReport>> {
    for spec in specs {
        let (name, age, kind) = parse_animal_spec(spec)?;
        service.register(name, age, kind)?;
    }
    Ok(service.describe_all())
}
