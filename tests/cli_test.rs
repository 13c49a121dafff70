//! Tests for command dispatch and one-shot `show` registration

use clap::Parser;
use serial_test::serial;

use zoodesk::application::services::RegistrationService;
use zoodesk::cli::commands::{execute_command, register_specs};
use zoodesk::cli::{Cli, CliError};
use zoodesk::exitcode;

fn specs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_specs_when_registering_then_reports_in_order() {
    let mut service = RegistrationService::new();

    let reports = register_specs(&mut service, &specs(&["Leo:5:mammal", "Freddy:2:AMPHIBIAN"]))
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].to_string(), "Leo, Age: 5\nLeo makes a mammal sound.\nLeo is running.\n\n");
    assert_eq!(reports[1].behaviors.last().unwrap(), "Freddy jumps out of the water.");
}

#[test]
fn given_rejected_spec_when_registering_then_stops_with_data_error() {
    let mut service = RegistrationService::new();

    let err = register_specs(
        &mut service,
        &specs(&["Leo:5:mammal", "Rex:4:dinosaur", "Nemo:1:fish"]),
    )
    .unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert_eq!(service.registry().len(), 1);
}

#[test]
fn given_malformed_spec_when_registering_then_usage_error() {
    let mut service = RegistrationService::new();

    let err = register_specs(&mut service, &specs(&["Leo"])).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
#[serial]
fn given_broken_env_config_when_generating_completion_then_settings_not_loaded() {
    std::env::set_var("ZOODESK_CONFIRM_ADDITIONS", "maybe");
    let completion = execute_command(&Cli::parse_from(["zoodesk", "completion", "bash"]));
    let config = execute_command(&Cli::parse_from(["zoodesk", "config", "show"]));
    std::env::remove_var("ZOODESK_CONFIRM_ADDITIONS");

    assert!(completion.is_ok());
    assert_eq!(config.unwrap_err().exit_code(), exitcode::CONFIG);
}
