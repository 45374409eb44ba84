//! Integration tests for `--debug`: failures reach the inspection facility
//! exactly once and are then re-raised unchanged, whatever their origin.

use bearlint::cli::execute;
use bearlint::debug::PassThrough;
use bearlint::error::LintError;
use bearlint::modes::Modes;
use std::panic::{self, AssertUnwindSafe};

use crate::integration::{
    bear_test_registry, parse_cli, prepare_file, FailingJsonMode, JsonModeError,
    RaiseTestError,
};

#[test]
fn test_bear_requirements_missing_launches_inspection() {
    let (dir, file) = prepare_file(&["#fixme  "]);
    let file = file.to_string_lossy();
    let cli = parse_cli(&dir, &["--debug", "-f", file.as_ref(), "-b", "ErrorTestBear"]);
    let facility = PassThrough::new();

    let err = execute(&cli, &bear_test_registry(), &Modes::default(), &facility).unwrap_err();

    assert_eq!(
        err.to_string(),
        "The bear ErrorTestBear does not fulfill all requirements. \
         'I_do_not_exist' is not installed."
    );
    assert!(matches!(
        err.downcast_ref::<LintError>(),
        Some(LintError::RequirementsNotMet { .. })
    ));
    assert_eq!(facility.calls(), 1);
}

#[test]
fn test_bear_run_raises_launches_inspection() {
    let (dir, file) = prepare_file(&["#fixme  "]);
    let file = file.to_string_lossy();
    let cli = parse_cli(&dir, &["--debug", "-f", file.as_ref(), "-b", "RaiseTestBear"]);
    let facility = PassThrough::new();

    let err = execute(&cli, &bear_test_registry(), &Modes::default(), &facility).unwrap_err();

    assert_eq!(err.to_string(), "That's all the RaiseTestBear can do.");
    assert!(err.downcast_ref::<RaiseTestError>().is_some());
    assert_eq!(facility.calls(), 1);
}

#[test]
fn test_json_mode_failure_launches_inspection() {
    let (dir, file) = prepare_file(&["#fixme  "]);
    let file = file.to_string_lossy();
    // RaiseTestBear would fail too; the mode's failure is what escapes.
    let cli = parse_cli(
        &dir,
        &["--debug", "--json", "-f", file.as_ref(), "-b", "RaiseTestBear"],
    );
    let modes = Modes::default().with_json(FailingJsonMode);
    let facility = PassThrough::new();

    let err = execute(&cli, &bear_test_registry(), &modes, &facility).unwrap_err();

    assert_eq!(err.to_string(), "Mocked mode_json fails.");
    assert!(err.downcast_ref::<JsonModeError>().is_some());
    assert!(err.downcast_ref::<RaiseTestError>().is_none());
    assert_eq!(facility.messages(), vec!["Mocked mode_json fails.".to_string()]);
}

#[test]
fn test_without_debug_failure_is_not_inspected() {
    let (dir, file) = prepare_file(&["#fixme  "]);
    let file = file.to_string_lossy();
    let cli = parse_cli(&dir, &["-f", file.as_ref(), "-b", "RaiseTestBear"]);
    let facility = PassThrough::new();

    let err = execute(&cli, &bear_test_registry(), &Modes::default(), &facility).unwrap_err();

    assert_eq!(err.to_string(), "That's all the RaiseTestBear can do.");
    assert_eq!(facility.calls(), 0);
}

#[test]
fn test_successful_debug_run_is_not_inspected() {
    let (dir, file) = prepare_file(&["#fixme  "]);
    let file = file.to_string_lossy();
    let cli = parse_cli(
        &dir,
        &["--debug", "--json", "-f", file.as_ref(), "-b", "KeywordBear"],
    );
    let facility = PassThrough::new();

    let outcome = execute(&cli, &bear_test_registry(), &Modes::default(), &facility).unwrap();

    assert!(outcome.has_results);
    assert_eq!(outcome.exit_code(), 1);
    let value: serde_json::Value =
        serde_json::from_str(outcome.rendered.as_deref().unwrap()).unwrap();
    assert_eq!(value["results"]["cli"][0]["origin"], "KeywordBear");
    assert_eq!(facility.calls(), 0);
}

#[test]
fn test_unknown_bear_launches_inspection() {
    let (dir, file) = prepare_file(&["clean"]);
    let file = file.to_string_lossy();
    let cli = parse_cli(&dir, &["--debug", "-f", file.as_ref(), "-b", "GhostBear"]);
    let facility = PassThrough::new();

    let err = execute(&cli, &bear_test_registry(), &Modes::default(), &facility).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LintError>(),
        Some(LintError::UnknownBear(name)) if name == "GhostBear"
    ));
    assert_eq!(facility.calls(), 1);
}

#[test]
fn test_panicking_bear_launches_inspection_and_keeps_unwinding() {
    let (dir, file) = prepare_file(&["clean"]);
    let file_arg = file.to_string_lossy().into_owned();
    let cli = parse_cli(&dir, &["--debug", "-f", file_arg.as_str(), "-b", "PanicTestBear"]);
    let facility = PassThrough::new();
    let registry = bear_test_registry();
    let modes = Modes::default();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        execute(&cli, &registry, &modes, &facility)
    }));

    assert!(outcome.is_err());
    assert_eq!(facility.calls(), 1);
    assert_eq!(
        facility.messages()[0],
        format!("PanicTestBear cannot read {}", file.display())
    );
}
