#![allow(dead_code)]

use qmsim::core::ScenarioId;
use qmsim::wizard::{NavigationResult, Step, Wizard, WizardMessage};
use std::path::Path;

/// Wizard on the Plan step with a case study loaded.
pub fn wizard_at_plan(scenario: ScenarioId) -> Wizard {
    let mut wizard = Wizard::default();
    wizard
        .dispatch(WizardMessage::SelectScenario(scenario))
        .unwrap();
    assert_eq!(wizard.next(), NavigationResult::Advanced(Step::Plan));
    wizard
}

/// Advance until the final step, asserting every move succeeds.
pub fn advance_to_analyze(wizard: &mut Wizard) {
    while !wizard.step().is_final() {
        let result = wizard.next();
        assert!(
            result.is_success(),
            "blocked at {}: {:?}",
            wizard.step(),
            result
        );
    }
}

/// `qmsim` binary isolated from any config on this machine.
pub fn qmsim(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_qmsim"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("QMSIM_CONFIG");
    cmd
}

/// Substring check over captured stdout or stderr.
pub fn contains(captured: &[u8], needle: &str) -> bool {
    String::from_utf8_lossy(captured).contains(needle)
}
