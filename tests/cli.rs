// Entry dispatcher behavior, exercised through the binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn packsync() -> Command {
    let mut cmd = Command::cargo_bin("packsync").unwrap();
    // keep the host pipeline's environment out of the picture
    for key in ["INPUT_ACTION", "INPUT_API", "INPUT_WEB_TOKEN"] {
        cmd.env_remove(key);
    }
    cmd.env_remove("GITHUB_EVENT_NAME");
    cmd.env_remove("GITHUB_EVENT_PATH");
    cmd
}

#[test]
fn unrecognized_action_fails_immediately() {
    packsync()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized action 'deploy'"));
}

#[test]
fn missing_action_input_fails() {
    packsync()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing required pipeline input 'action'",
        ));
}

#[test]
fn action_falls_back_to_pipeline_input() {
    packsync()
        .env("INPUT_ACTION", "deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized action 'deploy'"));
}

#[test]
fn web_action_requires_api_and_token_before_any_network() {
    packsync()
        .arg("web")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing required pipeline input 'api'",
        ));

    packsync()
        .arg("web")
        .env("INPUT_API", "http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "missing required pipeline input 'web_token'",
        ));
}
