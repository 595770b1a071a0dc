use predicates::str::contains;

mod common;
use common::{rpc, setup_test_conf};

#[test]
fn help_lists_the_attendance_commands() {
    rpc()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Clock in with your current location"))
        .stdout(contains("Clock out with your current location"))
        .stdout(contains("Show today's attendance record"));
}

#[test]
fn init_writes_the_config_file() {
    let conf = setup_test_conf("init");

    rpc()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = std::fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("server_url"));
    assert!(content.contains("geocoders"));
}

#[test]
fn init_honors_the_server_override() {
    let conf = setup_test_conf("init_server");

    rpc()
        .args(["--config", &conf, "--server", "http://localhost:9999/api", "init"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("http://localhost:9999/api"));
}

#[test]
fn config_print_shows_the_file() {
    let conf = setup_test_conf("config_print");

    rpc().args(["--config", &conf, "init"]).assert().success();

    rpc()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("geocoders"))
        .stdout(contains("fix_timeout_ms"));
}

#[test]
fn config_check_warns_about_missing_locator() {
    let conf = setup_test_conf("config_check");

    rpc().args(["--config", &conf, "init"]).assert().success();

    rpc()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("locator_command"));
}

#[test]
fn locate_fails_cleanly_without_a_location_capability() {
    let conf = setup_test_conf("locate_unsupported");

    rpc().args(["--config", &conf, "init"]).assert().success();

    // Default config has no locator command: the platform has no capability.
    rpc()
        .args(["--config", &conf, "locate"])
        .assert()
        .failure()
        .stderr(contains("No location capability"));
}

#[test]
fn declining_the_consent_prompt_cancels_the_clock_action() {
    let conf = setup_test_conf("consent_declined");

    rpc().args(["--config", &conf, "init"]).assert().success();

    rpc()
        .args(["--config", &conf, "in"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));
}

#[test]
fn clock_in_with_consent_but_no_capability_fails() {
    let conf = setup_test_conf("in_unsupported");

    rpc().args(["--config", &conf, "init"]).assert().success();

    rpc()
        .args(["--config", &conf, "in", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No location capability"));
}
