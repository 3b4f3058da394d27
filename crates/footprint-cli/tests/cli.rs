use assert_cmd::Command;
use predicates::prelude::*;

fn footprint() -> Command {
    Command::cargo_bin("footprint").unwrap()
}

#[test]
fn no_argument_prints_usage() {
    footprint()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: footprint <ip | username>"));
}

#[test]
fn short_input_is_rejected() {
    footprint()
        .arg("ab")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: input is neither a valid IP address nor a supported username",
        ))
        .stdout(predicate::str::contains("Awareness Notice").not());
}

#[test]
fn blank_input_is_rejected() {
    footprint()
        .arg("   ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: input is empty"));
}

#[test]
fn symbols_are_rejected() {
    footprint()
        .arg("!!!")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error:"));
}

#[test]
fn loopback_ip_report() {
    footprint()
        .args(["--no-color", "127.0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input Type: IP Address"))
        .stdout(predicate::str::contains("[ IP Exposure ]"))
        .stdout(predicate::str::contains("Network Type: Private IP (Local Network)"))
        .stdout(predicate::str::contains("Public IPs reveal").not())
        .stdout(predicate::str::contains("[ Awareness Notice ]"))
        .stdout(predicate::str::ends_with("It means others can see it too.\n"));
}

#[test]
fn explain_prints_before_results() {
    let output = footprint()
        .args(["--no-color", "--explain", "10.0.0.1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let explain = stdout.find("=== What This Does ===").unwrap();
    let report = stdout.find("[ IP Exposure ]").unwrap();
    assert!(explain < report);
}

#[test]
fn help_lists_flags() {
    footprint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--explain"))
        .stdout(predicate::str::contains("--details"))
        .stdout(predicate::str::contains("--concurrency"));
}

#[test]
fn huge_concurrency_is_a_usage_error() {
    footprint()
        .args(["-c", "18446744073709551615", "validuser_123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must be between 1 and 64"));
}
