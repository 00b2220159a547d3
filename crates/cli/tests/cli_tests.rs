use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup_terragrunt() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_setup-terragrunt"));
    cmd.env_remove("TERRAGRUNT_VERSION")
        .env_remove("SETUP_TERRAGRUNT_TRANSPORT")
        .env_remove("SETUP_TERRAGRUNT_BASE_URL")
        .env_remove("GITHUB_PATH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    setup_terragrunt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--terragrunt-version"))
        .stdout(predicate::str::contains("--transport"));
}

#[test]
fn test_unknown_transport_is_usage_error() {
    setup_terragrunt()
        .args(["--transport", "tarball"])
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_host_fails() {
    let temp = TempDir::new().unwrap();
    setup_terragrunt()
        .args([
            "--base-url",
            "http://127.0.0.1:9/releases",
            "--os",
            "linux",
            "--arch",
            "x64",
            "--temp-dir",
        ])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("http://127.0.0.1:9/releases/v0.38.7/terragrunt_linux_amd64"));
}
