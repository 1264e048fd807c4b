use assert_cmd::Command;
use predicates::prelude::*;

fn waiter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecs-service-waiter"));
    // keep the caller's environment from filling in required arguments
    cmd.env_remove("ECS_CLUSTER")
        .env_remove("ECS_SERVICES")
        .env_remove("AWS_REGION")
        .env_remove("AWS_PROFILE");
    cmd
}

#[test]
fn help_lists_arguments() {
    waiter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cluster"))
        .stdout(predicate::str::contains("--services"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn version_succeeds() {
    waiter().arg("--version").assert().success();
}

#[test]
fn missing_cluster_exits_with_one() {
    waiter()
        .args(["--services", "svc-a", "--region", "us-east-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--cluster"));
}

#[test]
fn missing_region_exits_with_one() {
    waiter()
        .args(["--cluster", "prod", "--services", "svc-a"])
        .assert()
        .code(1);
}

#[test]
fn zero_timeout_exits_with_one() {
    waiter()
        .args([
            "--cluster",
            "prod",
            "--services",
            "svc-a",
            "--region",
            "us-east-1",
            "--timeout",
            "0",
        ])
        .assert()
        .code(1);
}

#[test]
fn blank_service_list_exits_with_one_before_polling() {
    waiter()
        .args([
            "--cluster",
            "prod",
            "--services",
            " , ",
            "--region",
            "us-east-1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least one service name"));
}
