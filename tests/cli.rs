use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cupmove() -> Command {
    Command::cargo_bin("cupmove").unwrap()
}

fn expected_lines(root: &str) -> Vec<String> {
    ["cup3\\cup2", "cup2\\cup1", "cup1\\ball.txt"]
        .iter()
        .map(|src| format!("move \"{root}\\{src}\" \"{root}\""))
        .collect()
}

#[test]
fn test_missing_root_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    cupmove()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("move \"").not());

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_shell_mode_echoes_three_commands_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("my game").to_str().unwrap().to_string();

    let output = cupmove()
        .args(["--root", &root, "--delay-ms", "0"])
        .output()
        .unwrap();

    // `move` does not exist here, yet every action is attempted and the exit is clean
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, expected_lines(&root));
}

#[test]
fn test_native_mode_unpacks_the_cups() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let innermost = root.join("cup3").join("cup2").join("cup1");
    fs::create_dir_all(&innermost).unwrap();
    fs::write(innermost.join("ball.txt"), "ball").unwrap();

    cupmove()
        .args(["-r", root.to_str().unwrap(), "--mode", "native", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ball.txt"));

    assert_eq!(fs::read_to_string(root.join("ball.txt")).unwrap(), "ball");
    assert!(root.join("cup1").is_dir());
    assert!(root.join("cup2").is_dir());
    assert!(!root.join("cup3").join("cup2").exists());
}

#[test]
fn test_native_mode_keeps_going_after_failures() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let output = cupmove()
        .args(["-r", &root, "--mode", "native", "--delay-ms", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected_lines(&root));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed"));
}

#[test]
fn test_rejects_unknown_mode() {
    cupmove()
        .args(["-r", "R", "--mode", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("teleport"));
}
