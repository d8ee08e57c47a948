//! `space watch` / `report watch` stream one snapshot per change.

use anyhow::{Context, Result};
use noya_testing::TestWorld;
use noya_testing::process::BackgroundProcess;
use std::io::{BufRead, BufReader};
use std::sync::mpsc;
use std::time::Duration;

const LINE_TIMEOUT: Duration = Duration::from_secs(10);

fn spawn_watch(
    world: &TestWorld,
    args: &[&str],
) -> Result<(BackgroundProcess, mpsc::Receiver<String>)> {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_noya"));
    cmd.arg("--data-dir")
        .arg(world.data_dir())
        .args(args)
        .args(["--format", "json"])
        .env_remove("NOYA_PATH")
        .env_remove("RUST_LOG");

    let mut proc = BackgroundProcess::spawn_piped(cmd)?;
    let stdout = proc.stdout().context("watch process has no stdout")?;

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    Ok((proc, rx))
}

fn next_snapshot(rx: &mpsc::Receiver<String>) -> Result<serde_json::Value> {
    let line = rx
        .recv_timeout(LINE_TIMEOUT)
        .context("timed out waiting for a watch snapshot")?;
    Ok(serde_json::from_str(&line)?)
}

#[test]
fn test_space_watch_count_one_prints_current_list() -> Result<()> {
    let world = TestWorld::new();
    world.signup("Ada", "ada@example.com")?;
    world.create_space("Thesis")?;

    let result = world.run_json(&["space", "watch", "--count", "1"])?;
    assert!(result.success(), "{}", result.stderr());

    let lines = result.json_lines()?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["content"]["spaces"][0]["name"], "Thesis");

    Ok(())
}

#[test]
fn test_space_watch_sees_writes_from_other_processes() -> Result<()> {
    let world = TestWorld::new().with_fast_watch();
    world.signup("Ada", "ada@example.com")?;

    let (mut proc, rx) = spawn_watch(&world, &["space", "watch", "--count", "2"])?;

    let initial = next_snapshot(&rx)?;
    assert_eq!(initial["content"]["spaces"].as_array().map(Vec::len), Some(0));

    world.create_space("Fresh")?;

    let updated = next_snapshot(&rx)?;
    assert_eq!(updated["content"]["spaces"][0]["name"], "Fresh");

    let status = proc.wait_timeout(LINE_TIMEOUT)?;
    assert!(status.is_some_and(|s| s.success()));

    Ok(())
}

#[test]
fn test_report_watch_tracks_its_space() -> Result<()> {
    let world = TestWorld::new().with_fast_watch();
    world.signup("Ada", "ada@example.com")?;
    let space = world.create_space("Thesis")?;

    let (mut proc, rx) = spawn_watch(&world, &["report", "watch", &space, "--count", "2"])?;

    let initial = next_snapshot(&rx)?;
    assert_eq!(initial["content"]["reports"].as_array().map(Vec::len), Some(0));

    world.add_report(&space, "first result", "2024-05-01")?;

    let updated = next_snapshot(&rx)?;
    assert_eq!(updated["content"]["reports"][0]["progress"], "first result");

    let status = proc.wait_timeout(LINE_TIMEOUT)?;
    assert!(status.is_some_and(|s| s.success()));

    Ok(())
}

#[test]
fn test_report_watch_on_unknown_space_fails() -> Result<()> {
    let world = TestWorld::new();
    world.signup("Ada", "ada@example.com")?;

    let result = world.run(&["report", "watch", "does-not-exist", "--count", "1"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Not found"));

    Ok(())
}
