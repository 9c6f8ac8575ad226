//! End-to-end tests of the `clawup` binary against fake `openclaw`/`npm`
//! executables.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Fake tools reporting `installed` locally and `remote` on the registry.
    /// A `None` remote makes the registry query fail.
    fn new(installed: &str, remote: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");

        write_script(
            &dir.path().join("openclaw"),
            &format!(
                "echo \"openclaw $*\" >> {log}\ncase \"$1\" in\n  --version) echo \"{installed}\" ;;\nesac\n",
                log = log.display()
            ),
        );
        let npm_body = match remote {
            Some(v) => format!("echo \"npm $*\" >> {log}\necho \"{v}\"\n", log = log.display()),
            None => format!(
                "echo \"npm $*\" >> {log}\necho \"E404\" >&2\nexit 1\n",
                log = log.display()
            ),
        };
        write_script(&dir.path().join("npm"), &npm_body);

        Self { dir }
    }

    fn state_file(&self) -> PathBuf {
        self.dir.path().join("memory").join("heartbeat-state.json")
    }

    fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn clawup(&self, args: &[&str]) -> Output {
        let openclaw = self.dir.path().join("openclaw");
        let npm = self.dir.path().join("npm");

        Command::new(env!("CARGO_BIN_EXE_clawup"))
            .args(args)
            .arg("--state-file")
            .arg(self.state_file())
            .arg("--version-command")
            .arg(format!("{} --version", openclaw.display()))
            .arg("--registry-command")
            .arg(format!("{} view {{package}} version", npm.display()))
            .arg("--trigger-command")
            .arg(format!("{} gateway update.run", openclaw.display()))
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, format!("#!/bin/sh\n{body}")).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn heartbeat_announces_once_then_stays_quiet() {
    let ws = Workspace::new("1.2.0", Some("1.3.0"));

    let first = ws.clawup(&["heartbeat"]);
    assert!(first.status.success());
    assert_eq!(
        stdout(&first),
        "🚨 **UPDATE DETECTED**\nCurrent: 1.2.0 | New: 1.3.0\nInitiating auto-update sequence...\n"
    );
    assert!(ws.calls().contains(&"openclaw gateway update.run".to_string()));

    let second = ws.clawup(&["heartbeat"]);
    assert!(second.status.success());
    assert_eq!(stdout(&second), "");
    assert_eq!(ws.calls().len(), 3);
}

#[test]
fn heartbeat_swallows_registry_failure() {
    let ws = Workspace::new("1.2.0", None);

    let output = ws.clawup(&["heartbeat"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");

    // The attempt still counts against the throttle window.
    assert!(ws.state_file().exists());
}

#[test]
fn check_reports_up_to_date() {
    let ws = Workspace::new("1.2.0", Some("1.2.0"));

    let output = ws.clawup(&["check"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Current: 1.2.0\nRemote:  1.2.0\n"));
    assert!(out.ends_with("System is up to date.\n"));
    assert!(!ws.state_file().exists());
}

#[test]
fn check_fails_when_registry_is_unreachable() {
    let ws = Workspace::new("1.2.0", None);

    let output = ws.clawup(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Could not determine versions."));
    assert!(!ws.calls().iter().any(|c| c.contains("gateway")));
}

#[test]
fn check_triggers_update_on_mismatch() {
    let ws = Workspace::new("1.2.0", Some("1.3.0"));

    let output = ws.clawup(&["check"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Update available! Initiating update sequence..."));
    assert_eq!(
        ws.calls().last().map(String::as_str),
        Some("openclaw gateway update.run")
    );
}

#[test]
fn invalid_configuration_exits_with_ex_config() {
    let ws = Workspace::new("1.2.0", Some("1.2.0"));

    let output = ws.clawup(&["check", "--throttle-secs", "0"]);
    assert_eq!(output.status.code(), Some(78));
    assert!(ws.calls().is_empty());
}

#[test]
fn state_reset_makes_heartbeat_due_again() {
    let ws = Workspace::new("1.2.0", Some("1.2.0"));

    assert!(ws.clawup(&["heartbeat"]).status.success());
    let show = ws.clawup(&["state", "show"]);
    assert!(stdout(&show).contains("throttled, due in"));

    assert!(ws.clawup(&["state", "reset"]).status.success());
    let show = ws.clawup(&["state", "show"]);
    assert!(stdout(&show).contains("due now"));

    assert!(ws.clawup(&["heartbeat"]).status.success());
    assert_eq!(ws.calls().len(), 4);
}

fn clawup_without_state_file(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clawup"))
        .args(args)
        .current_dir(dir)
        .env("CLAWUP_WORKSPACE", "   ")
        .env_remove("CLAWUP_STATE_FILE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn heartbeat_skips_quietly_without_workspace() {
    let dir = TempDir::new().unwrap();

    let output = clawup_without_state_file(dir.path(), &["heartbeat"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
}

#[test]
fn check_reports_missing_workspace() {
    let dir = TempDir::new().unwrap();

    let output = clawup_without_state_file(dir.path(), &["check"]);
    assert_eq!(output.status.code(), Some(78));
    assert!(stderr(&output).contains("Workspace unavailable"));
}

#[test]
fn heartbeat_still_reports_invalid_settings() {
    let ws = Workspace::new("1.2.0", Some("1.2.0"));

    let output = ws.clawup(&["heartbeat", "--throttle-secs", "0"]);
    assert_eq!(output.status.code(), Some(78));
    assert!(ws.calls().is_empty());
}
