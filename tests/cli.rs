// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        self.write(name, &serde_json::to_string_pretty(value).unwrap())
    }

    /// Isolated command: no inherited GITHUB_* / INPUT_* variables and no
    /// user configuration.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("commit-gate").unwrap();
        cmd.env_clear()
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .current_dir(self.path());
        cmd
    }

    fn push_event(&self, git_ref: &str, commits: &[Value]) -> Command {
        let ids: Vec<Value> = commits.iter().map(|c| json!({ "id": c["sha"] })).collect();
        let event = self.write_json("event.json", &json!({ "ref": git_ref, "commits": ids }));
        let commits = self.write_json("commits.json", &Value::Array(commits.to_vec()));

        let mut cmd = self.cmd();
        cmd.env("GITHUB_EVENT_NAME", "push")
            .env("GITHUB_EVENT_PATH", event)
            .env("COMMIT_GATE_COMMITS", commits);
        cmd
    }

    fn pull_request_event(&self, title: &str, branch: &str, commits: &[Value]) -> Command {
        let event = self.write_json(
            "event.json",
            &json!({ "pull_request": { "number": 3, "title": title, "head": { "ref": branch } } }),
        );
        let commits = self.write_json("commits.json", &Value::Array(commits.to_vec()));

        let mut cmd = self.cmd();
        cmd.args(["check", "--event-name", "pull_request"])
            .arg("--event-path")
            .arg(event)
            .arg("--commits")
            .arg(commits);
        cmd
    }
}

fn rest_commit(sha: &str, message: &str, verified: bool) -> Value {
    json!({
        "sha": sha,
        "parents": [{ "sha": "0000000000000000000000000000000000000000" }],
        "author": { "login": "ada" },
        "committer": { "login": "ada" },
        "commit": {
            "author": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "committer": { "name": "Ada Lovelace", "email": "ada@example.com" },
            "message": message,
            "verification": { "verified": verified }
        }
    })
}

fn merge_commit(sha: &str, message: &str) -> Value {
    let mut commit = rest_commit(sha, message, false);
    commit["parents"] = json!([
        { "sha": "1111111111111111111111111111111111111111" },
        { "sha": "2222222222222222222222222222222222222222" }
    ]);
    commit
}

#[test]
fn clean_push_passes() {
    let fx = Fixture::new();
    fx.push_event(
        "refs/heads/main",
        &[rest_commit("1a2b3c4d5e6f7a8b9c0d", "feat: add login\n\nExplain it.", true)],
    )
    .assert()
    .success()
    .stdout(contains("Passed (1 commits checked)"))
    .stderr(contains("Commit hash: 1a2b3c4d5e6f7a8b9c0d"))
    .stderr(contains("Branch name: main"));
}

#[test]
fn wip_pull_request_title_fails() {
    let fx = Fixture::new();
    fx.pull_request_event("WIP", "feature/login", &[rest_commit("1a2b3c4d5e6f", "feat: x", true)])
        .args(["--re-pull-request-title", "^(feat|fix|chore): .+"])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Pull request title does not match regex"))
        .stderr(contains("1 rule violation(s) found"))
        .stderr(contains("(pull-request)"));
}

#[test]
fn inputs_from_environment() {
    let fx = Fixture::new();
    fx.push_event(
        "refs/heads/main",
        &[
            rest_commit("aaaaaaa1111111", "fix: signed", true),
            rest_commit("bbbbbbb2222222", "fix: unsigned", false),
        ],
    )
    .env("INPUT_PROHIBIT-UNSIGNED-COMMITS", "true")
    .assert()
    .failure()
    .stdout(contains("Commit has no valid signature"))
    .stderr(contains("(bbbbbbb)"))
    .stderr(contains("(aaaaaaa)").not());
}

#[test]
fn unparseable_message_aborts_without_report() {
    let fx = Fixture::new();
    fx.push_event(
        "refs/heads/main",
        &[rest_commit("ccccccc3333333", "no blank line separator", true)],
    )
    .env("INPUT_RE-COMMIT-MESSAGE-SPLIT", r"^([^\n]+)\n\n(.+)$")
    .env("INPUT_PROHIBIT-UNSIGNED-COMMITS", "true")
    .assert()
    .failure()
    .stderr(contains("does not match the split pattern"))
    .stdout(contains("Failed").not())
    .stdout(contains("Passed").not());
}

#[test]
fn invalid_pattern_is_fatal() {
    let fx = Fixture::new();
    fx.push_event("refs/heads/main", &[])
        .env("INPUT_RE-BRANCH-NAME", "([unclosed")
        .assert()
        .failure()
        .stderr(contains("re-branch-name"));
}

#[test]
fn tag_push_json_report() {
    let fx = Fixture::new();
    let output = fx
        .push_event("refs/tags/latest", &[])
        .args(["--re-tag-name", r"^v\d+\.\d+\.\d+$", "--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["failed"], true);
    assert_eq!(report["violations"][0]["identifier"], "tag");
    assert_eq!(report["violations"][0]["code"], "pattern-mismatch");
}

#[test]
fn github_annotations() {
    let fx = Fixture::new();
    fx.push_event("refs/heads/Main", &[])
        .args(["--re-branch-name", "^[a-z]+$", "--format", "github"])
        .assert()
        .failure()
        .stdout(contains("::error::Branch name does not match regex (branch)"));
}

#[test]
fn config_file_is_discovered() {
    let fx = Fixture::new();
    fx.write(
        "commit-gate.toml",
        "commit-message-subject-min-length = 10\n",
    );
    fx.push_event(
        "refs/heads/main",
        &[rest_commit("ddddddd4444444", "fix bug", true)],
    )
    .assert()
    .failure()
    .stdout(contains("Commit message subject is too short"));
}

#[test]
fn merge_commit_is_exempt() {
    let fx = Fixture::new();
    fx.push_event("refs/heads/main", &[merge_commit("eeeeeee5555555", "x")])
        .env("INPUT_PROHIBIT-UNSIGNED-COMMITS", "true")
        .env("INPUT_COMMIT-MESSAGE-SUBJECT-MIN-LENGTH", "10")
        .assert()
        .success()
        .stdout(contains("Passed (0 commits checked)"))
        .stderr(contains("Merge commit detected: eeeeeee5555555"))
        .stderr(contains("Commit hash: eeeeeee5555555").not());
}

#[test]
fn explicit_config_path() {
    let fx = Fixture::new();
    fs::create_dir(fx.path().join("policies")).unwrap();
    let config = fx.write(
        "policies/other.toml",
        "commit-message-subject-min-length = 10\n",
    );
    fx.push_event(
        "refs/heads/main",
        &[rest_commit("fffffff6666666", "fix bug", true)],
    )
    .arg("--config")
    .arg(config)
    .assert()
    .failure()
    .stdout(contains("Commit message subject is too short"));
}

#[test]
fn missing_explicit_config_fails() {
    let fx = Fixture::new();
    fx.push_event("refs/heads/main", &[])
        .args(["--config", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(contains("nowhere.toml"));
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_dir_fallback() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.path().join(".config/commit-gate")).unwrap();
    fx.write(
        ".config/commit-gate/config.toml",
        "re-branch-name = \"^feature/\"\n",
    );
    fx.push_event("refs/heads/main", &[])
        .assert()
        .failure()
        .stdout(contains("Branch name does not match regex"));
}

#[test]
fn debug_flag_enables_debug_logs() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--debug", "--event-name", "workflow_dispatch"])
        .assert()
        .success()
        .stderr(contains("Debug logging enabled"));

    fx.cmd()
        .args(["--event-name", "workflow_dispatch"])
        .assert()
        .success()
        .stderr(contains("Debug logging enabled").not());
}

#[test]
fn rust_log_overrides_default_filter() {
    let fx = Fixture::new();
    fx.push_event(
        "refs/heads/main",
        &[rest_commit("1a2b3c4d5e6f7a8b9c0d", "feat: add login", true)],
    )
    .env("RUST_LOG", "warn")
    .assert()
    .success()
    .stderr(contains("Commit hash").not());
}

#[test]
fn other_event_passes() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--event-name", "workflow_dispatch"])
        .assert()
        .success()
        .stdout(contains("Passed (0 commits checked)"));
}

#[test]
fn missing_event_name_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("event name"));
}

#[test]
fn message_from_stdin() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["message", "--commit-message-subject-min-length", "10"])
        .write_stdin("fix bug\n# comment line\n")
        .assert()
        .failure()
        .stdout(contains("Commit message subject is too short"));
}

#[test]
fn message_from_file_passes() {
    let fx = Fixture::new();
    let file = fx.write("COMMIT_EDITMSG", "feat: add login\n\nExplain it.\n");
    fx.cmd()
        .arg("message")
        .arg(file)
        .args(["--prohibit-blank-lines-cm-body", "true"])
        .assert()
        .success();
}

#[test]
fn init_writes_config_once() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Created commit-gate.toml"));
    assert!(fx.path().join("commit-gate.toml").exists());

    fx.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));

    fx.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn version_command() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("commit-gate"));
}
