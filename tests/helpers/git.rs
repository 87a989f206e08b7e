use std::{path::Path, process::Command};

fn git(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a Git repo in `path` with some fake config.
pub fn init(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "fake@createrel.dev"]);
    git(path, &["config", "user.name", "Fake Releaser"]);
}

/// Create an empty commit with `message` in the Git repo which exists in `path`.
pub fn commit(path: &Path, message: &str) {
    git(path, &["commit", "--allow-empty", "-m", message]);
}

/// Create an annotated tag named `label` with `message` in the Git repo which exists in `path`.
pub fn annotated_tag(path: &Path, label: &str, message: &str) {
    git(path, &["tag", "-a", label, "-m", message]);
}

/// A fresh repository with one commit, tagged `label`.
pub fn repo_with_tag(path: &Path, label: &str, message: &str) {
    init(path);
    commit(path, "Initial commit");
    annotated_tag(path, label, message);
}
