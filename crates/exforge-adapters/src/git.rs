//! System git adapter: shells out to the `git` binary.
//!
//! Both operations block until the child process exits. There are no
//! timeouts and no retries; a hung remote hangs the run, and any failure
//! is terminal. Stderr is captured and carried inside the error so the
//! CLI can show the user what git actually said.

use std::path::Path;
use std::process::Command;

use exforge_core::{
    application::{ApplicationError, ports::Git},
    error::{ExforgeError, ExforgeResult},
};
use tracing::{debug, instrument};

/// Production [`Git`] implementation over `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl SystemGit {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<(), String> {
        debug!(args = ?args, cwd = %cwd.display(), "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| format!("failed to spawn git: {e}"))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(if stderr.is_empty() {
                format!("git exited with {}", output.status)
            } else {
                stderr
            })
        }
    }
}

impl Git for SystemGit {
    #[instrument(skip(self))]
    fn ls_remote(&self, url: &str) -> ExforgeResult<()> {
        self.run(&["ls-remote", url], Path::new(".")).map_err(|diagnostics| {
            ExforgeError::from(ApplicationError::UnreachableGitRemote {
                url: url.to_string(),
                diagnostics,
            })
        })
    }

    #[instrument(skip(self))]
    fn clone_repo(&self, url: &str, dir: Option<&str>, cwd: &Path) -> ExforgeResult<()> {
        let mut args = vec!["clone", url];
        if let Some(dir) = dir {
            args.push(dir);
        }
        self.run(&args, cwd).map_err(|diagnostics| {
            ExforgeError::from(ApplicationError::CloneFailed {
                url: url.to_string(),
                diagnostics,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests exercise the real git binary against local paths only;
    // nothing touches the network.

    #[test]
    fn ls_remote_on_a_local_repository_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("repo");
        std::fs::create_dir(&repo).unwrap();
        assert!(
            Command::new("git")
                .args(["init", "--quiet"])
                .current_dir(&repo)
                .status()
                .unwrap()
                .success()
        );

        let git = SystemGit::new();
        git.ls_remote(repo.to_str().unwrap()).unwrap();
    }

    #[test]
    fn ls_remote_on_a_missing_path_carries_diagnostics() {
        let git = SystemGit::new();
        let err = git.ls_remote("/definitely/not/a/repo").unwrap_err();
        match err {
            ExforgeError::Application(ApplicationError::UnreachableGitRemote {
                url,
                diagnostics,
            }) => {
                assert_eq!(url, "/definitely/not/a/repo");
                assert!(!diagnostics.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn clone_failure_carries_diagnostics() {
        let tmp = tempfile::tempdir().unwrap();
        let git = SystemGit::new();
        let err = git
            .clone_repo("/definitely/not/a/repo", Some("dest"), tmp.path())
            .unwrap_err();
        assert!(matches!(
            err,
            ExforgeError::Application(ApplicationError::CloneFailed { .. })
        ));
    }
}
