use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::AppError;

/// Runs git with an argument vector and fails on a nonzero exit.
fn run_git(root: &Path, args: &[&str]) -> Result<String, AppError> {
    debug!("running: git {}", args.join(" "));
    let output = Command::new("git").args(args).current_dir(root).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!("git {} failed: {stderr}", args.join(" "));
        return Err(AppError::Git(if stderr.is_empty() {
            format!("git {} exited with {}", args.join(" "), output.status)
        } else {
            stderr
        }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Exit status deliberately ignored: `git config <key>` exits nonzero
/// when the key is unset, which here just means "no value".
fn git_stdout(root: &Path, args: &[&str]) -> Result<String, AppError> {
    let output = Command::new("git").args(args).current_dir(root).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn lookup_stdout(program: &str) -> Option<String> {
    let output = Command::new(program).output().ok()?;
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Initializes a repository at `root` if one is not already present, then
/// fills in a local identity when none is configured: `whoami` stands in
/// for `user.name` and `hostname` for `user.email`.
pub fn init_repository(root: &Path) -> Result<(), AppError> {
    if !root.join(".git").exists() {
        run_git(root, &["init"])?;
    }

    if git_stdout(root, &["config", "user.name"])?.is_empty() {
        match lookup_stdout("whoami") {
            Some(username) => {
                run_git(root, &["config", "user.name", &username])?;
            }
            None => warn!("could not determine a fallback user.name"),
        }
    }

    if git_stdout(root, &["config", "user.email"])?.is_empty() {
        match lookup_stdout("hostname") {
            Some(hostname) => {
                run_git(root, &["config", "user.email", &hostname])?;
            }
            None => warn!("could not determine a fallback user.email"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_a_repository_when_absent() {
        let dir = TempDir::new().unwrap();

        init_repository(dir.path()).unwrap();

        assert!(dir.path().join(".git").is_dir());
    }

    #[test]
    fn is_idempotent_on_an_existing_repository() {
        let dir = TempDir::new().unwrap();

        init_repository(dir.path()).unwrap();
        init_repository(dir.path()).unwrap();

        assert!(dir.path().join(".git").is_dir());
    }

    #[test]
    fn fills_in_a_fallback_identity() {
        let dir = TempDir::new().unwrap();

        init_repository(dir.path()).unwrap();

        let name = git_stdout(dir.path(), &["config", "user.name"]).unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn preserves_an_existing_identity() {
        let dir = TempDir::new().unwrap();
        run_git(dir.path(), &["init"]).unwrap();
        run_git(dir.path(), &["config", "user.name", "Curator"]).unwrap();
        run_git(dir.path(), &["config", "user.email", "curator@example.com"]).unwrap();

        init_repository(dir.path()).unwrap();

        assert_eq!(
            git_stdout(dir.path(), &["config", "user.name"]).unwrap(),
            "Curator"
        );
        assert_eq!(
            git_stdout(dir.path(), &["config", "user.email"]).unwrap(),
            "curator@example.com"
        );
    }

    #[test]
    fn failed_git_invocations_surface_stderr() {
        let dir = TempDir::new().unwrap();
        init_repository(dir.path()).unwrap();

        // log on an unborn branch exits nonzero
        let err = run_git(dir.path(), &["log"]).unwrap_err();
        assert!(matches!(err, AppError::Git(_)));
    }
}
