use crate::error::{NextverError, Result};
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Tag source for a repository on disk.
///
/// The repository is located with `git2`, but tags are listed by the `git`
/// binary: libgit2 has no equivalent of `--sort=-version:refname`.
#[derive(Debug, Clone)]
pub struct GitRepository {
    dir: PathBuf,
}

impl GitRepository {
    /// Discover the git repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(&repo))
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: &Git2Repo) -> Self {
        // Bare repositories have no work tree; git runs fine in the git dir.
        let dir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        GitRepository { dir }
    }

    /// Directory `git` is run in
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TagSource for GitRepository {
    fn list_tags_by_version(&self) -> Result<Vec<String>> {
        let output = Command::new("git")
            .args(["tag", "--sort=-version:refname"])
            .current_dir(&self.dir)
            .output()
            .map_err(|e| NextverError::git_command(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(NextverError::git_command(if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr.to_string()
            }));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
