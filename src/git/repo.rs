// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CmlError, CommitError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Read-only wrapper around git2::Repository for the operations the
/// linter needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CmlError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CmlError::Git(GitError::NotARepository)
            } else {
                CmlError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CmlError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CmlError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        let message = commit.message().ok_or_else(|| {
            CmlError::Commit(CommitError::InvalidEncoding {
                reference: reference.to_string(),
            })
        })?;
        Ok(message.to_string())
    }

    /// Get commits in a range.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| {
            CmlError::Git(GitError::CommandFailed {
                command: "revwalk".to_string(),
                message: e.message().to_string(),
            })
        })?;

        // Parse range specification
        if range.contains("..") {
            let parts: Vec<&str> = range.split("..").collect();
            if parts.len() == 2 {
                let from = self.get_commit(parts[0])?;
                let to = self.get_commit(parts[1])?;

                revwalk.push(to.id()).map_err(|e| {
                    CmlError::Git(GitError::CommandFailed {
                        command: "revwalk.push".to_string(),
                        message: e.message().to_string(),
                    })
                })?;
                revwalk.hide(from.id()).map_err(|e| {
                    CmlError::Git(GitError::CommandFailed {
                        command: "revwalk.hide".to_string(),
                        message: e.message().to_string(),
                    })
                })?;
            }
        } else {
            // Single reference, get that commit only
            let commit = self.get_commit(range)?;
            return Ok(vec![(
                commit.id(),
                commit.message().unwrap_or("").to_string(),
            )]);
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| {
                CmlError::Git(GitError::CommandFailed {
                    command: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CmlError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid, message));
        }

        Ok(commits)
    }
}

/// Get the commit message for a reference.
pub fn get_commit_message(reference: &str) -> Result<String> {
    let repo = Repository::open_current()?;
    repo.get_commit_message(reference)
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo(message: &str) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        // Create initial commit
        {
            let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = create_test_repo("feat: initial commit");
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CmlError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_get_commit_message() {
        let (_dir, repo) = create_test_repo("feat: add case linting");
        let message = repo.get_commit_message("HEAD").unwrap();
        assert_eq!(message.trim(), "feat: add case linting");
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo("feat: initial commit");
        let result = repo.get_commit_message("no-such-ref");
        assert!(matches!(
            result,
            Err(CmlError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_single_reference_range() {
        let (_dir, repo) = create_test_repo("feat: only commit");
        let commits = repo.get_commits_in_range("HEAD").unwrap();
        assert_eq!(commits.len(), 1);
        assert!(commits[0].1.starts_with("feat: only commit"));
    }
}
