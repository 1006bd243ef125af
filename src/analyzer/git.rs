//! Git history access.
//!
//! Uses libgit2 to walk every commit reachable from HEAD and report which
//! paths each commit changed relative to its first parent.

use super::error::AnalyzerError;
use git2::{Commit, ErrorCode, Repository};
use std::path::Path;

/// Read-only handle on a repository's committed history.
///
/// Only committed history is consulted; the working directory and index are
/// never touched.
pub struct GitRepository {
    repo: Repository,
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository").finish_non_exhaustive()
    }
}

impl GitRepository {
    /// Opens the repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::NotARepository` when the path does not hold
    /// an initialized git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let repo = Repository::open(path.as_ref())
            .map_err(|_| AnalyzerError::NotARepository(path.as_ref().to_path_buf()))?;

        Ok(Self { repo })
    }

    /// Collects one path string per (commit, changed file) pair across the
    /// full history reachable from HEAD, in commit-time order.
    ///
    /// Merge commits are skipped, matching `git log`'s default of recording
    /// no file-level diff for them. Commits that touch no files contribute
    /// nothing. A repository with no commits yields an empty sequence.
    ///
    /// Paths are counted as recorded at each point in history: a path
    /// deleted in a later commit keeps the mentions from the commits where
    /// it existed, and renames are not followed.
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::HistoryRead` when the underlying history
    /// walk or diff fails.
    pub fn changed_paths(&self) -> Result<Vec<String>, AnalyzerError> {
        let mut revwalk = self.repo.revwalk()?;
        if let Err(e) = revwalk.push_head() {
            // A freshly initialized repository has an unborn HEAD.
            if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound {
                return Ok(Vec::new());
            }
            return Err(AnalyzerError::HistoryRead(e));
        }
        revwalk.set_sorting(git2::Sort::TIME)?;

        let mut paths = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_count() > 1 {
                continue;
            }

            paths.extend(self.commit_paths(&commit)?);
        }

        Ok(paths)
    }

    fn commit_paths(&self, commit: &Commit) -> Result<Vec<String>, AnalyzerError> {
        let tree = commit.tree()?;
        let parent_tree = commit.parent(0).ok().and_then(|parent| parent.tree().ok());

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            if let Some(path) = delta.new_file().path().or_else(|| delta.old_file().path()) {
                if let Some(path_str) = path.to_str() {
                    files.push(path_str.to_string());
                }
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str) {
        let workdir = repo.workdir().unwrap();
        for (name, contents) in files {
            fs::write(workdir.join(name), contents).unwrap();
        }

        let mut index = repo.index().unwrap();
        for (name, _) in files {
            index.add_path(&PathBuf::from(name)).unwrap();
        }
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    #[test]
    fn test_open_rejects_non_repository() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitRepository::open(dir.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::NotARepository(_)));
    }

    #[test]
    fn test_changed_paths_one_record_per_commit_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_files(&repo, &[("a.txt", "1")], "first");
        commit_files(&repo, &[("a.txt", "2"), ("b.txt", "1")], "second");
        commit_files(&repo, &[("b.txt", "2")], "third");

        let git_repo = GitRepository::open(dir.path()).unwrap();
        let mut paths = git_repo.changed_paths().unwrap();
        paths.sort();

        assert_eq!(paths, vec!["a.txt", "a.txt", "b.txt", "b.txt"]);
    }

    #[test]
    fn test_changed_paths_counts_deleted_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_files(&repo, &[("gone.txt", "1")], "add");

        let workdir = repo.workdir().unwrap();
        fs::remove_file(workdir.join("gone.txt")).unwrap();
        let mut index = repo.index().unwrap();
        index.remove_path(&PathBuf::from("gone.txt")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "remove", &tree, &[&parent])
            .unwrap();

        let git_repo = GitRepository::open(dir.path()).unwrap();
        let paths = git_repo.changed_paths().unwrap();

        // The add and the removal both mention the path.
        assert_eq!(paths.iter().filter(|p| *p == "gone.txt").count(), 2);
    }

    #[test]
    fn test_changed_paths_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();

        let git_repo = GitRepository::open(dir.path()).unwrap();
        assert!(git_repo.changed_paths().unwrap().is_empty());
    }
}
