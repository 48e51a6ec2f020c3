//! # Repository collaborator
//!
//! Everything the session needs to know about the surrounding git
//! repository, gathered before the TUI starts, plus the commit/push step
//! that consumes the composed message afterwards.
//!
//! Discovery reads `.git/` directly (config, HEAD, refs/heads) instead of
//! shelling out, so the preamble works even where `git` is slow to start;
//! only `status`, `add`, `commit`, and `push` invoke the real binary.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Failures while gathering repository facts or finalizing the commit.
#[derive(Debug)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    NotARepository(PathBuf),
    /// No remote was configured or chosen.
    NoRemote,
    /// The requested remote is not configured in this repository.
    UnknownRemote(String),
    /// A git subcommand exited unsuccessfully.
    CommandFailed(&'static str),
    Io(io::Error),
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitError::NotARepository(path) => {
                write!(f, "{} does not belong to a git repository", path.display())
            }
            GitError::NoRemote => write!(f, "a remote name must be chosen"),
            GitError::UnknownRemote(name) => write!(f, "unknown remote: {name}"),
            GitError::CommandFailed(command) => write!(f, "command failed: {command}"),
            GitError::Io(error) => write!(f, "git I/O error: {error}"),
        }
    }
}

impl std::error::Error for GitError {}

impl From<io::Error> for GitError {
    fn from(error: io::Error) -> Self {
        GitError::Io(error)
    }
}

/// Facts about the repository the session is committing into.
#[derive(Debug)]
pub struct GitInfo {
    pub repo_name: String,
    pub branches: Vec<String>,
    pub remotes: Vec<String>,
    pub current_branch: String,
    /// The remote chosen for the push; empty until `resolve_remote`.
    pub chosen_remote: String,
    /// Where git subcommands run.
    target_path: PathBuf,
}

impl GitInfo {
    /// Gather repository facts from `.git/` under `root`.
    pub fn discover(root: &Path) -> Result<Self, GitError> {
        let git_path = root.join(".git");
        if !git_path.exists() {
            return Err(GitError::NotARepository(root.to_path_buf()));
        }

        // Worktrees have a .git *file* pointing at the per-worktree
        // directory; HEAD lives there, the shared config one level up
        // through its `commondir` file.
        let (git_dir, head_dir) = resolve_git_dirs(root, &git_path)?;
        debug!(
            "git dir: {}, head dir: {}",
            git_dir.display(),
            head_dir.display()
        );

        let config = fs::read_to_string(git_dir.join("config"))?;
        let repo_name = repo_name_from_config(&config).unwrap_or_else(|| {
            root.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        let remotes = remotes_from_config(&config);
        let current_branch = branch_from_head(&fs::read_to_string(head_dir.join("HEAD"))?);

        let mut branches = Vec::new();
        collect_branches(&git_dir.join("refs").join("heads"), "", &mut branches)?;
        branches.sort();

        Ok(Self {
            repo_name,
            branches,
            remotes,
            current_branch,
            chosen_remote: String::new(),
            target_path: root.to_path_buf(),
        })
    }

    /// Settle on the remote to push to: an explicit request wins, a single
    /// configured remote is taken as-is, otherwise the user is asked.
    pub fn resolve_remote(&mut self, requested: Option<&str>) -> Result<(), GitError> {
        let candidate = match requested {
            Some(name) => name.to_string(),
            None if self.remotes.len() == 1 => self.remotes[0].clone(),
            None => prompt("[*] Please choose a remote: ")?,
        };

        if candidate.is_empty() {
            return Err(GitError::NoRemote);
        }
        if !self.remotes.iter().any(|remote| remote == &candidate) {
            return Err(GitError::UnknownRemote(candidate));
        }

        self.chosen_remote = candidate;
        Ok(())
    }

    /// `git status --porcelain` output, or `None` when the tree is clean.
    pub fn changes(&self) -> Result<Option<String>, GitError> {
        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.target_path)
            .output()?;
        if !output.status.success() {
            return Err(GitError::CommandFailed("git status"));
        }

        let status = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!status.is_empty()).then_some(status))
    }

    /// Stage, commit, and (unless `no_push`) push the composed message.
    /// With `skip_confirmations` the Enter pauses between steps are skipped.
    pub fn finalize(
        &self,
        message: &str,
        skip_confirmations: bool,
        no_push: bool,
    ) -> Result<(), GitError> {
        println!("[*] Previous changes need to be staged before committing.");
        pause(
            "[*] Running <git add .> and <git commit -m ...> (press ENTER to run, CTRL+C to exit)",
            skip_confirmations,
        )?;

        self.run("git add", &["add", "."])?;
        self.run("git commit", &["commit", "-m", message])?;
        info!("Committed on branch {}", self.current_branch);

        if no_push {
            return Ok(());
        }

        pause(
            "\n[*] Pushing changes to the remote. (press ENTER to run, CTRL+C to exit)",
            skip_confirmations,
        )?;
        self.run(
            "git push",
            &[
                "push",
                "--set-upstream",
                &self.chosen_remote,
                &self.current_branch,
            ],
        )?;
        info!(
            "Pushed {} to {}",
            self.current_branch, self.chosen_remote
        );
        Ok(())
    }

    fn run(&self, name: &'static str, args: &[&str]) -> Result<(), GitError> {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.target_path)
            .status()?;
        if !status.success() {
            return Err(GitError::CommandFailed(name));
        }
        Ok(())
    }
}

/// Follow a `.git` file to the worktree and common git directories.
/// For a regular repository both are `.git` itself.
fn resolve_git_dirs(root: &Path, git_path: &Path) -> Result<(PathBuf, PathBuf), GitError> {
    if git_path.is_dir() {
        return Ok((git_path.to_path_buf(), git_path.to_path_buf()));
    }

    let content = fs::read_to_string(git_path)?;
    let target = content
        .trim()
        .strip_prefix("gitdir:")
        .map(str::trim)
        .ok_or_else(|| GitError::NotARepository(root.to_path_buf()))?;
    let head_dir = if Path::new(target).is_absolute() {
        PathBuf::from(target)
    } else {
        root.join(target)
    };

    let common = fs::read_to_string(head_dir.join("commondir"))?;
    let git_dir = head_dir.join(common.trim());
    Ok((git_dir, head_dir))
}

/// The `owner/name` pair hiding in a remote url.
fn extract_repo_name(url: &str) -> String {
    let url = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("git@");
    let url = url.strip_suffix(".git").unwrap_or(url);
    // scp-style urls separate host and path with a colon.
    let url = url.rsplit(':').next().unwrap_or(url);

    let parts: Vec<&str> = url.split('/').filter(|part| !part.is_empty()).collect();
    match parts.as_slice() {
        [.., owner, name] => format!("{owner}/{name}"),
        [name] => (*name).to_string(),
        [] => String::new(),
    }
}

/// First remote url in the config, as a repository name.
fn repo_name_from_config(config: &str) -> Option<String> {
    config
        .lines()
        .find(|line| line.contains("url ="))
        .and_then(|line| line.split('=').nth(1))
        .map(|url| extract_repo_name(url.trim()))
}

/// Remote names from `[remote "..."]` section headers.
fn remotes_from_config(config: &str) -> Vec<String> {
    config
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("[remote \"")?
                .strip_suffix("\"]")
                .map(str::to_string)
        })
        .collect()
}

/// Branch name from a HEAD file; a detached HEAD yields the raw hash.
fn branch_from_head(head: &str) -> String {
    let line = head.lines().next().unwrap_or_default().trim();
    match line.strip_prefix("ref:") {
        Some(reference) => reference
            .trim()
            .strip_prefix("refs/heads/")
            .unwrap_or(reference.trim())
            .to_string(),
        None => line.to_string(),
    }
}

/// Walk `refs/heads` recursively; nested directories become `dir/branch`
/// names.
fn collect_branches(dir: &Path, prefix: &str, branches: &mut Vec<String>) -> io::Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let full = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        if entry.file_type()?.is_dir() {
            collect_branches(&entry.path(), &full, branches)?;
        } else {
            branches.push(full);
        }
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, GitError> {
    print!("{message}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn pause(message: &str, skip: bool) -> Result<(), GitError> {
    if skip {
        println!("{}", message.replace(" (press ENTER to run, CTRL+C to exit)", ""));
        return Ok(());
    }
    println!("{message}");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = "\
[core]
\trepositoryformatversion = 0
[remote \"origin\"]
\turl = git@github.com:someone/ccommits.git
\tfetch = +refs/heads/*:refs/remotes/origin/*
[remote \"upstream\"]
\turl = https://github.com/upstream/ccommits.git
[branch \"main\"]
\tremote = origin
";

    fn fake_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let git = dir.path().join(".git");
        fs::create_dir_all(git.join("refs/heads/feature")).unwrap();
        fs::write(git.join("config"), CONFIG).unwrap();
        fs::write(git.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(git.join("refs/heads/main"), "0123abcd\n").unwrap();
        fs::write(git.join("refs/heads/feature/wrap"), "4567cdef\n").unwrap();
        dir
    }

    #[test]
    fn discover_reads_the_git_directory() {
        let repo = fake_repo();
        let info = GitInfo::discover(repo.path()).expect("discover");

        assert_eq!(info.repo_name, "someone/ccommits");
        assert_eq!(info.current_branch, "main");
        assert_eq!(info.branches, vec!["feature/wrap", "main"]);
        assert_eq!(info.remotes, vec!["origin", "upstream"]);
    }

    #[test]
    fn discover_outside_a_repository_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            GitInfo::discover(dir.path()),
            Err(GitError::NotARepository(_))
        ));
    }

    #[test]
    fn repo_names_from_common_url_shapes() {
        assert_eq!(
            extract_repo_name("https://github.com/someone/project.git"),
            "someone/project"
        );
        assert_eq!(
            extract_repo_name("git@github.com:someone/project.git"),
            "someone/project"
        );
        assert_eq!(
            extract_repo_name("http://example.org/deep/group/project"),
            "group/project"
        );
    }

    #[test]
    fn head_parsing_handles_attached_and_detached() {
        assert_eq!(branch_from_head("ref: refs/heads/main\n"), "main");
        assert_eq!(
            branch_from_head("ref: refs/heads/feature/wrap\n"),
            "feature/wrap"
        );
        assert_eq!(branch_from_head("0123abcd\n"), "0123abcd");
    }

    #[test]
    fn explicit_remote_must_exist() {
        let repo = fake_repo();
        let mut info = GitInfo::discover(repo.path()).unwrap();
        assert!(matches!(
            info.resolve_remote(Some("nowhere")),
            Err(GitError::UnknownRemote(_))
        ));

        info.resolve_remote(Some("upstream")).unwrap();
        assert_eq!(info.chosen_remote, "upstream");
    }

    #[test]
    fn a_single_remote_is_chosen_automatically() {
        let repo = fake_repo();
        let mut info = GitInfo::discover(repo.path()).unwrap();
        info.remotes = vec!["origin".to_string()];
        info.resolve_remote(None).unwrap();
        assert_eq!(info.chosen_remote, "origin");
    }
}
