use crate::source::{CommitDetail, CommitSource, SourceError};
use anyhow::{Context, Result};
use chrono::{FixedOffset, TimeZone};
use git2::{Oid, Repository, Signature, Time};
use std::path::Path;

/// git2-backed commit store
pub struct GitSource {
    repo: Repository,
}

impl GitSource {
    /// Open the repository at `path`, or discover one from the environment
    /// when no path is given
    pub fn open(repo_path: Option<&Path>) -> Result<Self> {
        let repo = match repo_path {
            Some(path) => Repository::open(path),
            None => Repository::open_from_env(),
        }
        .context("Failed to open repository")?;

        Ok(Self { repo })
    }
}

impl CommitSource for GitSource {
    fn resolve_tip(&self) -> Result<String, SourceError> {
        let head = self.repo.head().map_err(|_| SourceError::UnresolvedTip)?;
        head.target()
            .map(|oid| oid.to_string())
            .ok_or(SourceError::UnresolvedTip)
    }

    fn fetch(&self, id: &str) -> Result<CommitDetail, SourceError> {
        let oid =
            Oid::from_str(id).map_err(|_| SourceError::UnknownCommit(id.to_string()))?;
        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|_| SourceError::UnknownCommit(id.to_string()))?;

        let parents = commit.parent_ids().map(|oid| oid.to_string()).collect();
        let author = identity(&commit.author(), id, "author")?;
        let committer = identity(&commit.committer(), id, "committer")?;
        let author_timestamp = format_time(commit.author().when(), id, "author timestamp")?;
        let commit_timestamp = format_time(commit.time(), id, "commit timestamp")?;

        Ok(CommitDetail {
            parents,
            author,
            committer,
            author_timestamp,
            commit_timestamp,
        })
    }
}

/// `Name <email>` identity string from a signature
fn identity(
    signature: &Signature<'_>,
    id: &str,
    field: &'static str,
) -> Result<String, SourceError> {
    let malformed = || SourceError::MalformedField {
        id: id.to_string(),
        field,
    };
    let name = signature.name().ok_or_else(malformed)?;
    let email = signature.email().ok_or_else(malformed)?;
    Ok(format!("{} <{}>", name, email))
}

/// Format a git time in its own UTC offset, the shape `git show --format=%ci`
/// prints: `YYYY-MM-DD HH:MM:SS +ZZZZ`
fn format_time(time: Time, id: &str, field: &'static str) -> Result<String, SourceError> {
    let malformed = || SourceError::MalformedField {
        id: id.to_string(),
        field,
    };
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(malformed)?;
    let stamp = offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .ok_or_else(malformed)?;
    Ok(stamp.format("%Y-%m-%d %H:%M:%S %z").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify, Label, Walker};
    use git2::Commit;
    use tempfile::TempDir;

    fn create_test_repo() -> Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = Repository::init(dir.path())?;

        // Configure repo
        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok((dir, repo))
    }

    fn commit_to_repo(
        repo: &Repository,
        message: &str,
        parents: &[&Commit],
        update_ref: Option<&str>,
    ) -> Result<Oid> {
        let sig = Signature::now("Test User", "test@example.com")?;
        let tree_id = {
            let mut index = repo.index()?;
            index.write_tree()?
        };
        let tree = repo.find_tree(tree_id)?;

        Ok(repo.commit(update_ref, &sig, &sig, message, &tree, parents)?)
    }

    #[test]
    fn test_resolve_tip_is_head_commit() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;
        let oid = commit_to_repo(&repo, "Initial commit", &[], Some("HEAD"))?;

        let source = GitSource::open(Some(repo.path()))?;
        assert_eq!(source.resolve_tip()?, oid.to_string());

        Ok(())
    }

    #[test]
    fn test_resolve_tip_fails_on_empty_repo() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;

        let source = GitSource::open(Some(repo.path()))?;
        assert!(matches!(
            source.resolve_tip(),
            Err(SourceError::UnresolvedTip)
        ));

        Ok(())
    }

    #[test]
    fn test_fetch_root_commit_fields() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;
        let oid = commit_to_repo(&repo, "Initial commit", &[], Some("HEAD"))?;

        let source = GitSource::open(Some(repo.path()))?;
        let detail = source.fetch(&oid.to_string())?;

        assert!(detail.parents.is_empty());
        assert_eq!(detail.author, "Test User <test@example.com>");
        assert_eq!(detail.committer, "Test User <test@example.com>");
        // YYYY-MM-DD HH:MM:SS +ZZZZ
        assert_eq!(detail.commit_timestamp.len(), 25);
        assert_eq!(detail.author_timestamp, detail.commit_timestamp);

        Ok(())
    }

    #[test]
    fn test_fetch_unknown_commit_fails() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;
        commit_to_repo(&repo, "Initial commit", &[], Some("HEAD"))?;

        let source = GitSource::open(Some(repo.path()))?;
        assert!(source.fetch("not-a-hash").is_err());
        assert!(source
            .fetch("0123456789abcdef0123456789abcdef01234567")
            .is_err());

        Ok(())
    }

    #[test]
    fn test_linear_history_end_to_end() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;

        let oid1 = commit_to_repo(&repo, "First commit", &[], Some("HEAD"))?;
        let commit1 = repo.find_commit(oid1)?;

        let oid2 = commit_to_repo(&repo, "Second commit", &[&commit1], Some("HEAD"))?;
        let commit2 = repo.find_commit(oid2)?;

        let oid3 = commit_to_repo(&repo, "Third commit", &[&commit2], Some("HEAD"))?;

        let source = GitSource::open(Some(repo.path()))?;
        let mut dag = Walker::new(&source).walk()?;
        classify(&mut dag);

        assert_eq!(dag.node_count(), 3);
        assert_eq!(dag.edge_count(), 2);
        assert_eq!(dag.get(&oid1.to_string()).unwrap().labels, [Label::Root]);
        assert_eq!(dag.get(&oid2.to_string()).unwrap().labels, [Label::Plain]);
        assert_eq!(dag.get(&oid3.to_string()).unwrap().labels, [Label::Tip]);

        Ok(())
    }

    #[test]
    fn test_merge_topology_end_to_end() -> Result<()> {
        let (_dir, repo) = create_test_repo()?;

        // Create base commit
        let base_oid = commit_to_repo(&repo, "Base commit", &[], Some("HEAD"))?;
        let base_commit = repo.find_commit(base_oid)?;

        // Create branch 1
        let branch1_oid = commit_to_repo(&repo, "Branch 1", &[&base_commit], Some("HEAD"))?;
        let branch1_commit = repo.find_commit(branch1_oid)?;

        // Create branch 2 (from base, not HEAD)
        let branch2_oid = commit_to_repo(&repo, "Branch 2", &[&base_commit], None)?;
        let branch2_commit = repo.find_commit(branch2_oid)?;

        // Create merge commit
        let merge_oid = commit_to_repo(
            &repo,
            "Merge",
            &[&branch1_commit, &branch2_commit],
            Some("HEAD"),
        )?;

        let source = GitSource::open(Some(repo.path()))?;
        let mut dag = Walker::new(&source).walk()?;
        classify(&mut dag);

        assert_eq!(dag.node_count(), 4);
        assert_eq!(dag.edge_count(), 4); // base<-b1, base<-b2, b1<-merge, b2<-merge

        let merge = dag.get(&merge_oid.to_string()).unwrap();
        assert_eq!(merge.labels, [Label::Merge, Label::Tip]);
        assert_eq!(
            merge.parents.to_vec(),
            vec![branch1_oid.to_string(), branch2_oid.to_string()]
        );

        let base = dag.get(&base_oid.to_string()).unwrap();
        assert_eq!(base.labels, [Label::Root, Label::Fork]);
        assert_eq!(base.type_string(), "root; fork");

        assert_eq!(
            dag.get(&branch1_oid.to_string()).unwrap().labels,
            [Label::Plain]
        );
        assert_eq!(
            dag.get(&branch2_oid.to_string()).unwrap().labels,
            [Label::Plain]
        );

        let stats = dag.stats();
        assert_eq!(stats.merge_commits, 1);
        assert_eq!(stats.root_commits, 1);
        assert_eq!(stats.fork_commits, 1);
        assert_eq!(stats.tip_commits, 1);

        Ok(())
    }
}
