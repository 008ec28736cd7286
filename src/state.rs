//! Per-installation fixture state.
//!
//! The in-memory stores that stub operations read from and write to. Keys
//! follow the provider's addressing: `owner/repo` for repo-scoped fixtures
//! and `owner/repo@<ref|sha|issue>` for everything narrower. Setters and
//! stubs go through the same key builders, so state set by a test is always
//! visible to the stub that serves it.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use serde_json::Value;

use crate::models::{
    CheckRun, CommitStatus, InstallationRepositories, IssueComment, RepositoryName, User,
};

/// Key for repo-scoped fixtures.
pub(crate) fn repo_key(owner: &str, repo: &str) -> String {
    format!("{owner}/{repo}")
}

/// Key for fixtures scoped to a ref, sha, or issue number under a repo.
pub(crate) fn ref_key(owner: &str, repo: &str, id: impl Display) -> String {
    format!("{owner}/{repo}@{id}")
}

/// Status fixture for one `owner/repo@ref`: either an ordered list of
/// statuses, or an injected error status that the listing stub raises
/// instead of returning data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFixture {
    List(Vec<CommitStatus>),
    ErrorStatus(u16),
}

/// Fixture stores for a single installation.
#[derive(Debug, Default)]
pub struct InstallationState {
    taskcluster_yml_files: HashMap<String, Value>,
    org_membership: HashMap<String, HashSet<String>>,
    repo_collaborators: HashMap<String, HashSet<String>>,
    users: Vec<User>,
    repo_info: HashMap<String, Value>,
    repositories: InstallationRepositories,
    statuses: HashMap<String, StatusFixture>,
    checks: HashMap<String, Vec<CheckRun>>,
    comments: HashMap<String, Vec<IssueComment>>,
    commits: HashMap<String, String>,
}

impl InstallationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- config file ---------------------------------------------------

    pub fn set_taskcluster_yml(&mut self, owner: &str, repo: &str, gitref: &str, content: Value) {
        self.taskcluster_yml_files
            .insert(ref_key(owner, repo, gitref), content);
    }

    pub fn taskcluster_yml(&self, owner: &str, repo: &str, gitref: &str) -> Option<&Value> {
        self.taskcluster_yml_files.get(&ref_key(owner, repo, gitref))
    }

    // ---- org membership ------------------------------------------------

    pub fn set_org_member(&mut self, org: &str, member: &str) {
        self.org_membership
            .entry(org.to_string())
            .or_default()
            .insert(member.to_string());
    }

    pub fn is_org_member(&self, org: &str, username: &str) -> bool {
        self.org_membership
            .get(org)
            .is_some_and(|members| members.contains(username))
    }

    // ---- collaborators -------------------------------------------------

    pub fn set_repo_collaborator(&mut self, owner: &str, repo: &str, username: &str) {
        self.repo_collaborators
            .entry(repo_key(owner, repo))
            .or_default()
            .insert(username.to_string());
    }

    pub fn is_collaborator(&self, owner: &str, repo: &str, username: &str) -> bool {
        self.repo_collaborators
            .get(&repo_key(owner, repo))
            .is_some_and(|collaborators| collaborators.contains(username))
    }

    // ---- users ---------------------------------------------------------

    /// Register a user fixture. Lookups return the first user registered
    /// under a username.
    ///
    /// # Panics
    ///
    /// Panics on an empty id, email, or username; an incomplete user fixture
    /// is a bug in the test.
    pub fn set_user(&mut self, user: User) {
        assert!(user.id != 0, "must provide id to set_user");
        assert!(!user.email.is_empty(), "must provide email to set_user");
        assert!(!user.username.is_empty(), "must provide username to set_user");
        self.users.push(user);
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    // ---- repo metadata -------------------------------------------------

    pub fn set_repo_info(&mut self, owner: &str, repo: &str, info: Value) {
        self.repo_info.insert(repo_key(owner, repo), info);
    }

    pub fn repo_info(&self, owner: &str, repo: &str) -> Option<&Value> {
        self.repo_info.get(&repo_key(owner, repo))
    }

    // ---- accessible repositories ---------------------------------------

    /// Replace the accessible-repositories list for this installation.
    pub fn set_repositories(&mut self, names: &[&str]) {
        self.repositories.repositories = names
            .iter()
            .map(|name| RepositoryName {
                name: (*name).to_string(),
            })
            .collect();
        self.repositories.total_count = self.repositories.repositories.len() as u64;
    }

    pub fn repositories(&self) -> &InstallationRepositories {
        &self.repositories
    }

    // ---- commits -------------------------------------------------------

    pub fn set_commit(&mut self, owner: &str, repo: &str, gitref: &str, sha: &str) {
        self.commits
            .insert(ref_key(owner, repo, gitref), sha.to_string());
    }

    pub fn commit(&self, owner: &str, repo: &str, gitref: &str) -> Option<&str> {
        self.commits
            .get(&ref_key(owner, repo, gitref))
            .map(String::as_str)
    }

    // ---- statuses ------------------------------------------------------

    pub fn set_statuses(&mut self, owner: &str, repo: &str, gitref: &str, statuses: Vec<CommitStatus>) {
        self.statuses
            .insert(ref_key(owner, repo, gitref), StatusFixture::List(statuses));
    }

    /// Mark a ref so the status listing raises `status` instead of data.
    pub fn set_status_error(&mut self, owner: &str, repo: &str, gitref: &str, status: u16) {
        self.statuses.insert(
            ref_key(owner, repo, gitref),
            StatusFixture::ErrorStatus(status),
        );
    }

    pub fn statuses(&self, owner: &str, repo: &str, gitref: &str) -> Option<&StatusFixture> {
        self.statuses.get(&ref_key(owner, repo, gitref))
    }

    pub fn add_status(&mut self, owner: &str, repo: &str, sha: &str, status: CommitStatus) {
        let fixture = self
            .statuses
            .entry(ref_key(owner, repo, sha))
            .or_insert_with(|| StatusFixture::List(Vec::new()));
        match fixture {
            StatusFixture::List(list) => list.push(status),
            // an injected error marker stays in place; the write is dropped
            StatusFixture::ErrorStatus(_) => {}
        }
    }

    // ---- checks --------------------------------------------------------

    pub fn set_checks(&mut self, owner: &str, repo: &str, gitref: &str, checks: Vec<CheckRun>) {
        self.checks.insert(ref_key(owner, repo, gitref), checks);
    }

    pub fn checks_for(&self, owner: &str, repo: &str, gitref: &str) -> Option<&Vec<CheckRun>> {
        self.checks.get(&ref_key(owner, repo, gitref))
    }

    pub fn add_check(&mut self, owner: &str, repo: &str, sha: &str, check: CheckRun) {
        self.checks
            .entry(ref_key(owner, repo, sha))
            .or_default()
            .push(check);
    }

    // ---- comments ------------------------------------------------------

    pub fn add_comment(&mut self, owner: &str, repo: &str, issue_number: u64, body: &str) {
        self.comments
            .entry(ref_key(owner, repo, issue_number))
            .or_default()
            .push(IssueComment {
                body: body.to_string(),
            });
    }

    pub fn comments(&self, owner: &str, repo: &str, issue_number: u64) -> Option<&Vec<IssueComment>> {
        self.comments.get(&ref_key(owner, repo, issue_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status(state: &str, context: &str) -> CommitStatus {
        CommitStatus {
            state: state.to_string(),
            target_url: None,
            description: None,
            context: Some(context.to_string()),
        }
    }

    #[test]
    fn test_key_builders() {
        assert_eq!(repo_key("acme", "widgets"), "acme/widgets");
        assert_eq!(
            ref_key("acme", "widgets", "refs/heads/main"),
            "acme/widgets@refs/heads/main"
        );
        assert_eq!(ref_key("acme", "widgets", 17), "acme/widgets@17");
    }

    #[test]
    fn test_taskcluster_yml_keyed_by_triple() {
        let mut state = InstallationState::new();
        state.set_taskcluster_yml("acme", "widgets", "refs/heads/main", json!({"tasks": []}));

        assert_eq!(
            state.taskcluster_yml("acme", "widgets", "refs/heads/main"),
            Some(&json!({"tasks": []}))
        );
        assert_eq!(state.taskcluster_yml("acme", "widgets", "refs/heads/other"), None);
        assert_eq!(state.taskcluster_yml("acme", "gadgets", "refs/heads/main"), None);
    }

    #[test]
    fn test_add_status_preserves_insertion_order() {
        let mut state = InstallationState::new();
        state.add_status("acme", "widgets", "abc123", status("pending", "ci/build"));
        state.add_status("acme", "widgets", "abc123", status("success", "ci/build"));

        let Some(StatusFixture::List(list)) = state.statuses("acme", "widgets", "abc123") else {
            panic!("expected a status list");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].state, "pending");
        assert_eq!(list[1].state, "success");
    }

    #[test]
    fn test_add_status_keeps_error_marker() {
        let mut state = InstallationState::new();
        state.set_status_error("acme", "widgets", "abc123", 500);
        state.add_status("acme", "widgets", "abc123", status("pending", "ci/build"));

        assert_eq!(
            state.statuses("acme", "widgets", "abc123"),
            Some(&StatusFixture::ErrorStatus(500))
        );
    }

    #[test]
    fn test_collaborators_scoped_by_repo() {
        let mut state = InstallationState::new();
        state.set_repo_collaborator("acme", "widgets", "alice");

        assert!(state.is_collaborator("acme", "widgets", "alice"));
        assert!(!state.is_collaborator("acme", "widgets", "bob"));
        assert!(!state.is_collaborator("acme", "gadgets", "alice"));
    }

    #[test]
    fn test_org_membership() {
        let mut state = InstallationState::new();
        state.set_org_member("acme", "alice");

        assert!(state.is_org_member("acme", "alice"));
        assert!(!state.is_org_member("acme", "bob"));
        assert!(!state.is_org_member("globex", "alice"));
    }

    #[test]
    fn test_set_repositories_counts() {
        let mut state = InstallationState::new();
        state.set_repositories(&["widgets", "gadgets"]);

        let repos = state.repositories();
        assert_eq!(repos.total_count, 2);
        assert_eq!(repos.repositories[0].name, "widgets");
        assert_eq!(repos.repositories[1].name, "gadgets");
    }

    #[test]
    fn test_user_lookup_returns_first_match() {
        let mut state = InstallationState::new();
        state.set_user(User {
            id: 1,
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
        });
        state.set_user(User {
            id: 2,
            email: "a2@b.com".to_string(),
            username: "alice".to_string(),
        });

        assert_eq!(state.user_by_username("alice").map(|u| u.id), Some(1));
        assert_eq!(state.user_by_username("bob"), None);
    }

    #[test]
    #[should_panic(expected = "must provide email to set_user")]
    fn test_set_user_requires_email() {
        let mut state = InstallationState::new();
        state.set_user(User {
            id: 1,
            email: String::new(),
            username: "alice".to_string(),
        });
    }

    #[test]
    fn test_comments_keyed_by_issue() {
        let mut state = InstallationState::new();
        state.add_comment("acme", "widgets", 17, "first");
        state.add_comment("acme", "widgets", 17, "second");

        let comments = state.comments("acme", "widgets", 17).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].body, "first");
        assert_eq!(state.comments("acme", "widgets", 18), None);
    }
}
