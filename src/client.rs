//! Per-installation simulated GitHub client.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::RwLock;

use crate::handlers::{Apps, Checks, Issues, Repos, Users};
use crate::models::{CheckRun, CommitStatus, IssueComment, User};
use crate::recording::{CallLog, RecordedCall};
use crate::rng::XorShift64;
use crate::state::{InstallationState, StatusFixture};

/// A simulated installation-scoped GitHub client.
///
/// One instance exists per installation id, holding every fixture for that
/// installation. Stub operations are grouped the way the provider client
/// library groups them: [`FakeGithub::repos`], [`FakeGithub::issues`],
/// [`FakeGithub::checks`], [`FakeGithub::apps`], [`FakeGithub::users`].
/// Fixture setters and read-back helpers live directly on the client and are
/// meant for test setup and assertions, not for the code under test.
///
/// Instances are fully isolated from one another; the only cross-client
/// structure is the registry that hands them out.
pub struct FakeGithub {
    installation_id: u64,
    installed_on: Option<String>,
    pub(crate) state: Arc<RwLock<InstallationState>>,
    calls: CallLog,
    rng: Mutex<XorShift64>,
}

impl std::fmt::Debug for FakeGithub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeGithub")
            .field("installation_id", &self.installation_id)
            .field("installed_on", &self.installed_on)
            .finish_non_exhaustive()
    }
}

impl FakeGithub {
    /// A client with empty fixtures, not attached to any owner.
    pub fn new(installation_id: u64) -> Self {
        Self::from_state(installation_id, None, InstallationState::new())
    }

    pub(crate) fn from_state(
        installation_id: u64,
        installed_on: Option<String>,
        state: InstallationState,
    ) -> Self {
        Self {
            installation_id,
            installed_on,
            state: Arc::new(RwLock::new(state)),
            calls: CallLog::default(),
            rng: Mutex::new(XorShift64::new(0xA076_1D64_78BD_642F ^ installation_id)),
        }
    }

    pub fn installation_id(&self) -> u64 {
        self.installation_id
    }

    /// Owner this installation is attached to, if it was created through
    /// the registry's `create_install`.
    pub fn installed_on(&self) -> Option<&str> {
        self.installed_on.as_deref()
    }

    // ---- stub namespaces -----------------------------------------------

    pub fn repos(&self) -> Repos<'_> {
        Repos { github: self }
    }

    pub fn issues(&self) -> Issues<'_> {
        Issues { github: self }
    }

    pub fn checks(&self) -> Checks<'_> {
        Checks { github: self }
    }

    pub fn apps(&self) -> Apps<'_> {
        Apps { github: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { github: self }
    }

    /// The provider client reports no further pages for any listing served
    /// by this simulator.
    pub fn has_next_page(&self) -> bool {
        false
    }

    /// Direct access to the installation's fixture state, for test setup
    /// the dedicated setters do not cover.
    pub fn state(&self) -> Arc<RwLock<InstallationState>> {
        Arc::clone(&self.state)
    }

    // ---- call recording ------------------------------------------------

    /// Record one stub invocation. Every operation goes through here before
    /// its behavior runs, deprecated aliases included.
    pub(crate) fn record(&self, operation: &str, args: Value) {
        self.calls.record(self.installation_id, operation, args);
    }

    pub(crate) fn next_check_run_id(&self) -> u64 {
        self.rng
            .lock()
            .expect("rng lock poisoned")
            .gen_range(1000, 9999)
    }

    /// Recorded stub invocations, in order.
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.snapshot()
    }

    /// The call log, for finer-grained assertions.
    pub fn call_log(&self) -> &CallLog {
        &self.calls
    }

    // ---- fixture setters -----------------------------------------------

    /// Set `.taskcluster.yml` content for `owner/repo@gitref`.
    pub async fn set_taskcluster_yml(&self, owner: &str, repo: &str, gitref: &str, content: Value) {
        self.state
            .write()
            .await
            .set_taskcluster_yml(owner, repo, gitref, content);
    }

    pub async fn set_org_member(&self, org: &str, member: &str) {
        self.state.write().await.set_org_member(org, member);
    }

    pub async fn set_repo_collaborator(&self, owner: &str, repo: &str, username: &str) {
        self.state
            .write()
            .await
            .set_repo_collaborator(owner, repo, username);
    }

    /// Set free-form repo metadata for `owner/repo`.
    pub async fn set_repo_info(&self, owner: &str, repo: &str, info: Value) {
        self.state.write().await.set_repo_info(owner, repo, info);
    }

    /// Register a user fixture. Panics on an incomplete user.
    pub async fn set_user(&self, user: User) {
        self.state.write().await.set_user(user);
    }

    /// Replace the accessible-repositories list.
    pub async fn set_repositories(&self, names: &[&str]) {
        self.state.write().await.set_repositories(names);
    }

    /// Register the commit SHA a fully qualified ref resolves to.
    pub async fn set_commit(&self, owner: &str, repo: &str, gitref: &str, sha: &str) {
        self.state.write().await.set_commit(owner, repo, gitref, sha);
    }

    /// Replace the status list for `owner/repo@gitref`.
    pub async fn set_statuses(
        &self,
        owner: &str,
        repo: &str,
        gitref: &str,
        statuses: Vec<CommitStatus>,
    ) {
        self.state
            .write()
            .await
            .set_statuses(owner, repo, gitref, statuses);
    }

    /// Make the status listing for `owner/repo@gitref` raise `status`.
    pub async fn set_status_error(&self, owner: &str, repo: &str, gitref: &str, status: u16) {
        self.state
            .write()
            .await
            .set_status_error(owner, repo, gitref, status);
    }

    /// Replace the check-run list for `owner/repo@gitref`.
    pub async fn set_checks(&self, owner: &str, repo: &str, gitref: &str, checks: Vec<CheckRun>) {
        self.state
            .write()
            .await
            .set_checks(owner, repo, gitref, checks);
    }

    // ---- read-back helpers ---------------------------------------------

    /// Statuses stored for a ref, if a plain list fixture exists there.
    pub async fn statuses(&self, owner: &str, repo: &str, gitref: &str) -> Option<Vec<CommitStatus>> {
        match self.state.read().await.statuses(owner, repo, gitref) {
            Some(StatusFixture::List(list)) => Some(list.clone()),
            _ => None,
        }
    }

    /// Comments stored for an issue.
    pub async fn comments(&self, owner: &str, repo: &str, issue_number: u64) -> Option<Vec<IssueComment>> {
        self.state
            .read()
            .await
            .comments(owner, repo, issue_number)
            .cloned()
    }

    /// Whether a username has been added to an organization.
    pub async fn is_org_member(&self, org: &str, username: &str) -> bool {
        self.state.read().await.is_org_member(org, username)
    }
}
