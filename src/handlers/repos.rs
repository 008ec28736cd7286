//! `repos.*` stub operations.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use crate::client::FakeGithub;
use crate::error::{GithubError, Result};
use crate::media::{NO_PERMISSION_REPO, RAW_SHA_MEDIA_TYPE, TASKCLUSTER_YML_PATH};
use crate::models::{CommitHeaders, CommitStatus, FileContent, Response};
use crate::state::StatusFixture;

/// Stub operations under the `repos` namespace.
#[derive(Clone, Copy)]
pub struct Repos<'a> {
    pub(crate) github: &'a FakeGithub,
}

impl Repos<'_> {
    /// Deprecated alias; always fails. Use
    /// [`Repos::create_commit_status`] instead.
    pub async fn create_status(self) -> Result<()> {
        self.github.record("repos.create_status", Value::Null);
        Err(GithubError::deprecated(
            "repos.create_status",
            "repos.create_commit_status",
        ))
    }

    /// Attach a commit status to `owner/repo@sha`.
    pub async fn create_commit_status(
        self,
        owner: &str,
        repo: &str,
        sha: &str,
        status: CommitStatus,
    ) -> Result<()> {
        self.github.record(
            "repos.create_commit_status",
            json!({
                "owner": owner,
                "repo": repo,
                "sha": sha,
                "state": &status.state,
                "target_url": &status.target_url,
                "description": &status.description,
                "context": &status.context,
            }),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }
        self.github
            .state
            .write()
            .await
            .add_status(owner, repo, sha, status);
        Ok(())
    }

    /// Commit comments are accepted and dropped.
    pub async fn create_commit_comment(
        self,
        owner: &str,
        repo: &str,
        sha: &str,
        body: &str,
    ) -> Result<()> {
        self.github.record(
            "repos.create_commit_comment",
            json!({"owner": owner, "repo": repo, "commit_sha": sha, "body": body}),
        );
        Ok(())
    }

    /// Resolve a fully qualified ref to its commit SHA.
    ///
    /// The caller must ask for the raw-SHA media type and pass a full
    /// `refs/...` path; anything else is a fixture-contract violation and
    /// panics rather than returning a simulated provider error.
    pub async fn get_commit(
        self,
        owner: &str,
        repo: &str,
        gitref: &str,
        headers: &CommitHeaders,
    ) -> Result<Response<String>> {
        self.github.record(
            "repos.get_commit",
            json!({"owner": owner, "repo": repo, "ref": gitref, "headers": headers}),
        );
        assert_eq!(
            headers.accept.as_deref(),
            Some(RAW_SHA_MEDIA_TYPE),
            "repos.get_commit requires the raw SHA media type"
        );
        assert!(
            gitref.starts_with("refs/"),
            "repos.get_commit requires a full ref path"
        );
        match self.github.state.read().await.commit(owner, repo, gitref) {
            Some(sha) => Ok(Response::ok(sha.to_string())),
            None => Err(GithubError::api(404)),
        }
    }

    /// Succeeds iff `username` is a collaborator on `owner/repo`.
    pub async fn check_collaborator(self, owner: &str, repo: &str, username: &str) -> Result<()> {
        self.github.record(
            "repos.check_collaborator",
            json!({"owner": owner, "repo": repo, "username": username}),
        );
        if self
            .github
            .state
            .read()
            .await
            .is_collaborator(owner, repo, username)
        {
            Ok(())
        } else {
            Err(GithubError::api(404))
        }
    }

    /// Repo metadata fixture for `owner/repo`.
    pub async fn get(self, owner: &str, repo: &str) -> Result<Response<Value>> {
        self.github
            .record("repos.get", json!({"owner": owner, "repo": repo}));
        match self.github.state.read().await.repo_info(owner, repo) {
            Some(info) => Ok(Response::ok(info.clone())),
            None => Err(GithubError::api(404)),
        }
    }

    /// Deprecated alias; always fails. Use [`Repos::get_content`] instead.
    pub async fn get_contents(self) -> Result<()> {
        self.github.record("repos.get_contents", Value::Null);
        Err(GithubError::deprecated(
            "repos.get_contents",
            "repos.get_content",
        ))
    }

    /// `.taskcluster.yml` content for `owner/repo@gitref`, JSON-serialized
    /// and base64-encoded the way the provider returns file bodies.
    pub async fn get_content(
        self,
        owner: &str,
        repo: &str,
        path: &str,
        gitref: &str,
    ) -> Result<Response<FileContent>> {
        self.github.record(
            "repos.get_content",
            json!({"owner": owner, "repo": repo, "path": path, "ref": gitref}),
        );
        assert_eq!(
            path, TASKCLUSTER_YML_PATH,
            "repos.get_content only serves .taskcluster.yml"
        );
        let state = self.github.state.read().await;
        match state.taskcluster_yml(owner, repo, gitref) {
            Some(content) => {
                let encoded = BASE64.encode(serde_json::to_vec(content)?);
                Ok(Response::ok(FileContent { content: encoded }))
            }
            None => Err(GithubError::api(404)),
        }
    }

    /// Deprecated alias; always fails. Use
    /// [`Repos::list_commit_statuses_for_ref`] instead.
    pub async fn list_statuses_for_ref(self) -> Result<()> {
        self.github.record("repos.list_statuses_for_ref", Value::Null);
        Err(GithubError::deprecated(
            "repos.list_statuses_for_ref",
            "repos.list_commit_statuses_for_ref",
        ))
    }

    /// Statuses for `owner/repo@gitref`, oldest first. An injected error
    /// status on the fixture is raised instead of data.
    pub async fn list_commit_statuses_for_ref(
        self,
        owner: &str,
        repo: &str,
        gitref: &str,
    ) -> Result<Response<Vec<CommitStatus>>> {
        self.github.record(
            "repos.list_commit_statuses_for_ref",
            json!({"owner": owner, "repo": repo, "ref": gitref}),
        );
        let state = self.github.state.read().await;
        match state.statuses(owner, repo, gitref) {
            Some(StatusFixture::ErrorStatus(status)) => Err(GithubError::api(*status)),
            Some(StatusFixture::List(list)) => Ok(Response::ok(list.clone())),
            None => Err(GithubError::api(404)),
        }
    }
}
