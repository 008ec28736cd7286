//! `checks.*` stub operations.

use serde_json::json;

use crate::client::FakeGithub;
use crate::error::{GithubError, Result};
use crate::media::{CHECK_SUITE_ID, NO_PERMISSION_REPO};
use crate::models::{CheckRun, CheckRunList, CheckRunParams, CheckSuite, CreatedCheckRun, Response};

/// Stub operations under the `checks` namespace.
#[derive(Clone, Copy)]
pub struct Checks<'a> {
    pub(crate) github: &'a FakeGithub,
}

impl Checks<'_> {
    /// Create a check run against `owner/repo@head_sha`.
    ///
    /// The returned id is pseudo-random in `[1000, 9998]`; the suite id is
    /// always [`CHECK_SUITE_ID`].
    pub async fn create(
        self,
        owner: &str,
        repo: &str,
        params: CheckRunParams,
    ) -> Result<Response<CreatedCheckRun>> {
        self.github.record(
            "checks.create",
            json!({
                "owner": owner,
                "repo": repo,
                "name": &params.name,
                "head_sha": &params.head_sha,
                "output": &params.output,
                "details_url": &params.details_url,
                "actions": &params.actions,
                "status": &params.status,
                "conclusion": &params.conclusion,
            }),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }

        let check = CheckRun {
            name: params.name.clone(),
            status: params.status.clone(),
            conclusion: params.conclusion.clone(),
        };
        self.github
            .state
            .write()
            .await
            .add_check(owner, repo, &params.head_sha, check);

        Ok(Response::ok(CreatedCheckRun {
            id: self.github.next_check_run_id(),
            check_suite: CheckSuite { id: CHECK_SUITE_ID },
        }))
    }

    /// Updates are accepted without touching fixtures.
    pub async fn update(
        self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        params: CheckRunParams,
    ) -> Result<()> {
        self.github.record(
            "checks.update",
            json!({
                "owner": owner,
                "repo": repo,
                "check_run_id": check_run_id,
                "name": &params.name,
                "status": &params.status,
                "conclusion": &params.conclusion,
            }),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }
        Ok(())
    }

    /// Re-run requests are accepted without touching fixtures.
    pub async fn rerequest_run(self, owner: &str, repo: &str, check_run_id: u64) -> Result<()> {
        self.github.record(
            "checks.rerequest_run",
            json!({"owner": owner, "repo": repo, "check_run_id": check_run_id}),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }
        Ok(())
    }

    /// Check runs recorded for `owner/repo@gitref`, empty if none.
    pub async fn list_for_ref(
        self,
        owner: &str,
        repo: &str,
        gitref: &str,
    ) -> Result<Response<CheckRunList>> {
        self.github.record(
            "checks.list_for_ref",
            json!({"owner": owner, "repo": repo, "ref": gitref}),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }
        let check_runs = self
            .github
            .state
            .read()
            .await
            .checks_for(owner, repo, gitref)
            .cloned()
            .unwrap_or_default();
        Ok(Response::ok(CheckRunList { check_runs }))
    }
}
