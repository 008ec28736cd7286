//! `issues.*` stub operations.

use serde_json::json;

use crate::client::FakeGithub;
use crate::error::{GithubError, Result};
use crate::media::NO_PERMISSION_REPO;

/// Stub operations under the `issues` namespace.
#[derive(Clone, Copy)]
pub struct Issues<'a> {
    pub(crate) github: &'a FakeGithub,
}

impl Issues<'_> {
    /// Append a comment to `owner/repo@issue_number`.
    pub async fn create_comment(
        self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<()> {
        self.github.record(
            "issues.create_comment",
            json!({
                "owner": owner,
                "repo": repo,
                "issue_number": issue_number,
                "body": body,
            }),
        );
        if repo == NO_PERMISSION_REPO {
            return Err(GithubError::api(403));
        }
        self.github
            .state
            .write()
            .await
            .add_comment(owner, repo, issue_number, body);
        Ok(())
    }
}
