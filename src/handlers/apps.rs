//! `apps.*` stub operations (installation-scoped).
//!
//! The app-level `list_installations` lives on the registry's
//! [`crate::AppGithub`], not here.

use serde_json::Value;

use crate::client::FakeGithub;
use crate::error::{GithubError, Result};
use crate::models::{InstallationRepositories, Response};

/// Stub operations under the `apps` namespace.
#[derive(Clone, Copy)]
pub struct Apps<'a> {
    pub(crate) github: &'a FakeGithub,
}

impl Apps<'_> {
    /// Deprecated alias; always fails. Use
    /// [`Apps::list_repos_accessible_to_installation`] instead.
    pub async fn list_repos(self) -> Result<()> {
        self.github.record("apps.list_repos", Value::Null);
        Err(GithubError::deprecated(
            "apps.list_repos",
            "apps.list_repos_accessible_to_installation",
        ))
    }

    /// The installation's accessible-repositories container, verbatim.
    pub async fn list_repos_accessible_to_installation(
        self,
    ) -> Result<Response<InstallationRepositories>> {
        self.github
            .record("apps.list_repos_accessible_to_installation", Value::Null);
        Ok(Response::ok(
            self.github.state.read().await.repositories().clone(),
        ))
    }
}
