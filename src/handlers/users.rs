//! `users.*` stub operations.

use serde_json::json;

use crate::client::FakeGithub;
use crate::error::{GithubError, Result};
use crate::models::{Response, User};

/// Stub operations under the `users` namespace.
#[derive(Clone, Copy)]
pub struct Users<'a> {
    pub(crate) github: &'a FakeGithub,
}

impl Users<'_> {
    /// The first registered user with the given username.
    pub async fn get_by_username(self, username: &str) -> Result<Response<User>> {
        self.github
            .record("users.get_by_username", json!({"username": username}));
        match self.github.state.read().await.user_by_username(username) {
            Some(user) => Ok(Response::ok(user.clone())),
            None => Err(GithubError::api(404)),
        }
    }
}
