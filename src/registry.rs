//! Installation registry and app-level client.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::FakeGithub;
use crate::error::Result;
use crate::models::{Account, Installation, Response};
use crate::state::InstallationState;

type InstallationMap = Arc<Mutex<HashMap<u64, Arc<FakeGithub>>>>;

/// Registry of simulated installations.
///
/// Stands in for the auth layer that exchanges an installation id for an
/// authenticated API client. Construct one per test run and hand it to both
/// test setup and the code under test; [`FakeGithubAuth::reset`] between
/// tests discards every client and its fixtures.
///
/// Clients are created lazily and repeated lookups return the identical
/// instance until reset:
///
/// ```
/// use std::sync::Arc;
/// use github_sim::FakeGithubAuth;
///
/// let auth = FakeGithubAuth::new();
/// assert!(Arc::ptr_eq(&auth.inst(1001), &auth.inst(1001)));
/// auth.reset();
/// ```
#[derive(Debug, Default)]
pub struct FakeGithubAuth {
    installations: InstallationMap,
}

impl FakeGithubAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client for an installation, created on first access. Sync shorthand
    /// for use in test scripts.
    pub fn inst(&self, installation_id: u64) -> Arc<FakeGithub> {
        let mut installations = self
            .installations
            .lock()
            .expect("installation map lock poisoned");
        installations
            .entry(installation_id)
            .or_insert_with(|| Arc::new(FakeGithub::new(installation_id)))
            .clone()
    }

    /// Client for an installation, matching the async calling convention of
    /// the real auth layer.
    pub async fn installation_github(&self, installation_id: u64) -> Arc<FakeGithub> {
        self.inst(installation_id)
    }

    /// Insert a new install, replacing any client already registered under
    /// `installation_id`. The client is attached to `owner` and its
    /// accessible-repositories list is seeded from `repos`.
    pub fn create_install(&self, installation_id: u64, owner: &str, repos: &[&str]) {
        let mut state = InstallationState::new();
        state.set_repositories(repos);
        let installation = FakeGithub::from_state(installation_id, Some(owner.to_string()), state);
        self.installations
            .lock()
            .expect("installation map lock poisoned")
            .insert(installation_id, Arc::new(installation));
    }

    /// Discard every client. Subsequent lookups produce fresh state.
    pub fn reset(&self) {
        self.installations
            .lock()
            .expect("installation map lock poisoned")
            .clear();
    }

    /// App-level client, scoped to no installation.
    pub async fn app_github(&self) -> AppGithub {
        AppGithub {
            installations: Arc::clone(&self.installations),
        }
    }
}

/// Reduced-capability app-level client: its only operation is enumerating
/// installations.
#[derive(Debug)]
pub struct AppGithub {
    installations: InstallationMap,
}

impl AppGithub {
    /// All currently registered installations, in id order. Lazily created
    /// installations report no account login.
    pub async fn list_installations(&self) -> Result<Response<Vec<Installation>>> {
        let mut installations: Vec<Installation> = self
            .installations
            .lock()
            .expect("installation map lock poisoned")
            .iter()
            .map(|(id, github)| Installation {
                id: *id,
                account: Account {
                    login: github.installed_on().map(str::to_string),
                },
            })
            .collect();
        // map iteration order is unspecified
        installations.sort_by_key(|installation| installation.id);
        Ok(Response::ok(installations))
    }
}
