//! In-process simulator of the GitHub App installation API.
//!
//! Drives integration tests of services that talk to GitHub through an
//! installation-scoped client, without any network access. The simulator
//! reproduces the subset of the provider surface such services exercise:
//! per-installation scoping, fixture-driven stub operations, call recording,
//! error injection, and the provider's single-page pagination quirks.
//!
//! # Quick Start
//!
//! ```
//! use github_sim::{CommitHeaders, FakeGithubAuth};
//!
//! #[tokio::main]
//! async fn main() -> github_sim::Result<()> {
//!     let auth = FakeGithubAuth::new();
//!     auth.create_install(1001, "acme", &["widgets"]);
//!
//!     // Test setup: configure fixtures on the installation's client.
//!     let github = auth.installation_github(1001).await;
//!     github.set_commit("acme", "widgets", "refs/heads/main", "deadbeef").await;
//!
//!     // Code under test: call stubs exactly as it would call the real client.
//!     let commit = github
//!         .repos()
//!         .get_commit("acme", "widgets", "refs/heads/main", &CommitHeaders::raw_sha())
//!         .await?;
//!     assert_eq!(commit.data, "deadbeef");
//!
//!     // Assertions: recorded calls and fixture side effects.
//!     assert!(github.call_log().was_called("repos.get_commit"));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`FakeGithubAuth`] owns the set of installations, hands out one
//!   [`FakeGithub`] per installation id, and exposes the app-level
//!   [`AppGithub`] whose only operation is listing installations.
//! - [`FakeGithub`] owns the fixture stores for its installation and exposes
//!   the stub operations grouped the way the provider client library groups
//!   them: [`FakeGithub::repos`], [`FakeGithub::issues`],
//!   [`FakeGithub::checks`], [`FakeGithub::apps`], [`FakeGithub::users`].
//! - [`pagination::iterator`] wraps a listing call in the provider's
//!   async one-page pagination contract.
//!
//! # Failure channels
//!
//! Two, mirroring the real client: [`GithubError::Api`] carries the
//! simulated HTTP status (403 for the `no-permission` sentinel repo, 404 for
//! missing fixtures, or whatever a test injected), and is what the code
//! under test should handle. Fixture-contract violations such as a wrong
//! accept header or a ref that is not fully qualified panic instead, because
//! they are bugs in the test or the code under test.

mod client;
mod error;
mod handlers;
mod media;
mod models;
pub mod pagination;
mod recording;
mod registry;
mod rng;
mod state;

// Re-export core types
pub use client::FakeGithub;
pub use error::{GithubError, Result};
pub use pagination::PageIterator;
pub use registry::{AppGithub, FakeGithubAuth};

// Re-export stub namespaces
pub use handlers::{Apps, Checks, Issues, Repos, Users};

// Re-export provider constants
pub use media::{CHECK_SUITE_ID, NO_PERMISSION_REPO, RAW_SHA_MEDIA_TYPE, TASKCLUSTER_YML_PATH};

// Re-export models
pub use models::{
    Account, CheckRun, CheckRunList, CheckRunOutput, CheckRunParams, CheckSuite, CommitHeaders,
    CommitStatus, CreatedCheckRun, FileContent, Installation, InstallationRepositories,
    IssueComment, RepositoryName, Response, User,
};

// Re-export fixture and recording types
pub use recording::{CallLog, RecordedCall};
pub use state::{InstallationState, StatusFixture};
