//! Provider-shaped request and response records.
//!
//! These types mirror the argument and response shapes of the subset of the
//! provider client library the simulator stands in for. Field names match
//! the provider's JSON so recorded calls and serialized responses read the
//! same as real traffic.

use serde::{Deserialize, Serialize};

use crate::media::RAW_SHA_MEDIA_TYPE;

/// Response envelope returned by read operations, mirroring the provider
/// client library's `{ status, data }` shape.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Response<T> {
    pub status: u16,
    pub data: T,
}

impl<T> Response<T> {
    pub(crate) fn ok(data: T) -> Self {
        Self { status: 200, data }
    }
}

/// A commit status, both as created and as listed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Status state, e.g. `pending`, `success`, `failure`, `error`.
    pub state: String,
    #[serde(default)]
    pub target_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

/// A comment on an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    pub body: String,
}

/// A check run, both as created and as listed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRun {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
}

/// Arguments for `checks().create` beyond the owner/repo pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckRunParams {
    pub name: String,
    pub head_sha: String,
    pub output: Option<CheckRunOutput>,
    pub details_url: Option<String>,
    /// Requested actions, passed through untyped.
    pub actions: Option<serde_json::Value>,
    pub status: Option<String>,
    pub conclusion: Option<String>,
}

/// Output block attached to a check run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckRunOutput {
    pub title: String,
    pub summary: String,
    pub text: Option<String>,
}

/// A freshly created check run: its id and the suite it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCheckRun {
    pub id: u64,
    pub check_suite: CheckSuite,
}

/// The suite a check run belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSuite {
    pub id: u64,
}

/// Envelope for the check-run listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunList {
    pub check_runs: Vec<CheckRun>,
}

/// A registered user fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
}

/// File-content response: the fixture value, JSON-serialized and
/// base64-encoded the way the provider returns file bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub content: String,
}

/// One repository entry in the installation listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryName {
    pub name: String,
}

/// The accessible-repositories container for an installation.
///
/// The items live under `repositories` rather than the page's primary data
/// field; see the [`crate::pagination`] module for how listings over this
/// envelope are normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationRepositories {
    pub total_count: u64,
    pub repositories: Vec<RepositoryName>,
}

/// One installation as enumerated by the app-level client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installation {
    pub id: u64,
    pub account: Account,
}

/// The account an installation is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Owner login, `None` for installations never attached to an owner.
    pub login: Option<String>,
}

/// Request headers accepted by `repos().get_commit`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommitHeaders {
    pub accept: Option<String>,
}

impl CommitHeaders {
    /// Headers requesting the raw commit SHA representation.
    pub fn raw_sha() -> Self {
        Self {
            accept: Some(RAW_SHA_MEDIA_TYPE.to_string()),
        }
    }
}
