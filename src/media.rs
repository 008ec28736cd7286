//! Provider wire-contract constants.

/// Accept header value selecting the raw commit SHA representation of a
/// commit. `repos.get_commit` refuses any other media type.
pub const RAW_SHA_MEDIA_TYPE: &str = "application/vnd.github.3.sha";

/// The only file path the content endpoint serves.
pub const TASKCLUSTER_YML_PATH: &str = ".taskcluster.yml";

/// Repo name that forces a 403 from every permission-gated write operation.
pub const NO_PERMISSION_REPO: &str = "no-permission";

/// Fixed id reported for every created check run's suite.
pub const CHECK_SUITE_ID: u64 = 5555;
