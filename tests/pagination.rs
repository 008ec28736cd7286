//! Pagination contract tests against live stubs: exactly one page, the
//! `repositories` envelope hoist, and non-restartability.

use serde_json::json;

use github_sim::{pagination, CommitStatus, FakeGithubAuth};

#[tokio::test]
async fn test_installation_repos_page_is_the_repositories_array() {
    let auth = FakeGithubAuth::new();
    let github = auth.inst(1001);
    github.set_repositories(&["widgets", "gadgets"]).await;

    let mut pages = pagination::iterator(github.apps().list_repos_accessible_to_installation());

    let page = pages.next().await.unwrap().unwrap();
    // the raw envelope carries {total_count, repositories}; the page data
    // must be the repositories array itself
    assert_eq!(page.data, json!([{"name": "widgets"}, {"name": "gadgets"}]));

    assert!(!pages.has_next_page());
    assert!(pages.next().await.is_none());
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn test_status_listing_page_passes_through_unhoisted() {
    let auth = FakeGithubAuth::new();
    let github = auth.inst(1001);
    github
        .set_statuses(
            "acme",
            "widgets",
            "refs/heads/main",
            vec![CommitStatus {
                state: "success".to_string(),
                target_url: None,
                description: None,
                context: Some("ci/build".to_string()),
            }],
        )
        .await;

    let mut pages = pagination::iterator(github.repos().list_commit_statuses_for_ref(
        "acme",
        "widgets",
        "refs/heads/main",
    ));

    let page = pages.next().await.unwrap().unwrap();
    assert_eq!(page.data[0]["state"], "success");
    assert_eq!(page.data[0]["context"], "ci/build");
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn test_check_listing_envelope_is_preserved() {
    let auth = FakeGithubAuth::new();
    let github = auth.inst(1001);

    let mut pages = pagination::iterator(github.checks().list_for_ref(
        "acme",
        "widgets",
        "refs/heads/main",
    ));

    let page = pages.next().await.unwrap().unwrap();
    assert_eq!(page.data, json!({"check_runs": []}));
}

#[tokio::test]
async fn test_stub_errors_surface_through_the_iterator() {
    let auth = FakeGithubAuth::new();
    let github = auth.inst(1001);
    github
        .set_status_error("acme", "widgets", "refs/heads/main", 502)
        .await;

    let mut pages = pagination::iterator(github.repos().list_commit_statuses_for_ref(
        "acme",
        "widgets",
        "refs/heads/main",
    ));

    let err = pages.next().await.unwrap().unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_client_reports_no_next_page() {
    let auth = FakeGithubAuth::new();
    assert!(!auth.inst(1001).has_next_page());
}
