//! Registry lifecycle tests: lazy creation, identity, reset, and the
//! app-level installation listing.

use std::sync::Arc;

use github_sim::FakeGithubAuth;

#[tokio::test]
async fn test_repeated_lookups_return_identical_client() {
    let auth = FakeGithubAuth::new();

    let first = auth.inst(1001);
    let second = auth.inst(1001);
    assert!(Arc::ptr_eq(&first, &second));

    let via_async = auth.installation_github(1001).await;
    assert!(Arc::ptr_eq(&first, &via_async));

    assert!(!Arc::ptr_eq(&first, &auth.inst(1002)));
}

#[tokio::test]
async fn test_reset_discards_all_clients() {
    let auth = FakeGithubAuth::new();

    let github = auth.inst(1001);
    github
        .set_commit("acme", "widgets", "refs/heads/main", "deadbeef")
        .await;

    auth.reset();

    let fresh = auth.inst(1001);
    assert!(!Arc::ptr_eq(&github, &fresh));
    assert_eq!(fresh.statuses("acme", "widgets", "refs/heads/main").await, None);
    assert!(fresh.recorded_calls().is_empty());
}

#[tokio::test]
async fn test_create_install_attaches_owner_and_repos() {
    let auth = FakeGithubAuth::new();
    auth.create_install(1001, "acme", &["widgets", "gadgets"]);

    let github = auth.inst(1001);
    assert_eq!(github.installation_id(), 1001);
    assert_eq!(github.installed_on(), Some("acme"));

    let repos = github
        .apps()
        .list_repos_accessible_to_installation()
        .await
        .unwrap();
    assert_eq!(repos.data.total_count, 2);
    assert_eq!(repos.data.repositories[0].name, "widgets");
    assert_eq!(repos.data.repositories[1].name, "gadgets");
}

#[tokio::test]
async fn test_create_install_overwrites_existing_client() {
    let auth = FakeGithubAuth::new();

    let original = auth.inst(1001);
    original
        .set_commit("acme", "widgets", "refs/heads/main", "deadbeef")
        .await;

    auth.create_install(1001, "acme", &["widgets"]);

    let replaced = auth.inst(1001);
    assert!(!Arc::ptr_eq(&original, &replaced));
    assert_eq!(replaced.installed_on(), Some("acme"));
    let err = replaced
        .repos()
        .get_commit(
            "acme",
            "widgets",
            "refs/heads/main",
            &github_sim::CommitHeaders::raw_sha(),
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_installations_reflects_live_registry() {
    let auth = FakeGithubAuth::new();
    auth.create_install(7, "acme", &["widgets"]);
    auth.inst(3); // lazily created, attached to no owner

    let app = auth.app_github().await;
    let installations = app.list_installations().await.unwrap().data;

    assert_eq!(installations.len(), 2);
    assert_eq!(installations[0].id, 3);
    assert_eq!(installations[0].account.login, None);
    assert_eq!(installations[1].id, 7);
    assert_eq!(installations[1].account.login.as_deref(), Some("acme"));

    auth.reset();
    let installations = app.list_installations().await.unwrap().data;
    assert!(installations.is_empty());
}

#[tokio::test]
async fn test_installations_are_isolated() {
    let auth = FakeGithubAuth::new();

    auth.inst(1)
        .set_repo_collaborator("acme", "widgets", "alice")
        .await;

    auth.inst(1)
        .repos()
        .check_collaborator("acme", "widgets", "alice")
        .await
        .expect("collaborator visible on its own installation");

    let err = auth
        .inst(2)
        .repos()
        .check_collaborator("acme", "widgets", "alice")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
