mod common;

use axum::http::StatusCode;
use serde_json::json;
use shortlinks::api::dto::link::LinkResponse;
use shortlinks::domain::key::LinkKey;
use shortlinks::domain::repositories::LinkStore;
use shortlinks::utils::slug::GENERATED_SLUG_LENGTH;

use common::{IDENTITY_HEADER, MEMBER, OTHER_MEMBER};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let app = common::create_test_app();

    let response = app
        .server
        .get("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_links_in_store_order() {
    let app = common::create_test_app();
    common::seed_link(&app.store, "first", "https://one.example.com/").await;
    common::seed_link(&app.store, "second", "https://two.example.com/").await;

    for path in ["/links", "/links/"] {
        let links: Vec<LinkResponse> = app
            .server
            .get(path)
            .add_header(IDENTITY_HEADER, MEMBER)
            .await
            .json();

        let slugs: Vec<&str> = links.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, ["first", "second"]);
    }
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_without_slug_then_redirect() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "target": "https://docs.example.com/guide" }))
        .await;

    response.assert_status_ok();
    let created: LinkResponse = response.json();

    assert_eq!(created.author, MEMBER);
    assert_eq!(created.target, "https://docs.example.com/guide");
    assert_eq!(created.slug.len(), GENERATED_SLUG_LENGTH);
    assert!(created.slug.chars().all(|c| c.is_ascii_alphanumeric()));

    let redirect = app.server.get(&format!("/{}", created.slug)).await;

    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "https://docs.example.com/guide"
    );
    assert_eq!(redirect.header("x-key").to_str().unwrap(), created.key);
}

#[tokio::test]
async fn test_create_link_ignores_client_author_and_date() {
    let app = common::create_test_app();

    let created: LinkResponse = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({
            "key": "bogus",
            "author": "eve@example.com",
            "slug": "wiki",
            "target": "https://wiki.example.com/",
            "date": "2001-01-01T00:00:00Z"
        }))
        .await
        .json();

    assert_eq!(created.author, MEMBER);
    assert_eq!(created.slug, "wiki");
    assert_ne!(created.key, "bogus");
    assert!(created.date.timestamp() > 978_307_200);
}

#[tokio::test]
async fn test_create_link_from_form() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/links")
        .add_header(IDENTITY_HEADER, MEMBER)
        .form(&[("slug", "jira"), ("target", "https://jira.example.com/")])
        .await;

    response.assert_status_ok();
    let created: LinkResponse = response.json();
    assert_eq!(created.slug, "jira");
    assert_eq!(created.author, MEMBER);

    let stored = app
        .store
        .get(LinkKey::decode(&created.key).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.target, "https://jira.example.com/");
}

#[tokio::test]
async fn test_create_link_form_blank_slug_is_generated() {
    let app = common::create_test_app();

    let created: LinkResponse = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .form(&[("slug", ""), ("target", "https://example.com/")])
        .await
        .json();

    assert_eq!(created.slug.len(), GENERATED_SLUG_LENGTH);
}

#[tokio::test]
async fn test_create_link_invalid_target() {
    let app = common::create_test_app();

    app.server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "bad", "target": "not a url" }))
        .await
        .assert_status_bad_request();

    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_target_with_control_characters() {
    let app = common::create_test_app();

    app.server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "target": "https://a.example/x\ny" }))
        .await
        .assert_status_bad_request();

    app.server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .form(&[("slug", "tabbed"), ("target", "https://a.example/\tx")])
        .await
        .assert_status_bad_request();

    assert!(app.store.list().await.unwrap().is_empty());

    let key = common::seed_link(&app.store, "clean", "https://a.example/x").await;
    app.server
        .put(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "clean", "target": "https://a.example/x\r\ny" }))
        .await
        .assert_status_bad_request();

    let redirect = app.server.get("/clean").await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "https://a.example/x"
    );
}

#[tokio::test]
async fn test_create_link_non_ascii_target_redirects() {
    let app = common::create_test_app();

    let created: LinkResponse = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "cafe", "target": "https://a.example/café" }))
        .await
        .json();

    let redirect = app.server.get(&format!("/{}", created.slug)).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header("location").as_bytes(), "https://a.example/café".as_bytes());
}

#[tokio::test]
async fn test_create_link_reserved_or_malformed_slug() {
    let app = common::create_test_app();

    for slug in ["links", "health", "has space", "a/b"] {
        app.server
            .post("/links/")
            .add_header(IDENTITY_HEADER, MEMBER)
            .json(&json!({ "slug": slug, "target": "https://example.com/" }))
            .await
            .assert_status_bad_request();
    }

    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_malformed_json() {
    let app = common::create_test_app();

    app.server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .content_type("application/json")
        .bytes("{not json".into())
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_create_duplicate_slug_is_allowed() {
    let app = common::create_test_app();
    let first = common::seed_link(&app.store, "dup", "https://first.example.com/").await;

    let second: LinkResponse = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "dup", "target": "https://second.example.com/" }))
        .await
        .json();

    assert_ne!(second.key, first.encode());

    let redirect = app.server.get("/dup").await;
    assert_eq!(
        redirect.header("location").to_str().unwrap(),
        "https://first.example.com/"
    );
    assert_eq!(redirect.header("x-key").to_str().unwrap(), first.encode());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = common::create_test_app();

    let created: LinkResponse = app
        .server
        .post("/links/")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "roadmap", "target": "https://a.example/x" }))
        .await
        .json();

    let fetched: LinkResponse = app
        .server
        .get(&format!("/links/{}", created.key))
        .await
        .json();

    assert_eq!(fetched, created);
    assert_eq!(fetched.slug, "roadmap");
    assert_eq!(fetched.target, "https://a.example/x");
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_link_is_public() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "docs", "https://docs.example.com/").await;

    let response = app.server.get(&format!("/links/{key}")).await;

    response.assert_status_ok();
    let link: LinkResponse = response.json();
    assert_eq!(link.key, key.encode());
    assert_eq!(link.slug, "docs");
    assert_eq!(link.author, OTHER_MEMBER);
}

#[tokio::test]
async fn test_get_link_malformed_key() {
    let app = common::create_test_app();

    app.server
        .get("/links/not-a-real-key")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_get_link_not_found() {
    let app = common::create_test_app();

    app.server
        .get(&format!("/links/{}", LinkKey::new(999)))
        .await
        .assert_status_not_found();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_replaces_record() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "old", "https://old.example.com/").await;

    app.server
        .put(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({
            "author": "carol@example.com",
            "slug": "new",
            "target": "https://new.example.com/",
            "date": "2024-01-01T00:00:00Z"
        }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let link: LinkResponse = app.server.get(&format!("/links/{key}")).await.json();
    assert_eq!(link.slug, "new");
    assert_eq!(link.target, "https://new.example.com/");
    assert_eq!(link.author, "carol@example.com");
    assert_eq!(link.date.to_rfc3339(), "2024-01-01T00:00:00+00:00");

    app.server.get("/old").await.assert_status_not_found();
    app.server.get("/new").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_update_link_is_idempotent() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "same", "https://example.com/").await;
    let body = json!({
        "author": MEMBER,
        "slug": "same",
        "target": "https://example.com/v2",
        "date": "2024-01-01T00:00:00Z"
    });

    for _ in 0..2 {
        app.server
            .put(&format!("/links/{key}"))
            .add_header(IDENTITY_HEADER, MEMBER)
            .json(&body)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    assert_eq!(app.store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_link_without_date_stores_zero_time() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "undated", "https://example.com/").await;

    app.server
        .put(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "undated", "target": "https://example.com/v2" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let link: LinkResponse = app.server.get(&format!("/links/{key}")).await.json();
    assert_eq!(link.date.timestamp(), 0);
    assert_eq!(link.author, "");
    assert_eq!(link.target, "https://example.com/v2");
}

#[tokio::test]
async fn test_update_link_not_found() {
    let app = common::create_test_app();

    app.server
        .put(&format!("/links/{}", LinkKey::new(42)))
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "ghost", "target": "https://example.com/" }))
        .await
        .assert_status_not_found();

    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_link_malformed_key() {
    let app = common::create_test_app();

    app.server
        .put("/links/not-a-real-key")
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "x", "target": "https://example.com/" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_update_link_malformed_body() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "keep", "https://example.com/").await;

    app.server
        .put(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .content_type("application/json")
        .bytes("[1, 2".into())
        .await
        .assert_status_bad_request();

    app.server
        .put(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .json(&json!({ "slug": "", "target": "https://example.com/" }))
        .await
        .assert_status_bad_request();

    let stored = app.store.get(key).await.unwrap().unwrap();
    assert_eq!(stored.slug, "keep");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link() {
    let app = common::create_test_app();
    let key = common::seed_link(&app.store, "gone", "https://example.com/").await;

    app.server
        .delete(&format!("/links/{key}"))
        .add_header(IDENTITY_HEADER, MEMBER)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/links/{key}"))
        .await
        .assert_status_not_found();
    app.server.get("/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_absent_key_succeeds() {
    let app = common::create_test_app();

    for _ in 0..2 {
        app.server
            .delete(&format!("/links/{}", LinkKey::new(7)))
            .add_header(IDENTITY_HEADER, MEMBER)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn test_delete_link_foreign_key_kind() {
    let app = common::create_test_app();

    app.server
        .delete("/links/VXNlcjox")
        .add_header(IDENTITY_HEADER, MEMBER)
        .await
        .assert_status_bad_request();
}
