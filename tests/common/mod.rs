#![allow(dead_code)]

use axum::http::HeaderName;
use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;

use shortlinks::application::services::{AuthService, LinkService};
use shortlinks::domain::entities::Link;
use shortlinks::domain::key::LinkKey;
use shortlinks::domain::repositories::LinkStore;
use shortlinks::infrastructure::identity::HeaderIdentityProvider;
use shortlinks::infrastructure::persistence::MemoryLinkStore;
use shortlinks::routes::app_router;
use shortlinks::state::AppState;

pub const IDENTITY_HEADER: &str = "x-forwarded-email";
pub const MEMBER: &str = "alice@example.com";
pub const OTHER_MEMBER: &str = "bob@example.com";
pub const OUTSIDER: &str = "mallory@evil.com";

/// Full application over an in-memory store.
///
/// The store handle is returned alongside the server so tests can seed and
/// inspect records without going through the API.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryLinkStore>,
}

pub fn create_test_app() -> TestApp {
    let store = Arc::new(MemoryLinkStore::new());

    let provider = HeaderIdentityProvider::new(
        HeaderName::from_static(IDENTITY_HEADER),
        "/oauth2/start".to_string(),
        "rd".to_string(),
    );

    let state = AppState::new(
        Arc::new(LinkService::new(store.clone())),
        Arc::new(AuthService::new(Arc::new(provider), "example.com")),
        "static/index.html",
    );

    let server = TestServer::new(app_router(state)).unwrap();

    TestApp { server, store }
}

pub async fn seed_link(store: &MemoryLinkStore, slug: &str, target: &str) -> LinkKey {
    store
        .insert(Link::new(
            OTHER_MEMBER.to_string(),
            slug.to_string(),
            target.to_string(),
            Utc::now(),
        ))
        .await
        .unwrap()
}
