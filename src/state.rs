//! Shared application state injected into every handler.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    /// Management UI served to authorized members at `/`.
    pub index_file: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        index_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            index_file: Arc::new(index_file.into()),
        }
    }
}
