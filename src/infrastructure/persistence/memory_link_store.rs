//! In-process link store for development and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::entities::{KeyedLink, Link};
use crate::domain::key::LinkKey;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

#[derive(Default)]
struct State {
    last_id: i64,
    links: BTreeMap<i64, Link>,
}

/// Link store backed by an ordered in-memory map.
///
/// Keys are handed out from a monotonically increasing counter, so map order
/// is creation order. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryLinkStore {
    state: RwLock<State>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::internal("Link store lock poisoned")
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, link: Link) -> Result<LinkKey, AppError> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let id = state.last_id;
        state.links.insert(id, link);
        Ok(LinkKey::new(id))
    }

    async fn get(&self, key: LinkKey) -> Result<Option<Link>, AppError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.links.get(&key.id()).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<KeyedLink>, AppError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .links
            .iter()
            .find(|(_, link)| link.slug == slug)
            .map(|(id, link)| KeyedLink::new(LinkKey::new(*id), link.clone())))
    }

    async fn list(&self) -> Result<Vec<KeyedLink>, AppError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .links
            .iter()
            .map(|(id, link)| KeyedLink::new(LinkKey::new(*id), link.clone()))
            .collect())
    }

    async fn replace(&self, key: LinkKey, link: Link) -> Result<bool, AppError> {
        let mut state = self.state.write().map_err(poisoned)?;
        match state.links.get_mut(&key.id()) {
            Some(existing) => {
                *existing = link;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, key: LinkKey) -> Result<(), AppError> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.links.remove(&key.id());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.state.read().is_ok()
    }
}
