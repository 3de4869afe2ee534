//! Link entity representing a slug-to-target mapping.

use chrono::{DateTime, Utc};

use crate::domain::key::LinkKey;

/// The stored payload of a shortlink.
///
/// Has no key field: the key is owned by the store and layered on top via
/// [`KeyedLink`], so it can never be written into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Email of the member who created the link.
    pub author: String,
    pub slug: String,
    pub target: String,
    pub date: DateTime<Utc>,
}

impl Link {
    pub fn new(author: String, slug: String, target: String, date: DateTime<Utc>) -> Self {
        Self {
            author,
            slug,
            target,
            date,
        }
    }
}

/// A persisted link together with its store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedLink {
    pub key: LinkKey,
    pub link: Link,
}

impl KeyedLink {
    pub fn new(key: LinkKey, link: Link) -> Self {
        Self { key, link }
    }
}

/// Caller-supplied input for creating a link.
///
/// An empty `slug` asks the registry to generate one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub target: String,
}
