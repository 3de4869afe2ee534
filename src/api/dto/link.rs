//! DTOs for the link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{KeyedLink, Link, NewLink};

/// Wire representation of a link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub key: String,
    pub author: String,
    pub slug: String,
    pub target: String,
    pub date: DateTime<Utc>,
}

impl From<KeyedLink> for LinkResponse {
    fn from(keyed: KeyedLink) -> Self {
        Self {
            key: keyed.key.encode(),
            author: keyed.link.author,
            slug: keyed.link.slug,
            target: keyed.link.target,
            date: keyed.link.date,
        }
    }
}

/// Rejects targets that cannot be sent back in a `Location` header.
///
/// URL parsing drops tabs and newlines, so the `url` check alone lets them
/// through while the raw string is what gets stored.
fn validate_target(target: &str) -> Result<(), ValidationError> {
    if target.chars().any(char::is_control) {
        return Err(ValidationError::new("target_control_chars")
            .with_message(Cow::Borrowed("Target must not contain control characters")));
    }
    Ok(())
}

/// JSON body for `PUT /links/{key}` and JSON `POST /links/`.
///
/// A `key` field in the body is ignored along with any other unknown field:
/// the key always comes from the path or the store.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkPayload {
    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    #[validate(
        url(message = "Target must be an absolute URL"),
        custom(function = "validate_target")
    )]
    pub target: String,

    #[serde(default)]
    pub date: DateTime<Utc>,
}

impl LinkPayload {
    /// Full record for a replace; author and date are taken as sent.
    pub fn into_link(self) -> Link {
        Link::new(self.author, self.slug, self.target, self.date)
    }

    /// Creation input; author and date are dropped and stamped server-side.
    pub fn into_new_link(self) -> NewLink {
        NewLink {
            slug: self.slug,
            target: self.target,
        }
    }
}

/// URL-encoded form body for `POST /links/`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLinkForm {
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    #[validate(
        url(message = "Target must be an absolute URL"),
        custom(function = "validate_target")
    )]
    pub target: String,
}

impl From<AddLinkForm> for NewLink {
    fn from(form: AddLinkForm) -> Self {
        NewLink {
            slug: form.slug,
            target: form.target,
        }
    }
}
