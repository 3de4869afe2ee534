//! Slug generation and validation utilities.
//!
//! Generated slugs are random alphanumeric tokens. Caller-supplied slugs are
//! checked so that every slug stays reachable as a single path segment.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated slugs.
pub const GENERATED_SLUG_LENGTH: usize = 16;

/// Longest slug a caller may choose.
pub const MAX_SLUG_LENGTH: usize = 64;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug regex is valid"));

/// Slugs that would collide with fixed routes.
const RESERVED_SLUGS: &[&str] = &["links", "health"];

/// Generates a random URL-safe slug of [`GENERATED_SLUG_LENGTH`] characters.
pub fn generate_slug() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SLUG_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied slug.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if any rule is violated.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return Err(AppError::bad_request(format!(
            "Slug must be 1-{MAX_SLUG_LENGTH} characters"
        )));
    }

    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Slug can only contain letters, digits, hyphens and underscores",
        ));
    }

    if RESERVED_SLUGS.contains(&slug) {
        return Err(AppError::bad_request(format!("Slug '{slug}' is reserved")));
    }

    Ok(())
}
