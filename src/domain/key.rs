//! Opaque link keys.
//!
//! Stores identify records by a numeric id. Clients only ever see the encoded
//! form: URL-safe base64 (no padding) of `Link:<id>`. Decoding is strict, so
//! any string a client invents fails here, before it reaches the registry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::fmt;
use thiserror::Error;

/// Entity kind embedded in every encoded key.
const KIND_PREFIX: &str = "Link:";

/// Reasons a key string fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Malformed key: not valid base64")]
    Encoding,
    #[error("Malformed key: wrong entity kind")]
    Kind,
    #[error("Malformed key: invalid id")]
    Id,
}

/// Store-assigned identity of a link record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkKey(i64);

impl LinkKey {
    /// Wraps a raw store id. Ids are positive; the store never hands out zero.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn id(self) -> i64 {
        self.0
    }

    /// Encodes the key into its opaque wire form.
    pub fn encode(self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{KIND_PREFIX}{}", self.0))
    }

    /// Decodes a wire string produced by [`LinkKey::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyError`] for bad base64, a missing or foreign kind prefix,
    /// or an id that is not a positive integer.
    pub fn decode(encoded: &str) -> Result<Self, KeyError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| KeyError::Encoding)?;
        let text = String::from_utf8(bytes).map_err(|_| KeyError::Encoding)?;
        let id = text.strip_prefix(KIND_PREFIX).ok_or(KeyError::Kind)?;

        // Only the canonical decimal form is accepted, so one id has one key.
        match id.parse::<i64>() {
            Ok(n) if n > 0 && n.to_string() == id => Ok(Self(n)),
            _ => Err(KeyError::Id),
        }
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
