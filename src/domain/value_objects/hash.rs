//! Content Hash Value Object
//!
//! SHA-256 digests for rendered files and whole rendered trees. Two renders
//! of the same flag set must produce equal tree digests.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Always carries the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Hash raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    /// Hash UTF-8 content
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Hash an ordered sequence of tree entries
    ///
    /// Each entry is `(path, marker, body)`; the caller is responsible for a
    /// stable order. Fields are length-prefixed so that moving bytes between
    /// a path and a body changes the digest.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a [u8])>,
    {
        let mut hasher = Sha256::new();
        for (path, marker, body) in entries {
            for field in [path.as_bytes(), marker.as_bytes(), body] {
                hasher.update((field.len() as u64).to_le_bytes());
                hasher.update(field);
            }
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    /// Full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// First 12 hex characters, for human output
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(12)]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
