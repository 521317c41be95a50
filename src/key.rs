//! Content-addressable keys using BLAKE3 hashing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

/// Immutable identifier for binary content: exact byte length plus a
/// BLAKE3 digest of the full content.
///
/// The "no content" state is a dedicated variant rather than a length
/// sentinel, so an inconsistent key (negative length, missing digest)
/// cannot be represented.
///
/// Equality is byte-exact over `(length, digest)`. Ordering compares
/// length numerically first and falls through to byte-wise digest
/// comparison only when lengths match; [`ContentKey::NoContent`] sorts
/// before every content key. `Hash` is derived alongside `Eq`, so equal
/// keys always hash identically. Comparing against an absent key is
/// expressed as `Option<ContentKey>`, whose derived ordering already
/// places `None` first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKey {
    /// Key for absent content. Sorts before every content key.
    NoContent,
    /// Key for real content, zero-length included.
    Content {
        /// Content size in bytes.
        length: u64,
        /// BLAKE3 hash of the content (32 bytes).
        digest: [u8; 32],
    },
}

impl ContentKey {
    /// Compute the key for a byte buffer. Never fails; an empty buffer
    /// yields a key with `length` 0 and the hash-of-empty digest, not
    /// [`ContentKey::NoContent`].
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let digest = blake3::hash(data);
        Self::Content {
            length: data.len() as u64,
            digest: *digest.as_bytes(),
        }
    }

    /// Compute the key for an optional buffer; `None` yields the
    /// [`ContentKey::NoContent`] sentinel.
    #[must_use]
    pub fn from_optional_bytes(data: Option<&[u8]>) -> Self {
        data.map_or(Self::NoContent, Self::from_bytes)
    }

    /// Compute the key by reading a stream to exhaustion.
    ///
    /// The reader is left fully consumed. Use [`Self::from_seekable`]
    /// when the caller needs the stream back at its original position.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails; no key is constructed.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = blake3::Hasher::new();
        let mut length = 0u64;
        let mut buffer = [0u8; 8192];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
            length += bytes_read as u64;
        }

        Ok(Self::Content {
            length,
            digest: *hasher.finalize().as_bytes(),
        })
    }

    /// Compute the key for a seekable stream, hashing from the current
    /// position to the end.
    ///
    /// The stream position is restored on every exit path, so callers
    /// can reuse the stream afterwards whether hashing succeeded or
    /// failed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the position cannot be
    /// recorded or restored. A read failure is reported even when the
    /// restoring seek also fails.
    pub fn from_seekable<R: Read + Seek>(reader: &mut R) -> io::Result<Self> {
        let start = reader.stream_position()?;
        let hashed = Self::from_reader(&mut *reader);
        let restored = reader.seek(SeekFrom::Start(start));
        let key = hashed?;
        restored?;
        Ok(key)
    }

    /// Content size in bytes, or `None` for the no-content key.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::NoContent => None,
            Self::Content { length, .. } => Some(*length),
        }
    }

    /// Digest bytes, or `None` for the no-content key.
    #[must_use]
    pub fn digest(&self) -> Option<&[u8; 32]> {
        match self {
            Self::NoContent => None,
            Self::Content { digest, .. } => Some(digest),
        }
    }

    /// Digest as a lowercase hex string, or `None` for the no-content
    /// key.
    #[must_use]
    pub fn digest_hex(&self) -> Option<String> {
        self.digest().map(hex::encode)
    }

    /// Whether this key identifies real content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        matches!(self, Self::Content { .. })
    }

    /// Verify that a buffer produces this exact key.
    #[must_use]
    pub fn matches(&self, data: &[u8]) -> bool {
        *self == Self::from_bytes(data)
    }
}

impl Ord for ContentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NoContent, Self::NoContent) => Ordering::Equal,
            (Self::NoContent, Self::Content { .. }) => Ordering::Less,
            (Self::Content { .. }, Self::NoContent) => Ordering::Greater,
            (
                Self::Content {
                    length: lhs_len,
                    digest: lhs_digest,
                },
                Self::Content {
                    length: rhs_len,
                    digest: rhs_digest,
                },
            ) => lhs_len
                .cmp(rhs_len)
                .then_with(|| lhs_digest.cmp(rhs_digest)),
        }
    }
}

impl PartialOrd for ContentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContent => write!(f, "none"),
            Self::Content { length, digest } => {
                write!(f, "blake3:{}:{}", hex::encode(digest), length)
            }
        }
    }
}
