// Allow long literals (digest constants in tests)
#![allow(clippy::unreadable_literal)]
// Allow format string style choices
#![allow(clippy::uninlined_format_args)]
// Doc backticks optional
#![allow(clippy::doc_markdown)]

//! Blobkey: content-addressable keys for binary blobs.
//!
//! A [`ContentKey`] identifies binary content by its exact byte length
//! plus a BLAKE3 digest of the full content. Two equal-content inputs
//! always produce equal keys, and keys order deterministically by
//! length first, then digest, with the "no content" key sorting before
//! everything else.
//!
//! # Quick Start
//!
//! ```
//! use blobkey::ContentKey;
//!
//! let a = ContentKey::from_bytes(b"hello world");
//! let b = ContentKey::from_bytes(b"hello world");
//! assert_eq!(a, b);
//! assert_eq!(a.size(), Some(11));
//!
//! // Streams work too and produce the same key.
//! let c = ContentKey::from_reader(&b"hello world"[..]).unwrap();
//! assert_eq!(a, c);
//! ```
//!
//! # Ordering
//!
//! Keys form a strict total order: [`ContentKey::NoContent`] sorts
//! first, then keys compare by byte length, and only equal-length keys
//! fall through to byte-wise digest comparison. This makes key ordering
//! stable across processes and suitable for sorted containers.
//!
//! The crate also ships two small utilities the key type is commonly
//! paired with: [`stream::read_all`] for draining a reader into a
//! buffer, and gzip [`compress`]/[`compress::decompress`] helpers for
//! reversible byte transforms. The key is agnostic to whether its
//! input was compressed.

pub mod compress;
pub mod error;
pub mod key;
pub mod prelude;
pub mod stream;

pub use error::{BlobkeyError, Result};
pub use key::ContentKey;
