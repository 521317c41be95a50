//! Convenient re-exports for common usage.
//!
//! ```
//! use blobkey::prelude::*;
//! ```

pub use crate::compress::{compress, decompress};
pub use crate::error::{BlobkeyError, Result};
pub use crate::key::ContentKey;
pub use crate::stream::read_all;
