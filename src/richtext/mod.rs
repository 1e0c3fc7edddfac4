//! Rich-text module
//!
//! This module provides the in-memory document model used by the editor
//! (paragraphs of styled spans) and the codec that converts it to and from the
//! stored HTML subset.
//!
//! # Example
//! ```
//! use help_studio::richtext::{decode, encode};
//!
//! let doc = decode("Click <b>Load data</b>.");
//! assert_eq!(encode(&doc), "Click <b>Load data</b>.");
//! ```

mod codec;
mod document;

pub use codec::*;
pub use document::*;
