//! Incremental hex and base64 text filters.
//!
//! Each codec is a small stateful value implementing the [`Filter`] contract:
//! feed byte chunks through [`update`](Filter::update) as they arrive, call
//! [`finalize`](Filter::finalize) once at end-of-stream to flush carry state
//! and padding, and reuse the value via [`clear`](Filter::clear). Partial
//! groups are carried across call boundaries, so splitting the input
//! differently never changes the concatenated output.
//!
//! The [`TextFilter`] trait layers whole-buffer and string-typed convenience
//! operations on top, and the [`hex`] and [`base64`] modules offer one-shot
//! free functions for non-streaming use.
//!
//! # Examples
//!
//! One-shot:
//!
//! ```
//! let text = textfilter::base64::encode(b"hello world");
//! assert_eq!("aGVsbG8gd29ybGQ=", text);
//! assert_eq!(b"hello world".to_vec(), textfilter::base64::decode(&text).unwrap());
//! ```
//!
//! Streaming across chunk boundaries:
//!
//! ```
//! use textfilter::{Base64, Direction, Filter};
//!
//! let mut b64 = Base64::new(Direction::Decode);
//! let mut out = b64.update(b"aGVsbG8gd2").unwrap();
//! out.extend(b64.update(b"9ybGQ=").unwrap());
//! out.extend(b64.finalize().unwrap());
//! assert_eq!(b"hello world", &out[..]);
//! ```
//!
//! Decoding never panics on malformed input; errors carry the offset of the
//! offending byte within the session:
//!
//! ```
//! use textfilter::CodecError;
//!
//! assert_eq!(
//!     Err(CodecError::InvalidByte(4, b'!')),
//!     textfilter::hex::decode("6865!c6c6f"),
//! );
//! ```

#![deny(missing_docs)]

pub mod base64;
mod error;
mod filter;
pub mod hex;
pub mod io;
mod tables;

pub use crate::base64::Base64;
pub use crate::error::CodecError;
pub use crate::filter::{Direction, Filter, TextFilter};
pub use crate::hex::Hex;
