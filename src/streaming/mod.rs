//! Media streaming module.
//!
//! Byte-range parsing and the file-serving half of the media handler.
//!
//! # Responses
//!
//! - No `Range` header: `200 OK`, whole file, `Content-Length` = file size
//! - `Range: bytes=<start>-<end>`: `206 Partial Content` with `Content-Range`
//! - Malformed or out-of-bounds range: `416`, no body

mod direct;
pub mod range;

pub use direct::{content_type_for, serve_file};
pub use range::{parse_range_header, ByteRange, RangeSpec};
