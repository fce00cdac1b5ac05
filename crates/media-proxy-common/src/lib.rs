//! Media-Proxy-Common: Shared types and utilities.
//!
//! This crate provides functionality used by both the route registry and the
//! request handlers of media-proxy:
//!
//! - **Path Utilities**: Classify files as image or video by extension
//! - **Error Handling**: The error taxonomy shared by scanning and serving
//!
//! # Examples
//!
//! ```
//! use media_proxy_common::paths::{is_supported_media, MediaKind};
//! use media_proxy_common::{Error, Result};
//! use std::path::Path;
//!
//! assert!(is_supported_media(Path::new("clip.MP4")));
//! assert_eq!(MediaKind::from_path(Path::new("clip.mp4")), MediaKind::Video);
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("/media/missing.mp4"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
pub use paths::MediaKind;
