//! Media-Proxy - Serve a directory of images and videos over HTTP
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod registry;
pub mod server;
pub mod streaming;
