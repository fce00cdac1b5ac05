//! Path utilities for classifying media files by extension.
//!
//! The scanner only registers files whose extension appears in one of these
//! sets, and the listing endpoint reports each entry as either an image or a
//! video based on the same tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Image file extensions served by the proxy.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Video and streaming file extensions served by the proxy.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v", "3gp", "ts", "m3u8",
];

/// Coarse media category reported by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video or stream playlist.
    Video,
}

impl MediaKind {
    /// Classify a path by extension.
    ///
    /// Anything that is not a known video extension is reported as an image.
    pub fn from_path(path: &Path) -> Self {
        if is_video_file(path) {
            Self::Video
        } else {
            Self::Image
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use media_proxy_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("clip.mkv")));
/// assert!(is_video_file(Path::new("/streams/live.m3u8")));
/// assert!(!is_video_file(Path::new("poster.jpg")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has an image file extension.
pub fn is_image_file(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Check if a path has any extension the proxy serves.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use media_proxy_common::paths::is_supported_media;
///
/// assert!(is_supported_media(Path::new("holiday.JPEG")));
/// assert!(is_supported_media(Path::new("clip.3gp")));
/// assert!(!is_supported_media(Path::new("notes.txt")));
/// ```
pub fn is_supported_media(path: &Path) -> bool {
    is_image_file(path) || is_video_file(path)
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

/// Get the list of image file extensions.
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}

/// Get every supported extension, images first.
#[must_use]
pub fn supported_extensions() -> Vec<&'static str> {
    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .copied()
        .collect()
}
