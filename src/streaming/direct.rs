//! Direct streaming with HTTP range requests.
//!
//! Serves a registered media file either whole (200) or as a single byte
//! range (206). Bodies are streamed in fixed-size chunks so memory stays
//! bounded regardless of file size.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;
use media_proxy_common::{Error, Result};
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use super::range::parse_range_header;

/// Read size for streamed bodies.
const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Serve `file_path` (registered under `route`) with optional range support.
///
/// An absent or empty `range_header` produces a full 200 response. Range
/// failures surface as [`Error::RangeUnparsable`] or
/// [`Error::RangeUnsatisfiable`]; a file that vanished since the scan is
/// [`Error::FileMissing`].
pub async fn serve_file(
    route: &str,
    file_path: &Path,
    range_header: Option<&str>,
) -> Result<Response> {
    let metadata = tokio::fs::metadata(file_path)
        .await
        .map_err(|_| Error::file_missing(route))?;

    let file_size = metadata.len();
    let content_type = content_type_for(file_path);

    match range_header.filter(|value| !value.is_empty()) {
        Some(value) => {
            let range = parse_range_header(value)?.resolve(file_size)?;
            let length = range.len();

            let mut file = File::open(file_path).await?;
            file.seek(SeekFrom::Start(range.start)).await?;

            tracing::debug!(
                route = %route,
                start = range.start,
                end = range.end,
                size = file_size,
                "Serving partial content"
            );

            // A truncated file ends the body early; Take never reads past `length`.
            let body = stream_body(file.take(length), route);

            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_RANGE, range.content_range(file_size)),
                    (header::CONTENT_LENGTH, length.to_string()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                ],
                body,
            )
                .into_response())
        }
        None => {
            let file = File::open(file_path).await?;
            let body = stream_body(file, route);

            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_LENGTH, file_size.to_string()),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                ],
                body,
            )
                .into_response())
        }
    }
}

/// Wrap a reader as a response body, logging I/O failures that cut the
/// transfer short.
fn stream_body<R>(reader: R, route: &str) -> Body
where
    R: AsyncRead + Send + 'static,
{
    let route = route.to_string();
    let stream = ReaderStream::with_capacity(reader, STREAM_CHUNK_SIZE)
        .map_err(Error::StreamIo)
        .inspect_err(move |e| {
            tracing::warn!(route = %route, error = %e, "Media stream aborted");
        });
    Body::from_stream(stream)
}

/// Guess the MIME type from the file extension.
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
