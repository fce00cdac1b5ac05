//! HTTP `Range` header parsing.
//!
//! Only the single-range `bytes=<start>-<end>` form is understood. The match
//! is unanchored and takes the first occurrence, so a multi-range header such
//! as `bytes=0-10,20-30` is served as `0-10`. An empty start is read as `0`
//! rather than as an RFC 7233 suffix length.

use media_proxy_common::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"bytes=(\d*)-(\d*)").expect("range pattern is valid"))
}

/// A parsed but not yet validated range. `None` means the bound was omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// Inclusive byte span into a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

#[allow(clippy::len_without_is_empty)]
impl ByteRange {
    /// Number of bytes covered, `end - start + 1`.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for a file of `file_size` bytes.
    pub fn content_range(&self, file_size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, file_size)
    }
}

/// Parse a `Range` header value.
///
/// Returns [`Error::RangeUnparsable`] if no `bytes=<digits>-<digits>` form is
/// present or a bound does not fit in a `u64`.
pub fn parse_range_header(value: &str) -> Result<RangeSpec> {
    let caps = range_pattern()
        .captures(value)
        .ok_or_else(|| Error::range_unparsable(value))?;

    let bound = |idx: usize| -> Result<Option<u64>> {
        match caps.get(idx).map(|m| m.as_str()) {
            None | Some("") => Ok(None),
            Some(digits) => digits
                .parse::<u64>()
                .map(Some)
                .map_err(|_| Error::range_unparsable(value)),
        }
    };

    Ok(RangeSpec {
        start: bound(1)?,
        end: bound(2)?,
    })
}

impl RangeSpec {
    /// Validate against a file of `file_size` bytes.
    ///
    /// A missing start means `0`; a missing end means the last byte. The
    /// result must satisfy `start <= end < file_size`.
    pub fn resolve(self, file_size: u64) -> Result<ByteRange> {
        let start = self.start.unwrap_or(0);
        let unsatisfiable = |end: u64| Error::RangeUnsatisfiable {
            start,
            end,
            size: file_size,
        };

        let end = match self.end {
            Some(end) => end,
            // Empty file: there is no last byte to run to.
            None => file_size.checked_sub(1).ok_or_else(|| unsatisfiable(0))?,
        };

        if end >= file_size || start > end {
            return Err(unsatisfiable(end));
        }

        Ok(ByteRange { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn resolve(header: &str, size: u64) -> Result<ByteRange> {
        parse_range_header(header)?.resolve(size)
    }

    #[test]
    fn test_parse_closed_range() {
        assert_eq!(
            parse_range_header("bytes=10-19").unwrap(),
            RangeSpec {
                start: Some(10),
                end: Some(19)
            }
        );
    }

    #[test]
    fn test_parse_open_bounds() {
        assert_eq!(
            parse_range_header("bytes=500-").unwrap(),
            RangeSpec {
                start: Some(500),
                end: None
            }
        );
        assert_eq!(
            parse_range_header("bytes=-500").unwrap(),
            RangeSpec {
                start: None,
                end: Some(500)
            }
        );
        assert_eq!(
            parse_range_header("bytes=-").unwrap(),
            RangeSpec {
                start: None,
                end: None
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for header in ["bytes=abc-10", "items=0-10", "bytes 0-10", "", "0-10"] {
            assert_matches!(
                parse_range_header(header),
                Err(Error::RangeUnparsable(_)),
                "{header:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_matches!(
            parse_range_header("bytes=0-99999999999999999999999"),
            Err(Error::RangeUnparsable(_))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(
            parse_range_header("bytes=10-x").unwrap(),
            RangeSpec {
                start: Some(10),
                end: None
            }
        );
    }

    #[test]
    fn test_parse_takes_first_range() {
        assert_eq!(
            parse_range_header("bytes=0-10,20-30").unwrap(),
            RangeSpec {
                start: Some(0),
                end: Some(10)
            }
        );
    }

    #[test]
    fn test_resolve_open_end_runs_to_eof() {
        assert_eq!(
            resolve("bytes=0-", 1000).unwrap(),
            ByteRange { start: 0, end: 999 }
        );
        assert_eq!(
            resolve("bytes=500-", 1000).unwrap(),
            ByteRange {
                start: 500,
                end: 999
            }
        );
    }

    #[test]
    fn test_resolve_empty_start_is_zero_not_suffix() {
        assert_eq!(
            resolve("bytes=-500", 1000).unwrap(),
            ByteRange { start: 0, end: 500 }
        );
        assert_eq!(
            resolve("bytes=-", 1000).unwrap(),
            ByteRange { start: 0, end: 999 }
        );
    }

    #[test]
    fn test_resolve_rejects_out_of_bounds() {
        assert_matches!(
            resolve("bytes=1000-1005", 1000),
            Err(Error::RangeUnsatisfiable { start: 1000, .. })
        );
        // No clamping of an oversized end
        assert_matches!(
            resolve("bytes=0-1000", 1000),
            Err(Error::RangeUnsatisfiable { end: 1000, .. })
        );
        assert_matches!(
            resolve("bytes=20-10", 1000),
            Err(Error::RangeUnsatisfiable { .. })
        );
        assert_matches!(
            resolve("bytes=1000-", 1000),
            Err(Error::RangeUnsatisfiable { .. })
        );
    }

    #[test]
    fn test_resolve_empty_file() {
        assert_matches!(
            resolve("bytes=0-", 0),
            Err(Error::RangeUnsatisfiable { size: 0, .. })
        );
        assert_matches!(resolve("bytes=0-0", 0), Err(Error::RangeUnsatisfiable { .. }));
    }

    #[test]
    fn test_byte_range_helpers() {
        let range = ByteRange {
            start: 500,
            end: 599,
        };
        assert_eq!(range.len(), 100);
        assert_eq!(range.content_range(1000), "bytes 500-599/1000");

        let single = ByteRange { start: 7, end: 7 };
        assert_eq!(single.len(), 1);
    }
}
