//! Media resource locator helpers
//!
//! libVLC accepts either a location (`scheme://...`) or a local file path;
//! the two go through different native constructors.

use crate::{Error, Result};
use std::path::Path;
use url::Url;

/// Returns true if `mrl` carries a URL scheme (`http://`, `file://`,
/// `dvd://`...) rather than being a plain file path.
///
/// A scheme must be at least two characters so that Windows drive letters
/// (`C:\...`, `c://`) are treated as paths.
pub fn is_location(mrl: &str) -> bool {
    match mrl.find("://") {
        Some(idx) if idx >= 2 => {
            let scheme = &mrl[..idx];
            scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Converts an absolute local path into a `file://` location with the path
/// percent-encoded.
pub fn file_location(path: &Path) -> Result<String> {
    Url::from_file_path(path)
        .map(|url| url.to_string())
        .map_err(|_| Error::InvalidPath(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_location() {
        assert!(is_location("http://example.com/a.mp4"));
        assert!(is_location("file:///tmp/a.mp4"));
        assert!(is_location("dvd:///dev/sr0"));
        assert!(is_location("rtsp+tcp://host/stream"));
        assert!(is_location("screen://"));
    }

    #[test]
    fn test_paths_are_not_locations() {
        assert!(!is_location("/home/user/video.mkv"));
        assert!(!is_location("C:\\Videos\\a.avi"));
        assert!(!is_location("c://Videos/a.avi"));
        assert!(!is_location("relative/dir/file://weird"));
        assert!(!is_location("1http://example.com"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_location_encodes() {
        let location = file_location(Path::new("/tmp/my video #1.mp4")).unwrap();
        assert_eq!(location, "file:///tmp/my%20video%20%231.mp4");
        assert!(file_location(Path::new("relative.mp4")).is_err());
    }
}
