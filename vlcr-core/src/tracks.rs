//! Elementary stream information of a parsed media

use crate::enums::{TrackType, VideoOrientation, VideoProjection};
use crate::settings::Viewpoint;

/// One elementary stream of a media
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackInfo {
    pub codec: u32,
    pub original_fourcc: u32,
    pub id: i32,
    pub track_type: TrackType,
    pub profile: i32,
    pub level: i32,
    /// Bits per second
    pub bitrate: u32,
    pub language: Option<String>,
    pub description: Option<String>,
    /// Human readable codec name reported by libVLC
    pub codec_description: Option<String>,
    pub details: TrackDetails,
}

impl TrackInfo {
    /// Codec fourcc as text, e.g. `h264`
    pub fn codec_name(&self) -> String {
        fourcc_to_string(self.codec)
    }
}

/// Category specific track data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackDetails {
    Audio(AudioTrackInfo),
    Video(VideoTrackInfo),
    Text(TextTrackInfo),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioTrackInfo {
    pub channels: u32,
    /// Sample rate in Hz
    pub rate: u32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoTrackInfo {
    pub width: u32,
    pub height: u32,
    pub sar_num: u32,
    pub sar_den: u32,
    pub frame_rate_num: u32,
    pub frame_rate_den: u32,
    pub orientation: Option<VideoOrientation>,
    pub projection: Option<VideoProjection>,
    pub pose: Viewpoint,
}

impl VideoTrackInfo {
    /// Frames per second, `None` when libVLC does not know it
    pub fn frame_rate(&self) -> Option<f64> {
        if self.frame_rate_den == 0 || self.frame_rate_num == 0 {
            None
        } else {
            Some(self.frame_rate_num as f64 / self.frame_rate_den as f64)
        }
    }

    /// Sample (pixel) aspect ratio, 1.0 for square pixels or unknown
    pub fn sample_aspect_ratio(&self) -> f64 {
        if self.sar_num == 0 || self.sar_den == 0 {
            1.0
        } else {
            self.sar_num as f64 / self.sar_den as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextTrackInfo {
    pub encoding: Option<String>,
}

/// Renders a little-endian fourcc code as text, dropping trailing spaces
/// and replacing unprintable bytes with `.`.
pub fn fourcc_to_string(fourcc: u32) -> String {
    fourcc
        .to_le_bytes()
        .iter()
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Packs up to four ASCII characters into a little-endian fourcc code
pub fn fourcc_from_str(code: &str) -> u32 {
    let mut bytes = [b' '; 4];
    for (slot, b) in bytes.iter_mut().zip(code.bytes()) {
        *slot = b;
    }
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_to_string() {
        assert_eq!(fourcc_to_string(0x3436_3268), "h264");
        assert_eq!(fourcc_to_string(fourcc_from_str("mp4a")), "mp4a");
        assert_eq!(fourcc_to_string(fourcc_from_str("a52")), "a52");
        assert_eq!(fourcc_to_string(0x0000_0001), "....");
    }

    #[test]
    fn test_frame_rate() {
        let mut video = VideoTrackInfo {
            width: 1920,
            height: 1080,
            sar_num: 1,
            sar_den: 1,
            frame_rate_num: 30000,
            frame_rate_den: 1001,
            orientation: Some(VideoOrientation::TopLeft),
            projection: Some(VideoProjection::Rectangular),
            pose: Viewpoint::default(),
        };
        let fps = video.frame_rate().unwrap();
        assert!((fps - 29.97).abs() < 0.01);

        video.frame_rate_den = 0;
        assert_eq!(video.frame_rate(), None);
        assert_eq!(video.sample_aspect_ratio(), 1.0);
    }
}
