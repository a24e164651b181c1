//! Snapshot of everything known about a media

use crate::enums::{MediaType, Meta, ParsedStatus, State};
use crate::stats::MediaStatistics;
use crate::time::format_time;
use crate::tracks::{TrackDetails, TrackInfo};

/// Media information gathered in one pass over the native getters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaInfo {
    pub mrl: String,
    pub media_type: Option<MediaType>,
    pub state: Option<State>,
    pub parsed_status: Option<ParsedStatus>,
    /// Duration in milliseconds, `-1` when unknown
    pub duration_ms: i64,
    pub meta: Vec<(Meta, String)>,
    pub tracks: Vec<TrackInfo>,
    pub statistics: Option<MediaStatistics>,
}

impl MediaInfo {
    pub fn meta(&self, key: Meta) -> Option<&str> {
        self.meta
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Title meta, falling back to the MRL
    pub fn display_name(&self) -> &str {
        self.meta(Meta::Title).unwrap_or(&self.mrl)
    }

    pub fn formatted_duration(&self) -> String {
        format_time(self.duration_ms)
    }

    pub fn has_video(&self) -> bool {
        self.tracks
            .iter()
            .any(|t| matches!(t.details, TrackDetails::Video(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TrackType;

    fn info() -> MediaInfo {
        MediaInfo {
            mrl: "file:///tmp/a.mp3".into(),
            media_type: Some(MediaType::File),
            state: Some(State::NothingSpecial),
            parsed_status: Some(ParsedStatus::Done),
            duration_ms: 185_000,
            meta: vec![(Meta::Artist, "Someone".into())],
            tracks: vec![TrackInfo {
                codec: 0,
                original_fourcc: 0,
                id: 0,
                track_type: TrackType::Audio,
                profile: 0,
                level: 0,
                bitrate: 0,
                language: None,
                description: None,
                codec_description: None,
                details: TrackDetails::Unknown,
            }],
            statistics: None,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_mrl() {
        let mut info = info();
        assert_eq!(info.display_name(), "file:///tmp/a.mp3");
        info.meta.push((Meta::Title, "Song".into()));
        assert_eq!(info.display_name(), "Song");
        assert_eq!(info.meta(Meta::Artist), Some("Someone"));
    }

    #[test]
    fn test_formatted_duration() {
        assert_eq!(info().formatted_duration(), "03:05");
        assert!(!info().has_video());
    }
}
