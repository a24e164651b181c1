//! Value objects copied out of libVLC descriptor structures

use crate::enums::{DiscovererCategory, SlaveType};

/// Audio, video or subtitle track as listed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackDescription {
    /// Track identifier, `-1` is the "disable" pseudo-track
    pub id: i32,
    pub name: String,
}

impl TrackDescription {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns true for the pseudo-track libVLC lists to turn a category off
    pub fn is_disable(&self) -> bool {
        self.id == -1
    }
}

/// A title (DVD title, Blu-ray playlist...) of the current media
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleDescription {
    /// Duration in milliseconds
    pub duration_ms: i64,
    pub name: Option<String>,
    pub is_menu: bool,
    pub is_interactive: bool,
}

/// A chapter of a title
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterDescription {
    /// Offset from the start of the title in milliseconds
    pub offset_ms: i64,
    /// Duration in milliseconds
    pub duration_ms: i64,
    pub name: Option<String>,
}

impl ChapterDescription {
    /// End of the chapter in milliseconds
    pub fn end_ms(&self) -> i64 {
        self.offset_ms.saturating_add(self.duration_ms)
    }
}

/// An audio output module and its devices
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioOutput {
    pub name: String,
    pub description: String,
    pub devices: Vec<AudioDevice>,
}

/// An audio output device
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioDevice {
    pub device_id: String,
    pub description: String,
}

/// A loadable libVLC module, e.g. an audio or video filter
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDescription {
    pub name: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub help: Option<String>,
}

/// A media discovery service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscovererDescription {
    pub name: String,
    pub long_name: String,
    pub category: Option<DiscovererCategory>,
}

/// A renderer discovery service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererDescription {
    pub name: String,
    pub long_name: String,
}

/// Extra input attached to a media
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaSlave {
    pub uri: String,
    pub slave_type: Option<SlaveType>,
    /// 0 (lowest) to 4 (highest)
    pub priority: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_track() {
        assert!(TrackDescription::new(-1, "Disable").is_disable());
        assert!(!TrackDescription::new(0, "Track 1").is_disable());
    }

    #[test]
    fn test_chapter_end() {
        let chapter = ChapterDescription {
            offset_ms: 60_000,
            duration_ms: 30_000,
            name: Some("Intro".into()),
        };
        assert_eq!(chapter.end_ms(), 90_000);
    }
}
