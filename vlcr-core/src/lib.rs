//! vlcr Core Library
//!
//! Plain Rust value types mirroring the data libVLC hands out: enumerations,
//! descriptors, track information, statistics and overlay settings. Nothing
//! in this crate calls into the native library.

pub mod descriptors;
pub mod enums;
pub mod info;
pub mod mrl;
pub mod settings;
pub mod stats;
pub mod time;
pub mod tracks;

pub use descriptors::{
    AudioDevice, AudioOutput, ChapterDescription, DiscovererDescription, MediaSlave,
    ModuleDescription, RendererDescription, TitleDescription, TrackDescription,
};
pub use enums::{
    AudioChannel, DiscovererCategory, MediaType, Meta, NavigateMode, ParseFlags, ParsedStatus,
    PlaybackMode, Position, RendererFlags, Role, SlaveType, State, TeletextKey, TrackType,
    VideoAdjustOption, VideoOrientation, VideoProjection,
};
pub use info::MediaInfo;
pub use settings::{Color, Logo, LogoFile, Marquee, Viewpoint};
pub use stats::MediaStatistics;
pub use tracks::{AudioTrackInfo, TextTrackInfo, TrackDetails, TrackInfo, VideoTrackInfo};

/// Result type for vlcr-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for vlcr-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid color: {0}, expected #rrggbb")]
    InvalidColor(String),

    #[error("Invalid time: {0}, expected [[hh:]mm:]ss")]
    InvalidTime(String),

    #[error("Not an absolute file path: {0}")]
    InvalidPath(String),
}
