//! Enumerations mirroring the libVLC public headers

use std::fmt;
use std::ops::BitOr;

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),*];

            /// Converts a raw native value, `None` if libVLC sent something unknown
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $( v if v == $value => Some($name::$variant), )*
                    _ => None,
                }
            }

            /// Returns the native value
            pub fn as_raw(self) -> i32 {
                match self {
                    $( $name::$variant => $value ),*
                }
            }
        }
    };
}

native_enum! {
    /// Playback state of a media or media player
    pub enum State {
        NothingSpecial = 0,
        Opening = 1,
        Buffering = 2,
        Playing = 3,
        Paused = 4,
        Stopped = 5,
        Ended = 6,
        Error = 7,
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::NothingSpecial => "idle",
            State::Opening => "opening",
            State::Buffering => "buffering",
            State::Playing => "playing",
            State::Paused => "paused",
            State::Stopped => "stopped",
            State::Ended => "ended",
            State::Error => "error",
        };
        f.write_str(name)
    }
}

native_enum! {
    /// Media meta data keys
    pub enum Meta {
        Title = 0,
        Artist = 1,
        Genre = 2,
        Copyright = 3,
        Album = 4,
        TrackNumber = 5,
        Description = 6,
        Rating = 7,
        Date = 8,
        Setting = 9,
        Url = 10,
        Language = 11,
        NowPlaying = 12,
        Publisher = 13,
        EncodedBy = 14,
        ArtworkUrl = 15,
        TrackId = 16,
        TrackTotal = 17,
        Director = 18,
        Season = 19,
        Episode = 20,
        ShowName = 21,
        Actors = 22,
        AlbumArtist = 23,
        DiscNumber = 24,
        DiscTotal = 25,
    }
}

native_enum! {
    /// Elementary stream category
    pub enum TrackType {
        Unknown = -1,
        Audio = 0,
        Video = 1,
        Text = 2,
    }
}

native_enum! {
    /// Outcome of an asynchronous media parse
    pub enum ParsedStatus {
        Skipped = 1,
        Failed = 2,
        Timeout = 3,
        Done = 4,
    }
}

native_enum! {
    /// Kind of resource a media points at
    pub enum MediaType {
        Unknown = 0,
        File = 1,
        Directory = 2,
        Disc = 3,
        Stream = 4,
        Playlist = 5,
    }
}

native_enum! {
    /// On-screen anchor for marquee, logo and title overlays
    pub enum Position {
        Disable = -1,
        Center = 0,
        Left = 1,
        Right = 2,
        Top = 3,
        TopLeft = 4,
        TopRight = 5,
        Bottom = 6,
        BottomLeft = 7,
        BottomRight = 8,
    }
}

native_enum! {
    /// Audio channel routing
    pub enum AudioChannel {
        Error = -1,
        Stereo = 1,
        ReverseStereo = 2,
        Left = 3,
        Right = 4,
        Dolby = 5,
    }
}

native_enum! {
    /// DVD menu navigation actions
    pub enum NavigateMode {
        Activate = 0,
        Up = 1,
        Down = 2,
        Left = 3,
        Right = 4,
        Popup = 5,
    }
}

native_enum! {
    /// Teletext keys, passed as a page number
    pub enum TeletextKey {
        Red = (b'r' as i32) << 16,
        Green = (b'g' as i32) << 16,
        Yellow = (b'y' as i32) << 16,
        Blue = (b'b' as i32) << 16,
        Index = (b'i' as i32) << 16,
    }
}

native_enum! {
    /// Media list player sequencing
    pub enum PlaybackMode {
        Default = 0,
        Loop = 1,
        Repeat = 2,
    }
}

native_enum! {
    /// Media player role, used by some audio outputs for policy decisions
    pub enum Role {
        None = 0,
        Music = 1,
        Video = 2,
        Communication = 3,
        Game = 4,
        Notification = 5,
        Animation = 6,
        Production = 7,
        Accessibility = 8,
        Test = 9,
    }
}

native_enum! {
    /// Slave (extra input) type
    pub enum SlaveType {
        Subtitle = 0,
        Audio = 1,
    }
}

native_enum! {
    /// Media discoverer service category
    pub enum DiscovererCategory {
        Devices = 0,
        Lan = 1,
        Podcasts = 2,
        LocalDirs = 3,
    }
}

native_enum! {
    /// Video track orientation
    pub enum VideoOrientation {
        TopLeft = 0,
        TopRight = 1,
        BottomLeft = 2,
        BottomRight = 3,
        LeftTop = 4,
        LeftBottom = 5,
        RightTop = 6,
        RightBottom = 7,
    }
}

native_enum! {
    /// Video track projection
    pub enum VideoProjection {
        Rectangular = 0,
        Equirectangular = 1,
        CubemapLayoutStandard = 0x100,
    }
}

native_enum! {
    /// Settings of the video adjust filter
    pub enum VideoAdjustOption {
        Enable = 0,
        Contrast = 1,
        Brightness = 2,
        Hue = 3,
        Saturation = 4,
        Gamma = 5,
    }
}

impl VideoAdjustOption {
    /// Accepted range of a float setting, `None` for `Enable`
    pub fn range(self) -> Option<(f32, f32)> {
        match self {
            VideoAdjustOption::Enable => None,
            VideoAdjustOption::Contrast | VideoAdjustOption::Brightness => Some((0.0, 2.0)),
            VideoAdjustOption::Hue => Some((-180.0, 180.0)),
            VideoAdjustOption::Saturation => Some((0.0, 3.0)),
            VideoAdjustOption::Gamma => Some((0.01, 10.0)),
        }
    }

    /// Clamps `value` into [`VideoAdjustOption::range`].
    pub fn clamp(self, value: f32) -> f32 {
        match self.range() {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

/// Flags for `libvlc_media_parse_with_options`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseFlags(i32);

impl ParseFlags {
    /// Parse only local media
    pub const LOCAL: ParseFlags = ParseFlags(0x00);
    pub const NETWORK: ParseFlags = ParseFlags(0x01);
    pub const FETCH_LOCAL: ParseFlags = ParseFlags(0x02);
    pub const FETCH_NETWORK: ParseFlags = ParseFlags(0x04);
    /// Allow libVLC to raise login or question dialogs
    pub const DO_INTERACT: ParseFlags = ParseFlags(0x08);

    pub fn bits(self) -> i32 {
        self.0
    }

    pub fn contains(self, other: ParseFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ParseFlags {
    type Output = ParseFlags;

    fn bitor(self, rhs: ParseFlags) -> ParseFlags {
        ParseFlags(self.0 | rhs.0)
    }
}

/// Capabilities advertised by a renderer item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererFlags(i32);

impl RendererFlags {
    pub const AUDIO: i32 = 0x0001;
    pub const VIDEO: i32 = 0x0002;

    pub fn from_raw(raw: i32) -> Self {
        RendererFlags(raw)
    }

    pub fn can_render_audio(self) -> bool {
        self.0 & Self::AUDIO != 0
    }

    pub fn can_render_video(self) -> bool {
        self.0 & Self::VIDEO != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip_and_unknown() {
        for state in State::ALL {
            assert_eq!(State::from_raw(state.as_raw()), Some(*state));
        }
        assert_eq!(State::from_raw(8), None);
        assert_eq!(State::from_raw(-1), None);
    }

    #[test]
    fn test_meta_covers_all_native_keys() {
        assert_eq!(Meta::ALL.len(), 26);
        assert_eq!(Meta::DiscTotal.as_raw(), 25);
        assert_eq!(Meta::from_raw(15), Some(Meta::ArtworkUrl));
    }

    #[test]
    fn test_teletext_keys() {
        assert_eq!(TeletextKey::Red.as_raw(), 0x72 << 16);
        assert_eq!(TeletextKey::from_raw(0x69 << 16), Some(TeletextKey::Index));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(TrackType::from_raw(-1), Some(TrackType::Unknown));
        assert_eq!(Position::from_raw(-1), Some(Position::Disable));
        assert_eq!(AudioChannel::from_raw(0), None);
    }

    #[test]
    fn test_projection_sparse_values() {
        assert_eq!(
            VideoProjection::from_raw(0x100),
            Some(VideoProjection::CubemapLayoutStandard)
        );
        assert_eq!(VideoProjection::from_raw(2), None);
    }

    #[test]
    fn test_parse_flags() {
        let flags = ParseFlags::NETWORK | ParseFlags::FETCH_NETWORK;
        assert_eq!(flags.bits(), 0x05);
        assert!(flags.contains(ParseFlags::NETWORK));
        assert!(!flags.contains(ParseFlags::DO_INTERACT));
        assert_eq!(ParseFlags::default(), ParseFlags::LOCAL);
    }

    #[test]
    fn test_renderer_flags() {
        let flags = RendererFlags::from_raw(RendererFlags::VIDEO);
        assert!(flags.can_render_video());
        assert!(!flags.can_render_audio());
    }

    #[test]
    fn test_adjust_ranges() {
        assert_eq!(VideoAdjustOption::Enable.range(), None);
        assert_eq!(VideoAdjustOption::Hue.clamp(270.0), 180.0);
        assert_eq!(VideoAdjustOption::Gamma.clamp(0.0), 0.01);
        assert_eq!(VideoAdjustOption::Contrast.clamp(1.5), 1.5);
        assert_eq!(VideoAdjustOption::from_raw(4), Some(VideoAdjustOption::Saturation));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::NothingSpecial.to_string(), "idle");
        assert_eq!(State::Playing.to_string(), "playing");
    }
}
