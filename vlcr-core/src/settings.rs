//! Overlay and view settings applied to a media player
//!
//! These hold values only; the `vlcr` crate pushes them into libVLC.

use crate::enums::Position;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 360° video viewpoint, angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewpoint {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub field_of_view: f32,
}

impl Viewpoint {
    pub fn new(yaw: f32, pitch: f32, roll: f32, field_of_view: f32) -> Self {
        Self {
            yaw,
            pitch,
            roll,
            field_of_view,
        }
    }
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(0xff, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0x80, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xff);
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0xRRGGBB`
    pub fn to_rgb(self) -> i32 {
        (self.r as i32) << 16 | (self.g as i32) << 8 | self.b as i32
    }

    pub fn from_rgb(value: i32) -> Self {
        Self {
            r: (value >> 16 & 0xff) as u8,
            g: (value >> 8 & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb`, `rrggbb` or `0xrrggbb`
    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .unwrap_or(s);
        if hex.len() != 6 {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let value = i32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        Ok(Color::from_rgb(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text overlay ("marquee") settings
///
/// Unset fields leave the player's current value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marquee {
    pub text: Option<String>,
    pub color: Option<Color>,
    /// 0 (transparent) to 255 (opaque)
    pub opacity: Option<u8>,
    pub position: Option<Position>,
    /// Refresh period in milliseconds
    pub refresh: Option<i32>,
    /// Font size in pixels
    pub size: Option<i32>,
    /// Display time in milliseconds, 0 for forever
    pub timeout: Option<i32>,
    pub location: Option<(i32, i32)>,
    pub enable: bool,
}

impl Marquee {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Opacity as a fraction, clamped to 0.0..=1.0
    pub fn opacity_fraction(self, opacity: f32) -> Self {
        self.opacity((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn refresh(mut self, refresh_ms: i32) -> Self {
        self.refresh = Some(refresh_ms);
        self
    }

    pub fn size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn timeout(mut self, timeout_ms: i32) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.location = Some((x, y));
        self
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }
}

/// One image of a logo animation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoFile {
    pub file: String,
    /// How long the image is shown, milliseconds
    pub delay: Option<i32>,
    pub opacity: Option<u8>,
}

impl LogoFile {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            delay: None,
            opacity: None,
        }
    }

    pub fn delay(mut self, delay_ms: i32) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    pub fn opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

impl fmt::Display for LogoFile {
    /// `file[,delay[,alpha]]`; an alpha without a delay uses `-1`, which the
    /// logo filter reads as its default delay.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file)?;
        match (self.delay, self.opacity) {
            (Some(delay), Some(opacity)) => write!(f, ",{delay},{opacity}"),
            (Some(delay), None) => write!(f, ",{delay}"),
            (None, Some(opacity)) => write!(f, ",-1,{opacity}"),
            (None, None) => Ok(()),
        }
    }
}

/// Image overlay ("logo") settings
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logo {
    pub files: Vec<LogoFile>,
    pub opacity: Option<u8>,
    pub position: Option<Position>,
    pub location: Option<(i32, i32)>,
    /// Default per-image delay in milliseconds
    pub delay: Option<i32>,
    /// Animation loops, -1 continuous, 0 disabled
    pub repeat: Option<i32>,
    pub enable: bool,
}

impl Logo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.files.push(LogoFile::new(file));
        self
    }

    pub fn logo_file(mut self, file: LogoFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.location = Some((x, y));
        self
    }

    pub fn delay(mut self, delay_ms: i32) -> Self {
        self.delay = Some(delay_ms);
        self
    }

    pub fn repeat(mut self, repeat: i32) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    /// The `logo-file` option string, `None` when no image was given
    pub fn file_option(&self) -> Option<String> {
        if self.files.is_empty() {
            return None;
        }
        Some(
            self.files
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_packing() {
        let color = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(color.to_rgb(), 0x123456);
        assert_eq!(Color::from_rgb(0x123456), color);
        assert_eq!(color.to_string(), "#123456");
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("0x0000ff".parse::<Color>().unwrap(), Color::BLUE);
        assert_eq!("ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }

    #[test]
    fn test_marquee_builder() {
        let marquee = Marquee::new()
            .text("Hello")
            .size(40)
            .opacity_fraction(0.5)
            .position(Position::Bottom)
            .enable(true);
        assert_eq!(marquee.text.as_deref(), Some("Hello"));
        assert_eq!(marquee.opacity, Some(128));
        assert_eq!(marquee.color, None);
        assert!(marquee.enable);
    }

    #[test]
    fn test_logo_file_option() {
        let logo = Logo::new()
            .file("a.png")
            .logo_file(LogoFile::new("b.png").delay(500))
            .logo_file(LogoFile::new("c.png").delay(250).opacity(128))
            .logo_file(LogoFile::new("d.png").opacity(64));
        assert_eq!(
            logo.file_option().unwrap(),
            "a.png;b.png,500;c.png,250,128;d.png,-1,64"
        );
        assert_eq!(Logo::new().file_option(), None);
    }
}
