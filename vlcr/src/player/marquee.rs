use super::MediaPlayer;
use crate::{cstring, Result};
use std::os::raw::{c_int, c_uint};
use vlcr_core::{Color, Marquee, Position};
use vlcr_sys::take_string;
use vlcr_sys::types::*;

/// Text overlay on the video
pub struct MarqueeApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> MarqueeApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        Ok(self.int(LIBVLC_MARQUEE_ENABLE)? != 0)
    }

    pub fn enable(&self, enable: bool) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_ENABLE, enable as c_int)
    }

    pub fn text(&self) -> Result<Option<String>> {
        let api = self.player.api();
        Ok(unsafe {
            take_string(
                api,
                api.libvlc_video_get_marquee_string(self.player.raw(), LIBVLC_MARQUEE_TEXT)?,
            )
        })
    }

    /// Sets the text; `$`-codes such as `$t` (title) are expanded.
    pub fn set_text(&self, text: &str) -> Result<()> {
        let text = cstring(text)?;
        unsafe {
            self.player.api().libvlc_video_set_marquee_string(
                self.player.raw(),
                LIBVLC_MARQUEE_TEXT,
                text.as_ptr(),
            )?
        };
        Ok(())
    }

    pub fn color(&self) -> Result<Color> {
        Ok(Color::from_rgb(self.int(LIBVLC_MARQUEE_COLOR)?))
    }

    pub fn set_color(&self, color: Color) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_COLOR, color.to_rgb())
    }

    pub fn opacity(&self) -> Result<u8> {
        Ok(self.int(LIBVLC_MARQUEE_OPACITY)?.clamp(0, 255) as u8)
    }

    pub fn set_opacity(&self, opacity: u8) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_OPACITY, opacity as c_int)
    }

    pub fn set_position(&self, position: Position) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_POSITION, position.as_raw())
    }

    /// Text refresh period in milliseconds
    pub fn set_refresh(&self, refresh_ms: i32) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_REFRESH, refresh_ms)
    }

    pub fn set_size(&self, size: i32) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_SIZE, size)
    }

    /// Display time in milliseconds, 0 for forever
    pub fn set_timeout(&self, timeout_ms: i32) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_TIMEOUT, timeout_ms)
    }

    pub fn set_location(&self, x: i32, y: i32) -> Result<()> {
        self.set_int(LIBVLC_MARQUEE_X, x)?;
        self.set_int(LIBVLC_MARQUEE_Y, y)
    }

    /// Applies every field set in `marquee`, then its enable flag.
    pub fn apply(&self, marquee: &Marquee) -> Result<()> {
        if let Some(text) = &marquee.text {
            self.set_text(text)?;
        }
        if let Some(color) = marquee.color {
            self.set_color(color)?;
        }
        if let Some(opacity) = marquee.opacity {
            self.set_opacity(opacity)?;
        }
        if let Some(position) = marquee.position {
            self.set_position(position)?;
        }
        if let Some(refresh) = marquee.refresh {
            self.set_refresh(refresh)?;
        }
        if let Some(size) = marquee.size {
            self.set_size(size)?;
        }
        if let Some(timeout) = marquee.timeout {
            self.set_timeout(timeout)?;
        }
        if let Some((x, y)) = marquee.location {
            self.set_location(x, y)?;
        }
        self.enable(marquee.enable)
    }

    fn int(&self, option: c_uint) -> Result<c_int> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_video_get_marquee_int(self.player.raw(), option)?
        })
    }

    fn set_int(&self, option: c_uint, value: c_int) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_marquee_int(self.player.raw(), option, value)?
        };
        Ok(())
    }
}
