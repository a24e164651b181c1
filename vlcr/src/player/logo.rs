use super::MediaPlayer;
use crate::{cstring, Result};
use std::os::raw::{c_int, c_uint};
use vlcr_core::{Logo, Position};
use vlcr_sys::types::*;

/// Image overlay on the video
pub struct LogoApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> LogoApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        let enabled = unsafe {
            self.player
                .api()
                .libvlc_video_get_logo_int(self.player.raw(), LIBVLC_LOGO_ENABLE)?
        };
        Ok(enabled != 0)
    }

    pub fn enable(&self, enable: bool) -> Result<()> {
        self.set_int(LIBVLC_LOGO_ENABLE, enable as c_int)
    }

    /// Image file, or a `file,delay,alpha;...` animation list
    pub fn set_file(&self, file: &str) -> Result<()> {
        let file = cstring(file)?;
        unsafe {
            self.player.api().libvlc_video_set_logo_string(
                self.player.raw(),
                LIBVLC_LOGO_FILE,
                file.as_ptr(),
            )?
        };
        Ok(())
    }

    pub fn set_location(&self, x: i32, y: i32) -> Result<()> {
        self.set_int(LIBVLC_LOGO_X, x)?;
        self.set_int(LIBVLC_LOGO_Y, y)
    }

    pub fn set_opacity(&self, opacity: u8) -> Result<()> {
        self.set_int(LIBVLC_LOGO_OPACITY, opacity as c_int)
    }

    pub fn set_position(&self, position: Position) -> Result<()> {
        self.set_int(LIBVLC_LOGO_POSITION, position.as_raw())
    }

    /// Per-image delay of an animation, milliseconds
    pub fn set_delay(&self, delay_ms: i32) -> Result<()> {
        self.set_int(LIBVLC_LOGO_DELAY, delay_ms)
    }

    /// Animation loops, -1 continuous
    pub fn set_repeat(&self, repeat: i32) -> Result<()> {
        self.set_int(LIBVLC_LOGO_REPEAT, repeat)
    }

    /// Applies every field set in `logo`, then its enable flag.
    pub fn apply(&self, logo: &Logo) -> Result<()> {
        if let Some(files) = logo.file_option() {
            self.set_file(&files)?;
        }
        if let Some(opacity) = logo.opacity {
            self.set_opacity(opacity)?;
        }
        if let Some(position) = logo.position {
            self.set_position(position)?;
        }
        if let Some((x, y)) = logo.location {
            self.set_location(x, y)?;
        }
        if let Some(delay) = logo.delay {
            self.set_delay(delay)?;
        }
        if let Some(repeat) = logo.repeat {
            self.set_repeat(repeat)?;
        }
        self.enable(logo.enable)
    }

    fn set_int(&self, option: c_uint, value: c_int) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_logo_int(self.player.raw(), option, value)?
        };
        Ok(())
    }
}
