use super::MediaPlayer;
use crate::{check, cstring, Result};
use vlcr_core::SlaveType;

/// Subtitle timing and external subtitle files
pub struct SubpicturesApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> SubpicturesApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Subtitle delay in microseconds
    pub fn delay(&self) -> Result<i64> {
        Ok(unsafe { self.player.api().libvlc_video_get_spu_delay(self.player.raw())? })
    }

    pub fn set_delay(&self, delay: i64) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_video_set_spu_delay(self.player.raw(), delay)? };
        check(api, code, "libvlc_video_set_spu_delay")
    }

    /// Adds a subtitle file by URI (`file:///...`), optionally selecting it.
    pub fn add_subtitle(&self, uri: &str, select: bool) -> Result<()> {
        let api = self.player.api();
        let uri = cstring(uri)?;
        let code = unsafe {
            api.libvlc_media_player_add_slave(
                self.player.raw(),
                SlaveType::Subtitle.as_raw(),
                uri.as_ptr(),
                select,
            )?
        };
        check(api, code, "libvlc_media_player_add_slave")
    }
}
