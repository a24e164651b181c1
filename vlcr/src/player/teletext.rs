use super::MediaPlayer;
use crate::Result;
use vlcr_core::TeletextKey;

/// Teletext pages
pub struct TeletextApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> TeletextApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Current page, `None` when teletext is off
    pub fn page(&self) -> Result<Option<i32>> {
        let page = unsafe { self.player.api().libvlc_video_get_teletext(self.player.raw())? };
        Ok((page > 0).then_some(page))
    }

    /// Shows `page`; 0 hides teletext.
    pub fn set_page(&self, page: i32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_teletext(self.player.raw(), page.max(0))?
        };
        Ok(())
    }

    /// Sends a colour or index key to the teletext decoder.
    pub fn press(&self, key: TeletextKey) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_teletext(self.player.raw(), key.as_raw())?
        };
        Ok(())
    }
}
