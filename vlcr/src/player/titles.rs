use super::MediaPlayer;
use crate::{native, Result};
use std::os::raw::c_uint;
use std::ptr;
use vlcr_core::{Position, TitleDescription};
use vlcr_sys::types::*;

/// Title navigation (DVD/Blu-ray titles, MKV editions)
pub struct TitlesApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> TitlesApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn count(&self) -> Result<usize> {
        let count = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_title_count(self.player.raw())?
        };
        Ok(count.max(0) as usize)
    }

    pub fn title(&self) -> Result<Option<i32>> {
        let title = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_title(self.player.raw())?
        };
        Ok((title >= 0).then_some(title))
    }

    pub fn set(&self, title: i32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_title(self.player.raw(), title)?
        };
        Ok(())
    }

    pub fn descriptions(&self) -> Result<Vec<TitleDescription>> {
        let api = self.player.api();
        let mut titles: *mut *mut libvlc_title_description_t = ptr::null_mut();
        unsafe {
            let count =
                api.libvlc_media_player_get_full_title_descriptions(self.player.raw(), &mut titles)?;
            let count = native::count(count);
            let list = native::collect_array(titles, count as usize, |t| native::title_description(t));
            if !titles.is_null() {
                api.libvlc_title_descriptions_release(titles, count)?;
            }
            Ok(list)
        }
    }

    /// Shows the media title on screen when playback starts.
    /// [`Position::Disable`] turns it off.
    pub fn set_title_display(&self, position: Position, timeout_ms: u32) -> Result<()> {
        unsafe {
            self.player.api().libvlc_media_player_set_video_title_display(
                self.player.raw(),
                position.as_raw(),
                timeout_ms as c_uint,
            )?
        };
        Ok(())
    }
}
