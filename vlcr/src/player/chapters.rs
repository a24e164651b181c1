use super::MediaPlayer;
use crate::{native, Result};
use std::os::raw::c_int;
use std::ptr;
use vlcr_core::ChapterDescription;
use vlcr_sys::types::*;

/// Chapter navigation
pub struct ChaptersApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> ChaptersApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Chapters of the current title
    pub fn count(&self) -> Result<usize> {
        let count = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_chapter_count(self.player.raw())?
        };
        Ok(count.max(0) as usize)
    }

    pub fn count_for_title(&self, title: i32) -> Result<usize> {
        let count = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_chapter_count_for_title(self.player.raw(), title)?
        };
        Ok(count.max(0) as usize)
    }

    /// Current chapter, `None` without chapters
    pub fn chapter(&self) -> Result<Option<i32>> {
        let chapter = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_chapter(self.player.raw())?
        };
        Ok((chapter >= 0).then_some(chapter))
    }

    pub fn set(&self, chapter: i32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_chapter(self.player.raw(), chapter)?
        };
        Ok(())
    }

    pub fn next(&self) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_next_chapter(self.player.raw())?
        };
        Ok(())
    }

    pub fn previous(&self) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_previous_chapter(self.player.raw())?
        };
        Ok(())
    }

    /// Chapters of the current title
    pub fn descriptions(&self) -> Result<Vec<ChapterDescription>> {
        self.descriptions_for_title(-1)
    }

    /// Chapters of `title`, -1 for the current one
    pub fn descriptions_for_title(&self, title: i32) -> Result<Vec<ChapterDescription>> {
        let api = self.player.api();
        let mut chapters: *mut *mut libvlc_chapter_description_t = ptr::null_mut();
        unsafe {
            let count = api.libvlc_media_player_get_full_chapter_descriptions(
                self.player.raw(),
                title as c_int,
                &mut chapters,
            )?;
            let count = native::count(count);
            let list = native::collect_array(chapters, count as usize, |c| {
                native::chapter_description(c)
            });
            if !chapters.is_null() {
                api.libvlc_chapter_descriptions_release(chapters, count)?;
            }
            Ok(list)
        }
    }
}
