use super::MediaPlayer;
use crate::{check, native, Result};
use std::os::raw::c_int;
use vlcr_core::TrackDescription;
use vlcr_sys::types::*;
use vlcr_sys::NativeApi;

/// Elementary stream selection. Track ids come from the descriptions;
/// -1 disables the stream kind.
pub struct TracksApi<'a> {
    player: &'a MediaPlayer,
}

type ListFn = unsafe fn(
    &NativeApi,
    *mut libvlc_media_player_t,
) -> vlcr_sys::Result<*mut libvlc_track_description_t>;

impl<'a> TracksApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn audio_count(&self) -> Result<usize> {
        let count = unsafe { self.player.api().libvlc_audio_get_track_count(self.player.raw())? };
        Ok(count.max(0) as usize)
    }

    pub fn audio(&self) -> Result<i32> {
        Ok(unsafe { self.player.api().libvlc_audio_get_track(self.player.raw())? })
    }

    pub fn select_audio(&self, id: i32) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_audio_set_track(self.player.raw(), id as c_int)? };
        check(api, code, "libvlc_audio_set_track")
    }

    pub fn audio_descriptions(&self) -> Result<Vec<TrackDescription>> {
        self.descriptions(NativeApi::libvlc_audio_get_track_description)
    }

    pub fn video_count(&self) -> Result<usize> {
        let count = unsafe { self.player.api().libvlc_video_get_track_count(self.player.raw())? };
        Ok(count.max(0) as usize)
    }

    pub fn video(&self) -> Result<i32> {
        Ok(unsafe { self.player.api().libvlc_video_get_track(self.player.raw())? })
    }

    pub fn select_video(&self, id: i32) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_video_set_track(self.player.raw(), id as c_int)? };
        check(api, code, "libvlc_video_set_track")
    }

    pub fn video_descriptions(&self) -> Result<Vec<TrackDescription>> {
        self.descriptions(NativeApi::libvlc_video_get_track_description)
    }

    pub fn subtitle_count(&self) -> Result<usize> {
        let count = unsafe { self.player.api().libvlc_video_get_spu_count(self.player.raw())? };
        Ok(count.max(0) as usize)
    }

    pub fn subtitle(&self) -> Result<i32> {
        Ok(unsafe { self.player.api().libvlc_video_get_spu(self.player.raw())? })
    }

    pub fn select_subtitle(&self, id: i32) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_video_set_spu(self.player.raw(), id as c_int)? };
        check(api, code, "libvlc_video_set_spu")
    }

    pub fn subtitle_descriptions(&self) -> Result<Vec<TrackDescription>> {
        self.descriptions(NativeApi::libvlc_video_get_spu_description)
    }

    fn descriptions(&self, list: ListFn) -> Result<Vec<TrackDescription>> {
        let api = self.player.api();
        unsafe {
            let head = list(api, self.player.raw())?;
            let tracks = native::track_descriptions(head);
            if !head.is_null() {
                api.libvlc_track_description_list_release(head)?;
            }
            Ok(tracks)
        }
    }
}
