//! Media lists and the list player

use crate::events::{MediaListEvent, MediaListPlayerEvent, NativeEventManager};
use crate::media::Media;
use crate::player::MediaPlayer;
use crate::{check, non_null, Error, Result};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::os::raw::c_int;
use vlcr_core::{PlaybackMode, State};
use vlcr_sys::types::*;
use vlcr_sys::NativeApi;

/// Ordered, observable list of media.
pub struct MediaList {
    api: &'static NativeApi,
    raw: *mut libvlc_media_list_t,
    events: OnceCell<NativeEventManager<MediaListEvent>>,
}

unsafe impl Send for MediaList {}
unsafe impl Sync for MediaList {}

impl MediaList {
    pub(crate) fn new(api: &'static NativeApi, instance: *mut libvlc_instance_t) -> Result<Self> {
        let raw = unsafe { api.libvlc_media_list_new(instance)? };
        let raw = non_null(api, raw, "libvlc_media_list_new")?;
        Ok(unsafe { Self::from_raw(api, raw) })
    }

    /// Wraps a pointer that already carries one reference for us.
    pub(crate) unsafe fn from_raw(api: &'static NativeApi, raw: *mut libvlc_media_list_t) -> Self {
        Self {
            api,
            raw,
            events: OnceCell::new(),
        }
    }

    pub fn as_ptr(&self) -> *mut libvlc_media_list_t {
        self.raw
    }

    pub fn events(&self) -> Result<&NativeEventManager<MediaListEvent>> {
        self.events.get_or_try_init(|| {
            let manager = unsafe { self.api.libvlc_media_list_event_manager(self.raw)? };
            Ok(NativeEventManager::native(self.api, manager))
        })
    }

    /// Holds the list lock so several operations see a consistent list.
    pub fn lock(&self) -> Result<MediaListGuard<'_>> {
        unsafe { self.api.libvlc_media_list_lock(self.raw)? };
        Ok(MediaListGuard { list: self })
    }

    pub fn add(&self, media: &Media) -> Result<()> {
        self.lock()?.add(media)
    }

    pub fn insert(&self, media: &Media, index: usize) -> Result<()> {
        self.lock()?.insert(media, index)
    }

    pub fn remove(&self, index: usize) -> Result<()> {
        self.lock()?.remove(index)
    }

    pub fn count(&self) -> Result<usize> {
        self.lock()?.count()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    pub fn item_at(&self, index: usize) -> Result<Option<Media>> {
        self.lock()?.item_at(index)
    }

    pub fn index_of(&self, media: &Media) -> Result<Option<usize>> {
        self.lock()?.index_of(media)
    }

    /// All items, retained.
    pub fn items(&self) -> Result<Vec<Media>> {
        let guard = self.lock()?;
        let count = guard.count()?;
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            if let Some(media) = guard.item_at(index)? {
                items.push(media);
            }
        }
        Ok(items)
    }

    pub fn is_read_only(&self) -> Result<bool> {
        Ok(unsafe { self.api.libvlc_media_list_is_readonly(self.raw)? } != 0)
    }
}

impl Clone for MediaList {
    fn clone(&self) -> Self {
        let _ = unsafe { self.api.libvlc_media_list_retain(self.raw) };
        unsafe { Self::from_raw(self.api, self.raw) }
    }
}

impl Drop for MediaList {
    fn drop(&mut self) {
        if let Some(events) = self.events.take() {
            events.release();
        }
        let _ = unsafe { self.api.libvlc_media_list_release(self.raw) };
    }
}

fn to_index(index: usize) -> Result<c_int> {
    c_int::try_from(index).map_err(|_| Error::InvalidArgument(format!("index {index}")))
}

/// Locked view of a [`MediaList`]; unlocks on drop.
pub struct MediaListGuard<'a> {
    list: &'a MediaList,
}

impl MediaListGuard<'_> {
    fn api(&self) -> &'static NativeApi {
        self.list.api
    }

    fn raw(&self) -> *mut libvlc_media_list_t {
        self.list.raw
    }

    pub fn add(&self, media: &Media) -> Result<()> {
        let code = unsafe { self.api().libvlc_media_list_add_media(self.raw(), media.as_ptr())? };
        check(self.api(), code, "libvlc_media_list_add_media")
    }

    pub fn insert(&self, media: &Media, index: usize) -> Result<()> {
        let code = unsafe {
            self.api()
                .libvlc_media_list_insert_media(self.raw(), media.as_ptr(), to_index(index)?)?
        };
        check(self.api(), code, "libvlc_media_list_insert_media")
    }

    pub fn remove(&self, index: usize) -> Result<()> {
        let code = unsafe {
            self.api()
                .libvlc_media_list_remove_index(self.raw(), to_index(index)?)?
        };
        check(self.api(), code, "libvlc_media_list_remove_index")
    }

    pub fn count(&self) -> Result<usize> {
        let count = unsafe { self.api().libvlc_media_list_count(self.raw())? };
        Ok(count.max(0) as usize)
    }

    /// Item at `index`, retained; `None` when out of range.
    pub fn item_at(&self, index: usize) -> Result<Option<Media>> {
        let raw = unsafe {
            self.api()
                .libvlc_media_list_item_at_index(self.raw(), to_index(index)?)?
        };
        Ok((!raw.is_null()).then(|| unsafe { Media::from_raw(self.api(), raw) }))
    }

    pub fn index_of(&self, media: &Media) -> Result<Option<usize>> {
        let index = unsafe {
            self.api()
                .libvlc_media_list_index_of_item(self.raw(), media.as_ptr())?
        };
        Ok(usize::try_from(index).ok())
    }
}

impl Drop for MediaListGuard<'_> {
    fn drop(&mut self) {
        let _ = unsafe { self.api().libvlc_media_list_unlock(self.raw()) };
    }
}

/// Plays the items of a [`MediaList`] through a [`MediaPlayer`].
pub struct MediaListPlayer {
    api: &'static NativeApi,
    raw: *mut libvlc_media_list_player_t,
    events: NativeEventManager<MediaListPlayerEvent>,
    // keeps the Rust side of the player and list alive while attached
    player: Mutex<Option<MediaPlayer>>,
    list: Mutex<Option<MediaList>>,
}

unsafe impl Send for MediaListPlayer {}
unsafe impl Sync for MediaListPlayer {}

impl MediaListPlayer {
    pub(crate) fn new(api: &'static NativeApi, instance: *mut libvlc_instance_t) -> Result<Self> {
        let raw = unsafe { api.libvlc_media_list_player_new(instance)? };
        let raw = non_null(api, raw, "libvlc_media_list_player_new")?;
        let manager = match unsafe { api.libvlc_media_list_player_event_manager(raw) } {
            Ok(manager) => manager,
            Err(e) => {
                let _ = unsafe { api.libvlc_media_list_player_release(raw) };
                return Err(e.into());
            }
        };
        Ok(Self {
            api,
            raw,
            events: NativeEventManager::native(api, manager),
            player: Mutex::new(None),
            list: Mutex::new(None),
        })
    }

    pub fn events(&self) -> &NativeEventManager<MediaListPlayerEvent> {
        &self.events
    }

    pub fn set_media_player(&self, player: &MediaPlayer) -> Result<()> {
        unsafe {
            self.api
                .libvlc_media_list_player_set_media_player(self.raw, player.as_ptr())?
        };
        *self.player.lock() = Some(player.clone());
        Ok(())
    }

    pub fn media_player(&self) -> Option<MediaPlayer> {
        self.player.lock().clone()
    }

    pub fn set_media_list(&self, list: &MediaList) -> Result<()> {
        unsafe {
            self.api
                .libvlc_media_list_player_set_media_list(self.raw, list.as_ptr())?
        };
        *self.list.lock() = Some(list.clone());
        Ok(())
    }

    pub fn media_list(&self) -> Option<MediaList> {
        self.list.lock().clone()
    }

    pub fn play(&self) -> Result<()> {
        self.require_list()?;
        unsafe { self.api.libvlc_media_list_player_play(self.raw)? };
        Ok(())
    }

    /// Toggles pause
    pub fn pause(&self) -> Result<()> {
        unsafe { self.api.libvlc_media_list_player_pause(self.raw)? };
        Ok(())
    }

    pub fn set_pause(&self, pause: bool) -> Result<()> {
        unsafe {
            self.api
                .libvlc_media_list_player_set_pause(self.raw, pause as c_int)?
        };
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        unsafe { self.api.libvlc_media_list_player_stop(self.raw)? };
        Ok(())
    }

    pub fn is_playing(&self) -> Result<bool> {
        Ok(unsafe { self.api.libvlc_media_list_player_is_playing(self.raw)? } != 0)
    }

    pub fn state(&self) -> Result<Option<State>> {
        let state = unsafe { self.api.libvlc_media_list_player_get_state(self.raw)? };
        Ok(State::from_raw(state))
    }

    pub fn play_item_at(&self, index: usize) -> Result<()> {
        self.require_list()?;
        let code = unsafe {
            self.api
                .libvlc_media_list_player_play_item_at_index(self.raw, to_index(index)?)?
        };
        check(self.api, code, "libvlc_media_list_player_play_item_at_index")
    }

    pub fn play_item(&self, media: &Media) -> Result<()> {
        self.require_list()?;
        let code = unsafe {
            self.api
                .libvlc_media_list_player_play_item(self.raw, media.as_ptr())?
        };
        check(self.api, code, "libvlc_media_list_player_play_item")
    }

    pub fn next(&self) -> Result<()> {
        let code = unsafe { self.api.libvlc_media_list_player_next(self.raw)? };
        check(self.api, code, "libvlc_media_list_player_next")
    }

    pub fn previous(&self) -> Result<()> {
        let code = unsafe { self.api.libvlc_media_list_player_previous(self.raw)? };
        check(self.api, code, "libvlc_media_list_player_previous")
    }

    pub fn set_playback_mode(&self, mode: PlaybackMode) -> Result<()> {
        unsafe {
            self.api
                .libvlc_media_list_player_set_playback_mode(self.raw, mode.as_raw())?
        };
        Ok(())
    }

    fn require_list(&self) -> Result<()> {
        if self.list.lock().is_some() {
            Ok(())
        } else {
            Err(Error::NoMedia)
        }
    }
}

impl Drop for MediaListPlayer {
    fn drop(&mut self) {
        self.events.release();
        let _ = unsafe { self.api.libvlc_media_list_player_release(self.raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(3).unwrap(), 3);
        assert!(matches!(
            to_index(usize::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }
}
