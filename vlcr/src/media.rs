//! Media items
//!
//! A [`Media`] owns one libVLC reference; cloning retains, dropping releases.
//! [`MediaRef`] is the borrowed form handed out by events.

use crate::events::{MediaEvent, NativeEventManager};
use crate::latch::await_outcome;
use crate::media_list::MediaList;
use crate::{check, cstring, native, non_null, Result};
use once_cell::sync::OnceCell;
use std::os::raw::c_uint;
use std::path::Path;
use std::ptr;
use std::time::Duration;
use vlcr_core::{
    MediaInfo, MediaSlave, MediaStatistics, MediaType, Meta, ParseFlags, ParsedStatus, SlaveType,
    State, TrackInfo,
};
use vlcr_sys::types::*;
use vlcr_sys::{copy_string, take_string, NativeApi};

/// Extra wait on top of libVLC's own parse timeout for the outcome event
const PARSE_GRACE: Duration = Duration::from_secs(1);

/// Non-owning pointer to a native media, as carried by events.
///
/// The pointer is only guaranteed valid while the event is being delivered;
/// call [`MediaRef::to_media`] inside the listener to keep the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaRef(*mut libvlc_media_t);

unsafe impl Send for MediaRef {}
unsafe impl Sync for MediaRef {}

impl MediaRef {
    pub(crate) fn new(raw: *mut libvlc_media_t) -> Option<Self> {
        (!raw.is_null()).then_some(Self(raw))
    }

    pub fn as_ptr(&self) -> *mut libvlc_media_t {
        self.0
    }

    /// Takes a new reference to the media.
    pub fn to_media(&self) -> Result<Media> {
        let api = vlcr_sys::api()?;
        unsafe {
            api.libvlc_media_retain(self.0)?;
            Ok(Media::from_raw(api, self.0))
        }
    }
}

/// A media resource, local file or network location.
pub struct Media {
    api: &'static NativeApi,
    raw: *mut libvlc_media_t,
    events: OnceCell<NativeEventManager<MediaEvent>>,
}

// SAFETY: libvlc_media_t is reference counted and internally locked
unsafe impl Send for Media {}
unsafe impl Sync for Media {}

impl Media {
    /// Wraps a pointer that already carries one reference for us.
    pub(crate) unsafe fn from_raw(api: &'static NativeApi, raw: *mut libvlc_media_t) -> Self {
        Self {
            api,
            raw,
            events: OnceCell::new(),
        }
    }

    pub(crate) fn new_location(
        api: &'static NativeApi,
        instance: *mut libvlc_instance_t,
        mrl: &str,
    ) -> Result<Self> {
        let location = cstring(mrl)?;
        let raw = unsafe { api.libvlc_media_new_location(instance, location.as_ptr())? };
        let raw = non_null(api, raw, "libvlc_media_new_location")?;
        Ok(unsafe { Self::from_raw(api, raw) })
    }

    pub(crate) fn new_path(
        api: &'static NativeApi,
        instance: *mut libvlc_instance_t,
        path: &Path,
    ) -> Result<Self> {
        let path = cstring(&path.to_string_lossy())?;
        let raw = unsafe { api.libvlc_media_new_path(instance, path.as_ptr())? };
        let raw = non_null(api, raw, "libvlc_media_new_path")?;
        Ok(unsafe { Self::from_raw(api, raw) })
    }

    pub(crate) fn new_node(
        api: &'static NativeApi,
        instance: *mut libvlc_instance_t,
        name: &str,
    ) -> Result<Self> {
        let name = cstring(name)?;
        let raw = unsafe { api.libvlc_media_new_as_node(instance, name.as_ptr())? };
        let raw = non_null(api, raw, "libvlc_media_new_as_node")?;
        Ok(unsafe { Self::from_raw(api, raw) })
    }

    pub fn as_ptr(&self) -> *mut libvlc_media_t {
        self.raw
    }

    pub fn media_ref(&self) -> MediaRef {
        MediaRef(self.raw)
    }

    pub fn events(&self) -> Result<&NativeEventManager<MediaEvent>> {
        self.events.get_or_try_init(|| {
            let manager = unsafe { self.api.libvlc_media_event_manager(self.raw)? };
            Ok(NativeEventManager::native(self.api, manager))
        })
    }

    /// Adds an input option such as `:no-audio` or `:start-time=30`.
    pub fn add_option(&self, option: &str) -> Result<()> {
        let option = cstring(option)?;
        unsafe { self.api.libvlc_media_add_option(self.raw, option.as_ptr())? };
        Ok(())
    }

    /// Adds an option with explicit libVLC option flags
    /// (`0x2` trusted, `0x100` unique).
    pub fn add_option_flag(&self, option: &str, flags: u32) -> Result<()> {
        let option = cstring(option)?;
        unsafe {
            self.api
                .libvlc_media_add_option_flag(self.raw, option.as_ptr(), flags as c_uint)?
        };
        Ok(())
    }

    pub fn add_options<S: AsRef<str>>(&self, options: &[S]) -> Result<()> {
        for option in options {
            self.add_option(option.as_ref())?;
        }
        Ok(())
    }

    pub fn mrl(&self) -> Result<String> {
        let mrl = unsafe { take_string(self.api, self.api.libvlc_media_get_mrl(self.raw)?) };
        Ok(mrl.unwrap_or_default())
    }

    /// Creates an independent copy with the same options.
    pub fn duplicate(&self) -> Result<Media> {
        let raw = unsafe { self.api.libvlc_media_duplicate(self.raw)? };
        let raw = non_null(self.api, raw, "libvlc_media_duplicate")?;
        Ok(unsafe { Self::from_raw(self.api, raw) })
    }

    pub fn meta(&self, key: Meta) -> Result<Option<String>> {
        unsafe {
            let value = self.api.libvlc_media_get_meta(self.raw, key.as_raw())?;
            Ok(take_string(self.api, value))
        }
    }

    /// Every meta value that is set
    pub fn all_meta(&self) -> Result<Vec<(Meta, String)>> {
        let mut values = Vec::new();
        for &key in Meta::ALL {
            if let Some(value) = self.meta(key)? {
                values.push((key, value));
            }
        }
        Ok(values)
    }

    /// Sets a meta value in memory; call [`Media::save_meta`] to persist it.
    pub fn set_meta(&self, key: Meta, value: &str) -> Result<()> {
        let value = cstring(value)?;
        unsafe {
            self.api
                .libvlc_media_set_meta(self.raw, key.as_raw(), value.as_ptr())?
        };
        Ok(())
    }

    pub fn save_meta(&self) -> Result<()> {
        // returns non-zero on success
        let saved = unsafe { self.api.libvlc_media_save_meta(self.raw)? };
        if saved != 0 {
            Ok(())
        } else {
            Err(crate::native_error(self.api, "libvlc_media_save_meta"))
        }
    }

    pub fn state(&self) -> Result<Option<State>> {
        let state = unsafe { self.api.libvlc_media_get_state(self.raw)? };
        Ok(State::from_raw(state))
    }

    /// Statistics of the input, `None` when the media is not being played.
    pub fn statistics(&self) -> Result<Option<MediaStatistics>> {
        let mut stats = libvlc_media_stats_t::default();
        let ok = unsafe { self.api.libvlc_media_get_stats(self.raw, &mut stats)? };
        Ok((ok != 0).then(|| native::statistics(&stats)))
    }

    /// Duration in milliseconds, `-1` until known.
    pub fn duration(&self) -> Result<i64> {
        Ok(unsafe { self.api.libvlc_media_get_duration(self.raw)? })
    }

    pub fn media_type(&self) -> Result<Option<MediaType>> {
        let kind = unsafe { self.api.libvlc_media_get_type(self.raw)? };
        Ok(MediaType::from_raw(kind))
    }

    /// Starts asynchronous parsing. Completion is reported through
    /// [`MediaEvent::ParsedChanged`]. `None` uses libVLC's default timeout,
    /// a zero duration waits indefinitely.
    pub fn parse(&self, flags: ParseFlags, timeout: Option<Duration>) -> Result<()> {
        let timeout = match timeout {
            None => -1,
            Some(t) => t.as_millis().min(i32::MAX as u128) as i32,
        };
        let code = unsafe {
            self.api
                .libvlc_media_parse_with_options(self.raw, flags.bits(), timeout)?
        };
        check(self.api, code, "libvlc_media_parse_with_options")
    }

    /// Parses and blocks until libVLC reports the outcome. Returns true
    /// when parsing completed, false when it failed, timed out or was
    /// skipped. A media parsed before returns that earlier outcome at once.
    pub fn parse_sync(&self, flags: ParseFlags, timeout: Option<Duration>) -> Result<bool> {
        await_parse(self.events()?, self.parsed_status()?, timeout, || {
            self.parse(flags, timeout)
        })
    }

    pub fn stop_parse(&self) -> Result<()> {
        unsafe { self.api.libvlc_media_parse_stop(self.raw)? };
        Ok(())
    }

    pub fn parsed_status(&self) -> Result<Option<ParsedStatus>> {
        let status = unsafe { self.api.libvlc_media_get_parsed_status(self.raw)? };
        Ok(ParsedStatus::from_raw(status))
    }

    /// Elementary streams found by parsing or playback.
    pub fn tracks(&self) -> Result<Vec<TrackInfo>> {
        let mut array: *mut *mut libvlc_media_track_t = ptr::null_mut();
        unsafe {
            let count = self.api.libvlc_media_tracks_get(self.raw, &mut array)?;
            let mut tracks = native::collect_array(array, count as usize, |t| native::track_info(t));
            if !array.is_null() {
                self.api.libvlc_media_tracks_release(array, count)?;
            }
            for track in &mut tracks {
                let description = self
                    .api
                    .libvlc_media_get_codec_description(track.track_type.as_raw(), track.codec)?;
                track.codec_description = copy_string(description);
            }
            Ok(tracks)
        }
    }

    /// Child items of a playlist, directory or disc.
    pub fn subitems(&self) -> Result<Option<MediaList>> {
        let list = unsafe { self.api.libvlc_media_subitems(self.raw)? };
        Ok((!list.is_null()).then(|| unsafe { MediaList::from_raw(self.api, list) }))
    }

    pub fn add_slave(&self, slave_type: SlaveType, priority: u32, uri: &str) -> Result<()> {
        let uri = cstring(uri)?;
        let code = unsafe {
            self.api.libvlc_media_slaves_add(
                self.raw,
                slave_type.as_raw(),
                priority.min(4) as c_uint,
                uri.as_ptr(),
            )?
        };
        check(self.api, code, "libvlc_media_slaves_add")
    }

    pub fn clear_slaves(&self) -> Result<()> {
        unsafe { self.api.libvlc_media_slaves_clear(self.raw)? };
        Ok(())
    }

    pub fn slaves(&self) -> Result<Vec<MediaSlave>> {
        let mut array: *mut *mut libvlc_media_slave_t = ptr::null_mut();
        unsafe {
            let count = self.api.libvlc_media_slaves_get(self.raw, &mut array)?;
            let slaves = native::collect_array(array, count as usize, |s| native::media_slave(s));
            if !array.is_null() {
                self.api.libvlc_media_slaves_release(array, count)?;
            }
            Ok(slaves)
        }
    }

    /// Gathers MRL, type, state, meta, tracks and statistics in one call.
    pub fn info(&self) -> Result<MediaInfo> {
        Ok(MediaInfo {
            mrl: self.mrl()?,
            media_type: self.media_type()?,
            state: self.state()?,
            parsed_status: self.parsed_status()?,
            duration_ms: self.duration()?,
            meta: self.all_meta()?,
            tracks: self.tracks()?,
            statistics: self.statistics()?,
        })
    }
}

impl Clone for Media {
    fn clone(&self) -> Self {
        // retain cannot fail once the media exists
        let _ = unsafe { self.api.libvlc_media_retain(self.raw) };
        unsafe { Self::from_raw(self.api, self.raw) }
    }
}

impl std::fmt::Debug for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Media").field("raw", &self.raw).finish()
    }
}

impl Drop for Media {
    fn drop(&mut self) {
        if let Some(events) = self.events.take() {
            events.release();
        }
        let _ = unsafe { self.api.libvlc_media_release(self.raw) };
    }
}

/// Runs `parse` and waits for its outcome. A media that already has an
/// outcome gets no new event from libVLC, so that outcome is returned.
fn await_parse<A>(
    events: &NativeEventManager<MediaEvent>,
    status: Option<ParsedStatus>,
    timeout: Option<Duration>,
    parse: A,
) -> Result<bool>
where
    A: FnOnce() -> Result<()>,
{
    if let Some(status) = status {
        return Ok(status == ParsedStatus::Done);
    }
    await_outcome(events, "media parsing", parse_wait(timeout), parse, |event: &MediaEvent| {
        match event {
            MediaEvent::ParsedChanged(Some(status)) => Some(*status == ParsedStatus::Done),
            _ => None,
        }
    })
}

/// How long to wait for the outcome of a parse given libVLC `timeout`.
/// A zero timeout makes libVLC wait indefinitely, so do we.
fn parse_wait(timeout: Option<Duration>) -> Option<Duration> {
    timeout
        .filter(|t| !t.is_zero())
        .map(|t| t + PARSE_GRACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::FakeRegistrar;
    use std::os::raw::c_int;
    use std::thread;

    fn manager() -> (NativeEventManager<MediaEvent>, FakeRegistrar) {
        let registrar = FakeRegistrar::default();
        (
            NativeEventManager::new(Box::new(registrar.clone())),
            registrar,
        )
    }

    fn parsed(value: c_int) -> libvlc_event_u {
        libvlc_event_u {
            media_parsed_changed: new_int_t { value },
        }
    }

    #[test]
    fn test_parse_wait_durations() {
        assert_eq!(parse_wait(None), None);
        assert_eq!(parse_wait(Some(Duration::ZERO)), None);
        assert_eq!(
            parse_wait(Some(Duration::from_secs(2))),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_earlier_parse_outcome_returns_without_parsing() {
        let (events, _registrar) = manager();
        for (status, expected) in [
            (ParsedStatus::Skipped, false),
            (ParsedStatus::Failed, false),
            (ParsedStatus::Timeout, false),
            (ParsedStatus::Done, true),
        ] {
            let result = await_parse(&events, Some(status), None, || {
                panic!("parse must not be requested again")
            });
            assert_eq!(result.unwrap(), expected);
        }
        assert!(!events.is_attached());
    }

    #[test]
    fn test_parse_outcome_from_event() {
        let (events, registrar) = manager();
        let result = await_parse(&events, None, Some(Duration::from_secs(5)), || {
            registrar.fire(LIBVLC_MEDIA_PARSED_CHANGED);
            registrar.fire_with(LIBVLC_MEDIA_PARSED_CHANGED, parsed(2));
            Ok(())
        });
        assert!(!result.unwrap());
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_zero_timeout_waits_past_grace() {
        let (events, registrar) = manager();
        let result = await_parse(&events, None, Some(Duration::ZERO), || {
            let registrar = registrar.clone();
            thread::spawn(move || {
                thread::sleep(PARSE_GRACE + Duration::from_millis(200));
                registrar.fire_with(LIBVLC_MEDIA_PARSED_CHANGED, parsed(4));
            });
            Ok(())
        });
        assert!(result.unwrap());
    }

    #[test]
    fn test_media_ref_rejects_null() {
        assert!(MediaRef::new(ptr::null_mut()).is_none());
    }

    #[test]
    fn test_media_ref_identity() {
        let raw = 0x1000 as *mut libvlc_media_t;
        let a = MediaRef::new(raw).unwrap();
        assert_eq!(a, MediaRef::new(raw).unwrap());
        assert_eq!(a.as_ptr(), raw);
    }
}
