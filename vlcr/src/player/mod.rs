//! Media player facade
//!
//! [`MediaPlayer`] is a cheap handle over one native player. Its native
//! calls are grouped by area: `player.controls().play()`,
//! `player.audio().set_volume(80)`, `player.snapshots().get(0, 0)` and so
//! on. Area values only borrow the player.

mod audio;
mod callbacks;
mod chapters;
mod controls;
mod logo;
mod marquee;
mod media;
mod menu;
mod renderer;
mod role;
mod snapshots;
mod status;
mod subpictures;
mod surface;
mod teletext;
mod titles;
mod tracks;
mod video;

pub use audio::{AudioApi, MAX_VOLUME};
pub use callbacks::{
    samples_i16, AudioCallback, AudioFormat, BufferFormat, BufferFormatCallback, CallbacksApi,
    RenderCallback, SampleFormat,
};
pub use chapters::ChaptersApi;
pub use controls::ControlsApi;
pub use logo::LogoApi;
pub use marquee::MarqueeApi;
pub use media::MediaApi;
pub use menu::MenuApi;
pub use renderer::RendererApi;
pub use role::RoleApi;
pub use snapshots::SnapshotsApi;
pub use status::StatusApi;
pub use subpictures::SubpicturesApi;
pub use surface::SurfaceApi;
pub use teletext::TeletextApi;
pub use titles::TitlesApi;
pub use tracks::TracksApi;
pub use video::VideoApi;

use crate::events::{ListenerHandle, MediaPlayerEvent, NativeEventManager};
use crate::executor::TaskExecutor;
use crate::factory::{Instance, MediaPlayerFactory};
use crate::{non_null, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use vlcr_sys::types::*;
use vlcr_sys::NativeApi;

pub(crate) struct PlayerInner {
    api: &'static NativeApi,
    raw: *mut libvlc_media_player_t,
    events: NativeEventManager<MediaPlayerEvent>,
    executor: TaskExecutor,
    repeat: Mutex<Option<ListenerHandle>>,
    callbacks: callbacks::CallbackState,
    instance: Arc<Instance>,
}

// SAFETY: libvlc_media_player_t is thread safe, the Rust side state is locked
unsafe impl Send for PlayerInner {}
unsafe impl Sync for PlayerInner {}

impl Drop for PlayerInner {
    fn drop(&mut self) {
        self.events.release();
        self.executor.shutdown();
        if self.callbacks.is_installed() {
            // stop joins the decoder and output threads, nothing calls back after it
            let _ = unsafe { self.api.libvlc_media_player_stop(self.raw) };
        }
        tracing::debug!("Releasing media player");
        let _ = unsafe { self.api.libvlc_media_player_release(self.raw) };
    }
}

/// Handle to a native media player. Clones share the same player.
#[derive(Clone)]
pub struct MediaPlayer {
    inner: Arc<PlayerInner>,
}

impl MediaPlayer {
    pub(crate) fn new(factory: &MediaPlayerFactory) -> Result<Self> {
        let instance = Arc::clone(factory.instance());
        let api = instance.api;
        let raw = unsafe { api.libvlc_media_player_new(instance.raw)? };
        let raw = non_null(api, raw, "libvlc_media_player_new")?;

        let manager = match unsafe { api.libvlc_media_player_event_manager(raw) } {
            Ok(manager) => manager,
            Err(e) => {
                let _ = unsafe { api.libvlc_media_player_release(raw) };
                return Err(e.into());
            }
        };
        let executor = match TaskExecutor::new("vlcr-player") {
            Ok(executor) => executor,
            Err(e) => {
                let _ = unsafe { api.libvlc_media_player_release(raw) };
                return Err(e);
            }
        };

        tracing::debug!("Created media player");
        Ok(Self {
            inner: Arc::new(PlayerInner {
                api,
                raw,
                events: NativeEventManager::native(api, manager),
                executor,
                repeat: Mutex::new(None),
                callbacks: callbacks::CallbackState::default(),
                instance,
            }),
        })
    }

    pub(crate) fn from_inner(inner: Arc<PlayerInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn api(&self) -> &'static NativeApi {
        self.inner.api
    }

    pub(crate) fn raw(&self) -> *mut libvlc_media_player_t {
        self.inner.raw
    }

    pub(crate) fn inner(&self) -> &Arc<PlayerInner> {
        &self.inner
    }

    /// Factory sharing this player's libVLC instance.
    pub(crate) fn factory(&self) -> MediaPlayerFactory {
        MediaPlayerFactory::from_instance(Arc::clone(&self.inner.instance))
    }

    pub fn as_ptr(&self) -> *mut libvlc_media_player_t {
        self.inner.raw
    }

    /// Player events. Listeners run on libVLC threads and must not call
    /// back into libVLC; use [`MediaPlayer::submit`] for that.
    pub fn events(&self) -> &NativeEventManager<MediaPlayerEvent> {
        &self.inner.events
    }

    /// Runs `task` on this player's worker thread, after tasks submitted
    /// before it.
    pub fn submit<F>(&self, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.executor.submit(task)
    }

    pub fn controls(&self) -> ControlsApi<'_> {
        ControlsApi::new(self)
    }

    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(self)
    }

    pub fn media(&self) -> MediaApi<'_> {
        MediaApi::new(self)
    }

    pub fn audio(&self) -> AudioApi<'_> {
        AudioApi::new(self)
    }

    pub fn video(&self) -> VideoApi<'_> {
        VideoApi::new(self)
    }

    pub fn chapters(&self) -> ChaptersApi<'_> {
        ChaptersApi::new(self)
    }

    pub fn titles(&self) -> TitlesApi<'_> {
        TitlesApi::new(self)
    }

    pub fn tracks(&self) -> TracksApi<'_> {
        TracksApi::new(self)
    }

    pub fn subpictures(&self) -> SubpicturesApi<'_> {
        SubpicturesApi::new(self)
    }

    pub fn snapshots(&self) -> SnapshotsApi<'_> {
        SnapshotsApi::new(self)
    }

    pub fn marquee(&self) -> MarqueeApi<'_> {
        MarqueeApi::new(self)
    }

    pub fn logo(&self) -> LogoApi<'_> {
        LogoApi::new(self)
    }

    pub fn menu(&self) -> MenuApi<'_> {
        MenuApi::new(self)
    }

    pub fn teletext(&self) -> TeletextApi<'_> {
        TeletextApi::new(self)
    }

    pub fn role(&self) -> RoleApi<'_> {
        RoleApi::new(self)
    }

    pub fn surface(&self) -> SurfaceApi<'_> {
        SurfaceApi::new(self)
    }

    pub fn renderer(&self) -> RendererApi<'_> {
        RendererApi::new(self)
    }

    pub fn callbacks(&self) -> CallbacksApi<'_> {
        CallbacksApi::new(self)
    }
}

impl std::fmt::Debug for MediaPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaPlayer")
            .field("raw", &self.inner.raw)
            .finish()
    }
}
