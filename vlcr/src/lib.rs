//! vlcr
//!
//! Rust facade over libVLC. A [`MediaPlayerFactory`] owns the libVLC
//! instance and creates players, media, lists and discoverers. Each
//! [`MediaPlayer`] groups its native calls by area (`audio()`, `video()`,
//! `chapters()`, `snapshots()`...), and every method forwards to one or two
//! libVLC functions.
//!
//! Native events are delivered through [`NativeEventManager`]. Listeners run
//! on libVLC's own threads and must not call back into libVLC; hand such work
//! to [`MediaPlayer::submit`] instead.

pub mod config;
pub mod discoverer;
pub mod equalizer;
pub mod events;
pub mod executor;
pub mod factory;
pub mod latch;
pub mod media;
pub mod media_list;
pub mod player;
pub mod renderer;

mod native;

pub use config::FactoryConfig;
pub use discoverer::MediaDiscoverer;
pub use equalizer::Equalizer;
pub use events::{
    EventListener, ListenerHandle, MediaEvent, MediaListEvent, MediaListPlayerEvent,
    MediaPlayerEvent, NativeEventManager, RendererDiscovererEvent,
};
pub use executor::TaskExecutor;
pub use factory::MediaPlayerFactory;
pub use latch::{MediaPlayerLatch, MediaPlayerStopLatch};
pub use media::{Media, MediaRef};
pub use media_list::{MediaList, MediaListPlayer};
pub use player::MediaPlayer;
pub use renderer::{RendererDiscoverer, RendererItem, RendererItemRef};

pub use vlcr_core as core;
pub use vlcr_sys as sys;

use std::ffi::CString;
use std::os::raw::c_int;
use vlcr_sys::NativeApi;

/// Result type for vlcr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for vlcr operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("libVLC error: {0}")]
    Sys(#[from] vlcr_sys::Error),

    #[error("{action} failed: {}", .message.as_deref().unwrap_or("no details from libVLC"))]
    Native {
        action: &'static str,
        message: Option<String>,
    },

    #[error("String contains a NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),

    #[error("No media set")]
    NoMedia,

    #[error("Timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown equalizer preset: {0}")]
    UnknownPreset(String),

    #[error("Task executor has shut down")]
    ExecutorShutdown,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("vlcr core error: {0}")]
    Core(#[from] vlcr_core::Error),
}

/// Builds the error for a failed native call, picking up `libvlc_errmsg`.
pub(crate) fn native_error(api: &NativeApi, action: &'static str) -> Error {
    let message = vlcr_sys::last_error(api);
    tracing::debug!(action, message = ?message, "libVLC call failed");
    Error::Native { action, message }
}

/// Maps libVLC's "0 on success" convention onto `Result`.
pub(crate) fn check(api: &NativeApi, code: c_int, action: &'static str) -> Result<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(native_error(api, action))
    }
}

/// Maps a NULL handle from a constructor onto an error.
pub(crate) fn non_null<T>(api: &NativeApi, ptr: *mut T, action: &'static str) -> Result<*mut T> {
    if ptr.is_null() {
        Err(native_error(api, action))
    } else {
        Ok(ptr)
    }
}

pub(crate) fn cstring(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}
