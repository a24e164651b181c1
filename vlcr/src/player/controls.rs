use super::{MediaPlayer, PlayerInner};
use crate::events::MediaPlayerEvent;
use crate::{check, Result};
use std::os::raw::c_int;
use std::sync::{Arc, Weak};

/// Playback control
pub struct ControlsApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> ControlsApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Starts playback asynchronously; see [`crate::MediaPlayerLatch`] to
    /// wait for it.
    pub fn play(&self) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_media_player_play(self.player.raw())? };
        check(api, code, "libvlc_media_player_play")
    }

    /// Toggles pause
    pub fn pause(&self) -> Result<()> {
        unsafe { self.player.api().libvlc_media_player_pause(self.player.raw())? };
        Ok(())
    }

    pub fn set_pause(&self, pause: bool) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_pause(self.player.raw(), pause as c_int)?
        };
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        unsafe { self.player.api().libvlc_media_player_stop(self.player.raw())? };
        Ok(())
    }

    /// Jumps to `time` milliseconds
    pub fn set_time(&self, time: i64) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_time(self.player.raw(), time.max(0))?
        };
        Ok(())
    }

    /// Moves by `delta` milliseconds from the current time.
    pub fn skip_time(&self, delta: i64) -> Result<()> {
        let now = unsafe { self.player.api().libvlc_media_player_get_time(self.player.raw())? };
        if now < 0 {
            return Ok(());
        }
        self.set_time(now.saturating_add(delta))
    }

    /// Jumps to `position`, a fraction of the length clamped to 0.0..=1.0
    pub fn set_position(&self, position: f32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_position(self.player.raw(), position.clamp(0.0, 1.0))?
        };
        Ok(())
    }

    pub fn skip_position(&self, delta: f32) -> Result<()> {
        let now = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_position(self.player.raw())?
        };
        if now < 0.0 {
            return Ok(());
        }
        self.set_position(now + delta)
    }

    /// Playback speed, 1.0 is normal
    pub fn set_rate(&self, rate: f32) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_media_player_set_rate(self.player.raw(), rate)? };
        check(api, code, "libvlc_media_player_set_rate")
    }

    /// Shows the next frame while paused
    pub fn next_frame(&self) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_next_frame(self.player.raw())?
        };
        Ok(())
    }

    /// Restarts the current media each time it finishes.
    pub fn set_repeat(&self, repeat: bool) -> Result<()> {
        let inner = self.player.inner();
        let mut slot = inner.repeat.lock();
        match (repeat, slot.take()) {
            (true, Some(handle)) => *slot = Some(handle),
            (true, None) => {
                let sender = inner.executor.sender()?;
                let weak = Arc::downgrade(inner);
                let handle = inner.events.add_listener(move |event: &MediaPlayerEvent| {
                    if *event == MediaPlayerEvent::Finished {
                        let weak = Weak::clone(&weak);
                        let _ = sender.submit(move || replay(weak));
                    }
                });
                *slot = Some(handle);
            }
            (false, Some(handle)) => {
                inner.events.remove_listener(handle);
            }
            (false, None) => {}
        }
        Ok(())
    }

    pub fn repeat(&self) -> bool {
        self.player.inner().repeat.lock().is_some()
    }
}

fn replay(player: Weak<PlayerInner>) {
    let Some(inner) = player.upgrade() else {
        return;
    };
    let player = MediaPlayer::from_inner(inner);
    tracing::debug!("Repeating media");
    let controls = player.controls();
    if let Err(e) = controls.stop().and_then(|()| controls.play()) {
        tracing::warn!(error = %e, "Failed to repeat media");
    }
}
