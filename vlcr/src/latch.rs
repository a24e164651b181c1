//! Blocking wrappers around asynchronous player commands
//!
//! libVLC's `play` and `stop` return before the player changes state. The
//! latches here register a temporary listener, issue the command and block
//! until the player reports success or failure.

use crate::events::{MediaPlayerEvent, NativeEvent, NativeEventManager};
use crate::player::MediaPlayer;
use crate::{Error, Result};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};
use vlcr_core::State;

/// One-shot latch holding the first value counted down.
struct Latch<T> {
    value: Mutex<Option<T>>,
    ready: Condvar,
}

impl<T> Latch<T> {
    fn new() -> Self {
        Self {
            value: Mutex::new(None),
            ready: Condvar::new(),
        }
    }

    fn count_down(&self, value: T) {
        let mut slot = self.value.lock();
        if slot.is_none() {
            *slot = Some(value);
            self.ready.notify_all();
        }
    }

    fn wait(&self, timeout: Option<Duration>) -> Option<T> {
        let mut slot = self.value.lock();
        match timeout {
            None => {
                while slot.is_none() {
                    self.ready.wait(&mut slot);
                }
            }
            Some(timeout) => {
                let deadline = Instant::now() + timeout;
                while slot.is_none() {
                    if self.ready.wait_until(&mut slot, deadline).timed_out() {
                        break;
                    }
                }
            }
        }
        slot.take()
    }
}

/// Runs `action` and waits for the first event `outcome` maps to a value.
/// The temporary listener is removed on every path.
pub(crate) fn await_outcome<E, A, O>(
    events: &NativeEventManager<E>,
    what: &'static str,
    timeout: Option<Duration>,
    action: A,
    outcome: O,
) -> Result<bool>
where
    E: NativeEvent,
    A: FnOnce() -> Result<()>,
    O: Fn(&E) -> Option<bool> + Send + Sync + 'static,
{
    let latch = Arc::new(Latch::new());
    let sink = Arc::clone(&latch);
    let handle = events.add_listener(move |event: &E| {
        if let Some(value) = outcome(event) {
            sink.count_down(value);
        }
    });
    let result = action().and_then(|()| latch.wait(timeout).ok_or(Error::Timeout(what)));
    events.remove_listener(handle);
    result
}

/// Starts playback and waits until the player is playing.
pub struct MediaPlayerLatch<'a> {
    player: &'a MediaPlayer,
    timeout: Option<Duration>,
}

impl<'a> MediaPlayerLatch<'a> {
    pub fn new(player: &'a MediaPlayer) -> Self {
        Self {
            player,
            timeout: None,
        }
    }

    /// Gives up with [`Error::Timeout`] after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns true once playing, false if libVLC reported an error.
    pub fn play(&self) -> Result<bool> {
        if !self.player.media().is_set()? {
            return Err(Error::NoMedia);
        }
        await_outcome(
            self.player.events(),
            "playback to start",
            self.timeout,
            || self.player.controls().play(),
            |event: &MediaPlayerEvent| match event {
                MediaPlayerEvent::Playing => Some(true),
                MediaPlayerEvent::Error => Some(false),
                _ => None,
            },
        )
    }
}

/// Stops playback and waits until the player has stopped.
pub struct MediaPlayerStopLatch<'a> {
    player: &'a MediaPlayer,
    timeout: Option<Duration>,
}

impl<'a> MediaPlayerStopLatch<'a> {
    pub fn new(player: &'a MediaPlayer) -> Self {
        Self {
            player,
            timeout: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns true once stopped, false if libVLC reported an error. A
    /// player that never started returns true straight away, libVLC raises
    /// no event for it.
    pub fn stop(&self) -> Result<bool> {
        if !self.player.media().is_set()? {
            return Err(Error::NoMedia);
        }
        if !stop_needs_wait(self.player.status().state()?) {
            self.player.controls().stop()?;
            return Ok(true);
        }
        await_outcome(
            self.player.events(),
            "playback to stop",
            self.timeout,
            || self.player.controls().stop(),
            stopped,
        )
    }
}

/// Whether stopping from `state` raises a `Stopped` event to wait for.
fn stop_needs_wait(state: Option<State>) -> bool {
    !matches!(
        state,
        None | Some(State::NothingSpecial) | Some(State::Stopped)
    )
}

fn stopped(event: &MediaPlayerEvent) -> Option<bool> {
    match event {
        MediaPlayerEvent::Stopped => Some(true),
        MediaPlayerEvent::Error => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::testing::FakeRegistrar;
    use std::thread;
    use vlcr_sys::types::*;

    fn manager() -> (NativeEventManager<MediaPlayerEvent>, FakeRegistrar) {
        let registrar = FakeRegistrar::default();
        (
            NativeEventManager::new(Box::new(registrar.clone())),
            registrar,
        )
    }

    fn playing(event: &MediaPlayerEvent) -> Option<bool> {
        match event {
            MediaPlayerEvent::Playing => Some(true),
            MediaPlayerEvent::Error => Some(false),
            _ => None,
        }
    }

    #[test]
    fn test_latch_keeps_first_value() {
        let latch = Latch::new();
        latch.count_down(1);
        latch.count_down(2);
        assert_eq!(latch.wait(Some(Duration::from_millis(1))), Some(1));
    }

    #[test]
    fn test_latch_times_out() {
        let latch: Latch<bool> = Latch::new();
        assert_eq!(latch.wait(Some(Duration::from_millis(20))), None);
    }

    #[test]
    fn test_outcome_from_event_during_action() {
        let (events, registrar) = manager();
        let result = await_outcome(
            &events,
            "test",
            Some(Duration::from_secs(5)),
            || {
                registrar.fire(LIBVLC_MEDIA_PLAYER_OPENING);
                registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
                Ok(())
            },
            playing,
        );
        assert!(result.unwrap());
        assert_eq!(events.listener_count(), 0);
        assert!(!events.is_attached());
    }

    #[test]
    fn test_outcome_from_another_thread() {
        let (events, registrar) = manager();
        let result = await_outcome(
            &events,
            "test",
            None,
            || {
                let registrar = registrar.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(10));
                    registrar.fire(LIBVLC_MEDIA_PLAYER_ENCOUNTERED_ERROR);
                });
                Ok(())
            },
            playing,
        );
        assert!(!result.unwrap());
    }

    #[test]
    fn test_timeout_removes_listener() {
        let (events, _registrar) = manager();
        let result = await_outcome(
            &events,
            "test",
            Some(Duration::from_millis(20)),
            || Ok(()),
            playing,
        );
        assert!(matches!(result, Err(Error::Timeout("test"))));
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_failed_action_removes_listener() {
        let (events, _registrar) = manager();
        let result = await_outcome(
            &events,
            "test",
            None,
            || Err(Error::NoMedia),
            playing,
        );
        assert!(matches!(result, Err(Error::NoMedia)));
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn test_stop_waits_only_for_started_player() {
        assert!(!stop_needs_wait(None));
        assert!(!stop_needs_wait(Some(State::NothingSpecial)));
        assert!(!stop_needs_wait(Some(State::Stopped)));
        assert!(stop_needs_wait(Some(State::Opening)));
        assert!(stop_needs_wait(Some(State::Playing)));
        assert!(stop_needs_wait(Some(State::Paused)));
        assert!(stop_needs_wait(Some(State::Ended)));
    }

    #[test]
    fn test_stop_outcome_from_events() {
        let (events, registrar) = manager();
        let result = await_outcome(
            &events,
            "playback to stop",
            Some(Duration::from_secs(5)),
            || {
                registrar.fire(LIBVLC_MEDIA_PLAYER_PLAYING);
                registrar.fire(LIBVLC_MEDIA_PLAYER_STOPPED);
                Ok(())
            },
            stopped,
        );
        assert!(result.unwrap());
        assert!(!events.is_attached());
    }
}
