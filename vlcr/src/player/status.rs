use super::MediaPlayer;
use crate::Result;
use vlcr_core::State;

/// Read-only playback status
pub struct StatusApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> StatusApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn is_playing(&self) -> Result<bool> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_is_playing(self.player.raw())?
        } != 0)
    }

    /// Whether the current media can be played at all
    pub fn is_playable(&self) -> Result<bool> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_will_play(self.player.raw())?
        } != 0)
    }

    pub fn is_seekable(&self) -> Result<bool> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_is_seekable(self.player.raw())?
        } != 0)
    }

    pub fn can_pause(&self) -> Result<bool> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_can_pause(self.player.raw())?
        } != 0)
    }

    pub fn is_scrambled(&self) -> Result<bool> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_program_scrambled(self.player.raw())?
        } != 0)
    }

    pub fn state(&self) -> Result<Option<State>> {
        let state = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_state(self.player.raw())?
        };
        Ok(State::from_raw(state))
    }

    /// Length in milliseconds, `None` without media
    pub fn length(&self) -> Result<Option<i64>> {
        let length = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_length(self.player.raw())?
        };
        Ok((length >= 0).then_some(length))
    }

    /// Current time in milliseconds, `None` without media
    pub fn time(&self) -> Result<Option<i64>> {
        let time = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_time(self.player.raw())?
        };
        Ok((time >= 0).then_some(time))
    }

    /// Position as a fraction of the length, `None` without media
    pub fn position(&self) -> Result<Option<f32>> {
        let position = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_position(self.player.raw())?
        };
        Ok((position >= 0.0).then_some(position))
    }

    pub fn rate(&self) -> Result<f32> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_get_rate(self.player.raw())?
        })
    }

    /// Number of active video outputs
    pub fn video_outputs(&self) -> Result<u32> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_media_player_has_vout(self.player.raw())?
        })
    }
}
