use super::MediaPlayer;
use crate::latch::MediaPlayerLatch;
use crate::media::Media;
use crate::{Error, Result};
use std::time::Duration;
use vlcr_core::{MediaInfo, ParseFlags, State};

/// The player's current media
pub struct MediaApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> MediaApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Sets a new media from `mrl` (location or local path) without
    /// starting it.
    pub fn prepare<S: AsRef<str>>(&self, mrl: &str, options: &[S]) -> Result<Media> {
        let media = self.player.factory().new_media(mrl, options)?;
        self.set(&media)?;
        Ok(media)
    }

    /// Prepares `mrl` and starts playback without waiting.
    pub fn play<S: AsRef<str>>(&self, mrl: &str, options: &[S]) -> Result<()> {
        self.prepare(mrl, options)?;
        self.player.controls().play()
    }

    /// Prepares `mrl` and blocks until it is playing. Returns false when
    /// libVLC reported an error instead.
    pub fn start<S: AsRef<str>>(&self, mrl: &str, options: &[S]) -> Result<bool> {
        self.prepare(mrl, options)?;
        MediaPlayerLatch::new(self.player).play()
    }

    /// Same as [`MediaApi::start`], giving up after `timeout`.
    pub fn start_timeout<S: AsRef<str>>(
        &self,
        mrl: &str,
        options: &[S],
        timeout: Duration,
    ) -> Result<bool> {
        self.prepare(mrl, options)?;
        MediaPlayerLatch::new(self.player).timeout(timeout).play()
    }

    pub fn set(&self, media: &Media) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_media(self.player.raw(), media.as_ptr())?
        };
        Ok(())
    }

    /// Current media, retained
    pub fn media(&self) -> Result<Option<Media>> {
        let api = self.player.api();
        let raw = unsafe { api.libvlc_media_player_get_media(self.player.raw())? };
        Ok((!raw.is_null()).then(|| unsafe { Media::from_raw(api, raw) }))
    }

    pub fn is_set(&self) -> Result<bool> {
        Ok(self.media()?.is_some())
    }

    /// True when a media is set and has not failed.
    pub fn is_valid(&self) -> Result<bool> {
        match self.media()? {
            Some(media) => Ok(media.state()? != Some(State::Error)),
            None => Ok(false),
        }
    }

    /// Parses the current media, see [`Media::parse`].
    pub fn parse(&self, flags: ParseFlags, timeout: Option<Duration>) -> Result<()> {
        self.require()?.parse(flags, timeout)
    }

    /// Tracks, metadata and statistics of the current media
    pub fn info(&self) -> Result<MediaInfo> {
        self.require()?.info()
    }

    fn require(&self) -> Result<Media> {
        self.media()?.ok_or(Error::NoMedia)
    }
}
