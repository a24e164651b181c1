use super::MediaPlayer;
use crate::equalizer::Equalizer;
use crate::{check, cstring, native, Error, Result};
use std::os::raw::c_int;
use std::ptr;
use vlcr_core::{AudioChannel, AudioDevice};
use vlcr_sys::take_string;

/// Highest volume libVLC accepts, in percent
pub const MAX_VOLUME: i32 = 200;

/// Audio output, volume and equalizer
pub struct AudioApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> AudioApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Selects an audio output module by name, e.g. `pulse`. Takes effect
    /// on the next media.
    pub fn set_output(&self, name: &str) -> Result<()> {
        let api = self.player.api();
        let name = cstring(name)?;
        let code = unsafe { api.libvlc_audio_output_set(self.player.raw(), name.as_ptr())? };
        check(api, code, "libvlc_audio_output_set")
    }

    /// Devices of the active output
    pub fn output_devices(&self) -> Result<Vec<AudioDevice>> {
        let api = self.player.api();
        unsafe {
            let list = api.libvlc_audio_output_device_enum(self.player.raw())?;
            let devices = native::audio_devices(list);
            if !list.is_null() {
                api.libvlc_audio_output_device_list_release(list)?;
            }
            Ok(devices)
        }
    }

    pub fn output_device(&self) -> Result<Option<String>> {
        let api = self.player.api();
        unsafe {
            let device = api.libvlc_audio_output_device_get(self.player.raw())?;
            Ok(take_string(api, device))
        }
    }

    /// Switches device. `module` None keeps the current output module.
    pub fn set_output_device(&self, module: Option<&str>, device_id: &str) -> Result<()> {
        let module = module.map(cstring).transpose()?;
        let device_id = cstring(device_id)?;
        unsafe {
            self.player.api().libvlc_audio_output_device_set(
                self.player.raw(),
                module.as_ref().map_or(ptr::null(), |m| m.as_ptr()),
                device_id.as_ptr(),
            )?
        };
        Ok(())
    }

    pub fn toggle_mute(&self) -> Result<()> {
        unsafe { self.player.api().libvlc_audio_toggle_mute(self.player.raw())? };
        Ok(())
    }

    /// `None` while there is no audio output
    pub fn is_muted(&self) -> Result<Option<bool>> {
        let mute = unsafe { self.player.api().libvlc_audio_get_mute(self.player.raw())? };
        Ok((mute >= 0).then_some(mute != 0))
    }

    pub fn set_mute(&self, mute: bool) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_audio_set_mute(self.player.raw(), mute as c_int)?
        };
        Ok(())
    }

    /// Volume in percent, `None` while there is no audio output
    pub fn volume(&self) -> Result<Option<i32>> {
        let volume = unsafe { self.player.api().libvlc_audio_get_volume(self.player.raw())? };
        Ok((volume >= 0).then_some(volume))
    }

    /// Sets the volume in percent, 0..=200
    pub fn set_volume(&self, volume: i32) -> Result<()> {
        if !(0..=MAX_VOLUME).contains(&volume) {
            return Err(Error::InvalidArgument(format!("volume {volume}")));
        }
        let api = self.player.api();
        let code = unsafe { api.libvlc_audio_set_volume(self.player.raw(), volume)? };
        check(api, code, "libvlc_audio_set_volume")
    }

    pub fn channel(&self) -> Result<Option<AudioChannel>> {
        let channel = unsafe { self.player.api().libvlc_audio_get_channel(self.player.raw())? };
        Ok(AudioChannel::from_raw(channel).filter(|c| *c != AudioChannel::Error))
    }

    pub fn set_channel(&self, channel: AudioChannel) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_audio_set_channel(self.player.raw(), channel.as_raw())? };
        check(api, code, "libvlc_audio_set_channel")
    }

    /// Audio delay in microseconds
    pub fn delay(&self) -> Result<i64> {
        Ok(unsafe { self.player.api().libvlc_audio_get_delay(self.player.raw())? })
    }

    pub fn set_delay(&self, delay: i64) -> Result<()> {
        let api = self.player.api();
        let code = unsafe { api.libvlc_audio_set_delay(self.player.raw(), delay)? };
        check(api, code, "libvlc_audio_set_delay")
    }

    /// Applies `equalizer`, or disables equalization with `None`. libVLC
    /// copies the values, later changes to `equalizer` need another call.
    pub fn set_equalizer(&self, equalizer: Option<&Equalizer>) -> Result<()> {
        let api = self.player.api();
        let native = equalizer.map(|eq| eq.to_native(api)).transpose()?;
        let code = unsafe {
            api.libvlc_media_player_set_equalizer(
                self.player.raw(),
                native.as_ref().map_or(ptr::null_mut(), |n| n.raw),
            )?
        };
        check(api, code, "libvlc_media_player_set_equalizer")
    }

    pub fn clear_equalizer(&self) -> Result<()> {
        self.set_equalizer(None)
    }
}
