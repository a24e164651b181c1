//! Audio equalizer settings
//!
//! [`Equalizer`] is a plain value; it is copied into a native equalizer each
//! time it is applied to a player, so later edits need another apply.

use crate::{check, non_null, Error, Result};
use std::os::raw::c_uint;
use vlcr_sys::types::libvlc_equalizer_t;
use vlcr_sys::NativeApi;

/// Lowest accepted preamp or band amplification, in dB
pub const MIN_AMP: f32 = -20.0;
/// Highest accepted preamp or band amplification, in dB
pub const MAX_AMP: f32 = 20.0;

fn clamp_amp(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(MIN_AMP, MAX_AMP)
    }
}

/// Preamp and per-band amplification in dB, clamped to
/// [`MIN_AMP`]..=[`MAX_AMP`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equalizer {
    preamp: f32,
    amps: Vec<f32>,
}

impl Equalizer {
    /// Flat equalizer with `band_count` bands.
    pub fn new(band_count: usize) -> Self {
        Self {
            preamp: 0.0,
            amps: vec![0.0; band_count],
        }
    }

    pub fn band_count(&self) -> usize {
        self.amps.len()
    }

    pub fn preamp(&self) -> f32 {
        self.preamp
    }

    pub fn set_preamp(&mut self, preamp: f32) {
        self.preamp = clamp_amp(preamp);
    }

    pub fn amp(&self, band: usize) -> Option<f32> {
        self.amps.get(band).copied()
    }

    pub fn set_amp(&mut self, band: usize, amp: f32) -> Result<()> {
        let count = self.amps.len();
        let slot = self.amps.get_mut(band).ok_or_else(|| {
            Error::InvalidArgument(format!("band {band} out of range, {count} bands"))
        })?;
        *slot = clamp_amp(amp);
        Ok(())
    }

    pub fn amps(&self) -> &[f32] {
        &self.amps
    }

    /// Replaces all bands at once; `amps` must match the band count.
    pub fn set_amps(&mut self, amps: &[f32]) -> Result<()> {
        if amps.len() != self.amps.len() {
            return Err(Error::InvalidArgument(format!(
                "expected {} bands, got {}",
                self.amps.len(),
                amps.len()
            )));
        }
        for (slot, &amp) in self.amps.iter_mut().zip(amps) {
            *slot = clamp_amp(amp);
        }
        Ok(())
    }

    /// Back to flat
    pub fn reset(&mut self) {
        self.preamp = 0.0;
        self.amps.iter_mut().for_each(|a| *a = 0.0);
    }

    /// Builds a native equalizer carrying these values.
    pub(crate) fn to_native(&self, api: &'static NativeApi) -> Result<NativeEqualizer> {
        let raw = unsafe { api.libvlc_audio_equalizer_new()? };
        let native = NativeEqualizer {
            api,
            raw: non_null(api, raw, "libvlc_audio_equalizer_new")?,
        };
        unsafe {
            let code = api.libvlc_audio_equalizer_set_preamp(native.raw, self.preamp)?;
            check(api, code, "libvlc_audio_equalizer_set_preamp")?;
            for (band, &amp) in self.amps.iter().enumerate() {
                let code = api.libvlc_audio_equalizer_set_amp_at_index(
                    native.raw,
                    amp,
                    band as c_uint,
                )?;
                check(api, code, "libvlc_audio_equalizer_set_amp_at_index")?;
            }
        }
        Ok(native)
    }

    /// Reads a native equalizer's values.
    pub(crate) fn from_native(api: &NativeApi, native: &NativeEqualizer) -> Result<Self> {
        unsafe {
            let band_count = api.libvlc_audio_equalizer_get_band_count()?;
            let mut equalizer = Self::new(band_count as usize);
            equalizer.set_preamp(api.libvlc_audio_equalizer_get_preamp(native.raw)?);
            for band in 0..band_count {
                let amp = api.libvlc_audio_equalizer_get_amp_at_index(native.raw, band)?;
                equalizer.amps[band as usize] = clamp_amp(amp);
            }
            Ok(equalizer)
        }
    }
}

/// Owned `libvlc_equalizer_t`, released on drop.
pub(crate) struct NativeEqualizer {
    api: &'static NativeApi,
    pub(crate) raw: *mut libvlc_equalizer_t,
}

impl NativeEqualizer {
    pub(crate) fn from_preset(api: &'static NativeApi, index: u32) -> Result<Self> {
        let raw = unsafe { api.libvlc_audio_equalizer_new_from_preset(index)? };
        Ok(Self {
            api,
            raw: non_null(api, raw, "libvlc_audio_equalizer_new_from_preset")?,
        })
    }
}

impl Drop for NativeEqualizer {
    fn drop(&mut self) {
        let _ = unsafe { self.api.libvlc_audio_equalizer_release(self.raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_flat() {
        let eq = Equalizer::new(10);
        assert_eq!(eq.band_count(), 10);
        assert_eq!(eq.preamp(), 0.0);
        assert!(eq.amps().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_values_are_clamped() {
        let mut eq = Equalizer::new(3);
        eq.set_preamp(35.0);
        assert_eq!(eq.preamp(), MAX_AMP);
        eq.set_amp(1, -40.0).unwrap();
        assert_eq!(eq.amp(1), Some(MIN_AMP));
        eq.set_amp(2, f32::NAN).unwrap();
        assert_eq!(eq.amp(2), Some(0.0));
    }

    #[test]
    fn test_band_out_of_range() {
        let mut eq = Equalizer::new(3);
        assert!(matches!(eq.set_amp(3, 1.0), Err(Error::InvalidArgument(_))));
        assert_eq!(eq.amp(3), None);
    }

    #[test]
    fn test_set_amps_requires_full_set() {
        let mut eq = Equalizer::new(2);
        assert!(eq.set_amps(&[1.0]).is_err());
        eq.set_amps(&[1.5, 25.0]).unwrap();
        assert_eq!(eq.amps(), &[1.5, MAX_AMP]);
        eq.reset();
        assert_eq!(eq.amps(), &[0.0, 0.0]);
    }
}
