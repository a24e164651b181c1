use super::MediaPlayer;
use crate::{check, cstring, native, non_null, Result};
use std::os::raw::{c_float, c_int, c_uint, c_void};
use std::ptr;
use vlcr_core::{VideoAdjustOption, Viewpoint};
use vlcr_sys::take_string;
use vlcr_sys::types::*;

/// Video output settings
pub struct VideoApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> VideoApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn toggle_fullscreen(&self) -> Result<()> {
        unsafe { self.player.api().libvlc_toggle_fullscreen(self.player.raw())? };
        Ok(())
    }

    pub fn is_fullscreen(&self) -> Result<bool> {
        Ok(unsafe { self.player.api().libvlc_get_fullscreen(self.player.raw())? } != 0)
    }

    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_set_fullscreen(self.player.raw(), fullscreen as c_int)?
        };
        Ok(())
    }

    /// Lets the video window handle key presses (hotkeys)
    pub fn enable_key_input(&self, enable: bool) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_key_input(self.player.raw(), enable as c_uint)?
        };
        Ok(())
    }

    pub fn enable_mouse_input(&self, enable: bool) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_mouse_input(self.player.raw(), enable as c_uint)?
        };
        Ok(())
    }

    /// Pixel size of the first video output, `None` without one
    pub fn size(&self) -> Result<Option<(u32, u32)>> {
        let (mut width, mut height): (c_uint, c_uint) = (0, 0);
        let code = unsafe {
            self.player
                .api()
                .libvlc_video_get_size(self.player.raw(), 0, &mut width, &mut height)?
        };
        Ok((code == 0).then_some((width, height)))
    }

    /// Mouse position over the first video output, `None` without one
    pub fn cursor(&self) -> Result<Option<(i32, i32)>> {
        let (mut x, mut y): (c_int, c_int) = (0, 0);
        let code = unsafe {
            self.player
                .api()
                .libvlc_video_get_cursor(self.player.raw(), 0, &mut x, &mut y)?
        };
        Ok((code == 0).then_some((x, y)))
    }

    /// Scaling factor, 0.0 fits the window
    pub fn scale(&self) -> Result<f32> {
        Ok(unsafe { self.player.api().libvlc_video_get_scale(self.player.raw())? })
    }

    pub fn set_scale(&self, factor: f32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_video_set_scale(self.player.raw(), factor.max(0.0))?
        };
        Ok(())
    }

    pub fn aspect_ratio(&self) -> Result<Option<String>> {
        let api = self.player.api();
        Ok(unsafe { take_string(api, api.libvlc_video_get_aspect_ratio(self.player.raw())?) })
    }

    /// Forces an aspect ratio such as `16:9`; `None` restores the source's.
    pub fn set_aspect_ratio(&self, aspect: Option<&str>) -> Result<()> {
        let aspect = aspect.map(cstring).transpose()?;
        unsafe {
            self.player.api().libvlc_video_set_aspect_ratio(
                self.player.raw(),
                aspect.as_ref().map_or(ptr::null(), |a| a.as_ptr()),
            )?
        };
        Ok(())
    }

    pub fn crop_geometry(&self) -> Result<Option<String>> {
        let api = self.player.api();
        Ok(unsafe { take_string(api, api.libvlc_video_get_crop_geometry(self.player.raw())?) })
    }

    /// Crops to `geometry`, e.g. `16:10` or `640x480+10+10`; `None` disables.
    pub fn set_crop_geometry(&self, geometry: Option<&str>) -> Result<()> {
        let geometry = geometry.map(cstring).transpose()?;
        unsafe {
            self.player.api().libvlc_video_set_crop_geometry(
                self.player.raw(),
                geometry.as_ref().map_or(ptr::null(), |g| g.as_ptr()),
            )?
        };
        Ok(())
    }

    /// Deinterlace filter mode (`blend`, `yadif`...), `None` disables.
    pub fn set_deinterlace(&self, mode: Option<&str>) -> Result<()> {
        let mode = mode.map(cstring).transpose()?;
        unsafe {
            self.player.api().libvlc_video_set_deinterlace(
                self.player.raw(),
                mode.as_ref().map_or(ptr::null(), |m| m.as_ptr()),
            )?
        };
        Ok(())
    }

    pub fn is_adjust_enabled(&self) -> Result<bool> {
        let option = VideoAdjustOption::Enable.as_raw() as c_uint;
        let enabled = unsafe {
            self.player
                .api()
                .libvlc_video_get_adjust_int(self.player.raw(), option)?
        };
        Ok(enabled != 0)
    }

    /// Turns the image adjustment filter on or off.
    pub fn enable_adjust(&self, enable: bool) -> Result<()> {
        unsafe {
            self.player.api().libvlc_video_set_adjust_int(
                self.player.raw(),
                VideoAdjustOption::Enable.as_raw() as c_uint,
                enable as c_int,
            )?
        };
        Ok(())
    }

    /// 0.0..=2.0, 1.0 is neutral
    pub fn contrast(&self) -> Result<f32> {
        self.adjustment(VideoAdjustOption::Contrast)
    }

    pub fn set_contrast(&self, contrast: f32) -> Result<()> {
        self.set_adjustment(VideoAdjustOption::Contrast, contrast)
    }

    /// 0.0..=2.0, 1.0 is neutral
    pub fn brightness(&self) -> Result<f32> {
        self.adjustment(VideoAdjustOption::Brightness)
    }

    pub fn set_brightness(&self, brightness: f32) -> Result<()> {
        self.set_adjustment(VideoAdjustOption::Brightness, brightness)
    }

    /// Degrees, -180.0..=180.0
    pub fn hue(&self) -> Result<f32> {
        self.adjustment(VideoAdjustOption::Hue)
    }

    pub fn set_hue(&self, hue: f32) -> Result<()> {
        self.set_adjustment(VideoAdjustOption::Hue, hue)
    }

    /// 0.0..=3.0, 1.0 is neutral
    pub fn saturation(&self) -> Result<f32> {
        self.adjustment(VideoAdjustOption::Saturation)
    }

    pub fn set_saturation(&self, saturation: f32) -> Result<()> {
        self.set_adjustment(VideoAdjustOption::Saturation, saturation)
    }

    /// 0.01..=10.0, 1.0 is neutral
    pub fn gamma(&self) -> Result<f32> {
        self.adjustment(VideoAdjustOption::Gamma)
    }

    pub fn set_gamma(&self, gamma: f32) -> Result<()> {
        self.set_adjustment(VideoAdjustOption::Gamma, gamma)
    }

    /// Current value of a float adjust setting
    pub fn adjustment(&self, option: VideoAdjustOption) -> Result<f32> {
        Ok(unsafe {
            self.player
                .api()
                .libvlc_video_get_adjust_float(self.player.raw(), option.as_raw() as c_uint)?
        })
    }

    /// Sets a float adjust setting, clamped to its range.
    pub fn set_adjustment(&self, option: VideoAdjustOption, value: f32) -> Result<()> {
        unsafe {
            self.player.api().libvlc_video_set_adjust_float(
                self.player.raw(),
                option.as_raw() as c_uint,
                option.clamp(value) as c_float,
            )?
        };
        Ok(())
    }

    /// Changes the 360° viewpoint. With `absolute` false the values are
    /// added to the current viewpoint.
    pub fn update_viewpoint(&self, viewpoint: &Viewpoint, absolute: bool) -> Result<()> {
        let api = self.player.api();
        unsafe {
            let native = api.libvlc_video_new_viewpoint()?;
            let native = non_null(api, native, "libvlc_video_new_viewpoint")?;
            native::write_viewpoint(viewpoint, &mut *native);
            let code = api.libvlc_video_update_viewpoint(self.player.raw(), native, absolute);
            api.libvlc_free(native as *mut c_void)?;
            check(api, code?, "libvlc_video_update_viewpoint")
        }
    }
}
