use super::MediaPlayer;
use crate::Result;
use std::os::raw::c_void;

/// Native window the video is drawn into. Set it before playback starts.
pub struct SurfaceApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> SurfaceApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// X11 window id, 0 lets libVLC create its own window
    pub fn set_xwindow(&self, window: u32) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_xwindow(self.player.raw(), window)?
        };
        Ok(())
    }

    pub fn xwindow(&self) -> Result<Option<u32>> {
        let window = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_xwindow(self.player.raw())?
        };
        Ok((window != 0).then_some(window))
    }

    /// Win32 `HWND`
    pub fn set_hwnd(&self, hwnd: isize) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_hwnd(self.player.raw(), hwnd as *mut c_void)?
        };
        Ok(())
    }

    pub fn hwnd(&self) -> Result<Option<isize>> {
        let hwnd = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_hwnd(self.player.raw())?
        };
        Ok((!hwnd.is_null()).then_some(hwnd as isize))
    }

    /// macOS `NSView` (or an object implementing VLCVideoViewEmbedding)
    pub fn set_nsobject(&self, view: usize) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_set_nsobject(self.player.raw(), view as *mut c_void)?
        };
        Ok(())
    }

    pub fn nsobject(&self) -> Result<Option<usize>> {
        let view = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_nsobject(self.player.raw())?
        };
        Ok((!view.is_null()).then_some(view as usize))
    }
}
