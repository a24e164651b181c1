use super::MediaPlayer;
use crate::renderer::RendererItem;
use crate::{check, Result};
use std::ptr;

/// Output to a remote renderer
pub struct RendererApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> RendererApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Sends playback to `item`; `None` switches back to local output.
    /// Must be called before playback starts.
    pub fn set(&self, item: Option<&RendererItem>) -> Result<()> {
        let api = self.player.api();
        let code = unsafe {
            api.libvlc_media_player_set_renderer(
                self.player.raw(),
                item.map_or(ptr::null_mut(), |i| i.as_ptr()),
            )?
        };
        check(api, code, "libvlc_media_player_set_renderer")
    }

    pub fn clear(&self) -> Result<()> {
        self.set(None)
    }
}
