use super::MediaPlayer;
use crate::Result;
use vlcr_core::NavigateMode;

/// DVD and Blu-ray menu navigation
pub struct MenuApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> MenuApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn navigate(&self, mode: NavigateMode) -> Result<()> {
        unsafe {
            self.player
                .api()
                .libvlc_media_player_navigate(self.player.raw(), mode.as_raw() as u32)?
        };
        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        self.navigate(NavigateMode::Activate)
    }

    pub fn up(&self) -> Result<()> {
        self.navigate(NavigateMode::Up)
    }

    pub fn down(&self) -> Result<()> {
        self.navigate(NavigateMode::Down)
    }

    pub fn left(&self) -> Result<()> {
        self.navigate(NavigateMode::Left)
    }

    pub fn right(&self) -> Result<()> {
        self.navigate(NavigateMode::Right)
    }

    pub fn popup(&self) -> Result<()> {
        self.navigate(NavigateMode::Popup)
    }
}
