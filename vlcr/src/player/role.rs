use super::MediaPlayer;
use crate::{check, Result};
use vlcr_core::Role;

/// Media role hint used by audio policy
pub struct RoleApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> RoleApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    pub fn role(&self) -> Result<Option<Role>> {
        let role = unsafe {
            self.player
                .api()
                .libvlc_media_player_get_role(self.player.raw())?
        };
        Ok(Role::from_raw(role))
    }

    pub fn set_role(&self, role: Role) -> Result<()> {
        let api = self.player.api();
        let code = unsafe {
            api.libvlc_media_player_set_role(self.player.raw(), role.as_raw() as u32)?
        };
        check(api, code, "libvlc_media_player_set_role")
    }
}
