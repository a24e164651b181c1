//! Media discovery services (UPnP, SMB, local directories...)

use crate::media_list::MediaList;
use crate::{check, cstring, non_null, Result};
use vlcr_sys::types::*;
use vlcr_sys::NativeApi;

/// Runs one discovery service; found items appear in [`MediaDiscoverer::media_list`].
pub struct MediaDiscoverer {
    api: &'static NativeApi,
    raw: *mut libvlc_media_discoverer_t,
    name: String,
}

unsafe impl Send for MediaDiscoverer {}
unsafe impl Sync for MediaDiscoverer {}

impl MediaDiscoverer {
    pub(crate) fn new(
        api: &'static NativeApi,
        instance: *mut libvlc_instance_t,
        name: &str,
    ) -> Result<Self> {
        let service = cstring(name)?;
        let raw = unsafe { api.libvlc_media_discoverer_new(instance, service.as_ptr())? };
        Ok(Self {
            api,
            raw: non_null(api, raw, "libvlc_media_discoverer_new")?,
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Result<()> {
        tracing::debug!(service = %self.name, "Starting media discovery");
        let code = unsafe { self.api.libvlc_media_discoverer_start(self.raw)? };
        check(self.api, code, "libvlc_media_discoverer_start")
    }

    pub fn stop(&self) -> Result<()> {
        unsafe { self.api.libvlc_media_discoverer_stop(self.raw)? };
        Ok(())
    }

    pub fn is_running(&self) -> Result<bool> {
        Ok(unsafe { self.api.libvlc_media_discoverer_is_running(self.raw)? } != 0)
    }

    /// Live list of discovered media. It is read-only and keeps filling
    /// while the service runs; observe it through its events.
    pub fn media_list(&self) -> Result<MediaList> {
        let raw = unsafe { self.api.libvlc_media_discoverer_media_list(self.raw)? };
        let raw = non_null(self.api, raw, "libvlc_media_discoverer_media_list")?;
        Ok(unsafe { MediaList::from_raw(self.api, raw) })
    }
}

impl Drop for MediaDiscoverer {
    fn drop(&mut self) {
        let _ = unsafe { self.api.libvlc_media_discoverer_release(self.raw) };
    }
}
