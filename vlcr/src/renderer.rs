//! Renderer discovery (Chromecast, UPnP renderers...)

use crate::events::{NativeEventManager, RendererDiscovererEvent};
use crate::{check, cstring, non_null, Result};
use vlcr_core::RendererFlags;
use vlcr_sys::types::*;
use vlcr_sys::{copy_string, NativeApi};

/// Non-owning pointer to a renderer item, as carried by events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererItemRef(*mut libvlc_renderer_item_t);

unsafe impl Send for RendererItemRef {}
unsafe impl Sync for RendererItemRef {}

impl RendererItemRef {
    pub(crate) fn new(raw: *mut libvlc_renderer_item_t) -> Option<Self> {
        (!raw.is_null()).then_some(Self(raw))
    }

    /// Holds the item so it outlives the event. Must be called from the
    /// listener; after `ItemDeleted` the pointer is gone.
    pub fn hold(&self) -> Result<RendererItem> {
        let api = vlcr_sys::api()?;
        let raw = unsafe { api.libvlc_renderer_item_hold(self.0)? };
        Ok(RendererItem {
            api,
            raw: non_null(api, raw, "libvlc_renderer_item_hold")?,
        })
    }
}

/// A discovered renderer, held for as long as this value lives.
pub struct RendererItem {
    api: &'static NativeApi,
    raw: *mut libvlc_renderer_item_t,
}

unsafe impl Send for RendererItem {}
unsafe impl Sync for RendererItem {}

impl RendererItem {
    pub(crate) fn as_ptr(&self) -> *mut libvlc_renderer_item_t {
        self.raw
    }

    pub fn name(&self) -> Result<String> {
        Ok(unsafe { copy_string(self.api.libvlc_renderer_item_name(self.raw)?) }.unwrap_or_default())
    }

    /// Renderer type, e.g. `chromecast`
    pub fn kind(&self) -> Result<String> {
        Ok(unsafe { copy_string(self.api.libvlc_renderer_item_type(self.raw)?) }.unwrap_or_default())
    }

    pub fn icon_uri(&self) -> Result<Option<String>> {
        Ok(unsafe { copy_string(self.api.libvlc_renderer_item_icon_uri(self.raw)?) })
    }

    pub fn flags(&self) -> Result<RendererFlags> {
        let flags = unsafe { self.api.libvlc_renderer_item_flags(self.raw)? };
        Ok(RendererFlags::from_raw(flags))
    }
}

impl Clone for RendererItem {
    fn clone(&self) -> Self {
        let _ = unsafe { self.api.libvlc_renderer_item_hold(self.raw) };
        Self {
            api: self.api,
            raw: self.raw,
        }
    }
}

impl std::fmt::Debug for RendererItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererItem").field("raw", &self.raw).finish()
    }
}

impl Drop for RendererItem {
    fn drop(&mut self) {
        let _ = unsafe { self.api.libvlc_renderer_item_release(self.raw) };
    }
}

/// Searches for renderers using one discovery service.
pub struct RendererDiscoverer {
    api: &'static NativeApi,
    raw: *mut libvlc_renderer_discoverer_t,
    events: NativeEventManager<RendererDiscovererEvent>,
    name: String,
}

unsafe impl Send for RendererDiscoverer {}
unsafe impl Sync for RendererDiscoverer {}

impl RendererDiscoverer {
    pub(crate) fn new(
        api: &'static NativeApi,
        instance: *mut libvlc_instance_t,
        name: &str,
    ) -> Result<Self> {
        let service = cstring(name)?;
        let raw = unsafe { api.libvlc_renderer_discoverer_new(instance, service.as_ptr())? };
        let raw = non_null(api, raw, "libvlc_renderer_discoverer_new")?;
        let manager = unsafe { api.libvlc_renderer_discoverer_event_manager(raw)? };
        Ok(Self {
            api,
            raw,
            events: NativeEventManager::native(api, manager),
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register listeners before `start`; items found earlier are not
    /// replayed.
    pub fn events(&self) -> &NativeEventManager<RendererDiscovererEvent> {
        &self.events
    }

    pub fn start(&self) -> Result<()> {
        tracing::debug!(service = %self.name, "Starting renderer discovery");
        let code = unsafe { self.api.libvlc_renderer_discoverer_start(self.raw)? };
        check(self.api, code, "libvlc_renderer_discoverer_start")
    }

    pub fn stop(&self) -> Result<()> {
        unsafe { self.api.libvlc_renderer_discoverer_stop(self.raw)? };
        Ok(())
    }
}

impl Drop for RendererDiscoverer {
    fn drop(&mut self) {
        self.events.release();
        let _ = unsafe { self.api.libvlc_renderer_discoverer_release(self.raw) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_item_ref_rejects_null() {
        assert!(RendererItemRef::new(ptr::null_mut()).is_none());
        let raw = 0x2000 as *mut libvlc_renderer_item_t;
        assert_eq!(RendererItemRef::new(raw), Some(RendererItemRef(raw)));
    }
}
