//! libVLC instance and object construction

use crate::config::FactoryConfig;
use crate::discoverer::MediaDiscoverer;
use crate::equalizer::{Equalizer, NativeEqualizer};
use crate::media::Media;
use crate::media_list::{MediaList, MediaListPlayer};
use crate::player::MediaPlayer;
use crate::renderer::RendererDiscoverer;
use crate::{cstring, native, non_null, Error, Result};
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::path::Path;
use std::ptr;
use std::sync::Arc;
use vlcr_core::{
    mrl, AudioOutput, DiscovererCategory, DiscovererDescription, ModuleDescription,
    RendererDescription,
};
use vlcr_sys::types::*;
use vlcr_sys::{copy_string, NativeApi};

/// Owned libVLC instance shared by the factory and what it creates.
pub(crate) struct Instance {
    pub(crate) api: &'static NativeApi,
    pub(crate) raw: *mut libvlc_instance_t,
}

// SAFETY: libvlc_instance_t is thread safe
unsafe impl Send for Instance {}
unsafe impl Sync for Instance {}

impl Drop for Instance {
    fn drop(&mut self) {
        tracing::debug!("Releasing libVLC instance");
        let _ = unsafe { self.api.libvlc_release(self.raw) };
    }
}

/// Entry point: owns the libVLC instance and creates every other object.
///
/// Clones share the instance. Players keep it alive on their own; media,
/// lists and discoverers should be dropped before the last factory clone.
#[derive(Clone)]
pub struct MediaPlayerFactory {
    instance: Arc<Instance>,
}

impl MediaPlayerFactory {
    pub fn new(config: &FactoryConfig) -> Result<Self> {
        let api = vlcr_sys::load(config.library_path.as_deref())?;

        if let Some(plugin_path) = &config.plugin_path {
            // process wide, see FactoryConfig::plugin_path
            if std::env::var_os(crate::config::PLUGIN_PATH_ENV).is_none() {
                std::env::set_var(crate::config::PLUGIN_PATH_ENV, plugin_path);
            }
        }

        let args = config
            .argv()
            .iter()
            .map(|a| cstring(a))
            .collect::<Result<Vec<CString>>>()?;
        let argv: Vec<*const c_char> = args.iter().map(|a| a.as_ptr()).collect();
        tracing::debug!(args = ?config.argv(), "Creating libVLC instance");

        let raw = unsafe { api.libvlc_new(argv.len() as c_int, argv.as_ptr())? };
        let raw = non_null(api, raw, "libvlc_new")?;
        let factory = Self {
            instance: Arc::new(Instance { api, raw }),
        };

        if let Some((name, http)) = &config.user_agent {
            factory.set_user_agent(name, http)?;
        }
        if let Some(app) = &config.app_id {
            factory.set_app_id(&app.id, &app.version, &app.icon)?;
        }
        Ok(factory)
    }

    /// Creates a factory configured from the environment, see
    /// [`FactoryConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(&FactoryConfig::from_env())
    }

    fn api(&self) -> &'static NativeApi {
        self.instance.api
    }

    fn raw(&self) -> *mut libvlc_instance_t {
        self.instance.raw
    }

    pub(crate) fn from_instance(instance: Arc<Instance>) -> Self {
        Self { instance }
    }

    pub(crate) fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    pub fn version(&self) -> Result<String> {
        Ok(unsafe { copy_string(self.api().libvlc_get_version()?) }.unwrap_or_default())
    }

    pub fn compiler(&self) -> Result<String> {
        Ok(unsafe { copy_string(self.api().libvlc_get_compiler()?) }.unwrap_or_default())
    }

    pub fn changeset(&self) -> Result<String> {
        Ok(unsafe { copy_string(self.api().libvlc_get_changeset()?) }.unwrap_or_default())
    }

    /// libVLC's monotonic clock, in microseconds
    pub fn clock(&self) -> Result<i64> {
        Ok(unsafe { self.api().libvlc_clock()? })
    }

    pub fn set_user_agent(&self, name: &str, http: &str) -> Result<()> {
        let (name, http) = (cstring(name)?, cstring(http)?);
        unsafe {
            self.api()
                .libvlc_set_user_agent(self.raw(), name.as_ptr(), http.as_ptr())?
        };
        Ok(())
    }

    pub fn set_app_id(&self, id: &str, version: &str, icon: &str) -> Result<()> {
        let (id, version, icon) = (cstring(id)?, cstring(version)?, cstring(icon)?);
        unsafe {
            self.api()
                .libvlc_set_app_id(self.raw(), id.as_ptr(), version.as_ptr(), icon.as_ptr())?
        };
        Ok(())
    }

    /// Starts a control interface module, e.g. `http`.
    pub fn add_interface(&self, name: &str) -> Result<()> {
        let name = cstring(name)?;
        let code = unsafe { self.api().libvlc_add_intf(self.raw(), name.as_ptr())? };
        crate::check(self.api(), code, "libvlc_add_intf")
    }

    /// Audio output modules with their devices.
    pub fn audio_outputs(&self) -> Result<Vec<AudioOutput>> {
        let api = self.api();
        let outputs = unsafe {
            let list = api.libvlc_audio_output_list_get(self.raw())?;
            let outputs = native::audio_outputs(list);
            if !list.is_null() {
                api.libvlc_audio_output_list_release(list)?;
            }
            outputs
        };

        outputs
            .into_iter()
            .map(|(name, description)| {
                let module = cstring(&name)?;
                let devices = unsafe {
                    let list =
                        api.libvlc_audio_output_device_list_get(self.raw(), module.as_ptr())?;
                    let devices = native::audio_devices(list);
                    if !list.is_null() {
                        api.libvlc_audio_output_device_list_release(list)?;
                    }
                    devices
                };
                Ok(AudioOutput {
                    name,
                    description,
                    devices,
                })
            })
            .collect()
    }

    pub fn audio_filters(&self) -> Result<Vec<ModuleDescription>> {
        unsafe {
            let list = self.api().libvlc_audio_filter_list_get(self.raw())?;
            self.take_modules(list)
        }
    }

    pub fn video_filters(&self) -> Result<Vec<ModuleDescription>> {
        unsafe {
            let list = self.api().libvlc_video_filter_list_get(self.raw())?;
            self.take_modules(list)
        }
    }

    unsafe fn take_modules(
        &self,
        list: *mut libvlc_module_description_t,
    ) -> Result<Vec<ModuleDescription>> {
        let modules = native::module_descriptions(list);
        if !list.is_null() {
            self.api().libvlc_module_description_list_release(list)?;
        }
        Ok(modules)
    }

    /// Names of the built-in equalizer presets, in index order.
    pub fn equalizer_presets(&self) -> Result<Vec<String>> {
        let api = self.api();
        unsafe {
            let count = api.libvlc_audio_equalizer_get_preset_count()?;
            let mut names = Vec::with_capacity(count as usize);
            for index in 0..count {
                let name = api.libvlc_audio_equalizer_get_preset_name(index)?;
                names.push(copy_string(name).unwrap_or_default());
            }
            Ok(names)
        }
    }

    /// Band centre frequencies in Hz.
    pub fn equalizer_bands(&self) -> Result<Vec<f32>> {
        let api = self.api();
        unsafe {
            let count = api.libvlc_audio_equalizer_get_band_count()?;
            (0..count)
                .map(|index| Ok(api.libvlc_audio_equalizer_get_band_frequency(index)?))
                .collect()
        }
    }

    /// Flat equalizer with the native band count.
    pub fn new_equalizer(&self) -> Result<Equalizer> {
        let count = unsafe { self.api().libvlc_audio_equalizer_get_band_count()? };
        Ok(Equalizer::new(count as usize))
    }

    /// Equalizer initialised from a named preset (case-insensitive).
    pub fn new_equalizer_from_preset(&self, name: &str) -> Result<Equalizer> {
        let index = self
            .equalizer_presets()?
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))?;
        let native = NativeEqualizer::from_preset(self.api(), index as u32)?;
        Equalizer::from_native(self.api(), &native)
    }

    pub fn media_discoverers(
        &self,
        category: DiscovererCategory,
    ) -> Result<Vec<DiscovererDescription>> {
        let api = self.api();
        let mut services: *mut *mut libvlc_media_discoverer_description_t = ptr::null_mut();
        unsafe {
            let count = api.libvlc_media_discoverer_list_get(
                self.raw(),
                category.as_raw(),
                &mut services,
            )?;
            let list =
                native::collect_array(services, count, |d| native::discoverer_description(d));
            if !services.is_null() {
                api.libvlc_media_discoverer_list_release(services, count)?;
            }
            Ok(list)
        }
    }

    pub fn renderer_discoverers(&self) -> Result<Vec<RendererDescription>> {
        let api = self.api();
        let mut services: *mut *mut libvlc_rd_description_t = ptr::null_mut();
        unsafe {
            let count = api.libvlc_renderer_discoverer_list_get(self.raw(), &mut services)?;
            let list = native::collect_array(services, count, |d| native::renderer_description(d));
            if !services.is_null() {
                api.libvlc_renderer_discoverer_list_release(services, count)?;
            }
            Ok(list)
        }
    }

    pub fn new_media_player(&self) -> Result<MediaPlayer> {
        MediaPlayer::new(self)
    }

    /// Creates a media from a location (`scheme://...`) or a local path,
    /// then adds `options`.
    pub fn new_media<S: AsRef<str>>(&self, mrl: &str, options: &[S]) -> Result<Media> {
        let media = if mrl::is_location(mrl) {
            Media::new_location(self.api(), self.raw(), mrl)?
        } else {
            Media::new_path(self.api(), self.raw(), Path::new(mrl))?
        };
        media.add_options(options)?;
        Ok(media)
    }

    /// Creates a media reading from an open file descriptor. The descriptor
    /// must stay open while the media is in use.
    pub fn new_media_from_fd(&self, fd: i32) -> Result<Media> {
        let raw = unsafe { self.api().libvlc_media_new_fd(self.raw(), fd)? };
        let raw = non_null(self.api(), raw, "libvlc_media_new_fd")?;
        Ok(unsafe { Media::from_raw(self.api(), raw) })
    }

    /// Creates an empty node media, used as a container of sub-items.
    pub fn new_media_node(&self, name: &str) -> Result<Media> {
        Media::new_node(self.api(), self.raw(), name)
    }

    pub fn new_media_list(&self) -> Result<MediaList> {
        MediaList::new(self.api(), self.raw())
    }

    pub fn new_media_list_player(&self) -> Result<MediaListPlayer> {
        MediaListPlayer::new(self.api(), self.raw())
    }

    pub fn new_media_discoverer(&self, name: &str) -> Result<MediaDiscoverer> {
        MediaDiscoverer::new(self.api(), self.raw(), name)
    }

    pub fn new_renderer_discoverer(&self, name: &str) -> Result<RendererDiscoverer> {
        RendererDiscoverer::new(self.api(), self.raw(), name)
    }
}
