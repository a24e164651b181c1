//! Native function table
//!
//! Every libVLC entry point used by the workspace is declared once here. The
//! table is resolved symbol by symbol when the library is loaded; a symbol
//! absent from the installed build is only reported when it is called.

#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

use crate::types::*;
use crate::{Error, Result};
use libloading::Library;
use std::os::raw::{c_char, c_float, c_int, c_uint, c_void};

macro_rules! native_ret {
    () => { () };
    ($ret:ty) => { $ret };
}

macro_rules! native_api {
    ($( fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?; )*) => {
        /// Function pointers resolved from the libVLC shared library.
        pub struct NativeApi {
            _library: Library,
            $( $name: Option<unsafe extern "C" fn($($ty),*) $(-> $ret)?>, )*
        }

        impl NativeApi {
            pub(crate) unsafe fn resolve(library: Library) -> Self {
                $(
                    let $name = library
                        .get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                            concat!(stringify!($name), "\0").as_bytes(),
                        )
                        .ok()
                        .map(|symbol| *symbol);
                )*
                Self {
                    _library: library,
                    $( $name, )*
                }
            }

            /// Names of declared entry points the loaded library does not export.
            pub fn missing_symbols(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$name.is_none() {
                        missing.push(stringify!($name));
                    }
                )*
                missing
            }

            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) -> Result<native_ret!($($ret)?)> {
                    let f = self.$name.ok_or(Error::MissingSymbol(stringify!($name)))?;
                    Ok(f($($arg),*))
                }
            )*
        }
    };
}

native_api! {
    // Core
    fn libvlc_new(argc: c_int, argv: *const *const c_char) -> *mut libvlc_instance_t;
    fn libvlc_release(instance: *mut libvlc_instance_t);
    fn libvlc_retain(instance: *mut libvlc_instance_t);
    fn libvlc_add_intf(instance: *mut libvlc_instance_t, name: *const c_char) -> c_int;
    fn libvlc_set_user_agent(instance: *mut libvlc_instance_t, name: *const c_char, http: *const c_char);
    fn libvlc_set_app_id(instance: *mut libvlc_instance_t, id: *const c_char, version: *const c_char, icon: *const c_char);
    fn libvlc_get_version() -> *const c_char;
    fn libvlc_get_compiler() -> *const c_char;
    fn libvlc_get_changeset() -> *const c_char;
    fn libvlc_free(ptr: *mut c_void);
    fn libvlc_errmsg() -> *const c_char;
    fn libvlc_clearerr();
    fn libvlc_clock() -> i64;
    fn libvlc_audio_filter_list_get(instance: *mut libvlc_instance_t) -> *mut libvlc_module_description_t;
    fn libvlc_video_filter_list_get(instance: *mut libvlc_instance_t) -> *mut libvlc_module_description_t;
    fn libvlc_module_description_list_release(list: *mut libvlc_module_description_t);

    // Events
    fn libvlc_event_attach(em: *mut libvlc_event_manager_t, event_type: libvlc_event_type_t, callback: libvlc_callback_t, data: *mut c_void) -> c_int;
    fn libvlc_event_detach(em: *mut libvlc_event_manager_t, event_type: libvlc_event_type_t, callback: libvlc_callback_t, data: *mut c_void);
    fn libvlc_event_type_name(event_type: libvlc_event_type_t) -> *const c_char;

    // Media
    fn libvlc_media_new_location(instance: *mut libvlc_instance_t, mrl: *const c_char) -> *mut libvlc_media_t;
    fn libvlc_media_new_path(instance: *mut libvlc_instance_t, path: *const c_char) -> *mut libvlc_media_t;
    fn libvlc_media_new_fd(instance: *mut libvlc_instance_t, fd: c_int) -> *mut libvlc_media_t;
    fn libvlc_media_new_as_node(instance: *mut libvlc_instance_t, name: *const c_char) -> *mut libvlc_media_t;
    fn libvlc_media_add_option(media: *mut libvlc_media_t, option: *const c_char);
    fn libvlc_media_add_option_flag(media: *mut libvlc_media_t, option: *const c_char, flags: c_uint);
    fn libvlc_media_retain(media: *mut libvlc_media_t);
    fn libvlc_media_release(media: *mut libvlc_media_t);
    fn libvlc_media_get_mrl(media: *mut libvlc_media_t) -> *mut c_char;
    fn libvlc_media_duplicate(media: *mut libvlc_media_t) -> *mut libvlc_media_t;
    fn libvlc_media_get_meta(media: *mut libvlc_media_t, meta: c_int) -> *mut c_char;
    fn libvlc_media_set_meta(media: *mut libvlc_media_t, meta: c_int, value: *const c_char);
    fn libvlc_media_save_meta(media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_get_state(media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_get_stats(media: *mut libvlc_media_t, stats: *mut libvlc_media_stats_t) -> c_int;
    fn libvlc_media_subitems(media: *mut libvlc_media_t) -> *mut libvlc_media_list_t;
    fn libvlc_media_event_manager(media: *mut libvlc_media_t) -> *mut libvlc_event_manager_t;
    fn libvlc_media_get_duration(media: *mut libvlc_media_t) -> libvlc_time_t;
    fn libvlc_media_parse_with_options(media: *mut libvlc_media_t, flags: c_int, timeout: c_int) -> c_int;
    fn libvlc_media_parse_stop(media: *mut libvlc_media_t);
    fn libvlc_media_get_parsed_status(media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_tracks_get(media: *mut libvlc_media_t, tracks: *mut *mut *mut libvlc_media_track_t) -> c_uint;
    fn libvlc_media_tracks_release(tracks: *mut *mut libvlc_media_track_t, count: c_uint);
    fn libvlc_media_get_codec_description(track_type: c_int, codec: u32) -> *const c_char;
    fn libvlc_media_get_type(media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_slaves_add(media: *mut libvlc_media_t, slave_type: c_int, priority: c_uint, uri: *const c_char) -> c_int;
    fn libvlc_media_slaves_clear(media: *mut libvlc_media_t);
    fn libvlc_media_slaves_get(media: *mut libvlc_media_t, slaves: *mut *mut *mut libvlc_media_slave_t) -> c_uint;
    fn libvlc_media_slaves_release(slaves: *mut *mut libvlc_media_slave_t, count: c_uint);

    // Media player
    fn libvlc_media_player_new(instance: *mut libvlc_instance_t) -> *mut libvlc_media_player_t;
    fn libvlc_media_player_new_from_media(media: *mut libvlc_media_t) -> *mut libvlc_media_player_t;
    fn libvlc_media_player_release(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_retain(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_set_media(player: *mut libvlc_media_player_t, media: *mut libvlc_media_t);
    fn libvlc_media_player_get_media(player: *mut libvlc_media_player_t) -> *mut libvlc_media_t;
    fn libvlc_media_player_event_manager(player: *mut libvlc_media_player_t) -> *mut libvlc_event_manager_t;
    fn libvlc_media_player_is_playing(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_play(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_set_pause(player: *mut libvlc_media_player_t, pause: c_int);
    fn libvlc_media_player_pause(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_stop(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_set_renderer(player: *mut libvlc_media_player_t, item: *mut libvlc_renderer_item_t) -> c_int;
    fn libvlc_media_player_set_nsobject(player: *mut libvlc_media_player_t, drawable: *mut c_void);
    fn libvlc_media_player_get_nsobject(player: *mut libvlc_media_player_t) -> *mut c_void;
    fn libvlc_media_player_set_xwindow(player: *mut libvlc_media_player_t, drawable: u32);
    fn libvlc_media_player_get_xwindow(player: *mut libvlc_media_player_t) -> u32;
    fn libvlc_media_player_set_hwnd(player: *mut libvlc_media_player_t, drawable: *mut c_void);
    fn libvlc_media_player_get_hwnd(player: *mut libvlc_media_player_t) -> *mut c_void;
    fn libvlc_media_player_get_length(player: *mut libvlc_media_player_t) -> libvlc_time_t;
    fn libvlc_media_player_get_time(player: *mut libvlc_media_player_t) -> libvlc_time_t;
    fn libvlc_media_player_set_time(player: *mut libvlc_media_player_t, time: libvlc_time_t);
    fn libvlc_media_player_get_position(player: *mut libvlc_media_player_t) -> c_float;
    fn libvlc_media_player_set_position(player: *mut libvlc_media_player_t, position: c_float);
    fn libvlc_media_player_set_chapter(player: *mut libvlc_media_player_t, chapter: c_int);
    fn libvlc_media_player_get_chapter(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_get_chapter_count(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_will_play(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_get_chapter_count_for_title(player: *mut libvlc_media_player_t, title: c_int) -> c_int;
    fn libvlc_media_player_set_title(player: *mut libvlc_media_player_t, title: c_int);
    fn libvlc_media_player_get_title(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_get_title_count(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_previous_chapter(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_next_chapter(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_get_rate(player: *mut libvlc_media_player_t) -> c_float;
    fn libvlc_media_player_set_rate(player: *mut libvlc_media_player_t, rate: c_float) -> c_int;
    fn libvlc_media_player_get_state(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_has_vout(player: *mut libvlc_media_player_t) -> c_uint;
    fn libvlc_media_player_is_seekable(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_can_pause(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_program_scrambled(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_next_frame(player: *mut libvlc_media_player_t);
    fn libvlc_media_player_navigate(player: *mut libvlc_media_player_t, navigate: c_uint);
    fn libvlc_media_player_set_video_title_display(player: *mut libvlc_media_player_t, position: c_int, timeout: c_uint);
    fn libvlc_media_player_add_slave(player: *mut libvlc_media_player_t, slave_type: c_int, uri: *const c_char, select: bool) -> c_int;
    fn libvlc_media_player_get_full_title_descriptions(player: *mut libvlc_media_player_t, titles: *mut *mut *mut libvlc_title_description_t) -> c_int;
    fn libvlc_title_descriptions_release(titles: *mut *mut libvlc_title_description_t, count: c_uint);
    fn libvlc_media_player_get_full_chapter_descriptions(player: *mut libvlc_media_player_t, title: c_int, chapters: *mut *mut *mut libvlc_chapter_description_t) -> c_int;
    fn libvlc_chapter_descriptions_release(chapters: *mut *mut libvlc_chapter_description_t, count: c_uint);
    fn libvlc_media_player_set_equalizer(player: *mut libvlc_media_player_t, equalizer: *mut libvlc_equalizer_t) -> c_int;
    fn libvlc_media_player_get_role(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_media_player_set_role(player: *mut libvlc_media_player_t, role: c_uint) -> c_int;
    fn libvlc_track_description_list_release(list: *mut libvlc_track_description_t);

    // Video
    fn libvlc_toggle_fullscreen(player: *mut libvlc_media_player_t);
    fn libvlc_set_fullscreen(player: *mut libvlc_media_player_t, fullscreen: c_int);
    fn libvlc_get_fullscreen(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_set_key_input(player: *mut libvlc_media_player_t, on: c_uint);
    fn libvlc_video_set_mouse_input(player: *mut libvlc_media_player_t, on: c_uint);
    fn libvlc_video_get_size(player: *mut libvlc_media_player_t, num: c_uint, px: *mut c_uint, py: *mut c_uint) -> c_int;
    fn libvlc_video_get_cursor(player: *mut libvlc_media_player_t, num: c_uint, px: *mut c_int, py: *mut c_int) -> c_int;
    fn libvlc_video_get_scale(player: *mut libvlc_media_player_t) -> c_float;
    fn libvlc_video_set_scale(player: *mut libvlc_media_player_t, factor: c_float);
    fn libvlc_video_get_aspect_ratio(player: *mut libvlc_media_player_t) -> *mut c_char;
    fn libvlc_video_set_aspect_ratio(player: *mut libvlc_media_player_t, aspect: *const c_char);
    fn libvlc_video_new_viewpoint() -> *mut libvlc_video_viewpoint_t;
    fn libvlc_video_update_viewpoint(player: *mut libvlc_media_player_t, viewpoint: *const libvlc_video_viewpoint_t, absolute: bool) -> c_int;
    fn libvlc_video_get_spu(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_get_spu_count(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_get_spu_description(player: *mut libvlc_media_player_t) -> *mut libvlc_track_description_t;
    fn libvlc_video_set_spu(player: *mut libvlc_media_player_t, spu: c_int) -> c_int;
    fn libvlc_video_get_spu_delay(player: *mut libvlc_media_player_t) -> i64;
    fn libvlc_video_set_spu_delay(player: *mut libvlc_media_player_t, delay: i64) -> c_int;
    fn libvlc_video_get_crop_geometry(player: *mut libvlc_media_player_t) -> *mut c_char;
    fn libvlc_video_set_crop_geometry(player: *mut libvlc_media_player_t, geometry: *const c_char);
    fn libvlc_video_get_teletext(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_set_teletext(player: *mut libvlc_media_player_t, page: c_int);
    fn libvlc_video_get_track_count(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_get_track_description(player: *mut libvlc_media_player_t) -> *mut libvlc_track_description_t;
    fn libvlc_video_get_track(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_video_set_track(player: *mut libvlc_media_player_t, track: c_int) -> c_int;
    fn libvlc_video_take_snapshot(player: *mut libvlc_media_player_t, num: c_uint, path: *const c_char, width: c_uint, height: c_uint) -> c_int;
    fn libvlc_video_set_deinterlace(player: *mut libvlc_media_player_t, mode: *const c_char);
    fn libvlc_video_get_marquee_int(player: *mut libvlc_media_player_t, option: c_uint) -> c_int;
    fn libvlc_video_get_marquee_string(player: *mut libvlc_media_player_t, option: c_uint) -> *mut c_char;
    fn libvlc_video_set_marquee_int(player: *mut libvlc_media_player_t, option: c_uint, value: c_int);
    fn libvlc_video_set_marquee_string(player: *mut libvlc_media_player_t, option: c_uint, value: *const c_char);
    fn libvlc_video_get_logo_int(player: *mut libvlc_media_player_t, option: c_uint) -> c_int;
    fn libvlc_video_set_logo_int(player: *mut libvlc_media_player_t, option: c_uint, value: c_int);
    fn libvlc_video_set_logo_string(player: *mut libvlc_media_player_t, option: c_uint, value: *const c_char);
    fn libvlc_video_get_adjust_int(player: *mut libvlc_media_player_t, option: c_uint) -> c_int;
    fn libvlc_video_set_adjust_int(player: *mut libvlc_media_player_t, option: c_uint, value: c_int);
    fn libvlc_video_get_adjust_float(player: *mut libvlc_media_player_t, option: c_uint) -> c_float;
    fn libvlc_video_set_adjust_float(player: *mut libvlc_media_player_t, option: c_uint, value: c_float);
    fn libvlc_video_set_callbacks(player: *mut libvlc_media_player_t, lock: libvlc_video_lock_cb, unlock: libvlc_video_unlock_cb, display: libvlc_video_display_cb, opaque: *mut c_void);
    fn libvlc_video_set_format_callbacks(player: *mut libvlc_media_player_t, setup: libvlc_video_format_cb, cleanup: libvlc_video_cleanup_cb);
    fn libvlc_video_set_format(player: *mut libvlc_media_player_t, chroma: *const c_char, width: c_uint, height: c_uint, pitch: c_uint);

    // Audio
    fn libvlc_audio_output_list_get(instance: *mut libvlc_instance_t) -> *mut libvlc_audio_output_t;
    fn libvlc_audio_output_list_release(list: *mut libvlc_audio_output_t);
    fn libvlc_audio_output_set(player: *mut libvlc_media_player_t, name: *const c_char) -> c_int;
    fn libvlc_audio_output_device_enum(player: *mut libvlc_media_player_t) -> *mut libvlc_audio_output_device_t;
    fn libvlc_audio_output_device_list_get(instance: *mut libvlc_instance_t, aout: *const c_char) -> *mut libvlc_audio_output_device_t;
    fn libvlc_audio_output_device_list_release(list: *mut libvlc_audio_output_device_t);
    fn libvlc_audio_output_device_set(player: *mut libvlc_media_player_t, module: *const c_char, device_id: *const c_char);
    fn libvlc_audio_output_device_get(player: *mut libvlc_media_player_t) -> *mut c_char;
    fn libvlc_audio_toggle_mute(player: *mut libvlc_media_player_t);
    fn libvlc_audio_get_mute(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_audio_set_mute(player: *mut libvlc_media_player_t, status: c_int);
    fn libvlc_audio_get_volume(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_audio_set_volume(player: *mut libvlc_media_player_t, volume: c_int) -> c_int;
    fn libvlc_audio_get_track_count(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_audio_get_track_description(player: *mut libvlc_media_player_t) -> *mut libvlc_track_description_t;
    fn libvlc_audio_get_track(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_audio_set_track(player: *mut libvlc_media_player_t, track: c_int) -> c_int;
    fn libvlc_audio_get_channel(player: *mut libvlc_media_player_t) -> c_int;
    fn libvlc_audio_set_channel(player: *mut libvlc_media_player_t, channel: c_int) -> c_int;
    fn libvlc_audio_get_delay(player: *mut libvlc_media_player_t) -> i64;
    fn libvlc_audio_set_delay(player: *mut libvlc_media_player_t, delay: i64) -> c_int;
    fn libvlc_audio_set_callbacks(player: *mut libvlc_media_player_t, play: libvlc_audio_play_cb, pause: libvlc_audio_pause_cb, resume: libvlc_audio_resume_cb, flush: libvlc_audio_flush_cb, drain: libvlc_audio_drain_cb, opaque: *mut c_void);
    fn libvlc_audio_set_volume_callback(player: *mut libvlc_media_player_t, set_volume: libvlc_audio_set_volume_cb);
    fn libvlc_audio_set_format_callbacks(player: *mut libvlc_media_player_t, setup: libvlc_audio_setup_cb, cleanup: libvlc_audio_cleanup_cb);
    fn libvlc_audio_set_format(player: *mut libvlc_media_player_t, format: *const c_char, rate: c_uint, channels: c_uint);

    // Equalizer
    fn libvlc_audio_equalizer_get_preset_count() -> c_uint;
    fn libvlc_audio_equalizer_get_preset_name(index: c_uint) -> *const c_char;
    fn libvlc_audio_equalizer_get_band_count() -> c_uint;
    fn libvlc_audio_equalizer_get_band_frequency(index: c_uint) -> c_float;
    fn libvlc_audio_equalizer_new() -> *mut libvlc_equalizer_t;
    fn libvlc_audio_equalizer_new_from_preset(index: c_uint) -> *mut libvlc_equalizer_t;
    fn libvlc_audio_equalizer_release(equalizer: *mut libvlc_equalizer_t);
    fn libvlc_audio_equalizer_set_preamp(equalizer: *mut libvlc_equalizer_t, preamp: c_float) -> c_int;
    fn libvlc_audio_equalizer_get_preamp(equalizer: *mut libvlc_equalizer_t) -> c_float;
    fn libvlc_audio_equalizer_set_amp_at_index(equalizer: *mut libvlc_equalizer_t, amp: c_float, band: c_uint) -> c_int;
    fn libvlc_audio_equalizer_get_amp_at_index(equalizer: *mut libvlc_equalizer_t, band: c_uint) -> c_float;

    // Media list
    fn libvlc_media_list_new(instance: *mut libvlc_instance_t) -> *mut libvlc_media_list_t;
    fn libvlc_media_list_release(list: *mut libvlc_media_list_t);
    fn libvlc_media_list_retain(list: *mut libvlc_media_list_t);
    fn libvlc_media_list_set_media(list: *mut libvlc_media_list_t, media: *mut libvlc_media_t);
    fn libvlc_media_list_media(list: *mut libvlc_media_list_t) -> *mut libvlc_media_t;
    fn libvlc_media_list_add_media(list: *mut libvlc_media_list_t, media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_list_insert_media(list: *mut libvlc_media_list_t, media: *mut libvlc_media_t, index: c_int) -> c_int;
    fn libvlc_media_list_remove_index(list: *mut libvlc_media_list_t, index: c_int) -> c_int;
    fn libvlc_media_list_count(list: *mut libvlc_media_list_t) -> c_int;
    fn libvlc_media_list_item_at_index(list: *mut libvlc_media_list_t, index: c_int) -> *mut libvlc_media_t;
    fn libvlc_media_list_index_of_item(list: *mut libvlc_media_list_t, media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_list_is_readonly(list: *mut libvlc_media_list_t) -> c_int;
    fn libvlc_media_list_lock(list: *mut libvlc_media_list_t);
    fn libvlc_media_list_unlock(list: *mut libvlc_media_list_t);
    fn libvlc_media_list_event_manager(list: *mut libvlc_media_list_t) -> *mut libvlc_event_manager_t;

    // Media list player
    fn libvlc_media_list_player_new(instance: *mut libvlc_instance_t) -> *mut libvlc_media_list_player_t;
    fn libvlc_media_list_player_release(player: *mut libvlc_media_list_player_t);
    fn libvlc_media_list_player_retain(player: *mut libvlc_media_list_player_t);
    fn libvlc_media_list_player_event_manager(player: *mut libvlc_media_list_player_t) -> *mut libvlc_event_manager_t;
    fn libvlc_media_list_player_set_media_player(player: *mut libvlc_media_list_player_t, media_player: *mut libvlc_media_player_t);
    fn libvlc_media_list_player_get_media_player(player: *mut libvlc_media_list_player_t) -> *mut libvlc_media_player_t;
    fn libvlc_media_list_player_set_media_list(player: *mut libvlc_media_list_player_t, list: *mut libvlc_media_list_t);
    fn libvlc_media_list_player_play(player: *mut libvlc_media_list_player_t);
    fn libvlc_media_list_player_pause(player: *mut libvlc_media_list_player_t);
    fn libvlc_media_list_player_set_pause(player: *mut libvlc_media_list_player_t, pause: c_int);
    fn libvlc_media_list_player_is_playing(player: *mut libvlc_media_list_player_t) -> c_int;
    fn libvlc_media_list_player_get_state(player: *mut libvlc_media_list_player_t) -> c_int;
    fn libvlc_media_list_player_play_item_at_index(player: *mut libvlc_media_list_player_t, index: c_int) -> c_int;
    fn libvlc_media_list_player_play_item(player: *mut libvlc_media_list_player_t, media: *mut libvlc_media_t) -> c_int;
    fn libvlc_media_list_player_stop(player: *mut libvlc_media_list_player_t);
    fn libvlc_media_list_player_next(player: *mut libvlc_media_list_player_t) -> c_int;
    fn libvlc_media_list_player_previous(player: *mut libvlc_media_list_player_t) -> c_int;
    fn libvlc_media_list_player_set_playback_mode(player: *mut libvlc_media_list_player_t, mode: c_int);

    // Media discoverer
    fn libvlc_media_discoverer_new(instance: *mut libvlc_instance_t, name: *const c_char) -> *mut libvlc_media_discoverer_t;
    fn libvlc_media_discoverer_start(discoverer: *mut libvlc_media_discoverer_t) -> c_int;
    fn libvlc_media_discoverer_stop(discoverer: *mut libvlc_media_discoverer_t);
    fn libvlc_media_discoverer_release(discoverer: *mut libvlc_media_discoverer_t);
    fn libvlc_media_discoverer_media_list(discoverer: *mut libvlc_media_discoverer_t) -> *mut libvlc_media_list_t;
    fn libvlc_media_discoverer_is_running(discoverer: *mut libvlc_media_discoverer_t) -> c_int;
    fn libvlc_media_discoverer_list_get(instance: *mut libvlc_instance_t, category: c_int, services: *mut *mut *mut libvlc_media_discoverer_description_t) -> usize;
    fn libvlc_media_discoverer_list_release(services: *mut *mut libvlc_media_discoverer_description_t, count: usize);

    // Renderer discoverer
    fn libvlc_renderer_item_hold(item: *mut libvlc_renderer_item_t) -> *mut libvlc_renderer_item_t;
    fn libvlc_renderer_item_release(item: *mut libvlc_renderer_item_t);
    fn libvlc_renderer_item_name(item: *const libvlc_renderer_item_t) -> *const c_char;
    fn libvlc_renderer_item_type(item: *const libvlc_renderer_item_t) -> *const c_char;
    fn libvlc_renderer_item_icon_uri(item: *const libvlc_renderer_item_t) -> *const c_char;
    fn libvlc_renderer_item_flags(item: *const libvlc_renderer_item_t) -> c_int;
    fn libvlc_renderer_discoverer_new(instance: *mut libvlc_instance_t, name: *const c_char) -> *mut libvlc_renderer_discoverer_t;
    fn libvlc_renderer_discoverer_release(discoverer: *mut libvlc_renderer_discoverer_t);
    fn libvlc_renderer_discoverer_start(discoverer: *mut libvlc_renderer_discoverer_t) -> c_int;
    fn libvlc_renderer_discoverer_stop(discoverer: *mut libvlc_renderer_discoverer_t);
    fn libvlc_renderer_discoverer_event_manager(discoverer: *mut libvlc_renderer_discoverer_t) -> *mut libvlc_event_manager_t;
    fn libvlc_renderer_discoverer_list_get(instance: *mut libvlc_instance_t, services: *mut *mut *mut libvlc_rd_description_t) -> usize;
    fn libvlc_renderer_discoverer_list_release(services: *mut *mut libvlc_rd_description_t, count: usize);
}
