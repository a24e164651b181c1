//! libVLC C API type declarations
//!
//! Layouts follow the public libVLC 3.0 headers (`vlc/libvlc*.h`).

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_float, c_int, c_uint, c_void};

// Opaque types
pub enum libvlc_instance_t {}
pub enum libvlc_media_t {}
pub enum libvlc_media_player_t {}
pub enum libvlc_media_list_t {}
pub enum libvlc_media_list_player_t {}
pub enum libvlc_event_manager_t {}
pub enum libvlc_equalizer_t {}
pub enum libvlc_media_discoverer_t {}
pub enum libvlc_renderer_discoverer_t {}
pub enum libvlc_renderer_item_t {}

/// Time in milliseconds
pub type libvlc_time_t = i64;

/// Upper bound on picture planes handed to video callbacks.
pub const PICTURE_PLANE_MAX: usize = 5;

#[repr(C)]
pub struct libvlc_track_description_t {
    pub i_id: c_int,
    pub psz_name: *mut c_char,
    pub p_next: *mut libvlc_track_description_t,
}

pub const LIBVLC_TITLE_MENU: c_uint = 0x01;
pub const LIBVLC_TITLE_INTERACTIVE: c_uint = 0x02;

#[repr(C)]
pub struct libvlc_title_description_t {
    pub i_duration: i64,
    pub psz_name: *mut c_char,
    pub i_flags: c_uint,
}

#[repr(C)]
pub struct libvlc_chapter_description_t {
    pub i_time_offset: i64,
    pub i_duration: i64,
    pub psz_name: *mut c_char,
}

#[repr(C)]
pub struct libvlc_audio_output_t {
    pub psz_name: *mut c_char,
    pub psz_description: *mut c_char,
    pub p_next: *mut libvlc_audio_output_t,
}

#[repr(C)]
pub struct libvlc_audio_output_device_t {
    pub p_next: *mut libvlc_audio_output_device_t,
    pub psz_device: *mut c_char,
    pub psz_description: *mut c_char,
}

#[repr(C)]
pub struct libvlc_module_description_t {
    pub psz_name: *mut c_char,
    pub psz_shortname: *mut c_char,
    pub psz_longname: *mut c_char,
    pub psz_help: *mut c_char,
    pub p_next: *mut libvlc_module_description_t,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct libvlc_video_viewpoint_t {
    pub f_yaw: c_float,
    pub f_pitch: c_float,
    pub f_roll: c_float,
    pub f_field_of_view: c_float,
}

#[repr(C)]
pub struct libvlc_audio_track_t {
    pub i_channels: c_uint,
    pub i_rate: c_uint,
}

#[repr(C)]
pub struct libvlc_video_track_t {
    pub i_height: c_uint,
    pub i_width: c_uint,
    pub i_sar_num: c_uint,
    pub i_sar_den: c_uint,
    pub i_frame_rate_num: c_uint,
    pub i_frame_rate_den: c_uint,
    pub i_orientation: c_int,
    pub i_projection: c_int,
    pub pose: libvlc_video_viewpoint_t,
}

#[repr(C)]
pub struct libvlc_subtitle_track_t {
    pub psz_encoding: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union libvlc_media_track_u {
    pub audio: *mut libvlc_audio_track_t,
    pub video: *mut libvlc_video_track_t,
    pub subtitle: *mut libvlc_subtitle_track_t,
}

#[repr(C)]
pub struct libvlc_media_track_t {
    pub i_codec: u32,
    pub i_original_fourcc: u32,
    pub i_id: c_int,
    pub i_type: c_int,
    pub i_profile: c_int,
    pub i_level: c_int,
    pub u: libvlc_media_track_u,
    pub i_bitrate: c_uint,
    pub psz_language: *mut c_char,
    pub psz_description: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct libvlc_media_stats_t {
    pub i_read_bytes: c_int,
    pub f_input_bitrate: c_float,
    pub i_demux_read_bytes: c_int,
    pub f_demux_bitrate: c_float,
    pub i_demux_corrupted: c_int,
    pub i_demux_discontinuity: c_int,
    pub i_decoded_video: c_int,
    pub i_decoded_audio: c_int,
    pub i_displayed_pictures: c_int,
    pub i_lost_pictures: c_int,
    pub i_played_abuffers: c_int,
    pub i_lost_abuffers: c_int,
    pub i_sent_packets: c_int,
    pub i_sent_bytes: c_int,
    pub f_send_bitrate: c_float,
}

#[repr(C)]
pub struct libvlc_media_slave_t {
    pub psz_uri: *mut c_char,
    pub i_type: c_int,
    pub i_priority: c_uint,
}

#[repr(C)]
pub struct libvlc_media_discoverer_description_t {
    pub psz_name: *mut c_char,
    pub psz_longname: *mut c_char,
    pub i_cat: c_int,
}

#[repr(C)]
pub struct libvlc_rd_description_t {
    pub psz_name: *mut c_char,
    pub psz_longname: *mut c_char,
}

// Media track types
pub const LIBVLC_TRACK_UNKNOWN: c_int = -1;
pub const LIBVLC_TRACK_AUDIO: c_int = 0;
pub const LIBVLC_TRACK_VIDEO: c_int = 1;
pub const LIBVLC_TRACK_TEXT: c_int = 2;

// Marquee, logo and adjust option indices
pub const LIBVLC_MARQUEE_ENABLE: c_uint = 0;
pub const LIBVLC_MARQUEE_TEXT: c_uint = 1;
pub const LIBVLC_MARQUEE_COLOR: c_uint = 2;
pub const LIBVLC_MARQUEE_OPACITY: c_uint = 3;
pub const LIBVLC_MARQUEE_POSITION: c_uint = 4;
pub const LIBVLC_MARQUEE_REFRESH: c_uint = 5;
pub const LIBVLC_MARQUEE_SIZE: c_uint = 6;
pub const LIBVLC_MARQUEE_TIMEOUT: c_uint = 7;
pub const LIBVLC_MARQUEE_X: c_uint = 8;
pub const LIBVLC_MARQUEE_Y: c_uint = 9;

pub const LIBVLC_LOGO_ENABLE: c_uint = 0;
pub const LIBVLC_LOGO_FILE: c_uint = 1;
pub const LIBVLC_LOGO_X: c_uint = 2;
pub const LIBVLC_LOGO_Y: c_uint = 3;
pub const LIBVLC_LOGO_DELAY: c_uint = 4;
pub const LIBVLC_LOGO_REPEAT: c_uint = 5;
pub const LIBVLC_LOGO_OPACITY: c_uint = 6;
pub const LIBVLC_LOGO_POSITION: c_uint = 7;

pub const LIBVLC_ADJUST_ENABLE: c_uint = 0;
pub const LIBVLC_ADJUST_CONTRAST: c_uint = 1;
pub const LIBVLC_ADJUST_BRIGHTNESS: c_uint = 2;
pub const LIBVLC_ADJUST_HUE: c_uint = 3;
pub const LIBVLC_ADJUST_SATURATION: c_uint = 4;
pub const LIBVLC_ADJUST_GAMMA: c_uint = 5;

// Event types
pub type libvlc_event_type_t = c_int;

pub const LIBVLC_MEDIA_META_CHANGED: c_int = 0;
pub const LIBVLC_MEDIA_SUB_ITEM_ADDED: c_int = 1;
pub const LIBVLC_MEDIA_DURATION_CHANGED: c_int = 2;
pub const LIBVLC_MEDIA_PARSED_CHANGED: c_int = 3;
pub const LIBVLC_MEDIA_FREED: c_int = 4;
pub const LIBVLC_MEDIA_STATE_CHANGED: c_int = 5;
pub const LIBVLC_MEDIA_SUB_ITEM_TREE_ADDED: c_int = 6;

pub const LIBVLC_MEDIA_PLAYER_MEDIA_CHANGED: c_int = 0x100;
pub const LIBVLC_MEDIA_PLAYER_NOTHING_SPECIAL: c_int = 0x101;
pub const LIBVLC_MEDIA_PLAYER_OPENING: c_int = 0x102;
pub const LIBVLC_MEDIA_PLAYER_BUFFERING: c_int = 0x103;
pub const LIBVLC_MEDIA_PLAYER_PLAYING: c_int = 0x104;
pub const LIBVLC_MEDIA_PLAYER_PAUSED: c_int = 0x105;
pub const LIBVLC_MEDIA_PLAYER_STOPPED: c_int = 0x106;
pub const LIBVLC_MEDIA_PLAYER_FORWARD: c_int = 0x107;
pub const LIBVLC_MEDIA_PLAYER_BACKWARD: c_int = 0x108;
pub const LIBVLC_MEDIA_PLAYER_END_REACHED: c_int = 0x109;
pub const LIBVLC_MEDIA_PLAYER_ENCOUNTERED_ERROR: c_int = 0x10A;
pub const LIBVLC_MEDIA_PLAYER_TIME_CHANGED: c_int = 0x10B;
pub const LIBVLC_MEDIA_PLAYER_POSITION_CHANGED: c_int = 0x10C;
pub const LIBVLC_MEDIA_PLAYER_SEEKABLE_CHANGED: c_int = 0x10D;
pub const LIBVLC_MEDIA_PLAYER_PAUSABLE_CHANGED: c_int = 0x10E;
pub const LIBVLC_MEDIA_PLAYER_TITLE_CHANGED: c_int = 0x10F;
pub const LIBVLC_MEDIA_PLAYER_SNAPSHOT_TAKEN: c_int = 0x110;
pub const LIBVLC_MEDIA_PLAYER_LENGTH_CHANGED: c_int = 0x111;
pub const LIBVLC_MEDIA_PLAYER_VOUT: c_int = 0x112;
pub const LIBVLC_MEDIA_PLAYER_SCRAMBLED_CHANGED: c_int = 0x113;
pub const LIBVLC_MEDIA_PLAYER_ES_ADDED: c_int = 0x114;
pub const LIBVLC_MEDIA_PLAYER_ES_DELETED: c_int = 0x115;
pub const LIBVLC_MEDIA_PLAYER_ES_SELECTED: c_int = 0x116;
pub const LIBVLC_MEDIA_PLAYER_CORKED: c_int = 0x117;
pub const LIBVLC_MEDIA_PLAYER_UNCORKED: c_int = 0x118;
pub const LIBVLC_MEDIA_PLAYER_MUTED: c_int = 0x119;
pub const LIBVLC_MEDIA_PLAYER_UNMUTED: c_int = 0x11A;
pub const LIBVLC_MEDIA_PLAYER_AUDIO_VOLUME: c_int = 0x11B;
pub const LIBVLC_MEDIA_PLAYER_AUDIO_DEVICE: c_int = 0x11C;
pub const LIBVLC_MEDIA_PLAYER_CHAPTER_CHANGED: c_int = 0x11D;

pub const LIBVLC_MEDIA_LIST_ITEM_ADDED: c_int = 0x200;
pub const LIBVLC_MEDIA_LIST_WILL_ADD_ITEM: c_int = 0x201;
pub const LIBVLC_MEDIA_LIST_ITEM_DELETED: c_int = 0x202;
pub const LIBVLC_MEDIA_LIST_WILL_DELETE_ITEM: c_int = 0x203;
pub const LIBVLC_MEDIA_LIST_END_REACHED: c_int = 0x204;

pub const LIBVLC_MEDIA_LIST_PLAYER_PLAYED: c_int = 0x400;
pub const LIBVLC_MEDIA_LIST_PLAYER_NEXT_ITEM_SET: c_int = 0x401;
pub const LIBVLC_MEDIA_LIST_PLAYER_STOPPED: c_int = 0x402;

pub const LIBVLC_RENDERER_DISCOVERER_ITEM_ADDED: c_int = 0x502;
pub const LIBVLC_RENDERER_DISCOVERER_ITEM_DELETED: c_int = 0x503;

// Event payloads
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct media_meta_changed_t {
    pub meta_type: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct media_item_t {
    pub item: *mut libvlc_media_t,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct media_duration_changed_t {
    pub new_duration: i64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct new_int_t {
    pub value: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct new_float_t {
    pub value: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct new_time_t {
    pub value: libvlc_time_t,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct new_string_t {
    pub value: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct media_player_es_changed_t {
    pub i_type: c_int,
    pub i_id: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct media_list_item_t {
    pub item: *mut libvlc_media_t,
    pub index: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct renderer_item_t {
    pub item: *mut libvlc_renderer_item_t,
}

/// Payload union of `libvlc_event_t`.
///
/// Only the members read by this crate are named; `_size` pins the union to
/// the widest member in the C header (two pointers).
#[repr(C)]
#[derive(Clone, Copy)]
pub union libvlc_event_u {
    pub media_meta_changed: media_meta_changed_t,
    pub media_subitem_added: media_item_t,
    pub media_duration_changed: media_duration_changed_t,
    pub media_parsed_changed: new_int_t,
    pub media_freed: media_item_t,
    pub media_state_changed: new_int_t,
    pub media_subitemtree_added: media_item_t,
    pub media_player_buffering: new_float_t,
    pub media_player_chapter_changed: new_int_t,
    pub media_player_position_changed: new_float_t,
    pub media_player_time_changed: new_time_t,
    pub media_player_title_changed: new_int_t,
    pub media_player_seekable_changed: new_int_t,
    pub media_player_pausable_changed: new_int_t,
    pub media_player_scrambled_changed: new_int_t,
    pub media_player_vout: new_int_t,
    pub media_list_item: media_list_item_t,
    pub media_player_snapshot_taken: new_string_t,
    pub media_player_length_changed: new_time_t,
    pub media_player_media_changed: media_item_t,
    pub media_player_es_changed: media_player_es_changed_t,
    pub media_player_audio_volume: new_float_t,
    pub media_player_audio_device: new_string_t,
    pub renderer_discoverer_item: renderer_item_t,
    pub _size: [*mut c_void; 2],
}

#[repr(C)]
pub struct libvlc_event_t {
    pub type_: libvlc_event_type_t,
    pub p_obj: *mut c_void,
    pub u: libvlc_event_u,
}

// Callback signatures
pub type libvlc_callback_t =
    Option<unsafe extern "C" fn(p_event: *const libvlc_event_t, p_data: *mut c_void)>;

pub type libvlc_video_lock_cb =
    Option<unsafe extern "C" fn(opaque: *mut c_void, planes: *mut *mut c_void) -> *mut c_void>;
pub type libvlc_video_unlock_cb = Option<
    unsafe extern "C" fn(opaque: *mut c_void, picture: *mut c_void, planes: *const *mut c_void),
>;
pub type libvlc_video_display_cb =
    Option<unsafe extern "C" fn(opaque: *mut c_void, picture: *mut c_void)>;
pub type libvlc_video_format_cb = Option<
    unsafe extern "C" fn(
        opaque: *mut *mut c_void,
        chroma: *mut c_char,
        width: *mut c_uint,
        height: *mut c_uint,
        pitches: *mut c_uint,
        lines: *mut c_uint,
    ) -> c_uint,
>;
pub type libvlc_video_cleanup_cb = Option<unsafe extern "C" fn(opaque: *mut c_void)>;

pub type libvlc_audio_play_cb = Option<
    unsafe extern "C" fn(data: *mut c_void, samples: *const c_void, count: c_uint, pts: i64),
>;
pub type libvlc_audio_pause_cb = Option<unsafe extern "C" fn(data: *mut c_void, pts: i64)>;
pub type libvlc_audio_resume_cb = Option<unsafe extern "C" fn(data: *mut c_void, pts: i64)>;
pub type libvlc_audio_flush_cb = Option<unsafe extern "C" fn(data: *mut c_void, pts: i64)>;
pub type libvlc_audio_drain_cb = Option<unsafe extern "C" fn(data: *mut c_void)>;
pub type libvlc_audio_set_volume_cb =
    Option<unsafe extern "C" fn(data: *mut c_void, volume: c_float, mute: bool)>;
pub type libvlc_audio_setup_cb = Option<
    unsafe extern "C" fn(
        data: *mut *mut c_void,
        format: *mut c_char,
        rate: *mut c_uint,
        channels: *mut c_uint,
    ) -> c_int,
>;
pub type libvlc_audio_cleanup_cb = Option<unsafe extern "C" fn(data: *mut c_void)>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_event_union_is_two_pointers_wide() {
        assert_eq!(size_of::<libvlc_event_u>(), 2 * size_of::<*mut c_void>());
    }

    #[test]
    fn test_viewpoint_layout() {
        assert_eq!(size_of::<libvlc_video_viewpoint_t>(), 16);
    }

    #[test]
    fn test_stats_layout() {
        assert_eq!(size_of::<libvlc_media_stats_t>(), 15 * 4);
    }
}
