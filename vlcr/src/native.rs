//! Conversions from libVLC structures into vlcr-core values
//!
//! Everything here only reads native memory; releasing the structures stays
//! with the caller that obtained them.

use std::os::raw::c_uint;
use vlcr_core::{
    AudioDevice, AudioTrackInfo, ChapterDescription, DiscovererCategory, DiscovererDescription,
    MediaSlave, MediaStatistics, ModuleDescription, RendererDescription, SlaveType, TextTrackInfo,
    TitleDescription, TrackDescription, TrackDetails, TrackInfo, TrackType, VideoOrientation,
    VideoProjection, VideoTrackInfo, Viewpoint,
};
use vlcr_sys::copy_string;
use vlcr_sys::types::*;

/// Walks a NULL-terminated native linked list.
pub(crate) unsafe fn collect_list<T, R>(
    mut node: *const T,
    next: fn(&T) -> *const T,
    mut map: impl FnMut(&T) -> R,
) -> Vec<R> {
    let mut values = Vec::new();
    while let Some(item) = node.as_ref() {
        values.push(map(item));
        node = next(item);
    }
    values
}

/// Reads `count` entries of a native array of pointers, skipping NULL slots.
pub(crate) unsafe fn collect_array<T, R>(
    array: *const *mut T,
    count: usize,
    mut map: impl FnMut(&T) -> R,
) -> Vec<R> {
    if array.is_null() {
        return Vec::new();
    }
    (0..count)
        .filter_map(|i| (*array.add(i)).as_ref())
        .map(&mut map)
        .collect()
}

pub(crate) unsafe fn track_descriptions(
    list: *const libvlc_track_description_t,
) -> Vec<TrackDescription> {
    collect_list(
        list,
        |d| d.p_next,
        |d| TrackDescription::new(d.i_id, copy_string(d.psz_name).unwrap_or_default()),
    )
}

pub(crate) unsafe fn audio_devices(list: *const libvlc_audio_output_device_t) -> Vec<AudioDevice> {
    collect_list(
        list,
        |d| d.p_next,
        |d| AudioDevice {
            device_id: copy_string(d.psz_device).unwrap_or_default(),
            description: copy_string(d.psz_description).unwrap_or_default(),
        },
    )
}

/// Output modules as `(name, description)` pairs.
pub(crate) unsafe fn audio_outputs(list: *const libvlc_audio_output_t) -> Vec<(String, String)> {
    collect_list(
        list,
        |o| o.p_next,
        |o| {
            (
                copy_string(o.psz_name).unwrap_or_default(),
                copy_string(o.psz_description).unwrap_or_default(),
            )
        },
    )
}

pub(crate) unsafe fn module_descriptions(
    list: *const libvlc_module_description_t,
) -> Vec<ModuleDescription> {
    collect_list(
        list,
        |m| m.p_next,
        |m| ModuleDescription {
            name: copy_string(m.psz_name).unwrap_or_default(),
            short_name: copy_string(m.psz_shortname),
            long_name: copy_string(m.psz_longname),
            help: copy_string(m.psz_help),
        },
    )
}

pub(crate) unsafe fn title_description(title: &libvlc_title_description_t) -> TitleDescription {
    TitleDescription {
        duration_ms: title.i_duration,
        name: copy_string(title.psz_name),
        is_menu: title.i_flags & LIBVLC_TITLE_MENU != 0,
        is_interactive: title.i_flags & LIBVLC_TITLE_INTERACTIVE != 0,
    }
}

pub(crate) unsafe fn chapter_description(
    chapter: &libvlc_chapter_description_t,
) -> ChapterDescription {
    ChapterDescription {
        offset_ms: chapter.i_time_offset,
        duration_ms: chapter.i_duration,
        name: copy_string(chapter.psz_name),
    }
}

pub(crate) unsafe fn media_slave(slave: &libvlc_media_slave_t) -> MediaSlave {
    MediaSlave {
        uri: copy_string(slave.psz_uri).unwrap_or_default(),
        slave_type: SlaveType::from_raw(slave.i_type),
        priority: slave.i_priority,
    }
}

pub(crate) unsafe fn discoverer_description(
    desc: &libvlc_media_discoverer_description_t,
) -> DiscovererDescription {
    DiscovererDescription {
        name: copy_string(desc.psz_name).unwrap_or_default(),
        long_name: copy_string(desc.psz_longname).unwrap_or_default(),
        category: DiscovererCategory::from_raw(desc.i_cat),
    }
}

pub(crate) unsafe fn renderer_description(desc: &libvlc_rd_description_t) -> RendererDescription {
    RendererDescription {
        name: copy_string(desc.psz_name).unwrap_or_default(),
        long_name: copy_string(desc.psz_longname).unwrap_or_default(),
    }
}

/// Converts one elementary stream description. `codec_description` is
/// looked up separately since it needs the function table.
pub(crate) unsafe fn track_info(track: &libvlc_media_track_t) -> TrackInfo {
    let track_type = TrackType::from_raw(track.i_type).unwrap_or(TrackType::Unknown);
    let details = match track_type {
        TrackType::Audio => track
            .u
            .audio
            .as_ref()
            .map(|a| {
                TrackDetails::Audio(AudioTrackInfo {
                    channels: a.i_channels,
                    rate: a.i_rate,
                })
            })
            .unwrap_or(TrackDetails::Unknown),
        TrackType::Video => track
            .u
            .video
            .as_ref()
            .map(|v| {
                TrackDetails::Video(VideoTrackInfo {
                    width: v.i_width,
                    height: v.i_height,
                    sar_num: v.i_sar_num,
                    sar_den: v.i_sar_den,
                    frame_rate_num: v.i_frame_rate_num,
                    frame_rate_den: v.i_frame_rate_den,
                    orientation: VideoOrientation::from_raw(v.i_orientation),
                    projection: VideoProjection::from_raw(v.i_projection),
                    pose: viewpoint(&v.pose),
                })
            })
            .unwrap_or(TrackDetails::Unknown),
        TrackType::Text => track
            .u
            .subtitle
            .as_ref()
            .map(|s| {
                TrackDetails::Text(TextTrackInfo {
                    encoding: copy_string(s.psz_encoding),
                })
            })
            .unwrap_or(TrackDetails::Unknown),
        TrackType::Unknown => TrackDetails::Unknown,
    };

    TrackInfo {
        codec: track.i_codec,
        original_fourcc: track.i_original_fourcc,
        id: track.i_id,
        track_type,
        profile: track.i_profile,
        level: track.i_level,
        bitrate: track.i_bitrate,
        language: copy_string(track.psz_language),
        description: copy_string(track.psz_description),
        codec_description: None,
        details,
    }
}

pub(crate) fn statistics(stats: &libvlc_media_stats_t) -> MediaStatistics {
    MediaStatistics {
        read_bytes: stats.i_read_bytes,
        input_bitrate: stats.f_input_bitrate,
        demux_read_bytes: stats.i_demux_read_bytes,
        demux_bitrate: stats.f_demux_bitrate,
        demux_corrupted: stats.i_demux_corrupted,
        demux_discontinuity: stats.i_demux_discontinuity,
        decoded_video: stats.i_decoded_video,
        decoded_audio: stats.i_decoded_audio,
        displayed_pictures: stats.i_displayed_pictures,
        lost_pictures: stats.i_lost_pictures,
        played_audio_buffers: stats.i_played_abuffers,
        lost_audio_buffers: stats.i_lost_abuffers,
        sent_packets: stats.i_sent_packets,
        sent_bytes: stats.i_sent_bytes,
        send_bitrate: stats.f_send_bitrate,
    }
}

pub(crate) fn viewpoint(native: &libvlc_video_viewpoint_t) -> Viewpoint {
    Viewpoint::new(
        native.f_yaw,
        native.f_pitch,
        native.f_roll,
        native.f_field_of_view,
    )
}

pub(crate) fn write_viewpoint(viewpoint: &Viewpoint, native: &mut libvlc_video_viewpoint_t) {
    native.f_yaw = viewpoint.yaw;
    native.f_pitch = viewpoint.pitch;
    native.f_roll = viewpoint.roll;
    native.f_field_of_view = viewpoint.field_of_view;
}

/// libVLC counts come back as `c_int` with -1 for errors.
pub(crate) fn count(value: std::os::raw::c_int) -> c_uint {
    value.max(0) as c_uint
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_track_description_list() {
        let disable = CString::new("Disable").unwrap();
        let english = CString::new("Track 1 - [English]").unwrap();
        let mut second = libvlc_track_description_t {
            i_id: 1,
            psz_name: english.as_ptr() as *mut _,
            p_next: ptr::null_mut(),
        };
        let first = libvlc_track_description_t {
            i_id: -1,
            psz_name: disable.as_ptr() as *mut _,
            p_next: &mut second,
        };

        let tracks = unsafe { track_descriptions(&first) };
        assert_eq!(tracks.len(), 2);
        assert!(tracks[0].is_disable());
        assert_eq!(tracks[1], TrackDescription::new(1, "Track 1 - [English]"));
    }

    #[test]
    fn test_empty_list() {
        let tracks = unsafe { track_descriptions(ptr::null()) };
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_title_flags() {
        let name = CString::new("Main menu").unwrap();
        let title = libvlc_title_description_t {
            i_duration: 5_000,
            psz_name: name.as_ptr() as *mut _,
            i_flags: LIBVLC_TITLE_MENU,
        };
        let desc = unsafe { title_description(&title) };
        assert!(desc.is_menu);
        assert!(!desc.is_interactive);
        assert_eq!(desc.name.as_deref(), Some("Main menu"));
        assert_eq!(desc.duration_ms, 5_000);
    }

    #[test]
    fn test_collect_array_skips_null() {
        let mut a = libvlc_chapter_description_t {
            i_time_offset: 0,
            i_duration: 1_000,
            psz_name: ptr::null_mut(),
        };
        let mut b = libvlc_chapter_description_t {
            i_time_offset: 1_000,
            i_duration: 2_000,
            psz_name: ptr::null_mut(),
        };
        let array: [*mut libvlc_chapter_description_t; 3] = [&mut a, ptr::null_mut(), &mut b];

        let chapters = unsafe { collect_array(array.as_ptr(), 3, |c| chapter_description(c)) };
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].offset_ms, 1_000);
        assert_eq!(chapters[1].end_ms(), 3_000);
        assert_eq!(chapters[0].name, None);
    }

    #[test]
    fn test_video_track_info() {
        let mut video = libvlc_video_track_t {
            i_height: 1080,
            i_width: 1920,
            i_sar_num: 1,
            i_sar_den: 1,
            i_frame_rate_num: 30_000,
            i_frame_rate_den: 1_001,
            i_orientation: 0,
            i_projection: 0,
            pose: libvlc_video_viewpoint_t::default(),
        };
        let language = CString::new("en").unwrap();
        let track = libvlc_media_track_t {
            i_codec: u32::from_le_bytes(*b"h264"),
            i_original_fourcc: 0,
            i_id: 0,
            i_type: LIBVLC_TRACK_VIDEO,
            i_profile: 100,
            i_level: 41,
            u: libvlc_media_track_u { video: &mut video },
            i_bitrate: 0,
            psz_language: language.as_ptr() as *mut _,
            psz_description: ptr::null_mut(),
        };

        let info = unsafe { track_info(&track) };
        assert_eq!(info.track_type, TrackType::Video);
        assert_eq!(info.codec_name(), "h264");
        assert_eq!(info.language.as_deref(), Some("en"));
        match info.details {
            TrackDetails::Video(v) => {
                assert_eq!((v.width, v.height), (1920, 1080));
                assert_eq!(v.orientation, Some(VideoOrientation::TopLeft));
                assert_eq!(v.projection, Some(VideoProjection::Rectangular));
            }
            other => panic!("unexpected details {other:?}"),
        }
    }

    #[test]
    fn test_track_with_null_details() {
        let track = libvlc_media_track_t {
            i_codec: 0,
            i_original_fourcc: 0,
            i_id: 3,
            i_type: LIBVLC_TRACK_AUDIO,
            i_profile: 0,
            i_level: 0,
            u: libvlc_media_track_u {
                audio: ptr::null_mut(),
            },
            i_bitrate: 128_000,
            psz_language: ptr::null_mut(),
            psz_description: ptr::null_mut(),
        };
        let info = unsafe { track_info(&track) };
        assert_eq!(info.details, TrackDetails::Unknown);
        assert_eq!(info.bitrate, 128_000);
    }

    #[test]
    fn test_viewpoint_round_trip_fields() {
        let mut native = libvlc_video_viewpoint_t::default();
        write_viewpoint(&Viewpoint::new(10.0, -5.0, 0.5, 80.0), &mut native);
        assert_eq!(native.f_pitch, -5.0);
        assert_eq!(viewpoint(&native).field_of_view, 80.0);
    }

    #[test]
    fn test_count_clamps_errors() {
        assert_eq!(count(-1), 0);
        assert_eq!(count(4), 4);
    }
}
