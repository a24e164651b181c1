//! Typed native events
//!
//! Decoding copies every value out of the native payload. Strings are copied
//! while the callback is running; media and renderer items are carried as
//! non-owning references that can be retained by the listener.

use super::NativeEvent;
use crate::media::MediaRef;
use crate::renderer::RendererItemRef;
use std::os::raw::c_int;
use vlcr_core::{Meta, ParsedStatus, State, TrackType};
use vlcr_sys::copy_string;
use vlcr_sys::types::*;

/// Events raised by a media player
#[derive(Debug, Clone, PartialEq)]
pub enum MediaPlayerEvent {
    MediaChanged(Option<MediaRef>),
    NothingSpecial,
    Opening,
    /// Buffer fill percentage
    Buffering(f32),
    Playing,
    Paused,
    Stopped,
    Forward,
    Backward,
    Finished,
    Error,
    TimeChanged(i64),
    PositionChanged(f32),
    SeekableChanged(bool),
    PausableChanged(bool),
    TitleChanged(i32),
    SnapshotTaken(String),
    LengthChanged(i64),
    /// Number of video outputs now active
    VideoOutput(i32),
    ScrambledChanged(bool),
    ElementaryStreamAdded { track_type: TrackType, id: i32 },
    ElementaryStreamDeleted { track_type: TrackType, id: i32 },
    ElementaryStreamSelected { track_type: TrackType, id: i32 },
    Corked,
    Uncorked,
    Muted,
    Unmuted,
    VolumeChanged(f32),
    AudioDeviceChanged(Option<String>),
    ChapterChanged(i32),
}

impl NativeEvent for MediaPlayerEvent {
    const EVENT_TYPES: &'static [c_int] = &[
        LIBVLC_MEDIA_PLAYER_MEDIA_CHANGED,
        LIBVLC_MEDIA_PLAYER_NOTHING_SPECIAL,
        LIBVLC_MEDIA_PLAYER_OPENING,
        LIBVLC_MEDIA_PLAYER_BUFFERING,
        LIBVLC_MEDIA_PLAYER_PLAYING,
        LIBVLC_MEDIA_PLAYER_PAUSED,
        LIBVLC_MEDIA_PLAYER_STOPPED,
        LIBVLC_MEDIA_PLAYER_FORWARD,
        LIBVLC_MEDIA_PLAYER_BACKWARD,
        LIBVLC_MEDIA_PLAYER_END_REACHED,
        LIBVLC_MEDIA_PLAYER_ENCOUNTERED_ERROR,
        LIBVLC_MEDIA_PLAYER_TIME_CHANGED,
        LIBVLC_MEDIA_PLAYER_POSITION_CHANGED,
        LIBVLC_MEDIA_PLAYER_SEEKABLE_CHANGED,
        LIBVLC_MEDIA_PLAYER_PAUSABLE_CHANGED,
        LIBVLC_MEDIA_PLAYER_TITLE_CHANGED,
        LIBVLC_MEDIA_PLAYER_SNAPSHOT_TAKEN,
        LIBVLC_MEDIA_PLAYER_LENGTH_CHANGED,
        LIBVLC_MEDIA_PLAYER_VOUT,
        LIBVLC_MEDIA_PLAYER_SCRAMBLED_CHANGED,
        LIBVLC_MEDIA_PLAYER_ES_ADDED,
        LIBVLC_MEDIA_PLAYER_ES_DELETED,
        LIBVLC_MEDIA_PLAYER_ES_SELECTED,
        LIBVLC_MEDIA_PLAYER_CORKED,
        LIBVLC_MEDIA_PLAYER_UNCORKED,
        LIBVLC_MEDIA_PLAYER_MUTED,
        LIBVLC_MEDIA_PLAYER_UNMUTED,
        LIBVLC_MEDIA_PLAYER_AUDIO_VOLUME,
        LIBVLC_MEDIA_PLAYER_AUDIO_DEVICE,
        LIBVLC_MEDIA_PLAYER_CHAPTER_CHANGED,
    ];

    fn from_native(event: &libvlc_event_t) -> Option<Self> {
        let u = &event.u;
        // SAFETY: each arm reads the union member libVLC fills for that type
        unsafe {
            Some(match event.type_ {
                LIBVLC_MEDIA_PLAYER_MEDIA_CHANGED => {
                    Self::MediaChanged(MediaRef::new(u.media_player_media_changed.item))
                }
                LIBVLC_MEDIA_PLAYER_NOTHING_SPECIAL => Self::NothingSpecial,
                LIBVLC_MEDIA_PLAYER_OPENING => Self::Opening,
                LIBVLC_MEDIA_PLAYER_BUFFERING => Self::Buffering(u.media_player_buffering.value),
                LIBVLC_MEDIA_PLAYER_PLAYING => Self::Playing,
                LIBVLC_MEDIA_PLAYER_PAUSED => Self::Paused,
                LIBVLC_MEDIA_PLAYER_STOPPED => Self::Stopped,
                LIBVLC_MEDIA_PLAYER_FORWARD => Self::Forward,
                LIBVLC_MEDIA_PLAYER_BACKWARD => Self::Backward,
                LIBVLC_MEDIA_PLAYER_END_REACHED => Self::Finished,
                LIBVLC_MEDIA_PLAYER_ENCOUNTERED_ERROR => Self::Error,
                LIBVLC_MEDIA_PLAYER_TIME_CHANGED => {
                    Self::TimeChanged(u.media_player_time_changed.value)
                }
                LIBVLC_MEDIA_PLAYER_POSITION_CHANGED => {
                    Self::PositionChanged(u.media_player_position_changed.value)
                }
                LIBVLC_MEDIA_PLAYER_SEEKABLE_CHANGED => {
                    Self::SeekableChanged(u.media_player_seekable_changed.value != 0)
                }
                LIBVLC_MEDIA_PLAYER_PAUSABLE_CHANGED => {
                    Self::PausableChanged(u.media_player_pausable_changed.value != 0)
                }
                LIBVLC_MEDIA_PLAYER_TITLE_CHANGED => {
                    Self::TitleChanged(u.media_player_title_changed.value)
                }
                LIBVLC_MEDIA_PLAYER_SNAPSHOT_TAKEN => Self::SnapshotTaken(
                    copy_string(u.media_player_snapshot_taken.value).unwrap_or_default(),
                ),
                LIBVLC_MEDIA_PLAYER_LENGTH_CHANGED => {
                    Self::LengthChanged(u.media_player_length_changed.value)
                }
                LIBVLC_MEDIA_PLAYER_VOUT => Self::VideoOutput(u.media_player_vout.value),
                LIBVLC_MEDIA_PLAYER_SCRAMBLED_CHANGED => {
                    Self::ScrambledChanged(u.media_player_scrambled_changed.value != 0)
                }
                LIBVLC_MEDIA_PLAYER_ES_ADDED => {
                    let (track_type, id) = es_changed(&u.media_player_es_changed);
                    Self::ElementaryStreamAdded { track_type, id }
                }
                LIBVLC_MEDIA_PLAYER_ES_DELETED => {
                    let (track_type, id) = es_changed(&u.media_player_es_changed);
                    Self::ElementaryStreamDeleted { track_type, id }
                }
                LIBVLC_MEDIA_PLAYER_ES_SELECTED => {
                    let (track_type, id) = es_changed(&u.media_player_es_changed);
                    Self::ElementaryStreamSelected { track_type, id }
                }
                LIBVLC_MEDIA_PLAYER_CORKED => Self::Corked,
                LIBVLC_MEDIA_PLAYER_UNCORKED => Self::Uncorked,
                LIBVLC_MEDIA_PLAYER_MUTED => Self::Muted,
                LIBVLC_MEDIA_PLAYER_UNMUTED => Self::Unmuted,
                LIBVLC_MEDIA_PLAYER_AUDIO_VOLUME => {
                    Self::VolumeChanged(u.media_player_audio_volume.value)
                }
                LIBVLC_MEDIA_PLAYER_AUDIO_DEVICE => {
                    Self::AudioDeviceChanged(copy_string(u.media_player_audio_device.value))
                }
                LIBVLC_MEDIA_PLAYER_CHAPTER_CHANGED => {
                    Self::ChapterChanged(u.media_player_chapter_changed.value)
                }
                _ => return None,
            })
        }
    }
}

fn es_changed(payload: &media_player_es_changed_t) -> (TrackType, i32) {
    (
        TrackType::from_raw(payload.i_type).unwrap_or(TrackType::Unknown),
        payload.i_id,
    )
}

/// Events raised by a media
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    MetaChanged(Meta),
    SubItemAdded(Option<MediaRef>),
    DurationChanged(i64),
    ParsedChanged(Option<ParsedStatus>),
    Freed,
    StateChanged(State),
    SubItemTreeAdded(Option<MediaRef>),
}

impl NativeEvent for MediaEvent {
    const EVENT_TYPES: &'static [c_int] = &[
        LIBVLC_MEDIA_META_CHANGED,
        LIBVLC_MEDIA_SUB_ITEM_ADDED,
        LIBVLC_MEDIA_DURATION_CHANGED,
        LIBVLC_MEDIA_PARSED_CHANGED,
        LIBVLC_MEDIA_FREED,
        LIBVLC_MEDIA_STATE_CHANGED,
        LIBVLC_MEDIA_SUB_ITEM_TREE_ADDED,
    ];

    fn from_native(event: &libvlc_event_t) -> Option<Self> {
        let u = &event.u;
        unsafe {
            Some(match event.type_ {
                LIBVLC_MEDIA_META_CHANGED => {
                    Self::MetaChanged(Meta::from_raw(u.media_meta_changed.meta_type)?)
                }
                LIBVLC_MEDIA_SUB_ITEM_ADDED => {
                    Self::SubItemAdded(MediaRef::new(u.media_subitem_added.item))
                }
                LIBVLC_MEDIA_DURATION_CHANGED => {
                    Self::DurationChanged(u.media_duration_changed.new_duration)
                }
                LIBVLC_MEDIA_PARSED_CHANGED => {
                    Self::ParsedChanged(ParsedStatus::from_raw(u.media_parsed_changed.value))
                }
                LIBVLC_MEDIA_FREED => Self::Freed,
                LIBVLC_MEDIA_STATE_CHANGED => {
                    Self::StateChanged(State::from_raw(u.media_state_changed.value)?)
                }
                LIBVLC_MEDIA_SUB_ITEM_TREE_ADDED => {
                    Self::SubItemTreeAdded(MediaRef::new(u.media_subitemtree_added.item))
                }
                _ => return None,
            })
        }
    }
}

/// Events raised by a media list
#[derive(Debug, Clone, PartialEq)]
pub enum MediaListEvent {
    WillAddItem { media: Option<MediaRef>, index: i32 },
    ItemAdded { media: Option<MediaRef>, index: i32 },
    WillDeleteItem { media: Option<MediaRef>, index: i32 },
    ItemDeleted { media: Option<MediaRef>, index: i32 },
    EndReached,
}

impl NativeEvent for MediaListEvent {
    const EVENT_TYPES: &'static [c_int] = &[
        LIBVLC_MEDIA_LIST_ITEM_ADDED,
        LIBVLC_MEDIA_LIST_WILL_ADD_ITEM,
        LIBVLC_MEDIA_LIST_ITEM_DELETED,
        LIBVLC_MEDIA_LIST_WILL_DELETE_ITEM,
        LIBVLC_MEDIA_LIST_END_REACHED,
    ];

    fn from_native(event: &libvlc_event_t) -> Option<Self> {
        let item = || unsafe { event.u.media_list_item };
        Some(match event.type_ {
            LIBVLC_MEDIA_LIST_WILL_ADD_ITEM => {
                let p = item();
                Self::WillAddItem {
                    media: MediaRef::new(p.item),
                    index: p.index,
                }
            }
            LIBVLC_MEDIA_LIST_ITEM_ADDED => {
                let p = item();
                Self::ItemAdded {
                    media: MediaRef::new(p.item),
                    index: p.index,
                }
            }
            LIBVLC_MEDIA_LIST_WILL_DELETE_ITEM => {
                let p = item();
                Self::WillDeleteItem {
                    media: MediaRef::new(p.item),
                    index: p.index,
                }
            }
            LIBVLC_MEDIA_LIST_ITEM_DELETED => {
                let p = item();
                Self::ItemDeleted {
                    media: MediaRef::new(p.item),
                    index: p.index,
                }
            }
            LIBVLC_MEDIA_LIST_END_REACHED => Self::EndReached,
            _ => return None,
        })
    }
}

/// Events raised by a media list player
#[derive(Debug, Clone, PartialEq)]
pub enum MediaListPlayerEvent {
    Played,
    NextItemSet(Option<MediaRef>),
    Stopped,
}

impl NativeEvent for MediaListPlayerEvent {
    const EVENT_TYPES: &'static [c_int] = &[
        LIBVLC_MEDIA_LIST_PLAYER_PLAYED,
        LIBVLC_MEDIA_LIST_PLAYER_NEXT_ITEM_SET,
        LIBVLC_MEDIA_LIST_PLAYER_STOPPED,
    ];

    fn from_native(event: &libvlc_event_t) -> Option<Self> {
        Some(match event.type_ {
            LIBVLC_MEDIA_LIST_PLAYER_PLAYED => Self::Played,
            LIBVLC_MEDIA_LIST_PLAYER_NEXT_ITEM_SET => {
                Self::NextItemSet(MediaRef::new(unsafe { event.u.media_subitem_added.item }))
            }
            LIBVLC_MEDIA_LIST_PLAYER_STOPPED => Self::Stopped,
            _ => return None,
        })
    }
}

/// Events raised by a renderer discoverer
#[derive(Debug, Clone, PartialEq)]
pub enum RendererDiscovererEvent {
    ItemAdded(RendererItemRef),
    ItemDeleted(RendererItemRef),
}

impl NativeEvent for RendererDiscovererEvent {
    const EVENT_TYPES: &'static [c_int] = &[
        LIBVLC_RENDERER_DISCOVERER_ITEM_ADDED,
        LIBVLC_RENDERER_DISCOVERER_ITEM_DELETED,
    ];

    fn from_native(event: &libvlc_event_t) -> Option<Self> {
        let item = unsafe { event.u.renderer_discoverer_item.item };
        match event.type_ {
            LIBVLC_RENDERER_DISCOVERER_ITEM_ADDED => RendererItemRef::new(item).map(Self::ItemAdded),
            LIBVLC_RENDERER_DISCOVERER_ITEM_DELETED => {
                RendererItemRef::new(item).map(Self::ItemDeleted)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    fn event(type_: c_int, u: libvlc_event_u) -> libvlc_event_t {
        libvlc_event_t {
            type_,
            p_obj: ptr::null_mut(),
            u,
        }
    }

    fn empty() -> libvlc_event_u {
        libvlc_event_u {
            _size: [ptr::null_mut(); 2],
        }
    }

    #[test]
    fn test_player_state_events() {
        let playing = event(LIBVLC_MEDIA_PLAYER_PLAYING, empty());
        assert_eq!(
            MediaPlayerEvent::from_native(&playing),
            Some(MediaPlayerEvent::Playing)
        );
        let error = event(LIBVLC_MEDIA_PLAYER_ENCOUNTERED_ERROR, empty());
        assert_eq!(
            MediaPlayerEvent::from_native(&error),
            Some(MediaPlayerEvent::Error)
        );
    }

    #[test]
    fn test_player_time_changed() {
        let e = event(
            LIBVLC_MEDIA_PLAYER_TIME_CHANGED,
            libvlc_event_u {
                media_player_time_changed: new_time_t { value: 42_000 },
            },
        );
        assert_eq!(
            MediaPlayerEvent::from_native(&e),
            Some(MediaPlayerEvent::TimeChanged(42_000))
        );
    }

    #[test]
    fn test_snapshot_path_is_copied() {
        let path = CString::new("/tmp/shot.png").unwrap();
        let e = event(
            LIBVLC_MEDIA_PLAYER_SNAPSHOT_TAKEN,
            libvlc_event_u {
                media_player_snapshot_taken: new_string_t {
                    value: path.as_ptr(),
                },
            },
        );
        let decoded = MediaPlayerEvent::from_native(&e);
        drop(path);
        assert_eq!(
            decoded,
            Some(MediaPlayerEvent::SnapshotTaken("/tmp/shot.png".into()))
        );
    }

    #[test]
    fn test_es_selected() {
        let e = event(
            LIBVLC_MEDIA_PLAYER_ES_SELECTED,
            libvlc_event_u {
                media_player_es_changed: media_player_es_changed_t {
                    i_type: LIBVLC_TRACK_TEXT,
                    i_id: 4,
                },
            },
        );
        assert_eq!(
            MediaPlayerEvent::from_native(&e),
            Some(MediaPlayerEvent::ElementaryStreamSelected {
                track_type: TrackType::Text,
                id: 4
            })
        );
    }

    #[test]
    fn test_media_changed_to_null() {
        let e = event(
            LIBVLC_MEDIA_PLAYER_MEDIA_CHANGED,
            libvlc_event_u {
                media_player_media_changed: media_item_t {
                    item: ptr::null_mut(),
                },
            },
        );
        assert_eq!(
            MediaPlayerEvent::from_native(&e),
            Some(MediaPlayerEvent::MediaChanged(None))
        );
    }

    #[test]
    fn test_unknown_type_is_ignored() {
        let e = event(0x7fff, empty());
        assert_eq!(MediaPlayerEvent::from_native(&e), None);
        assert_eq!(MediaEvent::from_native(&e), None);
        assert_eq!(MediaListEvent::from_native(&e), None);
    }

    #[test]
    fn test_media_state_changed() {
        let e = event(
            LIBVLC_MEDIA_STATE_CHANGED,
            libvlc_event_u {
                media_state_changed: new_int_t { value: 6 },
            },
        );
        assert_eq!(
            MediaEvent::from_native(&e),
            Some(MediaEvent::StateChanged(State::Ended))
        );
    }

    #[test]
    fn test_list_item_added_index() {
        let e = event(
            LIBVLC_MEDIA_LIST_ITEM_ADDED,
            libvlc_event_u {
                media_list_item: media_list_item_t {
                    item: ptr::null_mut(),
                    index: 3,
                },
            },
        );
        assert_eq!(
            MediaListEvent::from_native(&e),
            Some(MediaListEvent::ItemAdded {
                media: None,
                index: 3
            })
        );
    }

    #[test]
    fn test_renderer_event_without_item_is_dropped() {
        let e = event(
            LIBVLC_RENDERER_DISCOVERER_ITEM_ADDED,
            libvlc_event_u {
                renderer_discoverer_item: renderer_item_t {
                    item: ptr::null_mut(),
                },
            },
        );
        assert_eq!(RendererDiscovererEvent::from_native(&e), None);
    }

    #[test]
    fn test_event_types_are_unique() {
        let mut types = MediaPlayerEvent::EVENT_TYPES.to_vec();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), MediaPlayerEvent::EVENT_TYPES.len());
    }
}
