//! Application-side video rendering and audio output
//!
//! Instead of opening its own window or sound device, the player can hand
//! decoded frames and samples to the application. Callbacks run on libVLC's
//! output threads; install them before playback starts.

use super::MediaPlayer;
use crate::{Error, Result};
use byteorder::{ByteOrder, NativeEndian};
use parking_lot::Mutex;
use std::os::raw::{c_char, c_float, c_uint, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::{ptr, slice};
use vlcr_sys::types::PICTURE_PLANE_MAX;

/// Layout of the buffers libVLC decodes video into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferFormat {
    chroma: [u8; 4],
    width: u32,
    height: u32,
    pitches: Vec<u32>,
    lines: Vec<u32>,
}

impl BufferFormat {
    /// `chroma` is a four character code such as `RV32` or `I420`; one
    /// pitch (bytes per line) and line count per plane.
    pub fn new(
        chroma: &str,
        width: u32,
        height: u32,
        pitches: &[u32],
        lines: &[u32],
    ) -> Result<Self> {
        let chroma: [u8; 4] = chroma
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidArgument(format!("chroma {chroma:?}")))?;
        if pitches.is_empty() || pitches.len() > PICTURE_PLANE_MAX || pitches.len() != lines.len()
        {
            return Err(Error::InvalidArgument(format!(
                "{} pitches for {} planes",
                pitches.len(),
                lines.len()
            )));
        }
        Ok(Self {
            chroma,
            width,
            height,
            pitches: pitches.to_vec(),
            lines: lines.to_vec(),
        })
    }

    /// Single plane, 32 bits per pixel (BGRA byte order on little endian)
    pub fn rv32(width: u32, height: u32) -> Self {
        Self {
            chroma: *b"RV32",
            width,
            height,
            pitches: vec![width.saturating_mul(4)],
            lines: vec![height],
        }
    }

    pub fn chroma(&self) -> &str {
        std::str::from_utf8(&self.chroma).unwrap_or("????")
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitches(&self) -> &[u32] {
        &self.pitches
    }

    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    pub fn plane_count(&self) -> usize {
        self.pitches.len()
    }

    /// Byte size of each plane
    pub fn plane_sizes(&self) -> Vec<usize> {
        self.pitches
            .iter()
            .zip(&self.lines)
            .map(|(&pitch, &lines)| pitch as usize * lines as usize)
            .collect()
    }

    pub fn frame_size(&self) -> usize {
        self.plane_sizes().iter().sum()
    }
}

/// Chooses the buffer format once the source video size is known.
pub trait BufferFormatCallback: Send + 'static {
    /// Returns `None` to refuse the video.
    fn format(&mut self, source_width: u32, source_height: u32) -> Option<BufferFormat>;

    /// Buffers for `format` were allocated.
    fn allocated(&mut self, _format: &BufferFormat) {}

    /// The video output is going away, buffers are freed next.
    fn cleanup(&mut self) {}
}

impl<F> BufferFormatCallback for F
where
    F: FnMut(u32, u32) -> Option<BufferFormat> + Send + 'static,
{
    fn format(&mut self, source_width: u32, source_height: u32) -> Option<BufferFormat> {
        self(source_width, source_height)
    }
}

/// Receives each decoded frame, one slice per plane.
pub trait RenderCallback: Send + 'static {
    fn display(&mut self, format: &BufferFormat, planes: &[&[u8]]);
}

impl<F> RenderCallback for F
where
    F: FnMut(&BufferFormat, &[&[u8]]) + Send + 'static,
{
    fn display(&mut self, format: &BufferFormat, planes: &[&[u8]]) {
        self(format, planes)
    }
}

/// PCM sample encodings libVLC can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Signed 16 bit, native endian
    S16N,
    /// Signed 32 bit, native endian
    S32N,
    /// 32 bit float
    Fl32,
}

impl SampleFormat {
    fn fourcc(self) -> &'static [u8; 5] {
        match self {
            SampleFormat::S16N => b"S16N\0",
            SampleFormat::S32N => b"S32N\0",
            SampleFormat::Fl32 => b"FL32\0",
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::S16N => 2,
            SampleFormat::S32N | SampleFormat::Fl32 => 4,
        }
    }
}

/// Output format requested from libVLC; it resamples to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample: SampleFormat,
    pub rate: u32,
    pub channels: u32,
}

impl AudioFormat {
    pub fn new(sample: SampleFormat, rate: u32, channels: u32) -> Self {
        Self {
            sample,
            rate,
            channels,
        }
    }

    pub fn s16n(rate: u32, channels: u32) -> Self {
        Self::new(SampleFormat::S16N, rate, channels)
    }

    /// Bytes per frame (one sample for every channel)
    pub fn frame_size(&self) -> usize {
        self.sample.bytes_per_sample() * self.channels as usize
    }
}

/// Receives decoded audio. `play` gets `count` frames of interleaved samples.
pub trait AudioCallback: Send + 'static {
    fn play(&mut self, samples: &[u8], count: u32, pts: i64);

    fn pause(&mut self, _pts: i64) {}

    fn resume(&mut self, _pts: i64) {}

    /// Drop buffered samples
    fn flush(&mut self, _pts: i64) {}

    /// Play out buffered samples
    fn drain(&mut self) {}

    /// Volume is linear, 1.0 is nominal
    fn set_volume(&mut self, _volume: f32, _mute: bool) {}
}

/// Reinterprets `S16N` bytes as samples. A trailing odd byte is ignored.
pub fn samples_i16(bytes: &[u8]) -> Vec<i16> {
    let mut samples = vec![0i16; bytes.len() / 2];
    NativeEndian::read_i16_into(&bytes[..samples.len() * 2], &mut samples);
    samples
}

/// Rust side of installed callbacks; the boxes are the `opaque` pointers
/// libVLC calls back with, so they live until the player is released.
#[derive(Default)]
pub(crate) struct CallbackState {
    video: Mutex<Option<Box<VideoContext>>>,
    audio: Mutex<Option<Box<AudioContext>>>,
}

impl CallbackState {
    pub(crate) fn is_installed(&self) -> bool {
        self.video.lock().is_some() || self.audio.lock().is_some()
    }
}

/// Installs render and audio callbacks
pub struct CallbacksApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> CallbacksApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Renders video through `format` and `render` instead of a window.
    /// Can be installed once per player.
    pub fn set_video<F, R>(&self, format: F, render: R) -> Result<()>
    where
        F: BufferFormatCallback,
        R: RenderCallback,
    {
        let mut slot = self.player.inner().callbacks.video.lock();
        let context = Box::new(VideoContext::new(Box::new(format), Box::new(render)));
        let api = self.player.api();
        let raw = self.player.raw();
        install(&mut slot, "video", context, |opaque| unsafe {
            api.libvlc_video_set_callbacks(
                raw,
                Some(video_lock),
                Some(video_unlock),
                Some(video_display),
                opaque,
            )?;
            if let Err(e) =
                api.libvlc_video_set_format_callbacks(raw, Some(video_setup), Some(video_cleanup))
            {
                let _ = api.libvlc_video_set_callbacks(raw, None, None, None, ptr::null_mut());
                return Err(e.into());
            }
            Ok(())
        })?;
        tracing::debug!("Installed video callbacks");
        Ok(())
    }

    /// Sends audio to `callback` in `format` instead of an output device.
    /// Can be installed once per player.
    pub fn set_audio<A: AudioCallback>(&self, format: AudioFormat, callback: A) -> Result<()> {
        if format.rate == 0 || format.channels == 0 {
            return Err(Error::InvalidArgument(format!("audio format {format:?}")));
        }
        let mut slot = self.player.inner().callbacks.audio.lock();
        let context = Box::new(AudioContext::new(format, Box::new(callback)));
        let api = self.player.api();
        let raw = self.player.raw();
        install(&mut slot, "audio", context, |opaque| unsafe {
            api.libvlc_audio_set_callbacks(
                raw,
                Some(audio_play),
                Some(audio_pause),
                Some(audio_resume),
                Some(audio_flush),
                Some(audio_drain),
                opaque,
            )?;
            let rest = api
                .libvlc_audio_set_volume_callback(raw, Some(audio_set_volume))
                .and_then(|()| {
                    api.libvlc_audio_set_format(
                        raw,
                        format.sample.fourcc().as_ptr() as *const c_char,
                        format.rate,
                        format.channels,
                    )
                });
            if let Err(e) = rest {
                let _ = api.libvlc_audio_set_callbacks(
                    raw,
                    None,
                    None,
                    None,
                    None,
                    None,
                    ptr::null_mut(),
                );
                return Err(e.into());
            }
            Ok(())
        })?;
        tracing::debug!(?format, "Installed audio callbacks");
        Ok(())
    }

    pub fn has_video(&self) -> bool {
        self.player.inner().callbacks.video.lock().is_some()
    }

    pub fn has_audio(&self) -> bool {
        self.player.inner().callbacks.audio.lock().is_some()
    }
}

/// Registers `context` as the `opaque` pointer through `register` and keeps
/// it in `slot` once registration succeeded.
fn install<T>(
    slot: &mut Option<Box<T>>,
    kind: &str,
    context: Box<T>,
    register: impl FnOnce(*mut c_void) -> Result<()>,
) -> Result<()> {
    if slot.is_some() {
        return Err(Error::InvalidArgument(format!(
            "{kind} callbacks already installed"
        )));
    }
    // the heap allocation does not move with the box
    let opaque = &*context as *const T as *mut c_void;
    register(opaque)?;
    *slot = Some(context);
    Ok(())
}

/// Runs a callback body, keeping panics from unwinding into libVLC.
fn guarded<R>(what: &'static str, fallback: R, f: impl FnOnce() -> R) -> R {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            tracing::error!(callback = what, "Media callback panicked");
            fallback
        }
    }
}

struct VideoContext {
    state: Mutex<VideoState>,
}

struct VideoState {
    format_cb: Box<dyn BufferFormatCallback>,
    render_cb: Box<dyn RenderCallback>,
    format: Option<BufferFormat>,
    planes: Vec<Vec<u8>>,
}

impl VideoContext {
    fn new(format_cb: Box<dyn BufferFormatCallback>, render_cb: Box<dyn RenderCallback>) -> Self {
        Self {
            state: Mutex::new(VideoState {
                format_cb,
                render_cb,
                format: None,
                planes: Vec::new(),
            }),
        }
    }
}

unsafe extern "C" fn video_setup(
    opaque: *mut *mut c_void,
    chroma: *mut c_char,
    width: *mut c_uint,
    height: *mut c_uint,
    pitches: *mut c_uint,
    lines: *mut c_uint,
) -> c_uint {
    if opaque.is_null() || chroma.is_null() || width.is_null() || height.is_null() {
        return 0;
    }
    let Some(context) = (*opaque as *const VideoContext).as_ref() else {
        return 0;
    };
    guarded("video format", 0, || {
        let mut state = context.state.lock();
        let Some(format) = state.format_cb.format(*width, *height) else {
            return 0;
        };

        ptr::copy_nonoverlapping(format.chroma.as_ptr() as *const c_char, chroma, 4);
        *width = format.width;
        *height = format.height;
        for (i, (&pitch, &count)) in format.pitches.iter().zip(&format.lines).enumerate() {
            *pitches.add(i) = pitch;
            *lines.add(i) = count;
        }

        state.planes = format.plane_sizes().into_iter().map(|n| vec![0u8; n]).collect();
        state.format_cb.allocated(&format);
        let planes = format.plane_count() as c_uint;
        state.format = Some(format);
        planes
    })
}

unsafe extern "C" fn video_cleanup(opaque: *mut c_void) {
    let Some(context) = (opaque as *const VideoContext).as_ref() else {
        return;
    };
    guarded("video cleanup", (), || {
        let mut state = context.state.lock();
        state.format_cb.cleanup();
        state.format = None;
        state.planes = Vec::new();
    })
}

unsafe extern "C" fn video_lock(opaque: *mut c_void, planes: *mut *mut c_void) -> *mut c_void {
    if planes.is_null() {
        return ptr::null_mut();
    }
    if let Some(context) = (opaque as *const VideoContext).as_ref() {
        let mut state = context.state.lock();
        for (i, plane) in state.planes.iter_mut().enumerate() {
            *planes.add(i) = plane.as_mut_ptr() as *mut c_void;
        }
    }
    ptr::null_mut()
}

unsafe extern "C" fn video_unlock(
    _opaque: *mut c_void,
    _picture: *mut c_void,
    _planes: *const *mut c_void,
) {
}

unsafe extern "C" fn video_display(opaque: *mut c_void, _picture: *mut c_void) {
    let Some(context) = (opaque as *const VideoContext).as_ref() else {
        return;
    };
    guarded("video render", (), || {
        let mut guard = context.state.lock();
        let VideoState {
            render_cb,
            format,
            planes,
            ..
        } = &mut *guard;
        if let Some(format) = format {
            let planes: Vec<&[u8]> = planes.iter().map(Vec::as_slice).collect();
            render_cb.display(format, &planes);
        }
    })
}

struct AudioContext {
    format: AudioFormat,
    callback: Mutex<Box<dyn AudioCallback>>,
}

impl AudioContext {
    fn new(format: AudioFormat, callback: Box<dyn AudioCallback>) -> Self {
        Self {
            format,
            callback: Mutex::new(callback),
        }
    }
}

unsafe fn audio_context<'a>(data: *mut c_void) -> Option<&'a AudioContext> {
    (data as *const AudioContext).as_ref()
}

unsafe extern "C" fn audio_play(data: *mut c_void, samples: *const c_void, count: c_uint, pts: i64) {
    let Some(context) = audio_context(data) else {
        return;
    };
    let bytes = if samples.is_null() {
        &[][..]
    } else {
        slice::from_raw_parts(
            samples as *const u8,
            count as usize * context.format.frame_size(),
        )
    };
    guarded("audio play", (), || {
        context.callback.lock().play(bytes, count, pts)
    })
}

unsafe extern "C" fn audio_pause(data: *mut c_void, pts: i64) {
    if let Some(context) = audio_context(data) {
        guarded("audio pause", (), || context.callback.lock().pause(pts))
    }
}

unsafe extern "C" fn audio_resume(data: *mut c_void, pts: i64) {
    if let Some(context) = audio_context(data) {
        guarded("audio resume", (), || context.callback.lock().resume(pts))
    }
}

unsafe extern "C" fn audio_flush(data: *mut c_void, pts: i64) {
    if let Some(context) = audio_context(data) {
        guarded("audio flush", (), || context.callback.lock().flush(pts))
    }
}

unsafe extern "C" fn audio_drain(data: *mut c_void) {
    if let Some(context) = audio_context(data) {
        guarded("audio drain", (), || context.callback.lock().drain())
    }
}

unsafe extern "C" fn audio_set_volume(data: *mut c_void, volume: c_float, mute: bool) {
    if let Some(context) = audio_context(data) {
        guarded("audio volume", (), || {
            context.callback.lock().set_volume(volume, mute)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_rv32_layout() {
        let format = BufferFormat::rv32(640, 360);
        assert_eq!(format.chroma(), "RV32");
        assert_eq!(format.pitches(), &[2560]);
        assert_eq!(format.lines(), &[360]);
        assert_eq!(format.frame_size(), 640 * 360 * 4);
    }

    #[test]
    fn test_buffer_format_validation() {
        let i420 = BufferFormat::new("I420", 4, 2, &[4, 2, 2], &[2, 1, 1]).unwrap();
        assert_eq!(i420.plane_count(), 3);
        assert_eq!(i420.plane_sizes(), vec![8, 2, 2]);

        assert!(BufferFormat::new("RV3", 4, 2, &[16], &[2]).is_err());
        assert!(BufferFormat::new("RV32", 4, 2, &[], &[]).is_err());
        assert!(BufferFormat::new("RV32", 4, 2, &[16, 16], &[2]).is_err());
        assert!(BufferFormat::new("I420", 4, 2, &[4; 6], &[2; 6]).is_err());
    }

    #[test]
    fn test_audio_frame_size() {
        assert_eq!(AudioFormat::s16n(44100, 2).frame_size(), 4);
        assert_eq!(AudioFormat::new(SampleFormat::Fl32, 48000, 6).frame_size(), 24);
    }

    #[test]
    fn test_install_keeps_context_only_on_success() {
        let mut slot: Option<Box<u32>> = None;
        let failed = install(&mut slot, "video", Box::new(1), |_| {
            Err(Error::InvalidArgument("refused".to_string()))
        });
        assert!(failed.is_err());
        assert!(slot.is_none());

        let mut registered = ptr::null_mut();
        install(&mut slot, "video", Box::new(2), |opaque| {
            registered = opaque;
            Ok(())
        })
        .unwrap();
        let kept = slot.as_deref().unwrap() as *const u32 as *mut c_void;
        assert_eq!(registered, kept);

        let again = install(&mut slot, "video", Box::new(3), |_| {
            panic!("already installed")
        });
        assert!(matches!(again, Err(Error::InvalidArgument(_))));
        assert_eq!(slot.as_deref(), Some(&2));
    }

    #[test]
    fn test_samples_i16() {
        let mut bytes = Vec::new();
        for sample in [1i16, -2, i16::MAX] {
            bytes.extend_from_slice(&sample.to_ne_bytes());
        }
        bytes.push(0x7f);
        assert_eq!(samples_i16(&bytes), vec![1, -2, i16::MAX]);
        assert!(samples_i16(&[]).is_empty());
    }

    #[test]
    fn test_video_callbacks_round_trip_frames() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let context = Box::new(VideoContext::new(
            Box::new(|w: u32, h: u32| Some(BufferFormat::rv32(w / 2, h / 2))),
            Box::new(move |format: &BufferFormat, planes: &[&[u8]]| {
                sink.lock().push((format.width(), planes[0].len(), planes[0][0]));
            }),
        ));
        let mut opaque = &*context as *const VideoContext as *mut c_void;

        let mut chroma = [0 as c_char; 4];
        let (mut width, mut height) = (8 as c_uint, 4 as c_uint);
        let mut pitches = [0 as c_uint; PICTURE_PLANE_MAX];
        let mut lines = [0 as c_uint; PICTURE_PLANE_MAX];
        let planes = unsafe {
            video_setup(
                &mut opaque,
                chroma.as_mut_ptr(),
                &mut width,
                &mut height,
                pitches.as_mut_ptr(),
                lines.as_mut_ptr(),
            )
        };
        assert_eq!(planes, 1);
        assert_eq!(chroma.map(|c| c as u8), *b"RV32");
        assert_eq!((width, height), (4, 2));
        assert_eq!((pitches[0], lines[0]), (16, 2));

        let mut buffers = [ptr::null_mut::<c_void>(); PICTURE_PLANE_MAX];
        unsafe {
            video_lock(opaque, buffers.as_mut_ptr());
            *(buffers[0] as *mut u8) = 0xab;
            video_unlock(opaque, ptr::null_mut(), buffers.as_ptr());
            video_display(opaque, ptr::null_mut());
        }
        assert_eq!(*seen.lock(), vec![(4, 32, 0xab)]);

        unsafe {
            video_cleanup(opaque);
            video_display(opaque, ptr::null_mut());
        }
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_refused_video_format() {
        let context = Box::new(VideoContext::new(
            Box::new(|_: u32, _: u32| None),
            Box::new(|_: &BufferFormat, _: &[&[u8]]| {}),
        ));
        let mut opaque = &*context as *const VideoContext as *mut c_void;
        let mut chroma = [0 as c_char; 4];
        let (mut width, mut height) = (8 as c_uint, 4 as c_uint);
        let mut pitches = [0 as c_uint; PICTURE_PLANE_MAX];
        let mut lines = [0 as c_uint; PICTURE_PLANE_MAX];
        let planes = unsafe {
            video_setup(
                &mut opaque,
                chroma.as_mut_ptr(),
                &mut width,
                &mut height,
                pitches.as_mut_ptr(),
                lines.as_mut_ptr(),
            )
        };
        assert_eq!(planes, 0);
    }

    #[derive(Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl AudioCallback for Recorder {
        fn play(&mut self, samples: &[u8], count: u32, pts: i64) {
            self.calls
                .lock()
                .push(format!("play {} {count} {pts}", samples.len()));
        }

        fn pause(&mut self, pts: i64) {
            self.calls.lock().push(format!("pause {pts}"));
        }

        fn set_volume(&mut self, volume: f32, mute: bool) {
            self.calls.lock().push(format!("volume {volume} {mute}"));
        }
    }

    #[test]
    fn test_audio_callbacks_forward() {
        let recorder = Recorder::default();
        let calls = Arc::clone(&recorder.calls);
        let context = Box::new(AudioContext::new(
            AudioFormat::s16n(48000, 2),
            Box::new(recorder),
        ));
        let data = &*context as *const AudioContext as *mut c_void;
        let samples = [0u8; 40];
        unsafe {
            audio_play(data, samples.as_ptr() as *const c_void, 10, 1000);
            audio_pause(data, 2000);
            audio_resume(data, 3000);
            audio_set_volume(data, 0.5, true);
        }
        assert_eq!(
            *calls.lock(),
            vec!["play 40 10 1000", "pause 2000", "volume 0.5 true"]
        );
    }

    #[test]
    fn test_panicking_audio_callback_is_contained() {
        struct Panics;
        impl AudioCallback for Panics {
            fn play(&mut self, _: &[u8], _: u32, _: i64) {
                panic!("boom");
            }
        }
        let context = Box::new(AudioContext::new(AudioFormat::s16n(8000, 1), Box::new(Panics)));
        let data = &*context as *const AudioContext as *mut c_void;
        unsafe { audio_play(data, ptr::null(), 0, 0) };
    }
}
