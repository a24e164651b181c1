//! Media playback statistics

/// Counters libVLC keeps for a playing media
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaStatistics {
    // Input
    pub read_bytes: i32,
    pub input_bitrate: f32,

    // Demux
    pub demux_read_bytes: i32,
    pub demux_bitrate: f32,
    pub demux_corrupted: i32,
    pub demux_discontinuity: i32,

    // Decoders
    pub decoded_video: i32,
    pub decoded_audio: i32,

    // Video output
    pub displayed_pictures: i32,
    pub lost_pictures: i32,

    // Audio output
    pub played_audio_buffers: i32,
    pub lost_audio_buffers: i32,

    // Stream output
    pub sent_packets: i32,
    pub sent_bytes: i32,
    pub send_bitrate: f32,
}

impl MediaStatistics {
    /// Fraction of pictures dropped by the video output, 0.0 if none shown
    pub fn picture_loss(&self) -> f64 {
        let total = self.displayed_pictures as f64 + self.lost_pictures as f64;
        if total <= 0.0 {
            0.0
        } else {
            self.lost_pictures as f64 / total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_loss() {
        let stats = MediaStatistics {
            displayed_pictures: 90,
            lost_pictures: 10,
            ..Default::default()
        };
        assert!((stats.picture_loss() - 0.1).abs() < f64::EPSILON);
        assert_eq!(MediaStatistics::default().picture_loss(), 0.0);
    }
}
