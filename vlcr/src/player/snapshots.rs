use super::MediaPlayer;
use crate::{check, cstring, Error, Result};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static SNAPSHOT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Video snapshots. A width or height of 0 keeps the source aspect ratio;
/// both 0 use the source size.
pub struct SnapshotsApi<'a> {
    player: &'a MediaPlayer,
}

impl<'a> SnapshotsApi<'a> {
    pub(super) fn new(player: &'a MediaPlayer) -> Self {
        Self { player }
    }

    /// Writes a snapshot of the first video output to `path`. The format
    /// follows the extension (png, jpg, tiff).
    pub fn save(&self, path: &Path, width: u32, height: u32) -> Result<()> {
        let api = self.player.api();
        let file = path
            .to_str()
            .ok_or_else(|| Error::InvalidArgument(format!("path {}", path.display())))?;
        let file = cstring(file)?;
        let code = unsafe {
            api.libvlc_video_take_snapshot(self.player.raw(), 0, file.as_ptr(), width, height)?
        };
        check(api, code, "libvlc_video_take_snapshot")
    }

    /// Takes a snapshot and decodes it. The intermediate file is always
    /// removed.
    pub fn get(&self, width: u32, height: u32) -> Result<RgbaImage> {
        let path = temp_snapshot_path();
        let result = self
            .save(&path, width, height)
            .and_then(|()| Ok(image::open(&path)?.to_rgba8()));
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove snapshot");
            }
        }
        result
    }
}

fn temp_snapshot_path() -> PathBuf {
    let n = SNAPSHOT_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("vlcr-snapshot-{}-{n}.png", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_snapshot_paths_are_unique_pngs() {
        let a = temp_snapshot_path();
        let b = temp_snapshot_path();
        assert_ne!(a, b);
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("png"));
        assert!(a.starts_with(std::env::temp_dir()));
    }
}
