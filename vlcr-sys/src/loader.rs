//! Locating and loading the libVLC shared library

use crate::{Error, NativeApi, Result};
use libloading::Library;
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit libVLC shared library.
pub const LIBVLC_PATH_ENV: &str = "LIBVLC_PATH";

static LIBVLC: OnceCell<NativeApi> = OnceCell::new();

/// Loads libVLC once for the process and returns its function table.
///
/// `path` is only honoured by the first successful call; later calls return
/// the table that is already loaded.
pub fn load(path: Option<&Path>) -> Result<&'static NativeApi> {
    LIBVLC.get_or_try_init(|| {
        let library = unsafe { open_library(path)? };
        let api = unsafe { NativeApi::resolve(library) };
        let missing = api.missing_symbols();
        if !missing.is_empty() {
            tracing::debug!(count = missing.len(), symbols = ?missing, "libVLC lacks some entry points");
        }
        Ok(api)
    })
}

/// Returns the loaded function table, loading from the default locations on
/// first use.
pub fn api() -> Result<&'static NativeApi> {
    match LIBVLC.get() {
        Some(api) => Ok(api),
        None => load(None),
    }
}

/// Whether libVLC has already been loaded in this process.
pub fn is_loaded() -> bool {
    LIBVLC.get().is_some()
}

unsafe fn open_library(path: Option<&Path>) -> Result<Library> {
    if let Some(path) = path {
        tracing::info!(path = %path.display(), "Loading libVLC");
        return Library::new(path).map_err(|e| Error::Load {
            path: path.to_path_buf(),
            source: e,
        });
    }

    if let Some(path) = env::var_os(LIBVLC_PATH_ENV) {
        let path = PathBuf::from(path);
        tracing::info!(path = %path.display(), "Loading libVLC from {}", LIBVLC_PATH_ENV);
        return Library::new(&path).map_err(|e| Error::Load { path, source: e });
    }

    let mut errors = Vec::new();
    for candidate in default_candidates() {
        match Library::new(&candidate) {
            Ok(lib) => {
                tracing::info!(path = %candidate.display(), "Loaded libVLC");
                return Ok(lib);
            }
            Err(err) => errors.push(format!("{}: {err}", candidate.display())),
        }
    }

    Err(Error::LibraryNotFound(errors.join("\n")))
}

/// Platform specific names and install locations probed for libVLC.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from("libvlc.dll"));
        paths.push(PathBuf::from("vlc\\libvlc.dll"));
        if let Some(pf) = env::var_os("ProgramFiles") {
            paths.push(PathBuf::from(pf).join("VideoLAN\\VLC\\libvlc.dll"));
        }
        if let Some(pf86) = env::var_os("ProgramFiles(x86)") {
            paths.push(PathBuf::from(pf86).join("VideoLAN\\VLC\\libvlc.dll"));
        }
    }

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("libvlc.so.5"));
        paths.push(PathBuf::from("libvlc.so"));
        paths.push(PathBuf::from("/usr/lib/x86_64-linux-gnu/libvlc.so.5"));
        paths.push(PathBuf::from("/usr/lib64/libvlc.so.5"));
        paths.push(PathBuf::from("/usr/local/lib/libvlc.so.5"));
        paths.push(PathBuf::from("/snap/vlc/current/usr/lib/libvlc.so.5"));
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("libvlc.dylib"));
        paths.push(PathBuf::from(
            "/Applications/VLC.app/Contents/MacOS/lib/libvlc.dylib",
        ));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_name_libvlc() {
        let candidates = default_candidates();
        for candidate in &candidates {
            let name = candidate.file_name().unwrap().to_string_lossy();
            assert!(name.contains("libvlc"), "unexpected candidate {name}");
        }
    }

    #[test]
    fn test_explicit_missing_path_reports_load_error() {
        let missing = Path::new("/nonexistent/dir/libvlc-missing.so");
        let err = unsafe { open_library(Some(missing)) }.unwrap_err();
        match err {
            Error::Load { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
