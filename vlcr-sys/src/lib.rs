//! libVLC C API bindings
//!
//! Manual declarations of the libVLC 3.0 public API. The shared library is
//! opened at runtime with `libloading`, so building this crate needs no VLC
//! headers or import libraries; a missing libVLC is reported when the
//! function table is first requested.

pub mod loader;
pub mod types;

mod api;

pub use api::NativeApi;
pub use loader::{api, is_loaded, load};

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};
use std::path::PathBuf;

/// Result type for vlcr-sys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for vlcr-sys operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load libVLC from {path}: {source}")]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },

    #[error("Unable to locate libVLC. Set LIBVLC_PATH or install VLC. Tried:\n{0}")]
    LibraryNotFound(String),

    #[error("libVLC does not export {0}")]
    MissingSymbol(&'static str),
}

/// Copies a borrowed C string owned by libVLC.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string.
pub unsafe fn copy_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Copies a C string the caller owns and frees it with `libvlc_free`.
///
/// # Safety
/// `ptr` must be NULL or a string allocated by libVLC.
pub unsafe fn take_string(api: &NativeApi, ptr: *mut c_char) -> Option<String> {
    let value = copy_string(ptr);
    if !ptr.is_null() {
        let _ = api.libvlc_free(ptr as *mut c_void);
    }
    value
}

/// Reads the last error message raised by libVLC on this thread.
pub fn last_error(api: &NativeApi) -> Option<String> {
    unsafe {
        let ptr = api.libvlc_errmsg().ok()?;
        copy_string(ptr).filter(|msg| !msg.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_copy_string_null() {
        assert_eq!(unsafe { copy_string(ptr::null()) }, None);
    }

    #[test]
    fn test_copy_string_lossy() {
        let raw = CString::new(vec![b'a', 0xff, b'b']).unwrap();
        let copied = unsafe { copy_string(raw.as_ptr()) }.unwrap();
        assert_eq!(copied, "a\u{fffd}b");
    }
}
