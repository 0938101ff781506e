//! IO configuration and queries
//!
//! All operations touch the current context's `ImGuiIO` block. Setters are
//! meant for host platform glue (display size, framebuffer scale, delta
//! time); the want-capture getters tell the host whether the engine wants
//! the next mouse/keyboard event for itself.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use std::sync::Mutex;

use bitflags::bitflags;

use crate::sys;
use crate::{flat_debug, flat_warn};

bitflags! {
    /// Configuration flags
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfigFlags: i32 {
        /// Master keyboard navigation enable flag.
        const NAV_ENABLE_KEYBOARD = sys::ImGuiConfigFlags_NavEnableKeyboard;
        /// Master gamepad navigation enable flag.
        const NAV_ENABLE_GAMEPAD = sys::ImGuiConfigFlags_NavEnableGamepad;
        /// Instruction to clear mouse position/buttons at frame start.
        const NO_MOUSE = sys::ImGuiConfigFlags_NoMouse;
        /// Instruction backend to not alter mouse cursor shape and visibility.
        const NO_MOUSE_CURSOR_CHANGE = sys::ImGuiConfigFlags_NoMouseCursorChange;
        /// Application is SRGB-aware.
        const IS_SRGB = sys::ImGuiConfigFlags_IsSRGB;
        /// Application is using a touch screen instead of a mouse.
        const IS_TOUCH_SCREEN = sys::ImGuiConfigFlags_IsTouchScreen;
    }
}

// The engine keeps the ini filename pointer, so the string must outlive any
// use of it. One process-wide slot, refreshed on each set call.
static INI_FILENAME: Mutex<Option<std::ffi::CString>> = Mutex::new(None);

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoGetWantCaptureMouse() -> bool {
    unsafe { (*sys::igGetIO_Nil()).WantCaptureMouse }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoGetWantCaptureKeyboard() -> bool {
    unsafe { (*sys::igGetIO_Nil()).WantCaptureKeyboard }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoGetWantTextInput() -> bool {
    unsafe { (*sys::igGetIO_Nil()).WantTextInput }
}

/// Sets the ini filename for settings persistence. Null disables persistence.
///
/// The string is copied; the caller's buffer may be freed after the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoSetIniFilename(filename: *const c_char) {
    let owned = if filename.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(filename) }.to_owned())
    };
    // A poisoned slot still holds a valid CString, take it rather than panic
    // across the C boundary.
    let mut slot = INI_FILENAME
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = owned;
    let ptr = slot.as_ref().map(|s| s.as_ptr()).unwrap_or(ptr::null());
    unsafe {
        (*sys::igGetIO_Nil()).IniFilename = ptr;
    }
    flat_debug!("ini filename updated");
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoSetDisplaySize(width: f32, height: f32) {
    unsafe {
        (*sys::igGetIO_Nil()).DisplaySize = crate::vec2(width, height);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoSetDisplayFramebufferScale(sx: f32, sy: f32) {
    unsafe {
        (*sys::igGetIO_Nil()).DisplayFramebufferScale = crate::vec2(sx, sy);
    }
}

/// Sets the time elapsed since the last frame, in seconds.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoSetDeltaTime(delta_time: f32) {
    unsafe {
        (*sys::igGetIO_Nil()).DeltaTime = delta_time;
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoSetConfigFlags(flags: i32) {
    unsafe {
        (*sys::igGetIO_Nil()).ConfigFlags = flags;
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoGetConfigFlags() -> i32 {
    unsafe { (*sys::igGetIO_Nil()).ConfigFlags }
}

/// Loads a TTF/OTF font from disk into the current atlas.
///
/// Returns null on failure (missing file, bad data). The returned font is
/// owned by the atlas.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoAddFontFromFile(
    filename: *const c_char,
    size_pixels: f32,
) -> *mut sys::ImFont {
    let font = unsafe {
        let fonts = (*sys::igGetIO_Nil()).Fonts;
        sys::ImFontAtlas_AddFontFromFileTTF(
            fonts,
            filename,
            size_pixels,
            ptr::null(),
            ptr::null(),
        )
    };
    if font.is_null() {
        flat_warn!("font load failed");
    }
    font
}

/// Prepares the current atlas so frames can run without a render backend.
///
/// Adds the engine's default font if the atlas is empty and opts into the
/// dynamic texture path, which lets the next `NewFrame` build the atlas
/// itself. Calling this again is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IoFontsBuild() {
    unsafe {
        let io = sys::igGetIO_Nil();
        let fonts = (*io).Fonts;
        if (*fonts).Fonts.Size == 0 {
            sys::ImFontAtlas_AddFontDefault(fonts, ptr::null());
        }
        (*io).BackendFlags |= sys::ImGuiBackendFlags_RendererHasTextures;
    }
}
