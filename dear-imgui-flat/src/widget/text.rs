//! Text display
//!
//! All entry points take pre-formatted, null-terminated strings; any
//! formatting happens on the caller's side. Strings containing `%` are safe
//! here: they are routed through the engine's unformatted path or passed as
//! an argument to a literal `"%s"` format.

use std::os::raw::c_char;

use crate::load4;
use crate::sys;

pub(crate) const FMT_S: &[u8; 3] = b"%s\0";

unsafe fn text_unformatted(text: *const c_char) {
    unsafe {
        let end = text.add(std::ffi::CStr::from_ptr(text).count_bytes());
        sys::igTextUnformatted(text, end);
    }
}

/// Plain text.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Text(text: *const c_char) {
    unsafe { text_unformatted(text) };
}

/// Text in the given `float[4]` RGBA color.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TextColored(color: *const f32, text: *const c_char) {
    unsafe { sys::igTextColored(load4(color), FMT_S.as_ptr() as *const c_char, text) };
}

/// Text in the style's disabled color.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TextDisabled(text: *const c_char) {
    unsafe { sys::igTextDisabled(FMT_S.as_ptr() as *const c_char, text) };
}

/// Text wrapped at the current wrap position (end of window by default).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TextWrapped(text: *const c_char) {
    unsafe { sys::igTextWrapped(FMT_S.as_ptr() as *const c_char, text) };
}

/// Text preceded by a bullet glyph.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BulletText(text: *const c_char) {
    unsafe { sys::igBulletText(FMT_S.as_ptr() as *const c_char, text) };
}

/// Value text followed by a right-aligned label, the layout used for
/// name/value pairs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_LabelText(label: *const c_char, text: *const c_char) {
    unsafe { sys::igLabelText(label, FMT_S.as_ptr() as *const c_char, text) };
}

/// Hyperlink-style text button. Returns true when clicked.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TextLink(label: *const c_char) -> bool {
    unsafe { sys::igTextLink(label) }
}
