//! List boxes
//!
//! A list box is a scrolling child region holding selectables. Call
//! [`imflat_EndListBox`] only when [`imflat_BeginListBox`] returned true.

use std::os::raw::c_char;

use crate::sys;
use crate::vec2;

/// Opens a list box of the given size. Zero width uses the item width,
/// zero height fits about 7 items.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginListBox(
    label: *const c_char,
    width: f32,
    height: f32,
) -> bool {
    unsafe { sys::igBeginListBox(label, vec2(width, height)) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_EndListBox() {
    unsafe { sys::igEndListBox() };
}
