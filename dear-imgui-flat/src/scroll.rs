//! Scrolling access for the current window
//!
//! Valid between a window begin/end pair. `center_ratio` runs 0.0 (top/left)
//! through 0.5 (center) to 1.0 (bottom/right).

use crate::sys;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetScrollX() -> f32 {
    unsafe { sys::igGetScrollX() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetScrollY() -> f32 {
    unsafe { sys::igGetScrollY() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollX(scroll_x: f32) {
    unsafe { sys::igSetScrollX_Float(scroll_x) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollY(scroll_y: f32) {
    unsafe { sys::igSetScrollY_Float(scroll_y) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetScrollMaxX() -> f32 {
    unsafe { sys::igGetScrollMaxX() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetScrollMaxY() -> f32 {
    unsafe { sys::igGetScrollMaxY() }
}

/// Centers the scroll on the last submitted item, horizontally.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollHereX(center_ratio: f32) {
    unsafe { sys::igSetScrollHereX(center_ratio) };
}

/// Centers the scroll on the last submitted item, vertically.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollHereY(center_ratio: f32) {
    unsafe { sys::igSetScrollHereY(center_ratio) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollFromPosX(local_x: f32, center_ratio: f32) {
    unsafe { sys::igSetScrollFromPosX_Float(local_x, center_ratio) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetScrollFromPosY(local_y: f32, center_ratio: f32) {
    unsafe { sys::igSetScrollFromPosY_Float(local_y, center_ratio) };
}
