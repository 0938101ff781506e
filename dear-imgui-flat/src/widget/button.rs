//! Buttons, checkboxes, radio buttons and progress bars

use std::os::raw::c_char;

use bitflags::bitflags;

use crate::sys;
use crate::vec2;

bitflags! {
    /// Flags for invisible buttons
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonFlags: i32 {
        /// No flags
        const NONE = 0;
        /// React on left mouse button
        const MOUSE_BUTTON_LEFT = sys::ImGuiButtonFlags_MouseButtonLeft;
        /// React on right mouse button
        const MOUSE_BUTTON_RIGHT = sys::ImGuiButtonFlags_MouseButtonRight;
        /// React on middle mouse button
        const MOUSE_BUTTON_MIDDLE = sys::ImGuiButtonFlags_MouseButtonMiddle;
    }
}

/// Cardinal direction for arrow buttons
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i32)]
pub enum Direction {
    None = sys::ImGuiDir_None,
    Left = sys::ImGuiDir_Left,
    Right = sys::ImGuiDir_Right,
    Up = sys::ImGuiDir_Up,
    Down = sys::ImGuiDir_Down,
}

/// Push button of the given size. Zero size auto-fits the label.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Button(label: *const c_char, width: f32, height: f32) -> bool {
    unsafe { sys::igButton(label, vec2(width, height)) }
}

/// Button with no frame padding, for embedding in text.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SmallButton(label: *const c_char) -> bool {
    unsafe { sys::igSmallButton(label) }
}

/// Invisible hit-test area, used to build custom behaviors with the item
/// query functions. Size must be non-zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InvisibleButton(
    str_id: *const c_char,
    width: f32,
    height: f32,
    flags: i32,
) -> bool {
    unsafe { sys::igInvisibleButton(str_id, vec2(width, height), flags) }
}

/// Square button with an arrow glyph. `dir` is an `ImGuiDir` value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ArrowButton(str_id: *const c_char, dir: i32) -> bool {
    unsafe { sys::igArrowButton(str_id, dir) }
}

/// Bullet glyph, vertically aligned to leave room for a same-line item.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Bullet() {
    unsafe { sys::igBullet() };
}

/// Radio button drawn active when `active` is true. Returns true on click.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_RadioButton(label: *const c_char, active: bool) -> bool {
    unsafe { sys::igRadioButton_Bool(label, active) }
}

/// Radio button bound to an integer: drawn active when `*v == v_button`,
/// and stores `v_button` into `*v` on click.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_RadioButtonIntPtr(
    label: *const c_char,
    v: *mut i32,
    v_button: i32,
) -> bool {
    unsafe { sys::igRadioButton_IntPtr(label, v, v_button) }
}

/// Checkbox bound to `*v`. Returns true when toggled this frame.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Checkbox(label: *const c_char, v: *mut bool) -> bool {
    unsafe { sys::igCheckbox(label, v) }
}

/// Checkbox bound to the bits `flags_value` inside `*flags`. Checked when
/// all those bits are set; toggling sets or clears them together.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_CheckboxFlags(
    label: *const c_char,
    flags: *mut u32,
    flags_value: u32,
) -> bool {
    unsafe { sys::igCheckboxFlags_UintPtr(label, flags, flags_value) }
}

/// Progress bar filled to `fraction` (0.0 to 1.0). `overlay` may be null
/// for the default percentage text.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ProgressBar(
    fraction: f32,
    width: f32,
    height: f32,
    overlay: *const c_char,
) {
    unsafe { sys::igProgressBar(fraction, vec2(width, height), overlay) };
}
