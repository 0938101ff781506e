//! Keyboard input boxes for numeric values
//!
//! `step` of 0 hides the +/- buttons. Array variants route through the
//! engine's scalar input with the matching data-type tag.

use std::os::raw::{c_char, c_void};
use std::ptr;

use bitflags::bitflags;

use crate::sys;

bitflags! {
    /// Flags shared by the input widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputTextFlags: i32 {
        /// No flags
        const NONE = sys::ImGuiInputTextFlags_None;
        /// Allow 0123456789.+-*/
        const CHARS_DECIMAL = sys::ImGuiInputTextFlags_CharsDecimal;
        /// Allow 0123456789ABCDEFabcdef
        const CHARS_HEXADECIMAL = sys::ImGuiInputTextFlags_CharsHexadecimal;
        /// Turn a..z into A..Z
        const CHARS_UPPERCASE = sys::ImGuiInputTextFlags_CharsUppercase;
        /// Filter out spaces, tabs
        const CHARS_NO_BLANK = sys::ImGuiInputTextFlags_CharsNoBlank;
        /// Select entire text when first taking mouse focus
        const AUTO_SELECT_ALL = sys::ImGuiInputTextFlags_AutoSelectAll;
        /// Return 'true' when Enter is pressed (as opposed to every time the value was modified)
        const ENTER_RETURNS_TRUE = sys::ImGuiInputTextFlags_EnterReturnsTrue;
        /// Overwrite mode
        const ALWAYS_OVERWRITE = sys::ImGuiInputTextFlags_AlwaysOverwrite;
        /// Read-only mode
        const READ_ONLY = sys::ImGuiInputTextFlags_ReadOnly;
        /// Password mode, display all characters as '*'
        const PASSWORD = sys::ImGuiInputTextFlags_Password;
        /// Disable undo/redo
        const NO_UNDO_REDO = sys::ImGuiInputTextFlags_NoUndoRedo;
        /// Allow 0123456789.+-*/eE (scientific notation input)
        const CHARS_SCIENTIFIC = sys::ImGuiInputTextFlags_CharsScientific;
    }
}

unsafe fn input_f32_n(
    label: *const c_char,
    v: *mut f32,
    components: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igInputScalarN(
            label,
            sys::ImGuiDataType_Float,
            v.cast(),
            components,
            ptr::null(),
            ptr::null(),
            format,
            flags,
        )
    }
}

unsafe fn input_i32_n(label: *const c_char, v: *mut i32, components: i32, flags: i32) -> bool {
    unsafe {
        sys::igInputScalarN(
            label,
            sys::ImGuiDataType_S32,
            v.cast(),
            components,
            ptr::null::<c_void>(),
            ptr::null(),
            ptr::null(),
            flags,
        )
    }
}

/// Input box for a single float. `format` may be null for `%.3f`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputFloat(
    label: *const c_char,
    v: *mut f32,
    step: f32,
    step_fast: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igInputFloat(label, v, step, step_fast, format, flags) }
}

/// Input boxes for a `float[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputFloat2(
    label: *const c_char,
    v: *mut f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { input_f32_n(label, v, 2, format, flags) }
}

/// Input boxes for a `float[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputFloat3(
    label: *const c_char,
    v: *mut f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { input_f32_n(label, v, 3, format, flags) }
}

/// Input boxes for a `float[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputFloat4(
    label: *const c_char,
    v: *mut f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { input_f32_n(label, v, 4, format, flags) }
}

/// Input box for a single int.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputInt(
    label: *const c_char,
    v: *mut i32,
    step: i32,
    step_fast: i32,
    flags: i32,
) -> bool {
    unsafe { sys::igInputInt(label, v, step, step_fast, flags) }
}

/// Input boxes for an `int[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputInt2(
    label: *const c_char,
    v: *mut i32,
    flags: i32,
) -> bool {
    unsafe { input_i32_n(label, v, 2, flags) }
}

/// Input boxes for an `int[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputInt3(
    label: *const c_char,
    v: *mut i32,
    flags: i32,
) -> bool {
    unsafe { input_i32_n(label, v, 3, flags) }
}

/// Input boxes for an `int[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputInt4(
    label: *const c_char,
    v: *mut i32,
    flags: i32,
) -> bool {
    unsafe { input_i32_n(label, v, 4, flags) }
}

/// Input box for a single double. `format` may be null for `%.6f`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputDouble(
    label: *const c_char,
    v: *mut f64,
    step: f64,
    step_fast: f64,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igInputDouble(label, v, step, step_fast, format, flags) }
}
