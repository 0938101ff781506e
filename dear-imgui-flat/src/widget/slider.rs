//! Sliders: bounded value adjustment
//!
//! Typed entry points route through the engine's scalar slider with the
//! matching data-type tag, so all of them share clamp/format behavior.

use std::os::raw::{c_char, c_void};

use bitflags::bitflags;

use crate::sys;
use crate::vec2;

bitflags! {
    /// Flags for slider widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Clamp value to min/max bounds when input manually with CTRL+Click
        const ALWAYS_CLAMP = sys::ImGuiSliderFlags_AlwaysClamp;
        /// Make the widget logarithmic (linear otherwise)
        const LOGARITHMIC = sys::ImGuiSliderFlags_Logarithmic;
        /// Disable rounding underlying value to match precision of the display format string
        const NO_ROUND_TO_FORMAT = sys::ImGuiSliderFlags_NoRoundToFormat;
        /// Disable CTRL+Click or Enter key allowing to input text directly into the widget
        const NO_INPUT = sys::ImGuiSliderFlags_NoInput;
    }
}

unsafe fn slider_f32(
    label: *const c_char,
    v: *mut f32,
    components: i32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    let min_ptr = &min as *const f32 as *const c_void;
    let max_ptr = &max as *const f32 as *const c_void;
    unsafe {
        if components == 1 {
            sys::igSliderScalar(
                label,
                sys::ImGuiDataType_Float,
                v.cast(),
                min_ptr,
                max_ptr,
                format,
                flags,
            )
        } else {
            sys::igSliderScalarN(
                label,
                sys::ImGuiDataType_Float,
                v.cast(),
                components,
                min_ptr,
                max_ptr,
                format,
                flags,
            )
        }
    }
}

unsafe fn slider_i32(
    label: *const c_char,
    v: *mut i32,
    components: i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    let min_ptr = &min as *const i32 as *const c_void;
    let max_ptr = &max as *const i32 as *const c_void;
    unsafe {
        if components == 1 {
            sys::igSliderScalar(
                label,
                sys::ImGuiDataType_S32,
                v.cast(),
                min_ptr,
                max_ptr,
                format,
                flags,
            )
        } else {
            sys::igSliderScalarN(
                label,
                sys::ImGuiDataType_S32,
                v.cast(),
                components,
                min_ptr,
                max_ptr,
                format,
                flags,
            )
        }
    }
}

/// Slider over a single float.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderFloat(
    label: *const c_char,
    v: *mut f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_f32(label, v, 1, min, max, format, flags) }
}

/// Slider over a `float[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderFloat2(
    label: *const c_char,
    v: *mut f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_f32(label, v, 2, min, max, format, flags) }
}

/// Slider over a `float[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderFloat3(
    label: *const c_char,
    v: *mut f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_f32(label, v, 3, min, max, format, flags) }
}

/// Slider over a `float[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderFloat4(
    label: *const c_char,
    v: *mut f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_f32(label, v, 4, min, max, format, flags) }
}

/// Slider over a single int.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderInt(
    label: *const c_char,
    v: *mut i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_i32(label, v, 1, min, max, format, flags) }
}

/// Slider over an `int[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderInt2(
    label: *const c_char,
    v: *mut i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_i32(label, v, 2, min, max, format, flags) }
}

/// Slider over an `int[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderInt3(
    label: *const c_char,
    v: *mut i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_i32(label, v, 3, min, max, format, flags) }
}

/// Slider over an `int[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderInt4(
    label: *const c_char,
    v: *mut i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { slider_i32(label, v, 4, min, max, format, flags) }
}

/// Slider over an angle stored in radians, displayed in degrees.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderAngle(
    label: *const c_char,
    v_rad: *mut f32,
    degrees_min: f32,
    degrees_max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igSliderAngle(label, v_rad, degrees_min, degrees_max, format, flags) }
}

/// Vertical slider of the given size over a single float.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_VSliderFloat(
    label: *const c_char,
    width: f32,
    height: f32,
    v: *mut f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igVSliderScalar(
            label,
            vec2(width, height),
            sys::ImGuiDataType_Float,
            v.cast(),
            (&min as *const f32).cast(),
            (&max as *const f32).cast(),
            format,
            flags,
        )
    }
}

/// Vertical slider of the given size over a single int.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_VSliderInt(
    label: *const c_char,
    width: f32,
    height: f32,
    v: *mut i32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igVSliderScalar(
            label,
            vec2(width, height),
            sys::ImGuiDataType_S32,
            v.cast(),
            (&min as *const i32).cast(),
            (&max as *const i32).cast(),
            format,
            flags,
        )
    }
}
