//! Drag widgets: click-drag to adjust a value
//!
//! `min == max == 0` means unbounded. `format` may be null for the engine's
//! default. The bound value is only written when the widget changes it, and
//! the return value reports exactly that.

use std::os::raw::c_char;

use crate::sys;

/// Drag over a single float.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragFloat(
    label: *const c_char,
    v: *mut f32,
    speed: f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igDragScalar(
            label,
            sys::ImGuiDataType_Float,
            v.cast(),
            speed,
            (&min as *const f32).cast(),
            (&max as *const f32).cast(),
            format,
            flags,
        )
    }
}

/// Drag over a `float[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragFloat2(
    label: *const c_char,
    v: *mut f32,
    speed: f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragFloat2(label, v, speed, min, max, format, flags) }
}

/// Drag over a `float[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragFloat3(
    label: *const c_char,
    v: *mut f32,
    speed: f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragFloat3(label, v, speed, min, max, format, flags) }
}

/// Drag over a `float[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragFloat4(
    label: *const c_char,
    v: *mut f32,
    speed: f32,
    min: f32,
    max: f32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragFloat4(label, v, speed, min, max, format, flags) }
}

/// Drag over a min/max float pair kept ordered by the engine.
/// `format_max` may be null to reuse `format`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragFloatRange2(
    label: *const c_char,
    v_current_min: *mut f32,
    v_current_max: *mut f32,
    speed: f32,
    min: f32,
    max: f32,
    format: *const c_char,
    format_max: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igDragFloatRange2(
            label,
            v_current_min,
            v_current_max,
            speed,
            min,
            max,
            format,
            format_max,
            flags,
        )
    }
}

/// Drag over a single int.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragInt(
    label: *const c_char,
    v: *mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igDragScalar(
            label,
            sys::ImGuiDataType_S32,
            v.cast(),
            speed,
            (&min as *const i32).cast(),
            (&max as *const i32).cast(),
            format,
            flags,
        )
    }
}

/// Drag over an `int[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragInt2(
    label: *const c_char,
    v: *mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragInt2(label, v, speed, min, max, format, flags) }
}

/// Drag over an `int[3]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragInt3(
    label: *const c_char,
    v: *mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragInt3(label, v, speed, min, max, format, flags) }
}

/// Drag over an `int[4]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragInt4(
    label: *const c_char,
    v: *mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igDragInt4(label, v, speed, min, max, format, flags) }
}

/// Drag over a min/max int pair kept ordered by the engine.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragIntRange2(
    label: *const c_char,
    v_current_min: *mut i32,
    v_current_max: *mut i32,
    speed: f32,
    min: i32,
    max: i32,
    format: *const c_char,
    format_max: *const c_char,
    flags: i32,
) -> bool {
    unsafe {
        sys::igDragIntRange2(
            label,
            v_current_min,
            v_current_max,
            speed,
            min,
            max,
            format,
            format_max,
            flags,
        )
    }
}
