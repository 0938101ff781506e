//! Type-erased scalar widgets
//!
//! The drag/slider/input scalar entry points take an untyped value pointer
//! plus a [`ScalarKind`] tag describing its element type. The tag set is
//! closed: an unrecognized tag makes the call return false without touching
//! the engine or the value pointer.

use std::os::raw::{c_char, c_void};

use crate::sys;
use crate::vec2;

/// Element type tag for the type-erased scalar widgets.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    I8 = sys::ImGuiDataType_S8,
    U8 = sys::ImGuiDataType_U8,
    I16 = sys::ImGuiDataType_S16,
    U16 = sys::ImGuiDataType_U16,
    I32 = sys::ImGuiDataType_S32,
    U32 = sys::ImGuiDataType_U32,
    I64 = sys::ImGuiDataType_S64,
    U64 = sys::ImGuiDataType_U64,
    F32 = sys::ImGuiDataType_Float,
    F64 = sys::ImGuiDataType_Double,
}

impl ScalarKind {
    /// Validates a raw tag coming across the C boundary.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            x if x == sys::ImGuiDataType_S8 => ScalarKind::I8,
            x if x == sys::ImGuiDataType_U8 => ScalarKind::U8,
            x if x == sys::ImGuiDataType_S16 => ScalarKind::I16,
            x if x == sys::ImGuiDataType_U16 => ScalarKind::U16,
            x if x == sys::ImGuiDataType_S32 => ScalarKind::I32,
            x if x == sys::ImGuiDataType_U32 => ScalarKind::U32,
            x if x == sys::ImGuiDataType_S64 => ScalarKind::I64,
            x if x == sys::ImGuiDataType_U64 => ScalarKind::U64,
            x if x == sys::ImGuiDataType_Float => ScalarKind::F32,
            x if x == sys::ImGuiDataType_Double => ScalarKind::F64,
            _ => return None,
        })
    }
}

/// Drag widget over a single untyped scalar. `min`/`max`/`format` may be
/// null for unbounded/default. Returns false for an unknown `kind`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragScalar(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    speed: f32,
    p_min: *const c_void,
    p_max: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe { sys::igDragScalar(label, kind as i32, p_data, speed, p_min, p_max, format, flags) }
}

/// Drag widget over `components` contiguous scalars.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DragScalarN(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    components: i32,
    speed: f32,
    p_min: *const c_void,
    p_max: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe {
        sys::igDragScalarN(
            label,
            kind as i32,
            p_data,
            components,
            speed,
            p_min,
            p_max,
            format,
            flags,
        )
    }
}

/// Slider over a single untyped scalar. Unlike drags, `p_min`/`p_max` are
/// required by the engine.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderScalar(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    p_min: *const c_void,
    p_max: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe { sys::igSliderScalar(label, kind as i32, p_data, p_min, p_max, format, flags) }
}

/// Slider over `components` contiguous scalars.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SliderScalarN(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    components: i32,
    p_min: *const c_void,
    p_max: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe {
        sys::igSliderScalarN(label, kind as i32, p_data, components, p_min, p_max, format, flags)
    }
}

/// Vertical slider of the given size over a single untyped scalar.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_VSliderScalar(
    label: *const c_char,
    width: f32,
    height: f32,
    kind: i32,
    p_data: *mut c_void,
    p_min: *const c_void,
    p_max: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe {
        sys::igVSliderScalar(
            label,
            vec2(width, height),
            kind as i32,
            p_data,
            p_min,
            p_max,
            format,
            flags,
        )
    }
}

/// Keyboard-input box over a single untyped scalar. `p_step`/`p_step_fast`
/// may be null to hide the +/- buttons.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputScalar(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    p_step: *const c_void,
    p_step_fast: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe { sys::igInputScalar(label, kind as i32, p_data, p_step, p_step_fast, format, flags) }
}

/// Keyboard-input boxes over `components` contiguous scalars.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_InputScalarN(
    label: *const c_char,
    kind: i32,
    p_data: *mut c_void,
    components: i32,
    p_step: *const c_void,
    p_step_fast: *const c_void,
    format: *const c_char,
    flags: i32,
) -> bool {
    let Some(kind) = ScalarKind::from_raw(kind) else {
        return false;
    };
    unsafe {
        sys::igInputScalarN(
            label,
            kind as i32,
            p_data,
            components,
            p_step,
            p_step_fast,
            format,
            flags,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kind_round_trips_raw_tags() {
        for kind in [
            ScalarKind::I8,
            ScalarKind::U8,
            ScalarKind::I16,
            ScalarKind::U16,
            ScalarKind::I32,
            ScalarKind::U32,
            ScalarKind::I64,
            ScalarKind::U64,
            ScalarKind::F32,
            ScalarKind::F64,
        ] {
            assert_eq!(ScalarKind::from_raw(kind as i32), Some(kind));
        }
    }

    #[test]
    fn scalar_kind_rejects_unknown_tags() {
        assert_eq!(ScalarKind::from_raw(-1), None);
        assert_eq!(ScalarKind::from_raw(10_000), None);
    }
}
