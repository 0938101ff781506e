//! Selectable items (list rows, menu-like entries)

use std::os::raw::c_char;

use bitflags::bitflags;

use crate::sys;
use crate::vec2;

bitflags! {
    /// Flags for selectables
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SelectableFlags: i32 {
        /// Clicking this doesn't close the parent popup window
        const NO_AUTO_CLOSE_POPUPS = sys::ImGuiSelectableFlags_NoAutoClosePopups;
        /// Selectable frame can span all columns (text will still fit in current column)
        const SPAN_ALL_COLUMNS = sys::ImGuiSelectableFlags_SpanAllColumns;
        /// Generate press events on double clicks too
        const ALLOW_DOUBLE_CLICK = sys::ImGuiSelectableFlags_AllowDoubleClick;
        /// Cannot be selected, display greyed out text
        const DISABLED = sys::ImGuiSelectableFlags_Disabled;
        /// Hit testing to allow subsequent widgets to overlap this one
        const ALLOW_OVERLAP = sys::ImGuiSelectableFlags_AllowOverlap;
    }
}

/// Selectable item drawn highlighted when `selected`. Zero size auto-fits.
/// Returns true when clicked.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Selectable(
    label: *const c_char,
    selected: bool,
    flags: i32,
    width: f32,
    height: f32,
) -> bool {
    unsafe { sys::igSelectable_Bool(label, selected, flags, vec2(width, height)) }
}

/// Selectable bound to `*p_selected`; a click toggles the stored state.
/// Returns true when clicked.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SelectableBoolPtr(
    label: *const c_char,
    p_selected: *mut bool,
    flags: i32,
    width: f32,
    height: f32,
) -> bool {
    unsafe { sys::igSelectable_BoolPtr(label, p_selected, flags, vec2(width, height)) }
}
