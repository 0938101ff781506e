//! Combo boxes
//!
//! `imflat_BeginCombo` opens the preview button and, when it returns true,
//! the popup; items go in as selectables and the pairing `imflat_EndCombo`
//! is only called when `BeginCombo` returned true. `imflat_Combo` is the
//! one-call variant over a double-null-terminated item list.

use std::os::raw::c_char;

use bitflags::bitflags;

use crate::sys;

bitflags! {
    /// Flags for combo box widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ComboFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Align the popup toward the left by default
        const POPUP_ALIGN_LEFT = sys::ImGuiComboFlags_PopupAlignLeft;
        /// Max ~4 items visible
        const HEIGHT_SMALL = sys::ImGuiComboFlags_HeightSmall;
        /// Max ~8 items visible (default)
        const HEIGHT_REGULAR = sys::ImGuiComboFlags_HeightRegular;
        /// Max ~20 items visible
        const HEIGHT_LARGE = sys::ImGuiComboFlags_HeightLarge;
        /// As many fitting items as possible
        const HEIGHT_LARGEST = sys::ImGuiComboFlags_HeightLargest;
        /// Display on the preview box without the square arrow button
        const NO_ARROW_BUTTON = sys::ImGuiComboFlags_NoArrowButton;
        /// Display only a square arrow button
        const NO_PREVIEW = sys::ImGuiComboFlags_NoPreview;
        /// Width dynamically calculated from preview contents
        const WIDTH_FIT_PREVIEW = sys::ImGuiComboFlags_WidthFitPreview;
    }
}

/// Opens a combo. `preview_value` may be null for no preview text. Call
/// [`imflat_EndCombo`] only when this returns true.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginCombo(
    label: *const c_char,
    preview_value: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igBeginCombo(label, preview_value, flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_EndCombo() {
    unsafe { sys::igEndCombo() };
}

/// One-call combo over `items_separated_by_zeros`, a list like
/// `"One\0Two\0Three\0\0"`. `*current_item` holds the selected index and is
/// updated on selection; returns true when it changed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Combo(
    label: *const c_char,
    current_item: *mut i32,
    items_separated_by_zeros: *const c_char,
    popup_max_height_in_items: i32,
) -> bool {
    unsafe {
        sys::igCombo_Str(
            label,
            current_item,
            items_separated_by_zeros,
            popup_max_height_in_items,
        )
    }
}
