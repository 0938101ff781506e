//! Color editors, pickers and swatches
//!
//! Colors cross the boundary as `float[3]` or `float[4]` arrays the engine
//! edits in place.

use std::os::raw::c_char;

use bitflags::bitflags;

use crate::sys;
use crate::{load4, vec2};

bitflags! {
    /// Flags for the color edit/picker/button widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ColorEditFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Ignore the alpha component (only read 3 components from the input pointer)
        const NO_ALPHA = sys::ImGuiColorEditFlags_NoAlpha;
        /// ColorEdit: disable picker when clicking on color square
        const NO_PICKER = sys::ImGuiColorEditFlags_NoPicker;
        /// ColorEdit: disable toggling options menu when right-clicking on inputs/small preview
        const NO_OPTIONS = sys::ImGuiColorEditFlags_NoOptions;
        /// Disable color square preview next to the inputs
        const NO_SMALL_PREVIEW = sys::ImGuiColorEditFlags_NoSmallPreview;
        /// Disable inputs sliders/text widgets
        const NO_INPUTS = sys::ImGuiColorEditFlags_NoInputs;
        /// Disable tooltip when hovering the preview
        const NO_TOOLTIP = sys::ImGuiColorEditFlags_NoTooltip;
        /// Disable display of inline text label
        const NO_LABEL = sys::ImGuiColorEditFlags_NoLabel;
        /// ColorPicker: disable bigger color preview on right side of the picker
        const NO_SIDE_PREVIEW = sys::ImGuiColorEditFlags_NoSidePreview;
        /// Disable drag and drop
        const NO_DRAG_DROP = sys::ImGuiColorEditFlags_NoDragDrop;
        /// ColorButton: disable border (which is enforced by default)
        const NO_BORDER = sys::ImGuiColorEditFlags_NoBorder;
        /// Show vertical alpha bar/gradient in picker
        const ALPHA_BAR = sys::ImGuiColorEditFlags_AlphaBar;
        /// Display preview as a transparent color over a checkerboard
        const ALPHA_PREVIEW = sys::ImGuiColorEditFlags_AlphaNoBg;
        /// Display half opaque / half checkerboard
        const ALPHA_PREVIEW_HALF = sys::ImGuiColorEditFlags_AlphaPreviewHalf;
        /// Disable 0.0..1.0 limits in RGBA edition
        const HDR = sys::ImGuiColorEditFlags_HDR;
        /// Override display type: RGB
        const DISPLAY_RGB = sys::ImGuiColorEditFlags_DisplayRGB;
        /// Override display type: HSV
        const DISPLAY_HSV = sys::ImGuiColorEditFlags_DisplayHSV;
        /// Override display type: Hex
        const DISPLAY_HEX = sys::ImGuiColorEditFlags_DisplayHex;
        /// Display values formatted as 0..255
        const UINT8 = sys::ImGuiColorEditFlags_Uint8;
        /// Display values formatted as 0.0..1.0 floats
        const FLOAT = sys::ImGuiColorEditFlags_Float;
        /// ColorPicker: bar for Hue, rectangle for Sat/Value
        const PICKER_HUE_BAR = sys::ImGuiColorEditFlags_PickerHueBar;
        /// ColorPicker: wheel for Hue, triangle for Sat/Value
        const PICKER_HUE_WHEEL = sys::ImGuiColorEditFlags_PickerHueWheel;
        /// Input and output data in RGB format
        const INPUT_RGB = sys::ImGuiColorEditFlags_InputRGB;
        /// Input and output data in HSV format
        const INPUT_HSV = sys::ImGuiColorEditFlags_InputHSV;
    }
}

/// Editor for a `float[3]` RGB color.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ColorEdit3(
    label: *const c_char,
    col: *mut f32,
    flags: i32,
) -> bool {
    unsafe { sys::igColorEdit3(label, col, flags) }
}

/// Editor for a `float[4]` RGBA color.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ColorEdit4(
    label: *const c_char,
    col: *mut f32,
    flags: i32,
) -> bool {
    unsafe { sys::igColorEdit4(label, col, flags) }
}

/// Picker for a `float[3]` RGB color.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ColorPicker3(
    label: *const c_char,
    col: *mut f32,
    flags: i32,
) -> bool {
    unsafe { sys::igColorPicker3(label, col, flags) }
}

/// Picker for a `float[4]` RGBA color. `ref_col` may be null, or point to a
/// `float[4]` shown as the reference swatch.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ColorPicker4(
    label: *const c_char,
    col: *mut f32,
    flags: i32,
    ref_col: *const f32,
) -> bool {
    unsafe { sys::igColorPicker4(label, col, flags, ref_col) }
}

/// Color swatch button showing the `float[4]` color. Returns true when
/// pressed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ColorButton(
    desc_id: *const c_char,
    col: *const f32,
    flags: i32,
    width: f32,
    height: f32,
) -> bool {
    unsafe { sys::igColorButton(desc_id, load4(col), flags, vec2(width, height)) }
}
