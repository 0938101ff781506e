//! Layout primitives and cursor access
//!
//! Cursor positions come in two coordinate spaces: window-local
//! (`GetCursorPos`/`SetCursorPos`, affected by scrolling) and absolute screen
//! space (`GetCursorScreenPos`/`SetCursorScreenPos`). A position written
//! through a setter reads back exactly through the matching getter within
//! the same frame.

use crate::sys;
use crate::{store2, vec2};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Separator() {
    unsafe { sys::igSeparator() };
}

/// Continues on the same line as the previous item. Pass 0.0 for both
/// parameters to get the default offset and spacing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SameLine(offset_from_start_x: f32, spacing: f32) {
    unsafe { sys::igSameLine(offset_from_start_x, spacing) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_NewLine() {
    unsafe { sys::igNewLine() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Spacing() {
    unsafe { sys::igSpacing() };
}

/// Adds an invisible item of the given size.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Dummy(width: f32, height: f32) {
    unsafe { sys::igDummy(vec2(width, height)) };
}

/// Indents by `indent_w`, or by the style's default indent when 0.0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Indent(indent_w: f32) {
    unsafe { sys::igIndent(indent_w) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Unindent(indent_w: f32) {
    unsafe { sys::igUnindent(indent_w) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginGroup() {
    unsafe { sys::igBeginGroup() };
}

/// Ends a group; the whole group then acts as one item for queries.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_EndGroup() {
    unsafe { sys::igEndGroup() };
}

/// Writes the window-local cursor position into `out_pos[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCursorPos(out_pos: *mut f32) {
    unsafe { store2(out_pos, sys::igGetCursorPos()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCursorPosX() -> f32 {
    unsafe { sys::igGetCursorPosX() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCursorPosY() -> f32 {
    unsafe { sys::igGetCursorPosY() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetCursorPos(local_x: f32, local_y: f32) {
    unsafe { sys::igSetCursorPos(vec2(local_x, local_y)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetCursorPosX(local_x: f32) {
    unsafe { sys::igSetCursorPosX(local_x) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetCursorPosY(local_y: f32) {
    unsafe { sys::igSetCursorPosY(local_y) };
}

/// Writes the initial cursor position of the window into `out_pos[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCursorStartPos(out_pos: *mut f32) {
    unsafe { store2(out_pos, sys::igGetCursorStartPos()) };
}

/// Writes the cursor position in absolute screen space into `out_pos[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCursorScreenPos(out_pos: *mut f32) {
    unsafe { store2(out_pos, sys::igGetCursorScreenPos()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetCursorScreenPos(x: f32, y: f32) {
    unsafe { sys::igSetCursorScreenPos(vec2(x, y)) };
}

/// Vertically aligns the upcoming text baseline to framed items.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_AlignTextToFramePadding() {
    unsafe { sys::igAlignTextToFramePadding() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetTextLineHeight() -> f32 {
    unsafe { sys::igGetTextLineHeight() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetTextLineHeightWithSpacing() -> f32 {
    unsafe { sys::igGetTextLineHeightWithSpacing() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetFrameHeight() -> f32 {
    unsafe { sys::igGetFrameHeight() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetFrameHeightWithSpacing() -> f32 {
    unsafe { sys::igGetFrameHeightWithSpacing() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetFontSize() -> f32 {
    unsafe { sys::igGetFontSize() }
}
