//! Parameter stacks: style colors and variables, item width, disabled
//! scope, and the ID stack
//!
//! Every push has a matching pop; the engine asserts on mismatches at frame
//! end. Pops take a count so several pushes can be unwound at once.

use std::os::raw::{c_char, c_void};

use crate::sys;
use crate::{load4, vec2};

/// Style color slots, one per themable element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i32)]
pub enum StyleColor {
    Text = sys::ImGuiCol_Text,
    TextDisabled = sys::ImGuiCol_TextDisabled,
    WindowBg = sys::ImGuiCol_WindowBg,
    ChildBg = sys::ImGuiCol_ChildBg,
    PopupBg = sys::ImGuiCol_PopupBg,
    Border = sys::ImGuiCol_Border,
    BorderShadow = sys::ImGuiCol_BorderShadow,
    FrameBg = sys::ImGuiCol_FrameBg,
    FrameBgHovered = sys::ImGuiCol_FrameBgHovered,
    FrameBgActive = sys::ImGuiCol_FrameBgActive,
    TitleBg = sys::ImGuiCol_TitleBg,
    TitleBgActive = sys::ImGuiCol_TitleBgActive,
    TitleBgCollapsed = sys::ImGuiCol_TitleBgCollapsed,
    MenuBarBg = sys::ImGuiCol_MenuBarBg,
    ScrollbarBg = sys::ImGuiCol_ScrollbarBg,
    ScrollbarGrab = sys::ImGuiCol_ScrollbarGrab,
    ScrollbarGrabHovered = sys::ImGuiCol_ScrollbarGrabHovered,
    ScrollbarGrabActive = sys::ImGuiCol_ScrollbarGrabActive,
    CheckMark = sys::ImGuiCol_CheckMark,
    SliderGrab = sys::ImGuiCol_SliderGrab,
    SliderGrabActive = sys::ImGuiCol_SliderGrabActive,
    Button = sys::ImGuiCol_Button,
    ButtonHovered = sys::ImGuiCol_ButtonHovered,
    ButtonActive = sys::ImGuiCol_ButtonActive,
    Header = sys::ImGuiCol_Header,
    HeaderHovered = sys::ImGuiCol_HeaderHovered,
    HeaderActive = sys::ImGuiCol_HeaderActive,
    Separator = sys::ImGuiCol_Separator,
    SeparatorHovered = sys::ImGuiCol_SeparatorHovered,
    SeparatorActive = sys::ImGuiCol_SeparatorActive,
    ResizeGrip = sys::ImGuiCol_ResizeGrip,
    ResizeGripHovered = sys::ImGuiCol_ResizeGripHovered,
    ResizeGripActive = sys::ImGuiCol_ResizeGripActive,
    PlotLines = sys::ImGuiCol_PlotLines,
    PlotLinesHovered = sys::ImGuiCol_PlotLinesHovered,
    PlotHistogram = sys::ImGuiCol_PlotHistogram,
    PlotHistogramHovered = sys::ImGuiCol_PlotHistogramHovered,
    TextSelectedBg = sys::ImGuiCol_TextSelectedBg,
    TextLink = sys::ImGuiCol_TextLink,
    NavCursor = sys::ImGuiCol_NavCursor,
}

/// Style variable slots accepted by the push-style-var entry points.
///
/// Scalar slots go through [`imflat_PushStyleVarFloat`], two-component slots
/// through [`imflat_PushStyleVarVec2`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i32)]
pub enum StyleVar {
    Alpha = sys::ImGuiStyleVar_Alpha,
    DisabledAlpha = sys::ImGuiStyleVar_DisabledAlpha,
    WindowPadding = sys::ImGuiStyleVar_WindowPadding,
    WindowRounding = sys::ImGuiStyleVar_WindowRounding,
    WindowBorderSize = sys::ImGuiStyleVar_WindowBorderSize,
    WindowMinSize = sys::ImGuiStyleVar_WindowMinSize,
    WindowTitleAlign = sys::ImGuiStyleVar_WindowTitleAlign,
    ChildRounding = sys::ImGuiStyleVar_ChildRounding,
    ChildBorderSize = sys::ImGuiStyleVar_ChildBorderSize,
    PopupRounding = sys::ImGuiStyleVar_PopupRounding,
    PopupBorderSize = sys::ImGuiStyleVar_PopupBorderSize,
    FramePadding = sys::ImGuiStyleVar_FramePadding,
    FrameRounding = sys::ImGuiStyleVar_FrameRounding,
    FrameBorderSize = sys::ImGuiStyleVar_FrameBorderSize,
    ItemSpacing = sys::ImGuiStyleVar_ItemSpacing,
    ItemInnerSpacing = sys::ImGuiStyleVar_ItemInnerSpacing,
    IndentSpacing = sys::ImGuiStyleVar_IndentSpacing,
    ScrollbarSize = sys::ImGuiStyleVar_ScrollbarSize,
    ScrollbarRounding = sys::ImGuiStyleVar_ScrollbarRounding,
    GrabMinSize = sys::ImGuiStyleVar_GrabMinSize,
    GrabRounding = sys::ImGuiStyleVar_GrabRounding,
    ButtonTextAlign = sys::ImGuiStyleVar_ButtonTextAlign,
    SelectableTextAlign = sys::ImGuiStyleVar_SelectableTextAlign,
}

/// Pushes a style color. `idx` is an `ImGuiCol` slot, `col` a `float[4]`
/// RGBA value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushStyleColor(idx: i32, col: *const f32) {
    unsafe { sys::igPushStyleColor_Vec4(idx, load4(col)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PopStyleColor(count: i32) {
    unsafe { sys::igPopStyleColor(count) };
}

/// Pushes a scalar style variable (`ImGuiStyleVar` slots holding a float).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushStyleVarFloat(idx: i32, value: f32) {
    unsafe { sys::igPushStyleVar_Float(idx, value) };
}

/// Pushes a two-component style variable (padding, spacing, alignment
/// slots).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushStyleVarVec2(idx: i32, x: f32, y: f32) {
    unsafe { sys::igPushStyleVar_Vec2(idx, vec2(x, y)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PopStyleVar(count: i32) {
    unsafe { sys::igPopStyleVar(count) };
}

/// Sets the width for upcoming items. Positive is absolute, negative is
/// relative to the right edge, 0.0 restores the default.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushItemWidth(item_width: f32) {
    unsafe { sys::igPushItemWidth(item_width) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PopItemWidth() {
    unsafe { sys::igPopItemWidth() };
}

/// Like [`imflat_PushItemWidth`] but for the next item only, without
/// needing a pop.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextItemWidth(item_width: f32) {
    unsafe { sys::igSetNextItemWidth(item_width) };
}

/// Returns the width an item submitted right now would get.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_CalcItemWidth() -> f32 {
    unsafe { sys::igCalcItemWidth() }
}

/// Begins a scope where all items are disabled when `disabled` is true.
/// Scopes nest; an item is disabled if any enclosing scope is.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginDisabled(disabled: bool) {
    unsafe { sys::igBeginDisabled(disabled) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_EndDisabled() {
    unsafe { sys::igEndDisabled() };
}

/// Pushes a string onto the ID stack.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushIdStr(str_id: *const c_char) {
    unsafe { sys::igPushID_Str(str_id) };
}

/// Pushes a string range `[begin, end)` onto the ID stack, for callers
/// whose strings are not null-terminated.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushIdStrRange(begin: *const c_char, end: *const c_char) {
    unsafe { sys::igPushID_StrStr(begin, end) };
}

/// Pushes a pointer value onto the ID stack.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushIdPtr(ptr_id: *const c_void) {
    unsafe { sys::igPushID_Ptr(ptr_id) };
}

/// Pushes an integer onto the ID stack.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PushIdInt(int_id: i32) {
    unsafe { sys::igPushID_Int(int_id) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_PopId() {
    unsafe { sys::igPopID() };
}

/// Hashes a string with the current ID stack seed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetIdStr(str_id: *const c_char) -> u32 {
    unsafe { sys::igGetID_Str(str_id) }
}

/// Hashes a string range `[begin, end)` with the current ID stack seed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetIdStrRange(begin: *const c_char, end: *const c_char) -> u32 {
    unsafe { sys::igGetID_StrStr(begin, end) }
}

/// Hashes a pointer with the current ID stack seed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetIdPtr(ptr_id: *const c_void) -> u32 {
    unsafe { sys::igGetID_Ptr(ptr_id) }
}
