//! Window begin/end, set-next-window staging and window queries
//!
//! `imflat_Begin` must always be paired with `imflat_End`, even when it
//! returns false (collapsed or clipped window); same rule for
//! `imflat_BeginChild`/`imflat_EndChild`. The `SetNextWindow*` calls stage
//! attributes for the next `Begin` only.

use std::os::raw::c_char;

use bitflags::bitflags;

use crate::sys;
use crate::{store2, vec2};

bitflags! {
    /// Configuration flags for windows
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: i32 {
        /// Disable title-bar
        const NO_TITLE_BAR = sys::ImGuiWindowFlags_NoTitleBar;
        /// Disable user resizing with the lower-right grip
        const NO_RESIZE = sys::ImGuiWindowFlags_NoResize;
        /// Disable user moving the window
        const NO_MOVE = sys::ImGuiWindowFlags_NoMove;
        /// Disable scrollbars (window can still scroll with mouse or programmatically)
        const NO_SCROLLBAR = sys::ImGuiWindowFlags_NoScrollbar;
        /// Disable user vertically scrolling with mouse wheel
        const NO_SCROLL_WITH_MOUSE = sys::ImGuiWindowFlags_NoScrollWithMouse;
        /// Disable user collapsing window by double-clicking on it
        const NO_COLLAPSE = sys::ImGuiWindowFlags_NoCollapse;
        /// Resize every window to its content every frame
        const ALWAYS_AUTO_RESIZE = sys::ImGuiWindowFlags_AlwaysAutoResize;
        /// Disable drawing background color and outside border
        const NO_BACKGROUND = sys::ImGuiWindowFlags_NoBackground;
        /// Never load/save settings in .ini file
        const NO_SAVED_SETTINGS = sys::ImGuiWindowFlags_NoSavedSettings;
        /// Disable catching mouse, hovering test with pass through
        const NO_MOUSE_INPUTS = sys::ImGuiWindowFlags_NoMouseInputs;
        /// Has a menu-bar
        const MENU_BAR = sys::ImGuiWindowFlags_MenuBar;
        /// Allow horizontal scrollbar to appear (off by default)
        const HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_HorizontalScrollbar;
        /// Disable taking focus when transitioning from hidden to visible state
        const NO_FOCUS_ON_APPEARING = sys::ImGuiWindowFlags_NoFocusOnAppearing;
        /// Disable bringing window to front when taking focus
        const NO_BRING_TO_FRONT_ON_FOCUS = sys::ImGuiWindowFlags_NoBringToFrontOnFocus;
        /// Always show vertical scrollbar (even if ContentSize.y < Size.y)
        const ALWAYS_VERTICAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysVerticalScrollbar;
        /// Always show horizontal scrollbar (even if ContentSize.x < Size.x)
        const ALWAYS_HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysHorizontalScrollbar;
        /// No gamepad/keyboard navigation within the window
        const NO_NAV_INPUTS = sys::ImGuiWindowFlags_NoNavInputs;
        /// No focusing toward this window with gamepad/keyboard navigation
        const NO_NAV_FOCUS = sys::ImGuiWindowFlags_NoNavFocus;
        /// Display a dot next to the title
        const UNSAVED_DOCUMENT = sys::ImGuiWindowFlags_UnsavedDocument;
        /// Disable gamepad/keyboard navigation and focusing
        const NO_NAV = Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        /// Disable all window decorations
        const NO_DECORATION = Self::NO_TITLE_BAR.bits() | Self::NO_RESIZE.bits() | Self::NO_SCROLLBAR.bits() | Self::NO_COLLAPSE.bits();
        /// Disable all user interactions
        const NO_INPUTS = Self::NO_MOUSE_INPUTS.bits() | Self::NO_NAV_INPUTS.bits();
    }
}

bitflags! {
    /// Configuration flags for child windows
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChildFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Show an outer border and enable WindowPadding
        const BORDERS = sys::ImGuiChildFlags_Borders;
        /// Pad with style.WindowPadding even if no border are drawn
        const ALWAYS_USE_WINDOW_PADDING = sys::ImGuiChildFlags_AlwaysUseWindowPadding;
        /// Allow resize from right border
        const RESIZE_X = sys::ImGuiChildFlags_ResizeX;
        /// Allow resize from bottom border
        const RESIZE_Y = sys::ImGuiChildFlags_ResizeY;
        /// Enable auto-resizing width
        const AUTO_RESIZE_X = sys::ImGuiChildFlags_AutoResizeX;
        /// Enable auto-resizing height
        const AUTO_RESIZE_Y = sys::ImGuiChildFlags_AutoResizeY;
        /// Combined with AutoResizeX/AutoResizeY. Always measure size even when child is hidden
        const ALWAYS_AUTO_RESIZE = sys::ImGuiChildFlags_AlwaysAutoResize;
        /// Style the child window like a framed item
        const FRAME_STYLE = sys::ImGuiChildFlags_FrameStyle;
        /// Share focus scope, allow gamepad/keyboard navigation to cross over parent border
        const NAV_FLATTENED = sys::ImGuiChildFlags_NavFlattened;
    }
}

bitflags! {
    /// Window focus check option flags
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FocusedFlags: i32 {
        /// Return true if any child of the window is focused
        const CHILD_WINDOWS = sys::ImGuiFocusedFlags_ChildWindows;
        /// Test from root window (top-most parent of the current hierarchy)
        const ROOT_WINDOW = sys::ImGuiFocusedFlags_RootWindow;
        /// Return true if any window is focused
        const ANY_WINDOW = sys::ImGuiFocusedFlags_AnyWindow;
        /// Test from root window, and return true if any child is focused
        const ROOT_AND_CHILD_WINDOWS = Self::ROOT_WINDOW.bits() | Self::CHILD_WINDOWS.bits();
    }
}

/// Stages position for the next window. `cond` is an `ImGuiCond` value;
/// the pivot selects which point of the window lands on (x, y).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextWindowPos(
    x: f32,
    y: f32,
    cond: i32,
    pivot_x: f32,
    pivot_y: f32,
) {
    unsafe { sys::igSetNextWindowPos(vec2(x, y), cond, vec2(pivot_x, pivot_y)) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextWindowSize(width: f32, height: f32, cond: i32) {
    unsafe { sys::igSetNextWindowSize(vec2(width, height), cond) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextWindowCollapsed(collapsed: bool, cond: i32) {
    unsafe { sys::igSetNextWindowCollapsed(collapsed, cond) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextWindowFocus() {
    unsafe { sys::igSetNextWindowFocus() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextWindowBgAlpha(alpha: f32) {
    unsafe { sys::igSetNextWindowBgAlpha(alpha) };
}

/// Begins a window. `p_open` may be null; when non-null it receives the
/// close-button state and a close-button is shown. Returns false when the
/// window is collapsed or fully clipped; contents can be skipped but
/// [`imflat_End`] must still be called.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Begin(
    name: *const c_char,
    p_open: *mut bool,
    flags: i32,
) -> bool {
    unsafe { sys::igBegin(name, p_open, flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_End() {
    unsafe { sys::igEnd() };
}

/// Begins a child region identified by a string id. Size semantics follow
/// the engine: zero means "use remaining", negative means "remaining minus".
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginChild(
    str_id: *const c_char,
    width: f32,
    height: f32,
    child_flags: i32,
    window_flags: i32,
) -> bool {
    unsafe { sys::igBeginChild_Str(str_id, vec2(width, height), child_flags, window_flags) }
}

/// Begins a child region identified by a numeric id (from the `imflat_GetId*`
/// family).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_BeginChildId(
    id: u32,
    width: f32,
    height: f32,
    child_flags: i32,
    window_flags: i32,
) -> bool {
    unsafe { sys::igBeginChild_ID(id, vec2(width, height), child_flags, window_flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_EndChild() {
    unsafe { sys::igEndChild() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsWindowAppearing() -> bool {
    unsafe { sys::igIsWindowAppearing() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsWindowCollapsed() -> bool {
    unsafe { sys::igIsWindowCollapsed() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsWindowFocused(flags: i32) -> bool {
    unsafe { sys::igIsWindowFocused(flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsWindowHovered(flags: i32) -> bool {
    unsafe { sys::igIsWindowHovered(flags) }
}

/// Writes the current window position into `out_pos[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetWindowPos(out_pos: *mut f32) {
    unsafe { store2(out_pos, sys::igGetWindowPos()) };
}

/// Writes the current window size into `out_size[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetWindowSize(out_size: *mut f32) {
    unsafe { store2(out_size, sys::igGetWindowSize()) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetWindowWidth() -> f32 {
    unsafe { sys::igGetWindowWidth() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetWindowHeight() -> f32 {
    unsafe { sys::igGetWindowHeight() }
}

/// Writes the content region available from the cursor into `out_size[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetContentRegionAvail(out_size: *mut f32) {
    unsafe { store2(out_size, sys::igGetContentRegionAvail()) };
}
