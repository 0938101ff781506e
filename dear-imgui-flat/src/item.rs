//! Item-state queries
//!
//! All of these refer to the last item submitted in the current window, or
//! to any item for the `IsAnyItem*` family. They are per-frame snapshots;
//! nothing here mutates engine state.

use bitflags::bitflags;

use crate::store2;
use crate::sys;

bitflags! {
    /// Flags for hovering detection
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HoveredFlags: i32 {
        /// Return true if directly over the item/window, not obstructed
        const NONE = sys::ImGuiHoveredFlags_None;
        /// IsWindowHovered() only: Return true if any children of the window is hovered
        const CHILD_WINDOWS = sys::ImGuiHoveredFlags_ChildWindows;
        /// IsWindowHovered() only: Test from root window (top most parent of the current hierarchy)
        const ROOT_WINDOW = sys::ImGuiHoveredFlags_RootWindow;
        /// IsWindowHovered() only: Return true if any window is hovered
        const ANY_WINDOW = sys::ImGuiHoveredFlags_AnyWindow;
        /// Return true even if a popup window is normally blocking access to this item/window
        const ALLOW_WHEN_BLOCKED_BY_POPUP = sys::ImGuiHoveredFlags_AllowWhenBlockedByPopup;
        /// Return true even if an active item is blocking access to this item/window
        const ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM = sys::ImGuiHoveredFlags_AllowWhenBlockedByActiveItem;
        /// IsItemHovered() only: Return true even if the position is obstructed or overlapped by another window
        const ALLOW_WHEN_OVERLAPPED = sys::ImGuiHoveredFlags_AllowWhenOverlapped;
        /// IsItemHovered() only: Return true even if the item is disabled
        const ALLOW_WHEN_DISABLED = sys::ImGuiHoveredFlags_AllowWhenDisabled;
        /// IsItemHovered() only: Disable using gamepad/keyboard navigation state when active
        const NO_NAV_OVERRIDE = sys::ImGuiHoveredFlags_NoNavOverride;
        /// Shortcut for standard flags when using IsItemHovered() + SetTooltip() sequence
        const FOR_TOOLTIP = sys::ImGuiHoveredFlags_ForTooltip;
        /// Require mouse to be stationary for style.HoverStationaryDelay at least one time
        const STATIONARY = sys::ImGuiHoveredFlags_Stationary;
        /// IsItemHovered() only: Return true immediately (default)
        const DELAY_NONE = sys::ImGuiHoveredFlags_DelayNone;
        /// IsItemHovered() only: Return true after style.HoverDelayShort elapsed
        const DELAY_SHORT = sys::ImGuiHoveredFlags_DelayShort;
        /// IsItemHovered() only: Return true after style.HoverDelayNormal elapsed
        const DELAY_NORMAL = sys::ImGuiHoveredFlags_DelayNormal;
        /// IsItemHovered() only: Disable shared delay system between neighboring items
        const NO_SHARED_DELAY = sys::ImGuiHoveredFlags_NoSharedDelay;
    }
}

impl Default for HoveredFlags {
    fn default() -> Self {
        HoveredFlags::NONE
    }
}

/// Mouse buttons accepted by [`imflat_IsItemClicked`].
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum MouseButton {
    /// Left mouse button
    Left = sys::ImGuiMouseButton_Left,
    /// Right mouse button
    Right = sys::ImGuiMouseButton_Right,
    /// Middle mouse button
    Middle = sys::ImGuiMouseButton_Middle,
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemHovered(flags: i32) -> bool {
    unsafe { sys::igIsItemHovered(flags) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemActive() -> bool {
    unsafe { sys::igIsItemActive() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemFocused() -> bool {
    unsafe { sys::igIsItemFocused() }
}

/// True if the last item is hovered and the given mouse button was clicked
/// over it. `mouse_button` is an `ImGuiMouseButton` value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemClicked(mouse_button: i32) -> bool {
    unsafe { sys::igIsItemClicked(mouse_button) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemVisible() -> bool {
    unsafe { sys::igIsItemVisible() }
}

/// True if the last item modified its underlying value this frame.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemEdited() -> bool {
    unsafe { sys::igIsItemEdited() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemActivated() -> bool {
    unsafe { sys::igIsItemActivated() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemDeactivated() -> bool {
    unsafe { sys::igIsItemDeactivated() }
}

/// True if the last item was just made inactive and modified its value
/// while it was active (useful for commit-on-release).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemDeactivatedAfterEdit() -> bool {
    unsafe { sys::igIsItemDeactivatedAfterEdit() }
}

/// True if the last tree node or collapsing header was toggled open/closed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsItemToggledOpen() -> bool {
    unsafe { sys::igIsItemToggledOpen() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsAnyItemHovered() -> bool {
    unsafe { sys::igIsAnyItemHovered() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsAnyItemActive() -> bool {
    unsafe { sys::igIsAnyItemActive() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_IsAnyItemFocused() -> bool {
    unsafe { sys::igIsAnyItemFocused() }
}

/// Writes the last item's upper-left corner (screen space) into `out[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetItemRectMin(out: *mut f32) {
    unsafe { store2(out, sys::igGetItemRectMin()) };
}

/// Writes the last item's lower-right corner (screen space) into `out[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetItemRectMax(out: *mut f32) {
    unsafe { store2(out, sys::igGetItemRectMax()) };
}

/// Writes the last item's size into `out[2]`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetItemRectSize(out: *mut f32) {
    unsafe { store2(out, sys::igGetItemRectSize()) };
}
