//! Tree nodes and collapsing headers
//!
//! A tree node that returns true has been pushed onto both the indent and
//! ID stacks; close it with [`imflat_TreePop`]. Collapsing headers do not
//! push, so they take no pop.

use std::os::raw::{c_char, c_void};

use bitflags::bitflags;

use crate::sys;
use crate::widget::text::FMT_S;

bitflags! {
    /// Flags for tree nodes and collapsing headers
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TreeNodeFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Draw as selected
        const SELECTED = sys::ImGuiTreeNodeFlags_Selected;
        /// Draw frame with background (e.g. for CollapsingHeader)
        const FRAMED = sys::ImGuiTreeNodeFlags_Framed;
        /// Hit testing to allow subsequent widgets to overlap this one
        const ALLOW_ITEM_OVERLAP = sys::ImGuiTreeNodeFlags_AllowOverlap;
        /// Don't do a TreePush() when open = no extra indent nor pushing on ID stack
        const NO_TREE_PUSH_ON_OPEN = sys::ImGuiTreeNodeFlags_NoTreePushOnOpen;
        /// Don't automatically and temporarily open node when Logging is active
        const NO_AUTO_OPEN_ON_LOG = sys::ImGuiTreeNodeFlags_NoAutoOpenOnLog;
        /// Default node to be open
        const DEFAULT_OPEN = sys::ImGuiTreeNodeFlags_DefaultOpen;
        /// Need double-click to open node
        const OPEN_ON_DOUBLE_CLICK = sys::ImGuiTreeNodeFlags_OpenOnDoubleClick;
        /// Only open when clicking on the arrow part
        const OPEN_ON_ARROW = sys::ImGuiTreeNodeFlags_OpenOnArrow;
        /// No collapsing, no arrow (use as a convenience for leaf nodes)
        const LEAF = sys::ImGuiTreeNodeFlags_Leaf;
        /// Display a bullet instead of arrow
        const BULLET = sys::ImGuiTreeNodeFlags_Bullet;
        /// Use FramePadding to vertically align text baseline to regular widget height
        const FRAME_PADDING = sys::ImGuiTreeNodeFlags_FramePadding;
        /// Extend hit box to the right-most edge, even if not framed
        const SPAN_AVAIL_WIDTH = sys::ImGuiTreeNodeFlags_SpanAvailWidth;
        /// Extend hit box to the left-most and right-most edges
        const SPAN_FULL_WIDTH = sys::ImGuiTreeNodeFlags_SpanFullWidth;
        /// Combination of Framed and NoTreePushOnOpen
        const COLLAPSING_HEADER = Self::FRAMED.bits() | Self::NO_TREE_PUSH_ON_OPEN.bits();
    }
}

/// Tree node labeled and identified by `label`. Returns true when open;
/// a true return must be closed with [`imflat_TreePop`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNode(label: *const c_char) -> bool {
    unsafe { sys::igTreeNodeEx_Str(label, 0) }
}

/// Like [`imflat_TreeNode`] with explicit flags.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNodeEx(label: *const c_char, flags: i32) -> bool {
    unsafe { sys::igTreeNodeEx_Str(label, flags) }
}

/// Tree node identified by `str_id` but displaying `text`. The open state
/// is keyed on `str_id`, so the display text can change between frames
/// without losing it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNodeStrId(str_id: *const c_char, text: *const c_char) -> bool {
    unsafe { imflat_TreeNodeExStrId(str_id, text, 0) }
}

/// Flagged variant of [`imflat_TreeNodeStrId`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNodeExStrId(
    str_id: *const c_char,
    text: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igTreeNodeEx_StrStr(str_id, flags, FMT_S.as_ptr() as *const c_char, text) }
}

/// Tree node identified by a pointer value but displaying `text`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNodePtrId(ptr_id: *const c_void, text: *const c_char) -> bool {
    unsafe { imflat_TreeNodeExPtrId(ptr_id, text, 0) }
}

/// Flagged variant of [`imflat_TreeNodePtrId`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreeNodeExPtrId(
    ptr_id: *const c_void,
    text: *const c_char,
    flags: i32,
) -> bool {
    unsafe { sys::igTreeNodeEx_Ptr(ptr_id, flags, FMT_S.as_ptr() as *const c_char, text) }
}

/// Indents and pushes `str_id` onto the ID stack, without drawing a node.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreePush(str_id: *const c_char) {
    unsafe { sys::igTreePush_Str(str_id) };
}

/// Indents and pushes a pointer value onto the ID stack.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreePushPtr(ptr_id: *const c_void) {
    unsafe { sys::igTreePush_Ptr(ptr_id) };
}

/// Unindents and pops the ID pushed by an open tree node or tree push.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_TreePop() {
    unsafe { sys::igTreePop() };
}

/// Framed header that toggles open/closed. Returns true when open; no pop
/// needed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_CollapsingHeader(label: *const c_char, flags: i32) -> bool {
    unsafe { sys::igCollapsingHeader_TreeNodeFlags(label, flags) }
}

/// Collapsing header with a close button bound to `*p_visible`. When the
/// close button is pressed `*p_visible` is set to false.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_CollapsingHeaderBoolPtr(
    label: *const c_char,
    p_visible: *mut bool,
    flags: i32,
) -> bool {
    unsafe { sys::igCollapsingHeader_BoolPtr(label, p_visible, flags) }
}

/// Stages the open state for the next tree node or collapsing header.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetNextItemOpen(is_open: bool, cond: i32) {
    unsafe { sys::igSetNextItemOpen(is_open, cond) };
}
