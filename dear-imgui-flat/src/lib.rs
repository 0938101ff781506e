//! # Dear ImGui - Flat C ABI
//!
//! A flat, C-linkage surface over Dear ImGui v1.92. Every entry point is an
//! `extern "C"` function taking primitive arguments: vectors are decomposed
//! into scalar pairs or float arrays, composite results are written through
//! caller-provided out-pointers, and engine handles pass through as opaque
//! pointers. The crate builds as `staticlib`/`cdylib` for consumption from C
//! and other languages, and as a regular `lib` for Rust-side tests.
//!
//! Functions forward to the engine one-to-one and do not validate, recover,
//! or synchronize; callers get the engine's own contract (a single current
//! context, strictly paired begin/end calls, valid null-terminated UTF-8
//! labels).
//!
//! ## Quick Start (from C)
//!
//! ```c
//! ImGuiContext *ctx = imflat_CreateContext(NULL);
//! imflat_IoSetDisplaySize(1280.0f, 720.0f);
//! imflat_IoFontsBuild();
//! imflat_NewFrame();
//! if (imflat_Begin("Hello", NULL, 0)) {
//!     imflat_Text("Hello, world!");
//! }
//! imflat_End();
//! imflat_Render();
//! ```

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![allow(non_snake_case)]

// Re-export the sys crate for advanced users
pub extern crate dear_imgui_sys as sys;

/// Condition for setting window/widget properties
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(i32)]
pub enum Condition {
    /// Never apply the setting
    Never = -1,
    /// Set the variable always
    Always = sys::ImGuiCond_Always,
    /// Set the variable once per runtime session (only the first call will succeed)
    Once = sys::ImGuiCond_Once,
    /// Set the variable if the object/window has no persistently saved data (no entry in .ini file)
    FirstUseEver = sys::ImGuiCond_FirstUseEver,
    /// Set the variable if the object/window is appearing after being hidden/inactive (or the first time)
    Appearing = sys::ImGuiCond_Appearing,
}

pub mod context;
pub mod io;
pub mod item;
pub mod layout;
pub mod logging;
pub mod scalar;
pub mod scroll;
pub mod stacks;
pub mod widget;
pub mod window;

pub use self::io::ConfigFlags;
pub use self::item::{HoveredFlags, MouseButton};
pub use self::scalar::ScalarKind;
pub use self::stacks::{StyleColor, StyleVar};
pub use self::widget::button::{ButtonFlags, Direction};
pub use self::widget::color::ColorEditFlags;
pub use self::widget::combo::ComboFlags;
pub use self::widget::input::InputTextFlags;
pub use self::widget::selectable::SelectableFlags;
pub use self::widget::slider::SliderFlags;
pub use self::widget::tree::TreeNodeFlags;
pub use self::window::{ChildFlags, FocusedFlags, WindowFlags};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest positive normal `float`, for callers whose language cannot
/// express C's `FLT_MIN` when filling unbounded range arguments.
#[unsafe(no_mangle)]
pub extern "C" fn imflat_GetFloatMin() -> f32 {
    f32::MIN_POSITIVE
}

/// Largest finite `float`, the counterpart of [`imflat_GetFloatMin`] for
/// `FLT_MAX`.
#[unsafe(no_mangle)]
pub extern "C" fn imflat_GetFloatMax() -> f32 {
    f32::MAX
}

pub(crate) fn vec2(x: f32, y: f32) -> sys::ImVec2 {
    sys::ImVec2 { x, y }
}

/// Writes a vector into a caller-provided `float[2]`.
///
/// # Safety
/// `out` must point to at least two writable floats.
pub(crate) unsafe fn store2(out: *mut f32, v: sys::ImVec2) {
    unsafe {
        *out = v.x;
        *out.add(1) = v.y;
    }
}

/// Reads a `float[4]` color into an engine vector.
///
/// # Safety
/// `col` must point to at least four readable floats.
pub(crate) unsafe fn load4(col: *const f32) -> sys::ImVec4 {
    unsafe {
        sys::ImVec4 {
            x: *col,
            y: *col.add(1),
            z: *col.add(2),
            w: *col.add(3),
        }
    }
}
