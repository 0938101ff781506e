//! Context lifecycle and the per-frame cycle
//!
//! One engine context is current per process at a time; the handle returned
//! by [`imflat_CreateContext`] is the same opaque pointer the engine hands
//! out, so hosts can juggle several contexts with
//! [`imflat_SetCurrentContext`]. A frame is `NewFrame` .. widget calls ..
//! `Render`, after which [`imflat_GetDrawData`] stays valid until the next
//! `NewFrame`.

use crate::flat_info;
use crate::sys;

/// Creates an engine context.
///
/// `shared_font_atlas` may be null, in which case the context owns its atlas.
/// The engine makes the new context current only when none was current
/// before; an already-current context stays selected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_CreateContext(
    shared_font_atlas: *mut sys::ImFontAtlas,
) -> *mut sys::ImGuiContext {
    let ctx = unsafe { sys::igCreateContext(shared_font_atlas) };
    flat_info!("context created");
    ctx
}

/// Destroys `ctx`, or the current context when `ctx` is null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_DestroyContext(ctx: *mut sys::ImGuiContext) {
    unsafe { sys::igDestroyContext(ctx) };
    flat_info!("context destroyed");
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetCurrentContext() -> *mut sys::ImGuiContext {
    unsafe { sys::igGetCurrentContext() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_SetCurrentContext(ctx: *mut sys::ImGuiContext) {
    unsafe { sys::igSetCurrentContext(ctx) };
}

/// Starts a new frame. The font atlas must be prepared first, see
/// [`imflat_IoFontsBuild`](crate::io::imflat_IoFontsBuild).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_NewFrame() {
    unsafe { sys::igNewFrame() };
}

/// Ends the frame and finalizes draw data.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_Render() {
    unsafe { sys::igRender() };
}

/// Returns the draw data for the last rendered frame. Only valid between
/// [`imflat_Render`] and the next [`imflat_NewFrame`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_GetDrawData() -> *mut sys::ImDrawData {
    unsafe { sys::igGetDrawData() }
}

/// Shows the engine's built-in demo window. `p_open` may be null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn imflat_ShowDemoWindow(p_open: *mut bool) {
    unsafe { sys::igShowDemoWindow(p_open) };
}
