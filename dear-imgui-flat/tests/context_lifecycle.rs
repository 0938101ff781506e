use std::ffi::CString;
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use dear_imgui_flat as flat;

fn test_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

unsafe fn begin_headless_frame() {
    unsafe {
        flat::io::imflat_IoSetDisplaySize(800.0, 600.0);
        flat::io::imflat_IoSetDeltaTime(1.0 / 60.0);
        flat::io::imflat_IoSetIniFilename(ptr::null());
        flat::io::imflat_IoFontsBuild();
        flat::context::imflat_NewFrame();
    }
}

#[test]
fn create_makes_context_current_and_destroy_clears_it() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        assert_eq!(flat::context::imflat_GetCurrentContext(), ctx);

        flat::context::imflat_SetCurrentContext(ptr::null_mut());
        assert!(flat::context::imflat_GetCurrentContext().is_null());
        flat::context::imflat_SetCurrentContext(ctx);
        assert_eq!(flat::context::imflat_GetCurrentContext(), ctx);

        flat::context::imflat_DestroyContext(ctx);
        assert!(flat::context::imflat_GetCurrentContext().is_null());
    }
}

#[test]
fn second_context_does_not_take_over_current() {
    let _guard = test_guard();
    unsafe {
        let first = flat::context::imflat_CreateContext(ptr::null_mut());
        assert_eq!(flat::context::imflat_GetCurrentContext(), first);

        // Only the first context self-selects; later ones leave the
        // current context alone until SetCurrentContext is called.
        let second = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!second.is_null());
        assert_eq!(flat::context::imflat_GetCurrentContext(), first);

        flat::context::imflat_DestroyContext(second);
        assert_eq!(flat::context::imflat_GetCurrentContext(), first);
        flat::context::imflat_DestroyContext(first);
        assert!(flat::context::imflat_GetCurrentContext().is_null());
    }
}

#[test]
fn frame_cycle_produces_draw_data() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Frame Cycle").unwrap();
        let text = CString::new("one line of text").unwrap();
        if flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0) {
            flat::widget::text::imflat_Text(text.as_ptr());
        }
        flat::window::imflat_End();

        flat::context::imflat_Render();
        let draw_data = flat::context::imflat_GetDrawData();
        assert!(!draw_data.is_null());

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn repeated_frames_are_stable() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        let title = CString::new("Stable").unwrap();
        for _ in 0..3 {
            begin_headless_frame();
            let visible = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);
            let _ = visible;
            flat::window::imflat_End();
            flat::context::imflat_Render();
            assert!(!flat::context::imflat_GetDrawData().is_null());
        }

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn demo_window_submits_without_panic() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let mut open = true;
        flat::context::imflat_ShowDemoWindow(&mut open);
        assert!(open);

        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}
