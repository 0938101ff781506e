use std::ffi::{CStr, CString};
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use dear_imgui_flat as flat;
use dear_imgui_flat::sys;

fn test_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

#[test]
fn display_setters_write_io_fields() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        flat::io::imflat_IoSetDisplaySize(1280.0, 720.0);
        flat::io::imflat_IoSetDisplayFramebufferScale(2.0, 2.0);
        flat::io::imflat_IoSetDeltaTime(1.0 / 30.0);

        let io = sys::igGetIO_Nil();
        assert_eq!((*io).DisplaySize.x, 1280.0);
        assert_eq!((*io).DisplaySize.y, 720.0);
        assert_eq!((*io).DisplayFramebufferScale.x, 2.0);
        assert_eq!((*io).DeltaTime, 1.0 / 30.0);

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn config_flags_round_trip() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        let flags =
            (flat::ConfigFlags::NAV_ENABLE_KEYBOARD | flat::ConfigFlags::NO_MOUSE).bits();
        flat::io::imflat_IoSetConfigFlags(flags);
        assert_eq!(flat::io::imflat_IoGetConfigFlags(), flags);

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn ini_filename_is_copied_and_null_disables_persistence() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        // The caller's buffer is freed right after the call; the engine must
        // still see the copied string.
        {
            let name = CString::new("flat-settings.ini").unwrap();
            flat::io::imflat_IoSetIniFilename(name.as_ptr());
        }
        let io = sys::igGetIO_Nil();
        assert!(!(*io).IniFilename.is_null());
        let seen = CStr::from_ptr((*io).IniFilename);
        assert_eq!(seen.to_str().unwrap(), "flat-settings.ini");

        flat::io::imflat_IoSetIniFilename(ptr::null());
        assert!((*io).IniFilename.is_null());

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn want_capture_is_false_without_input() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        flat::io::imflat_IoSetDisplaySize(800.0, 600.0);
        flat::io::imflat_IoSetDeltaTime(1.0 / 60.0);
        flat::io::imflat_IoSetIniFilename(ptr::null());
        flat::io::imflat_IoFontsBuild();
        flat::context::imflat_NewFrame();

        assert!(!flat::io::imflat_IoGetWantCaptureMouse());
        assert!(!flat::io::imflat_IoGetWantCaptureKeyboard());
        assert!(!flat::io::imflat_IoGetWantTextInput());

        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn fonts_build_is_idempotent() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        flat::io::imflat_IoFontsBuild();
        let io = sys::igGetIO_Nil();
        assert_ne!((*io).BackendFlags & sys::ImGuiBackendFlags_RendererHasTextures, 0);
        let fonts = (*io).Fonts;
        let count = (*fonts).Fonts.Size;
        assert!(count > 0);

        flat::io::imflat_IoFontsBuild();
        assert_eq!((*fonts).Fonts.Size, count);

        // The atlas itself is built by the first NewFrame.
        flat::io::imflat_IoSetDisplaySize(800.0, 600.0);
        flat::io::imflat_IoSetDeltaTime(1.0 / 60.0);
        flat::io::imflat_IoSetIniFilename(ptr::null());
        flat::context::imflat_NewFrame();
        assert!((*fonts).TexIsBuilt);

        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}
