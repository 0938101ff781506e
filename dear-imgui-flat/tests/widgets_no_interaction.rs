use std::ffi::CString;
use std::ptr;
use std::sync::{Mutex, MutexGuard, OnceLock};

use dear_imgui_flat as flat;
use dear_imgui_flat::sys;

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
fn stateful_widgets_keep_values_without_interaction() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Widgets").unwrap();
        let label = CString::new("value").unwrap();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);

        let mut checked = false;
        assert!(!flat::widget::button::imflat_Checkbox(label.as_ptr(), &mut checked));
        assert!(!checked);

        let mut bits: u32 = 0b0101;
        assert!(!flat::widget::button::imflat_CheckboxFlags(label.as_ptr(), &mut bits, 0b0100));
        assert_eq!(bits, 0b0101);

        let mut radio = 2;
        assert!(!flat::widget::button::imflat_RadioButtonIntPtr(label.as_ptr(), &mut radio, 1));
        assert_eq!(radio, 2);

        let mut f = 0.25f32;
        assert!(!flat::widget::slider::imflat_SliderFloat(
            label.as_ptr(),
            &mut f,
            0.0,
            1.0,
            ptr::null(),
            0,
        ));
        assert_eq!(f, 0.25);

        let mut v3 = [1.0f32, 2.0, 3.0];
        assert!(!flat::widget::drag::imflat_DragFloat3(
            label.as_ptr(),
            v3.as_mut_ptr(),
            1.0,
            0.0,
            0.0,
            ptr::null(),
            0,
        ));
        assert_eq!(v3, [1.0, 2.0, 3.0]);

        let (mut lo, mut hi) = (-4, 9);
        assert!(!flat::widget::drag::imflat_DragIntRange2(
            label.as_ptr(),
            &mut lo,
            &mut hi,
            1.0,
            -10,
            10,
            ptr::null(),
            ptr::null(),
            0,
        ));
        assert_eq!((lo, hi), (-4, 9));

        let mut i = 7;
        assert!(!flat::widget::input::imflat_InputInt(label.as_ptr(), &mut i, 1, 10, 0));
        assert_eq!(i, 7);

        let mut d = 0.5f64;
        assert!(!flat::widget::input::imflat_InputDouble(
            label.as_ptr(),
            &mut d,
            0.1,
            1.0,
            ptr::null(),
            0,
        ));
        assert_eq!(d, 0.5);

        let mut col = [0.1f32, 0.2, 0.3, 1.0];
        assert!(!flat::widget::color::imflat_ColorEdit4(label.as_ptr(), col.as_mut_ptr(), 0));
        assert_eq!(col, [0.1, 0.2, 0.3, 1.0]);

        flat::window::imflat_End();
        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn scalar_entry_points_reject_unknown_tags() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Scalars").unwrap();
        let label = CString::new("scalar").unwrap();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);

        let mut value = 42u64;
        let (min, max) = (0u64, 100u64);

        // A valid tag reaches the engine and leaves the value alone.
        assert!(!flat::scalar::imflat_SliderScalar(
            label.as_ptr(),
            sys::ImGuiDataType_U64,
            (&mut value as *mut u64).cast(),
            (&min as *const u64).cast(),
            (&max as *const u64).cast(),
            ptr::null(),
            0,
        ));
        assert_eq!(value, 42);

        // An unknown tag is rejected before the engine sees it.
        for bad_tag in [-1, 99, i32::MAX] {
            assert!(!flat::scalar::imflat_DragScalar(
                label.as_ptr(),
                bad_tag,
                (&mut value as *mut u64).cast(),
                1.0,
                ptr::null(),
                ptr::null(),
                ptr::null(),
                0,
            ));
            assert!(!flat::scalar::imflat_InputScalar(
                label.as_ptr(),
                bad_tag,
                (&mut value as *mut u64).cast(),
                ptr::null(),
                ptr::null(),
                ptr::null(),
                0,
            ));
            assert_eq!(value, 42);
        }

        let mut array = [1i16, 2, 3, 4];
        assert!(!flat::scalar::imflat_SliderScalarN(
            label.as_ptr(),
            sys::ImGuiDataType_S16,
            array.as_mut_ptr().cast(),
            4,
            (&0i16 as *const i16).cast(),
            (&10i16 as *const i16).cast(),
            ptr::null(),
            0,
        ));
        assert_eq!(array, [1, 2, 3, 4]);

        flat::window::imflat_End();
        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn selection_widgets_submit_and_pair_correctly() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Selection").unwrap();
        let label = CString::new("pick").unwrap();
        let preview = CString::new("One").unwrap();
        let items: &[u8] = b"One\0Two\0Three\0\0";
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);

        let mut selected = false;
        let _ = flat::widget::selectable::imflat_SelectableBoolPtr(
            label.as_ptr(),
            &mut selected,
            0,
            0.0,
            0.0,
        );
        assert!(!selected);

        let mut current = 0;
        assert!(!flat::widget::combo::imflat_Combo(
            label.as_ptr(),
            &mut current,
            items.as_ptr().cast(),
            -1,
        ));
        assert_eq!(current, 0);

        // Closed combo popup: EndCombo is skipped.
        if flat::widget::combo::imflat_BeginCombo(label.as_ptr(), preview.as_ptr(), 0) {
            flat::widget::combo::imflat_EndCombo();
        }

        if flat::widget::list_box::imflat_BeginListBox(label.as_ptr(), 0.0, 50.0) {
            let _ = flat::widget::selectable::imflat_Selectable(preview.as_ptr(), true, 0, 0.0, 0.0);
            flat::widget::list_box::imflat_EndListBox();
        }

        flat::window::imflat_End();
        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn trees_open_on_request_and_report_state() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Trees").unwrap();
        let node = CString::new("node").unwrap();
        let id = CString::new("id-only").unwrap();
        let shown = CString::new("shown text").unwrap();
        let header = CString::new("header").unwrap();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);

        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        if flat::widget::tree::imflat_TreeNode(node.as_ptr()) {
            let leaf_flags = flat::TreeNodeFlags::LEAF.bits();
            let _ = flat::widget::tree::imflat_TreeNodeEx(node.as_ptr(), leaf_flags);
            flat::widget::tree::imflat_TreePop();
            flat::widget::tree::imflat_TreePop();
        }

        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        if flat::widget::tree::imflat_TreeNodeStrId(id.as_ptr(), shown.as_ptr()) {
            flat::widget::tree::imflat_TreePop();
        }

        let marker = 0u8;
        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        if flat::widget::tree::imflat_TreeNodePtrId(
            (&marker as *const u8).cast(),
            shown.as_ptr(),
        ) {
            flat::widget::tree::imflat_TreePop();
        }

        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        let open = flat::widget::tree::imflat_CollapsingHeader(header.as_ptr(), 0);
        assert!(open);

        let mut visible = true;
        let _ = flat::widget::tree::imflat_CollapsingHeaderBoolPtr(header.as_ptr(), &mut visible, 0);
        assert!(visible);

        flat::widget::tree::imflat_TreePush(id.as_ptr());
        flat::widget::tree::imflat_TreePop();

        flat::window::imflat_End();
        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn tree_open_state_is_keyed_on_id_not_display_text() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());

        let title = CString::new("Keyed Trees").unwrap();
        let id = CString::new("stable-id").unwrap();
        let text_a = CString::new("Label A").unwrap();
        let text_b = CString::new("Label B").unwrap();
        let marker = 0u8;
        let ptr_id = (&marker as *const u8).cast();

        begin_headless_frame();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);
        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        assert!(flat::widget::tree::imflat_TreeNodeStrId(id.as_ptr(), text_a.as_ptr()));
        flat::widget::tree::imflat_TreePop();
        flat::widget::tree::imflat_SetNextItemOpen(true, flat::Condition::Always as i32);
        assert!(flat::widget::tree::imflat_TreeNodePtrId(ptr_id, text_a.as_ptr()));
        flat::widget::tree::imflat_TreePop();
        flat::window::imflat_End();
        flat::context::imflat_Render();

        // The next frame shows different text under the same ids; the
        // stored open state must carry over.
        begin_headless_frame();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);
        assert!(flat::widget::tree::imflat_TreeNodeStrId(id.as_ptr(), text_b.as_ptr()));
        flat::widget::tree::imflat_TreePop();
        assert!(flat::widget::tree::imflat_TreeNodePtrId(ptr_id, text_b.as_ptr()));
        flat::widget::tree::imflat_TreePop();
        flat::window::imflat_End();
        flat::context::imflat_Render();

        flat::context::imflat_DestroyContext(ctx);
    }
}

#[test]
fn text_and_buttons_submit_without_panic() {
    let _guard = test_guard();
    unsafe {
        let ctx = flat::context::imflat_CreateContext(ptr::null_mut());
        assert!(!ctx.is_null());
        begin_headless_frame();

        let title = CString::new("Text").unwrap();
        let label = CString::new("press me").unwrap();
        // Percent signs must render literally through every text path.
        let tricky = CString::new("100% done %d %s").unwrap();
        let overlay = CString::new("half").unwrap();
        let _ = flat::window::imflat_Begin(title.as_ptr(), ptr::null_mut(), 0);

        flat::widget::text::imflat_Text(tricky.as_ptr());
        flat::widget::text::imflat_TextColored([1.0, 0.0, 0.0, 1.0].as_ptr(), tricky.as_ptr());
        flat::widget::text::imflat_TextDisabled(tricky.as_ptr());
        flat::widget::text::imflat_TextWrapped(tricky.as_ptr());
        flat::widget::text::imflat_BulletText(tricky.as_ptr());
        flat::widget::text::imflat_LabelText(label.as_ptr(), tricky.as_ptr());
        let _ = flat::widget::text::imflat_TextLink(label.as_ptr());

        assert!(!flat::widget::button::imflat_Button(label.as_ptr(), 0.0, 0.0));
        assert!(!flat::widget::button::imflat_SmallButton(label.as_ptr()));
        assert!(!flat::widget::button::imflat_InvisibleButton(label.as_ptr(), 10.0, 10.0, 0));
        assert!(!flat::widget::button::imflat_ArrowButton(
            label.as_ptr(),
            flat::Direction::Right as i32,
        ));
        flat::widget::button::imflat_Bullet();
        assert!(!flat::widget::button::imflat_RadioButton(label.as_ptr(), true));
        flat::widget::button::imflat_ProgressBar(0.5, 0.0, 0.0, overlay.as_ptr());
        flat::widget::button::imflat_ProgressBar(0.25, 0.0, 0.0, ptr::null());

        // Item queries see the last submitted item.
        assert!(!flat::item::imflat_IsItemActive());
        assert!(!flat::item::imflat_IsItemEdited());
        assert!(!flat::item::imflat_IsAnyItemActive());

        flat::window::imflat_End();
        flat::context::imflat_Render();
        flat::context::imflat_DestroyContext(ctx);
    }
}
