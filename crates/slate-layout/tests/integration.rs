//! Integration tests for slate-layout.
//!
//! These drive a full editing session through [`SlateEditor`] the way a host
//! would: measure, enter edit mode, gesture, undo, save, tear down.

use slate_core::{Event, Key, Modifiers, Point};
use slate_layout::{
    generate_layout, Layout, LayoutConfig, LayoutError, ListenerKind, MediaItem, MemoryStore,
    Placement, RecordingHost, Response, SlateEditor,
};

fn board(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem::new("image/jpeg", format!("https://gateway/ipfs/cid{i}")).with_name(format!("{i}.jpg")))
        .collect()
}

fn mounted(n: usize, width: f32) -> (SlateEditor<RecordingHost>, RecordingHost) {
    let host = RecordingHost::new();
    let probe = host.clone();
    let mut editor = SlateEditor::new(board(n), None, LayoutConfig::default(), host).unwrap();
    editor.handle_event(&Event::Resize { width });
    editor.set_editing(true);
    (editor, probe)
}

fn key(editor: &mut SlateEditor<RecordingHost>, key: Key) -> Response {
    editor.handle_event(&Event::KeyDown { key })
}

fn release(editor: &mut SlateEditor<RecordingHost>, key: Key) {
    editor.handle_event(&Event::KeyUp { key });
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn test_grid_packing_on_mount() {
    let (editor, _) = mounted(7, 1080.0);
    let expected = [
        (0.0, 0.0),
        (220.0, 0.0),
        (440.0, 0.0),
        (660.0, 0.0),
        (880.0, 0.0),
        (0.0, 220.0),
        (220.0, 220.0),
    ];
    for (i, (x, y)) in expected.into_iter().enumerate() {
        assert_eq!((editor.layout()[i].x, editor.layout()[i].y), (x, y));
        assert_eq!(editor.layout()[i].z, i as u32);
    }
    assert_eq!(editor.container_height(), 420.0);
}

#[test]
fn test_drag_at_half_scale() {
    let (mut editor, _) = mounted(2, 540.0);
    assert_eq!(editor.unit(), 0.5);
    // Item 1 sits at 110 px on screen
    editor.handle_event(&Event::pointer_down(150.0, 50.0));
    assert_eq!(editor.active_index(), Some(1));
    editor.handle_event(&Event::pointer_move(173.0, 54.0));
    editor.handle_event(&Event::pointer_up(173.0, 54.0));
    let p = editor.layout()[1];
    assert_eq!((p.x, p.y), (270.0, 10.0));
    assert_eq!(p.z, 2);
}

#[test]
fn test_shift_drag_locks_axis() {
    let (mut editor, _) = mounted(1, 1080.0);
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::shift_move(108.0, 163.0));
    editor.handle_event(&Event::pointer_up(108.0, 163.0));
    assert_eq!((editor.layout()[0].x, editor.layout()[0].y), (0.0, 60.0));
}

#[test]
fn test_ratio_locked_resize_from_corner() {
    let layout = Layout::new(vec![Placement::new(0.0, 0.0, 400.0, 300.0, 0)]);
    let host = RecordingHost::new();
    let mut editor =
        SlateEditor::new(board(1), Some(layout), LayoutConfig::default(), host).unwrap();
    editor.handle_event(&Event::Resize { width: 1080.0 });
    editor.set_editing(true);

    editor.handle_event(&Event::PointerDown {
        position: Point::new(400.0, 300.0),
        modifiers: Modifiers::SHIFT,
    });
    editor.handle_event(&Event::shift_move(480.0, 300.0));
    editor.handle_event(&Event::pointer_up(480.0, 300.0));
    let p = editor.layout()[0];
    assert_eq!((p.w, p.h), (480.0, 360.0));
    assert_eq!(editor.container_height(), 360.0);
}

#[test]
fn test_rejected_frame_keeps_last_valid() {
    let (mut editor, _) = mounted(1, 1080.0);
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::pointer_move(100.0, -50.0));
    assert_eq!(editor.layout()[0].y, -150.0);
    assert_eq!(editor.handle_event(&Event::pointer_move(100.0, -200.0)), Response::Ignored);
    editor.handle_event(&Event::pointer_up(100.0, -200.0));
    assert_eq!(editor.layout()[0].y, -150.0);
}

// =============================================================================
// Keyboard
// =============================================================================

#[test]
fn test_undo_walks_back_gesture_by_gesture() {
    let (mut editor, _) = mounted(2, 1080.0);
    let initial = editor.layout().clone();

    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::pointer_move(100.0, 400.0));
    editor.handle_event(&Event::pointer_up(100.0, 400.0));
    let after_first = editor.layout().clone();

    editor.handle_event(&Event::pointer_down(300.0, 100.0));
    editor.handle_event(&Event::pointer_move(600.0, 100.0));
    editor.handle_event(&Event::pointer_up(600.0, 100.0));

    key(&mut editor, Key::Control);
    assert_eq!(key(&mut editor, Key::Char('z')), Response::Redraw);
    assert_eq!(editor.layout(), &after_first);
    release(&mut editor, Key::Char('z'));
    assert_eq!(key(&mut editor, Key::Char('z')), Response::Redraw);
    assert_eq!(editor.layout(), &initial);
    // Undo never shrinks the container
    assert_eq!(editor.container_height(), 500.0);
}

#[test]
fn test_undo_ignored_mid_gesture() {
    let (mut editor, _) = mounted(1, 1080.0);
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::pointer_up(100.0, 100.0));
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    key(&mut editor, Key::Meta);
    assert_eq!(key(&mut editor, Key::Char('z')), Response::Ignored);
    assert_eq!(editor.active_index(), Some(0));
}

#[test]
fn test_save_shortcut_round_trip() {
    let (mut editor, _) = mounted(3, 1080.0);
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::pointer_move(100.0, 350.0));
    editor.handle_event(&Event::pointer_up(100.0, 350.0));

    key(&mut editor, Key::Control);
    assert_eq!(key(&mut editor, Key::Char('S')), Response::SaveRequested);

    let mut store = MemoryStore::new();
    editor.save(&mut store).unwrap();
    assert!(!editor.has_unsaved_changes());

    let saved = store.last().unwrap().unwrap();
    let json = &store.saved()[0];
    assert!(json.contains(r#""type":"image/jpeg""#));

    // Remount from the saved layout
    let restored = SlateEditor::new(
        saved.items,
        Some(saved.layout),
        LayoutConfig::default(),
        RecordingHost::new(),
    )
    .unwrap();
    assert_eq!(restored.layout(), editor.layout());
    assert_eq!(restored.controller().z_index_max(), 4);
}

#[test]
fn test_blur_then_refocus_has_no_stuck_keys() {
    let (mut editor, _) = mounted(1, 1080.0);
    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    editor.handle_event(&Event::pointer_up(100.0, 100.0));
    key(&mut editor, Key::Control);
    editor.handle_event(&Event::Blur);
    assert_eq!(key(&mut editor, Key::Char('z')), Response::Ignored);
    assert_eq!(editor.controller().history().len(), 1);
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn test_listeners_follow_session() {
    let (mut editor, probe) = mounted(2, 1080.0);
    assert!(probe.live().contains(&ListenerKind::Resize));
    assert!(ListenerKind::KEYBOARD.iter().all(|k| probe.live().contains(k)));
    assert!(!probe.live().contains(&ListenerKind::PointerMove));

    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    assert!(ListenerKind::POINTER.iter().all(|k| probe.live().contains(k)));
    editor.handle_event(&Event::Blur);
    assert!(!probe.live().contains(&ListenerKind::PointerUp));

    editor.handle_event(&Event::pointer_down(100.0, 100.0));
    drop(editor);
    assert!(probe.live().is_empty());
}

#[test]
fn test_view_mode_is_inert() {
    let (mut editor, probe) = mounted(2, 1080.0);
    editor.set_editing(false);
    assert_eq!(probe.live().len(), 1);
    let before = editor.layout().clone();
    assert_eq!(editor.handle_event(&Event::pointer_down(100.0, 100.0)), Response::Ignored);
    assert_eq!(editor.layout(), &before);
    assert!(editor.frame().grid_spacing.is_none());
    assert!(editor.frame().boxes.iter().all(|b| b.handles.is_empty()));
}

#[test]
fn test_mount_rejects_bad_layouts() {
    let config = LayoutConfig::default();
    let short = generate_layout(1, &config);
    assert!(matches!(
        SlateEditor::new(board(2), Some(short), config, RecordingHost::new()),
        Err(LayoutError::LengthMismatch { .. })
    ));
    let tiny = Layout::new(vec![Placement::new(0.0, 0.0, 5.0, 200.0, 0)]);
    assert!(matches!(
        SlateEditor::new(board(1), Some(tiny), config, RecordingHost::new()),
        Err(LayoutError::InvalidPlacement { index: 0, .. })
    ));
}

#[test]
fn test_mount_with_max_stacking_order() {
    let layout = Layout::from_json(r#"[{"x":0,"y":0,"w":200,"h":200,"z":4294967295},{"x":220,"y":0,"w":200,"h":200,"z":7}]"#).unwrap();
    let host = RecordingHost::new();
    let mut editor = SlateEditor::new(board(2), Some(layout), LayoutConfig::default(), host).unwrap();
    editor.handle_event(&Event::Resize { width: 1080.0 });
    editor.set_editing(true);

    editor.handle_event(&Event::pointer_down(300.0, 100.0));
    editor.handle_event(&Event::pointer_up(300.0, 100.0));
    assert!(editor.layout()[1].z > editor.layout()[0].z);
    assert_eq!(editor.layout().paint_order(), vec![0, 1]);
}
