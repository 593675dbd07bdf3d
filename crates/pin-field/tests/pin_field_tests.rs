//! Tests for the pin field input and decoration behavior.

mod common;

use common::{build_field, capture, RecordingView, ViewCell};
use pin_field::{
    CellVisual, Decoration, DecorationStyle, EchoMode, KeyInput, LineEdge, PinField,
    PinFieldConfig,
};

const ALL_STYLES: [DecorationStyle; 5] = [
    DecorationStyle::None,
    DecorationStyle::TopLine,
    DecorationStyle::MiddleLine,
    DecorationStyle::BottomLine,
    DecorationStyle::BoxOutline,
];

#[test]
fn test_bottom_line_typing_and_delete() {
    let mut field = build_field(4, DecorationStyle::BottomLine);
    let values = capture(&field.value_changed);

    assert_eq!(field.decoration(), Decoration::Line(LineEdge::Bottom));
    assert_eq!(field.view().animating(), vec![0]);

    field.insert_character('1');
    field.insert_character('2');
    assert_eq!(field.value(), "12");
    assert_eq!(field.cursor(), 2);
    assert_eq!(field.view().animating(), vec![2]);
    assert_eq!(field.view().cells[0].text.as_deref(), Some("1"));
    assert_eq!(field.view().cells[1].text.as_deref(), Some("2"));

    field.delete_backward();
    assert_eq!(field.value(), "1");
    assert_eq!(field.view().animating(), vec![1]);
    assert_eq!(field.view().cells[1].text, None);
    // The outgoing indicator keeps its line.
    assert!(field.view().cells[2].overlay_visible);

    assert_eq!(*values.lock(), vec!["1", "12", "1"]);
}

#[test]
fn test_placeholder_wins_over_box() {
    let config = PinFieldConfig::new(4)
        .with_decoration_style(DecorationStyle::BoxOutline)
        .with_placeholder_glyph(true);
    let mut field = PinField::build(config, RecordingView::new()).unwrap();

    assert_eq!(field.decoration(), Decoration::PlaceholderGlyph);
    assert!(field.view().cells.iter().all(|cell| cell.overlay_visible));
    assert_eq!(field.view().animating(), vec![0]);

    field.insert_character('5');
    assert_eq!(field.view().animating(), vec![1]);
}

#[test]
fn test_box_outline_never_animates() {
    let mut field = build_field(3, DecorationStyle::BoxOutline);
    assert!(field.view().cells.iter().all(|cell| cell.overlay_visible));

    field.insert_text("12");
    field.delete_backward();
    assert!(field.view().animating().is_empty());
    assert_eq!(field.active_indicator(), None);
    assert!(field.cell_visuals().iter().all(|v| !v.shows_active_indicator));
}

#[test]
fn test_no_decoration_shows_no_overlay() {
    let mut field = build_field(3, DecorationStyle::None);
    field.insert_text("9");
    assert!(field.view().cells.iter().all(|cell| !cell.overlay_visible));
    assert!(field.view().animating().is_empty());
}

#[test]
fn test_cursor_tracks_value_length() {
    let mut field = build_field(5, DecorationStyle::TopLine);
    let script = [
        KeyInput::char('1'),
        KeyInput::char('2'),
        KeyInput::Backspace,
        KeyInput::char('3'),
        KeyInput::char('4'),
        KeyInput::char('5'),
        KeyInput::char('6'),
        KeyInput::char('7'),
        KeyInput::Backspace,
        KeyInput::Backspace,
    ];
    for key in &script {
        field.handle_key(key);
        assert_eq!(field.cursor(), field.value().chars().count());
        assert!(field.cursor() <= field.capacity());
    }
    assert_eq!(field.value(), "134");
}

#[test]
fn test_exactly_one_indicator_while_not_full() {
    for style in [
        DecorationStyle::TopLine,
        DecorationStyle::MiddleLine,
        DecorationStyle::BottomLine,
    ] {
        let mut field = build_field(4, style);
        for ch in ['a', 'b', 'c'] {
            field.insert_character(ch);
            assert_eq!(field.view().animating(), vec![field.cursor()]);
            assert_eq!(field.active_indicator(), Some(field.cursor()));
        }
        field.insert_character('d');
        assert!(field.view().animating().is_empty());
        assert_eq!(field.active_indicator(), None);
    }
}

#[test]
fn test_full_and_empty_are_silent_no_ops() {
    let mut field = build_field(2, DecorationStyle::BottomLine);
    let values = capture(&field.value_changed);

    assert!(!field.delete_backward());
    assert!(values.lock().is_empty());

    field.insert_text("12");
    let view_before = field.view().clone();
    assert!(!field.insert_character('3'));
    assert_eq!(field.view().directive_count, view_before.directive_count);
    assert_eq!(values.lock().len(), 2);
}

#[test]
fn test_insert_then_delete_restores_fresh_state() {
    for style in ALL_STYLES {
        for placeholder in [false, true] {
            let config = PinFieldConfig::new(4)
                .with_decoration_style(style)
                .with_placeholder_glyph(placeholder);
            let fresh = PinField::build(config.clone(), RecordingView::new()).unwrap();
            let mut field = PinField::build(config, RecordingView::new()).unwrap();

            field.insert_text("123");
            for _ in 0..3 {
                assert!(field.delete_backward());
            }

            assert_eq!(field.value(), "");
            assert_eq!(field.cursor(), 0);
            assert_eq!(field.cell_visuals(), fresh.cell_visuals());
            assert_eq!(field.view().cells, fresh.view().cells);
            assert_eq!(field.active_indicator(), fresh.active_indicator());
        }
    }
}

#[test]
fn test_one_notification_per_accepted_operation() {
    let mut field = build_field(3, DecorationStyle::None);
    let values = capture(&field.value_changed);

    field.insert_text("abcd");
    field.delete_backward();
    field.delete_backward();
    field.delete_backward();
    field.delete_backward();

    assert_eq!(*values.lock(), vec!["a", "ab", "abc", "ab", "a", ""]);
}

#[test]
fn test_cell_visuals_follow_cursor() {
    let mut field = build_field(3, DecorationStyle::BottomLine);
    field.insert_character('7');
    assert_eq!(
        field.cell_visuals(),
        vec![
            CellVisual {
                filled: true,
                shows_active_indicator: false
            },
            CellVisual {
                filled: false,
                shows_active_indicator: true
            },
            CellVisual::default(),
        ]
    );
    let rendered: Vec<CellVisual> = field.cells().iter().map(|cell| cell.visual()).collect();
    assert_eq!(rendered, field.cell_visuals());
    assert_eq!(field.cell_visual(3), None);
}

#[test]
fn test_no_echo_leaves_cells_blank() {
    let config = PinFieldConfig::new(4).with_echo_mode(EchoMode::NoEcho);
    let mut field = PinField::build(config, RecordingView::new()).unwrap();
    field.insert_text("42");
    assert_eq!(field.value(), "42");
    assert!(field.view().cells.iter().all(|cell| cell.text.is_none()));
    assert!(field.cell(0).unwrap().is_filled());
}

#[test]
fn test_disconnected_listener_stops_receiving() {
    let mut field = build_field(4, DecorationStyle::None);
    let values = capture(&field.value_changed);
    field.insert_character('1');

    field.value_changed.disconnect_all();
    field.insert_character('2');
    assert_eq!(*values.lock(), vec!["1"]);
}

#[test]
fn test_fresh_view_matches_expected_cells() {
    let field = build_field(2, DecorationStyle::MiddleLine);
    assert_eq!(
        field.view().cells,
        vec![
            ViewCell {
                text: None,
                overlay_visible: true,
                animating: true
            },
            ViewCell {
                text: None,
                overlay_visible: true,
                animating: false
            },
        ]
    );
}

#[test]
fn test_capacity_four_bottom_line_walkthrough() {
    let mut field = build_field(4, DecorationStyle::BottomLine);
    let values = capture(&field.value_changed);

    for (typed, expected_indicator) in ['1', '2', '3'].into_iter().zip([1, 2, 3]) {
        assert!(field.insert_character(typed));
        assert_eq!(field.view().animating(), vec![expected_indicator]);
    }
    assert!(field.insert_character('4'));
    assert_eq!(field.value(), "1234");
    assert!(field.is_full());
    assert!(field.view().animating().is_empty());
    assert!(field.view().cells.iter().all(|cell| cell.overlay_visible));

    // A fifth character changes nothing.
    let directives_before = field.view().directive_count;
    assert!(!field.insert_character('5'));
    assert_eq!(field.value(), "1234");
    assert_eq!(field.view().directive_count, directives_before);

    for (expected_value, expected_indicator) in [("123", 3), ("12", 2), ("1", 1)] {
        assert!(field.delete_backward());
        assert_eq!(field.value(), expected_value);
        assert_eq!(field.cursor(), expected_indicator);
        assert_eq!(field.view().animating(), vec![expected_indicator]);
        assert_eq!(field.view().cells[expected_indicator].text, None);
    }

    assert_eq!(
        *values.lock(),
        vec!["1", "12", "123", "1234", "123", "12", "1"]
    );
}
