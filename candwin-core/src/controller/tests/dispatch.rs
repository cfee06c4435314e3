use super::*;

fn frame(fields: &[&str]) -> Vec<u8> {
    fields.join("\x0c").into_bytes()
}

#[test]
fn test_activate_frame() {
    let mut window = CandidateWindow::default();
    let actions = window.handle_frame(&frame(&[
        "activate",
        "charset=UTF-8",
        "display_limit=10",
        "a\x07あ\x07",
        "s\x07い\x07",
        "",
    ]));
    assert_eq!(window.nr_candidates(), 2);
    assert_eq!(window.display_limit(), 10);
    assert!(window.is_active());
    assert_eq!(actions.last(), Some(&WindowAction::Show));
    assert_eq!(window.grid().candidate_at(CellPos::new(2, 1)), Some(1));
}

#[test]
fn test_select_frame_sets_highlight() {
    let mut window = activated(25, 10);
    window.handle_frame(&frame(&["select", "12", "1"]));
    assert_eq!(window.candidate_index(), Some(12));
    assert_eq!(window.page_index(), 1);
    assert!(window.need_hilite());

    window.handle_frame(&frame(&["select", "13", "0"]));
    assert!(!window.need_hilite());
}

#[test]
fn test_activate_resets_highlight() {
    let mut window = activated(25, 10);
    window.handle_frame(&frame(&["select", "1", "1"]));
    window.handle_frame(&frame(&["activate", "charset=UTF-8", "1\x07x"]));
    assert!(!window.need_hilite());
}

#[test]
fn test_show_page_frame_always_shows() {
    let mut window = CandidateWindow::default();
    window.reserve(25, 10);
    let actions = window.handle_frame(&frame(&["show_page", "1"]));
    assert_eq!(window.page_index(), 1);
    assert_eq!(actions.last(), Some(&WindowAction::Show));
}

#[test]
fn test_move_frame() {
    let mut window = CandidateWindow::default();
    let actions = window.handle_frame(&frame(&["move", "15", "25"]));
    assert_eq!(window.anchor(), crate::layout::Point::new(15, 25));
    assert_eq!(
        actions,
        vec![WindowAction::MoveTo(crate::layout::Point::new(15, 25))]
    );
}

#[test]
fn test_move_frame_with_huge_coordinates() {
    let mut window = CandidateWindow::default();
    window.configure(crate::layout::Size::new(80, 200));
    window.take_actions();

    let actions = window.handle_frame(&frame(&["move", "99999999999", "-99999999999"]));
    let [WindowAction::MoveTo(position)] = actions.as_slice() else {
        panic!("expected a single move, got {actions:?}");
    };
    assert!((0..=1024 - 80).contains(&position.x));
    assert!((0..=768 - 200).contains(&position.y));
    assert_eq!(window.anchor(), crate::layout::Point::new(i32::MAX, i32::MIN));
}

#[test]
fn test_set_nr_candidates_with_huge_count() {
    let mut window = CandidateWindow::default();
    window.handle_frame(&frame(&["set_nr_candidates", "4294967295", "1"]));
    assert_eq!(window.nr_candidates(), u32::MAX as usize);
    assert_eq!(window.page_count(), u32::MAX as usize);

    window.handle_frame(&frame(&["show_page", "-1"]));
    assert_eq!(window.page_index(), u32::MAX as usize - 1);
    assert_eq!(window.grid().occupied_count(), 0);
}

#[test]
fn test_hide_show_deactivate_frames() {
    let mut window = activated(3, 0);
    assert_eq!(window.handle_frame(b"hide"), vec![WindowAction::Hide]);
    assert_eq!(window.handle_frame(b"show").last(), Some(&WindowAction::Show));
    assert_eq!(window.handle_frame(b"deactivate"), vec![WindowAction::Hide]);
    assert!(window.handle_frame(b"show").is_empty());
}

#[test]
fn test_caret_frames() {
    let mut window = CandidateWindow::default();
    let actions = window.handle_frame(&frame(&["show_caret_state", "0", "[A]"]));
    assert_eq!(actions.len(), 2);
    assert_eq!(
        window.handle_frame(b"hide_caret_state"),
        vec![WindowAction::Caret(CaretAction::Hide)]
    );
    assert_eq!(window.handle_frame(b"update_caret_state").len(), 1);
}

#[test]
fn test_unknown_command_changes_nothing() {
    let mut window = activated(25, 10);
    window.set_index(14);
    window.take_actions();

    assert!(window.handle_frame(b"explode\x0c1\x0c2").is_empty());
    assert_eq!(window.candidate_index(), Some(14));
    assert_eq!(window.page_index(), 1);
}

#[test]
fn test_malformed_arguments_use_defaults() {
    let mut window = activated(25, 10);
    window.handle_frame(&frame(&["select", "oops"]));
    assert_eq!(window.candidate_index(), Some(0));
    assert!(!window.need_hilite());

    window.handle_frame(b"set_nr_candidates");
    assert_eq!(window.nr_candidates(), 0);
    assert_eq!(window.page_count(), 1);
}

#[test]
fn test_lazy_protocol_sequence() {
    let mut window = CandidateWindow::default();
    window.handle_frame(&frame(&["set_nr_candidates", "15", "10"]));
    window.handle_frame(&frame(&[
        "set_page_candidates",
        "charset=UTF-8",
        "page=0",
        "1\x07a",
        "2\x07b",
        "",
    ]));
    window.handle_frame(&frame(&["show_page", "0"]));
    assert_eq!(window.grid().occupied_count(), 2);

    // Selecting onto an unfilled page shows an empty grid until it arrives
    window.handle_frame(&frame(&["select", "12", "1"]));
    assert_eq!(window.page_index(), 1);
    assert_eq!(window.grid().occupied_count(), 0);

    window.handle_frame(&frame(&[
        "set_page_candidates",
        "charset=UTF-8",
        "page=1",
        "1\x07k",
        "2\x07l",
        "3\x07m",
        "",
    ]));
    assert_eq!(window.grid().candidate_at(CellPos::new(0, 2)), Some(12));
}
