use std::io::Write;

use candwin_core::layout::Point;
use candwin_core::{CandidateWindow, CellPos};
use candwin_helper::{ConsoleCaret, ConsoleRenderer, EofPolicy, Settings, transport};
use tempfile::NamedTempFile;
use tokio_test::block_on;
use tokio_test::io::Builder;

fn settings_from(content: &str) -> Settings {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    Settings::load_or_default(Some(file.path()))
}

#[test]
fn test_session_with_custom_layout() {
    let settings = settings_from(
        r#"
[layout]
labels = ["a", "s", "d", "f"]

[screen]
width = 640
height = 480

[transport]
on_eof = "shutdown"
"#,
    );

    let mut window = CandidateWindow::with_screen(settings.label_table(), settings.screen_size());
    let mut renderer = ConsoleRenderer::new(Vec::new());
    let mut caret = ConsoleCaret::default();
    let reader = Builder::new()
        .read(b"activate\x0ccharset=UTF-8\x0cdisplay_limit=4\x0c")
        .read(b"a\x07one\x0cs\x07two\x0cd\x07three\x0cf\x07four\x0ca\x07five\x0c\x0c")
        .read(b"move\x0c600\x0c100\x0c\x0c")
        .build();

    let result = block_on(transport::run(
        reader,
        &mut window,
        &mut renderer,
        &mut caret,
        settings.transport.on_eof,
    ));
    assert!(result.is_ok());
    assert_eq!(window.page_count(), 2);
    assert_eq!(window.grid().candidate_at(CellPos::new(0, 3)), Some(3));
    // 600 + 80 overflows the 640 wide screen
    assert_eq!(window.position(), Point::new(520, 100));

    assert_eq!(window.pick_label('d'), Some(2));
    let actions = window.take_actions();
    candwin_core::render::apply(&actions, &mut renderer, &mut caret);
    assert_eq!(renderer.into_inner(), b"index\n2\n\n");
}

#[test]
fn test_default_policy_fails_on_eof() {
    let settings = Settings::default();
    assert_eq!(settings.transport.on_eof, EofPolicy::Exit);

    let mut window = CandidateWindow::with_screen(settings.label_table(), settings.screen_size());
    let mut renderer = ConsoleRenderer::new(Vec::new());
    let mut caret = ConsoleCaret::default();
    let reader = Builder::new().read(b"show\x0c\x0c").build();

    let result = block_on(transport::run(
        reader,
        &mut window,
        &mut renderer,
        &mut caret,
        settings.transport.on_eof,
    ));
    assert!(result.is_err());
    // Not activated, so show is ignored
    assert!(!renderer.is_visible());
}
