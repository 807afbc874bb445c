// Integration tests for key handling inside each program widget

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vonneumann::game::Mark;
use vonneumann::host::Program;
use vonneumann::text::DEFAULT_TEXT;
use vonneumann::ui::widgets::{CalculatorWidget, GameWidget, TextEditorWidget};

fn press(program: &mut dyn Program, code: KeyCode) -> bool {
    program.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(program: &mut dyn Program, text: &str) {
    for ch in text.chars() {
        press(program, KeyCode::Char(ch));
    }
}

#[test]
fn test_editor_starts_at_end_of_default_text() {
    let editor = TextEditorWidget::new();
    assert_eq!(editor.buffer().content(), DEFAULT_TEXT);
    assert_eq!(editor.cursor(), editor.buffer().char_count());
    assert_eq!(editor.status(), "11 words, 68 chars | Ln 2, Col 47");
}

#[test]
fn test_editor_edits_around_multibyte_char() {
    let mut editor = TextEditorWidget::new();

    // Up keeps the column where possible, otherwise lands on the line end
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.cursor(), 21);

    // Just after the ellipsis
    press(&mut editor, KeyCode::Left);
    type_text(&mut editor, "x");
    assert_eq!(
        editor.buffer().content(),
        "Type your text here…x \nThis is the SAME hardware, different software."
    );
    assert_eq!(editor.cursor(), 21);

    // Just before the ellipsis
    press(&mut editor, KeyCode::Left);
    press(&mut editor, KeyCode::Left);
    press(&mut editor, KeyCode::Delete);
    assert_eq!(
        editor.buffer().content(),
        "Type your text herex \nThis is the SAME hardware, different software."
    );
    assert_eq!(editor.cursor(), 19);

    press(&mut editor, KeyCode::End);
    assert_eq!(editor.cursor(), 21);
    press(&mut editor, KeyCode::Backspace);
    assert_eq!(
        editor.buffer().content(),
        "Type your text herex\nThis is the SAME hardware, different software."
    );
    assert_eq!(editor.buffer().word_count(), 11);
    assert_eq!(editor.status(), "11 words, 67 chars | Ln 1, Col 21");
}

#[test]
fn test_editor_line_navigation_and_newline() {
    let mut editor = TextEditorWidget::new();

    press(&mut editor, KeyCode::Up);
    press(&mut editor, KeyCode::Home);
    assert_eq!(editor.cursor(), 0);
    type_text(&mut editor, "Hi ");
    assert_eq!(editor.buffer().word_count(), 12);

    press(&mut editor, KeyCode::End);
    assert_eq!(editor.cursor(), 24);
    press(&mut editor, KeyCode::Enter);
    assert_eq!(editor.status(), "12 words, 72 chars | Ln 2, Col 1");

    press(&mut editor, KeyCode::Down);
    type_text(&mut editor, "Go ");
    assert_eq!(
        editor.buffer().content(),
        "Hi Type your text here… \n\nGo This is the SAME hardware, different software."
    );
    assert_eq!(editor.status(), "13 words, 75 chars | Ln 3, Col 4");

    // Down on the last line stays put
    press(&mut editor, KeyCode::Down);
    assert_eq!(editor.cursor(), 29);

    // Up through the empty line to the top, then no further
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.status(), "13 words, 75 chars | Ln 2, Col 1");
    press(&mut editor, KeyCode::Up);
    press(&mut editor, KeyCode::Up);
    assert_eq!(editor.cursor(), 0);
}

#[test]
fn test_editor_cursor_stays_in_bounds() {
    let mut editor = TextEditorWidget::new();
    let end = editor.cursor();

    press(&mut editor, KeyCode::Right);
    press(&mut editor, KeyCode::Delete);
    assert_eq!(editor.cursor(), end);
    assert_eq!(editor.buffer().content(), DEFAULT_TEXT);

    for _ in 0..100 {
        press(&mut editor, KeyCode::Left);
    }
    assert_eq!(editor.cursor(), 0);
    press(&mut editor, KeyCode::Backspace);
    assert_eq!(editor.buffer().content(), DEFAULT_TEXT);
}

#[test]
fn test_editor_singular_counts() {
    let mut editor = TextEditorWidget::new();
    press(&mut editor, KeyCode::Home);
    press(&mut editor, KeyCode::Up);
    press(&mut editor, KeyCode::Home);
    while editor.buffer().char_count() > 0 {
        press(&mut editor, KeyCode::Delete);
    }
    assert_eq!(editor.status(), "0 words, 0 chars | Ln 1, Col 1");

    type_text(&mut editor, "a");
    assert_eq!(editor.status(), "1 word, 1 char | Ln 1, Col 2");
}

#[test]
fn test_editor_ignores_control_keys() {
    let mut editor = TextEditorWidget::new();
    let handled = editor.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(!handled);
    assert_eq!(editor.buffer().content(), DEFAULT_TEXT);
}

#[test]
fn test_game_cursor_moves_and_places() {
    let mut game = GameWidget::new();
    assert_eq!(game.cursor(), 4);

    press(&mut game, KeyCode::Up);
    press(&mut game, KeyCode::Left);
    press(&mut game, KeyCode::Left);
    assert_eq!(game.cursor(), 0);

    press(&mut game, KeyCode::Enter);
    assert_eq!(game.board().cell(0), Some(Mark::First));

    for code in [KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Right, KeyCode::Right] {
        press(&mut game, code);
    }
    assert_eq!(game.cursor(), 8);
    press(&mut game, KeyCode::Char(' '));
    assert_eq!(game.board().cell(8), Some(Mark::Second));

    // Number keys jump the cursor too
    type_text(&mut game, "3");
    assert_eq!(game.cursor(), 2);
    assert_eq!(game.board().cell(2), Some(Mark::First));

    type_text(&mut game, "R");
    assert_eq!(game.cursor(), 4);
    assert!(game.board().cells().iter().all(Option::is_none));
}

#[test]
fn test_calculator_widget_input() {
    let mut calc = CalculatorWidget::new();

    type_text(&mut calc, "6*7");
    assert_eq!(calc.calculator().input(), "6*7");
    press(&mut calc, KeyCode::Enter);
    assert_eq!(calc.calculator().display(), "42");

    press(&mut calc, KeyCode::Backspace);
    assert_eq!(calc.calculator().input(), "6*");

    press(&mut calc, KeyCode::Delete);
    assert_eq!(calc.calculator().input(), "");
    assert_eq!(calc.calculator().display(), "42");

    assert!(!press(&mut calc, KeyCode::Tab));
}
