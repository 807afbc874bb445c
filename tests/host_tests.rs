// Integration tests for the program host and the TUI shell around it

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use vonneumann::host::{HostShell, ProgramId, ProgramRegistry};
use vonneumann::ui::App;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key_event(key(KeyCode::Char(ch)));
    }
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 20)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for (i, cell) in buffer.content().iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            text.push('\n');
        }
    }
    text
}

#[test]
fn test_registry_catalog() {
    let registry = ProgramRegistry::builtin();
    let entries = registry.entries();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, ProgramId::Calculator);
    assert_eq!(entries[0].label, "Calculator");
    assert_eq!(entries[1].id, ProgramId::Game);
    assert_eq!(entries[1].label, "Tic-Tac-Toe");
    assert_eq!(entries[2].id, ProgramId::TextEditor);
    assert_eq!(entries[2].label, "Text Editor");

    for id in ProgramId::ALL {
        assert_eq!(registry.mount(id).id(), id);
    }
}

#[test]
fn test_registry_lookup() {
    let registry = ProgramRegistry::builtin();

    assert_eq!(registry.lookup("calculator"), Ok(ProgramId::Calculator));
    assert_eq!(registry.lookup("calc"), Ok(ProgramId::Calculator));
    assert_eq!(registry.lookup("Tic-Tac-Toe"), Ok(ProgramId::Game));
    assert_eq!(registry.lookup("  game "), Ok(ProgramId::Game));
    assert_eq!(registry.lookup("EDITOR"), Ok(ProgramId::TextEditor));

    let err = registry.lookup("spreadsheet").unwrap_err();
    assert_eq!(err.to_string(), "unknown program 'spreadsheet'");
}

#[test]
fn test_program_cycle() {
    assert_eq!(ProgramId::Calculator.next(), ProgramId::Game);
    assert_eq!(ProgramId::TextEditor.next(), ProgramId::Calculator);
    assert_eq!(ProgramId::Calculator.prev(), ProgramId::TextEditor);
}

#[test]
fn test_default_host() {
    let host = HostShell::new();
    assert_eq!(host.active_program(), ProgramId::Calculator);
    assert_eq!(host.active_label(), "Calculator");
    assert_eq!(host.active().id(), ProgramId::Calculator);
}

#[test]
fn test_switch_program() {
    let mut host = HostShell::new();
    let first_mount = host.mount_id();

    assert!(host.switch_program(ProgramId::Game));
    assert_eq!(host.active_program(), ProgramId::Game);
    assert_eq!(host.active_label(), "Tic-Tac-Toe");
    assert_eq!(host.active().id(), ProgramId::Game);
    assert_ne!(host.mount_id(), first_mount);
}

#[test]
fn test_unknown_program_is_ignored() {
    let mut host = HostShell::with_program(ProgramId::TextEditor);
    let mount = host.mount_id();

    assert!(!host.switch_program_by_name("spreadsheet"));
    assert!(!host.switch_program_by_name(""));
    assert_eq!(host.active_program(), ProgramId::TextEditor);
    assert_eq!(host.mount_id(), mount);

    assert!(host.switch_program_by_name("calc"));
    assert_eq!(host.active_program(), ProgramId::Calculator);
}

#[test]
fn test_reselecting_active_program_keeps_widget() {
    let mut host = HostShell::new();
    let mount = host.mount_id();

    assert!(!host.switch_program(ProgramId::Calculator));
    assert_eq!(host.mount_id(), mount);
}

#[test]
fn test_render_is_stable_without_switch() {
    let mut host = HostShell::new();
    let first = host.render().mount;
    let second = host.render().mount;
    assert_eq!(first, second);

    let view = host.render();
    assert_eq!(view.id, ProgramId::Calculator);
    assert_eq!(view.label, "Calculator");

    host.switch_program(ProgramId::Game);
    assert_ne!(host.render().mount, first);
}

#[test]
fn test_calculator_round_trip_resets_state() {
    let mut app = App::new(HostShell::new());

    type_text(&mut app, "12+3");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.host().active().status(), "= 15");
    assert!(draw(&app).contains("12+3"));

    app.handle_key_event(key(KeyCode::F(2)));
    assert_eq!(app.host().active_program(), ProgramId::Game);
    app.handle_key_event(key(KeyCode::F(1)));
    assert_eq!(app.host().active_program(), ProgramId::Calculator);

    assert_eq!(
        app.host().active().status(),
        "Type an expression, Enter to evaluate"
    );
    let screen = draw(&app);
    assert!(!screen.contains("12+3"));
    assert!(screen.contains("e.g. (2+3)*4/5"));
}

#[test]
fn test_calculator_shows_invalid_expression() {
    let mut app = App::new(HostShell::new());

    type_text(&mut app, "2/0=");
    assert!(app.host().active().status().starts_with("Invalid expression"));
    assert!(draw(&app).contains("Invalid expression"));
}

#[test]
fn test_game_round_trip_resets_board() {
    let mut app = App::new(HostShell::with_program(ProgramId::Game));

    type_text(&mut app, "5");
    assert_eq!(app.host().active().status(), "Turn: O");

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.host().active_program(), ProgramId::TextEditor);
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.host().active_program(), ProgramId::Game);

    assert_eq!(app.host().active().status(), "Turn: X");
}

#[test]
fn test_game_keys() {
    let mut app = App::new(HostShell::with_program(ProgramId::Game));

    // X takes the top row while O plays the middle row
    type_text(&mut app, "14253");
    assert_eq!(app.host().active().status(), "Winner: X");

    // Board is frozen until restart
    type_text(&mut app, "9");
    assert_eq!(app.host().active().status(), "Winner: X");

    type_text(&mut app, "r");
    assert_eq!(app.host().active().status(), "Turn: X");

    // Cursor starts on the centre cell
    app.handle_key_event(key(KeyCode::Up));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.host().active().status(), "Turn: O");
}

#[test]
fn test_text_editor_word_count() {
    let mut app = App::new(HostShell::with_program(ProgramId::TextEditor));
    assert!(app.host().active().status().starts_with("11 words"));

    type_text(&mut app, " more words");
    assert!(app.host().active().status().starts_with("13 words"));
    assert!(draw(&app).contains("13 words"));

    for _ in 0..6 {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    assert!(app.host().active().status().starts_with("12 words"));
}

#[test]
fn test_frame_shows_running_program() {
    let mut app = App::new(HostShell::new());
    assert!(draw(&app).contains("Running program: Calculator"));

    app.handle_key_event(key(KeyCode::F(3)));
    let screen = draw(&app);
    assert!(screen.contains("Running program: Text Editor"));
    assert!(screen.contains("11 words"));
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(HostShell::new());
    assert!(!app.should_quit());
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());

    let mut app = App::new(HostShell::new());
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
    // Ctrl+C never reaches the calculator input
    assert_eq!(
        app.host().active().status(),
        "Type an expression, Enter to evaluate"
    );
}
