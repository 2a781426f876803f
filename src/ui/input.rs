use crate::ui::app::App;
use crate::ui::counter::{DECREMENT_LABEL, INCREMENT_LABEL};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            app.press(INCREMENT_LABEL);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Down => {
            app.press(DECREMENT_LABEL);
        }
        KeyCode::Char('r') => {
            app.reset();
        }
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
