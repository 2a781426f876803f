mod common;

use common::render;
use counter_tui::config::OverflowPolicy;
use counter_tui::ui::app::App;
use counter_tui::ui::input::{handle_key, handle_mouse};
use counter_tui::ui::render::Hit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn key(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn click(app: &mut App, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

/// Lay the app out on a test screen so clicks can be routed.
fn layout(app: &mut App) -> Vec<Hit> {
    let (_, hits) = render(&app.tree(), Some(app.focus()), 40, 5);
    app.set_hits(hits.clone());
    hits
}

#[test]
fn initial_display_is_zero() {
    let app = App::new(OverflowPolicy::Saturate);
    assert_eq!(app.tree().text_content(), "0");
}

#[test]
fn plus_then_minus_displays_one_then_zero() {
    let mut app = App::new(OverflowPolicy::Saturate);
    key(&mut app, KeyCode::Char('+'));
    assert_eq!(app.tree().text_content(), "1");
    key(&mut app, KeyCode::Char('-'));
    assert_eq!(app.tree().text_content(), "0");
}

#[test]
fn arrow_and_vim_keys_map_to_buttons() {
    let mut app = App::new(OverflowPolicy::Saturate);
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Char('k'));
    key(&mut app, KeyCode::Char('='));
    key(&mut app, KeyCode::Down);
    assert_eq!(app.value(), 2);
    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Char('_'));
    assert_eq!(app.value(), 0);
}

#[test]
fn enter_activates_focused_button() {
    let mut app = App::new(OverflowPolicy::Saturate);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.value(), 1);

    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), 1);
    key(&mut app, KeyCode::Char(' '));
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.value(), -1);

    key(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), 0);
}

#[test]
fn r_resets_to_zero() {
    let mut app = App::new(OverflowPolicy::Saturate);
    for _ in 0..5 {
        key(&mut app, KeyCode::Char('+'));
    }
    key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.value(), 0);
}

#[test]
fn q_and_esc_quit() {
    let mut app = App::new(OverflowPolicy::Saturate);
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = App::new(OverflowPolicy::Saturate);
    key(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn click_on_button_focuses_and_activates_it() {
    let mut app = App::new(OverflowPolicy::Saturate);
    let hits = layout(&mut app);

    let minus = hits[1].area;
    click(&mut app, minus.x + 1, minus.y + 1);
    assert_eq!(app.value(), -1);
    assert_eq!(app.focus(), 1);

    let plus = hits[0].area;
    click(&mut app, plus.x, plus.y);
    click(&mut app, plus.x, plus.y);
    assert_eq!(app.value(), 1);
    assert_eq!(app.focus(), 0);
}

#[test]
fn click_outside_buttons_does_nothing() {
    let mut app = App::new(OverflowPolicy::Saturate);
    layout(&mut app);
    click(&mut app, 0, 0);
    assert_eq!(app.value(), 0);
}

#[test]
fn resize_forgets_stale_hit_areas() {
    let mut app = App::new(OverflowPolicy::Saturate);
    let hits = layout(&mut app);
    app.on_resize(80, 24);

    let plus = hits[0].area;
    click(&mut app, plus.x, plus.y);
    assert_eq!(app.value(), 0);
}

#[test]
fn minus_goes_below_zero() {
    let mut app = App::new(OverflowPolicy::Saturate);
    for _ in 0..3 {
        key(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.value(), -3);
}
