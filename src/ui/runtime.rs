use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::{draw, Hit};
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive counter until the user quits or a signal arrives.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let mut app = App::new(config.counter.overflow);
    let events = EventHandler::new(poll_interval, shutdown.clone())?;
    tracing::info!(overflow = app.overflow().as_str(), "counter session started");

    let result = event_loop(&mut app, &events, poll_interval, |app| {
        let mut hits = Vec::new();
        terminal.draw(|frame| hits = draw(frame, app))?;
        Ok(hits)
    });

    // Stops the input thread; it must not read stdin once the terminal is restored.
    shutdown.signal();
    drop(guard);
    tracing::info!(value = app.value(), ok = result.is_ok(), "counter session ended");
    result
}

fn event_loop<F>(
    app: &mut App,
    events: &EventHandler,
    poll_interval: Duration,
    mut redraw: F,
) -> io::Result<()>
where
    F: FnMut(&App) -> io::Result<Vec<Hit>>,
{
    loop {
        if app.take_render_request() {
            let hits = redraw(app)?;
            app.set_hits(hits);
        }
        if app.should_quit() {
            return Ok(());
        }

        match events.next(poll_interval) {
            Ok(event) => handle_event(app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("input thread stopped unexpectedly"));
            }
        }
    }
}

/// Apply one input event to the app. Input failures end the session with an error.
pub fn handle_event(app: &mut App, event: AppEvent) -> io::Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::Shutdown => app.request_quit(),
        AppEvent::InputError(err) => return Err(err),
    }
    Ok(())
}
