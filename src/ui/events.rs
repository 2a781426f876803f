use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// Reading the terminal failed; the input thread has stopped.
    InputError(io::Error),
}

/// Reads terminal input on its own thread and hands it to the UI thread
/// in arrival order.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the shutdown flag is checked frequently
                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "input poll failed");
                        let _ = tx.send(AppEvent::InputError(err));
                        break;
                    }
                }

                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "input read failed");
                        let _ = tx.send(AppEvent::InputError(err));
                        break;
                    }
                };

                if tx.send(forwarded).is_err() {
                    // UI thread is gone
                    break;
                }
            })?;

        Ok(Self { rx })
    }

    #[cfg(test)]
    pub(crate) fn from_receiver(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
