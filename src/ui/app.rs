use crate::config::OverflowPolicy;
use crate::ui::counter::{counter_view, CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::{Store, Update};
use crate::ui::render::Hit;
use crate::ui::tree::Node;
use std::cell::Cell;
use std::rc::Rc;

pub struct App {
    should_quit: bool,
    /// Counter state (MVI pattern). Only this app instance mutates it.
    counter: Store<CounterReducer>,
    /// Activation index of the focused button.
    focus: usize,
    /// Set by the store observer and by layout changes; cleared when drawn.
    needs_render: Rc<Cell<bool>>,
    /// Button areas from the last draw.
    hits: Vec<Hit>,
}

impl App {
    pub fn new(overflow: OverflowPolicy) -> Self {
        let needs_render = Rc::new(Cell::new(true));
        let mut counter = Store::<CounterReducer>::new(CounterState::new(overflow));

        let trigger = Rc::clone(&needs_render);
        counter.subscribe(move |state: &CounterState| {
            tracing::debug!(value = state.read(), "counter committed");
            trigger.set(true);
        });

        Self {
            should_quit: false,
            counter,
            focus: 0,
            needs_render,
            hits: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn value(&self) -> i64 {
        self.counter.state().read()
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.counter.state().overflow()
    }

    /// The view for the current value.
    pub fn tree(&self) -> Node<CounterIntent> {
        counter_view(self.value())
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns `true` once per pending redraw.
    pub fn take_render_request(&self) -> bool {
        self.needs_render.replace(false)
    }

    pub fn request_render(&self) {
        self.needs_render.set(true);
    }

    /// Activate the button at `index`. Returns whether the counter changed.
    pub fn activate(&mut self, index: usize) -> bool {
        let tree = self.tree();
        let Some(intent) = tree.buttons().get(index).map(|(_, intent)| **intent) else {
            return false;
        };
        self.dispatch(intent)
    }

    /// Activate the button labelled `label`. Returns whether the counter changed.
    pub fn press(&mut self, label: &str) -> bool {
        let tree = self.tree();
        let Some((_, intent)) = tree.find_button(label) else {
            return false;
        };
        let intent = *intent;
        self.dispatch(intent)
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.focus)
    }

    fn dispatch(&mut self, intent: CounterIntent) -> bool {
        let changed = self.counter.dispatch(intent);
        if !changed {
            tracing::warn!(
                ?intent,
                value = self.value(),
                overflow = self.overflow().as_str(),
                "transition dropped at integer bound"
            );
        }
        changed
    }

    /// Put the counter back to 0, keeping its overflow policy.
    pub fn reset(&mut self) -> bool {
        let fresh = CounterState::new(self.overflow());
        self.counter.set(Update::Replace(fresh))
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.tree().buttons().len();
        if count == 0 {
            return;
        }
        let next = (self.focus as isize + delta).rem_euclid(count as isize);
        self.focus = next as usize;
        self.request_render();
    }

    pub fn set_hits(&mut self, hits: Vec<Hit>) {
        self.hits = hits;
    }

    /// Focus and activate the button under the given cell, if any.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some(button) = self
            .hits
            .iter()
            .find(|hit| hit.contains(column, row))
            .map(|hit| hit.button)
        else {
            return false;
        };
        if self.focus != button {
            self.focus = button;
            self.request_render();
        }
        self.activate(button)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::trace!(cols, rows, "terminal resized");
        self.hits.clear();
        self.request_render();
    }
}
