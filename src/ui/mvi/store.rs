//! Owned state container with change notification.

use std::fmt;

use super::reducer::Reducer;

/// A transition request for [`Store::set`].
pub enum Update<S> {
    /// Replace the state with a literal value.
    Replace(S),
    /// Compute the next state from the state current at commit time.
    With(Box<dyn FnOnce(&S) -> S>),
}

impl<S> Update<S> {
    /// Box an updater closure as [`Update::With`].
    pub fn with<F>(f: F) -> Self
    where
        F: FnOnce(&S) -> S + 'static,
    {
        Update::With(Box::new(f))
    }
}

impl<S: fmt::Debug> fmt::Debug for Update<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Update::With(_) => f.write_str("With(..)"),
        }
    }
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer<S> = Box<dyn FnMut(&S)>;

/// Single owner of a piece of UI state.
///
/// Every transition is applied against the latest committed state, so a burst
/// of requests handled in one event cycle composes instead of overwriting each
/// other. Observers are called synchronously, in subscription order, after a
/// transition that actually changed the state.
pub struct Store<R: Reducer> {
    state: R::State,
    observers: Vec<(Subscription, Observer<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state. Never has side effects.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer for `intent` and commit the result.
    ///
    /// Returns `true` when the state changed (and observers were notified).
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        let next = R::reduce(self.state.clone(), intent);
        self.commit(next)
    }

    /// Apply a literal value or an updater, bypassing the reducer.
    pub fn set(&mut self, update: Update<R::State>) -> bool {
        let next = match update {
            Update::Replace(value) => value,
            Update::With(f) => f(&self.state),
        };
        self.commit(next)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    fn commit(&mut self, next: R::State) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
        true
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
