//! Host-facing handles around the engine's internal streams.
//!
//! The host never touches an engine subject directly: it writes through [`Input`] and reads
//! through [`Output`].

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::rx::{EventSubject, Stream, Subject, Subscription};

enum InputTarget<T> {
    State(Subject<T>),
    Event(EventSubject<T>),
}

/// A write-only handle to one engine input.
pub struct Input<T> {
    target: InputTarget<T>,
}

impl<T: Clone + 'static> Input<T> {
    /// Pushes a new value into the engine. All dependent outputs are recomputed before this
    /// returns.
    pub fn set(&self, value: T) {
        match &self.target {
            InputTarget::State(subject) => subject.next(value),
            InputTarget::Event(subject) => subject.next(value),
        }
    }
}

impl<T> From<Subject<T>> for Input<T> {
    fn from(subject: Subject<T>) -> Self {
        Self {
            target: InputTarget::State(subject),
        }
    }
}

impl<T> From<EventSubject<T>> for Input<T> {
    fn from(subject: EventSubject<T>) -> Self {
        Self {
            target: InputTarget::Event(subject),
        }
    }
}

impl<T> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.target {
            InputTarget::State(_) => "state",
            InputTarget::Event(_) => "event",
        };
        f.debug_struct("Input").field("kind", &kind).finish()
    }
}

/// A read-only handle to one engine output.
pub struct Output<T: Clone + 'static> {
    source: Rc<dyn Stream<Item = T>>,
    current: Option<Subject<T>>,
    callback: RefCell<Option<Subscription>>,
}

impl<T: Clone + 'static> Output<T> {
    /// An output backed by a stateful subject: it has a current value and replays it.
    pub(crate) fn state(subject: Subject<T>) -> Self {
        Self {
            source: Rc::new(subject.clone()),
            current: Some(subject),
            callback: RefCell::new(None),
        }
    }

    /// An output backed by an event stream: no current value, no replay.
    pub(crate) fn event(stream: impl Stream<Item = T> + 'static) -> Self {
        Self {
            source: Rc::new(stream),
            current: None,
            callback: RefCell::new(None),
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        self.source.subscribe(Rc::new(f))
    }

    /// The current value, for state outputs. Event outputs return `None`.
    pub fn get(&self) -> Option<T> {
        self.current.as_ref().map(Subject::value)
    }

    /// Installs the single host callback for this output, replacing the previous one.
    pub fn set_callback(&self, f: impl Fn(&T) + 'static) {
        let subscription = self.subscribe(f);
        if let Some(prev) = self.callback.replace(Some(subscription)) {
            prev.unsubscribe();
        }
    }

    pub fn clear_callback(&self) {
        if let Some(prev) = self.callback.replace(None) {
            prev.unsubscribe();
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("current", &self.get())
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn input_writes_reach_state_outputs() {
        let subject = Subject::new(0);
        let input = Input::from(subject.clone());
        let output = Output::state(subject);
        input.set(4);
        assert_eq!(output.get(), Some(4));
    }

    #[test]
    fn event_outputs_have_no_current_value() {
        let subject = EventSubject::<u8>::new();
        let output = Output::event(subject.clone());
        subject.next(1);
        assert_eq!(output.get(), None);
    }

    #[test]
    fn set_callback_replaces_the_previous_callback() {
        let subject = EventSubject::<u8>::new();
        let output = Output::event(subject.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        output.set_callback(move |v| first.borrow_mut().push(("first", *v)));
        subject.next(1);

        let second = Rc::clone(&seen);
        output.set_callback(move |v| second.borrow_mut().push(("second", *v)));
        subject.next(2);

        output.clear_callback();
        subject.next(3);

        assert_eq!(*seen.borrow(), vec![("first", 1), ("second", 2)]);
        assert_eq!(subject.observer_count(), 0);
    }
}
