use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use super::{Stream, Subscription};

/// A shared observer callback.
pub type Observer<T> = Rc<dyn Fn(&T)>;

struct Observers<T> {
    next_id: Cell<u64>,
    list: RefCell<Vec<(u64, Observer<T>)>>,
}

impl<T: 'static> Observers<T> {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            next_id: Cell::new(0),
            list: RefCell::new(Vec::new()),
        })
    }

    fn add(self: &Rc<Self>, observer: Observer<T>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.list.borrow_mut().push((id, observer));

        let weak = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(observers) = weak.upgrade() {
                observers.list.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }

    fn len(&self) -> usize {
        self.list.borrow().len()
    }

    fn notify(&self, value: &T) {
        // Snapshot first: observers may subscribe, unsubscribe or emit while we iterate.
        let snapshot: Vec<Observer<T>> = self
            .list
            .borrow()
            .iter()
            .map(|(_, o)| Rc::clone(o))
            .collect();
        for observer in snapshot {
            observer(value);
        }
    }
}

/// A stateful stream: holds a current value and replays it to every new observer.
pub struct Subject<T> {
    value: Rc<RefCell<T>>,
    observers: Rc<Observers<T>>,
}

impl<T: Clone + 'static> Subject<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            observers: Observers::new(),
        }
    }

    /// Returns a clone of the current value.
    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }

    /// Stores `value` and synchronously notifies every current observer, in subscription order.
    pub fn next(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        self.observers.notify(&value);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone + 'static> Stream for Subject<T> {
    type Item = T;

    fn subscribe(&self, observer: Observer<T>) -> Subscription {
        let subscription = self.observers.add(Rc::clone(&observer));
        let current = self.value();
        observer(&current);
        subscription
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            observers: Rc::clone(&self.observers),
        }
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("value", &*self.value.borrow())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A stateless event stream: observers only see events emitted after they subscribed.
pub struct EventSubject<T> {
    observers: Rc<Observers<T>>,
}

impl<T: Clone + 'static> EventSubject<T> {
    pub fn new() -> Self {
        Self {
            observers: Observers::new(),
        }
    }

    pub fn next(&self, value: T) {
        self.observers.notify(&value);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone + 'static> Default for EventSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Stream for EventSubject<T> {
    type Item = T;

    fn subscribe(&self, observer: Observer<T>) -> Subscription {
        self.observers.add(observer)
    }
}

impl<T> Clone for EventSubject<T> {
    fn clone(&self) -> Self {
        Self {
            observers: Rc::clone(&self.observers),
        }
    }
}

impl<T: Clone + 'static> fmt::Debug for EventSubject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSubject")
            .field("observers", &self.observers.len())
            .finish()
    }
}
