use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A handle to one or more registered observers.
///
/// Dropping a `Subscription` keeps the observers registered; call [`Subscription::unsubscribe`]
/// to remove them. The engine graph itself never unsubscribes: it lives exactly as long as the
/// subjects it connects.
#[derive(Default)]
pub struct Subscription {
    teardown: Vec<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: alloc::vec![Box::new(teardown)],
        }
    }

    /// Merges `other` into this subscription so both are torn down together.
    pub fn add(&mut self, other: Subscription) {
        self.teardown.extend(other.teardown);
    }

    pub fn is_empty(&self) -> bool {
        self.teardown.is_empty()
    }

    pub fn unsubscribe(self) {
        for f in self.teardown {
            f();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("observers", &self.teardown.len())
            .finish()
    }
}
