//! A tiny synchronous push-stream toolkit.
//!
//! Two subject flavours carry values through the engine graph:
//! - [`Subject`] is stateful ("hot"): it holds a value and replays it to every new observer.
//! - [`EventSubject`] is a plain event emitter ("cold"): late observers miss past events.
//!
//! Operators ([`map`], [`combine_latest`], [`with_latest_from`]) are lazy: they only subscribe to
//! their sources when they are subscribed to themselves, so a hot source replays through a
//! freshly built operator chain the same way it replays to a direct observer.
//!
//! Everything is single-threaded and depth-first: `next` runs every observer (and everything
//! they trigger) before it returns.

mod operators;
mod subject;
mod subscription;

pub use operators::{
    CombineLatest, CombineSources, Map, WithLatestFrom, combine_latest, map, with_latest_from,
};
pub use subject::{EventSubject, Observer, Subject};
pub use subscription::Subscription;

use alloc::rc::Rc;

/// A source of values that observers can subscribe to.
pub trait Stream {
    type Item: Clone + 'static;

    fn subscribe(&self, observer: Observer<Self::Item>) -> Subscription;

    /// Same as [`Stream::subscribe`], for a plain closure.
    fn subscribe_with(&self, f: impl Fn(&Self::Item) + 'static) -> Subscription
    where
        Self: Sized,
    {
        self.subscribe(Rc::new(f))
    }
}

impl<S: Stream + ?Sized> Stream for Rc<S> {
    type Item = S::Item;

    fn subscribe(&self, observer: Observer<Self::Item>) -> Subscription {
        (**self).subscribe(observer)
    }
}
