use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;
use core::marker::PhantomData;

use super::{Observer, Stream, Subscription};

/// Stream returned by [`map`].
pub struct Map<S, F, U> {
    source: S,
    f: Rc<F>,
    _out: PhantomData<fn() -> U>,
}

/// Transforms every value of `source` with `f`.
pub fn map<S, F, U>(source: S, f: F) -> Map<S, F, U>
where
    S: Stream,
    F: Fn(&S::Item) -> U + 'static,
    U: Clone + 'static,
{
    Map {
        source,
        f: Rc::new(f),
        _out: PhantomData,
    }
}

impl<S, F, U> Stream for Map<S, F, U>
where
    S: Stream,
    F: Fn(&S::Item) -> U + 'static,
    U: Clone + 'static,
{
    type Item = U;

    fn subscribe(&self, observer: Observer<U>) -> Subscription {
        let f = Rc::clone(&self.f);
        self.source.subscribe(Rc::new(move |value: &S::Item| {
            let mapped = f(value);
            observer(&mapped);
        }))
    }
}

impl<S: fmt::Debug, F, U> fmt::Debug for Map<S, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// A tuple of streams that can be combined by [`combine_latest`].
pub trait CombineSources {
    type Item: Clone + 'static;

    fn subscribe_combined(&self, observer: Observer<Self::Item>) -> Subscription;
}

/// Stream returned by [`combine_latest`].
#[derive(Clone, Debug)]
pub struct CombineLatest<S> {
    sources: S,
}

/// Combines a tuple of 2 to 4 streams.
///
/// Emits a tuple of the latest values once every source has emitted at least once, and again on
/// every later emission of any source.
pub fn combine_latest<S: CombineSources>(sources: S) -> CombineLatest<S> {
    CombineLatest { sources }
}

impl<S: CombineSources> Stream for CombineLatest<S> {
    type Item = S::Item;

    fn subscribe(&self, observer: Observer<S::Item>) -> Subscription {
        self.sources.subscribe_combined(observer)
    }
}

/// The latest value of every source, once each one has emitted.
trait AllSome {
    type Out;

    fn all_some(&self) -> Option<Self::Out>;
}

macro_rules! impl_combine_sources {
    ($($S:ident $v:ident $idx:tt),+) => {
        impl<$($S: Clone),+> AllSome for ($(Option<$S>,)+) {
            type Out = ($($S,)+);

            fn all_some(&self) -> Option<Self::Out> {
                match self {
                    ($(Some($v),)+) => Some(($($v.clone(),)+)),
                    _ => None,
                }
            }
        }

        impl<$($S: Stream),+> CombineSources for ($($S,)+) {
            type Item = ($($S::Item,)+);

            fn subscribe_combined(&self, observer: Observer<Self::Item>) -> Subscription {
                let latest: Rc<RefCell<($(Option<$S::Item>,)+)>> = Rc::default();
                let mut subscription = Subscription::empty();
                $(
                    let slot_latest = Rc::clone(&latest);
                    let slot_observer = Rc::clone(&observer);
                    subscription.add(self.$idx.subscribe(Rc::new(move |value: &$S::Item| {
                        let combined = {
                            let mut slots = slot_latest.borrow_mut();
                            slots.$idx = Some(value.clone());
                            slots.all_some()
                        };
                        if let Some(combined) = combined {
                            slot_observer(&combined);
                        }
                    })));
                )+
                subscription
            }
        }
    };
}

impl_combine_sources!(A a 0, B b 1);
impl_combine_sources!(A a 0, B b 1, C c 2);
impl_combine_sources!(A a 0, B b 1, C c 2, D d 3);

/// Stream returned by [`with_latest_from`].
#[derive(Clone, Debug)]
pub struct WithLatestFrom<P, S> {
    primary: P,
    secondary: S,
}

/// Emits `(primary, latest secondary)` on every emission of `primary`.
///
/// Primary values are dropped while `secondary` has never emitted. Combine several secondaries
/// with [`combine_latest`] first.
pub fn with_latest_from<P: Stream, S: Stream>(primary: P, secondary: S) -> WithLatestFrom<P, S> {
    WithLatestFrom { primary, secondary }
}

impl<P: Stream, S: Stream> Stream for WithLatestFrom<P, S> {
    type Item = (P::Item, S::Item);

    fn subscribe(&self, observer: Observer<Self::Item>) -> Subscription {
        let latest: Rc<RefCell<Option<S::Item>>> = Rc::default();

        // Secondary first, so a hot secondary is already known when a hot primary replays.
        let sink = Rc::clone(&latest);
        let mut subscription = self.secondary.subscribe(Rc::new(move |value: &S::Item| {
            *sink.borrow_mut() = Some(value.clone());
        }));

        let source = Rc::clone(&latest);
        subscription.add(self.primary.subscribe(Rc::new(move |value: &P::Item| {
            let secondary = source.borrow().clone();
            if let Some(secondary) = secondary {
                observer(&(value.clone(), secondary));
            }
        })));
        subscription
    }
}
