use std::rc::Rc;

use log::trace;

/// Receives the events broadcast by a [`Subject`].
pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

/// Maintains a set of observers and broadcasts events to them.
pub trait Subject<E: Clone>: Sized {
    /// Appends `observer`; attaching the same handle twice notifies it twice.
    fn attach(&mut self, observer: SharedObserver<Self, E>);

    /// Removes every entry sharing the identity of `observer`.
    fn detach(&mut self, observer: SharedObserver<Self, E>);

    fn notify(&self, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

/// Ordered collection of shared observer handles, notified in insertion order.
pub struct SharedObservers<S, E> {
    observers: Vec<SharedObserver<S, E>>,
}

impl<S, E> Default for SharedObservers<S, E> {
    fn default() -> Self {
        Self { observers: vec![] }
    }
}

impl<S, E> SharedObservers<S, E>
where
    S: Subject<E>,
    E: Clone,
{
    pub fn push(&mut self, observer: SharedObserver<S, E>) {
        self.observers.push(observer);
    }

    /// Returns the number of removed entries. Identity is the handle's
    /// allocation, never the observer's content.
    pub fn remove_all(&mut self, observer: &SharedObserver<S, E>) -> usize {
        let before = self.observers.len();
        self.observers.retain(|obs| !Rc::ptr_eq(obs, observer));
        before - self.observers.len()
    }

    pub fn contains(&self, observer: &SharedObserver<S, E>) -> bool {
        self.observers.iter().any(|obs| Rc::ptr_eq(obs, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&self, source: &S, event: E) {
        for (index, obs) in self.observers.iter().enumerate() {
            trace!("Delivering event to observer #{index}");
            obs.update(source, event.clone());
        }
    }
}
