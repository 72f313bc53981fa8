mod bulletin;
mod named_observer;

pub use bulletin::Bulletin;
pub use named_observer::NamedObserver;
