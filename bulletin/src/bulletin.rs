use std::{
    cell::RefCell,
    io::{self, Write},
};

use common::subject_observer::{SharedObserver, SharedObservers, Subject};
use log::{debug, info, warn};

/// Subject broadcasting text messages to its observers.
///
/// Confirmations and observer announcements are written to a single output,
/// stdout unless another one is given with [`Bulletin::with_output`].
pub struct Bulletin {
    observers: SharedObservers<Self, String>,
    output: RefCell<Box<dyn Write>>,
}

impl Default for Bulletin {
    fn default() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Bulletin {
    pub fn with_output(output: impl Write + 'static) -> Self {
        Bulletin {
            observers: SharedObservers::default(),
            output: RefCell::new(Box::new(output)),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Writes one line to the bulletin output.
    pub fn announce(&self, line: &str) {
        let mut output = self.output.borrow_mut();
        if let Err(e) = writeln!(output, "{line}").and_then(|_| output.flush()) {
            warn!("Unable to write bulletin output: {e}");
        }
    }
}

impl Subject<String> for Bulletin {
    fn attach(&mut self, observer: SharedObserver<Self, String>) {
        self.observers.push(observer);
        info!("Observer attached, {} now registered", self.observers.len());
        self.announce("Attached an observer.");
    }

    fn detach(&mut self, observer: SharedObserver<Self, String>) {
        let removed = self.observers.remove_all(&observer);
        debug!("Removed {removed} observer entries");
        self.announce("Detached an observer.");
    }

    fn notify(&self, message: String) {
        info!("Notifying {} observers", self.observers.len());
        self.announce("Notifying observers...");
        self.observers.notify(self, message);
    }
}
