use common::subject_observer::Observer;
use log::trace;

use crate::Bulletin;

/// Observer announcing every message it receives on the notifying bulletin,
/// prefixed by its name.
pub struct NamedObserver {
    name: String,
}

impl NamedObserver {
    pub fn new(name: impl Into<String>) -> Self {
        NamedObserver { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self, message: &str) -> String {
        format!("Observer {} received message: {}", self.name, message)
    }
}

impl Observer<Bulletin, String> for NamedObserver {
    fn update(&self, source: &Bulletin, message: String) {
        trace!(
            "{} notified by a bulletin with {} observers",
            self.name,
            source.observer_count()
        );
        source.announce(&self.describe(&message));
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::Subject;
    use common_test::SharedBuffer;

    use crate::Bulletin;

    use super::NamedObserver;

    #[test]
    fn test_named_observer_describe() {
        let observer = NamedObserver::new("Observer1");

        assert_eq!("Observer1", observer.name());
        assert_eq!(
            "Observer Observer1 received message: First Message",
            observer.describe("First Message")
        );
    }

    #[test]
    fn test_named_observer_shared_with_bulletin() {
        // Given
        let observer = Rc::new(NamedObserver::new("Observer1"));
        let output = SharedBuffer::default();
        let mut bulletin = Bulletin::with_output(output.clone());

        // When
        bulletin.attach(observer.clone());
        bulletin.notify("First Message".to_string());

        // Then
        let lines = output.lines();
        assert_eq!(
            Some("Observer Observer1 received message: First Message"),
            lines.last().map(String::as_str)
        );
        assert_eq!(
            2,
            Rc::strong_count(&observer),
            "Caller and bulletin should share the observer"
        );
        bulletin.detach(observer.clone());
        assert_eq!(1, Rc::strong_count(&observer));
    }
}
