use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    io::{self, Write},
    rc::Rc,
    sync::{Mutex, OnceLock},
};

use common::subject_observer::{Observer, Subject};
use rand::{random, rngs::StdRng, SeedableRng};

static SEEDS: OnceLock<Mutex<HashMap<&'static str, u64>>> = OnceLock::new();

/// Resolves the seed of a scope once: from the env var named after the scope,
/// or at random. The seed is printed so a failing run can be replayed.
fn seed_for(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = SEEDS
        .get_or_init(Default::default)
        .lock()
        .map_err(|e| e.to_string())?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = env::var(scope)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {scope}");
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng_from_scope(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(scope)?))
}

/// Ordered record of `(observer id, event)` deliveries shared by recorders.
pub type Journal<E> = Rc<RefCell<Vec<(usize, E)>>>;

/// Observer writing every event it receives into a shared [`Journal`].
pub struct RecordingObserver<E> {
    id: usize,
    journal: Journal<E>,
}

impl<E> RecordingObserver<E> {
    pub fn new(id: usize, journal: &Journal<E>) -> Self {
        RecordingObserver {
            id,
            journal: journal.clone(),
        }
    }
}

impl<S, E> Observer<S, E> for RecordingObserver<E>
where
    S: Subject<E>,
    E: Clone,
{
    fn update(&self, _: &S, event: E) {
        self.journal.borrow_mut().push((self.id, event));
    }
}

/// In-memory writer whose clones share the same bytes.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.bytes.borrow())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
