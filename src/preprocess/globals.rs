//! Global bindings: flag masks and the test id counter.

use std::sync::atomic::{AtomicI64, Ordering};

use minijinja::Environment;

use crate::constants::FLAG_BITS;

/// Name of the counter global.
pub const TEST_ID: &str = "test_id";

/// `test_id()`: 1, 2, 3, ... for the lifetime of one environment.
///
/// Every call from any template of the run advances the same counter, so
/// `{% do test_id() %}` can be used to skip an id without printing it.
#[derive(Debug)]
pub struct TestId {
    next: AtomicI64,
}

impl TestId {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Hand out the next id.
    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for TestId {
    fn default() -> Self {
        Self::new()
    }
}

/// Names bound by [`register`].
pub fn names() -> impl Iterator<Item = &'static str> {
    FLAG_BITS.iter().map(|(name, _)| *name).chain([TEST_ID])
}

pub(crate) fn register(env: &mut Environment<'_>) {
    for (name, bit) in FLAG_BITS {
        env.add_global(*name, 1_i64 << bit);
    }
    let counter = TestId::new();
    env.add_function(TEST_ID, move || counter.next_id());
}
