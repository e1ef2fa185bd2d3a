use nostr_sdk::prelude::*;

/// Source of event timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock, whole seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Frozen clock for deterministic signing in tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
