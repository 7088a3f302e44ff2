use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long an emitted notification stays visible. A keyed event is not
/// re-emitted until its previous instance has expired.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

const NO_MATCH_KEY: &str = "filter-no-match";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// What the store has to say, as plain codes plus the contact data the
/// message needs. Rendering belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ContactAdded { name: String },
    ContactDeleted { name: String },
    DuplicateName { name: String },
    DuplicateNumber { number: String },
    FavouriteAdded { name: String },
    FavouriteRemoved { name: String },
    NoMatches,
}

impl StoreEvent {
    pub fn level(&self) -> Level {
        match self {
            StoreEvent::ContactAdded { .. }
            | StoreEvent::ContactDeleted { .. }
            | StoreEvent::FavouriteAdded { .. }
            | StoreEvent::FavouriteRemoved { .. } => Level::Success,
            StoreEvent::DuplicateName { .. } | StoreEvent::DuplicateNumber { .. } => Level::Warning,
            StoreEvent::NoMatches => Level::Error,
        }
    }

    /// Events with a key are collapsed by `DedupSink` while a previous
    /// instance is still visible.
    pub fn dedup_key(&self) -> Option<&'static str> {
        match self {
            StoreEvent::NoMatches => Some(NO_MATCH_KEY),
            _ => None,
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, event: StoreEvent);
}

/// Deduplicating wrapper around a notifier.
///
/// Tracks the last emission instant per dedup key and drops keyed events
/// that arrive while the previous instance is still on screen. Entries
/// expire with the visibility window, so the same key notifies again
/// later. Unkeyed events always pass through.
pub struct DedupSink {
    inner: Box<dyn Notifier>,
    window: Duration,
    last_emitted: HashMap<&'static str, Instant>,
}

impl DedupSink {
    pub fn new(inner: Box<dyn Notifier>) -> Self {
        Self::with_window(inner, DISMISS_AFTER)
    }

    pub fn with_window(inner: Box<dyn Notifier>, window: Duration) -> Self {
        Self {
            inner,
            window,
            last_emitted: HashMap::new(),
        }
    }
}

impl Notifier for DedupSink {
    fn notify(&mut self, event: StoreEvent) {
        if let Some(key) = event.dedup_key() {
            let now = Instant::now();
            if let Some(seen) = self.last_emitted.get(key) {
                if now.duration_since(*seen) < self.window {
                    return;
                }
            }
            self.last_emitted.insert(key, now);
        }

        self.inner.notify(event);
    }
}
