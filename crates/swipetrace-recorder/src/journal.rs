#![forbid(unsafe_code)]

//! The bounded, concurrently-writable gesture event journal.
//!
//! [`GestureJournal`] keeps a fixed-capacity ring of per-gesture
//! [`Session`]s. Producers call `record_*` from any thread; one mutex
//! serializes the find-or-create / compare-tail / append-or-increment
//! sequence and nothing else. Payloads are constructed before the lock
//! and rendering happens on a snapshot after it, so producers on
//! latency-sensitive threads only ever wait for the append itself.
//!
//! There is deliberately no global instance: construct one journal at
//! startup and share it via `Arc<GestureJournal>`.
//!
//! # Usage
//!
//! ```
//! use swipetrace_core::gesture_event::GestureEventKind;
//! use swipetrace_recorder::journal::GestureJournal;
//!
//! let journal = GestureJournal::new();
//! journal.begin_session();
//! journal.record_gesture_event(GestureEventKind::MotionDown);
//! journal.record_numeric("onMotionEvent", 2);
//! journal.record_gesture_event(GestureEventKind::MotionUp);
//!
//! let dump = journal.dump();
//! assert!(dump.contains("No errors detected."));
//! ```
//!
//! # Invariants
//!
//! 1. Session ids are process-lifetime monotonic and never reused, even
//!    across [`clear`](GestureJournal::clear).
//! 2. At most `capacity` sessions are retained; opening a session beyond
//!    that evicts the least-recently-created one. Eviction is the only
//!    path (besides `clear`) that removes history.
//! 3. Entries within a session are in non-decreasing timestamp order:
//!    timestamps come from one monotonic clock and are assigned under the
//!    same lock that appends.
//!
//! # Failure modes
//!
//! None of the journal operations fail. A session lookup miss is the
//! expected first-event case and creates the session; a poisoned lock is
//! recovered, since losing gesture history to an unrelated panic would
//! defeat the journal's purpose.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Instant, SystemTime};

use swipetrace_core::compound::CompoundString;
use swipetrace_core::entry::{EventEntry, Session, SessionId};
use swipetrace_core::gesture_event::GestureEventKind;
use swipetrace_core::validator::ValidatorConfig;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Capacity and validation bounds for a journal.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Number of gesture sessions retained (default: 10, minimum 1).
    pub capacity: usize,
    /// Bounds applied when the dump replays sessions through the validator.
    pub validator: ValidatorConfig,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            validator: ValidatorConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// GestureJournal
// ---------------------------------------------------------------------------

/// A fixed-capacity ring of per-gesture event histories.
#[derive(Debug)]
pub struct GestureJournal {
    capacity: usize,
    validator: ValidatorConfig,
    /// Id of the session currently receiving events. Atomic so producers
    /// can tag events into the gesture in progress without the lock.
    current_id: AtomicU32,
    /// Monotonic anchor for entry timestamps.
    start_instant: Instant,
    /// Wall-clock anchor; the dump maps monotonic offsets through it.
    start_wall: SystemTime,
    state: Mutex<JournalState>,
}

#[derive(Debug)]
struct JournalState {
    sessions: VecDeque<Session>,
    /// Mode recorded by the most recent `begin_session*`, applied when the
    /// session is lazily created on its first event.
    next_mode: bool,
}

impl Default for GestureJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureJournal {
    /// Create a journal with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecorderConfig::default())
    }

    /// Create a journal with explicit capacity and validation bounds.
    #[must_use]
    pub fn with_config(config: RecorderConfig) -> Self {
        Self {
            capacity: config.capacity.max(1),
            validator: config.validator,
            current_id: AtomicU32::new(0),
            start_instant: Instant::now(),
            start_wall: SystemTime::now(),
            state: Mutex::new(JournalState {
                sessions: VecDeque::new(),
                next_mode: true,
            }),
        }
    }

    /// Number of sessions the ring retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn validator_config(&self) -> &ValidatorConfig {
        &self.validator
    }

    pub(crate) fn wall_anchor(&self) -> SystemTime {
        self.start_wall
    }

    // -- session lifecycle --------------------------------------------------

    /// Open a new gesture session in gestural navigation mode and return
    /// its id. Called by the orchestrating producer when a gesture starts.
    pub fn begin_session(&self) -> SessionId {
        self.begin_session_with_mode(true)
    }

    /// Open a new gesture session, recording whether gesture navigation is
    /// active; sessions opened while it is inactive are skipped by the
    /// validator at dump time.
    pub fn begin_session_with_mode(&self, gestural: bool) -> SessionId {
        let mut state = self.lock();
        let id = SessionId(self.current_id.fetch_add(1, Ordering::Relaxed) + 1);
        state.next_mode = gestural;
        drop(state);
        tracing::debug!(session = id.0, gestural, "gesture session started");
        id
    }

    /// The session id in effect: producers use it to tag further events
    /// into the gesture already in progress rather than starting a new one.
    #[must_use]
    pub fn current_session_id(&self) -> SessionId {
        SessionId(self.current_id.load(Ordering::Relaxed))
    }

    /// Drop all retained sessions. Ids keep increasing.
    pub fn clear(&self) {
        self.lock().sessions.clear();
        tracing::debug!("gesture history cleared");
    }

    // -- recording ----------------------------------------------------------

    /// Record a bare diagnostic line.
    pub fn record_one_off(&self, label: impl Into<String>) {
        self.append(EventEntry::one_off(label));
    }

    /// Record a diagnostic line carrying a tracked lifecycle kind.
    pub fn record_tagged(&self, label: impl Into<String>, kind: GestureEventKind) {
        self.append(EventEntry::one_off(label).with_kind(kind));
    }

    /// Record a diagnostic line with an integer payload.
    pub fn record_numeric(&self, label: impl Into<String>, value: i64) {
        self.append(EventEntry::numeric(label, value));
    }

    /// Record a diagnostic line with a boolean payload.
    pub fn record_boolean(&self, label: impl Into<String>, value: bool) {
        self.append(EventEntry::boolean(label, value));
    }

    /// Record an assembled narrative. The no-op sentinel is accepted and
    /// renders as its fixed error string in the dump.
    pub fn record_narrative(&self, narrative: CompoundString) {
        self.append(EventEntry::narrative(narrative));
    }

    /// Record a narrative carrying a tracked lifecycle kind.
    pub fn record_narrative_tagged(&self, narrative: CompoundString, kind: GestureEventKind) {
        self.append(EventEntry::narrative(narrative).with_kind(kind));
    }

    /// Record a tracked lifecycle event with no separate message. This is
    /// the variant the protocol validator inspects.
    pub fn record_gesture_event(&self, kind: GestureEventKind) {
        self.append(EventEntry::tracked(kind));
    }

    // -- reads --------------------------------------------------------------

    /// Copy-on-read snapshot of the retained sessions, oldest first.
    ///
    /// Safe to call concurrently with ongoing recording: a reader may
    /// observe a slightly stale tail of the live session, which is a
    /// well-defined, eventually-consistent view.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Session> {
        self.lock().sessions.iter().cloned().collect()
    }

    // -- internals ----------------------------------------------------------

    /// Find-or-create the current session, then coalesce-or-append.
    /// The timestamp is taken under the lock so insertion order is time
    /// order within a session.
    fn append(&self, entry: EventEntry) {
        let mut state = self.lock();
        let entry = entry.at(self.start_instant.elapsed());
        let current = SessionId(self.current_id.load(Ordering::Relaxed));
        if state.sessions.back().map(Session::id) != Some(current) {
            if state.sessions.len() == self.capacity {
                if let Some(evicted) = state.sessions.pop_front() {
                    tracing::debug!(session = evicted.id().0, "gesture session evicted");
                }
            }
            let mode = state.next_mode;
            state.sessions.push_back(Session::with_mode(current, mode));
        }
        if let Some(session) = state.sessions.back_mut() {
            session.push(entry);
        }
    }

    /// Recover the guard even if a producer panicked while recording.
    fn lock(&self) -> MutexGuard<'_, JournalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
