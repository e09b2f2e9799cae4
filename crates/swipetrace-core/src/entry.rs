#![forbid(unsafe_code)]

//! Recorded event entries and per-gesture sessions.
//!
//! An [`EventEntry`] is one recorded occurrence: a short label, a
//! [`EventPayload`] discriminant, an optional [`GestureEventKind`] tag, a
//! monotonic timestamp, and a duplicate counter. A [`Session`] is the
//! ordered, append-only list of entries for one gesture, identified by a
//! [`SessionId`].
//!
//! # Coalescing
//!
//! [`Session::push`] collapses an entry that structurally equals the current
//! tail into the tail's duplicate counter instead of appending. Structural
//! equality covers (payload, label, kind) and deliberately excludes the
//! timestamp and the duplicate count, so a callback re-firing every frame
//! with identical content costs one entry per burst rather than one per
//! call.
//!
//! # Invariants
//!
//! 1. The duplicate counter counts *additional* occurrences beyond the
//!    first and only ever grows on the session tail.
//! 2. Entries are in non-decreasing timestamp order (the recorder assigns
//!    timestamps at insertion under one lock).
//! 3. Entries are owned exclusively by their session; there is no API for
//!    mutating an entry other than tail coalescing.

use std::fmt;
use std::time::Duration;

use crate::compound::CompoundString;
use crate::gesture_event::GestureEventKind;

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// Monotonically increasing per-process gesture session id. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u32);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EventPayload
// ---------------------------------------------------------------------------

/// What an entry carries besides its label.
///
/// `Tracked` marks entries that exist purely to record a
/// [`GestureEventKind`]; the kind itself rides in [`EventEntry`]'s tag so
/// that one-off and narrative entries can carry a tracked kind too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// A bare diagnostic line.
    OneOff,
    /// A diagnostic line with an integer payload.
    Numeric(i64),
    /// A diagnostic line with a boolean payload.
    Boolean(bool),
    /// An assembled diagnostic narrative.
    Narrative(CompoundString),
    /// A tracked lifecycle event with no separate message.
    Tracked,
}

// ---------------------------------------------------------------------------
// EventEntry
// ---------------------------------------------------------------------------

/// One recorded occurrence within a session.
#[derive(Debug, Clone)]
pub struct EventEntry {
    label: String,
    payload: EventPayload,
    kind: Option<GestureEventKind>,
    /// Monotonic offset from recorder creation.
    timestamp: Duration,
    /// Additional occurrences coalesced into this entry.
    duplicates: u32,
}

impl EventEntry {
    /// A bare diagnostic entry.
    #[must_use]
    pub fn one_off(label: impl Into<String>) -> Self {
        Self::new(label, EventPayload::OneOff)
    }

    /// A diagnostic entry with an integer payload.
    #[must_use]
    pub fn numeric(label: impl Into<String>, value: i64) -> Self {
        Self::new(label, EventPayload::Numeric(value))
    }

    /// A diagnostic entry with a boolean payload.
    #[must_use]
    pub fn boolean(label: impl Into<String>, value: bool) -> Self {
        Self::new(label, EventPayload::Boolean(value))
    }

    /// A narrative entry.
    #[must_use]
    pub fn narrative(narrative: CompoundString) -> Self {
        Self::new("", EventPayload::Narrative(narrative))
    }

    /// A tracked lifecycle event with no separate message.
    #[must_use]
    pub fn tracked(kind: GestureEventKind) -> Self {
        Self::new("", EventPayload::Tracked).with_kind(kind)
    }

    fn new(label: impl Into<String>, payload: EventPayload) -> Self {
        Self {
            label: label.into(),
            payload,
            kind: None,
            timestamp: Duration::ZERO,
            duplicates: 0,
        }
    }

    /// Tag this entry with a tracked lifecycle kind, builder-style.
    #[must_use]
    pub fn with_kind(mut self, kind: GestureEventKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the monotonic timestamp, builder-style.
    #[must_use]
    pub fn at(mut self, timestamp: Duration) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The entry's label. Empty for bare tracked and narrative entries.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The payload discriminant.
    #[must_use]
    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    /// The associated lifecycle kind, if any.
    #[must_use]
    pub fn gesture_event(&self) -> Option<GestureEventKind> {
        self.kind
    }

    /// Monotonic offset from recorder creation.
    #[must_use]
    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    /// Additional occurrences coalesced into this entry.
    #[must_use]
    pub fn duplicates(&self) -> u32 {
        self.duplicates
    }

    /// Structural equality for coalescing: (payload, label, kind).
    /// Timestamp and duplicate count are excluded.
    #[must_use]
    pub fn coalesces_with(&self, other: &EventEntry) -> bool {
        self.payload == other.payload && self.label == other.label && self.kind == other.kind
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The ordered event history of one gesture.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    /// Whether gesture navigation was active when the session opened.
    /// Sessions opened outside gestural mode are skipped by the validator.
    gestural_mode: bool,
    entries: Vec<EventEntry>,
}

impl Session {
    /// Open a session in gestural mode.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self::with_mode(id, true)
    }

    /// Open a session, recording whether gesture navigation is active.
    #[must_use]
    pub fn with_mode(id: SessionId, gestural_mode: bool) -> Self {
        Self {
            id,
            gestural_mode,
            entries: Vec::new(),
        }
    }

    /// This session's id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Whether gesture navigation was active when the session opened.
    #[must_use]
    pub fn is_gestural(&self) -> bool {
        self.gestural_mode
    }

    /// The recorded entries, in insertion (= time) order.
    #[must_use]
    pub fn entries(&self) -> &[EventEntry] {
        &self.entries
    }

    /// Number of distinct (post-coalescing) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, coalescing into the tail when it structurally
    /// equals the new entry. Coalescing increments the tail's duplicate
    /// counter in place; the tail's timestamp keeps the first occurrence.
    pub fn push(&mut self, entry: EventEntry) {
        if let Some(tail) = self.entries.last_mut() {
            if tail.coalesces_with(&entry) {
                tail.duplicates = tail.duplicates.saturating_add(1);
                return;
            }
        }
        self.entries.push(entry);
    }
}
