#![forbid(unsafe_code)]

//! Concurrent recorder for gesture lifecycle events.
//!
//! # Role in swipetrace
//! `swipetrace-recorder` owns the mutable state: a bounded ring of
//! per-gesture sessions that producers on any thread append to, and the
//! diagnostic dump that replays each retained session through the
//! validator in `swipetrace-core`.
//!
//! # Primary responsibilities
//! - **GestureJournal**: session lifecycle, timestamping, burst dedup,
//!   ring eviction.
//! - **dump**: per-session validator report plus chronological entry
//!   listing for bug-report and telemetry tooling.
//!
//! # How it fits in the system
//! Input dispatch, animation controllers, and window-manager callbacks are
//! producers: they construct one `GestureJournal` at startup, share it via
//! `Arc`, and call `record_*` from their own threads. Data flows one way:
//! producers → journal → (on demand) validator → diagnostic text. The
//! journal never calls back into a producer.

pub mod journal;

mod dump;
