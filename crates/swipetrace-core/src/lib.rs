#![forbid(unsafe_code)]

//! Core: gesture lifecycle catalog, session data model, and protocol
//! validation.
//!
//! # Role in swipetrace
//! `swipetrace-core` is the pure layer. It owns the closed catalog of
//! gesture lifecycle events, the per-session entry model with burst
//! coalescing, the incremental diagnostic narratives, and the offline
//! validator that replays a finished session against the protocol rules.
//!
//! # Primary responsibilities
//! - **GestureEventKind**: the event vocabulary with per-variant
//!   dump/tracking attributes.
//! - **EventEntry / Session**: recorded occurrences with structural dedup.
//! - **CompoundString**: append-only narratives with a no-op sentinel.
//! - **validator**: ordering, pairing, and timing-window rules.
//!
//! # How it fits in the system
//! The recorder crate (`swipetrace-recorder`) owns concurrency: it
//! timestamps and appends entries from producer threads and invokes the
//! validator at dump time. Nothing here blocks, allocates per-duplicate,
//! or calls back into a producer.

pub mod compound;
pub mod entry;
pub mod gesture_event;
pub mod validator;
