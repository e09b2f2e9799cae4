#![forbid(unsafe_code)]

//! Human-readable journal dump.
//!
//! For each retained session, the dump renders the validator's report
//! block followed by the chronological entry listing: wall-clock
//! timestamps, payloads, rendered narratives, and "& N similar events"
//! annotations for coalesced bursts. Bare tracked events appear only when
//! their kind opts into logging; the rest already surfaced through the
//! message entry they rode in on.
//!
//! Rendering runs entirely on a [`snapshot`](GestureJournal::snapshot), so
//! a dump requested mid-gesture never blocks producers beyond the copy.

use std::fmt::Write as _;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use swipetrace_core::entry::{EventEntry, EventPayload};
use swipetrace_core::validator;

use crate::journal::GestureJournal;

impl GestureJournal {
    /// Render every retained session: validator findings first, then the
    /// entry history. Consumed by bug-report and telemetry tooling.
    #[must_use]
    pub fn dump(&self) -> String {
        let sessions = self.snapshot();
        tracing::trace!(sessions = sessions.len(), "rendering gesture journal dump");

        let mut out = String::new();
        let _ = writeln!(
            out,
            "GestureJournal: {} of {} sessions retained",
            sessions.len(),
            self.capacity(),
        );
        for session in &sessions {
            let report = validator::analyze_with_config(session, self.validator_config());
            let _ = writeln!(out, "  Session {}:", session.id());
            let _ = writeln!(out, "    Protocol validation:");
            for line in report.summary_lines() {
                let _ = writeln!(out, "      {line}");
            }
            let _ = writeln!(out, "    Event history:");
            for entry in session.entries() {
                if let Some(line) = render_entry(entry, self.wall_anchor()) {
                    let _ = writeln!(out, "      {line}");
                }
            }
        }
        out
    }
}

/// One listing line, or `None` for tracked kinds that stay out of the dump.
fn render_entry(entry: &EventEntry, anchor: SystemTime) -> Option<String> {
    let text = match entry.payload() {
        EventPayload::OneOff => entry.label().to_string(),
        EventPayload::Numeric(value) => format!("{}: {value}", entry.label()),
        EventPayload::Boolean(value) => format!("{}: {value}", entry.label()),
        EventPayload::Narrative(narrative) => narrative.render(),
        EventPayload::Tracked => {
            let kind = entry.gesture_event()?;
            if !kind.should_log() {
                return None;
            }
            kind.label().to_string()
        }
    };

    let when: DateTime<Local> = DateTime::from(anchor + entry.timestamp());
    let mut line = format!("{} {text}", when.format("%Y-%m-%d %H:%M:%S%.3f"));
    if entry.duplicates() > 0 {
        let _ = write!(line, " & {} similar events", entry.duplicates());
    }
    Some(line)
}
