#![forbid(unsafe_code)]

//! Offline protocol validation of finished gesture sessions.
//!
//! [`analyze`] replays one session's recorded entries in order against a
//! fixed rule table and returns every violation found. It is a pure
//! function of the session: no clocks, no I/O, no shared state, so it can
//! run at dump time without perturbing a live gesture.
//!
//! # Algorithm
//!
//! A single linear pass tracks the set of event kinds seen so far, applying
//! a per-kind rule as each tracked event is inserted:
//!
//! - **Precondition rules**: an event must have been preceded by a specific
//!   other event earlier in the same session.
//! - **Pairing-removal**: `TaskAppeared` consumes `ExpectingTaskAppeared`;
//!   both leave the seen-set after the check, so a gesture that launches
//!   several apps validates each expect/appear cycle independently. This is
//!   the only rule that removes from the seen-set.
//! - **Timing window**: `OnStartRecentsAnimation` must arrive within
//!   [`ValidatorConfig::recents_start_bound`] of `StartRecentsAnimation`;
//!   the stored start time is cleared after the check so a second
//!   start/callback pair is measured independently.
//! - **Violations by presence**: some kinds are wrong whenever they occur
//!   (`LauncherDestroyed` mid-gesture, an invalid swipe-up velocity).
//!
//! A fixed post-pass then evaluates whole-session invariants over the final
//! seen-set. Every check runs regardless of earlier findings; diagnostics
//! accumulate in discovery order and never stop the pass.
//!
//! # Failure semantics
//!
//! The validator never fails: a malformed or partial session is exactly the
//! condition it exists to report. A session opened outside gestural
//! navigation mode short-circuits to [`SessionOutcome::Skipped`], which is
//! rendered distinctly from "no errors detected".

use std::time::Duration;

use ahash::AHashSet;

use crate::entry::{Session, SessionId};
use crate::gesture_event::GestureEventKind;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunable bounds for the rule table.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Maximum time between `StartRecentsAnimation` and its
    /// `OnStartRecentsAnimation` callback (default: 500ms).
    pub recents_start_bound: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            recents_start_bound: Duration::from_millis(500),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The validator's verdict on one session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionOutcome {
    /// Every rule held.
    Clean,
    /// The session was opened outside gestural navigation mode; the rule
    /// table did not run. Not the same as [`Clean`](SessionOutcome::Clean).
    Skipped,
    /// One diagnostic per violated rule, in discovery order.
    Violations(Vec<String>),
}

/// One session's validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    session: SessionId,
    outcome: SessionOutcome,
}

impl SessionReport {
    /// The analyzed session's id.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The verdict.
    #[must_use]
    pub fn outcome(&self) -> &SessionOutcome {
        &self.outcome
    }

    /// Whether the rule table ran and found nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcome == SessionOutcome::Clean
    }

    /// Human-readable report lines. A clean session renders an explicit
    /// "no errors detected" line so the absence of problems is visibly
    /// distinguishable from a validator that did not run.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        match &self.outcome {
            SessionOutcome::Clean => vec!["No errors detected.".to_string()],
            SessionOutcome::Skipped => {
                vec!["Validation skipped: gesture navigation inactive.".to_string()]
            }
            SessionOutcome::Violations(violations) => violations.clone(),
        }
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Error messages for gesture session {}:", self.session)?;
        for line in self.summary_lines() {
            writeln!(f, "    {line}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Analyze a session with the default [`ValidatorConfig`].
#[must_use]
pub fn analyze(session: &Session) -> SessionReport {
    analyze_with_config(session, &ValidatorConfig::default())
}

/// Replay a session's entries against the rule table.
#[must_use]
pub fn analyze_with_config(session: &Session, config: &ValidatorConfig) -> SessionReport {
    use crate::gesture_event::GestureEventKind as K;

    if !session.is_gestural() {
        return SessionReport {
            session: session.id(),
            outcome: SessionOutcome::Skipped,
        };
    }

    let mut violations: Vec<String> = Vec::new();
    let mut seen: AHashSet<GestureEventKind> = AHashSet::new();
    let mut recents_start: Option<Duration> = None;

    for entry in session.entries() {
        let Some(kind) = entry.gesture_event() else {
            continue;
        };
        if !kind.is_tracked() {
            continue;
        }
        seen.insert(kind);

        match kind {
            K::MotionUp => require(&mut violations, &seen, kind, K::MotionDown),
            K::OnSettledOnEndTarget => require(&mut violations, &seen, kind, K::SetEndTarget),
            K::FinishRecentsAnimation | K::CancelRecentsAnimation => {
                require(&mut violations, &seen, kind, K::StartRecentsAnimation);
            }
            K::OnFinishRecentsAnimation | K::OnCancelRecentsAnimation => {
                require(&mut violations, &seen, kind, K::OnStartRecentsAnimation);
            }
            K::StartRecentsAnimation => {
                recents_start = Some(entry.timestamp());
            }
            K::OnStartRecentsAnimation => {
                require(&mut violations, &seen, kind, K::StartRecentsAnimation);
                // One measurement per start/callback pair: consume the
                // stored start time whether or not the bound held.
                if let Some(start) = recents_start.take() {
                    let elapsed = entry.timestamp().saturating_sub(start);
                    if elapsed > config.recents_start_bound {
                        violations.push(format!(
                            "ON_START_RECENTS_ANIMATION arrived {}ms after \
                             START_RECENTS_ANIMATION, exceeding the {}ms bound.",
                            elapsed.as_millis(),
                            config.recents_start_bound.as_millis(),
                        ));
                    }
                }
            }
            K::TaskAppeared => {
                if seen.contains(&K::ExpectingTaskAppeared) {
                    // Consume the pair so a later expect/appear cycle in the
                    // same gesture is validated on its own.
                    seen.remove(&K::ExpectingTaskAppeared);
                    seen.remove(&K::TaskAppeared);
                } else {
                    require(&mut violations, &seen, kind, K::ExpectingTaskAppeared);
                }
            }
            K::CleanupScreenshot => {
                require(&mut violations, &seen, kind, K::StateScreenshotCaptured);
            }
            K::ScrollerAnimationAborted => {
                if seen.contains(&K::SetEndTargetHome)
                    && !seen.contains(&K::OnSettledOnEndTarget)
                {
                    violations.push(
                        "Scroller animation aborted after SET_END_TARGET_HOME but before \
                         settling on end target."
                            .to_string(),
                    );
                }
            }
            K::StateGestureCompleted | K::StateGestureCancelled => {
                require(&mut violations, &seen, kind, K::MotionUp);
                require(&mut violations, &seen, kind, K::StateGestureStarted);
            }
            K::StateScreenshotCaptured => {
                require(&mut violations, &seen, kind, K::StateCaptureScreenshot);
            }
            K::StateRecentsAnimationCanceled => {
                require(&mut violations, &seen, kind, K::StartRecentsAnimation);
            }
            K::LauncherDestroyed => {
                present(&mut violations, "Launcher destroyed mid-gesture.", entry.duplicates());
            }
            K::InvalidVelocityOnSwipeUp => {
                present(&mut violations, "Invalid velocity on swipe up.", entry.duplicates());
            }
            K::RecentsAnimationStartPending => {
                present(
                    &mut violations,
                    "Recents animation start still pending.",
                    entry.duplicates(),
                );
            }
            K::RecentTasksMissing => {
                present(
                    &mut violations,
                    "Recent tasks missing from system proxy.",
                    entry.duplicates(),
                );
            }
            K::MotionDown
            | K::SetEndTarget
            | K::SetEndTargetHome
            | K::SetEndTargetLastTask
            | K::SetEndTargetNewTask
            | K::SetEndTargetAllApps
            | K::SetOnPageTransitionEndCallback
            | K::CancelCurrentAnimation
            | K::ExpectingTaskAppeared
            | K::StateGestureStarted
            | K::StateEndTargetAnimationFinished
            | K::StateRecentsScrollingFinished
            | K::StateCaptureScreenshot
            | K::StateHandlerInvalidated
            | K::StateLauncherDrawn => {}
        }
    }

    // Whole-session invariants over the final seen-set. Each check is
    // independent and every one runs.
    let contains = |kind: GestureEventKind| seen.contains(&kind);
    let mut check = |failed: bool, message: &str| {
        if failed {
            violations.push(message.to_string());
        }
    };

    check(!contains(K::MotionDown), "MOTION_DOWN never detected.");
    check(!contains(K::MotionUp), "MOTION_UP never detected.");
    check(
        contains(K::SetEndTarget) && !contains(K::OnSettledOnEndTarget),
        "SET_END_TARGET detected, but ON_SETTLED_ON_END_TARGET never was.",
    );
    check(
        contains(K::SetEndTarget) && !contains(K::StateEndTargetAnimationFinished),
        "SET_END_TARGET detected, but STATE_END_TARGET_ANIMATION_FINISHED never was.",
    );
    check(
        contains(K::SetEndTarget) && !contains(K::StateRecentsScrollingFinished),
        "SET_END_TARGET detected, but STATE_RECENTS_SCROLLING_FINISHED never was.",
    );
    check(
        contains(K::StateEndTargetAnimationFinished)
            && contains(K::StateRecentsScrollingFinished)
            && !contains(K::OnSettledOnEndTarget),
        "STATE_END_TARGET_ANIMATION_FINISHED and STATE_RECENTS_SCROLLING_FINISHED detected, \
         but ON_SETTLED_ON_END_TARGET never was.",
    );
    check(
        contains(K::StartRecentsAnimation)
            && !contains(K::FinishRecentsAnimation)
            && !contains(K::CancelRecentsAnimation),
        "START_RECENTS_ANIMATION detected, but neither FINISH_RECENTS_ANIMATION nor \
         CANCEL_RECENTS_ANIMATION was.",
    );
    check(
        contains(K::StateGestureStarted)
            && !contains(K::StateGestureCompleted)
            && !contains(K::StateGestureCancelled),
        "STATE_GESTURE_STARTED detected, but neither STATE_GESTURE_COMPLETED nor \
         STATE_GESTURE_CANCELLED was.",
    );
    check(
        contains(K::StateCaptureScreenshot) && !contains(K::StateScreenshotCaptured),
        "STATE_CAPTURE_SCREENSHOT detected, but STATE_SCREENSHOT_CAPTURED never was.",
    );
    check(
        contains(K::SetOnPageTransitionEndCallback)
            && !contains(K::StateRecentsScrollingFinished),
        "SET_ON_PAGE_TRANSITION_END_CALLBACK detected, but STATE_RECENTS_SCROLLING_FINISHED \
         never was.",
    );
    check(
        contains(K::StateRecentsAnimationCanceled) && !contains(K::CleanupScreenshot),
        "STATE_RECENTS_ANIMATION_CANCELED detected, but CLEANUP_SCREENSHOT never was.",
    );

    let outcome = if violations.is_empty() {
        SessionOutcome::Clean
    } else {
        SessionOutcome::Violations(violations)
    };
    SessionReport {
        session: session.id(),
        outcome,
    }
}

/// Precondition rule: `found` must have been preceded by `required`.
fn require(
    violations: &mut Vec<String>,
    seen: &AHashSet<GestureEventKind>,
    found: GestureEventKind,
    required: GestureEventKind,
) {
    if !seen.contains(&required) {
        violations.push(format!("{found} detected before/without {required}."));
    }
}

/// Violation-by-presence, annotated with coalesced repeats.
fn present(violations: &mut Vec<String>, message: &str, duplicates: u32) {
    if duplicates > 0 {
        violations.push(format!("{message} (& {duplicates} similar events)"));
    } else {
        violations.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EventEntry;
    use crate::gesture_event::GestureEventKind as K;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Build a gestural-mode session from (kind, timestamp-ms) pairs.
    fn session_of(events: &[(K, u64)]) -> Session {
        let mut session = Session::new(SessionId(1));
        for &(kind, at) in events {
            session.push(EventEntry::tracked(kind).at(ms(at)));
        }
        session
    }

    fn violations_of(session: &Session) -> Vec<String> {
        match analyze(session).outcome() {
            SessionOutcome::Violations(v) => v.clone(),
            SessionOutcome::Clean => Vec::new(),
            SessionOutcome::Skipped => panic!("unexpected skip"),
        }
    }

    /// The well-behaved swipe-to-home sequence.
    fn clean_gesture() -> Vec<(K, u64)> {
        vec![
            (K::MotionDown, 0),
            (K::MotionUp, 80),
            (K::SetEndTarget, 90),
            (K::SetEndTargetHome, 90),
            (K::StartRecentsAnimation, 100),
            (K::OnStartRecentsAnimation, 200),
            (K::StateGestureStarted, 210),
            (K::StateGestureCompleted, 220),
            (K::OnSettledOnEndTarget, 230),
            (K::StateEndTargetAnimationFinished, 240),
            (K::StateRecentsScrollingFinished, 250),
            (K::SetOnPageTransitionEndCallback, 260),
            (K::FinishRecentsAnimation, 270),
            (K::OnFinishRecentsAnimation, 280),
        ]
    }

    #[test]
    fn clean_gesture_has_no_errors() {
        let report = analyze(&session_of(&clean_gesture()));
        assert!(report.is_clean(), "unexpected violations: {report}");
        assert_eq!(report.summary_lines(), vec!["No errors detected."]);
    }

    #[test]
    fn late_recents_callback_is_the_only_extra_diagnostic() {
        let mut events = clean_gesture();
        // Push the callback past the 500ms bound (start is at t=100).
        for (kind, at) in &mut events {
            if *kind == K::OnStartRecentsAnimation {
                *at = 700;
            }
        }
        let violations = violations_of(&session_of(&events));
        assert_eq!(violations.len(), 1, "expected one violation: {violations:?}");
        assert!(violations[0].contains("600ms"));
        assert!(violations[0].contains("500ms"));
    }

    #[test]
    fn callback_within_bound_is_clean() {
        let report = analyze(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StartRecentsAnimation, 20),
            (K::OnStartRecentsAnimation, 520),
            (K::FinishRecentsAnimation, 530),
            (K::OnFinishRecentsAnimation, 540),
        ]));
        assert!(report.is_clean(), "unexpected violations: {report}");
    }

    #[test]
    fn second_start_callback_pair_is_measured_independently() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StartRecentsAnimation, 20),
            (K::OnStartRecentsAnimation, 120),
            (K::StartRecentsAnimation, 1000),
            (K::OnStartRecentsAnimation, 1900),
            (K::FinishRecentsAnimation, 1910),
            (K::OnFinishRecentsAnimation, 1920),
        ]));
        assert_eq!(violations.len(), 1, "{violations:?}");
        assert!(violations[0].contains("900ms"));
    }

    #[test]
    fn motion_up_alone_reports_rule_and_invariant() {
        let violations = violations_of(&session_of(&[(K::MotionUp, 0)]));
        assert!(
            violations
                .iter()
                .any(|v| v == "MOTION_UP detected before/without MOTION_DOWN."),
            "{violations:?}"
        );
        assert!(
            violations.iter().any(|v| v == "MOTION_DOWN never detected."),
            "{violations:?}"
        );
        assert!(violations.len() >= 2);
    }

    #[test]
    fn empty_session_reports_missing_motion_events() {
        let violations = violations_of(&Session::new(SessionId(1)));
        assert_eq!(
            violations,
            vec![
                "MOTION_DOWN never detected.".to_string(),
                "MOTION_UP never detected.".to_string(),
            ]
        );
    }

    #[test]
    fn task_appeared_pairs_validate_independently() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::ExpectingTaskAppeared, 20),
            (K::TaskAppeared, 30),
            (K::ExpectingTaskAppeared, 40),
            (K::TaskAppeared, 50),
        ]));
        assert!(
            violations.iter().all(|v| !v.contains("TASK_APPEARED")),
            "{violations:?}"
        );
    }

    #[test]
    fn task_appeared_without_expectation_is_reported_each_cycle() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::ExpectingTaskAppeared, 20),
            (K::TaskAppeared, 30),
            (K::TaskAppeared, 40),
        ]));
        assert_eq!(
            violations,
            vec!["TASK_APPEARED detected before/without EXPECTING_TASK_APPEARED.".to_string()]
        );
    }

    #[test]
    fn unconditional_violations_are_reported_by_presence() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::LauncherDestroyed, 20),
        ]));
        assert_eq!(violations, vec!["Launcher destroyed mid-gesture.".to_string()]);
    }

    #[test]
    fn unconditional_violation_cites_coalesced_repeats() {
        let mut session = Session::new(SessionId(1));
        session.push(EventEntry::tracked(K::MotionDown).at(ms(0)));
        session.push(EventEntry::tracked(K::MotionUp).at(ms(10)));
        for at in [20, 30, 40] {
            session.push(EventEntry::tracked(K::InvalidVelocityOnSwipeUp).at(ms(at)));
        }
        let violations = violations_of(&session);
        assert_eq!(
            violations,
            vec!["Invalid velocity on swipe up. (& 2 similar events)".to_string()]
        );
    }

    #[test]
    fn settled_requires_end_target() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::OnSettledOnEndTarget, 20),
        ]));
        assert!(
            violations
                .iter()
                .any(|v| v == "ON_SETTLED_ON_END_TARGET detected before/without SET_END_TARGET."),
            "{violations:?}"
        );
    }

    #[test]
    fn recents_finish_and_cancel_require_start() {
        for kind in [K::FinishRecentsAnimation, K::CancelRecentsAnimation] {
            let violations =
                violations_of(&session_of(&[(K::MotionDown, 0), (K::MotionUp, 10), (kind, 20)]));
            assert!(
                violations
                    .iter()
                    .any(|v| v.starts_with(kind.label())
                        && v.contains("START_RECENTS_ANIMATION")),
                "{kind}: {violations:?}"
            );
        }
    }

    #[test]
    fn recents_callbacks_require_start_callback() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StartRecentsAnimation, 20),
            (K::FinishRecentsAnimation, 30),
            (K::OnFinishRecentsAnimation, 40),
        ]));
        assert_eq!(
            violations,
            vec![
                "ON_FINISH_RECENTS_ANIMATION detected before/without ON_START_RECENTS_ANIMATION."
                    .to_string()
            ]
        );
    }

    #[test]
    fn started_recents_animation_must_terminate() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StartRecentsAnimation, 20),
            (K::OnStartRecentsAnimation, 30),
        ]));
        assert_eq!(
            violations,
            vec![
                "START_RECENTS_ANIMATION detected, but neither FINISH_RECENTS_ANIMATION nor \
                 CANCEL_RECENTS_ANIMATION was."
                    .to_string()
            ]
        );
    }

    #[test]
    fn end_target_invariants_all_fire_independently() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::SetEndTarget, 20),
        ]));
        assert_eq!(violations.len(), 3, "{violations:?}");
        assert!(violations.iter().all(|v| v.starts_with("SET_END_TARGET detected")));
    }

    #[test]
    fn finished_animation_and_scrolling_require_settling() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StateEndTargetAnimationFinished, 20),
            (K::StateRecentsScrollingFinished, 30),
        ]));
        assert_eq!(
            violations,
            vec![
                "STATE_END_TARGET_ANIMATION_FINISHED and STATE_RECENTS_SCROLLING_FINISHED \
                 detected, but ON_SETTLED_ON_END_TARGET never was."
                    .to_string()
            ]
        );
    }

    #[test]
    fn gesture_state_flags_require_motion_up_and_start() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::StateGestureCompleted, 10),
        ]));
        assert!(
            violations
                .iter()
                .any(|v| v == "STATE_GESTURE_COMPLETED detected before/without MOTION_UP."),
            "{violations:?}"
        );
        assert!(
            violations.iter().any(
                |v| v == "STATE_GESTURE_COMPLETED detected before/without STATE_GESTURE_STARTED."
            ),
            "{violations:?}"
        );
    }

    #[test]
    fn aborted_scroller_after_home_target_is_reported() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::SetEndTargetHome, 20),
            (K::ScrollerAnimationAborted, 30),
        ]));
        assert!(
            violations
                .iter()
                .any(|v| v.starts_with("Scroller animation aborted")),
            "{violations:?}"
        );
    }

    #[test]
    fn aborted_scroller_after_settling_is_fine() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::SetEndTarget, 20),
            (K::SetEndTargetHome, 20),
            (K::OnSettledOnEndTarget, 30),
            (K::ScrollerAnimationAborted, 40),
            (K::StateEndTargetAnimationFinished, 50),
            (K::StateRecentsScrollingFinished, 60),
        ]));
        assert!(
            violations.iter().all(|v| !v.starts_with("Scroller animation aborted")),
            "{violations:?}"
        );
    }

    #[test]
    fn screenshot_lifecycle_rules() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::CleanupScreenshot, 20),
            (K::StateCaptureScreenshot, 30),
        ]));
        assert!(
            violations
                .iter()
                .any(|v| v == "CLEANUP_SCREENSHOT detected before/without STATE_SCREENSHOT_CAPTURED."),
            "{violations:?}"
        );
        assert!(
            violations.iter().any(|v| v
                == "STATE_CAPTURE_SCREENSHOT detected, but STATE_SCREENSHOT_CAPTURED never was."),
            "{violations:?}"
        );
    }

    #[test]
    fn canceled_recents_state_requires_cleanup() {
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StartRecentsAnimation, 20),
            (K::CancelRecentsAnimation, 30),
            (K::StateRecentsAnimationCanceled, 40),
        ]));
        assert_eq!(
            violations,
            vec![
                "STATE_RECENTS_ANIMATION_CANCELED detected, but CLEANUP_SCREENSHOT never was."
                    .to_string()
            ]
        );
    }

    #[test]
    fn untracked_kinds_are_invisible_to_the_rules() {
        // StateLauncherDrawn is recorded for dump context only.
        let violations = violations_of(&session_of(&[
            (K::MotionDown, 0),
            (K::MotionUp, 10),
            (K::StateLauncherDrawn, 20),
        ]));
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn untagged_entries_are_ignored() {
        let mut session = Session::new(SessionId(1));
        session.push(EventEntry::tracked(K::MotionDown));
        session.push(EventEntry::one_off("onMotionEvent"));
        session.push(EventEntry::numeric("startRecentsAnimationCallback", 2));
        session.push(EventEntry::tracked(K::MotionUp).at(ms(10)));
        assert!(analyze(&session).is_clean());
    }

    #[test]
    fn non_gestural_session_is_skipped_with_a_single_line() {
        let mut session = Session::with_mode(SessionId(9), false);
        // Would be a violation if the rule table ran.
        session.push(EventEntry::tracked(K::MotionUp));
        let report = analyze(&session);
        assert_eq!(report.outcome(), &SessionOutcome::Skipped);
        assert_eq!(report.summary_lines().len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn report_display_includes_session_id() {
        let report = analyze(&session_of(&clean_gesture()));
        let rendered = report.to_string();
        assert!(rendered.contains("#1"));
        assert!(rendered.contains("No errors detected."));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes() {
        let report = analyze(&session_of(&[(K::MotionUp, 0)]));
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("MOTION_UP"));
    }
}
