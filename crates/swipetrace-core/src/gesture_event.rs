#![forbid(unsafe_code)]

//! Closed catalog of gesture lifecycle events.
//!
//! Every subsystem that participates in a window-switching swipe (input
//! dispatch, animation controllers, window-manager callbacks) reports its
//! progress as one of these named events. The catalog is deliberately a
//! plain enum with `match`-table attributes rather than trait objects: the
//! validator's rule table dispatches over the same tags, so keeping both as
//! `match` arms keeps the catalog and the rules in one place.
//!
//! # Attributes
//!
//! - [`is_tracked`](GestureEventKind::is_tracked): whether the validator's
//!   bookkeeping sees the event at all. Default `true`.
//! - [`should_log`](GestureEventKind::should_log): whether a bare tracked
//!   event earns its own line in the human-readable dump. Default `false`:
//!   most tracked events ride along on a one-off or narrative entry that is
//!   already rendered.

/// A named gesture lifecycle event.
///
/// Variants group into touch motion, end-target selection, the recents
/// animation handshake (request on one side, `On*` callback on the other),
/// scrolling/animation bookkeeping, task lifecycle, state flags set by
/// asynchronous callbacks, and kinds whose mere presence is a protocol
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEventKind {
    // Touch motion.
    MotionDown,
    MotionUp,

    // End-target selection.
    SetEndTarget,
    SetEndTargetHome,
    SetEndTargetLastTask,
    SetEndTargetNewTask,
    SetEndTargetAllApps,
    OnSettledOnEndTarget,

    // Recents animation requests and their callbacks.
    StartRecentsAnimation,
    FinishRecentsAnimation,
    CancelRecentsAnimation,
    OnStartRecentsAnimation,
    OnFinishRecentsAnimation,
    OnCancelRecentsAnimation,

    // Scrolling and animation bookkeeping.
    SetOnPageTransitionEndCallback,
    CancelCurrentAnimation,
    ScrollerAnimationAborted,

    // Screenshot lifecycle.
    CleanupScreenshot,

    // Task lifecycle.
    TaskAppeared,
    ExpectingTaskAppeared,

    // Violations by presence.
    LauncherDestroyed,
    InvalidVelocityOnSwipeUp,
    RecentsAnimationStartPending,
    RecentTasksMissing,

    // State flags set by asynchronous callbacks.
    StateGestureStarted,
    StateGestureCompleted,
    StateGestureCancelled,
    StateEndTargetAnimationFinished,
    StateRecentsScrollingFinished,
    StateCaptureScreenshot,
    StateScreenshotCaptured,
    StateHandlerInvalidated,
    StateRecentsAnimationCanceled,
    StateLauncherDrawn,
}

impl GestureEventKind {
    /// Every catalog variant, in declaration order. Used by tests and by
    /// tooling that samples the catalog.
    pub const ALL: [GestureEventKind; 34] = [
        Self::MotionDown,
        Self::MotionUp,
        Self::SetEndTarget,
        Self::SetEndTargetHome,
        Self::SetEndTargetLastTask,
        Self::SetEndTargetNewTask,
        Self::SetEndTargetAllApps,
        Self::OnSettledOnEndTarget,
        Self::StartRecentsAnimation,
        Self::FinishRecentsAnimation,
        Self::CancelRecentsAnimation,
        Self::OnStartRecentsAnimation,
        Self::OnFinishRecentsAnimation,
        Self::OnCancelRecentsAnimation,
        Self::SetOnPageTransitionEndCallback,
        Self::CancelCurrentAnimation,
        Self::ScrollerAnimationAborted,
        Self::CleanupScreenshot,
        Self::TaskAppeared,
        Self::ExpectingTaskAppeared,
        Self::LauncherDestroyed,
        Self::InvalidVelocityOnSwipeUp,
        Self::RecentsAnimationStartPending,
        Self::RecentTasksMissing,
        Self::StateGestureStarted,
        Self::StateGestureCompleted,
        Self::StateGestureCancelled,
        Self::StateEndTargetAnimationFinished,
        Self::StateRecentsScrollingFinished,
        Self::StateCaptureScreenshot,
        Self::StateScreenshotCaptured,
        Self::StateHandlerInvalidated,
        Self::StateRecentsAnimationCanceled,
        Self::StateLauncherDrawn,
    ];

    /// Stable display name, used in dump listings and diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MotionDown => "MOTION_DOWN",
            Self::MotionUp => "MOTION_UP",
            Self::SetEndTarget => "SET_END_TARGET",
            Self::SetEndTargetHome => "SET_END_TARGET_HOME",
            Self::SetEndTargetLastTask => "SET_END_TARGET_LAST_TASK",
            Self::SetEndTargetNewTask => "SET_END_TARGET_NEW_TASK",
            Self::SetEndTargetAllApps => "SET_END_TARGET_ALL_APPS",
            Self::OnSettledOnEndTarget => "ON_SETTLED_ON_END_TARGET",
            Self::StartRecentsAnimation => "START_RECENTS_ANIMATION",
            Self::FinishRecentsAnimation => "FINISH_RECENTS_ANIMATION",
            Self::CancelRecentsAnimation => "CANCEL_RECENTS_ANIMATION",
            Self::OnStartRecentsAnimation => "ON_START_RECENTS_ANIMATION",
            Self::OnFinishRecentsAnimation => "ON_FINISH_RECENTS_ANIMATION",
            Self::OnCancelRecentsAnimation => "ON_CANCEL_RECENTS_ANIMATION",
            Self::SetOnPageTransitionEndCallback => "SET_ON_PAGE_TRANSITION_END_CALLBACK",
            Self::CancelCurrentAnimation => "CANCEL_CURRENT_ANIMATION",
            Self::ScrollerAnimationAborted => "SCROLLER_ANIMATION_ABORTED",
            Self::CleanupScreenshot => "CLEANUP_SCREENSHOT",
            Self::TaskAppeared => "TASK_APPEARED",
            Self::ExpectingTaskAppeared => "EXPECTING_TASK_APPEARED",
            Self::LauncherDestroyed => "LAUNCHER_DESTROYED",
            Self::InvalidVelocityOnSwipeUp => "INVALID_VELOCITY_ON_SWIPE_UP",
            Self::RecentsAnimationStartPending => "RECENTS_ANIMATION_START_PENDING",
            Self::RecentTasksMissing => "RECENT_TASKS_MISSING",
            Self::StateGestureStarted => "STATE_GESTURE_STARTED",
            Self::StateGestureCompleted => "STATE_GESTURE_COMPLETED",
            Self::StateGestureCancelled => "STATE_GESTURE_CANCELLED",
            Self::StateEndTargetAnimationFinished => "STATE_END_TARGET_ANIMATION_FINISHED",
            Self::StateRecentsScrollingFinished => "STATE_RECENTS_SCROLLING_FINISHED",
            Self::StateCaptureScreenshot => "STATE_CAPTURE_SCREENSHOT",
            Self::StateScreenshotCaptured => "STATE_SCREENSHOT_CAPTURED",
            Self::StateHandlerInvalidated => "STATE_HANDLER_INVALIDATED",
            Self::StateRecentsAnimationCanceled => "STATE_RECENTS_ANIMATION_CANCELED",
            Self::StateLauncherDrawn => "STATE_LAUNCHER_DRAWN",
        }
    }

    /// Whether a bare tracked event gets its own line in the dump listing.
    ///
    /// Most tracked events are recorded alongside a one-off or narrative
    /// entry that already renders; a second line would be noise.
    #[must_use]
    pub const fn should_log(self) -> bool {
        matches!(self, Self::StateLauncherDrawn)
    }

    /// Whether the validator's bookkeeping sees this event at all.
    ///
    /// `StateLauncherDrawn` is recorded for dump context only; the launcher
    /// may legitimately be drawn at any point relative to the gesture.
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        !matches!(self, Self::StateLauncherDrawn)
    }
}

impl std::fmt::Display for GestureEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
