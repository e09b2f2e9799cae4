#![forbid(unsafe_code)]

//! Incrementally assembled diagnostic narratives.
//!
//! [`CompoundString`] is an append-only fragment builder for diagnostics
//! that are assembled across many call sites before being recorded. The
//! designated [`no-op`](CompoundString::no_op) variant lets call sites that
//! build narratives conditionally (verbose logging compiled out, feature
//! disabled) construct *something* without branching: it swallows every
//! append and renders as a fixed error string instead of panicking, since
//! being handed a no-op deliberately is valid use.
//!
//! Fragments are kept unjoined until render time, so a narrative touched by
//! a dozen call sites costs a handful of small pushes rather than repeated
//! reallocation of one growing buffer.
//!
//! # Equality
//!
//! Two compound strings are equal iff both are no-op, or both are real with
//! identical fragment sequences. A real-but-empty narrative is therefore
//! distinguishable from the no-op sentinel, which the recorder's dedup
//! relies on.
//!
//! # Usage
//!
//! ```
//! use swipetrace_core::compound::CompoundString;
//!
//! let narrative = CompoundString::new("setInputConsumer: ")
//!     .append("OtherActivityInputConsumer, id ")
//!     .append_numeric(7);
//! assert_eq!(narrative.render(), "setInputConsumer: OtherActivityInputConsumer, id 7");
//!
//! // Disabled diagnostics hand the sentinel around instead of branching.
//! let disabled = CompoundString::no_op().append("never seen");
//! assert!(disabled.is_no_op());
//! ```

use std::fmt;

/// Rendering of the no-op sentinel. A misuse signal, not a crash: disabled
/// diagnostics paths may legitimately hand the sentinel to the recorder.
pub const NO_OP_RENDERING: &str = "ERROR: cannot render no-op compound string";

/// An append-only list of text fragments, or the designated no-op sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundString {
    /// `None` marks the no-op sentinel.
    fragments: Option<Vec<String>>,
}

impl CompoundString {
    /// Create a narrative seeded with one fragment.
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragments: Some(vec![fragment.into()]),
        }
    }

    /// Create an empty (but real) narrative.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            fragments: Some(Vec::new()),
        }
    }

    /// The no-op sentinel. Swallows appends, renders as [`NO_OP_RENDERING`].
    #[must_use]
    pub const fn no_op() -> Self {
        Self { fragments: None }
    }

    /// Append a fragment, builder-style. No-op on the sentinel.
    #[must_use]
    pub fn append(mut self, fragment: impl Into<String>) -> Self {
        if let Some(fragments) = &mut self.fragments {
            fragments.push(fragment.into());
        }
        self
    }

    /// Append a formatted number, builder-style. No-op on the sentinel.
    #[must_use]
    pub fn append_numeric(self, value: i64) -> Self {
        if self.fragments.is_none() {
            return self;
        }
        self.append(value.to_string())
    }

    /// Append every fragment of another narrative, builder-style.
    ///
    /// Appending the sentinel adds nothing; the receiver stays real. A
    /// no-op receiver swallows the append as usual.
    #[must_use]
    pub fn append_compound(mut self, other: CompoundString) -> Self {
        if let (Some(fragments), Some(other_fragments)) = (&mut self.fragments, other.fragments) {
            fragments.extend(other_fragments);
        }
        self
    }

    /// Whether this is the no-op sentinel.
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        self.fragments.is_none()
    }

    /// Concatenate all fragments; the sentinel renders as
    /// [`NO_OP_RENDERING`].
    #[must_use]
    pub fn render(&self) -> String {
        match &self.fragments {
            Some(fragments) => fragments.concat(),
            None => NO_OP_RENDERING.to_string(),
        }
    }
}

impl fmt::Display for CompoundString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragments {
            Some(fragments) => {
                for fragment in fragments {
                    f.write_str(fragment)?;
                }
                Ok(())
            }
            None => f.write_str(NO_OP_RENDERING),
        }
    }
}
