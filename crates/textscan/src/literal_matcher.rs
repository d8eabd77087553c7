//! Incremental matcher for the named boolean literals.
//!
//! Both literals are tracked at once and the matcher is fed one character at
//! a time, so the boolean scanner never reads further than the longer
//! literal and stops as soon as either one is complete.

/// What happened after feeding one more character into the matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The character extends a prefix of at least one literal.
    NeedMore,
    /// The character completed a literal.
    Done(bool),
    /// No literal can match any more.
    Reject,
}

/// Remaining suffixes of the `false` and `true` literals still in play.
/// `None` once a literal has been ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LiteralMatcher<'l> {
    falsename: Option<&'l str>,
    truename: Option<&'l str>,
}

impl<'l> LiteralMatcher<'l> {
    /// Empty literals can never match and start out ruled out.
    pub(crate) fn new(truename: &'l str, falsename: &'l str) -> Self {
        Self {
            falsename: Some(falsename).filter(|s| !s.is_empty()),
            truename: Some(truename).filter(|s| !s.is_empty()),
        }
    }

    /// Whether any literal is still possible.
    pub(crate) fn is_viable(&self) -> bool {
        self.falsename.is_some() || self.truename.is_some()
    }

    /// Give the matcher the next input character and learn what to do next.
    pub(crate) fn step(&mut self, c: char) -> Step {
        // `false` is checked first so equal literals resolve the same way
        // every time.
        for (slot, value) in [(&mut self.falsename, false), (&mut self.truename, true)] {
            let Some(rest) = *slot else { continue };
            match rest.strip_prefix(c) {
                Some("") => return Step::Done(value),
                Some(tail) => *slot = Some(tail),
                None => *slot = None,
            }
        }
        if self.is_viable() {
            Step::NeedMore
        } else {
            Step::Reject
        }
    }
}
