//! Guest counts with clamped steppers.
//!
//! Like the date picker, edits are buffered: steppers change a draft that
//! only replaces the committed count on confirm.

use crate::translations::Translations;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// At least one adult is always present.
pub const MIN_ADULTS: u32 = 1;
pub const MIN_CHILDREN: u32 = 0;

/// Called with the new count when a guest edit is confirmed.
pub type GuestCallback = Box<dyn FnMut(GuestCount) + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestCount {
    pub adults: u32,
    pub children: u32,
}

impl GuestCount {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    /// `"2 adults"`, `"1 adult, 3 children"`.
    pub fn summary(&self, translations: &Translations) -> String {
        let adults = translations.adults_label(self.adults);
        if self.children == 0 {
            adults
        } else {
            format!("{adults}, {}", translations.children_label(self.children))
        }
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self::new(2, 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestKind {
    Adults,
    Children,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestLimits {
    pub max_adults: u32,
    pub max_children: u32,
}

impl GuestLimits {
    pub fn bounds(&self, kind: GuestKind) -> (u32, u32) {
        match kind {
            GuestKind::Adults => (MIN_ADULTS, self.max_adults.max(MIN_ADULTS)),
            GuestKind::Children => (MIN_CHILDREN, self.max_children),
        }
    }

    /// Bring a count inside the limits.
    pub fn clamp(&self, count: GuestCount) -> GuestCount {
        let (min_a, max_a) = self.bounds(GuestKind::Adults);
        let (min_c, max_c) = self.bounds(GuestKind::Children);
        GuestCount {
            adults: count.adults.clamp(min_a, max_a),
            children: count.children.clamp(min_c, max_c),
        }
    }
}

impl Default for GuestLimits {
    fn default() -> Self {
        Self {
            max_adults: 30,
            max_children: 10,
        }
    }
}

fn value_of(count: GuestCount, kind: GuestKind) -> u32 {
    match kind {
        GuestKind::Adults => count.adults,
        GuestKind::Children => count.children,
    }
}

fn field(count: &mut GuestCount, kind: GuestKind) -> &mut u32 {
    match kind {
        GuestKind::Adults => &mut count.adults,
        GuestKind::Children => &mut count.children,
    }
}

/// Guest stepper pair with a confirm step.
pub struct GuestSelector {
    committed: GuestCount,
    draft: Option<GuestCount>,
    limits: GuestLimits,
    disabled: bool,
    on_change: Option<GuestCallback>,
}

impl GuestSelector {
    /// The initial count is clamped to `limits`.
    pub fn new(initial: GuestCount, limits: GuestLimits) -> Self {
        Self {
            committed: limits.clamp(initial),
            draft: None,
            limits,
            disabled: false,
            on_change: None,
        }
    }

    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(GuestCount) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Start editing from the committed count. Returns `false` when disabled.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        if self.draft.is_none() {
            self.draft = Some(self.committed);
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The count being edited, or the committed count when closed.
    pub fn current(&self) -> GuestCount {
        self.draft.unwrap_or(self.committed)
    }

    pub fn committed(&self) -> GuestCount {
        self.committed
    }

    pub fn limits(&self) -> GuestLimits {
        self.limits
    }

    pub fn can_increment(&self, kind: GuestKind) -> bool {
        let (_, max) = self.limits.bounds(kind);
        self.is_open() && value_of(self.current(), kind) < max
    }

    pub fn can_decrement(&self, kind: GuestKind) -> bool {
        let (min, _) = self.limits.bounds(kind);
        self.is_open() && value_of(self.current(), kind) > min
    }

    /// Move a stepper by `delta`, clamped to the limits.
    ///
    /// Returns the new draft, or `None` when not open.
    pub fn step(&mut self, kind: GuestKind, delta: i64) -> Option<GuestCount> {
        let (min, max) = self.limits.bounds(kind);
        let draft = self.draft.as_mut()?;
        let value = field(draft, kind);
        let next = (i64::from(*value) + delta).clamp(i64::from(min), i64::from(max));
        *value = u32::try_from(next).unwrap_or(min);
        Some(*draft)
    }

    pub fn increment(&mut self, kind: GuestKind) -> Option<GuestCount> {
        self.step(kind, 1)
    }

    pub fn decrement(&mut self, kind: GuestKind) -> Option<GuestCount> {
        self.step(kind, -1)
    }

    /// Commit the draft and notify the caller.
    pub fn confirm(&mut self) -> Option<GuestCount> {
        let draft = self.draft.take()?;
        self.committed = draft;
        info!(adults = draft.adults, children = draft.children, "guests confirmed");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(draft);
        }
        Some(draft)
    }

    /// Drop the draft without committing.
    pub fn close(&mut self) -> bool {
        let closed = self.draft.take().is_some();
        if closed {
            debug!("guest edit discarded");
        }
        closed
    }

    /// Replace the committed count from outside, clamped to the limits.
    pub fn set_committed(&mut self, count: GuestCount) {
        self.committed = self.limits.clamp(count);
    }

    pub fn summary(&self, translations: &Translations) -> String {
        self.committed.summary(translations)
    }
}

impl fmt::Debug for GuestSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestSelector")
            .field("committed", &self.committed)
            .field("draft", &self.draft)
            .field("limits", &self.limits)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
