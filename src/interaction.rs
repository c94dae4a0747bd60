//! Press tracking and tap dispatch for interactive labels.
//!
//! Platform adapters translate their touch or pointer gestures into
//! [`PressPhase`] transitions plus a text offset and feed them to a
//! [`PressTracker`]. The tracker keeps the highlighted occurrence while the
//! press is down, hands it to the matching [`TapHandlers`] callback on
//! release, and drops the highlight after a short delay.
//!
//! The tracker owns no timer. A release returns a [`ScheduledClear`]; the
//! host either calls [`PressTracker::poll`] from its frame loop or arms
//! its own timer and calls [`PressTracker::fire_clear`] with the token.
//!
//! # Examples
//!
//! ```
//! use social_text::{AnnotatedText, PressPhase, PressTracker, TapHandlers};
//! use std::time::{Duration, Instant};
//!
//! let text = AnnotatedText::with_text("ping @bob");
//! let mut tapped = Vec::new();
//! let mut handlers = TapHandlers::new().on_mention(|m| tapped.push(m.to_string()));
//! let mut tracker = PressTracker::new();
//!
//! let now = Instant::now();
//! tracker.press(&text, PressPhase::Began, Some(6), now, &mut handlers);
//! tracker.press(&text, PressPhase::Ended, Some(6), now, &mut handlers);
//! assert!(tracker.selected().is_some());
//!
//! assert!(tracker.poll(now + Duration::from_millis(300)));
//! assert!(tracker.selected().is_none());
//! drop(handlers);
//! assert_eq!(tapped, ["@bob"]);
//! ```

use crate::entity::{EntityKind, Occurrence};
use crate::event::{ENTITY_TAPPED, emit_event};
use crate::text::AnnotatedText;
use std::fmt;
use std::time::{Duration, Instant};

/// Phase of a press gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// Press went down.
    Began,
    /// Press moved while down.
    Changed,
    /// Press lifted.
    Ended,
    /// Press was interrupted by the platform.
    Cancelled,
}

impl PressPhase {
    /// Check if the press is still down.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// Check if the press is over.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

type Handler<'a> = Box<dyn FnMut(&str) + 'a>;

/// Per-kind tap callbacks. Each receives the occurrence's matched text.
#[derive(Default)]
pub struct TapHandlers<'a> {
    mention: Option<Handler<'a>>,
    hashtag: Option<Handler<'a>>,
    link: Option<Handler<'a>>,
    username: Option<Handler<'a>>,
}

impl<'a> TapHandlers<'a> {
    /// Create handlers with no callbacks installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_mention(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.mention = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_hashtag(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.hashtag = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_link(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.link = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_username(mut self, handler: impl FnMut(&str) + 'a) -> Self {
        self.username = Some(Box::new(handler));
        self
    }

    /// Check if a callback is installed for a kind.
    #[must_use]
    pub fn handles(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Mention => self.mention.is_some(),
            EntityKind::Hashtag => self.hashtag.is_some(),
            EntityKind::Url => self.link.is_some(),
            EntityKind::Username => self.username.is_some(),
        }
    }

    /// Call the callback for the occurrence's kind.
    ///
    /// Emits an [`ENTITY_TAPPED`] event with `kind:text` data whether or
    /// not a callback is installed. Returns true if a callback ran.
    pub fn dispatch(&mut self, occurrence: &Occurrence) -> bool {
        emit_event(
            ENTITY_TAPPED,
            &format!("{}:{}", occurrence.kind, occurrence.text),
        );
        let handler = match occurrence.kind {
            EntityKind::Mention => self.mention.as_mut(),
            EntityKind::Hashtag => self.hashtag.as_mut(),
            EntityKind::Url => self.link.as_mut(),
            EntityKind::Username => self.username.as_mut(),
        };
        match handler {
            Some(handler) => {
                handler(&occurrence.text);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TapHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapHandlers")
            .field("mention", &self.mention.is_some())
            .field("hashtag", &self.hashtag.is_some())
            .field("link", &self.link.is_some())
            .field("username", &self.username.is_some())
            .finish()
    }
}

/// Identifies one scheduled clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClearToken(u64);

/// A pending selection clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledClear {
    pub token: ClearToken,
    pub due: Instant,
}

/// Result of feeding one press phase to a [`PressTracker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// A new occurrence became selected.
    Selected(Occurrence),
    /// The current selection was hit again and kept.
    Kept,
    /// The previous selection was dropped.
    Deselected,
    /// The press ended on a selection, which was dispatched.
    Dispatched {
        occurrence: Occurrence,
        /// Whether a callback was installed for its kind.
        handled: bool,
        clear: ScheduledClear,
    },
    /// Nothing was selected before or after.
    Idle,
}

/// Selection state for a label receiving press gestures.
#[derive(Clone, Debug)]
pub struct PressTracker {
    selected: Option<Occurrence>,
    pending: Option<ScheduledClear>,
    clear_delay: Duration,
    next_token: u64,
}

impl PressTracker {
    /// Delay between release and dropping the highlight.
    pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(250);

    #[must_use]
    pub fn new() -> Self {
        Self::with_clear_delay(Self::DEFAULT_CLEAR_DELAY)
    }

    #[must_use]
    pub fn with_clear_delay(clear_delay: Duration) -> Self {
        Self {
            selected: None,
            pending: None,
            clear_delay,
            next_token: 0,
        }
    }

    #[must_use]
    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// The occurrence currently highlighted.
    #[must_use]
    pub fn selected(&self) -> Option<&Occurrence> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn pending_clear(&self) -> Option<ScheduledClear> {
        self.pending
    }

    /// Feed one press phase at a byte offset into `text`.
    ///
    /// `offset` is `None` when the press is outside any glyph.
    pub fn press(
        &mut self,
        text: &AnnotatedText,
        phase: PressPhase,
        offset: Option<usize>,
        now: Instant,
        handlers: &mut TapHandlers<'_>,
    ) -> PressOutcome {
        if phase.is_active() {
            self.cancel_clear();
            let hit = offset.and_then(|offset| text.occurrence_at(offset));
            return self.select(hit);
        }

        let Some(occurrence) = self.selected.clone() else {
            return PressOutcome::Idle;
        };
        let handled = handlers.dispatch(&occurrence);
        let clear = self.schedule_clear(now);
        PressOutcome::Dispatched {
            occurrence,
            handled,
            clear,
        }
    }

    fn select(&mut self, hit: Option<&Occurrence>) -> PressOutcome {
        match (hit, &self.selected) {
            (Some(hit), Some(current)) if hit.range == current.range => PressOutcome::Kept,
            (Some(hit), _) => {
                self.selected = Some(hit.clone());
                PressOutcome::Selected(hit.clone())
            }
            (None, Some(_)) => {
                self.selected = None;
                PressOutcome::Deselected
            }
            (None, None) => PressOutcome::Idle,
        }
    }

    fn schedule_clear(&mut self, now: Instant) -> ScheduledClear {
        self.next_token = self.next_token.wrapping_add(1);
        let scheduled = ScheduledClear {
            token: ClearToken(self.next_token),
            due: now + self.clear_delay,
        };
        self.pending = Some(scheduled);
        scheduled
    }

    /// Run the scheduled clear if it is due. Returns true if it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(scheduled) if now >= scheduled.due => self.fire_clear(scheduled.token),
            _ => false,
        }
    }

    /// Run the scheduled clear identified by `token`.
    ///
    /// Stale tokens are ignored, so a timer armed for an earlier release
    /// cannot drop a newer selection.
    pub fn fire_clear(&mut self, token: ClearToken) -> bool {
        if self.pending.is_none_or(|scheduled| scheduled.token != token) {
            return false;
        }
        self.pending = None;
        self.selected = None;
        true
    }

    /// Cancel the scheduled clear. Returns true if one was pending.
    pub fn cancel_clear(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKinds;
    use crate::text::AnnotatorOptions;
    use std::cell::RefCell;

    fn sample() -> AnnotatedText {
        let options = AnnotatorOptions::default()
            .with_enabled_kinds(EntityKinds::all())
            .with_usernames(["Nodes"]);
        let mut text = AnnotatedText::with_options(options).unwrap();
        text.set_content("@bob #rust http://a.b Nodes");
        text
    }

    #[test]
    fn test_phase_helpers() {
        assert!(PressPhase::Began.is_active());
        assert!(PressPhase::Changed.is_active());
        assert!(PressPhase::Ended.is_finished());
        assert!(PressPhase::Cancelled.is_finished());
        assert!(!PressPhase::Began.is_finished());
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let calls = RefCell::new(Vec::new());
        let mut handlers = TapHandlers::new()
            .on_mention(|t| calls.borrow_mut().push(format!("m {t}")))
            .on_hashtag(|t| calls.borrow_mut().push(format!("h {t}")))
            .on_link(|t| calls.borrow_mut().push(format!("l {t}")))
            .on_username(|t| calls.borrow_mut().push(format!("u {t}")));

        let text = sample();
        for offset in [1, 6, 12, 23] {
            let occurrence = text.occurrence_at(offset).unwrap().clone();
            assert!(handlers.dispatch(&occurrence));
        }
        drop(handlers);
        assert_eq!(
            calls.into_inner(),
            vec!["m @bob", "h #rust", "l http://a.b", "u Nodes"]
        );
    }

    #[test]
    fn test_dispatch_without_handler() {
        let mut handlers = TapHandlers::new();
        assert!(!handlers.handles(EntityKind::Mention));
        let occurrence = Occurrence::new(EntityKind::Mention, 0..2, "@a");
        assert!(!handlers.dispatch(&occurrence));
    }

    #[test]
    fn test_press_selects_and_keeps() {
        let text = sample();
        let mut tracker = PressTracker::new();
        let mut handlers = TapHandlers::new();
        let now = Instant::now();

        let outcome = tracker.press(&text, PressPhase::Began, Some(1), now, &mut handlers);
        assert!(matches!(outcome, PressOutcome::Selected(ref o) if o.text == "@bob"));

        let outcome = tracker.press(&text, PressPhase::Changed, Some(3), now, &mut handlers);
        assert_eq!(outcome, PressOutcome::Kept);

        let outcome = tracker.press(&text, PressPhase::Changed, Some(6), now, &mut handlers);
        assert!(matches!(outcome, PressOutcome::Selected(ref o) if o.text == "#rust"));

        let outcome = tracker.press(&text, PressPhase::Changed, None, now, &mut handlers);
        assert_eq!(outcome, PressOutcome::Deselected);
        assert!(tracker.selected().is_none());

        let outcome = tracker.press(&text, PressPhase::Changed, Some(4), now, &mut handlers);
        assert_eq!(outcome, PressOutcome::Idle);
    }

    #[test]
    fn test_release_dispatches_and_schedules_clear() {
        let text = sample();
        let tapped = RefCell::new(Vec::new());
        let mut handlers = TapHandlers::new().on_hashtag(|t| tapped.borrow_mut().push(t.to_string()));
        let mut tracker = PressTracker::new();
        let now = Instant::now();

        tracker.press(&text, PressPhase::Began, Some(7), now, &mut handlers);
        let outcome = tracker.press(&text, PressPhase::Ended, Some(7), now, &mut handlers);
        let PressOutcome::Dispatched { occurrence, handled, clear } = outcome else {
            panic!("expected dispatch, got {outcome:?}");
        };
        assert_eq!(occurrence.text, "#rust");
        assert!(handled);
        assert_eq!(clear.due, now + PressTracker::DEFAULT_CLEAR_DELAY);
        assert_eq!(tracker.pending_clear(), Some(clear));

        // Still highlighted until the delay passes.
        assert!(!tracker.poll(now + Duration::from_millis(100)));
        assert!(tracker.selected().is_some());
        assert!(tracker.poll(now + Duration::from_millis(250)));
        assert!(tracker.selected().is_none());
        assert!(tracker.pending_clear().is_none());

        drop(handlers);
        assert_eq!(tapped.into_inner(), vec!["#rust"]);
    }

    #[test]
    fn test_release_without_selection_is_idle() {
        let text = sample();
        let mut tracker = PressTracker::new();
        let mut handlers = TapHandlers::new();
        let now = Instant::now();
        tracker.press(&text, PressPhase::Began, Some(4), now, &mut handlers);
        let outcome = tracker.press(&text, PressPhase::Cancelled, None, now, &mut handlers);
        assert_eq!(outcome, PressOutcome::Idle);
        assert!(tracker.pending_clear().is_none());
    }

    #[test]
    fn test_new_press_cancels_pending_clear() {
        let text = sample();
        let mut tracker = PressTracker::with_clear_delay(Duration::from_millis(50));
        let mut handlers = TapHandlers::new();
        let now = Instant::now();

        tracker.press(&text, PressPhase::Began, Some(1), now, &mut handlers);
        let PressOutcome::Dispatched { clear: first, .. } =
            tracker.press(&text, PressPhase::Ended, Some(1), now, &mut handlers)
        else {
            panic!("expected dispatch");
        };

        tracker.press(&text, PressPhase::Began, Some(6), now, &mut handlers);
        assert!(tracker.pending_clear().is_none());

        // The stale timer fires late and must not drop the new selection.
        assert!(!tracker.fire_clear(first.token));
        assert_eq!(tracker.selected().map(|o| o.kind), Some(EntityKind::Hashtag));

        let PressOutcome::Dispatched { clear: second, .. } =
            tracker.press(&text, PressPhase::Ended, Some(6), now, &mut handlers)
        else {
            panic!("expected dispatch");
        };
        assert_ne!(first.token, second.token);
        assert!(tracker.cancel_clear());
        assert!(!tracker.cancel_clear());
        assert!(!tracker.poll(now + Duration::from_secs(1)));
        assert!(tracker.selected().is_some());
    }

    #[test]
    fn test_username_hit_takes_priority() {
        let options = AnnotatorOptions::default()
            .with_enabled_kinds(EntityKinds::all())
            .with_usernames(["Nodes"]);
        let mut text = AnnotatedText::with_options(options).unwrap();
        text.set_content("@Nodes");
        let mut tracker = PressTracker::new();
        let mut handlers = TapHandlers::new();
        let outcome = tracker.press(&text, PressPhase::Began, Some(3), Instant::now(), &mut handlers);
        assert!(matches!(outcome, PressOutcome::Selected(ref o) if o.kind == EntityKind::Username));
    }
}
