//! Reveal-on-scroll model
//!
//! A revealable block carries a [`Motion`] describing its entrance (offset,
//! scale, timing) and when it fires. The [`RevealLatch`] is the per-element
//! state: it starts `Pending`, flips to `Revealed` once and never goes back.
//! The latch knows nothing about the DOM; the front end feeds it visibility
//! ratios from whatever observer it has, or tells it that none exists.

use serde::Serialize;
use tracing::trace;

/// Visible fraction of an element needed before it reveals
pub const DEFAULT_THRESHOLD: f64 = 0.22;

/// Entrance durations, in milliseconds
pub const DURATION_MS: u32 = 750;
pub const FAST_DURATION_MS: u32 = 550;
pub const SCALE_DURATION_MS: u32 = 850;

/// Extra delay per item in a staggered group
pub const STAGGER_MS: u32 = 30;

/// Stylesheet driving `[data-reveal]` elements.
///
/// Hidden pending styles only apply under `html.reveal-ready`, which the
/// client sets after confirming an `IntersectionObserver` exists. Without
/// it every block renders in its final state.
pub const REVEAL_CSS: &str = r#"[data-reveal] {
  transition:
    opacity var(--reveal-duration, 750ms) var(--reveal-ease, ease-out) var(--reveal-delay, 0ms),
    transform var(--reveal-duration, 750ms) var(--reveal-ease, ease-out) var(--reveal-delay, 0ms);
}
html.reveal-ready [data-reveal="pending"] {
  opacity: 0;
  transform: translateY(var(--reveal-y, 0px)) scale(var(--reveal-scale, 1));
}
@media (prefers-reduced-motion: reduce) {
  [data-reveal] { transition: none; }
}
"#;

/// When a block starts its entrance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Trigger {
    /// As soon as the element is mounted
    OnMount,
    /// When at least `threshold` of the element is in the viewport.
    /// `once` stops observation after the first reveal.
    InView { threshold: f64, once: bool },
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::InView {
            threshold: DEFAULT_THRESHOLD,
            once: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Easing {
    #[default]
    EaseOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
        }
    }
}

/// Entrance animation descriptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    pub trigger: Trigger,
    /// Starting vertical offset in pixels
    pub offset_y: u32,
    /// Starting scale, in percent
    pub scale_from: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Motion {
    /// Slide up and fade in when scrolled into view
    pub const fn in_view(offset_y: u32) -> Self {
        Self {
            trigger: Trigger::InView {
                threshold: DEFAULT_THRESHOLD,
                once: true,
            },
            offset_y,
            scale_from: 100,
            duration_ms: DURATION_MS,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    /// Slide up and fade in on mount
    pub const fn on_mount(offset_y: u32, delay_ms: u32) -> Self {
        Self {
            trigger: Trigger::OnMount,
            offset_y,
            scale_from: 100,
            duration_ms: DURATION_MS,
            delay_ms,
            easing: Easing::EaseOut,
        }
    }

    /// Short on-mount entrance used for hero kickers
    pub const fn fast(offset_y: u32) -> Self {
        Self {
            duration_ms: FAST_DURATION_MS,
            ..Self::on_mount(offset_y, 0)
        }
    }

    /// Grow from 98% on mount, used by hero visuals
    pub const fn scale_in() -> Self {
        Self {
            offset_y: 0,
            scale_from: 98,
            duration_ms: SCALE_DURATION_MS,
            ..Self::on_mount(0, 0)
        }
    }

    /// Offset the delay for the `index`-th item of a group
    pub const fn staggered(mut self, index: u32) -> Self {
        self.delay_ms += index * STAGGER_MS;
        self
    }

    /// Fade only, no movement
    pub const fn fade(mut self) -> Self {
        self.offset_y = 0;
        self.scale_from = 100;
        self
    }

    /// CSS custom properties consumed by [`REVEAL_CSS`]
    pub fn style(&self) -> String {
        format!(
            "--reveal-y:{}px;--reveal-scale:{};--reveal-duration:{}ms;--reveal-delay:{}ms;--reveal-ease:{}",
            self.offset_y,
            scale_css(self.scale_from),
            self.duration_ms,
            self.delay_ms,
            self.easing.css()
        )
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::in_view(16)
    }
}

fn scale_css(percent: u32) -> String {
    if percent % 100 == 0 {
        (percent / 100).to_string()
    } else {
        format!("{}.{:02}", percent / 100, percent % 100)
    }
}

/// Reveal state of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// Resolved visual values for a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl RevealState {
    pub fn as_attr(self) -> &'static str {
        match self {
            RevealState::Pending => "pending",
            RevealState::Revealed => "revealed",
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn visual(self, motion: &Motion) -> Visual {
        match self {
            RevealState::Pending => Visual {
                opacity: 0.0,
                offset_y: motion.offset_y as f32,
                scale: motion.scale_from as f32 / 100.0,
            },
            RevealState::Revealed => Visual {
                opacity: 1.0,
                offset_y: 0.0,
                scale: 1.0,
            },
        }
    }
}

/// One-shot reveal latch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    trigger: Trigger,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// The element has been mounted. Returns whether the state changed.
    pub fn mounted(&mut self) -> bool {
        match self.trigger {
            Trigger::OnMount => self.reveal(),
            Trigger::InView { .. } => false,
        }
    }

    /// Feed an observed visibility ratio. Returns whether the state changed.
    pub fn observe(&mut self, ratio: f64) -> bool {
        match self.trigger {
            Trigger::InView { threshold, .. } if ratio >= threshold => self.reveal(),
            Trigger::InView { .. } => false,
            Trigger::OnMount => self.reveal(),
        }
    }

    /// No way to observe visibility: show the content now.
    pub fn unobservable(&mut self) -> bool {
        self.reveal()
    }

    /// Whether the front end can stop watching this element
    pub fn should_disconnect(&self) -> bool {
        match self.trigger {
            Trigger::InView { once, .. } => once && self.is_revealed(),
            Trigger::OnMount => self.is_revealed(),
        }
    }

    fn reveal(&mut self) -> bool {
        if self.state.is_revealed() {
            return false;
        }
        self.state = RevealState::Revealed;
        trace!(trigger = ?self.trigger, "reveal");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_view_latch() -> RevealLatch {
        RevealLatch::new(Motion::in_view(14).trigger)
    }

    #[test]
    fn test_latch_starts_pending() {
        let latch = in_view_latch();
        assert_eq!(latch.state(), RevealState::Pending);
        assert!(!latch.should_disconnect());
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut latch = in_view_latch();
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.21));
        assert_eq!(latch.state(), RevealState::Pending);
    }

    #[test]
    fn test_threshold_reveals_once() {
        let mut latch = in_view_latch();
        assert!(latch.observe(0.22));
        assert!(latch.is_revealed());
        assert!(!latch.observe(0.9));
        assert!(latch.should_disconnect());
    }

    #[test]
    fn test_revealed_never_reverts_on_exit_and_reentry() {
        let mut latch = in_view_latch();
        latch.observe(1.0);
        for ratio in [0.0, 0.1, 0.5, 0.0, 1.0] {
            latch.observe(ratio);
            assert_eq!(latch.state(), RevealState::Revealed);
        }
    }

    #[test]
    fn test_in_view_ignores_mount() {
        let mut latch = in_view_latch();
        assert!(!latch.mounted());
        assert_eq!(latch.state(), RevealState::Pending);
    }

    #[test]
    fn test_on_mount_reveals_on_mount() {
        let mut latch = RevealLatch::new(Trigger::OnMount);
        assert!(latch.mounted());
        assert!(!latch.mounted());
        assert!(latch.should_disconnect());
    }

    #[test]
    fn test_unobservable_falls_back_to_revealed() {
        let motion = Motion::in_view(18);
        let mut latch = RevealLatch::new(motion.trigger);
        assert!(latch.unobservable());
        let visual = latch.state().visual(&motion);
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.offset_y, 0.0);
        assert_eq!(visual.scale, 1.0);
    }

    #[test]
    fn test_keep_observing_when_not_once() {
        let mut latch = RevealLatch::new(Trigger::InView {
            threshold: 0.5,
            once: false,
        });
        latch.observe(0.6);
        assert!(latch.is_revealed());
        assert!(!latch.should_disconnect());
        latch.observe(0.0);
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_pending_visual_uses_motion_start() {
        let visual = RevealState::Pending.visual(&Motion::scale_in());
        assert_eq!(visual.opacity, 0.0);
        assert_eq!(visual.offset_y, 0.0);
        assert!((visual.scale - 0.98).abs() < f32::EPSILON);
    }

    #[test]
    fn test_motion_style() {
        let style = Motion::in_view(16).style();
        assert_eq!(
            style,
            "--reveal-y:16px;--reveal-scale:1;--reveal-duration:750ms;--reveal-delay:0ms;--reveal-ease:ease-out"
        );
        assert!(Motion::scale_in().style().contains("--reveal-scale:0.98"));
    }

    #[test]
    fn test_staggered_delay() {
        let motion = Motion::in_view(14).staggered(3);
        assert_eq!(motion.delay_ms, 90);
        assert_eq!(Motion::on_mount(18, 40).staggered(1).delay_ms, 70);
    }

    #[test]
    fn test_fast_and_fade() {
        let fast = Motion::fast(12);
        assert_eq!(fast.duration_ms, FAST_DURATION_MS);
        assert_eq!(fast.trigger, Trigger::OnMount);
        assert_eq!(Motion::on_mount(18, 340).fade().offset_y, 0);
    }

    #[test]
    fn test_css_gates_hidden_state() {
        assert!(REVEAL_CSS.contains("html.reveal-ready [data-reveal=\"pending\"]"));
        assert!(!REVEAL_CSS.contains("\n[data-reveal=\"pending\"]"));
    }
}
