//! Virtual scroll offset for the landing page container.
//!
//! Below the snap threshold, gestures jump between the intro snap points
//! with a short tween. Past it (or when leaving the last snap point
//! downwards) the offset tracks input 1:1, clamped to `[0, max_scroll]`.
//! The controller knows nothing about the DOM; the driver feeds it layout
//! snapshots, gesture deltas and frame timestamps.

use log::debug;

use super::metrics::{Layout, SnapPoints};
use super::snap::find_intro_snap_target;
use super::tween::Tween;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Snapping(Tween),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Settle {
    Open,
    Locked { token: u64 },
}

/// What a gesture did to the offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Locked: the gesture is swallowed.
    Blocked,
    /// An intro-zone snap animation towards `target` started.
    Snap { target: f64 },
    /// Intro-zone gesture with nowhere to go.
    Stay,
    /// Free-zone move, already applied.
    Track { offset: f64 },
    /// Nothing to do, the browser may handle the event.
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureSource {
    Wheel,
    Touch,
}

impl GestureOutcome {
    pub fn suppresses_default(self, source: GestureSource) -> bool {
        match self {
            GestureOutcome::Blocked | GestureOutcome::Snap { .. } | GestureOutcome::Track { .. } => true,
            GestureOutcome::Stay => source == GestureSource::Wheel,
            GestureOutcome::PassThrough => false,
        }
    }
}

/// Result of advancing the running animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Idle,
    Moving,
    /// The animation finished; input stays locked until `release_lock(token)`.
    Settled { token: u64, lock_ms: u32 },
}

#[derive(Debug)]
pub struct ScrollSnapController {
    offset: f64,
    max_scroll: f64,
    snap_threshold: f64,
    snap_points: SnapPoints,
    narrow: bool,
    motion: Motion,
    settle: Settle,
    next_token: u64,
    touch_anchor: f64,
}

impl Default for ScrollSnapController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSnapController {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max_scroll: 0.0,
            snap_threshold: 0.0,
            snap_points: SnapPoints::default(),
            narrow: false,
            motion: Motion::Idle,
            settle: Settle::Open,
            next_token: 0,
            touch_anchor: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    pub fn snap_points(&self) -> &SnapPoints {
        &self.snap_points
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Snapping(_))
    }

    pub fn is_locked(&self) -> bool {
        self.is_animating() || matches!(self.settle, Settle::Locked { .. })
    }

    /// Recomputes bounds and snap values from a fresh layout snapshot.
    /// Snap values are kept when the intro sections could not be measured.
    pub fn apply_layout(&mut self, layout: &Layout) {
        self.max_scroll = layout.max_scroll();
        self.narrow = layout.is_narrow();
        if let (Some(threshold), Some(points)) = (layout.snap_threshold(), layout.snap_points()) {
            self.snap_threshold = threshold;
            self.snap_points = points;
        }
        self.offset = self.clamp(self.offset);
        debug!(
            "scroll layout: max={} threshold={} points={:?}",
            self.max_scroll,
            self.snap_threshold,
            self.snap_points.as_slice()
        );
    }

    pub fn wheel(&mut self, delta: f64, now_ms: f64) -> GestureOutcome {
        self.gesture(delta, now_ms)
    }

    pub fn touch_start(&mut self, client_y: f64) {
        self.touch_anchor = client_y;
    }

    /// Finger moving up scrolls the content down, hence `anchor - y`.
    pub fn touch_move(&mut self, client_y: f64, now_ms: f64) -> GestureOutcome {
        let delta = self.touch_anchor - client_y;
        // Moves while locked still advance the anchor, so the first move
        // after the lock releases only carries its own distance.
        self.touch_anchor = client_y;
        self.gesture(delta, now_ms)
    }

    fn gesture(&mut self, delta: f64, now_ms: f64) -> GestureOutcome {
        if self.is_locked() {
            return GestureOutcome::Blocked;
        }
        if delta == 0.0 {
            return GestureOutcome::PassThrough;
        }

        let would_be = self.offset + delta;
        let last_snap = self.snap_points.last();
        let escaping = self.offset >= last_snap - config::ESCAPE_TOLERANCE && delta > 0.0;

        if would_be < self.snap_threshold && !escaping {
            let target = find_intro_snap_target(self.snap_points.as_slice(), self.offset, delta);
            if target != self.offset {
                self.animate_to(target, now_ms);
                GestureOutcome::Snap { target }
            } else {
                GestureOutcome::Stay
            }
        } else {
            let next = self.clamp(would_be);
            if next != self.offset {
                self.offset = next;
                GestureOutcome::Track { offset: next }
            } else {
                GestureOutcome::PassThrough
            }
        }
    }

    /// Starts a snap animation, replacing whatever animation was running.
    pub fn animate_to(&mut self, target: f64, now_ms: f64) {
        self.motion = Motion::Snapping(Tween::new(self.offset, target, now_ms, config::SNAP_DURATION_MS));
    }

    pub fn scroll_to_top(&mut self, now_ms: f64) {
        self.animate_to(0.0, now_ms);
    }

    /// Animates to an element whose top edge is `rect_top` pixels below the
    /// viewport top. Returns the clamped target.
    pub fn scroll_to_anchor(&mut self, rect_top: f64, now_ms: f64) -> f64 {
        let target = self.clamp(rect_top + self.offset);
        self.animate_to(target, now_ms);
        target
    }

    pub fn tick(&mut self, now_ms: f64) -> Frame {
        let Motion::Snapping(tween) = self.motion else {
            return Frame::Idle;
        };

        self.offset = self.clamp(tween.sample(now_ms));
        if !tween.is_done(now_ms) {
            return Frame::Moving;
        }

        self.motion = Motion::Idle;
        self.next_token += 1;
        let token = self.next_token;
        self.settle = Settle::Locked { token };
        Frame::Settled {
            token,
            lock_ms: self.lock_ms(),
        }
    }

    /// Ends the settle window started by the animation that produced `token`.
    /// Tokens from superseded animations are ignored.
    pub fn release_lock(&mut self, token: u64) -> bool {
        if self.settle == (Settle::Locked { token }) {
            self.settle = Settle::Open;
            true
        } else {
            debug!("ignoring stale scroll unlock {}", token);
            false
        }
    }

    fn lock_ms(&self) -> u32 {
        if self.narrow {
            config::LOCK_MS_NARROW
        } else {
            config::LOCK_MS_WIDE
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.min(self.max_scroll).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::metrics::IntroSections;

    const FRAME_MS: f64 = 16.0;

    fn layout(width: f64) -> Layout {
        Layout {
            container_height: 3000.0,
            viewport_height: 800.0,
            viewport_width: width,
            sections: Some(IntroSections { hero: 900.0, services: 700.0 }),
        }
    }

    fn controller() -> ScrollSnapController {
        let mut c = ScrollSnapController::new();
        c.apply_layout(&layout(1200.0));
        c
    }

    /// Runs frames until the animation settles; returns the settle frame
    /// and the time it happened at.
    fn run_to_settle(c: &mut ScrollSnapController, mut now: f64) -> (Frame, f64) {
        for _ in 0..1000 {
            now += FRAME_MS;
            match c.tick(now) {
                Frame::Moving => {
                    assert!(c.offset() >= 0.0 && c.offset() <= c.max_scroll());
                }
                other => return (other, now),
            }
        }
        panic!("animation never settled");
    }

    fn settle_and_unlock(c: &mut ScrollSnapController, now: f64) -> f64 {
        let (frame, now) = run_to_settle(c, now);
        let Frame::Settled { token, .. } = frame else {
            panic!("expected settle, got {:?}", frame);
        };
        assert!(c.release_lock(token));
        now
    }

    #[test]
    fn scenario_metrics() {
        let c = controller();
        assert_eq!(c.max_scroll(), 2200.0);
        assert_eq!(c.snap_threshold(), 1600.0);
        assert_eq!(c.snap_points().as_slice(), &[0.0, 900.0]);
    }

    #[test]
    fn wheel_down_from_top_snaps_to_services() {
        let mut c = controller();
        let outcome = c.wheel(100.0, 0.0);
        assert_eq!(outcome, GestureOutcome::Snap { target: 900.0 });
        assert!(outcome.suppresses_default(GestureSource::Wheel));
        let (frame, _) = run_to_settle(&mut c, 0.0);
        assert_eq!(frame, Frame::Settled { token: 1, lock_ms: 400 });
        assert_eq!(c.offset(), 900.0);
    }

    #[test]
    fn leaving_last_snap_point_downwards_tracks_input() {
        let mut c = controller();
        c.wheel(100.0, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);

        let outcome = c.wheel(50.0, now);
        assert_eq!(outcome, GestureOutcome::Track { offset: 950.0 });
        assert!(!c.is_animating());
        assert_eq!(c.offset(), 950.0);
    }

    #[test]
    fn escape_allows_small_rounding_below_last_point() {
        let mut c = controller();
        c.animate_to(898.5, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);
        assert_eq!(c.wheel(10.0, now), GestureOutcome::Track { offset: 908.5 });
    }

    #[test]
    fn wheel_up_in_intro_zone_snaps_back_to_top() {
        let mut c = controller();
        c.wheel(100.0, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);
        assert_eq!(c.wheel(-30.0, now), GestureOutcome::Snap { target: 0.0 });
        run_to_settle(&mut c, now);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn wheel_up_at_top_stays_put() {
        let mut c = controller();
        let outcome = c.wheel(-40.0, 0.0);
        assert_eq!(outcome, GestureOutcome::Stay);
        assert!(outcome.suppresses_default(GestureSource::Wheel));
        assert!(!outcome.suppresses_default(GestureSource::Touch));
        assert!(!c.is_animating());
    }

    #[test]
    fn free_zone_upward_motion_re_enters_intro_snapping() {
        let mut c = controller();
        c.animate_to(1700.0, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);
        assert_eq!(c.wheel(-50.0, now), GestureOutcome::Track { offset: 1650.0 });
        // 1650 - 100 = 1550 is back below the threshold.
        assert_eq!(c.wheel(-100.0, now), GestureOutcome::Snap { target: 900.0 });
    }

    #[test]
    fn free_zone_clamps_to_bounds() {
        let mut c = controller();
        c.animate_to(2150.0, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);
        assert_eq!(c.wheel(500.0, now), GestureOutcome::Track { offset: 2200.0 });
        let outcome = c.wheel(500.0, now);
        assert_eq!(outcome, GestureOutcome::PassThrough);
        assert!(!outcome.suppresses_default(GestureSource::Wheel));
        assert_eq!(c.offset(), 2200.0);
    }

    #[test]
    fn gestures_are_blocked_while_animating_and_settling() {
        let mut c = controller();
        c.wheel(100.0, 0.0);
        c.tick(FRAME_MS);
        let mid = c.offset();
        assert_eq!(c.wheel(-100.0, FRAME_MS), GestureOutcome::Blocked);
        assert_eq!(c.offset(), mid);

        let (frame, now) = run_to_settle(&mut c, FRAME_MS);
        let Frame::Settled { token, .. } = frame else { panic!() };
        assert_eq!(c.wheel(50.0, now), GestureOutcome::Blocked);
        c.touch_start(400.0);
        assert_eq!(c.touch_move(300.0, now), GestureOutcome::Blocked);
        assert_eq!(c.offset(), 900.0);

        c.release_lock(token);
        assert!(!c.is_locked());
    }

    #[test]
    fn blocked_touch_moves_still_advance_the_anchor() {
        let mut c = controller();
        c.wheel(100.0, 0.0);
        let (frame, now) = run_to_settle(&mut c, 0.0);
        let Frame::Settled { token, .. } = frame else { panic!() };

        c.touch_start(400.0);
        assert_eq!(c.touch_move(300.0, now), GestureOutcome::Blocked);
        c.release_lock(token);

        // Only the 10px travelled since the last move count.
        assert_eq!(c.touch_move(290.0, now), GestureOutcome::Track { offset: 910.0 });
    }

    #[test]
    fn new_animation_supersedes_running_one() {
        let mut c = controller();
        c.animate_to(900.0, 0.0);
        c.tick(100.0);
        c.tick(200.0);
        assert!(c.offset() > 0.0);

        c.scroll_to_top(200.0);
        let (frame, _) = run_to_settle(&mut c, 200.0);
        assert_eq!(frame, Frame::Settled { token: 1, lock_ms: 400 });
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn stale_unlock_does_not_release_newer_lock() {
        let mut c = controller();
        c.animate_to(900.0, 0.0);
        let (first, now) = run_to_settle(&mut c, 0.0);
        let Frame::Settled { token: old, .. } = first else { panic!() };

        // Programmatic navigation during the settle window.
        c.scroll_to_top(now);
        let (second, _) = run_to_settle(&mut c, now);
        let Frame::Settled { token: new, .. } = second else { panic!() };

        assert!(!c.release_lock(old));
        assert!(c.is_locked());
        assert!(c.release_lock(new));
        assert!(!c.is_locked());
    }

    #[test]
    fn scroll_to_top_always_ends_at_zero() {
        for start in [0.0, 450.0, 900.0, 1600.0, 2200.0] {
            let mut c = controller();
            c.animate_to(start, 0.0);
            let now = settle_and_unlock(&mut c, 0.0);
            c.scroll_to_top(now);
            run_to_settle(&mut c, now);
            assert_eq!(c.offset(), 0.0, "start {}", start);
        }
    }

    #[test]
    fn intro_gestures_always_settle_on_snap_points() {
        let mut c = controller();
        let mut now = 0.0;
        for delta in [30.0, -5.0, 120.0, -200.0, -1.0, 60.0, -60.0] {
            match c.wheel(delta, now) {
                GestureOutcome::Snap { .. } => now = settle_and_unlock(&mut c, now),
                GestureOutcome::Stay => {}
                other => panic!("unexpected {:?} for {}", other, delta),
            }
            assert!(c.snap_points().as_slice().contains(&c.offset()), "offset {}", c.offset());
        }
    }

    #[test]
    fn narrow_layout_shortens_lock_and_moves_boundary() {
        let mut c = ScrollSnapController::new();
        c.apply_layout(&layout(600.0));
        assert_eq!(c.snap_threshold(), 1530.0);
        assert_eq!(c.wheel(10.0, 0.0), GestureOutcome::Snap { target: 830.0 });
        let (frame, _) = run_to_settle(&mut c, 0.0);
        assert_eq!(frame, Frame::Settled { token: 1, lock_ms: 280 });
    }

    #[test]
    fn touch_drag_up_scrolls_down() {
        let mut c = controller();
        c.touch_start(500.0);
        let outcome = c.touch_move(480.0, 0.0);
        assert_eq!(outcome, GestureOutcome::Snap { target: 900.0 });
        assert!(outcome.suppresses_default(GestureSource::Touch));
        let now = settle_and_unlock(&mut c, 0.0);

        // Anchor follows each move, so deltas are incremental.
        c.touch_start(500.0);
        assert_eq!(c.touch_move(470.0, now), GestureOutcome::Track { offset: 930.0 });
        assert_eq!(c.touch_move(460.0, now), GestureOutcome::Track { offset: 940.0 });
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut c = controller();
        c.animate_to(900.0, 0.0);
        let now = settle_and_unlock(&mut c, 0.0);
        assert_eq!(c.wheel(0.0, now), GestureOutcome::PassThrough);
        assert_eq!(c.offset(), 900.0);
    }

    #[test]
    fn resize_clamps_offset_into_new_bounds() {
        let mut c = controller();
        c.animate_to(2200.0, 0.0);
        settle_and_unlock(&mut c, 0.0);

        let mut smaller = layout(1200.0);
        smaller.container_height = 2000.0;
        c.apply_layout(&smaller);
        assert_eq!(c.max_scroll(), 1200.0);
        assert_eq!(c.offset(), 1200.0);
    }

    #[test]
    fn missing_sections_keep_previous_snap_values() {
        let mut c = controller();
        let mut bare = layout(600.0);
        bare.sections = None;
        c.apply_layout(&bare);
        assert_eq!(c.snap_threshold(), 1600.0);
        assert_eq!(c.snap_points().as_slice(), &[0.0, 900.0]);
    }

    #[test]
    fn anchor_targets_are_clamped() {
        let mut c = controller();
        assert_eq!(c.scroll_to_anchor(1200.0, 0.0), 1200.0);
        run_to_settle(&mut c, 0.0);
        assert_eq!(c.offset(), 1200.0);

        let mut c = controller();
        assert_eq!(c.scroll_to_anchor(5000.0, 0.0), 2200.0);
        let mut c = controller();
        assert_eq!(c.scroll_to_anchor(-40.0, 0.0), 0.0);
    }
}
