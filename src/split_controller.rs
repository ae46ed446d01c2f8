// Drag state machine and geometry for a vertical two-panel split.
// The controller is headless: the egui widget in split_view.rs feeds it
// gesture events and reads back panel heights every frame.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::spring::Spring;

/// Construction parameters for a split. Immutable once the controller exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Minimum height of either panel
    pub min_height: f32,
    /// Distance from an edge below which a release snaps to that edge
    pub snap_threshold: f32,
    /// Vertical space taken by the drag handle
    pub handle_gap: f32,
    pub initial_top_height: f32,
    pub spring: Spring,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_height: 100.0,
            snap_threshold: 200.0,
            handle_gap: 30.0,
            initial_top_height: 480.0,
            spring: Spring::default(),
        }
    }
}

impl SplitConfig {
    /// Smallest container height for which both panels stay non-negative
    pub fn min_total_height(&self) -> f32 {
        2.0 * self.min_height + self.handle_gap
    }
}

/// Gesture state of the handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        /// Top height when the gesture started
        base_height: f32,
        /// Cumulative vertical translation since the gesture started
        translation: f32,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn translation(&self) -> f32 {
        match self {
            DragState::Idle => 0.0,
            DragState::Dragging { translation, .. } => *translation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapAnimation {
    from: f32,
    to: f32,
    elapsed: f32,
}

/// Where a release at height `h` should snap to, if anywhere.
///
/// The top edge is checked first, so in a container too small to keep the
/// two snap zones apart the top panel collapses.
pub fn snap_target(
    h: f32,
    total_height: f32,
    min_height: f32,
    snap_threshold: f32,
) -> Option<f32> {
    let zone = min_height + snap_threshold;
    if h < zone {
        Some(min_height)
    } else if total_height - h < zone {
        Some(total_height - min_height)
    } else {
        None
    }
}

pub struct SplitController {
    config: SplitConfig,
    total_height: f32,
    top_height: f32,
    drag: DragState,
    animation: Option<SnapAnimation>,
}

impl SplitController {
    /// Create a controller for a container of `total_height`.
    ///
    /// `total_height` must be at least `2 * min_height + handle_gap`. This is
    /// asserted in debug builds; release builds keep going and may report a
    /// negative bottom panel height.
    ///
    /// An `initial_top_height` outside `min_height..=total_height - min_height`
    /// comes from user input (flags, config file) and is clamped with a warning.
    pub fn new(config: SplitConfig, total_height: f32) -> Self {
        debug_assert!(
            total_height >= config.min_total_height(),
            "container height {} is below the minimum {} for this split",
            total_height,
            config.min_total_height()
        );

        let mut controller = Self {
            config,
            total_height,
            top_height: config.initial_top_height,
            drag: DragState::Idle,
            animation: None,
        };

        let clamped = controller.clamp_height(config.initial_top_height);
        if clamped != config.initial_top_height {
            warn!(
                "Initial top height {} is outside {}..={}, using {}",
                config.initial_top_height,
                config.min_height,
                controller.max_top_height(),
                clamped
            );
            controller.top_height = clamped;
        }
        controller
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Report the container height for this frame
    pub fn set_total_height(&mut self, total_height: f32) {
        if total_height == self.total_height {
            return;
        }
        if total_height < self.config.min_total_height() {
            warn!(
                "Container height {} is below the minimum {}, panel heights may go negative",
                total_height,
                self.config.min_total_height()
            );
        }
        self.total_height = total_height;
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Model value of the top panel height (the snap target while animating)
    pub fn top_height(&self) -> f32 {
        self.top_height
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag.translation()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn max_top_height(&self) -> f32 {
        self.total_height - self.config.min_height
    }

    fn clamp_height(&self, candidate: f32) -> f32 {
        // min/max rather than f32::clamp: a degenerate container has max < min
        candidate.min(self.max_top_height()).max(self.config.min_height)
    }

    pub fn on_drag_start(&mut self) {
        if self.animation.take().is_some() {
            debug!("Drag started during snap animation, animation cancelled");
        }
        self.drag = DragState::Dragging {
            base_height: self.top_height,
            translation: 0.0,
        };
        debug!("Drag started at top height {}", self.top_height);
    }

    /// `translation_y` is the cumulative vertical translation since the drag started
    pub fn on_drag_move(&mut self, translation_y: f32) {
        let base_height = match &mut self.drag {
            DragState::Idle => {
                debug!("Ignoring drag move while idle");
                return;
            }
            DragState::Dragging { base_height, translation } => {
                *translation = translation_y;
                *base_height
            }
        };

        let new_height = self.clamp_height(base_height + translation_y);
        if new_height != self.top_height {
            self.top_height = new_height;
        }
    }

    /// Finish the gesture and apply the snap policy. Returns the snap target
    /// if the split snapped to an edge.
    pub fn on_drag_end(&mut self) -> Option<f32> {
        if !self.drag.is_dragging() {
            debug!("Ignoring drag end while idle");
            return None;
        }
        self.drag = DragState::Idle;

        let target = snap_target(
            self.top_height,
            self.total_height,
            self.config.min_height,
            self.config.snap_threshold,
        )?;

        info!("Snapping top height {} -> {}", self.top_height, target);
        if target != self.top_height && !self.config.spring.is_instant() {
            self.animation = Some(SnapAnimation {
                from: self.top_height,
                to: target,
                elapsed: 0.0,
            });
        }
        self.top_height = target;
        Some(target)
    }

    /// Pointer cancel is handled exactly like a release
    pub fn on_drag_cancel(&mut self) -> Option<f32> {
        self.on_drag_end()
    }

    /// Advance the snap animation by `dt` seconds. Returns true while it is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let duration = self.config.spring.duration;
        match &mut self.animation {
            Some(animation) => {
                animation.elapsed += dt;
                if animation.elapsed >= duration {
                    self.animation = None;
                    false
                } else {
                    true
                }
            }
            None => false,
        }
    }

    /// Height to lay the top panel out with this frame.
    ///
    /// The spring overshoots slightly when underdamped; the animated value is
    /// held inside the drag bounds so a snap never shrinks a panel below `min_height`.
    pub fn top_panel_height(&self) -> f32 {
        match self.animation {
            Some(a) => self.clamp_height(self.config.spring.value_at(a.from, a.to, a.elapsed)),
            None => self.top_height,
        }
    }

    pub fn bottom_panel_height(&self) -> f32 {
        self.total_height - self.top_panel_height() - self.config.handle_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> SplitConfig {
        SplitConfig {
            spring: Spring::instant(),
            ..SplitConfig::default()
        }
    }

    fn controller() -> SplitController {
        SplitController::new(config(), 800.0)
    }

    fn drag_to(c: &mut SplitController, translation: f32) {
        c.on_drag_start();
        c.on_drag_move(translation);
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.top_height(), 480.0);
        assert_eq!(c.drag_offset(), 0.0);
        assert!(!c.is_dragging());
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_past_top_clamps_then_stays_at_min() {
        let mut c = controller();
        drag_to(&mut c, -400.0);
        assert!(c.is_dragging());
        assert_eq!(c.drag_offset(), -400.0);
        assert_eq!(c.top_height(), 100.0);

        assert_eq!(c.on_drag_end(), Some(100.0));
        assert_eq!(c.top_height(), 100.0);
        assert!(!c.is_dragging());
        assert_eq!(c.drag_offset(), 0.0);
    }

    #[test]
    fn test_small_drag_does_not_snap() {
        let mut c = controller();
        drag_to(&mut c, 50.0);
        assert_eq!(c.top_height(), 530.0);
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(c.top_height(), 530.0);
    }

    #[test]
    fn test_translation_is_relative_to_drag_start() {
        let mut c = controller();
        c.on_drag_start();
        c.on_drag_move(20.0);
        c.on_drag_move(40.0);
        c.on_drag_move(30.0);
        assert_eq!(c.top_height(), 510.0);
    }

    #[test]
    fn test_snap_just_inside_top_zone() {
        let mut c = controller();
        drag_to(&mut c, -181.0);
        assert_eq!(c.top_height(), 299.0);
        c.on_drag_end();
        assert_eq!(c.top_height(), 100.0);
    }

    #[test]
    fn test_no_snap_just_outside_top_zone() {
        let mut c = controller();
        drag_to(&mut c, -179.0);
        assert_eq!(c.top_height(), 301.0);
        c.on_drag_end();
        assert_eq!(c.top_height(), 301.0);
    }

    #[test]
    fn test_snap_just_inside_bottom_zone() {
        let mut c = controller();
        drag_to(&mut c, 21.0);
        assert_eq!(c.top_height(), 501.0);
        assert_eq!(c.on_drag_end(), Some(700.0));
        assert_eq!(c.top_height(), 700.0);
    }

    #[test]
    fn test_snap_decision_ignores_drag_history() {
        // Starting in the top zone and barely moving still snaps
        let mut c = controller();
        drag_to(&mut c, -200.0);
        c.on_drag_end();
        assert_eq!(c.top_height(), 100.0);

        drag_to(&mut c, 150.0);
        assert_eq!(c.top_height(), 250.0);
        c.on_drag_end();
        assert_eq!(c.top_height(), 100.0);
    }

    #[test]
    fn test_top_zone_wins_in_small_container() {
        // 500 < 2 * (100 + 200), so both zones overlap at 250
        assert_eq!(snap_target(250.0, 500.0, 100.0, 200.0), Some(100.0));

        let mut c = SplitController::new(
            SplitConfig {
                initial_top_height: 250.0,
                ..config()
            },
            500.0,
        );
        c.on_drag_start();
        c.on_drag_end();
        assert_eq!(c.top_height(), 100.0);
    }

    #[test]
    fn test_derived_geometry() {
        let c = controller();
        assert_eq!(c.top_panel_height(), 480.0);
        assert_eq!(c.bottom_panel_height(), 290.0);
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut c = controller();
        c.on_drag_move(-300.0);
        assert_eq!(c.top_height(), 480.0);
        assert_eq!(c.on_drag_end(), None);
        assert_eq!(c.top_height(), 480.0);
    }

    #[test]
    fn test_cancel_behaves_like_end() {
        let mut c = controller();
        drag_to(&mut c, -181.0);
        assert_eq!(c.on_drag_cancel(), Some(100.0));
        assert!(!c.is_dragging());
        assert_eq!(c.top_height(), 100.0);
    }

    #[test]
    fn test_snap_animates_towards_target() {
        let mut c = SplitController::new(SplitConfig::default(), 800.0);
        drag_to(&mut c, -181.0);
        c.on_drag_end();

        // Model value is the target right away, layout still shows the release point
        assert_eq!(c.top_height(), 100.0);
        assert!(c.is_animating());
        assert_eq!(c.top_panel_height(), 299.0);
        assert_eq!(c.bottom_panel_height(), 800.0 - 299.0 - 30.0);

        assert!(c.tick(0.1));
        let mid = c.top_panel_height();
        assert!(mid < 299.0, "expected progress towards 100, got {}", mid);

        assert!(!c.tick(1.0));
        assert!(!c.is_animating());
        assert_eq!(c.top_panel_height(), 100.0);
        assert_eq!(c.bottom_panel_height(), 670.0);
    }

    #[test]
    fn test_drag_start_cancels_animation() {
        let mut c = SplitController::new(SplitConfig::default(), 800.0);
        drag_to(&mut c, 21.0);
        c.on_drag_end();
        assert!(c.is_animating());

        c.on_drag_start();
        assert!(!c.is_animating());
        assert_eq!(c.top_panel_height(), 700.0);
        c.on_drag_move(-10.0);
        assert_eq!(c.top_height(), 690.0);
    }

    #[test]
    fn test_no_animation_without_snap() {
        let mut c = SplitController::new(SplitConfig::default(), 800.0);
        drag_to(&mut c, 50.0);
        c.on_drag_end();
        assert!(!c.is_animating());
        assert!(!c.tick(0.016));
    }

    #[test]
    fn test_total_height_change_keeps_top_height() {
        let mut c = controller();
        c.set_total_height(1000.0);
        assert_eq!(c.top_height(), 480.0);
        assert_eq!(c.bottom_panel_height(), 490.0);

        drag_to(&mut c, 400.0);
        assert_eq!(c.top_height(), 880.0);
    }

    #[test]
    fn test_initial_height_outside_bounds_is_clamped() {
        let high = SplitController::new(
            SplitConfig {
                initial_top_height: 5000.0,
                ..config()
            },
            800.0,
        );
        assert_eq!(high.top_height(), 700.0);
        assert_eq!(high.bottom_panel_height(), 70.0);

        let low = SplitController::new(
            SplitConfig {
                initial_top_height: 10.0,
                ..config()
            },
            800.0,
        );
        assert_eq!(low.top_height(), 100.0);
    }

    #[test]
    fn test_snap_animation_stays_inside_bounds() {
        // Underdamped: the raw curve dips past the target near the end
        let spring = Spring {
            response: 0.55,
            damping_fraction: 0.5,
            duration: 1.0,
        };
        let mut c = SplitController::new(SplitConfig { spring, ..SplitConfig::default() }, 800.0);
        assert!(spring.value_at(299.0, 100.0, 0.3) < 100.0);

        drag_to(&mut c, -181.0);
        c.on_drag_end();
        while c.tick(0.01) {
            let h = c.top_panel_height();
            assert!(h >= 100.0 && h <= 700.0, "animated height {} left bounds", h);
        }
        assert_eq!(c.top_panel_height(), 100.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "below the minimum")]
    fn test_degenerate_container_asserts_in_debug() {
        SplitController::new(config(), 200.0);
    }

    proptest! {
        #[test]
        fn prop_drag_move_stays_in_bounds(translation in -1.0e6f32..1.0e6f32) {
            let mut c = controller();
            drag_to(&mut c, translation);
            prop_assert!(c.top_height() >= 100.0);
            prop_assert!(c.top_height() <= 700.0);
        }

        #[test]
        fn prop_drag_move_is_idempotent(translation in -2000.0f32..2000.0f32) {
            let mut c = controller();
            drag_to(&mut c, translation);
            let first = c.top_height();
            c.on_drag_move(translation);
            prop_assert_eq!(c.top_height(), first);
        }

        #[test]
        fn prop_snap_is_symmetric(h in 100u16..=700u16) {
            let h = f32::from(h);
            let top = snap_target(h, 800.0, 100.0, 200.0);
            let mirrored = snap_target(800.0 - h, 800.0, 100.0, 200.0);
            match top {
                Some(t) if t == 100.0 => prop_assert_eq!(mirrored, Some(700.0)),
                Some(t) => {
                    prop_assert_eq!(t, 700.0);
                    prop_assert_eq!(mirrored, Some(100.0));
                }
                None => prop_assert_eq!(mirrored, None),
            }
        }

        #[test]
        fn prop_release_lands_in_bounds(translation in -1.0e4f32..1.0e4f32) {
            let mut c = controller();
            drag_to(&mut c, translation);
            c.on_drag_end();
            prop_assert!(c.top_height() >= 100.0 && c.top_height() <= 700.0);
            prop_assert!(c.bottom_panel_height() >= 0.0);
        }
    }
}
