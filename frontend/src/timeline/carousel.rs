use crate::config;
use crate::timeline::stops::{RegimeConfig, Stop};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Touch,
}

impl DragInput {
    pub fn threshold(self) -> f64 {
        match self {
            DragInput::Pointer => config::POINTER_DRAG_THRESHOLD,
            DragInput::Touch => config::TOUCH_DRAG_THRESHOLD, // Touch screens get a shorter swipe
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    input: DragInput,
    origin_x: f64,
    start_index: usize,
}

/// Maps drags, swipes and direct clicks onto a position in the active stop
/// sequence. The index always stays inside `0..stops.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCarousel {
    config: &'static RegimeConfig,
    current: usize,
    drag: Option<Drag>,
}

impl TimelineCarousel {
    pub fn new(config: &'static RegimeConfig) -> Self {
        Self {
            config,
            current: 0,
            drag: None,
        }
    }

    pub fn config(&self) -> &'static RegimeConfig {
        self.config
    }

    pub fn stops(&self) -> &'static [Stop] {
        self.config.stops
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_stop(&self) -> Option<&'static Stop> {
        self.config.stops.get(self.current)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.config.stops.len()
    }

    /// Horizontal translation of the panorama, in percent of its width.
    pub fn pan_offset(&self) -> f64 {
        self.current_stop()
            .map(|stop| stop.position * self.config.scale_factor)
            .unwrap_or(0.0)
    }

    pub fn begin_drag(&mut self, input: DragInput, x: f64) {
        if input == DragInput::Pointer && !self.config.accepts_pointer {
            return;
        }
        self.drag = Some(Drag {
            input,
            origin_x: x,
            start_index: self.current,
        });
    }

    /// Feeds the latest pointer coordinate of the active drag. Returns true
    /// when the index moved.
    pub fn drag_to(&mut self, x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };

        let displacement = x - drag.origin_x;
        if displacement.abs() <= drag.input.threshold() {
            return false;
        }

        // Dragging right pulls earlier parts of the image into view
        let target = if displacement > 0.0 {
            drag.start_index.checked_sub(1)
        } else {
            Some(drag.start_index + 1)
        };

        match target {
            Some(index) if index < self.config.stops.len() && index != self.current => {
                self.current = index;
                self.drag = Some(Drag {
                    input: drag.input,
                    origin_x: x,
                    start_index: index,
                });
                true
            }
            _ => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn go_to(&mut self, index: usize) {
        let last = self.config.stops.len().saturating_sub(1);
        self.current = index.min(last);
        if let Some(drag) = self.drag.as_mut() {
            drag.start_index = self.current;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.go_to(self.current + 1);
        }
    }

    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.go_to(self.current - 1);
        }
    }

    /// Switches to another layout's stop sequence. The index is clamped into
    /// the new sequence and an in-flight drag is dropped.
    pub fn set_regime(&mut self, config: &'static RegimeConfig) {
        if std::ptr::eq(self.config, config) {
            return;
        }
        self.config = config;
        self.drag = None;
        self.go_to(self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::stops::{Regime, NARROW, WIDE};

    static SHORT_STOPS: [Stop; 3] = [
        Stop { label: "a", position: 0.0 },
        Stop { label: "b", position: 50.0 },
        Stop { label: "c", position: 100.0 },
    ];

    static SHORT: RegimeConfig = RegimeConfig {
        regime: Regime::Narrow,
        stops: &SHORT_STOPS,
        scale_factor: 0.5,
        image_width_percent: 200.0,
        accepts_pointer: true,
    };

    #[test]
    fn starts_at_first_stop_with_no_offset() {
        let carousel = TimelineCarousel::new(&WIDE);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.pan_offset(), 0.0);
        assert!(!carousel.can_go_prev());
        assert!(carousel.can_go_next());
    }

    #[test]
    fn drag_left_past_threshold_advances_one_stop() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.begin_drag(DragInput::Pointer, 500.0);
        assert!(carousel.drag_to(300.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn drag_right_past_threshold_retreats_one_stop() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(4);
        carousel.begin_drag(DragInput::Pointer, 100.0);
        assert!(carousel.drag_to(300.0));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn displacement_within_threshold_leaves_index_alone() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(2);
        carousel.begin_drag(DragInput::Pointer, 400.0);
        for x in [450.0, 320.0, 500.0, 300.0, 410.0] {
            assert!(!carousel.drag_to(x));
        }
        carousel.end_drag();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn exactly_threshold_is_not_enough() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.begin_drag(DragInput::Touch, 200.0);
        assert!(!carousel.drag_to(200.0 - config::TOUCH_DRAG_THRESHOLD));
        assert!(carousel.drag_to(200.0 - config::TOUCH_DRAG_THRESHOLD - 1.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn touch_uses_the_shorter_threshold() {
        let mut pointer = TimelineCarousel::new(&WIDE);
        let mut touch = TimelineCarousel::new(&WIDE);
        pointer.begin_drag(DragInput::Pointer, 0.0);
        touch.begin_drag(DragInput::Touch, 0.0);

        assert!(!pointer.drag_to(-90.0));
        assert!(touch.drag_to(-90.0));
    }

    #[test]
    fn one_move_of_two_thresholds_steps_once_in_either_direction() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(3);
        carousel.begin_drag(DragInput::Pointer, 0.0);
        carousel.drag_to(-200.0);
        assert_eq!(carousel.current_index(), 4);
        carousel.end_drag();

        carousel.begin_drag(DragInput::Pointer, 0.0);
        carousel.drag_to(200.0);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn continuous_drag_steps_once_per_threshold_crossing() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.begin_drag(DragInput::Pointer, 1000.0);
        let mut x = 1000.0;
        for _ in 0..3 {
            x -= 101.0;
            assert!(carousel.drag_to(x));
        }
        assert_eq!(carousel.current_index(), 3);
        // Origin moved with the last step, a small wiggle does nothing
        assert!(!carousel.drag_to(x + 50.0));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn drag_is_a_no_op_at_either_end() {
        let mut carousel = TimelineCarousel::new(&SHORT);
        carousel.begin_drag(DragInput::Pointer, 0.0);
        assert!(!carousel.drag_to(500.0));
        assert_eq!(carousel.current_index(), 0);
        carousel.end_drag();

        carousel.go_to(2);
        carousel.begin_drag(DragInput::Pointer, 0.0);
        assert!(!carousel.drag_to(-500.0));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn index_never_leaves_bounds_for_any_drag_sequence() {
        let mut carousel = TimelineCarousel::new(&SHORT);
        let moves = [
            -150.0, -320.0, -480.0, -700.0, -950.0, -40.0, 300.0, 610.0, 900.0, 1400.0, 1800.0,
            -2000.0, 2500.0,
        ];
        for (round, input) in [DragInput::Pointer, DragInput::Touch].into_iter().enumerate() {
            carousel.begin_drag(input, round as f64 * 10.0);
            for x in moves {
                carousel.drag_to(x);
                assert!(carousel.current_index() < SHORT_STOPS.len());
            }
            carousel.end_drag();
        }
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        assert!(!carousel.drag_to(-1000.0));
        carousel.begin_drag(DragInput::Pointer, 0.0);
        carousel.end_drag();
        assert!(!carousel.drag_to(-1000.0));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn go_to_sets_index_regardless_of_drag_state() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.begin_drag(DragInput::Pointer, 0.0);
        carousel.drag_to(-150.0);
        carousel.go_to(6);
        assert_eq!(carousel.current_index(), 6);

        // The drag continues from the clicked stop
        carousel.drag_to(-300.0);
        assert_eq!(carousel.current_index(), 7);
    }

    #[test]
    fn go_to_clamps_out_of_range_targets() {
        let mut carousel = TimelineCarousel::new(&SHORT);
        carousel.go_to(42);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn prev_and_next_stop_at_the_ends() {
        let mut carousel = TimelineCarousel::new(&SHORT);
        carousel.prev();
        assert_eq!(carousel.current_index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.can_go_next());
    }

    #[test]
    fn pan_offset_follows_current_stop() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(7);
        assert!((carousel.pan_offset() - 98.0 * 0.85).abs() < 1e-9);

        let mut narrow = TimelineCarousel::new(&NARROW);
        narrow.go_to(2);
        assert!((narrow.pan_offset() - 28.0 * 0.75).abs() < 1e-9);

        // Same stop after a resize, only the scale changes
        narrow.set_regime(&WIDE);
        assert_eq!(narrow.current_index(), 2);
        assert!((narrow.pan_offset() - 28.0 * 0.85).abs() < 1e-9);
    }

    #[test]
    fn narrow_layout_ignores_mouse_drags() {
        let mut carousel = TimelineCarousel::new(&NARROW);
        carousel.begin_drag(DragInput::Pointer, 0.0);
        assert!(!carousel.is_dragging());
        carousel.begin_drag(DragInput::Touch, 0.0);
        assert!(carousel.is_dragging());
    }

    #[test]
    fn regime_change_clamps_index_and_cancels_drag() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(7);
        carousel.begin_drag(DragInput::Touch, 0.0);

        carousel.set_regime(&SHORT);
        assert_eq!(carousel.current_index(), SHORT_STOPS.len() - 1);
        assert!(!carousel.is_dragging());
        assert!(carousel.current_stop().is_some());
    }

    #[test]
    fn regime_change_keeps_the_same_stop() {
        let mut carousel = TimelineCarousel::new(&WIDE);
        carousel.go_to(3);
        let before = carousel.current_stop().copied();

        carousel.set_regime(&NARROW);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.current_stop().copied(), before);

        carousel.set_regime(&WIDE);
        assert_eq!(carousel.current_stop().copied(), before);
    }
}
