use super::session::SwipeDirection;

/// Horizontal travel, in pixels, a release must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 100.0;
/// Releases with less horizontal travel than this count as a tap on the card.
pub const TAP_TOLERANCE_PX: f32 = 5.0;
const ROTATION_DEG_PER_PX: f32 = 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// What a finished drag means for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Swipe(SwipeDirection),
    /// Barely moved: open the job detail view.
    Tap,
    /// Moved, but not far enough: the card springs back.
    Snap,
}

/// Ephemeral drag state for the card on top of the deck.
///
/// Kept apart from [`super::SwipeSession`]; only a [`GestureOutcome::Swipe`] should be
/// forwarded to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    start: Offset,
    offset: Offset,
    dragging: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.start = Offset { x, y };
        self.offset = Offset::default();
    }

    /// Ignored unless a drag is in progress.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        self.offset = Offset {
            x: x - self.start.x,
            y: y - self.start.y,
        };
    }

    /// Ends the drag and resets the offset.
    pub fn release(&mut self) -> GestureOutcome {
        let dx = self.offset.x;
        self.dragging = false;
        self.offset = Offset::default();

        if dx.abs() > SWIPE_THRESHOLD_PX {
            let direction = if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            };
            GestureOutcome::Swipe(direction)
        } else if dx.abs() < TAP_TOLERANCE_PX {
            GestureOutcome::Tap
        } else {
            GestureOutcome::Snap
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.offset.x * ROTATION_DEG_PER_PX
    }

    /// Opacity of the "interested"/"pass" stamp; reaches 1.0 at the swipe threshold.
    pub fn indicator_opacity(&self) -> f32 {
        (self.offset.x.abs() / SWIPE_THRESHOLD_PX).min(1.0)
    }

    /// Which stamp is fading in, if any.
    pub fn indicator(&self) -> Option<SwipeDirection> {
        if self.offset.x > 0.0 {
            Some(SwipeDirection::Right)
        } else if self.offset.x < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(dx: f32, dy: f32) -> DragGesture {
        let mut gesture = DragGesture::new();
        gesture.begin(200.0, 300.0);
        gesture.move_to(200.0 + dx, 300.0 + dy);
        gesture
    }

    #[test]
    fn long_drag_right_swipes_right() {
        let mut gesture = drag(140.0, -20.0);
        assert_eq!(gesture.indicator(), Some(SwipeDirection::Right));
        assert_eq!(gesture.indicator_opacity(), 1.0);
        assert_eq!(
            gesture.release(),
            GestureOutcome::Swipe(SwipeDirection::Right)
        );
        assert_eq!(gesture.offset(), Offset::default());
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn long_drag_left_swipes_left() {
        let mut gesture = drag(-101.0, 0.0);
        assert_eq!(gesture.release(), GestureOutcome::Swipe(SwipeDirection::Left));
    }

    #[test]
    fn threshold_itself_does_not_swipe() {
        let mut gesture = drag(100.0, 0.0);
        assert_eq!(gesture.release(), GestureOutcome::Snap);
    }

    #[test]
    fn tiny_movement_is_a_tap() {
        let mut gesture = drag(3.0, 40.0);
        assert_eq!(gesture.release(), GestureOutcome::Tap);
    }

    #[test]
    fn moves_without_begin_are_ignored() {
        let mut gesture = DragGesture::new();
        gesture.move_to(500.0, 0.0);
        assert_eq!(gesture.offset(), Offset::default());
        assert_eq!(gesture.indicator(), None);
        assert_eq!(gesture.release(), GestureOutcome::Tap);
    }

    #[test]
    fn rotation_and_opacity_follow_offset() {
        let gesture = drag(-60.0, 10.0);
        assert_eq!(gesture.rotation_degrees(), -3.0);
        assert_eq!(gesture.indicator_opacity(), 0.6);
        assert_eq!(gesture.indicator(), Some(SwipeDirection::Left));
    }
}
