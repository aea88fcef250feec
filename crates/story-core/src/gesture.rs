//! Drag-to-rotate and pinch-to-zoom state for one scene bundle.

use crate::constants::{
    INITIAL_GESTURE_SCALE, MAX_SCALE, MIN_SCALE, ROTATE_RADIANS_PER_PX, ZOOM_PER_PX,
};
use glam::Vec2;
use smallvec::SmallVec;

/// Active touch points in client (CSS pixel) coordinates.
pub type Touches = SmallVec<[Vec2; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub enum GestureInput {
    MouseDown(Vec2),
    MouseMove(Vec2),
    MouseUp,
    TouchStart(Touches),
    TouchMove(Touches),
    TouchEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    Rotate { yaw: f32, pitch: f32 },
    Scale(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub scale: f32,
    pub dragging: bool,
    pub last: Vec2,
    pub pinch_distance: Option<f32>,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            scale: INITIAL_GESTURE_SCALE,
            dragging: false,
            last: Vec2::ZERO,
            pinch_distance: None,
        }
    }
}

#[inline]
fn touch_distance(t: &[Vec2]) -> f32 {
    t[0].distance(t[1])
}

impl GestureState {
    pub fn apply(&mut self, input: &GestureInput) -> Option<GestureEffect> {
        match input {
            GestureInput::MouseDown(p) => {
                self.dragging = true;
                self.last = *p;
                None
            }
            GestureInput::TouchStart(t) => {
                match t.len() {
                    1 => {
                        self.dragging = true;
                        self.last = t[0];
                    }
                    2 => {
                        self.dragging = false;
                        self.pinch_distance = Some(touch_distance(t));
                    }
                    _ => {}
                }
                None
            }
            GestureInput::MouseMove(p) if self.dragging => Some(self.drag_to(*p)),
            GestureInput::MouseMove(_) => None,
            GestureInput::TouchMove(t) => match t.len() {
                1 if self.dragging => Some(self.drag_to(t[0])),
                2 => self.pinch_to(touch_distance(t)),
                _ => None,
            },
            GestureInput::MouseUp | GestureInput::TouchEnd => {
                self.dragging = false;
                self.pinch_distance = None;
                None
            }
        }
    }

    fn drag_to(&mut self, p: Vec2) -> GestureEffect {
        let d = p - self.last;
        self.last = p;
        GestureEffect::Rotate {
            yaw: d.x * ROTATE_RADIANS_PER_PX,
            pitch: d.y * ROTATE_RADIANS_PER_PX,
        }
    }

    // Incremental: the reference distance follows the fingers. A zero
    // reference (both fingers on one point) never zooms.
    fn pinch_to(&mut self, current: f32) -> Option<GestureEffect> {
        let initial = self.pinch_distance.filter(|d| *d > 0.0)?;
        let zoom = (current - initial) * ZOOM_PER_PX;
        self.scale = (self.scale + zoom).clamp(MIN_SCALE, MAX_SCALE);
        self.pinch_distance = Some(current);
        Some(GestureEffect::Scale(self.scale))
    }
}
