//! Single input dispatcher shared by every bound scene.
//!
//! One listener set feeds this registry; each event is fanned out once to
//! every registered entry. All registered scenes respond to every gesture
//! whether or not their marker is in view.

use crate::constants::MAX_ANCHORS;
use crate::gesture::{GestureEffect, GestureInput, GestureState};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Gesture(GestureInput),
    /// Pointer press at `client` inside a `viewport`-sized window (CSS px).
    Tap { client: Vec2, viewport: Vec2 },
}

#[derive(Clone, Debug)]
pub struct DispatchEntry {
    pub anchor: u8,
    pub gesture: GestureState,
}

pub type Effects = SmallVec<[(u8, GestureEffect); MAX_ANCHORS]>;

#[derive(Default)]
pub struct InputDispatcher {
    entries: Vec<DispatchEntry>,
}

impl InputDispatcher {
    pub fn register(&mut self, anchor: u8) {
        self.entries.push(DispatchEntry {
            anchor,
            gesture: GestureState::default(),
        });
    }

    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    pub fn gesture(&self, anchor: u8) -> Option<&GestureState> {
        self.entries
            .iter()
            .find(|e| e.anchor == anchor)
            .map(|e| &e.gesture)
    }

    /// Feed one gesture event to every entry; collect what each wants
    /// applied to its scene.
    pub fn dispatch(&mut self, input: &GestureInput) -> Effects {
        self.entries
            .iter_mut()
            .filter_map(|e| e.gesture.apply(input).map(|fx| (e.anchor, fx)))
            .collect()
    }
}

/// Map window client coordinates to normalized device coordinates
/// (x right, y up, both in [-1, 1]).
#[inline]
pub fn ndc_from_client(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client.x / viewport.x) * 2.0 - 1.0,
        -(client.y / viewport.y) * 2.0 + 1.0,
    ))
}
