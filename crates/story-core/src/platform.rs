//! Collaborator seams.
//!
//! The tracker, renderer and audio element are opaque to this crate. The web
//! front end implements these traits over MindAR/three.js handles; tests
//! implement them over plain structs.

use glam::Vec2;

/// Root node of a loaded scene bundle.
pub trait SceneNode {
    fn set_visible(&mut self, visible: bool);
    fn visible(&self) -> bool;
    /// Add to the node's Euler rotation (radians): `yaw` about Y, `pitch`
    /// about X.
    fn rotate_by(&mut self, yaw: f32, pitch: f32);
    fn set_uniform_scale(&mut self, scale: f32);
}

/// Playable instance of one animation clip.
pub trait AnimationAction {
    fn paused(&self) -> bool;
    fn set_paused(&mut self, paused: bool);
    fn is_running(&self) -> bool;
    fn play(&mut self);
}

/// Looping narration track bound to one anchor.
pub trait Narration {
    /// Seek to zero and start playback.
    fn restart(&mut self);
    /// Pause, keeping the current position.
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
}

/// Per-scene animation driver.
pub trait AnimationMixer {
    fn update(&mut self, dt_sec: f32);
}

/// Ray test from the camera through a point in normalized device
/// coordinates against a node's hierarchy (recursive).
pub trait Picker<N> {
    fn hits(&self, node: &N, ndc: Vec2) -> bool;
}

/// Bundles the concrete handle types one platform provides.
pub trait Platform {
    type Node: SceneNode;
    type Action: AnimationAction;
    type Audio: Narration;
    type Mixer: AnimationMixer;
}
