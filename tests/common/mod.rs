// Fake collaborators: plain structs that record what the lifecycle
// controller asks of them.
#![allow(dead_code)]

use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use story_core::*;

#[derive(Debug, Default)]
pub struct FakeNode {
    pub id: u8,
    pub visible: bool,
    pub yaw: f32,
    pub pitch: f32,
    pub scale: f32,
}

impl SceneNode for FakeNode {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    fn visible(&self) -> bool {
        self.visible
    }
    fn rotate_by(&mut self, yaw: f32, pitch: f32) {
        self.yaw += yaw;
        self.pitch += pitch;
    }
    fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[derive(Debug, Default)]
pub struct FakeAction {
    pub paused: bool,
    pub running: bool,
    pub plays: u32,
    /// Behaves like a clip that finished while paused: it needs `play()`
    /// again to run.
    pub stops_on_pause: bool,
}

impl AnimationAction for FakeAction {
    fn paused(&self) -> bool {
        self.paused
    }
    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if paused && self.stops_on_pause {
            self.running = false;
        }
    }
    fn is_running(&self) -> bool {
        self.running && !self.paused
    }
    fn play(&mut self) {
        self.running = true;
        self.plays += 1;
    }
}

/// `position` is shared so a test can stand in for playback time passing.
#[derive(Debug, Default)]
pub struct FakeAudio {
    pub playing: bool,
    pub restarts: u32,
    pub position: Rc<Cell<f64>>,
}

impl Narration for FakeAudio {
    fn restart(&mut self) {
        self.position.set(0.0);
        self.playing = true;
        self.restarts += 1;
    }
    fn pause(&mut self) {
        self.playing = false;
    }
    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[derive(Debug, Default)]
pub struct FakeMixer {
    pub elapsed: f32,
    pub updates: u32,
}

impl AnimationMixer for FakeMixer {
    fn update(&mut self, dt_sec: f32) {
        self.elapsed += dt_sec;
        self.updates += 1;
    }
}

/// Hits the nodes whose ids are listed; remembers the last NDC it saw.
#[derive(Default)]
pub struct FakePicker {
    pub hit: Vec<u8>,
    pub last_ndc: RefCell<Option<Vec2>>,
}

impl FakePicker {
    pub fn hitting(ids: &[u8]) -> Self {
        Self {
            hit: ids.to_vec(),
            ..Default::default()
        }
    }
}

impl Picker<FakeNode> for FakePicker {
    fn hits(&self, node: &FakeNode, ndc: Vec2) -> bool {
        *self.last_ndc.borrow_mut() = Some(ndc);
        self.hit.contains(&node.id)
    }
}

pub struct TestPlatform;

impl Platform for TestPlatform {
    type Node = FakeNode;
    type Action = FakeAction;
    type Audio = FakeAudio;
    type Mixer = FakeMixer;
}

pub type TestBook = Storybook<TestPlatform>;

pub fn node(id: u8) -> FakeNode {
    FakeNode {
        id,
        visible: true,
        scale: 0.15,
        ..Default::default()
    }
}

pub fn actions(n: usize) -> Vec<FakeAction> {
    (0..n).map(|_| FakeAction::default()).collect()
}

/// Ten anchors, each with two clips, audio positions returned for poking.
pub fn full_book() -> (TestBook, Vec<Rc<Cell<f64>>>) {
    let mut book = TestBook::new();
    let mut positions = Vec::new();
    for i in 0..MAX_ANCHORS as u8 {
        let audio = FakeAudio::default();
        positions.push(audio.position.clone());
        book.bind(i, node(i), FakeMixer::default(), actions(2), audio)
            .expect("bind");
    }
    (book, positions)
}

pub fn touches(points: &[(f32, f32)]) -> Touches {
    points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}
