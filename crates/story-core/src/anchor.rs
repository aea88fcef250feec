//! Marker anchor binding: one scene bundle, its actions and its narration,
//! gated by the tracker's found/lost reports.

use crate::mixer::MixerHandle;
use crate::platform::{AnimationAction, Narration, Platform, SceneNode};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingState {
    #[default]
    Lost,
    Found,
}

pub type Actions<A> = SmallVec<[A; 4]>;

pub struct AnchorBinding<P: Platform> {
    pub index: u8,
    pub mixer: MixerHandle,
    state: TrackingState,
    node: P::Node,
    actions: Actions<P::Action>,
    audio: P::Audio,
}

impl<P: Platform> AnchorBinding<P> {
    /// Starts every action immediately. Animation time advances from bind
    /// onward; only visibility waits for the first sighting.
    pub fn new(
        index: u8,
        mixer: MixerHandle,
        node: P::Node,
        actions: impl IntoIterator<Item = P::Action>,
        audio: P::Audio,
    ) -> Self {
        let mut actions: Actions<P::Action> = actions.into_iter().collect();
        for a in actions.iter_mut() {
            a.play();
        }
        Self {
            index,
            mixer,
            state: TrackingState::Lost,
            node,
            actions,
            audio,
        }
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Not debounced: every call restarts the narration from zero.
    pub fn target_found(&mut self) {
        self.state = TrackingState::Found;
        self.node.set_visible(true);
        for a in self.actions.iter_mut() {
            a.set_paused(false);
            if !a.is_running() {
                a.play();
            }
        }
        self.audio.restart();
        log::debug!("[anchor {}] found", self.index);
    }

    pub fn target_lost(&mut self) {
        self.state = TrackingState::Lost;
        self.node.set_visible(false);
        for a in self.actions.iter_mut() {
            a.set_paused(true);
        }
        self.audio.pause();
        log::debug!("[anchor {}] lost", self.index);
    }

    /// Flip each action's pause flag independently.
    pub fn toggle_paused(&mut self) {
        for a in self.actions.iter_mut() {
            let p = a.paused();
            a.set_paused(!p);
        }
    }

    pub fn all_paused(&self) -> bool {
        self.actions.iter().all(|a| a.paused())
    }

    /// `visible == !paused == audio playing`. Holds after every found/lost
    /// transition; a tap toggle may break it until the next transition.
    pub fn is_consistent(&self) -> bool {
        let visible = self.node.visible();
        let paused_ok = self.actions.is_empty() || self.all_paused() != visible;
        paused_ok && self.audio.is_playing() == visible
    }

    pub fn node(&self) -> &P::Node {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut P::Node {
        &mut self.node
    }

    pub fn actions(&self) -> &[P::Action] {
        &self.actions
    }

    pub fn audio(&self) -> &P::Audio {
        &self.audio
    }
}
