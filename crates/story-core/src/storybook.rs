//! The scene lifecycle controller: anchors, mixers, shared input and the
//! session, owned in one place so every callback borrows the same state.

use crate::anchor::AnchorBinding;
use crate::constants::MAX_ANCHORS;
use crate::dispatch::{ndc_from_client, InputDispatcher, InputEvent};
use crate::error::{StoryError, StoryResult};
use crate::gesture::GestureEffect;
use crate::mixer::{AnimationMultiplexer, MixerHandle};
use crate::platform::{Picker, Platform, SceneNode};
use crate::session::SessionDriver;
use fnv::FnvHashMap;

pub struct Storybook<P: Platform> {
    bindings: Vec<AnchorBinding<P>>,
    by_anchor: FnvHashMap<u8, usize>,
    pub mixers: AnimationMultiplexer<P::Mixer>,
    pub input: InputDispatcher,
    pub session: SessionDriver,
}

impl<P: Platform> Default for Storybook<P> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            by_anchor: FnvHashMap::default(),
            mixers: AnimationMultiplexer::default(),
            input: InputDispatcher::default(),
            session: SessionDriver::default(),
        }
    }
}

impl<P: Platform> Storybook<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a loaded scene to an unused anchor. Its actions start playing
    /// immediately and it joins the shared input registry.
    pub fn bind(
        &mut self,
        anchor: u8,
        node: P::Node,
        mixer: P::Mixer,
        actions: impl IntoIterator<Item = P::Action>,
        audio: P::Audio,
    ) -> StoryResult<MixerHandle> {
        if anchor as usize >= MAX_ANCHORS {
            return Err(StoryError::AnchorOutOfRange {
                index: anchor,
                max: MAX_ANCHORS,
            });
        }
        if self.by_anchor.contains_key(&anchor) {
            return Err(StoryError::AnchorInUse(anchor));
        }
        let handle = self.mixers.register(mixer);
        let binding = AnchorBinding::new(anchor, handle, node, actions, audio);
        log::info!(
            "[storybook] bound anchor {} ({} actions)",
            anchor,
            binding.actions().len()
        );
        self.by_anchor.insert(anchor, self.bindings.len());
        self.bindings.push(binding);
        self.input.register(anchor);
        Ok(handle)
    }

    pub fn binding(&self, anchor: u8) -> Option<&AnchorBinding<P>> {
        self.by_anchor.get(&anchor).map(|&i| &self.bindings[i])
    }

    fn binding_mut(&mut self, anchor: u8) -> StoryResult<&mut AnchorBinding<P>> {
        let i = *self
            .by_anchor
            .get(&anchor)
            .ok_or(StoryError::UnboundAnchor(anchor))?;
        Ok(&mut self.bindings[i])
    }

    pub fn bindings(&self) -> &[AnchorBinding<P>] {
        &self.bindings
    }

    pub fn target_found(&mut self, anchor: u8) -> StoryResult<()> {
        self.binding_mut(anchor)?.target_found();
        Ok(())
    }

    pub fn target_lost(&mut self, anchor: u8) -> StoryResult<()> {
        self.binding_mut(anchor)?.target_lost();
        Ok(())
    }

    /// Route one input event to every bound scene. Returns how many scenes
    /// it changed.
    pub fn handle_input(&mut self, event: &InputEvent, picker: &impl Picker<P::Node>) -> usize {
        match event {
            InputEvent::Gesture(g) => {
                let effects = self.input.dispatch(g);
                for (anchor, fx) in &effects {
                    let Some(&i) = self.by_anchor.get(anchor) else {
                        continue;
                    };
                    let node = self.bindings[i].node_mut();
                    match *fx {
                        GestureEffect::Rotate { yaw, pitch } => node.rotate_by(yaw, pitch),
                        GestureEffect::Scale(s) => node.set_uniform_scale(s),
                    }
                }
                effects.len()
            }
            InputEvent::Tap { client, viewport } => {
                let Some(ndc) = ndc_from_client(*client, *viewport) else {
                    return 0;
                };
                let mut toggled = 0;
                for b in self.bindings.iter_mut() {
                    if picker.hits(b.node(), ndc) {
                        b.toggle_paused();
                        toggled += 1;
                        log::debug!("[tap] anchor {} paused={}", b.index, b.all_paused());
                    }
                }
                toggled
            }
        }
    }

    /// Per-frame work once the session runs: advance every mixer.
    pub fn frame(&mut self, dt_sec: f32) {
        if self.session.is_running() {
            self.mixers.advance(dt_sec);
        }
    }
}
