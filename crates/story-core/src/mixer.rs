use crate::platform::AnimationMixer;

/// Index of a mixer inside an [`AnimationMultiplexer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MixerHandle(pub usize);

/// Every registered mixer advances every frame, whether or not its marker
/// is in view.
pub struct AnimationMultiplexer<M> {
    mixers: Vec<M>,
}

impl<M> Default for AnimationMultiplexer<M> {
    fn default() -> Self {
        Self { mixers: Vec::new() }
    }
}

impl<M: AnimationMixer> AnimationMultiplexer<M> {
    pub fn register(&mut self, mixer: M) -> MixerHandle {
        self.mixers.push(mixer);
        MixerHandle(self.mixers.len() - 1)
    }

    pub fn advance(&mut self, dt_sec: f32) {
        for m in self.mixers.iter_mut() {
            m.update(dt_sec);
        }
    }

    pub fn get(&self, handle: MixerHandle) -> Option<&M> {
        self.mixers.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.mixers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mixers.is_empty()
    }
}
