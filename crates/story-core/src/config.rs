//! Typed description of a storybook: which marker file to track, and which
//! model, narration and transform belong to each anchor.

use crate::constants::*;
use crate::error::{StoryError, StoryResult};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneSpec {
    pub anchor: u8,
    pub model_path: String,
    pub audio_path: String,
    pub scale: Vec3,
    pub position: Vec3,
}

impl SceneSpec {
    /// Scene `page` (1-based) of an audio set, bound to anchor `page - 1`,
    /// with the default load-time transform.
    pub fn page(page: u8, audio_set: &str) -> Self {
        Self {
            anchor: page.saturating_sub(1),
            model_path: model_path(page),
            audio_path: audio_path(audio_set, page),
            scale: Vec3::splat(DEFAULT_MODEL_SCALE),
            position: Vec3::from_array(DEFAULT_MODEL_POSITION),
        }
    }

    pub fn with_scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryConfig {
    pub container_selector: String,
    pub target_src: String,
    pub decoder_path: String,
    pub audio_set: String,
    pub scenes: Vec<SceneSpec>,
}

#[inline]
pub fn model_path(page: u8) -> String {
    format!("{MODELS_DIR}/scene{page}.glb")
}

#[inline]
pub fn audio_path(audio_set: &str, page: u8) -> String {
    format!("{AUDIO_DIR}/{audio_set}/page{page}.mp3")
}

#[inline]
pub fn target_path(name: &str) -> String {
    format!("{TARGETS_DIR}/{name}.mind")
}

impl StoryConfig {
    /// The shipped book: ten pages tracked from one target file, narrated in
    /// Dusun.
    pub fn dusun() -> Self {
        let set = "dusun";
        let scenes = vec![
            SceneSpec::page(1, set).with_scale(0.04),
            SceneSpec::page(2, set).with_scale(0.08),
            SceneSpec::page(3, set).with_scale(0.08),
            SceneSpec::page(4, set)
                .with_scale(0.04)
                .with_position(-0.1, -0.4, -1.0),
            SceneSpec::page(5, set).with_scale(0.04),
            SceneSpec::page(6, set)
                .with_scale(0.06)
                .with_position(0.0, -1.0, 0.0),
            SceneSpec::page(7, set)
                .with_scale(0.02)
                .with_position(0.0, -0.6, 0.0),
            SceneSpec::page(8, set)
                .with_scale(0.02)
                .with_position(0.0, -0.5, 0.0),
            SceneSpec::page(9, set)
                .with_scale(0.02)
                .with_position(0.0, -0.3, 0.0),
            SceneSpec::page(10, set).with_scale(0.06),
        ];
        Self {
            container_selector: "#ar-container".to_string(),
            target_src: target_path("Lomundou"),
            decoder_path: DRACO_DECODER_PATH.to_string(),
            audio_set: set.to_string(),
            scenes,
        }
    }

    pub fn validate(&self) -> StoryResult<()> {
        if self.scenes.is_empty() {
            return Err(StoryError::InvalidConfig("no scenes".to_string()));
        }
        let mut seen = [false; MAX_ANCHORS];
        for s in &self.scenes {
            let i = s.anchor as usize;
            if i >= MAX_ANCHORS {
                return Err(StoryError::AnchorOutOfRange {
                    index: s.anchor,
                    max: MAX_ANCHORS,
                });
            }
            if seen[i] {
                return Err(StoryError::InvalidConfig(format!(
                    "anchor {} used by more than one scene",
                    s.anchor
                )));
            }
            seen[i] = true;
        }
        Ok(())
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::dusun()
    }
}
