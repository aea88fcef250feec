//! three.js-backed scene bundles: loading, anchoring and the collaborator
//! impls the lifecycle controller drives.

use crate::audio::HtmlNarration;
use crate::bindings::{
    AnimationAction, AnimationMixer, Camera, DRACOLoader, GLTFLoader, Gltf, HemisphereLight,
    MindARThree, Object3D, Raycaster, Scene, Vector2,
};
use glam::Vec2;
use js_sys::{Array, Promise};
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{
    Picker, Platform, SceneNode, SceneSpec, Storybook, HEMISPHERE_GROUND_COLOR,
    HEMISPHERE_INTENSITY, HEMISPHERE_SKY_COLOR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub struct WebPlatform;

impl Platform for WebPlatform {
    type Node = ThreeNode;
    type Action = ThreeAction;
    type Audio = HtmlNarration;
    type Mixer = ThreeMixer;
}

pub type Book = Storybook<WebPlatform>;

pub struct ThreeNode(pub Object3D);

impl SceneNode for ThreeNode {
    fn set_visible(&mut self, visible: bool) {
        self.0.set_visible(visible);
    }
    fn visible(&self) -> bool {
        self.0.visible()
    }
    fn rotate_by(&mut self, yaw: f32, pitch: f32) {
        let r = self.0.rotation();
        r.set_y(r.y() + yaw as f64);
        r.set_x(r.x() + pitch as f64);
    }
    fn set_uniform_scale(&mut self, scale: f32) {
        self.0.scale().set(scale, scale, scale);
    }
}

pub struct ThreeAction(pub AnimationAction);

impl story_core::AnimationAction for ThreeAction {
    fn paused(&self) -> bool {
        self.0.paused()
    }
    fn set_paused(&mut self, paused: bool) {
        self.0.set_paused(paused);
    }
    fn is_running(&self) -> bool {
        self.0.is_running()
    }
    fn play(&mut self) {
        self.0.play();
    }
}

pub struct ThreeMixer(pub AnimationMixer);

impl story_core::AnimationMixer for ThreeMixer {
    fn update(&mut self, dt_sec: f32) {
        self.0.update(dt_sec);
    }
}

pub struct RayPicker {
    raycaster: Raycaster,
    camera: Camera,
}

impl RayPicker {
    pub fn new(camera: Camera) -> Self {
        Self {
            raycaster: Raycaster::new(),
            camera,
        }
    }
}

impl Picker<ThreeNode> for RayPicker {
    fn hits(&self, node: &ThreeNode, ndc: Vec2) -> bool {
        let pointer = Vector2::new(ndc.x, ndc.y);
        self.raycaster.set_from_camera(&pointer, &self.camera);
        self.raycaster
            .intersect_objects(&node.0.children(), true)
            .length()
            > 0
    }
}

pub fn add_lighting(scene: &Scene) {
    let light = HemisphereLight::new(
        HEMISPHERE_SKY_COLOR,
        HEMISPHERE_GROUND_COLOR,
        HEMISPHERE_INTENSITY,
    );
    scene.add(&light);
}

pub fn gltf_loader(decoder_path: &str) -> GLTFLoader {
    let loader = GLTFLoader::new();
    let draco = DRACOLoader::new();
    draco.set_decoder_path(decoder_path);
    loader.set_draco_loader(&draco);
    loader
}

pub struct LoadedBundle {
    pub root: Object3D,
    pub clips: Array,
}

/// Fan out every load at once and join before returning. Results keep the
/// order of `specs`; the first rejection fails the whole batch.
pub async fn load_all(
    loader: &GLTFLoader,
    specs: &[SceneSpec],
) -> anyhow::Result<Vec<LoadedBundle>> {
    let pending: Array = specs
        .iter()
        .map(|s| loader.load_async(&s.model_path))
        .collect();
    log::info!("[assets] loading {} scenes", specs.len());
    let loaded = JsFuture::from(Promise::all(&pending))
        .await
        .map_err(|e| anyhow::anyhow!("scene load failed: {:?}", e))?;
    let loaded: Array = loaded.unchecked_into();
    let bundles = specs
        .iter()
        .zip(loaded.iter())
        .map(|(spec, value)| {
            let gltf: Gltf = value.unchecked_into();
            let root = gltf.scene();
            root.scale().set(spec.scale.x, spec.scale.y, spec.scale.z);
            root.position()
                .set(spec.position.x, spec.position.y, spec.position.z);
            log::info!(
                "[assets] {} ready ({} clips)",
                spec.model_path,
                gltf.animations().length()
            );
            LoadedBundle {
                root,
                clips: gltf.animations(),
            }
        })
        .collect();
    Ok(bundles)
}

/// Attach a loaded bundle to its MindAR anchor and hand it to the
/// lifecycle controller. Tracker callbacks go straight to the controller's
/// transitions.
pub fn bind_scene(
    book: &Rc<RefCell<Book>>,
    mindar: &MindARThree,
    spec: &SceneSpec,
    bundle: LoadedBundle,
) -> anyhow::Result<()> {
    let anchor = mindar.add_anchor(spec.anchor as u32);
    anchor.group().add(&bundle.root);

    let mixer = AnimationMixer::new(&bundle.root);
    let actions: Vec<ThreeAction> = bundle
        .clips
        .iter()
        .map(|clip| ThreeAction(mixer.clip_action(&clip)))
        .collect();
    let audio = HtmlNarration::new(&spec.audio_path)?;

    book.borrow_mut().bind(
        spec.anchor,
        ThreeNode(bundle.root),
        ThreeMixer(mixer),
        actions,
        audio,
    )?;

    let index = spec.anchor;
    let book_found = book.clone();
    let on_found = Closure::wrap(Box::new(move || {
        if let Err(e) = book_found.borrow_mut().target_found(index) {
            log::warn!("[anchor {}] {}", index, e);
        }
    }) as Box<dyn FnMut()>);
    anchor.set_on_target_found(on_found.as_ref().unchecked_ref());
    on_found.forget();

    let book_lost = book.clone();
    let on_lost = Closure::wrap(Box::new(move || {
        if let Err(e) = book_lost.borrow_mut().target_lost(index) {
            log::warn!("[anchor {}] {}", index, e);
        }
    }) as Box<dyn FnMut()>);
    anchor.set_on_target_lost(on_lost.as_ref().unchecked_ref());
    on_lost.forget();

    Ok(())
}
