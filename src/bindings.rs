//! Bindings to the page-provided tracking and rendering libraries.
//!
//! MindAR exposes itself (and the three.js build it was compiled against) as
//! `window.MINDAR.IMAGE`. The GLTF and Draco loaders are ES modules; the host
//! page re-exports them as `globalThis.GLTFLoader` / `globalThis.DRACOLoader`.
#![allow(non_camel_case_types)]

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    // ---------------- MindAR ----------------
    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE"])]
    pub type MindARThree;

    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE"], catch)]
    fn new(options: &Object) -> Result<MindARThree, JsValue>;

    #[wasm_bindgen(method, getter)]
    pub fn renderer(this: &MindARThree) -> WebGLRenderer;
    #[wasm_bindgen(method, getter)]
    pub fn scene(this: &MindARThree) -> Scene;
    #[wasm_bindgen(method, getter)]
    pub fn camera(this: &MindARThree) -> Camera;
    #[wasm_bindgen(method, js_name = addAnchor)]
    pub fn add_anchor(this: &MindARThree, index: u32) -> Anchor;
    /// Opens the camera; resolves once tracking runs.
    #[wasm_bindgen(method)]
    pub fn start(this: &MindARThree) -> Promise;

    pub type Anchor;

    #[wasm_bindgen(method, getter)]
    pub fn group(this: &Anchor) -> Object3D;
    #[wasm_bindgen(method, setter = onTargetFound)]
    pub fn set_on_target_found(this: &Anchor, f: &Function);
    #[wasm_bindgen(method, setter = onTargetLost)]
    pub fn set_on_target_lost(this: &Anchor, f: &Function);

    // ---------------- three.js ----------------
    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    #[derive(Clone)]
    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn visible(this: &Object3D) -> bool;
    #[wasm_bindgen(method, setter)]
    pub fn set_visible(this: &Object3D, v: bool);
    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;
    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn children(this: &Object3D) -> Array;
    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);

    #[wasm_bindgen(extends = Object3D, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    #[derive(Clone)]
    pub type Scene;

    #[wasm_bindgen(extends = Object3D, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    #[derive(Clone)]
    pub type Camera;

    #[wasm_bindgen(extends = Object3D, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type HemisphereLight;

    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub fn new(sky: u32, ground: u32, intensity: f32) -> HemisphereLight;

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    #[derive(Clone)]
    pub type WebGLRenderer;

    #[wasm_bindgen(method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &Camera);

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type Vector3;

    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f32, y: f32, z: f32);

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type Vector2;

    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub fn new(x: f32, y: f32) -> Vector2;

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type Euler;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Euler) -> f64;
    #[wasm_bindgen(method, setter)]
    pub fn set_x(this: &Euler, v: f64);
    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Euler) -> f64;
    #[wasm_bindgen(method, setter)]
    pub fn set_y(this: &Euler, v: f64);

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type AnimationMixer;

    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub fn new(root: &Object3D) -> AnimationMixer;
    #[wasm_bindgen(method, js_name = clipAction)]
    pub fn clip_action(this: &AnimationMixer, clip: &JsValue) -> AnimationAction;
    #[wasm_bindgen(method)]
    pub fn update(this: &AnimationMixer, dt_sec: f32);

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type AnimationAction;

    #[wasm_bindgen(method, getter)]
    pub fn paused(this: &AnimationAction) -> bool;
    #[wasm_bindgen(method, setter)]
    pub fn set_paused(this: &AnimationAction, v: bool);
    #[wasm_bindgen(method, js_name = isRunning)]
    pub fn is_running(this: &AnimationAction) -> bool;
    #[wasm_bindgen(method)]
    pub fn play(this: &AnimationAction);

    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub type Raycaster;

    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE", "THREE"])]
    pub fn new() -> Raycaster;
    #[wasm_bindgen(method, js_name = setFromCamera)]
    pub fn set_from_camera(this: &Raycaster, coords: &Vector2, camera: &Camera);
    #[wasm_bindgen(method, js_name = intersectObjects)]
    pub fn intersect_objects(this: &Raycaster, objects: &Array, recursive: bool) -> Array;

    // ---------------- loaders ----------------
    #[wasm_bindgen(js_namespace = globalThis)]
    pub type GLTFLoader;

    #[wasm_bindgen(constructor, js_namespace = globalThis)]
    pub fn new() -> GLTFLoader;
    #[wasm_bindgen(method, js_name = setDRACOLoader)]
    pub fn set_draco_loader(this: &GLTFLoader, draco: &DRACOLoader);
    #[wasm_bindgen(method, js_name = loadAsync)]
    pub fn load_async(this: &GLTFLoader, path: &str) -> Promise;

    #[wasm_bindgen(js_namespace = globalThis)]
    pub type DRACOLoader;

    #[wasm_bindgen(constructor, js_namespace = globalThis)]
    pub fn new() -> DRACOLoader;
    #[wasm_bindgen(method, js_name = setDecoderPath)]
    pub fn set_decoder_path(this: &DRACOLoader, path: &str);

    /// Resolved value of `GLTFLoader.loadAsync`.
    pub type Gltf;

    #[wasm_bindgen(method, getter)]
    pub fn scene(this: &Gltf) -> Object3D;
    #[wasm_bindgen(method, getter)]
    pub fn animations(this: &Gltf) -> Array;
}

/// Build a MindAR session rendering into `container` and tracking the
/// targets compiled into `target_src`.
pub fn create_session(container: &web::Element, target_src: &str) -> anyhow::Result<MindARThree> {
    let opts = Object::new();
    Reflect::set(&opts, &"container".into(), container).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Reflect::set(&opts, &"imageTargetSrc".into(), &target_src.into())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    MindARThree::new(&opts).map_err(|e| anyhow::anyhow!("MindAR init failed: {:?}", e))
}
