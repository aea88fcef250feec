#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use story_core::StoryConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod bindings;
mod dom;
mod events;
mod frame;
mod overlay;
mod scene;
mod session;
mod ui;

pub use ui::switch_synopsis_lang;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("storybook-web starting");

    if let Some(document) = dom::window_document() {
        ui::init_page(&document);
    }

    spawn_local(async move {
        if let Err(e) = init(StoryConfig::dusun()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Build the session, load and bind every scene, then arm the start button.
/// Any failure here leaves the button disabled.
async fn init(config: StoryConfig) -> anyhow::Result<()> {
    config.validate()?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .query_selector(&config.container_selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", config.container_selector))?;

    let mindar = bindings::create_session(&container, &config.target_src)?;
    let renderer = mindar.renderer();
    let scene3d = mindar.scene();
    let camera = mindar.camera();
    scene::add_lighting(&scene3d);

    let loader = scene::gltf_loader(&config.decoder_path);
    let bundles = scene::load_all(&loader, &config.scenes).await?;

    let book = Rc::new(RefCell::new(scene::Book::new()));
    for (spec, bundle) in config.scenes.iter().zip(bundles) {
        scene::bind_scene(&book, &mindar, spec, bundle)?;
    }
    log::info!(
        "[init] {} scenes bound from {} ({} narration)",
        book.borrow().bindings().len(),
        config.target_src,
        config.audio_set
    );

    events::wire_input_handlers(events::InputWiring {
        book: book.clone(),
        picker: Rc::new(scene::RayPicker::new(camera.clone())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        book.clone(),
        renderer,
        scene3d,
        camera,
    )));
    session::wire_start_button(&document, mindar, book, frame_ctx)
}
