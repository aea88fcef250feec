use story_core::Narration;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping page narration backed by an `<audio>` element.
pub struct HtmlNarration {
    el: web::HtmlAudioElement,
    src: String,
}

impl HtmlNarration {
    pub fn new(src: &str) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("audio element for {}: {:?}", src, e))?;
        el.set_loop(true);
        Ok(Self {
            el,
            src: src.to_string(),
        })
    }
}

impl Narration for HtmlNarration {
    // Autoplay policy or a missing file rejects `play()`; that only costs
    // the narration, so it is logged and dropped.
    fn restart(&mut self) {
        self.el.set_current_time(0.0);
        match self.el.play() {
            Ok(promise) => {
                let src = self.src.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] {} play rejected: {:?}", src, e);
                    }
                });
            }
            Err(e) => log::warn!("[audio] {} play failed: {:?}", self.src, e),
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.el.pause() {
            log::warn!("[audio] {} pause failed: {:?}", self.src, e);
        }
    }

    fn is_playing(&self) -> bool {
        !self.el.paused()
    }
}
