//! Audio playback using HTML audio elements
//!
//! Browsers refuse to play audio before a user gesture, so the pool is
//! unlocked (played and immediately paused) on the first key press. Failures
//! are logged and otherwise ignored; they never reach the simulation.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Crash sound pool for the game
pub struct AudioManager {
    crash_sounds: Vec<HtmlAudioElement>,
    unlocked: bool,
}

impl AudioManager {
    pub fn new(urls: &[String]) -> Self {
        let crash_sounds = urls
            .iter()
            .filter_map(|url| match HtmlAudioElement::new_with_src(url) {
                Ok(el) => Some(el),
                Err(e) => {
                    log::warn!("Failed to create audio element for {url}: {e:?}");
                    None
                }
            })
            .collect::<Vec<_>>();
        if crash_sounds.is_empty() {
            log::warn!("No crash sounds available - audio disabled");
        }
        Self {
            crash_sounds,
            unlocked: false,
        }
    }

    /// Prime every element inside a user gesture. Only the first call does work.
    pub fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        self.unlocked = true;
        for sound in &self.crash_sounds {
            let Ok(promise) = sound.play() else { continue };
            let sound = sound.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    let _ = sound.pause();
                }
            });
        }
    }

    /// Play one crash sound picked at random
    pub fn play_crash(&self) {
        if self.crash_sounds.is_empty() {
            return;
        }
        let pick = (js_sys::Math::random() * self.crash_sounds.len() as f64) as usize;
        let sound = &self.crash_sounds[pick.min(self.crash_sounds.len() - 1)];
        sound.set_current_time(0.0);
        match sound.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Crash sound blocked: {e:?}");
                }
            }),
            Err(e) => log::warn!("Crash sound failed: {e:?}"),
        }
    }
}
