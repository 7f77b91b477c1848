//! Pit Runner entry point
//!
//! Browser builds wire the DOM, canvas, audio and timers to a `Game`.
//! Native builds run a headless autopilot demo and print the final snapshot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use pit_runner::audio::AudioManager;
    use pit_runner::renderer::CanvasRenderer;
    use pit_runner::sim::autopilot;
    use pit_runner::{AssetManifest, Game, GameEvent, InputEvent, Tuning};

    /// Frontend state around one `Game`
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        audio: AudioManager,
        /// Demo mode - autopilot presses jump
        autopilot: bool,
        /// Live one-second interval and its callback
        timer: Option<(i32, Closure<dyn FnMut()>)>,
    }

    impl App {
        fn render(&self) {
            self.renderer.draw(&self.game.snapshot());
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let snap = self.game.snapshot();
            set_text("score", &snap.score_text());
            set_text("timer", &snap.timer_text());
        }

        fn on_game_over(&mut self, event: GameEvent) {
            log::info!("{:?}", event);
            self.audio.play_crash();
            self.stop_timer();
            set_visible("restartBtn", true);
        }

        fn stop_timer(&mut self) {
            if let Some((handle, _callback)) = self.timer.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }
    }

    fn element(id: &str) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(id: &str, visible: bool) {
        if let Some(el) = element(id) {
            let display = if visible { "inline-block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pit Runner starting...");

        let manifest = AssetManifest::default();
        let tuning = Tuning {
            obstacle_variants: manifest.obstacle_variants(),
            ..Default::default()
        };
        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(tuning, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {e}");
                return;
            }
        };

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(game.tuning().world_width as u32);
        canvas.set_height(game.tuning().world_height() as u32);

        let renderer = match CanvasRenderer::new(&canvas, &manifest) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Canvas setup failed: {e:?}");
                return;
            }
        };
        let audio = AudioManager::new(&manifest.crash_sounds);

        set_visible("restartBtn", false);
        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            audio,
            autopilot: false,
            timer: None,
        }));

        setup_input_handlers(app.clone());
        setup_restart_button(app.clone());
        wait_for_images(app);

        log::info!("Game initialized with seed: {}", seed);
    }

    /// Start the first run once every image has loaded or failed
    fn wait_for_images(app: Rc<RefCell<App>>) {
        let images: Vec<_> = app.borrow().renderer.images().cloned().collect();
        let pending = Rc::new(Cell::new(images.len()));

        for img in images {
            if img.complete() {
                pending.set(pending.get() - 1);
                continue;
            }
            let app = app.clone();
            let pending = pending.clone();
            let settle = Closure::<dyn FnMut()>::new(move || {
                pending.set(pending.get().saturating_sub(1));
                if pending.get() == 0 {
                    begin(app.clone());
                }
            });
            img.set_onload(Some(settle.as_ref().unchecked_ref()));
            img.set_onerror(Some(settle.as_ref().unchecked_ref()));
            settle.forget();
        }

        if pending.get() == 0 {
            begin(app);
        }
    }

    fn begin(app: Rc<RefCell<App>>) {
        let started = {
            let mut a = app.borrow_mut();
            let started = a.game.start();
            a.update_hud();
            started
        };
        if started {
            start_timer(&app);
            request_animation_frame(app);
        }
    }

    /// Start the one-second timer for the current run
    fn start_timer(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let generation = {
            let mut a = app.borrow_mut();
            a.stop_timer();
            a.game.timer_generation()
        };

        let timer_app = app.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let mut a = timer_app.borrow_mut();
            if a.game.advance_second(generation) {
                a.update_hud();
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            1000,
        ) {
            Ok(handle) => app.borrow_mut().timer = Some((handle, callback)),
            Err(e) => log::warn!("Timer unavailable: {e:?}"),
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let Some(btn) = element("restartBtn") else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            {
                let mut a = app.borrow_mut();
                if !a.game.restart() {
                    return;
                }
                set_visible("restartBtn", false);
                a.update_hud();
            }
            start_timer(&app);
            request_animation_frame(app.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                a.audio.unlock();
                match event.code().as_str() {
                    "ArrowLeft" => {
                        a.game.handle_input(InputEvent::LeftPressed);
                    }
                    "ArrowRight" => {
                        a.game.handle_input(InputEvent::RightPressed);
                    }
                    "Space" => {
                        event.prevent_default();
                        if !event.repeat() {
                            a.game.handle_input(InputEvent::Jump);
                        }
                    }
                    "KeyA" => {
                        a.autopilot = !a.autopilot;
                        log::info!("Autopilot: {}", a.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.code().as_str() {
                    "ArrowLeft" => {
                        a.game.handle_input(InputEvent::LeftReleased);
                    }
                    "ArrowRight" => {
                        a.game.handle_input(InputEvent::RightReleased);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch anywhere jumps
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().game.handle_input(InputEvent::Jump);
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mobile jump button
        if let Some(btn) = element("mobile-jump-button") {
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    event.stop_propagation();
                    app.borrow_mut().game.handle_input(InputEvent::Jump);
                });
                let _ = btn
                    .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                    event.prevent_default();
                    app.borrow_mut().game.handle_input(InputEvent::Jump);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut a = app.borrow_mut();

            if a.autopilot && autopilot::wants_jump(a.game.state(), a.game.tuning()) {
                a.game.handle_input(InputEvent::Jump);
            }
            if let Some(event) = a.game.advance_tick() {
                a.on_game_over(event);
            }
            a.render();
            a.update_hud();
            a.game.wants_frames()
        };

        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pit Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    if let Err(e) = headless::run(std::env::args().skip(1)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use pit_runner::consts::NOMINAL_FPS;
    use pit_runner::sim::autopilot;
    use pit_runner::{Game, InputEvent, Tuning};

    /// Default cap on simulated ticks (ten minutes at 60 fps)
    const DEFAULT_MAX_TICKS: u64 = 10 * 60 * NOMINAL_FPS;

    /// Usage: `pit-runner [tuning.json] [max_ticks]`
    pub fn run(mut args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
        let tuning = match args.next() {
            Some(path) => {
                let json = std::fs::read_to_string(&path)?;
                log::info!("Loaded tuning from {path}");
                Tuning::from_json(&json)?
            }
            None => Tuning::default(),
        };
        let max_ticks = match args.next() {
            Some(n) => n.parse::<u64>()?,
            None => DEFAULT_MAX_TICKS,
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut game = Game::new(tuning, seed)?;
        log::info!("Game initialized with seed: {}", seed);

        game.start();
        let generation = game.timer_generation();
        for tick in 1..=max_ticks {
            if autopilot::wants_jump(game.state(), game.tuning()) {
                game.handle_input(InputEvent::Jump);
            }
            if let Some(event) = game.advance_tick() {
                log::info!("{:?}", event);
                break;
            }
            if tick % NOMINAL_FPS == 0 {
                game.advance_second(generation);
            }
        }

        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        Ok(())
    }
}
