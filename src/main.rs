//! Breakout court entry point
//!
//! Native builds run a headless match driven by the autopilot and print the
//! final standings. Web builds host the game on a 2D canvas.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use breakout_court::render::{Color, RenderSink};
    use breakout_court::scene::{Game, Intent, KeyState};
    use breakout_court::sim::Rect;
    use breakout_court::{CourtError, Settings};

    /// Render sink over a canvas 2D context
    struct CanvasSink {
        ctx: CanvasRenderingContext2d,
    }

    impl RenderSink for CanvasSink {
        fn clear(&mut self, width: f32, height: f32) {
            self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ctx.set_fill_style_str(color.as_css());
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
            self.ctx.set_fill_style_str(Color::White.as_css());
            self.ctx.set_font(&format!("{size}px monospace"));
            self.ctx.set_text_align("center");
            let _ = self.ctx.fill_text(text, x as f64, y as f64);
        }
    }

    struct Host {
        game: Game,
        sink: CanvasSink,
    }

    fn key_intent(key: &str, state: KeyState) -> Option<Intent> {
        match (key, state) {
            ("ArrowLeft", _) => Some(Intent::MoveLeft(state)),
            ("ArrowRight", _) => Some(Intent::MoveRight(state)),
            (" ", KeyState::Down) => Some(Intent::Launch),
            ("1", KeyState::Down) => Some(Intent::SelectPlayers(1)),
            ("2", KeyState::Down) => Some(Intent::SelectPlayers(2)),
            _ => None,
        }
    }

    fn surface(what: &str) -> CourtError {
        CourtError::MissingSurface(what.to_string())
    }

    pub fn run() -> Result<(), CourtError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger unavailable: {e}").into());
        }

        log::info!("Breakout court starting...");

        let window = web_sys::window().ok_or_else(|| surface("no window"))?;
        let document = window.document().ok_or_else(|| surface("no document"))?;
        let available = window
            .screen()
            .and_then(|s| s.avail_height())
            .map_err(|_| surface("no screen"))?;
        let settings = Settings::for_screen(available as f32);
        settings.validate()?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| surface("no #canvas element"))?
            .dyn_into()
            .map_err(|_| surface("#canvas is not a canvas"))?;
        canvas.set_width(settings.court_width as u32);
        canvas.set_height(settings.court_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| surface("no 2d context"))?
            .dyn_into()
            .map_err(|_| surface("unexpected context type"))?;

        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Court {}x{}, seed {}",
            settings.court_width,
            settings.court_height,
            seed
        );

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(settings, seed),
            sink: CanvasSink { ctx },
        }));

        setup_input_handlers(&window, host.clone());
        request_animation_frame(host);
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, host: Rc<RefCell<Host>>) {
        for (event_name, state) in [("keydown", KeyState::Down), ("keyup", KeyState::Up)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(intent) = key_intent(event.key().as_str(), state) {
                    event.prevent_default();
                    host.borrow_mut().game.handle_intent(intent);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();
            let Host { game, sink } = &mut *h;
            if let Err(e) = game.frame(time, sink) {
                log::error!("Simulation halted: {e}");
                return;
            }
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use breakout_court::autopilot::Autopilot;
    use breakout_court::render::RecordingSink;
    use breakout_court::scene::{Game, Intent};
    use breakout_court::{CourtError, Settings};

    /// Host frame interval in ms (a 60 Hz display)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run() -> Result<(), CourtError> {
        let path = std::env::args().nth(1).map(PathBuf::from);
        let settings = Settings::load(path.as_deref());
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        log::info!(
            "Headless run: {} player(s), seed {}, {}s",
            settings.players,
            seed,
            settings.demo_seconds
        );

        let players = settings.players;
        let frames = (settings.demo_seconds as f64 * 1000.0 / FRAME_MS) as u64;
        let mut game = Game::new(settings, seed);
        game.handle_intent(Intent::SelectPlayers(players));

        let mut pilot = Autopilot::new();
        let mut sink = RecordingSink::default();
        for frame in 0..=frames {
            if let Some(court) = game.court() {
                if court.is_game_over() {
                    log::info!("Match over after {:.1}s", frame as f64 * FRAME_MS / 1000.0);
                    break;
                }
                for intent in pilot.decide(court) {
                    game.handle_intent(intent);
                }
            }
            game.frame(frame as f64 * FRAME_MS, &mut sink)?;
        }

        if let Some(court) = game.court() {
            println!("{}", serde_json::to_string_pretty(&court.summary())?);
        }
        Ok(())
    }
}
