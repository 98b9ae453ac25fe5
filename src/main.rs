//! Canvas Arcade entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use canvas_arcade::platform::web::{self, CanvasSurface, DomHud, PlatformError};
    use canvas_arcade::pong::PongScene;
    use canvas_arcade::surface::Surface;
    use canvas_arcade::{Demo, Game};

    /// Interval timer driving the spawner; dropping the closure is safe
    /// once the interval is cleared
    struct SpawnTimer {
        handle: i32,
        _callback: Closure<dyn FnMut()>,
    }

    /// Everything the browser callbacks share
    struct App {
        demo: Demo,
        game: Game,
        surface: CanvasSurface,
        hud: DomHud,
        /// A frame callback is pending
        looping: bool,
        spawner: Option<SpawnTimer>,
    }

    impl App {
        fn stop_spawner(&mut self) {
            if let Some(timer) = self.spawner.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(timer.handle);
                }
                log::info!("Spawner stopped");
            }
        }
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Canvas Arcade starting...");

        let window = web::window()?;
        let document = web::document()?;

        let canvas = web::fullscreen_canvas("canvas")?;
        let mut surface = CanvasSurface::new(&canvas)?;
        let size = surface.size();

        let demo = Demo::from_query(&window.location().search().unwrap_or_default());
        log::info!("Demo: {}", demo.as_str());

        if demo == Demo::Pong {
            // Static scene: one paint, no loop
            PongScene::new(size).draw(&mut surface);
            return Ok(());
        }

        let tuning = web::load_tuning();
        let seed = js_sys::Date::now() as u64;
        let hud = match demo {
            Demo::Shooter => DomHud::bind(&document),
            _ => DomHud::detached(),
        };

        let app = Rc::new(RefCell::new(App {
            demo,
            game: Game::new(seed, size, tuning),
            surface,
            hud,
            looping: false,
            spawner: None,
        }));

        setup_click_handler(&canvas, app.clone());

        match demo {
            Demo::Shooter => setup_start_button(&document, app)?,
            // Firing range starts immediately, like its page
            _ => start_game(app),
        }

        log::info!("Canvas Arcade running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &web_sys::HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            app.borrow_mut()
                .game
                .click(event.client_x() as f32, event.client_y() as f32);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(
        document: &web_sys::Document,
        app: Rc<RefCell<App>>,
    ) -> Result<(), PlatformError> {
        let btn = document
            .get_element_by_id("startGameBtn")
            .ok_or(PlatformError::MissingElement("startGameBtn"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            start_game(app.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    /// Reset the session, (re)arm the spawner and make sure frames are flowing
    fn start_game(app: Rc<RefCell<App>>) {
        let needs_frame = {
            let mut a = app.borrow_mut();
            a.stop_spawner();

            let App { game, hud, .. } = &mut *a;
            game.start(hud);

            if a.demo.spawns_enemies() {
                let interval_ms = a.game.state().tuning.spawn_interval_ms;
                a.spawner = start_spawner(app.clone(), interval_ms);
            }

            let needs_frame = !a.looping;
            a.looping = true;
            needs_frame
        };

        if needs_frame {
            request_animation_frame(app);
        }
    }

    fn start_spawner(app: Rc<RefCell<App>>, interval_ms: f64) -> Option<SpawnTimer> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().game.spawn_tick();
        });
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .ok()?;
        Some(SpawnTimer {
            handle,
            _callback: callback,
        })
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; cannot schedule frames");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let running = {
            let mut a = app.borrow_mut();
            let App {
                game, surface, hud, ..
            } = &mut *a;
            let running = game.frame(time, surface, hud);
            if !running {
                a.looping = false;
                a.stop_spawner();
            }
            running
        };

        if running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Arcade failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Arcade (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let outcome = headless::run(seed, headless::MAX_FRAMES);
    println!(
        "Seed {}: score {} after {} frames, {} hits, {} kills ({})",
        seed,
        outcome.score,
        outcome.frames,
        outcome.stats.hits,
        outcome.stats.kills,
        if outcome.game_over { "game over" } else { "survived" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_arcade::sim::SpawnClock;
    use canvas_arcade::{Game, RunStats};
    use canvas_arcade::surface::{RecordingHud, RecordingSurface, Surface};
    use canvas_arcade::tuning::Tuning;

    /// Two minutes at 60 Hz
    pub const MAX_FRAMES: u32 = 60 * 120;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames between automatic shots
    const FIRE_PERIOD: u32 = 12;

    pub struct Outcome {
        pub score: u64,
        pub frames: u32,
        pub stats: RunStats,
        pub game_over: bool,
    }

    /// Play a seeded session, firing at the nearest enemy every few frames
    pub fn run(seed: u64, max_frames: u32) -> Outcome {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut hud = RecordingHud::default();
        let tuning = Tuning::default();
        let mut clock = SpawnClock::new(tuning.spawn_interval_ms);
        let mut game = Game::new(seed, surface.size(), tuning);

        game.start(&mut hud);
        clock.start(0.0);

        let mut frames = 0;
        while frames < max_frames {
            let now = frames as f64 * FRAME_MS;
            for _ in 0..clock.poll(now) {
                game.spawn_tick();
            }

            if frames % FIRE_PERIOD == 0 {
                let center = game.state().center();
                let target = game
                    .state()
                    .enemies
                    .iter()
                    .map(|e| e.body.pos)
                    .min_by(|a, b| {
                        a.distance_squared(center)
                            .partial_cmp(&b.distance_squared(center))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                if let Some(target) = target {
                    game.click(target.x, target.y);
                }
            }

            surface.reset();
            frames += 1;
            if !game.frame(now, &mut surface, &mut hud) {
                clock.stop();
                break;
            }
        }

        log::info!(
            "Headless run finished: score {}, {} frames, {} live enemies",
            game.score(),
            frames,
            game.state().enemies.len()
        );

        Outcome {
            score: game.score(),
            frames,
            stats: game.stats(),
            game_over: hud.modal_visible,
        }
    }
}
