//! Canvas Arcade entry point
//!
//! Handles platform-specific initialization and runs the frame loop. The
//! page decides which game boots: a `hero-canvas` element selects the
//! landing-page banner, a `gameCanvas` element selects the platformer or,
//! with `data-game="invaders"`, the invaders game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use canvas_arcade::consts::*;
    use canvas_arcade::highscores::{INVADERS_KEY, PLATFORMER_KEY};
    use canvas_arcade::render;
    use canvas_arcade::{HighScores, Settings, hero, invaders, platformer};

    /// Which simulation this page runs
    enum App {
        Platformer {
            state: platformer::GameState,
            input: platformer::TickInput,
        },
        Invaders {
            state: invaders::GameState,
            input: invaders::TickInput,
        },
        Hero {
            state: hero::HeroState,
            rng: Pcg32,
        },
    }

    /// Game instance holding all state
    struct Game {
        app: App,
        ctx: CanvasRenderingContext2d,
        accumulator: f32,
        last_time: f64,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Set once the terminal score has been written to the leaderboard
        score_recorded: bool,
    }

    impl Game {
        fn new(app: App, ctx: CanvasRenderingContext2d, settings: Settings) -> Self {
            Self {
                app,
                ctx,
                accumulator: 0.0,
                last_time: 0.0,
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                score_recorded: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                match &mut self.app {
                    App::Platformer { state, input } => {
                        platformer::tick(state, input);
                        // Clear one-shot inputs after processing
                        input.jump = false;
                        input.restart = false;
                    }
                    App::Invaders { state, input } => {
                        invaders::tick(state, input);
                        input.shoot = false;
                        input.restart = false;
                    }
                    App::Hero { state, rng } => {
                        if self.settings.hero_banner && !self.settings.reduced_motion {
                            state.tick(rng);
                        }
                    }
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            self.record_score_if_over();
        }

        /// Write the final score to the leaderboard once per run
        fn record_score_if_over(&mut self) {
            if self.score_recorded {
                return;
            }

            let (key, score, level) = match &self.app {
                App::Platformer { state, .. } if state.phase == platformer::GamePhase::GameOver => {
                    (PLATFORMER_KEY, state.score, state.level)
                }
                App::Invaders { state, .. } if state.phase == invaders::GamePhase::GameOver => {
                    (INVADERS_KEY, state.score, state.rows)
                }
                _ => return,
            };

            // Entries carry epoch ms; the rAF timestamp is page-relative
            let mut scores = HighScores::load(key);
            if let Some(rank) = scores.add_score(score, level, js_sys::Date::now()) {
                log::info!("New high score: {} (rank {})", score, rank);
                scores.save(key);
            }
            self.score_recorded = true;
        }

        /// Render the current frame
        fn render(&self) {
            match &self.app {
                App::Platformer { state, .. } => render::platformer::draw(&self.ctx, state),
                App::Invaders { state, .. } => render::invaders::draw(&self.ctx, state),
                App::Hero { state, .. } => render::hero::draw(&self.ctx, state),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let App::Platformer { state, .. } = &self.app {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&state.score.to_string()));
                }
                if let Some(el) = document.get_element_by_id("lives") {
                    el.set_text_content(Some(&state.lives.to_string()));
                }
                if let Some(el) = document.get_element_by_id("level") {
                    el.set_text_content(Some(&state.level.to_string()));
                }
            }

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let settings = Settings::load();

        // Pick the app from the canvas the page carries
        let (canvas, app): (HtmlCanvasElement, App) =
            if let Some(el) = document.get_element_by_id("hero-canvas") {
                let canvas: HtmlCanvasElement = el.dyn_into().expect("not a canvas");
                canvas.set_width(HERO_WIDTH as u32);
                canvas.set_height(HERO_HEIGHT as u32);

                let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
                let state = hero::HeroState::new(HERO_WIDTH, HERO_HEIGHT, &mut rng);
                (canvas, App::Hero { state, rng })
            } else {
                let canvas: HtmlCanvasElement = document
                    .get_element_by_id("gameCanvas")
                    .expect("no canvas")
                    .dyn_into()
                    .expect("not a canvas");
                let w = canvas.width() as f32;
                let h = canvas.height() as f32;

                if canvas.get_attribute("data-game").as_deref() == Some("invaders") {
                    let state = invaders::GameState::new(w, h);
                    let input = invaders::TickInput::default();
                    (canvas, App::Invaders { state, input })
                } else {
                    let seed = js_sys::Date::now() as u64;
                    log::info!("Platformer seed: {}", seed);
                    let state = platformer::GameState::new(seed, w, h);
                    let input = platformer::TickInput::default();
                    (canvas, App::Platformer { state, input })
                }
            };

        // Surface the saved leaderboard on the page
        let score_key = match &app {
            App::Platformer { .. } => Some(PLATFORMER_KEY),
            App::Invaders { .. } => Some(INVADERS_KEY),
            App::Hero { .. } => None,
        };
        if let Some(key) = score_key {
            if let Some(top) = HighScores::load(key).top_score() {
                log::info!("Top score so far: {}", top);
                if let Some(el) = document.get_element_by_id("highscore") {
                    el.set_text_content(Some(&top.to_string()));
                }
            }
        }

        let ctx = render::context_for(&canvas).expect("no 2d context");
        let game = Rc::new(RefCell::new(Game::new(app, ctx, settings)));

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // Start the frame loop
        request_animation_frame(game);

        log::info!("Canvas Arcade running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Keydown: held flags plus the space one-shot
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();

                // FPS counter toggle, persisted across sessions
                if matches!(event.key().as_str(), "f" | "F") {
                    g.settings.show_fps = !g.settings.show_fps;
                    g.settings.save();
                    return;
                }

                match &mut g.app {
                    App::Platformer { input, .. } => match event.key().as_str() {
                        "ArrowLeft" => input.left = true,
                        "ArrowRight" => input.right = true,
                        " " => {
                            event.prevent_default();
                            input.jump = true;
                        }
                        _ => {}
                    },
                    App::Invaders { input, .. } => match event.key().as_str() {
                        "ArrowLeft" => input.left = true,
                        "ArrowRight" => input.right = true,
                        " " => {
                            event.prevent_default();
                            input.shoot = true;
                        }
                        _ => {}
                    },
                    App::Hero { .. } => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release held flags
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match &mut g.app {
                    App::Platformer { input, .. } => match event.key().as_str() {
                        "ArrowLeft" => input.left = false,
                        "ArrowRight" => input.right = false,
                        _ => {}
                    },
                    App::Invaders { input, .. } => match event.key().as_str() {
                        "ArrowLeft" => input.left = false,
                        "ArrowRight" => input.right = false,
                        _ => {}
                    },
                    App::Hero { .. } => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                match &mut g.app {
                    App::Platformer { input, .. } => input.restart = true,
                    App::Invaders { input, .. } => input.restart = true,
                    App::Hero { .. } => {}
                }
                g.score_recorded = false;
                log::info!("Restart requested");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
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
    log::info!("Canvas Arcade (native) starting...");
    log::info!("Run with `trunk serve` for the web version");

    // Headless smoke run of the platformer
    run_platformer_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_platformer_demo() {
    use canvas_arcade::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use canvas_arcade::platformer::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(0xC0FFEE, CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut input = TickInput {
        right: true,
        ..Default::default()
    };

    for frame in 0..600 {
        // Hop every second or so
        input.jump = frame % 70 == 0;
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Platformer demo: {} ticks, score {}, lives {}, level {}",
        state.time_ticks, state.score, state.lives, state.level
    );
}
