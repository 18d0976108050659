//! Neon Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use neon_rush::consts::SHAKE_DURATION_MS;
    use neon_rush::persistence::LocalStore;
    use neon_rush::platform::{now_ms, window_viewport};
    use neon_rush::renderer::CanvasRenderer;
    use neon_rush::sim::Viewport;
    use neon_rush::{Game, Settings, Tuning};

    /// Game plus its browser-side collaborators
    struct App {
        game: Game<LocalStore>,
        renderer: CanvasRenderer,
        /// A frame callback is currently scheduled
        loop_active: bool,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let viewport = window_viewport().unwrap_or(Viewport::new(800.0, 600.0));
        let Some(renderer) = CanvasRenderer::new(canvas.clone()) else {
            log::error!("Canvas2D context unavailable");
            return;
        };
        renderer.resize(viewport.width as u32, viewport.height as u32);

        let seed = now_ms() as u64;
        let game = Game::new(
            seed,
            Tuning::default(),
            viewport,
            Settings::load(),
            LocalStore::new(),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            loop_active: false,
        }));

        setup_input_handlers(&canvas, app.clone());
        setup_start_buttons(app.clone());
        setup_resize(app.clone());
        refresh_hud(&mut app.borrow_mut());

        log::info!("Neon Rush ready!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let mut a = app.borrow_mut();
                    a.game.pointer_down(x, y);
                    refresh_hud(&mut a);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                let mut a = app.borrow_mut();
                a.game.pointer_down(x, y);
                refresh_hud(&mut a);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["startBtn", "restartBtn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    start_session(app.clone());
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(viewport) = window_viewport() {
                let mut a = app.borrow_mut();
                a.renderer
                    .resize(viewport.width as u32, viewport.height as u32);
                a.game.resize(viewport.width, viewport.height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_session(app: Rc<RefCell<App>>) {
        let schedule = {
            let mut a = app.borrow_mut();
            a.game.start(now_ms());
            refresh_hud(&mut a);
            let schedule = !a.loop_active;
            a.loop_active = true;
            schedule
        };
        if schedule {
            request_animation_frame(app);
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut a = app.borrow_mut();
            let keep_going = a.game.frame(now_ms());

            let scene = a.game.scene();
            a.renderer.draw(&scene);

            if let Some(offset) = a.game.take_shake() {
                apply_shake(a.renderer.canvas(), offset.x, offset.y);
            }

            refresh_hud(&mut a);
            if !keep_going {
                a.loop_active = false;
            }
            keep_going
        };

        if keep_going {
            request_animation_frame(app);
        }
    }

    /// Offset the canvas, then snap back after a short delay
    fn apply_shake(canvas: &HtmlCanvasElement, dx: f32, dy: f32) {
        let style = canvas.style();
        let _ = style.set_property("transform", &format!("translate({}px, {}px)", dx, dy));

        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let reset = Closure::once(move || {
            let _ = canvas.style().set_property("transform", "translate(0,0)");
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reset.as_ref().unchecked_ref(),
            SHAKE_DURATION_MS,
        );
        reset.forget();
    }

    /// Redraw the HUD if anything on it changed
    fn refresh_hud(app: &mut App) {
        if app.game.take_hud_dirty() {
            update_hud(app);
        }
    }

    /// Update HUD elements in DOM
    fn update_hud(app: &App) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let hud = app.game.hud();

        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&hud.score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("level") {
            el.set_text_content(Some(&hud.level.to_string()));
        }
        if let Some(el) = document
            .get_element_by_id("lives")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            el.set_text_content(Some(&hud.hearts()));
            let animation = if hud.low_lives() {
                "pulseRed 0.5s infinite"
            } else {
                "none"
            };
            let _ = el.style().set_property("animation", animation);
        }
        if let Some(el) = document.get_element_by_id("bestScore") {
            el.set_text_content(Some(&hud.best_score_text()));
        }

        set_display(&document, "startScreen", hud.show_start_screen());
        set_display(&document, "gameOverScreen", hud.show_game_over());
        if hud.show_game_over() {
            if let Some(el) = document.get_element_by_id("finalScore") {
                el.set_text_content(Some(&hud.final_score_text()));
            }
        }
    }

    fn set_display(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el
                .style()
                .set_property("display", if visible { "flex" } else { "none" });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: a simple bot taps the lowest orb every few frames
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_rush::consts::FRAME_MS;
    use neon_rush::persistence::MemoryStore;
    use neon_rush::sim::Viewport;
    use neon_rush::{Game, Settings, Tuning};

    env_logger::init();
    log::info!("Neon Rush (native) starting...");
    log::info!("Native mode runs a headless autoplay session - use `trunk serve` to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    // Bot reaction time (frames between taps)
    const TAP_EVERY: u64 = 9;
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    let mut game = Game::new(
        0x5eed,
        tuning,
        Viewport::new(800.0, 600.0),
        Settings::default(),
        MemoryStore::new(),
    );

    let mut now = 0.0f64;
    game.start(now);
    let mut frames = 0u64;

    while frames < MAX_FRAMES {
        now += FRAME_MS as f64;
        frames += 1;
        if !game.frame(now) {
            break;
        }
        if frames % TAP_EVERY == 0 {
            let target = game
                .state
                .orbs
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|orb| orb.pos);
            if let Some(pos) = target {
                game.pointer_down(pos.x, pos.y);
            }
        }
    }

    let hud = game.hud();
    let stats = game.stats();
    println!(
        "{} after {} frames: level {}, {}/{} orbs popped, {} lives left",
        hud.final_score_text(),
        frames,
        hud.level,
        stats.orbs_popped,
        stats.orbs_spawned,
        hud.lives
    );
    println!("{}", hud.best_score_text());
}
