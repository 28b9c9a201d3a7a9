//! Startup and the animation-frame loop

use crate::canvas::CanvasRenderer;
use crate::input::{attach_pointer, PointerListener};
use crate::session::SessionSlot;
use crate::ClientError;
use game_core::{Config, Match, Scene, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

pub const DEFAULT_CANVAS_ID: &str = "pong";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

thread_local! {
    static RUNNING: RefCell<SessionSlot<PointerListener>> = const { RefCell::new(SessionSlot::new()) };
}

/// Start a match on the canvas with the given id (default `"pong"`)
#[wasm_bindgen]
pub fn start(canvas_id: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
    run(&canvas_id).map_err(|e| {
        log::error!("failed to start: {e}");
        e.into()
    })
}

/// Stop the running match before its next frame and detach its input
#[wasm_bindgen]
pub fn stop() {
    if RUNNING.with(|running| running.borrow_mut().end()) {
        log::info!("stopping");
    }
}

fn run(canvas_id: &str) -> Result<(), ClientError> {
    if RUNNING.with(|running| running.borrow().is_running()) {
        return Err(ClientError::AlreadyRunning);
    }

    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let document = window.document().ok_or(ClientError::NoDocument)?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ClientError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| ClientError::NotACanvas(canvas_id.to_string()))?;

    let renderer = CanvasRenderer::new(&canvas)?;
    let config = Config::for_surface(canvas.width() as f32, canvas.height() as f32);
    let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let game = Rc::new(RefCell::new(Match::with_config(config, seed)?));

    // Dropping the listener on any error below detaches it
    let pointer = attach_pointer(&canvas, game.clone())?;
    let stop = StopHandle::new();
    start_frame_loop(window, game, renderer, stop.clone())?;

    log::info!(
        "starting on #{canvas_id} ({}x{})",
        canvas.width(),
        canvas.height()
    );
    RUNNING.with(|running| running.borrow_mut().begin(stop, pointer))
}

/// Tick then render once per animation frame until stopped
fn start_frame_loop(
    window: Window,
    game: Rc<RefCell<Match>>,
    renderer: CanvasRenderer,
    stop: StopHandle,
) -> Result<(), ClientError> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let loop_window = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        if stop.is_stopped() {
            log::info!("stopped at tick {}", game.borrow().tick);
            // Drop our own closure; nothing reschedules it
            let _ = next.borrow_mut().take();
            return;
        }

        {
            let mut game = game.borrow_mut();
            game.tick();
            if let Some(snapshot) = game.snapshot() {
                let scene = Scene::build(&snapshot, &game.config);
                if let Err(e) = renderer.draw(&scene) {
                    log::error!("draw failed: {e}");
                }
            }
        }

        let scheduled = match next.borrow().as_ref() {
            Some(callback) => request_animation_frame(&loop_window, callback),
            None => Ok(()),
        };
        if let Err(e) = scheduled {
            log::error!("failed to schedule frame, stopping: {e}");
            RUNNING.with(|running| running.borrow_mut().end());
            let _ = next.borrow_mut().take();
        }
    }));

    let scheduled = match frame.borrow().as_ref() {
        Some(callback) => request_animation_frame(&window, callback),
        None => Ok(()),
    };
    if scheduled.is_err() {
        // Break the closure's reference cycle
        let _ = frame.borrow_mut().take();
    }
    scheduled
}

fn request_animation_frame(
    window: &Window,
    callback: &Closure<dyn FnMut()>,
) -> Result<(), ClientError> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
