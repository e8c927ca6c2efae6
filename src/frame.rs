use crate::color::Palette;
use crate::motion::{MotionState, SurfaceSize};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<MotionState>>,
    pub surface: Rc<Cell<SurfaceSize>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub palette: Palette,
    pub reduced_motion: bool,
    pub epoch: Instant,
}

impl FrameContext {
    /// One animation frame: integrate the motion state, then paint it.
    pub fn frame(&mut self) {
        let now_sec = self.epoch.elapsed().as_secs_f64();
        let surface = self.surface.get();
        let mut state = self.state.borrow_mut();
        state.step(now_sec, surface, self.reduced_motion);
        render::draw(&self.ctx, &state, &self.palette, surface);
    }
}

/// Controls the requestAnimationFrame loop: `stop` halts rescheduling and
/// cancels the pending callback.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    LoopHandle { running, raf_id }
}
