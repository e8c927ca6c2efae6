#![cfg(target_arch = "wasm32")]
use crate::motion::MotionState;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod motion;
mod render;

thread_local! {
    // Keeps the auto-mounted widget alive; `unmount` disposes it explicitly.
    static WIDGET: RefCell<Option<BlobWidget>> = RefCell::new(None);
}

/// A mounted blob widget. Owns every DOM listener and the frame loop, so
/// dropping it via `dispose` fully detaches the widget from the page.
#[wasm_bindgen]
pub struct BlobWidget {
    listeners: Vec<events::ListenerHandle>,
    loop_handle: frame::LoopHandle,
}

#[wasm_bindgen]
impl BlobWidget {
    /// Attach to the fixed host element. A page without that element gets no
    /// widget and no behavior; that is not an error.
    pub fn mount() -> Option<BlobWidget> {
        let document = dom::window_document()?;
        let Some(el) = document.get_element_by_id(constants::CANVAS_ID) else {
            log::info!("[mount] no #{} element; widget inert", constants::CANVAS_ID);
            return None;
        };
        let canvas: web::HtmlCanvasElement = match el.dyn_into() {
            Ok(c) => c,
            Err(_) => {
                log::warn!("[mount] #{} is not a canvas; widget inert", constants::CANVAS_ID);
                return None;
            }
        };
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;

        // Reachable in sequential keyboard navigation for the key trigger.
        canvas.set_tab_index(0);

        let palette = dom::resolve_palette(&canvas);
        let reduced_motion = dom::prefers_reduced_motion();
        let surface = Rc::new(Cell::new(dom::sync_canvas_backing_size(&canvas, &ctx)));
        let state = Rc::new(RefCell::new(MotionState::new(surface.get())));
        let epoch = Instant::now();

        let mut listeners = events::wire_input_handlers(&events::InputWiring {
            canvas: canvas.clone(),
            state: state.clone(),
            surface: surface.clone(),
            reduced_motion,
            epoch,
        });
        if let Some(h) = events::wire_resize(&canvas, &ctx, &surface) {
            listeners.push(h);
        }

        let loop_handle = frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
            state,
            surface: surface.clone(),
            ctx,
            palette,
            reduced_motion,
            epoch,
        })));

        let s = surface.get();
        log::info!(
            "[mount] blob widget attached ({:.0}x{:.0}, reduced_motion={})",
            s.width,
            s.height,
            reduced_motion
        );
        Some(BlobWidget {
            listeners,
            loop_handle,
        })
    }

    /// Halt the frame loop, cancel the pending callback, and remove every
    /// listener.
    pub fn dispose(self) {
        let BlobWidget {
            listeners,
            loop_handle,
        } = self;
        loop_handle.stop();
        drop(listeners);
        log::info!("[dispose] blob widget detached");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-canvas starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Dispose the auto-mounted widget, if any.
#[wasm_bindgen]
pub fn unmount() {
    WIDGET.with(|slot| {
        if let Some(widget) = slot.borrow_mut().take() {
            widget.dispose();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(widget) = BlobWidget::mount() {
        WIDGET.with(|slot| *slot.borrow_mut() = Some(widget));
    }
    Ok(())
}
