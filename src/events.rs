use crate::dom;
use crate::input;
use crate::motion::{Command, MotionState, PointerSource, SurfaceSize};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that unregisters itself on drop, so disposing
/// the widget releases every callback instead of leaking them.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    // Touch listeners default to passive in some browsers; prevent_default
    // only works when the listener is registered non-passive.
    fn add_active(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<MotionState>>,
    pub surface: Rc<Cell<SurfaceSize>>,
    pub reduced_motion: bool,
    pub epoch: Instant,
}

impl InputWiring {
    fn apply(&self, cmd: Command) {
        self.state
            .borrow_mut()
            .apply(cmd, self.reduced_motion, self.surface.get());
    }

    fn now_sec(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Wire every input listener and return their handles. Handlers translate
/// DOM events into commands and apply them synchronously; they never draw.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<ListenerHandle> {
    vec![
        wire_mousemove(w),
        wire_touchmove(w),
        wire_release(w, "mouseleave"),
        wire_release(w, "touchend"),
        wire_click(w),
        wire_dblclick(w),
        wire_keydown(w),
    ]
}

fn wire_mousemove(w: &InputWiring) -> ListenerHandle {
    let w = w.clone();
    let canvas = w.canvas.clone();
    ListenerHandle::add(&canvas.clone().into(), "mousemove", move |ev: web::Event| {
        let ev: web::MouseEvent = ev.unchecked_into();
        let rect = canvas.get_bounding_client_rect();
        let point = input::local_point(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        w.apply(Command::Retarget {
            point,
            source: PointerSource::Mouse,
        });
    })
}

fn wire_touchmove(w: &InputWiring) -> ListenerHandle {
    let w = w.clone();
    let canvas = w.canvas.clone();
    ListenerHandle::add_active(&canvas.clone().into(), "touchmove", move |ev: web::Event| {
        // Capture the drag exclusively; no scroll/gesture fallthrough.
        ev.prevent_default();
        let ev: web::TouchEvent = ev.unchecked_into();
        if let Some(touch) = ev.touches().get(0) {
            let rect = canvas.get_bounding_client_rect();
            let point = input::local_point(
                touch.client_x() as f64,
                touch.client_y() as f64,
                rect.left(),
                rect.top(),
            );
            w.apply(Command::Retarget {
                point,
                source: PointerSource::Touch,
            });
        }
    })
}

fn wire_release(w: &InputWiring, event: &'static str) -> ListenerHandle {
    let w = w.clone();
    ListenerHandle::add(&w.canvas.clone().into(), event, move |_ev: web::Event| {
        w.apply(Command::Release);
    })
}

fn wire_click(w: &InputWiring) -> ListenerHandle {
    let w = w.clone();
    ListenerHandle::add(&w.canvas.clone().into(), "click", move |_ev: web::Event| {
        w.apply(Command::Pulse {
            at_sec: w.now_sec(),
        });
    })
}

fn wire_dblclick(w: &InputWiring) -> ListenerHandle {
    let w = w.clone();
    ListenerHandle::add(&w.canvas.clone().into(), "dblclick", move |_ev: web::Event| {
        w.apply(Command::ToggleMode);
    })
}

// Listens on the canvas itself, so the trigger is gated on focus; the canvas
// is made focusable at mount.
fn wire_keydown(w: &InputWiring) -> ListenerHandle {
    let w = w.clone();
    ListenerHandle::add(&w.canvas.clone().into(), "keydown", move |ev: web::Event| {
        let ev: web::KeyboardEvent = ev.unchecked_into();
        if input::is_activation_key(&ev.key()) {
            ev.prevent_default();
            w.apply(Command::Pulse {
                at_sec: w.now_sec(),
            });
        }
    })
}

/// Keep the backing buffer and shared logical size in sync with the host
/// element across window resizes.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    surface: &Rc<Cell<SurfaceSize>>,
) -> Option<ListenerHandle> {
    let window = web::window()?;
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let surface = surface.clone();
    Some(ListenerHandle::add(
        &window.into(),
        "resize",
        move |_ev: web::Event| {
            surface.set(dom::sync_canvas_backing_size(&canvas, &ctx));
        },
    ))
}
