//! Browser wiring - canvas lookup, listeners and the frame loop
//!
//! Everything here calls into JS; it is only reachable from the exported
//! `start_background*` functions and never from native tests.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::domain::FieldConfig;
use crate::simulation::{Dot, FieldCore, Palette, Surface};

/// 2D canvas context as a draw target
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: u32, height: u32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_dot(&mut self, dot: &Dot, palette: &Palette) {
        self.ctx.set_fill_style_str(&palette.fill_style(dot));
        self.ctx.begin_path();
        if self
            .ctx
            .arc(dot.screen_x as f64, dot.screen_y as f64, dot.radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

fn find_canvas(window: &Window, canvas_id: &str) -> Option<HtmlCanvasElement> {
    window
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn window_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((width as u32, height as u32))
}

/// An event listener that is removed again when dropped, unless committed.
/// Lets `wire` bail out with `?` without leaving callbacks on the window.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    armed: bool,
}

impl Listener {
    pub(crate) fn add(
        target: &EventTarget,
        event: &'static str,
        callback: &JsValue,
    ) -> Result<Self, JsValue> {
        let callback: js_sys::Function = callback.unchecked_ref::<js_sys::Function>().clone();
        target.add_event_listener_with_callback(event, &callback)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            armed: true,
        })
    }

    /// Keep the listener for the life of the page
    pub(crate) fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self.armed {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, &self.callback);
        }
    }
}

/// Attach the field to `canvas_id`. Returns `false` without side effects
/// when there is no window, no such canvas, or no 2D context.
pub fn activate(canvas_id: &str, config: FieldConfig) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(canvas) = find_canvas(&window, canvas_id) else {
        console_warn!("wave field: no canvas with id '{}', not starting", canvas_id);
        return false;
    };
    let Some(ctx) = context_2d(&canvas) else {
        console_warn!("wave field: canvas '{}' has no 2d context, not starting", canvas_id);
        return false;
    };
    let size = match window_size(&window) {
        Ok(size) => size,
        Err(e) => {
            console_warn!("wave field: cannot read window size: {:?}", e);
            return false;
        }
    };

    match wire(window, canvas, ctx, size, config) {
        Ok(points) => {
            console_log!(
                "wave field: running on '{}' ({}x{}, {} points)",
                canvas_id,
                size.0,
                size.1,
                points
            );
            true
        }
        Err(e) => {
            console_warn!("wave field: failed to start: {:?}", e);
            false
        }
    }
}

fn wire(
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    (width, height): (u32, u32),
    config: FieldConfig,
) -> Result<usize, JsValue> {
    let field = Rc::new(RefCell::new(FieldCore::with_config(width, height, config)));
    let points = field.borrow().point_count();

    let on_resize = {
        let field = field.clone();
        let canvas = canvas.clone();
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Ok((w, h)) = window_size(&window) {
                canvas.set_width(w);
                canvas.set_height(h);
                field.borrow_mut().resize(w, h);
            }
        })
    };

    let on_pointer = {
        let field = field.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            field
                .borrow_mut()
                .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        })
    };

    // The tick closure re-requests itself; the Rc cycle keeps it alive for
    // the life of the page.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = tick.clone();
    let loop_window = window.clone();
    let mut surface = CanvasSurface::new(ctx);
    *tick.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        {
            let mut field = field.borrow_mut();
            field.step();
            field.render(&mut surface);
        }
        if let Some(cb) = next.borrow().as_ref() {
            let _ = loop_window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    // Nothing is committed until every fallible call has succeeded; on error
    // the guards unregister what was added and the canvas is left untouched.
    let target: &EventTarget = window.as_ref();
    let resize_listener = Listener::add(target, "resize", on_resize.as_ref())?;
    let pointer_listener = Listener::add(target, "mousemove", on_pointer.as_ref())?;

    let first_frame = match tick.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    if let Err(e) = first_frame {
        // Break the tick <-> next cycle so the closure is freed
        tick.borrow_mut().take();
        return Err(e);
    }

    // The first frame runs after this returns, so the backing store is
    // sized before anything is drawn.
    canvas.set_width(width);
    canvas.set_height(height);

    resize_listener.commit();
    pointer_listener.commit();
    on_resize.forget();
    on_pointer.forget();

    Ok(points)
}
