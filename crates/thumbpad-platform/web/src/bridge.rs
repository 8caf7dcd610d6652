//! DOM touch events → controller entry points.

use std::cell::RefCell;
use std::rc::Rc;

use thumbpad_core::{JoystickController, VisualSurface};
use thumbpad_geometry::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, HtmlElement, Touch, TouchEvent};

type TouchClosure = Closure<dyn FnMut(TouchEvent)>;

/// Registers touch listeners on a container element and forwards every
/// changed contact to the controller.
///
/// The controller itself sorts out which contact it tracks; the bridge just
/// unpacks `changedTouches` (an event with none is naturally a no-op) and
/// hands over identifier plus client coordinates. Listener closures live in
/// the struct and are unregistered again on drop.
pub struct TouchBridge {
    container: HtmlElement,
    on_start: TouchClosure,
    on_move: TouchClosure,
    on_end: TouchClosure,
    on_cancel: TouchClosure,
}

impl TouchBridge {
    pub fn attach<S>(
        container: &HtmlElement,
        controller: Rc<RefCell<JoystickController<S>>>,
    ) -> Result<Self, JsValue>
    where
        S: VisualSurface + 'static,
    {
        let on_start = {
            let controller = controller.clone();
            TouchClosure::new(move |event: TouchEvent| {
                event.prevent_default();
                for touch in changed_touches(&event) {
                    controller
                        .borrow_mut()
                        .touch_start(touch.identifier(), touch_point(&touch));
                }
            })
        };
        let on_move = {
            let controller = controller.clone();
            TouchClosure::new(move |event: TouchEvent| {
                event.prevent_default();
                for touch in changed_touches(&event) {
                    controller
                        .borrow_mut()
                        .touch_move(touch.identifier(), touch_point(&touch));
                }
            })
        };
        let on_end = {
            let controller = controller.clone();
            TouchClosure::new(move |event: TouchEvent| {
                for touch in changed_touches(&event) {
                    controller.borrow_mut().touch_end(touch.identifier());
                }
            })
        };
        let on_cancel = {
            let controller = controller;
            TouchClosure::new(move |event: TouchEvent| {
                for touch in changed_touches(&event) {
                    controller.borrow_mut().touch_cancel(touch.identifier());
                }
            })
        };

        // Non-passive so preventDefault can stop scrolling while steering.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for (kind, closure) in [
            ("touchstart", &on_start),
            ("touchmove", &on_move),
            ("touchend", &on_end),
            ("touchcancel", &on_cancel),
        ] {
            container.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        }

        Ok(Self {
            container: container.clone(),
            on_start,
            on_move,
            on_end,
            on_cancel,
        })
    }
}

impl Drop for TouchBridge {
    fn drop(&mut self) {
        for (kind, closure) in [
            ("touchstart", &self.on_start),
            ("touchmove", &self.on_move),
            ("touchend", &self.on_end),
            ("touchcancel", &self.on_cancel),
        ] {
            let _ = self
                .container
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

fn changed_touches(event: &TouchEvent) -> impl Iterator<Item = Touch> {
    let touches = event.changed_touches();
    (0..touches.length()).filter_map(move |index| touches.item(index))
}

fn touch_point(touch: &Touch) -> Point {
    Point::new(touch.client_x() as f32, touch.client_y() as f32)
}
