//! Minimal Thumbpad demo: a floating, following joystick on a blank page.

use std::cell::RefCell;
use std::rc::Rc;

use thumbpad_core::{JoystickConfig, JoystickController, JoystickEvent, Positioning};
use thumbpad_platform_web::{TouchBridge, WebSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let container = styled_div(
        &document,
        "position: relative; width: 100vw; height: 100vh; touch-action: none; overflow: hidden;",
    )?;
    let zone = styled_div(
        &document,
        "position: absolute; left: 40px; top: 40px; width: 120px; height: 120px; \
         border-radius: 50%; border: 2px solid #888;",
    )?;
    let handle = styled_div(
        &document,
        "position: absolute; left: 35px; top: 35px; width: 50px; height: 50px; \
         border-radius: 50%; background: #888;",
    )?;
    let readout = styled_div(
        &document,
        "position: absolute; right: 16px; top: 16px; font: 14px monospace;",
    )?;
    readout.set_text_content(Some("x +0.00 y +0.00"));

    zone.append_child(&handle)?;
    container.append_child(&zone)?;
    container.append_child(&readout)?;
    body.append_child(&container)?;

    let surface = WebSurface::new(container.clone(), zone.clone(), handle.clone());
    let mut controller = JoystickController::new(
        surface,
        JoystickConfig {
            positioning: Positioning::Floating,
            following: true,
            ..Default::default()
        },
    );
    controller.on_event({
        let readout = readout.clone();
        move |event| match event {
            JoystickEvent::Pressed => log::info!("joystick pressed"),
            JoystickEvent::Changed(vector) => {
                readout.set_text_content(Some(&format!(
                    "x {:+.2} y {:+.2}",
                    vector.x, vector.y
                )));
            }
            JoystickEvent::Released(_) => {
                readout.set_text_content(Some("x +0.00 y +0.00"));
            }
        }
    });

    let controller = Rc::new(RefCell::new(controller));
    let bridge = TouchBridge::attach(&container, controller)?;
    // The joystick lives as long as the page does.
    std::mem::forget(bridge);
    Ok(())
}

fn styled_div(document: &Document, style: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
    element.set_attribute("style", style)?;
    Ok(element)
}
