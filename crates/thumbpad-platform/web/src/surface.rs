//! DOM-backed visual surface.

use thumbpad_core::VisualSurface;
use thumbpad_geometry::{Offset, Point, Rect};
use web_sys::HtmlElement;

/// CSS class toggled on the zone element while a session is live.
const ACTIVE_CLASS: &str = "thumbpad-active";

/// A [`VisualSurface`] over three DOM elements: the bounding container, the
/// outer zone, and the inner handle.
///
/// The zone must be absolutely positioned within the container; placement
/// writes `left`/`top`, and the handle moves via `transform: translate`.
/// Rect queries read `getBoundingClientRect`, so the shared coordinate space
/// is client (viewport) coordinates; feed the controller `clientX`/`clientY`
/// (which [`crate::TouchBridge`] does).
pub struct WebSurface {
    container: HtmlElement,
    zone: HtmlElement,
    handle: HtmlElement,
    /// Parent-relative rest center, captured at construction so resets land
    /// on an explicit position instead of whatever style clearing leaves.
    rest_center: Point,
}

impl WebSurface {
    pub fn new(container: HtmlElement, zone: HtmlElement, handle: HtmlElement) -> Self {
        let container_rect = client_rect(&container);
        let zone_center = client_rect(&zone).center();
        let rest_center = Point::new(
            zone_center.x - container_rect.x,
            zone_center.y - container_rect.y,
        );
        Self {
            container,
            zone,
            handle,
            rest_center,
        }
    }

    pub fn rest_center(&self) -> Point {
        self.rest_center
    }
}

impl VisualSurface for WebSurface {
    fn zone_rect(&self) -> Rect {
        client_rect(&self.zone)
    }

    fn handle_rect(&self) -> Rect {
        client_rect(&self.handle)
    }

    fn bounds_rect(&self) -> Rect {
        client_rect(&self.container)
    }

    fn place_zone(&mut self, center: Point) {
        let zone = client_rect(&self.zone);
        let style = self.zone.style();
        let _ = style.set_property("left", &format!("{}px", center.x - zone.width / 2.0));
        let _ = style.set_property("top", &format!("{}px", center.y - zone.height / 2.0));
    }

    fn reset_zone(&mut self) {
        let rest = self.rest_center;
        self.place_zone(rest);
    }

    fn place_handle(&mut self, offset: Offset) {
        let _ = self
            .handle
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", offset.x, offset.y));
    }

    fn reset_handle(&mut self) {
        let _ = self
            .handle
            .style()
            .set_property("transform", "translate(0px, 0px)");
    }

    fn set_active(&mut self, active: bool) {
        let class_list = self.zone.class_list();
        if active {
            let _ = class_list.add_1(ACTIVE_CLASS);
        } else {
            let _ = class_list.remove_1(ACTIVE_CLASS);
        }
    }
}

fn client_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        x: rect.left() as f32,
        y: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
