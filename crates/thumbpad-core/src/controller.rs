//! The joystick controller: touch session tracking and offset math.

use crate::config::{AxisLock, JoystickConfig, Positioning};
use crate::events::{JoystickEvent, ListenerId, ListenerRegistry};
use crate::surface::VisualSurface;
use thumbpad_geometry::{Offset, Point, Rect};

/// Identifier of a touch contact as reported by the host platform.
pub type TouchId = i32;

/// One touch-down-to-touch-up tracking session.
#[derive(Debug, Clone, Copy)]
struct TouchSession {
    touch_id: TouchId,
    /// The joystick's current logical center, parent-relative.
    origin: Point,
}

/// Tracks a single touch contact and converts its movement into a normalized
/// 2-D control vector.
///
/// The controller is single-touch-session-safe on surfaces that report
/// multiple simultaneous contacts: a touch-begin while a session is live, and
/// moves/ends whose identifier does not match the tracked contact, are
/// absorbed without side effects. Every entry point runs synchronously to
/// completion on the thread delivering touch input; there is no internal
/// locking.
pub struct JoystickController<S: VisualSurface> {
    surface: S,
    config: JoystickConfig,
    session: Option<TouchSession>,
    value: Offset,
    listeners: ListenerRegistry,
}

impl<S: VisualSurface> JoystickController<S> {
    pub fn new(surface: S, config: JoystickConfig) -> Self {
        Self {
            surface,
            config,
            session: None,
            value: Offset::ZERO,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, JoystickConfig::default())
    }

    /// Last reported horizontal value; `0.0` while no session is active.
    pub fn x(&self) -> f32 {
        self.value.x
    }

    /// Alias for [`Self::x`].
    pub fn horizontal(&self) -> f32 {
        self.x()
    }

    /// Last reported vertical value; `0.0` while no session is active.
    pub fn y(&self) -> f32 {
        self.value.y
    }

    /// Alias for [`Self::y`].
    pub fn vertical(&self) -> f32 {
        self.y()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Replaces the whole configuration. Takes effect on the next processed
    /// event; legal mid-gesture.
    pub fn set_config(&mut self, config: JoystickConfig) {
        self.config = config;
    }

    pub fn set_positioning(&mut self, positioning: Positioning) {
        self.config.positioning = positioning;
    }

    pub fn set_handle_limit(&mut self, limit: f32) {
        self.config.handle_limit = limit;
    }

    pub fn set_handle_round(&mut self, round: bool) {
        self.config.handle_round = round;
    }

    pub fn set_axis_lock(&mut self, lock: AxisLock) {
        self.config.axis_lock = lock;
    }

    pub fn set_following(&mut self, following: bool) {
        self.config.following = following;
    }

    pub fn set_invert_y(&mut self, invert: bool) {
        self.config.invert_y = invert;
    }

    pub fn set_limit_to_bounds(&mut self, limit: bool) {
        self.config.limit_to_bounds = limit;
    }

    /// Subscribes a listener to pressed/changed/released notifications.
    pub fn on_event(&mut self, listener: impl FnMut(&JoystickEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a previously subscribed listener. Returns `false` when the id
    /// was already gone.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// A contact landed. Starts a session unless one is already live, or the
    /// contact falls outside a `Fixed` joystick's outer zone.
    pub fn touch_start(&mut self, id: TouchId, page_point: Point) {
        if self.session.is_some() {
            // Second simultaneous contact; keep tracking the first.
            return;
        }

        let bounds = self.surface.bounds_rect();
        let zone = self.surface.zone_rect();

        let origin = match self.config.positioning {
            Positioning::Fixed => {
                if !zone.contains(page_point.x, page_point.y) {
                    return;
                }
                to_parent_relative(zone.center(), bounds)
            }
            Positioning::Floating => {
                let contact = to_parent_relative(page_point, bounds);
                self.surface.place_zone(contact);
                contact
            }
        };

        self.session = Some(TouchSession {
            touch_id: id,
            origin,
        });
        self.surface.set_active(true);
        log::trace!("touch {id} started session at {origin:?}");
        self.emit(JoystickEvent::Pressed);
    }

    /// The tracked contact moved. Recomputes the control vector, updates the
    /// handle, and emits `Changed`. Moves from other contacts are ignored.
    pub fn touch_move(&mut self, id: TouchId, page_point: Point) {
        let Some(session) = self.session else {
            return;
        };
        if session.touch_id != id {
            return;
        }

        let bounds = self.surface.bounds_rect();
        let zone = self.surface.zone_rect();
        let radius_x = zone.width / 2.0;
        let radius_y = zone.height / 2.0;
        if radius_x <= 0.0 || radius_y <= 0.0 {
            log::warn!("joystick zone has zero size; dropping move");
            return;
        }

        let contact = to_parent_relative(page_point, bounds);
        let mut raw = contact - session.origin;
        match self.config.axis_lock {
            AxisLock::None => {}
            AxisLock::X => raw.y = 0.0,
            AxisLock::Y => raw.x = 0.0,
        }

        // Unclamped: a contact beyond the zone edge exceeds magnitude 1.
        let scaled = Offset::new(raw.x / radius_x, raw.y / radius_y);

        let limit = self.config.handle_limit;
        if self.config.following
            && self.config.positioning == Positioning::Floating
            && (scaled.x.abs() > limit || scaled.y.abs() > limit)
        {
            // The new origin applies to subsequent events only; this event's
            // vector was already computed against the old one.
            let origin = self.chase_origin(session.origin, scaled, radius_x, radius_y, bounds);
            self.surface.place_zone(origin);
            if let Some(session) = self.session.as_mut() {
                session.origin = origin;
            }
        }

        let clamped = if self.config.handle_round {
            scaled.clamp_length(limit)
        } else {
            scaled.clamp_axes(limit)
        };
        self.surface
            .place_handle(Offset::new(clamped.x * radius_x, clamped.y * radius_y));

        // Inversion affects the reported value only, never the handle.
        let reported = if self.config.invert_y {
            Offset::new(scaled.x, -scaled.y)
        } else {
            scaled
        };
        self.value = reported;
        self.emit(JoystickEvent::Changed(reported));
    }

    /// The tracked contact lifted. Ends the session and emits `Released` with
    /// the last reported vector. Ends from other contacts are ignored, as is
    /// an end with no session to match.
    pub fn touch_end(&mut self, id: TouchId) {
        let Some(session) = self.session else {
            return;
        };
        if session.touch_id != id {
            return;
        }

        self.session = None;
        self.surface.reset_handle();
        if self.config.positioning == Positioning::Fixed {
            self.surface.reset_zone();
        }
        self.surface.set_active(false);
        let last = self.value;
        self.emit(JoystickEvent::Released(last));
        self.value = Offset::ZERO;
        log::trace!("touch {id} ended session at {last:?}");
    }

    /// Host-interrupted contact (e.g. DOM `touchcancel`). The host's
    /// end-of-contact delivery, so it takes the same path as a lift.
    pub fn touch_cancel(&mut self, id: TouchId) {
        self.touch_end(id);
    }

    /// Origin that chases a contact past the handle limit: each axis moves by
    /// the excess over the limit, converted back to pixels.
    fn chase_origin(
        &self,
        origin: Point,
        scaled: Offset,
        radius_x: f32,
        radius_y: f32,
        bounds: Rect,
    ) -> Point {
        let limit = self.config.handle_limit;
        let excess = Offset::new(
            (scaled.x.abs() - limit).max(0.0) * scaled.x.signum() * radius_x,
            (scaled.y.abs() - limit).max(0.0) * scaled.y.signum() * radius_y,
        );
        let mut next = origin + excess;
        if self.config.limit_to_bounds {
            // Keep the whole zone inside the bounding area on both axes.
            next.x = next.x.clamp(radius_x, (bounds.width - radius_x).max(radius_x));
            next.y = next.y.clamp(radius_y, (bounds.height - radius_y).max(radius_y));
        }
        next
    }

    fn emit(&mut self, event: JoystickEvent) {
        self.listeners.emit(&event);
    }
}

fn to_parent_relative(point: Point, bounds: Rect) -> Point {
    Point::new(point.x - bounds.x, point.y - bounds.y)
}
