//! Test doubles for exercising the joystick core without a DOM.
//!
//! [`RecordingSurface`] plays the visual-surface role with scriptable
//! geometry and a command log; [`EventLog`] captures emitted notifications.
//! Both hand out clones sharing the same state, so tests keep a handle to
//! inspect after moving the other into a controller.

use std::cell::RefCell;
use std::rc::Rc;

use thumbpad_core::{JoystickEvent, VisualSurface};
use thumbpad_geometry::{Offset, Point, Rect, Size};

/// Everything a controller asked the surface to do, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    PlaceZone(Point),
    ResetZone,
    PlaceHandle(Offset),
    ResetHandle,
    SetActive(bool),
}

#[derive(Debug)]
struct SurfaceState {
    zone: Rect,
    rest_zone: Rect,
    handle: Rect,
    bounds: Rect,
    commands: Vec<SurfaceCommand>,
}

/// A [`VisualSurface`] that records commands and keeps its zone rect
/// consistent with placement, the way a real DOM zone would move.
#[derive(Clone)]
pub struct RecordingSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl RecordingSurface {
    pub fn new(zone: Rect, bounds: Rect) -> Self {
        let handle = Rect::from_center_size(zone.center(), Size::ZERO);
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                zone,
                rest_zone: zone,
                handle,
                bounds,
                commands: Vec::new(),
            })),
        }
    }

    /// Overrides the zone rect, simulating a layout/responsive resize
    /// between events.
    pub fn set_zone_rect(&self, rect: Rect) {
        self.state.borrow_mut().zone = rect;
    }

    pub fn set_bounds_rect(&self, rect: Rect) {
        self.state.borrow_mut().bounds = rect;
    }

    pub fn commands(&self) -> Vec<SurfaceCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    pub fn last_handle_offset(&self) -> Option<Offset> {
        self.state
            .borrow()
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                SurfaceCommand::PlaceHandle(offset) => Some(*offset),
                _ => None,
            })
    }

    pub fn last_zone_center(&self) -> Option<Point> {
        self.state
            .borrow()
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                SurfaceCommand::PlaceZone(center) => Some(*center),
                _ => None,
            })
    }

    pub fn is_marked_active(&self) -> bool {
        self.state
            .borrow()
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                SurfaceCommand::SetActive(active) => Some(*active),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl VisualSurface for RecordingSurface {
    fn zone_rect(&self) -> Rect {
        self.state.borrow().zone
    }

    fn handle_rect(&self) -> Rect {
        self.state.borrow().handle
    }

    fn bounds_rect(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn place_zone(&mut self, center: Point) {
        let mut state = self.state.borrow_mut();
        // Parent-relative center back to page space, like a real zone moving
        // within its container.
        let page_center = Point::new(center.x + state.bounds.x, center.y + state.bounds.y);
        let size = Size::new(state.zone.width, state.zone.height);
        state.zone = Rect::from_center_size(page_center, size);
        state.commands.push(SurfaceCommand::PlaceZone(center));
    }

    fn reset_zone(&mut self) {
        let mut state = self.state.borrow_mut();
        state.zone = state.rest_zone;
        state.commands.push(SurfaceCommand::ResetZone);
    }

    fn place_handle(&mut self, offset: Offset) {
        self.state
            .borrow_mut()
            .commands
            .push(SurfaceCommand::PlaceHandle(offset));
    }

    fn reset_handle(&mut self) {
        self.state.borrow_mut().commands.push(SurfaceCommand::ResetHandle);
    }

    fn set_active(&mut self, active: bool) {
        self.state
            .borrow_mut()
            .commands
            .push(SurfaceCommand::SetActive(active));
    }
}

/// Collects every notification a controller emits.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<JoystickEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener to hand to [`thumbpad_core::JoystickController::on_event`].
    pub fn listener(&self) -> impl FnMut(&JoystickEvent) + 'static {
        let events = self.events.clone();
        move |event: &JoystickEvent| events.borrow_mut().push(*event)
    }

    pub fn events(&self) -> Vec<JoystickEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
