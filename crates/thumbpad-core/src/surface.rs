//! Visual surface contract the controller renders through.

use thumbpad_geometry::{Offset, Point, Rect};

/// Presentation-side collaborator of a [`crate::JoystickController`].
///
/// The controller only computes; everything visible goes through this trait.
/// All rectangle queries are in the shared page coordinate space and are
/// re-queried on every event: zone size may change between events (layout or
/// responsive resize), so implementations must not expect caching.
///
/// Placement commands use parent-relative coordinates: `place_zone` receives
/// the desired center of the outer zone within the bounding area, and
/// `place_handle` receives the handle's pixel offset from the zone center.
pub trait VisualSurface {
    /// Bounding rectangle of the outer zone.
    fn zone_rect(&self) -> Rect;

    /// Bounding rectangle of the inner handle.
    fn handle_rect(&self) -> Rect;

    /// Bounding rectangle of the parent area the zone may move within.
    fn bounds_rect(&self) -> Rect;

    /// Places the outer zone so its center sits at `center`.
    fn place_zone(&mut self, center: Point);

    /// Returns the outer zone to its rest center.
    fn reset_zone(&mut self);

    /// Places the inner handle `offset` pixels from the zone center.
    fn place_handle(&mut self, offset: Offset);

    /// Returns the inner handle to the zone center.
    fn reset_handle(&mut self);

    /// Toggles the active/inactive visual indicator.
    fn set_active(&mut self, active: bool);
}
