//! Web platform adapter for Thumbpad.
//!
//! [`WebSurface`] satisfies the core's visual-surface contract over three DOM
//! elements; [`TouchBridge`] feeds DOM touch events into a controller. Both
//! are presentation plumbing: all joystick logic stays in `thumbpad-core`.

mod bridge;
mod surface;

pub use bridge::TouchBridge;
pub use surface::WebSurface;
