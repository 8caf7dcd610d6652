//! Touch-driven virtual joystick core.
//!
//! [`JoystickController`] tracks a single touch contact and turns raw touch
//! coordinates into a normalized 2-D offset vector relative to a configurable
//! center point, emitting pressed/changed/released notifications as the
//! contact moves. It never draws: geometry queries and placement commands go
//! through the [`VisualSurface`] trait, satisfied by a thin adapter outside
//! this crate (see `thumbpad-platform-web`).

mod config;
mod controller;
mod events;
mod surface;

pub use config::{AxisLock, JoystickConfig, Positioning};
pub use controller::{JoystickController, TouchId};
pub use events::{JoystickEvent, ListenerId};
pub use surface::VisualSurface;

// Re-export the geometry vocabulary so consumers only need this crate.
pub use thumbpad_geometry::{Offset, Point, Rect, Size};
