//! Joystick configuration record.
//!
//! A plain mutable record guarded only by the single-threaded execution
//! model: every field has a public setter on the controller and may change
//! mid-gesture without corrupting an in-progress session.

/// How the joystick origin relates to touch-down points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Positioning {
    /// The origin never moves. Only contacts landing inside the outer zone's
    /// current bounds start a session.
    Fixed,
    /// The origin snaps to wherever the contact lands.
    Floating,
}

/// Restricts raw input to a single axis before any further processing.
///
/// `X` passes horizontal movement and zeroes the vertical component of the
/// raw offset; `Y` is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisLock {
    None,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickConfig {
    pub positioning: Positioning,
    /// Visual distance, in outer-zone-radius units, at which the handle is
    /// considered at rest-limit. `1.0` is the edge of the outer zone.
    pub handle_limit: f32,
    /// `true` constrains the handle's visual displacement to a circular
    /// boundary of radius `handle_limit`; `false` clamps each axis
    /// independently (square boundary).
    pub handle_round: bool,
    pub axis_lock: AxisLock,
    /// In `Floating` positioning, drag the origin along once the raw offset
    /// exceeds `handle_limit`.
    pub following: bool,
    /// Flips the sign of the reported vertical value only; handle placement
    /// is unaffected.
    pub invert_y: bool,
    /// Keeps origin repositioning performed by `following` inside the
    /// bounding parent area.
    pub limit_to_bounds: bool,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            positioning: Positioning::Fixed,
            handle_limit: 1.0,
            handle_round: true,
            axis_lock: AxisLock::None,
            following: false,
            invert_y: false,
            limit_to_bounds: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = JoystickConfig::default();
        assert_eq!(config.positioning, Positioning::Fixed);
        assert_eq!(config.handle_limit, 1.0);
        assert!(config.handle_round);
        assert_eq!(config.axis_lock, AxisLock::None);
        assert!(!config.following);
        assert!(!config.invert_y);
        assert!(config.limit_to_bounds);
    }

    #[test]
    fn partial_override_merges_over_defaults() {
        let config = JoystickConfig {
            positioning: Positioning::Floating,
            following: true,
            ..Default::default()
        };
        assert_eq!(config.positioning, Positioning::Floating);
        assert!(config.following);
        assert!(config.handle_round);
        assert!(config.limit_to_bounds);
    }
}
