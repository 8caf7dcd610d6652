//! Joystick notifications and the listener registry.

use smallvec::SmallVec;
use thumbpad_geometry::Offset;

/// Notification published by a [`crate::JoystickController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEvent {
    /// A touch session began.
    Pressed,
    /// The tracked contact moved. Carries the reported (unclamped,
    /// post-invert) vector.
    Changed(Offset),
    /// The session ended. Carries the final reported vector, before the
    /// current value resets to zero.
    Released(Offset),
}

/// Handle returned by a subscription, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&JoystickEvent)>;

/// Owned publish/subscribe registry, one per controller.
///
/// Most joysticks have a single consumer, so listeners live inline until a
/// second one shows up.
pub(crate) struct ListenerRegistry {
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self {
            listeners: SmallVec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` when the id was already gone.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: &JoystickEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
