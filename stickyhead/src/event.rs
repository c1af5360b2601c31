//! Signals delivered by the host and notifications emitted back to it.

use crate::surface::NodeId;

/// What kind of layout signal occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Scroll,
    Resize,
}

/// Where a signal originated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalSource {
    /// The window itself scrolled or resized.
    Window,
    /// A specific element scrolled or resized.
    Node(NodeId),
}

/// A scroll/resize signal routed from the host to a controller.
///
/// The host is expected to deliver every signal matching one of the
/// controller's registered subscriptions, then call
/// [`Controller::tick`](crate::Controller::tick) once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub source: SignalSource,
    pub kind: SignalKind,
}

impl Signal {
    pub fn scroll(source: SignalSource) -> Self {
        Self {
            source,
            kind: SignalKind::Scroll,
        }
    }

    pub fn resize(source: SignalSource) -> Self {
        Self {
            source,
            kind: SignalKind::Resize,
        }
    }
}

/// Notifications emitted to the host.
///
/// Each fires exactly once per corresponding event, never on no-op
/// re-evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The floating clone was created. Carries the clone so the host can
    /// post-process it (styling hooks, etc.).
    CloneCreated(NodeId),
    /// The header just switched from static to fixed positioning.
    StickinessEnabled,
    /// The header just reverted to static positioning.
    StickinessDisabled,
}
