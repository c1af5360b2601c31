//! Sticky table headers for scrollable layouts.
//!
//! Keeps a table's header row visually pinned while the body scrolls,
//! across the window, a custom scrollable container, and an optional
//! independently-scrollable horizontal strip. The algorithm runs against
//! an abstract [`Surface`] capability, so it works with any host that can
//! clone a subtree, report live geometry, and write style properties.
//!
//! Wiring: implement [`Surface`], call [`Controller::attach`], forward
//! scroll/resize [`Signal`]s to [`Controller::handle_signal`], and call
//! [`Controller::tick`] once per frame/tick.

pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hscroll;
pub mod options;
pub mod scheduler;
pub mod surface;
pub mod types;
pub mod width;

pub use controller::{Controller, ControllerId, Stickiness};
pub use error::AttachError;
pub use event::{Notification, Signal, SignalKind, SignalSource};
pub use hscroll::HorizontalProxy;
pub use options::{FixedOffset, Options, ScrollArea};
pub use scheduler::{Scheduler, Task};
pub use surface::{NodeId, Subscription, Surface};
pub use types::*;
