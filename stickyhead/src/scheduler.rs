//! Coalescing scheduler for scroll/resize bursts.
//!
//! Each incoming signal marks a pending task slot; marking an
//! already-pending slot replaces it. The host's tick cadence is the clock:
//! one [`Controller::tick`](crate::Controller::tick) drains the slots and
//! runs each task kind at most once, regardless of how many signals
//! arrived since the previous tick.

/// Deferred recomputations, drained in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Re-evaluate geometry and drive state transitions.
    Toggle,
    /// Re-measure and re-apply mirrored column widths.
    Width,
    /// Re-derive the header's absolute top/left from window scroll.
    Position,
}

/// Pending-task slots. One per task kind; scheduling is idempotent.
#[derive(Debug, Default)]
pub struct Scheduler {
    toggle: bool,
    width: bool,
    position: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a task pending for the next tick.
    pub fn schedule(&mut self, task: Task) {
        match task {
            Task::Toggle => self.toggle = true,
            Task::Width => self.width = true,
            Task::Position => self.position = true,
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.toggle || self.width || self.position)
    }

    /// Take all pending tasks, in execution order: toggle first (it may
    /// change state the others depend on), then width, then position.
    pub fn drain(&mut self) -> Vec<Task> {
        let mut tasks = Vec::new();
        if self.toggle {
            tasks.push(Task::Toggle);
        }
        if self.width {
            tasks.push(Task::Width);
        }
        if self.position {
            tasks.push(Task::Position);
        }
        self.toggle = false;
        self.width = false;
        self.position = false;
        tasks
    }

    /// Drop all pending tasks without running them.
    pub fn clear(&mut self) {
        self.toggle = false;
        self.width = false;
        self.position = false;
    }
}
