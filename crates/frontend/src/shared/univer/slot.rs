//! Single-instance holder for the spreadsheet widget.
//!
//! New data arrives while an older mount may still be scheduled for the next
//! animation frame. Every `invalidate` disposes the live instance and hands
//! out a fresh ticket; only the holder of the newest ticket may install an
//! instance. Anything built with a stale ticket is disposed on arrival, so at
//! most one widget is ever attached to the container.

/// A mounted widget that must be torn down explicitly
pub trait WidgetInstance {
    fn dispose(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Debug)]
pub struct WidgetSlot<W: WidgetInstance> {
    generation: u64,
    current: Option<W>,
}

impl<W: WidgetInstance> Default for WidgetSlot<W> {
    fn default() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }
}

impl<W: WidgetInstance> WidgetSlot<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the live instance and invalidate every outstanding ticket.
    pub fn invalidate(&mut self) -> MountTicket {
        self.dispose_current();
        self.generation += 1;
        MountTicket(self.generation)
    }

    pub fn is_current(&self, ticket: MountTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Keep `instance` if `ticket` is still the newest one. A stale instance is
    /// disposed immediately and `false` is returned.
    pub fn install(&mut self, ticket: MountTicket, instance: W) -> bool {
        if !self.is_current(ticket) {
            instance.dispose();
            return false;
        }
        self.dispose_current();
        self.current = Some(instance);
        true
    }

    /// Teardown: dispose and refuse any mount still in flight.
    pub fn dispose(&mut self) {
        self.dispose_current();
        self.generation += 1;
    }

    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    fn dispose_current(&mut self) {
        if let Some(instance) = self.current.take() {
            instance.dispose();
        }
    }
}
