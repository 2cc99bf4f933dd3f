//! Scroll boundary detection for infinite loading.
//!
//! The watcher is told which row is currently last (after every render) and
//! which rows the viewport can see. When the last row becomes visible it
//! fires once; it re-arms only when a different row becomes last.

/// Identity of a rendered row: the city name plus its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub name: String,
    pub index: usize,
}

impl RowKey {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// Emitted when the last row comes into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryEvent {
    pub row: RowKey,
}

type BoundaryCallback = Box<dyn FnMut(&BoundaryEvent) + Send>;

#[derive(Default)]
pub struct ScrollBoundaryWatcher {
    boundary: Option<RowKey>,
    fired: bool,
    callbacks: Vec<BoundaryCallback>,
}

impl ScrollBoundaryWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback run every time the boundary is reached.
    pub fn on_boundary_reached<F>(&mut self, callback: F)
    where
        F: FnMut(&BoundaryEvent) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Attach to the row that is now last. A new identity re-arms the watcher.
    pub fn observe(&mut self, last_row: Option<RowKey>) {
        if self.boundary == last_row {
            return;
        }
        tracing::trace!(?last_row, "Scroll boundary moved");
        self.boundary = last_row;
        self.fired = false;
    }

    /// Allow the current boundary to fire again. Used when the request it
    /// triggered produced no rows, so the last row will not change.
    pub fn rearm(&mut self) {
        if self.fired {
            tracing::trace!(boundary = ?self.boundary, "Scroll boundary re-armed");
        }
        self.fired = false;
    }

    /// Report that `row` is visible. Returns the event if this reached the boundary.
    pub fn report_visible(&mut self, row: &RowKey) -> Option<BoundaryEvent> {
        if self.fired || self.boundary.as_ref() != Some(row) {
            return None;
        }

        self.fired = true;
        let event = BoundaryEvent { row: row.clone() };
        for callback in &mut self.callbacks {
            callback(&event);
        }
        Some(event)
    }

    pub fn boundary(&self) -> Option<&RowKey> {
        self.boundary.as_ref()
    }

    pub fn is_armed(&self) -> bool {
        self.boundary.is_some() && !self.fired
    }
}

impl std::fmt::Debug for ScrollBoundaryWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollBoundaryWatcher")
            .field("boundary", &self.boundary)
            .field("fired", &self.fired)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
