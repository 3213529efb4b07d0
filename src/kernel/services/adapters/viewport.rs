//! Live viewport classification for the terminal host.
//!
//! The signal owns the latest `ViewportState`; each mounted consumer holds a
//! `ViewportSubscription` and polls it from its own loop. Dropping the
//! subscription releases it.

use tokio::sync::watch;

use crate::kernel::viewport::ViewportState;

const DEFAULT_CELL_WIDTH_PX: u32 = 8;

pub struct ViewportSignal {
    tx: watch::Sender<ViewportState>,
    cell_width_px: u32,
}

pub struct ViewportSubscription {
    rx: watch::Receiver<ViewportState>,
}

impl ViewportSignal {
    fn with_state(state: ViewportState, cell_width_px: u32) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            cell_width_px: cell_width_px.max(1),
        }
    }

    /// Nothing to measure: wide, until the first resize arrives.
    pub fn headless() -> Self {
        Self::with_state(ViewportState::headless(), DEFAULT_CELL_WIDTH_PX)
    }

    pub fn measured(width_px: u32) -> Self {
        Self::with_state(ViewportState::measured(width_px), DEFAULT_CELL_WIDTH_PX)
    }

    pub fn from_terminal_columns(columns: u16, cell_width_px: u32) -> Self {
        let cell_width_px = cell_width_px.max(1);
        Self::with_state(
            ViewportState::measured(u32::from(columns) * cell_width_px),
            cell_width_px,
        )
    }

    pub fn current(&self) -> ViewportState {
        *self.tx.borrow()
    }

    pub fn narrow(&self) -> bool {
        self.tx.borrow().narrow
    }

    /// Publishes only when the narrow/wide classification flips.
    pub fn on_resize(&self, width_px: u32) -> bool {
        let next = ViewportState::measured(width_px);
        self.tx.send_if_modified(|state| {
            if state.narrow == next.narrow {
                state.width_px = next.width_px;
                false
            } else {
                *state = next;
                true
            }
        })
    }

    pub fn on_terminal_resize(&self, columns: u16) -> bool {
        self.on_resize(u32::from(columns) * self.cell_width_px)
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscribers(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl ViewportSubscription {
    pub fn current(&self) -> ViewportState {
        *self.rx.borrow()
    }

    /// Yields the new state once per classification change.
    pub fn poll_changed(&mut self) -> Option<ViewportState> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/viewport.rs"]
mod tests;
