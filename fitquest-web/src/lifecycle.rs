//! Per-screen lifetime helpers that do not depend on the renderer.

use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the screen that started an async task is still mounted.
///
/// Every state update after an await must check [`MountGuard::is_mounted`];
/// results that arrive after the screen was torn down are dropped.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

/// Simulated loading progress shown while a screen fetches its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressMeter {
    percent: u8,
}

impl ProgressMeter {
    pub const STEP: u8 = 10;
    pub const TICK_MILLIS: u32 = 300;

    pub fn percent(self) -> u8 {
        self.percent
    }

    /// Advance one step, capped at 100.
    #[must_use]
    pub fn tick(self) -> Self {
        Self {
            percent: self.percent.saturating_add(Self::STEP).min(100),
        }
    }

    #[must_use]
    pub fn complete(self) -> Self {
        Self { percent: 100 }
    }
}
