//! Engine lifecycle state machine
//!
//! ```text
//! Unloaded --Load--> Loaded --ApplyOverrides--> OverrideApplied
//! ```
//!
//! Every other transition is rejected. `OverrideApplied` is terminal: the
//! override set is merged at most once over the engine's lifetime, even if
//! new overrides are installed afterwards.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleState {
    /// Bootstrap source not loaded yet
    Unloaded = 0,
    /// Property table populated; no override merged
    Loaded = 1,
    /// Override set merged; terminal
    OverrideApplied = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Load,
    ApplyOverrides,
}

impl LifecycleState {
    /// The transition function; `None` when `event` is not allowed in `self`
    pub fn next(self, event: LifecycleEvent) -> Option<LifecycleState> {
        match (self, event) {
            (LifecycleState::Unloaded, LifecycleEvent::Load) => Some(LifecycleState::Loaded),
            (LifecycleState::Loaded, LifecycleEvent::ApplyOverrides) => {
                Some(LifecycleState::OverrideApplied)
            }
            _ => None,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LifecycleState::Unloaded,
            1 => LifecycleState::Loaded,
            _ => LifecycleState::OverrideApplied,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Unloaded => write!(f, "unloaded"),
            LifecycleState::Loaded => write!(f, "loaded"),
            LifecycleState::OverrideApplied => write!(f, "override-applied"),
        }
    }
}

/// Atomic holder of a [`LifecycleState`]
#[derive(Debug)]
pub struct Lifecycle {
    state: AtomicU8,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(LifecycleState::Unloaded as u8),
        }
    }

    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Applies `event` with a single compare-and-set
    ///
    /// Under concurrent calls with the same event exactly one caller gets
    /// `Ok`; the others get `Err` with the state they observed.
    pub fn transition(&self, event: LifecycleEvent) -> Result<LifecycleState, LifecycleState> {
        let current = self.state();
        let next = current.next(event).ok_or(current)?;

        self.state
            .compare_exchange(
                current as u8,
                next as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map(|_| next)
            .map_err(LifecycleState::from_u8)
    }
}
