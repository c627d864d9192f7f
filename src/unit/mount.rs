//! Mount lifetime tracking
//!
//! A unit's fetch outlives nothing it does not own: the view hands a
//! [`MountToken`] to the in-flight request and tears the [`Mount`] down when it
//! goes away. A completion holding a dead token is dropped instead of being
//! written into state. The request itself keeps running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owner side of a mount
#[derive(Debug, Clone)]
pub struct Mount {
    alive: Arc<AtomicBool>,
}

/// Handle carried by an in-flight fetch
#[derive(Debug, Clone)]
pub struct MountToken {
    alive: Arc<AtomicBool>,
}

impl Mount {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Mark the view as gone; outstanding tokens stop being live
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl MountToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}
