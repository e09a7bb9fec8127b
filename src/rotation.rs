use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use thiserror::Error;

/// How often the hero's role text advances.
pub const ROTATION_INTERVAL_MS: u64 = 2000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("Role rotation needs at least one role")]
    NoRoles,
}

/// Cycles through a fixed list of role strings, one step per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleRotation {
    roles: &'static [&'static str],
    index: usize,
}

impl RoleRotation {
    pub fn new(roles: &'static [&'static str]) -> Result<Self, RotationError> {
        if roles.is_empty() {
            return Err(RotationError::NoRoles);
        }
        Ok(Self { roles, index: 0 })
    }

    /// Rotation over a single role; the text never changes.
    pub fn single(role: &'static &'static str) -> Self {
        Self {
            roles: std::slice::from_ref(role),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        self.roles[self.index]
    }

    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.roles.len();
    }
}

/// Shared open/closed flag placed in front of a repeating callback.
///
/// A timer may still deliver a tick that was queued before it was stopped, so
/// the callback itself checks the gate and does nothing once it is closed.
#[derive(Debug, Clone)]
pub struct TickGate(Arc<AtomicBool>);

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TickGate {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Wraps `tick` so it only runs while the gate is open.
    pub fn guard<F>(&self, tick: F) -> impl Fn() + Clone + Send + Sync + 'static
    where
        F: Fn() + Clone + Send + Sync + 'static,
    {
        let gate = self.clone();
        move || {
            if gate.is_open() {
                tick();
            }
        }
    }

    /// Closes the gate, returning whether it was still open.
    fn close(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// Handle to a running repeating callback.
///
/// `cancel` consumes the handle: the gate closes and the timer's stop
/// function runs once.
pub struct TickHandle {
    gate: TickGate,
    stop: Box<dyn Fn() + Send + Sync>,
}

impl std::fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

impl TickHandle {
    pub fn new<S>(gate: TickGate, stop: S) -> Self
    where
        S: Fn() + Send + Sync + 'static,
    {
        Self {
            gate,
            stop: Box::new(stop),
        }
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_open()
    }

    pub fn cancel(self) {
        if self.gate.close() {
            (self.stop)();
        }
    }
}
