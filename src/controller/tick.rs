//! Timer tick hand-off.

use portable_atomic::{AtomicBool, Ordering};

/// The only state a timer interrupt may touch.
///
/// The interrupt calls [`signal`](Self::signal); the main loop consumes the
/// tick with [`take`](Self::take). Phase counters, edge state and coil
/// outputs stay in the main loop.
///
/// ```rust
/// use stepper_jog::controller::TickFlag;
///
/// static TICK: TickFlag = TickFlag::new();
///
/// TICK.signal();
/// assert!(TICK.take());
/// assert!(!TICK.take());
/// ```
#[derive(Debug, Default)]
pub struct TickFlag {
    pending: AtomicBool,
}

impl TickFlag {
    /// Create a flag with no tick pending.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a tick as pending. Safe to call from an interrupt handler.
    #[inline]
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Whether a tick is pending, without consuming it.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consume a pending tick.
    ///
    /// Ticks are not counted: several signals before one `take` collapse
    /// into a single tick.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}
