//! The page's one repeating timer.
//!
//! At most one interval is live per handle. Starting cancels any previous
//! interval before installing the replacement, so overlapping tick callbacks
//! cannot happen; dropping the `gloo_timers` interval clears the underlying
//! browser timer. The non-hydrate fallback tracks only liveness, which is
//! all the native tests need.

#[cfg(not(feature = "hydrate"))]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

/// Tick period in milliseconds.
pub const TICK_MS: u32 = 1_000;

/// Cloneable handle owning the page's single repeating interval.
#[derive(Clone)]
pub struct Ticker {
    #[cfg(feature = "hydrate")]
    interval: Rc<RefCell<Option<Interval>>>,
    #[cfg(not(feature = "hydrate"))]
    active: Rc<Cell<bool>>,
}

impl Default for Ticker {
    fn default() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { interval: Rc::new(RefCell::new(None)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { active: Rc::new(Cell::new(false)) }
        }
    }
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback` on a one-second interval, cancelling any prior one.
    pub fn start(&self, callback: impl FnMut() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            self.interval.borrow_mut().take();
            *self.interval.borrow_mut() = Some(Interval::new(TICK_MS, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
            self.active.set(true);
        }
    }

    /// Cancel the live interval, if any. Idempotent.
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.interval.borrow_mut().take();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.active.set(false);
        }
    }

    /// Whether an interval is currently live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.interval.borrow().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.active.get()
        }
    }
}
