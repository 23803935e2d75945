//! Hardware timer capabilities.
//!
//! The driver never touches registers itself. A board hands it one timer latching echo
//! edges and one periodic timer ticking once per microsecond; tests hand it simulations.

use crate::config::WaitLimit;

/// A free-running timer latching its count on both edges of the echo signal.
pub trait EdgeCapture {
    /// Clear the capture event flag.
    fn clear_event(&mut self);

    /// True once an edge has been latched since the last `clear_event`.
    fn event_pending(&mut self) -> bool;

    /// The tick count latched by the most recent edge.
    fn captured_ticks(&mut self) -> u32;
}

/// A periodic timer whose period is exactly one microsecond.
pub trait PeriodicTimer {
    /// Reload and start counting.
    fn start(&mut self);

    /// True once a full period has elapsed since the last `clear_period`.
    fn period_elapsed(&mut self) -> bool;

    fn clear_period(&mut self);

    fn stop(&mut self);
}

/// A bounded wait ran out of polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout;

/// Spin until `ready` returns true.
///
/// With `WaitLimit::Polls(n)` `ready` is called at most `n` times before giving up.
/// `WaitLimit::Unbounded` never returns `Err`.
pub fn wait_until<F>(mut ready: F, limit: WaitLimit) -> Result<(), Timeout>
where
    F: FnMut() -> bool,
{
    match limit {
        WaitLimit::Unbounded => {
            while !ready() {
                core::hint::spin_loop();
            }
            Ok(())
        }
        WaitLimit::Polls(polls) => {
            for _ in 0..polls {
                if ready() {
                    return Ok(());
                }
                core::hint::spin_loop();
            }
            Err(Timeout)
        }
    }
}
