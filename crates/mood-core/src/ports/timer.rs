use std::time::Duration;

use crate::ports::errors::TimerError;
use crate::splash::TimerId;

/// Single-shot deferred callbacks.
///
/// A fired timer is delivered back to the flow as an event carrying its
/// `TimerId`. Scheduling an id that is already pending replaces it.
pub trait TimerPort: Send + Sync {
    fn schedule(&self, timer: TimerId, delay: Duration) -> Result<(), TimerError>;

    /// Cancel a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&self, timer: TimerId);
}
