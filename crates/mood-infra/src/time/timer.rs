use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use mood_core::ports::{TimerError, TimerPort};
use mood_core::TimerId;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

type PendingTimers = HashMap<TimerId, (u64, AbortHandle)>;

/// Tokio-backed single-shot timers.
///
/// Each scheduled timer is a spawned task that sleeps and then sends its
/// `TimerId` on `fired_tx`. Rescheduling an id aborts the previous task.
pub struct TokioTimer {
    fired_tx: UnboundedSender<TimerId>,
    pending: Arc<Mutex<PendingTimers>>,
    generation: Mutex<u64>,
}

impl TokioTimer {
    pub fn new(fired_tx: UnboundedSender<TimerId>) -> Self {
        Self {
            fired_tx,
            pending: Arc::new(Mutex::new(HashMap::new())),
            generation: Mutex::new(0),
        }
    }

    fn pending(&self) -> MutexGuard<'_, PendingTimers> {
        lock(&self.pending)
    }

    fn next_generation(&self) -> u64 {
        let mut generation = self
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *generation += 1;
        *generation
    }
}

fn lock(pending: &Mutex<PendingTimers>) -> MutexGuard<'_, PendingTimers> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TimerPort for TokioTimer {
    fn schedule(&self, timer: TimerId, delay: Duration) -> Result<(), TimerError> {
        let handle = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        let generation = self.next_generation();
        let pending = Arc::clone(&self.pending);
        let fired_tx = self.fired_tx.clone();

        let mut pending_guard = self.pending();
        if let Some((_, existing)) = pending_guard.remove(&timer) {
            existing.abort();
        }

        let task = handle.spawn(async move {
            sleep(delay).await;
            {
                let mut pending_guard = lock(&pending);
                if matches!(pending_guard.get(&timer), Some((g, _)) if *g == generation) {
                    pending_guard.remove(&timer);
                }
            }
            if fired_tx.send(timer).is_err() {
                debug!(?timer, "timer fired after receiver closed");
            }
        });

        pending_guard.insert(timer, (generation, task.abort_handle()));
        debug!(?timer, delay_ms = delay.as_millis() as u64, "timer scheduled");
        Ok(())
    }

    fn cancel(&self, timer: TimerId) {
        if let Some((_, handle)) = self.pending().remove(&timer) {
            handle.abort();
            debug!(?timer, "timer cancelled");
        }
    }
}
