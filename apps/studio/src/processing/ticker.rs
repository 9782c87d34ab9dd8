//! The timer behind the progress screen, as an explicit cancellable task.
//!
//! Each tick advances the machine one step and publishes the new state on a
//! watch channel; between ticks the task is parked and the rest of the
//! session stays responsive. The task ends itself once the machine is
//! terminal, and `stop` (or dropping the run) aborts it, so no state can be
//! mutated after the run is discarded.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::processing::machine::{ProcessingMachine, ProcessingState};

pub struct ProcessingRun {
    receiver: watch::Receiver<ProcessingState>,
    handle: JoinHandle<()>,
}

impl ProcessingRun {
    /// Starts ticking `machine` every `interval`, publishing each state.
    pub fn spawn(mut machine: ProcessingMachine, interval: Duration) -> Self {
        let (tx, receiver) = watch::channel(machine.state().clone());

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // the first interval tick fires immediately; consume it so the
            // first step transition lands one full interval after spawn
            ticker.tick().await;

            while !machine.state().is_terminal() {
                ticker.tick().await;
                machine.tick();
                debug!("processing advanced to {:?}", machine.state());
                if tx.send(machine.state().clone()).is_err() {
                    // every receiver is gone; nobody is watching anymore
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    /// A receiver for state updates. Holds the latest value; awaiting
    /// `changed` on it fails once the run has finished or been stopped.
    pub fn subscribe(&self) -> watch::Receiver<ProcessingState> {
        self.receiver.clone()
    }

    /// The most recently published state.
    pub fn latest(&self) -> ProcessingState {
        self.receiver.borrow().clone()
    }

    /// First-class teardown: aborts the timer task. After this returns no
    /// further state is published.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ProcessingRun {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed_machine(step_count: usize) -> ProcessingMachine {
        let mut machine = ProcessingMachine::new(step_count);
        machine.stage();
        machine.confirm();
        machine
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_every_step_then_completes() {
        let run = ProcessingRun::spawn(confirmed_machine(5), Duration::from_secs(1));
        let mut rx = run.subscribe();
        assert_eq!(*rx.borrow(), ProcessingState::Processing { step: 0 });

        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            let terminal = state.is_terminal();
            seen.push(state);
            if terminal {
                break;
            }
        }
        assert_eq!(
            seen,
            vec![
                ProcessingState::Processing { step: 1 },
                ProcessingState::Processing { step: 2 },
                ProcessingState::Processing { step: 3 },
                ProcessingState::Complete,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_updates_after_complete() {
        let run = ProcessingRun::spawn(confirmed_machine(5), Duration::from_secs(1));
        let mut rx = run.subscribe();
        while rx.changed().await.is_ok() {
            if rx.borrow_and_update().is_terminal() {
                break;
            }
        }
        // the task exits at Complete and drops its sender; the timer is inert
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_tears_down_the_timer() {
        let run = ProcessingRun::spawn(confirmed_machine(5), Duration::from_secs(1));
        let mut rx = run.subscribe();

        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow_and_update(),
            ProcessingState::Processing { step: 1 }
        );

        run.stop();
        // no state mutation after disposal: the channel closes without
        // another value
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_like_stop() {
        let run = ProcessingRun::spawn(confirmed_machine(5), Duration::from_secs(1));
        let mut rx = run.subscribe();
        drop(run);
        assert!(rx.changed().await.is_err());
    }
}
