//! The processing state machine, kept pure and clock-free so every
//! transition is testable without a runtime. The ticker owns the clock.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// UI-mode state for the upload-and-enhance flow.
///
/// `Processing` carries the index of the step currently running. `Complete`
/// is terminal: nothing leaves it except a full `reset` (navigate back).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ProcessingState {
    Idle,
    Uploading,
    Processing { step: usize },
    Complete,
}

impl ProcessingState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessingState::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingMachine {
    state: ProcessingState,
    step_count: usize,
}

impl ProcessingMachine {
    pub fn new(step_count: usize) -> Self {
        Self {
            state: ProcessingState::Idle,
            step_count,
        }
    }

    pub fn state(&self) -> &ProcessingState {
        &self.state
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// A file has been selected but not yet confirmed.
    pub fn stage(&mut self) {
        if self.state == ProcessingState::Idle {
            self.state = ProcessingState::Uploading;
        }
    }

    /// The staged file was removed before confirming.
    pub fn unstage(&mut self) {
        if self.state == ProcessingState::Uploading {
            self.state = ProcessingState::Idle;
        }
    }

    /// Upload confirmed; processing starts at step 0. Landing on the final
    /// step index already counts as completion, so a pipeline of zero or
    /// one steps completes immediately.
    pub fn confirm(&mut self) {
        if self.state == ProcessingState::Uploading {
            self.state = if self.step_count <= 1 {
                ProcessingState::Complete
            } else {
                ProcessingState::Processing { step: 0 }
            };
        }
    }

    /// Advances one step. Steps are strictly sequential and monotonic:
    /// each tick moves to the next index, and reaching the final index
    /// flips to `Complete`. Ticks in any other state are inert.
    pub fn tick(&mut self) {
        if let ProcessingState::Processing { step } = self.state {
            let next = step + 1;
            // step_count >= 2 whenever we are in Processing, see confirm()
            self.state = if next >= self.step_count - 1 {
                ProcessingState::Complete
            } else {
                ProcessingState::Processing { step: next }
            };
        }
    }

    /// Full reset back to `Idle`; the only exit from `Complete`.
    pub fn reset(&mut self) {
        self.state = ProcessingState::Idle;
    }

    /// Fraction of the pipeline considered done, for the progress bar.
    pub fn progress(&self) -> f32 {
        match self.state {
            ProcessingState::Processing { step } => (step + 1) as f32 / self.step_count as f32,
            ProcessingState::Complete => 1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmed(step_count: usize) -> ProcessingMachine {
        let mut machine = ProcessingMachine::new(step_count);
        machine.stage();
        machine.confirm();
        machine
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_eq!(*ProcessingMachine::new(5).state(), ProcessingState::Idle);
    }

    #[test]
    fn test_stage_then_unstage() {
        let mut machine = ProcessingMachine::new(5);
        machine.stage();
        assert_eq!(*machine.state(), ProcessingState::Uploading);
        machine.unstage();
        assert_eq!(*machine.state(), ProcessingState::Idle);
    }

    #[test]
    fn test_confirm_requires_staged_file() {
        let mut machine = ProcessingMachine::new(5);
        machine.confirm();
        assert_eq!(*machine.state(), ProcessingState::Idle);
    }

    #[test]
    fn test_five_steps_complete_after_four_ticks() {
        let mut machine = confirmed(5);
        assert_eq!(*machine.state(), ProcessingState::Processing { step: 0 });

        let mut seen = Vec::new();
        for _ in 0..4 {
            machine.tick();
            seen.push(machine.state().clone());
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

    #[test]
    fn test_tick_after_complete_is_inert() {
        let mut machine = confirmed(5);
        for _ in 0..10 {
            machine.tick();
        }
        assert_eq!(*machine.state(), ProcessingState::Complete);
    }

    #[test]
    fn test_tick_is_inert_outside_processing() {
        let mut machine = ProcessingMachine::new(5);
        machine.tick();
        assert_eq!(*machine.state(), ProcessingState::Idle);
        machine.stage();
        machine.tick();
        assert_eq!(*machine.state(), ProcessingState::Uploading);
    }

    #[test]
    fn test_single_step_pipeline_completes_on_confirm() {
        let machine = confirmed(1);
        assert_eq!(*machine.state(), ProcessingState::Complete);
    }

    #[test]
    fn test_reset_is_the_only_exit_from_complete() {
        let mut machine = confirmed(5);
        for _ in 0..4 {
            machine.tick();
        }
        assert!(machine.state().is_terminal());
        machine.stage();
        machine.confirm();
        assert_eq!(*machine.state(), ProcessingState::Complete);
        machine.reset();
        assert_eq!(*machine.state(), ProcessingState::Idle);
    }

    #[test]
    fn test_progress_fraction() {
        let mut machine = confirmed(5);
        assert!((machine.progress() - 0.2).abs() < f32::EPSILON);
        machine.tick();
        assert!((machine.progress() - 0.4).abs() < f32::EPSILON);
        for _ in 0..3 {
            machine.tick();
        }
        assert!((machine.progress() - 1.0).abs() < f32::EPSILON);
    }
}
