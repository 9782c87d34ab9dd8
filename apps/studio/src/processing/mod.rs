// Processing: the staged/processing/complete state machine behind the
// progress screen, and the cancellable timer task that drives it. The steps
// are scripted; no real work happens between ticks.

pub mod machine;
pub mod ticker;

pub use machine::{ProcessingMachine, ProcessingState};
pub use ticker::ProcessingRun;

/// One row of the progress screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// The scripted enhancement pipeline, in display order.
pub const ENHANCEMENT_STEPS: &[StepInfo] = &[
    StepInfo {
        name: "File Processing",
        description: "Extracting content from your CV",
    },
    StepInfo {
        name: "AI Enhancement",
        description: "Improving content with GPT-4",
    },
    StepInfo {
        name: "Content Optimization",
        description: "Optimizing with Claude AI",
    },
    StepInfo {
        name: "Final Formatting",
        description: "Applying EHS standards",
    },
    StepInfo {
        name: "Quality Check",
        description: "Final review and validation",
    },
];
