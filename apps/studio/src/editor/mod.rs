// Editor: typed edit events, the single reducer that applies them, and the
// controller owning the one piece of transient input state (the skill draft).

pub mod commands;
pub mod controller;

pub use commands::{apply, EditCommand};
pub use controller::EditorController;
