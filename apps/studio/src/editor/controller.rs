//! Controlled-input state for the editor.
//!
//! The controller is stateless with respect to the document itself; the one
//! exception is the text being typed into the "add a skill" field, which is
//! not part of the document until submitted.

use crate::editor::commands::EditCommand;

#[derive(Debug, Default)]
pub struct EditorController {
    skill_draft: String,
}

impl EditorController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill_draft(&self) -> &str {
        &self.skill_draft
    }

    pub fn set_skill_draft(&mut self, text: impl Into<String>) {
        self.skill_draft = text.into();
    }

    /// Commits the pending skill input.
    ///
    /// Returns the `AddSkill` command and clears the draft only when the
    /// trimmed draft is non-empty; a whitespace-only draft stays put and
    /// nothing is emitted. The Enter-key path and the add-button path both
    /// route through here, so the two behave identically by construction.
    pub fn submit_skill(&mut self) -> Option<EditCommand> {
        if self.skill_draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.skill_draft);
        Some(EditCommand::AddSkill { text })
    }
}
