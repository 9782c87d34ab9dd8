//! The session controller: single owner of the authoritative document and of
//! the screen switch.
//!
//! Which screen is shown is an explicit state machine (`Screen`), not an
//! implicit product of scattered flags; each screen renders as a pure
//! function of that enum plus the current document. The document is handed
//! to the preview by reference and replaced wholesale on every edit, never
//! aliased for concurrent writes.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::document::CvDocument;
use crate::editor::{apply, EditCommand, EditorController};
use crate::enhance::Enhancer;
use crate::errors::SessionError;
use crate::preview::{render_preview, RenderedPreview};
use crate::processing::{ProcessingMachine, ProcessingRun, ProcessingState, ENHANCEMENT_STEPS};
use crate::upload::UploadedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceTab {
    Preview,
    Edit,
}

/// The three screens of the flow, in the order a session moves through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Processing,
    Workspace { tab: WorkspaceTab },
}

pub struct Session {
    id: Uuid,
    /// Wall-clock session start, surfaced in the startup log.
    #[allow(dead_code)]
    started_at: DateTime<Utc>,
    screen: Screen,
    document: CvDocument,
    /// Enhanced document held back until the progress run finishes.
    pending_document: Option<CvDocument>,
    staged: Option<UploadedFile>,
    editor: EditorController,
    run: Option<ProcessingRun>,
    enhancer: Arc<dyn Enhancer>,
    step_interval: Duration,
}

impl Session {
    pub fn new(config: &Config, enhancer: Arc<dyn Enhancer>) -> Self {
        let id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("session {id} started at {started_at}");
        Self {
            id,
            started_at,
            screen: Screen::Home,
            document: CvDocument::default(),
            pending_document: None,
            staged: None,
            editor: EditorController::new(),
            run: None,
            enhancer,
            step_interval: config.step_interval(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn staged(&self) -> Option<&UploadedFile> {
        self.staged.as_ref()
    }

    pub fn preview(&self) -> RenderedPreview {
        render_preview(&self.document)
    }

    // ── upload and processing ───────────────────────────────────────────────

    /// Stages a file selection on the home screen. Re-staging replaces the
    /// previous selection.
    pub fn stage_upload(
        &mut self,
        file_name: impl Into<String>,
        payload: Bytes,
    ) -> Result<(), SessionError> {
        let file = UploadedFile::new(file_name, payload)?;
        info!(
            "staged '{}' ({} MB) for session {}",
            file.file_name,
            file.size_mb(),
            self.id
        );
        self.staged = Some(file);
        Ok(())
    }

    pub fn discard_upload(&mut self) {
        if self.staged.take().is_some() {
            debug!("staged upload discarded");
        }
    }

    /// Confirms the staged upload: runs the enhancer, holds its result back,
    /// and starts the progress run. Returns a receiver of state updates for
    /// the front end to watch.
    pub async fn confirm_upload(
        &mut self,
    ) -> Result<watch::Receiver<ProcessingState>, SessionError> {
        let upload = self.staged.take().ok_or(SessionError::NothingStaged)?;

        let enhanced = self.enhancer.enhance(&upload).await?;
        self.pending_document = Some(enhanced);

        let mut machine = ProcessingMachine::new(ENHANCEMENT_STEPS.len());
        machine.stage();
        machine.confirm();

        let run = ProcessingRun::spawn(machine, self.step_interval);
        let updates = run.subscribe();
        self.run = Some(run);
        self.screen = Screen::Processing;
        info!("processing started for '{}'", upload.file_name);
        Ok(updates)
    }

    /// Latest state of the live run, if one exists.
    pub fn processing_state(&self) -> Option<ProcessingState> {
        self.run.as_ref().map(ProcessingRun::latest)
    }

    /// Folds a published processing state into the session. On `Complete`
    /// the held-back document becomes the authoritative one and the session
    /// lands on the preview tab of the workspace.
    pub fn absorb_processing_update(&mut self, state: &ProcessingState) {
        if self.screen != Screen::Processing {
            warn!("ignoring processing update outside the processing screen");
            return;
        }
        if !state.is_terminal() {
            return;
        }
        if let Some(doc) = self.pending_document.take() {
            self.document = doc;
        }
        self.run = None;
        self.screen = Screen::Workspace {
            tab: WorkspaceTab::Preview,
        };
        info!("processing complete; workspace opened");
    }

    // ── workspace ───────────────────────────────────────────────────────────

    pub fn select_tab(&mut self, tab: WorkspaceTab) {
        if let Screen::Workspace { .. } = self.screen {
            self.screen = Screen::Workspace { tab };
        }
    }

    /// Applies one edit and replaces the held document. Edits are accepted
    /// only in the workspace; anywhere else there is nothing being edited.
    pub fn edit(&mut self, command: &EditCommand) {
        if !matches!(self.screen, Screen::Workspace { .. }) {
            warn!("edit ignored outside the workspace");
            return;
        }
        self.document = apply(&self.document, command);
    }

    pub fn skill_draft(&self) -> &str {
        self.editor.skill_draft()
    }

    pub fn set_skill_draft(&mut self, text: impl Into<String>) {
        self.editor.set_skill_draft(text);
    }

    /// Commits the pending skill input. Returns whether a skill was added.
    pub fn submit_skill(&mut self) -> bool {
        match self.editor.submit_skill() {
            Some(command) => {
                self.edit(&command);
                true
            }
            None => false,
        }
    }

    /// JSON export of the current document (the prototype's stand-in for
    /// the download buttons).
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.document)
    }

    // ── navigation ──────────────────────────────────────────────────────────

    /// Navigates back to the home screen, the full reset. A live progress
    /// run is stopped deterministically before any state is cleared.
    pub fn go_back(&mut self) {
        if let Some(run) = self.run.take() {
            run.stop();
            info!("processing timer stopped on navigate-back");
        }
        self.staged = None;
        self.pending_document = None;
        self.document = CvDocument::default();
        self.editor = EditorController::new();
        self.screen = Screen::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::demo_document;
    use crate::enhance::ScriptedEnhancer;

    fn test_session() -> Session {
        let config = Config {
            step_interval_ms: 1000,
            rust_log: "info".to_string(),
        };
        Session::new(&config, Arc::new(ScriptedEnhancer))
    }

    async fn drive_to_workspace(session: &mut Session) {
        session
            .stage_upload("cv.pdf", Bytes::from_static(b"%PDF"))
            .unwrap();
        let mut rx = session.confirm_upload().await.unwrap();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            session.absorb_processing_update(&state);
            if state.is_terminal() {
                break;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_flow_reaches_workspace_with_enhanced_document() {
        let mut session = test_session();
        assert_eq!(session.screen(), Screen::Home);

        drive_to_workspace(&mut session).await;

        assert_eq!(
            session.screen(),
            Screen::Workspace {
                tab: WorkspaceTab::Preview
            }
        );
        assert_eq!(*session.document(), demo_document());
        assert!(session.processing_state().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_during_processing_stops_the_timer() {
        let mut session = test_session();
        session
            .stage_upload("cv.pdf", Bytes::from_static(b"%PDF"))
            .unwrap();
        let mut rx = session.confirm_upload().await.unwrap();
        assert_eq!(session.screen(), Screen::Processing);

        rx.changed().await.unwrap();
        session.go_back();

        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(*session.document(), CvDocument::default());
        assert!(session.processing_state().is_none());
        // the run was torn down; the channel closes without another value
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_confirm_without_staged_file() {
        let mut session = test_session();
        let err = session.confirm_upload().await.unwrap_err();
        assert_eq!(err, SessionError::NothingStaged);
    }

    #[tokio::test]
    async fn test_stage_upload_rejects_unknown_extension() {
        let mut session = test_session();
        let err = session
            .stage_upload("cv.txt", Bytes::new())
            .unwrap_err();
        assert!(matches!(err, SessionError::Upload(_)));
        assert!(session.staged().is_none());
    }

    #[tokio::test]
    async fn test_discard_clears_staged_file() {
        let mut session = test_session();
        session
            .stage_upload("cv.pdf", Bytes::from_static(b"%PDF"))
            .unwrap();
        assert!(session.staged().is_some());
        session.discard_upload();
        assert!(session.staged().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_edits_apply_only_in_workspace() {
        let mut session = test_session();
        let profile_edit = EditCommand::SetProfile {
            value: "New profile".to_string(),
        };

        session.edit(&profile_edit);
        assert_eq!(*session.document(), CvDocument::default());

        drive_to_workspace(&mut session).await;
        session.edit(&profile_edit);
        assert_eq!(session.document().profile, "New profile");
    }

    #[tokio::test(start_paused = true)]
    async fn test_skill_submit_through_session() {
        let mut session = test_session();
        drive_to_workspace(&mut session).await;

        session.set_skill_draft("   ");
        assert!(!session.submit_skill());
        assert_eq!(session.document().skills.len(), 8);
        assert_eq!(session.skill_draft(), "   ");

        session.set_skill_draft("  Go  ");
        assert!(session.submit_skill());
        assert_eq!(session.document().skills.last().unwrap(), "Go");
        assert_eq!(session.skill_draft(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_export_json_round_trips_the_document() {
        let mut session = test_session();
        drive_to_workspace(&mut session).await;

        let json = session.export_json().unwrap();
        let parsed: CvDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, *session.document());
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_from_workspace_resets_everything() {
        let mut session = test_session();
        drive_to_workspace(&mut session).await;
        session.set_skill_draft("pending");

        session.go_back();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(*session.document(), CvDocument::default());
        assert_eq!(session.skill_draft(), "");
    }
}
