mod config;
mod document;
mod editor;
mod enhance;
mod errors;
mod preview;
mod processing;
mod repl;
mod session;
mod upload;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use bytes::Bytes;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::editor::EditCommand;
use crate::enhance::ScriptedEnhancer;
use crate::processing::{ProcessingState, ENHANCEMENT_STEPS};
use crate::repl::{parse, Command, HELP_TEXT};
use crate::session::{Screen, Session, WorkspaceTab};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (everything is defaulted for the prototype)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Studio v{}", env!("CARGO_PKG_VERSION"));

    let session = Session::new(&config, Arc::new(ScriptedEnhancer));
    run_loop(session).await
}

/// The interactive session loop. Stdin commands and processing-run updates
/// are multiplexed, so the prompt stays responsive between ticks and 'back'
/// works mid-processing.
async fn run_loop(mut session: Session) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates: Option<watch::Receiver<ProcessingState>> = None;

    println!("CV Studio: upload a CV and let the AI enhance it.");
    println!("Type 'help' for commands.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => {
                        handle_command(&mut session, &mut updates, command).await;
                    }
                    Err(err) => println!("{err}"),
                }
            }
            state = next_update(&mut updates) => {
                match state {
                    Some(state) => {
                        show_progress(&state);
                        session.absorb_processing_update(&state);
                        if state.is_terminal() {
                            updates = None;
                            println!("\nProcessing complete! Your CV has been enhanced.");
                            println!("{}", session.preview());
                        }
                    }
                    None => updates = None,
                }
            }
        }
    }

    info!("session {} closed", session.id());
    Ok(())
}

/// Resolves with the next published processing state, or never if no run is
/// being watched. `None` means the channel closed without a new value.
async fn next_update(
    updates: &mut Option<watch::Receiver<ProcessingState>>,
) -> Option<ProcessingState> {
    match updates {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(rx.borrow_and_update().clone()),
            Err(_) => None,
        },
        None => std::future::pending().await,
    }
}

async fn handle_command(
    session: &mut Session,
    updates: &mut Option<watch::Receiver<ProcessingState>>,
    command: Command,
) {
    match command {
        Command::Upload { path } => {
            let file_name = Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            match tokio::fs::read(&path).await {
                Ok(bytes) => match session.stage_upload(file_name, Bytes::from(bytes)) {
                    Ok(()) => {
                        if let Some(staged) = session.staged() {
                            println!(
                                "Staged '{}' ({} MB, {}).",
                                staged.file_name,
                                staged.size_mb(),
                                staged.format.as_str()
                            );
                        }
                        println!("Type 'confirm' to process it with AI, 'discard' to drop it.");
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("cannot read '{path}': {err}"),
            }
        }
        Command::Discard => {
            session.discard_upload();
            println!("Staged file removed.");
        }
        Command::Confirm => match session.confirm_upload().await {
            Ok(rx) => {
                *updates = Some(rx);
                println!("AI is enhancing your CV...");
            }
            Err(err) => println!("{err}"),
        },
        Command::Status => show_status(session),
        Command::Preview => match session.screen() {
            Screen::Workspace { .. } => {
                session.select_tab(WorkspaceTab::Preview);
                println!("{}", session.preview());
            }
            _ => println!("Nothing to preview yet; upload a CV first."),
        },
        Command::Edit => match session.screen() {
            Screen::Workspace { .. } => {
                session.select_tab(WorkspaceTab::Edit);
                show_edit_view(session);
            }
            _ => println!("Nothing to edit yet; upload a CV first."),
        },
        Command::Header { field, value } => {
            session.edit(&EditCommand::SetHeaderField { field, value });
        }
        Command::Profile { value } => {
            session.edit(&EditCommand::SetProfile { value });
        }
        Command::ExperienceAdd => session.edit(&EditCommand::AppendExperience),
        Command::ExperienceSet {
            index,
            field,
            value,
        } => session.edit(&EditCommand::UpdateExperienceField {
            index,
            field,
            value,
        }),
        Command::ExperienceRemove { index } => {
            session.edit(&EditCommand::RemoveExperience { index });
        }
        Command::EducationAdd => session.edit(&EditCommand::AppendEducation),
        Command::EducationSet {
            index,
            field,
            value,
        } => session.edit(&EditCommand::UpdateEducationField {
            index,
            field,
            value,
        }),
        Command::EducationRemove { index } => {
            session.edit(&EditCommand::RemoveEducation { index });
        }
        Command::SkillDraft { text } => session.set_skill_draft(text),
        Command::SkillAdd { text } => {
            if let Some(text) = text {
                session.set_skill_draft(text);
            }
            if session.submit_skill() {
                println!("Skill added.");
            } else {
                println!("Nothing to add.");
            }
        }
        Command::SkillRemove { index } => {
            session.edit(&EditCommand::RemoveSkill { index });
        }
        Command::Export => match session.export_json() {
            Ok(json) => println!("{json}"),
            Err(err) => println!("export failed: {err}"),
        },
        Command::Back => {
            session.go_back();
            *updates = None;
            println!("Back at the home screen.");
        }
        Command::Help => println!("{HELP_TEXT}"),
        // Quit is handled by the loop
        Command::Quit => {}
    }
}

fn show_progress(state: &ProcessingState) {
    if let ProcessingState::Processing { step } = state {
        if let Some(info) = ENHANCEMENT_STEPS.get(*step) {
            println!(
                "[{}/{}] {}: {}",
                step + 1,
                ENHANCEMENT_STEPS.len(),
                info.name,
                info.description
            );
        }
    }
}

fn show_status(session: &Session) {
    match session.screen() {
        Screen::Home => match session.staged() {
            Some(file) => println!(
                "Home screen; '{}' ({} MB) staged and ready to confirm.",
                file.file_name,
                file.size_mb()
            ),
            None => println!("Home screen; no file staged."),
        },
        Screen::Processing => {
            println!("AI Processing Status");
            let current = match session.processing_state() {
                Some(ProcessingState::Processing { step }) => step,
                Some(ProcessingState::Complete) => ENHANCEMENT_STEPS.len(),
                _ => 0,
            };
            for (i, info) in ENHANCEMENT_STEPS.iter().enumerate() {
                let marker = if i < current {
                    "done"
                } else if i == current {
                    "running"
                } else {
                    "pending"
                };
                println!("  [{marker:>7}] {}: {}", info.name, info.description);
            }
        }
        Screen::Workspace { tab } => {
            let tab = match tab {
                WorkspaceTab::Preview => "preview",
                WorkspaceTab::Edit => "edit",
            };
            println!("Workspace open on the {tab} tab.");
        }
    }
}

fn show_edit_view(session: &Session) {
    let doc = session.document();
    println!("Header");
    println!("  name:     {}", doc.header.name);
    println!("  title:    {}", doc.header.title);
    println!("  email:    {}", doc.header.email);
    println!("  phone:    {}", doc.header.phone);
    println!("  location: {}", doc.header.location);
    println!("  linkedin: {}", doc.header.linkedin);
    println!("Profile");
    println!("  {}", doc.profile);
    println!("Experience");
    for (i, entry) in doc.experience.iter().enumerate() {
        println!(
            "  [{i}] {} @ {} ({})",
            entry.title, entry.company, entry.period
        );
    }
    println!("Education");
    for (i, entry) in doc.education.iter().enumerate() {
        println!("  [{i}] {}, {} ({})", entry.degree, entry.school, entry.year);
    }
    println!("Skills");
    for (i, skill) in doc.skills.iter().enumerate() {
        println!("  [{i}] {skill}");
    }
    println!("Skill draft: '{}'", session.skill_draft());
}
