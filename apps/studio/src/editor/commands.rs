//! Typed edit events and the reducer that applies them.
//!
//! The editor never holds the authoritative document. It emits an
//! `EditCommand`, a single reducer computes the next document, and the
//! session replaces its held value wholesale. This keeps the document model
//! framework-agnostic and independently testable.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::document::{ops, CvDocument, EducationField, ExperienceField};
use crate::errors::EditError;

/// One user edit, as a typed event.
///
/// `SetHeaderField` carries the raw field name so the reducer can reject an
/// unrecognized key the same way it rejects a stale index; every other
/// field selector is closed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    SetHeaderField { field: String, value: String },
    SetProfile { value: String },
    AppendExperience,
    UpdateExperienceField {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    RemoveExperience { index: usize },
    AppendEducation,
    UpdateEducationField {
        index: usize,
        field: EducationField,
        value: String,
    },
    RemoveEducation { index: usize },
    AddSkill { text: String },
    RemoveSkill { index: usize },
}

/// Applies one command and returns the next document.
///
/// Total by design: a rejected edit (stale index, unknown header field)
/// returns the document unchanged. Indices are always derived from the
/// current render, so a mismatch is a stale-event race to absorb silently,
/// never a reason to crash the editing session.
pub fn apply(doc: &CvDocument, command: &EditCommand) -> CvDocument {
    match try_apply(doc, command) {
        Ok(next) => next,
        Err(err) => {
            warn!("edit rejected: {err}");
            doc.clone()
        }
    }
}

/// Fallible inner step, one arm per operation.
fn try_apply(doc: &CvDocument, command: &EditCommand) -> Result<CvDocument, EditError> {
    match command {
        EditCommand::SetHeaderField { field, value } => {
            ops::set_header_field_by_name(doc, field, value)
        }
        EditCommand::SetProfile { value } => Ok(ops::set_profile(doc, value)),
        EditCommand::AppendExperience => Ok(ops::append_experience(doc)),
        EditCommand::UpdateExperienceField {
            index,
            field,
            value,
        } => ops::update_experience_field(doc, *index, *field, value),
        EditCommand::RemoveExperience { index } => ops::remove_experience(doc, *index),
        EditCommand::AppendEducation => Ok(ops::append_education(doc)),
        EditCommand::UpdateEducationField {
            index,
            field,
            value,
        } => ops::update_education_field(doc, *index, *field, value),
        EditCommand::RemoveEducation { index } => ops::remove_education(doc, *index),
        EditCommand::AddSkill { text } => Ok(ops::add_skill(doc, text)),
        EditCommand::RemoveSkill { index } => ops::remove_skill(doc, *index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::demo_document;

    #[test]
    fn test_apply_set_header_field() {
        let doc = demo_document();
        let next = apply(
            &doc,
            &EditCommand::SetHeaderField {
                field: "name".to_string(),
                value: "Jane Doe".to_string(),
            },
        );
        assert_eq!(next.header.name, "Jane Doe");
        assert_eq!(next.header.title, doc.header.title);
    }

    #[test]
    fn test_apply_absorbs_unknown_header_field() {
        let doc = demo_document();
        let next = apply(
            &doc,
            &EditCommand::SetHeaderField {
                field: "website".to_string(),
                value: "example.com".to_string(),
            },
        );
        assert_eq!(next, doc);
    }

    #[test]
    fn test_apply_absorbs_stale_remove_index() {
        let doc = demo_document();
        let next = apply(&doc, &EditCommand::RemoveExperience { index: 99 });
        assert_eq!(next, doc);
    }

    #[test]
    fn test_apply_absorbs_stale_update_index() {
        let doc = demo_document();
        let next = apply(
            &doc,
            &EditCommand::UpdateEducationField {
                index: 5,
                field: EducationField::Year,
                value: "2024".to_string(),
            },
        );
        assert_eq!(next, doc);
    }

    #[test]
    fn test_apply_add_and_remove_skill() {
        let doc = demo_document();
        let next = apply(
            &doc,
            &EditCommand::AddSkill {
                text: "  Go  ".to_string(),
            },
        );
        assert_eq!(next.skills.last().unwrap(), "Go");

        let next = apply(&next, &EditCommand::RemoveSkill { index: 0 });
        assert!(!next.skills.contains(&"JavaScript".to_string()));
    }

    #[test]
    fn test_apply_never_mutates_input() {
        let doc = demo_document();
        let snapshot = doc.clone();
        let _ = apply(&doc, &EditCommand::AppendExperience);
        let _ = apply(&doc, &EditCommand::RemoveSkill { index: 0 });
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_command_serde_tag_shape() {
        let cmd = EditCommand::RemoveSkill { index: 2 };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["op"], "remove_skill");
        assert_eq!(json["index"], 2);
    }
}
