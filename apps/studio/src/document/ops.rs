//! Pure document transformations.
//!
//! Every operation takes the current document by reference and returns a new
//! one; the input is never mutated in place. This keeps the editor trivial
//! (build a command, apply it, replace the held document) and makes the whole
//! model testable without any UI harness.
//!
//! # Rejection policy
//! - Index-addressed operations return `EditError::IndexOutOfRange` when the
//!   index does not resolve against the current sequence. They never panic.
//! - `set_header_field_by_name` returns `EditError::UnknownHeaderField` for a
//!   name outside the closed six-field set.
//! - An empty or whitespace-only skill submit is not an error: `add_skill`
//!   returns the document unchanged.

use crate::document::model::{
    CvDocument, EducationEntry, EducationField, ExperienceEntry, ExperienceField, HeaderField,
};
use crate::errors::{EditError, Section};

// ────────────────────────────────────────────────────────────────────────────
// Header and profile
// ────────────────────────────────────────────────────────────────────────────

/// Replaces one scalar header field.
pub fn set_header_field(doc: &CvDocument, field: HeaderField, value: &str) -> CvDocument {
    let mut next = doc.clone();
    let slot = match field {
        HeaderField::Name => &mut next.header.name,
        HeaderField::Title => &mut next.header.title,
        HeaderField::Email => &mut next.header.email,
        HeaderField::Phone => &mut next.header.phone,
        HeaderField::Location => &mut next.header.location,
        HeaderField::Linkedin => &mut next.header.linkedin,
    };
    *slot = value.to_string();
    next
}

/// Replaces one header field addressed by its wire name.
///
/// The field set is closed by construction everywhere commands are built
/// from `HeaderField`; this entry point exists for callers that carry the
/// raw field name and rejects anything outside the recognized six.
pub fn set_header_field_by_name(
    doc: &CvDocument,
    field: &str,
    value: &str,
) -> Result<CvDocument, EditError> {
    match HeaderField::parse(field) {
        Some(known) => Ok(set_header_field(doc, known, value)),
        None => Err(EditError::UnknownHeaderField(field.to_string())),
    }
}

pub fn set_profile(doc: &CvDocument, value: &str) -> CvDocument {
    let mut next = doc.clone();
    next.profile = value.to_string();
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Appends one all-empty experience record at the end of the section.
pub fn append_experience(doc: &CvDocument) -> CvDocument {
    let mut next = doc.clone();
    next.experience.push(ExperienceEntry::default());
    next
}

/// Replaces one field of the experience record at `index`. Entries other
/// than `index` are untouched and keep their positions.
pub fn update_experience_field(
    doc: &CvDocument,
    index: usize,
    field: ExperienceField,
    value: &str,
) -> Result<CvDocument, EditError> {
    let mut next = doc.clone();
    let len = next.experience.len();
    let entry = next
        .experience
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange {
            section: Section::Experience,
            index,
            len,
        })?;
    let slot = match field {
        ExperienceField::Title => &mut entry.title,
        ExperienceField::Company => &mut entry.company,
        ExperienceField::Period => &mut entry.period,
        ExperienceField::Description => &mut entry.description,
    };
    *slot = value.to_string();
    Ok(next)
}

/// Removes the experience record at `index`, preserving the relative order
/// of the remaining entries.
pub fn remove_experience(doc: &CvDocument, index: usize) -> Result<CvDocument, EditError> {
    let mut next = doc.clone();
    if index >= next.experience.len() {
        return Err(EditError::IndexOutOfRange {
            section: Section::Experience,
            index,
            len: next.experience.len(),
        });
    }
    next.experience.remove(index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn append_education(doc: &CvDocument) -> CvDocument {
    let mut next = doc.clone();
    next.education.push(EducationEntry::default());
    next
}

pub fn update_education_field(
    doc: &CvDocument,
    index: usize,
    field: EducationField,
    value: &str,
) -> Result<CvDocument, EditError> {
    let mut next = doc.clone();
    let len = next.education.len();
    let entry = next
        .education
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange {
            section: Section::Education,
            index,
            len,
        })?;
    let slot = match field {
        EducationField::Degree => &mut entry.degree,
        EducationField::School => &mut entry.school,
        EducationField::Year => &mut entry.year,
    };
    *slot = value.to_string();
    Ok(next)
}

pub fn remove_education(doc: &CvDocument, index: usize) -> Result<CvDocument, EditError> {
    let mut next = doc.clone();
    if index >= next.education.len() {
        return Err(EditError::IndexOutOfRange {
            section: Section::Education,
            index,
            len: next.education.len(),
        });
    }
    next.education.remove(index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Appends a skill after trimming surrounding whitespace. An empty result
/// means there is nothing to add and the document comes back unchanged
/// (ignore-empty-submit policy, deliberately not an error).
pub fn add_skill(doc: &CvDocument, text: &str) -> CvDocument {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return doc.clone();
    }
    let mut next = doc.clone();
    next.skills.push(trimmed.to_string());
    next
}

pub fn remove_skill(doc: &CvDocument, index: usize) -> Result<CvDocument, EditError> {
    let mut next = doc.clone();
    if index >= next.skills.len() {
        return Err(EditError::IndexOutOfRange {
            section: Section::Skills,
            index,
            len: next.skills.len(),
        });
    }
    next.skills.remove(index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
