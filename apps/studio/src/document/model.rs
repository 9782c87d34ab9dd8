//! Canonical CV document model.
//!
//! `CvDocument` is always a complete, renderable snapshot. There is no
//! partial or loading variant of the model; "still processing" is a screen
//! concern owned by the session and never leaks in here.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Identity and contact block at the top of the CV.
///
/// All fields are free-form text. Email, phone and LinkedIn are opaque
/// strings; format validation is intentionally not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

/// One entry in the experience section. Fields are always present, possibly
/// as empty strings; a partial record cannot be constructed through the ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// The full CV document.
///
/// Repeating sections are ordered by display position. Insertion order is
/// meaningful (typically reverse-chronological by user convention, not
/// enforced) and stable under edits to other entries. Duplicate skills are
/// permitted: skill entries are addressed by position, not by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDocument {
    pub header: Header,
    pub profile: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Field selectors
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of header fields addressable by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Linkedin,
}

impl HeaderField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "title" => Some(Self::Title),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "location" => Some(Self::Location),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Location => "location",
            Self::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Period,
    Description,
}

impl ExperienceField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "company" => Some(Self::Company),
            "period" => Some(Self::Period),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Period => "period",
            Self::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    School,
    Year,
}

impl EducationField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "degree" => Some(Self::Degree),
            "school" => Some(Self::School),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::School => "school",
            Self::Year => "year",
        }
    }
}

impl CvDocument {
    /// Reads one header field. Counterpart of `ops::set_header_field`.
    pub fn header_field(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::Name => &self.header.name,
            HeaderField::Title => &self.header.title,
            HeaderField::Email => &self.header.email,
            HeaderField::Phone => &self.header.phone,
            HeaderField::Location => &self.header.location,
            HeaderField::Linkedin => &self.header.linkedin,
        }
    }
}
