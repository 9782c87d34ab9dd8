//! Preview rendering: a pure, read-only projection of the document into a
//! formatted plaintext page.
//!
//! Given the same document the output is byte-for-byte identical, and the
//! input is never touched. Section headings are always rendered, including
//! over an empty section; a section never disappears from the page.
#![allow(dead_code)]

use std::fmt;

use crate::document::CvDocument;

const PROFILE_HEADING: &str = "Professional Profile";
const EXPERIENCE_HEADING: &str = "Professional Experience";
const EDUCATION_HEADING: &str = "Education";
const SKILLS_HEADING: &str = "Technical Skills";

/// The rendered page, one entry per visual line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPreview {
    lines: Vec<String>,
}

impl RenderedPreview {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for RenderedPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders the document as a formatted page.
pub fn render_preview(doc: &CvDocument) -> RenderedPreview {
    let mut lines = Vec::new();

    // Header block: name, title, then the contact line. Contact fields are
    // rendered as-is (empty fields stay empty) since the model enforces no
    // format on them.
    lines.push(doc.header.name.clone());
    lines.push(doc.header.title.clone());
    lines.push(
        [
            doc.header.email.as_str(),
            doc.header.phone.as_str(),
            doc.header.location.as_str(),
            doc.header.linkedin.as_str(),
        ]
        .join("  |  ")
        .trim_end()
        .to_string(),
    );

    push_heading(&mut lines, PROFILE_HEADING);
    lines.push(doc.profile.clone());

    push_heading(&mut lines, EXPERIENCE_HEADING);
    for (i, entry) in doc.experience.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}  [{}]", entry.title, entry.period));
        lines.push(entry.company.clone());
        lines.push(entry.description.clone());
    }

    push_heading(&mut lines, EDUCATION_HEADING);
    for (i, entry) in doc.education.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(entry.degree.clone());
        lines.push(entry.school.clone());
        lines.push(entry.year.clone());
    }

    push_heading(&mut lines, SKILLS_HEADING);
    lines.push(doc.skills.join(" · "));

    RenderedPreview { lines }
}

fn push_heading(lines: &mut Vec<String>, heading: &str) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.push("─".repeat(heading.chars().count()));
}
