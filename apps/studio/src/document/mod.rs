// Document model: the canonical CV shape and the pure operations the editor
// uses to transform it. No async, no I/O, no logging in here.

pub mod model;
pub mod ops;
pub mod seed;

// Re-export the public API consumed by other modules (editor, preview, session).
pub use model::{
    CvDocument, EducationEntry, EducationField, ExperienceEntry, ExperienceField, Header,
    HeaderField,
};
pub use seed::demo_document;
