//! Enhancement backend seam.
//!
//! The progress screen fronts whatever produces the enhanced document. It is
//! behind a trait so the scripted prototype backend can be swapped for a real
//! extraction-plus-LLM pipeline without touching the session or the front
//! end. The session carries it as `Arc<dyn Enhancer>`.

use async_trait::async_trait;
use tracing::info;

use crate::document::{demo_document, CvDocument};
use crate::errors::EnhanceError;
use crate::upload::UploadedFile;

#[async_trait]
pub trait Enhancer: Send + Sync {
    /// Produces the enhanced document for an uploaded CV.
    async fn enhance(&self, upload: &UploadedFile) -> Result<CvDocument, EnhanceError>;
}

/// The only backend in scope: ignores the upload bytes entirely and returns
/// the canned demo document, which is exactly what the prototype does for
/// every file it is given.
pub struct ScriptedEnhancer;

#[async_trait]
impl Enhancer for ScriptedEnhancer {
    async fn enhance(&self, upload: &UploadedFile) -> Result<CvDocument, EnhanceError> {
        info!(
            "scripted enhancement for upload {} ('{}')",
            upload.id, upload.file_name
        );
        Ok(demo_document())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_scripted_enhancer_returns_demo_document() {
        let upload = UploadedFile::new("anything.pdf", Bytes::from_static(b"not a real pdf"))
            .expect("pdf extension is accepted");
        let doc = ScriptedEnhancer.enhance(&upload).await.unwrap();
        assert_eq!(doc, demo_document());
    }

    #[tokio::test]
    async fn test_scripted_enhancer_ignores_payload() {
        let a = UploadedFile::new("a.pdf", Bytes::new()).unwrap();
        let b = UploadedFile::new("b.docx", Bytes::from_static(b"other bytes")).unwrap();
        let enhancer = ScriptedEnhancer;
        assert_eq!(
            enhancer.enhance(&a).await.unwrap(),
            enhancer.enhance(&b).await.unwrap()
        );
    }
}
