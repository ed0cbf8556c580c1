//! Document upload flow.

use omnihelp_client::{DocumentUploadResponse, Error, HelpdeskProvider};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SelectedFile;
use crate::UPLOAD_TARGET;

/// Fallback banner when a failure carries no backend detail.
const UPLOAD_FALLBACK: &str = "Upload failed. Please try again.";

/// Banner describing the last upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Whether the upload was accepted by the backend.
    pub success: bool,

    /// Backend confirmation or failure message.
    pub message: String,

    /// Number of chunks the document was split into, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<u32>,
}

/// Outcome of an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The document was accepted and indexed.
    Completed,

    /// The upload failed; the staged file is retained for retry.
    Failed,

    /// The attempt was dropped: no staged file or an upload already in flight.
    Ignored,
}

/// Upload widget state: one staged file, one upload in flight at a time.
///
/// A successful upload clears the staged file so the widget returns to its
/// empty state; a failed upload keeps it so a retry needs no re-selection.
#[derive(Debug, Clone, Default)]
pub struct UploadFlow {
    selected: Option<SelectedFile>,
    uploading: bool,
    result: Option<UploadResult>,
}

impl UploadFlow {
    /// Creates an empty flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently staged file.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Returns true while an upload is in flight.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Banner for the last attempt, cleared when a new upload starts.
    pub fn last_result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    /// Returns true when an upload can start.
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.uploading
    }

    /// Stages a file, replacing any previous selection and banner.
    ///
    /// Only PDF names pass the selection filter; anything else is dropped
    /// without touching the current state. Selections are also dropped while
    /// an upload is in flight. Returns true when the file was staged.
    pub fn select(&mut self, file: SelectedFile) -> bool {
        if self.uploading {
            debug!(target: UPLOAD_TARGET, "Dropping selection while an upload is in flight");
            return false;
        }
        if !file.is_pdf() {
            debug!(target: UPLOAD_TARGET, name = file.name(), "Dropping non-PDF selection");
            return false;
        }

        debug!(target: UPLOAD_TARGET, name = file.name(), size = file.size(), "Staged file");
        self.selected = Some(file);
        self.result = None;
        true
    }

    /// Clears the staged file and banner. No-op while an upload is in flight.
    pub fn clear(&mut self) {
        if self.uploading {
            return;
        }
        self.selected = None;
        self.result = None;
    }

    /// Marks the flow busy and clears the previous banner.
    ///
    /// Returns the staged file to transmit, or `None` when nothing is staged
    /// or an upload is already in flight. The staged slot stays occupied so a
    /// failure can fall back to it.
    pub fn begin(&mut self) -> Option<SelectedFile> {
        if !self.can_upload() {
            return None;
        }

        self.uploading = true;
        self.result = None;
        self.selected.clone()
    }

    /// Applies a successful upload: banner set, staged file cleared.
    pub fn complete(&mut self, response: &DocumentUploadResponse) {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| format!("Successfully processed {}", response.filename));
        self.result = Some(UploadResult {
            success: true,
            message,
            chunks: Some(response.chunks),
        });
        self.uploading = false;
        self.selected = None;
    }

    /// Applies a failed upload: banner set, staged file retained for retry.
    pub fn fail(&mut self, error: &Error) {
        warn!(target: UPLOAD_TARGET, %error, "Document upload failed");
        self.result = Some(UploadResult {
            success: false,
            message: error
                .detail()
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| UPLOAD_FALLBACK.to_string()),
            chunks: None,
        });
        self.uploading = false;
    }

    /// Uploads the staged file and folds the result into the flow state.
    pub async fn upload<P>(&mut self, provider: &P) -> UploadOutcome
    where
        P: HelpdeskProvider + ?Sized,
    {
        let Some(file) = self.begin() else {
            return UploadOutcome::Ignored;
        };

        debug!(
            target: UPLOAD_TARGET,
            name = file.name(),
            size = file.size(),
            "Uploading document"
        );

        match provider
            .upload_document(file.name(), file.content().clone())
            .await
        {
            Ok(response) => {
                self.complete(&response);
                UploadOutcome::Completed
            }
            Err(error) => {
                self.fail(&error);
                UploadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use omnihelp_client::{MockFailure, MockHelpdesk, MockScript};

    use super::*;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, Bytes::from_static(b"%PDF-1.7 test"))
    }

    #[test]
    fn test_select_replaces_selection_and_banner() {
        let mut flow = UploadFlow::new();

        assert!(flow.select(pdf("first.pdf")));
        assert!(flow.select(pdf("second.pdf")));

        assert_eq!(flow.selected_file().map(SelectedFile::name), Some("second.pdf"));
        assert!(flow.last_result().is_none());
        assert!(flow.can_upload());
    }

    #[test]
    fn test_non_pdf_selection_is_dropped() {
        let mut flow = UploadFlow::new();

        assert!(!flow.select(SelectedFile::new("notes.txt", Bytes::new())));

        assert!(flow.selected_file().is_none());
        assert!(!flow.can_upload());
    }

    #[test]
    fn test_clear_resets_widget() {
        let mut flow = UploadFlow::new();
        flow.select(pdf("manual.pdf"));

        flow.clear();

        assert!(flow.selected_file().is_none());
        assert!(flow.last_result().is_none());
    }

    #[tokio::test]
    async fn test_upload_success_clears_staged_file() {
        let mock = MockHelpdesk::new(MockScript {
            chunks: 12,
            ..MockScript::default()
        });
        let mut flow = UploadFlow::new();
        flow.select(pdf("manual.pdf"));

        let outcome = flow.upload(&mock).await;

        assert_eq!(outcome, UploadOutcome::Completed);
        assert!(flow.selected_file().is_none());
        assert!(!flow.is_uploading());

        let result = flow.last_result().unwrap();
        assert!(result.success);
        assert_eq!(result.chunks, Some(12));
        assert_eq!(result.message, "Successfully processed 12 chunks");
    }

    #[tokio::test]
    async fn test_upload_failure_retains_staged_file() {
        let mock = MockHelpdesk::with_failure(413, "File too large");
        let mut flow = UploadFlow::new();
        flow.select(pdf("manual.pdf"));

        let outcome = flow.upload(&mock).await;

        assert_eq!(outcome, UploadOutcome::Failed);
        assert_eq!(flow.selected_file().map(SelectedFile::name), Some("manual.pdf"));
        assert!(!flow.is_uploading());

        let result = flow.last_result().unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "File too large");
        assert_eq!(result.chunks, None);
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_fallback() {
        let mock = MockHelpdesk::new(MockScript {
            failure: Some(MockFailure {
                status: 500,
                detail: None,
            }),
            ..MockScript::default()
        });
        let mut flow = UploadFlow::new();
        flow.select(pdf("manual.pdf"));

        flow.upload(&mock).await;

        let result = flow.last_result().unwrap();
        assert_eq!(result.message, "Upload failed. Please try again.");
    }

    #[tokio::test]
    async fn test_upload_without_selection_is_ignored() {
        let mock = MockHelpdesk::default();
        let mut flow = UploadFlow::new();

        let outcome = flow.upload(&mock).await;

        assert_eq!(outcome, UploadOutcome::Ignored);
        assert_eq!(mock.upload_calls(), 0);
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let failing = MockHelpdesk::with_failure(503, "Indexer busy");
        let healthy = MockHelpdesk::default();
        let mut flow = UploadFlow::new();
        flow.select(pdf("manual.pdf"));

        assert_eq!(flow.upload(&failing).await, UploadOutcome::Failed);
        assert_eq!(flow.upload(&healthy).await, UploadOutcome::Completed);

        assert!(flow.selected_file().is_none());
        assert!(flow.last_result().unwrap().success);
        assert_eq!(healthy.upload_calls(), 1);
    }
}
