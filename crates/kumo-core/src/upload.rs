//! Upload lifecycle state machine.
//!
//! [`UploadState`] is an explicitly-owned value driven by pure
//! transition methods, so the full lifecycle is testable without a
//! DOM or a network. The UI layer renders from it (submit enabled?
//! overlay visible?) and feeds user actions and request outcomes in.

use crate::response::UploadOutcome;

/// Phase of the single page-lifetime upload lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    /// No file selected; submit is disabled.
    #[default]
    Idle,
    /// A file is selected and submit is enabled.
    Armed,
    /// The upload request is outstanding; submit is disabled and the
    /// blocking overlay is visible.
    InFlight,
    /// Transient terminal state: the server accepted the upload.
    Succeeded,
    /// Transient terminal state: the upload failed; the selection is
    /// retained so the user can retry without re-picking.
    Failed,
}

/// The single candidate file for upload.
///
/// Holds metadata only -- the raw bytes travel separately through the
/// I/O layer. At most one selection exists at a time; picking a new
/// file replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename as reported by the picker or drop event.
    pub name: String,
    /// Content type guessed from the filename extension.
    pub mime_hint: &'static str,
}

impl SelectedFile {
    /// Create a selection from a filename, deriving the MIME hint.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mime_hint = mime_hint(&name);
        Self { name, mime_hint }
    }
}

/// Guess a MIME type from a filename extension.
///
/// Falls back to `application/octet-stream` for unknown extensions.
/// This is a hint for the multipart body and preview Blob only -- the
/// server derives its own authoritative content type.
#[must_use]
pub fn mime_hint(filename: &str) -> &'static str {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return "application/octet-stream";
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "py" => "text/x-python",
        "html" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        _ => "application/octet-stream",
    }
}

/// Explicitly-owned upload lifecycle state.
///
/// Invariants:
/// - `Armed` and `Failed` always have a selection; `Idle` never does.
/// - `begin_upload` is the only path into `InFlight`, and it refuses
///   unless the state is `Armed` -- submit with no file is a no-op.
/// - A failed upload keeps the selection; a successful one clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    phase: UploadPhase,
    selected: Option<SelectedFile>,
}

impl UploadState {
    /// Fresh state: nothing selected, submit disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            selected: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Whether the submit action is currently enabled.
    #[must_use]
    pub const fn submit_enabled(&self) -> bool {
        matches!(self.phase, UploadPhase::Armed)
    }

    /// Whether an upload request is outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        matches!(self.phase, UploadPhase::InFlight)
    }

    /// Install a new selection, replacing any previous one.
    ///
    /// Arms the submit action unless a request is already outstanding;
    /// an in-flight request is never aborted by a new selection (the
    /// disabled submit action is the only admission control), so the
    /// phase stays `InFlight` and the new file becomes the retry
    /// candidate if that request fails.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        if !matches!(self.phase, UploadPhase::InFlight) {
            self.phase = UploadPhase::Armed;
        }
    }

    /// Explicit form reset: drop the selection and return to `Idle`.
    ///
    /// Refused while a request is in flight.
    pub fn reset(&mut self) {
        if !matches!(self.phase, UploadPhase::InFlight) {
            self.selected = None;
            self.phase = UploadPhase::Idle;
        }
    }

    /// Attempt the `Armed -> InFlight` transition.
    ///
    /// Returns the file to upload, or `None` (and no transition) when
    /// nothing is armed -- activating submit with no selection or
    /// while a request is outstanding must cause no state change.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if !matches!(self.phase, UploadPhase::Armed) {
            return None;
        }
        let file = self.selected.clone()?;
        self.phase = UploadPhase::InFlight;
        Some(file)
    }

    /// Record the outcome of the in-flight request.
    ///
    /// Success clears the selection (the form resets); failure keeps
    /// it so the user can retry. Outcomes that arrive in any phase
    /// other than `InFlight` are ignored.
    pub fn settle(&mut self, outcome: &UploadOutcome) {
        if !matches!(self.phase, UploadPhase::InFlight) {
            return;
        }
        match outcome {
            UploadOutcome::Accepted { .. } => {
                self.selected = None;
                self.phase = UploadPhase::Succeeded;
            }
            UploadOutcome::Rejected { .. } => {
                self.phase = UploadPhase::Failed;
            }
        }
    }

    /// Leave a transient terminal state once its feedback has been
    /// dispatched: `Succeeded -> Idle`, `Failed -> Armed` (the
    /// selection is still present for retry). No-op elsewhere.
    pub fn acknowledge(&mut self) {
        self.phase = match self.phase {
            UploadPhase::Succeeded => UploadPhase::Idle,
            UploadPhase::Failed => {
                if self.selected.is_some() {
                    UploadPhase::Armed
                } else {
                    UploadPhase::Idle
                }
            }
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> UploadOutcome {
        UploadOutcome::Accepted {
            cid: "bafy123".into(),
        }
    }

    fn rejected() -> UploadOutcome {
        UploadOutcome::Rejected {
            message: "disk full".into(),
        }
    }

    #[test]
    fn submit_with_no_selection_is_a_no_op() {
        let mut state = UploadState::new();
        assert_eq!(state.begin_upload(), None);
        assert_eq!(state.phase(), UploadPhase::Idle);
        assert!(!state.submit_enabled());
    }

    #[test]
    fn selecting_a_file_arms_submit() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("photo.png"));
        assert_eq!(state.phase(), UploadPhase::Armed);
        assert!(state.submit_enabled());
    }

    #[test]
    fn selecting_replaces_the_previous_file() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("a.png"));
        state.select(SelectedFile::new("b.pdf"));
        let selected = state.selected().map(|f| f.name.as_str());
        assert_eq!(selected, Some("b.pdf"));
    }

    #[test]
    fn in_flight_is_entered_only_from_armed() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("photo.png"));
        let file = state.begin_upload();
        assert_eq!(file.map(|f| f.name), Some("photo.png".to_owned()));
        assert!(state.in_flight());

        // A second activation while in flight must not transition.
        assert_eq!(state.begin_upload(), None);
        assert!(state.in_flight());
    }

    #[test]
    fn success_clears_the_selection() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("photo.png"));
        let _ = state.begin_upload();
        state.settle(&accepted());
        assert_eq!(state.phase(), UploadPhase::Succeeded);
        assert_eq!(state.selected(), None);
        state.acknowledge();
        assert_eq!(state.phase(), UploadPhase::Idle);
    }

    #[test]
    fn failure_keeps_the_selection_for_retry() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("photo.png"));
        let _ = state.begin_upload();
        state.settle(&rejected());
        assert_eq!(state.phase(), UploadPhase::Failed);
        assert!(state.selected().is_some());

        state.acknowledge();
        assert_eq!(state.phase(), UploadPhase::Armed);
        assert!(state.submit_enabled(), "retry must be possible");
    }

    #[test]
    fn settle_never_leaves_the_machine_in_flight() {
        for outcome in [accepted(), rejected()] {
            let mut state = UploadState::new();
            state.select(SelectedFile::new("photo.png"));
            let _ = state.begin_upload();
            state.settle(&outcome);
            assert!(!state.in_flight(), "outcome {outcome:?} left state in flight");
        }
    }

    #[test]
    fn selection_during_in_flight_replaces_but_does_not_rearm() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("a.png"));
        let _ = state.begin_upload();

        state.select(SelectedFile::new("b.png"));
        assert!(state.in_flight(), "selection must not abort the request");
        assert!(!state.submit_enabled());

        // If that request fails, the new file is the retry candidate.
        state.settle(&rejected());
        state.acknowledge();
        assert_eq!(state.selected().map(|f| f.name.as_str()), Some("b.png"));
        assert!(state.submit_enabled());
    }

    #[test]
    fn reset_is_refused_while_in_flight() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("a.png"));
        let _ = state.begin_upload();
        state.reset();
        assert!(state.in_flight());

        state.settle(&rejected());
        state.acknowledge();
        state.reset();
        assert_eq!(state.phase(), UploadPhase::Idle);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn mime_hints_cover_the_preview_extension_groups() {
        assert_eq!(mime_hint("a.PNG"), "image/png");
        assert_eq!(mime_hint("a.jpeg"), "image/jpeg");
        assert_eq!(mime_hint("a.pdf"), "application/pdf");
        assert_eq!(mime_hint("a.csv"), "text/csv");
        assert_eq!(mime_hint("a.log"), "text/plain");
        assert_eq!(mime_hint("a.zip"), "application/octet-stream");
        assert_eq!(mime_hint("Makefile"), "application/octet-stream");
    }
}
